//! Where each artifact lives within the site
//!
//! Both the page renderer (for the Save Contact link) and the orchestrator
//! (for writing and deleting files) take their paths from here, so a page
//! always links to the vCard that was written next to it.

use std::path::PathBuf;
use team_roster::Slug;

/// Fixed output layout, relative to the site root
///
/// ```text
/// assets/vcards/{slug}.vcf
/// team/{slug}/index.html
/// assets/images/qr/{slug}.png
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteLayout;

impl SiteLayout {
    /// Parent of the per-employee page directories
    pub const TEAM_DIR: &'static str = "team";
    /// vCard directory
    pub const VCARD_DIR: &'static str = "assets/vcards";
    /// QR image directory
    pub const QR_DIR: &'static str = "assets/images/qr";
    /// Team photo directory (never read, only linked)
    pub const PHOTO_DIR: &'static str = "assets/images/team";
    /// Index document inside a page directory
    pub const PAGE_FILE: &'static str = "index.html";

    /// Directories that must exist before any record is processed
    #[inline]
    #[must_use]
    pub fn output_dirs() -> [PathBuf; 3] {
        [
            to_path(Self::TEAM_DIR),
            to_path(Self::VCARD_DIR),
            to_path(Self::QR_DIR),
        ]
    }

    /// `assets/vcards/{slug}.vcf`
    #[must_use]
    pub fn vcard_path(slug: &Slug) -> PathBuf {
        to_path(Self::VCARD_DIR).join(format!("{slug}.vcf"))
    }

    /// `team/{slug}`
    #[must_use]
    pub fn page_dir(slug: &Slug) -> PathBuf {
        to_path(Self::TEAM_DIR).join(slug.as_str())
    }

    /// `team/{slug}/index.html`
    #[must_use]
    pub fn page_path(slug: &Slug) -> PathBuf {
        Self::page_dir(slug).join(Self::PAGE_FILE)
    }

    /// `assets/images/qr/{slug}.png`
    #[must_use]
    pub fn qr_path(slug: &Slug) -> PathBuf {
        to_path(Self::QR_DIR).join(format!("{slug}.png"))
    }

    /// Relative prefix from a page directory back to the site root
    ///
    /// One `../` per segment of `team/{slug}`.
    #[must_use]
    pub fn page_root_prefix() -> String {
        let depth = Self::TEAM_DIR.split('/').count() + 1;
        "../".repeat(depth)
    }

    /// Site-root-relative link as seen from a profile page
    #[must_use]
    pub fn href_from_page(target: &str) -> String {
        format!("{}{target}", Self::page_root_prefix())
    }

    /// Save Contact link target as seen from the profile page
    #[must_use]
    pub fn vcard_href(slug: &Slug) -> String {
        Self::href_from_page(&format!("{}/{slug}.vcf", Self::VCARD_DIR))
    }

    /// Photo link target as seen from the profile page
    #[must_use]
    pub fn photo_href(photo: &str) -> String {
        Self::href_from_page(&format!("{}/{photo}", Self::PHOTO_DIR))
    }
}

fn to_path(relative: &str) -> PathBuf {
    relative.split('/').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn slug() -> Slug {
        Slug::parse("jane-doe").unwrap()
    }

    #[test]
    fn artifact_paths() {
        assert_eq!(
            SiteLayout::vcard_path(&slug()),
            Path::new("assets").join("vcards").join("jane-doe.vcf")
        );
        assert_eq!(
            SiteLayout::page_path(&slug()),
            Path::new("team").join("jane-doe").join("index.html")
        );
        assert_eq!(
            SiteLayout::qr_path(&slug()),
            Path::new("assets").join("images").join("qr").join("jane-doe.png")
        );
    }

    #[test]
    fn vcard_link_resolves_from_page_dir() {
        assert_eq!(SiteLayout::page_root_prefix(), "../../");
        assert_eq!(
            SiteLayout::vcard_href(&slug()),
            "../../assets/vcards/jane-doe.vcf"
        );

        // team/jane-doe + ../../assets/vcards/jane-doe.vcf == assets/vcards/jane-doe.vcf
        let mut resolved = SiteLayout::page_dir(&slug());
        for segment in SiteLayout::vcard_href(&slug()).split('/') {
            if segment == ".." {
                resolved.pop();
            } else {
                resolved.push(segment);
            }
        }
        assert_eq!(resolved, SiteLayout::vcard_path(&slug()));
    }

    #[test]
    fn photo_link() {
        assert_eq!(
            SiteLayout::photo_href("jane.jpeg"),
            "../../assets/images/team/jane.jpeg"
        );
    }
}
