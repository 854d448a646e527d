//! Artifact orchestration
//!
//! Walks the roster in order. Visible entries get their vCard, profile page
//! and QR code (re)written; hidden entries get whatever was generated for
//! them earlier deleted. The first failure stops the run.

use crate::error::{GenerateError, GenerateResult, IoOp};
use crate::qr::{PngQrEncoder, QrEncoder, QrStyle};
use crate::report::{RecordOutcome, RunReport};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use team_render::{render_page, render_vcard, SiteLayout};
use team_roster::{EmployeeRecord, Roster, SiteConfig};

/// Processing path for one roster entry
///
/// Chosen once per entry from its `hidden` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordAction {
    /// Write all three artifacts
    Generate,
    /// Delete previously written artifacts
    ReconcileHidden,
}

impl RecordAction {
    /// Action for an entry
    #[inline]
    #[must_use]
    pub fn for_record(employee: &EmployeeRecord) -> Self {
        if employee.hidden {
            Self::ReconcileHidden
        } else {
            Self::Generate
        }
    }
}

/// Writes team artifacts under a site root
#[derive(Debug, Clone)]
pub struct Generator<Q = PngQrEncoder> {
    root: PathBuf,
    encoder: Q,
    style: QrStyle,
}

impl Generator<PngQrEncoder> {
    /// Generator writing PNG QR codes under `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_encoder(root, PngQrEncoder::new())
    }
}

impl<Q: QrEncoder> Generator<Q> {
    /// Generator with a custom QR backend
    #[must_use]
    pub fn with_encoder(root: impl Into<PathBuf>, encoder: Q) -> Self {
        Self {
            root: root.into(),
            encoder,
            style: QrStyle::default(),
        }
    }

    /// With QR style
    #[inline]
    #[must_use]
    pub fn with_style(mut self, style: QrStyle) -> Self {
        self.style = style;
        self
    }

    /// Process every roster entry in order
    ///
    /// # Errors
    /// Returns the first [`GenerateError`]; later entries are not processed.
    pub fn run(&self, roster: &Roster) -> GenerateResult<RunReport> {
        self.prepare_dirs()?;

        let site = roster.site();
        let mut report = RunReport::new();
        for employee in roster.employees() {
            let outcome = match RecordAction::for_record(employee) {
                RecordAction::Generate => self.generate(employee, site)?,
                RecordAction::ReconcileHidden => self.reconcile_hidden(employee)?,
            };
            report.push(outcome);
        }

        for employee in roster.visible() {
            report.list(
                employee.first_name.clone(),
                site.profile_url(employee.slug.as_str()),
            );
        }

        tracing::info!(
            generated = report.generated_count(),
            hidden = report.hidden_count(),
            root = %self.root.display(),
            "team assets up to date"
        );
        Ok(report)
    }

    /// Create the output directories if missing
    ///
    /// # Errors
    /// `GenerateError::Io` if a directory cannot be created.
    pub fn prepare_dirs(&self) -> GenerateResult<()> {
        for dir in SiteLayout::output_dirs() {
            let path = self.root.join(dir);
            fs::create_dir_all(&path).map_err(|e| GenerateError::io(IoOp::CreateDir, &path, e))?;
        }
        Ok(())
    }

    /// Write the vCard, profile page and QR code for one entry
    ///
    /// Existing files are overwritten.
    ///
    /// # Errors
    /// `GenerateError::Io` for filesystem failures, `GenerateError::Qr` if
    /// the QR image cannot be produced.
    pub fn generate(
        &self,
        employee: &EmployeeRecord,
        site: &SiteConfig,
    ) -> GenerateResult<RecordOutcome> {
        let slug = &employee.slug;

        let vcard = SiteLayout::vcard_path(slug);
        self.write(&vcard, &render_vcard(employee, site))?;

        let page_dir = self.root.join(SiteLayout::page_dir(slug));
        fs::create_dir_all(&page_dir)
            .map_err(|e| GenerateError::io(IoOp::CreateDir, &page_dir, e))?;
        let page = SiteLayout::page_path(slug);
        self.write(&page, &render_page(employee, site))?;

        let qr = SiteLayout::qr_path(slug);
        let url = site.profile_url(slug.as_str());
        self.encoder
            .encode(&url, &self.style, &self.root.join(&qr))
            .map_err(|source| GenerateError::Qr {
                slug: slug.to_string(),
                source,
            })?;

        tracing::info!(
            %slug,
            vcard = %vcard.display(),
            page = %page.display(),
            qr = %qr.display(),
            "generated"
        );

        Ok(RecordOutcome::Generated {
            name: employee.full_name(),
            slug: slug.to_string(),
            vcard,
            page,
            qr,
        })
    }

    /// Delete whatever was generated for a hidden entry
    ///
    /// Missing files are skipped. The page directory is removed only once
    /// it is empty.
    ///
    /// # Errors
    /// `GenerateError::Io` if an existing file or directory cannot be
    /// removed.
    pub fn reconcile_hidden(&self, employee: &EmployeeRecord) -> GenerateResult<RecordOutcome> {
        let slug = &employee.slug;
        let mut removed = Vec::new();

        for path in [
            SiteLayout::vcard_path(slug),
            SiteLayout::page_path(slug),
            SiteLayout::qr_path(slug),
        ] {
            if self.remove_file(&path)? {
                removed.push(path);
            }
        }

        let page_dir = SiteLayout::page_dir(slug);
        if self.remove_dir_if_empty(&page_dir)? {
            removed.push(page_dir);
        }

        tracing::info!(%slug, removed = removed.len(), "hidden entry reconciled");

        Ok(RecordOutcome::Hidden {
            name: employee.full_name(),
            slug: slug.to_string(),
            removed,
        })
    }

    fn write(&self, relative: &Path, content: &str) -> GenerateResult<()> {
        let path = self.root.join(relative);
        fs::write(&path, content).map_err(|e| GenerateError::io(IoOp::Write, &path, e))
    }

    /// Returns whether a file was removed
    fn remove_file(&self, relative: &Path) -> GenerateResult<bool> {
        let path = self.root.join(relative);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(path = %relative.display(), "removed");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %relative.display(), "already absent");
                Ok(false)
            }
            Err(e) => Err(GenerateError::io(IoOp::Remove, &path, e)),
        }
    }

    /// Returns whether the directory was removed
    fn remove_dir_if_empty(&self, relative: &Path) -> GenerateResult<bool> {
        let path = self.root.join(relative);
        let mut entries = match fs::read_dir(&path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(GenerateError::io(IoOp::ReadDir, &path, e)),
        };

        if entries.next().is_some() {
            tracing::warn!(
                path = %relative.display(),
                "page directory still has other files, leaving it in place"
            );
            return Ok(false);
        }

        fs::remove_dir(&path).map_err(|e| GenerateError::io(IoOp::Remove, &path, e))?;
        tracing::info!(path = %relative.display(), "removed");
        Ok(true)
    }
}
