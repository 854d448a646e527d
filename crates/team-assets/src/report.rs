//! Run summary
//!
//! Collected while the generator walks the roster and printed once at the
//! end for whoever ran the tool.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// What happened to one roster entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// All three artifacts written (paths relative to the site root)
    Generated {
        name: String,
        slug: String,
        vcard: PathBuf,
        page: PathBuf,
        qr: PathBuf,
    },
    /// Hidden entry reconciled; `removed` lists what actually existed
    Hidden {
        name: String,
        slug: String,
        removed: Vec<PathBuf>,
    },
}

impl RecordOutcome {
    /// Entry slug
    #[inline]
    #[must_use]
    pub fn slug(&self) -> &str {
        match self {
            Self::Generated { slug, .. } | Self::Hidden { slug, .. } => slug,
        }
    }
}

/// Published profile, for the closing URL listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub first_name: String,
    pub url: String,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    outcomes: Vec<RecordOutcome>,
    directory: Vec<DirectoryEntry>,
}

impl RunReport {
    /// Create empty report
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, outcome: RecordOutcome) {
        self.outcomes.push(outcome);
    }

    pub(crate) fn list(&mut self, first_name: impl Into<String>, url: impl Into<String>) {
        self.directory.push(DirectoryEntry {
            first_name: first_name.into(),
            url: url.into(),
        });
    }

    /// Per-record outcomes in roster order
    #[inline]
    #[must_use]
    pub fn outcomes(&self) -> &[RecordOutcome] {
        &self.outcomes
    }

    /// Published profiles in roster order
    #[inline]
    #[must_use]
    pub fn directory(&self) -> &[DirectoryEntry] {
        &self.directory
    }

    /// Number of entries whose artifacts were written
    #[must_use]
    pub fn generated_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RecordOutcome::Generated { .. }))
            .count()
    }

    /// Number of hidden entries reconciled
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.outcomes.len() - self.generated_count()
    }

    /// Human-readable summary, as printed by the command-line tool
    #[must_use]
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl Display for RunReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            match outcome {
                RecordOutcome::Generated {
                    name,
                    vcard,
                    page,
                    qr,
                    ..
                } => {
                    writeln!(f, "  {name}")?;
                    writeln!(f, "    vCard: {}", vcard.display())?;
                    writeln!(f, "    Page:  {}", page.display())?;
                    writeln!(f, "    QR:    {}", qr.display())?;
                }
                RecordOutcome::Hidden { name, removed, .. } => {
                    writeln!(f, "  Skipping {name} (hidden)")?;
                    for path in removed {
                        writeln!(f, "    Removed: {}", path.display())?;
                    }
                }
            }
            writeln!(f)?;
        }

        writeln!(
            f,
            "Done! {} generated, {} hidden.",
            self.generated_count(),
            self.hidden_count()
        )?;
        writeln!(f)?;
        writeln!(f, "URLs:")?;
        for entry in &self.directory {
            writeln!(f, "  {:<10} {}", entry.first_name, entry.url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn generated(slug: &str, name: &str) -> RecordOutcome {
        RecordOutcome::Generated {
            name: name.to_string(),
            slug: slug.to_string(),
            vcard: Path::new("assets/vcards").join(format!("{slug}.vcf")),
            page: Path::new("team").join(slug).join("index.html"),
            qr: Path::new("assets/images/qr").join(format!("{slug}.png")),
        }
    }

    #[test]
    fn counts() {
        let mut report = RunReport::new();
        report.push(generated("drew-jenkins", "Drew Jenkins"));
        report.push(RecordOutcome::Hidden {
            name: "Amber Jenkins".to_string(),
            slug: "amber-jenkins".to_string(),
            removed: vec![],
        });
        assert_eq!(report.generated_count(), 1);
        assert_eq!(report.hidden_count(), 1);
        assert_eq!(report.outcomes()[1].slug(), "amber-jenkins");
    }

    #[test]
    fn text_lists_paths_then_urls() {
        let mut report = RunReport::new();
        report.push(generated("drew-jenkins", "Drew Jenkins"));
        report.push(RecordOutcome::Hidden {
            name: "Amber Jenkins".to_string(),
            slug: "amber-jenkins".to_string(),
            removed: vec![PathBuf::from("assets/vcards/amber-jenkins.vcf")],
        });
        report.list("Drew", "https://maplebridgelaw.com/team/drew-jenkins");

        let text = report.render_text();
        assert!(text.starts_with("  Drew Jenkins\n    vCard: "));
        assert!(text.contains("  Skipping Amber Jenkins (hidden)\n    Removed: assets/vcards/amber-jenkins.vcf\n"));
        assert!(text.contains("Done! 1 generated, 1 hidden.\n"));
        assert!(text.ends_with(
            "URLs:\n  Drew       https://maplebridgelaw.com/team/drew-jenkins\n"
        ));
    }

    #[test]
    fn empty_report_still_has_footer() {
        let report = RunReport::new();
        assert_eq!(report.render_text(), "Done! 0 generated, 0 hidden.\n\nURLs:\n");
        assert_eq!(format!("{report}"), report.render_text());
    }
}
