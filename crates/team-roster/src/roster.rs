//! Roster loading
//!
//! A roster file holds an optional `site:` section and an ordered
//! `employees:` list. The format is chosen by file extension. Loading is
//! all-or-nothing: the first problem aborts with a [`RosterError`].

use crate::error::{RosterError, RosterResult};
use crate::record::{EmployeeRecord, RawEmployee};
use crate::site::SiteConfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Supported roster file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Yaml,
    Json,
}

impl RosterFormat {
    /// Supported file extensions (without dot)
    #[inline]
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Yaml => &["yaml", "yml"],
            Self::Json => &["json"],
        }
    }

    /// Pick the format for a path by its extension
    #[must_use]
    pub fn for_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        [Self::Yaml, Self::Json]
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RosterDocument {
    #[serde(default)]
    site: SiteConfig,
    employees: Vec<RawEmployee>,
}

/// Validated, ordered roster plus the site configuration it was loaded with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    site: SiteConfig,
    employees: Vec<EmployeeRecord>,
}

impl Roster {
    /// Build from already validated records
    ///
    /// # Errors
    /// Returns `RosterError::DuplicateSlug` or `RosterError::InvalidSite`.
    pub fn new(mut site: SiteConfig, employees: Vec<EmployeeRecord>) -> RosterResult<Self> {
        site.validate().map_err(RosterError::InvalidSite)?;
        check_unique_slugs(&employees)?;
        Ok(Self { site, employees })
    }

    /// Read and validate a roster file
    ///
    /// # Errors
    /// - `RosterError::UnsupportedFormat` for an unknown extension
    /// - `RosterError::Io` if the file cannot be read
    /// - any validation error from [`Roster::parse`]
    pub fn load(path: impl AsRef<Path>) -> RosterResult<Self> {
        let path = path.as_ref();
        let format = RosterFormat::for_path(path).ok_or_else(|| RosterError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_string(),
        })?;

        let content =
            std::fs::read_to_string(path).map_err(|e| RosterError::io_error(path, e))?;

        let roster = Self::parse(&content, format, &path.display().to_string())?;
        tracing::debug!(
            path = %path.display(),
            employees = roster.len(),
            "roster loaded"
        );
        Ok(roster)
    }

    /// Parse and validate roster text
    ///
    /// `source_name` only labels syntax errors.
    ///
    /// # Errors
    /// - `RosterError::Syntax` if the text does not match the schema
    /// - `RosterError::MissingField`, `InvalidSlug`, `InvalidField` per entry
    /// - `RosterError::DuplicateSlug` if two entries share a slug
    /// - `RosterError::InvalidSite` for a bad `site:` section
    pub fn parse(content: &str, format: RosterFormat, source_name: &str) -> RosterResult<Self> {
        let document: RosterDocument = match format {
            RosterFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| RosterError::syntax_error(source_name, e))?,
            RosterFormat::Json => serde_json::from_str(content)
                .map_err(|e| RosterError::syntax_error(source_name, e))?,
        };

        let employees = document
            .employees
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.validate(index))
            .collect::<RosterResult<Vec<_>>>()?;

        Self::new(document.site, employees)
    }

    /// Parse YAML roster text
    ///
    /// # Errors
    /// See [`Roster::parse`].
    pub fn from_yaml_str(content: &str) -> RosterResult<Self> {
        Self::parse(content, RosterFormat::Yaml, "<yaml>")
    }

    /// Parse JSON roster text
    ///
    /// # Errors
    /// See [`Roster::parse`].
    pub fn from_json_str(content: &str) -> RosterResult<Self> {
        Self::parse(content, RosterFormat::Json, "<json>")
    }

    /// Site configuration
    #[inline]
    #[must_use]
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// All records in roster order, hidden ones included
    #[inline]
    #[must_use]
    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    /// Records that get generated, in roster order
    pub fn visible(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.employees.iter().filter(|e| !e.hidden)
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Check if the roster has no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

fn check_unique_slugs(employees: &[EmployeeRecord]) -> RosterResult<()> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(employees.len());
    for (index, employee) in employees.iter().enumerate() {
        if let Some(first) = seen.insert(employee.slug.as_str(), index) {
            return Err(RosterError::DuplicateSlug {
                slug: employee.slug.to_string(),
                first,
                second: index,
            });
        }
    }
    Ok(())
}
