//! Testing utilities for the team assets workspace
//!
//! Shared fixtures, a throwaway site root, and a QR encoder that records
//! what it was asked to encode.

#![allow(missing_docs)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use team_assets::{QrEncoder, QrError, QrStyle};
use team_render::SiteLayout;
use team_roster::{EmployeeRecord, Roster, SiteConfig, Slug};

pub fn slug(value: &str) -> Slug {
    Slug::parse(value).unwrap()
}

/// Jane Doe: no phone, no bio, visible
pub fn jane_doe() -> EmployeeRecord {
    EmployeeRecord::new(slug("jane-doe"), "Jane", "Doe", "jane@example.com", "jane.jpeg")
        .with_role("Attorney – GA")
        .with_title("Attorney")
}

/// Record with every optional field filled in
pub fn full_record() -> EmployeeRecord {
    EmployeeRecord::new(
        slug("drew-jenkins"),
        "Drew",
        "Jenkins",
        "drew@maplebridgelaw.com",
        "drew.jpeg",
    )
    .with_role("Attorney – AL, GA")
    .with_title("Attorney")
    .with_phone("678-572-1954")
    .with_bio("Drew handles residential &amp; commercial closings.")
}

pub fn hidden_record() -> EmployeeRecord {
    EmployeeRecord::new(
        slug("amber-jenkins"),
        "Amber",
        "Jenkins",
        "amber@maplebridgelaw.com",
        "amber-placeholder.svg",
    )
    .with_title("Foreign Law Consultant")
    .hidden()
}

/// Roster with the default site config
pub fn roster_of(employees: Vec<EmployeeRecord>) -> Roster {
    Roster::new(SiteConfig::default(), employees).unwrap()
}

/// Drew (full), Jane (minimal), Amber (hidden)
pub fn sample_roster() -> Roster {
    roster_of(vec![full_record(), jane_doe(), hidden_record()])
}

/// Temporary site root with layout-aware helpers
pub struct TestSite {
    dir: tempfile::TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn vcard(&self, slug: &str) -> PathBuf {
        self.root().join(SiteLayout::vcard_path(&self::slug(slug)))
    }

    pub fn page_dir(&self, slug: &str) -> PathBuf {
        self.root().join(SiteLayout::page_dir(&self::slug(slug)))
    }

    pub fn page(&self, slug: &str) -> PathBuf {
        self.root().join(SiteLayout::page_path(&self::slug(slug)))
    }

    pub fn qr(&self, slug: &str) -> PathBuf {
        self.root().join(SiteLayout::qr_path(&self::slug(slug)))
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    /// Every file under the root with its bytes, sorted by path
    pub fn snapshot(&self) -> Vec<(PathBuf, Vec<u8>)> {
        let mut files = Vec::new();
        collect_files(self.root(), self.root(), &mut files);
        files.sort();
        files
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<(PathBuf, Vec<u8>)>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            let relative = path.strip_prefix(root).unwrap().to_path_buf();
            out.push((relative, fs::read(&path).unwrap()));
        }
    }
}

/// QR encoder that writes the encoded text instead of an image
///
/// Lets tests check exactly which URL each QR file would carry.
#[derive(Debug, Default)]
pub struct RecordingQrEncoder {
    calls: RefCell<Vec<(String, PathBuf)>>,
}

impl RecordingQrEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(data, output)` pairs in call order
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl QrEncoder for RecordingQrEncoder {
    fn encode(&self, data: &str, _style: &QrStyle, output: &Path) -> Result<(), QrError> {
        fs::write(output, data).map_err(|e| QrError::Image(e.into()))?;
        self.calls
            .borrow_mut()
            .push((data.to_string(), output.to_path_buf()));
        Ok(())
    }
}

/// QR encoder that always fails
#[derive(Debug, Default)]
pub struct FailingQrEncoder;

impl QrEncoder for FailingQrEncoder {
    fn encode(&self, _data: &str, _style: &QrStyle, _output: &Path) -> Result<(), QrError> {
        Err(QrError::Encode("data too long".to_string()))
    }
}
