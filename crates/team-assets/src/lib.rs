//! Team Assets
//!
//! Turns the firm's team roster into the static files published on its
//! website and printed on business cards:
//!
//! - `assets/vcards/{slug}.vcf`: contact card
//! - `team/{slug}/index.html`: profile page, served as `/team/{slug}`
//! - `assets/images/qr/{slug}.png`: QR code linking to the profile page
//!
//! Hidden roster entries have these files removed instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use team_assets::Generator;
//! use team_roster::Roster;
//!
//! let roster = Roster::load("roster.yaml")?;
//! let report = Generator::new(".").run(&roster)?;
//! print!("{}", report.render_text());
//! ```

#![allow(missing_docs)]

pub mod error;
pub mod generator;
pub mod logging;
pub mod qr;
pub mod report;

pub use error::{GenerateError, GenerateResult, IoOp};
pub use generator::{Generator, RecordAction};
pub use logging::{init_tracing, LogConfig};
pub use qr::{ErrorCorrection, PngQrEncoder, QrEncoder, QrError, QrStyle};
pub use report::{DirectoryEntry, RecordOutcome, RunReport};
