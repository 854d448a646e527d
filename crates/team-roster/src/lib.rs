//! Team roster
//!
//! The hand-maintained list of employees published on the firm's website,
//! and the site-wide details every generated asset shares.
//!
//! # Core Concepts
//!
//! - [`Roster`]: ordered, validated employee list plus [`SiteConfig`]
//! - [`EmployeeRecord`]: one checked entry
//! - [`Slug`]: URL-safe identifier naming each employee's artifacts
//!
//! # Example
//!
//! ```rust,ignore
//! use team_roster::Roster;
//!
//! let roster = Roster::load("roster.yaml")?;
//! for employee in roster.visible() {
//!     println!("{}", roster.site().profile_url(employee.slug.as_str()));
//! }
//! ```

#![allow(missing_docs)]

mod error;
mod record;
mod roster;
mod site;
mod slug;

pub use error::{RosterError, RosterResult};
pub use record::{EmployeeRecord, RawEmployee};
pub use roster::{Roster, RosterFormat};
pub use site::{Address, SiteConfig, SocialLink, SocialNetwork};
pub use slug::{Slug, SlugError};
