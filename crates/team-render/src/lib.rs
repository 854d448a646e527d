//! Team asset rendering
//!
//! Pure renderers from an [`EmployeeRecord`](team_roster::EmployeeRecord) to
//! the text artifacts published for it, plus the [`SiteLayout`] that says
//! where each artifact lives.
//!
//! - [`render_vcard`]: vCard 3.0 contact card
//! - [`render_page`]: HTML profile page
//!
//! Nothing here touches the filesystem.

#![allow(missing_docs)]

mod html;
mod layout;
mod vcard;

pub use html::{render_page, ProfilePage};
pub use layout::SiteLayout;
pub use vcard::{render_vcard, CRLF};
