//! Employee records
//!
//! [`RawEmployee`] mirrors one entry of the roster file as written by hand;
//! [`EmployeeRecord`] is the checked form every renderer consumes.

use crate::error::RosterError;
use crate::slug::Slug;
use serde::Deserialize;

/// One validated roster entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub slug: Slug,
    pub first_name: String,
    pub last_name: String,
    /// Display label, e.g. "Attorney – AL, GA"
    pub role: String,
    /// Short title for structured contact fields
    pub title: String,
    pub email: String,
    /// Direct line, if any
    pub phone: Option<String>,
    /// Filename within the team photo collection
    pub photo: String,
    /// Biography markup, if any
    pub bio: Option<String>,
    pub hidden: bool,
}

impl EmployeeRecord {
    /// Minimal visible record with no phone and no biography
    #[must_use]
    pub fn new(
        slug: Slug,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        photo: impl Into<String>,
    ) -> Self {
        Self {
            slug,
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: String::new(),
            title: String::new(),
            email: email.into(),
            phone: None,
            photo: photo.into(),
            bio: None,
            hidden: false,
        }
    }

    /// With display role
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// With structured title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// With direct phone line
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = non_blank(Some(phone.into()));
        self
    }

    /// With biography
    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = non_blank(Some(bio.into()));
        self
    }

    /// Mark hidden
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// "First Last"
    #[inline]
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Roster entry as it appears in the file
///
/// Required fields are optional here so that a missing value can be
/// reported by name and position rather than as a parser error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawEmployee {
    pub slug: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub title: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}

impl RawEmployee {
    /// Check required fields and formats
    ///
    /// `index` is the zero-based position in the roster, used in errors.
    ///
    /// # Errors
    /// - `RosterError::MissingField` for an absent or blank required field
    /// - `RosterError::InvalidSlug` for a malformed slug
    /// - `RosterError::InvalidField` for a malformed email, phone or photo
    pub fn validate(self, index: usize) -> Result<EmployeeRecord, RosterError> {
        let slug_raw = required(self.slug, index, "slug")?;
        let slug = Slug::parse(&slug_raw).map_err(|source| RosterError::InvalidSlug {
            index,
            source,
        })?;

        let first_name = required(self.first_name, index, "firstName")?;
        let last_name = required(self.last_name, index, "lastName")?;
        let email = required(self.email, index, "email")?;
        let photo = required(self.photo, index, "photo")?;
        let phone = non_blank(self.phone);
        let bio = non_blank(self.bio);

        let invalid = |field: &'static str, reason: String| RosterError::InvalidField {
            slug: slug.to_string(),
            field,
            reason,
        };

        check_email(&email).map_err(|reason| invalid("email", reason))?;
        if let Some(phone) = &phone {
            check_phone(phone).map_err(|reason| invalid("phone", reason))?;
        }
        check_photo(&photo).map_err(|reason| invalid("photo", reason))?;

        Ok(EmployeeRecord {
            slug,
            first_name,
            last_name,
            role: self.role.trim().to_string(),
            title: self.title.trim().to_string(),
            email,
            phone,
            photo,
            bio,
            hidden: self.hidden,
        })
    }
}

fn required(
    value: Option<String>,
    index: usize,
    field: &'static str,
) -> Result<String, RosterError> {
    non_blank(value).ok_or(RosterError::MissingField { index, field })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_email(email: &str) -> Result<(), String> {
    if email.chars().any(char::is_whitespace) {
        return Err(format!("'{email}' contains whitespace"));
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(format!("'{email}' has no '@'"));
    };
    if domain.contains('@') {
        return Err(format!("'{email}' has more than one '@'"));
    }
    if local.is_empty() || !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(format!("'{email}' is not a mailbox address"));
    }
    Ok(())
}

fn check_phone(phone: &str) -> Result<(), String> {
    if let Some(c) = phone
        .chars()
        .find(|c| !(c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.')))
    {
        return Err(format!("'{phone}' contains {c:?}"));
    }
    if !phone.chars().any(|c| c.is_ascii_digit()) {
        return Err(format!("'{phone}' has no digits"));
    }
    Ok(())
}

fn check_photo(photo: &str) -> Result<(), String> {
    if let Some(c) = photo
        .chars()
        .find(|c| c.is_control() || c.is_whitespace())
    {
        return Err(format!("'{}' contains {c:?}", photo.escape_debug()));
    }
    if photo.contains(['/', '\\']) || photo == "." || photo == ".." {
        return Err(format!("'{photo}' must be a bare filename"));
    }
    Ok(())
}
