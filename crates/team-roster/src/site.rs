//! Site-wide constants shared by every generated page and card
//!
//! Defaults are the firm's published details. A roster file may override any
//! of them under its `site:` key.

use serde::Deserialize;

/// Firm-wide configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Legal name, used for vCard `ORG` and page descriptions
    pub firm_name: String,
    /// Short name, used in page titles and image alt text
    pub brand_name: String,
    /// Public origin of the site, without trailing slash
    pub base_url: String,
    /// Shared office line shown on every page and card
    pub office_phone: String,
    /// General enquiries mailbox
    pub info_email: String,
    /// Year printed in the footer copyright line
    pub copyright_year: u16,
    /// Office address
    pub address: Address,
    /// Footer social links, in display order
    pub social: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            firm_name: "Maple Bridge Law LLC".to_string(),
            brand_name: "Maple Bridge Law".to_string(),
            base_url: "https://maplebridgelaw.com".to_string(),
            office_phone: "678-460-8885".to_string(),
            info_email: "info@maplebridgelaw.com".to_string(),
            copyright_year: 2025,
            address: Address::default(),
            social: vec![
                SocialLink {
                    network: SocialNetwork::LinkedIn,
                    url: "https://www.linkedin.com/company/maple-bridge-law-llc".to_string(),
                },
                SocialLink {
                    network: SocialNetwork::Facebook,
                    url: "https://www.facebook.com/people/Maple-Bridge-Law/100091004212306/"
                        .to_string(),
                },
            ],
        }
    }
}

impl SiteConfig {
    /// Public profile URL for a page slug
    #[must_use]
    pub fn profile_url(&self, slug: &str) -> String {
        format!("{}/team/{slug}", self.base_url)
    }

    /// Absolute URL of a team photo
    #[must_use]
    pub fn photo_url(&self, photo: &str) -> String {
        format!("{}/assets/images/team/{photo}", self.base_url)
    }

    /// Normalize and check the configuration
    ///
    /// Trims a trailing `/` from `base_url`. Control characters are rejected
    /// in every value.
    ///
    /// # Errors
    /// Returns a description of the first invalid value.
    pub fn validate(&mut self) -> Result<(), String> {
        let trimmed = self.base_url.trim().trim_end_matches('/').to_string();
        if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
            return Err(format!(
                "baseUrl must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(format!(
                "baseUrl must not contain whitespace, got '{}'",
                self.base_url.escape_debug()
            ));
        }
        self.base_url = trimmed;

        for (field, value) in [
            ("firmName", &self.firm_name),
            ("brandName", &self.brand_name),
            ("officePhone", &self.office_phone),
            ("infoEmail", &self.info_email),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{field} must not be empty"));
            }
        }

        let address = &self.address;
        let social = self.social.iter().map(|link| ("social.url", &link.url));
        for (field, value) in [
            ("firmName", &self.firm_name),
            ("brandName", &self.brand_name),
            ("officePhone", &self.office_phone),
            ("infoEmail", &self.info_email),
            ("address.street", &address.street),
            ("address.suite", &address.suite),
            ("address.city", &address.city),
            ("address.region", &address.region),
            ("address.postalCode", &address.postal_code),
            ("address.country", &address.country),
        ]
        .into_iter()
        .chain(social)
        {
            if value.chars().any(char::is_control) {
                return Err(format!(
                    "{field} contains a control character: '{}'",
                    value.escape_debug()
                ));
            }
        }

        Ok(())
    }
}

/// Postal address of the office
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl Default for Address {
    fn default() -> Self {
        Self {
            street: "416 Pirkle Ferry Road".to_string(),
            suite: "Suite L-100".to_string(),
            city: "Cumming".to_string(),
            region: "GA".to_string(),
            postal_code: "30040".to_string(),
            country: "US".to_string(),
        }
    }
}

/// Footer link to a social profile
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: String,
}

/// Networks with a bundled footer icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    #[serde(rename = "linkedin")]
    LinkedIn,
    Facebook,
}

impl SocialNetwork {
    /// Accessible label for the icon link
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Facebook => "Facebook",
        }
    }
}
