//! vCard 3.0 contact cards
//!
//! Contact-import applications are strict about the wire format: property
//! names are upper case and every content line ends in CRLF.

use team_roster::{EmployeeRecord, SiteConfig};

/// vCard line terminator
pub const CRLF: &str = "\r\n";

/// Render the contact card for one employee
#[must_use]
pub fn render_vcard(employee: &EmployeeRecord, site: &SiteConfig) -> String {
    let address = &site.address;
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!(
            "N:{};{};;;",
            escape_text(&employee.last_name),
            escape_text(&employee.first_name)
        ),
        format!("FN:{}", escape_text(&employee.full_name())),
        format!("ORG:{}", escape_text(&site.firm_name)),
        format!("TITLE:{}", escape_text(&employee.title)),
        format!("EMAIL;TYPE=WORK:{}", employee.email),
    ];

    if let Some(phone) = &employee.phone {
        lines.push(format!("TEL;TYPE=WORK,VOICE:{phone}"));
    }
    lines.push(format!("TEL;TYPE=WORK,VOICE:{}", site.office_phone));

    // ADR: PO box; extended; street; locality; region; postal code; country
    lines.push(format!(
        "ADR;TYPE=WORK:;{};{};{};{};{};{}",
        escape_text(&address.suite),
        escape_text(&address.street),
        escape_text(&address.city),
        escape_text(&address.region),
        escape_text(&address.postal_code),
        escape_text(&address.country),
    ));
    lines.push(format!("URL:{}", site.profile_url(employee.slug.as_str())));
    lines.push(format!("PHOTO;VALUE=URI:{}", site.photo_url(&employee.photo)));
    lines.push("END:VCARD".to_string());

    let mut card = lines.join(CRLF);
    card.push_str(CRLF);
    card
}

/// Escape a vCard text value
fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            other => out.push(other),
        }
    }
    out
}
