//! Output contracts shared by the vCard and page renderers.

use pretty_assertions::assert_eq;
use team_render::{render_page, render_vcard, SiteLayout, CRLF};
use team_roster::SiteConfig;
use team_test_utils::{full_record, jane_doe};

fn lines(card: &str) -> Vec<&str> {
    card.strip_suffix(CRLF).unwrap().split(CRLF).collect()
}

#[test]
fn test_jane_doe_vcard() {
    let card = render_vcard(&jane_doe(), &SiteConfig::default());

    assert_eq!(
        lines(&card),
        vec![
            "BEGIN:VCARD",
            "VERSION:3.0",
            "N:Doe;Jane;;;",
            "FN:Jane Doe",
            "ORG:Maple Bridge Law LLC",
            "TITLE:Attorney",
            "EMAIL;TYPE=WORK:jane@example.com",
            "TEL;TYPE=WORK,VOICE:678-460-8885",
            "ADR;TYPE=WORK:;Suite L-100;416 Pirkle Ferry Road;Cumming;GA;30040;US",
            "URL:https://maplebridgelaw.com/team/jane-doe",
            "PHOTO;VALUE=URI:https://maplebridgelaw.com/assets/images/team/jane.jpeg",
            "END:VCARD",
        ]
    );
}

#[test]
fn test_vcard_has_exactly_one_email() {
    for record in [jane_doe(), full_record()] {
        let card = render_vcard(&record, &SiteConfig::default());
        let emails: Vec<&str> = lines(&card)
            .into_iter()
            .filter(|l| l.starts_with("EMAIL"))
            .collect();
        assert_eq!(emails, vec![format!("EMAIL;TYPE=WORK:{}", record.email)]);
    }
}

#[test]
fn test_vcard_photo_uri_uses_base_url() {
    let site = SiteConfig {
        base_url: "https://staging.example.com".to_string(),
        ..SiteConfig::default()
    };
    let card = render_vcard(&full_record(), &site);
    assert!(card.contains(
        "\r\nPHOTO;VALUE=URI:https://staging.example.com/assets/images/team/drew.jpeg\r\n"
    ));
    assert!(card.contains("\r\nURL:https://staging.example.com/team/drew-jenkins\r\n"));
}

#[test]
fn test_bio_block_present_iff_bio() {
    let site = SiteConfig::default();

    let with_bio = render_page(&full_record(), &site);
    assert_eq!(with_bio.matches("class=\"profile-bio\"").count(), 1);
    assert!(with_bio.contains("<p>Drew handles residential &amp; commercial closings.</p>"));

    let without_bio = render_page(&jane_doe(), &site);
    assert!(!without_bio.contains("class=\"profile-bio\""));
}

#[test]
fn test_phone_item_present_iff_phone() {
    let site = SiteConfig::default();

    let with_phone = render_page(&full_record(), &site);
    assert!(with_phone.contains("href=\"tel:678-572-1954\" class=\"profile-contact-item profile-contact-phone\""));
    assert!(with_phone.contains("<span>Office: 678-460-8885</span>"));

    let without_phone = render_page(&jane_doe(), &site);
    assert!(!without_phone.contains("profile-contact-phone"));
    assert_eq!(without_phone.matches("profile-contact-office").count(), 1);
    assert!(without_phone.contains("<span>Office: 678-460-8885</span>"));
}

#[test]
fn test_save_contact_points_at_written_vcard() {
    let record = jane_doe();
    let page = render_page(&record, &SiteConfig::default());
    let href = SiteLayout::vcard_href(&record.slug);
    assert_eq!(href, "../../assets/vcards/jane-doe.vcf");
    assert!(page.contains(&format!("<a href=\"{href}\" class=\"save-contact-btn\" download>")));
}

#[test]
fn test_shared_chrome_is_identical_across_pages() {
    let site = SiteConfig::default();
    let footer = |page: &str| page.split("<!-- Footer -->").nth(1).unwrap().to_string();

    let a = render_page(&full_record(), &site);
    let b = render_page(&jane_doe(), &site);
    assert_eq!(footer(&a), footer(&b));
    assert!(a.contains("&copy; 2025 Maple Bridge Law LLC. All Rights Reserved."));
    assert!(a.contains("aria-label=\"LinkedIn\""));
    assert!(a.contains("aria-label=\"Facebook\""));
}

#[test]
fn test_rendering_is_deterministic() {
    let site = SiteConfig::default();
    assert_eq!(render_page(&full_record(), &site), render_page(&full_record(), &site));
    assert_eq!(render_vcard(&full_record(), &site), render_vcard(&full_record(), &site));
}
