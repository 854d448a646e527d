use pretty_assertions::assert_eq;
use std::io::Write;
use team_roster::{Roster, RosterError};

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_yaml_and_json_rosters_agree() {
    let yaml = write_temp(
        ".yaml",
        "employees:\n  - slug: mary-diaz\n    firstName: Mary\n    lastName: Diaz\n    role: Paralegal\n    title: Paralegal\n    email: mary@jenkinstitle.com\n    phone: 678-572-1956\n    photo: mary.jpeg\n",
    );
    let json = write_temp(
        ".json",
        r#"{"employees":[{"slug":"mary-diaz","firstName":"Mary","lastName":"Diaz","role":"Paralegal","title":"Paralegal","email":"mary@jenkinstitle.com","phone":"678-572-1956","photo":"mary.jpeg"}]}"#,
    );

    let from_yaml = Roster::load(yaml.path()).unwrap();
    let from_json = Roster::load(json.path()).unwrap();
    assert_eq!(from_yaml, from_json);
    assert_eq!(from_yaml.employees()[0].phone.as_deref(), Some("678-572-1956"));
}

#[test]
fn test_unsupported_extension() {
    let file = write_temp(".toml", "employees = []");
    let err = Roster::load(file.path()).unwrap_err();
    assert!(matches!(err, RosterError::UnsupportedFormat { ref extension, .. } if extension == "toml"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Roster::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, RosterError::Io { .. }));
}

#[test]
fn test_missing_required_field_names_position() {
    let file = write_temp(
        ".yaml",
        "employees:\n  - slug: a-b\n    firstName: A\n    lastName: B\n    email: a@b.co\n    photo: a.jpeg\n  - slug: c-d\n    firstName: C\n    lastName: D\n    email: c@d.co\n",
    );
    let err = Roster::load(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "employee #1: missing required field 'photo'");
}

#[test]
fn test_shipped_roster_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../roster.yaml");
    let roster = Roster::load(path).unwrap();

    assert_eq!(roster.len(), 6);
    assert_eq!(roster.visible().count(), 5);
    let amber = roster
        .employees()
        .iter()
        .find(|e| e.slug.as_str() == "amber-jenkins")
        .unwrap();
    assert!(amber.hidden);
    let mary = roster
        .employees()
        .iter()
        .find(|e| e.slug.as_str() == "mary-diaz")
        .unwrap();
    assert_eq!(mary.bio, None);
}

#[test]
fn test_line_breaks_in_vcard_values_fail_to_load() {
    let photo = "employees:\n  - slug: jane-doe\n    firstName: Jane\n    lastName: Doe\n    email: jane@example.com\n    photo: \"jane.jpeg\\nX-INJECTED:1\"\n";
    assert!(matches!(
        Roster::from_yaml_str(photo).unwrap_err(),
        RosterError::InvalidField { field: "photo", .. }
    ));

    let office = "site:\n  officePhone: \"555\\nX-EVIL:1\"\nemployees: []\n";
    assert!(matches!(
        Roster::from_yaml_str(office).unwrap_err(),
        RosterError::InvalidSite(ref reason) if reason.starts_with("officePhone")
    ));
}
