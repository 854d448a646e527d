//! Employee profile pages
//!
//! Each page is a self-contained document served as `team/{slug}/index.html`.
//! Everything outside the profile block (header, CTA banner, footer) is the
//! same on every page and only varies with [`SiteConfig`].

use crate::layout::SiteLayout;
use std::fmt::{self, Display, Formatter};
use team_roster::{EmployeeRecord, SiteConfig, SocialNetwork};

/// Render the profile page for one employee
#[must_use]
pub fn render_page(employee: &EmployeeRecord, site: &SiteConfig) -> String {
    ProfilePage::new(employee, site).to_string()
}

/// Profile page template
///
/// Writes the document through [`Display`], so it can be rendered straight
/// into any formatter.
#[derive(Debug, Clone, Copy)]
pub struct ProfilePage<'a> {
    employee: &'a EmployeeRecord,
    site: &'a SiteConfig,
}

impl<'a> ProfilePage<'a> {
    /// Bind a record to the site template
    #[inline]
    #[must_use]
    pub fn new(employee: &'a EmployeeRecord, site: &'a SiteConfig) -> Self {
        Self { employee, site }
    }

    fn head(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let e = self.employee;
        let name = Escaped(&e.full_name()).to_string();
        let root = SiteLayout::page_root_prefix();

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "  <meta charset=\"UTF-8\">")?;
        writeln!(
            f,
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(
            f,
            "  <meta name=\"description\" content=\"{name} - {} at {}.\">",
            Escaped(&e.role),
            Escaped(&self.site.firm_name)
        )?;
        writeln!(f, "  <title>{name} | {}</title>", Escaped(&self.site.brand_name))?;
        writeln!(f)?;
        f.write_str(FONT_LINKS)?;
        writeln!(f)?;
        writeln!(f, "  <!-- Styles -->")?;
        writeln!(f, "  <link rel=\"stylesheet\" href=\"{root}assets/css/style.css\">")?;
        writeln!(f)?;
        writeln!(f, "  <!-- Favicon -->")?;
        writeln!(
            f,
            "  <link rel=\"icon\" type=\"image/svg+xml\" href=\"{root}assets/images/logo.svg\">"
        )?;
        writeln!(f)?;
        f.write_str(PROFILE_STYLES)?;
        writeln!(f, "</head>")
    }

    fn header(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let root = SiteLayout::page_root_prefix();

        writeln!(f, "  <!-- Header -->")?;
        writeln!(f, "  <header>")?;
        writeln!(f, "    <div class=\"header-inner\">")?;
        writeln!(f, "      <a href=\"{root}index.html\" class=\"logo\">")?;
        writeln!(
            f,
            "        <img src=\"{root}assets/images/logo.svg\" alt=\"{}\">",
            Escaped(&self.site.brand_name)
        )?;
        f.write_str(LOGO_TEXT)?;
        writeln!(f, "      </a>")?;
        writeln!(f)?;
        f.write_str(MENU_TOGGLE)?;
        writeln!(f)?;
        writeln!(f, "      <nav>")?;
        for (href, label, class) in NAV_LINKS {
            match class {
                Some(class) => writeln!(
                    f,
                    "        <a href=\"{root}{href}\" class=\"{class}\">{label}</a>"
                )?,
                None => writeln!(f, "        <a href=\"{root}{href}\">{label}</a>")?,
            }
        }
        writeln!(f, "      </nav>")?;
        writeln!(f, "    </div>")?;
        writeln!(f, "  </header>")
    }

    fn breadcrumb(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let root = SiteLayout::page_root_prefix();

        writeln!(f, "  <!-- Breadcrumb Bar -->")?;
        writeln!(f, "  <div class=\"profile-breadcrumb-bar\">")?;
        writeln!(f, "    <div class=\"container\">")?;
        writeln!(f, "      <a href=\"{root}index.html\">Home</a>")?;
        writeln!(f, "      <span class=\"separator\">/</span>")?;
        writeln!(f, "      <a href=\"{root}team.html\">Team</a>")?;
        writeln!(f, "      <span class=\"separator\">/</span>")?;
        writeln!(f, "      <span>{}</span>", Escaped(&self.employee.full_name()))?;
        writeln!(f, "    </div>")?;
        writeln!(f, "  </div>")
    }

    fn profile(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let e = self.employee;
        let name = Escaped(&e.full_name()).to_string();
        let office = Escaped(&self.site.office_phone);

        writeln!(f, "  <!-- Profile -->")?;
        writeln!(f, "  <section>")?;
        writeln!(f, "    <div class=\"container\">")?;
        writeln!(f, "      <div class=\"profile-section\">")?;
        writeln!(
            f,
            "        <img class=\"profile-photo\" src=\"{}\" alt=\"{name}\">",
            Escaped(&SiteLayout::photo_href(&e.photo))
        )?;
        writeln!(f, "        <h2 class=\"profile-name\">{name}</h2>")?;
        writeln!(f, "        <p class=\"profile-role\">{}</p>", Escaped(&e.role))?;
        writeln!(f)?;
        writeln!(f, "        <div class=\"profile-contacts\">")?;

        let email = Escaped(&e.email);
        writeln!(
            f,
            "          <a href=\"mailto:{email}\" class=\"profile-contact-item\">"
        )?;
        writeln!(f, "            {ICON_EMAIL}")?;
        writeln!(f, "            <span>{email}</span>")?;
        writeln!(f, "          </a>")?;

        if let Some(phone) = &e.phone {
            let phone = Escaped(phone);
            writeln!(
                f,
                "          <a href=\"tel:{phone}\" class=\"profile-contact-item profile-contact-phone\">"
            )?;
            writeln!(f, "            {ICON_PHONE}")?;
            writeln!(f, "            <span>{phone}</span>")?;
            writeln!(f, "          </a>")?;
        }

        writeln!(
            f,
            "          <a href=\"tel:{office}\" class=\"profile-contact-item profile-contact-office\">"
        )?;
        writeln!(f, "            {ICON_OFFICE}")?;
        writeln!(f, "            <span>Office: {office}</span>")?;
        writeln!(f, "          </a>")?;
        writeln!(f, "        </div>")?;
        writeln!(f)?;

        writeln!(
            f,
            "        <a href=\"{}\" class=\"save-contact-btn\" download>",
            SiteLayout::vcard_href(&e.slug)
        )?;
        writeln!(f, "          {ICON_SAVE}")?;
        writeln!(f, "          Save Contact")?;
        writeln!(f, "        </a>")?;

        if let Some(bio) = &e.bio {
            writeln!(f)?;
            writeln!(f, "        <div class=\"profile-bio\">")?;
            writeln!(f, "          <p>{bio}</p>")?;
            writeln!(f, "        </div>")?;
        }

        writeln!(f, "      </div>")?;
        writeln!(f, "    </div>")?;
        writeln!(f, "  </section>")
    }

    fn cta_banner(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let office = Escaped(&self.site.office_phone);
        let info = Escaped(&self.site.info_email);

        writeln!(f, "  <!-- CTA Banner -->")?;
        writeln!(f, "  <section class=\"cta-banner\">")?;
        writeln!(f, "    <div class=\"container\">")?;
        writeln!(f, "      <h2>Ready to Discuss Your Legal Needs?</h2>")?;
        writeln!(f, "      <p>Contact us today for a consultation. We're here to help protect your interests and achieve your goals.</p>")?;
        writeln!(
            f,
            "      <a href=\"tel:{office}\" class=\"btn btn-primary\">Call {office}</a>"
        )?;
        writeln!(
            f,
            "      <a href=\"mailto:{info}\" class=\"btn btn-outline\">Email Us</a>"
        )?;
        writeln!(f, "    </div>")?;
        writeln!(f, "  </section>")
    }

    fn footer(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let root = SiteLayout::page_root_prefix();
        let site = self.site;
        let address = &site.address;
        let office = Escaped(&site.office_phone);
        let info = Escaped(&site.info_email);

        writeln!(f, "  <!-- Footer -->")?;
        writeln!(f, "  <footer>")?;
        writeln!(f, "    <div class=\"container\">")?;
        writeln!(f, "      <div class=\"footer-grid\">")?;
        writeln!(f, "        <div class=\"footer-brand\">")?;
        f.write_str(FOOTER_LOGO_TEXT)?;
        writeln!(f, "          <p>Strategic legal solutions for businesses and individuals. Serving clients throughout Georgia and Alabama in real estate, corporate law, and international matters.</p>")?;
        writeln!(f, "        </div>")?;
        writeln!(f)?;

        writeln!(f, "        <div class=\"footer-links\">")?;
        writeln!(f, "          <h4>Practice Areas</h4>")?;
        writeln!(f, "          <ul>")?;
        for (anchor, label) in PRACTICE_AREAS {
            writeln!(
                f,
                "            <li><a href=\"{root}practice-areas.html#{anchor}\">{label}</a></li>"
            )?;
        }
        writeln!(f, "          </ul>")?;
        writeln!(f, "        </div>")?;
        writeln!(f)?;

        writeln!(f, "        <div class=\"footer-links\">")?;
        writeln!(f, "          <h4>Quick Links</h4>")?;
        writeln!(f, "          <ul>")?;
        writeln!(f, "            <li><a href=\"{root}about.html\">About Us</a></li>")?;
        writeln!(f, "            <li><a href=\"{root}team.html\">Our Team</a></li>")?;
        writeln!(f, "            <li><a href=\"{root}contact.html\">Contact</a></li>")?;
        writeln!(f, "            <li><a href=\"https://www.jenkinstitle.com\" target=\"_blank\">Jenkins Title</a></li>")?;
        writeln!(f, "          </ul>")?;
        writeln!(f, "        </div>")?;
        writeln!(f)?;

        writeln!(f, "        <div class=\"footer-links\">")?;
        writeln!(f, "          <h4>Contact</h4>")?;
        writeln!(f, "          <ul>")?;
        writeln!(
            f,
            "            <li>{}<br>{}<br>{}, {} {}</li>",
            Escaped(&address.street),
            Escaped(&address.suite),
            Escaped(&address.city),
            Escaped(&address.region),
            Escaped(&address.postal_code)
        )?;
        writeln!(f, "            <li><a href=\"tel:{office}\">{office}</a></li>")?;
        writeln!(f, "            <li><a href=\"mailto:{info}\">{info}</a></li>")?;
        writeln!(f, "          </ul>")?;
        writeln!(f, "        </div>")?;
        writeln!(f, "      </div>")?;
        writeln!(f)?;

        writeln!(f, "      <div class=\"footer-bottom\">")?;
        writeln!(
            f,
            "        <p>&copy; {} {}. All Rights Reserved.</p>",
            site.copyright_year,
            Escaped(&site.firm_name)
        )?;
        writeln!(f, "        <div class=\"social-links\">")?;
        for link in &site.social {
            writeln!(
                f,
                "          <a href=\"{}\" target=\"_blank\" aria-label=\"{}\">",
                Escaped(&link.url),
                link.network.label()
            )?;
            writeln!(
                f,
                "            <svg width=\"18\" height=\"18\" viewBox=\"0 0 24 24\" fill=\"currentColor\">"
            )?;
            writeln!(f, "              {}", social_icon_path(link.network))?;
            writeln!(f, "            </svg>")?;
            writeln!(f, "          </a>")?;
        }
        writeln!(f, "        </div>")?;
        writeln!(f, "      </div>")?;
        writeln!(f, "    </div>")?;
        writeln!(f, "  </footer>")
    }
}

impl Display for ProfilePage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.head(f)?;
        writeln!(f, "<body>")?;
        writeln!(f)?;
        self.header(f)?;
        writeln!(f)?;
        self.breadcrumb(f)?;
        writeln!(f)?;
        self.profile(f)?;
        writeln!(f)?;
        self.cta_banner(f)?;
        writeln!(f)?;
        self.footer(f)?;
        writeln!(f)?;
        f.write_str(MENU_SCRIPT)?;
        writeln!(f)?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

/// HTML-escaped display text
struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}

fn social_icon_path(network: SocialNetwork) -> &'static str {
    match network {
        SocialNetwork::LinkedIn => ICON_LINKEDIN,
        SocialNetwork::Facebook => ICON_FACEBOOK,
    }
}

const NAV_LINKS: [(&str, &str, Option<&str>); 5] = [
    ("index.html", "Home", None),
    ("practice-areas.html", "Practice Areas", None),
    ("about.html", "About", None),
    ("team.html", "Team", Some("active")),
    ("contact.html", "Contact Us", Some("nav-cta")),
];

const PRACTICE_AREAS: [(&str, &str); 3] = [
    ("real-estate", "Real Estate"),
    ("corporate", "Corporate Law"),
    ("international", "International"),
];

const FONT_LINKS: &str = r#"  <!-- Fonts -->
  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link href="https://fonts.googleapis.com/css2?family=Cormorant+Garamond:wght@400;500;600;700&family=Source+Sans+3:wght@300;400;600;700&display=swap" rel="stylesheet">
"#;

const LOGO_TEXT: &str = r#"        <div class="logo-text">
          Maple Bridge
          <span>Law</span>
        </div>
"#;

const FOOTER_LOGO_TEXT: &str = r#"          <div class="logo-text">
            Maple Bridge
            <span>Law</span>
          </div>
"#;

const MENU_TOGGLE: &str = r#"      <button class="menu-toggle" aria-label="Toggle menu">
        <span></span>
        <span></span>
        <span></span>
      </button>
"#;

const MENU_SCRIPT: &str = r"  <!-- Mobile Menu Script -->
  <script>
    document.querySelector('.menu-toggle').addEventListener('click', function() {
      document.querySelector('nav').classList.toggle('active');
      this.classList.toggle('active');
    });
  </script>
";

const ICON_EMAIL: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"/><polyline points="22,6 12,13 2,6"/></svg>"#;

const ICON_PHONE: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M22 16.92v3a2 2 0 01-2.18 2 19.79 19.79 0 01-8.63-3.07 19.5 19.5 0 01-6-6 19.79 19.79 0 01-3.07-8.67A2 2 0 014.11 2h3a2 2 0 012 1.72c.127.96.361 1.903.7 2.81a2 2 0 01-.45 2.11L8.09 9.91a16 16 0 006 6l1.27-1.27a2 2 0 012.11-.45c.907.339 1.85.573 2.81.7A2 2 0 0122 16.92z"/></svg>"#;

const ICON_OFFICE: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><rect x="2" y="3" width="20" height="18" rx="2" ry="2"/><line x1="2" y1="9" x2="22" y2="9"/></svg>"#;

const ICON_SAVE: &str = r#"<svg width="22" height="22" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M19 21H5a2 2 0 01-2-2V5a2 2 0 012-2h11l5 5v11a2 2 0 01-2 2z"/><polyline points="17 21 17 13 7 13 7 21"/><polyline points="7 3 7 8 15 8"/></svg>"#;

const ICON_LINKEDIN: &str = r#"<path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z"/>"#;

const ICON_FACEBOOK: &str = r#"<path d="M24 12.073c0-6.627-5.373-12-12-12s-12 5.373-12 12c0 5.99 4.388 10.954 10.125 11.854v-8.385H7.078v-3.47h3.047V9.43c0-3.007 1.792-4.669 4.533-4.669 1.312 0 2.686.235 2.686.235v2.953H15.83c-1.491 0-1.956.925-1.956 1.874v2.25h3.328l-.532 3.47h-2.796v8.385C19.612 23.027 24 18.062 24 12.073z"/>"#;

const PROFILE_STYLES: &str = r"  <style>
    .profile-breadcrumb-bar {
      margin-top: 80px;
      padding: 1rem 0;
      background: var(--navy);
      font-size: 0.9rem;
      text-align: center;
    }
    .profile-breadcrumb-bar a {
      color: rgba(255, 255, 255, 0.7);
    }
    .profile-breadcrumb-bar a:hover {
      color: var(--teal-light);
    }
    .profile-breadcrumb-bar .separator {
      margin: 0 0.5rem;
      color: rgba(255, 255, 255, 0.4);
    }
    .profile-breadcrumb-bar span:last-child {
      color: var(--white);
      font-weight: 600;
    }
    .profile-section {
      max-width: 700px;
      margin: 0 auto;
      text-align: center;
    }
    .profile-photo {
      width: 200px;
      height: 200px;
      border-radius: 50%;
      object-fit: cover;
      border: 4px solid var(--teal);
      margin-bottom: 1.5rem;
    }
    .profile-name {
      font-size: 2.25rem;
      margin-bottom: 0.25rem;
    }
    .profile-role {
      color: var(--teal-dark);
      font-weight: 600;
      font-size: 1rem;
      text-transform: uppercase;
      letter-spacing: 0.05em;
      margin-bottom: 1.5rem;
    }
    .profile-contacts {
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 0.75rem;
      margin-bottom: 2rem;
    }
    .profile-contact-item {
      display: inline-flex;
      align-items: center;
      gap: 0.5rem;
      color: var(--text);
      font-size: 1.05rem;
    }
    .profile-contact-item:hover {
      color: var(--teal-dark);
    }
    .profile-contact-item svg {
      color: var(--teal);
      flex-shrink: 0;
    }
    .profile-bio {
      text-align: left;
      margin-bottom: 2rem;
      padding: 2rem;
      background: var(--off-white);
      border-radius: 8px;
    }
    .profile-bio p {
      line-height: 1.8;
      color: var(--text);
    }
    .save-contact-btn {
      display: inline-flex;
      align-items: center;
      gap: 0.75rem;
      background: var(--teal);
      color: var(--white);
      padding: 1rem 2rem;
      border-radius: 4px;
      font-size: 1rem;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.05em;
      transition: var(--transition);
      border: 2px solid var(--teal);
    }
    .save-contact-btn:hover {
      background: var(--teal-dark);
      border-color: var(--teal-dark);
      color: var(--white);
    }
    .save-contact-btn svg {
      flex-shrink: 0;
    }
    .back-link {
      display: inline-flex;
      align-items: center;
      gap: 0.5rem;
      margin-bottom: 2rem;
      font-weight: 600;
      text-transform: uppercase;
      font-size: 0.85rem;
      letter-spacing: 0.05em;
    }
  </style>
";

#[cfg(test)]
mod tests {
    use super::*;
    use team_roster::Slug;

    fn jane() -> EmployeeRecord {
        EmployeeRecord::new(
            Slug::parse("jane-doe").unwrap(),
            "Jane",
            "Doe",
            "jane@example.com",
            "jane.jpeg",
        )
        .with_role("Attorney – GA")
    }

    #[test]
    fn metadata_uses_name_and_role() {
        let page = render_page(&jane(), &SiteConfig::default());
        assert!(page.contains("<title>Jane Doe | Maple Bridge Law</title>"));
        assert!(page.contains(
            "content=\"Jane Doe - Attorney – GA at Maple Bridge Law LLC.\""
        ));
    }

    #[test]
    fn breadcrumb_trail() {
        let page = render_page(&jane(), &SiteConfig::default());
        let crumb = page
            .split("<div class=\"profile-breadcrumb-bar\">")
            .nth(1)
            .unwrap();
        let home = crumb.find(">Home</a>").unwrap();
        let team = crumb.find(">Team</a>").unwrap();
        let name = crumb.find("<span>Jane Doe</span>").unwrap();
        assert!(home < team && team < name);
    }

    #[test]
    fn display_text_is_escaped() {
        let record = jane().with_role("Partner <Tax & Trusts>");
        let page = render_page(&record, &SiteConfig::default());
        assert!(page.contains("<p class=\"profile-role\">Partner &lt;Tax &amp; Trusts&gt;</p>"));
    }

    #[test]
    fn bio_markup_is_kept() {
        let record = jane().with_bio("Lipscomb &amp; Johnson");
        let page = render_page(&record, &SiteConfig::default());
        assert!(page.contains("<p>Lipscomb &amp; Johnson</p>"));
    }

    #[test]
    fn inline_styles_cover_shared_profile_classes() {
        let page = render_page(&jane(), &SiteConfig::default());
        let styles = &page[page.find("<style>").unwrap()..page.find("</style>").unwrap()];
        for selector in [".profile-breadcrumb-bar {", ".save-contact-btn svg {", ".back-link {"] {
            assert!(styles.contains(selector), "missing {selector}");
        }
        assert!(styles.contains(".back-link {\n      display: inline-flex;"));
    }

    #[test]
    fn ends_with_closing_html() {
        let page = render_page(&jane(), &SiteConfig::default());
        assert!(page.starts_with("<!DOCTYPE html>\n"));
        assert!(page.ends_with("</body>\n</html>\n"));
    }
}
