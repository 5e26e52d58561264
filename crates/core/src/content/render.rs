//! Read-only HTML rendering of content documents.
//!
//! Produces semantic, unstyled HTML5 fragments. Dispatch on the section
//! tag is total: an unrecognized tag renders nothing, and a missing field
//! renders as empty or is omitted, never an error.

use std::fmt::Write;

use serde_json::Value;

use super::model::{
    ContactDetails, ContentDocument, ContentSection, CtaBlock, FeaturesSection, Hero,
    KnownSection, LegacyDocument, MultiPageDocument, Page, Section, ServiceItem,
    ServicesSection, Testimonial,
};

/// Escape text for safe interpolation into HTML element content and
/// attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a stored document (either shape) as a full HTML page.
pub fn render_document(doc: &Value, site_title: &str) -> String {
    let body = match ContentDocument::from_value(doc) {
        ContentDocument::MultiPage(d) => render_multi_page(&d),
        ContentDocument::Legacy(d) => render_legacy(&d),
    };

    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{}</title></head><body>{}</body></html>",
        escape_html(site_title),
        body
    )
}

fn render_multi_page(doc: &MultiPageDocument) -> String {
    let mut out = String::new();

    let nav = doc.navigation_items();
    if !nav.is_empty() {
        out.push_str("<nav><ul>");
        for item in &nav {
            let _ = write!(out, "<li>{}</li>", escape_html(item));
        }
        out.push_str("</ul></nav>");
    }

    for page in &doc.pages {
        render_page(page, &mut out);
    }

    render_testimonials(&doc.testimonials, &mut out);
    out
}

fn render_legacy(doc: &LegacyDocument) -> String {
    let mut out = String::new();

    if let Some(hero) = &doc.hero {
        out.push_str("<header class=\"hero\">");
        let _ = write!(out, "<h1>{}</h1>", escape_html(&hero.headline));
        if !hero.subheadline.is_empty() {
            let _ = write!(out, "<p>{}</p>", escape_html(&hero.subheadline));
        }
        if !hero.cta.is_empty() {
            let _ = write!(out, "<button>{}</button>", escape_html(&hero.cta));
        }
        out.push_str("</header>");
    }

    if let Some(about) = &doc.about {
        render_content_section(about, &mut out);
    }

    for section in &doc.sections {
        out.push_str("<section>");
        let _ = write!(out, "<h2>{}</h2>", escape_html(&section.title));
        if !section.description.is_empty() {
            let _ = write!(out, "<p>{}</p>", escape_html(&section.description));
        }
        if !section.items.is_empty() {
            out.push_str("<ul>");
            for item in &section.items {
                render_service_item(item, &mut out);
            }
            out.push_str("</ul>");
        }
        out.push_str("</section>");
    }

    if !doc.features.is_empty() {
        out.push_str("<section class=\"features\"><ul>");
        for item in &doc.features {
            let _ = write!(
                out,
                "<li><h3>{}</h3><p>{}</p></li>",
                escape_html(&item.title),
                escape_html(&item.description)
            );
        }
        out.push_str("</ul></section>");
    }

    render_testimonials(&doc.testimonials, &mut out);

    if let Some(contact) = &doc.contact {
        render_contact(contact, &mut out);
    }
    if let Some(cta) = &doc.cta {
        render_cta(cta, &mut out);
    }
    out
}

/// Render one page: hero followed by its sections.
pub fn render_page(page: &Page, out: &mut String) {
    let _ = write!(
        out,
        "<article id=\"{}\" class=\"page\">",
        escape_html(&page.slug)
    );
    if let Some(hero) = &page.hero {
        render_hero(hero, out);
    }
    for section in &page.sections {
        out.push_str(&render_section(section));
    }
    out.push_str("</article>");
}

fn render_hero(hero: &Hero, out: &mut String) {
    out.push_str("<header class=\"hero\">");
    if let Some(image) = &hero.image {
        let _ = write!(out, "<img src=\"{}\" alt=\"\">", escape_html(image));
    }
    let _ = write!(out, "<h1>{}</h1>", escape_html(&hero.headline));
    if !hero.subheadline.is_empty() {
        let _ = write!(out, "<p>{}</p>", escape_html(&hero.subheadline));
    }
    if !hero.primary_cta.is_empty() {
        let _ = write!(out, "<button>{}</button>", escape_html(&hero.primary_cta));
    }
    if !hero.secondary_cta.is_empty() {
        let _ = write!(out, "<button>{}</button>", escape_html(&hero.secondary_cta));
    }
    out.push_str("</header>");
}

/// Render one section to an HTML fragment. Unknown tags render nothing.
pub fn render_section(section: &Section) -> String {
    let mut out = String::new();
    match section {
        Section::Known(KnownSection::Features(s)) => render_features(s, &mut out),
        Section::Known(KnownSection::Services(s)) => render_services(s, &mut out),
        Section::Known(KnownSection::Cta(s)) => render_cta(s, &mut out),
        Section::Known(KnownSection::Content(s)) => render_content_section(s, &mut out),
        Section::Known(KnownSection::Contact(s)) => render_contact(s, &mut out),
        Section::Unknown(_) => {}
    }
    out
}

fn render_features(section: &FeaturesSection, out: &mut String) {
    out.push_str("<section class=\"features\">");
    let _ = write!(out, "<h2>{}</h2>", escape_html(&section.title));
    out.push_str("<ul>");
    for item in &section.items {
        out.push_str("<li>");
        if let Some(image) = &item.image {
            let _ = write!(out, "<img src=\"{}\" alt=\"\">", escape_html(image));
        }
        let _ = write!(
            out,
            "<h3>{}</h3><p>{}</p>",
            escape_html(&item.title),
            escape_html(&item.description)
        );
        if !item.cta.is_empty() {
            let _ = write!(out, "<button>{}</button>", escape_html(&item.cta));
        }
        out.push_str("</li>");
    }
    out.push_str("</ul></section>");
}

fn render_services(section: &ServicesSection, out: &mut String) {
    out.push_str("<section class=\"services\">");
    let _ = write!(out, "<h2>{}</h2>", escape_html(&section.title));
    out.push_str("<ul>");
    for item in &section.items {
        render_service_item(item, out);
    }
    out.push_str("</ul></section>");
}

fn render_service_item(item: &ServiceItem, out: &mut String) {
    out.push_str("<li>");
    if let Some(image) = &item.image {
        let _ = write!(out, "<img src=\"{}\" alt=\"\">", escape_html(image));
    }
    let _ = write!(
        out,
        "<h3>{}</h3><p>{}</p>",
        escape_html(&item.name),
        escape_html(&item.description)
    );
    if let Some(price) = price_label(item.price.as_ref()) {
        let _ = write!(out, "<span class=\"price\">{}</span>", escape_html(&price));
    }
    if !item.cta.is_empty() {
        let _ = write!(out, "<button>{}</button>", escape_html(&item.cta));
    }
    if !item.secondary_cta.is_empty() {
        let _ = write!(out, "<button>{}</button>", escape_html(&item.secondary_cta));
    }
    out.push_str("</li>");
}

fn render_cta(section: &CtaBlock, out: &mut String) {
    out.push_str("<section class=\"cta\">");
    let _ = write!(out, "<h2>{}</h2>", escape_html(&section.title));
    if !section.description.is_empty() {
        let _ = write!(out, "<p>{}</p>", escape_html(&section.description));
    }
    if !section.button.is_empty() {
        let _ = write!(out, "<button>{}</button>", escape_html(&section.button));
    }
    if !section.secondary_button.is_empty() {
        let _ = write!(out, "<button>{}</button>", escape_html(&section.secondary_button));
    }
    out.push_str("</section>");
}

fn render_content_section(section: &ContentSection, out: &mut String) {
    out.push_str("<section class=\"content\">");
    let _ = write!(
        out,
        "<h2>{}</h2><p>{}</p>",
        escape_html(&section.title),
        escape_html(&section.content)
    );
    out.push_str("</section>");
}

fn render_contact(section: &ContactDetails, out: &mut String) {
    out.push_str("<section class=\"contact\"><address>");
    for (label, value) in [
        ("Address", &section.address),
        ("Phone", &section.phone),
        ("Email", &section.email),
        ("Hours", &section.hours),
    ] {
        if !value.is_empty() {
            let _ = write!(out, "<p>{label}: {}</p>", escape_html(value));
        }
    }
    out.push_str("</address></section>");
}

fn render_testimonials(testimonials: &[Testimonial], out: &mut String) {
    if testimonials.is_empty() {
        return;
    }
    out.push_str("<section class=\"testimonials\">");
    for t in testimonials {
        let _ = write!(
            out,
            "<blockquote><p>{}</p><cite>{}{}</cite></blockquote>",
            escape_html(&t.text),
            escape_html(&t.name),
            if t.role.is_empty() {
                String::new()
            } else {
                format!(", {}", escape_html(&t.role))
            }
        );
    }
    out.push_str("</section>");
}

fn price_label(price: Option<&Value>) -> Option<String> {
    match price? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(format!("${n}")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_tag_renders_empty() {
        let section: Section =
            serde_json::from_value(json!({ "type": "carousel", "slides": [] })).unwrap();
        assert_eq!(render_section(&section), "");
    }

    #[test]
    fn missing_fields_render_without_panicking() {
        let section: Section = serde_json::from_value(json!({ "type": "features" })).unwrap();
        let html = render_section(&section);
        assert!(html.contains("<section class=\"features\">"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn contact_omits_empty_fields() {
        let section: Section = serde_json::from_value(json!({
            "type": "contact", "phone": "(555) 123-4567"
        }))
        .unwrap();
        let html = render_section(&section);
        assert!(html.contains("Phone: (555) 123-4567"));
        assert!(!html.contains("Address"));
        assert!(!html.contains("Email"));
    }

    #[test]
    fn text_is_escaped() {
        let section: Section = serde_json::from_value(json!({
            "type": "content", "title": "<script>", "content": "a & b"
        }))
        .unwrap();
        let html = render_section(&section);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn legacy_document_renders_hero_and_contact() {
        let doc = json!({
            "hero": { "headline": "Old Site", "cta": "Call" },
            "contact": { "email": "hi@example.com" }
        });
        let html = render_document(&doc, "Old Site");
        assert!(html.contains("<h1>Old Site</h1>"));
        assert!(html.contains("Email: hi@example.com"));
    }

    #[test]
    fn multi_page_document_renders_nav_and_pages() {
        let doc = json!({
            "pages": [
                { "slug": "home", "title": "Home",
                  "hero": { "headline": "Hi" },
                  "sections": [{ "type": "cta", "title": "Go", "button": "Now" }] },
                { "slug": "about", "title": "About" }
            ]
        });
        let html = render_document(&doc, "Acme");
        assert!(html.contains("<nav><ul><li>Home</li><li>About</li></ul></nav>"));
        assert!(html.contains("id=\"home\""));
        assert!(html.contains("<button>Now</button>"));
    }

    #[test]
    fn numeric_price_renders_with_dollar_prefix() {
        let section: Section = serde_json::from_value(json!({
            "type": "services",
            "items": [{ "name": "Cut", "price": 25 }]
        }))
        .unwrap();
        let html = render_section(&section);
        assert!(html.contains("<span class=\"price\">$25</span>"));
    }
}
