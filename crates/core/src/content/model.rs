use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A document is multi-page when it carries a `pages` array. Purely
/// structural: there is no version field, and legacy single-page documents
/// simply lack the key.
pub fn is_multi_page(doc: &Value) -> bool {
    doc.get("pages").is_some_and(Value::is_array)
}

/// Read-side view of a stored content document. Total over any JSON value:
/// unparseable input degrades to an empty legacy document rather than an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentDocument {
    MultiPage(MultiPageDocument),
    Legacy(LegacyDocument),
}

impl ContentDocument {
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone())
            .unwrap_or_else(|_| ContentDocument::Legacy(LegacyDocument::default()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiPageDocument {
    pub pages: Vec<Page>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<Testimonial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
}

impl MultiPageDocument {
    /// Nav bar labels: explicit `navigation.items` when present, otherwise
    /// derived from the page titles.
    pub fn navigation_items(&self) -> Vec<String> {
        match &self.navigation {
            Some(nav) if !nav.items.is_empty() => nav.items.clone(),
            _ => self.pages.iter().map(|p| p.title.clone()).collect(),
        }
    }

    /// First page whose slug matches; slugs are not unique by construction,
    /// first match wins.
    pub fn page(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.slug == slug)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub subheadline: String,
    #[serde(default)]
    pub primary_cta: String,
    #[serde(default)]
    pub secondary_cta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A renderable block within a page. Known variants form a closed sum type
/// dispatched on the `type` tag; anything else lands in `Unknown` and must
/// survive an edit round trip byte-for-byte, which is why the raw value is
/// kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section {
    Known(KnownSection),
    Unknown(Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum KnownSection {
    Features(FeaturesSection),
    Services(ServicesSection),
    Cta(CtaBlock),
    Content(ContentSection),
    Contact(ContactDetails),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<ServiceItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// The model is told "$XX or null" but occasionally returns a number;
    /// kept as a raw value so the variant still parses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default)]
    pub cta: String,
    #[serde(default)]
    pub secondary_cta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaBlock {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub button: String,
    #[serde(default)]
    pub secondary_button: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub hours: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    #[serde(default)]
    pub items: Vec<String>,
}

/// Legacy single-page shape: `hero`/`about`/`sections`/`contact` directly at
/// the top level. Still produced by old generations and still renderable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<LegacyHero>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<ContentSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<LegacySection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<FeatureItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<Testimonial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CtaBlock>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyHero {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub subheadline: String,
    #[serde(default)]
    pub cta: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<ServiceItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn multi_page_discriminator_is_structural() {
        assert!(is_multi_page(&json!({ "pages": [] })));
        assert!(is_multi_page(&json!({ "pages": [{ "slug": "home" }] })));
        assert!(!is_multi_page(&json!({ "hero": { "headline": "Hi" } })));
        assert!(!is_multi_page(&json!({ "pages": "not-an-array" })));
        assert!(!is_multi_page(&json!(null)));
    }

    #[test]
    fn parses_multi_page_document() {
        let doc = json!({
            "pages": [{
                "slug": "home",
                "title": "Home",
                "hero": { "headline": "Hello", "primaryCta": "Go" },
                "sections": [
                    { "type": "cta", "title": "Now", "button": "Start" }
                ]
            }],
            "testimonials": [{ "name": "A", "text": "Great", "role": "Client" }]
        });

        match ContentDocument::from_value(&doc) {
            ContentDocument::MultiPage(d) => {
                assert_eq!(d.pages.len(), 1);
                let page = d.page("home").unwrap();
                assert_eq!(page.hero.as_ref().unwrap().headline, "Hello");
                assert_eq!(page.hero.as_ref().unwrap().primary_cta, "Go");
                match &page.sections[0] {
                    Section::Known(KnownSection::Cta(cta)) => assert_eq!(cta.button, "Start"),
                    other => panic!("expected cta section, got {other:?}"),
                }
            }
            ContentDocument::Legacy(_) => panic!("should parse as multi-page"),
        }
    }

    #[test]
    fn parses_legacy_document() {
        let doc = json!({
            "hero": { "headline": "Old", "cta": "Call" },
            "about": { "title": "About Us", "content": "Story" },
            "contact": { "phone": "555" }
        });

        match ContentDocument::from_value(&doc) {
            ContentDocument::Legacy(d) => {
                assert_eq!(d.hero.unwrap().headline, "Old");
                assert_eq!(d.contact.unwrap().phone, "555");
            }
            ContentDocument::MultiPage(_) => panic!("no pages array, must be legacy"),
        }
    }

    #[test]
    fn unknown_section_tag_round_trips_unmodified() {
        let raw = json!({ "type": "gallery", "images": ["a.png"], "layout": "grid" });
        let section: Section = serde_json::from_value(raw.clone()).unwrap();
        assert!(matches!(section, Section::Unknown(_)));
        assert_eq!(serde_json::to_value(&section).unwrap(), raw);
    }

    #[test]
    fn partial_section_fields_default() {
        let section: Section = serde_json::from_value(json!({ "type": "contact" })).unwrap();
        match section {
            Section::Known(KnownSection::Contact(c)) => {
                assert_eq!(c.address, "");
                assert_eq!(c.hours, "");
            }
            other => panic!("expected contact, got {other:?}"),
        }
    }

    #[test]
    fn numeric_price_still_parses_as_services() {
        let section: Section = serde_json::from_value(json!({
            "type": "services",
            "items": [{ "name": "Cut", "price": 25 }]
        }))
        .unwrap();
        assert!(matches!(section, Section::Known(KnownSection::Services(_))));
    }

    #[test]
    fn navigation_derived_from_page_titles_when_absent() {
        let doc = json!({
            "pages": [
                { "slug": "home", "title": "Home" },
                { "slug": "about", "title": "About" }
            ]
        });
        match ContentDocument::from_value(&doc) {
            ContentDocument::MultiPage(d) => {
                assert_eq!(d.navigation_items(), vec!["Home", "About"]);
            }
            _ => panic!("expected multi-page"),
        }
    }

    #[test]
    fn garbage_input_degrades_to_empty_legacy() {
        match ContentDocument::from_value(&json!("just a string")) {
            ContentDocument::Legacy(d) => assert!(d.hero.is_none()),
            _ => panic!("expected empty legacy document"),
        }
    }
}
