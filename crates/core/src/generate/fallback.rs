//! Deterministic fallback content: a pure function of the business's own
//! fields and the industry catalogue. Used whenever generation fails for
//! any reason, so it must not itself be able to fail.

use serde_json::{json, Value};

use crate::business::{Business, BusinessType};

/// Placeholder image URLs derived from the brand color.
pub fn placeholder_images(color: &str) -> Vec<String> {
    let hex = color.trim_start_matches('#');
    ["Hero+Image", "Services", "About+Us", "Gallery", "Contact"]
        .iter()
        .map(|label| format!("https://via.placeholder.com/1024x1024/{hex}/ffffff?text={label}"))
        .collect()
}

/// Placeholder used when a single image generation fails mid-batch.
pub fn placeholder_image(color: &str, label: &str) -> String {
    let hex = color.trim_start_matches('#');
    let text: String = label
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();
    format!("https://via.placeholder.com/1024x1024/{hex}/ffffff?text={text}")
}

/// Build the canned four-page document from already-known data.
pub fn fallback_document(business: &Business, industry: &BusinessType) -> Value {
    let color = business.color();
    let images = placeholder_images(color);
    let industry_lower = industry.name.to_lowercase();
    let name = &business.business_name;

    let service_items: Vec<Value> = industry
        .sections
        .iter()
        .take(4)
        .enumerate()
        .map(|(idx, section_name)| {
            json!({
                "name": section_name,
                "description": format!(
                    "Professional {} services tailored to your needs. We deliver exceptional quality and results.",
                    section_name.to_lowercase()
                ),
                "price": null,
                "cta": "Book Service",
                "secondaryCta": "Learn More",
                "image": images[(idx + 1) % images.len()],
            })
        })
        .collect();

    json!({
        "images": images,
        "pages": [
            {
                "slug": "home",
                "title": "Home",
                "hero": {
                    "headline": format!("Welcome to {name}"),
                    "subheadline": business.tagline.clone()
                        .filter(|t| !t.is_empty())
                        .unwrap_or_else(|| format!("Your trusted {industry_lower} partner")),
                    "primaryCta": "Get Started",
                    "secondaryCta": "Learn More",
                    "image": images[0],
                },
                "sections": [
                    {
                        "type": "features",
                        "title": "Why Choose Us",
                        "items": [
                            { "title": "Quality", "description": "Unmatched quality in everything we do", "cta": "Learn More" },
                            { "title": "Experience", "description": "Years of industry expertise", "cta": "Our Story" },
                            { "title": "Results", "description": "Proven track record of success", "cta": "See Results" }
                        ]
                    },
                    {
                        "type": "cta",
                        "title": "Ready to Get Started?",
                        "description": "Join thousands of satisfied customers",
                        "button": "Start Now",
                        "secondaryButton": "Schedule a Call"
                    }
                ]
            },
            {
                "slug": "services",
                "title": "Services",
                "hero": {
                    "headline": "Our Services",
                    "subheadline": "What we offer",
                    "primaryCta": "Book Now",
                    "secondaryCta": "Get Quote"
                },
                "sections": [
                    { "type": "services", "title": "What We Offer", "items": service_items },
                    {
                        "type": "cta",
                        "title": "Not Sure What You Need?",
                        "description": "Let's discuss your requirements",
                        "button": "Contact Us",
                        "secondaryButton": "View Packages"
                    }
                ]
            },
            {
                "slug": "about",
                "title": "About",
                "hero": {
                    "headline": format!("About {name}"),
                    "subheadline": "Our story and mission",
                    "primaryCta": "Work With Us",
                    "secondaryCta": "Our Team"
                },
                "sections": [
                    {
                        "type": "content",
                        "title": "Our Story",
                        "content": format!(
                            "{name} is committed to delivering exceptional {industry_lower} services \
                             with professionalism and care. We've been serving our community for years \
                             with dedication and excellence."
                        )
                    },
                    {
                        "type": "cta",
                        "title": "Want to Learn More?",
                        "description": "Get in touch with our team",
                        "button": "Contact Us",
                        "secondaryButton": "View Services"
                    }
                ]
            },
            {
                "slug": "contact",
                "title": "Contact",
                "hero": {
                    "headline": "Get In Touch",
                    "subheadline": "We'd love to hear from you",
                    "primaryCta": "Send Message",
                    "secondaryCta": "Call Now"
                },
                "sections": [
                    {
                        "type": "contact",
                        "address": business.address.as_deref().unwrap_or("123 Main St"),
                        "phone": business.phone.as_deref().unwrap_or("(555) 123-4567"),
                        "email": business.email.as_deref().unwrap_or("hello@example.com"),
                        "hours": "Mon-Fri 9am-5pm"
                    },
                    {
                        "type": "cta",
                        "title": "Prefer to Talk?",
                        "description": "Schedule a free consultation",
                        "button": "Book Appointment",
                        "secondaryButton": "Call Us"
                    }
                ]
            }
        ],
        "testimonials": [
            { "name": "Satisfied Customer", "text": "Exceptional service and results!", "role": "Client", "cta": "Read More" }
        ],
        "navigation": { "items": ["Home", "Services", "About", "Contact"] }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::types::business_type;
    use chrono::Utc;
    use uuid::Uuid;

    fn business(name: &str, type_id: &str) -> Business {
        Business {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            business_type_id: type_id.to_string(),
            business_name: name.to_string(),
            tagline: None,
            description: None,
            primary_color: None,
            logo_url: None,
            phone: None,
            email: None,
            address: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn headline_welcomes_the_business() {
        let b = business("Acme Bakery", "restaurant");
        let doc = fallback_document(&b, business_type("restaurant").unwrap());
        assert_eq!(
            doc["pages"][0]["hero"]["headline"],
            "Welcome to Acme Bakery"
        );
    }

    #[test]
    fn services_items_come_from_industry_catalogue() {
        let b = business("Acme Bakery", "restaurant");
        let doc = fallback_document(&b, business_type("restaurant").unwrap());
        let items = doc["pages"][1]["sections"][0]["items"].as_array().unwrap();
        let names: Vec<&str> = items.iter().map(|i| i["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Menu", "Reservations", "Gallery", "Reviews"]);
    }

    #[test]
    fn contact_section_uses_business_fields() {
        let mut b = business("Acme", "consulting");
        b.phone = Some("(555) 999-0000".to_string());
        b.email = Some("team@acme.example".to_string());
        let doc = fallback_document(&b, business_type("consulting").unwrap());
        let contact = &doc["pages"][3]["sections"][0];
        assert_eq!(contact["phone"], "(555) 999-0000");
        assert_eq!(contact["email"], "team@acme.example");
        // Missing address falls back to the canned default.
        assert_eq!(contact["address"], "123 Main St");
    }

    #[test]
    fn placeholder_images_embed_brand_color() {
        let images = placeholder_images("#FF0000");
        assert_eq!(images.len(), 5);
        assert!(images[0].contains("/FF0000/"));
        assert!(images[0].ends_with("text=Hero+Image"));
    }

    #[test]
    fn tagline_used_as_subheadline_when_present() {
        let mut b = business("Acme", "salon");
        b.tagline = Some("Look your best".to_string());
        let doc = fallback_document(&b, business_type("salon").unwrap());
        assert_eq!(doc["pages"][0]["hero"]["subheadline"], "Look your best");
    }

    #[test]
    fn fallback_is_multi_page() {
        let b = business("Acme", "fitness");
        let doc = fallback_document(&b, business_type("fitness").unwrap());
        assert!(crate::content::model::is_multi_page(&doc));
    }
}
