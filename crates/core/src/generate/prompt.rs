//! Prompt construction for site content and image generation.
//!
//! The desired JSON shape is requested by convention only; the output is
//! never validated against a schema (the document is schema-on-read).

use crate::business::{Business, BusinessType};

/// Fixed system instruction for the copywriting call.
pub const SYSTEM_PROMPT: &str = "You are a professional website copywriter. \
Always return valid JSON only, no markdown formatting, no code blocks.";

/// Output budget for the multi-page content call.
pub const SITE_MAX_TOKENS: u32 = 6000;

/// Build the multi-page content instruction, embedding the business's
/// branding and contact fields as literal substitutions.
pub fn site_prompt(business: &Business, industry: &BusinessType) -> String {
    let tagline_clause = business
        .tagline
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|t| format!(" with tagline \"{t}\""))
        .unwrap_or_default();

    format!(
        r#"Generate a professional, fully-built MULTI-PAGE website for a {industry_name} business called "{name}"{tagline_clause}.

Create 5-6 comprehensive pages with extensive content, lots of call-to-action buttons, and detailed sections. Make it a complete, production-ready website. Return ONLY valid JSON (no markdown, no backticks, no explanations):

{{
  "pages": [
    {{
      "slug": "home",
      "title": "Home",
      "hero": {{
        "headline": "compelling headline",
        "subheadline": "engaging subheadline",
        "primaryCta": "Get Started",
        "secondaryCta": "Learn More"
      }},
      "sections": [
        {{
          "type": "features",
          "title": "Why Choose Us",
          "items": [
            {{ "title": "Feature name", "description": "Feature description", "cta": "Learn More" }}
          ]
        }},
        {{
          "type": "cta",
          "title": "Ready to Get Started?",
          "description": "Join thousands of satisfied customers",
          "button": "Start Now",
          "secondaryButton": "Schedule a Call"
        }}
      ]
    }},
    {{
      "slug": "services",
      "title": "Services",
      "hero": {{ "headline": "Our Services", "subheadline": "What we offer", "primaryCta": "Book Now", "secondaryCta": "Get Quote" }},
      "sections": [
        {{
          "type": "services",
          "title": "What We Offer",
          "items": [
            {{ "name": "Service name from: {section_names}", "description": "Service description", "price": "$XX or null", "cta": "Book Service", "secondaryCta": "Learn More" }}
          ]
        }},
        {{ "type": "cta", "title": "Not Sure What You Need?", "description": "Let's discuss your requirements", "button": "Contact Us", "secondaryButton": "View Packages" }}
      ]
    }},
    {{
      "slug": "about",
      "title": "About",
      "hero": {{ "headline": "About {name}", "subheadline": "Our story and mission", "primaryCta": "Work With Us", "secondaryCta": "Our Team" }},
      "sections": [
        {{ "type": "content", "title": "Our Story", "content": "2-3 paragraphs about the business, mission, values" }},
        {{ "type": "cta", "title": "Want to Learn More?", "description": "Get in touch with our team", "button": "Contact Us", "secondaryButton": "View Services" }}
      ]
    }},
    {{
      "slug": "contact",
      "title": "Contact",
      "hero": {{ "headline": "Get In Touch", "subheadline": "We'd love to hear from you", "primaryCta": "Send Message", "secondaryCta": "Call Now" }},
      "sections": [
        {{ "type": "contact", "address": "{address}", "phone": "{phone}", "email": "{email}", "hours": "Business hours" }},
        {{ "type": "cta", "title": "Prefer to Talk?", "description": "Schedule a free consultation", "button": "Book Appointment", "secondaryButton": "Call Us" }}
      ]
    }}
  ],
  "testimonials": [
    {{ "name": "Customer Name", "text": "Testimonial quote", "role": "Customer role", "cta": "Read More" }}
  ],
  "navigation": {{ "items": ["Home", "Services", "About", "Contact"] }}
}}"#,
        industry_name = industry.name,
        name = business.business_name,
        section_names = industry.sections.join(", "),
        address = business.address.as_deref().unwrap_or("123 Main St, City, ST 12345"),
        phone = business.phone.as_deref().unwrap_or("(555) 123-4567"),
        email = business.email.as_deref().unwrap_or("hello@business.com"),
    )
}

/// Five image prompts: hero, services, about, gallery, contact.
pub fn image_prompts(business: &Business, industry: &BusinessType) -> Vec<String> {
    let name = &business.business_name;
    let industry_lower = industry.name.to_lowercase();
    vec![
        format!(
            "Professional hero image for {name}, a {industry_lower} business. \
             Modern, clean, professional photography style."
        ),
        format!("Service showcase image for {name}. High-quality product/service photography."),
        format!("Team or about us image for {name}. Professional, welcoming atmosphere."),
        format!(
            "Gallery or portfolio image showcasing {industry_lower} work. Professional quality."
        ),
        format!("Contact or location image for {name}. Modern office or business space."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::types::business_type;
    use chrono::Utc;
    use uuid::Uuid;

    fn business() -> Business {
        Business {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            business_type_id: "restaurant".to_string(),
            business_name: "Acme Bakery".to_string(),
            tagline: Some("Fresh daily".to_string()),
            description: None,
            primary_color: None,
            logo_url: None,
            phone: Some("(555) 000-1111".to_string()),
            email: None,
            address: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn prompt_embeds_branding_and_catalogue() {
        let industry = business_type("restaurant").unwrap();
        let prompt = site_prompt(&business(), industry);
        assert!(prompt.contains("\"Acme Bakery\""));
        assert!(prompt.contains("with tagline \"Fresh daily\""));
        assert!(prompt.contains("Menu, Reservations, Gallery, Reviews, Events, Catering"));
        assert!(prompt.contains("(555) 000-1111"));
        // Missing contact fields substitute canned defaults.
        assert!(prompt.contains("hello@business.com"));
    }

    #[test]
    fn tagline_clause_omitted_when_absent() {
        let mut b = business();
        b.tagline = None;
        let industry = business_type("restaurant").unwrap();
        assert!(!site_prompt(&b, industry).contains("with tagline"));
    }

    #[test]
    fn five_image_prompts() {
        let industry = business_type("restaurant").unwrap();
        let prompts = image_prompts(&business(), industry);
        assert_eq!(prompts.len(), 5);
        assert!(prompts[0].contains("Acme Bakery"));
        assert!(prompts[3].contains("restaurant & dining"));
    }
}
