//! Assembly of a generated content document.
//!
//! The model call itself lives in `siteforge-openai`; this module turns the
//! call's outcome into a usable document. Every failure mode (transport
//! error, timeout, malformed JSON) collapses to the deterministic fallback;
//! the caller always receives a document.

pub mod fallback;
pub mod prompt;

use serde_json::Value;
use siteforge_openai::{extract_json, OpenAiError};

use crate::business::{Business, BusinessType};

/// Result of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub document: Value,
    pub used_fallback: bool,
}

/// Turn the model call's outcome into a content document. On success the
/// model text is fence-stripped, parsed, and the generated image URLs are
/// woven in positionally; on any failure the fallback document is built
/// from the business's own fields.
pub fn assemble(
    model_output: Result<String, OpenAiError>,
    business: &Business,
    industry: &BusinessType,
    images: &[String],
) -> GenerationOutcome {
    let text = match model_output {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(business_id = %business.id, error = %err, "content generation failed, using fallback");
            return fallback_outcome(business, industry);
        }
    };

    match serde_json::from_str::<Value>(extract_json(&text)) {
        Ok(mut document) if document.is_object() => {
            weave_images(&mut document, images);
            GenerationOutcome {
                document,
                used_fallback: false,
            }
        }
        Ok(_) => {
            tracing::warn!(business_id = %business.id, "model returned non-object JSON, using fallback");
            fallback_outcome(business, industry)
        }
        Err(err) => {
            tracing::warn!(business_id = %business.id, error = %err, "model output did not parse as JSON, using fallback");
            fallback_outcome(business, industry)
        }
    }
}

fn fallback_outcome(business: &Business, industry: &BusinessType) -> GenerationOutcome {
    GenerationOutcome {
        document: fallback::fallback_document(business, industry),
        used_fallback: true,
    }
}

/// Attach generated image URLs to the parsed document: the flat `images`
/// list, a hero image per page, and per-item images for features/services
/// keyed by `(page_idx + section_idx + item_idx) mod len`. The positional
/// association is incidental (it silently reshuffles if the list changes
/// length) but it is what the product has always done.
pub fn weave_images(doc: &mut Value, images: &[String]) {
    if images.is_empty() {
        return;
    }

    if let Some(obj) = doc.as_object_mut() {
        obj.insert("images".to_string(), serde_json::json!(images));
    }

    let Some(pages) = doc.get_mut("pages").and_then(Value::as_array_mut) else {
        return;
    };

    for (page_idx, page) in pages.iter_mut().enumerate() {
        if let Some(hero) = page.get_mut("hero").and_then(Value::as_object_mut) {
            let has_image = hero
                .get("image")
                .and_then(Value::as_str)
                .is_some_and(|url| !url.is_empty());
            if !has_image {
                hero.insert("image".to_string(), serde_json::json!(images[0]));
            }
        }

        let Some(sections) = page.get_mut("sections").and_then(Value::as_array_mut) else {
            continue;
        };
        for (section_idx, section) in sections.iter_mut().enumerate() {
            let kind = section.get("type").and_then(Value::as_str).unwrap_or("");
            match kind {
                "features" | "services" => {
                    if let Some(items) = section.get_mut("items").and_then(Value::as_array_mut) {
                        for (item_idx, item) in items.iter_mut().enumerate() {
                            if let Some(item) = item.as_object_mut() {
                                let url = &images[(page_idx + section_idx + item_idx) % images.len()];
                                item.insert("image".to_string(), serde_json::json!(url));
                            }
                        }
                    }
                }
                "gallery" => {
                    if let Some(section) = section.as_object_mut() {
                        if !section.contains_key("images") {
                            section.insert("images".to_string(), serde_json::json!(images));
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::types::business_type;
    use chrono::Utc;
    use serde_json::json;
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

    fn images() -> Vec<String> {
        (0..5).map(|i| format!("https://img.example/{i}.png")).collect()
    }

    #[test]
    fn model_error_yields_fallback() {
        let b = business("Acme Bakery", "restaurant");
        let industry = business_type("restaurant").unwrap();
        let outcome = assemble(Err(OpenAiError::Timeout), &b, industry, &images());

        assert!(outcome.used_fallback);
        assert_eq!(
            outcome.document["pages"][0]["hero"]["headline"],
            "Welcome to Acme Bakery"
        );
        let items = outcome.document["pages"][1]["sections"][0]["items"]
            .as_array()
            .unwrap();
        let names: Vec<&str> = items.iter().map(|i| i["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Menu", "Reservations", "Gallery", "Reviews"]);
    }

    #[test]
    fn malformed_json_yields_fallback() {
        let b = business("Acme", "salon");
        let industry = business_type("salon").unwrap();
        let outcome = assemble(Ok("sorry, no can do".to_string()), &b, industry, &images());
        assert!(outcome.used_fallback);
    }

    #[test]
    fn non_object_json_yields_fallback() {
        let b = business("Acme", "salon");
        let industry = business_type("salon").unwrap();
        let outcome = assemble(Ok("[1, 2, 3]".to_string()), &b, industry, &images());
        assert!(outcome.used_fallback);
    }

    #[test]
    fn fenced_model_output_is_parsed_and_images_woven() {
        let b = business("Acme", "technology");
        let industry = business_type("technology").unwrap();
        let text = "```json\n".to_string()
            + &json!({
                "pages": [{
                    "slug": "home",
                    "title": "Home",
                    "hero": { "headline": "Ship Faster" },
                    "sections": [{
                        "type": "features",
                        "items": [{ "title": "Fast" }, { "title": "Safe" }]
                    }]
                }]
            })
            .to_string()
            + "\n```";

        let imgs = images();
        let outcome = assemble(Ok(text), &b, industry, &imgs);
        assert!(!outcome.used_fallback);
        assert_eq!(outcome.document["pages"][0]["hero"]["image"], imgs[0]);
        assert_eq!(
            outcome.document["pages"][0]["sections"][0]["items"][1]["image"],
            imgs[1] // (0 + 0 + 1) % 5
        );
        assert_eq!(outcome.document["images"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn existing_hero_image_is_kept() {
        let mut doc = json!({
            "pages": [{ "hero": { "headline": "Hi", "image": "custom.png" }, "sections": [] }]
        });
        weave_images(&mut doc, &images());
        assert_eq!(doc["pages"][0]["hero"]["image"], "custom.png");
    }

    #[test]
    fn empty_hero_image_is_replaced() {
        let mut doc = json!({
            "pages": [{ "hero": { "headline": "Hi", "image": "" }, "sections": [] }]
        });
        let imgs = images();
        weave_images(&mut doc, &imgs);
        assert_eq!(doc["pages"][0]["hero"]["image"], imgs[0]);
    }

    #[test]
    fn weaving_with_no_images_is_a_noop() {
        let mut doc = json!({ "pages": [{ "hero": { "headline": "Hi" } }] });
        let before = doc.clone();
        weave_images(&mut doc, &[]);
        assert_eq!(doc, before);
    }

    #[test]
    fn gallery_sections_receive_the_image_list() {
        let mut doc = json!({
            "pages": [{ "sections": [{ "type": "gallery" }] }]
        });
        weave_images(&mut doc, &images());
        assert_eq!(
            doc["pages"][0]["sections"][0]["images"].as_array().unwrap().len(),
            5
        );
    }
}
