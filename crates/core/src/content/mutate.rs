//! Single-field edits on the raw content document.
//!
//! Callers treat documents as immutable values between renders, so every
//! entry point clones the input and returns a new document. Paths are
//! dot-separated; intermediate objects are created on demand. There is
//! deliberately no shape checking (the document is schema-on-read), and a
//! malformed scope (missing page slug, section index out of range) degrades
//! to a no-op rather than an error.

use serde_json::{Map, Value};

/// Set `value` at `path` ("hero.headline"), creating intermediate objects
/// along the way. Non-object intermediates are replaced with objects, the
/// same way the editor has always behaved.
pub fn set_at_path(doc: &Value, path: &str, value: Value) -> Value {
    let mut updated = doc.clone();
    set_in_place(&mut updated, path, value);
    updated
}

/// Set `value` at `path` scoped to the first page whose slug matches.
/// Missing `pages` array or unmatched slug returns the document unchanged.
pub fn set_at_page_path(doc: &Value, page_slug: &str, path: &str, value: Value) -> Value {
    let mut updated = doc.clone();
    let Some(page) = page_mut(&mut updated, page_slug) else {
        return updated;
    };
    set_in_place(page, path, value);
    updated
}

/// Set one field of `sections[section_idx].items[item_idx]` on the page with
/// the given slug, creating the item object if absent. Any missing scope is
/// a no-op.
pub fn set_section_item_field(
    doc: &Value,
    page_slug: &str,
    section_idx: usize,
    item_idx: usize,
    field: &str,
    value: Value,
) -> Value {
    let mut updated = doc.clone();
    let Some(page) = page_mut(&mut updated, page_slug) else {
        return updated;
    };
    let Some(section) = page
        .get_mut("sections")
        .and_then(Value::as_array_mut)
        .and_then(|sections| sections.get_mut(section_idx))
    else {
        return updated;
    };
    let Some(section) = section.as_object_mut() else {
        return updated;
    };

    let items = section
        .entry("items")
        .or_insert_with(|| Value::Array(Vec::new()));
    let Some(items) = items.as_array_mut() else {
        return updated;
    };
    while items.len() <= item_idx {
        items.push(Value::Object(Map::new()));
    }
    if !items[item_idx].is_object() {
        items[item_idx] = Value::Object(Map::new());
    }
    if let Some(item) = items[item_idx].as_object_mut() {
        item.insert(field.to_string(), value);
    }
    updated
}

fn set_in_place(target: &mut Value, path: &str, value: Value) {
    let mut keys = path.split('.').peekable();
    let mut node = target;
    while let Some(key) = keys.next() {
        let last = keys.peek().is_none();

        // Numeric segments index into arrays, padding with nulls the way a
        // dynamic-language walk would.
        if let (Some(idx), true) = (key.parse::<usize>().ok(), node.is_array()) {
            let arr = node.as_array_mut().expect("checked is_array");
            while arr.len() <= idx {
                arr.push(Value::Null);
            }
            if last {
                arr[idx] = value;
                return;
            }
            node = &mut arr[idx];
            if !node.is_object() && !node.is_array() {
                *node = Value::Object(Map::new());
            }
            continue;
        }

        // A non-numeric key cannot address into an array; leave the
        // document untouched rather than replacing the array.
        if node.is_array() {
            return;
        }

        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        let obj = node.as_object_mut().expect("node was just made an object");
        if last {
            obj.insert(key.to_string(), value);
            return;
        }
        node = obj.entry(key).or_insert_with(|| Value::Object(Map::new()));
        if !node.is_object() && !node.is_array() {
            *node = Value::Object(Map::new());
        }
    }
}

fn page_mut<'a>(doc: &'a mut Value, slug: &str) -> Option<&'a mut Value> {
    doc.get_mut("pages")?
        .as_array_mut()?
        .iter_mut()
        .find(|p| p.get("slug").and_then(Value::as_str) == Some(slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "hero": { "headline": "Old", "subheadline": "Sub" },
            "pages": [
                {
                    "slug": "home",
                    "title": "Home",
                    "hero": { "headline": "Hi" },
                    "sections": [
                        { "type": "features", "title": "Why", "items": [{ "title": "Quality" }] }
                    ]
                },
                { "slug": "about", "title": "About" }
            ]
        })
    }

    #[test]
    fn set_and_read_back() {
        let doc = sample();
        let updated = set_at_path(&doc, "hero.headline", json!("New Headline"));
        assert_eq!(updated["hero"]["headline"], "New Headline");
        // Siblings untouched.
        assert_eq!(updated["hero"]["subheadline"], "Sub");
        assert_eq!(updated["pages"], doc["pages"]);
    }

    #[test]
    fn input_document_is_not_aliased() {
        let doc = sample();
        let updated = set_at_path(&doc, "hero.headline", json!("Changed"));
        assert_eq!(doc["hero"]["headline"], "Old");
        assert_ne!(doc, updated);
    }

    #[test]
    fn creates_intermediate_objects() {
        let doc = json!({});
        let updated = set_at_path(&doc, "navigation.style.theme", json!("dark"));
        assert_eq!(updated["navigation"]["style"]["theme"], "dark");
    }

    #[test]
    fn value_type_is_not_checked() {
        let doc = sample();
        let updated = set_at_path(&doc, "hero.headline", json!({ "nested": true }));
        assert_eq!(updated["hero"]["headline"]["nested"], true);
    }

    #[test]
    fn numeric_segments_index_into_arrays() {
        let doc = sample();
        let updated = set_at_page_path(&doc, "home", "sections.0.title", json!("Edited"));
        assert_eq!(updated["pages"][0]["sections"][0]["title"], "Edited");
        // The array stays an array.
        assert!(updated["pages"][0]["sections"].is_array());
    }

    #[test]
    fn non_numeric_key_on_array_is_a_noop() {
        let doc = sample();
        let updated = set_at_path(&doc, "pages.foo", json!("x"));
        assert_eq!(updated, doc);
        assert!(updated["pages"].is_array());

        // Deeper in the walk too.
        let updated = set_at_path(&doc, "pages.foo.bar", json!("x"));
        assert_eq!(updated, doc);
    }

    #[test]
    fn page_scoped_set() {
        let doc = sample();
        let updated = set_at_page_path(&doc, "home", "hero.headline", json!("Front"));
        assert_eq!(updated["pages"][0]["hero"]["headline"], "Front");
        assert_eq!(updated["pages"][1], doc["pages"][1]);
    }

    #[test]
    fn missing_slug_is_a_noop() {
        let doc = sample();
        let updated = set_at_page_path(&doc, "missing", "hero.headline", json!("x"));
        assert_eq!(updated, doc);
    }

    #[test]
    fn missing_pages_array_is_a_noop() {
        let doc = json!({ "hero": { "headline": "Hi" } });
        let updated = set_at_page_path(&doc, "home", "hero.headline", json!("x"));
        assert_eq!(updated, doc);
    }

    #[test]
    fn first_matching_slug_wins() {
        let doc = json!({
            "pages": [
                { "slug": "home", "title": "First" },
                { "slug": "home", "title": "Second" }
            ]
        });
        let updated = set_at_page_path(&doc, "home", "title", json!("Edited"));
        assert_eq!(updated["pages"][0]["title"], "Edited");
        assert_eq!(updated["pages"][1]["title"], "Second");
    }

    #[test]
    fn section_item_field_set() {
        let doc = sample();
        let updated = set_section_item_field(&doc, "home", 0, 0, "title", json!("Speed"));
        assert_eq!(updated["pages"][0]["sections"][0]["items"][0]["title"], "Speed");
    }

    #[test]
    fn section_item_created_when_absent() {
        let doc = sample();
        let updated = set_section_item_field(&doc, "home", 0, 2, "title", json!("Third"));
        assert_eq!(updated["pages"][0]["sections"][0]["items"][2]["title"], "Third");
        // Existing item untouched, padding objects in between.
        assert_eq!(updated["pages"][0]["sections"][0]["items"][0]["title"], "Quality");
        assert!(updated["pages"][0]["sections"][0]["items"][1].is_object());
    }

    #[test]
    fn section_index_out_of_range_is_a_noop() {
        let doc = sample();
        let updated = set_section_item_field(&doc, "home", 9, 0, "title", json!("x"));
        assert_eq!(updated, doc);
    }

    #[test]
    fn unknown_section_survives_unrelated_edit() {
        let doc = json!({
            "pages": [{
                "slug": "home",
                "sections": [
                    { "type": "gallery", "images": ["a.png"] },
                    { "type": "cta", "title": "Go" }
                ]
            }]
        });
        let updated = set_section_item_field(&doc, "home", 1, 0, "title", json!("x"));
        assert_eq!(updated["pages"][0]["sections"][0], doc["pages"][0]["sections"][0]);
    }
}
