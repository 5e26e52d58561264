//! Edit-form view of a section: field descriptors the admin UI binds its
//! inputs to. Paths are the dot-separated addresses the mutator accepts,
//! item fields are positionally indexed. Unknown sections expose no fields
//! (and therefore cannot be damaged by an editor that does not understand
//! them).

use serde::Serialize;

use super::model::{KnownSection, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    Textarea,
}

/// One editable input: where it writes, what to label it, what it holds now.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableField {
    pub label: String,
    pub path: String,
    pub kind: FieldKind,
    pub value: String,
}

impl EditableField {
    fn text(label: &str, path: String, value: &str) -> Self {
        Self {
            label: label.to_string(),
            path,
            kind: FieldKind::Text,
            value: value.to_string(),
        }
    }

    fn textarea(label: &str, path: String, value: &str) -> Self {
        Self {
            label: label.to_string(),
            path,
            kind: FieldKind::Textarea,
            value: value.to_string(),
        }
    }
}

/// Describe the editable fields of `sections[section_idx]`.
pub fn section_fields(section: &Section, section_idx: usize) -> Vec<EditableField> {
    let base = format!("sections.{section_idx}");
    match section {
        Section::Known(KnownSection::Features(s)) => {
            let mut fields = vec![EditableField::text("Section Title", format!("{base}.title"), &s.title)];
            for (i, item) in s.items.iter().enumerate() {
                let item_base = format!("{base}.items.{i}");
                fields.push(EditableField::text("Title", format!("{item_base}.title"), &item.title));
                fields.push(EditableField::textarea(
                    "Description",
                    format!("{item_base}.description"),
                    &item.description,
                ));
                fields.push(EditableField::text("Button", format!("{item_base}.cta"), &item.cta));
            }
            fields
        }
        Section::Known(KnownSection::Services(s)) => {
            let mut fields = vec![EditableField::text("Section Title", format!("{base}.title"), &s.title)];
            for (i, item) in s.items.iter().enumerate() {
                let item_base = format!("{base}.items.{i}");
                fields.push(EditableField::text("Name", format!("{item_base}.name"), &item.name));
                fields.push(EditableField::textarea(
                    "Description",
                    format!("{item_base}.description"),
                    &item.description,
                ));
                let price = item.price.as_ref().and_then(|p| p.as_str()).unwrap_or("");
                fields.push(EditableField::text("Price", format!("{item_base}.price"), price));
                fields.push(EditableField::text("Button", format!("{item_base}.cta"), &item.cta));
                fields.push(EditableField::text(
                    "Secondary Button",
                    format!("{item_base}.secondaryCta"),
                    &item.secondary_cta,
                ));
            }
            fields
        }
        Section::Known(KnownSection::Cta(s)) => vec![
            EditableField::text("Title", format!("{base}.title"), &s.title),
            EditableField::textarea("Description", format!("{base}.description"), &s.description),
            EditableField::text("Button", format!("{base}.button"), &s.button),
            EditableField::text(
                "Secondary Button",
                format!("{base}.secondaryButton"),
                &s.secondary_button,
            ),
        ],
        Section::Known(KnownSection::Content(s)) => vec![
            EditableField::text("Title", format!("{base}.title"), &s.title),
            EditableField::textarea("Content", format!("{base}.content"), &s.content),
        ],
        Section::Known(KnownSection::Contact(s)) => vec![
            EditableField::text("Address", format!("{base}.address"), &s.address),
            EditableField::text("Phone", format!("{base}.phone"), &s.phone),
            EditableField::text("Email", format!("{base}.email"), &s.email),
            EditableField::text("Hours", format!("{base}.hours"), &s.hours),
        ],
        Section::Unknown(_) => Vec::new(),
    }
}
