//! Renders the descriptor table as JSON Schema and Markdown documentation.

use serde_json::{json, Map, Value};

use crate::schema::{EntityDescriptor, FieldDescriptor, FieldKind, CV, DEFINITIONS};

const SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Builds a JSON Schema document for the CV model, with one `$defs` entry per
/// nested entity.
pub fn json_schema() -> Value {
    let mut root = entity_schema(&CV);
    let defs: Map<String, Value> = DEFINITIONS
        .iter()
        .map(|d| (d.name.to_string(), entity_schema(d)))
        .collect();

    if let Value::Object(obj) = &mut root {
        obj.insert("$schema".to_string(), json!(SCHEMA_DIALECT));
        obj.insert("$defs".to_string(), Value::Object(defs));
    }
    root
}

/// Pretty-printed JSON Schema, newline-terminated.
pub fn json_schema_string() -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(&json_schema())?;
    out.push('\n');
    Ok(out)
}

fn entity_schema(entity: &EntityDescriptor) -> Value {
    let properties: Map<String, Value> = entity
        .fields
        .iter()
        .map(|f| (f.key.to_string(), field_schema(f)))
        .collect();
    let required: Vec<&str> = entity.required_keys().collect();

    json!({
        "title": entity.name,
        "description": entity.description,
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn field_schema(field: &FieldDescriptor) -> Value {
    let mut schema = match field.kind {
        FieldKind::Text => json!({ "type": "string", "minLength": 1 }),
        FieldKind::Email => json!({ "type": "string", "format": "email" }),
        FieldKind::Url => json!({ "type": "string", "format": "uri" }),
        FieldKind::TextList => json!({ "type": "array", "items": { "type": "string" } }),
        FieldKind::Entity(name) => json!({ "$ref": format!("#/$defs/{name}") }),
        FieldKind::EntityList(name) => {
            json!({ "type": "array", "items": { "$ref": format!("#/$defs/{name}") } })
        }
        FieldKind::SectionMap => json!({
            "type": "object",
            "additionalProperties": {
                "anyOf": [
                    { "type": "string" },
                    { "type": "array", "items": { "type": "string" } }
                ]
            }
        }),
    };
    if let Value::Object(obj) = &mut schema {
        obj.insert("description".to_string(), json!(field.description));
    }
    schema
}

/// Markdown reference for the CV data format.
pub fn markdown() -> String {
    let mut md = String::from("# CV Schema Documentation\n\n");
    md.push_str("This document describes the schema for the CV data used by cvpress.\n\n");
    md.push_str("## CV Schema\n\n");

    for field in CV.fields {
        let marker = if field.required { " (required)" } else { "" };
        md.push_str(&format!("### {}{}\n\n", field.key, marker));
        md.push_str(&format!("{}\n\n", field.description));
        md.push_str(&format!("**Type**: `{}`\n\n", field.kind.display_name()));
    }

    md.push_str("\n## Model Definitions\n\n");
    for entity in DEFINITIONS {
        md.push_str(&format!("### {}\n\n{}\n\n", entity.name, entity.description));
        md.push_str("| Property | Type | Required | Description |\n");
        md.push_str("|----------|------|----------|-------------|\n");
        for field in entity.fields {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                field.key,
                field.kind.display_name(),
                if field.required { "Yes" } else { "No" },
                field.description
            ));
        }
        md.push('\n');
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_root_required() {
        let schema = json_schema();
        assert_eq!(
            schema["required"],
            json!(["personal_info", "education", "experience"])
        );
        assert_eq!(schema["properties"]["personal_info"]["$ref"], "#/$defs/PersonalInfo");
    }

    #[test]
    fn test_json_schema_has_all_definitions() {
        let schema = json_schema();
        let defs = schema["$defs"].as_object().expect("defs object");
        for d in DEFINITIONS {
            assert!(defs.contains_key(d.name), "missing {}", d.name);
        }
        assert_eq!(defs["PersonalInfo"]["properties"]["email"]["format"], "email");
        assert_eq!(
            defs["CompanyExperience"]["properties"]["roles"]["items"]["$ref"],
            "#/$defs/Role"
        );
    }

    #[test]
    fn test_json_schema_string_is_valid_json() {
        let text = json_schema_string().unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["title"], "CV");
    }

    #[test]
    fn test_markdown_marks_required_and_tables() {
        let md = markdown();
        assert!(md.contains("### personal_info (required)"));
        assert!(md.contains("### skills\n"));
        assert!(md.contains("### Role"));
        assert!(md.contains("| title | string | Yes | Job title |"));
        assert!(md.contains("| achievements | Array of string | No |"));
    }
}
