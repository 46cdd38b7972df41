//! Hand-maintained description of the record kinds, served at `/schema`.
//!
//! Keep in sync with `models`.

use axum::Json;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub required: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescription {
    pub name: &'static str,
    pub fields: Vec<SchemaField>,
}

const fn required(name: &'static str, kind: &'static str) -> SchemaField {
    SchemaField {
        name,
        kind,
        required: true,
    }
}

const fn optional(name: &'static str, kind: &'static str) -> SchemaField {
    SchemaField {
        name,
        kind,
        required: false,
    }
}

pub fn describe() -> Vec<SchemaDescription> {
    vec![
        SchemaDescription {
            name: "event",
            fields: vec![
                required("title", "string"),
                optional("description", "string"),
                required("date", "datetime"),
                optional("location", "string"),
                optional("image_url", "string"),
                optional("tags", "list[string]"),
            ],
        },
        SchemaDescription {
            name: "blogpost",
            fields: vec![
                required("title", "string"),
                required("slug", "string"),
                optional("excerpt", "string"),
                required("content", "string"),
                optional("cover_image", "string"),
                optional("author", "string"),
                optional("published_at", "datetime"),
            ],
        },
        SchemaDescription {
            name: "contact",
            fields: vec![
                required("name", "string"),
                required("email", "email"),
                optional("phone", "string"),
                required("message", "string"),
            ],
        },
        SchemaDescription {
            name: "volunteer",
            fields: vec![
                required("name", "string"),
                required("email", "email"),
                required("phone", "string"),
                required("areas", "list[string]"),
                optional("notes", "string"),
            ],
        },
    ]
}

pub async fn get_schema() -> Json<Vec<SchemaDescription>> {
    Json(describe())
}
