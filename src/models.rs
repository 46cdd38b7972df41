use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A record kind stored in its own collection.
pub trait Collection {
    const COLLECTION_NAME: &'static str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDateTime,
    pub location: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blogpost {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    /// Markdown body.
    pub content: String,
    pub cover_image: Option<String>,
    #[serde(default = "default_author")]
    pub author: Option<String>,
    #[serde(default = "utc_now")]
    pub published_at: NaiveDateTime,
}

pub const DEFAULT_AUTHOR: &str = "Team Atmasakshi";

fn default_author() -> Option<String> {
    Some(DEFAULT_AUTHOR.to_string())
}

fn utc_now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Contact {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Volunteer {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    pub areas: Vec<String>,
    pub notes: Option<String>,
}

// not exposed by any endpoint yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    pub upi_id: String,
    pub qr_image_url: Option<String>,
    /// How donations are used.
    pub note: Option<String>,
}

impl Collection for Event {
    const COLLECTION_NAME: &'static str = "event";
}

impl Collection for Blogpost {
    const COLLECTION_NAME: &'static str = "blogpost";
}

impl Collection for Contact {
    const COLLECTION_NAME: &'static str = "contact";
}

impl Collection for Volunteer {
    const COLLECTION_NAME: &'static str = "volunteer";
}

impl Collection for Donation {
    const COLLECTION_NAME: &'static str = "donation";
}
