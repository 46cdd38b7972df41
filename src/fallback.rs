//! Sample content served when the database is missing or has nothing to show.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    db::{to_record, Record},
    models::{Blogpost, Event, DEFAULT_AUTHOR},
};

fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("sample dates are valid")
}

lazy_static::lazy_static! {
    static ref SAMPLE_EVENTS: Vec<Event> = vec![
        Event {
            title: "Guided Meditation Camp".to_string(),
            description: Some("A calm evening of breath awareness and mantra meditation.".to_string()),
            date: at(2025, 1, 20, 18),
            location: Some("Vidya Nagar, Gokak".to_string()),
            image_url: Some("https://images.unsplash.com/photo-1540569014015-19a7be504e3a?q=80&w=1600&auto=format&fit=crop".to_string()),
            tags: vec!["meditation".to_string(), "peace".to_string()],
        },
        Event {
            title: "Blood Donation Drive".to_string(),
            description: Some("Serve humanity by donating blood and saving lives.".to_string()),
            date: at(2025, 2, 5, 10),
            location: Some("Gokak City Hospital".to_string()),
            image_url: Some("https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?q=80&w=1600&auto=format&fit=crop".to_string()),
            tags: vec!["service".to_string(), "health".to_string()],
        },
        Event {
            title: "Organic Farming Workshop".to_string(),
            description: Some("Hands-on session on natural living and soil health.".to_string()),
            date: at(2025, 2, 22, 9),
            location: Some("Community Farm, Gokak".to_string()),
            image_url: Some("https://images.unsplash.com/photo-1501004318641-b39e6451bec6?q=80&w=1600&auto=format&fit=crop".to_string()),
            tags: vec!["farming".to_string(), "environment".to_string()],
        },
    ];

    static ref SAMPLE_BLOGPOSTS: Vec<Blogpost> = vec![
        Blogpost {
            title: "Meditation for Inner Clarity".to_string(),
            slug: "meditation-for-inner-clarity".to_string(),
            excerpt: Some("A gentle practice to quiet the mind and open the heart.".to_string()),
            content: "Sit comfortably, close your eyes and follow the breath. \
                      When the mind wanders, return to the breath without judgement."
                .to_string(),
            cover_image: Some("https://images.unsplash.com/photo-1506126613408-eca07ce68773?q=80&w=1600&auto=format&fit=crop".to_string()),
            author: Some(DEFAULT_AUTHOR.to_string()),
            published_at: at(2025, 1, 10, 0),
        },
        Blogpost {
            title: "Serving with Compassion".to_string(),
            slug: "serving-with-compassion".to_string(),
            excerpt: Some("Seva as a path to self-realization and community well-being.".to_string()),
            content: "Selfless service softens the ego and connects us to the people around us. \
                      Every act of seva, however small, is an offering."
                .to_string(),
            cover_image: Some("https://images.unsplash.com/photo-1493836512294-502baa1986e2?q=80&w=1600&auto=format&fit=crop".to_string()),
            author: Some(DEFAULT_AUTHOR.to_string()),
            published_at: at(2025, 1, 5, 0),
        },
        Blogpost {
            title: "Why Organic Farming Matters".to_string(),
            slug: "why-organic-farming-matters".to_string(),
            excerpt: Some("Nurturing the earth is nurturing ourselves.".to_string()),
            content: "Healthy soil grows healthy food. Natural farming keeps water clean, \
                      protects pollinators and sustains the farmers who feed us."
                .to_string(),
            cover_image: Some("https://images.unsplash.com/photo-1465406325902-283296f2c1c7?q=80&w=1600&auto=format&fit=crop".to_string()),
            author: Some(DEFAULT_AUTHOR.to_string()),
            published_at: at(2024, 12, 20, 0),
        },
    ];
}

// a negative limit drops that many samples from the end
fn take_count(limit: i64, len: usize) -> usize {
    match usize::try_from(limit) {
        Ok(count) => count,
        Err(_) => len.saturating_sub(usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX)),
    }
}

/// Sample events, truncated to `limit`.
pub fn events(limit: i64) -> anyhow::Result<Vec<Record>> {
    SAMPLE_EVENTS
        .iter()
        .take(take_count(limit, SAMPLE_EVENTS.len()))
        .map(to_record)
        .collect()
}

/// Sample blog posts, truncated to `limit`.
pub fn blogposts(limit: i64) -> anyhow::Result<Vec<Record>> {
    SAMPLE_BLOGPOSTS
        .iter()
        .take(take_count(limit, SAMPLE_BLOGPOSTS.len()))
        .map(to_record)
        .collect()
}
