//! Events that own a registration form.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication state of an event.
///
/// Unknown stored values are kept verbatim so they round-trip, and never
/// accept registrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventStatus {
    Draft,
    Active,
    Published,
    Closed,
    Other(String),
}

impl EventStatus {
    /// Parse a stored status value.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        match value {
            "draft" => Self::Draft,
            "active" => Self::Active,
            "published" => Self::Published,
            "closed" => Self::Closed,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Published => "published",
            Self::Closed => "closed",
            Self::Other(value) => value.as_str(),
        }
    }

    /// Whether attendees may load the public form and register.
    #[must_use]
    pub const fn accepts_registrations(&self) -> bool {
        matches!(self, Self::Active | Self::Published)
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event as read from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub banner_url: Option<String>,
    pub status: EventStatus,
}

/// Public summary of an event, as shown above its registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: Uuid,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date_start: Option<DateTime<Utc>>,
    pub event_date_end: Option<DateTime<Utc>>,
    pub banner_url: Option<String>,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            slug: event.slug.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            event_date_start: event.starts_at,
            event_date_end: event.ends_at,
            banner_url: event.banner_url.clone(),
        }
    }
}

/// Shareable URL segment for an event's public form.
///
/// # Examples
/// ```
/// use eventform::domain::EventSlug;
///
/// let slug = EventSlug::from_name("Rust Meetup: Spring '25!", "k3x9");
/// assert_eq!(slug.as_str(), "rust-meetup-spring-25-k3x9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventSlug(String);

impl EventSlug {
    /// Slugify `name` and suffix it with `unique_id`.
    ///
    /// Runs of characters outside `[a-z0-9]` (after lower-casing) collapse to
    /// one hyphen and edge hyphens are trimmed. A name with no usable
    /// characters yields the bare unique id.
    pub fn from_name(name: &str, unique_id: &str) -> Self {
        let mut base = String::with_capacity(name.len());
        let mut pending_hyphen = false;
        for ch in name.chars().flat_map(char::to_lowercase) {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                if pending_hyphen && !base.is_empty() {
                    base.push('-');
                }
                pending_hyphen = false;
                base.push(ch);
            } else {
                pending_hyphen = true;
            }
        }

        if base.is_empty() {
            Self(unique_id.to_owned())
        } else {
            Self(format!("{base}-{unique_id}"))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EventSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
