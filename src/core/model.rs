// CreatorScope - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// Creator records arrive from an external listing provider whose fields are
// inconsistent: location may sit at the top level or under `details`, pricing
// is free text, analytics may be missing. Every "which field wins" decision is
// made by an accessor on `CreatorRecord`; call sites never reach into the raw
// optional fields directly.

use crate::util::constants::UNKNOWN_LOCATION;
use serde::{Deserialize, Serialize};

// =============================================================================
// Creator record
// =============================================================================

/// A single creator profile as supplied by the listing provider.
///
/// Read-only input to the query engine. Deserialised from the provider's
/// camelCase JSON; `_id` is accepted as an alias for `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRecord {
    /// Stable unique identifier.
    #[serde(default, alias = "_id")]
    pub id: String,

    /// Display name. Searched and used for name ordering.
    #[serde(default)]
    pub name: String,

    /// Categorical genre tag. Pre-filtered by the caller, searched by the engine.
    #[serde(default)]
    pub genre: String,

    /// Platform the creator publishes on (e.g. "Instagram").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Top-level location. Takes precedence over `details.location`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Avatar image URL. Carried through for the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Link to the creator's public profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_link: Option<String>,

    /// Top-level tags. Take precedence over `details.tags`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Top-level pricing text. Takes precedence over `details.pricing`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<String>,

    /// Top-level analytics. Take precedence over `details.analytics`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,

    /// Nested profile details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<CreatorDetails>,
}

/// Nested `details` object of a creator record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Free-text price such as "₹2,000", "$1.5k" or "From $100".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
}

/// Audience statistics. Raw counts, not thousands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    #[serde(default)]
    pub followers: Option<f64>,

    #[serde(default)]
    pub total_views: Option<f64>,

    #[serde(default)]
    pub average_views: Option<f64>,
}

/// Clamp a raw statistic to a usable non-negative number.
fn count_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// First value that is present and not blank.
fn first_non_blank<'a>(candidates: [Option<&'a str>; 2]) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
}

impl CreatorRecord {
    /// Platform name, or `""` when absent.
    pub fn platform(&self) -> &str {
        self.platform.as_deref().unwrap_or("")
    }

    /// Resolved location: top-level first, then `details.location`, blank
    /// values skipped. `""` when the creator is unlocated.
    pub fn location(&self) -> &str {
        first_non_blank([
            self.location.as_deref(),
            self.details.as_ref().and_then(|d| d.location.as_deref()),
        ])
        .unwrap_or("")
    }

    /// Location for display: the resolved location or "Unknown".
    pub fn location_label(&self) -> &str {
        match self.location() {
            "" => UNKNOWN_LOCATION,
            loc => loc,
        }
    }

    /// Tags, top-level first, then `details.tags`. Empty when absent.
    pub fn tags(&self) -> &[String] {
        self.tags
            .as_deref()
            .or_else(|| self.details.as_ref().and_then(|d| d.tags.as_deref()))
            .unwrap_or(&[])
    }

    /// Raw pricing text, top-level first, then `details.pricing`.
    pub fn pricing(&self) -> Option<&str> {
        first_non_blank([
            self.pricing.as_deref(),
            self.details.as_ref().and_then(|d| d.pricing.as_deref()),
        ])
    }

    /// Analytics block in effect, top-level first.
    fn analytics(&self) -> Analytics {
        self.analytics
            .or_else(|| self.details.as_ref().and_then(|d| d.analytics))
            .unwrap_or_default()
    }

    /// Raw follower count, `0.0` when absent.
    pub fn followers(&self) -> f64 {
        count_or_zero(self.analytics().followers)
    }

    /// Follower count in thousands, the unit of `QueryState::followers_range`.
    pub fn followers_k(&self) -> f64 {
        crate::core::range::followers_in_thousands(Some(self.followers()))
    }

    /// Total views, `0.0` when absent.
    pub fn total_views(&self) -> f64 {
        count_or_zero(self.analytics().total_views)
    }

    /// Average views per post, `0.0` when absent.
    pub fn average_views(&self) -> f64 {
        count_or_zero(self.analytics().average_views)
    }
}
