//! Historical post records supplied by the sync collaborator.

use crate::{EngagementMetrics, MediaKind, Platform};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized historical post with its engagement metrics and score.
///
/// Records are owned by the platform-sync collaborator and read-only to
/// this pipeline: immutable once scored, except for metric refresh on
/// resync. The `score` field is produced by [`crate::score`].
///
/// # Examples
///
/// ```
/// use scrivano_core::{EngagementMetrics, MediaKind, Platform, PostRecord};
/// use chrono::Utc;
///
/// let post = PostRecord {
///     platform: Platform::Twitter,
///     external_id: "1845".to_string(),
///     text: "shipping notes".to_string(),
///     created_at: Utc::now(),
///     media: MediaKind::Text,
///     has_link: false,
///     metrics: EngagementMetrics::default(),
///     score: 0.0,
///     raw_ref: None,
/// };
/// assert_eq!(post.platform, Platform::Twitter);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Platform the post was published on
    pub platform: Platform,
    /// Identifier assigned by the platform
    pub external_id: String,
    /// Post body text
    pub text: String,
    /// Publication timestamp
    pub created_at: DateTime<Utc>,
    /// Media classification of the body
    #[serde(default)]
    pub media: MediaKind,
    /// Whether the post carries an outbound link
    #[serde(default)]
    pub has_link: bool,
    /// Engagement metrics, refreshed on resync
    #[serde(default)]
    pub metrics: EngagementMetrics,
    /// Computed engagement score
    #[serde(default)]
    pub score: f64,
    /// Reference to the raw platform payload, when retained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_ref: Option<String>,
}
