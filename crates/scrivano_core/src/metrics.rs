//! Engagement metrics consumed by the scoring engine.

use serde::{Deserialize, Serialize};

/// The numeric engagement tuple reported for a post.
///
/// `impressions` is optional because some platforms never report it; every
/// other count defaults to zero when absent from the source payload.
///
/// # Examples
///
/// ```
/// use scrivano_core::EngagementMetrics;
///
/// let metrics = EngagementMetrics {
///     impressions: Some(1000),
///     likes: 10,
///     reposts: 2,
///     replies: 3,
///     ..Default::default()
/// };
///
/// assert_eq!(metrics.impressions, Some(1000));
/// assert_eq!(metrics.quotes, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngagementMetrics {
    /// Times the post was shown; `None` when the platform does not report it
    #[serde(default)]
    pub impressions: Option<u64>,
    /// Like / favorite count
    #[serde(default)]
    pub likes: u64,
    /// Repost / retweet / boost count
    #[serde(default)]
    pub reposts: u64,
    /// Direct reply count
    #[serde(default)]
    pub replies: u64,
    /// Quote-post count, where the platform distinguishes it from reposts
    #[serde(default)]
    pub quotes: u64,
    /// Outbound link click count, where reported
    #[serde(default)]
    pub link_clicks: u64,
}
