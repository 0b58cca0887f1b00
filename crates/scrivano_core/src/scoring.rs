//! Engagement scoring for ranking source posts.
//!
//! The score is an engagement rate when the platform reports impressions,
//! and degrades to a raw engagement count when it does not. Scores are only
//! compared against other posts from the same account, so the two regimes
//! never mix within one ranking unless the caller supplies an impression
//! proxy to bridge them.

use crate::EngagementMetrics;
use serde::{Deserialize, Serialize};

/// Options controlling the impression-divisor fallback.
///
/// # Examples
///
/// ```
/// use scrivano_core::ScoreOptions;
///
/// let opts = ScoreOptions {
///     use_impression_proxy: true,
///     impression_proxy: Some(500.0),
/// };
/// assert!(opts.use_impression_proxy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreOptions {
    /// Divide by `impression_proxy` when the post reports no impressions
    #[serde(default)]
    pub use_impression_proxy: bool,
    /// Substitute divisor, typically the account's median impression count
    #[serde(default)]
    pub impression_proxy: Option<f64>,
}

/// Compute the engagement score for a set of metrics.
///
/// The numerator weights reposts highest (3), then likes and link clicks
/// (2 each), then replies (1). With positive impressions the score is
/// `numerator / impressions` rounded to six decimal places; without them it
/// falls back to the configured proxy divisor, or to the raw numerator when
/// no proxy applies. There are no error conditions.
///
/// # Examples
///
/// ```
/// use scrivano_core::{score, EngagementMetrics, ScoreOptions};
///
/// let metrics = EngagementMetrics {
///     impressions: Some(1000),
///     likes: 10,
///     reposts: 2,
///     replies: 3,
///     ..Default::default()
/// };
/// assert_eq!(score(&metrics, &ScoreOptions::default()), 0.029);
/// ```
pub fn score(metrics: &EngagementMetrics, options: &ScoreOptions) -> f64 {
    let numerator = (metrics.likes * 2 + metrics.reposts * 3 + metrics.replies
        + metrics.link_clicks * 2) as f64;

    let divisor = match metrics.impressions {
        Some(impressions) if impressions > 0 => impressions as f64,
        _ => match (options.use_impression_proxy, options.impression_proxy) {
            (true, Some(proxy)) if proxy > 0.0 => proxy,
            _ => 1.0,
        },
    };

    round6(numerator / divisor)
}

/// Round to six decimal places, keeping rate scores comparable.
fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
