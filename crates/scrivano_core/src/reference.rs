//! Operator-curated reference material for prompt composition.

use crate::{Platform, PostRecord};
use serde::{Deserialize, Serialize};

/// A short piece of writing advice, optionally attributed.
///
/// Tips are operator-curated and persist in the account store until edited
/// or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    /// The tip text
    pub text: String,
    /// Platform the tip applies to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Source URL, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Attributed author, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A post held up as an example of the desired style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExemplaryPost {
    /// The exemplary post text
    pub text: String,
    /// Human-authored explanation of why it exemplifies the style
    pub reason: String,
}

/// The three kinds of source material the prompt composer consumes.
///
/// Tips and exemplary posts are curated; past posts are transient inputs
/// assembled per request, used only for avoidance or style modeling.
///
/// # Examples
///
/// ```
/// use scrivano_core::{ExemplaryPost, ReferenceMaterial};
///
/// let material = ReferenceMaterial::Exemplary(ExemplaryPost {
///     text: "one clear idea per post".to_string(),
///     reason: "single thought, no hedging".to_string(),
/// });
/// assert!(matches!(material, ReferenceMaterial::Exemplary(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferenceMaterial {
    /// Curated writing tip
    Tip(Tip),
    /// Curated exemplary post
    Exemplary(ExemplaryPost),
    /// Historical post supplied per request
    PastPost(PostRecord),
}
