//! Platform and media classification enums.

use serde::{Deserialize, Serialize};

/// Social platforms a post or draft can target.
///
/// The string form is what the schedule store keys reservations on, so the
/// `strum` conversions and serde renames must stay in lockstep.
///
/// # Examples
///
/// ```
/// use scrivano_core::Platform;
/// use std::str::FromStr;
///
/// assert_eq!(Platform::Twitter.to_string(), "twitter");
/// assert_eq!(Platform::from_str("bluesky").unwrap(), Platform::Bluesky);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    /// Twitter / X
    Twitter,
    /// Bluesky
    Bluesky,
    /// Mastodon
    Mastodon,
}

/// Media classification of a post body.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    /// Plain text, no attachments
    #[default]
    Text,
    /// Post carries one or more images
    Image,
    /// Post carries a video
    Video,
}
