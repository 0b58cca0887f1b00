//! Prompt assembly from weighted source material.

use crate::avoidance::build_avoidance_list;
use crate::{LengthSampler, UniformLengthSampler};
use derive_builder::Builder;
use scrivano_core::{ExemplaryPost, PostRecord, ScheduledDraft, Tip};
use tracing::debug;

/// Marker emitted when the avoidance list is empty.
const NOTHING_TO_AVOID: &str = "(nothing to avoid)";

/// Everything the composer needs for one generation cycle.
///
/// The orchestrator assembles these from the account store: up to N
/// top-scored posts, up to N most-recent posts, existing drafts, curated
/// tips and exemplary posts, and the account concept.
///
/// # Examples
///
/// ```
/// use scrivano_prompt::PromptInputsBuilder;
///
/// let inputs = PromptInputsBuilder::default()
///     .concept(Some("daily notes from a ceramics studio".to_string()))
///     .build()
///     .unwrap();
/// assert_eq!(inputs.min_length, 1);
/// assert_eq!(inputs.max_length, 240);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct PromptInputs {
    /// Top-scoring posts, best first
    #[builder(default)]
    pub top_posts: Vec<PostRecord>,
    /// Reference tips selected for this account
    #[builder(default)]
    pub reference_tips: Vec<Tip>,
    /// Most-recent posts, newest first
    #[builder(default)]
    pub recent_posts: Vec<PostRecord>,
    /// Existing unpublished drafts
    #[builder(default)]
    pub existing_drafts: Vec<ScheduledDraft>,
    /// Caller-supplied extra strings to avoid
    #[builder(default)]
    pub extra_avoid_texts: Vec<String>,
    /// Curated tips
    #[builder(default)]
    pub tips: Vec<Tip>,
    /// Curated exemplary posts
    #[builder(default)]
    pub exemplary_posts: Vec<ExemplaryPost>,
    /// Account persona/concept statement
    #[builder(default)]
    pub concept: Option<String>,
    /// Lower bound of the target-length draw
    #[builder(default = "1")]
    pub min_length: u32,
    /// Upper bound of the target-length draw
    #[builder(default = "240")]
    pub max_length: u32,
}

/// Assembles generation prompts.
///
/// Stateless apart from the length sampler; safe to share across
/// concurrent calls when the sampler is.
///
/// # Examples
///
/// ```
/// use scrivano_prompt::{FixedLengthSampler, PromptComposer, PromptInputsBuilder};
///
/// let mut composer = PromptComposer::with_sampler(FixedLengthSampler(140));
/// let prompt = composer.compose(&PromptInputsBuilder::default().build().unwrap());
/// assert!(prompt.contains("140"));
/// ```
#[derive(Debug)]
pub struct PromptComposer<S: LengthSampler = UniformLengthSampler> {
    sampler: S,
}

impl PromptComposer<UniformLengthSampler> {
    /// Composer with the production uniform-random length draw.
    pub fn new() -> Self {
        Self {
            sampler: UniformLengthSampler,
        }
    }
}

impl Default for PromptComposer<UniformLengthSampler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LengthSampler> PromptComposer<S> {
    /// Composer with an injected length sampler, for deterministic tests.
    pub fn with_sampler(sampler: S) -> Self {
        Self { sampler }
    }

    /// Build the prompt for one generation cycle.
    ///
    /// Section order is deliberate: style precedes topic so the model
    /// weights voice over subject matter, and exemplary posts precede
    /// top-scoring posts within the style section.
    pub fn compose(&mut self, inputs: &PromptInputs) -> String {
        let target_length = self.sampler.draw(inputs.min_length, inputs.max_length);

        let avoidance = {
            let mut candidates: Vec<String> = Vec::new();
            candidates.extend(inputs.recent_posts.iter().map(|p| p.text.clone()));
            candidates.extend(inputs.existing_drafts.iter().map(|d| d.text.clone()));
            candidates.extend(inputs.extra_avoid_texts.iter().cloned());
            build_avoidance_list(candidates)
        };

        debug!(
            target_length,
            style_exemplars = inputs.exemplary_posts.len(),
            style_posts = inputs.top_posts.len(),
            idea_tips = inputs.tips.len() + inputs.reference_tips.len(),
            avoid_entries = avoidance.len(),
            "Composing generation prompt"
        );

        let mut prompt = String::new();

        prompt.push_str("You write posts for a social media account.\n");
        if let Some(concept) = &inputs.concept {
            prompt.push_str(&format!("Account concept: {}\n", concept));
        }
        prompt.push('\n');

        prompt.push_str("## Style references (match this voice)\n");
        for exemplar in &inputs.exemplary_posts {
            prompt.push_str(&format!("- {} (why: {})\n", exemplar.text, exemplar.reason));
        }
        for post in &inputs.top_posts {
            prompt.push_str(&format!("- {}\n", post.text));
        }
        prompt.push('\n');

        prompt.push_str("## Ideas to draw from\n");
        for tip in &inputs.tips {
            prompt.push_str(&format!("- {}\n", tip.text));
        }
        for tip in &inputs.reference_tips {
            prompt.push_str(&format!("- {}\n", tip.text));
        }
        prompt.push('\n');

        prompt.push_str("## Do not duplicate any of the following\n");
        if avoidance.is_empty() {
            prompt.push_str(NOTHING_TO_AVOID);
            prompt.push('\n');
        } else {
            for entry in &avoidance {
                prompt.push_str(&format!("- {}\n", entry));
            }
        }
        prompt.push('\n');

        prompt.push_str("## Task\n");
        prompt.push_str(&format!(
            "Write one new post of about {} characters (at least {}, at most {}).\n",
            target_length, inputs.min_length, inputs.max_length
        ));
        prompt.push_str(
            "It must not duplicate or closely paraphrase anything in the list above.\n",
        );
        prompt.push_str("Write in English.\n");
        prompt.push_str(
            "Respond with strict JSON only, no markdown, shaped exactly as \
             {\"tweet\": string, \"explanation\": string}.\n",
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedLengthSampler;
    use chrono::Utc;
    use scrivano_core::{DraftStatus, EngagementMetrics, MediaKind, Platform};

    fn post(text: &str) -> PostRecord {
        PostRecord {
            platform: Platform::Twitter,
            external_id: "1".to_string(),
            text: text.to_string(),
            created_at: Utc::now(),
            media: MediaKind::Text,
            has_link: false,
            metrics: EngagementMetrics::default(),
            score: 0.0,
            raw_ref: None,
        }
    }

    fn draft(text: &str) -> ScheduledDraft {
        ScheduledDraft {
            id: 1,
            platform: Platform::Twitter,
            account_id: None,
            text: text.to_string(),
            status: DraftStatus::Draft,
            schedule_time: None,
        }
    }

    fn tip(text: &str) -> Tip {
        Tip {
            text: text.to_string(),
            platform: None,
            url: None,
            author: None,
        }
    }

    #[test]
    fn deterministic_with_fixed_sampler() {
        let inputs = PromptInputsBuilder::default()
            .top_posts(vec![post("a hit post")])
            .tips(vec![tip("keep it short")])
            .build()
            .unwrap();
        let mut composer = PromptComposer::with_sampler(FixedLengthSampler(99));
        assert_eq!(composer.compose(&inputs), composer.compose(&inputs));
    }

    #[test]
    fn style_section_precedes_idea_section() {
        let inputs = PromptInputsBuilder::default()
            .top_posts(vec![post("style text")])
            .tips(vec![tip("idea text")])
            .build()
            .unwrap();
        let prompt = PromptComposer::with_sampler(FixedLengthSampler(100)).compose(&inputs);
        let style_at = prompt.find("style text").unwrap();
        let idea_at = prompt.find("idea text").unwrap();
        assert!(style_at < idea_at);
    }

    #[test]
    fn exemplars_precede_top_posts_in_style() {
        let inputs = PromptInputsBuilder::default()
            .exemplary_posts(vec![ExemplaryPost {
                text: "exemplar body".to_string(),
                reason: "crisp".to_string(),
            }])
            .top_posts(vec![post("top body")])
            .build()
            .unwrap();
        let prompt = PromptComposer::with_sampler(FixedLengthSampler(100)).compose(&inputs);
        assert!(prompt.find("exemplar body").unwrap() < prompt.find("top body").unwrap());
    }

    #[test]
    fn concept_statement_included_when_present() {
        let inputs = PromptInputsBuilder::default()
            .concept(Some("a lighthouse keeper's diary".to_string()))
            .build()
            .unwrap();
        let prompt = PromptComposer::with_sampler(FixedLengthSampler(50)).compose(&inputs);
        assert!(prompt.contains("Account concept: a lighthouse keeper's diary"));
    }

    #[test]
    fn empty_avoidance_emits_marker() {
        let inputs = PromptInputsBuilder::default().build().unwrap();
        let prompt = PromptComposer::with_sampler(FixedLengthSampler(50)).compose(&inputs);
        assert!(prompt.contains("(nothing to avoid)"));
    }

    #[test]
    fn avoidance_union_caps_at_thirty() {
        let recents: Vec<PostRecord> = (0..20).map(|i| post(&format!("recent {i}"))).collect();
        let drafts: Vec<ScheduledDraft> = (0..10).map(|i| draft(&format!("draft {i}"))).collect();
        let extras: Vec<String> = (0..5).map(|i| format!("extra {i}")).collect();
        let inputs = PromptInputsBuilder::default()
            .recent_posts(recents)
            .existing_drafts(drafts)
            .extra_avoid_texts(extras)
            .build()
            .unwrap();
        let prompt = PromptComposer::with_sampler(FixedLengthSampler(50)).compose(&inputs);

        // 35 distinct candidates; recents and drafts survive, extras drop.
        assert!(prompt.contains("recent 19"));
        assert!(prompt.contains("draft 9"));
        assert!(!prompt.contains("extra 0"));
    }

    #[test]
    fn task_directive_requires_strict_json() {
        let inputs = PromptInputsBuilder::default().build().unwrap();
        let prompt = PromptComposer::with_sampler(FixedLengthSampler(50)).compose(&inputs);
        assert!(prompt.contains("{\"tweet\": string, \"explanation\": string}"));
        assert!(prompt.contains("Write in English."));
    }

    #[test]
    fn drawn_length_appears_in_directive() {
        let inputs = PromptInputsBuilder::default().build().unwrap();
        let prompt = PromptComposer::with_sampler(FixedLengthSampler(187)).compose(&inputs);
        assert!(prompt.contains("about 187 characters (at least 1, at most 240)"));
    }
}
