//! Avoidance-list assembly.

/// Maximum entries the avoidance section may carry.
pub(crate) const MAX_AVOID_ENTRIES: usize = 30;

/// Maximum characters per displayed avoidance entry.
pub(crate) const MAX_AVOID_ENTRY_CHARS: usize = 100;

/// Build the bounded avoidance list from the raw candidate texts.
///
/// Candidates are deduplicated by exact string equality preserving
/// first-seen order (callers pass recents first, so recent texts are never
/// the ones dropped), capped at 30 entries, then each entry has internal
/// whitespace collapsed to single spaces and is truncated to 100 characters
/// for display. Blank candidates are skipped.
///
/// # Examples
///
/// ```
/// use scrivano_prompt::build_avoidance_list;
///
/// let entries = build_avoidance_list(vec![
///     "keep  this".to_string(),
///     "keep  this".to_string(),
///     "  ".to_string(),
/// ]);
/// assert_eq!(entries, vec!["keep this"]);
/// ```
pub fn build_avoidance_list(candidates: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for candidate in candidates {
        if candidate.trim().is_empty() {
            continue;
        }
        if seen.contains(&candidate) {
            continue;
        }
        seen.push(candidate);
        if seen.len() == MAX_AVOID_ENTRIES {
            break;
        }
    }

    seen.into_iter()
        .map(|entry| {
            let collapsed = entry.split_whitespace().collect::<Vec<_>>().join(" ");
            collapsed.chars().take(MAX_AVOID_ENTRY_CHARS).collect()
        })
        .collect()
}
