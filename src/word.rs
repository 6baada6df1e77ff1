//! Word path of the pipeline: override lookup, letter mapping and fragment
//! rewriting. Each step operates on a single whitespace-delimited token.

use regex::NoExpand;

use crate::rules::RuleSet;

/// Boundary punctuation recognized by the override matcher.
const PUNCTUATION: &str = ",.!?;:*\"'«»„“<>()[]{}";

/// Look up a whole-word override for `token`.
///
/// At most one leading and one trailing punctuation character are stripped
/// before the comparison; the prefix strip runs first and shortens the token
/// before the suffix check, so a two-character all-punctuation token loses
/// both characters and never matches. The stripped core is lower-cased for
/// comparison only; on a match the replacement is inserted verbatim with the
/// original punctuation reattached.
///
/// Returns `None` when no override applies, so the caller falls through to
/// letter mapping.
pub fn find_override(rules: &RuleSet, token: &str) -> Option<String> {
    let mut chars: Vec<char> = token.chars().collect();

    let mut prefix = None;
    if let Some(&first) = chars.first() {
        if PUNCTUATION.contains(first) {
            prefix = Some(first);
            chars.remove(0);
        }
    }

    let mut suffix = None;
    if let Some(&last) = chars.last() {
        if PUNCTUATION.contains(last) {
            suffix = Some(last);
            chars.pop();
        }
    }

    if chars.is_empty() {
        return None;
    }

    let core = chars.into_iter().collect::<String>().to_lowercase();

    for rule in rules.overrides() {
        if rule.source.to_lowercase() == core {
            let mut replaced = String::new();
            if let Some(p) = prefix {
                replaced.push(p);
            }
            replaced.push_str(&rule.target);
            if let Some(s) = suffix {
                replaced.push(s);
            }
            return Some(replaced);
        }
    }

    None
}

/// Map each character of `token` through the letter table.
///
/// Characters whose case-folded form has no entry pass through unchanged,
/// including digits, punctuation and letters absent from the table. Each
/// character is mapped independently; replacements may be empty or
/// multi-character, so the token can change length before fragment matching.
pub fn map_letters(rules: &RuleSet, token: &str) -> String {
    let mut mapped = String::with_capacity(token.len());

    for c in token.chars() {
        match rules.letter(c) {
            Some(replacement) => mapped.push_str(replacement),
            None => mapped.push(c),
        }
    }

    mapped
}

/// Apply every fragment rule, in document order, to the evolving token.
///
/// Each rule rescans the whole current token and replaces all
/// non-overlapping matches, so a rule sees the cumulative output of all
/// rules before it. Rule authors rely on this ordering to encode
/// exceptions; it must not be reordered or parallelized.
pub fn apply_fragments(rules: &RuleSet, token: &str) -> String {
    let mut word = token.to_string();

    for fragment in rules.fragments() {
        word = fragment
            .pattern
            .replace_all(&word, NoExpand(&fragment.replace))
            .into_owned();
    }

    word
}
