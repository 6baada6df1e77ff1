//! Rule-driven phonetic transcription between orthographies.
//!
//! The engine rewrites text written in one language's spelling into an
//! approximate phonetic spelling for a second language's reading
//! conventions, word by word. All linguistics live in a replaceable JSON
//! rule document; the engine itself is a deterministic pipeline:
//!
//! 1. **Override lookup** - whole-word replacements, punctuation-aware
//! 2. **Letter mapping** - independent per-character substitution
//! 3. **Fragment rewriting** - ordered regex rewrites over the mapped word
//!
//! Decimal numerals take a separate path and are spelled out as words using
//! place-value decomposition, with an optional two-digit fractional part.
//!
//! The crate ships with a default rule set that renders Esperanto in Polish
//! phonetics:
//!
//! ```
//! use transkribo::Transcriber;
//!
//! let transcriber = Transcriber::new();
//! assert_eq!(
//!     transcriber.transcribe("Saluton, kiel vi fartas?"),
//!     "saluton, kijel wij fartas?"
//! );
//! ```
//!
//! Rule loading is the only fallible operation; transcription is total over
//! any string input and never fails.

pub mod error;
pub mod loader;
pub mod number;
pub mod rules;
pub mod word;

pub use error::{RuleError, RuleResult};
pub use rules::{FragmentRule, OverrideRule, RuleDocument, RuleSet};

/// Default rule document: Esperanto rendered in Polish phonetics.
pub const DEFAULT_RULES: &str = include_str!("../rules/eo-pl.json");

/// Transcribes text using one active rule set at a time.
///
/// The transcriber owns exactly one [`RuleSet`]; [`Transcriber::load_rules`]
/// replaces it wholesale on success and leaves it untouched on failure, so
/// callers never observe a half-updated rule table. There is no internal
/// locking: concurrent use requires the caller to serialize reloads against
/// in-flight transcriptions.
pub struct Transcriber {
    rules: RuleSet,
}

impl Transcriber {
    /// Create a transcriber with the embedded default rules.
    pub fn new() -> Self {
        // Embedded document, validated by test.
        let rules = loader::load_rules_from_str(DEFAULT_RULES)
            .expect("embedded default rules must be valid");

        Transcriber { rules }
    }

    /// Create a transcriber with an already compiled rule set.
    pub fn with_rules(rules: RuleSet) -> Self {
        Transcriber { rules }
    }

    /// Replace the active rules with a new rule document.
    ///
    /// # Errors
    /// Returns a [`RuleError`] and keeps the previously active rules when
    /// the document is malformed or contains an invalid fragment pattern.
    pub fn load_rules(&mut self, json: &str) -> RuleResult<()> {
        self.rules = loader::load_rules_from_str(json)?;
        Ok(())
    }

    /// The currently active rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Transcribe `text` word by word using the active rules.
    ///
    /// Newlines are normalized to spaces and tokens are split on single
    /// spaces; empty tokens are dropped, as are tokens that transcribe to
    /// empty text. Numeric tokens are spelled out as words; every other
    /// token runs through override lookup, then letter mapping, then
    /// fragment rewriting. A pure function of the input and the active
    /// rule set.
    pub fn transcribe(&self, text: &str) -> String {
        let text = text.replace('\n', " ");
        let mut words = Vec::new();

        for token in text.split(' ') {
            let token = token.trim();

            if token.is_empty() {
                continue;
            }

            let transcribed = if number::is_number(token) {
                let (whole, fraction) = number::parse_number(token);
                number::transcribe_number(&self.rules, whole, fraction)
            } else if let Some(replacement) = word::find_override(&self.rules, token) {
                replacement
            } else {
                let mapped = word::map_letters(&self.rules, token);
                word::apply_fragments(&self.rules, &mapped)
            };

            if !transcribed.is_empty() {
                words.push(transcribed);
            }
        }

        words.join(" ")
    }
}

impl Default for Transcriber {
    fn default() -> Self {
        Transcriber::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcribes_with_default_rules() {
        let tests = [
            ("Saluton", "saluton"),
            ("Saluton.", "saluton."),
            ("Saluton, kiel vi fartas?", "saluton, kijel wij fartas?"),
            ("La oka numero estas ok.", "la oka numero estas ohk."),
            ("Tiel estas la mondo.", "tiel estas la mondo."),
            (
                "La internacia lingvo estas tre facila.",
                "la ijnternatssija lijngwo estas tre fatssila.",
            ),
            (
                "abcĉdefgĝhĥijĵklmnoprsŝtuŭvz",
                "abtssczdefgdżhchijyrzklmnoprssztułwz",
            ),
        ];

        let transcriber = Transcriber::new();

        for (input, expected) in tests {
            assert_eq!(transcriber.transcribe(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn transcribes_numerals_with_default_rules() {
        let tests = [
            ("1", "unu"),
            ("100", "tssent"),
            ("110", "tssent dek"),
            ("1000", "mijl"),
            ("1000000", "mijlijono"),
            ("7,1", "sep, komo unu"),
            ("7,0", "sep"),
            ("7,123", "sep"),
            // a zero whole part renders as nothing, so the fraction words
            // follow a bare leading comma
            ("0,5", ", komo kwijn"),
            ("12.345", "dek du mijl, trij tssent kwar dek kwijn"),
        ];

        let transcriber = Transcriber::new();

        for (input, expected) in tests {
            assert_eq!(transcriber.transcribe(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn mixes_words_and_numerals() {
        let transcriber = Transcriber::new();

        assert_eq!(
            transcriber.transcribe("Li havas 3 pomojn."),
            "lij hawas trij pomoyn."
        );
        // grouping and fraction separators are consumed by the numeral path,
        // including the trailing punctuation they swallow
        assert_eq!(transcriber.transcribe("estas 5."), "estas kwijn");
    }

    #[test]
    fn transcribes_with_custom_rules() {
        let custom_rules = r#"
            {
                "letters": {
                    "a": "a", "b": "b", "c": "tss", "ĉ": "cz", "d": "d",
                    "e": "e", "f": "f", "g": "g", "ĝ": "dż", "h": "h",
                    "ĥ": "ch", "i": "ij", "j": "y", "ĵ": "rz", "k": "k",
                    "l": "l", "m": "m", "n": "n", "o": "o", "p": "p",
                    "r": "r", "s": "s", "ŝ": "sz", "t": "t", "u": "u",
                    "ŭ": "ł", "v": "w", "z": "z"
                },
                "fragments": [
                    { "match": "ci\\b", "replace": "cyjx" },
                    { "match": "ide\\b", "replace": "ijdex" },
                    { "match": "io\\b", "replace": "ijox" },
                    { "match": "^tij", "replace": "tix" },
                    { "match": "^ekzij", "replace": "ekzjix" }
                ],
                "overrides": [
                    { "source": "ok", "target": "ohkx" }
                ]
            }
        "#;

        let tests = [
            ("Saluton", "saluton"),
            ("Saluton, kiel vi fartas?", "saluton, kijel wij fartas?"),
            ("La oka numero estas ok.", "la oka numero estas ohkx."),
            ("Tiel estas la mondo.", "tixel estas la mondo."),
            (
                "La internacia lingvo estas tre facila.",
                "la ijnternatssija lijngwo estas tre fatssijla.",
            ),
            (
                "abcĉdefgĝhĥijĵklmnoprsŝtuŭvz",
                "abtssczdefgdżhchijyrzklmnoprssztułwz",
            ),
        ];

        let mut transcriber = Transcriber::new();
        transcriber.load_rules(custom_rules).unwrap();

        for (input, expected) in tests {
            assert_eq!(transcriber.transcribe(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn failed_reload_keeps_the_active_rules() {
        let mut transcriber = Transcriber::new();
        let before = transcriber.transcribe("Saluton, kiel vi fartas?");

        let err = transcriber
            .load_rules(r#"{ "fragments": [ { "match": "(bad", "replace": "x" } ] }"#)
            .unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));

        assert_eq!(transcriber.transcribe("Saluton, kiel vi fartas?"), before);
    }

    #[test]
    fn overrides_bypass_letters_and_fragments() {
        let mut transcriber = Transcriber::new();
        transcriber
            .load_rules(
                r#"{
                    "letters": { "b": "x", "a": "y" },
                    "fragments": [ { "match": "KEPT", "replace": "LOST" } ],
                    "overrides": [ { "source": "ba", "target": "KEPT" } ]
                }"#,
            )
            .unwrap();

        // replacement is inserted verbatim, punctuation reattached
        assert_eq!(transcriber.transcribe("Ba!"), "KEPT!");
        // without the override the word path applies
        assert_eq!(transcriber.transcribe("bab"), "xyx");
    }

    #[test]
    fn single_letter_words_map_to_their_table_entry() {
        let mut transcriber = Transcriber::new();
        transcriber
            .load_rules(r#"{ "letters": { "a": "a", "c": "ts", "ĉ": "cz", "v": "w" } }"#)
            .unwrap();

        for (letter, replacement) in transcriber.rules().letters().clone() {
            assert_eq!(transcriber.transcribe(&letter), replacement);
        }
    }

    #[test]
    fn fragment_order_is_load_bearing() {
        let broad_then_narrow = r#"{ "fragments": [
            { "match": "ab", "replace": "ba" },
            { "match": "ba", "replace": "c" }
        ] }"#;
        let narrow_then_broad = r#"{ "fragments": [
            { "match": "ba", "replace": "c" },
            { "match": "ab", "replace": "ba" }
        ] }"#;

        let mut first = Transcriber::new();
        first.load_rules(broad_then_narrow).unwrap();
        let mut second = Transcriber::new();
        second.load_rules(narrow_then_broad).unwrap();

        assert_eq!(first.transcribe("ab"), "c");
        assert_eq!(second.transcribe("ab"), "ba");
    }

    #[test]
    fn collapses_whitespace_without_empty_tokens() {
        let transcriber = Transcriber::new();

        assert_eq!(
            transcriber.transcribe("la   mondo\nestas  \n bona"),
            "la mondo estas bona"
        );
        assert_eq!(transcriber.transcribe("   "), "");
        assert_eq!(transcriber.transcribe("\n\n"), "");
    }

    #[test]
    fn drops_tokens_that_transcribe_to_empty() {
        let mut transcriber = Transcriber::new();
        transcriber
            .load_rules(r#"{ "letters": { "a": "a", "x": "" } }"#)
            .unwrap();

        assert_eq!(transcriber.transcribe("a x a"), "a a");
        // zero has no word and contributes nothing
        assert_eq!(transcriber.transcribe("a 0 a"), "a a");
    }

    #[test]
    fn transcription_is_deterministic() {
        let transcriber = Transcriber::new();
        let input = "La internacia lingvo havas 12.345 parolantojn, ĉu ne?";

        assert_eq!(transcriber.transcribe(input), transcriber.transcribe(input));
    }
}
