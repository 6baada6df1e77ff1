//! Rule data model: the serialized document shape and the compiled rule set.
//!
//! A rule document is plain JSON with up to four collections:
//!
//! ```json
//! {
//!     "letters": { "c": "ts", "ŝ": "sz" },
//!     "fragments": [ { "match": "atsij", "replace": "atssij" } ],
//!     "overrides": [ { "source": "ok", "target": "ohk" } ],
//!     "numbers": { "1": "unu", "10": "dek" }
//! }
//! ```
//!
//! Documents are compiled into a [`RuleSet`] before use: every fragment
//! pattern is compiled exactly once, and a document with any invalid pattern
//! is rejected in full so that no partially valid rule set is ever installed.

use std::collections::HashMap;

use regex::Regex;
use serde::Deserialize;

use crate::error::{RuleError, RuleResult};

/// A fragment rewrite rule as it appears in a rule document.
///
/// `pattern` is a regular expression matched against the whole word after
/// letter mapping; `replace` is literal replacement text (no backreferences).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FragmentRule {
    #[serde(rename = "match")]
    pub pattern: String,
    pub replace: String,
}

/// A whole-word override as it appears in a rule document.
///
/// `source` is compared case-insensitively against the punctuation-stripped
/// token; `target` is inserted verbatim on a match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OverrideRule {
    pub source: String,
    pub target: String,
}

/// The serialized shape of a rule document.
///
/// Every collection is optional in the JSON; a missing collection behaves as
/// an empty one. In particular a document without `numbers` still loads, and
/// numerals then render as empty words (see [`crate::number`]).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleDocument {
    #[serde(default)]
    pub letters: HashMap<String, String>,
    #[serde(default)]
    pub fragments: Vec<FragmentRule>,
    #[serde(default)]
    pub overrides: Vec<OverrideRule>,
    #[serde(default)]
    pub numbers: HashMap<String, String>,
}

/// A fragment rule with its pattern compiled at load time.
#[derive(Debug, Clone)]
pub struct CompiledFragment {
    pub pattern: Regex,
    pub replace: String,
}

/// The active, validated rule bundle that parameterizes the engine.
///
/// Immutable once built; reloading constructs a fresh `RuleSet` and replaces
/// the old one wholesale rather than editing it in place.
#[derive(Debug, Clone)]
pub struct RuleSet {
    letters: HashMap<String, String>,
    fragments: Vec<CompiledFragment>,
    overrides: Vec<OverrideRule>,
    numbers: HashMap<String, String>,
}

impl RuleSet {
    /// Compile a rule document into a rule set.
    ///
    /// All-or-nothing: the first fragment pattern that fails to compile
    /// rejects the whole document.
    ///
    /// # Errors
    /// [`RuleError::InvalidPattern`] naming the offending pattern.
    pub fn compile(document: RuleDocument) -> RuleResult<Self> {
        let mut fragments = Vec::with_capacity(document.fragments.len());

        for fragment in document.fragments {
            let pattern = Regex::new(&fragment.pattern).map_err(|e| RuleError::InvalidPattern {
                pattern: fragment.pattern.clone(),
                message: e.to_string(),
            })?;

            fragments.push(CompiledFragment {
                pattern,
                replace: fragment.replace,
            });
        }

        Ok(RuleSet {
            letters: document.letters,
            fragments,
            overrides: document.overrides,
            numbers: document.numbers,
        })
    }

    /// Look up the replacement for a single character, case-folded.
    ///
    /// Returns `None` for characters absent from the letter table; such
    /// characters pass through the letter mapper unchanged.
    pub fn letter(&self, c: char) -> Option<&str> {
        let key: String = c.to_lowercase().collect();
        self.letters.get(&key).map(String::as_str)
    }

    /// The word for a digit or magnitude (1-9, 10, 100, 1000, 1000000).
    ///
    /// A missing entry renders as empty text rather than an error; numeral
    /// output is then incomplete, which is a documented limitation of the
    /// rule format.
    pub fn number_word(&self, value: i64) -> &str {
        self.numbers
            .get(&value.to_string())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The compiled fragment rules, in document order.
    pub fn fragments(&self) -> &[CompiledFragment] {
        &self.fragments
    }

    /// The override rules, in document order. First match wins.
    pub fn overrides(&self) -> &[OverrideRule] {
        &self.overrides
    }

    /// The letter table.
    pub fn letters(&self) -> &HashMap<String, String> {
        &self.letters
    }
}
