//! Loading rule documents from JSON strings and files.

use std::fs;
use std::path::Path;

use crate::error::{RuleError, RuleResult};
use crate::rules::{RuleDocument, RuleSet};

/// Parse and compile a rule document from a JSON string.
///
/// # Errors
/// - Invalid JSON or a document that is not the expected shape
/// - A fragment pattern that fails to compile
pub fn load_rules_from_str(json: &str) -> RuleResult<RuleSet> {
    let document: RuleDocument =
        serde_json::from_str(json).map_err(|e| RuleError::InvalidDocument(e.to_string()))?;

    RuleSet::compile(document)
}

/// Load a rule document from a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON rule file
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON or an uncompilable fragment pattern
pub fn load_rules_from_file(path: &Path) -> RuleResult<RuleSet> {
    let content = fs::read_to_string(path).map_err(|e| {
        RuleError::InvalidDocument(format!("failed to read '{}': {}", path.display(), e))
    })?;

    load_rules_from_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_a_valid_document() {
        let rules = load_rules_from_str(r#"{ "letters": { "v": "w" } }"#).unwrap();

        assert_eq!(rules.letter('v'), Some("w"));
    }

    #[test]
    fn reports_malformed_json() {
        let err = load_rules_from_str("{ not json").unwrap_err();

        assert!(matches!(err, RuleError::InvalidDocument(_)));
    }

    #[test]
    fn reports_a_missing_file() {
        let err = load_rules_from_file(Path::new("/nonexistent/rules.json")).unwrap_err();

        assert!(matches!(err, RuleError::InvalidDocument(_)));
    }
}
