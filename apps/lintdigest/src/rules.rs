//! Pattern table and line classifier.
//!
//! Rules are evaluated in table order and the first match wins, so more
//! specific phrasings must sit above broader ones that could also match.
//! Matching is case-sensitive; patterns spell the casing pylint and mypy
//! emit, accepting a lowercase first letter only where the tools disagree.

use crate::error::{Error, Result};
use crate::models::Category;
use regex::Regex;
use std::sync::OnceLock;

/// A compiled matcher tagged with the category it assigns.
#[derive(Debug, Clone)]
pub struct Rule {
    category: Category,
    pattern: Regex,
}

impl Rule {
    /// Compile `pattern` into a rule for `category`.
    pub fn new(category: Category, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { category, pattern })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

const BUILTIN_RULES: &[(Category, &str)] = &[
    // Whitespace & formatting
    (Category::TrailingWhitespace, r"\bTrailing whitespace\b"),
    (Category::LineTooLong, r"\bLine too long \(\d+/\d+\)"),
    (Category::UnnecessaryPass, r"\b[Uu]nnecessary pass\b"),
    // Imports
    (Category::UnusedImport, r"\bUnused (?:[\w.]+ )?import(?:ed)?\b"),
    (
        Category::ImportOrder,
        r"standard import .* should be placed before third party import",
    ),
    // Docs
    (
        Category::MissingDocstring,
        r"Missing (?:function or method|module|class) docstring",
    ),
    // Typing
    (
        Category::MissingTypeAnnotation,
        r"\bFunction is missing a return type annotation\b",
    ),
    (
        Category::MissingTypeAnnotation,
        r"\bFunction is missing a type annotation\b",
    ),
    (Category::MissingTypeAnnotation, r"\bCall to untyped function\b"),
    (Category::TypeError, r"\bIncompatible .*type"),
    (Category::TypeError, r"\bhas incompatible type\b"),
    (
        Category::TypeError,
        r#""None"(?: of "[^"]*")? has no attribute"#,
    ),
    // Modules
    (
        Category::UnresolvedModule,
        r"Cannot find implementation or library stub for module named",
    ),
    // Unused names, kept apart from imports
    (Category::UnusedVariable, r"\bUnused variable\b"),
    (Category::UnusedVariable, r"\bUnused argument\b"),
    // Style and logic smells
    (
        Category::BadCodeLogic,
        r"Using an f-string that does not have any interpolated variables",
    ),
    (Category::BadCodeLogic, r"Consider explicitly re-raising"),
    (Category::BadCodeLogic, r#"\b[Uu]nnecessary "?else"?"#),
];

static BUILTIN: OnceLock<Vec<Rule>> = OnceLock::new();

/// The built-in rule table, compiled once and shared read-only.
pub fn builtin() -> &'static [Rule] {
    BUILTIN.get_or_init(|| {
        BUILTIN_RULES
            .iter()
            .map(|(category, pattern)| {
                Rule::new(*category, pattern).expect("built-in rule patterns are valid regexes")
            })
            .collect()
    })
}

/// Classify `text` against the built-in table.
pub fn classify(text: &str) -> Option<Category> {
    classify_with(builtin(), text)
}

/// Category of the first rule in `rules` matching `text`; `None` means the
/// message is unreconciled.
pub fn classify_with(rules: &[Rule], text: &str) -> Option<Category> {
    rules
        .iter()
        .find(|rule| rule.matches(text))
        .map(Rule::category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_compiles_in_declared_order() {
        let rules = builtin();
        assert_eq!(rules.len(), BUILTIN_RULES.len());
        assert_eq!(rules[0].category(), Category::TrailingWhitespace);
        assert_eq!(rules[0].pattern(), BUILTIN_RULES[0].1);
    }

    #[test]
    fn test_classify_common_pylint_and_mypy_messages() {
        let cases = [
            ("Trailing whitespace", Category::TrailingWhitespace),
            ("Line too long (121/100)", Category::LineTooLong),
            ("Unnecessary pass statement", Category::UnnecessaryPass),
            ("Unused import os", Category::UnusedImport),
            ("Unused Path imported from pathlib", Category::UnusedImport),
            (
                "standard import \"os\" should be placed before third party import \"requests\"",
                Category::ImportOrder,
            ),
            ("Missing function or method docstring", Category::MissingDocstring),
            ("Missing module docstring", Category::MissingDocstring),
            ("Missing class docstring", Category::MissingDocstring),
            (
                "Function is missing a return type annotation",
                Category::MissingTypeAnnotation,
            ),
            (
                "Function is missing a type annotation for one or more arguments",
                Category::MissingTypeAnnotation,
            ),
            (
                "Call to untyped function \"load\" in typed context",
                Category::MissingTypeAnnotation,
            ),
            ("Incompatible types in assignment", Category::TypeError),
            (
                "Incompatible return value type (got \"None\", expected \"int\")",
                Category::TypeError,
            ),
            (
                "Argument 1 to \"f\" has incompatible type \"str\"; expected \"int\"",
                Category::TypeError,
            ),
            (
                "Item \"None\" of \"Optional[Foo]\" has no attribute \"bar\"",
                Category::TypeError,
            ),
            (
                "Cannot find implementation or library stub for module named \"yaml\"",
                Category::UnresolvedModule,
            ),
            ("Unused variable 'tmp'", Category::UnusedVariable),
            ("Unused argument 'kwargs'", Category::UnusedVariable),
            (
                "Using an f-string that does not have any interpolated variables",
                Category::BadCodeLogic,
            ),
            (
                "Consider explicitly re-raising using 'raise ... from e'",
                Category::BadCodeLogic,
            ),
            (
                "Unnecessary \"else\" after \"return\", remove the \"else\"",
                Category::BadCodeLogic,
            ),
        ];
        for (text, expected) in cases {
            assert_eq!(classify(text), Some(expected), "text: {text}");
        }
    }

    #[test]
    fn test_unknown_text_is_unreconciled() {
        assert_eq!(classify("Some message we didn't match"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(classify("unused import os"), None);
        assert_eq!(classify("TRAILING WHITESPACE"), None);
    }

    #[test]
    fn test_bare_import_word_does_not_match_unused_import() {
        assert_eq!(classify("Unable to import 'numpy'"), None);
        assert_eq!(classify("Unused variable 'import_path'"), Some(Category::UnusedVariable));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rules = vec![
            Rule::new(Category::MissingTypeAnnotation, r"missing return type annotation").unwrap(),
            Rule::new(Category::TypeError, r"annotation").unwrap(),
        ];
        assert_eq!(
            classify_with(&rules, "Function is missing return type annotation"),
            Some(Category::MissingTypeAnnotation)
        );
        assert_eq!(
            classify_with(&rules, "bad annotation"),
            Some(Category::TypeError)
        );

        let reversed: Vec<Rule> = rules.into_iter().rev().collect();
        assert_eq!(
            classify_with(&reversed, "Function is missing return type annotation"),
            Some(Category::TypeError)
        );
    }

    #[test]
    fn test_empty_table_leaves_everything_unreconciled() {
        assert_eq!(classify_with(&[], "Trailing whitespace"), None);
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = Rule::new(Category::TypeError, "(unclosed").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
        assert!(err.to_string().contains("(unclosed"));
    }
}
