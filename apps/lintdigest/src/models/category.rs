//! Category labels produced by the classifier.
//!
//! The set is closed: adding a category means adding a variant here and at
//! least one rule in `rules`. Variant declaration order is the fixed reading
//! order used by `CategoryOrder::Priority`.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// A named class of linter message, displayed by its label.
pub enum Category {
    #[serde(rename = "Unused import")]
    UnusedImport,
    #[serde(rename = "Import order")]
    ImportOrder,
    #[serde(rename = "Trailing whitespace")]
    TrailingWhitespace,
    #[serde(rename = "Line too long")]
    LineTooLong,
    #[serde(rename = "Missing docstring")]
    MissingDocstring,
    #[serde(rename = "Missing type annotation")]
    MissingTypeAnnotation,
    #[serde(rename = "Type error")]
    TypeError,
    #[serde(rename = "Unresolved module")]
    UnresolvedModule,
    #[serde(rename = "Unused variable/argument")]
    UnusedVariable,
    #[serde(rename = "Unnecessary pass statement")]
    UnnecessaryPass,
    #[serde(rename = "Bad code logic")]
    BadCodeLogic,
}

impl Category {
    /// Human-readable label as it appears in the report.
    pub fn label(self) -> &'static str {
        match self {
            Category::UnusedImport => "Unused import",
            Category::ImportOrder => "Import order",
            Category::TrailingWhitespace => "Trailing whitespace",
            Category::LineTooLong => "Line too long",
            Category::MissingDocstring => "Missing docstring",
            Category::MissingTypeAnnotation => "Missing type annotation",
            Category::TypeError => "Type error",
            Category::UnresolvedModule => "Unresolved module",
            Category::UnusedVariable => "Unused variable/argument",
            Category::UnnecessaryPass => "Unnecessary pass statement",
            Category::BadCodeLogic => "Bad code logic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
