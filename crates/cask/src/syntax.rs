//! Closed token tables for the grammar. The language has no user-extensible
//! keyword set, so everything lives in `const` slices.

/// Reserved words that can never be used as labels.
pub const KEYWORDS: &[&str] = &[
    "if",
    "then",
    "else",
    "let",
    "in",
    "as",
    "using",
    "merge",
    "missing",
    "constructors",
    "forall",
];

pub const TYPE_BUILTINS: &[&str] =
    &["Bool", "Natural", "Integer", "Double", "Text", "List", "Optional"];

pub const CONSTANTS: &[&str] = &["Type", "Kind"];

pub const BOOLEAN_LITERALS: &[&str] = &["True", "False"];

/// Builtins whose names contain `/`. Label scanning is maximal-munch over a
/// character class that includes `/`, so `List/buildCustom` scans as one
/// token and only exact matches against this table classify as builtins.
pub const NAMESPACED_BUILTINS: &[&str] = &[
    "Natural/fold",
    "Natural/build",
    "Natural/isZero",
    "Natural/even",
    "Natural/odd",
    "Natural/toInteger",
    "Natural/show",
    "Integer/show",
    "Double/show",
    "List/build",
    "List/fold",
    "List/length",
    "List/head",
    "List/last",
    "List/indexed",
    "List/reverse",
    "Optional/fold",
    "Optional/build",
];

pub fn is_reserved(text: &str) -> bool {
    KEYWORDS.contains(&text)
        || TYPE_BUILTINS.contains(&text)
        || CONSTANTS.contains(&text)
        || BOOLEAN_LITERALS.contains(&text)
        || NAMESPACED_BUILTINS.contains(&text)
}
