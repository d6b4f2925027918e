//! URL slug derivation.

/// Derive a URL slug from a post title.
///
/// The title is lowercased, every character that is neither an ASCII word
/// character nor whitespace is dropped, and each whitespace run becomes a
/// single hyphen. Leading and trailing whitespace never produce hyphens.
///
/// ```
/// use folio_core::domain::slugify;
///
/// assert_eq!(slugify("Hi There"), "hi-there");
/// assert_eq!(slugify("Rust: 2024 Edition!"), "rust-2024-edition");
/// ```
pub fn slugify(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("-")
}
