//! Slug derivation and key-shape validation.
//!
//! A slug is the deterministic, URL-safe form of a title: lowercase
//! alphanumeric groups joined by single hyphens. In slug keying mode the
//! store files each blog under `slugify(title)`, so colliding titles collide
//! on key — the store's overwrite semantics decide what happens then, not
//! this module.

/// Derives a store key from a title.
///
/// Lowercases ASCII letters, keeps digits, and collapses every other run of
/// characters into a single hyphen. Leading and trailing separators are
/// dropped, so `"  Hello, World!  "` becomes `"hello-world"`. Lossy by
/// design: distinct titles can map to the same slug.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Whether `key` has valid slug shape: one or more groups of lowercase
/// ASCII letters/digits joined by single hyphens. No leading, trailing, or
/// doubled hyphens, and never empty.
pub fn is_valid_slug(key: &str) -> bool {
    if key.is_empty() {
        return false;
    }

    let mut prev_was_hyphen = true; // rejects a leading hyphen
    for c in key.chars() {
        match c {
            'a'..='z' | '0'..='9' => prev_was_hyphen = false,
            '-' if !prev_was_hyphen => prev_was_hyphen = true,
            _ => return false,
        }
    }

    !prev_was_hyphen // rejects a trailing hyphen
}
