//! Title slugs for the Winterkongress website.
//!
//! Mirrors the slugs the website generator derives from talk titles, so
//! composed links hit existing pages.

use unicode_normalization::UnicodeNormalization;

/// Derives a URL slug from a session title.
///
/// - Lowercases (locale independent)
/// - Decomposes (NFKD) and drops everything outside ASCII, which strips diacritics
/// - Turns spaces and hyphens into `_`
/// - Drops remaining characters other than `[A-Za-z0-9_]` (hyphens are already gone)
/// - Collapses consecutive underscores, including runs left behind by dropped characters
///
/// # Examples
///
/// - `slugify_title("Über Hacking: Teil 2 - Grundlagen")` → `"uber_hacking_teil_2_grundlagen"`
pub fn slugify_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    let ascii: String = lowered.nfkd().filter(char::is_ascii).collect();

    let mut out = String::with_capacity(ascii.len());
    let mut prev_underscore = false;

    for c in ascii.chars() {
        let c = match c {
            ' ' | '-' => '_',
            c => c,
        };

        if !is_slug_char(c) {
            continue;
        }

        if c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    out
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
