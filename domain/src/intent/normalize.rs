//! Text folding used before any keyword comparison.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Case-fold and strip accents: `"¿Qué es la INFLACIÓN?"` → `"¿que es la inflacion?"`.
///
/// Decomposes to NFKD, drops combining marks, lowercases and trims.
pub fn fold(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Exit keywords accepted on the wire, compared case-insensitively.
pub fn is_exit_keyword(message: &str) -> bool {
    matches!(
        message.trim().to_lowercase().as_str(),
        "salir" | "exit" | "quit"
    )
}
