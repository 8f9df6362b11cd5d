//! Text canonicalization for guess comparison.
//!
//! Customers type scent names with whatever accents, casing, and
//! spacing their keyboard produces ("Vainílla ", "CAFE  tostado").
//! Both the guess and every catalog phrase go through the same
//! canonical form before comparison.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Map a string to its canonical comparable form.
///
/// Decomposes accented characters and drops the combining marks,
/// collapses whitespace runs to single spaces, trims, and lowercases.
/// Pure and total: any input, including the empty string, is fine.
pub fn normalize(input: &str) -> String {
    let stripped: String = input.nfd().filter(|ch| !is_combining_mark(*ch)).collect();
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents() {
        assert_eq!(normalize("Café"), "cafe");
        assert_eq!(normalize("Vainílla"), "vainilla");
        assert_eq!(normalize("Eucalipto añejo"), "eucalipto anejo");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize("CAFÉ"), normalize("cafe"));
        assert_eq!(normalize("LaVaNdA"), "lavanda");
    }

    #[test]
    fn test_collapses_and_trims_whitespace() {
        assert_eq!(normalize("  vainilla   de\tmadagascar "), "vainilla de madagascar");
        assert_eq!(normalize("\n canela \n"), "canela");
    }

    #[test]
    fn test_idempotent() {
        for input in ["Café", "  VAINÍLLA  de   Madagascar ", "chocolate", "", "ñ Ñ"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "normalize must be idempotent for {input:?}");
        }
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
