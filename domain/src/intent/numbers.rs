//! Numeric argument extraction from free text.
//!
//! Tokens are split on whitespace, `,` and `;`, so `"10,12,11"` yields three
//! values. A token is numeric when, after an optional leading `-`, it holds
//! ASCII digits with at most one decimal separator (`.` or `,`).

/// Extract every numeric token from `text`, in order of appearance.
pub fn extract_floats(text: &str) -> Vec<f64> {
    text.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|token| !token.is_empty())
        .filter_map(parse_numeric_token)
        .collect()
}

/// Parse a single token, returning `None` when it is not a plain number.
pub fn parse_numeric_token(token: &str) -> Option<f64> {
    let normalized = token.trim().replace(',', ".");
    let unsigned = normalized.strip_prefix('-').unwrap_or(&normalized);

    if unsigned.matches('.').count() > 1 {
        return None;
    }
    let digits = unsigned.replacen('.', "", 1);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    normalized.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_comma_separated_series() {
        assert_eq!(
            extract_floats("grafico serie 10,12,11,15"),
            vec![10.0, 12.0, 11.0, 15.0]
        );
    }

    #[test]
    fn test_extracts_mixed_separators_and_signs() {
        assert_eq!(
            extract_floats("grafico demanda 100 -1.5; 7"),
            vec![100.0, -1.5, 7.0]
        );
    }

    #[test]
    fn test_skips_words_and_malformed_numbers() {
        assert_eq!(extract_floats("hola 1.2.3 -- 4a 5"), vec![5.0]);
        assert!(extract_floats("grafico oferta").is_empty());
    }

    #[test]
    fn test_token_rules() {
        assert_eq!(parse_numeric_token("42"), Some(42.0));
        assert_eq!(parse_numeric_token("-3"), Some(-3.0));
        assert_eq!(parse_numeric_token("2.5"), Some(2.5));
        assert_eq!(parse_numeric_token(".5"), Some(0.5));
        assert_eq!(parse_numeric_token("-"), None);
        assert_eq!(parse_numeric_token("."), None);
        assert_eq!(parse_numeric_token("1..2"), None);
        assert_eq!(parse_numeric_token("--1"), None);
        assert_eq!(parse_numeric_token("1e5"), None);
    }
}
