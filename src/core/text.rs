// src/core/text.rs

/// Case-insensitive substring test. Full Unicode lowercasing: roster
/// names carry accents (Dončić, Jokić) and so may search terms.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Upper-case the first character, e.g. "vernon" → "Vernon".
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ci_ignores_case_both_sides() {
        assert!(contains_ci("Vernon Carey", "vernon"));
        assert!(contains_ci("VERNON", "vernon"));
        assert!(contains_ci("de'aaron fox", "DE'AARON"));
        assert!(!contains_ci("vern", "vernon"));
    }

    #[test]
    fn contains_ci_handles_non_ascii() {
        assert!(contains_ci("Luka Dončić", "dončić"));
        assert!(contains_ci("NIKOLA JOKIĆ", "jokić"));
    }

    #[test]
    fn capitalize_first_basics() {
        assert_eq!(capitalize_first("vernon"), "Vernon");
        assert_eq!(capitalize_first("Carey"), "Carey");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("ćuk"), "Ćuk");
    }
}
