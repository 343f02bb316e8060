//! Text normalization ahead of phrase and token scanning

use regex::Regex;

/// Lower-cases text and strips everything except word characters, whitespace
/// and the symbols embedded in technical names (`+`, `#`, `.`, `-`).
#[derive(Debug, Clone)]
pub struct Normalizer {
    noise_regex: Regex,
    whitespace_regex: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        let noise_regex = Regex::new(r"[^\w\s+#.\-]").expect("Invalid noise regex");
        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            noise_regex,
            whitespace_regex,
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let cleaned = self.noise_regex.replace_all(&lowered, " ");
        self.whitespace_regex
            .replace_all(&cleaned, " ")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_technical_symbols() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize("C++, C# and Node.js (event-driven)!"),
            "c++ c# and node.js event-driven"
        );
    }

    #[test]
    fn test_collapses_whitespace_and_noise() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize("  Skills:\n\tRust /  Go\r\n\n"),
            "skills rust go"
        );
        assert_eq!(normalizer.normalize("CI/CD"), "ci cd");
    }

    #[test]
    fn test_empty_and_noise_only_input() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("!!! ??? ***"), "");
    }

    #[test]
    fn test_unicode_word_characters_survive() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("Café Résumé"), "café résumé");
    }
}
