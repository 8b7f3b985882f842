//! Word tokenization and stemming.
//!
//! Text is split on anything that is not alphanumeric, lowercased, and reduced
//! to a Snowball stem. Each resulting [`Word`] keeps the original spelling and
//! its byte span, so matches can be located in the source text.

use std::ops::Range;

use tantivy::tokenizer::{Language, LowerCaser, SimpleTokenizer, Stemmer, TextAnalyzer, TokenStream};

use crate::SearchError;

/// Stems of this many characters or fewer are treated as noise.
pub const MIN_STEM_LEN: usize = 3;

/// Parses a stemmer language name into a Tantivy `Language`.
///
/// Names are matched case-insensitively.
pub fn parse_language(name: &str) -> Result<Language, SearchError> {
    let language = match name.to_lowercase().as_str() {
        "arabic" => Language::Arabic,
        "danish" => Language::Danish,
        "dutch" => Language::Dutch,
        "english" => Language::English,
        "finnish" => Language::Finnish,
        "french" => Language::French,
        "german" => Language::German,
        "greek" => Language::Greek,
        "hungarian" => Language::Hungarian,
        "italian" => Language::Italian,
        "norwegian" => Language::Norwegian,
        "portuguese" => Language::Portuguese,
        "romanian" => Language::Romanian,
        "russian" => Language::Russian,
        "spanish" => Language::Spanish,
        "swedish" => Language::Swedish,
        "tamil" => Language::Tamil,
        "turkish" => Language::Turkish,
        other => return Err(SearchError::InvalidLanguage(other.to_string())),
    };
    Ok(language)
}

/// A word as it appears in some text, with its stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'t> {
    /// The word exactly as written.
    pub text: &'t str,
    /// The lowercased stem.
    pub stem: String,
    /// Byte range of the word in the source text.
    pub span: Range<usize>,
}

impl Word<'_> {
    /// Returns true if the stem is long enough to take part in matching.
    pub fn is_significant(&self) -> bool {
        self.stem.chars().count() > MIN_STEM_LEN
    }
}

/// Splits text into stemmed words.
///
/// Each instance owns its analyzer; nothing is shared between instances.
#[derive(Clone)]
pub struct WordStemmer {
    /// Tokenizer, lowercaser and stemmer pipeline.
    analyzer: TextAnalyzer,
}

impl WordStemmer {
    /// Creates a stemmer for the given language.
    pub fn new(language: Language) -> Self {
        let analyzer = TextAnalyzer::builder(SimpleTokenizer::default())
            .filter(LowerCaser)
            .filter(Stemmer::new(language))
            .build();
        Self { analyzer }
    }

    /// Creates a stemmer from a language name.
    pub fn from_name(name: &str) -> Result<Self, SearchError> {
        parse_language(name).map(Self::new)
    }

    /// Returns every word in `text`, in order.
    pub fn words<'t>(&mut self, text: &'t str) -> Vec<Word<'t>> {
        let mut stream = self.analyzer.token_stream(text);
        let mut words = Vec::new();
        while let Some(token) = stream.next() {
            let span = token.offset_from..token.offset_to;
            words.push(Word {
                text: &text[span.clone()],
                stem: token.text.clone(),
                span,
            });
        }
        words
    }
}

impl Default for WordStemmer {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

/// Maps each distinct written word to its stem, dropping noise stems.
///
/// Order is first occurrence; repeated spellings collapse into one entry.
pub fn significant_stems<'w, 't>(words: &'w [Word<'t>]) -> Vec<(&'t str, &'w str)> {
    let mut stems: Vec<(&'t str, &'w str)> = Vec::new();
    for word in words.iter().filter(|w| w.is_significant()) {
        if !stems.iter().any(|(text, _)| *text == word.text) {
            stems.push((word.text, word.stem.as_str()));
        }
    }
    stems
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stems_of(text: &str) -> Vec<(String, String)> {
        let mut stemmer = WordStemmer::default();
        let words = stemmer.words(text);
        significant_stems(&words)
            .into_iter()
            .map(|(w, s)| (w.to_string(), s.to_string()))
            .collect()
    }

    #[test]
    fn parse_known_languages() {
        assert_eq!(parse_language("english").unwrap(), Language::English);
        assert_eq!(parse_language("French").unwrap(), Language::French);
        assert_eq!(parse_language("GERMAN").unwrap(), Language::German);
    }

    #[test]
    fn parse_unknown_language() {
        let err = parse_language("klingon").unwrap_err();
        assert!(err.to_string().contains("klingon"));
        assert!(WordStemmer::from_name("klingon").is_err());
    }

    #[test]
    fn words_keep_spelling_and_spans() {
        let mut stemmer = WordStemmer::default();
        let words = stemmer.words("Walking, gardens!");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text, "Walking");
        assert_eq!(words[0].stem, "walk");
        assert_eq!(words[0].span, 0..7);
        assert_eq!(words[1].text, "gardens");
        assert_eq!(words[1].stem, "garden");
        assert_eq!(words[1].span, 9..16);
    }

    #[test]
    fn short_stems_are_dropped() {
        // "running" stems to "run", which is too short to count.
        assert!(stems_of("the cat running").is_empty());
    }

    #[test]
    fn repeated_spellings_collapse() {
        assert_eq!(
            stems_of("walking walked walking"),
            vec![
                ("walking".to_string(), "walk".to_string()),
                ("walked".to_string(), "walk".to_string()),
            ]
        );
    }

    #[test]
    fn case_variants_stay_distinct() {
        let stems = stems_of("Garden garden");
        assert_eq!(stems.len(), 2);
        assert_eq!(stems[0].1, stems[1].1);
    }

    #[test]
    fn empty_text_has_no_words() {
        assert!(WordStemmer::default().words("").is_empty());
    }
}
