use include_dir::{include_dir, Dir};
use rand::Rng;
use serde::Deserialize;

use crate::error::WordListError;

static DECK_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/decks");

pub const DEFAULT_DECK: &str = "pictionary";

/// On-disk shape of a bundled deck
#[derive(Deserialize, Clone, Debug)]
struct Deck {
    name: String,
    #[allow(dead_code)]
    size: u32,
    words: Vec<String>,
}

/// Immutable, non-empty list of words to draw from
#[derive(Clone, Debug, PartialEq)]
pub struct WordList {
    name: String,
    words: Vec<String>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Result<Self, WordListError> {
        Self::named("custom", words)
    }

    fn named(name: impl Into<String>, words: Vec<String>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self {
            name: name.into(),
            words,
        })
    }

    /// The deck compiled into the binary
    pub fn bundled() -> Result<Self, WordListError> {
        Self::from_deck(DEFAULT_DECK)
    }

    pub fn from_deck(deck_name: &str) -> Result<Self, WordListError> {
        let file_name = format!("{deck_name}.json");
        let file = DECK_DIR
            .get_file(&file_name)
            .ok_or_else(|| WordListError::MissingAsset(file_name.clone()))?;

        let contents = file.contents_utf8().ok_or_else(|| WordListError::Encoding {
            name: deck_name.to_string(),
        })?;

        Self::parse_deck(deck_name, contents)
    }

    pub fn from_json(json: &str) -> Result<Self, WordListError> {
        Self::parse_deck("<inline>", json)
    }

    fn parse_deck(label: &str, json: &str) -> Result<Self, WordListError> {
        let deck: Deck = serde_json::from_str(json).map_err(|source| WordListError::Parse {
            name: label.to_string(),
            source,
        })?;

        Self::named(deck.name, deck.words)
    }

    /// Uniform pick over the whole list; repeats are expected.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let idx = rng.gen_range(0..self.words.len());
        &self.words[idx]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    // Never true once constructed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand::{rngs::StdRng, SeedableRng};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert_matches!(WordList::new(vec![]), Err(WordListError::Empty));
    }

    #[test]
    fn test_bundled_deck_loads() {
        let list = WordList::bundled().unwrap();

        assert_eq!(list.name(), "pictionary");
        assert_eq!(list.len(), 95);
        assert!(list.words().contains(&"Ferris Wheel".to_string()));
    }

    #[test]
    fn test_bundled_deck_keeps_duplicates() {
        let list = WordList::bundled().unwrap();
        let telescopes = list.words().iter().filter(|w| *w == "Telescope").count();

        assert_eq!(telescopes, 2);
    }

    #[test]
    fn test_missing_deck() {
        assert_matches!(
            WordList::from_deck("klingon"),
            Err(WordListError::MissingAsset(name)) if name == "klingon.json"
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"{ "name": "animals", "size": 2, "words": ["Owl", "Yeti"] }"#;
        let list = WordList::from_json(json).unwrap();

        assert_eq!(list.name(), "animals");
        assert_eq!(list.words(), &["Owl".to_string(), "Yeti".to_string()]);
    }

    #[test]
    fn test_from_json_with_no_words() {
        let json = r#"{ "name": "nothing", "size": 0, "words": [] }"#;
        assert_matches!(WordList::from_json(json), Err(WordListError::Empty));
    }

    #[test]
    fn test_from_json_garbage() {
        assert_matches!(
            WordList::from_json("not json"),
            Err(WordListError::Parse { .. })
        );
    }

    #[test]
    fn test_draw_returns_member() {
        let list = WordList::new(words(&["Kite", "Igloo", "Crown"])).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let word = list.draw(&mut rng);
            assert!(list.words().iter().any(|w| w == word));
        }
    }

    #[test]
    fn test_draw_single_word() {
        let list = WordList::new(words(&["Zebra"])).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(list.draw(&mut rng), "Zebra");
        assert_eq!(list.draw(&mut rng), "Zebra");
    }

    #[test]
    fn test_draw_is_deterministic_for_seed() {
        let list = WordList::bundled().unwrap();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        let first: Vec<&str> = (0..10).map(|_| list.draw(&mut a)).collect();
        let second: Vec<&str> = (0..10).map(|_| list.draw(&mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_draw_reaches_every_entry() {
        let list = WordList::new(words(&["Owl", "Panda", "Mango", "Kite"])).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.insert(list.draw(&mut rng).to_string());
        }
        assert_eq!(seen.len(), 4);
    }
}
