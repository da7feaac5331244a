use crate::error::WordBankError;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDS: &[&str] = &[
    "bicycle",
    "hangman",
    "elephant",
    "laptop",
    "programming",
    "ruby",
    "coding",
    "fantasy",
    "miracle",
    "planet",
    "crystal",
];

/// A word is playable when it is non-empty and made of ASCII letters only.
#[must_use]
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    is_valid_word(&word).then_some(word)
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Immutable, never-empty list of candidate words.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: EMBEDDED_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Build a bank from arbitrary input, keeping only playable words.
    pub fn from_words<I, S>(words: I) -> Result<Self, WordBankError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        if words.is_empty() {
            return Err(WordBankError::Empty);
        }
        Ok(Self { words })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordBankError> {
        Self::from_words(load_wordbank_from_file(path)?)
    }

    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // `words` is non-empty by construction, so `choose` always yields.
        self.words
            .choose(rng)
            .map_or(self.words[0].as_str(), String::as_str)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    #[test]
    fn test_embedded_bank_is_lowercase_and_valid() {
        let bank = WordBank::embedded();
        assert_eq!(bank.words().len(), EMBEDDED_WORDS.len());
        assert!(bank.words().iter().all(|w| is_valid_word(w)));
        assert!(bank.words().iter().all(|w| *w == w.to_lowercase()));
    }

    #[test]
    fn test_pick_random_returns_member() {
        let bank = WordBank::embedded();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = bank.pick_random(&mut rng);
            assert!(EMBEDDED_WORDS.contains(&word));
        }
    }

    #[test]
    fn test_pick_random_reaches_every_word() {
        let bank = WordBank::from_words(["alpha", "beta", "gamma"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(bank.pick_random(&mut rng).to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_from_words_filters_and_lowercases() {
        let bank = WordBank::from_words(["  Apple ", "pear1", "", "KIWI", "two words"]).unwrap();
        assert_eq!(bank.words(), &["apple".to_string(), "kiwi".to_string()]);
    }

    #[test]
    fn test_from_words_rejects_empty_result() {
        let result = WordBank::from_words(["123", " "]);
        assert!(matches!(result, Err(WordBankError::Empty)));
    }

    #[test]
    fn test_load_wordbank_from_str() {
        let words = load_wordbank_from_str("Planet\n  ruby  \nc0ding\n\ncrystal");
        assert_eq!(words, vec!["planet", "ruby", "crystal"]);
    }

    #[test]
    fn test_load_wordbank_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "Miracle").unwrap();
            writeln!(file, "not-a-word").unwrap();
            writeln!(file, "laptop").unwrap();
        }
        let bank = WordBank::from_file(&path).unwrap();
        assert_eq!(bank.words(), &["miracle".to_string(), "laptop".to_string()]);
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = WordBank::from_file(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(WordBankError::Io(_))));
    }

    #[test]
    fn test_is_valid_word() {
        assert!(is_valid_word("hangman"));
        assert!(is_valid_word("A"));
        assert!(!is_valid_word(""));
        assert!(!is_valid_word("hang man"));
        assert!(!is_valid_word("café"));
    }
}
