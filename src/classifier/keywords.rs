use super::vocabulary::{EXTENDED_STOPWORDS, PRIORITY_TERMS, STOPWORDS};
use std::str::Split;

/// Tokens of this many characters or fewer are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Lazy keyword stream over a message.
///
/// Punctuation splits words, tokens come out lowercased, and short tokens
/// and stopwords are skipped. A clone taken before iterating replays the
/// whole sequence.
#[derive(Clone)]
pub struct Keywords<'a> {
    pieces: Split<'a, fn(char) -> bool>,
    stopwords: &'static [&'static str],
    short_exemptions: &'static [&'static str],
}

fn is_separator(c: char) -> bool {
    !(c.is_alphanumeric() || c == '_')
}

impl<'a> Keywords<'a> {
    fn new(
        text: &'a str,
        stopwords: &'static [&'static str],
        short_exemptions: &'static [&'static str],
    ) -> Self {
        let separator: fn(char) -> bool = is_separator;
        Self {
            pieces: text.split(separator),
            stopwords,
            short_exemptions,
        }
    }
}

fn accepts(word: &str, stopwords: &[&str], short_exemptions: &[&str]) -> bool {
    if stopwords.contains(&word) {
        return false;
    }
    word.chars().count() > MIN_TOKEN_CHARS || short_exemptions.contains(&word)
}

impl Iterator for Keywords<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for piece in self.pieces.by_ref() {
            if piece.is_empty() {
                continue;
            }
            let word = piece.to_lowercase();
            if accepts(&word, self.stopwords, self.short_exemptions) {
                return Some(word);
            }
        }
        None
    }
}

/// Keywords filtered with the base stopword set.
pub fn keywords(text: &str) -> Keywords<'_> {
    Keywords::new(text, STOPWORDS, &[])
}

/// Keywords filtered with the extended stopword set. Priority terms shorter
/// than the length cutoff (such as "rs") are kept.
pub fn news_keywords(text: &str) -> Keywords<'_> {
    Keywords::new(text, EXTENDED_STOPWORDS, PRIORITY_TERMS)
}
