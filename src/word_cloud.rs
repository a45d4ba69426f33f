//! Word-cloud data: split text into words in one pass and count them,
//! folding case variants of the same word into a single entry.

use std::collections::HashMap;
use std::iter::{FusedIterator, Peekable};
use std::str::CharIndices;

const EM_DASH: char = '\u{2014}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Letter,
    Apostrophe,
    Hyphen,
    Whitespace,
    EmDash,
    Period,
    Other,
}

impl CharClass {
    fn of(c: char) -> CharClass {
        match c {
            'a'..='z' | 'A'..='Z' => CharClass::Letter,
            '\'' => CharClass::Apostrophe,
            '-' => CharClass::Hyphen,
            '.' => CharClass::Period,
            EM_DASH => CharClass::EmDash,
            c if c.is_whitespace() => CharClass::Whitespace,
            _ => CharClass::Other,
        }
    }
}

fn is_letter(c: Option<char>) -> bool {
    matches!(c.map(CharClass::of), Some(CharClass::Letter))
}

/// Iterator over the words of a text, yielded as slices of the input.
///
/// Letters and apostrophes make up words. A hyphen belongs to a word only
/// when it sits between two letters. Whitespace, em dashes, periods (single or
/// as part of an ellipsis) and any other character end the current word.
pub struct Words<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
    prev: Option<char>,
    word_start: usize,
    word_len: usize,
}

impl<'a> Words<'a> {
    pub fn new(text: &'a str) -> Words<'a> {
        Words {
            text,
            chars: text.char_indices().peekable(),
            prev: None,
            word_start: 0,
            word_len: 0,
        }
    }

    fn extend(&mut self, index: usize, c: char) {
        if self.word_len == 0 {
            self.word_start = index;
        }
        self.word_len += c.len_utf8();
    }

    fn take_word(&mut self) -> Option<&'a str> {
        if self.word_len == 0 {
            return None;
        }
        let text = self.text;
        let word = &text[self.word_start..self.word_start + self.word_len];
        self.word_len = 0;
        Some(word)
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some((index, c)) = self.chars.next() {
            let next = self.chars.peek().map(|&(_, c)| c);
            let prev = self.prev.replace(c);
            let class = CharClass::of(c);

            if next.is_none() {
                if class == CharClass::Letter {
                    self.extend(index, c);
                }
                return self.take_word();
            }

            match class {
                CharClass::Whitespace | CharClass::EmDash => {}
                // ellipsis
                CharClass::Period if next == Some('.') => {}
                CharClass::Letter | CharClass::Apostrophe => {
                    self.extend(index, c);
                    continue;
                }
                CharClass::Hyphen if is_letter(prev) && is_letter(next) => {
                    self.extend(index, c);
                    continue;
                }
                CharClass::Hyphen | CharClass::Period | CharClass::Other => {}
            }

            if let Some(word) = self.take_word() {
                return Some(word);
            }
        }
        None
    }
}

impl FusedIterator for Words<'_> {}

/// Splits `text` into words. See [`Words`] for the rules.
pub fn split_words(text: &str) -> Vec<&str> {
    Words::new(text).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Word to occurrence count, keeping a single entry per word regardless of
/// case.
///
/// A word stays capitalized only while every sighting of it has been
/// capitalized. The first lowercase sighting replaces the capitalized entry
/// and carries its count over.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCounts {
    words_to_counts: HashMap<String, usize>,
}

impl WordCounts {
    pub fn new() -> WordCounts {
        WordCounts::default()
    }

    pub fn record(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        if let Some(count) = self.words_to_counts.get_mut(word) {
            *count += 1;
            return;
        }

        // A capitalized sighting of a word we have already seen lowercase.
        let lowercase = word.to_ascii_lowercase();
        if let Some(count) = self.words_to_counts.get_mut(&lowercase) {
            *count += 1;
            return;
        }

        let capitalized = capitalize(word);
        if let Some(count) = self.words_to_counts.remove(&capitalized) {
            log::debug!("demoting {:?} to {:?} after {} sightings", capitalized, word, count);
            self.words_to_counts.insert(word.to_string(), count + 1);
            return;
        }

        self.words_to_counts.insert(word.to_string(), 1);
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.words_to_counts.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.words_to_counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words_to_counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.words_to_counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
    }

    /// Entries ordered by descending count, ties broken alphabetically.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn as_map(&self) -> &HashMap<String, usize> {
        &self.words_to_counts
    }

    pub fn into_map(self) -> HashMap<String, usize> {
        self.words_to_counts
    }
}

impl<'a> Extend<&'a str> for WordCounts {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.record(word);
        }
    }
}

/// Word counts for a complete text, built in a single pass over it.
#[derive(Debug, Clone)]
pub struct WordCloud {
    counts: WordCounts,
}

impl WordCloud {
    pub fn new(text: &str) -> WordCloud {
        let counts = Words::new(text).fold(WordCounts::new(), |mut counts, word| {
            counts.record(word);
            counts
        });
        WordCloud { counts }
    }

    pub fn counts(&self) -> &WordCounts {
        &self.counts
    }

    pub fn into_counts(self) -> WordCounts {
        self.counts
    }
}
