//! Prefix tree used for lexicon lookups

use std::collections::HashMap;

/// Trie node
#[derive(Debug)]
pub struct TrieNode<T> {
    /// Children keyed by the next character
    children: HashMap<char, TrieNode<T>>,
    /// Value stored when this node terminates a word
    value: Option<T>,
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }
}

impl<T> TrieNode<T> {
    /// Follows `ch`, optionally through its lowercase expansion.
    fn step(&self, ch: char, fold_case: bool) -> Option<&TrieNode<T>> {
        if !fold_case {
            return self.children.get(&ch);
        }
        let mut node = self;
        for lower in ch.to_lowercase() {
            node = node.children.get(&lower)?;
        }
        Some(node)
    }
}

/// Prefix tree mapping words to values
#[derive(Debug)]
pub struct Trie<T> {
    root: TrieNode<T>,
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self {
            root: TrieNode::default(),
        }
    }
}

impl<T> Trie<T> {
    /// Creates an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word with its value, replacing any previous value
    pub fn insert(&mut self, word: &str, value: T) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.value = Some(value);
    }

    /// Exact lookup
    pub fn get(&self, word: &str) -> Option<&T> {
        let mut node = &self.root;
        for ch in word.chars() {
            node = node.children.get(&ch)?;
        }
        node.value.as_ref()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Longest stored word that is a prefix of `text`
    ///
    /// Returns (matched text, value, matched byte length)
    pub fn find_longest_prefix<'a>(&self, text: &'a str) -> Option<(&'a str, &T, usize)> {
        self.longest_at(text, false)
            .map(|(len, value)| (&text[..len], value, len))
    }

    /// Leftmost occurrence of any stored word inside `text`
    ///
    /// At the same start position the longest word wins. Returns
    /// (start byte, end byte, value); both offsets are char boundaries of `text`.
    pub fn find_leftmost(&self, text: &str, fold_case: bool) -> Option<(usize, usize, &T)> {
        text.char_indices().find_map(|(start, _)| {
            self.longest_at(&text[start..], fold_case)
                .map(|(len, value)| (start, start + len, value))
        })
    }

    fn longest_at(&self, text: &str, fold_case: bool) -> Option<(usize, &T)> {
        let mut node = &self.root;
        let mut last_match = None;
        let mut current_len = 0;

        for ch in text.chars() {
            match node.step(ch, fold_case) {
                Some(n) => {
                    node = n;
                    current_len += ch.len_utf8();
                    if let Some(ref value) = node.value {
                        last_match = Some((current_len, value));
                    }
                }
                None => break,
            }
        }

        last_match
    }
}
