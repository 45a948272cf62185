//! Mention extraction.
//!
//! A mention is `@` followed by one or more username characters
//! (`A-Z`, `a-z`, `0-9`, `_`, `-`). The `@` must not come right after a
//! username character, so `who@uic.edu` mentions nobody. The name runs
//! until the first character that cannot be part of a username.

use std::collections::BTreeSet;

use tracing::trace;

use crate::message::Message;
use crate::util::{is_username_char, normalize_username};

/// Scans text for mentions, left to right.
pub struct MentionScanner {
    input: Vec<char>,
    position: usize,
}

impl MentionScanner {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Collect every mentioned username in order of appearance, as written.
    pub fn scan(&mut self) -> Vec<String> {
        let mut names = Vec::new();

        while self.position < self.input.len() {
            if let Some(name) = self.next_mention() {
                names.push(name);
            }
        }

        names
    }

    fn next_mention(&mut self) -> Option<String> {
        if self.peek_char() != '@' || self.follows_username_char() {
            self.advance(1);
            return None;
        }

        self.advance(1); // Skip @
        let start = self.position;
        while self.position < self.input.len() && is_username_char(self.peek_char()) {
            self.advance(1);
        }

        if self.position > start {
            Some(self.input[start..self.position].iter().collect())
        } else {
            None
        }
    }

    fn follows_username_char(&self) -> bool {
        self.position > 0 && is_username_char(self.input[self.position - 1])
    }

    fn peek_char(&self) -> char {
        self.input.get(self.position).copied().unwrap_or('\0')
    }

    fn advance(&mut self, count: usize) {
        self.position = std::cmp::min(self.position + count, self.input.len());
    }
}

/// Get the usernames mentioned in a piece of text.
///
/// Names are lower-cased, so `@Alice` and `@alice` give a single `alice`.
pub fn extract_mentions(text: &str) -> BTreeSet<String> {
    let mentions: BTreeSet<String> = MentionScanner::new(text)
        .scan()
        .iter()
        .map(|name| normalize_username(name))
        .collect();
    trace!(count = mentions.len(), "extracted mentions");
    mentions
}

/// Get the usernames mentioned anywhere in a list of messages.
pub fn mentioned_users(messages: &[Message]) -> BTreeSet<String> {
    messages
        .iter()
        .flat_map(|message| extract_mentions(message.text()))
        .collect()
}
