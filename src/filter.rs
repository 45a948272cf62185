//! Filter module for selecting messages out of a list.
//!
//! Each function keeps the messages matching one condition, in the same
//! order as the input list. The input is never modified.

use std::collections::HashSet;

use crate::message::Message;
use crate::period::Period;
use crate::util::normalize_username;

/// Find messages written by a particular user.
///
/// # Arguments
///
/// * `messages` - Messages with distinct ids
/// * `username` - Username to look for, compared case-insensitively
///
/// # Returns
///
/// All and only the messages whose author is `username`, in input order.
pub fn written_by(messages: &[Message], username: &str) -> Vec<Message> {
    let username = normalize_username(username);
    messages
        .iter()
        .filter(|message| normalize_username(message.author()) == username)
        .cloned()
        .collect()
}

/// Find messages sent during a period, both endpoints included.
pub fn in_period(messages: &[Message], period: &Period) -> Vec<Message> {
    messages
        .iter()
        .filter(|message| period.contains(message.timestamp()))
        .cloned()
        .collect()
}

/// Find messages containing at least one of the given words.
///
/// Message text is split into words on runs of whitespace. A word matches
/// when it equals one of `words` ignoring case; substrings do not count,
/// so `"talk"` does not match `"talking"`.
///
/// # Arguments
///
/// * `messages` - Messages with distinct ids
/// * `words` - Words to search for. An empty list matches nothing.
pub fn containing<S: AsRef<str>>(messages: &[Message], words: &[S]) -> Vec<Message> {
    let wanted: HashSet<String> = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
    if wanted.is_empty() {
        return Vec::new();
    }

    messages
        .iter()
        .filter(|message| {
            message
                .text()
                .split_whitespace()
                .any(|word| wanted.contains(&word.to_lowercase()))
        })
        .cloned()
        .collect()
}
