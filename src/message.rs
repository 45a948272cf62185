//! Message module.
//!
//! Contains the immutable `Message` type: one short social-media post
//! with its id, author, text and send time.

use std::fmt::Display;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::util;

/// Maximum text length in the reference domain. Documented, not enforced.
pub const MAX_TEXT_LEN: usize = 140;

/// A single message.
///
/// Two messages are the same message when their ids match, whatever the
/// other fields say. Equality and hashing look at `id` only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message {
    id: u64,
    author: String,
    text: String,
    timestamp: DateTime<FixedOffset>,
}

impl Message {
    /// Create a message with a known unique id.
    ///
    /// The author is expected to be a valid username (see [`util::is_valid_username`]);
    /// it is not checked here. Use [`Message::try_new`] for untrusted input.
    pub fn new(
        id: u64,
        author: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            text: text.into(),
            timestamp,
        }
    }

    /// Create a message, rejecting malformed authors.
    pub fn try_new(
        id: u64,
        author: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<FixedOffset>,
    ) -> Result<Self> {
        let author = author.into();
        util::validate_username(&author)?;
        Ok(Self::new(id, author, text, timestamp))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Username of the author, as given. Compare through [`util::normalize_username`].
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Case-insensitive author check.
    pub fn is_written_by(&self, username: &str) -> bool {
        util::normalize_username(&self.author) == util::normalize_username(username)
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Message {}

impl Hash for Message {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} {} {}) {}",
            self.id,
            self.timestamp.to_rfc3339(),
            self.author,
            self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashSet;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        util::parse_timestamp(s).unwrap()
    }

    #[test]
    fn test_equality_is_by_id_only() {
        let a = Message::new(7, "alyssa", "first", ts("2016-02-17T10:00:00Z"));
        let b = Message::new(7, "bbitdiddle", "something else", ts("2016-02-17T11:00:00Z"));
        let c = Message::new(8, "alyssa", "first", ts("2016-02-17T10:00:00Z"));

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Message> = vec![a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_getters() {
        let when = ts("2016-02-17T10:00:00Z");
        let message = Message::new(1, "Alyssa", "is it reasonable to talk about rivest so much?", when);

        assert_eq!(message.id(), 1);
        assert_eq!(message.author(), "Alyssa");
        assert_eq!(message.text(), "is it reasonable to talk about rivest so much?");
        assert_eq!(message.timestamp(), when);
        assert!(message.is_written_by("alyssa"));
        assert!(message.is_written_by("ALYSSA"));
        assert!(!message.is_written_by("alyss"));
    }

    #[test]
    fn test_try_new_rejects_bad_author() {
        let when = ts("2016-02-17T10:00:00Z");
        assert!(Message::try_new(1, "jack", "hi", when).is_ok());
        assert!(matches!(
            Message::try_new(2, "", "hi", when),
            Err(Error::InvalidUsername(_))
        ));
        assert!(matches!(
            Message::try_new(3, "jack.smith", "hi", when),
            Err(Error::InvalidUsername(_))
        ));
    }

    #[test]
    fn test_display() {
        let message = Message::new(3, "jack", "blah @dick", ts("2016-02-17T12:00:00Z"));
        assert_eq!(message.to_string(), "(3 2016-02-17T12:00:00+00:00 jack) blah @dick");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{"id":5,"author":"donald","text":"what is the fuss with @Liz","timestamp":"2016-02-17T13:00:00+00:00"}"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.id(), 5);
        assert_eq!(message.author(), "donald");
        assert_eq!(message.timestamp(), ts("2016-02-17T13:00:00Z"));
    }
}
