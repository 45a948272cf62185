//! Follows graph inferred from mentions.
//!
//! A follows graph maps each user to the set of users they follow. Here
//! "follows" is guessed from evidence: when A mentions B in a message,
//! A is taken to follow B. No knowledge of a real social network is used.
//!
//! Usernames are case-insensitive. The graph lower-cases every name on the
//! way in and on lookup, so callers may pass names in any case. A user never
//! follows themselves.

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use tracing::debug;

use crate::mentions::extract_mentions;
use crate::message::Message;
use crate::util::normalize_username;

/// Directed "follows" relation between normalized usernames.
///
/// Keys are users known to the graph (every author, when built from
/// messages); values are the users each key follows. A followed user does
/// not need to be a key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FollowsGraph {
    follows: BTreeMap<String, BTreeSet<String>>,
}

impl FollowsGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guess who follows whom from a list of messages.
    ///
    /// Every author becomes a key, even one who mentions nobody. An author
    /// follows everyone they @-mention in any of their messages, except
    /// themselves. Single pass over the messages.
    pub fn from_messages(messages: &[Message]) -> Self {
        let mut graph = Self::new();

        for message in messages {
            let author = normalize_username(message.author());
            graph.follows.entry(author.clone()).or_default();

            for mentioned in extract_mentions(message.text()) {
                graph.add_follow(&author, &mentioned);
            }
        }

        debug!(
            messages = messages.len(),
            users = graph.len(),
            edges = graph.edge_count(),
            "built follows graph"
        );
        graph
    }

    /// Make sure `user` is a key, with an empty follow set if new.
    pub fn add_user(&mut self, user: &str) {
        self.follows.entry(normalize_username(user)).or_default();
    }

    /// Record that `follower` follows `followee`.
    ///
    /// `follower` becomes a key if it was not one. Returns `false` when the
    /// edge already existed or would be a self-follow; self-follows are
    /// never stored, though the follower is still added as a key.
    pub fn add_follow(&mut self, follower: &str, followee: &str) -> bool {
        let follower = normalize_username(follower);
        let followee = normalize_username(followee);
        let followed = self.follows.entry(follower.clone()).or_default();
        if follower == followee {
            return false;
        }
        followed.insert(followee)
    }

    /// The users `user` follows, or `None` if `user` is not a key.
    pub fn follows(&self, user: &str) -> Option<&BTreeSet<String>> {
        self.follows.get(&normalize_username(user))
    }

    pub fn is_following(&self, follower: &str, followee: &str) -> bool {
        self.follows(follower)
            .map(|followed| followed.contains(&normalize_username(followee)))
            .unwrap_or(false)
    }

    /// Whether `user` is a key of the graph.
    pub fn contains_user(&self, user: &str) -> bool {
        self.follows.contains_key(&normalize_username(user))
    }

    /// Keys of the graph, in lexical order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.follows.keys().map(String::as_str)
    }

    /// Every username in the graph, whether as a key or as a followed user.
    pub fn all_usernames(&self) -> BTreeSet<&str> {
        self.follows
            .iter()
            .flat_map(|(user, followed)| {
                std::iter::once(user.as_str()).chain(followed.iter().map(String::as_str))
            })
            .collect()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.follows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.follows.is_empty()
    }

    /// Number of follow edges.
    pub fn edge_count(&self) -> usize {
        self.follows.values().map(BTreeSet::len).sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, BTreeSet<String>> {
        self.follows.iter()
    }
}

/// Guess who might follow whom, from evidence found in messages.
///
/// See [`FollowsGraph::from_messages`].
pub fn guess_follows_graph(messages: &[Message]) -> FollowsGraph {
    FollowsGraph::from_messages(messages)
}

impl<'a> IntoIterator for &'a FollowsGraph {
    type Item = (&'a String, &'a BTreeSet<String>);
    type IntoIter = btree_map::Iter<'a, String, BTreeSet<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.follows.iter()
    }
}

impl<K, I> FromIterator<(K, I)> for FollowsGraph
where
    K: AsRef<str>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    /// Build a graph from `(user, followed users)` pairs.
    ///
    /// Names are normalized, entries for the same user are merged and
    /// self-follows are dropped.
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut graph = Self::new();
        for (user, followed) in iter {
            graph.add_user(user.as_ref());
            for followee in followed {
                graph.add_follow(user.as_ref(), followee.as_ref());
            }
        }
        graph
    }
}

impl Display for FollowsGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Follows graph with {} users:", self.follows.len())?;
        for (user, followed) in &self.follows {
            let followed: Vec<&str> = followed.iter().map(String::as_str).collect();
            writeln!(f, "{user} -> [{}]", followed.join(", "))?;
        }
        Ok(())
    }
}
