//! Influence ranking over a follows graph.
//!
//! A user's influence is their follower count: the number of users in the
//! graph who follow them. Each follower counts once, however many times
//! they mentioned the user.
//!
//! Rankings are deterministic. Users with the same follower count are
//! ordered by username, so users nobody follows end up at the tail in
//! alphabetical order.

use std::collections::BTreeMap;
use std::fmt::Display;

use tracing::debug;

use crate::graph::FollowsGraph;

/// A ranked user with their follower count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Influencer {
    pub username: String,
    pub followers: usize,
}

impl Display for Influencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} followers)", self.username, self.followers)
    }
}

/// Count followers for every username in the graph.
///
/// Every user appearing as a key or as a followed user gets an entry,
/// zero included.
pub fn follower_counts(graph: &FollowsGraph) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = graph
        .all_usernames()
        .into_iter()
        .map(|user| (user.to_string(), 0))
        .collect();

    for (_, followed) in graph {
        for followee in followed {
            *counts.entry(followee.clone()).or_default() += 1;
        }
    }

    counts
}

/// Rank every user in the graph, most followed first.
///
/// Ties are broken by username, ascending.
pub fn influencers(graph: &FollowsGraph) -> Vec<Influencer> {
    let mut ranked: Vec<Influencer> = follower_counts(graph)
        .into_iter()
        .map(|(username, followers)| Influencer { username, followers })
        .collect();

    ranked.sort_by(|a, b| {
        b.followers
            .cmp(&a.followers)
            .then_with(|| a.username.cmp(&b.username))
    });

    debug!(users = ranked.len(), "ranked users by influence");
    ranked
}

/// Find the people in a network who have the greatest influence.
///
/// # Returns
///
/// Every distinct username in `graph`, exactly once, in descending order
/// of follower count. Equal counts are ordered by username.
pub fn rank_by_influence(graph: &FollowsGraph) -> Vec<String> {
    influencers(graph)
        .into_iter()
        .map(|influencer| influencer.username)
        .collect()
}

/// The `limit` most influential users.
pub fn top_influencers(graph: &FollowsGraph, limit: usize) -> Vec<Influencer> {
    influencers(graph).into_iter().take(limit).collect()
}
