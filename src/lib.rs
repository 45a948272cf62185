//! # mention-graph-lib-rs
//!
//! A Rust library for inferring who-follows-whom from the @-mentions in short social messages.
//!
//! ## Overview
//!
//! mention-graph-lib-rs works on an already-loaded list of messages. It extracts @-mentions from message text,
//! builds a "follows" graph out of that evidence and ranks users by how many others follow them.
//! Around that core it offers the usual selection helpers for message lists.
//!
//! ## Features
//!
//! - **Mention Extraction**: Find `@username` mentions with correct boundary rules, case-folded
//! - **Follows Graph**: Infer a directed graph where authors follow the users they mention
//! - **Influence Ranking**: Order users by inferred follower count with a deterministic tie-break
//! - **Filtering**: Select messages by author, by time period or by keywords
//! - **Time Span**: Compute the smallest period covering a list of messages
//!
//! Usernames are case-insensitive everywhere: `Alice`, `ALICE` and `alice` are the same user,
//! and everything this crate returns uses the lower-cased form.
//!
//! ## Quick Start
//!
//! ```rust
//! use mention_graph_lib_rs::{graph, influence, message::Message, util};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let when = util::parse_timestamp("2016-02-17T10:00:00Z")?;
//!     let messages = vec![
//!         Message::new(1, "jack", "hi @Dick and @JACK", when),
//!         Message::new(2, "dick", "no mentions", when),
//!     ];
//!
//!     let network = graph::guess_follows_graph(&messages);
//!     assert!(network.follows("jack").unwrap().contains("dick"));
//!
//!     let ranking = influence::rank_by_influence(&network);
//!     assert_eq!(ranking, vec!["dick".to_string(), "jack".to_string()]);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod filter;
pub mod graph;
pub mod influence;
pub mod mentions;
pub mod message;
pub mod period;
pub mod util;

pub use error::{Error, Result};
pub use graph::FollowsGraph;
pub use message::Message;
pub use period::Period;
