//! Demo showcasing mention extraction, the follows graph and influence ranking.
//!
//! Run with `RUST_LOG=debug cargo run --example influence_demo` to see the library's log events.

use mention_graph_lib_rs::filter;
use mention_graph_lib_rs::graph::guess_follows_graph;
use mention_graph_lib_rs::influence::top_influencers;
use mention_graph_lib_rs::mentions::mentioned_users;
use mention_graph_lib_rs::message::Message;
use mention_graph_lib_rs::period::get_period;
use mention_graph_lib_rs::util::parse_timestamp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let messages = vec![
        Message::try_new(1, "alyssa", "who@uic.edu is it reasonable @jack to talk about rivest so much? @donald", parse_timestamp("2016-02-17T10:00:00Z")?)?,
        Message::try_new(2, "humptiedumptie", "rivest talk in 30 minutes #hype", parse_timestamp("2016-02-17T11:00:00Z")?)?,
        Message::try_new(3, "jack", "blah @jack meets @jack and @dick", parse_timestamp("2016-02-17T12:00:00Z")?)?,
        Message::try_new(4, "alyssa", "what is the fuss with @humptiedumptie and @dick @jack", parse_timestamp("2016-02-17T12:00:00Z")?)?,
        Message::try_new(5, "donald", "what is the fuss with @Liz and @jack and @dick", parse_timestamp("2016-02-17T13:00:00Z")?)?,
        Message::try_new(6, "john", "blah-blah I do not follow anyone", parse_timestamp("2016-02-17T14:00:00Z")?)?,
        Message::try_new(7, "betsy", "what an awesome day", parse_timestamp("2016-02-17T15:00:00Z")?)?,
    ];

    println!("=== Messages ===");
    for message in &messages {
        println!("{message}");
    }

    println!("\n=== Time Span ===");
    println!("{}", get_period(&messages));

    println!("\n=== Selections ===");
    println!("Written by alyssa: {}", filter::written_by(&messages, "Alyssa").len());
    println!("Containing 'talk': {}", filter::containing(&messages, &["talk"]).len());

    println!("\n=== Mentioned Users ===");
    let mentioned: Vec<String> = mentioned_users(&messages).into_iter().collect();
    println!("{}", mentioned.join(", "));

    println!("\n=== Follows Graph ===");
    let graph = guess_follows_graph(&messages);
    print!("{graph}");

    println!("\n=== Top Influencers ===");
    for (i, influencer) in top_influencers(&graph, 5).iter().enumerate() {
        println!("{}. {influencer}", i + 1);
    }

    Ok(())
}
