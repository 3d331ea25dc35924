//! Using the record! macro for ad-hoc records.
//!
//! Run with: cargo run --example macro

use serde_ltsv::{record, to_string, Record};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let empty = record!({});
    println!("Empty record: {:?}\n", to_string(&[empty])?);

    let hit = record!({
        "host": "127.0.0.1",
        "status": 200,
        "reqtime": 0.012,
        "cached": false
    });

    println!("Values are stored as text:");
    for (label, value) in &hit {
        println!("  {label} = {value:?}");
    }
    println!();

    let user = "frank";
    let mut dynamic = record!({ "user": user, "path": format!("/u/{}", user.len()) });
    dynamic.insert("status", "304");

    println!("Dynamic construction:");
    print!("{}", to_string(&[hit.clone(), dynamic.clone()])?);
    println!();

    let merged: Record = hit.into_iter().chain(dynamic).collect();
    println!("Merged (last write wins):");
    println!("  status: {:?}", merged.get("status"));
    println!("  labels: {}", merged.labels().collect::<Vec<_>>().join(", "));

    Ok(())
}
