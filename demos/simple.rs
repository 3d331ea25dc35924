//! Basic LTSV serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_ltsv::{from_str, to_string};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Hit {
    host: String,
    path: String,
    status: u16,
    size: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let hits = vec![
        Hit {
            host: "127.0.0.1".to_string(),
            path: "/index.html".to_string(),
            status: 200,
            size: Some(2326),
        },
        Hit {
            host: "10.0.0.7".to_string(),
            path: "/missing".to_string(),
            status: 404,
            size: None,
        },
    ];

    // Serialize to LTSV
    let ltsv = to_string(&hits)?;
    println!("LTSV output:\n{}", ltsv);

    // Deserialize back to struct
    let hits_back: Vec<Hit> = from_str(&ltsv)?;
    assert_eq!(hits, hits_back);
    println!("✓ Round-trip successful");

    Ok(())
}
