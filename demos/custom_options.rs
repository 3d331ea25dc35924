//! Customizing LTSV output with WriterOptions and ReaderOptions.
//!
//! Run with: cargo run --example custom_options

use serde::{Deserialize, Serialize};
use serde_ltsv::{
    from_str_with_options, record, to_string, to_string_with_options, Quoting, ReaderOptions,
    Record, WriterOptions,
};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Event {
    level: String,
    msg: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let events = vec![Event {
        level: "info".to_string(),
        msg: "service started".to_string(),
    }];

    println!("Default (LF):\n{:?}\n", to_string(&events)?);
    println!(
        "CRLF terminator:\n{:?}\n",
        to_string_with_options(&events, WriterOptions::crlf())?
    );

    let tricky = vec![Event {
        level: "warn".to_string(),
        msg: "got \"bad\"\tinput".to_string(),
    }];

    match to_string(&tricky) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("Without quoting: {}\n", e),
    }

    let quoted = to_string_with_options(&tricky, WriterOptions::new().with_quoting(Quoting::Csv))?;
    println!("With CSV-style quoting:\n{}", quoted);

    let back: Vec<Event> =
        from_str_with_options(&quoted, ReaderOptions::new().with_quoting(Quoting::Csv))?;
    assert_eq!(back, tricky);
    println!("✓ Quoted round-trip successful\n");

    let mixed = "a:1\tb:2\na:3\tc:4\n";
    let records: Vec<Record> = from_str_with_options(mixed, ReaderOptions::lenient())?;
    println!("Lenient reading of mixed shapes:");
    for record in &records {
        println!("  {:?}", record);
    }
    assert_eq!(records[1], record!({ "a": 3, "c": 4 }));

    Ok(())
}
