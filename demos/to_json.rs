//! Converting LTSV records to JSON lines.
//!
//! Run with: cargo run --example to_json

use serde_ltsv::{Reader, ReaderOptions};
use std::error::Error;

const INPUT: &str = "\
hoge:foo\tbar:baz
perl:5.17.8\truby:2.0\tpython:2.6
sushi:寿司\ttennpura:天ぷら\tramen:ラーメン\tgyoza:餃子
";

fn main() -> Result<(), Box<dyn Error>> {
    let mut reader = Reader::with_options(INPUT.as_bytes(), ReaderOptions::lenient());

    for record in reader.records() {
        let record = record?;
        println!("{}", serde_json::to_string(&record)?);
    }

    Ok(())
}
