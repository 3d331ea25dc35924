//! Streaming an access log with schema checks.
//!
//! Run with: cargo run --example access_log

use serde::{Deserialize, Serialize};
use serde_ltsv::{Error, Reader, Writer};
use std::error::Error as StdError;
use std::io;

const LOG: &str = "\
host:127.0.0.1\ttime:[10/Oct/2000:13:55:36 -0700]\treq:GET /index.html HTTP/1.0\tstatus:200\tsize:2326
host:10.0.0.7\ttime:[10/Oct/2000:13:55:40 -0700]\treq:GET /favicon.ico HTTP/1.0\tstatus:404\tsize:

host:10.0.0.9\ttime:[10/Oct/2000:13:56:02 -0700]\treq:POST /login HTTP/1.0\tstatus:302\tsize:0\tua:curl/8.0
host:127.0.0.1\ttime:[10/Oct/2000:13:56:10 -0700]\treq:GET /bad HTTP/1.0\tstatus:oops\tsize:1
host:127.0.0.1\ttime:[10/Oct/2000:13:57:00 -0700]\treq:GET / HTTP/1.0\tstatus:200\tsize:512
";

#[derive(Debug, Serialize, Deserialize)]
struct Hit {
    host: String,
    time: String,
    req: String,
    status: u16,
    size: Option<u64>,
}

fn main() -> Result<(), Box<dyn StdError>> {
    let mut reader = Reader::new(LOG.as_bytes());
    let mut hits = Vec::new();

    loop {
        match reader.deserialize::<Hit>() {
            Ok(Some(hit)) => hits.push(hit),
            Ok(None) => break,
            Err(Error::LabelName { line, label }) => {
                println!("line {}: skipping record with unknown label {:?}", line, label);
            }
            Err(e @ Error::InvalidValue { .. }) => {
                println!("line {}: skipping record: {}", reader.line(), e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!("\nAccepted {} of the records:", hits.len());
    let mut writer = Writer::new(io::stdout());
    for hit in hits.iter().filter(|hit| hit.status < 400) {
        writer.serialize(hit)?;
    }
    writer.flush()?;

    let bytes: u64 = hits.iter().filter_map(|hit| hit.size).sum();
    println!("\nTotal bytes served: {}", bytes);

    Ok(())
}
