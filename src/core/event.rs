use crate::utils::error::Result;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Reads a JSON event from `path`, or from stdin when no path is given.
pub fn read_event(path: Option<&Path>) -> Result<Value> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Reading event file");
            parse_event(std::fs::File::open(path)?)
        }
        None => parse_event(std::io::stdin().lock()),
    }
}

pub fn parse_event<R: Read>(mut reader: R) -> Result<Value> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(serde_json::from_str(&raw)?)
}
