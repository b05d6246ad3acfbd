use meldex_core::emit::{to_json, write_atomic};
use meldex_core::error::MeldexError;
use serde::Serialize;
use std::path::Path;

pub fn write<T: Serialize>(path: &Path, doc: &T, pretty: bool) -> Result<(), MeldexError> {
    let json = to_json(doc, pretty)?;
    write_atomic(path, &json)
}

pub fn print<T: Serialize>(doc: &T) -> Result<(), MeldexError> {
    println!("{}", to_json(doc, true)?);
    Ok(())
}
