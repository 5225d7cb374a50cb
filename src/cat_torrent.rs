use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use bdecoding::BdecodeValue;

fn main() -> Result<()> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "cat_torrent".into());

    let Some(file_path) = args.next() else {
        bail!("Usage: {program} <file_path>");
    };

    let buffer = fs::read(&file_path).with_context(|| format!("Failed to read '{file_path}'"))?;

    let root_value = BdecodeValue::parse_buffer(&buffer)
        .with_context(|| format!("Failed to decode '{file_path}'"))?;
    println!("{}", root_value.to_json_pretty());

    Ok(())
}
