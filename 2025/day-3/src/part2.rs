use miette::*;

use crate::bank::{parse_banks, total_joltage};

/// Batteries turned on per bank once the safety override is engaged.
pub const WIDTH: usize = 12;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parse_banks(input)?;
    let total = total_joltage(&banks, WIDTH)?;

    Ok(total.to_string())
}
