use miette::*;

use crate::bank::{parse_banks, total_joltage};

/// Batteries turned on per bank.
pub const WIDTH: usize = 2;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parse_banks(input)?;
    let total = total_joltage(&banks, WIDTH)?;

    Ok(total.to_string())
}
