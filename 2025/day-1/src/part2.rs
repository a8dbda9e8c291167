use miette::*;

use crate::dial::{parse_rotations, Dial};

/// Counts every click, during or at the end of a rotation, at which the dial points at `0`.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parse_rotations(input)?;

    let (_, password) = rotations
        .into_iter()
        .fold((Dial::default(), 0u64), |(mut dial, count), rotation| {
            let hits = dial.rotate(rotation);
            (dial, count + hits)
        });

    Ok(password.to_string())
}
