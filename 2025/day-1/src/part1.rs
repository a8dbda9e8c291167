use miette::*;

use crate::dial::{parse_rotations, Dial};

/// Counts the rotations after which the dial rests on `0`.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parse_rotations(input)?;

    let (_, password) = rotations
        .into_iter()
        .fold((Dial::default(), 0u64), |(mut dial, count), rotation| {
            dial.rotate(rotation);
            let resting_on_zero = dial.position() == 0;
            (dial, count + u64::from(resting_on_zero))
        });

    Ok(password.to_string())
}
