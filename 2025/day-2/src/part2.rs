use chumsky::prelude::*;
use miette::*;
use rayon::prelude::*;

use crate::ids::{is_repeated_pattern, parser};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let ranges = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let sum: u64 = ranges
        .par_iter()
        .map(|range| range.invalid_id_sum(is_repeated_pattern))
        .sum();

    Ok(sum.to_string())
}
