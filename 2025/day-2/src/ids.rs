use chumsky::prelude::*;
use miette::Diagnostic;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("range {start}-{end} ends before it starts")]
#[diagnostic(code(day2::reversed_range), help("write the smaller ID first"))]
pub struct ReversedRange {
    pub start: u64,
    pub end: u64,
}

/// An inclusive range of product IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    start: u64,
    end: u64,
}

impl IdRange {
    pub fn new(start: u64, end: u64) -> Result<Self, ReversedRange> {
        if start > end {
            return Err(ReversedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Sums every ID in the range for which `is_invalid` holds.
    pub fn invalid_id_sum(&self, is_invalid: fn(u64) -> bool) -> u64 {
        let sum: u64 = (self.start..=self.end)
            .into_par_iter()
            .filter(|&id| is_invalid(id))
            .sum();
        tracing::debug!(start = self.start, end = self.end, sum, "checked range");
        sum
    }
}

/// Builds `1 0..01 0..01 ...`: `repeats` ones spaced `block_len` digits apart.
///
/// A number with `block_len * repeats` digits is one block repeated exactly when the mask divides it.
fn repetition_mask(block_len: u32, repeats: u32) -> u64 {
    let shift = 10_u64.pow(block_len);
    (1..repeats).fold(1, |mask, _| mask * shift + 1)
}

fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// An ID made of one digit block written exactly twice, like `55` or `123123`.
pub fn is_repeated_twice(n: u64) -> bool {
    let digits = digit_count(n);
    digits % 2 == 0 && n % repetition_mask(digits / 2, 2) == 0
}

/// An ID made of one digit block written at least twice, like `111` or `121212`.
pub fn is_repeated_pattern(n: u64) -> bool {
    let digits = digit_count(n);
    (1..=digits / 2)
        .filter(|block_len| digits % block_len == 0)
        .any(|block_len| n % repetition_mask(block_len, digits / block_len) == 0)
}

/// Comma separated `start-end` ranges, whitespace and line breaks between them are ignored.
pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<IdRange>, extra::Err<Rich<'a, char>>> {
    let id = text::int(10)
        .try_map(|id: &str, span| id.parse::<u64>().map_err(|e| Rich::custom(span, e)));

    let range = id
        .clone()
        .then_ignore(just('-'))
        .then(id)
        .try_map(|(start, end), span| IdRange::new(start, end).map_err(|e| Rich::custom(span, e)))
        .padded();

    range
        .separated_by(just(','))
        .allow_trailing()
        .collect::<Vec<_>>()
        .padded()
}
