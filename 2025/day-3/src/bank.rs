use miette::Diagnostic;
use rayon::prelude::*;
use thiserror::Error;

/// Widest selection whose value always fits in a `u64` (`10^19 - 1 < u64::MAX`).
pub const MAX_WIDTH: usize = 19;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum BankError {
    #[error("bank is empty")]
    #[diagnostic(code(day3::empty_bank), help("remove blank lines between banks"))]
    Empty,

    #[error("found {found:?} at column {column}, banks may only contain digits")]
    #[diagnostic(code(day3::not_a_digit))]
    NotADigit { found: char, column: usize },

    #[error("bank has {actual} batteries, expected at least {expected}")]
    #[diagnostic(
        code(day3::too_short),
        help("a bank needs at least as many batteries as are turned on")
    )]
    TooShort { expected: usize, actual: usize },

    #[error("selection width must be between 1 and {max}, got {0}", max = MAX_WIDTH)]
    #[diagnostic(code(day3::invalid_width))]
    InvalidWidth(usize),
}

/// A [`BankError`] tied to the input line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("bank on line {line} is invalid")]
#[diagnostic(code(day3::invalid_bank))]
pub struct InvalidBank {
    pub line: usize,
    #[source]
    #[diagnostic_source]
    pub reason: BankError,
}

/// A single line of battery joltage ratings, validated to hold only ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bank<'a> {
    line: usize,
    digits: &'a [u8],
}

impl<'a> Bank<'a> {
    /// Validates `digits` as the bank found on (1-based) `line`.
    pub fn new(line: usize, digits: &'a str) -> Result<Self, BankError> {
        if digits.is_empty() {
            return Err(BankError::Empty);
        }

        // Everything before the first non-digit is ASCII, so the byte offset is the column.
        if let Some((offset, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(BankError::NotADigit {
                found,
                column: offset + 1,
            });
        }

        Ok(Self {
            line,
            digits: digits.as_bytes(),
        })
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Picks `width` batteries, keeping their order, so the resulting number is as large as possible.
    ///
    /// Greedy monotonic stack: while the newest kept digit is smaller than the incoming one
    /// and there are still digits we are allowed to throw away, the smaller one is evicted.
    /// Once the buffer is full every further digit is discarded. The eviction is the only
    /// step guarded by the drop budget.
    pub fn select(&self, width: usize) -> Result<Vec<u8>, BankError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(BankError::InvalidWidth(width));
        }
        if self.len() < width {
            return Err(BankError::TooShort {
                expected: width,
                actual: self.len(),
            });
        }

        let mut buffer: Vec<u8> = Vec::with_capacity(width);
        let mut drop_budget = self.len() - width;

        for &digit in self.digits {
            while drop_budget > 0 && buffer.last().is_some_and(|&last| last < digit) {
                buffer.pop();
                drop_budget -= 1;
            }

            if buffer.len() < width {
                buffer.push(digit);
            } else {
                // A full buffer with input left means fewer than `len - width` digits were dropped.
                drop_budget -= 1;
            }
        }

        Ok(buffer)
    }

    /// The largest joltage this bank can produce with `width` batteries turned on.
    pub fn max_joltage(&self, width: usize) -> Result<u64, BankError> {
        let selected = self.select(width)?;
        Ok(selected
            .into_iter()
            .fold(0u64, |acc, digit| acc * 10 + u64::from(digit - b'0')))
    }
}

/// Largest `k`-digit number obtainable from `digits` without reordering them.
///
/// A leading zero in the selection is absorbed numerically, so `("0123", 4)` yields `123`.
pub fn select_max_subsequence(digits: &str, k: usize) -> Result<u64, BankError> {
    Bank::new(1, digits)?.max_joltage(k)
}

/// Splits the puzzle input into banks, one per line.
pub fn parse_banks(input: &str) -> Result<Vec<Bank<'_>>, InvalidBank> {
    input
        .trim_end_matches(['\r', '\n'])
        .lines()
        .enumerate()
        .map(|(index, line)| {
            Bank::new(index + 1, line).map_err(|reason| InvalidBank {
                line: index + 1,
                reason,
            })
        })
        .collect()
}

/// Sum of the best `width`-battery joltage across every bank, computed in parallel.
///
/// Each joltage is below `2^64` and there are fewer than `2^64` banks, so the total fits a `u128`.
pub fn total_joltage(banks: &[Bank<'_>], width: usize) -> Result<u128, InvalidBank> {
    banks
        .par_iter()
        .map(|bank| {
            bank.max_joltage(width)
                .inspect(|joltage| tracing::debug!(line = bank.line(), joltage, "largest joltage"))
                .map(u128::from)
                .map_err(|reason| InvalidBank {
                    line: bank.line(),
                    reason,
                })
        })
        .sum()
}
