use chumsky::prelude::*;
use miette::*;

/// Number of positions on the dial, marked `0` through `99`.
pub const DIAL_SIZE: u32 = 100;

/// Where the dial points before the first rotation.
pub const START_POSITION: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left(u32),
    Right(u32),
}

/// A safe dial that counts every click landing on `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    position: u32,
}

impl Default for Dial {
    fn default() -> Self {
        Self::new(START_POSITION)
    }
}

impl Dial {
    pub fn new(position: u32) -> Self {
        Self {
            position: position % DIAL_SIZE,
        }
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    /// Applies `rotation` and returns how many clicks ended on `0`, the final one included.
    pub fn rotate(&mut self, rotation: Rotation) -> u64 {
        let pos = i64::from(self.position);
        let size = i64::from(DIAL_SIZE);

        let (hits, new_pos) = match rotation {
            Rotation::Left(amount) => {
                let amount = i64::from(amount);
                // Clicks visit [pos - amount, pos - 1]; count the multiples of the dial size in it.
                let hits = (pos - 1).div_euclid(size) - (pos - amount - 1).div_euclid(size);
                (hits, (pos - amount).rem_euclid(size))
            }
            Rotation::Right(amount) => {
                let end = pos + i64::from(amount);
                (end / size, end % size)
            }
        };

        self.position = new_pos as u32;
        tracing::trace!(?rotation, position = self.position, hits, "rotated");
        hits as u64
    }
}

/// One rotation per line, `L` or `R` followed by the number of clicks.
pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Rotation>, extra::Err<Rich<'a, char>>> {
    let rotation = one_of("LR")
        .then(text::int(10).try_map(|clicks: &str, span| {
            clicks.parse::<u32>().map_err(|e| Rich::custom(span, e))
        }))
        .map(|(dir, amount)| match dir {
            'L' => Rotation::Left(amount),
            _ => Rotation::Right(amount),
        });

    rotation
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

pub fn parse_rotations(input: &str) -> Result<Vec<Rotation>> {
    parser()
        .parse(input.trim_end())
        .into_result()
        .map_err(|e| miette!("Parse failed with errors: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(50, Rotation::Left(68), 82, 1)]
    #[case(82, Rotation::Left(30), 52, 0)]
    #[case(52, Rotation::Right(48), 0, 1)]
    #[case(0, Rotation::Left(5), 95, 0)]
    #[case(95, Rotation::Right(60), 55, 1)]
    #[case(55, Rotation::Left(55), 0, 1)]
    #[case(0, Rotation::Left(1), 99, 0)]
    #[case(99, Rotation::Left(99), 0, 1)]
    #[case(50, Rotation::Right(1000), 50, 10)]
    #[case(50, Rotation::Left(1000), 50, 10)]
    #[case(0, Rotation::Left(100), 0, 1)]
    #[case(0, Rotation::Right(0), 0, 0)]
    fn test_rotate(
        #[case] start: u32,
        #[case] rotation: Rotation,
        #[case] position: u32,
        #[case] hits: u64,
    ) {
        let mut dial = Dial::new(start);
        assert_eq!(hits, dial.rotate(rotation));
        assert_eq!(position, dial.position());
    }

    #[test]
    fn test_rotate_matches_clicking() {
        let mut dial = Dial::default();
        let mut clicked = START_POSITION;
        for (i, amount) in (0..40u32).map(|i| (i, i * 37 % 251)) {
            let rotation = if i % 3 == 0 {
                Rotation::Right(amount)
            } else {
                Rotation::Left(amount)
            };

            let mut expected = 0;
            for _ in 0..amount {
                clicked = match rotation {
                    Rotation::Left(_) => (clicked + DIAL_SIZE - 1) % DIAL_SIZE,
                    Rotation::Right(_) => (clicked + 1) % DIAL_SIZE,
                };
                if clicked == 0 {
                    expected += 1;
                }
            }

            assert_eq!(expected, dial.rotate(rotation), "rotation {i}: {rotation:?}");
            assert_eq!(clicked, dial.position());
        }
    }

    #[test]
    fn test_parser() -> Result<()> {
        assert_eq!(
            vec![Rotation::Left(68), Rotation::Right(48), Rotation::Left(0)],
            parse_rotations("L68\nR48\r\nL0\n")?
        );
        Ok(())
    }

    #[rstest]
    #[case("X12")]
    #[case("L12\nR")]
    #[case("L-3")]
    #[case("R99999999999")]
    fn test_parser_rejects(#[case] input: &str) {
        assert!(parse_rotations(input).is_err());
    }
}
