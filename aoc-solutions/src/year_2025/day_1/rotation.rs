use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Number of clicks around the dial
pub const DIAL_SIZE: u32 = 100;

/// A reading on the dial, always within `0..DIAL_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u32);

impl Position {
    pub const ZERO: Position = Position(0);
    /// Where every dial starts
    pub const START: Position = Position(50);

    /// Wraps any integer reading onto the dial.
    pub fn new(reading: i64) -> Self {
        Position(reading.rem_euclid(i64::from(DIAL_SIZE)) as u32)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn as_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = RotationParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(RotationParseError::InvalidDirection(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationParseError {
    #[error("invalid rotation {0:?}: too short")]
    TooShort(String),
    #[error("invalid direction {0:?}, expected 'L' or 'R'")]
    InvalidDirection(char),
    #[error("invalid distance in {token:?}: {source}")]
    InvalidDistance {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// One move of the dial: a direction and a number of clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    pub direction: Direction,
    pub distance: u32,
}

impl Rotation {
    pub fn left(distance: u32) -> Self {
        Self {
            direction: Direction::Left,
            distance,
        }
    }

    pub fn right(distance: u32) -> Self {
        Self {
            direction: Direction::Right,
            distance,
        }
    }

    /// Same distance, opposite direction.
    pub fn inverse(self) -> Self {
        Self {
            direction: self.direction.reversed(),
            distance: self.distance,
        }
    }

    /// Where the dial ends up after turning from `from`.
    pub fn apply(self, from: Position) -> Position {
        let from = i64::from(from.value());
        let distance = i64::from(self.distance);
        match self.direction {
            Direction::Left => Position::new(from - distance),
            Direction::Right => Position::new(from + distance),
        }
    }

    /// How many times the dial points at zero while turning from `from`,
    /// counting the final click but not the starting one.
    pub fn zero_crossings(self, from: Position) -> u64 {
        let start = u64::from(from.value());
        let distance = u64::from(self.distance);
        let size = u64::from(DIAL_SIZE);

        match self.direction {
            // only full turns can come back to zero
            Direction::Left if from.is_zero() => distance / size,
            // zero is `start` clicks away, then once per turn
            Direction::Left if distance >= start => 1 + (distance - start) / size,
            Direction::Left => 0,
            Direction::Right => (start + distance) / size,
        }
    }
}

impl FromStr for Rotation {
    type Err = RotationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        let (Some(first), rest) = (chars.next(), chars.as_str()) else {
            return Err(RotationParseError::TooShort(token.to_string()));
        };
        if rest.is_empty() {
            return Err(RotationParseError::TooShort(token.to_string()));
        }

        let direction = Direction::try_from(first)?;
        let distance = rest
            .parse()
            .map_err(|source| RotationParseError::InvalidDistance {
                token: token.to_string(),
                source,
            })?;

        Ok(Self {
            direction,
            distance,
        })
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.as_char(), self.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("L68".parse::<Rotation>(), Ok(Rotation::left(68)));
        assert_eq!(" R48 ".parse::<Rotation>(), Ok(Rotation::right(48)));
        assert_eq!("R0".parse::<Rotation>(), Ok(Rotation::right(0)));
        assert_eq!(Rotation::left(5).to_string(), "L5");
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert_eq!(
            "X10".parse::<Rotation>(),
            Err(RotationParseError::InvalidDirection('X'))
        );
        assert!(matches!(
            "L".parse::<Rotation>(),
            Err(RotationParseError::TooShort(_))
        ));
        assert!(matches!(
            "".parse::<Rotation>(),
            Err(RotationParseError::TooShort(_))
        ));
        assert!(matches!(
            "R1x".parse::<Rotation>(),
            Err(RotationParseError::InvalidDistance { .. })
        ));
        assert!(matches!(
            "L-3".parse::<Rotation>(),
            Err(RotationParseError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_apply_wraps_both_ways() {
        assert_eq!(Rotation::right(50).apply(Position::START), Position::ZERO);
        assert_eq!(Rotation::left(50).apply(Position::START), Position::ZERO);
        assert_eq!(Rotation::left(68).apply(Position::START), Position::new(82));
        assert_eq!(Rotation::left(10).apply(Position::ZERO), Position::new(90));
        assert_eq!(
            Rotation::right(1000).apply(Position::new(7)),
            Position::new(7)
        );
    }

    #[test]
    fn test_crossings_examples() {
        assert_eq!(Rotation::left(50).zero_crossings(Position::START), 1);
        assert_eq!(Rotation::left(250).zero_crossings(Position::ZERO), 2);
        assert_eq!(Rotation::right(170).zero_crossings(Position::new(30)), 2);
        assert_eq!(Rotation::left(5).zero_crossings(Position::ZERO), 0);
        assert_eq!(Rotation::left(29).zero_crossings(Position::new(30)), 0);
        assert_eq!(Rotation::right(0).zero_crossings(Position::ZERO), 0);
        assert_eq!(Rotation::right(1000).zero_crossings(Position::START), 10);
    }

    /// Counts multiples of the dial size in the clicks passed over, without the
    /// left-from-zero special case.
    fn crossings_by_interval(rotation: Rotation, from: Position) -> u64 {
        let size = i64::from(DIAL_SIZE);
        let start = i64::from(from.value());
        let distance = i64::from(rotation.distance);
        let hits = match rotation.direction {
            // clicks visited: start - distance ..= start - 1
            Direction::Left => {
                (start - 1).div_euclid(size) - (start - distance - 1).div_euclid(size)
            }
            // clicks visited: start + 1 ..= start + distance
            Direction::Right => (start + distance).div_euclid(size) - start.div_euclid(size),
        };
        hits as u64
    }

    fn crossings_by_clicks(rotation: Rotation, from: Position) -> u64 {
        let step = match rotation.direction {
            Direction::Left => -1,
            Direction::Right => 1,
        };
        let mut reading = i64::from(from.value());
        let mut hits = 0;
        for _ in 0..rotation.distance {
            reading = (reading + step).rem_euclid(i64::from(DIAL_SIZE));
            if reading == 0 {
                hits += 1;
            }
        }
        hits
    }

    #[test]
    fn test_crossings_agree_with_interval_count_exhaustively() {
        for start in 0..DIAL_SIZE {
            for distance in 0..500 {
                let from = Position::new(i64::from(start));
                for rotation in [Rotation::left(distance), Rotation::right(distance)] {
                    assert_eq!(
                        rotation.zero_crossings(from),
                        crossings_by_interval(rotation, from),
                        "{rotation} from {from}"
                    );
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_apply_stays_on_dial(start in 0u32..DIAL_SIZE, distance in 0u32..1_000_000, left in any::<bool>()) {
            let rotation = if left { Rotation::left(distance) } else { Rotation::right(distance) };
            let end = rotation.apply(Position::new(i64::from(start)));
            prop_assert!(end.value() < DIAL_SIZE);
        }

        #[test]
        fn prop_inverse_returns_to_start(start in 0u32..DIAL_SIZE, distance in 0u32..100_000, left in any::<bool>()) {
            let rotation = if left { Rotation::left(distance) } else { Rotation::right(distance) };
            let from = Position::new(i64::from(start));
            prop_assert_eq!(rotation.inverse().apply(rotation.apply(from)), from);
        }

        #[test]
        fn prop_crossings_match_click_simulation(start in 0u32..DIAL_SIZE, distance in 0u32..500, left in any::<bool>()) {
            let rotation = if left { Rotation::left(distance) } else { Rotation::right(distance) };
            let from = Position::new(i64::from(start));
            prop_assert_eq!(rotation.zero_crossings(from), crossings_by_clicks(rotation, from));
        }
    }
}
