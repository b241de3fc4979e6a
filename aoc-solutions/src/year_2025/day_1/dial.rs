use super::rotation::{Position, Rotation};

/// What a dial counts while it turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroCounter {
    /// Rotations that leave the dial at zero
    EndsAtZero,
    /// Every click that lands on zero, including full turns
    CrossesZero,
}

impl ZeroCounter {
    /// Contribution of `rotation` when applied to a dial at `from`.
    pub fn count(self, rotation: Rotation, from: Position) -> u64 {
        match self {
            ZeroCounter::EndsAtZero => u64::from(rotation.apply(from).is_zero()),
            ZeroCounter::CrossesZero => rotation.zero_crossings(from),
        }
    }
}

/// The safe's dial: a position plus a running count
#[derive(Debug, Clone)]
pub struct Dial {
    position: Position,
    counter: ZeroCounter,
    count: u64,
}

impl Dial {
    pub fn new(counter: ZeroCounter) -> Self {
        Self {
            position: Position::START,
            counter,
            count: 0,
        }
    }

    /// Count against the current position, then move.
    pub fn rotate(&mut self, rotation: Rotation) -> &mut Self {
        self.count += self.counter.count(rotation, self.position);
        self.position = rotation.apply(self.position);
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn counter(&self) -> ZeroCounter {
        self.counter
    }

    pub fn reset(&mut self) -> &mut Self {
        self.position = Position::START;
        self.count = 0;
        self
    }
}

impl Extend<Rotation> for Dial {
    fn extend<I: IntoIterator<Item = Rotation>>(&mut self, rotations: I) {
        for rotation in rotations {
            self.rotate(rotation);
        }
    }
}

/// Final count of a fresh dial after turning through `rotations`.
pub fn count_zeros(rotations: &[Rotation], counter: ZeroCounter) -> u64 {
    rotations
        .iter()
        .fold((Position::START, 0), |(position, count), &rotation| {
            (
                rotation.apply(position),
                count + counter.count(rotation, position),
            )
        })
        .1
}
