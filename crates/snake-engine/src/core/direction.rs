/// One of the four cardinal headings the snake can travel in.
///
/// Screen coordinates are used: `y` grows downwards, so [`Direction::Up`]
/// maps to a negative `dy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the per-tick displacement for this heading on a grid of `unit`-sized cells.
    #[must_use]
    pub const fn velocity(self, unit: i32) -> Velocity {
        match self {
            Self::Up => Velocity::new(0, -unit),
            Self::Down => Velocity::new(0, unit),
            Self::Left => Velocity::new(-unit, 0),
            Self::Right => Velocity::new(unit, 0),
        }
    }
}

/// Displacement applied to the head on every tick.
///
/// Always one of `(±unit, 0)` or `(0, ±unit)` when produced by [`Direction::velocity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Returns `true` if `self` is the additive inverse of `other`.
    ///
    /// A zero vector is never considered a reversal.
    #[must_use]
    pub const fn is_reverse_of(self, other: Self) -> bool {
        let is_zero = self.dx == 0 && self.dy == 0;
        !is_zero && self.dx == -other.dx && self.dy == -other.dy
    }

    /// Recovers the heading this velocity represents on a `unit` grid.
    #[must_use]
    pub fn direction(self, unit: i32) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.velocity(unit) == self)
    }
}
