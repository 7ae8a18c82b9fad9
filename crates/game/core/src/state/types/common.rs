use std::fmt;
use std::ops::Add;

/// Index of an actor inside the grid's actor arena.
///
/// Identifiers are handed out in insertion order and never reused while the
/// grid lives, so they double as the stable iteration order for AI turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset that moves `self` onto `other`.
    pub const fn delta_to(self, other: Position) -> Offset {
        Offset::new(other.x - self.x, other.y - self.y)
    }

    /// Chebyshev distance: max(|dx|, |dy|).
    pub fn chebyshev(self, other: Position) -> u32 {
        self.delta_to(other).chebyshev_len()
    }

    /// Euclidean distance between cell coordinates.
    pub fn euclidean(self, other: Position) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// True if `other` is one of the eight neighbouring cells.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.chebyshev(other) == 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Saturates at the `i32` limits, which lie outside every grid.
impl Add<Offset> for Position {
    type Output = Position;

    fn add(self, rhs: Offset) -> Self::Output {
        Position::new(self.x.saturating_add(rhs.dx), self.y.saturating_add(rhs.dy))
    }
}

/// Relative movement on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    /// The eight unit directions, row by row from the top-left.
    pub const NEIGHBORS: [Offset; 8] = [
        Offset::new(-1, -1),
        Offset::new(0, -1),
        Offset::new(1, -1),
        Offset::new(-1, 0),
        Offset::new(1, 0),
        Offset::new(-1, 1),
        Offset::new(0, 1),
        Offset::new(1, 1),
    ];

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Clamps each axis to {-1, 0, 1}.
    pub const fn signum(self) -> Self {
        Self::new(self.dx.signum(), self.dy.signum())
    }

    pub const fn reversed(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }

    pub fn chebyshev_len(self) -> u32 {
        self.dx.unsigned_abs().max(self.dy.unsigned_abs())
    }

    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.dx, self.dy)
    }
}

/// 24-bit display color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Self = Self(255, 255, 255);
    pub const BLACK: Self = Self(0, 0, 0);
    pub const RED: Self = Self(255, 0, 0);
    pub const YELLOW: Self = Self(255, 255, 0);
    pub const ORANGE: Self = Self(255, 165, 0);
    pub const GRAY: Self = Self(128, 128, 128);
    pub const PLAYER_CORPSE: Self = Self(191, 0, 0);
    pub const CORPSE: Self = Self(128, 0, 0);
}
