use bitflags::bitflags;

use super::Rgb;

bitflags! {
    /// Static properties of a terrain cell.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileFlags: u8 {
        /// Actors may stand on the cell.
        const WALKABLE    = 1 << 0;
        /// Rays of sight pass through the cell.
        const TRANSPARENT = 1 << 1;
    }
}

/// Named terrain presets used by maps and world generators.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TileKind {
    #[default]
    Floor,
    Wall,
    DoorClosed,
    DoorOpen,
    StairsDown,
    StairsUp,
    Grass,
    TallGrass,
    Tree,
    WaterShallow,
    WaterDeep,
    Rock,
    Sand,
    Snow,
    Campfire,
    Trap,
    Road,
}

/// Terrain descriptor stored once per grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub kind: TileKind,
    pub flags: TileFlags,
    pub glyph: char,
    /// Foreground while the cell is in view.
    pub fg_light: Rgb,
    /// Foreground while the cell is only remembered.
    pub fg_dark: Rgb,
    pub bg: Rgb,
}

impl Tile {
    const OPEN: TileFlags = TileFlags::WALKABLE.union(TileFlags::TRANSPARENT);
    const SOLID: TileFlags = TileFlags::empty();

    /// Builds the preset descriptor for a terrain kind.
    pub const fn from_kind(kind: TileKind) -> Self {
        let (flags, glyph, fg_light, fg_dark) = match kind {
            TileKind::Floor => (Self::OPEN, '.', Rgb(200, 180, 50), Rgb(50, 50, 150)),
            TileKind::Wall => (Self::SOLID, '#', Rgb(130, 110, 50), Rgb(0, 0, 100)),
            TileKind::DoorClosed => (Self::SOLID, '+', Rgb(139, 90, 43), Rgb(69, 45, 21)),
            TileKind::DoorOpen => (Self::OPEN, '-', Rgb(139, 90, 43), Rgb(69, 45, 21)),
            TileKind::StairsDown => (Self::OPEN, '>', Rgb(255, 255, 255), Rgb(100, 100, 100)),
            TileKind::StairsUp => (Self::OPEN, '<', Rgb(255, 255, 255), Rgb(100, 100, 100)),
            TileKind::Grass => (Self::OPEN, '"', Rgb(34, 139, 34), Rgb(0, 50, 0)),
            TileKind::TallGrass => (TileFlags::WALKABLE, '"', Rgb(0, 100, 0), Rgb(0, 30, 0)),
            TileKind::Tree => (Self::SOLID, 'T', Rgb(34, 100, 34), Rgb(0, 40, 0)),
            TileKind::WaterShallow => (Self::OPEN, '~', Rgb(30, 144, 255), Rgb(0, 50, 100)),
            TileKind::WaterDeep => (TileFlags::TRANSPARENT, '~', Rgb(0, 0, 139), Rgb(0, 0, 50)),
            TileKind::Rock => (Self::SOLID, '^', Rgb(128, 128, 128), Rgb(50, 50, 50)),
            TileKind::Sand => (Self::OPEN, '.', Rgb(238, 214, 175), Rgb(100, 90, 70)),
            TileKind::Snow => (Self::OPEN, '.', Rgb(255, 250, 250), Rgb(150, 150, 160)),
            TileKind::Campfire => (TileFlags::TRANSPARENT, '*', Rgb(255, 100, 0), Rgb(100, 30, 0)),
            TileKind::Trap => (Self::OPEN, '^', Rgb(255, 0, 0), Rgb(100, 0, 0)),
            TileKind::Road => (Self::OPEN, '.', Rgb(139, 119, 101), Rgb(69, 59, 50)),
        };
        Self {
            kind,
            flags,
            glyph,
            fg_light,
            fg_dark,
            bg: Rgb::BLACK,
        }
    }

    #[inline]
    pub const fn is_walkable(&self) -> bool {
        self.flags.contains(TileFlags::WALKABLE)
    }

    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.flags.contains(TileFlags::TRANSPARENT)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::from_kind(TileKind::Floor)
    }
}

impl From<TileKind> for Tile {
    fn from(kind: TileKind) -> Self {
        Self::from_kind(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn tall_grass_blocks_sight_but_not_movement() {
        let tile = Tile::from_kind(TileKind::TallGrass);
        assert!(tile.is_walkable());
        assert!(!tile.is_transparent());
    }

    #[test]
    fn deep_water_and_campfire_are_see_through_obstacles() {
        for kind in [TileKind::WaterDeep, TileKind::Campfire] {
            let tile = Tile::from(kind);
            assert!(!tile.is_walkable(), "{kind} should block movement");
            assert!(tile.is_transparent(), "{kind} should not block sight");
        }
    }

    #[test]
    fn kind_names_parse_case_insensitively() {
        assert_eq!(TileKind::from_str("door_closed").ok(), Some(TileKind::DoorClosed));
        assert_eq!(TileKind::from_str("WALL").ok(), Some(TileKind::Wall));
        for kind in TileKind::iter() {
            assert_eq!(TileKind::from_str(kind.as_ref()).ok(), Some(kind));
        }
    }
}
