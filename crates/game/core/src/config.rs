/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Width and height of the square playing field, in cells.
    pub field_size: u32,
    /// Playback speed a view should use when animating an in-flight move.
    pub animation_speed: AnimationSpeed,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FIELD_SIZE: u32 = 15;

    pub fn new() -> Self {
        Self {
            field_size: Self::DEFAULT_FIELD_SIZE,
            animation_speed: AnimationSpeed::default(),
        }
    }

    pub fn with_field_size(field_size: u32) -> Self {
        Self {
            field_size,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How fast a sliding atom travels across the field.
///
/// The engine never waits on animation; views read this to time the move
/// they are playing back before calling `complete_move`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Milliseconds spent traversing a single cell.
    pub const fn millis_per_cell(self) -> u32 {
        match self {
            Self::Slow => 300,
            Self::Normal => 120,
            Self::Fast => 60,
        }
    }

    /// Total playback time for a slide of `distance` cells.
    pub const fn duration_millis(self, distance: u32) -> u32 {
        self.millis_per_cell().saturating_mul(distance)
    }
}
