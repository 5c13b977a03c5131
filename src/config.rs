use core::fmt;
use core::time::Duration;

use crate::ship::ShipSpec;

/// Default board edge length.
pub const BOARD_SIZE: usize = 6;
/// Largest board the occupancy mask can hold (8×8 cells in a `u64`).
pub const MAX_BOARD_SIZE: usize = 8;
pub const NUM_SHIPS: usize = 3;
pub const SHIPS: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new("Sloop", 0),
    ShipSpec::new("Brigantine", 1),
    ShipSpec::new("Galleon", 2),
];

/// Total number of ship segments in one fleet.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 4;

/// Seconds a player gets to place the fleet before it is placed for them.
pub const PLACEMENT_SECONDS: u32 = 7;
/// Countdown granularity.
pub const TICKS_PER_SECOND: u32 = 5;
pub const TICK_INTERVAL_MS: u64 = 200;
/// Input stays locked this long after a shot while the animation plays.
pub const SHOT_ANIMATION_MS: u64 = 2800;

/// Runtime settings for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub placement_seconds: u32,
    pub tick_interval: Duration,
    pub shot_animation: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            placement_seconds: PLACEMENT_SECONDS,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            shot_animation: Duration::from_millis(SHOT_ANIMATION_MS),
        }
    }
}

impl GameConfig {
    /// Check that the settings describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < BOARD_SIZE || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if self.placement_seconds == 0 {
            return Err(ConfigError::PlacementSeconds);
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::TickInterval);
        }
        Ok(())
    }
}

/// Errors returned by [`GameConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    BoardSize(usize),
    PlacementSeconds,
    TickInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardSize(n) => write!(
                f,
                "Board size {} must be between {} and {}",
                n, BOARD_SIZE, MAX_BOARD_SIZE
            ),
            ConfigError::PlacementSeconds => write!(f, "Placement time must be at least one second"),
            ConfigError::TickInterval => write!(f, "Tick interval must be non-zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Look up a ship by its slot in placement order.
pub fn ship_at(index: usize) -> Option<ShipSpec> {
    SHIPS.get(index).copied()
}
