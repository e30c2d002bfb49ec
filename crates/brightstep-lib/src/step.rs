//! Square-root brightness stepping.
//!
//! The step grows with the square root of the current value: coarse jumps at
//! high brightness, single units near the bottom.

use crate::args::ArgsError;

/// Requested adjustment sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Increase,
    Decrease,
    /// No change requested.
    #[default]
    None,
}

impl Direction {
    /// Build a direction from the two request flags. Both set is a conflict.
    pub fn from_flags(increase: bool, decrease: bool) -> Result<Self, ArgsError> {
        match (increase, decrease) {
            (true, true) => Err(ArgsError::ConflictingDirections),
            (true, false) => Ok(Direction::Increase),
            (false, true) => Ok(Direction::Decrease),
            (false, false) => Ok(Direction::None),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Increase => write!(f, "increase"),
            Direction::Decrease => write!(f, "decrease"),
            Direction::None => write!(f, "none"),
        }
    }
}

/// Unclamped step for a given brightness: `max(sqrt(current), 1)`.
pub fn step_size(current: u32) -> f64 {
    f64::from(current).sqrt().max(1.0)
}

/// Next brightness value, always within `[0, max]`.
///
/// The result is truncated toward zero. A `current` above `max` is clamped
/// rather than trusted.
pub fn next_value(current: u32, max: u32, direction: Direction) -> u32 {
    let current_f = f64::from(current);
    let max_f = f64::from(max);
    let step = step_size(current);

    let next = match direction {
        Direction::Increase => (current_f + step).max(0.0).min(max_f),
        Direction::Decrease => (current_f - step).max(0.0).min(max_f),
        Direction::None => current_f.min(max_f),
    };
    // `as` truncates toward zero; `next` is already within u32 range.
    next as u32
}

/// `value` as a whole percentage of `max` (floor). Zero when `max` is zero.
pub fn percent(value: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (u64::from(value) * 100 / u64::from(max)) as u32
}
