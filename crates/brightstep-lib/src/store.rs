//! Brightness state of one device: read, compute, apply.

use serde::Serialize;

use crate::device::{Backlight, DeviceError, DeviceHandle, Field};
use crate::error::{BrightstepError, Result};
use crate::step::{self, Direction};

/// One run's view of a device. Built fresh from a live read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrightnessState {
    pub current: u32,
    pub max: u32,
    /// Candidate new value; always within `[0, max]`.
    pub set: u32,
    pub device: DeviceHandle,
}

impl BrightnessState {
    /// Recompute `set` for the given direction.
    pub fn step(&mut self, direction: Direction) {
        self.set = step::next_value(self.current, self.max, direction);
    }

    /// `set` as a whole percentage of `max`.
    pub fn percent(&self) -> u32 {
        step::percent(self.set, self.max)
    }
}

/// Read max and current brightness. Errors name the field that failed.
pub fn read(backlight: &dyn Backlight, device: DeviceHandle) -> Result<BrightnessState> {
    let max = read_field(backlight, &device, Field::Max)?;
    if max == 0 {
        return Err(BrightstepError::Read {
            field: Field::Max,
            source: DeviceError::Parse(format!("{}: max brightness is 0", device.location)),
        });
    }
    let current = read_field(backlight, &device, Field::Current)?;
    if current > max {
        log::warn!(
            "{} reports brightness {current} above max {max}, clamping",
            device.name
        );
    }
    Ok(BrightnessState {
        current,
        max,
        set: current.min(max),
        device,
    })
}

fn read_field(backlight: &dyn Backlight, device: &DeviceHandle, field: Field) -> Result<u32> {
    backlight
        .read_value(device, field)
        .map_err(|source| BrightstepError::Read { field, source })
}

/// Write `state.set` to the device. Not transactional: on error the device
/// may hold either value.
pub fn apply(backlight: &dyn Backlight, state: &BrightnessState) -> Result<()> {
    if state.set > state.max {
        return Err(BrightstepError::Write(DeviceError::WriteFailed(format!(
            "{}: refusing to write {} above max {}",
            state.device.location, state.set, state.max
        ))));
    }
    backlight
        .write_value(&state.device, state.set)
        .map_err(BrightstepError::Write)
}
