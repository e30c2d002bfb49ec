//! Picking the backlight device a run operates on.

use crate::device::{Backlight, DeviceHandle};
use crate::error::{BrightstepError, Result};

/// Choose one handle from `candidates`.
///
/// A single candidate is always chosen, whatever the hint says. Several
/// candidates need a hint matching one name exactly.
pub fn select(candidates: Vec<DeviceHandle>, hint: Option<&str>) -> Result<DeviceHandle> {
    let hint = hint.map(str::trim).filter(|h| !h.is_empty());
    let mut candidates = candidates;

    match candidates.len() {
        0 => Err(BrightstepError::NoDeviceFound),
        1 => Ok(candidates.remove(0)),
        _ => {
            let Some(hint) = hint else {
                return Err(BrightstepError::AmbiguousDevice {
                    available: names(&candidates),
                });
            };
            match candidates.iter().position(|c| c.name == hint) {
                Some(i) => Ok(candidates.swap_remove(i)),
                None => Err(BrightstepError::DeviceNotFound {
                    hint: hint.to_string(),
                    available: names(&candidates),
                }),
            }
        }
    }
}

/// Enumerate devices through `backlight` and [`select`] one.
pub fn resolve(backlight: &dyn Backlight, hint: Option<&str>) -> Result<DeviceHandle> {
    let candidates = backlight
        .list_candidates()
        .map_err(BrightstepError::Discovery)?;
    select(candidates, hint)
}

fn names(candidates: &[DeviceHandle]) -> Vec<String> {
    candidates.iter().map(|c| c.name.clone()).collect()
}
