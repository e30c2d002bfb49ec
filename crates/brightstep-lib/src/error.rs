//! Unified error type for the brightstep-lib crate.
//!
//! [`BrightstepError`] covers every way a run can end early. Each kind maps to
//! a process exit code via [`BrightstepError::exit_code`], so calling scripts
//! can tell a resolution failure from a write failure from a notification one.

use std::fmt;

use crate::args::ArgsError;
use crate::device::{DeviceError, Field};
use crate::notify::NotifyError;

/// Exit code for argument, config and other ambient failures.
pub const EXIT_USAGE: i32 = 1;
pub const EXIT_READ: i32 = 2;
pub const EXIT_NOTIFY: i32 = 3;
pub const EXIT_PERSIST: i32 = 4;
pub const EXIT_WRITE: i32 = 5;
pub const EXIT_RESOLVE: i32 = 6;

/// Unified error type for brightstep-lib operations.
#[derive(Debug)]
pub enum BrightstepError {
    /// No backlight control surface exists on this host.
    NoDeviceFound,
    /// Several devices exist and no name was given.
    AmbiguousDevice { available: Vec<String> },
    /// The given name matches none of the devices.
    DeviceNotFound { hint: String, available: Vec<String> },
    /// Listing candidates failed.
    Discovery(DeviceError),
    /// Reading current or max brightness failed. Nothing was changed.
    Read { field: Field, source: DeviceError },
    /// Writing the new value failed. Device state is unknown.
    Write(DeviceError),
    /// The notification could not be sent. Brightness was already applied.
    Notify(NotifyError),
    /// The notification id could not be stored. Brightness was already applied.
    Persist(std::io::Error),
    /// Contradictory command-line tokens.
    ArgumentConflict(ArgsError),
    /// Configuration file or validation error.
    Config(String),
    /// Standard I/O error outside the run stages.
    Io(std::io::Error),
}

impl BrightstepError {
    /// Process exit code for this failure. Success is 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            BrightstepError::NoDeviceFound
            | BrightstepError::AmbiguousDevice { .. }
            | BrightstepError::DeviceNotFound { .. }
            | BrightstepError::Discovery(_) => EXIT_RESOLVE,
            BrightstepError::Read { .. } => EXIT_READ,
            BrightstepError::Write(_) => EXIT_WRITE,
            BrightstepError::Notify(_) => EXIT_NOTIFY,
            BrightstepError::Persist(_) => EXIT_PERSIST,
            BrightstepError::ArgumentConflict(_)
            | BrightstepError::Config(_)
            | BrightstepError::Io(_) => EXIT_USAGE,
        }
    }

    /// True when brightness was already applied and only bookkeeping failed.
    pub fn is_cosmetic(&self) -> bool {
        matches!(
            self,
            BrightstepError::Notify(_) | BrightstepError::Persist(_)
        )
    }
}

impl fmt::Display for BrightstepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrightstepError::NoDeviceFound => write!(f, "no backlight device found"),
            BrightstepError::AmbiguousDevice { available } => write!(
                f,
                "multiple backlight devices found, pass one of: {}",
                available.join(", ")
            ),
            BrightstepError::DeviceNotFound { hint, available } => write!(
                f,
                "no backlight device named '{hint}' (available: {})",
                available.join(", ")
            ),
            BrightstepError::Discovery(e) => write!(f, "can't list backlight devices: {e}"),
            BrightstepError::Read { field, source } => write!(f, "can't read {field}: {source}"),
            BrightstepError::Write(e) => {
                write!(f, "can't set brightness (device state unknown): {e}")
            }
            BrightstepError::Notify(e) => write!(f, "{e}"),
            BrightstepError::Persist(e) => write!(f, "failed to save notification id: {e}"),
            BrightstepError::ArgumentConflict(e) => write!(f, "{e}"),
            BrightstepError::Config(e) => write!(f, "Config error: {e}"),
            BrightstepError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for BrightstepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BrightstepError::Discovery(e) | BrightstepError::Write(e) => Some(e),
            BrightstepError::Read { source, .. } => Some(source),
            BrightstepError::Notify(e) => Some(e),
            BrightstepError::Persist(e) | BrightstepError::Io(e) => Some(e),
            BrightstepError::ArgumentConflict(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArgsError> for BrightstepError {
    fn from(e: ArgsError) -> Self {
        BrightstepError::ArgumentConflict(e)
    }
}

impl From<NotifyError> for BrightstepError {
    fn from(e: NotifyError) -> Self {
        BrightstepError::Notify(e)
    }
}

impl From<std::io::Error> for BrightstepError {
    fn from(e: std::io::Error) -> Self {
        BrightstepError::Io(e)
    }
}

/// Crate-level Result alias using [`BrightstepError`].
pub type Result<T> = std::result::Result<T, BrightstepError>;
