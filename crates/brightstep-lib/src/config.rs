//! Application configuration — TOML-based, platform-aware paths.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::device::{Backlight, DEFAULT_HELPER, DEFAULT_SYSFS_ROOT, HelperBacklight, SysfsBacklight};
use crate::notify::Notice;

const DEFAULT_ICON: &str = "/usr/share/icons/Papirus/64x64/apps/display-brightness.svg";

/// How brightness is read and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Direct file access under the sysfs backlight class.
    #[default]
    Sysfs,
    /// Delegate to the `brightnessctl` helper.
    Brightnessctl,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Sysfs => write!(f, "sysfs"),
            BackendKind::Brightnessctl => write!(f, "brightnessctl"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Brightness backend. Default: sysfs.
    #[serde(default)]
    pub backend: BackendKind,

    /// sysfs mount point. Default: "/sys".
    #[serde(default = "default_sysfs_root")]
    pub sysfs_root: String,

    /// Helper program for the brightnessctl backend.
    #[serde(default = "default_helper_program")]
    pub helper_program: String,

    /// Device to use when several exist and none is named on the command line.
    /// Empty = none.
    #[serde(default)]
    pub default_device: String,

    /// Application name shown in the notification.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Notification icon (path or icon name).
    #[serde(default = "default_icon")]
    pub icon: String,

    /// Notification auto-dismiss time in milliseconds.
    #[serde(default = "default_expire_timeout_ms")]
    pub expire_timeout_ms: u32,

    /// Show a notification when run without a direction.
    #[serde(default = "default_true")]
    pub notify_on_query: bool,
}

fn default_sysfs_root() -> String {
    DEFAULT_SYSFS_ROOT.into()
}
fn default_helper_program() -> String {
    DEFAULT_HELPER.into()
}
fn default_app_name() -> String {
    "brightstep".into()
}
fn default_icon() -> String {
    DEFAULT_ICON.into()
}
fn default_expire_timeout_ms() -> u32 {
    2000
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend: BackendKind::default(),
            sysfs_root: default_sysfs_root(),
            helper_program: default_helper_program(),
            default_device: String::new(),
            app_name: default_app_name(),
            icon: default_icon(),
            expire_timeout_ms: default_expire_timeout_ms(),
            notify_on_query: true,
        }
    }
}

/// Validation errors that [`Config::validate`] can return.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `sysfs_root` must be an absolute path.
    RelativeSysfsRoot(String),
    /// `helper_program` is empty while the brightnessctl backend is selected.
    EmptyHelperProgram,
    /// `app_name` is empty or whitespace-only.
    EmptyAppName,
    /// `expire_timeout_ms` is zero (the notification would never go away).
    ZeroExpireTimeout,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::RelativeSysfsRoot(p) => {
                write!(f, "sysfs_root must be an absolute path, got \"{p}\"")
            }
            ValidationError::EmptyHelperProgram => {
                write!(f, "helper_program cannot be empty with the brightnessctl backend")
            }
            ValidationError::EmptyAppName => write!(f, "app_name cannot be empty"),
            ValidationError::ZeroExpireTimeout => {
                write!(f, "expire_timeout_ms must be greater than zero")
            }
        }
    }
}

impl Config {
    /// Platform-specific config directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("brightstep"))
    }

    /// Full path to config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    /// Load config from disk, or return defaults if not found.
    pub fn load() -> Self {
        let (config, warnings) = Self::load_with_warnings();
        for w in &warnings {
            log::warn!("{w}");
        }
        config
    }

    /// Load config from an arbitrary path, returning the config and any parse warnings.
    ///
    /// Returns `(defaults, [])` if the file doesn't exist.
    /// Returns `(defaults, [warning])` if the file exists but can't be parsed.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => (config, vec![]),
                Err(e) => {
                    let warning = format!(
                        "config parse error ({}), using defaults: {e}",
                        path.display()
                    );
                    (Self::default(), vec![warning])
                }
            },
            Err(_) => (Self::default(), vec![]),
        }
    }

    /// Load config from the default path, returning the config and any parse warnings.
    pub fn load_with_warnings() -> (Self, Vec<String>) {
        let Some(path) = Self::path() else {
            return (Self::default(), vec![]);
        };
        Self::load_from(&path)
    }

    /// Validate the entire config, collecting all errors.
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !Path::new(&self.sysfs_root).is_absolute() {
            errors.push(ValidationError::RelativeSysfsRoot(self.sysfs_root.clone()));
        }
        if self.backend == BackendKind::Brightnessctl && self.helper_program.trim().is_empty() {
            errors.push(ValidationError::EmptyHelperProgram);
        }
        if self.app_name.trim().is_empty() {
            errors.push(ValidationError::EmptyAppName);
        }
        if self.expire_timeout_ms == 0 {
            errors.push(ValidationError::ZeroExpireTimeout);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// The configured device name, if any.
    pub fn default_device(&self) -> Option<&str> {
        let name = self.default_device.trim();
        (!name.is_empty()).then_some(name)
    }

    /// Build the selected backend.
    pub fn backlight(&self) -> Box<dyn Backlight> {
        match self.backend {
            BackendKind::Sysfs => Box::new(SysfsBacklight::new(&self.sysfs_root)),
            BackendKind::Brightnessctl => Box::new(HelperBacklight::new(self.helper_program.trim())),
        }
    }

    /// Notification contents for a given percentage.
    pub fn notice(&self, percent: u32) -> Notice {
        Notice {
            percent,
            app_name: self.app_name.clone(),
            icon: self.icon.clone(),
            expire_timeout_ms: self.expire_timeout_ms,
        }
    }
}
