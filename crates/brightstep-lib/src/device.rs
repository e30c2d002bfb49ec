//! Backlight control surfaces — discovery, reads and writes.
//!
//! [`Backlight`] is the seam between run logic and the host. Two backends
//! exist: [`SysfsBacklight`] talks to the kernel's backlight class directly,
//! [`HelperBacklight`] delegates to `brightnessctl`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;

// ── Error type ──

/// Backend errors.
///
/// String payloads follow the convention **"context: details"** where
/// *context* is the file or command involved.
#[derive(Debug)]
pub enum DeviceError {
    EnumerateFailed(String),
    ReadFailed(String),
    /// Value content was not a decimal integer.
    Parse(String),
    WriteFailed(String),
    /// The helper program could not be spawned or exited non-zero.
    Helper(String),
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::EnumerateFailed(e) => write!(f, "Device enumeration failed: {e}"),
            DeviceError::ReadFailed(e) => write!(f, "Read failed: {e}"),
            DeviceError::Parse(e) => write!(f, "Not a number: {e}"),
            DeviceError::WriteFailed(e) => write!(f, "Write failed: {e}"),
            DeviceError::Helper(e) => write!(f, "Helper failed: {e}"),
        }
    }
}

impl std::error::Error for DeviceError {}

pub type Result<T> = std::result::Result<T, DeviceError>;

// ── Handles ──

/// One brightness control surface on the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceHandle {
    /// Short name used to pick this device when several exist.
    pub name: String,
    /// Backend-specific location: a sysfs directory, or the helper's device name.
    pub location: String,
}

/// Which of the two values a read targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Current,
    Max,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Current => write!(f, "current brightness"),
            Field::Max => write!(f, "max brightness"),
        }
    }
}

// ── Trait ──

pub trait Backlight {
    /// Every brightness control surface visible right now, sorted by name.
    fn list_candidates(&self) -> Result<Vec<DeviceHandle>>;
    fn read_value(&self, handle: &DeviceHandle, field: Field) -> Result<u32>;
    fn write_value(&self, handle: &DeviceHandle, value: u32) -> Result<()>;
}

/// Parse a decimal brightness value, ignoring surrounding whitespace.
pub fn parse_value(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .map_err(|e| DeviceError::Parse(format!("{trimmed:?}: {e}")))
}

// ── sysfs backend ──

pub const DEFAULT_SYSFS_ROOT: &str = "/sys";

const CLASS_DIR: &str = "class/backlight";
const DEVICES_DIR: &str = "devices";
const BACKLIGHT_DIR_NAME: &str = "backlight";

const FILE_MAX_BRIGHTNESS: &str = "max_brightness";

/// Current brightness. `actual_brightness` is not used: amdgpu reports it on
/// a different scale than `max_brightness`.
const FILE_BRIGHTNESS: &str = "brightness";

/// Depth limit for the walk under `<root>/devices`.
const MAX_WALK_DEPTH: usize = 12;

/// Reads and writes `<root>/class/backlight/<name>/{brightness,max_brightness}`.
#[derive(Debug, Clone)]
pub struct SysfsBacklight {
    root: PathBuf,
}

impl SysfsBacklight {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        SysfsBacklight { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn class_entries(&self) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(self.root.join(CLASS_DIR)) else {
            return Vec::new();
        };
        entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.join(FILE_MAX_BRIGHTNESS).is_file())
            .collect()
    }

    fn device_tree_entries(&self) -> Vec<PathBuf> {
        let mut found = Vec::new();
        walk_backlight_dirs(&self.root.join(DEVICES_DIR), 0, &mut found);
        found
    }

    fn value_path(handle: &DeviceHandle, field: Field) -> PathBuf {
        let file = match field {
            Field::Current => FILE_BRIGHTNESS,
            Field::Max => FILE_MAX_BRIGHTNESS,
        };
        Path::new(&handle.location).join(file)
    }
}

impl Default for SysfsBacklight {
    fn default() -> Self {
        Self::new(DEFAULT_SYSFS_ROOT)
    }
}

/// Collect directories that live directly inside a `backlight` directory and
/// expose `max_brightness`. Symlinks are not followed (sysfs is full of cycles).
fn walk_backlight_dirs(dir: &Path, depth: usize, found: &mut Vec<PathBuf>) {
    if depth > MAX_WALK_DEPTH {
        return;
    }
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    let in_backlight_dir = dir
        .file_name()
        .is_some_and(|n| n == BACKLIGHT_DIR_NAME);
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_dir() {
            continue;
        }
        let path = entry.path();
        if in_backlight_dir && path.join(FILE_MAX_BRIGHTNESS).is_file() {
            found.push(path);
        } else {
            walk_backlight_dirs(&path, depth + 1, found);
        }
    }
}

/// Turn discovered directories into named handles.
///
/// Paths that resolve to the same canonical directory collapse into one
/// handle. When distinct devices share a directory name, each of them is
/// named `<owner>:<name>`, where `<owner>` is the directory holding its
/// `backlight` directory. Names that still clash take further ancestors
/// (`<grandowner>:<owner>:<name>`, ...), and a device with no ancestors
/// left is named by its full path. The result is sorted by name.
pub fn build_candidates(paths: impl IntoIterator<Item = PathBuf>) -> Vec<DeviceHandle> {
    let unique: Vec<PathBuf> = paths
        .into_iter()
        .map(|p| std::fs::canonicalize(&p).unwrap_or(p))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut depths = vec![0usize; unique.len()];
    let mut names: Vec<String> = unique.iter().map(|p| base_name(p)).collect();
    loop {
        let mut name_counts: BTreeMap<String, usize> = BTreeMap::new();
        for name in &names {
            *name_counts.entry(name.clone()).or_default() += 1;
        }
        let clashing: Vec<usize> = (0..names.len())
            .filter(|&i| name_counts.get(&names[i]).copied().unwrap_or(0) > 1)
            .collect();
        if clashing.is_empty() {
            break;
        }
        for i in clashing {
            depths[i] += 1;
            names[i] = qualified_name(&unique[i], depths[i])
                .unwrap_or_else(|| unique[i].display().to_string());
        }
    }

    let mut handles: Vec<DeviceHandle> = unique
        .iter()
        .zip(names)
        .map(|(path, name)| DeviceHandle {
            name,
            location: path.display().to_string(),
        })
        .collect();
    handles.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.location.cmp(&b.location)));
    handles
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `name` prefixed with its `depth` nearest owners, skipping the
/// `backlight` directory itself. `None` once the path runs out of ancestors.
fn qualified_name(path: &Path, depth: usize) -> Option<String> {
    let owners: Vec<String> = path.ancestors().skip(2).take(depth).map(base_name).collect();
    if owners.len() < depth || owners.iter().any(String::is_empty) {
        return None;
    }
    let mut parts: Vec<String> = owners.into_iter().rev().collect();
    parts.push(base_name(path));
    Some(parts.join(":"))
}

impl Backlight for SysfsBacklight {
    fn list_candidates(&self) -> Result<Vec<DeviceHandle>> {
        let mut paths = self.class_entries();
        paths.extend(self.device_tree_entries());
        Ok(build_candidates(paths))
    }

    fn read_value(&self, handle: &DeviceHandle, field: Field) -> Result<u32> {
        let path = Self::value_path(handle, field);
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| DeviceError::ReadFailed(format!("{}: {e}", path.display())))?;
        parse_value(&raw)
    }

    fn write_value(&self, handle: &DeviceHandle, value: u32) -> Result<()> {
        let path = Self::value_path(handle, Field::Current);
        log::debug!("writing {value} to {}", path.display());
        std::fs::write(&path, value.to_string())
            .map_err(|e| DeviceError::WriteFailed(format!("{}: {e}", path.display())))
    }
}

// ── brightnessctl backend ──

pub const DEFAULT_HELPER: &str = "brightnessctl";

/// Delegates get/max/set to an external `brightnessctl`-compatible program.
#[derive(Debug, Clone)]
pub struct HelperBacklight {
    program: String,
}

impl HelperBacklight {
    pub fn new(program: impl Into<String>) -> Self {
        HelperBacklight {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        log::debug!("running {} {}", self.program, args.join(" "));
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| DeviceError::Helper(format!("{}: {e}", self.program)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DeviceError::Helper(format!(
                "{} {}: exited with {}: {}",
                self.program,
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        log::debug!("helper output: {:?}", stdout.trim_end());
        Ok(stdout)
    }
}

impl Default for HelperBacklight {
    fn default() -> Self {
        Self::new(DEFAULT_HELPER)
    }
}

/// Parse `brightnessctl -l -m` output (`name,class,current,percent,max` per line),
/// keeping only backlight-class devices.
pub fn parse_helper_listing(output: &str) -> Vec<DeviceHandle> {
    let names: BTreeSet<&str> = output
        .lines()
        .filter_map(|line| {
            let mut cols = line.trim().split(',');
            let name = cols.next()?.trim();
            let class = cols.next()?.trim();
            (class == BACKLIGHT_DIR_NAME && !name.is_empty()).then_some(name)
        })
        .collect();
    names
        .into_iter()
        .map(|name| DeviceHandle {
            name: name.to_string(),
            location: name.to_string(),
        })
        .collect()
}

impl Backlight for HelperBacklight {
    fn list_candidates(&self) -> Result<Vec<DeviceHandle>> {
        let out = self
            .run(&["-l", "-m", "-c", BACKLIGHT_DIR_NAME])
            .map_err(|e| DeviceError::EnumerateFailed(e.to_string()))?;
        Ok(parse_helper_listing(&out))
    }

    fn read_value(&self, handle: &DeviceHandle, field: Field) -> Result<u32> {
        let op = match field {
            Field::Current => "g",
            Field::Max => "m",
        };
        parse_value(&self.run(&["-d", &handle.location, op])?)
    }

    fn write_value(&self, handle: &DeviceHandle, value: u32) -> Result<()> {
        self.run(&["-d", &handle.location, "s", &value.to_string()])
            .map(|_| ())
    }
}

// ── Mock ──

pub mod mock {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    /// In-memory backend for tests. Values are keyed by device name;
    /// every trait call bumps `calls`.
    pub struct MockBacklight {
        pub devices: RefCell<Vec<DeviceHandle>>,
        /// name → (current, max)
        pub values: RefCell<HashMap<String, (u32, u32)>>,
        /// Recorded writes: (name, value).
        pub writes: RefCell<Vec<(String, u32)>>,
        pub calls: Cell<usize>,
        /// If set, reads of this field fail with a parse error.
        pub garbage_field: Cell<Option<Field>>,
        /// If true, `list_candidates` fails.
        pub fail_list: Cell<bool>,
        /// If true, `write_value` fails.
        pub fail_write: Cell<bool>,
    }

    impl Default for MockBacklight {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockBacklight {
        pub fn new() -> Self {
            MockBacklight {
                devices: RefCell::new(Vec::new()),
                values: RefCell::new(HashMap::new()),
                writes: RefCell::new(Vec::new()),
                calls: Cell::new(0),
                garbage_field: Cell::new(None),
                fail_list: Cell::new(false),
                fail_write: Cell::new(false),
            }
        }

        pub fn with_device(self, name: &str, current: u32, max: u32) -> Self {
            self.devices.borrow_mut().push(DeviceHandle {
                name: name.into(),
                location: format!("mock://{name}"),
            });
            self.values
                .borrow_mut()
                .insert(name.into(), (current, max));
            self
        }

        pub fn current(&self, name: &str) -> Option<u32> {
            self.values.borrow().get(name).map(|&(current, _)| current)
        }

        fn bump(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    impl Backlight for MockBacklight {
        fn list_candidates(&self) -> Result<Vec<DeviceHandle>> {
            self.bump();
            if self.fail_list.get() {
                return Err(DeviceError::EnumerateFailed(
                    "mock: list failure injected".into(),
                ));
            }
            let mut devices = self.devices.borrow().clone();
            devices.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(devices)
        }

        fn read_value(&self, handle: &DeviceHandle, field: Field) -> Result<u32> {
            self.bump();
            if self.garbage_field.get() == Some(field) {
                return parse_value("garbage");
            }
            let values = self.values.borrow();
            let &(current, max) = values
                .get(&handle.name)
                .ok_or_else(|| DeviceError::ReadFailed(format!("{}: gone", handle.location)))?;
            Ok(match field {
                Field::Current => current,
                Field::Max => max,
            })
        }

        fn write_value(&self, handle: &DeviceHandle, value: u32) -> Result<()> {
            self.bump();
            if self.fail_write.get() {
                return Err(DeviceError::WriteFailed(format!(
                    "{}: permission denied",
                    handle.location
                )));
            }
            self.writes
                .borrow_mut()
                .push((handle.name.clone(), value));
            if let Some(entry) = self.values.borrow_mut().get_mut(&handle.name) {
                entry.0 = value;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Create `<root>/devices/<owner>/backlight/<name>` with value files.
    fn fake_device(root: &Path, owner: &str, name: &str, current: u32, max: u32) -> PathBuf {
        let dir = root
            .join("devices")
            .join(owner)
            .join("backlight")
            .join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("brightness"), format!("{current}\n")).unwrap();
        fs::write(dir.join("max_brightness"), format!("{max}\n")).unwrap();
        dir
    }

    #[cfg(unix)]
    fn link_into_class(root: &Path, target: &Path, name: &str) {
        let class = root.join("class/backlight");
        fs::create_dir_all(&class).unwrap();
        std::os::unix::fs::symlink(target, class.join(name)).unwrap();
    }

    #[test]
    fn parse_value_trims_newline() {
        assert_eq!(parse_value("255\n").unwrap(), 255);
        assert_eq!(parse_value("  12  ").unwrap(), 12);
    }

    #[test]
    fn parse_value_rejects_garbage() {
        let err = parse_value("abc").unwrap_err();
        assert!(matches!(err, DeviceError::Parse(_)));
        assert!(err.to_string().contains("abc"), "got: {err}");
    }

    #[test]
    fn parse_value_rejects_negative() {
        assert!(parse_value("-1").is_err());
    }

    #[test]
    fn field_display() {
        assert_eq!(Field::Current.to_string(), "current brightness");
        assert_eq!(Field::Max.to_string(), "max brightness");
    }

    #[test]
    fn sysfs_empty_root_has_no_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let backlight = SysfsBacklight::new(dir.path());
        assert!(backlight.list_candidates().unwrap().is_empty());
    }

    #[test]
    fn sysfs_missing_root_has_no_candidates() {
        let backlight = SysfsBacklight::new("/nonexistent/sysfs/root");
        assert!(backlight.list_candidates().unwrap().is_empty());
    }

    #[test]
    fn sysfs_finds_device_in_tree() {
        let dir = tempfile::tempdir().unwrap();
        fake_device(dir.path(), "pci0000:00/card0-eDP-1", "amdgpu_bl0", 64, 255);
        let backlight = SysfsBacklight::new(dir.path());
        let candidates = backlight.list_candidates().unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "amdgpu_bl0");
    }

    #[test]
    fn sysfs_ignores_dirs_without_max_brightness() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("devices/card0/backlight/half_device")).unwrap();
        fs::create_dir_all(dir.path().join("devices/card0/other/thing")).unwrap();
        let backlight = SysfsBacklight::new(dir.path());
        assert!(backlight.list_candidates().unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn sysfs_dedups_class_symlink_and_tree_entry() {
        let dir = tempfile::tempdir().unwrap();
        let target = fake_device(dir.path(), "card0-eDP-1", "intel_backlight", 10, 100);
        link_into_class(dir.path(), &target, "intel_backlight");

        let backlight = SysfsBacklight::new(dir.path());
        let candidates = backlight.list_candidates().unwrap();
        assert_eq!(candidates.len(), 1, "got: {candidates:?}");
        assert_eq!(candidates[0].name, "intel_backlight");
    }

    #[test]
    fn sysfs_qualifies_colliding_names() {
        let dir = tempfile::tempdir().unwrap();
        fake_device(dir.path(), "card0-eDP-1", "acpi_video0", 1, 10);
        fake_device(dir.path(), "card1-DP-2", "acpi_video0", 2, 10);

        let backlight = SysfsBacklight::new(dir.path());
        let names: Vec<String> = backlight
            .list_candidates()
            .unwrap()
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(
            names,
            vec!["card0-eDP-1:acpi_video0", "card1-DP-2:acpi_video0"]
        );
    }

    #[test]
    fn sysfs_qualifies_further_when_owners_clash() {
        let dir = tempfile::tempdir().unwrap();
        fake_device(dir.path(), "pci0/card0", "bl", 1, 10);
        fake_device(dir.path(), "pci1/card0", "bl", 2, 10);
        fake_device(dir.path(), "platform", "acpi_video0", 3, 10);

        let backlight = SysfsBacklight::new(dir.path());
        let names: Vec<String> = backlight
            .list_candidates()
            .unwrap()
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(names, vec!["acpi_video0", "pci0:card0:bl", "pci1:card0:bl"]);
    }

    #[test]
    fn same_owner_and_name_falls_back_to_full_path() {
        let a = PathBuf::from("/nonexistent/x/card0/backlight/bl");
        let b = PathBuf::from("/nonexistent/x/card0/backlight-old/bl");
        let handles = build_candidates([a.clone(), b.clone()]);
        let names: Vec<&str> = handles.iter().map(|h| h.name.as_str()).collect();
        // '-' sorts before '/'
        assert_eq!(names, vec![b.to_str().unwrap(), a.to_str().unwrap()]);
    }

    #[test]
    fn sysfs_names_are_sorted_and_stable() {
        let dir = tempfile::tempdir().unwrap();
        fake_device(dir.path(), "b", "zeta", 1, 10);
        fake_device(dir.path(), "a", "alpha", 1, 10);
        let backlight = SysfsBacklight::new(dir.path());

        let first = backlight.list_candidates().unwrap();
        let second = backlight.list_candidates().unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].name, "alpha");
        assert_eq!(first[1].name, "zeta");
    }

    #[test]
    fn sysfs_reads_current_and_max() {
        let dir = tempfile::tempdir().unwrap();
        fake_device(dir.path(), "card0", "amdgpu_bl0", 64, 255);
        let backlight = SysfsBacklight::new(dir.path());
        let handle = backlight.list_candidates().unwrap().remove(0);

        assert_eq!(backlight.read_value(&handle, Field::Current).unwrap(), 64);
        assert_eq!(backlight.read_value(&handle, Field::Max).unwrap(), 255);
    }

    #[test]
    fn sysfs_read_missing_file_is_read_error() {
        let handle = DeviceHandle {
            name: "ghost".into(),
            location: "/nonexistent/ghost".into(),
        };
        let err = SysfsBacklight::default()
            .read_value(&handle, Field::Current)
            .unwrap_err();
        assert!(matches!(err, DeviceError::ReadFailed(_)));
        assert!(err.to_string().contains("/nonexistent/ghost/brightness"));
    }

    #[test]
    fn sysfs_read_garbage_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_device(dir.path(), "card0", "bl", 1, 10);
        fs::write(path.join("max_brightness"), "lots").unwrap();
        let backlight = SysfsBacklight::new(dir.path());
        let handle = backlight.list_candidates().unwrap().remove(0);

        let err = backlight.read_value(&handle, Field::Max).unwrap_err();
        assert!(matches!(err, DeviceError::Parse(_)));
    }

    #[test]
    fn sysfs_write_updates_brightness_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_device(dir.path(), "card0", "bl", 1, 10);
        let backlight = SysfsBacklight::new(dir.path());
        let handle = backlight.list_candidates().unwrap().remove(0);

        backlight.write_value(&handle, 7).unwrap();
        assert_eq!(fs::read_to_string(path.join("brightness")).unwrap(), "7");
        assert_eq!(backlight.read_value(&handle, Field::Current).unwrap(), 7);
    }

    #[test]
    fn sysfs_write_to_missing_device_is_write_error() {
        let handle = DeviceHandle {
            name: "ghost".into(),
            location: "/nonexistent/ghost".into(),
        };
        let err = SysfsBacklight::default().write_value(&handle, 1).unwrap_err();
        assert!(matches!(err, DeviceError::WriteFailed(_)));
    }

    #[test]
    fn helper_listing_keeps_backlight_class_only() {
        let out = "\
intel_backlight,backlight,512,53%,960
input2::capslock,leds,0,0%,1
acpi_video0,backlight,5,50%,10
";
        let handles = parse_helper_listing(out);
        let names: Vec<&str> = handles.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["acpi_video0", "intel_backlight"]);
        assert_eq!(handles[1].location, "intel_backlight");
    }

    #[test]
    fn helper_listing_tolerates_junk_lines() {
        let handles = parse_helper_listing("\nnot csv\n,backlight,1,1%,1\n");
        assert!(handles.is_empty());
    }

    #[test]
    fn helper_listing_dedups_names() {
        let out = "bl,backlight,1,1%,10\nbl,backlight,1,1%,10\n";
        assert_eq!(parse_helper_listing(out).len(), 1);
    }

    #[test]
    fn helper_missing_program_is_helper_error() {
        let helper = HelperBacklight::new("/nonexistent/brightnessctl");
        let handle = DeviceHandle {
            name: "bl".into(),
            location: "bl".into(),
        };
        let err = helper.read_value(&handle, Field::Current).unwrap_err();
        assert!(matches!(err, DeviceError::Helper(_)));
        assert!(err.to_string().contains("/nonexistent/brightnessctl"));
    }

    #[test]
    fn helper_missing_program_list_is_enumerate_error() {
        let helper = HelperBacklight::new("/nonexistent/brightnessctl");
        assert!(matches!(
            helper.list_candidates().unwrap_err(),
            DeviceError::EnumerateFailed(_)
        ));
    }

    #[test]
    fn device_handle_serializes_name_and_location() {
        let handle = DeviceHandle {
            name: "amdgpu_bl0".into(),
            location: "/sys/devices/x/backlight/amdgpu_bl0".into(),
        };
        let json = serde_json::to_value(&handle).unwrap();
        assert_eq!(json["name"], "amdgpu_bl0");
        assert_eq!(json["location"], "/sys/devices/x/backlight/amdgpu_bl0");
    }

    #[test]
    fn mock_records_writes_and_counts_calls() {
        let mock = mock::MockBacklight::new().with_device("bl", 5, 10);
        let handle = mock.list_candidates().unwrap().remove(0);
        mock.write_value(&handle, 6).unwrap();
        assert_eq!(mock.current("bl"), Some(6));
        assert_eq!(mock.writes.borrow().as_slice(), &[("bl".to_string(), 6)]);
        assert_eq!(mock.calls.get(), 2);
    }
}
