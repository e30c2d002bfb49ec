//! Desktop notifications that replace their previous instance.

use std::fmt;

use notify_rust::{Hint, Notification, Timeout};

/// Hint key carrying the percentage, read by notification daemons that draw
/// a progress bar (dunst, mako, swaync).
const VALUE_HINT: &str = "value";

#[derive(Debug)]
pub struct NotifyError(pub String);

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to send notification: {}", self.0)
    }
}

impl std::error::Error for NotifyError {}

/// What one brightness notification shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub percent: u32,
    pub app_name: String,
    pub icon: String,
    pub expire_timeout_ms: u32,
}

impl Notice {
    /// Summary and body text.
    pub fn text(&self) -> String {
        format!("Brightness set to: {}%", self.percent)
    }
}

pub trait Notifier {
    /// Show `notice`, replacing notification `replace_id` (0 = create new).
    /// Returns the id the notification server assigned.
    fn send(&self, notice: &Notice, replace_id: u32) -> Result<u32, NotifyError>;
}

/// Sends through the session bus notification service.
#[derive(Debug, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn send(&self, notice: &Notice, replace_id: u32) -> Result<u32, NotifyError> {
        let text = notice.text();
        let mut n = Notification::new();
        n.appname(&notice.app_name)
            .icon(&notice.icon)
            .summary(&text)
            .body(&text)
            .hint(Hint::CustomInt(
                VALUE_HINT.into(),
                i32::try_from(notice.percent).unwrap_or(i32::MAX),
            ))
            .timeout(Timeout::Milliseconds(notice.expire_timeout_ms));
        if replace_id != 0 {
            n.id(replace_id);
        }
        let handle = n.show().map_err(|e| NotifyError(e.to_string()))?;
        Ok(handle.id())
    }
}

pub mod mock {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Records every notice. Mimics a notification server: a non-zero
    /// `replace_id` is reused, otherwise a fresh id is handed out.
    pub struct MockNotifier {
        /// Recorded sends: (notice, replace_id).
        pub sent: RefCell<Vec<(Notice, u32)>>,
        pub next_id: Cell<u32>,
        /// If true, `send` fails.
        pub fail: Cell<bool>,
    }

    impl Default for MockNotifier {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockNotifier {
        pub fn new() -> Self {
            MockNotifier {
                sent: RefCell::new(Vec::new()),
                next_id: Cell::new(100),
                fail: Cell::new(false),
            }
        }
    }

    impl Notifier for MockNotifier {
        fn send(&self, notice: &Notice, replace_id: u32) -> Result<u32, NotifyError> {
            if self.fail.get() {
                return Err(NotifyError("mock: no notification service".into()));
            }
            self.sent.borrow_mut().push((notice.clone(), replace_id));
            if replace_id != 0 {
                return Ok(replace_id);
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            Ok(id)
        }
    }
}
