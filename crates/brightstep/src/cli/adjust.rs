//! Default command — step brightness and notify.

use brightstep_lib::identity::IdentityStore;
use brightstep_lib::notify::DesktopNotifier;
use brightstep_lib::run::Adjuster;

use super::{Config, Invocation, Result};

pub(super) fn cmd_adjust(invocation: &Invocation, config: &Config) -> Result<()> {
    let backlight = config.backlight();
    let identity = IdentityStore::for_current_user();
    let notifier = DesktopNotifier;

    let report = Adjuster::new(&*backlight, &notifier, &identity, config).run(invocation)?;
    log::debug!(
        "{}: {}% ({})",
        report.state.device.name,
        report.state.percent(),
        if report.applied { "applied" } else { "unchanged" }
    );
    Ok(())
}
