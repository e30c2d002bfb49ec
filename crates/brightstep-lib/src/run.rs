//! One brightness adjustment, start to finish.
//!
//! Stages run strictly in order and none is retried:
//! resolve → read → compute → apply → notify → persist. A failed notify or
//! persist never undoes the applied brightness.

use std::fmt;

use crate::args::Invocation;
use crate::config::Config;
use crate::device::Backlight;
use crate::error::{BrightstepError, Result};
use crate::identity::IdentityStore;
use crate::notify::Notifier;
use crate::resolve;
use crate::step::Direction;
use crate::store::{self, BrightnessState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Resolve,
    ReadState,
    Compute,
    Apply,
    Notify,
    Persist,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::Resolve => "resolve",
            Stage::ReadState => "read",
            Stage::Compute => "compute",
            Stage::Apply => "apply",
            Stage::Notify => "notify",
            Stage::Persist => "persist",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub state: BrightnessState,
    /// False when no direction was requested and the write was skipped.
    pub applied: bool,
    /// Id of the notification shown, if one was.
    pub notification_id: Option<u32>,
    /// Last stage reached.
    pub stage: Stage,
}

/// Wires a backend, a notifier and the identity store into one run.
pub struct Adjuster<'a> {
    backlight: &'a dyn Backlight,
    notifier: &'a dyn Notifier,
    identity: &'a IdentityStore,
    config: &'a Config,
}

impl<'a> Adjuster<'a> {
    pub fn new(
        backlight: &'a dyn Backlight,
        notifier: &'a dyn Notifier,
        identity: &'a IdentityStore,
        config: &'a Config,
    ) -> Self {
        Adjuster {
            backlight,
            notifier,
            identity,
            config,
        }
    }

    pub fn run(&self, invocation: &Invocation) -> Result<Report> {
        let mut stage = Stage::Init;
        let result = self.run_stages(invocation, &mut stage);
        if let Err(e) = &result {
            if e.is_cosmetic() {
                log::warn!("{}", cosmetic_failure_note(invocation.direction, stage, e));
            } else {
                log::debug!("run failed during {stage}: {e}");
            }
        }
        result
    }

    fn run_stages(&self, invocation: &Invocation, stage: &mut Stage) -> Result<Report> {
        let hint = invocation
            .device_hint
            .as_deref()
            .or_else(|| self.config.default_device());

        enter(stage, Stage::Resolve);
        let device = resolve::resolve(self.backlight, hint)?;
        log::debug!("device: {} ({})", device.name, device.location);

        enter(stage, Stage::ReadState);
        let mut state = store::read(self.backlight, device)?;
        log::debug!("brightness: {}/{}", state.current, state.max);

        enter(stage, Stage::Compute);
        state.step(invocation.direction);
        log::debug!(
            "{}: {} -> {} ({}%)",
            invocation.direction,
            state.current,
            state.set,
            state.percent()
        );

        let applied = invocation.direction != Direction::None;
        if applied {
            enter(stage, Stage::Apply);
            store::apply(self.backlight, &state)?;
        } else {
            log::debug!("no direction given, skipping write");
            if !self.config.notify_on_query {
                enter(stage, Stage::Done);
                return Ok(Report {
                    state,
                    applied,
                    notification_id: None,
                    stage: *stage,
                });
            }
        }

        enter(stage, Stage::Notify);
        let replace_id = self.identity.load();
        let notice = self.config.notice(state.percent());
        let id = self.notifier.send(&notice, replace_id)?;
        log::debug!("notification id {id} (replaced {replace_id})");

        enter(stage, Stage::Persist);
        self.identity.save(id).map_err(BrightstepError::Persist)?;

        enter(stage, Stage::Done);
        Ok(Report {
            state,
            applied,
            notification_id: Some(id),
            stage: *stage,
        })
    }
}

/// Notify and persist failures happen after the brightness decision, so the
/// note says whether anything was written.
fn cosmetic_failure_note(direction: Direction, stage: Stage, error: &BrightstepError) -> String {
    if direction == Direction::None {
        format!("brightness left unchanged, and {stage} failed: {error}")
    } else {
        format!("brightness was applied, but {stage} failed: {error}")
    }
}

fn enter(stage: &mut Stage, next: Stage) {
    log::debug!("stage {stage} -> {next}");
    *stage = next;
}
