//! Command dispatch — adjust brightness or list devices.

mod adjust;
mod list;

use std::path::{Path, PathBuf};

use serde::Serialize;

pub(super) use brightstep_lib::BrightstepError;
pub(super) use brightstep_lib::args::Invocation;
pub(super) use brightstep_lib::config::Config;
pub(super) use brightstep_lib::device::DeviceHandle;
pub(super) use brightstep_lib::error::Result;

/// Everything the command line asked for.
pub struct Request {
    pub tokens: Vec<String>,
    pub inc: bool,
    pub dec: bool,
    pub debug: bool,
    pub list: bool,
    pub json: bool,
    pub config: Option<PathBuf>,
}

impl Request {
    /// Parse the tokens once. Conflicts surface here, before any config or
    /// device access.
    pub fn invocation(&self) -> Result<Invocation> {
        Ok(Invocation::from_tokens(self.all_tokens())?)
    }

    /// Fold the flag spellings into the token list so one parser sees them all.
    fn all_tokens(&self) -> Vec<String> {
        let mut tokens = self.tokens.clone();
        if self.inc {
            tokens.push("inc".into());
        }
        if self.dec {
            tokens.push("dec".into());
        }
        if self.debug {
            tokens.push("-d".into());
        }
        tokens
    }
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct DevicesOutput {
    pub count: usize,
    pub devices: Vec<DeviceHandle>,
}

/// Load config from `custom_path` or the default location, then validate it.
pub(super) fn load_config(custom_path: Option<&Path>) -> Result<Config> {
    let config = match custom_path {
        Some(path) => {
            let (config, warnings) = Config::load_from(path);
            for w in &warnings {
                log::warn!("{w}");
            }
            config
        }
        None => Config::load(),
    };
    if let Err(errors) = config.validate() {
        let joined: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        return Err(BrightstepError::Config(joined.join("; ")));
    }
    Ok(config)
}

pub fn run(request: &Request, invocation: &Invocation) -> Result<()> {
    let config = load_config(request.config.as_deref())?;

    if request.list {
        return list::cmd_list(&config, request.json);
    }
    if request.json {
        log::warn!("--json is only supported with --list (ignored)");
    }
    adjust::cmd_adjust(invocation, &config)
}
