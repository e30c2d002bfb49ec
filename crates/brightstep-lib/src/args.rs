//! Command-line token interpretation.
//!
//! Tokens are order-independent: a direction word, `-d`, and at most one
//! device name.

use std::fmt;

use crate::step::Direction;

const INCREASE_TOKENS: &[&str] = &["inc", "increase", "-inc", "--inc", "--increase"];
const DECREASE_TOKENS: &[&str] = &["dec", "decrease", "-dec", "--dec", "--decrease"];
const DEBUG_TOKEN: &str = "-d";

#[derive(Debug, Clone, PartialEq)]
pub enum ArgsError {
    /// Both an increase and a decrease token were given.
    ConflictingDirections,
    /// More than one distinct device name was given.
    MultipleDevices(Vec<String>),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::ConflictingDirections => {
                write!(f, "conflicting arguments: both increase and decrease given")
            }
            ArgsError::MultipleDevices(names) => write!(
                f,
                "conflicting arguments: more than one device name given ({})",
                names.join(", ")
            ),
        }
    }
}

impl std::error::Error for ArgsError {}

/// One run's request, built once from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    pub direction: Direction,
    pub device_hint: Option<String>,
    pub verbose: bool,
}

impl Invocation {
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut increase = false;
        let mut decrease = false;
        let mut verbose = false;
        let mut hints: Vec<String> = Vec::new();

        for token in tokens {
            let token = token.as_ref().trim();
            if token.is_empty() {
                continue;
            }
            if token == DEBUG_TOKEN {
                verbose = true;
            } else if INCREASE_TOKENS.contains(&token) {
                increase = true;
            } else if DECREASE_TOKENS.contains(&token) {
                decrease = true;
            } else if !hints.iter().any(|h| h == token) {
                hints.push(token.to_string());
            }
        }

        let direction = Direction::from_flags(increase, decrease)?;
        if hints.len() > 1 {
            return Err(ArgsError::MultipleDevices(hints));
        }

        Ok(Invocation {
            direction,
            device_hint: hints.pop(),
            verbose,
        })
    }
}
