//! brightstep — step a display backlight along a square-root curve and show
//! the result in a notification that replaces its previous instance.

pub mod args;
pub mod config;
pub mod device;
pub mod error;
pub mod identity;
pub mod notify;
pub mod resolve;
pub mod run;
pub mod step;
pub mod store;

pub use error::BrightstepError;
