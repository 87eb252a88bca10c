//! Command-line front-end for the histogram tool: turns the process argument
//! list into a validated [`Configuration`].

pub mod config;
pub mod error;
pub mod logging;
pub mod params;
pub mod usage;

pub use config::Configuration;
pub use error::ParamError;
pub use params::{FileProbe, FsProbe, ParamParser, ParseOutcome};
