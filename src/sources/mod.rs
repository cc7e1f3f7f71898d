//! Collaborators the renderer pulls data from.
//!
//! Each one sits behind a trait so rendering can be exercised with fixed
//! values instead of spawning `git`, hitting the network, or reading the
//! system clock.

pub mod clock;
pub mod git;
pub mod weather;

use std::path::Path;

use crate::error::GlintResult;

pub use clock::SystemClock;
pub use git::{GitCli, VcsStatus};
pub use weather::{Offline, WeatherInfo, WttrClient};

/// Working-tree status for a directory. Implementations never fail; missing
/// pieces come back as sentinels.
pub trait VcsProvider {
    fn status(&self, dir: &Path) -> VcsStatus;
}

/// Current weather for wherever the request originates.
pub trait WeatherProvider {
    fn fetch(&self) -> GlintResult<WeatherInfo>;
}

pub trait Clock {
    fn now(&self) -> clock::TimeReading;
}
