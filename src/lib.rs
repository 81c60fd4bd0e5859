pub mod api;
pub mod errors;
pub mod manifest;
pub mod plan;
mod preview;
pub mod scaffold;

pub use api::HuskError;
pub use manifest::{Manifest, Preset, DEFAULT_PRESET};
pub use scaffold::{run, Report, ScaffoldError};
