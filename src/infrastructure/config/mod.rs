//! Infrastructure configuration modules.

pub mod logging;
pub mod map;
pub mod settings;
