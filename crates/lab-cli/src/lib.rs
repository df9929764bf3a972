//! Library components of the `labmetrics` CLI.

pub mod input;
pub mod logging;
