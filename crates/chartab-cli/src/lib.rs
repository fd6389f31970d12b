//! CLI library components for chartab.

pub mod logging;
