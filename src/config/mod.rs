//! Configuration module for the expense tracker
//!
//! The only configurable input is where the expense file lives.

pub mod paths;

pub use paths::TrackerPaths;
