//! Progression systems

pub mod difficulty;

pub use difficulty::{bug_level, BugScaling};
