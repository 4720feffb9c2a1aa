//! Structural analysis of the dictionary ahead of the rule battery.
pub mod topology;
