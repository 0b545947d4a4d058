//! Command implementations for swayctl

pub mod config;
pub mod generate;
pub mod replay;
