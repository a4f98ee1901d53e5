//! Code Compare library
//!
//! The comparison pipeline lives in [`diff`]; everything else is the desktop
//! front end around it.

pub mod app;
pub mod config;
pub mod constant;
pub mod diff;
pub mod export;
pub mod file;
pub mod messages;
pub mod style;
pub mod ui;
pub mod worker;
