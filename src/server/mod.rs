//! Server application core modules.
//!
//! This module contains all server-side functionality for the mercato backend: runtime
//! configuration, database repositories, business-logic services for the player pool,
//! team management, and the transfer market, background workers for squad assembly, and
//! the notification port used to push team readiness to users.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod notify;
pub mod service;
pub mod startup;
pub mod worker;
