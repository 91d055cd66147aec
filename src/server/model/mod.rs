//! Server application models and type definitions.
//!
//! This module contains data models internal to the server application. Currently that
//! is the worker job definitions bridging the service layer and background workers.

pub mod worker;
