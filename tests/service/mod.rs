//! Tests for the service layer.
//!
//! This module contains integration tests for the business-logic services,
//! run against an in-memory SQLite database: player pool seeding, team
//! management with background squad assembly, and the transfer market.

mod pool;
mod transfer;
