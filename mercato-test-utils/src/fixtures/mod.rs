//! Test fixture modules for database seeding.
//!
//! This module contains fixture utilities for creating test data during test
//! execution. The [`market`] submodule covers everything the pool, team, and
//! transfer services need: pool players, teams in both readiness states, and
//! owned players on and off the transfer list.

pub mod market;
