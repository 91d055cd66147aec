//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organizing
//! data access by domain (player pool, teams, owned players). Every repository is
//! generic over [`sea_orm::ConnectionTrait`], so the same methods run against a
//! plain connection or inside a transaction.

pub mod player;
pub mod pool;
pub mod team;
