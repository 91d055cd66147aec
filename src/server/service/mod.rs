//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic and
//! coordinates between repositories. Services cover the player pool, team
//! management with background squad assembly, and the transfer market.

pub mod pool;
pub mod team;
pub mod transfer;
