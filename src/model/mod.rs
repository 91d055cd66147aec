//! Data transfer objects shared between the service layer and its callers.

pub mod pool;
pub mod team;
pub mod transfer;
