//! Fantasy football transfer market backend.
//!
//! mercato manages the player pool, builds each user's starting squad in the
//! background, and runs the transfer market where squads trade players. The
//! [`server`] module holds the backend proper; [`model`] holds the DTOs its
//! services speak.

pub mod model;
pub mod server;
