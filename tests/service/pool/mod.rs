//! Tests for player pool services.
