//! Tests for transfer market services.
