//! Tests for SquadAssemblyService.
