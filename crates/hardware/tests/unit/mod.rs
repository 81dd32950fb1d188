//! Unit tests for the engine components.
