//! Shared SDL fixtures for unit tests across modules.
