//! Shared helpers used across formats.

pub mod links;
