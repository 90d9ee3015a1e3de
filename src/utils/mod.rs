//! Utility functions shared across the application.

pub(crate) mod permissions;

pub use permissions::open_private_file;
