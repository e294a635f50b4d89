//! Infrastructure layer for filesystem and environment interactions.
//!
//! The Zellij plugin sandbox mounts the host filesystem under `/host`; paths
//! from configuration have to be translated before they can be opened.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
