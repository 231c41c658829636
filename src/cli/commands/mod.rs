//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod scan;
pub mod serve;
pub mod update;
pub mod validate;
