//! Pieces shared by the workspace binaries and the server crate.

pub mod types;
pub mod utils;
