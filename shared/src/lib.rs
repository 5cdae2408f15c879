pub mod error;
pub mod models;
pub mod registry;

pub use error::{Error, ErrorCode};
pub use models::*;
pub use registry::{RegistryError, VoteRegistry, POLL_TOPIC};

#[cfg(test)]
mod tests;
