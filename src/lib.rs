pub mod error;
pub mod loader;
pub mod maximum_flow;

pub use error::{ErrorKind, FlowError, Result};
