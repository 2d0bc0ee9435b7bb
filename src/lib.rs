pub mod error;
pub mod maximum_flow;
pub mod traversal;

pub use error::NetworkError;
