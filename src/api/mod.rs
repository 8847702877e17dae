pub mod error;
pub mod router;

pub use error::*;
pub use router::*;
