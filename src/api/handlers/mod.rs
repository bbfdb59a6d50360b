//! API handlers.

mod comments;
mod records;
mod system;


pub use comments::*;
pub use records::*;
pub use system::*;
