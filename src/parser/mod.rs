pub mod access;
pub mod members;
pub mod parser;
pub(crate) mod syntax;
pub mod types;

pub use access::*;
pub use members::*;
pub use parser::*;
pub use types::*;
