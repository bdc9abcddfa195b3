pub mod renderer;
pub mod renders;
pub mod traits;

pub use renderer::*;
pub use traits::*;
