//! # csdoc
//!
//! Structural outlines of C# source files: the declared types, their
//! members, access levels and signatures, without building the code.
//!
//! ```no_run
//! let declarations = csdoc::outline("public class Foo { private int x; }")?;
//! for line in csdoc::Report::new(&declarations).lines() {
//!     println!("{}", line);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod parser;
pub mod renderer;

pub use parser::*;
pub use renderer::*;

use anyhow::Result;

/// Parse `source` and collect its top-level declarations in source order.
pub fn outline(source: &str) -> Result<Vec<Declaration>> {
    let mut parser = SourceParser::new()?;
    let parsed = parser.parse(source)?;
    Ok(parsed.declarations())
}
