use std::fmt;

/// Rendering position within the report.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext {
    pub depth: usize,
}

impl RenderContext {
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self { depth }
    }

    pub fn nested(&self) -> Self {
        self.with_depth(self.depth + 1)
    }

    pub fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }
}

/// One line of the outline: its nesting depth and unindented text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub depth: usize,
    pub text: String,
}

impl ReportLine {
    pub fn new(depth: usize, text: impl Into<String>) -> Self {
        Self {
            depth,
            text: text.into(),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", RenderContext::new().with_depth(self.depth).indent(), self.text)
    }
}

pub type Lines<'a> = Box<dyn Iterator<Item = ReportLine> + 'a>;

/// Core rendering trait for all outline items.
///
/// Implementations only format already-resolved data; the returned iterator
/// borrows `self` but not the context.
pub trait Render {
    fn render<'a>(&'a self, context: &RenderContext) -> Lines<'a>;
}
