use crate::parser::Declaration;
use crate::renderer::traits::*;

/// Outline of a parsed file, rendered on demand.
///
/// `lines()` is lazy and can be called any number of times; each call starts
/// again from the first declaration. Where the lines go is up to the caller.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    declarations: &'a [Declaration],
}

impl<'a> Report<'a> {
    pub fn new(declarations: &'a [Declaration]) -> Self {
        Self { declarations }
    }

    pub fn lines(&self) -> impl Iterator<Item = ReportLine> + 'a {
        let context = RenderContext::new();
        self.declarations
            .iter()
            .flat_map(move |declaration| declaration.render(&context))
    }

    pub fn to_text(&self) -> String {
        let mut output = String::new();
        for line in self.lines() {
            output.push_str(&line.to_string());
            output.push('\n');
        }
        output
    }
}
