use std::iter;

use crate::parser::*;
use crate::renderer::traits::*;

impl Render for Parameter {
    fn render<'a>(&'a self, context: &RenderContext) -> Lines<'a> {
        let line = ReportLine::new(
            context.depth,
            format!("Parameter: {} (Type: {})", self.name, self.type_name),
        );
        Box::new(iter::once(line))
    }
}

impl Render for Member {
    fn render<'a>(&'a self, context: &RenderContext) -> Lines<'a> {
        let header = if self.kind.has_parameters() {
            format!("{} {}: {}", self.access, self.kind, self.name)
        } else {
            format!(
                "{} {}: {} (Type: {})",
                self.access, self.kind, self.name, self.type_name
            )
        };

        let params = context.nested();
        Box::new(
            iter::once(ReportLine::new(context.depth, header))
                .chain(self.parameters.iter().flat_map(move |p| p.render(&params))),
        )
    }
}

impl Render for Declaration {
    fn render<'a>(&'a self, context: &RenderContext) -> Lines<'a> {
        let kind = self.kind();
        let header = match &self.body {
            DeclarationBody::Delegate { return_type, .. } => format!(
                "{} {}: {} (Return Type: {})",
                self.access, kind, self.name, return_type
            ),
            _ => format!("{} {}: {}", self.access, kind, self.name),
        };

        let nested = context.nested();
        let children: Lines<'a> = match &self.body {
            DeclarationBody::Class { members }
            | DeclarationBody::Struct { members }
            | DeclarationBody::Interface { members } => {
                Box::new(members.iter().flat_map(move |m| m.render(&nested)))
            }
            DeclarationBody::Enum { members } => Box::new(
                members
                    .iter()
                    .map(move |name| ReportLine::new(nested.depth, format!("Enum Member: {}", name))),
            ),
            // Delegate parameters sit at the same depth as member parameters.
            DeclarationBody::Delegate { parameters, .. } => {
                let params = nested.nested();
                Box::new(parameters.iter().flat_map(move |p| p.render(&params)))
            }
        };

        Box::new(iter::once(ReportLine::new(context.depth, header)).chain(children))
    }
}
