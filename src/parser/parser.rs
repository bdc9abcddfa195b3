use anyhow::{anyhow, Context, Result};
use tracing::{debug, trace};
use tree_sitter::{Node, Parser, Tree};

use crate::parser::access::{resolve_access, DeclarationScope};
use crate::parser::members::MemberEnumerator;
use crate::parser::syntax::{field_or_kind, modifiers, name_of, parameters, type_text};
use crate::parser::types::*;

/// Parses C# source text into a tree-sitter syntax tree.
pub struct SourceParser {
    parser: Parser,
}

impl SourceParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
            .context("Failed to load the C# grammar")?;
        Ok(Self { parser })
    }

    /// Parse `source`. Syntax errors do not fail the parse: the tree keeps
    /// whatever well-formed declarations the error recovery produced.
    pub fn parse<'src>(&mut self, source: &'src str) -> Result<ParsedSource<'src>> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| anyhow!("Parser produced no syntax tree"))?;

        if tree.root_node().has_error() {
            debug!("source contains syntax errors; malformed fragments will be skipped");
        }

        Ok(ParsedSource { source, tree })
    }
}

/// A syntax tree together with the text it was parsed from.
pub struct ParsedSource<'src> {
    source: &'src str,
    tree: Tree,
}

impl<'src> ParsedSource<'src> {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    pub fn declarations(&self) -> Vec<Declaration> {
        DeclarationWalker::new(self).walk()
    }
}

/// Collects top-level declarations: those whose parent is the compilation
/// unit or a namespace body. Nested types are never reported on their own;
/// see [`MemberEnumerator`] for how their members surface.
pub struct DeclarationWalker<'a> {
    source: &'a [u8],
    root: Node<'a>,
}

impl<'a> DeclarationWalker<'a> {
    pub fn new(parsed: &'a ParsedSource<'_>) -> Self {
        Self {
            source: parsed.source.as_bytes(),
            root: parsed.root(),
        }
    }

    pub fn walk(&self) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        self.collect_scope(self.root, &mut declarations);
        debug!(count = declarations.len(), "collected top-level declarations");
        declarations
    }

    fn collect_scope(&self, scope: Node<'a>, declarations: &mut Vec<Declaration>) {
        let mut cursor = scope.walk();

        for node in scope.named_children(&mut cursor) {
            match node.kind() {
                "namespace_declaration" => {
                    if let Some(body) = field_or_kind(node, "body", &["declaration_list"]) {
                        self.collect_scope(body, declarations);
                    }
                }
                // Older grammars nest the following declarations inside the
                // file-scoped namespace node, newer ones leave them as siblings.
                "file_scoped_namespace_declaration" => self.collect_scope(node, declarations),
                _ => {
                    if let Some(declaration) = self.declaration(node) {
                        declarations.push(declaration);
                    }
                }
            }
        }
    }

    fn declaration(&self, node: Node<'a>) -> Option<Declaration> {
        let kind = match node.kind() {
            "class_declaration" => DeclarationKind::Class,
            "struct_declaration" => DeclarationKind::Struct,
            "interface_declaration" => DeclarationKind::Interface,
            "enum_declaration" => DeclarationKind::Enum,
            "delegate_declaration" => DeclarationKind::Delegate,
            other => {
                trace!(kind = other, "skipping top-level node");
                return None;
            }
        };

        let Some(name) = name_of(node, self.source) else {
            trace!(%kind, "skipping declaration without a name");
            return None;
        };
        let access = resolve_access(modifiers(node, self.source), DeclarationScope::TopLevel);

        let body = match kind {
            DeclarationKind::Class => DeclarationBody::Class {
                members: self.type_members(node, kind),
            },
            DeclarationKind::Struct => DeclarationBody::Struct {
                members: self.type_members(node, kind),
            },
            DeclarationKind::Interface => DeclarationBody::Interface {
                members: self.type_members(node, kind),
            },
            DeclarationKind::Enum => DeclarationBody::Enum {
                members: self.enum_members(node),
            },
            DeclarationKind::Delegate => DeclarationBody::Delegate {
                return_type: type_text(node, &["type", "returns"], self.source)
                    .unwrap_or_default(),
                parameters: parameters(node, self.source),
            },
        };

        trace!(%kind, %name, %access, "collected declaration");
        Some(Declaration { name, access, body })
    }

    fn type_members(&self, node: Node<'a>, kind: DeclarationKind) -> Vec<Member> {
        match field_or_kind(node, "body", &["declaration_list"]) {
            Some(body) => MemberEnumerator::new(self.source).enumerate(body, kind),
            None => Vec::new(),
        }
    }

    fn enum_members(&self, node: Node<'a>) -> Vec<String> {
        let Some(body) = field_or_kind(node, "body", &["enum_member_declaration_list"]) else {
            return Vec::new();
        };

        let mut cursor = body.walk();
        let names = body
            .named_children(&mut cursor)
            .filter(|child| child.kind() == "enum_member_declaration")
            .filter_map(|child| name_of(child, self.source))
            .collect();
        names
    }
}
