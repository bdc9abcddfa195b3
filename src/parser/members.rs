use crate::parser::access::{resolve_access, DeclarationScope};
use crate::parser::syntax::{
    field_or_kind, first_child_of_kind, modifiers, name_of, parameters, text, type_text,
};
use crate::parser::types::*;
use tracing::trace;
use tree_sitter::Node;

/// Extracts the reportable members of a class, struct or interface body.
///
/// Members come out in source order, interleaved by kind as written. Kinds
/// without a [`MemberKind`] (indexers, operators, nested enums, ...) are
/// skipped. Inside a class or interface, the members of a nested class,
/// struct or interface are spliced in at the nested type's position.
pub struct MemberEnumerator<'a> {
    source: &'a [u8],
}

impl<'a> MemberEnumerator<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self { source }
    }

    pub fn enumerate(&self, body: Node<'a>, container: DeclarationKind) -> Vec<Member> {
        let mut members = Vec::new();
        self.push_body(body, container, &mut members);
        members
    }

    fn push_body(&self, body: Node<'a>, container: DeclarationKind, members: &mut Vec<Member>) {
        let mut cursor = body.walk();
        for node in body.named_children(&mut cursor) {
            self.push_members(node, container, members);
        }
    }

    fn push_members(&self, node: Node<'a>, container: DeclarationKind, members: &mut Vec<Member>) {
        match node.kind() {
            "class_declaration" | "struct_declaration" | "interface_declaration" => {
                self.push_nested(node, container, members)
            }
            "property_declaration" => {
                if let Some(name) = name_of(node, self.source) {
                    let type_name = type_text(node, &["type"], self.source).unwrap_or_default();
                    members.push(self.member(node, MemberKind::Property, name, type_name));
                }
            }
            "field_declaration" => self.push_variables(node, MemberKind::Field, members),
            "event_field_declaration" => self.push_variables(node, MemberKind::Event, members),
            "event_declaration" => {
                if let Some(name) = name_of(node, self.source) {
                    let type_name = type_text(node, &["type"], self.source).unwrap_or_default();
                    members.push(self.member(node, MemberKind::Event, name, type_name));
                }
            }
            "constructor_declaration" => {
                if let Some(name) = name_of(node, self.source) {
                    let mut member =
                        self.member(node, MemberKind::Constructor, name.clone(), name);
                    member.parameters = parameters(node, self.source);
                    members.push(member);
                }
            }
            "method_declaration" => {
                if let Some(name) = name_of(node, self.source) {
                    let return_type =
                        type_text(node, &["returns", "type"], self.source).unwrap_or_default();
                    let mut member = self.member(node, MemberKind::Method, name, return_type);
                    member.parameters = parameters(node, self.source);
                    members.push(member);
                }
            }
            other => trace!(kind = other, "skipping unsupported member"),
        }
    }

    fn push_nested(&self, node: Node<'a>, container: DeclarationKind, members: &mut Vec<Member>) {
        let nested = match node.kind() {
            "class_declaration" => DeclarationKind::Class,
            "struct_declaration" => DeclarationKind::Struct,
            _ => DeclarationKind::Interface,
        };

        if !matches!(container, DeclarationKind::Class | DeclarationKind::Interface) {
            trace!(%container, %nested, "skipping nested type");
            return;
        }

        match field_or_kind(node, "body", &["declaration_list"]) {
            Some(body) => self.push_body(body, nested, members),
            None => trace!(%nested, "nested type without a body"),
        }
    }

    /// One member per declarator of a field or field-style event statement,
    /// all sharing the statement's type and access level.
    fn push_variables(&self, node: Node<'a>, kind: MemberKind, members: &mut Vec<Member>) {
        let Some(declaration) = first_child_of_kind(node, &["variable_declaration"]) else {
            trace!(kind = node.kind(), "member statement without variable declaration");
            return;
        };

        let type_name = type_text(declaration, &["type"], self.source).unwrap_or_default();
        let access = resolve_access(modifiers(node, self.source), DeclarationScope::Member);

        let mut cursor = declaration.walk();
        for declarator in declaration.named_children(&mut cursor) {
            if declarator.kind() != "variable_declarator" {
                continue;
            }
            match name_of(declarator, self.source) {
                Some(name) => members.push(Member {
                    kind,
                    name,
                    type_name: type_name.clone(),
                    access,
                    parameters: Vec::new(),
                }),
                None => trace!(
                    declarator = %text(declarator, self.source),
                    "skipping declarator without a plain identifier"
                ),
            }
        }
    }

    fn member(&self, node: Node<'a>, kind: MemberKind, name: String, type_name: String) -> Member {
        Member {
            kind,
            name,
            type_name,
            access: resolve_access(modifiers(node, self.source), DeclarationScope::Member),
            parameters: Vec::new(),
        }
    }
}
