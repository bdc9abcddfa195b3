//! Small lookups over tree-sitter nodes shared by the walker and the member
//! enumerator. Field names are tried first, structural kinds second, so a
//! grammar revision that renames a field does not silently drop data.

use crate::parser::types::Parameter;
use tree_sitter::Node;

/// Source text of a node as written.
pub(crate) fn text(node: Node, source: &[u8]) -> String {
    node.utf8_text(source)
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Modifier keywords (`public`, `static`, ...) attached directly to a declaration.
pub(crate) fn modifiers<'s>(node: Node, source: &'s [u8]) -> Vec<&'s str> {
    let mut cursor = node.walk();
    let keywords = node
        .children(&mut cursor)
        .filter(|child| child.kind() == "modifier")
        .filter_map(|child| child.utf8_text(source).ok())
        .map(str::trim)
        .collect();
    keywords
}

pub(crate) fn first_child_of_kind<'t>(node: Node<'t>, kinds: &[&str]) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| kinds.contains(&child.kind()));
    found
}

pub(crate) fn field_or_kind<'t>(node: Node<'t>, field: &str, kinds: &[&str]) -> Option<Node<'t>> {
    node.child_by_field_name(field)
        .or_else(|| first_child_of_kind(node, kinds))
}

/// Declared identifier of a declaration, declarator, parameter or enum member.
///
/// Falls back to the last direct identifier child: a leading identifier is
/// the type when both are present.
pub(crate) fn name_of(node: Node, source: &[u8]) -> Option<String> {
    let name = node.child_by_field_name("name").or_else(|| {
        let mut cursor = node.walk();
        let last = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() == "identifier")
            .last();
        last
    })?;

    let name = text(name, source);
    (!name.is_empty()).then_some(name)
}

/// Type text stored under the first of `fields` that is present.
pub(crate) fn type_text(node: Node, fields: &[&str], source: &[u8]) -> Option<String> {
    fields
        .iter()
        .find_map(|field| node.child_by_field_name(field))
        .map(|ty| text(ty, source))
}

/// Ordered parameter list of a method, constructor or delegate.
///
/// A `params` parameter has no node of its own: the grammar leaves a
/// `params` token followed by `type` and `name` fields on the list itself.
pub(crate) fn parameters(owner: Node, source: &[u8]) -> Vec<Parameter> {
    let Some(list) = field_or_kind(owner, "parameters", &["parameter_list"]) else {
        return Vec::new();
    };

    let mut parameters = Vec::new();
    let mut params_type: Option<String> = None;
    let mut cursor = list.walk();

    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            match (child.kind(), cursor.field_name()) {
                ("parameter", _) => {
                    if let Some(name) = name_of(child, source) {
                        let type_name = type_text(child, &["type"], source).unwrap_or_default();
                        parameters.push(Parameter { name, type_name });
                    }
                }
                (_, Some("type")) => params_type = Some(text(child, source)),
                (_, Some("name")) => parameters.push(Parameter {
                    name: text(child, source),
                    type_name: params_type.take().unwrap_or_default(),
                }),
                _ => {}
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }

    parameters
}
