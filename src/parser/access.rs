use crate::parser::types::AccessLevel;

/// Structural position of a node, which decides its default accessibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationScope {
    /// Class, struct, interface, enum or delegate directly under the file or a namespace.
    TopLevel,
    /// Property, field, constructor, method or event inside a type.
    Member,
}

impl DeclarationScope {
    pub fn default_access(self) -> AccessLevel {
        match self {
            DeclarationScope::TopLevel => AccessLevel::Internal,
            DeclarationScope::Member => AccessLevel::Private,
        }
    }
}

/// Resolve the effective access level from a node's modifier keywords.
///
/// Explicit keywords are tested in [`AccessLevel::PRIORITY`] order and the
/// first one present wins, so `protected internal` resolves to `protected`.
/// Without any access keyword the scope default applies.
pub fn resolve_access<'m, I>(modifiers: I, scope: DeclarationScope) -> AccessLevel
where
    I: IntoIterator<Item = &'m str>,
{
    let modifiers: Vec<&str> = modifiers.into_iter().collect();

    AccessLevel::PRIORITY
        .into_iter()
        .find(|level| modifiers.contains(&level.keyword()))
        .unwrap_or_else(|| scope.default_access())
}
