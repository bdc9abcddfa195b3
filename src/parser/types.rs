use serde::Serialize;
use std::fmt;

/// Effective accessibility of a declaration or member.
///
/// Always resolved: there is no "unspecified" variant, the contextual
/// default is applied by [`resolve_access`](crate::parser::resolve_access).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Public,
    Private,
    Protected,
    Internal,
}

impl AccessLevel {
    /// Explicit modifiers in the order they are tested.
    pub const PRIORITY: [AccessLevel; 4] = [
        AccessLevel::Public,
        AccessLevel::Private,
        AccessLevel::Protected,
        AccessLevel::Internal,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            AccessLevel::Public => "public",
            AccessLevel::Private => "private",
            AccessLevel::Protected => "protected",
            AccessLevel::Internal => "internal",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeclarationKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeclarationKind::Class => "Class",
            DeclarationKind::Struct => "Struct",
            DeclarationKind::Interface => "Interface",
            DeclarationKind::Enum => "Enum",
            DeclarationKind::Delegate => "Delegate",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MemberKind {
    Property,
    Field,
    Constructor,
    Method,
    Event,
}

impl MemberKind {
    /// Constructors and methods carry a parameter list, the rest carry a type.
    pub fn has_parameters(self) -> bool {
        matches!(self, MemberKind::Constructor | MemberKind::Method)
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MemberKind::Property => "Property",
            MemberKind::Field => "Field",
            MemberKind::Constructor => "Constructor",
            MemberKind::Method => "Method",
            MemberKind::Event => "Event",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A property, field, constructor, method or event of a type declaration.
///
/// `type_name` is the raw type text as written in source. For methods it is
/// the return type, for constructors the constructor identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub kind: MemberKind,
    pub name: String,
    pub type_name: String,
    pub access: AccessLevel,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

/// Kind-specific payload of a top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum DeclarationBody {
    Class { members: Vec<Member> },
    Struct { members: Vec<Member> },
    Interface { members: Vec<Member> },
    Enum { members: Vec<String> },
    Delegate {
        return_type: String,
        parameters: Vec<Parameter>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub name: String,
    pub access: AccessLevel,
    #[serde(flatten)]
    pub body: DeclarationBody,
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        match self.body {
            DeclarationBody::Class { .. } => DeclarationKind::Class,
            DeclarationBody::Struct { .. } => DeclarationKind::Struct,
            DeclarationBody::Interface { .. } => DeclarationKind::Interface,
            DeclarationBody::Enum { .. } => DeclarationKind::Enum,
            DeclarationBody::Delegate { .. } => DeclarationKind::Delegate,
        }
    }

    /// Members of a class, struct or interface; empty for enums and delegates.
    pub fn members(&self) -> &[Member] {
        match &self.body {
            DeclarationBody::Class { members }
            | DeclarationBody::Struct { members }
            | DeclarationBody::Interface { members } => members.as_slice(),
            DeclarationBody::Enum { .. } | DeclarationBody::Delegate { .. } => &[],
        }
    }
}
