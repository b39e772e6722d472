/// The kind of top-level declaration found in a schema document.
///
/// Only block declarations (those with a `{ ... }` body) are modeled here.
/// `scalar` lines are collected separately by the parser.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// `enum Name { ... }`
    Enum,

    /// `input Name { ... }`
    Input,

    /// `interface Name { ... }`
    Interface,

    /// `type Name { ... }`
    Type,
}
impl DeclarationKind {
    /// Maps the leading keyword of a declaration header to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "enum" => Some(Self::Enum),
            "input" => Some(Self::Input),
            "interface" => Some(Self::Interface),
            "type" => Some(Self::Type),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::Input => "input",
            Self::Interface => "interface",
            Self::Type => "type",
        }
    }
}
impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
