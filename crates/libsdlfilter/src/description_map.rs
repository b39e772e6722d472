use crate::DeclarationKind;
use indexmap::IndexMap;

/// Reserved field token under which a declaration's own description is
/// stored.
pub const NODE_DESCRIPTION_KEY: &str = "__node";

/// Description text to inject at render time, keyed by declaration kind,
/// declaration name, and field name token.
///
/// ```json
/// {
///   "type": {
///     "Album": {
///       "__node": "A music album",
///       "name": "The name of the album"
///     }
///   }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(transparent)]
pub struct DescriptionMap {
    entries: IndexMap<DeclarationKind, IndexMap<String, IndexMap<String, String>>>,
}
impl DescriptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        kind: DeclarationKind,
        declaration: impl Into<String>,
        field: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.entries
            .entry(kind)
            .or_default()
            .entry(declaration.into())
            .or_default()
            .insert(field.into(), text.into());
        self
    }

    /// Sets the description that replaces the declaration's own description.
    pub fn insert_node(
        &mut self,
        kind: DeclarationKind,
        declaration: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.insert(kind, declaration, NODE_DESCRIPTION_KEY, text)
    }

    pub fn for_declaration(
        &self,
        kind: DeclarationKind,
        declaration: &str,
    ) -> Option<&IndexMap<String, String>> {
        self.entries.get(&kind)?.get(declaration)
    }

    pub fn field(
        &self,
        kind: DeclarationKind,
        declaration: &str,
        field: &str,
    ) -> Option<&str> {
        self.for_declaration(kind, declaration)?
            .get(field)
            .map(String::as_str)
    }

    pub fn node(
        &self,
        kind: DeclarationKind,
        declaration: &str,
    ) -> Option<&str> {
        self.field(kind, declaration, NODE_DESCRIPTION_KEY)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|by_name| by_name.values().all(IndexMap::is_empty))
    }

    /// Every `(kind, declaration, field, text)` entry in insertion (or
    /// document) order, excluding node descriptions.
    pub fn field_entries(&self) -> impl Iterator<Item = (DeclarationKind, &str, &str, &str)> {
        self.entries.iter().flat_map(|(kind, by_name)| {
            by_name.iter().flat_map(move |(declaration, fields)| {
                fields.iter()
                    .filter(|(field, _)| field.as_str() != NODE_DESCRIPTION_KEY)
                    .map(move |(field, text)| (
                        *kind,
                        declaration.as_str(),
                        field.as_str(),
                        text.as_str(),
                    ))
            })
        })
    }
}
