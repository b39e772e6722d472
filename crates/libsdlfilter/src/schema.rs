use crate::Declaration;
use crate::DeclarationKind;
use indexmap::IndexMap;

/// In-memory model of a schema document: its block declarations grouped by
/// kind, plus the lines the parser keeps aside.
///
/// Both the kind groups and the declarations within each group iterate in
/// the order they were first encountered in the source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    pub(crate) declarations: IndexMap<DeclarationKind, IndexMap<String, Declaration>>,
    pub(crate) header: Vec<String>,
    pub(crate) scalars: Vec<String>,
    pub(crate) trailing: Vec<String>,
}
impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declaration(
        &self,
        kind: DeclarationKind,
        name: &str,
    ) -> Option<&Declaration> {
        self.declarations.get(&kind)?.get(name)
    }

    pub fn declaration_mut(
        &mut self,
        kind: DeclarationKind,
        name: &str,
    ) -> Option<&mut Declaration> {
        self.declarations.get_mut(&kind)?.get_mut(name)
    }

    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.values().flat_map(|by_name| by_name.values())
    }

    pub fn declarations_mut(&mut self) -> impl Iterator<Item = &mut Declaration> {
        self.declarations.values_mut().flat_map(|by_name| by_name.values_mut())
    }

    /// Comment lines that appeared before any other content (typically a
    /// code generator's preamble).
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Indexes `declaration` under its kind and name.
    ///
    /// A later declaration with the same kind and name replaces the earlier
    /// one but keeps the earlier one's position.
    pub fn insert(&mut self, declaration: Declaration) {
        self.declarations
            .entry(declaration.kind)
            .or_default()
            .insert(declaration.name.to_owned(), declaration);
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.declarations.values().map(|by_name| by_name.len()).sum()
    }

    pub fn scalars(&self) -> &[String] {
        &self.scalars
    }

    /// Stray lines left over after the last declaration closed.
    pub fn trailing(&self) -> &[String] {
        &self.trailing
    }
}
