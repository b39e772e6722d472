use crate::DeclarationKind;

/// One top-level `kind Name ... { ... }` block of a schema document.
///
/// Field lines are kept verbatim (including their indentation). A field whose
/// argument list spans several physical lines occupies one entry per physical
/// line.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub(crate) additions: Vec<String>,
    pub(crate) description: Vec<String>,
    pub(crate) fields: Vec<String>,
    pub(crate) kind: DeclarationKind,
    pub(crate) name: String,
    pub(crate) trailing_tokens: Vec<String>,
}
impl Declaration {
    pub fn new(
        kind: DeclarationKind,
        name: impl Into<String>,
    ) -> Self {
        Self {
            additions: vec![],
            description: vec![],
            fields: vec![],
            kind,
            name: name.into(),
            trailing_tokens: vec![],
        }
    }

    /// Lines injected by `Add` filters. These are rendered ahead of
    /// [`Declaration::fields`].
    pub fn additions(&self) -> &[String] {
        &self.additions
    }

    /// Comment (or stray) lines that preceded the declaration header.
    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Word tokens following the name on the header line, e.g.
    /// `["implements", "Node"]`.
    pub fn trailing_tokens(&self) -> &[String] {
        &self.trailing_tokens
    }

    pub fn with_description(mut self, lines: Vec<String>) -> Self {
        self.description = lines;
        self
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_trailing_tokens(mut self, tokens: Vec<String>) -> Self {
        self.trailing_tokens = tokens;
        self
    }

    /// Renders the `kind Name trailing... {` header line.
    ///
    /// Interfaces listed after an `implements` keyword are re-joined with
    /// `&` since the `&` separators are not word tokens.
    pub fn header(&self) -> String {
        let mut parts = vec![
            self.kind.as_str().to_string(),
            self.name.to_owned(),
        ];
        match self.trailing_tokens.split_first() {
            Some((first, interfaces)) if first == "implements" && !interfaces.is_empty() => {
                parts.push(first.to_owned());
                parts.push(interfaces.join(" & "));
            },
            _ => parts.extend(self.trailing_tokens.iter().cloned()),
        }
        parts.push("{".to_string());
        parts.join(" ")
    }
}
