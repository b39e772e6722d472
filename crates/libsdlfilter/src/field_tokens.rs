use regex::Regex;
use std::sync::OnceLock;

fn name_definition_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(\w*):\s(\w*)").expect("static regex"))
}

/// The name and definition tokens of a field entry.
///
/// Both come from the first `name: Definition` pair anywhere in the entry,
/// so an entry that a rewrite prefixed with extra lines still yields the
/// field's own tokens. For `  author(id: ID): Person!` that pair is the
/// argument: the name token is `id` and the definition token is `ID`.
/// Entries with no `:` followed by whitespace (enum values, `name:Type`)
/// yield empty tokens.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldTokens<'a> {
    pub definition: &'a str,
    pub name: &'a str,
}
impl<'a> FieldTokens<'a> {
    pub fn parse(line: &'a str) -> Self {
        let Some(caps) = name_definition_regex().captures(line) else {
            return Self::default();
        };
        Self {
            definition: caps.get(2).map_or("", |m| m.as_str()),
            name: caps.get(1).map_or("", |m| m.as_str()),
        }
    }
}
