use crate::parse;
use crate::Declaration;
use crate::DeclarationKind;
use crate::Schema;

pub(super) const ALBUM_SDL: &str = "\
type Album {
  id: ID
  name: String
}
";

pub(super) fn expect_declaration<'a>(
    schema: &'a Schema,
    kind: DeclarationKind,
    name: &str,
) -> &'a Declaration {
    schema.declaration(kind, name).unwrap_or_else(|| {
        panic!("expected `{kind} {name}` to be declared")
    })
}

pub(super) fn field_lines<'a>(
    schema: &'a Schema,
    kind: DeclarationKind,
    name: &str,
) -> Vec<&'a str> {
    expect_declaration(schema, kind, name)
        .fields()
        .iter()
        .map(String::as_str)
        .collect()
}

pub(super) fn parse_album() -> Schema {
    parse(ALBUM_SDL)
}
