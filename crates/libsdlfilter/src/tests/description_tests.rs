use crate::filter_schema_str;
use crate::format_description;
use crate::parse;
use crate::serialize;
use crate::tests::utils::parse_album;
use crate::tests::utils::ALBUM_SDL;
use crate::DeclarationKind;
use crate::DescriptionMap;
use crate::FieldSelector;
use crate::Filter;
use crate::FilterSchemaOptions;
use crate::Matcher;
use crate::SerializeOptions;

fn with_descriptions(descriptions: DescriptionMap) -> SerializeOptions {
    SerializeOptions {
        descriptions,
        ..SerializeOptions::default()
    }
}

#[test]
fn format_description_strips_commas_when_asked() {
    assert_eq!(format_description("a, b", true), r#"""" a b""""#);
    assert_eq!(format_description("a, b", false), r#"""" a, b""""#);
}

#[test]
fn field_description_is_inserted_above_its_field() {
    let mut descriptions = DescriptionMap::new();
    descriptions.insert(DeclarationKind::Type, "Album", "name", "The name");

    let output = serialize(&parse_album(), &with_descriptions(descriptions));

    assert_eq!(output, "\
type Album {
  id: ID
  \"\"\" The name\"\"\"
  name: String
}
");
}

#[test]
fn descriptions_for_other_declarations_are_not_injected() {
    let mut descriptions = DescriptionMap::new();
    descriptions
        .insert(DeclarationKind::Input, "Album", "name", "Wrong kind")
        .insert(DeclarationKind::Type, "Artist", "name", "Wrong declaration");

    let output = serialize(&parse_album(), &with_descriptions(descriptions));

    assert_eq!(output, ALBUM_SDL);
}

#[test]
fn descriptions_for_removed_fields_are_not_rendered() {
    let mut descriptions = DescriptionMap::new();
    descriptions.insert(DeclarationKind::Type, "Album", "id", "The id");
    let options = FilterSchemaOptions {
        serialize: with_descriptions(descriptions),
        ..FilterSchemaOptions::default()
    };
    let filters = [Filter::remove(FieldSelector::field_name(Matcher::exact(["id"])))];

    let output = filter_schema_str(ALBUM_SDL, &filters, &options).unwrap();

    assert_eq!(output, "type Album {\n  name: String\n}\n");
    assert!(!output.contains("\"\"\""));
}

#[test]
fn node_description_replaces_the_parsed_description() {
    let mut descriptions = DescriptionMap::new();
    descriptions.insert_node(DeclarationKind::Type, "Album", "An album, really");

    let schema = parse("scalar Date\n# Old description\ntype Album {\n  id: ID\n}\n");
    let stripped = serialize(&schema, &with_descriptions(descriptions.clone()));
    let kept = serialize(&schema, &SerializeOptions {
        strip_commas: false,
        ..with_descriptions(descriptions)
    });

    assert_eq!(stripped, "\"\"\" An album really\"\"\"\ntype Album {\n  id: ID\n}\n");
    assert_eq!(kept, "\"\"\" An album, really\"\"\"\ntype Album {\n  id: ID\n}\n");
}

#[test]
fn node_key_is_never_injected_as_a_field() {
    let mut descriptions = DescriptionMap::new();
    descriptions.insert_node(DeclarationKind::Type, "Album", "An album");
    let schema = parse("type Album {\n  __node: String\n}\n");

    let output = serialize(&schema, &with_descriptions(descriptions.clone()));

    assert_eq!(output.matches("An album").count(), 1);
    assert!(output.starts_with("\"\"\" An album\"\"\"\ntype Album {"));
    assert_eq!(descriptions.field_entries().count(), 0);
}

#[test]
fn empty_descriptions_are_ignored() {
    let mut descriptions = DescriptionMap::new();
    descriptions
        .insert_node(DeclarationKind::Type, "Album", "")
        .insert(DeclarationKind::Type, "Album", "name", "");

    let output = serialize(&parse_album(), &with_descriptions(descriptions));

    assert_eq!(output, ALBUM_SDL);
}

#[test]
fn indented_comments_are_promoted_to_descriptions() {
    let schema = parse("\
type Album {
  # The primary key, unique
  id: ID
}
");

    let output = serialize(&schema, &SerializeOptions::default());

    assert_eq!(output, "\
type Album {
  \"\"\"  The primary key unique\"\"\"
  id: ID
}
");
}

#[test]
fn argument_list_continuations_are_not_described() {
    let schema = parse("\
type Album {
  tracks(
    first: Int
  ): [Track!]!
  first: Int
}
");
    let mut descriptions = DescriptionMap::new();
    descriptions
        .insert(DeclarationKind::Type, "Album", "tracks", "The tracks")
        .insert(DeclarationKind::Type, "Album", "first", "Top-level first");

    let output = serialize(&schema, &with_descriptions(descriptions));

    assert_eq!(output, "\
type Album {
  \"\"\" The tracks\"\"\"
  tracks(
    first: Int
  ): [Track!]!
  \"\"\" Top-level first\"\"\"
  first: Int
}
");
}

#[test]
fn rewritten_multi_line_entries_are_split_before_injection() {
    let mut descriptions = DescriptionMap::new();
    descriptions.insert(DeclarationKind::Type, "Album", "name", "The name");
    let options = FilterSchemaOptions {
        serialize: with_descriptions(descriptions),
        ..FilterSchemaOptions::default()
    };
    let filters = [
        Filter::wrap(
            FieldSelector::field_name(Matcher::exact(["name"])),
            Some("  # Display name"),
            None,
        ),
    ];

    let output = filter_schema_str(ALBUM_SDL, &filters, &options).unwrap();

    assert_eq!(output, "\
type Album {
  id: ID
  \"\"\"  Display name\"\"\"
  \"\"\" The name\"\"\"
  name: String
}
");
}

#[test]
fn description_map_deserializes_from_nested_objects() {
    let descriptions: DescriptionMap = serde_json::from_str(r#"{
        "type": { "Album": { "__node": "An album", "name": "The name" } },
        "input": { "AlbumInput": { "name": "New name" } }
    }"#).unwrap();

    assert_eq!(descriptions.node(DeclarationKind::Type, "Album"), Some("An album"));
    assert_eq!(descriptions.field(DeclarationKind::Type, "Album", "name"), Some("The name"));
    assert_eq!(
        descriptions.field(DeclarationKind::Input, "AlbumInput", "name"),
        Some("New name"),
    );
    assert_eq!(descriptions.field(DeclarationKind::Enum, "Album", "name"), None);
    assert_eq!(descriptions.field_entries().count(), 2);
}
