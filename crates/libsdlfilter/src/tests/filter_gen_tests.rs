use crate::apply_filters;
use crate::filter_gen::description_filters;
use crate::filter_gen::filters_for_declarations;
use crate::filter_gen::SelectorTarget;
use crate::parse;
use crate::serialize;
use crate::tests::utils::field_lines;
use crate::DeclarationKind;
use crate::DescriptionMap;
use crate::FieldSelector;
use crate::Filter;
use crate::FilterAction;
use crate::FieldTest;
use crate::Matcher;
use crate::SerializeOptions;

const INPUTS_SDL: &str = "\
input CreateAlbum {
  title: String
  createdAt: String
}
input UpdateAlbum {
  title: String
  updatedAt: String
}
type CreateAlbum {
  title: String
  createdAt: String
}
";

#[test]
fn per_declaration_filters_default_to_inputs() {
    let filters = filters_for_declarations(
        [
            ("CreateAlbum", Matcher::exact(["createdAt"])),
            ("UpdateAlbum", Matcher::exact(["updatedAt"])),
        ],
        &Filter::remove(FieldSelector::default()),
        SelectorTarget::FieldName,
    );
    let mut schema = parse(INPUTS_SDL);

    apply_filters(&mut schema, &filters).unwrap();

    assert_eq!(filters.len(), 2);
    assert!(filters.iter().all(|filter| filter.kind == Some(DeclarationKind::Input)));
    assert_eq!(field_lines(&schema, DeclarationKind::Input, "CreateAlbum"), ["  title: String"]);
    assert_eq!(field_lines(&schema, DeclarationKind::Input, "UpdateAlbum"), ["  title: String"]);
    assert_eq!(
        field_lines(&schema, DeclarationKind::Type, "CreateAlbum"),
        ["  title: String", "  createdAt: String"],
    );
}

#[test]
fn template_kind_and_line_target_are_respected() {
    let filters = filters_for_declarations(
        [("CreateAlbum", Matcher::substring("createdAt: String"))],
        &Filter::keep_only(FieldSelector::default()).for_kind(DeclarationKind::Type),
        SelectorTarget::default(),
    );
    let mut schema = parse(INPUTS_SDL);

    apply_filters(&mut schema, &filters).unwrap();

    let FilterAction::Remove { test: FieldTest::Selector(selector), .. } = &filters[0].action else {
        panic!("expected a selector-based removal");
    };
    assert!(selector.field_name.is_none());
    assert!(selector.line.is_some());
    assert_eq!(
        field_lines(&schema, DeclarationKind::Type, "CreateAlbum"),
        ["  createdAt: String"],
    );
    assert_eq!(
        field_lines(&schema, DeclarationKind::Input, "CreateAlbum"),
        ["  title: String", "  createdAt: String"],
    );
}

#[test]
fn generated_names_match_exactly() {
    let filters = filters_for_declarations(
        [("Album", Matcher::exact(["title"]))],
        &Filter::remove(FieldSelector::default()).for_kind(DeclarationKind::Type),
        SelectorTarget::FieldName,
    );
    let mut schema = parse("\
type Album {
  title: String
}
type AlbumPage {
  title: String
}
");

    apply_filters(&mut schema, &filters).unwrap();

    assert!(field_lines(&schema, DeclarationKind::Type, "Album").is_empty());
    assert_eq!(field_lines(&schema, DeclarationKind::Type, "AlbumPage"), ["  title: String"]);
}

#[test]
fn description_filters_prepend_descriptions_in_the_pipeline() {
    let mut descriptions = DescriptionMap::new();
    descriptions
        .insert(DeclarationKind::Input, "CreateAlbum", "title", "The title")
        .insert_node(DeclarationKind::Input, "CreateAlbum", "Ignored here");
    let filters = description_filters(&descriptions);
    let mut schema = parse(INPUTS_SDL);

    apply_filters(&mut schema, &filters).unwrap();

    assert_eq!(filters.len(), 1);
    assert_eq!(
        field_lines(&schema, DeclarationKind::Input, "CreateAlbum"),
        ["  \"\"\"The title\"\"\"\n  title: String", "  createdAt: String"],
    );
    let output = serialize(&schema, &SerializeOptions::default());
    assert!(output.starts_with("\
input CreateAlbum {
  \"\"\"The title\"\"\"
  title: String
  createdAt: String
}
"));
    assert!(!output.contains("Ignored here"));
}

#[test]
fn description_filters_follow_insertion_order() {
    let mut descriptions = DescriptionMap::new();
    descriptions
        .insert(DeclarationKind::Type, "Zebra", "stripes", "Stripes")
        .insert(DeclarationKind::Input, "Album", "title", "Title")
        .insert(DeclarationKind::Type, "Album", "name", "Name")
        .insert(DeclarationKind::Type, "Zebra", "legs", "Legs");

    let entries: Vec<_> = descriptions.field_entries()
        .map(|(kind, declaration, field, _)| (kind, declaration, field))
        .collect();
    let filters = description_filters(&descriptions);

    assert_eq!(entries, [
        (DeclarationKind::Type, "Zebra", "stripes"),
        (DeclarationKind::Type, "Zebra", "legs"),
        (DeclarationKind::Type, "Album", "name"),
        (DeclarationKind::Input, "Album", "title"),
    ]);
    let texts: Vec<_> = filters.iter()
        .map(|filter| match &filter.action {
            FilterAction::Describe { text, .. } => text.as_str(),
            other => panic!("expected a describe filter, got {other:?}"),
        })
        .collect();
    assert_eq!(texts, ["Stripes", "Legs", "Name", "Title"]);
}
