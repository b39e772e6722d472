use crate::DeclarationKind;
use crate::DescriptionMap;
use crate::FieldSelector;
use crate::Filter;
use crate::FilterAction;
use crate::FieldTest;
use crate::Matcher;

/// Which slot of a [`FieldSelector`] a generated filter's matcher fills.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SelectorTarget {
    FieldName,
    #[default]
    Line,
}

/// Builds one filter per entry of `matchers`, keyed by declaration name.
///
/// Each generated filter starts from `template` (its action's selector slot
/// named by `target` is replaced), is restricted to the declaration with
/// exactly that name, and applies to `input` declarations unless the
/// template names another kind.
pub fn filters_for_declarations<'a, I>(
    matchers: I,
    template: &Filter,
    target: SelectorTarget,
) -> Vec<Filter>
where
    I: IntoIterator<Item = (&'a str, Matcher)>,
{
    matchers.into_iter()
        .map(|(declaration, matcher)| {
            let mut filter = template.clone();
            filter.kind = filter.kind.or(Some(DeclarationKind::Input));
            filter.name = Some(Matcher::exact([declaration]));
            if let Some(selector) = selector_mut(&mut filter.action) {
                match target {
                    SelectorTarget::FieldName => selector.field_name = Some(matcher),
                    SelectorTarget::Line => selector.line = Some(matcher),
                }
            }
            filter
        })
        .collect()
}

/// Builds a `Describe` filter for every field entry in `descriptions`.
///
/// Unlike render-time injection, these filters run inside the pipeline, so
/// filters placed after them see the description lines.
pub fn description_filters(descriptions: &DescriptionMap) -> Vec<Filter> {
    descriptions.field_entries()
        .map(|(kind, declaration, field, text)| {
            Filter::describe(FieldSelector::field_name(Matcher::exact([field])), text)
                .for_kind(kind)
                .for_declarations(Matcher::exact([declaration]))
        })
        .collect()
}

fn selector_mut(action: &mut FilterAction) -> Option<&mut FieldSelector> {
    match action {
        FilterAction::Add { .. } => None,
        FilterAction::Describe { selector, .. }
        | FilterAction::Rewrite { selector, .. }
        | FilterAction::Remove { test: FieldTest::Selector(selector), .. } => Some(selector),
        FilterAction::Remove { test: FieldTest::Custom(_), .. } => None,
    }
}
