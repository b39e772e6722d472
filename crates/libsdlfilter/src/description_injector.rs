use crate::argument_list::leading_token;
use crate::argument_list::ArgumentListTracker;
use crate::argument_list::LineRole;
use crate::Declaration;
use crate::DescriptionMap;
use crate::NODE_DESCRIPTION_KEY;

/// Renders `text` as a single-line block-string description.
pub fn format_description(text: &str, strip_commas: bool) -> String {
    let text =
        if strip_commas {
            text.replace(',', "")
        } else {
            text.to_string()
        };
    format!("\"\"\" {text}\"\"\"")
}

/// Injects descriptions from a [`DescriptionMap`] while rendering a
/// declaration.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DescriptionInjector<'a> {
    descriptions: &'a DescriptionMap,
    strip_commas: bool,
}
impl<'a> DescriptionInjector<'a> {
    pub fn new(descriptions: &'a DescriptionMap, strip_commas: bool) -> Self {
        Self {
            descriptions,
            strip_commas,
        }
    }

    /// The description lines to render above the declaration header. A
    /// `__node` entry replaces whatever the parser collected.
    pub fn description_lines(&self, decl: &Declaration) -> Vec<String> {
        let node_text = self.descriptions
            .node(decl.kind(), decl.name())
            .filter(|text| !text.is_empty());
        match node_text {
            Some(text) => vec![format_description(text, self.strip_commas)],
            None => decl.description()
                .iter()
                .filter(|line| !line.is_empty())
                .cloned()
                .collect(),
        }
    }

    /// The field lines of `decl`, with indented `#` comments promoted to
    /// descriptions and mapped descriptions inserted above the fields they
    /// name.
    ///
    /// Field entries that filters rewrote into several lines are split back
    /// into physical lines first. Lines continuing a multi-line argument
    /// list never receive a mapped description, even when their leading
    /// token matches a map entry.
    pub fn field_lines(&self, decl: &Declaration) -> Vec<String> {
        let field_descriptions =
            self.descriptions.for_declaration(decl.kind(), decl.name());
        let mut arguments = ArgumentListTracker::default();
        let mut lines = Vec::with_capacity(decl.fields().len());

        for line in decl.fields().iter().flat_map(|field| field.lines()) {
            let trimmed = line.trim();
            if let Some(comment) = trimmed.strip_prefix('#') {
                lines.push(format!("  {}", format_description(comment, self.strip_commas)));
                continue;
            }

            let role = arguments.observe(line);
            if role == LineRole::FieldStart
                && let Some((token, _)) = leading_token(line)
                && token != NODE_DESCRIPTION_KEY
                && let Some(text) = field_descriptions.and_then(|fields| fields.get(token))
                && !text.is_empty() {
                lines.push(format!("  {}", format_description(text, self.strip_commas)));
            }
            lines.push(line.to_owned());
        }

        lines
    }
}
