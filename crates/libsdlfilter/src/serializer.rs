use crate::description_injector::DescriptionInjector;
use crate::DescriptionMap;
use crate::Schema;
use regex::Regex;
use std::sync::OnceLock;

fn empty_input_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"\n?\binput\s+\w+\s*\{\s*\}\n?").expect("static regex")
    })
}

/// Which parser-collected side lines are rendered besides the declarations.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SerializationMode {
    /// Only declarations (and their descriptions) are rendered.
    #[default]
    Declarations,

    /// The schema header comments and then the `scalar` lines are rendered
    /// first, and the trailing stray lines last. Scalar lines are not
    /// repeated where they were also collected as description or trailing
    /// lines.
    Preserving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SerializeOptions {
    pub descriptions: DescriptionMap,
    pub mode: SerializationMode,
    /// Strip commas from injected descriptions.
    pub strip_commas: bool,
}
impl std::default::Default for SerializeOptions {
    fn default() -> Self {
        Self {
            descriptions: DescriptionMap::default(),
            mode: SerializationMode::default(),
            strip_commas: true,
        }
    }
}

/// Renders `schema` back to schema text.
///
/// Declarations are emitted grouped by kind, in encounter order, separated
/// by blank lines. The first empty `input` block in the output (if any) is
/// removed; later ones are left as they are.
pub fn serialize(schema: &Schema, options: &SerializeOptions) -> String {
    let injector = DescriptionInjector::new(&options.descriptions, options.strip_commas);
    let mut output = String::new();

    let preserving = options.mode == SerializationMode::Preserving;
    let not_hoisted = |line: &String| !(preserving && schema.scalars().contains(line));

    if preserving {
        push_lines(&mut output, schema.header());
        push_lines(&mut output, schema.scalars());
    }

    for decl in schema.declarations() {
        output.push('\n');
        let description: Vec<_> = injector.description_lines(decl)
            .into_iter()
            .filter(not_hoisted)
            .collect();
        push_lines(&mut output, &description);
        output.push_str(decl.header().as_str());
        output.push('\n');
        push_lines(&mut output, decl.additions());
        push_lines(&mut output, &injector.field_lines(decl));
        output.push_str("}\n");
    }

    if preserving {
        let trailing: Vec<_> = schema.trailing()
            .iter()
            .filter(|line| not_hoisted(*line))
            .cloned()
            .collect();
        if !trailing.is_empty() {
            output.push('\n');
            push_lines(&mut output, &trailing);
        }
    }

    let output = empty_input_regex().replacen(output.as_str(), 1, "");
    output.trim_start_matches('\n').to_string()
}

fn push_lines(output: &mut String, lines: &[String]) {
    for line in lines {
        output.push_str(line.as_str());
        output.push('\n');
    }
}
