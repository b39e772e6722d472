use crate::argument_list::ArgumentListTracker;
use crate::Declaration;
use crate::DeclarationKind;
use crate::Schema;
use regex::Regex;
use std::sync::OnceLock;

fn word_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\w+").expect("static regex"))
}

/// Parses schema text into a [`Schema`].
///
/// Parsing is lenient and never fails: blocks with an unrecognized header
/// and declarations that are never closed are dropped without an error.
pub fn parse(content: &str) -> Schema {
    SchemaParser::new().parse(content)
}

/// A declaration whose `{` has been seen but whose `}` has not.
#[derive(Debug)]
struct OpenDeclaration {
    description: Vec<String>,
    fields: Vec<String>,
    /// `None` when the header line had no recognizable `kind Name` prefix.
    /// Such a block is consumed but never indexed.
    kind: Option<DeclarationKind>,
    name: String,
    trailing_tokens: Vec<String>,
}

#[derive(Debug)]
enum ParserState {
    /// Between declarations. Lines that are neither headers nor comments
    /// accumulate here and become the next declaration's description.
    Outside {
        pending_description: Vec<String>,
    },

    InDeclaration(OpenDeclaration),

    /// Inside a declaration, within a field's argument list that has not
    /// yet been closed by `): `.
    ArgumentContinuation(OpenDeclaration),
}
impl ParserState {
    fn outside() -> Self {
        Self::Outside {
            pending_description: vec![],
        }
    }
}

/// Line-oriented state machine that builds a [`Schema`].
///
/// Each physical line is classified in this order:
///
/// 1. Blank lines are skipped.
/// 2. Lines starting with `#` are comments. Comments seen before any other
///    content form the schema header; later ones are description lines for
///    the open (or next) declaration.
/// 3. `scalar ...` lines are recorded, then handled like any other line.
/// 4. Lines ending in `{` open a declaration.
/// 5. Lines with a `}` ahead of any `#` close the open declaration.
/// 6. Everything else is a field line when a declaration is open, and a
///    stray description line otherwise.
#[derive(Debug)]
pub struct SchemaParser {
    line_number: usize,
    schema: Schema,
    seen_non_comment: bool,
    state: ParserState,
}
impl SchemaParser {
    pub fn new() -> Self {
        Self {
            line_number: 0,
            schema: Schema::new(),
            seen_non_comment: false,
            state: ParserState::outside(),
        }
    }

    pub fn parse(mut self, content: &str) -> Schema {
        for line in content.lines() {
            self.line_number += 1;
            self.visit_line(line);
        }
        self.finish()
    }

    fn visit_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        if line.starts_with('#') {
            if self.seen_non_comment {
                self.description_buffer().push(line.to_string());
            } else {
                self.schema.header.push(line.to_string());
            }
            return;
        }
        self.seen_non_comment = true;

        if line.starts_with("scalar") {
            self.schema.scalars.push(line.to_string());
        }

        if line.trim_end().ends_with('{') {
            self.open_declaration(line);
        } else if closes_declaration(line) {
            self.close_declaration();
        } else {
            self.push_line(line);
        }
    }

    fn description_buffer(&mut self) -> &mut Vec<String> {
        match &mut self.state {
            ParserState::Outside { pending_description } => pending_description,
            ParserState::InDeclaration(decl)
            | ParserState::ArgumentContinuation(decl) => &mut decl.description,
        }
    }

    fn open_declaration(&mut self, line: &str) {
        let description = match std::mem::replace(&mut self.state, ParserState::outside()) {
            ParserState::Outside { pending_description } => pending_description,

            ParserState::InDeclaration(decl)
            | ParserState::ArgumentContinuation(decl) => {
                if let Some(kind) = decl.kind {
                    log::debug!(
                        "Discarding unterminated `{kind} {}` declaration \
                        (line {}).",
                        decl.name,
                        self.line_number,
                    );
                    vec![]
                } else {
                    decl.description
                }
            },
        };

        let mut tokens = word_regex().find_iter(line).map(|m| m.as_str());
        let kind_token = tokens.next();
        let name = tokens.next();
        let kind = match (kind_token.and_then(DeclarationKind::from_keyword), name) {
            (Some(kind), Some(_)) => Some(kind),
            _ => {
                log::debug!(
                    "Unrecognized declaration header on line {}: `{}`",
                    self.line_number,
                    line.trim(),
                );
                None
            },
        };

        self.state = ParserState::InDeclaration(OpenDeclaration {
            description,
            fields: vec![],
            kind,
            name: name.unwrap_or_default().to_string(),
            trailing_tokens: tokens.map(str::to_string).collect(),
        });
    }

    fn close_declaration(&mut self) {
        match std::mem::replace(&mut self.state, ParserState::outside()) {
            // A stray `}` outside of any declaration is ignored.
            state @ ParserState::Outside { .. } => self.state = state,

            ParserState::InDeclaration(decl) => self.index(decl),

            ParserState::ArgumentContinuation(decl) => {
                log::debug!(
                    "Declaration `{}` closed inside an open argument list \
                    (line {}).",
                    decl.name,
                    self.line_number,
                );
                self.index(decl);
            },
        }
    }

    fn index(&mut self, decl: OpenDeclaration) {
        let Some(kind) = decl.kind else {
            log::debug!(
                "Dropping block without a recognized kind (closed on line {}).",
                self.line_number,
            );
            return;
        };
        log::trace!("Indexed `{kind} {}`.", decl.name);
        self.schema.insert(
            Declaration::new(kind, decl.name)
                .with_description(decl.description)
                .with_fields(decl.fields)
                .with_trailing_tokens(decl.trailing_tokens),
        );
    }

    fn push_line(&mut self, line: &str) {
        self.state = match std::mem::replace(&mut self.state, ParserState::outside()) {
            ParserState::Outside { mut pending_description } => {
                pending_description.push(line.to_string());
                ParserState::Outside { pending_description }
            },

            ParserState::InDeclaration(decl) =>
                push_field(decl, ArgumentListTracker::default(), line),

            ParserState::ArgumentContinuation(decl) =>
                push_field(decl, ArgumentListTracker::resumed(), line),
        };
    }

    fn finish(mut self) -> Schema {
        match std::mem::replace(&mut self.state, ParserState::outside()) {
            ParserState::Outside { pending_description } =>
                self.schema.trailing = pending_description,

            ParserState::InDeclaration(decl)
            | ParserState::ArgumentContinuation(decl) => log::debug!(
                "Discarding `{}` declaration left open at end of input.",
                decl.name,
            ),
        }
        self.schema
    }
}
impl std::default::Default for SchemaParser {
    fn default() -> Self {
        Self::new()
    }
}

fn closes_declaration(line: &str) -> bool {
    match line.find('}') {
        Some(brace_idx) => line.find('#').is_none_or(|comment_idx| brace_idx < comment_idx),
        None => false,
    }
}

fn push_field(
    mut decl: OpenDeclaration,
    mut arguments: ArgumentListTracker,
    line: &str,
) -> ParserState {
    decl.fields.push(line.to_string());
    arguments.observe(line);
    if arguments.is_open() {
        ParserState::ArgumentContinuation(decl)
    } else {
        ParserState::InDeclaration(decl)
    }
}
