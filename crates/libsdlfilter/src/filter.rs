use crate::matcher::matches;
use crate::DeclarationKind;
use crate::FieldTokens;
use crate::Matcher;
use std::sync::Arc;

/// Error type returned by caller-supplied filter callbacks.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

pub type FieldPredicateFn =
    dyn Fn(&FieldContext<'_>) -> Result<bool, CallbackError> + Send + Sync;

pub type FieldRewriteFn =
    dyn Fn(&FieldContext<'_>) -> Result<String, CallbackError> + Send + Sync;

/// Everything a filter callback may inspect about one field line.
#[derive(Clone, Copy, Debug)]
pub struct FieldContext<'a> {
    pub declaration_kind: DeclarationKind,
    pub declaration_name: &'a str,
    pub line: &'a str,
    pub tokens: FieldTokens<'a>,
}
impl<'a> FieldContext<'a> {
    pub fn new(
        declaration_kind: DeclarationKind,
        declaration_name: &'a str,
        line: &'a str,
    ) -> Self {
        Self {
            declaration_kind,
            declaration_name,
            line,
            tokens: FieldTokens::parse(line),
        }
    }
}

/// Selects field lines by their name token and/or their raw text.
///
/// A line is selected when either test accepts it; `exception` suppresses
/// both tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldSelector {
    pub exception: Option<Matcher>,
    pub field_name: Option<Matcher>,
    pub line: Option<Matcher>,
}
impl FieldSelector {
    pub fn field_name(matcher: Matcher) -> Self {
        Self {
            field_name: Some(matcher),
            ..Self::default()
        }
    }

    pub fn line(matcher: Matcher) -> Self {
        Self {
            line: Some(matcher),
            ..Self::default()
        }
    }

    pub fn except(mut self, exception: Matcher) -> Self {
        self.exception = Some(exception);
        self
    }

    pub fn matches(&self, field: &FieldContext<'_>) -> bool {
        matches(self.field_name.as_ref(), field.tokens.name, self.exception.as_ref())
            || matches(self.line.as_ref(), field.line, self.exception.as_ref())
    }
}

#[derive(Clone)]
pub enum FieldTest {
    Selector(FieldSelector),
    Custom(Arc<FieldPredicateFn>),
}
impl FieldTest {
    pub fn evaluate(&self, field: &FieldContext<'_>) -> Result<bool, CallbackError> {
        match self {
            Self::Selector(selector) => Ok(selector.matches(field)),
            Self::Custom(predicate) => predicate(field),
        }
    }
}
impl std::fmt::Debug for FieldTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Selector(selector) => f.debug_tuple("Selector").field(selector).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Clone)]
pub enum FieldRewrite {
    /// Surrounds the line with `prepend` and `append` lines. Absent or empty
    /// parts are omitted.
    Wrap {
        append: Option<String>,
        prepend: Option<String>,
    },
    Custom(Arc<FieldRewriteFn>),
}
impl FieldRewrite {
    pub fn apply(&self, field: &FieldContext<'_>) -> Result<String, CallbackError> {
        match self {
            Self::Wrap { append, prepend } => Ok(
                [prepend.as_deref(), Some(field.line), append.as_deref()]
                    .into_iter()
                    .flatten()
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            Self::Custom(rewrite) => rewrite(field),
        }
    }
}
impl std::fmt::Debug for FieldRewrite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wrap { append, prepend } => f.debug_struct("Wrap")
                .field("append", append)
                .field("prepend", prepend)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// What a [`Filter`] does to each declaration it applies to.
#[derive(Clone, Debug)]
pub enum FilterAction {
    /// Appends `line` to the declaration's additions, rendered ahead of its
    /// fields.
    Add {
        line: String,
    },

    /// Prepends a `"""text"""` description line to each selected field.
    Describe {
        selector: FieldSelector,
        text: String,
    },

    /// Removes each field for which `test` returns `!invert`. With `invert`
    /// set, only the fields selected by `test` are kept.
    Remove {
        invert: bool,
        test: FieldTest,
    },

    /// Replaces each selected field line by the output of `rewrite`.
    Rewrite {
        rewrite: FieldRewrite,
        selector: FieldSelector,
    },
}

/// One step of a filter pipeline.
///
/// A filter is gated by an optional declaration kind and an optional
/// declaration-name matcher (with exception); its [`FilterAction`] runs
/// against every declaration that passes the gate.
#[derive(Clone, Debug)]
pub struct Filter {
    pub action: FilterAction,
    pub kind: Option<DeclarationKind>,
    pub label: Option<String>,
    pub name: Option<Matcher>,
    pub name_exception: Option<Matcher>,
}
impl Filter {
    pub fn new(action: FilterAction) -> Self {
        Self {
            action,
            kind: None,
            label: None,
            name: None,
            name_exception: None,
        }
    }

    pub fn add(line: impl Into<String>) -> Self {
        Self::new(FilterAction::Add { line: line.into() })
    }

    pub fn describe(selector: FieldSelector, text: impl Into<String>) -> Self {
        Self::new(FilterAction::Describe {
            selector,
            text: text.into(),
        })
    }

    /// Keeps only the fields `selector` selects.
    pub fn keep_only(selector: FieldSelector) -> Self {
        Self::new(FilterAction::Remove {
            invert: true,
            test: FieldTest::Selector(selector),
        })
    }

    pub fn remove(selector: FieldSelector) -> Self {
        Self::new(FilterAction::Remove {
            invert: false,
            test: FieldTest::Selector(selector),
        })
    }

    pub fn remove_where<F>(predicate: F) -> Self
    where
        F: Fn(&FieldContext<'_>) -> Result<bool, CallbackError> + Send + Sync + 'static,
    {
        Self::new(FilterAction::Remove {
            invert: false,
            test: FieldTest::Custom(Arc::new(predicate)),
        })
    }

    pub fn rewrite(selector: FieldSelector, rewrite: FieldRewrite) -> Self {
        Self::new(FilterAction::Rewrite { rewrite, selector })
    }

    pub fn rewrite_with<F>(selector: FieldSelector, rewrite: F) -> Self
    where
        F: Fn(&FieldContext<'_>) -> Result<String, CallbackError> + Send + Sync + 'static,
    {
        Self::rewrite(selector, FieldRewrite::Custom(Arc::new(rewrite)))
    }

    pub fn wrap(
        selector: FieldSelector,
        prepend: Option<&str>,
        append: Option<&str>,
    ) -> Self {
        Self::rewrite(selector, FieldRewrite::Wrap {
            append: append.map(str::to_string),
            prepend: prepend.map(str::to_string),
        })
    }

    pub fn for_kind(mut self, kind: DeclarationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn for_declarations(mut self, name: Matcher) -> Self {
        self.name = Some(name);
        self
    }

    pub fn except_declarations(mut self, exception: Matcher) -> Self {
        self.name_exception = Some(exception);
        self
    }

    /// Flips a `Remove` action between remove-on-match and keep-on-match.
    /// Other actions are unaffected.
    pub fn inverted(mut self) -> Self {
        if let FilterAction::Remove { invert, .. } = &mut self.action {
            *invert = !*invert;
        }
        self
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether this filter runs against the declaration `kind name`.
    pub fn applies_to(&self, kind: DeclarationKind, name: &str) -> bool {
        if self.kind.is_some_and(|filter_kind| filter_kind != kind) {
            return false;
        }
        match &self.name {
            Some(matcher) => matches(Some(matcher), name, self.name_exception.as_ref()),
            None => !self.name_exception.as_ref().is_some_and(|exception| exception.is_match(name)),
        }
    }

    /// Whether this filter selects `field`: the declaration gate passes and
    /// the action's field test accepts the line. `Add` actions select no
    /// fields.
    pub fn matches(&self, field: &FieldContext<'_>) -> Result<bool, CallbackError> {
        if !self.applies_to(field.declaration_kind, field.declaration_name) {
            return Ok(false);
        }
        self.action.selects(field)
    }
}
impl FilterAction {
    pub(crate) fn selects(&self, field: &FieldContext<'_>) -> Result<bool, CallbackError> {
        match self {
            Self::Add { .. } => Ok(false),
            Self::Describe { selector, .. }
            | Self::Rewrite { selector, .. } => Ok(selector.matches(field)),
            Self::Remove { test, .. } => test.evaluate(field),
        }
    }
}
