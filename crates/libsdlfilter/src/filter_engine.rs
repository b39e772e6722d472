use crate::filter::CallbackError;
use crate::filter::FieldContext;
use crate::filter::FieldRewrite;
use crate::Declaration;
use crate::DeclarationKind;
use crate::Filter;
use crate::FilterAction;
use crate::Schema;

type Result<T> = std::result::Result<T, FilterError>;

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error(
        "filter #{filter_index}{} failed on `{kind} {declaration}`: {source}",
        .label.as_deref().map(|l| format!(" ({l})")).unwrap_or_default()
    )]
    Callback {
        declaration: String,
        filter_index: usize,
        kind: DeclarationKind,
        label: Option<String>,
        #[source]
        source: CallbackError,
    },
}

/// Applies `filters` to every declaration of `schema`, in order.
pub fn apply_filters(schema: &mut Schema, filters: &[Filter]) -> Result<()> {
    FilterEngine::new(filters).apply(schema)
}

/// Runs an ordered filter pipeline over a [`Schema`].
///
/// For each declaration the filters run in list order, and each one sees the
/// field list as left by the filters before it.
#[derive(Debug)]
pub struct FilterEngine<'a> {
    filters: &'a [Filter],
    log_removals: bool,
}
impl<'a> FilterEngine<'a> {
    pub fn new(filters: &'a [Filter]) -> Self {
        Self {
            filters,
            log_removals: false,
        }
    }

    /// Logs every removed field along with the filter that removed it.
    pub fn log_removals(mut self, enabled: bool) -> Self {
        self.log_removals = enabled;
        self
    }

    pub fn apply(&self, schema: &mut Schema) -> Result<()> {
        for decl in schema.declarations_mut() {
            for (filter_index, filter) in self.filters.iter().enumerate() {
                self.apply_filter(filter_index, filter, decl)
                    .map_err(|source| FilterError::Callback {
                        declaration: decl.name.to_owned(),
                        filter_index,
                        kind: decl.kind,
                        label: filter.label.to_owned(),
                        source,
                    })?;
            }
        }
        Ok(())
    }

    fn apply_filter(
        &self,
        filter_index: usize,
        filter: &Filter,
        decl: &mut Declaration,
    ) -> std::result::Result<(), CallbackError> {
        if !filter.applies_to(decl.kind, decl.name.as_str()) {
            return Ok(());
        }

        match &filter.action {
            FilterAction::Add { line } => {
                decl.additions.push(line.to_owned());
                Ok(())
            },

            FilterAction::Describe { selector, text } => {
                let rewrite = FieldRewrite::Wrap {
                    append: None,
                    prepend: Some(format!("  \"\"\"{text}\"\"\"")),
                };
                rewrite_fields(decl, |field| {
                    if selector.matches(field) {
                        rewrite.apply(field).map(Some)
                    } else {
                        Ok(None)
                    }
                })
            },

            FilterAction::Rewrite { rewrite, selector } =>
                rewrite_fields(decl, |field| {
                    if selector.matches(field) {
                        rewrite.apply(field).map(Some)
                    } else {
                        Ok(None)
                    }
                }),

            FilterAction::Remove { invert, test } => {
                let kind = decl.kind;
                let mut kept = Vec::with_capacity(decl.fields.len());
                for line in decl.fields.drain(..) {
                    let field = FieldContext::new(kind, decl.name.as_str(), line.as_str());
                    if test.evaluate(&field)? == !*invert {
                        self.report_removal(filter_index, filter, &field);
                    } else {
                        kept.push(line);
                    }
                }
                decl.fields = kept;
                Ok(())
            },
        }
    }

    fn report_removal(
        &self,
        filter_index: usize,
        filter: &Filter,
        field: &FieldContext<'_>,
    ) {
        let filter_desc = match &filter.label {
            Some(label) => format!("#{filter_index} ({label})"),
            None => format!("#{filter_index}"),
        };
        if self.log_removals {
            log::info!(
                "Filter {filter_desc} removed `{}` from `{} {}`.",
                field.line.trim(),
                field.declaration_kind,
                field.declaration_name,
            );
        } else {
            log::trace!(
                "Filter {filter_desc} removed `{}` from `{} {}`.",
                field.line.trim(),
                field.declaration_kind,
                field.declaration_name,
            );
        }
    }
}

/// Maps every field line of `decl` through `rewrite`; `Ok(None)` leaves the
/// line as it is.
fn rewrite_fields<F>(
    decl: &mut Declaration,
    rewrite: F,
) -> std::result::Result<(), CallbackError>
where
    F: Fn(&FieldContext<'_>) -> std::result::Result<Option<String>, CallbackError>,
{
    let kind = decl.kind;
    let name = decl.name.as_str();
    for line in decl.fields.iter_mut() {
        let field = FieldContext::new(kind, name, line.as_str());
        if let Some(rewritten) = rewrite(&field)? {
            *line = rewritten;
        }
    }
    Ok(())
}
