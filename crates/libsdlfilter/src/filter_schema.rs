use crate::filter_engine::FilterEngine;
use crate::parser;
use crate::persistence;
use crate::serializer;
use crate::Filter;
use crate::FilterError;
use crate::ReadSourceError;
use crate::SerializeOptions;
use crate::WriteOutputError;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, FilterSchemaError>;

#[derive(Debug, thiserror::Error)]
pub enum FilterSchemaError {
    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Read(#[from] ReadSourceError),

    #[error(transparent)]
    Write(#[from] WriteOutputError),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSchemaOptions {
    /// Log each removed field and the filter responsible at `info` level
    /// (otherwise at `trace`).
    pub log_removals: bool,
    pub serialize: SerializeOptions,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterSchemaOutput {
    /// The backup of the previous destination content, if there was one.
    pub bk_file: Option<PathBuf>,
    pub out: PathBuf,
}

/// Parses `content`, runs `filters` over it, and serializes the result.
pub fn filter_schema_str(
    content: &str,
    filters: &[Filter],
    options: &FilterSchemaOptions,
) -> std::result::Result<String, FilterError> {
    let mut schema = parser::parse(content);
    log::debug!("Parsed {} declarations.", schema.len());

    FilterEngine::new(filters)
        .log_removals(options.log_removals)
        .apply(&mut schema)?;

    Ok(serializer::serialize(&schema, &options.serialize))
}

/// Reads the schema at `source_path`, filters it, and writes the result to
/// `dest_path`, backing up any existing destination first.
///
/// Nothing is written unless reading, parsing, and filtering all succeed.
pub fn filter_schema(
    source_path: impl AsRef<Path>,
    dest_path: impl AsRef<Path>,
    filters: &[Filter],
    options: &FilterSchemaOptions,
) -> Result<FilterSchemaOutput> {
    let source_path = source_path.as_ref();
    let dest_path = dest_path.as_ref();

    let content = persistence::read_source(source_path)?;
    let output = filter_schema_str(content.as_str(), filters, options)?;
    let bk_file = persistence::write_with_backup(dest_path, output.as_str())?;
    log::debug!("Wrote filtered schema from {source_path:?} to {dest_path:?}.");

    Ok(FilterSchemaOutput {
        bk_file,
        out: dest_path.to_path_buf(),
    })
}
