use crate::DeclarationKind;
use crate::DescriptionMap;
use crate::FieldRewrite;
use crate::FieldSelector;
use crate::FieldTest;
use crate::Filter;
use crate::FilterAction;
use crate::Matcher;
use crate::SerializeOptions;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid filter config {path:?}: {message}")]
    Invalid {
        message: String,
        path: PathBuf,
    },

    #[error("failed to read filter config {path:?}: {err}")]
    Read {
        err: std::io::Error,
        path: PathBuf,
    },
}

/// A JSON filter configuration file.
///
/// ```json
/// {
///   "filters": [
///     { "type": "type", "fieldName": "id" },
///     { "type": "input", "name": "^Create", "fieldName": ["createdAt"] }
///   ],
///   "descriptions": { "type": { "Album": { "name": "The album name" } } },
///   "removeCommaInDescription": true
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterConfig {
    #[serde(default)]
    pub descriptions: DescriptionMap,

    #[serde(default)]
    pub filters: Vec<FilterSpec>,

    #[serde(default = "default_remove_comma_in_description")]
    pub remove_comma_in_description: bool,
}
impl FilterConfig {
    /// Converts the config into a filter pipeline and serializer options.
    pub fn into_pipeline(self) -> (Vec<Filter>, SerializeOptions) {
        let filters = self.filters
            .into_iter()
            .flat_map(FilterSpec::into_filters)
            .collect();
        let options = SerializeOptions {
            descriptions: self.descriptions,
            strip_commas: self.remove_comma_in_description,
            ..SerializeOptions::default()
        };
        (filters, options)
    }
}
impl std::default::Default for FilterConfig {
    fn default() -> Self {
        Self {
            descriptions: DescriptionMap::default(),
            filters: vec![],
            remove_comma_in_description: default_remove_comma_in_description(),
        }
    }
}

fn default_remove_comma_in_description() -> bool {
    true
}

/// The serialized form of one filter.
///
/// Every key is optional. A spec with `transformField` rewrites the fields
/// it selects; otherwise it removes them (or, with `invert`, keeps only
/// them). `add` contributes an extra line regardless.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterSpec {
    pub add: Option<String>,
    pub except: Option<Matcher>,
    pub except_name: Option<Matcher>,
    pub field_name: Option<Matcher>,
    #[serde(default)]
    pub invert: bool,
    #[serde(rename = "type")]
    pub kind: Option<DeclarationKind>,
    pub label: Option<String>,
    pub line: Option<Matcher>,
    pub name: Option<Matcher>,
    pub transform_field: Option<TransformSpec>,
}
impl FilterSpec {
    pub fn into_filters(self) -> Vec<Filter> {
        let gate = |action: FilterAction| Filter {
            action,
            kind: self.kind,
            label: self.label.to_owned(),
            name: self.name.to_owned(),
            name_exception: self.except_name.to_owned(),
        };

        let mut filters = vec![];
        if let Some(line) = &self.add {
            filters.push(gate(FilterAction::Add { line: line.to_owned() }));
        }

        let selector = FieldSelector {
            exception: self.except.to_owned(),
            field_name: self.field_name.to_owned(),
            line: self.line.to_owned(),
        };
        let has_field_test = selector.field_name.is_some() || selector.line.is_some();
        match &self.transform_field {
            Some(transform) => filters.push(gate(FilterAction::Rewrite {
                rewrite: FieldRewrite::Wrap {
                    append: transform.append.to_owned(),
                    prepend: transform.prepend.to_owned(),
                },
                selector,
            })),

            // An add-only spec has nothing to remove.
            None if self.add.is_none() || has_field_test || self.invert =>
                filters.push(gate(FilterAction::Remove {
                    invert: self.invert,
                    test: FieldTest::Selector(selector),
                })),

            None => (),
        }

        filters
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformSpec {
    pub append: Option<String>,
    pub prepend: Option<String>,
}

pub fn load_config(path: &Path) -> Result<FilterConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|err| ConfigError::Read {
            err,
            path: path.to_path_buf(),
        })?;
    let config = load_config_from_str(contents.as_str(), path)?;
    log::debug!(
        "Loaded {} filter specs from {path:?}.",
        config.filters.len(),
    );
    Ok(config)
}

/// Parses a JSON filter config. `path` is only used in error messages.
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<FilterConfig> {
    serde_json::from_str(contents).map_err(|err| ConfigError::Invalid {
        message: err.to_string(),
        path: path.to_path_buf(),
    })
}
