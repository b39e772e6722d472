//! Line-oriented filtering of GraphQL schema (SDL) files.
//!
//! The pipeline has three pure stages:
//!
//! 1. [`parse`] reads schema text into a [`Schema`] of `type`, `input`,
//!    `enum`, and `interface` declarations whose field lines are kept
//!    verbatim.
//! 2. [`apply_filters`] runs an ordered list of [`Filter`]s that remove,
//!    keep, rewrite, or add field lines.
//! 3. [`serialize`] renders the schema back to text, injecting descriptions
//!    from a [`DescriptionMap`].
//!
//! [`filter_schema`] wraps the pipeline with reading the source file and
//! writing (and backing up) the destination file.

mod argument_list;
pub mod config;
mod declaration;
mod declaration_kind;
mod description_injector;
mod description_map;
mod field_tokens;
mod filter;
mod filter_engine;
pub mod filter_gen;
mod filter_schema;
mod matcher;
mod parser;
pub mod persistence;
mod schema;
mod serializer;

pub use declaration::Declaration;
pub use declaration_kind::DeclarationKind;
pub use description_injector::format_description;
pub use description_map::DescriptionMap;
pub use description_map::NODE_DESCRIPTION_KEY;
pub use field_tokens::FieldTokens;
pub use filter::CallbackError;
pub use filter::FieldContext;
pub use filter::FieldPredicateFn;
pub use filter::FieldRewrite;
pub use filter::FieldRewriteFn;
pub use filter::FieldSelector;
pub use filter::FieldTest;
pub use filter::Filter;
pub use filter::FilterAction;
pub use filter_engine::apply_filters;
pub use filter_engine::FilterEngine;
pub use filter_engine::FilterError;
pub use filter_schema::filter_schema;
pub use filter_schema::filter_schema_str;
pub use filter_schema::FilterSchemaError;
pub use filter_schema::FilterSchemaOptions;
pub use filter_schema::FilterSchemaOutput;
pub use matcher::matches;
pub use matcher::Matcher;
pub use parser::parse;
pub use parser::SchemaParser;
pub use persistence::ReadSourceError;
pub use persistence::WriteOutputError;
pub use schema::Schema;
pub use serializer::serialize;
pub use serializer::SerializationMode;
pub use serializer::SerializeOptions;

#[cfg(test)]
mod tests;
