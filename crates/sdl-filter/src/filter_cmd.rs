use anyhow::Context;
use crate::Report;
use libsdlfilter::config::load_config;
use libsdlfilter::config::FilterConfig;
use libsdlfilter::filter_schema;
use libsdlfilter::filter_schema_str;
use libsdlfilter::persistence::read_source;
use libsdlfilter::Filter;
use libsdlfilter::FilterSchemaOptions;
use libsdlfilter::SerializationMode;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct FilterCmd {
    #[arg(
        help="Path to a JSON filter config. Without one the schema is only \
             normalized.",
        long,
    )]
    config: Option<PathBuf>,

    #[arg(
        help="Print the filtered schema to stdout instead of writing DEST.",
        long,
    )]
    dry_run: bool,

    #[arg(
        help="Log every removed field and the filter that removed it.",
        long,
    )]
    log_removals: bool,

    #[arg(
        help="Also emit the leading header comments, the scalar \
             declarations, and any trailing lines after the last block.",
        long,
    )]
    preserve: bool,

    #[arg(
        help="Path to the schema file to filter.",
        name="SOURCE",
    )]
    source: PathBuf,

    #[arg(
        help="Path to write the filtered schema to. An existing file is \
             first backed up to `.bk.<name>` beside it.",
        name="DEST",
    )]
    dest: PathBuf,
}
impl FilterCmd {
    pub(crate) fn run(self) -> Report {
        match self.try_run() {
            Ok(report) => report,
            Err(err) => Report::Failed(err),
        }
    }

    fn try_run(&self) -> anyhow::Result<Report> {
        let (filters, options) = self.pipeline()
            .context("invalid filter configuration")?;
        log::debug!("Running {} filters over {:?}.", filters.len(), self.source);

        if self.dry_run {
            let content = read_source(&self.source)?;
            let schema = filter_schema_str(content.as_str(), &filters, &options)
                .with_context(|| format!("failed to filter {:?}", self.source))?;
            return Ok(Report::Rendered(schema));
        }

        let output = filter_schema(&self.source, &self.dest, &filters, &options)
            .with_context(|| format!("failed to filter {:?}", self.source))?;
        Ok(Report::Written(output))
    }

    fn pipeline(&self) -> anyhow::Result<(Vec<Filter>, FilterSchemaOptions)> {
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None => {
                log::debug!("No --config given; running without filters.");
                FilterConfig::default()
            },
        };

        let (filters, mut serialize) = config.into_pipeline();
        if self.preserve {
            serialize.mode = SerializationMode::Preserving;
        }
        Ok((filters, FilterSchemaOptions {
            log_removals: self.log_removals,
            serialize,
        }))
    }
}
