use libsdlfilter::FilterSchemaOutput;
use std::process::ExitCode;

const GREEN_CHECK: &str = "\x1b[32m\u{2714}\x1b[0m";
const RED_X: &str = "\x1b[31m\u{2718}\x1b[0m";

/// The outcome of one `sdl-filter` invocation.
#[derive(Debug)]
pub(crate) enum Report {
    /// A dry run: the filtered schema, for stdout.
    Rendered(String),

    Written(FilterSchemaOutput),

    Failed(anyhow::Error),
}
impl Report {
    /// Prints the report (schema text and success notes to stdout, failures
    /// to stderr) and returns the process exit code.
    pub(crate) fn emit(self) -> ExitCode {
        match self {
            Self::Rendered(schema) => {
                print!("{schema}");
                ExitCode::SUCCESS
            },

            Self::Written(output) => {
                println!("{GREEN_CHECK} Wrote filtered schema to {:?}.", output.out);
                if let Some(bk_file) = &output.bk_file {
                    println!("  * Backed up the previous output to {bk_file:?}.");
                }
                ExitCode::SUCCESS
            },

            Self::Failed(err) => {
                eprintln!("{RED_X} {err:#}");
                ExitCode::FAILURE
            },
        }
    }
}
