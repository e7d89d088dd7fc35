mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, SurfaceArg, parse_cli};
pub(crate) use output::{print_json, print_plain};
