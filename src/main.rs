// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use iced_gallery::logging;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
iced_gallery: product image gallery

USAGE:
  iced_gallery [OPTIONS] [PATH...]

ARGS:
  PATH...               Image files, folders or gallery manifests (.toml)

OPTIONS:
  --lang <ID>           Interface language, e.g. en-US or fr
  --config-dir <DIR>    Directory holding settings.toml
  --style <HINT>        Styling hint: compact, square, borderless
  --start <INDEX>       Slide selected at startup (0-based)
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        style: args.opt_value_from_str("--style")?,
        start_index: args.opt_value_from_str("--start")?.unwrap_or(0),
        paths: args.finish().into_iter().map(PathBuf::from).collect(),
    };
    Ok(Some(flags))
}

fn main() -> ExitCode {
    logging::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
