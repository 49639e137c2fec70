// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use iced_gallery::logging;

const HELP: &str = "\
iced_gallery - search and browse Pixabay images

USAGE:
    iced_gallery [OPTIONS]

OPTIONS:
    -h, --help               Print this help
    --lang <LOCALE>          UI language (e.g. en-US, fr)
    --query <TEXT>           Initial search text
    --api-key <KEY>          Pixabay API key (overrides ICED_GALLERY_API_KEY)
    --config-dir <DIR>       Directory holding settings.toml
    --data-dir <DIR>         Directory holding the state file
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        query: args.opt_value_from_str("--query")?,
        api_key: args.opt_value_from_str("--api-key")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init();
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    app::run(flags)
}
