// SPDX-License-Identifier: MPL-2.0
use weaving_con::app::{self, paths, Flags, Tab};
use weaving_con::logging::{self, Verbosity};

const HELP: &str = "\
BasketWeavingCon companion

USAGE:
  weaving_con [OPTIONS]

OPTIONS:
  --lang <LOCALE>       UI language (en-US, fr)
  --data-dir <DIR>      Directory holding the name card files
  --config-dir <DIR>    Directory holding settings.toml
  --tab <TAB>           Tab shown at startup: info, talks or name-card
  -v, --verbose         Debug logging (RUST_LOG overrides)
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbosity = if args.contains(["-v", "--verbose"]) {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    logging::init(verbosity);

    let flags = Flags {
        lang: optional(&mut args, "--lang"),
        data_dir: optional(&mut args, "--data-dir"),
        config_dir: optional(&mut args, "--config-dir"),
        tab: optional::<Tab>(&mut args, "--tab"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

/// Reads an optional `--key value` pair. A malformed value is logged and skipped.
fn optional<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, key, "ignoring invalid argument");
            None
        }
    }
}
