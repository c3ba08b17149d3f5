//! Command-line and environment configuration.

use std::ffi::OsString;

use pico_args::Arguments;

pub const HELP: &str = "\
FreeCell solitaire in the terminal

USAGE:
  freecell-rs [OPTIONS]

OPTIONS:
  --seed N              Deal a reproducible game  [env: FREECELL_SEED]
  --theme NAME          green, blue or red (overrides the saved theme)
  --no-save             Do not read or write the preferences file

FLAGS:
  -h, --help            Print help information

Set RUST_LOG=debug to trace moves on stderr.
";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub theme: Option<String>,
    pub persist: bool,
    pub show_help: bool,
}

impl Config {
    /// Parse the process arguments, falling back to `FREECELL_SEED`.
    pub fn from_env() -> Result<Self, pico_args::Error> {
        let env_seed = std::env::var("FREECELL_SEED").ok();
        Self::parse(std::env::args_os().skip(1).collect(), env_seed.as_deref())
    }

    pub fn parse(args: Vec<OsString>, env_seed: Option<&str>) -> Result<Self, pico_args::Error> {
        let mut pargs = Arguments::from_vec(args);

        let show_help = pargs.contains(["-h", "--help"]);
        let seed = match pargs.opt_value_from_str("--seed")? {
            Some(seed) => Some(seed),
            None => env_seed.and_then(|s| s.trim().parse().ok()),
        };
        let theme = pargs.opt_value_from_str("--theme")?;
        let persist = !pargs.contains("--no-save");

        let rest = pargs.finish();
        if !rest.is_empty() {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unexpected arguments: {rest:?}"),
            });
        }

        Ok(Config {
            seed,
            theme,
            persist,
            show_help,
        })
    }
}
