use lexopt::{Arg, Parser};
use std::path::PathBuf;

/// What the command line asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Arguments {
    Run {
        /// Configuration file given with `--config`; when absent, the default
        /// path is used and may be missing
        config: Option<PathBuf>,

        /// Log file given with `--log-file`; overrides the configuration
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Arguments {
    pub(crate) fn from_env() -> Result<Arguments, lexopt::Error> {
        Arguments::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    log_file = Some(PathBuf::from(parser.value()?));
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run { config, log_file })
    }

    pub(crate) fn usage() -> String {
        format!(
            concat!(
                "Usage: {bin} [<options>]\n",
                "\n",
                "Play snake in the terminal\n",
                "\n",
                "Options:\n",
                "  -c, --config <file>    Read configuration from the given file\n",
                "      --log-file <file>  Append log messages to the given file\n",
                "  -h, --help             Display this help message and exit\n",
                "  -V, --version          Show the program version and exit\n",
            ),
            bin = env!("CARGO_PKG_NAME"),
        )
    }
}
