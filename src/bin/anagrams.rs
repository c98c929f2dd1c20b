//! Prints every anagram of a set of distinct letters.

use clap::Parser;

use anagrams::LetterSet;

/// Letters used when none are given on the command line.
const SAMPLE_LETTERS: [char; 3] = ['a', 'b', 'c'];

/// Environment variable holding the default log filter.
const LOG_ENV: &str = "ANAGRAMS_LOG";

/// Cli arguments related to logging
#[derive(clap::Args, Debug)]
struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set log verbosity (default is "warn")
    #[arg(long = "log", value_parser = clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]), group = "verbosity")]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Sets the logging verbosity, in order of precedence:
    ///  * the `--log` level
    ///  * `Error` when `-q` is used
    ///  * `Info`, `Debug`, `Trace`; depending on the count of `-v`
    ///  * the `ANAGRAMS_LOG` environment variable
    ///  * `Warn` otherwise
    fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();

        builder.filter_level(log::LevelFilter::Warn);

        builder.parse_env(LOG_ENV);
        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            });
        }
        builder.init();
    }
}

/// Generate every anagram of a set of distinct letters
#[derive(clap::Parser, Debug)]
#[command(author, version, about)]
struct CliApp {
    /// Letters to rearrange, as one word ("abc") or one letter per argument;
    /// defaults to a, b, c
    letters: Vec<String>,
    /// Only print how many anagrams there are, without generating them
    #[arg(short, long)]
    count: bool,
    #[command(flatten)]
    logging: LoggingArgs,
}

impl CliApp {
    fn letters(&self) -> Vec<char> {
        if self.letters.is_empty() {
            return SAMPLE_LETTERS.to_vec();
        }
        self.letters.iter().flat_map(|arg| arg.chars()).collect()
    }
}

fn run(cli: CliApp) -> anagrams::Result<()> {
    let letters = LetterSet::new(&cli.letters())?;
    log::debug!("Letters: {letters}");

    if cli.count {
        println!("{}", letters.permutation_count());
        return Ok(());
    }

    log::info!("Generating {} anagrams", letters.permutation_count());
    println!("Anagrams of {letters}:");
    for word in letters.permutations() {
        println!("{word}");
    }
    Ok(())
}

fn main() {
    let cli = CliApp::parse();

    cli.logging.initialize_logging();
    log::info!("Version: {}", clap::crate_version!());

    run(cli).unwrap_or_else(|err| {
        log::error!("{err}");
        std::process::exit(1)
    })
}
