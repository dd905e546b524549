use clap::{Args, Parser, Subcommand};

use crate::settings::EnvVars;

#[derive(Parser)]
#[command(name = "lenient-version", author, version, about)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    #[command(flatten)]
    pub(crate) top_level: GlobalArgs,
}

#[derive(Args, Debug, Clone)]
#[command(next_help_heading = "Global options")]
pub(crate) struct GlobalArgs {
    /// Do not print any output.
    #[arg(global = true, long, short, conflicts_with = "verbose")]
    pub(crate) quiet: bool,

    /// Use verbose output.
    ///
    /// Pass twice to show a tree of spans with timings.
    #[arg(global = true, action = clap::ArgAction::Count, long, short, conflicts_with = "quiet")]
    pub(crate) verbose: u8,

    /// Disable colors.
    #[arg(global = true, long, hide = true, conflicts_with = "color")]
    pub(crate) no_color: bool,

    /// Control colors in output.
    #[arg(
        global = true,
        long,
        value_enum,
        env = EnvVars::LENIENT_VERSION_COLOR,
        conflicts_with = "no_color",
        value_name = "COLOR_CHOICE"
    )]
    pub(crate) color: Option<ColorChoice>,
}

#[derive(Debug, Copy, Clone, clap::ValueEnum)]
pub(crate) enum ColorChoice {
    /// Enables colored output only when the output is going to a terminal or TTY with support.
    Auto,

    /// Enables colored output regardless of the detected environment.
    Always,

    /// Disables colored output.
    Never,
}

impl From<ColorChoice> for anstream::ColorChoice {
    fn from(value: ColorChoice) -> Self {
        match value {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Compare two versions.
    Compare(CompareArgs),
    /// Sort versions from lowest to highest.
    Sort(SortArgs),
    /// Print the highest of the given versions.
    Max(MaxArgs),
    /// Show the components of a version.
    Parse(ParseArgs),
    /// Verify the ordering of a built-in table of versions.
    Check,
}

#[derive(Args)]
pub(crate) struct CompareArgs {
    /// The version on the left-hand side of the comparison.
    pub(crate) left: String,

    /// The version on the right-hand side of the comparison.
    pub(crate) right: String,
}

#[derive(Args)]
pub(crate) struct SortArgs {
    /// The versions to sort.
    #[arg(required = true)]
    pub(crate) versions: Vec<String>,

    /// Sort from highest to lowest.
    #[arg(long, short)]
    pub(crate) reverse: bool,
}

#[derive(Args)]
pub(crate) struct MaxArgs {
    /// The versions to choose from.
    #[arg(required = true)]
    pub(crate) versions: Vec<String>,
}

#[derive(Args)]
pub(crate) struct ParseArgs {
    /// The version to parse.
    #[arg(value_name = "VERSION")]
    pub(crate) input: String,

    /// The format in which to display the parsed version.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) output_format: OutputFormat,
}

#[derive(Debug, Default, Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Display one component per line.
    #[default]
    Text,
    /// Display the components as JSON.
    Json,
}
