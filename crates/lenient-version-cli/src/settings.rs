use crate::cli::{ColorChoice, GlobalArgs};

/// Declares all environment variables read by the CLI.
pub(crate) struct EnvVars;

impl EnvVars {
    /// Equivalent to the `--color` command-line argument.
    pub(crate) const LENIENT_VERSION_COLOR: &'static str = "LENIENT_VERSION_COLOR";

    /// Disables colored output, see <https://no-color.org>.
    pub(crate) const NO_COLOR: &'static str = "NO_COLOR";

    /// Forces colored output, see <https://force-color.org>.
    pub(crate) const FORCE_COLOR: &'static str = "FORCE_COLOR";

    /// Forces colored output, see <https://bixense.com/clicolors>.
    pub(crate) const CLICOLOR_FORCE: &'static str = "CLICOLOR_FORCE";

    /// Logging directives for `tracing`, overriding the defaults picked from `--verbose`.
    pub(crate) const RUST_LOG: &'static str = "RUST_LOG";
}

/// The resolved global settings to use for any invocation of the CLI.
#[derive(Debug, Clone)]
pub(crate) struct GlobalSettings {
    pub(crate) quiet: bool,
    pub(crate) verbose: u8,
    pub(crate) color: ColorChoice,
}

impl GlobalSettings {
    /// Resolve the [`GlobalSettings`] from the CLI and the environment.
    pub(crate) fn resolve(args: &GlobalArgs) -> Self {
        Self {
            quiet: args.quiet,
            verbose: args.verbose,
            color: if args.no_color {
                ColorChoice::Never
            } else if let Some(color_choice) = args.color {
                // If `--color` is passed explicitly, use its value.
                color_choice
            } else if env_is_set(EnvVars::NO_COLOR) {
                // If the `NO_COLOR` is set, disable color output.
                ColorChoice::Never
            } else if env_is_set(EnvVars::FORCE_COLOR) || env_is_set(EnvVars::CLICOLOR_FORCE) {
                // If `FORCE_COLOR` or `CLICOLOR_FORCE` is set, always enable color output.
                ColorChoice::Always
            } else {
                ColorChoice::Auto
            },
        }
    }
}

/// Whether the environment variable is set to a non-empty value.
fn env_is_set(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|value| !value.is_empty())
}
