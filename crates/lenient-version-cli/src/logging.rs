use std::fmt;

use anstream::ColorChoice;
use anyhow::Context;
use owo_colors::{OwoColorize, Style};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_tree::HierarchicalLayer;
use tracing_tree::time::Uptime;

use crate::settings::EnvVars;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    /// Suppress all tracing output by default (overridable by `RUST_LOG`).
    #[default]
    Default,
    /// Show debug messages by default (overridable by `RUST_LOG`).
    Verbose,
    /// Show messages in a hierarchical span tree. By default, debug messages are shown (overridable by `RUST_LOG`).
    ExtraVerbose,
}

impl From<u8> for Level {
    fn from(verbose: u8) -> Self {
        match verbose {
            0 => Self::Default,
            1 => Self::Verbose,
            _ => Self::ExtraVerbose,
        }
    }
}

/// Prefix each message with its level, colored the way `tracing` colors it, and nothing else.
struct LevelPrefixFormat;

/// See <https://docs.rs/tracing-subscriber/0.3.18/src/tracing_subscriber/fmt/format/mod.rs.html#1026-1156>
impl<S, N> FormatEvent<S, N> for LevelPrefixFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = *event.metadata().level();
        if writer.has_ansi_escapes() {
            let style = match level {
                tracing::Level::TRACE => Style::new().purple(),
                tracing::Level::DEBUG => Style::new().blue(),
                tracing::Level::INFO => Style::new().green(),
                tracing::Level::WARN => Style::new().yellow(),
                tracing::Level::ERROR => Style::new().red(),
            };
            write!(writer, "{} ", level.style(style))?;
        } else {
            write!(writer, "{level} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Configure `tracing` based on the given [`Level`], taking into account the `RUST_LOG`
/// environment variable.
///
/// The [`Level`] picks the default filter (which `RUST_LOG` overrides) and the output format.
/// The library and the `lenient-version` binary share the `lenient_version` target, so
/// [`Level::Verbose`] shows `debug` messages from both.
///
/// Must be called after the global color choice is set.
pub(crate) fn setup_logging(level: Level) -> anyhow::Result<()> {
    let default_directive: Directive = match level {
        Level::Default => {
            // Show nothing, but allow `RUST_LOG` to override.
            LevelFilter::OFF.into()
        }
        Level::Verbose | Level::ExtraVerbose => "lenient_version=debug"
            .parse()
            .context("Invalid default logging directive")?,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_directive)
        .with_env_var(EnvVars::RUST_LOG)
        .from_env()
        .context("Invalid RUST_LOG directives")?;

    let ansi = match anstream::Stderr::choice(&std::io::stderr()) {
        ColorChoice::Always | ColorChoice::AlwaysAnsi => true,
        ColorChoice::Never => false,
        // We just asked anstream for a choice, that can't be auto
        ColorChoice::Auto => unreachable!(),
    };

    match level {
        Level::Default | Level::Verbose => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .event_format(LevelPrefixFormat)
                        .with_writer(std::io::stderr)
                        .with_ansi(ansi)
                        .with_filter(filter),
                )
                .init();
        }
        Level::ExtraVerbose => {
            // Regardless of the tracing level, include the uptime and target for each message.
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::default()
                        .with_targets(true)
                        .with_timer(Uptime::default())
                        .with_ansi(ansi)
                        .with_writer(std::io::stderr)
                        .with_filter(filter),
                )
                .init();
        }
    }

    Ok(())
}
