use anstream::{eprint, print};

/// Where user-facing output goes, as picked by `--quiet`.
///
/// Logging goes through `tracing` instead and isn't affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Printer {
    /// Print to the standard streams.
    Default,
    /// Suppress all output.
    Quiet,
}

impl Printer {
    pub(crate) fn new(quiet: bool) -> Self {
        if quiet { Self::Quiet } else { Self::Default }
    }

    fn enabled(self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// A writer for results, e.g. the sorted versions.
    pub(crate) fn stdout(self) -> Output {
        Output {
            stream: Stream::Stdout,
            enabled: self.enabled(),
        }
    }

    /// A writer for diagnostics, e.g. failed checks.
    pub(crate) fn stderr(self) -> Output {
        Output {
            stream: Stream::Stderr,
            enabled: self.enabled(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// A [`std::fmt::Write`] that strips colors when the stream doesn't support them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Output {
    stream: Stream,
    enabled: bool,
}

impl std::fmt::Write for Output {
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        if !self.enabled {
            return Ok(());
        }
        match self.stream {
            Stream::Stdout => print!("{s}"),
            Stream::Stderr => eprint!("{s}"),
        }
        Ok(())
    }
}
