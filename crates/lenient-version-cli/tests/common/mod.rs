// The `unreachable_pub` is to silence false positives in RustRover.
#![allow(dead_code, unreachable_pub)]

use std::process::Command;

use insta_cmd::get_cargo_bin;

pub const BIN_NAME: &str = "lenient-version";

pub const INSTA_FILTERS: &[(&str, &str)] = &[
    // The CLI version
    (r"lenient-version \d+\.\d+\.\d+", "lenient-version [VERSION]"),
];

pub const ANSI_FILTERS: &[(&str, &str)] = &[
    (r"\x1b\[1m", "[BOLD]"),
    (r"\x1b\[0m", "[RESET]"),
];

/// Create a command for the binary with an environment that doesn't leak into the output:
/// no colors and no `RUST_LOG` directives from the caller.
pub fn lenient_version_command() -> Command {
    let mut command = Command::new(get_cargo_bin(BIN_NAME));
    command
        .env_remove("RUST_LOG")
        .env_remove("LENIENT_VERSION_COLOR")
        .env_remove("FORCE_COLOR")
        .env_remove("CLICOLOR_FORCE")
        .env("NO_COLOR", "1");
    command
}
