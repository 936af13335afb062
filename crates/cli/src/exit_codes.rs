//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! The published contract is deliberately narrow: 0 means the application
//! id was printed to stdout, 1 means any failure (usage, login, lookup,
//! creation, malformed response). Downstream automation pipes stdout and
//! branches on 0/1; keep it that way.

/// Success - the application id was printed to stdout.
pub const EXIT_SUCCESS: u8 = 0;

/// Any failure: usage, authentication, network, or unexpected-status error.
pub const EXIT_FAILURE: u8 = 1;

/// Usage error - bad arguments, missing positionals.
/// The contract pins usage errors to 1 (clap's default of 2 is overridden).
pub const EXIT_USAGE: u8 = EXIT_FAILURE;
