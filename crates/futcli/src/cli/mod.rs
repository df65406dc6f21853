//! CLI subcommand implementations for the futcli binary.
//!
//! Each command returns its rendered output instead of printing, so the same
//! code paths run under a fake transport in tests.

pub mod evolutions_cmd;
pub mod output;
pub mod sbc_cmd;

pub use output::OutputFormat;
