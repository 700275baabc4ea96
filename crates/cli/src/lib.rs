pub mod cli;
pub mod color;
pub mod context;
pub mod error;
pub mod exec;
pub mod git;
pub mod output;
pub mod settings;
pub mod sorbet;

pub use cli::{Cli, Command, OutputFormat};
pub use context::{Bundle, Context, ContextOps, ExecOptions, Git, Sorbet, SrbOptions};
pub use error::{Error, ExitCode, Result};
pub use exec::ExecResult;
pub use git::Commit;
pub use output::Report;
pub use settings::Settings;

#[cfg(test)]
pub mod test_utils;
