// AppScan on Cloud CLI - application provisioning from the shell

mod create_app;
mod exit_codes;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "asoc")]
#[command(about = "AppScan on Cloud provisioning (CLI, headless)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ensure an application with the given name exists; print its id
    #[command(name = "create-app", after_help = "\
Examples:
  asoc create-app 0f3a9c1e 4b2d8f6a payments-api
  asoc create-app 0f3a9c1e 4b2d8f6a payments-api --business-impact High
  asoc create-app 0f3a9c1e 4b2d8f6a payments-api --quiet
  ASOC_API_BASE=https://asoc.example.test asoc create-app 0f3a9c1e 4b2d8f6a payments-api

The application id is the only stdout output; pipe it into downstream
automation. Exit 0 means the id was printed, 1 means any failure.")]
    CreateApp {
        /// API key id
        key_id: String,

        /// API key secret
        key_secret: String,

        /// Application name (exact match for lookup)
        name: String,

        /// API base URL (default: production ASoC)
        #[arg(long, env = "ASOC_API_BASE", default_value = asoc_client::DEFAULT_API_BASE)]
        api_base: String,

        /// Business impact to set on creation (e.g. Low, Medium, High)
        #[arg(long)]
        business_impact: Option<String>,

        /// Suppress progress on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    // The shell contract pins usage errors to exit 1 (clap defaults to 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let usage = err.use_stderr();
            err.print().ok();
            return ExitCode::from(if usage { EXIT_USAGE } else { EXIT_SUCCESS });
        }
    };

    let result = match cli.command {
        Commands::CreateApp {
            key_id,
            key_secret,
            name,
            api_base,
            business_impact,
            quiet,
        } => create_app::cmd_create_app(key_id, key_secret, name, api_base, business_impact, quiet),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            code: exit_codes::EXIT_FAILURE,
            message: msg.into(),
            hint: None,
        }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
