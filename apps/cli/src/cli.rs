use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use reviewhub_forms::FormKind;

/// Check reviewhub form input against the form's validators.
#[derive(Debug, Parser)]
#[command(name = "reviewhub", version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the built-in forms.
    Forms,

    /// Print a built-in form's schema as JSON.
    Schema {
        /// Form name, as listed by `reviewhub forms`.
        form: FormKind,
    },

    /// Validate field values and print each failing field's error.
    Check(CheckArgs),

    /// Validate field values and print the request payload.
    Payload(InputArgs),
}

/// Which form to load.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct FormSource {
    /// A built-in form.
    #[arg(long)]
    pub form: Option<FormKind>,

    /// A JSON form schema file.
    #[arg(long, value_name = "FILE")]
    pub schema: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InputArgs {
    #[command(flatten)]
    pub source: FormSource,

    /// JSON object mapping field names to values; `-` reads stdin.
    #[arg(long, value_name = "FILE")]
    pub values: PathBuf,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print every error of a field, not only the displayed one.
    #[arg(long)]
    pub all: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}
