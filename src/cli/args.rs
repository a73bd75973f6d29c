//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::builder::PossibleValue;
use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::ParameterKind;

/// Bulk manager for AWS SSM Parameter Store hierarchies
#[derive(Parser, Debug)]
#[command(name = "ssm-param")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// AWS profile to use for the session
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// AWS region override
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Raise log verbosity (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create parameters under a path from a NAME=VALUE file
    Create {
        /// Path (hierarchy) to create the parameters under
        #[arg(short, long)]
        path: String,

        /// File with the variables to add, one NAME=VALUE per line
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// SSM parameter type
        #[arg(short = 't', long = "type", value_enum)]
        kind: ParameterKind,
    },

    /// Get all parameters in a specific hierarchy
    Get {
        /// Path (hierarchy) to read
        #[arg(short, long)]
        path: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Delete all parameters in a specific hierarchy
    Delete {
        /// Path (hierarchy) to delete
        #[arg(short, long)]
        path: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One NAME=VALUE line per parameter
    Text,
    /// JSON secrets list for an ECS task definition
    Ecs,
}

impl OutputFormat {
    /// ECS output only needs the parameter ARNs, never plaintext.
    pub fn wants_decryption(&self) -> bool {
        !matches!(self, OutputFormat::Ecs)
    }
}

// Keep the canonical SSM type names on the CLI: String, StringList, SecureString.
impl ValueEnum for ParameterKind {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            ParameterKind::String,
            ParameterKind::StringList,
            ParameterKind::SecureString,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.as_str()))
    }
}
