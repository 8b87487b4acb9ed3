//! CLI command definitions
//!
//! Defines the clap commands for the harness.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in CRUD suite, or a YAML scenario file
    Run {
        /// Path to a YAML scenario file (default: the built-in suite)
        #[arg(long)]
        scenario: Option<PathBuf>,
    },

    /// Resolve the auth mode, acquire the bearer token and print it
    Token,

    /// Create an idea (one-off probe)
    Create {
        /// Idea title
        #[arg(long)]
        title: String,

        /// Idea URL (may be empty)
        #[arg(long, default_value = "")]
        url: String,

        /// Idea description
        #[arg(long)]
        description: String,
    },

    /// List all ideas
    List,

    /// Edit an idea (one-off probe)
    Edit {
        /// Identifier of the idea to edit
        idea_id: String,

        /// Replacement title
        #[arg(long)]
        title: String,

        /// Replacement URL (may be empty)
        #[arg(long, default_value = "")]
        url: String,

        /// Replacement description
        #[arg(long)]
        description: String,
    },

    /// Delete an idea (one-off probe)
    Delete {
        /// Identifier of the idea to delete
        idea_id: String,
    },
}
