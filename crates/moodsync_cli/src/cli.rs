//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

/// Terminal-native wellness companion
#[derive(Parser)]
#[command(name = "moodsync", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive TUI (login-gated)
    Tui {
        /// Chat provider to use (groq, gemini). Uses MOODSYNC_PROVIDER env if not set.
        #[arg(long)]
        provider: Option<String>,
        /// Use the light theme
        #[arg(long)]
        light: bool,
    },
    /// Log in against the auth service and store the session token
    Login {
        /// Email (prompted when omitted)
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Register a new account, then log in and store the token
    Register {
        /// Username (prompted when omitted)
        #[arg(short, long)]
        username: Option<String>,
        /// Email (prompted when omitted)
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Delete the stored session token
    Logout,
    /// Send one message through the chat relay and print the reply
    Chat {
        /// The message text
        message: String,
        /// Chat provider to use (groq, gemini)
        #[arg(long)]
        provider: Option<String>,
    },
    /// Show the content catalogs (tips, tracks, themes)
    Catalog {
        /// Filter by mood (happy, calm, focused, energetic, relaxed)
        #[arg(short, long)]
        mood: Option<String>,
    },
    /// Inspect chat providers
    Providers {
        #[command(subcommand)]
        action: ProvidersAction,
    },
}

#[derive(Subcommand)]
pub enum ProvidersAction {
    /// List known providers and whether they are configured
    List,
}
