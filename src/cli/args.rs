//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! Available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version` / `-V`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--quiet` / `-q`: Minimal output; implies --no-interactive
//! - `--no-interactive`: Disable prompts
//!
//! Running `noto` without a subcommand generates a commit message for
//! the staged changes; the generation flags live on the top level.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// noto - AI-powered commit messages for staged changes
#[derive(Parser, Debug)]
#[command(name = "noto")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if noto was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Interactive unless `--no-interactive` or `--quiet` was set or
    /// stdin is not a TTY.
    pub fn interactive(&self) -> bool {
        if self.no_interactive || self.quiet {
            false
        } else {
            std::io::stdin().is_terminal()
        }
    }
}

/// Flags for the default generate command.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Commit type (feat, fix, refactor, docs, test, chore)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub commit_type: Option<String>,

    /// Additional context for the model
    #[arg(short = 'x', long, value_name = "TEXT")]
    pub context: Option<String>,

    /// Copy the generated commit message to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Commit the staged changes with the generated message
    #[arg(short, long)]
    pub apply: bool,

    /// Push after committing
    #[arg(short, long)]
    pub push: bool,

    /// Amend the last commit instead of creating a new one
    #[arg(long)]
    pub amend: bool,

    /// Bypass the response cache for this invocation
    #[arg(long)]
    pub no_cache: bool,

    /// Edit the message before it is finalized
    #[arg(short, long)]
    pub edit: bool,

    /// Use this message instead of generating one
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Access the last generated commit message
    Prev {
        /// Copy the last generated commit message to the clipboard
        #[arg(short, long)]
        copy: bool,

        /// Commit the staged changes with the last generated message
        #[arg(short, long)]
        apply: bool,

        /// Edit the last generated commit message
        #[arg(short, long)]
        edit: bool,

        /// Amend the last commit with the last generated message
        #[arg(long, requires = "edit")]
        amend: bool,
    },

    /// Initialize noto in the repository
    Init {
        /// Create the guideline file at the git root without asking
        #[arg(long)]
        root: bool,

        /// Generate the guideline file from existing commits
        #[arg(long)]
        generate: bool,
    },

    /// Check out a branch
    Checkout {
        /// Branch to check out; selected interactively when omitted
        branch: Option<String>,

        /// Create the branch before checking it out
        #[arg(short = 'b', long)]
        create: bool,

        /// Copy the selected branch name instead of checking it out
        #[arg(short, long)]
        copy: bool,
    },

    /// List branches and copy the selected name
    Branch {
        /// Include remote-tracking branches
        #[arg(short, long)]
        remote: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Configure the API key
    Key {
        /// API key value; prompted for when omitted
        key: Option<String>,
    },

    /// Select the model
    Model,

    /// Reset the configuration
    Reset,
}
