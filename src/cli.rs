use crate::commands::{add, clone, configure, list, repos, run};
use crate::github::DEFAULT_LIMIT;
use crate::registry::DEFAULT_TAG;
use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "totaliterm")]
#[command(about = "Execute a command on multiple directories")]
#[command(version)]
pub struct Cli {
    /// Registry file to use instead of the per-user one
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self, config_path: &Path) -> Result<()> {
        match self {
            Commands::Add(args) => add::handle_add_command(config_path, &args)?,
            Commands::Run(args) => run::handle_run_command(config_path, &args)?,
            Commands::List(args) => list::handle_list_command(config_path, &args)?,
            Commands::Clone(args) => clone::handle_clone_command(&args)?,
            Commands::Repos(args) => repos::handle_repos_command(&args)?,
            Commands::Config(args) => configure::handle_config_command(config_path, args.command)?,
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add directories to the configuration file
    Add(AddArgs),

    /// Execute a command in each directory
    Run(RunArgs),

    /// List registered directories
    List(ListArgs),

    /// Clone all repositories of a GitHub account
    Clone(CloneArgs),

    /// List repositories of a GitHub account
    Repos(ReposArgs),

    /// Configuration file management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(required = true, help = "Directories to register")]
    pub paths: Vec<PathBuf>,

    #[arg(short, long, default_value = DEFAULT_TAG, help = "Tag of directories")]
    pub tag: String,
}

#[derive(Args)]
pub struct RunArgs {
    #[arg(
        short,
        long,
        help = "Command to execute in each directory, given as one string, e.g. 'ls -lha'"
    )]
    pub command: String,

    #[arg(short, long, help = "Tag of directories, registry source only [default: default]")]
    pub tag: Option<String>,

    #[arg(
        short,
        long,
        value_enum,
        default_value_t = Source::Registry,
        help = "Where the directories come from"
    )]
    pub source: Source,

    #[arg(short, long, help = "Execute the command without confirmation")]
    pub yes: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// Directories registered under the tag
    Registry,
    /// Git checkouts directly under the current directory
    Scan,
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(short, long, default_value = DEFAULT_TAG, help = "Tag of directories")]
    pub tag: String,

    #[arg(short, long = "all", help = "List all directories of all tags")]
    pub all: bool,
}

#[derive(Args)]
pub struct CloneArgs {
    #[arg(short, long, help = "GitHub account name")]
    pub username: String,

    #[arg(
        short = 'L',
        long,
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Maximum number of repositories to list"
    )]
    pub limit: u32,

    #[arg(
        short,
        long,
        default_value = "",
        allow_hyphen_values = true,
        help = "git clone options, e.g. '--depth 1'"
    )]
    pub options: String,
}

#[derive(Args)]
pub struct ReposArgs {
    #[arg(short, long, help = "GitHub account name (defaults to the authenticated user)")]
    pub username: Option<String>,

    #[arg(
        short = 'L',
        long,
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Maximum number of repositories to list"
    )]
    pub limit: u32,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Print the configuration file location
    Path,

    /// Show registered tags and their sizes
    Show,
}
