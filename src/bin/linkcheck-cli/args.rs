use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use linkcheck_lib::StorageConfig;

#[derive(Parser)]
#[command(name = "linkcheck-cli")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// lit des entrées depuis stdin (une par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// action appliquée aux lignes de stdin: classify|resolve|check-path
    #[arg(long, default_value = "classify")]
    pub action: String,

    /// write report to file (JSON/NDJSON/CSV selon --format)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// base des destinations `local:` relatives (remplace LOCAL_STORAGE_PATH)
    #[arg(long)]
    pub local_storage_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// détecte le type d'un lien, identifiant ou chemin
    Classify { input: String },
    /// résout une destination `local:`
    Resolve { destination: String },
    /// vérifie qu'un dossier local est utilisable
    #[command(name = "check-path")]
    CheckPath { path: String },
}

impl Commands {
    pub fn action_and_input(&self) -> (Action, &str) {
        match self {
            Self::Classify { input } => (Action::Classify, input),
            Self::Resolve { destination } => (Action::Resolve, destination),
            Self::CheckPath { path } => (Action::CheckPath, path),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Classify,
    Resolve,
    CheckPath,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn parsed_action(&self) -> Result<Action> {
        action_from_str(&self.action)
    }

    /// Environment first, `--local-storage-path` wins when given.
    pub fn storage_config(&self) -> StorageConfig {
        match &self.local_storage_path {
            Some(path) => StorageConfig::new(path.clone()),
            None => StorageConfig::from_env(),
        }
    }
}

pub fn action_from_str(s: &str) -> Result<Action> {
    match s {
        "classify" => Ok(Action::Classify),
        "resolve" => Ok(Action::Resolve),
        "check-path" => Ok(Action::CheckPath),
        other => bail!("unknown --action '{other}', use: classify|resolve|check-path"),
    }
}
