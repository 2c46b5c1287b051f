use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::locator::{Locator, session_info};
use crate::models::SessionInfo;
use crate::parsers::conversation::{Transcript, extract_conversation};
use crate::utils::{format_path_with_tilde, home_dir, projects_root};

#[derive(Parser)]
#[command(name = "claude-sessions")]
#[command(version = "0.1.0")]
#[command(about = "Inspect Claude Code session logs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a readable transcript of a session log
    Extract {
        /// Path to the session .jsonl file
        jsonl_file: PathBuf,
        /// Only process the most recent LIMIT lines
        limit: Option<usize>,
    },
    /// Find the log file for a working directory and session id
    Locate {
        /// Working directory the session ran in
        cwd: PathBuf,
        /// Session identifier (the log file name without extension)
        session_id: String,
        /// Username segment of the legacy -home-<user>-<slug> layout
        /// (defaults to $USER)
        #[arg(long)]
        legacy_user: Option<String>,
    },
    /// List every session belonging to a workspace
    Sessions {
        /// Working directory of the workspace
        cwd: PathBuf,
        /// Username segment of the legacy -home-<user>-<slug> layout
        /// (defaults to $USER)
        #[arg(long)]
        legacy_user: Option<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Extract { jsonl_file, limit }) => extract(&jsonl_file, limit),
        Some(Commands::Locate { cwd, session_id, legacy_user }) => {
            locate(&cwd, &session_id, legacy_user)
        }
        Some(Commands::Sessions { cwd, legacy_user }) => sessions(&cwd, legacy_user),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn extract(path: &Path, limit: Option<usize>) -> Result<()> {
    let transcript = extract_conversation(path, limit)?;
    print_transcript(&transcript);
    Ok(())
}

fn locate(cwd: &Path, session_id: &str, legacy_user: Option<String>) -> Result<()> {
    let locator = make_locator(legacy_user)?;
    let home = home_dir()?;

    println!("Slug: {}", locator.slug(cwd));
    match locator.find_session_file(cwd, session_id)? {
        Some(path) => {
            println!("Found: {}", format_path_with_tilde(&path, &home));
            print_info(&session_info(&path));
        }
        None => println!("Not found"),
    }
    Ok(())
}

fn sessions(cwd: &Path, legacy_user: Option<String>) -> Result<()> {
    let locator = make_locator(legacy_user)?;
    let list = locator.list_sessions(cwd)?;

    if list.is_empty() {
        println!("No sessions found");
        return Ok(());
    }
    for descriptor in &list {
        let info = session_info(&descriptor.path);
        println!("{}", descriptor.session_id);
        println!("  project: {}", descriptor.project);
        print_info(&info);
    }
    Ok(())
}

fn make_locator(legacy_user: Option<String>) -> Result<Locator> {
    let mut locator = Locator::new(projects_root()?, home_dir()?);
    if let Some(user) = legacy_user.or_else(|| env::var("USER").ok()) {
        locator = locator.with_legacy_user(user);
    }
    Ok(locator)
}

fn print_transcript(transcript: &Transcript) {
    for message in &transcript.messages {
        println!("\n[{}]:", message.speaker);
        println!("{}", message.preview());
    }
    if !transcript.skipped.is_empty() {
        eprintln!("Skipped {} malformed line(s)", transcript.skipped.len());
    }
}

fn print_info(info: &SessionInfo) {
    if let Some(cwd) = &info.cwd {
        println!("  cwd: {}", cwd);
    }
    if let Some(version) = &info.version {
        println!("  version: {}", version);
    }
    println!("  messages: {}", info.message_count);
    if let Some(ts) = info.first_timestamp {
        println!("  first: {}", ts.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(ts) = info.last_timestamp {
        println!("  last: {}", ts.format("%Y-%m-%d %H:%M:%S"));
    }
}
