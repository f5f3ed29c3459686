use acejump::JumpKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "acejump")]
#[command(about = "Label every jump target in a set of files and jump to one", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "ACEJUMP_CONFIG",
        help = "Config file, overriding the discovered one"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Log file path or directory")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Jump to the head of a word starting with a given char")]
    Word(JumpArgs),
    #[command(about = "Jump to any occurrence of a given char")]
    Char(JumpArgs),
    #[command(about = "Jump to the start of a non-blank line")]
    Line(JumpArgs),
    #[command(about = "Jump to a word on the cursor line")]
    WithinLine(JumpArgs),
}

impl Command {
    pub fn kind(&self) -> JumpKind {
        match self {
            Command::Word(_) => JumpKind::Word,
            Command::Char(_) => JumpKind::Char,
            Command::Line(_) => JumpKind::Line,
            Command::WithinLine(_) => JumpKind::WithinLine,
        }
    }

    pub fn args(&self) -> &JumpArgs {
        match self {
            Command::Word(args)
            | Command::Char(args)
            | Command::Line(args)
            | Command::WithinLine(args) => args,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct JumpArgs {
    #[arg(long = "file", required = true, help = "File to open as a pane; repeatable")]
    pub files: Vec<PathBuf>,

    #[arg(
        long,
        help = "Keys typed into the prompt, e.g. \"x<Enter>b\"; <Esc> cancels, <BS> deletes"
    )]
    pub keys: String,

    #[arg(long, help = "Cursor offset in the first file")]
    pub cursor: Option<usize>,

    #[arg(long, conflicts_with_all = ["add_cursor", "after"], help = "Extend the selection to the target")]
    pub select: bool,

    #[arg(long, conflicts_with = "after", help = "Add a cursor at the target")]
    pub add_cursor: bool,

    #[arg(long, help = "Land after the matched unit")]
    pub after: bool,

    #[arg(long, help = "Only label the first file")]
    pub current_buffer_only: bool,
}
