//! Command-line interface definition.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::ui::vote::{VoteState, VoteType};

#[derive(Debug, Parser)]
#[command(name = "forumkit", version, about = "Command-line client for a community forum")]
pub struct Cli {
    /// Path to config file (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Vote on a post, showing the optimistic result and its settlement
    Vote(VoteArgs),

    /// Manage communities
    Community {
        #[command(subcommand)]
        action: CommunityCommand,
    },

    /// Manage posts
    Post {
        #[command(subcommand)]
        action: PostCommand,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Debug, Args)]
pub struct VoteArgs {
    /// Post identifier
    #[arg(long)]
    pub post: String,

    /// Vote direction
    #[arg(value_enum)]
    pub direction: Direction,

    /// Score currently displayed for the post
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub score: i64,

    /// Your current vote on the post
    #[arg(long, value_enum, default_value_t = CurrentVote::None)]
    pub current: CurrentVote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Up,
    Down,
}

impl From<Direction> for VoteType {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => VoteType::Up,
            Direction::Down => VoteType::Down,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CurrentVote {
    None,
    Up,
    Down,
}

impl From<CurrentVote> for VoteState {
    fn from(current: CurrentVote) -> Self {
        match current {
            CurrentVote::None => VoteState::None,
            CurrentVote::Up => VoteState::Up,
            CurrentVote::Down => VoteState::Down,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CommunityCommand {
    /// Create a community (you become its creator and first subscriber)
    Create {
        /// Community name, 3 to 21 characters
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum PostCommand {
    /// Publish a post to a community
    Create {
        /// Community identifier
        #[arg(long)]
        community: String,

        /// Post title, 3 to 128 characters
        #[arg(long)]
        title: String,

        /// JSON file with the editor's block document
        #[arg(long, value_name = "PATH")]
        content_file: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path in use
    Path,
}
