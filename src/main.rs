use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;

use forumkit::api::{ApiError, ForumClient};
use forumkit::cli::{Cli, Command, CommunityCommand, ConfigCommand, PostCommand, VoteArgs};
use forumkit::config::{Config, ConfigStore};
use forumkit::notify::{Notice, Notifier, Severity, TracingNotifier};
use forumkit::observability::{init_tracing, LogSettings};
use forumkit::ui::post_vote::{InitialVote, PostVoteView, Settlement};
use forumkit::validators::{CommunityName, PostDraft};

/// Prints notices to stderr and mirrors them into the log.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let marker = match notice.severity {
            Severity::Default => "•",
            Severity::Destructive => "!",
        };
        eprintln!("{} {}", marker, notice.text());
        TracingNotifier.notify(notice);
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&LogSettings::from_env(cli.verbose));

    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);

    if let Command::Config {
        action: ConfigCommand::Path,
    } = &cli.command
    {
        println!("{}", path.display());
        return Ok(());
    }

    let store = ConfigStore::open(path)?;
    let notifier = ConsoleNotifier;

    match cli.command {
        Command::Vote(args) => vote(&store, args).await,
        Command::Community {
            action: CommunityCommand::Create { name },
        } => {
            let created = match CommunityName::parse(&name) {
                Ok(name) => {
                    let client = ForumClient::new(&store.get().api)?;
                    client.create_community(&name).await
                }
                Err(invalid) => Err(ApiError::from(invalid)),
            };
            match created {
                Ok(created) => {
                    notifier.notify(Notice::community_created(&created));
                    println!("{}", created);
                    Ok(())
                }
                Err(err) => {
                    notifier.notify(Notice::community_failed(&err));
                    Err(err.into())
                }
            }
        }
        Command::Post {
            action:
                PostCommand::Create {
                    community,
                    title,
                    content_file,
                },
        } => {
            let content = content_file.as_deref().map(read_content).transpose()?;
            let published = match PostDraft::new(&title, content, &community) {
                Ok(draft) => {
                    let client = ForumClient::new(&store.get().api)?;
                    client.create_post(&draft).await
                }
                Err(invalid) => Err(ApiError::from(invalid)),
            };
            match published {
                Ok(()) => {
                    notifier.notify(Notice::post_published());
                    Ok(())
                }
                Err(err) => {
                    notifier.notify(Notice::post_failed(&err));
                    Err(err.into())
                }
            }
        }
        Command::Config { .. } => Ok(()),
    }
}

async fn vote(store: &ConfigStore, args: VoteArgs) -> anyhow::Result<()> {
    let client = ForumClient::new(&store.get().api)?;
    info!(
        base_url = client.base_url(),
        signed_in = client.is_signed_in(),
        "Voting on post {}",
        args.post
    );

    let mut view = PostVoteView::mount(
        args.post,
        InitialVote {
            score: args.score,
            vote: Some(args.current.into()),
        },
        Arc::new(client),
        Arc::new(ConsoleNotifier),
    );

    if view.click(args.direction.into()).is_none() {
        bail!("score {} cannot take another vote", view.score());
    }
    println!("optimistic vote={} score={}", view.vote(), view.score());

    let settlement = view.next_outcome().await;
    println!("settled vote={} score={}", view.vote(), view.score());
    view.unmount();

    match settlement {
        Some(Settlement::Rejected(_, kind)) => bail!("vote was not registered ({:?})", kind),
        _ => Ok(()),
    }
}

fn read_content(path: &Path) -> anyhow::Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Content file '{}' is not valid JSON", path.display()))
}
