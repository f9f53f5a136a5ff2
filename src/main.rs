use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use newsletter::cli::{prompt_recipient, validate_recipient, Cli};
use newsletter::config::Config;
use newsletter::domain::{FeedConfig, Platform};
use newsletter::services::{
    ChannelCache, DigestService, FeedFetcher, NotificationService, RedditFetcher, YouTubeFetcher,
};
use newsletter::sources::{GoogleSession, RedditClient};
use newsletter::storage::JsonChannelRepository;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env()?;
    cli.apply_paths(&mut config.paths);
    let paths = &config.paths;

    // Acquire credentials
    let google = GoogleSession::authenticate(&config.google)?;
    let reddit_client = RedditClient::connect(&config.reddit)?;

    // Construct fetchers and notifier
    let notifier = if cli.no_send {
        None
    } else {
        Some(NotificationService::new(google.gmail_client()?))
    };
    let digests = DigestService::new(notifier, &paths.output_dir);

    let mut reddit = RedditFetcher::new(reddit_client);
    let cache = ChannelCache::open(JsonChannelRepository::new(&paths.channels))
        .with_context(|| format!("Failed to open channel cache {}", paths.channels.display()))?;
    let mut youtube = YouTubeFetcher::new(google.youtube_client()?, cache);

    println!("\n\nWelcome to Media Newsletter!\n\n");

    let reddit_feeds = load_feeds(&paths.reddit_feeds)?;
    let youtube_feeds = load_feeds(&paths.youtube_feeds)?;

    let recipient = match &cli.recipient {
        Some(address) => validate_recipient(address)?,
        None => prompt_recipient(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    publish(&mut reddit, &reddit_feeds, &paths.reddit_style, &digests, &recipient)?;
    publish(&mut youtube, &youtube_feeds, &paths.youtube_style, &digests, &recipient)?;

    println!("\n\nEnjoy your media!\n\n");

    Ok(())
}

fn load_feeds(path: &Path) -> Result<FeedConfig> {
    FeedConfig::load(path).with_context(|| format!("Failed to load feeds from {}", path.display()))
}

fn publish<F, T>(
    fetcher: &mut F,
    feeds: &FeedConfig,
    style_path: &Path,
    digests: &DigestService<T>,
    recipient: &str,
) -> Result<()>
where
    F: FeedFetcher,
    T: newsletter::services::MailTransport,
{
    let platform: Platform = fetcher.platform();
    let style = fs::read_to_string(style_path)
        .with_context(|| format!("Failed to read style {}", style_path.display()))?;

    let html = fetcher.get_html_content(feeds, &style)?;

    println!("Sending {} Digest...", platform.display_name());
    let status = digests.publish(platform, &html, recipient)?;
    println!("  {} digest: {}", platform.display_name(), status);

    Ok(())
}
