use std::path::PathBuf;

use clap::Parser;

use crate::config::Paths;

#[derive(Parser, Debug)]
#[command(name = "newsletter")]
#[command(about = "Reddit and YouTube digests delivered by email")]
#[command(version)]
pub struct Cli {
    /// Email address to send the digests to (prompted for when omitted)
    #[arg(short, long, env = "NEWSLETTER_RECIPIENT")]
    pub recipient: Option<String>,

    /// Write the digests locally without sending any email
    #[arg(long)]
    pub no_send: bool,

    /// Reddit feed configuration file
    #[arg(long, value_name = "PATH")]
    pub reddit_feeds: Option<PathBuf>,

    /// YouTube feed configuration file
    #[arg(long, value_name = "PATH")]
    pub youtube_feeds: Option<PathBuf>,

    /// Channel cache file
    #[arg(long, value_name = "PATH")]
    pub channels: Option<PathBuf>,

    /// Directory the HTML digests are written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Override default file locations with any paths given on the command line
    pub fn apply_paths(&self, paths: &mut Paths) {
        if let Some(path) = &self.reddit_feeds {
            paths.reddit_feeds = path.clone();
        }
        if let Some(path) = &self.youtube_feeds {
            paths.youtube_feeds = path.clone();
        }
        if let Some(path) = &self.channels {
            paths.channels = path.clone();
        }
        if let Some(dir) = &self.output_dir {
            paths.output_dir = dir.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keeps_defaults() {
        let cli = Cli::try_parse_from(["newsletter"]).unwrap();
        let mut paths = Paths::default();
        cli.apply_paths(&mut paths);

        assert_eq!(paths, Paths::default());
        assert!(!cli.no_send);
    }

    #[test]
    fn test_path_overrides() {
        let cli = Cli::try_parse_from([
            "newsletter",
            "--channels",
            "/var/lib/newsletter/channels.json",
            "--output-dir",
            "/tmp/digests",
            "--no-send",
        ])
        .unwrap();
        let mut paths = Paths::default();
        cli.apply_paths(&mut paths);

        assert_eq!(paths.channels, PathBuf::from("/var/lib/newsletter/channels.json"));
        assert_eq!(paths.output_dir, PathBuf::from("/tmp/digests"));
        assert_eq!(paths.reddit_feeds, PathBuf::from("reddit_feeds.json"));
        assert!(cli.no_send);
    }
}
