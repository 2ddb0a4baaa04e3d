//! Command line arguments.

use camino::Utf8PathBuf;
use clap::Parser;

use crate::models::{TraversalOptions, UserConfig};

/// Change directory icons easily on macOS, providing an icon directory.
#[derive(Debug, Clone, Parser)]
#[command(name = "iconic", version, about)]
pub struct Cli {
    /// Target directory to be changed.
    #[arg(short, long, value_name = "DIR")]
    pub target: Utf8PathBuf,

    /// Source directory of icons.
    #[arg(short, long, value_name = "DIR")]
    pub source: Utf8PathBuf,

    /// Recurse into subdirectories.
    #[arg(short, long)]
    pub recursive: bool,

    /// Skip dot-prefixed subdirectories.
    #[arg(long)]
    pub ignore_hidden: bool,

    /// Do not exclude folders recorded by earlier runs.
    #[arg(long)]
    pub ignore_cache: bool,

    /// Folder to leave untouched (repeatable).
    #[arg(long = "ignore", value_name = "PATH")]
    pub ignore: Vec<String>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Settings file to use instead of the per-user config.yaml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,
}

impl Cli {
    /// Traversal flags with configured defaults OR'ed in
    pub fn traversal_options(&self, config: &UserConfig) -> TraversalOptions {
        TraversalOptions {
            recursive: self.recursive || config.iconic_settings.recursive,
            ignore_hidden: self.ignore_hidden || config.iconic_settings.ignore_hidden,
        }
    }

    /// Configured ignore entries followed by the command line ones
    pub fn ignore_list(&self, config: &UserConfig) -> Vec<String> {
        config
            .iconic_settings
            .ignore
            .iter()
            .chain(self.ignore.iter())
            .cloned()
            .collect()
    }

    pub fn debug_mode(&self, config: &UserConfig) -> bool {
        self.debug || config.iconic_settings.debug_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "iconic",
            "-t",
            "/target",
            "-s",
            "/icons",
            "-r",
            "--ignore-hidden",
            "--ignore-cache",
            "--ignore",
            "/target/A",
            "--ignore",
            "/target/B",
        ])
        .unwrap();

        assert_eq!(cli.target, Utf8PathBuf::from("/target"));
        assert_eq!(cli.source, Utf8PathBuf::from("/icons"));
        assert!(cli.recursive);
        assert!(cli.ignore_hidden);
        assert!(cli.ignore_cache);
        assert_eq!(cli.ignore, vec!["/target/A", "/target/B"]);
    }

    #[test]
    fn test_target_and_source_required() {
        assert!(Cli::try_parse_from(["iconic", "-t", "/target"]).is_err());
        assert!(Cli::try_parse_from(["iconic", "-s", "/icons"]).is_err());
    }

    #[test]
    fn test_config_defaults_are_merged() {
        let cli = Cli::try_parse_from(["iconic", "--target", "/t", "--source", "/s", "--ignore", "b"])
            .unwrap();
        let mut config = UserConfig::default();
        config.iconic_settings.recursive = true;
        config.iconic_settings.ignore = vec!["a".to_string()];

        let options = cli.traversal_options(&config);
        assert!(options.recursive);
        assert!(!options.ignore_hidden);
        assert_eq!(cli.ignore_list(&config), vec!["a", "b"]);
        assert!(!cli.debug_mode(&config));
    }
}
