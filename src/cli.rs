//! Command-line interface definitions for News Courier.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Everything is optional: without arguments the compiled-in defaults from
//! [`crate::config`] apply.

use clap::Parser;

/// Command-line arguments for the News Courier application.
///
/// # Examples
///
/// ```sh
/// # Run against the compiled-in URL list and endpoint
/// news_courier
///
/// # Use a config file
/// news_courier -c config.yaml
///
/// # Process a single ad-hoc URL against a different backend
/// news_courier -u https://www.tagesschau.de/inland/etwas-100.html \
///     --publish-endpoint http://backend:4000/api/v1/articles/articles
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a YAML config file with `urls` and `publish_endpoint`
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the publish endpoint from the config file
    #[arg(long, env = "PUBLISH_ENDPOINT")]
    pub publish_endpoint: Option<String>,

    /// Process these URLs instead of the configured list (repeatable)
    #[arg(short = 'u', long = "url")]
    pub urls: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["news_courier"]);
        assert!(cli.config.is_none());
        assert!(cli.publish_endpoint.is_none());
        assert!(cli.urls.is_empty());
    }

    #[test]
    fn test_cli_config_path() {
        let cli = Cli::parse_from(["news_courier", "-c", "./config.yaml"]);
        assert_eq!(cli.config.as_deref(), Some("./config.yaml"));
    }

    #[test]
    fn test_cli_endpoint_override() {
        let cli = Cli::parse_from([
            "news_courier",
            "--publish-endpoint",
            "http://backend:4000/api",
        ]);
        assert_eq!(
            cli.publish_endpoint.as_deref(),
            Some("http://backend:4000/api")
        );
    }

    #[test]
    fn test_cli_repeated_urls() {
        let cli = Cli::parse_from([
            "news_courier",
            "-u",
            "https://example.org/eins",
            "-u",
            "https://example.org/zwei",
        ]);
        assert_eq!(
            cli.urls,
            vec!["https://example.org/eins", "https://example.org/zwei"]
        );
    }
}
