use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::source::Entry;

/// Pick one line from stdin with a fuzzy search field
#[derive(Debug, Parser)]
#[command(name = "seek", version, about)]
pub struct Cli {
    /// Initial text of the search field
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Placeholder shown while the field is empty (overrides config)
    #[arg(short, long)]
    pub placeholder: Option<String>,

    /// How to print the selected entry
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file to use instead of ~/.config/seek/config.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The selected line as-is
    Text,
    /// One JSON object with index and title
    Jsonl,
}

impl OutputFormat {
    pub fn render(self, entry: &Entry) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::Text => Ok(entry.title.clone()),
            OutputFormat::Jsonl => serde_json::to_string(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["seek"]);
        assert_eq!(cli.query, "");
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.placeholder.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["seek", "--query", "fo", "--format", "jsonl", "-p", "Find"]);
        assert_eq!(cli.query, "fo");
        assert_eq!(cli.format, OutputFormat::Jsonl);
        assert_eq!(cli.placeholder.as_deref(), Some("Find"));
    }

    #[test]
    fn renders_selection() {
        let entry = Entry {
            index: 3,
            title: "foo \"bar\"".to_string(),
        };
        assert_eq!(OutputFormat::Text.render(&entry).unwrap(), "foo \"bar\"");
        assert_eq!(
            OutputFormat::Jsonl.render(&entry).unwrap(),
            r#"{"index":3,"title":"foo \"bar\""}"#
        );
    }
}
