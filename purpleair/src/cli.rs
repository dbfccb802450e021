//! Command-line definition and option extraction.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Arg, ArgAction, ArgMatches, Command};
use purpleairlib::Stat;

/// Data file read when `--file` is not given
pub const DEFAULT_DATA_FILE: &str = "./purple_air.csv";

/// How batch mode prints its table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Non-interactive run: load, filter, print one table, exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    pub stat: Stat,
    /// Zip codes toggled off before rendering
    pub exclude: Vec<String>,
    pub output: OutputFormat,
}

/// Everything the binary needs from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file: PathBuf,
    pub header: Option<String>,
    pub name: Option<String>,
    pub log_level: String,
    pub batch: Option<BatchOptions>,
}

/// Build the clap Command structure
pub fn build_command() -> Command {
    Command::new("purpleair")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse particulate concentration by zip code and time of day")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .default_value(DEFAULT_DATA_FILE)
                .help("PurpleAir CSV export to load"),
        )
        .arg(
            Arg::new("header")
                .long("header")
                .help("Menu header (at most 30 characters); prompted for when omitted"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .help("Your name for the greeting; prompted for when omitted"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .default_value("warn")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .help("Diagnostic log level (written to stderr)"),
        )
        .arg(
            Arg::new("stat")
                .short('s')
                .long("stat")
                .value_parser(["avg", "min", "max"])
                .help("Print one table for this statistic and exit"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .requires("stat")
                .help("Hide a zip code from the table (can be specified multiple times)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value("text")
                .value_parser(["text", "json"])
                .help("Table format for --stat"),
        )
}

impl Config {
    /// Extract configuration from parsed matches
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let file = matches
            .get_one::<String>("file")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        let log_level = matches
            .get_one::<String>("log-level")
            .cloned()
            .unwrap_or_else(|| "warn".to_string());

        let batch = match matches.get_one::<String>("stat") {
            Some(stat) => Some(BatchOptions {
                stat: stat.parse::<Stat>().map_err(|e| anyhow!(e))?,
                exclude: extract_excludes(matches),
                output: extract_output(matches),
            }),
            None => None,
        };

        Ok(Config {
            file,
            header: matches.get_one::<String>("header").cloned(),
            name: matches.get_one::<String>("name").cloned(),
            log_level,
            batch,
        })
    }
}

/// Extract excluded zip codes from matches
fn extract_excludes(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("exclude")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

fn extract_output(matches: &ArgMatches) -> OutputFormat {
    match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["purpleair"];
        argv.extend(args);
        let matches = build_command().try_get_matches_from(argv).unwrap();
        Config::from_matches(&matches).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.log_level, "warn");
        assert!(config.header.is_none());
        assert!(config.name.is_none());
        assert!(config.batch.is_none());
    }

    #[test]
    fn test_interactive_options() {
        let config = parse(&["-f", "data.csv", "--header", "Clean Air", "--name", "Sam"]);
        assert_eq!(config.file, PathBuf::from("data.csv"));
        assert_eq!(config.header.as_deref(), Some("Clean Air"));
        assert_eq!(config.name.as_deref(), Some("Sam"));
    }

    #[test]
    fn test_batch_options() {
        let config = parse(&[
            "--stat", "max", "-e", "94028", "-e", "95014", "--output", "json",
        ]);
        let batch = config.batch.unwrap();
        assert_eq!(batch.stat, Stat::Max);
        assert_eq!(batch.exclude, vec!["94028", "95014"]);
        assert_eq!(batch.output, OutputFormat::Json);
    }

    #[test]
    fn test_exclude_requires_stat() {
        let result = build_command().try_get_matches_from(["purpleair", "-e", "94028"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_stat() {
        let result = build_command().try_get_matches_from(["purpleair", "--stat", "median"]);
        assert!(result.is_err());
    }
}
