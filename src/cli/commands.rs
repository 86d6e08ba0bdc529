use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lists", about = concat!("lists v", env!("CARGO_PKG_VERSION"), " - checklists driven by text commands"), version)]
pub struct Cli {
    /// Notebook data file (overrides `storage.path` in the settings file)
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Settings file to read and update
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let cli = Cli::try_parse_from(["lists"]).unwrap();
        assert!(cli.data_file.is_none());
        assert!(cli.config.is_none());
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "lists",
            "--data-file",
            "/tmp/l.json",
            "--config",
            "/tmp/s.toml",
            "--log-level",
            "warn",
        ])
        .unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/l.json")));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/s.toml")));
        assert_eq!(cli.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn subcommands_are_rejected() {
        assert!(Cli::try_parse_from(["lists", "add", "milk"]).is_err());
    }
}
