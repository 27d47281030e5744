use std::path::PathBuf;

use clap::Parser;

/// Accepts job submissions over HTTP
#[derive(Parser, Debug)]
#[command(name = "job-intake", version, about)]
pub struct Cli {
    /// Address to bind, overrides HOST
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overrides PORT
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory for the log file, overrides LOG_DIR
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from(["job-intake", "--port", "9000", "--log-dir", "/tmp/logs"])
            .unwrap();
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert!(cli.host.is_none());
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Cli::try_parse_from(["job-intake", "--port", "http"]).is_err());
    }
}
