use clap::Parser;
use anyhow::Result;
use colored::Colorize;

#[macro_use]
mod output;

mod commands;
mod config;
mod scanner;
mod serve;
mod types;

use config::RunConfig;
use output::Verbosity;

/// Browse the services of every docker compose file under a directory.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to search for YAML files
    #[arg(short, long, default_value = ".")]
    dir: String,

    /// Host to run the HTTP server on
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Port to run the HTTP server on
    #[arg(short, long, default_value = "8888")]
    port: u16,

    /// IP address to use in service links (default: the server host)
    #[arg(short, long)]
    service_ip: Option<String>,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Also print each request and every skipped entry
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig::new(&self.dir, self.host.clone(), self.port, self.service_ip.clone())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    output::init(Verbosity::from_flags(cli.quiet, cli.verbose));

    let result = commands::serve::handle_serve(cli.run_config()).await;

    if let Err(e) = result {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["compose-viewer"]).unwrap();
        let config = cli.run_config();

        assert_eq!(config.search_dir(), Path::new("."));
        assert_eq!(config.bind_addr(), "0.0.0.0:8888");
        assert_eq!(config.link_host(), Some("0.0.0.0"));
        assert!(!cli.quiet && !cli.verbose);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::try_parse_from([
            "compose-viewer",
            "-d",
            "/srv/stacks",
            "-H",
            "127.0.0.1",
            "-p",
            "9000",
            "-s",
            "10.0.0.5",
        ])
        .unwrap();
        let config = cli.run_config();

        assert_eq!(config.search_dir(), Path::new("/srv/stacks"));
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.link_host(), Some("10.0.0.5"));
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::try_parse_from([
            "compose-viewer",
            "--dir",
            "x",
            "--service-ip",
            "h",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.dir, "x");
        assert_eq!(cli.service_ip.as_deref(), Some("h"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_rejects_bad_port_and_conflicting_verbosity() {
        assert!(Cli::try_parse_from(["compose-viewer", "-p", "http"]).is_err());
        assert!(Cli::try_parse_from(["compose-viewer", "-q", "-v"]).is_err());
    }
}
