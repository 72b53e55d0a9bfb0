// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Xcavate chatbot REST API server binary

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use xc_chat_server::{Server, ServerConfig, ServerResult};
use xc_logging::CliLoggingArgs;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bind address for the server [default: 0.0.0.0:5000]
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// CSV corpus to load; repeat for several files. Replaces the default files
    #[arg(short, long = "data", value_name = "PATH")]
    data: Vec<PathBuf>,

    /// Minimum similarity score for a match [default: 70]
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    threshold: Option<u8>,

    /// TOML configuration file, applied before command line flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable the permissive CORS layer
    #[arg(long)]
    no_cors: bool,

    /// Seed the response picker for reproducible replies
    #[arg(long)]
    response_seed: Option<u64>,

    #[command(flatten)]
    logging: CliLoggingArgs,
}

impl Args {
    /// Defaults, then the config file, then flags
    fn server_config(&self) -> ServerResult<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if !self.data.is_empty() {
            config.data_files = self.data.clone();
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if self.no_cors {
            config.enable_cors = false;
        }
        if self.response_seed.is_some() {
            config.response_seed = self.response_seed;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.logging.init("xc-chat-server")?;

    println!("Starting Xcavate Chatbot API in Production Mode...");

    let config = args.server_config()?;
    tracing::debug!(?config, "Resolved configuration");

    let server = Server::new(config).await.inspect_err(|err| {
        tracing::error!("Startup failed: {err}");
    })?;
    server.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_server_defaults() {
        let args = Args::try_parse_from(["xc-chat-server"]).unwrap();
        assert_eq!(args.server_config().unwrap(), ServerConfig::default());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(
            &path,
            "bind_addr = \"127.0.0.1:7000\"\nthreshold = 80\ndata_files = [\"file.csv\"]\n",
        )
        .unwrap();

        let args = Args::try_parse_from([
            "xc-chat-server",
            "--config",
            path.to_str().unwrap(),
            "--threshold",
            "55",
            "--data",
            "one.csv",
            "--data",
            "two.csv",
            "--no-cors",
            "--response-seed",
            "3",
        ])
        .unwrap();
        let config = args.server_config().unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:7000");
        assert_eq!(config.threshold, 55);
        assert_eq!(config.data_files, vec![PathBuf::from("one.csv"), PathBuf::from("two.csv")]);
        assert!(!config.enable_cors);
        assert_eq!(config.response_seed, Some(3));
    }

    #[test]
    fn threshold_flag_is_range_checked() {
        assert!(Args::try_parse_from(["xc-chat-server", "--threshold", "101"]).is_err());
        assert!(Args::try_parse_from(["xc-chat-server", "--threshold", "100"]).is_ok());
    }

    #[test]
    fn logging_flags_are_shared() {
        let args =
            Args::try_parse_from(["xc-chat-server", "--log-level", "debug", "--log-format", "json"])
                .unwrap();
        assert_eq!(args.logging.log_level, Some(xc_logging::CliLogLevel::Debug));
        assert_eq!(args.logging.log_format, Some(xc_logging::LogFormat::Json));
    }
}
