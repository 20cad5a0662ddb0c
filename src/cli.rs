// src/cli.rs
//! Command-line parsing for the client binary

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use survey_client::common::ClientConfig;

#[derive(Debug, Parser)]
#[command(name = "survey-client")]
#[command(version, about = "Account and survey client", long_about = None)]
pub struct Cli {
    /// Base URL of the account API (overrides API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// File backing the account cache (overrides ACCOUNT_STORE_PATH)
    #[arg(long = "store", global = true)]
    pub store_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Sign in and cache the account
    Login { email: String, password: String },

    /// Create an account and cache it
    Signup {
        name: String,
        email: String,
        password: String,
        password_confirmation: String,
    },

    /// List surveys
    Surveys,

    /// Show the cached account
    #[command(name = "whoami")]
    WhoAmI,

    /// Forget the cached account
    Logout,
}

impl Cli {
    /// Override env-derived configuration with CLI flags
    pub fn apply(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(url) = &self.api_url {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(path) = &self.store_path {
            config.store_path = path.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_login() {
        let cli = Cli::try_parse_from(["survey-client", "login", "a@b.com", "12345"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Login {
                email: "a@b.com".to_string(),
                password: "12345".to_string()
            }
        );
        assert_eq!(cli.api_url, None);
    }

    #[test]
    fn test_parse_flags_after_command() {
        let cli = Cli::try_parse_from([
            "survey-client",
            "surveys",
            "--api-url",
            "http://x/api/",
            "--store",
            "s.json",
        ])
        .unwrap();
        assert_eq!(cli.command, Command::Surveys);

        let config = cli.apply(ClientConfig::default());
        assert_eq!(config.api_url, "http://x/api");
        assert_eq!(config.store_path, PathBuf::from("s.json"));
    }

    #[test]
    fn test_parse_flag_with_equals() {
        let cli = Cli::try_parse_from(["survey-client", "--api-url=http://x", "whoami"]).unwrap();
        assert_eq!(cli.command, Command::WhoAmI);
        assert_eq!(cli.api_url.as_deref(), Some("http://x"));
    }

    #[test]
    fn test_parse_signup() {
        let cli = Cli::try_parse_from([
            "survey-client",
            "signup",
            "Name",
            "a@b.com",
            "12345",
            "12345",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Signup { .. }));
    }

    #[test]
    fn test_help_is_rendered() {
        let err = Cli::try_parse_from(["survey-client", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("whoami"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Cli::try_parse_from(["survey-client"]).is_err());
        assert!(Cli::try_parse_from(["survey-client", "login", "only-email"]).is_err());
        assert!(Cli::try_parse_from(["survey-client", "dance"]).is_err());
        assert!(Cli::try_parse_from(["survey-client", "whoami", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["survey-client", "whoami", "--api-url"]).is_err());
    }
}
