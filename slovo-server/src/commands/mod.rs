//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod oneshot;
pub mod serve;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the HTTP API (POST /analyse, POST /lemmatize)
    Serve(serve::ServeArgs),

    /// Analyse a text file and print the annotated document as JSON
    Analyse(oneshot::OneShotArgs),

    /// Lemmatize a text file and print the lemma string as JSON
    Lemmatize(oneshot::OneShotArgs),

    /// Write a configuration file with default values
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Serve(args) => args.execute(),
            Commands::Analyse(args) => args.execute(oneshot::Operation::Analyse),
            Commands::Lemmatize(args) => args.execute(oneshot::Operation::Lemmatize),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = TestCli::parse_from(["slovo", "serve", "--host", "0.0.0.0", "--port", "8080"]);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
                assert_eq!(args.port, Some(8080));
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_analyse() {
        let cli = TestCli::parse_from(["slovo", "analyse", "-i", "text.txt", "--compact"]);
        match cli.command {
            Commands::Analyse(args) => {
                assert_eq!(args.input.to_str(), Some("text.txt"));
                assert!(args.compact);
                assert!(args.output.is_none());
            }
            other => panic!("expected analyse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_lemmatize_stdin() {
        let cli = TestCli::parse_from(["slovo", "lemmatize", "-i", "-"]);
        assert!(matches!(cli.command, Commands::Lemmatize(_)));
    }

    #[test]
    fn test_parse_generate_config() {
        let cli = TestCli::parse_from(["slovo", "generate-config", "-o", "slovo.toml"]);
        match cli.command {
            Commands::GenerateConfig(args) => {
                assert_eq!(args.output.to_str(), Some("slovo.toml"));
            }
            other => panic!("expected generate-config, got {other:?}"),
        }
    }

    #[test]
    fn test_analyse_requires_input() {
        assert!(TestCli::try_parse_from(["slovo", "analyse"]).is_err());
    }
}
