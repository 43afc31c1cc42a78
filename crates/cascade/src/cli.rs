//! CLI argument parsing with clap

use clap::{Args, Parser, Subcommand};

/// Cascade - App generator and dev-server runner
#[derive(Parser, Debug)]
#[command(name = "cascade")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new app from the framework skeleton
    New(NewArgs),

    /// Run the local development server with hot reload
    Run(RunArgs),

    /// Show version information
    Version(VersionArgs),
}

// New command
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Name of the app directory to create
    pub name: String,
}

// Run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Port to run the development server on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Accept the next available port without prompting if the requested one is taken
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Do not open the app in a browser
    #[arg(long)]
    pub no_browser: bool,
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_new_with_name() {
        let cli = Cli::try_parse_from(["cascade", "new", "myapp"]).unwrap();
        match cli.command {
            Commands::New(args) => assert_eq!(args.name, "myapp"),
            _ => panic!("expected new subcommand"),
        }
    }

    #[test]
    fn test_parse_new_requires_name() {
        assert!(Cli::try_parse_from(["cascade", "new"]).is_err());
    }

    #[test]
    fn test_parse_run_default_port() {
        let cli = Cli::try_parse_from(["cascade", "run"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.port, None);
                assert!(!args.yes);
                assert!(!args.no_browser);
            }
            _ => panic!("expected run subcommand"),
        }
    }

    #[test]
    fn test_parse_run_custom_port() {
        let cli = Cli::try_parse_from(["cascade", "run", "--port", "5000"]).unwrap();
        match cli.command {
            Commands::Run(args) => assert_eq!(args.port, Some(5000)),
            _ => panic!("expected run subcommand"),
        }
    }

    #[test]
    fn test_parse_run_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["cascade", "run", "--port", "invalid"]).is_err());
        assert!(Cli::try_parse_from(["cascade", "run", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["cascade"]).is_err());
    }

    #[test]
    fn test_parse_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["cascade", "invalid"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["cascade", "-vv", "run", "--yes"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Run(args) => assert!(args.yes),
            _ => panic!("expected run subcommand"),
        }
    }
}
