// fosh/src/cli.rs
//! Defines the command-line argument structure using clap.
//!
//! Global flags are declared with the derive API; subcommands come from the
//! command registry so each command module supplies its own name and help.
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use fosh_core::Commands;

#[derive(Parser, Debug)]
#[command(version, about = "Installer for the fosh script", long_about = None, name = "fosh", bin_name = "fosh")]
#[command(propagate_version = true, subcommand_required = true, arg_required_else_help = true)]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// A parsed command line: global flags plus the chosen subcommand.
#[derive(Debug)]
pub struct Invocation {
    pub args: CliArgs,
    pub command: String,
}

pub fn build_cli(commands: &Commands) -> clap::Command {
    commands.iter().fold(CliArgs::command(), |cli, entry| {
        cli.subcommand(clap::Command::new(entry.name).about(entry.help))
    })
}

/// Parses the process arguments, exiting with clap's usage error on failure.
pub fn parse(commands: &Commands) -> Invocation {
    let matches = build_cli(commands).get_matches();
    let args = CliArgs::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    // subcommand_required guarantees a name here.
    let command = matches.subcommand_name().unwrap_or_default().to_string();
    Invocation { args, command }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        build_cli(&Commands::with_builtin()).debug_assert();
    }

    #[test]
    fn registry_commands_become_subcommands() {
        let matches = build_cli(&Commands::with_builtin())
            .try_get_matches_from(["fosh", "-v", "install-fosh"])
            .unwrap();
        assert_eq!(matches.subcommand_name(), Some("install-fosh"));
        let args = CliArgs::from_arg_matches(&matches).unwrap();
        assert_eq!(args.verbose, 1);
    }

    #[test]
    fn install_takes_no_arguments() {
        let result = build_cli(&Commands::with_builtin())
            .try_get_matches_from(["fosh", "install-fosh", "--force"]);
        assert!(result.is_err());
    }
}
