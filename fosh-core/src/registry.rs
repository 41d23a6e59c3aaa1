// fosh-core/src/registry.rs
//! The table of subcommands the `fosh` binary dispatches to.
use fosh_common::args::CommandArgs;
use fosh_common::config::Config;
use fosh_common::error::{FoshError, Result};
use tracing::{debug, warn};

pub type Handler = fn(&Config, &CommandArgs) -> Result<()>;

/// Anything command modules can register themselves into.
pub trait CommandRegistry {
    fn add(&mut self, name: &'static str, handler: Handler, help: &'static str);
}

#[derive(Clone, Copy)]
pub struct CommandEntry {
    pub name: &'static str,
    pub handler: Handler,
    pub help: &'static str,
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct Commands {
    entries: Vec<CommandEntry>,
}

impl Commands {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in command.
    pub fn with_builtin() -> Self {
        let mut commands = Self::new();
        crate::install::build_commands(&mut commands);
        commands
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dispatch(&self, name: &str, config: &Config, args: &CommandArgs) -> Result<()> {
        let entry = self
            .get(name)
            .ok_or_else(|| FoshError::UnknownCommand(name.to_string()))?;
        debug!("Dispatching command: {}", entry.name);
        (entry.handler)(config, args)
    }
}

impl CommandRegistry for Commands {
    fn add(&mut self, name: &'static str, handler: Handler, help: &'static str) {
        if self.get(name).is_some() {
            warn!("Command '{}' is already registered, ignoring", name);
            return;
        }
        self.entries.push(CommandEntry {
            name,
            handler,
            help,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_handler(_: &Config, _: &CommandArgs) -> Result<()> {
        Ok(())
    }

    fn failing_handler(_: &Config, _: &CommandArgs) -> Result<()> {
        Err(FoshError::Config("boom".to_string()))
    }

    fn config() -> Config {
        Config::new("/nonexistent/fosh", "/nonexistent", "fosh")
    }

    #[test]
    fn first_registration_wins() {
        let mut commands = Commands::new();
        commands.add("cmd", ok_handler, "first");
        commands.add("cmd", failing_handler, "second");

        assert_eq!(commands.len(), 1);
        assert_eq!(commands.get("cmd").unwrap().help, "first");
        assert!(commands.dispatch("cmd", &config(), &CommandArgs::default()).is_ok());
    }

    #[test]
    fn dispatch_unknown_command() {
        let commands = Commands::new();
        let err = commands
            .dispatch("nope", &config(), &CommandArgs::default())
            .unwrap_err();
        assert!(matches!(err, FoshError::UnknownCommand(ref n) if n == "nope"));
    }

    #[test]
    fn dispatch_returns_handler_error() {
        let mut commands = Commands::new();
        commands.add("fail", failing_handler, "always fails");
        let err = commands
            .dispatch("fail", &config(), &CommandArgs::default())
            .unwrap_err();
        assert!(matches!(err, FoshError::Config(_)));
    }

    #[test]
    fn builtin_commands_include_installer() {
        let commands = Commands::with_builtin();
        assert!(commands.get("install-fosh").is_some());
    }
}
