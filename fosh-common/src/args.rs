/// Arguments handed to every command handler by the dispatcher.
///
/// Handlers receive this as an opaque value; the installer accepts it
/// without reading any field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    /// Name the command was invoked under.
    pub command: String,
    /// Verbosity count from `-v` flags.
    pub verbose: u8,
}

impl CommandArgs {
    pub fn new(command: impl Into<String>, verbose: u8) -> Self {
        Self {
            command: command.into(),
            verbose,
        }
    }
}
