//! Command registry: maps multi-token command paths to handlers.
//!
//! The registry is built once before the dispatcher is constructed and is
//! read-only afterwards. Commands may be addressed by a single word or a
//! multi-word phrase; lookup is longest-prefix so a more specific
//! registration (`stats summary`) wins over one sharing its first token
//! (`stats`).

use warden_api::ContainerApi;
use warden_common::config::CliConfig;
use warden_common::error::Result;

use crate::output::OutputSink;

/// Handler contract: remaining positional arguments, backend handle,
/// resolved configuration, output sink.
pub type CommandHandler =
    fn(&[String], &dyn ContainerApi, &CliConfig, &mut OutputSink<'_>) -> Result<()>;

/// One registered command.
pub struct Command {
    path: &'static [&'static str],
    short_help: &'static str,
    long_help: &'static str,
    handler: CommandHandler,
}

impl Command {
    /// The token path identifying this command.
    #[must_use]
    pub const fn path(&self) -> &'static [&'static str] {
        self.path
    }

    /// One-line description for command lists.
    #[must_use]
    pub const fn short_help(&self) -> &'static str {
        self.short_help
    }

    /// Full description for the long command tree.
    #[must_use]
    pub const fn long_help(&self) -> &'static str {
        self.long_help
    }

    /// The handler to invoke on a match.
    #[must_use]
    pub const fn handler(&self) -> CommandHandler {
        self.handler
    }
}

/// Registration-ordered command table with longest-prefix lookup.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Registers a command under `path`.
    ///
    /// # Panics
    ///
    /// Panics if `path` is already registered: a duplicate registration is a
    /// programming error, not a recoverable outcome.
    #[allow(clippy::panic)]
    pub fn register(
        &mut self,
        path: &'static [&'static str],
        short_help: &'static str,
        long_help: &'static str,
        handler: CommandHandler,
    ) {
        assert!(!path.is_empty(), "empty command path");
        assert!(
            !self.commands.iter().any(|c| c.path == path),
            "duplicate command registration: {path:?}"
        );
        self.commands.push(Command {
            path,
            short_help,
            long_help,
            handler,
        });
    }

    /// Resolves `tokens` to the command whose path is the longest registered
    /// prefix, returning it with the unconsumed tokens.
    #[must_use]
    pub fn lookup<'t>(&self, tokens: &'t [String]) -> Option<(&Command, &'t [String])> {
        self.commands
            .iter()
            .filter(|command| {
                command.path.len() <= tokens.len()
                    && command.path.iter().zip(tokens).all(|(p, t)| p == t)
            })
            .max_by_key(|command| command.path.len())
            .map(|command| (command, &tokens[command.path.len()..]))
    }

    /// Iterates over all commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(
        _args: &[String],
        _api: &dyn ContainerApi,
        _config: &CliConfig,
        _sink: &mut OutputSink<'_>,
    ) -> Result<()> {
        Ok(())
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register(&["spec"], "", "", noop);
        registry.register(&["spec", "detail"], "", "", noop);
        registry.register(&["stats", "summary"], "", "", noop);
        registry
    }

    #[test]
    fn lookup_returns_longest_matching_prefix() {
        let registry = registry();
        let input = tokens(&["spec", "detail", "x"]);
        let (command, rest) = registry.lookup(&input).expect("should match");
        assert_eq!(command.path(), ["spec", "detail"]);
        assert_eq!(rest, tokens(&["x"]));
    }

    #[test]
    fn lookup_falls_back_to_the_shorter_prefix() {
        let registry = registry();
        let input = tokens(&["spec", "/test"]);
        let (command, rest) = registry.lookup(&input).expect("should match");
        assert_eq!(command.path(), ["spec"]);
        assert_eq!(rest, tokens(&["/test"]));
    }

    #[test]
    fn lookup_never_matches_a_non_prefix_path() {
        let registry = registry();
        // "stats" alone is not registered; only "stats summary" is.
        assert!(registry.lookup(&tokens(&["stats"])).is_none());
        assert!(registry.lookup(&tokens(&["stats", "full"])).is_none());
    }

    #[test]
    fn lookup_of_unknown_tokens_is_none() {
        let registry = registry();
        assert!(registry.lookup(&tokens(&["nonsense"])).is_none());
        assert!(registry.lookup(&[]).is_none());
    }

    #[test]
    fn disjoint_paths_never_cross_match() {
        let registry = registry();
        let (command, _) = registry
            .lookup(&tokens(&["stats", "summary", "/test"]))
            .expect("should match");
        assert_eq!(command.path(), ["stats", "summary"]);
    }

    #[test]
    fn enumeration_preserves_registration_order() {
        let registry = registry();
        let paths: Vec<_> = registry.iter().map(Command::path).collect();
        assert_eq!(
            paths,
            vec![
                &["spec"][..],
                &["spec", "detail"][..],
                &["stats", "summary"][..]
            ]
        );
        // A fresh enumeration starts over.
        assert_eq!(registry.iter().count(), registry.len());
    }

    #[test]
    #[should_panic(expected = "duplicate command registration")]
    fn duplicate_registration_is_fatal() {
        let mut registry = registry();
        registry.register(&["spec"], "", "", noop);
    }
}
