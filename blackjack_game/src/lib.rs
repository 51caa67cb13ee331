pub mod game;
pub mod session;
pub mod stats;

pub use game::prelude::*;
pub use session::Session;
pub use stats::SessionSummary;

pub mod prelude {
    pub use super::game::prelude::*;
    pub use super::{Session, SessionConfig, SessionConfigBuilder, SessionSummary};
}

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Struct for configuring a `Session`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the shuffles, `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Number of games to play, `None` asks the player at startup.
    pub games: Option<u32>,
}

impl SessionConfig {
    /// Returns a new `SessionConfigBuilder` starting from the default configuration.
    pub fn new() -> SessionConfigBuilder {
        SessionConfigBuilder {
            config: SessionConfig::default(),
        }
    }
}

/// Builder for `SessionConfig`.
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.config.seed = Some(seed);
        self
    }

    /// Sets the number of games up front. Zero is ignored and the player is asked instead.
    pub fn games(&mut self, games: u32) -> &mut Self {
        self.config.games = (games > 0).then_some(games);
        self
    }

    pub fn build(&mut self) -> SessionConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = SessionConfig::new().seed(7).games(3).build();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.games, Some(3));
        assert_eq!(SessionConfig::new().build(), SessionConfig::default());
    }

    #[test]
    fn zero_games_falls_back_to_prompt() {
        let config = SessionConfig::new().games(0).build();
        assert_eq!(config.games, None);
    }
}
