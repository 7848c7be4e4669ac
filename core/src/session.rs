use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::*;

/// One game from the player's point of view: which preset it came from, how it was seeded, and its engine.
///
/// The session is a plain value; a frontend owns it and hands out references for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    level: Option<Level>,
    seed: u64,
    placement: Placement,
    engine: RevealEngine,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_placement(config, seed, Placement::default())
    }

    pub fn with_placement(config: GameConfig, seed: u64, placement: Placement) -> Result<Self> {
        let board = RandomBoardGenerator::new(seed)
            .with_placement(placement)
            .generate(config)?;

        Ok(Self {
            config,
            level: None,
            seed,
            placement,
            engine: RevealEngine::new(board),
        })
    }

    pub fn from_level(level: Level, seed: u64) -> Result<Self> {
        let mut session = Self::new(level.into(), seed)?;
        session.level = Some(level);
        Ok(session)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn engine(&self) -> &RevealEngine {
        &self.engine
    }

    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_engine(&self.engine)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        let result = self.engine.reveal(coords)?;
        if let Some(banner) = result.status.banner().filter(|_| result.has_update()) {
            log::debug!("{} ({:?}, seed {})", banner, self.level, self.seed);
        }
        Ok(result)
    }

    /// Replaces the board with a freshly generated one of the same configuration.
    pub fn new_game(&mut self, seed: u64) -> Result<()> {
        let board = RandomBoardGenerator::new(seed)
            .with_placement(self.placement)
            .generate(self.config)?;
        self.seed = seed;
        self.engine = RevealEngine::new(board);
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| {
            log::warn!("Could not encode session: {}", err);
            GameError::MalformedSession
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let session: Self = serde_json::from_str(json).map_err(|err| {
            log::warn!("Could not decode session: {}", err);
            GameError::MalformedSession
        })?;
        session.validate()?;
        Ok(session)
    }

    fn validate(&self) -> Result<()> {
        self.config.validate()?;
        self.engine.validate()?;

        let level_matches = self.level.is_none_or(|level| level.config() == self.config);
        if self.engine.board().game_config() != self.config || !level_matches {
            log::warn!("Session config does not match its board");
            return Err(GameError::MalformedSession);
        }

        Ok(())
    }
}
