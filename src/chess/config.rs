use crate::chess::piece::{Color, PieceKind};
use crate::chess::rules::Rules;
use crate::error::ConfigError;

/// Game configuration (pure Rust, no files).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Promotion kind offered by move generation and attached by [`crate::game::Game::play`].
    pub promotion: PieceKind,

    /// Side to move in the initial position.
    pub first_turn: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            promotion: PieceKind::Queen,
            first_turn: Color::White,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = kind;
        self
    }

    /// Parse the promotion kind from its single-letter code.
    pub fn with_promotion_code(self, code: char) -> Result<Self, ConfigError> {
        let kind = PieceKind::from_code(code).ok_or(ConfigError::UnknownPieceCode(code))?;
        let cfg = self.with_promotion(kind);
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_first_turn(mut self, color: Color) -> Self {
        self.first_turn = color;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.promotion {
            PieceKind::Pawn | PieceKind::King => Err(ConfigError::InvalidPromotion(self.promotion)),
            _ => Ok(()),
        }
    }

    pub fn rules(&self) -> Result<Rules, ConfigError> {
        self.validate()?;
        Ok(Rules::new(self.promotion))
    }
}
