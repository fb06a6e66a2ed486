use log::{debug, warn};

use crate::chess::config::GameConfig;
use crate::chess::moves::{Move, MoveRequest};
use crate::chess::piece::{Color, Piece, PieceKind};
use crate::chess::rules::Rules;
use crate::chess::status::{self, GameStatus};
use crate::core::board::Board;
use crate::core::square::Square;
use crate::error::{ConfigError, GameError, GameResult};

/// One game: the board, the side to move and the move rules.
///
/// The board is only mutated by [`Game::apply_move`] (and [`Game::play`], which goes
/// through it). Separate games are independent values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    rules: Rules,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Standard initial position, White to move, queen promotion.
    pub fn new() -> Self {
        Game::from_board(Board::standard(), Color::White)
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            board: Board::standard(),
            turn: config.first_turn,
            rules: config.rules()?,
        })
    }

    /// An arbitrary position with default rules.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            rules: Rules::default(),
        }
    }

    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.rules = Rules::new(kind);
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    /// Pseudo-legal moves of the piece on `sq`, for either color.
    pub fn moves_for(&self, sq: Square) -> Vec<Move> {
        self.rules.moves_for(&self.board, sq)
    }

    /// Destination squares of [`Game::moves_for`].
    pub fn destinations(&self, sq: Square) -> Vec<Square> {
        self.moves_for(sq).into_iter().map(|m| m.to).collect()
    }

    /// Destinations holding a piece of the other color.
    pub fn potential_captures(&self, sq: Square) -> Vec<Square> {
        let Some(mover) = self.get(sq) else {
            return Vec::new();
        };
        self.moves_for(sq)
            .into_iter()
            .filter(|m| self.get(m.to).is_some_and(|p| p.color != mover.color))
            .map(|m| m.to)
            .collect()
    }

    /// True iff `sq` holds a piece of the side to move.
    pub fn is_selectable(&self, sq: Square) -> bool {
        self.get(sq).is_some_and(|p| p.color == self.turn)
    }

    /// A request for `from -> to`, carrying the configured promotion when a pawn lands on
    /// its last row.
    pub fn request_for(&self, from: Square, to: Square) -> MoveRequest {
        let req = MoveRequest::new(from, to);
        match self.get(from) {
            Some(p) if p.kind == PieceKind::Pawn && to.row() == p.color.promotion_row() => {
                req.with_promotion(self.rules.promotion)
            }
            _ => req,
        }
    }

    /// Moves whatever stands on `req.from` to `req.to` and flips the turn.
    ///
    /// No legality check is made: the move need not come from [`Game::moves_for`], and
    /// the piece may belong to either side. Returns `None`, leaving the game untouched,
    /// only when `req.from` is empty.
    pub fn apply_move(&mut self, req: MoveRequest) -> Option<Move> {
        let Some(mut piece) = self.board.get(req.from) else {
            warn!("apply_move: no piece on {}", req.from);
            return None;
        };
        let captured = self.board.get(req.to);

        let promotion = req
            .promotion
            .filter(|_| piece.kind == PieceKind::Pawn && req.to.row() == piece.color.promotion_row());
        if let Some(kind) = promotion {
            piece.kind = kind;
        }

        self.board.set(req.to, Some(piece));
        self.board.take(req.from);
        self.turn = self.turn.other();

        let mv = Move {
            from: req.from,
            to: req.to,
            piece,
            captured,
            promotion,
        };
        debug!("applied {mv}; {} to move", self.turn);
        Some(mv)
    }

    /// The checked driver path: the source must hold a piece of the side to move and
    /// `to` must be one of its generated destinations. Promotion is attached via
    /// [`Game::request_for`].
    pub fn play(&mut self, from: Square, to: Square) -> GameResult<Move> {
        let piece = self.get(from).ok_or(GameError::NoPiece { square: from })?;
        if piece.color != self.turn {
            return Err(GameError::WrongTurn {
                square: from,
                color: piece.color,
                turn: self.turn,
            });
        }
        if !self.moves_for(from).iter().any(|m| m.to == to) {
            return Err(GameError::IllegalMove { from, to });
        }
        let req = self.request_for(from, to);
        self.apply_move(req).ok_or(GameError::NoPiece { square: from })
    }

    /// [`Game::play`] with square names.
    pub fn play_names(&mut self, from: &str, to: &str) -> GameResult<Move> {
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        self.play(from, to)
    }

    pub fn is_in_check(&self) -> bool {
        status::is_in_check(&self.board, self.turn)
    }

    pub fn is_checkmate(&self) -> bool {
        status::is_checkmate(&self.board, self.turn)
    }

    pub fn is_stalemate(&self) -> bool {
        status::is_stalemate(&self.board, self.turn)
    }

    pub fn status(&self) -> GameStatus {
        status::status(&self.board, self.turn)
    }
}
