use super::board::{Board, Cell, COLS, ROWS};
use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

/// Why a drop was not applied. The engine state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (expected 0..{})", COLS)]
    InvalidColumn(isize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is over")]
    GameOver,
}

/// Board contents plus turn state for one game.
///
/// All mutation goes through [`GameEngine::try_drop_token`] (or its boolean
/// wrapper [`GameEngine::drop_token`]) and [`GameEngine::reset`]. Once the
/// game has ended the engine rejects every drop until it is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    moves_count: usize,
}

impl GameEngine {
    /// Create an engine holding an empty board, Player 1 to move
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            current_player: Player::One, // Player 1 starts
            outcome: None,
            moves_count: 0,
        }
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    pub fn cols(&self) -> usize {
        COLS
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Check if game is over
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// `None` while the game is in progress
    pub fn winner(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Number of tokens placed since the last reset
    pub fn moves_count(&self) -> usize {
        self.moves_count
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the board contents
    pub fn snapshot(&self) -> [[Cell; COLS]; ROWS] {
        self.board.cells()
    }

    /// Token at (row, col); `None` outside the board
    pub fn token(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.board.is_column_full(col)
    }

    /// Columns that would accept a drop right now
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's token into `column`.
    ///
    /// Returns `true` iff the token was placed, whether or not the move ended
    /// the game.
    pub fn drop_token(&mut self, column: isize) -> bool {
        self.try_drop_token(column).is_ok()
    }

    /// Drop the current player's token into `column`, returning the row it
    /// landed in or the reason it was rejected.
    pub fn try_drop_token(&mut self, column: isize) -> Result<usize, MoveError> {
        let result = self.apply(column);
        if let Err(err) = &result {
            tracing::debug!(column, player = self.current_player.number(), %err, "move rejected");
        }
        result
    }

    fn apply(&mut self, column: isize) -> Result<usize, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let col = usize::try_from(column)
            .ok()
            .filter(|&col| col < COLS)
            .ok_or(MoveError::InvalidColumn(column))?;

        let player = self.current_player;
        let row = self
            .board
            .drop_piece(col, player.to_cell())
            .ok_or(MoveError::ColumnFull(col))?;
        self.moves_count += 1;

        tracing::debug!(
            player = player.number(),
            column = col,
            row,
            moves = self.moves_count,
            "token placed"
        );

        // Win takes priority over a full board
        if self.board.check_win(row, col) {
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.moves_count == ROWS * COLS {
            self.outcome = Some(GameOutcome::Tie);
        }

        match self.outcome {
            Some(outcome) => tracing::info!(?outcome, moves = self.moves_count, "game over"),
            None => self.current_player = player.other(),
        }

        Ok(row)
    }

    /// Return to the initial state: empty board, Player 1 to move
    pub fn reset(&mut self) {
        *self = GameEngine::new();
        tracing::info!("game reset");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
