//! The game session: one owned aggregate of board, selection, and stock
//! cycle, mutated in place by each command.
//!
//! [`GameSession::apply`] is the single entry point for state changes.
//! Rejected commands return a [`GameError`] and mutate nothing; accepted
//! commands re-check the board invariants (debug builds) and the win
//! condition. Once the session is won or quit, further commands are
//! ignored.

pub mod command;
pub mod dispatch;
pub mod selection;
pub mod snapshot;
pub mod stock;

pub use command::Command;
pub use dispatch::{map_key, Dispatcher, EventSource, KeyEvent, ScriptedEvents};
pub use selection::Selection;
pub use snapshot::{PileView, Snapshot};
pub use stock::StockCycle;

use crate::board::{deal, is_valid_run, stacks_on_tableau, Board, PileId, PileKind};
use crate::core::{GameConfig, GameRng};
use crate::rules::{apply_move, game_won, GameError, MoveRequest, MoveViolation};

/// Where the session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Quit,
}

/// A single-player game from deal to win or quit.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    board: Board,
    selection: Selection,
    stock: StockCycle,
    config: GameConfig,
    seed: u64,
    status: SessionStatus,
}

impl GameSession {
    /// Deal a new game.
    ///
    /// Uses the configured seed, or draws one from entropy and records it
    /// so the deal can be replayed.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let board = deal(&mut rng);
        log::debug!("dealt new game, seed {}", rng.seed());

        Self {
            board,
            selection: Selection::Idle,
            stock: StockCycle::new(config.pass_limit),
            config,
            seed: rng.seed(),
            status: SessionStatus::InProgress,
        }
    }

    /// Build a session around an existing board.
    ///
    /// For scenario setup in tests and tooling; the board should pass
    /// [`Board::audit`].
    #[must_use]
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        Self {
            board,
            selection: Selection::Idle,
            stock: StockCycle::new(config.pass_limit),
            config,
            seed: config.seed.unwrap_or(0),
            status: SessionStatus::InProgress,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub const fn stock_cycle(&self) -> &StockCycle {
        &self.stock
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The seed this session's deal came from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whether the session has ended (won or quit).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status != SessionStatus::InProgress
    }

    /// Place the cursor directly on a pile.
    ///
    /// Key-driven front-ends go through [`Command::MoveCursor`]; this is
    /// for pointer-driven ones and for scenario setup in tests.
    pub fn set_cursor(&mut self, pile: PileId) {
        self.board.set_cursor(pile);
    }

    /// Apply one command.
    ///
    /// Rejections leave the session untouched (the selection persists
    /// across a failed commit so the player can retry elsewhere). Commands
    /// applied to a finished session are no-ops.
    pub fn apply(&mut self, command: Command) -> Result<(), GameError> {
        if self.is_finished() {
            return Ok(());
        }

        let result = match command {
            Command::MoveCursor(direction) => {
                self.board.move_cursor(direction);
                Ok(())
            }
            Command::ToggleMark => self.toggle_mark(),
            Command::IncreaseMarkCount => {
                self.adjust_mark(true);
                Ok(())
            }
            Command::DecreaseMarkCount => {
                self.adjust_mark(false);
                Ok(())
            }
            Command::CommitMove => self.commit_move(),
            Command::DrawFromStock => self.stock.draw(&mut self.board),
            Command::Quit => {
                self.status = SessionStatus::Quit;
                Ok(())
            }
        };

        match &result {
            Ok(()) => {
                self.board.assert_invariants();
                if self.status == SessionStatus::InProgress && game_won(&self.board) {
                    log::debug!("game won");
                    self.status = SessionStatus::Won;
                }
            }
            Err(error) => log::debug!("rejected {command:?}: {error}"),
        }
        result
    }

    /// Mark the run under the cursor, or clear a mark on the same pile.
    fn toggle_mark(&mut self) -> Result<(), GameError> {
        let cursor = self.board.cursor();

        if self.selection.marked_pile() == Some(cursor.pile) {
            self.selection = Selection::Idle;
            return Ok(());
        }

        let target = self.board.pile(cursor.pile);
        if target.is_empty() {
            return Err(GameError::InvalidMarkTarget);
        }

        let offset = cursor.offset.unwrap_or(target.len() - 1);
        let card = target.card(offset).ok_or(GameError::InvalidMarkTarget)?;
        if !card.is_face_up() {
            return Err(GameError::InvalidMarkTarget);
        }

        // The mark covers everything from the cursor card to the top; for a
        // tableau that stretch must already be a valid run.
        let count = target.len() - offset;
        if count > 1
            && (target.kind() != PileKind::Tableau
                || !is_valid_run(&target.cards()[offset..]))
        {
            return Err(GameError::InvalidMarkTarget);
        }

        self.selection = Selection::Marked {
            pile: cursor.pile,
            offset,
            count,
        };
        Ok(())
    }

    /// Grow or shrink a tableau mark by one card, clamping silently.
    fn adjust_mark(&mut self, grow: bool) {
        let Selection::Marked {
            pile,
            offset,
            count,
        } = self.selection
        else {
            return;
        };
        if pile.kind() != PileKind::Tableau {
            return;
        }

        let cards = self.board.pile(pile).cards();
        if grow {
            // Extending past a broken sequence is rejected; the count stays.
            if offset > 0 && stacks_on_tableau(cards[offset - 1], cards[offset]) {
                self.selection = Selection::Marked {
                    pile,
                    offset: offset - 1,
                    count: count + 1,
                };
            }
        } else if count > 1 {
            self.selection = Selection::Marked {
                pile,
                offset: offset + 1,
                count: count - 1,
            };
        }
    }

    /// Move the marked run onto the pile under the cursor.
    fn commit_move(&mut self) -> Result<(), GameError> {
        let Selection::Marked {
            pile,
            offset,
            count,
        } = self.selection
        else {
            return Err(GameError::IllegalMove(MoveViolation::EmptySource));
        };

        let request = MoveRequest {
            source: pile,
            offset,
            count,
            dest: self.board.cursor().pile,
        };
        match apply_move(&mut self.board, &request) {
            Ok(()) => {
                self.selection = Selection::Idle;
                Ok(())
            }
            Err(violation) => Err(GameError::IllegalMove(violation)),
        }
    }

    /// A read-only view of the session for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
