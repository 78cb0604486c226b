use crate::canvas::Canvas;
use crate::error::{GameError, Result};
use crate::grid::{Layer, MoveOutcome};
use crate::truth_grid::TruthGrid;
use crate::util::{Cursor, Point};
use crate::visibility_grid::VisibilityGrid;
use std::collections::BTreeSet;

pub const DETONATION_MESSAGE: &str = "Mine exploded!";
pub const WIN_MESSAGE: &str = "All mines found!";

/// Supplies the player's moves. `Ok(None)` means the input has ended.
pub trait MoveSource {
    fn next_move(&mut self, move_number: u32) -> color_eyre::Result<Option<Point>>;
}

/// Consumes rendered boards and status lines.
pub trait Screen {
    fn render(&mut self, canvas: &Canvas) -> color_eyre::Result<()>;
    fn message(&mut self, text: &str) -> color_eyre::Result<()>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Done,
}

/// Result of a single accepted move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    Continue,
    Won,
    Lost,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    Won,
    Lost,
    Abandoned,
}

#[derive(Debug)]
pub struct GameSession {
    width: u16,
    height: u16,
    mines: BTreeSet<Cursor>,
    truth: TruthGrid,
    known: VisibilityGrid,
    moves: u32,
    state: SessionState,
}

impl GameSession {
    pub fn new(width: u16, height: u16, mines: BTreeSet<Cursor>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::EmptyBoard);
        }
        let (truth, known) = Self::layers(width, height, &mines)?;
        Ok(Self {
            width,
            height,
            mines,
            truth,
            known,
            moves: 0,
            state: SessionState::Running,
        })
    }

    fn layers(
        width: u16,
        height: u16,
        mines: &BTreeSet<Cursor>,
    ) -> Result<(TruthGrid, VisibilityGrid)> {
        log::info!("new game {width}x{height} with {} mines", mines.len());
        Ok((
            TruthGrid::new(width, height, mines.clone())?,
            VisibilityGrid::new(width, height),
        ))
    }

    /// Builds both layers from scratch and starts a fresh game.
    pub fn setup(&mut self) -> Result<()> {
        (self.truth, self.known) = Self::layers(self.width, self.height, &self.mines)?;
        self.moves = 0;
        self.state = SessionState::Running;
        Ok(())
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn mine_count(&self) -> usize {
        self.truth.mines().len()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Truth layer first, known layer on top while the game is still running.
    pub fn draw(&self) -> Canvas {
        let mut canvas = Canvas::blank(self.width, self.height);
        self.truth.draw(&mut canvas);
        if self.is_running() {
            self.known.draw(&mut canvas);
        }
        canvas
    }

    /// Board coordinate for a typed point; anything off the board is an error.
    pub fn cursor_at(&self, (x, y): Point) -> Result<Cursor> {
        let off_board = GameError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        };
        let cursor = match (u16::try_from(x), u16::try_from(y)) {
            (Ok(x), Ok(y)) => (x, y),
            _ => return Err(off_board),
        };
        self.truth.grid().check(cursor)?;
        Ok(cursor)
    }

    /// Reveals `cursor` on the known layer, then on the truth layer.
    pub fn apply_move(&mut self, cursor: Cursor) -> Result<MoveOutcome> {
        self.truth.grid().check(cursor)?;
        self.moves += 1;
        log::debug!("move #{}: {cursor:?}", self.moves);
        self.known.apply_move(cursor)?;
        self.truth.apply_move(cursor)
    }

    pub fn check_win(&self) -> bool {
        self.truth
            .grid()
            .cursors()
            .all(|c| !self.known.is_unknown(c) || self.truth.is_mine(c))
    }

    /// Plays one move and settles the game if it ended.
    pub fn play(&mut self, cursor: Cursor) -> Result<Turn> {
        if !self.is_running() {
            return Err(GameError::AlreadyEnded);
        }
        let turn = match self.apply_move(cursor)? {
            MoveOutcome::Detonated => Turn::Lost,
            MoveOutcome::Continue if self.check_win() => Turn::Won,
            MoveOutcome::Continue => Turn::Continue,
        };
        if turn != Turn::Continue {
            log::info!(
                "game over after {} moves: {turn:?}, exploded mine: {:?}",
                self.moves,
                self.truth.exploded()
            );
            self.state = SessionState::Done;
        }
        Ok(turn)
    }

    pub fn run<C: MoveSource + Screen>(&mut self, io: &mut C) -> color_eyre::Result<Ending> {
        let mut ending = Ending::Abandoned;
        while self.is_running() {
            io.render(&self.draw())?;
            let Some(point) = io.next_move(self.moves + 1)? else {
                log::info!("input ended after {} moves", self.moves);
                self.state = SessionState::Done;
                break;
            };
            match self.cursor_at(point).and_then(|cursor| self.play(cursor)) {
                Ok(Turn::Continue) => {}
                Ok(Turn::Lost) => {
                    io.message(DETONATION_MESSAGE)?;
                    ending = Ending::Lost;
                }
                Ok(Turn::Won) => {
                    io.message(WIN_MESSAGE)?;
                    ending = Ending::Won;
                }
                Err(err @ GameError::OutOfBounds { .. }) => {
                    log::warn!("rejected move: {err}");
                    io.message(&err.to_string())?;
                }
                Err(err) => return Err(err.into()),
            }
        }
        io.render(&self.draw())?;
        Ok(ending)
    }
}
