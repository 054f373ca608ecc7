pub mod connect_four;

mod error;
mod grid;
mod rotation;

use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};

use generic_array::ArrayLength;

pub use error::GameError;
pub use grid::{Direction, Grid, GridIndex, IndexedLineIter, LineIter};

pub type GameResult<T> = Result<T, GameError>;

/// One of the two sides in a game, named after its piece color.
/// Red always moves first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    pub fn other(&self) -> Self {
        match self {
            Self::Red => Self::Yellow,
            Self::Yellow => Self::Red,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Yellow => "Yellow",
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => f.write_str("R"),
            Self::Yellow => f.write_str("Y"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardCell<T>(pub Option<T>);

impl<T> Default for BoardCell<T> {
    fn default() -> Self {
        Self(Option::default())
    }
}

impl<T: Display> Display for BoardCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(val) => write!(f, "[{}]", val),
            None => f.write_str("[ ]"),
        }
    }
}

impl<T> From<T> for BoardCell<T> {
    fn from(value: T) -> Self {
        Self(Option::from(value))
    }
}

impl<T> Deref for BoardCell<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for BoardCell<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FinishedState {
    Win(Player),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameState {
    Turn(Player),
    Finished(FinishedState),
}

/// What a single accepted move produced: the cell the piece settled in
/// and the state of the game right after the move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveOutcome {
    pub cell: GridIndex,
    pub state: GameState,
}

pub trait GameBoard {
    type Item;
    fn get_content(&self) -> Vec<Vec<Self::Item>>;
}

impl<T: Clone, R: ArrayLength, C: ArrayLength> GameBoard for Grid<T, R, C> {
    type Item = T;

    fn get_content(&self) -> Vec<Vec<Self::Item>> {
        self.iter()
            .map(|row| row.iter().cloned().collect())
            .collect()
    }
}

pub trait Game: Sized {
    type TurnData;
    type Board: GameBoard;

    fn new() -> Self;
    fn update(&mut self, data: Self::TurnData) -> GameResult<MoveOutcome>;

    fn board(&self) -> &Self::Board;

    fn state(&self) -> GameState;
    fn set_state(&mut self, state: GameState);

    /// Start over from the initial position, discarding the board.
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn is_finished(&self) -> bool {
        matches!(self.state(), GameState::Finished(_))
    }

    fn set_draw(&mut self) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Draw));
        self.state()
    }

    fn set_winner(&mut self, player: Player) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Win(player)));
        self.state()
    }

    fn get_board_content(&self) -> Vec<Vec<<Self::Board as GameBoard>::Item>> {
        self.board().get_content()
    }
}
