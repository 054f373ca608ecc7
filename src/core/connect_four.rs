use generic_array::typenum::{U6, U7};
use generic_array::ArrayLength;

use crate::core::grid::{Direction, Grid, GridIndex};
use crate::core::rotation::PlayerRotation;
use crate::core::{BoardCell, Game, GameError, GameResult, GameState, MoveOutcome, Player};

/// Number of consecutive same-colored pieces that wins a game.
pub const WIN_LINE_LEN: usize = 4;

// The four upward scans would find the same lines from the other end.
const LINE_DIRECTIONS: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::DownRight,
    Direction::DownLeft,
];

type Cell = BoardCell<Player>;

/// Whether `player` has a line of [`WIN_LINE_LEN`] pieces anywhere on
/// the board. A line cut short by an edge does not count and never
/// continues on the opposite side.
fn has_four_in_a_row<R: ArrayLength, C: ArrayLength>(
    grid: &Grid<Cell, R, C>,
    player: Player,
) -> bool {
    let target = BoardCell::from(player);
    grid.all_indexed().any(|(start, _)| {
        LINE_DIRECTIONS.into_iter().any(|direction| {
            grid.line_iter(start, direction)
                .take(WIN_LINE_LEN)
                .filter(|&&cell| cell == target)
                .count()
                == WIN_LINE_LEN
        })
    })
}

/// Connect Four on an R by C board, played by dropping pieces into
/// columns. Defaults to the classic six rows by seven columns.
#[derive(Clone, Debug)]
pub struct ConnectFour<R: ArrayLength = U6, C: ArrayLength = U7> {
    players: PlayerRotation<Player>,
    state: GameState,
    grid: Grid<Cell, R, C>,
}

impl<R: ArrayLength, C: ArrayLength> Game for ConnectFour<R, C> {
    type TurnData = usize;
    type Board = Grid<Cell, R, C>;

    fn new() -> Self {
        Self {
            players: PlayerRotation::new([Player::Red, Player::Yellow]),
            state: GameState::Turn(Player::Red),
            grid: Grid::default(),
        }
    }

    fn update(&mut self, column: Self::TurnData) -> GameResult<MoveOutcome> {
        if self.is_finished() {
            return Err(GameError::GameIsFinished);
        }
        let cols = self.grid.cols();
        if column >= cols {
            return Err(GameError::invalid_column(cols.saturating_sub(1), column));
        }
        let player = self.current_player()?;
        let cell = self
            .lowest_empty(column)
            .ok_or(GameError::column_full(column))?;
        self.grid[cell] = player.into();

        let state = self.update_state(player)?;
        Ok(MoveOutcome { cell, state })
    }

    fn board(&self) -> &Self::Board {
        &self.grid
    }

    fn state(&self) -> GameState {
        self.state
    }

    fn set_state(&mut self, state: GameState) {
        self.state = state;
    }
}

impl<R: ArrayLength, C: ArrayLength> ConnectFour<R, C> {
    /// Player whose turn it is.
    /// After a win this is still the player who made the winning move.
    pub fn current_player(&self) -> GameResult<Player> {
        self.players
            .current()
            .copied()
            .ok_or(GameError::PlayerRotationCorrupted)
    }

    /// Columns that still have room for another piece.
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.grid.cols()).filter(move |&col| self.lowest_empty(col).is_some())
    }

    fn lowest_empty(&self, col: usize) -> Option<GridIndex> {
        let bottom_row = self.grid.rows().checked_sub(1)?;
        self.grid
            .line_iter(GridIndex::new(bottom_row, col), Direction::Up)
            .indexed()
            .find(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
    }

    fn update_state(&mut self, placed_by: Player) -> GameResult<GameState> {
        if has_four_in_a_row(&self.grid, placed_by) {
            return Ok(self.set_winner(placed_by));
        }

        if self.grid.iter().flatten().all(|cell| cell.is_some()) {
            return Ok(self.set_draw());
        }

        self.switch_player()
    }

    fn switch_player(&mut self) -> GameResult<GameState> {
        let next = self
            .players
            .advance()
            .copied()
            .ok_or(GameError::PlayerRotationCorrupted)?;
        self.set_state(GameState::Turn(next));
        Ok(self.state())
    }
}

impl<R: ArrayLength, C: ArrayLength> Default for ConnectFour<R, C> {
    fn default() -> Self {
        Self::new()
    }
}
