extern crate connect_four;

use proptest::prelude::*;

use connect_four::core::connect_four::ConnectFour;
use connect_four::core::{Game, GameState};

fn column_sequence() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..7, 0..80)
}

proptest! {
    #[test]
    fn pieces_land_on_the_lowest_empty_cell(columns in column_sequence()) {
        let mut game: ConnectFour = ConnectFour::new();
        for column in columns {
            let before = game.get_board_content();
            match game.update(column) {
                Ok(outcome) => {
                    prop_assert_eq!(outcome.cell.col(), column);
                    prop_assert!(before[outcome.cell.row()][column].is_none());
                    for row in outcome.cell.row() + 1..before.len() {
                        prop_assert!(before[row][column].is_some());
                    }
                }
                Err(_) => prop_assert_eq!(game.get_board_content(), before),
            }
        }
    }

    #[test]
    fn the_turn_passes_only_after_an_accepted_move(columns in column_sequence()) {
        let mut game: ConnectFour = ConnectFour::new();
        for column in columns {
            let mover = game.current_player().unwrap();
            match game.update(column) {
                Ok(outcome) => {
                    prop_assert_eq!(game.state(), outcome.state);
                    match outcome.state {
                        GameState::Turn(next) => prop_assert_eq!(next, mover.other()),
                        GameState::Finished(_) => {
                            prop_assert_eq!(game.current_player().unwrap(), mover)
                        }
                    }
                }
                Err(_) => prop_assert_eq!(game.current_player().unwrap(), mover),
            }
        }
    }

    #[test]
    fn mirrored_games_agree(columns in column_sequence()) {
        let mut game: ConnectFour = ConnectFour::new();
        let mut mirrored: ConnectFour = ConnectFour::new();
        for column in columns {
            match (game.update(column), mirrored.update(6 - column)) {
                (Ok(left), Ok(right)) => {
                    prop_assert_eq!(left.state, right.state);
                    prop_assert_eq!(left.cell.row(), right.cell.row());
                    prop_assert_eq!(left.cell.col(), 6 - right.cell.col());
                }
                (Err(left), Err(right)) => {
                    prop_assert_eq!(
                        std::mem::discriminant(&left),
                        std::mem::discriminant(&right)
                    );
                }
                _ => prop_assert!(false, "mirrored game diverged"),
            }
        }
        let left = game.get_board_content();
        let right = mirrored.get_board_content();
        for (left_row, right_row) in left.iter().zip(&right) {
            for (col, cell) in left_row.iter().enumerate() {
                prop_assert_eq!(*cell, right_row[6 - col]);
            }
        }
    }

    #[test]
    fn rejected_moves_change_nothing(columns in proptest::collection::vec(0usize..10, 0..90)) {
        let mut game: ConnectFour = ConnectFour::new();
        for column in columns {
            let content = game.get_board_content();
            let state = game.state();
            let player = game.current_player().unwrap();
            if let Err(err) = game.update(column) {
                prop_assert_eq!(game.get_board_content(), content);
                prop_assert_eq!(game.state(), state);
                prop_assert_eq!(game.current_player().unwrap(), player);
                // an identical retry fails identically
                prop_assert_eq!(game.update(column), Err(err));
            }
        }
    }
}
