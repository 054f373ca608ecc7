use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use generic_array::typenum::{U6, U7, U9};
use generic_array::ArrayLength;

use connect_four::core::connect_four::ConnectFour;
use connect_four::core::{FinishedState, Game, GameState};

/// Connect Four for two players sharing a terminal.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Board to play on
    #[arg(long, value_enum, default_value = "standard")]
    board: BoardPreset,
}

#[derive(Clone, Copy, ValueEnum)]
enum BoardPreset {
    /// Six rows and seven columns
    Standard,
    /// Seven rows and nine columns
    Large,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.board {
        BoardPreset::Standard => run::<U6, U7>(),
        BoardPreset::Large => run::<U7, U9>(),
    };
    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run<R: ArrayLength, C: ArrayLength>() -> io::Result<()> {
    let mut game: ConnectFour<R, C> = ConnectFour::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    render(&game);
    loop {
        match game.state() {
            GameState::Turn(player) => {
                let open: Vec<String> = game.open_columns().map(|col| col.to_string()).collect();
                print!(
                    "{} to move, columns {} (q to quit): ",
                    player.name(),
                    open.join(" ")
                );
                io::stdout().flush()?;
                let Some(line) = read_line(&mut input)? else {
                    return Ok(());
                };
                let line = line.trim();
                if line.eq_ignore_ascii_case("q") {
                    return Ok(());
                }
                let column = match line.parse::<usize>() {
                    Ok(column) => column,
                    Err(_) => {
                        println!("enter a column number");
                        continue;
                    }
                };
                match game.update(column) {
                    Ok(outcome) => {
                        render(&game);
                        match outcome.state {
                            GameState::Finished(FinishedState::Win(winner)) => {
                                println!("{} wins!", winner.name());
                            }
                            GameState::Finished(FinishedState::Draw) => println!("It's a tie!"),
                            GameState::Turn(_) => {}
                        }
                    }
                    Err(err) => println!("{err}"),
                }
            }
            GameState::Finished(_) => {
                print!("play again? (y/n): ");
                io::stdout().flush()?;
                let Some(line) = read_line(&mut input)? else {
                    return Ok(());
                };
                if line.trim().eq_ignore_ascii_case("y") {
                    game.reset();
                    render(&game);
                } else {
                    return Ok(());
                }
            }
        }
    }
}

fn render<R: ArrayLength, C: ArrayLength>(game: &ConnectFour<R, C>) {
    let board = game.board();
    println!();
    for col in 0..board.cols() {
        print!(" {col} ");
    }
    println!();
    print!("{board}");
    println!();
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
