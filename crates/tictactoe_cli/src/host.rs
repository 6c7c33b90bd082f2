//! Line-oriented terminal host driving a [`GameSession`].
//!
//! The host is the engine's outside collaborator: it maps text input to
//! coordinates, renders the board, keeps the [`ScoreLedger`] fed from the
//! game-end notification and mirrors the active turn from the turn-change
//! notification.

use crate::config::HostConfig;
use anyhow::Result;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tictactoe_engine::{GameError, GameSession, Mark, Outcome, Position, ScoreLedger};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  <row> <col>   place a mark, e.g. `1 2` or `1,2`
  <0-8>         place a mark by cell index
  <label>       place a mark by name, e.g. `center`
  r, reset      start the round over
  s, score      show the scoreboard
  h, help       show this help
  q, quit       exit";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(usize, usize),
    Reset,
    Score,
    Help,
    Quit,
    Blank,
    Unknown,
}

impl Command {
    fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "" => return Command::Blank,
            "q" | "quit" | "exit" => return Command::Quit,
            "r" | "reset" => return Command::Reset,
            "s" | "score" => return Command::Score,
            "h" | "help" | "?" => return Command::Help,
            _ => {}
        }

        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        // Raw coordinates go straight to the engine, which owns bounds checks.
        if let [row, col] = parts.as_slice() {
            return match (row.parse::<usize>(), col.parse::<usize>()) {
                (Ok(row), Ok(col)) => Command::Move(row, col),
                _ => Command::Unknown,
            };
        }

        match Position::parse(input) {
            Ok(Some(pos)) => Command::Move(pos.row(), pos.col()),
            _ => Command::Unknown,
        }
    }
}

/// Terminal host: one session, one ledger, one output sink.
pub struct Host<W: Write> {
    session: GameSession,
    ledger: Rc<RefCell<ScoreLedger>>,
    turn: Rc<RefCell<Mark>>,
    show_positions: bool,
    out: W,
}

impl<W: Write> Host<W> {
    /// Creates a host writing to `out`.
    #[instrument(skip(out))]
    pub fn new(config: &HostConfig, out: W) -> Self {
        let mut session = GameSession::new(*config.starting_mark());
        let ledger = Rc::new(RefCell::new(ScoreLedger::new()));
        let turn = Rc::new(RefCell::new(session.current_turn()));

        let sink = Rc::clone(&ledger);
        session.on_game_end(move |end| sink.borrow_mut().record(end));

        let display = Rc::clone(&turn);
        session.on_turn_change(move |mark| *display.borrow_mut() = mark);

        Self {
            session,
            ledger,
            turn,
            show_positions: *config.show_positions(),
            out,
        }
    }

    /// Returns a snapshot of the scores.
    pub fn ledger(&self) -> ScoreLedger {
        self.ledger.borrow().clone()
    }

    /// Returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Reads commands until `quit`, end of input, or `rounds` completed rounds.
    #[instrument(skip(self, input))]
    pub fn run(&mut self, input: impl BufRead, rounds: Option<u32>) -> Result<ScoreLedger> {
        info!("Host started");
        self.render_board()?;
        self.prompt()?;

        for line in input.lines() {
            let line = line?;
            let command = Command::parse(&line);
            debug!(?command, "Command received");

            match command {
                Command::Quit => break,
                Command::Blank => continue,
                Command::Reset => {
                    self.session.reset();
                    writeln!(self.out, "Round reset.")?;
                    self.render_board()?;
                    self.prompt()?;
                }
                Command::Score => self.render_scoreboard()?,
                Command::Help => writeln!(self.out, "{}", HELP)?,
                Command::Unknown => {
                    writeln!(
                        self.out,
                        "Unrecognised input: {:?}. Type `help` for commands.",
                        line.trim()
                    )?;
                }
                Command::Move(row, col) => {
                    if self.play(row, col)? && self.limit_reached(rounds) {
                        info!(rounds = self.ledger.borrow().rounds(), "Round limit reached");
                        break;
                    }
                }
            }
        }

        writeln!(self.out, "Final score:")?;
        self.render_scoreboard()?;
        self.out.flush()?;
        Ok(self.ledger())
    }

    /// Submits a move; returns true when it ended the round.
    fn play(&mut self, row: usize, col: usize) -> Result<bool> {
        if self.session.state().is_over() {
            self.session.reset();
            writeln!(self.out, "New round.")?;
        }

        match self.session.submit_move(row, col) {
            Ok(outcome) => {
                self.render_board()?;
                match outcome {
                    Outcome::Undecided => {
                        self.prompt()?;
                        Ok(false)
                    }
                    Outcome::Win(mark) => {
                        writeln!(self.out, "Winner is {}", mark)?;
                        self.finish_round()?;
                        Ok(true)
                    }
                    Outcome::Draw => {
                        writeln!(self.out, "Winner is NONE")?;
                        self.finish_round()?;
                        Ok(true)
                    }
                }
            }
            Err(e @ GameError::InvalidCoordinate { .. }) => {
                warn!(row, col, error = %e, "Host submitted an off-board coordinate");
                writeln!(self.out, "{}", e)?;
                Ok(false)
            }
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                Ok(false)
            }
        }
    }

    fn finish_round(&mut self) -> Result<()> {
        self.render_scoreboard()?;
        writeln!(self.out, "Enter a move to start a new round, or `quit`.")?;
        Ok(())
    }

    fn limit_reached(&self, rounds: Option<u32>) -> bool {
        rounds.is_some_and(|limit| self.ledger.borrow().rounds() >= limit)
    }

    fn render_board(&mut self) -> Result<()> {
        let board = self.session.board();
        let text = if self.show_positions {
            board.display_with_positions()
        } else {
            board.to_string()
        };
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn render_scoreboard(&mut self) -> Result<()> {
        let ledger = self.ledger.borrow();
        writeln!(self.out, "X: {}", ledger.wins(Mark::X))?;
        writeln!(self.out, "O: {}", ledger.wins(Mark::O))?;
        writeln!(self.out, "Draws: {}", ledger.draws())?;
        writeln!(self.out, "Current turn: {}", self.turn.borrow())?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        writeln!(self.out, "{} to move.", self.turn.borrow())?;
        Ok(())
    }
}
