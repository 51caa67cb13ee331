//! Console front end: reads the player's answers line by line and prints the game transcript.

use crate::game::prelude::*;
use crate::stats::SessionSummary;
use crate::SessionConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const GAMES_PROMPT: &str = "How many games do you want to play? ";
const NOT_A_NUMBER: &str = "Please enter a number.";
const CHOICE_PROMPT: &str = "Please choose 'Hit' or 'Stand': ";
const CHOICE_REPROMPT: &str = "Please choose 'Hit' or 'Stand' (or 'H'/'S'): ";
const BANNER_WIDTH: usize = 30;

/// A run of games against the dealer, wired to an input and an output stream.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Session<R, W> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Session {
            input,
            output,
            config,
            rng,
        }
    }

    /// Plays every game of the session and returns the tally.
    pub fn run(&mut self) -> Result<SessionSummary, BlackjackGameError> {
        let games = match self.config.games {
            Some(games) => games,
            None => self.read_games()?,
        };
        info!(games, "session started");

        let mut summary = SessionSummary::default();
        for game_number in 1..=games {
            let round = BlackjackRound::new(&mut self.rng);
            let (outcome, player_total) = self.play_round(round, game_number, games)?;
            summary.record(outcome, player_total);
        }

        writeln!(self.output, "\nThanks for playing!")?;
        self.output.flush()?;
        info!("session finished\n{summary}");
        Ok(summary)
    }

    /// Plays `round` to the end, printing as it goes. Returns the outcome and the player's final total.
    pub fn play_round(
        &mut self,
        mut round: BlackjackRound,
        game_number: u32,
        games: u32,
    ) -> Result<(Outcome, u32), BlackjackGameError> {
        round.deal_initial()?;

        writeln!(self.output)?;
        writeln!(self.output, "{}", "*".repeat(BANNER_WIDTH))?;
        writeln!(self.output, "Game {game_number} of {games}")?;
        writeln!(self.output, "{}", "*".repeat(BANNER_WIDTH))?;
        write!(self.output, "{}", round.player().display(false))?;
        write!(self.output, "{}", round.dealer().display(false))?;

        if let Some(outcome) = self.announce(&round)? {
            return Ok((outcome, round.player().value()));
        }

        while round.player_can_act() {
            let decision = self.read_decision()?;
            round.apply(decision)?;
            if decision == Decision::Hit {
                write!(self.output, "{}", round.player().display(false))?;
            }
        }
        if let Some(outcome) = self.announce(&round)? {
            return Ok((outcome, round.player().value()));
        }

        round.play_dealer()?;
        write!(self.output, "{}", round.dealer().display(true))?;
        if let Some(outcome) = self.announce(&round)? {
            return Ok((outcome, round.player().value()));
        }

        writeln!(self.output, "Final Results")?;
        writeln!(self.output, "Your hand: {}", round.player().value())?;
        writeln!(self.output, "Dealer's hand: {}", round.dealer().value())?;
        round.resolve()?;
        match self.announce(&round)? {
            Some(outcome) => Ok((outcome, round.player().value())),
            None => Err(BlackjackGameError::new(
                "round did not finish after resolution".to_string(),
            )),
        }
    }

    /// Prints the outcome if the round is over.
    fn announce(&mut self, round: &BlackjackRound) -> Result<Option<Outcome>, BlackjackGameError> {
        let outcome = round.outcome();
        if let Some(outcome) = outcome {
            writeln!(self.output, "{outcome}")?;
        }
        Ok(outcome)
    }

    fn read_games(&mut self) -> Result<u32, BlackjackGameError> {
        loop {
            let line = self.read_line(GAMES_PROMPT)?;
            match line.trim().parse::<i64>() {
                Ok(n) if n > 0 => match u32::try_from(n) {
                    Ok(games) => return Ok(games),
                    Err(_) => {
                        debug!(n, "game count out of range");
                        writeln!(self.output, "{NOT_A_NUMBER}")?;
                    }
                },
                Ok(n) => debug!(n, "game count must be positive"),
                Err(e) => {
                    debug!(input = line.trim(), error = %e, "game count is not a number");
                    writeln!(self.output, "{NOT_A_NUMBER}")?;
                }
            }
        }
    }

    fn read_decision(&mut self) -> Result<Decision, BlackjackGameError> {
        let mut prompt = CHOICE_PROMPT;
        loop {
            let line = self.read_line(prompt)?;
            writeln!(self.output)?;
            match line.parse::<Decision>() {
                Ok(decision) => return Ok(decision),
                Err(e) => {
                    debug!("{e}");
                    prompt = CHOICE_REPROMPT;
                }
            }
        }
    }

    /// Writes `prompt` and reads one line. Running out of input is an error.
    fn read_line(&mut self, prompt: &str) -> Result<String, BlackjackGameError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BlackjackGameError::new(
                "input closed before the session finished".to_string(),
            ));
        }
        Ok(line)
    }
}
