//! Game controller
//!
//! Wires the dictionary, the daily word, the session and the score board to a
//! [`Renderer`]. Startup has two phases: [`GameController::load_dictionary`]
//! (the slow, fallible part) and [`GameController::start`]. Until the first
//! phase succeeds every guess is refused as an unknown word.
//!
//! No error escapes this layer: rejected guesses become a message on the
//! renderer and a [`SubmitStatus`] for the caller.

use crate::config::GameConfig;
use crate::daily::DailyWordSelector;
use crate::dictionary::{Dictionary, LoadError};
use crate::game::{GameSession, GuessError, Outcome, ScoreBoard};
use crate::render::Renderer;
use crate::storage::KeyValueStore;
use chrono::NaiveDate;
use rand::Rng;
use tracing::info;

pub const MSG_INCOMPLETE: &str = "Please fill in all the letters before submitting.";
pub const MSG_UNKNOWN_WORD: &str = "This is not a valid French word. Please try again.";
pub const MSG_FINISHED: &str = "The game is over. A new word arrives at midnight.";
pub const MSG_WON: &str = "Congratulations! You've guessed the word!";

/// What happened to a submitted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// No game is running, or it is already over
    Ignored,
    /// The guess was refused; the same row stays open
    Rejected(GuessError),
    /// The guess was scored and the next row is open
    Continue,
    Won { points: u32, total: u64 },
    Lost,
}

/// Runs one player's game against a renderer and a store
pub struct GameController<S: KeyValueStore> {
    config: GameConfig,
    dictionary: Dictionary,
    store: S,
    scoreboard: ScoreBoard,
    session: Option<GameSession>,
    active_row: Option<usize>,
    day: Option<NaiveDate>,
}

impl<S: KeyValueStore> GameController<S> {
    #[must_use]
    pub fn new(config: GameConfig, store: S) -> Self {
        let scoreboard = ScoreBoard::load(&store);

        Self {
            config,
            dictionary: Dictionary::new(),
            store,
            scoreboard,
            session: None,
            active_row: None,
            day: None,
        }
    }

    /// Use an already loaded dictionary instead of calling `load_dictionary`
    #[must_use]
    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// First startup phase: load the configured word list
    ///
    /// A failure is not fatal; the daily word falls back to the fixed word.
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] so the caller can tell the player.
    pub fn load_dictionary(&mut self) -> Result<usize, LoadError> {
        self.dictionary.load(&self.config.dictionary)
    }

    /// Second startup phase: pick today's word and draw a fresh game
    pub fn start<R: Renderer + ?Sized>(&mut self, renderer: &mut R, today: NaiveDate) {
        self.start_with_rng(renderer, today, &mut rand::rng());
    }

    /// [`GameController::start`] with an explicit random source
    pub fn start_with_rng<R, G>(&mut self, renderer: &mut R, today: NaiveDate, rng: &mut G)
    where
        R: Renderer + ?Sized,
        G: Rng + ?Sized,
    {
        let word = DailyWordSelector::new(&self.dictionary)
            .with_max_length(self.config.max_secret_length)
            .get_secret_word(&mut self.store, today, rng);
        let session = GameSession::with_max_attempts(word, self.config.max_attempts);
        let length = session.secret().len();

        info!(%today, length, "Starting game");

        renderer.display_word_length(length);
        renderer.render_grid(session.max_attempts(), length);
        renderer.display_attempts_left(session.attempts_left());
        renderer.display_score(self.scoreboard.total());

        self.session = Some(session);
        self.day = Some(today);
        self.open_row(renderer, 0);
    }

    /// True when no game has started or the running one belongs to another day
    #[must_use]
    pub fn needs_restart(&self, today: NaiveDate) -> bool {
        self.day != Some(today)
    }

    /// Submit whatever is typed in the open row
    pub fn submit_active_row<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> SubmitStatus {
        let (Some(session), Some(row)) = (self.session.as_mut(), self.active_row) else {
            return SubmitStatus::Ignored;
        };

        if session.is_terminated() {
            renderer.show_message(MSG_FINISHED);
            return SubmitStatus::Ignored;
        }

        let text = renderer.read_row_text(row);
        let result = match session.submit_guess(&text, &self.dictionary) {
            Ok(result) => result,
            Err(err) => {
                renderer.show_message(rejection_message(&err));
                return SubmitStatus::Rejected(err);
            }
        };

        for (column, &verdict) in result.feedback.verdicts().iter().enumerate() {
            renderer.set_cell_verdict(row, column, verdict);
        }
        renderer.display_attempts_left(session.attempts_left());

        let points = session.compute_score();
        let secret = session.secret().text().to_string();

        match result.outcome {
            Outcome::Won => {
                let points = points.unwrap_or_default();
                let total = self.scoreboard.record_win(&mut self.store, points);
                self.close_rows(renderer);
                renderer.show_message(MSG_WON);
                renderer.display_score(total);
                SubmitStatus::Won { points, total }
            }
            Outcome::Lost => {
                self.close_rows(renderer);
                renderer.show_message(&format!("Game over! The word was {secret}"));
                SubmitStatus::Lost
            }
            Outcome::InProgress => {
                self.open_row(renderer, row + 1);
                SubmitStatus::Continue
            }
        }
    }

    fn open_row<R: Renderer + ?Sized>(&mut self, renderer: &mut R, row: usize) {
        let Some(session) = &self.session else {
            return;
        };

        for r in 0..session.max_attempts() {
            renderer.set_row_editable(r, r == row);
        }

        let secret = session.secret();
        if self.config.reveal_first_letter {
            renderer.reveal_letter(row, 0, secret.first_letter());
        }

        let column = self
            .config
            .first_editable_column()
            .min(secret.len().saturating_sub(1));
        renderer.focus_cell(row, column);
        self.active_row = Some(row);
    }

    fn close_rows<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        if let Some(session) = &self.session {
            for r in 0..session.max_attempts() {
                renderer.set_row_editable(r, false);
            }
        }
        self.active_row = None;
    }

    #[must_use]
    pub const fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn active_row(&self) -> Option<usize> {
        self.active_row
    }

    #[must_use]
    pub const fn day(&self) -> Option<NaiveDate> {
        self.day
    }

    #[must_use]
    pub const fn score_total(&self) -> u64 {
        self.scoreboard.total()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

/// User-facing text for a refused guess
#[must_use]
pub fn rejection_message(err: &GuessError) -> &'static str {
    match err {
        GuessError::Validation { .. } => MSG_INCOMPLETE,
        GuessError::UnknownWord(_) => MSG_UNKNOWN_WORD,
        GuessError::Finished => MSG_FINISHED,
    }
}
