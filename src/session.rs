use std::time::{Duration, Instant};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{timer::TickSchedule, words::WordList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum Phase {
    #[default]
    Idle,
    Running,
}

/// Everything the screen needs to know about the current game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub current_word: Option<String>,
    pub phase: Phase,
    pub elapsed_seconds: u64,
    pub rounds_started: u64,
}

impl SessionState {
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

/// Owns the session state and the stopwatch that drives it.
///
/// Calling `start` while a round is running is a no-op: the word and the
/// clock of the round in progress are kept. Only `stop` ends a round.
#[derive(Debug)]
pub struct SessionController<R: Rng = StdRng> {
    words: WordList,
    rng: R,
    state: SessionState,
    schedule: Option<TickSchedule>,
}

impl SessionController<StdRng> {
    pub fn from_entropy(words: WordList) -> Self {
        Self::new(words, StdRng::from_entropy())
    }

    pub fn seeded(words: WordList, seed: u64) -> Self {
        Self::new(words, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SessionController<R> {
    pub fn new(words: WordList, rng: R) -> Self {
        Self {
            words,
            rng,
            state: SessionState::default(),
            schedule: None,
        }
    }

    pub fn start(&mut self) -> bool {
        self.start_at(Instant::now())
    }

    /// Begin a new round with its stopwatch anchored at `now`.
    /// Returns false if a round was already running.
    pub fn start_at(&mut self, now: Instant) -> bool {
        if self.state.is_running() {
            tracing::debug!(
                round = self.state.rounds_started,
                "start ignored, round already running"
            );
            return false;
        }

        let word = self.words.draw(&mut self.rng).to_string();
        self.state.current_word = Some(word);
        self.state.elapsed_seconds = 0;
        self.state.phase = Phase::Running;
        self.state.rounds_started += 1;
        // Replacing drops any previous schedule before the new one can fire.
        self.schedule = Some(TickSchedule::every_second(now));

        tracing::info!(
            round = self.state.rounds_started,
            word = self.state.current_word.as_deref().unwrap_or_default(),
            "round started"
        );
        true
    }

    /// End the current round. Returns false if nothing was running.
    pub fn stop(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }

        self.state.phase = Phase::Idle;
        self.schedule = None;

        tracing::info!(
            round = self.state.rounds_started,
            elapsed_seconds = self.state.elapsed_seconds,
            "round stopped"
        );
        true
    }

    pub fn toggle(&mut self) -> Phase {
        self.toggle_at(Instant::now())
    }

    /// The single activation control: start when idle, stop when running.
    pub fn toggle_at(&mut self, now: Instant) -> Phase {
        match self.state.phase {
            Phase::Idle => {
                self.start_at(now);
            }
            Phase::Running => {
                self.stop();
            }
        }
        self.state.phase
    }

    /// Advance the stopwatch by one second. Ticks that arrive while idle are dropped.
    pub fn tick(&mut self) {
        if !self.state.is_running() {
            tracing::debug!("discarding tick delivered while idle");
            return;
        }
        self.state.elapsed_seconds += 1;
    }

    /// Apply every tick the schedule says is due. Returns how many were applied.
    pub fn poll_ticks(&mut self, now: Instant) -> u32 {
        let due = match self.schedule.as_mut() {
            Some(schedule) => schedule.due_ticks(now),
            None => return 0,
        };

        for _ in 0..due {
            self.tick();
        }
        due
    }

    /// How long the event loop may sleep before the next tick, or `None` when idle.
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.schedule.as_ref().map(|s| s.until_next(now))
    }

    pub fn has_tick_source(&self) -> bool {
        self.schedule.is_some()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_word(&self) -> Option<&str> {
        self.state.current_word.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.state.elapsed_seconds
    }

    pub fn rounds_started(&self) -> u64 {
        self.state.rounds_started
    }

    pub fn word_list(&self) -> &WordList {
        &self.words
    }
}
