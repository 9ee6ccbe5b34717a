//! The round engine.
//!
//! Drives one timed round: `Idle -> Running -> Finished`. Only two things
//! move a running round forward, and they never look at each other:
//!
//! - `tick`: host-reported elapsed time. Ends the round at zero.
//! - `submit_answer`: a button press. Scores and swaps the stimulus.
//!
//! Input arriving outside `Running` is ignored, never an error: a slow UI
//! can always deliver a tap after the timer ran out.
//!
//! ## Usage
//!
//! ```
//! use color_rush::core::{Color, ColorSet, GameMode};
//! use color_rush::round::{Phase, RoundEngine};
//!
//! let mut engine = RoundEngine::with_seed(7);
//! engine.start(GameMode::Stroop, 3_000, &ColorSet::all()).unwrap();
//!
//! let stimulus = engine.current_view().current_stimulus.unwrap();
//! engine.submit_answer(stimulus.label_color);
//! assert_eq!(engine.current_view().score, 1);
//!
//! for _ in 0..3 {
//!     engine.tick(1_000);
//! }
//! assert_eq!(engine.current_view().phase, Phase::Finished);
//! ```

use tracing::{debug, trace, warn};

use super::event::{AnswerOutcome, RenderSink, RoundEvent};
use super::state::{Phase, RoundState, RoundView};
use crate::core::config::validate_round;
use crate::core::{Color, ColorSet, GameMode, GameRng, RandomSource, Result, RoundConfig};
use crate::stimulus::StimulusGenerator;

/// Most events kept undrained. Beyond this the oldest are dropped, so a
/// host that only polls `current_view()` never grows the queue unbounded.
pub const MAX_PENDING_EVENTS: usize = 128;

/// Owns the lifecycle of a round and the generator feeding it.
///
/// Single-owner: every transition takes `&mut self`. A host with several
/// threads must serialize access itself.
#[derive(Debug)]
pub struct RoundEngine<R = GameRng> {
    generator: StimulusGenerator<R>,
    colors: ColorSet,
    state: RoundState,
    events: Vec<RoundEvent>,
}

impl RoundEngine<GameRng> {
    /// Engine backed by a seeded `GameRng`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl<R: RandomSource> RoundEngine<R> {
    /// Create an idle engine drawing stimuli from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            generator: StimulusGenerator::new(rng),
            colors: ColorSet::empty(),
            state: RoundState::default(),
            events: Vec::new(),
        }
    }

    // === Transitions ===

    /// Start a new round.
    ///
    /// Replaces whatever round was in progress, running or finished, and
    /// discards its undrained events. On error the engine is left exactly
    /// as it was.
    pub fn start(&mut self, mode: GameMode, duration_ms: u64, colors: &ColorSet) -> Result<()> {
        if let Err(err) = validate_round(duration_ms, colors) {
            warn!(%err, "rejected round configuration");
            return Err(err);
        }

        let first = self.generator.draw(mode, colors);
        self.colors = colors.clone();
        self.state = RoundState::running(mode, duration_ms, first);
        self.events.clear();

        debug!(?mode, duration_ms, colors = colors.len(), "round started");

        self.emit(RoundEvent::StimulusChanged(first));
        self.emit(RoundEvent::ScoreChanged(0));
        self.emit(RoundEvent::TimeChanged {
            remaining_ms: duration_ms,
        });
        Ok(())
    }

    /// Start a new round from a configuration.
    pub fn start_with(&mut self, config: &RoundConfig) -> Result<()> {
        self.start(config.mode, config.duration_ms, &config.colors)
    }

    /// Advance the countdown by `elapsed_ms`.
    ///
    /// Returns the final score if this tick ended the round. Does nothing
    /// unless the round is running.
    pub fn tick(&mut self, elapsed_ms: u64) -> Option<u32> {
        if self.state.phase != Phase::Running {
            return None;
        }

        let remaining = self.state.time_remaining_ms.saturating_sub(elapsed_ms);
        self.state.time_remaining_ms = remaining;
        trace!(elapsed_ms, remaining_ms = remaining, "tick");
        self.emit(RoundEvent::TimeChanged {
            remaining_ms: remaining,
        });

        if remaining > 0 {
            return None;
        }

        // Stimulus stays in place for any trailing render.
        self.state.phase = Phase::Finished;
        let final_score = self.state.score;
        debug!(final_score, answers = self.state.answers, "round over");
        self.emit(RoundEvent::RoundOver { final_score });
        Some(final_score)
    }

    /// Answer the current stimulus with `chosen`.
    ///
    /// A correct answer scores one point. Either way a fresh stimulus
    /// replaces the current one. Returns `None` (and changes nothing) when
    /// no round is running.
    pub fn submit_answer(&mut self, chosen: Color) -> Option<AnswerOutcome> {
        if self.state.phase != Phase::Running {
            return None;
        }
        let current = self.state.current_stimulus?;

        let mode = self.state.mode;
        let outcome = if chosen == current.correct_answer(mode) {
            self.state.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        };
        self.state.answers += 1;
        trace!(%chosen, ?outcome, score = self.state.score, "answer");

        let next = self.generator.draw(mode, &self.colors);
        self.state.current_stimulus = Some(next);

        self.emit(RoundEvent::AnswerOutcome(outcome));
        self.emit(RoundEvent::ScoreChanged(self.state.score));
        self.emit(RoundEvent::StimulusChanged(next));
        Some(outcome)
    }

    // === Queries ===

    /// Snapshot for rendering.
    #[must_use]
    pub fn current_view(&self) -> RoundView {
        self.state.view()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Colors of the current (or last) round.
    #[must_use]
    pub fn colors(&self) -> &ColorSet {
        &self.colors
    }

    /// The random source, e.g. to capture a `GameRng` state for replay.
    pub fn rng(&self) -> &R {
        self.generator.rng()
    }

    // === Events ===

    /// Events emitted since the last drain, oldest first.
    #[must_use]
    pub fn pending_events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Take all pending events.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, RoundEvent> {
        self.events.drain(..)
    }

    /// Forward all pending events to `sink`, oldest first.
    pub fn dispatch<S: RenderSink + ?Sized>(&mut self, sink: &mut S) {
        for event in self.events.drain(..) {
            sink.on_event(event);
        }
    }

    fn emit(&mut self, event: RoundEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConfigIssue, GameError, ScriptedSource};
    use crate::stimulus::Stimulus;

    fn red_green() -> ColorSet {
        ColorSet::from_colors([Color::Red, Color::Green])
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = RoundEngine::with_seed(1);
        let view = engine.current_view();
        assert_eq!(view.phase, Phase::Idle);
        assert_eq!(view.score, 0);
        assert!(view.current_stimulus.is_none());
        assert!(engine.pending_events().is_empty());
    }

    #[test]
    fn test_idle_ignores_input() {
        let mut engine = RoundEngine::with_seed(1);
        assert_eq!(engine.submit_answer(Color::Red), None);
        assert_eq!(engine.tick(1000), None);
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.pending_events().is_empty());
    }

    #[test]
    fn test_start_initializes_round() {
        let mut engine = RoundEngine::new(ScriptedSource::new(vec![1]));
        engine.start(GameMode::Normal, 5000, &red_green()).unwrap();

        let view = engine.current_view();
        assert_eq!(view.phase, Phase::Running);
        assert_eq!(view.mode, GameMode::Normal);
        assert_eq!(view.score, 0);
        assert_eq!(view.time_remaining_ms, 5000);
        assert_eq!(view.current_stimulus, Some(Stimulus::plain(Color::Green)));

        let events: Vec<_> = engine.drain_events().collect();
        assert_eq!(
            events,
            vec![
                RoundEvent::StimulusChanged(Stimulus::plain(Color::Green)),
                RoundEvent::ScoreChanged(0),
                RoundEvent::TimeChanged { remaining_ms: 5000 },
            ]
        );
        assert!(engine.pending_events().is_empty());
    }

    #[test]
    fn test_failed_start_leaves_state_untouched() {
        let mut engine = RoundEngine::new(ScriptedSource::new(vec![0]));
        engine.start(GameMode::Normal, 5000, &red_green()).unwrap();
        engine.submit_answer(Color::Red);
        engine.drain_events().for_each(drop);
        let before = engine.current_view();

        let err = engine.start(GameMode::Normal, 0, &red_green()).unwrap_err();
        assert_eq!(err, GameError::InvalidConfiguration(ConfigIssue::ZeroDuration));
        assert_eq!(engine.current_view(), before);
        assert!(engine.pending_events().is_empty());
    }

    #[test]
    fn test_correct_and_incorrect_answers() {
        // Always index 0: Red in Normal mode.
        let mut engine = RoundEngine::new(ScriptedSource::new(vec![0]));
        engine.start(GameMode::Normal, 1000, &red_green()).unwrap();
        engine.drain_events().for_each(drop);

        assert_eq!(engine.submit_answer(Color::Red), Some(AnswerOutcome::Correct));
        assert_eq!(engine.score(), 1);
        assert_eq!(
            engine.drain_events().collect::<Vec<_>>(),
            vec![
                RoundEvent::AnswerOutcome(AnswerOutcome::Correct),
                RoundEvent::ScoreChanged(1),
                RoundEvent::StimulusChanged(Stimulus::plain(Color::Red)),
            ]
        );

        assert_eq!(engine.submit_answer(Color::Green), Some(AnswerOutcome::Incorrect));
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.current_view().answers, 2);
    }

    #[test]
    fn test_stroop_scores_label_not_swatch() {
        // Display index 0 (Red), label index 0 of remaining [Green].
        let mut engine = RoundEngine::new(ScriptedSource::new(vec![0]));
        engine.start(GameMode::Stroop, 1000, &red_green()).unwrap();
        assert_eq!(
            engine.current_view().current_stimulus,
            Some(Stimulus::new(Color::Red, Color::Green))
        );

        assert_eq!(engine.submit_answer(Color::Red), Some(AnswerOutcome::Incorrect));
        assert_eq!(engine.submit_answer(Color::Green), Some(AnswerOutcome::Correct));
        assert_eq!(engine.score(), 1);
    }

    #[test]
    fn test_stimulus_regenerated_after_every_answer() {
        let mut engine = RoundEngine::new(ScriptedSource::new(vec![0, 1]));
        engine.start(GameMode::Normal, 1000, &red_green()).unwrap();
        assert_eq!(engine.current_view().current_stimulus, Some(Stimulus::plain(Color::Red)));

        engine.submit_answer(Color::Blue);
        assert_eq!(engine.current_view().current_stimulus, Some(Stimulus::plain(Color::Green)));
        engine.submit_answer(Color::Green);
        assert_eq!(engine.current_view().current_stimulus, Some(Stimulus::plain(Color::Red)));
        assert_eq!(engine.rng().consumed(), 3);
    }

    #[test]
    fn test_tick_counts_down_and_finishes() {
        let mut engine = RoundEngine::with_seed(3);
        engine.start(GameMode::Normal, 2500, &ColorSet::all()).unwrap();
        engine.drain_events().for_each(drop);

        assert_eq!(engine.tick(1000), None);
        assert_eq!(engine.current_view().time_remaining_ms, 1500);
        assert_eq!(engine.tick(1000), None);
        assert_eq!(engine.current_view().time_remaining_secs(), 0);
        assert_eq!(engine.tick(1000), Some(0));

        let view = engine.current_view();
        assert_eq!(view.phase, Phase::Finished);
        assert_eq!(view.time_remaining_ms, 0);

        let events: Vec<_> = engine.drain_events().collect();
        assert_eq!(
            events,
            vec![
                RoundEvent::TimeChanged { remaining_ms: 1500 },
                RoundEvent::TimeChanged { remaining_ms: 500 },
                RoundEvent::TimeChanged { remaining_ms: 0 },
                RoundEvent::RoundOver { final_score: 0 },
            ]
        );
    }

    #[test]
    fn test_finished_round_is_frozen() {
        let mut engine = RoundEngine::new(ScriptedSource::new(vec![0]));
        engine.start(GameMode::Normal, 1000, &red_green()).unwrap();
        engine.submit_answer(Color::Red);
        assert_eq!(engine.tick(1000), Some(1));
        engine.drain_events().for_each(drop);
        let frozen = engine.current_view();

        assert_eq!(engine.submit_answer(Color::Red), None);
        assert_eq!(engine.tick(500), None);
        assert_eq!(engine.current_view(), frozen);
        assert!(frozen.current_stimulus.is_some());
        assert!(engine.pending_events().is_empty());
    }

    #[test]
    fn test_restart_discards_prior_round() {
        let mut engine = RoundEngine::new(ScriptedSource::new(vec![0]));
        engine.start(GameMode::Normal, 1000, &red_green()).unwrap();
        engine.submit_answer(Color::Red);
        engine.submit_answer(Color::Red);
        engine.tick(400);

        engine
            .start(GameMode::Stroop, 2000, &ColorSet::all())
            .unwrap();
        let view = engine.current_view();
        assert_eq!(view.phase, Phase::Running);
        assert_eq!(view.mode, GameMode::Stroop);
        assert_eq!(view.score, 0);
        assert_eq!(view.answers, 0);
        assert_eq!(view.time_remaining_ms, 2000);
        assert_eq!(engine.colors().len(), 6);

        // Only the new round's opening events remain queued.
        assert_eq!(
            engine.pending_events(),
            &[
                RoundEvent::StimulusChanged(Stimulus::new(Color::Red, Color::Green)),
                RoundEvent::ScoreChanged(0),
                RoundEvent::TimeChanged { remaining_ms: 2000 },
            ]
        );
    }

    #[test]
    fn test_failed_restart_keeps_pending_events() {
        let mut engine = RoundEngine::new(ScriptedSource::new(vec![0]));
        engine.start(GameMode::Normal, 1000, &red_green()).unwrap();
        engine.tick(1000);
        let before = engine.pending_events().to_vec();

        assert!(engine.start(GameMode::Normal, 0, &red_green()).is_err());
        assert_eq!(engine.pending_events(), before.as_slice());
        assert_eq!(
            engine.pending_events().last(),
            Some(&RoundEvent::RoundOver { final_score: 0 })
        );
    }

    #[test]
    fn test_polling_host_keeps_queue_bounded() {
        let mut engine = RoundEngine::with_seed(8);
        for _ in 0..50 {
            engine.start(GameMode::Stroop, 30_000, &ColorSet::all()).unwrap();
            for color in Color::ALL.iter().cycle().take(40) {
                engine.submit_answer(*color);
            }
            for _ in 0..30 {
                engine.tick(1_000);
            }
            assert!(engine.pending_events().len() <= MAX_PENDING_EVENTS);
        }
        assert_eq!(
            engine.pending_events().last(),
            Some(&RoundEvent::RoundOver {
                final_score: engine.score()
            })
        );
        // 3 opening + 120 answer + 30 tick + 1 round-over, oldest dropped.
        assert_eq!(engine.pending_events().len(), MAX_PENDING_EVENTS);
    }

    #[test]
    fn test_start_with_config() {
        let mut engine = RoundEngine::with_seed(11);
        let config = RoundConfig::new()
            .with_mode(GameMode::Stroop)
            .with_duration_ms(4000);
        engine.start_with(&config).unwrap();
        assert_eq!(engine.current_view().time_remaining_ms, 4000);
        assert_eq!(engine.current_view().mode, GameMode::Stroop);

        let bad = RoundConfig::new().with_colors([Color::Blue]);
        assert!(engine.start_with(&bad).is_err());
        assert_eq!(engine.phase(), Phase::Running);
    }

    #[test]
    fn test_dispatch_to_sink() {
        let mut engine = RoundEngine::with_seed(5);
        engine.start(GameMode::Normal, 1000, &ColorSet::all()).unwrap();
        engine.tick(1000);

        let mut sink: Vec<RoundEvent> = Vec::new();
        engine.dispatch(&mut sink);
        assert_eq!(sink.len(), 5);
        assert_eq!(sink.last(), Some(&RoundEvent::RoundOver { final_score: 0 }));
        assert!(engine.pending_events().is_empty());
    }
}
