//! High-score store contract.
//!
//! Persistence lives with the host. The engine only hands over final
//! scores; whatever implements `HighScoreStore` decides where they go.

/// Keeps the best score seen.
pub trait HighScoreStore {
    /// Current best score (0 if none recorded).
    fn get(&self) -> u32;

    /// Record `score` if it beats the current best.
    fn set_if_higher(&mut self, score: u32);
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for &mut S {
    fn get(&self) -> u32 {
        (**self).get()
    }

    fn set_if_higher(&mut self, score: u32) {
        (**self).set_if_higher(score)
    }
}

/// Process-local store, e.g. for tests or hosts without persistence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InMemoryHighScore {
    best: u32,
}

impl InMemoryHighScore {
    /// Store starting from an existing best.
    #[must_use]
    pub const fn with_best(best: u32) -> Self {
        Self { best }
    }
}

impl HighScoreStore for InMemoryHighScore {
    fn get(&self) -> u32 {
        self.best
    }

    fn set_if_higher(&mut self, score: u32) {
        if score > self.best {
            self.best = score;
        }
    }
}
