//! Fallback quality scores for replies that carry no detectable score.
//!
//! `AppState` holds an `Arc<dyn ScoreSource>`; tests pin the value with
//! `FixedScore`.

use std::ops::RangeInclusive;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inclusive range the fallback score is drawn from.
pub const FALLBACK_SCORE_RANGE: RangeInclusive<i64> = 60..=85;

pub trait ScoreSource: Send + Sync {
    fn fallback_score(&self) -> i64;
}

/// Uniform draw from `FALLBACK_SCORE_RANGE`.
pub struct RandomScore {
    rng: Mutex<StdRng>,
}

impl RandomScore {
    /// `Some(seed)` makes the sequence of fallback scores reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl ScoreSource for RandomScore {
    fn fallback_score(&self) -> i64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(FALLBACK_SCORE_RANGE)
    }
}

/// Always returns the same score.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedScore(pub i64);

#[cfg(test)]
impl ScoreSource for FixedScore {
    fn fallback_score(&self) -> i64 {
        self.0
    }
}
