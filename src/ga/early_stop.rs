//! Stagnation-based early stopping.
//!
//! [`EarlyStopping`] watches the best-known score after each epoch and
//! reports convergence once it has not improved for `patience`
//! consecutive epochs.

use super::evaluator::beats;
use super::types::FitnessScore;

/// Patience-window stagnation detector.
///
/// # Examples
///
/// ```
/// use u_genalg::ga::EarlyStopping;
///
/// let mut stop = EarlyStopping::new(2);
/// stop.update(1.0);
/// stop.update(1.0);
/// assert!(!stop.should_stop());
/// stop.update(1.0);
/// assert!(stop.should_stop());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EarlyStopping {
    patience: usize,
    min_relative_improvement: f64,
    best: Option<FitnessScore>,
    stale_epochs: usize,
}

impl EarlyStopping {
    /// Creates a detector that fires after `patience` stale epochs.
    ///
    /// `patience == 0` disables early stopping.
    pub fn new(patience: usize) -> Self {
        Self {
            patience,
            min_relative_improvement: 0.0,
            best: None,
            stale_epochs: 0,
        }
    }

    /// Only improvements of at least this relative size reset the counter.
    ///
    /// The ratio is `|new - old| / |old|`, or the absolute difference when
    /// `old` is zero. Set to 0.0 to count any improvement.
    pub fn with_min_relative_improvement(mut self, threshold: f64) -> Self {
        self.min_relative_improvement = threshold.max(0.0);
        self
    }

    /// Records the best-known score after an epoch.
    ///
    /// Returns `true` if the score counted as an improvement.
    pub fn update(&mut self, score: FitnessScore) -> bool {
        let improved = match self.best {
            None => true,
            Some(old) => beats(score, old) && self.significant(old, score),
        };

        if improved {
            self.stale_epochs = 0;
        } else {
            self.stale_epochs += 1;
        }
        if self.best.map_or(true, |old| beats(score, old)) {
            self.best = Some(score);
        }
        improved
    }

    fn significant(&self, old: FitnessScore, new: FitnessScore) -> bool {
        if self.min_relative_improvement <= 0.0 || old.is_nan() {
            return true;
        }
        let delta = (new - old).abs();
        let ratio = if old == 0.0 { delta } else { delta / old.abs() };
        ratio >= self.min_relative_improvement
    }

    /// True once the score has stalled for the full patience window.
    pub fn should_stop(&self) -> bool {
        self.patience > 0 && self.stale_epochs >= self.patience
    }

    /// Consecutive epochs without improvement.
    pub fn stale_epochs(&self) -> usize {
        self.stale_epochs
    }

    pub fn patience(&self) -> usize {
        self.patience
    }

    /// Forgets all history.
    pub fn reset(&mut self) {
        self.best = None;
        self.stale_epochs = 0;
    }
}
