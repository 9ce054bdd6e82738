//! Shrinking heuristic implementation
//!
//! Variables sitting at a bound (0 or C) whose gradient says they would only
//! move further into the bound are temporarily removed from the active set,
//! which shrinks every working-set search and gradient update. Before the
//! solver declares optimality the full gradient is rebuilt and the check is
//! repeated over all variables, so the final solution is unaffected.

/// Position of a Lagrange multiplier relative to its box [0, C]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaStatus {
    LowerBound,
    UpperBound,
    Free,
}

impl AlphaStatus {
    pub fn of(alpha: f64, c: f64) -> Self {
        if alpha >= c {
            AlphaStatus::UpperBound
        } else if alpha <= 0.0 {
            AlphaStatus::LowerBound
        } else {
            AlphaStatus::Free
        }
    }
}

/// Decides when to run a shrinking pass and which variables to drop
#[derive(Debug)]
pub struct ShrinkingStrategy {
    /// Iterations between passes
    interval: usize,
    /// Iterations left until the next pass
    counter: usize,
    /// Set once the gradient has been rebuilt near convergence
    unshrunk: bool,
}

impl ShrinkingStrategy {
    /// Create a new shrinking strategy
    ///
    /// # Arguments
    /// * `n_samples` - Number of training samples
    /// * `interval` - Upper bound on iterations between shrinking passes
    pub fn new(n_samples: usize, interval: usize) -> Self {
        let interval = n_samples.min(interval).max(1);
        Self {
            interval,
            counter: interval + 1,
            unshrunk: false,
        }
    }

    /// Advance one iteration; returns true when a shrinking pass is due
    pub fn tick(&mut self) -> bool {
        self.counter -= 1;
        if self.counter == 0 {
            self.counter = self.interval;
            true
        } else {
            false
        }
    }

    /// Run a pass on the next iteration
    pub fn schedule_soon(&mut self) {
        self.counter = 1;
    }

    /// Returns true exactly once, the first time the maximal violation
    /// `gmax1 + gmax2` drops within ten times the stopping tolerance
    pub fn should_unshrink(&mut self, gmax1: f64, gmax2: f64, epsilon: f64) -> bool {
        if !self.unshrunk && gmax1 + gmax2 <= epsilon * 10.0 {
            self.unshrunk = true;
            true
        } else {
            false
        }
    }

    /// Whether a variable can leave the active set
    ///
    /// `gmax1` is the largest violation among variables that may move up in the
    /// `y·α` direction, `gmax2` among those that may move down.
    pub fn is_shrinkable(status: AlphaStatus, label: f64, grad: f64, gmax1: f64, gmax2: f64) -> bool {
        match status {
            AlphaStatus::UpperBound => {
                if label > 0.0 {
                    -grad > gmax1
                } else {
                    -grad > gmax2
                }
            }
            AlphaStatus::LowerBound => {
                if label > 0.0 {
                    grad > gmax2
                } else {
                    grad > gmax1
                }
            }
            AlphaStatus::Free => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_status() {
        assert_eq!(AlphaStatus::of(0.0, 1.0), AlphaStatus::LowerBound);
        assert_eq!(AlphaStatus::of(1.0, 1.0), AlphaStatus::UpperBound);
        assert_eq!(AlphaStatus::of(0.3, 1.0), AlphaStatus::Free);
    }

    #[test]
    fn test_tick_schedule() {
        let mut strategy = ShrinkingStrategy::new(3, 1000);
        // First pass after interval + 1 ticks, then every interval ticks
        let due: Vec<bool> = (0..7).map(|_| strategy.tick()).collect();
        assert_eq!(due, vec![false, false, false, true, false, false, true]);
    }

    #[test]
    fn test_schedule_soon() {
        let mut strategy = ShrinkingStrategy::new(100, 10);
        strategy.schedule_soon();
        assert!(strategy.tick());
    }

    #[test]
    fn test_should_unshrink_fires_once() {
        let mut strategy = ShrinkingStrategy::new(10, 5);
        assert!(!strategy.should_unshrink(1.0, 1.0, 0.001));
        assert!(strategy.should_unshrink(0.004, 0.004, 0.001));
        assert!(!strategy.should_unshrink(0.0, 0.0, 0.001));
    }

    #[test]
    fn test_free_variables_never_shrink() {
        assert!(!ShrinkingStrategy::is_shrinkable(
            AlphaStatus::Free,
            1.0,
            100.0,
            0.0,
            0.0
        ));
    }

    #[test]
    fn test_bound_variables_shrink_on_strong_gradient() {
        // Positive label at lower bound with large gradient wants to stay at 0
        assert!(ShrinkingStrategy::is_shrinkable(
            AlphaStatus::LowerBound,
            1.0,
            2.0,
            0.5,
            0.5
        ));
        assert!(!ShrinkingStrategy::is_shrinkable(
            AlphaStatus::LowerBound,
            1.0,
            0.1,
            0.5,
            0.5
        ));
        // Negative label at upper bound
        assert!(ShrinkingStrategy::is_shrinkable(
            AlphaStatus::UpperBound,
            -1.0,
            -2.0,
            0.5,
            0.5
        ));
    }
}
