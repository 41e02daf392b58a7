//! Per-frame smoothing of tunable parameters.
//!
//! A [`Smoothed`] value moves toward its pending target by a fixed fraction
//! of the remaining distance each frame. The target is dropped only when the
//! stepped value is bit-for-bit equal to it; there is no epsilon, so a value
//! can sit one ulp short of its target indefinitely.

/// One geometric smoothing step: `current + (target - current) * factor`.
#[inline]
pub fn lerp_step(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed {
    value: f64,
    target: Option<f64>,
}

impl Smoothed {
    /// Starts with a pending target equal to the value, so the first step converges.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            target: Some(value),
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> Option<f64> {
        self.target
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.target.is_some()
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = Some(target);
    }

    /// Advance one frame. Returns the (possibly unchanged) live value.
    pub fn step(&mut self, factor: f64) -> f64 {
        if let Some(target) = self.target {
            self.value = lerp_step(self.value, target, factor);
            if self.value == target {
                self.target = None;
            }
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_target_converges_on_first_step() {
        let mut s = Smoothed::new(0.2);
        assert!(s.is_pending());
        assert_eq!(s.step(0.1), 0.2);
        assert!(!s.is_pending());
    }

    #[test]
    fn idle_value_is_left_alone() {
        let mut s = Smoothed::new(3.0);
        s.step(0.1);
        assert_eq!(s.step(0.1), 3.0);
        assert_eq!(s.target(), None);
    }
}
