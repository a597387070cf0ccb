/// Counts a fixed interval down against frame deltas. Elapses once the
/// interval is strictly used up; `reset` re-arms it for another round.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    interval: f32,
    remaining: f32,
}

impl Timer {
    pub fn new(interval: f32) -> Self {
        Timer {
            interval,
            remaining: interval,
        }
    }

    pub fn update(&mut self, delta: f32) {
        self.remaining -= delta;
    }

    pub fn has_elapsed(&self) -> bool {
        self.remaining < 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn reset(&mut self) {
        self.remaining = self.interval;
    }

    pub fn reset_with(&mut self, interval: f32) {
        self.interval = interval;
        self.remaining = interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapses_after_interval() {
        let mut timer = Timer::new(1.0);
        timer.update(0.5);
        assert!(!timer.has_elapsed());
        timer.update(0.6);
        assert!(timer.has_elapsed());
    }

    #[test]
    fn test_exact_interval_is_not_yet_elapsed() {
        let mut timer = Timer::new(1.0);
        timer.update(1.0);
        assert!(!timer.has_elapsed());
        timer.update(0.001);
        assert!(timer.has_elapsed());
    }

    #[test]
    fn test_reset_rearms() {
        let mut timer = Timer::new(0.25);
        timer.update(0.3);
        assert!(timer.has_elapsed());

        timer.reset();
        assert!(!timer.has_elapsed());
        assert_eq!(timer.remaining(), 0.25);
    }

    #[test]
    fn test_reset_with_changes_interval() {
        let mut timer = Timer::new(0.25);
        timer.reset_with(2.0);
        assert_eq!(timer.interval(), 2.0);
        timer.update(1.0);
        assert!(!timer.has_elapsed());
    }
}
