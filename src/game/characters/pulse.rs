// Recoil pulse, doubling as a melee cooldown

/// Value below which the pulse counts as settled
pub const READY_THRESHOLD: f32 = 0.1;

/// Constant part of the per-tick decay
const BASE_DECAY: f32 = 0.1;

/// A decaying recoil value.
///
/// `trigger` jumps to `peak`; each tick subtracts `BASE_DECAY + peak / steps`
/// and clamps at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatePulse {
    peak: f32,
    steps: f32,
    value: f32,
    stopped: bool,
}

impl RotatePulse {
    pub fn new(peak: f32, steps: u32) -> Self {
        Self {
            peak,
            steps: steps.max(1) as f32,
            value: 0.0,
            stopped: false,
        }
    }

    /// Current recoil magnitude
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn peak(&self) -> f32 {
        self.peak
    }

    /// Amount removed per tick
    pub fn decay_per_tick(&self) -> f32 {
        BASE_DECAY + self.peak / self.steps
    }

    /// Check if the pulse has settled enough to act again
    pub fn is_ready(&self) -> bool {
        self.value < READY_THRESHOLD
    }

    /// Jump to the peak value
    pub fn trigger(&mut self) {
        if !self.stopped {
            self.value = self.peak;
        }
    }

    /// Decay toward zero (called every frame)
    pub fn tick(&mut self) {
        if self.stopped {
            return;
        }
        self.value = (self.value - self.decay_per_tick()).max(0.0);
    }

    /// Pin the pulse at zero for good
    pub fn stop(&mut self) {
        self.stopped = true;
        self.value = 0.0;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Default for RotatePulse {
    fn default() -> Self {
        Self::new(15.0, 7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_starts_ready() {
        let pulse = RotatePulse::default();
        assert_eq!(pulse.value(), 0.0);
        assert!(pulse.is_ready());
    }

    #[test]
    fn test_trigger_sets_peak() {
        let mut pulse = RotatePulse::default();
        pulse.trigger();
        assert_eq!(pulse.value(), 15.0);
        assert!(!pulse.is_ready());
    }

    #[test]
    fn test_decay_per_tick() {
        let mut pulse = RotatePulse::new(14.0, 7);
        pulse.trigger();
        pulse.tick();
        assert_relative_eq!(pulse.value(), 11.9, epsilon = 1e-5);
        pulse.tick();
        assert_relative_eq!(pulse.value(), 9.8, epsilon = 1e-5);
    }

    #[test]
    fn test_decay_floors_at_zero() {
        let mut pulse = RotatePulse::default();
        pulse.trigger();
        for _ in 0..50 {
            pulse.tick();
            assert!(pulse.value() >= 0.0);
        }
        assert_eq!(pulse.value(), 0.0);
    }

    #[test]
    fn test_default_pulse_settles_in_seven_ticks() {
        let mut pulse = RotatePulse::default();
        pulse.trigger();
        for _ in 0..6 {
            pulse.tick();
            assert!(!pulse.is_ready());
        }
        pulse.tick();
        assert!(pulse.is_ready());
    }

    #[test]
    fn test_stopped_pulse_ignores_trigger() {
        let mut pulse = RotatePulse::default();
        pulse.trigger();
        pulse.stop();
        assert_eq!(pulse.value(), 0.0);

        pulse.trigger();
        pulse.tick();
        assert_eq!(pulse.value(), 0.0);
        assert!(pulse.is_stopped());
    }
}
