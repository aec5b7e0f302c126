/// Fixed-rate tick clock
///
/// Wall-clock time is accumulated between frames and paid out as whole
/// simulation ticks. One tick advances every actor by exactly one animation
/// step tick, so the rate also sets the animation speed.
use std::time::{Duration, Instant};

/// Default simulation rate
pub const DEFAULT_TICK_RATE: u32 = 56;

/// Maximum number of ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Tick clock state
#[derive(Debug)]
pub struct TickClock {
    /// Length of one tick
    tick_duration: Duration,

    /// Accumulated time not yet paid out as ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the game is paused
    paused: bool,

    /// Total ticks paid out
    tick_count: u64,
}

impl TickClock {
    /// Create a clock running at `tick_rate` ticks per second
    pub fn new(tick_rate: u32) -> Self {
        Self {
            tick_duration: Duration::from_secs(1) / tick_rate.max(1),
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            tick_count: 0,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `elapsed` time and return the ticks it pays for
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        // If paused, don't accumulate time
        if self.paused {
            return 0;
        }

        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.tick_duration && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.tick_duration;
            ticks += 1;
        }

        // Drop time we could not catch up on
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= self.tick_duration {
            log::debug!("Tick clock behind, dropping {:?}", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Time until the next tick is due
    pub fn until_next_tick(&self) -> Duration {
        self.tick_duration.saturating_sub(self.accumulator)
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Get total number of ticks paid out
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a tick burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Game resumed");
        }
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let clock = TickClock::default();
        assert_eq!(clock.tick_duration(), Duration::from_secs(1) / 56);
        assert_eq!(clock.tick_count(), 0);
    }

    #[test]
    fn test_pays_whole_ticks() {
        let mut clock = TickClock::new(50);
        assert_eq!(clock.advance(Duration::from_millis(10)), 0);
        assert_eq!(clock.advance(Duration::from_millis(15)), 1);
        assert_eq!(clock.advance(Duration::from_millis(40)), 2);
        assert_eq!(clock.tick_count(), 3);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = TickClock::new(50);
        clock.advance(Duration::from_millis(30));
        assert_eq!(clock.until_next_tick(), Duration::from_millis(10));
    }

    #[test]
    fn test_ticks_capped_per_frame() {
        let mut clock = TickClock::new(50);
        assert_eq!(clock.advance(Duration::from_secs(1)), MAX_TICKS_PER_FRAME);

        // The backlog is dropped instead of replayed
        assert_eq!(clock.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_paused_no_ticks() {
        let mut clock = TickClock::new(50);
        clock.pause();
        assert!(clock.is_paused());
        assert_eq!(clock.advance(Duration::from_millis(100)), 0);

        clock.resume();
        assert!(!clock.is_paused());
        assert_eq!(clock.advance(Duration::from_millis(20)), 1);
    }

    #[test]
    fn test_zero_rate_is_clamped() {
        let clock = TickClock::new(0);
        assert_eq!(clock.tick_duration(), Duration::from_secs(1));
    }
}
