/// Monotonic elapsed-time source.
/// Advanced once per frame by the host-supplied frame delta; never reset.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    /// Seconds since the first frame, accumulated in double precision.
    elapsed: f64,
    /// Last accepted frame delta.
    delta: f32,
    /// Number of accepted advances.
    frame_count: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame delta and return the new elapsed time.
    ///
    /// Negative or non-finite deltas are rejected so elapsed time stays finite
    /// and non-decreasing; the motion model does not guard against NaN itself.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        if !frame_dt.is_finite() || frame_dt < 0.0 {
            log::warn!("Clock: rejected frame delta {frame_dt}");
            return self.elapsed();
        }
        let next = self.elapsed + f64::from(frame_dt);
        if !(next as f32).is_finite() {
            log::warn!("Clock: elapsed time saturated at {}", self.elapsed);
            return self.elapsed();
        }
        self.elapsed = next;
        self.delta = frame_dt;
        self.frame_count += 1;
        self.elapsed()
    }

    /// Seconds since animation start (0.0 before the first advance).
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    /// Full-precision elapsed seconds.
    pub fn elapsed_f64(&self) -> f64 {
        self.elapsed
    }

    /// The most recently accepted frame delta.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Number of accepted advances.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let clock = Clock::new();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.frame_count(), 0);
    }

    #[test]
    fn accumulates_deltas() {
        let mut clock = Clock::new();
        clock.advance(0.5);
        let t = clock.advance(0.25);
        assert!((t - 0.75).abs() < 1e-6);
        assert_eq!(clock.frame_count(), 2);
        assert!((clock.delta() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn zero_delta_keeps_time() {
        let mut clock = Clock::new();
        clock.advance(1.0);
        clock.advance(0.0);
        assert_eq!(clock.elapsed(), 1.0);
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        let mut clock = Clock::new();
        clock.advance(1.0);
        clock.advance(-0.5);
        clock.advance(f32::NAN);
        clock.advance(f32::INFINITY);
        assert_eq!(clock.elapsed(), 1.0);
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let mut clock = Clock::new();
        let mut last = clock.elapsed();
        for dt in [0.016, -1.0, 0.0, 0.033, f32::NAN, 0.001] {
            let now = clock.advance(dt);
            assert!(now >= last, "went backwards: {last} -> {now}");
            last = now;
        }
    }

    #[test]
    fn long_sessions_keep_frame_resolution() {
        let mut clock = Clock::new();
        let dt = 1.0f32 / 60.0;
        let frames: u64 = 5 * 60 * 60 * 60;
        for _ in 0..frames {
            clock.advance(dt);
        }
        let expected = frames as f64 * f64::from(dt);
        assert!((clock.elapsed_f64() - expected).abs() < 1e-6);

        // Every later frame still moves the clock by about one delta.
        let before = clock.elapsed_f64();
        clock.advance(dt);
        assert!((clock.elapsed_f64() - before - f64::from(dt)).abs() < 1e-9);
    }
}
