//! Time-driven scroll offset
//!
//! The offset advances continuously in tile-column units and wraps once
//! per full field width, growing the rate at each wrap so the field
//! speeds up forever.

/// Advance a scroll state by `dt` seconds. Pure so the wrap-and-grow
/// transition can be tested without a frame loop.
///
/// The wrap is a single post-condition check, not a loop: a `dt` large
/// enough to jump more than one field width still wraps once, leaving
/// the offset above the period until the next call. Known, accepted
/// behavior for pathological frame hitches.
#[inline]
pub fn step(offset: f32, rate: f32, dt: f32, period: f32, growth: f32) -> (f32, f32) {
    let offset = offset + dt * rate;
    if offset > period {
        (offset - period, rate * growth)
    } else {
        (offset, rate)
    }
}

/// Scroll state: continuous horizontal offset plus its accelerating rate
#[derive(Debug, Clone)]
pub struct ScrollClock {
    offset: f32,
    rate: f32,
    period: f32,
    growth: f32,
}

impl ScrollClock {
    /// `period` is the authored field width in columns.
    pub fn new(rate: f32, growth: f32, period: f32) -> Self {
        Self { offset: 0.0, rate, period, growth }
    }

    pub fn advance(&mut self, dt: f32) {
        let before = self.rate;
        (self.offset, self.rate) = step(self.offset, self.rate, dt, self.period, self.growth);
        if self.rate > before {
            log::debug!("scroll wrapped, rate {:.3} -> {:.3}", before, self.rate);
        }
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[inline]
    pub fn rate(&self) -> f32 {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn offset_integrates_rate() {
        let mut clock = ScrollClock::new(2.0, 1.1, 100.0);
        clock.advance(0.5);
        assert!((clock.offset() - 1.0).abs() < 1e-6);
        clock.advance(0.5);
        assert!((clock.offset() - 2.0).abs() < 1e-6);
        assert_eq!(clock.rate(), 2.0);
    }

    #[test]
    fn wrap_subtracts_period_and_grows_rate() {
        let mut clock = ScrollClock::new(3.0, 1.1, 4.0);
        // 1.5 s * 3 col/s = 4.5 columns, past the 4-column period.
        clock.advance(1.5);
        assert!((clock.offset() - 0.5).abs() < 1e-5);
        assert!((clock.rate() - 3.3).abs() < 1e-5);
    }

    #[test]
    fn giant_delta_wraps_only_once() {
        let mut clock = ScrollClock::new(1.0, 1.1, 2.0);
        clock.advance(10.0);
        // 10 columns minus one period: still beyond the period.
        assert!((clock.offset() - 8.0).abs() < 1e-5);
        assert!((clock.rate() - 1.1).abs() < 1e-6);
    }

    #[test]
    fn exact_period_does_not_wrap() {
        let (offset, rate) = step(0.0, 1.0, 4.0, 4.0, 1.1);
        assert_eq!(offset, 4.0);
        assert_eq!(rate, 1.0);
    }

    proptest! {
        /// For bounded per-frame deltas the offset stays within one
        /// period and the rate never decreases.
        #[test]
        fn offset_bounded_and_rate_monotonic(
            period in 32.0f32..64.0,
            deltas in prop::collection::vec(0.0f32..0.05, 1..100),
        ) {
            let mut clock = ScrollClock::new(3.0, 1.1, period);
            let mut last_rate = clock.rate();
            for dt in deltas {
                clock.advance(dt);
                prop_assert!(clock.offset() >= 0.0);
                prop_assert!(clock.offset() <= period);
                prop_assert!(clock.rate() >= last_rate);
                last_rate = clock.rate();
            }
        }
    }
}
