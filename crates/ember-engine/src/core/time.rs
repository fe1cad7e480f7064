const SECOND_NS: u64 = 1_000_000_000;

/// Fixed-budget accumulator driving update/render passes.
///
/// Wall time folds into an accumulated delta; one pass runs for every
/// full frame budget in the accumulator. The `dt` handed to a pass is
/// derived from the accumulated delta at that moment, so it exceeds one
/// budget's worth whenever the loop has fallen behind.
pub struct FrameTimer {
    frame_budget: u64,
    last: Option<u64>,
    delta: u64,
    second_start: Option<u64>,
    passes: u32,
}

impl FrameTimer {
    /// `target_rate` is the desired number of passes per second. The
    /// frame budget is `1e9 / target_rate` nanoseconds, truncated.
    pub fn new(target_rate: u32) -> Self {
        Self {
            frame_budget: SECOND_NS / u64::from(target_rate.max(1)),
            last: None,
            delta: 0,
            second_start: None,
            passes: 0,
        }
    }

    /// Nanoseconds per pass.
    pub fn frame_budget(&self) -> u64 {
        self.frame_budget
    }

    /// Folds elapsed wall time into the accumulator. `now` is a
    /// monotonic nanosecond timestamp.
    pub fn advance(&mut self, now: u64) {
        let last = self.last.replace(now).unwrap_or(now);
        self.delta += now.saturating_sub(last);
        if self.second_start.is_none() {
            self.second_start = Some(now);
        }
    }

    /// Consumes one frame budget if available. Returns the `dt` in
    /// seconds for the pass, computed from the full accumulated delta.
    pub fn try_pass(&mut self) -> Option<f32> {
        if self.delta < self.frame_budget {
            return None;
        }

        let dt = self.delta as f32 / 1e9;
        self.delta -= self.frame_budget;
        self.passes += 1;
        Some(dt)
    }

    /// Reports the number of passes once per wall-clock second, then
    /// resets the counter.
    pub fn end_second(&mut self, now: u64) -> Option<u32> {
        let start = *self.second_start.get_or_insert(now);
        if now.saturating_sub(start) < SECOND_NS {
            return None;
        }

        let passes = self.passes;
        self.passes = 0;
        self.second_start = Some(now);
        Some(passes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_is_truncated_division() {
        assert_eq!(FrameTimer::new(60).frame_budget(), 16_666_666);
        assert_eq!(FrameTimer::new(30).frame_budget(), 33_333_333);
    }

    #[test]
    fn one_pass_per_exact_increment_and_sixty_per_second() {
        let mut timer = FrameTimer::new(60);
        timer.advance(0);
        assert!(timer.try_pass().is_none());

        let mut reported = None;
        for i in 1..=60u64 {
            let now = i * SECOND_NS / 60;
            timer.advance(now);
            // Exactly one pass per 1/60s increment.
            assert!(timer.try_pass().is_some(), "pass {i}");
            assert!(timer.try_pass().is_none(), "extra pass {i}");

            if let Some(count) = timer.end_second(now) {
                reported = Some((i, count));
            }
        }

        assert_eq!(reported, Some((60, 60)));
    }

    #[test]
    fn dt_spans_the_accumulated_delta() {
        let mut timer = FrameTimer::new(60);
        timer.advance(0);
        // Two budgets behind: first dt covers both, second only the rest.
        timer.advance(2 * timer.frame_budget());

        let first = timer.try_pass().unwrap();
        assert!((first - 2.0 / 60.0).abs() < 1e-4, "first dt {first}");

        let second = timer.try_pass().unwrap();
        assert!((second - 1.0 / 60.0).abs() < 1e-4, "second dt {second}");

        assert!(timer.try_pass().is_none());
    }

    #[test]
    fn no_pass_before_a_full_budget() {
        let mut timer = FrameTimer::new(60);
        timer.advance(0);
        timer.advance(timer.frame_budget() - 1);
        assert!(timer.try_pass().is_none());

        timer.advance(timer.frame_budget());
        assert!(timer.try_pass().is_some());
    }

    #[test]
    fn second_report_resets_the_counter() {
        let mut timer = FrameTimer::new(60);
        timer.advance(0);
        timer.advance(SECOND_NS);
        while timer.try_pass().is_some() {}

        let first = timer.end_second(SECOND_NS).unwrap();
        assert!(first > 0);

        // Immediately after a report, nothing more to report.
        assert!(timer.end_second(SECOND_NS).is_none());
    }
}
