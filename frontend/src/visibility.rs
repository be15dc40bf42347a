/// One-shot visibility flag for a section. Goes `false -> true` once and stays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    visible: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection report. Returns `true` only on the transition.
    pub fn observe(&mut self, ratio: f64, is_intersecting: bool) -> bool {
        if self.visible || !is_intersecting || ratio <= self.threshold {
            return false;
        }
        self.visible = true;
        true
    }

    /// Latches without a report, for regions the platform cannot observe.
    pub fn force_visible(&mut self) -> bool {
        !std::mem::replace(&mut self.visible, true)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

const THRESHOLD_STEPS: usize = 10;

impl ObserverOptions {
    /// Ratios the observer reports at: zero, the latch threshold, then even
    /// steps up to fully visible. A report landing exactly on the threshold
    /// is followed by another one as soon as the region keeps entering.
    pub fn thresholds(&self) -> Vec<f64> {
        let mut ratios = vec![0.0, self.threshold];
        ratios.extend(
            (1..=THRESHOLD_STEPS)
                .map(|k| (self.threshold + (1.0 - self.threshold) * k as f64 / THRESHOLD_STEPS as f64).min(1.0)),
        );
        ratios.dedup_by(|b, a| *b <= *a);
        ratios
    }
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "-50px".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn latches_past_threshold() {
        let mut latch = VisibilityLatch::new(0.1);
        assert!(!latch.observe(0.05, true));
        assert!(!latch.is_visible());
        assert!(latch.observe(0.4, true));
        assert!(latch.is_visible());
    }

    #[test]
    fn leaving_viewport_does_not_reset() {
        let mut latch = VisibilityLatch::new(0.1);
        latch.observe(1.0, true);
        assert!(!latch.observe(0.0, false));
        assert!(latch.is_visible());
    }

    #[test]
    fn ratio_without_intersection_is_ignored() {
        let mut latch = VisibilityLatch::new(0.1);
        assert!(!latch.observe(0.9, false));
        assert!(!latch.is_visible());
    }

    #[test]
    fn forced_visibility_counts_as_the_transition() {
        let mut latch = VisibilityLatch::new(0.1);
        assert!(latch.force_visible());
        assert!(!latch.force_visible());
        assert!(!latch.observe(1.0, true));
    }

    #[test]
    fn report_on_threshold_then_higher_latches() {
        let options = ObserverOptions::default();
        let mut latch = VisibilityLatch::new(options.threshold);
        assert!(!latch.observe(options.threshold, true));

        let next = options
            .thresholds()
            .into_iter()
            .find(|&t| t > options.threshold)
            .unwrap();
        assert!(next <= options.threshold + 0.1 + 1e-9);
        assert!(latch.observe(next, true));
        assert!(latch.is_visible());
    }

    #[test]
    fn thresholds_ascend_from_zero_to_one() {
        for threshold in [0.0, 0.1, 0.5, 0.95] {
            let options = ObserverOptions {
                threshold,
                ..ObserverOptions::default()
            };
            let ratios = options.thresholds();
            assert_eq!(ratios.first(), Some(&0.0));
            assert!((ratios.last().unwrap() - 1.0).abs() < 1e-9);
            assert!(ratios.windows(2).all(|w| w[0] < w[1]));
            assert!(ratios.contains(&threshold));
        }
    }

    proptest! {
        #[test]
        fn transitions_at_most_once(reports in prop::collection::vec((0.0f64..=1.0, any::<bool>()), 0..100)) {
            let mut latch = VisibilityLatch::new(0.1);
            let mut transitions = 0;
            let mut seen_visible = false;
            for (ratio, intersecting) in reports {
                if latch.observe(ratio, intersecting) {
                    transitions += 1;
                }
                if seen_visible {
                    prop_assert!(latch.is_visible());
                }
                seen_visible = latch.is_visible();
            }
            prop_assert!(transitions <= 1);
        }
    }
}
