use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

// Constants for the spin animation
pub const SPIN_DURATION_MS: u32 = 4000; // Must match the CSS transition below
pub const MIN_FULL_TURNS: u32 = 5;      // Full rotations before settling
pub const MAX_JITTER_FRACTION: f64 = 0.15; // Of one segment width, either side of the midpoint
pub const SPIN_EASING: &str = "cubic-bezier(0.17, 0.67, 0.12, 0.99)";

/// Source of the two random draws a spin needs.
///
/// Every `rand` generator is a `SpinDraw`, so production code passes
/// `rand::thread_rng()` while tests can force a result with [`FixedDraw`].
pub trait SpinDraw {
    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn draw_index(&mut self, len: usize) -> usize;

    /// Uniform value in `[-1.0, 1.0]`, scaled later by the jitter bound.
    fn draw_jitter(&mut self) -> f64;
}

impl<R: RngCore> SpinDraw for R {
    fn draw_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn draw_jitter(&mut self) -> f64 {
        self.gen_range(-1.0..=1.0)
    }
}

/// Deterministic draw, used to pin the winner in tests and previews.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDraw {
    pub index: usize,
    pub jitter: f64,
}

impl SpinDraw for FixedDraw {
    fn draw_index(&mut self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    fn draw_jitter(&mut self) -> f64 {
        self.jitter.clamp(-1.0, 1.0)
    }
}

/// Everything the view needs to animate one accepted spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    pub ticket: u64,
    pub index: usize,
    pub target_rotation: f64,
    pub jitter_degrees: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingSpin {
    ticket: u64,
    index: usize,
}

/// Transient state of one wheel instance.
///
/// Rotation is cumulative: it only ever grows, so every spin turns the wheel
/// forward from wherever the previous one stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelState {
    rotation: f64,
    pending: Option<PendingSpin>,
    last_ticket: u64,
}

impl Default for WheelState {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelState {
    pub fn new() -> Self {
        Self {
            rotation: 0.0,
            pending: None,
            last_ticket: 0,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_spin(&self, enabled: bool, segments: usize) -> bool {
        enabled && segments > 0 && !self.is_spinning()
    }

    /// Picks the winner and the landing angle for a new spin.
    ///
    /// Returns `None` without touching any state when a spin is already
    /// running, the wheel is disabled, or there is nothing to land on.
    pub fn begin_spin<D: SpinDraw>(
        &mut self,
        segments: usize,
        enabled: bool,
        draw: &mut D,
    ) -> Option<SpinPlan> {
        if !self.can_spin(enabled, segments) {
            return None;
        }

        let index = draw.draw_index(segments);
        let jitter_degrees = draw.draw_jitter() * MAX_JITTER_FRACTION * segment_angle(segments);
        let target_rotation = target_rotation(self.rotation, index, segments, jitter_degrees);

        self.last_ticket += 1;
        self.pending = Some(PendingSpin {
            ticket: self.last_ticket,
            index,
        });
        self.rotation = target_rotation;

        log::debug!(
            "spin #{}: index {} of {}, target {:.2}deg",
            self.last_ticket,
            index,
            segments,
            target_rotation
        );

        Some(SpinPlan {
            ticket: self.last_ticket,
            index,
            target_rotation,
            jitter_degrees,
        })
    }

    /// Ends the spin identified by `ticket` and hands back the index chosen
    /// when it started. Stale or repeated tickets are ignored.
    pub fn finish_spin(&mut self, ticket: u64) -> Option<usize> {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                Some(pending.index)
            }
            _ => None,
        }
    }

    /// Drops the running spin so a late timer cannot complete it.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

pub fn segment_angle(segments: usize) -> f64 {
    360.0 / segments.max(1) as f64
}

/// Rotation that parks the midpoint of segment `index` (shifted by
/// `jitter_degrees`) under the pointer at the top, at least
/// [`MIN_FULL_TURNS`] turns past `current`.
pub fn target_rotation(current: f64, index: usize, segments: usize, jitter_degrees: f64) -> f64 {
    let landing = (index as f64 + 0.5) * segment_angle(segments) + jitter_degrees;
    let resting = (360.0 - landing).rem_euclid(360.0);
    let advance = (resting - current.rem_euclid(360.0)).rem_euclid(360.0);
    current + f64::from(MIN_FULL_TURNS) * 360.0 + advance
}

/// Wheel-space angle (clockwise from the top) sitting under the pointer.
pub fn pointer_angle(rotation: f64) -> f64 {
    (-rotation).rem_euclid(360.0)
}

/// Segment under the pointer for a given rotation. Display only; the winner
/// always comes from [`WheelState::finish_spin`].
pub fn segment_under_pointer(rotation: f64, segments: usize) -> usize {
    let segments = segments.max(1);
    let index = (pointer_angle(rotation) / segment_angle(segments)).floor() as usize;
    index.min(segments - 1)
}

/// Inline style for the rotating element.
pub fn rotation_style(rotation: f64, is_spinning: bool) -> String {
    let transition = if is_spinning {
        format!("transform {}ms {}", SPIN_DURATION_MS, SPIN_EASING)
    } else {
        "none".to_string()
    };
    format!("transform: rotate({:.3}deg); transition: {};", rotation, transition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_selection_is_roughly_uniform() {
        let mut rng = SmallRng::seed_from_u64(42);
        for segments in [2usize, 5, 8] {
            let trials = 40_000;
            let mut counts = vec![0usize; segments];
            for _ in 0..trials {
                let mut wheel = WheelState::new();
                let plan = wheel.begin_spin(segments, true, &mut rng).unwrap();
                counts[plan.index] += 1;
            }
            let expected = trials as f64 / segments as f64;
            for count in counts {
                let deviation = (count as f64 - expected).abs() / expected;
                assert!(deviation < 0.05, "segments {segments}: count {count} vs {expected}");
            }
        }
    }

    #[test]
    fn test_landing_stays_inside_jitter_bound() {
        let mut rng = SmallRng::seed_from_u64(9);
        for segments in [2usize, 3, 8, 12] {
            let mut wheel = WheelState::new();
            let width = segment_angle(segments);
            for _ in 0..200 {
                let start = wheel.rotation();
                let plan = wheel.begin_spin(segments, true, &mut rng).unwrap();

                assert!(plan.target_rotation - start >= f64::from(MIN_FULL_TURNS) * 360.0);
                assert_eq!(segment_under_pointer(plan.target_rotation, segments), plan.index);

                let midpoint = (plan.index as f64 + 0.5) * width;
                let offset = pointer_angle(plan.target_rotation) - midpoint;
                assert!(offset.abs() <= MAX_JITTER_FRACTION * width + 1e-6);

                assert_eq!(wheel.finish_spin(plan.ticket), Some(plan.index));
            }
        }
    }

    #[test]
    fn test_extreme_jitter_keeps_segment() {
        for jitter in [-1.0, 1.0] {
            let mut wheel = WheelState::new();
            let mut draw = FixedDraw { index: 0, jitter };
            let plan = wheel.begin_spin(8, true, &mut draw).unwrap();
            assert_eq!(segment_under_pointer(plan.target_rotation, 8), 0);
            assert!((plan.jitter_degrees.abs() - 0.15 * 45.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_spin_while_spinning_is_ignored() {
        let mut wheel = WheelState::new();
        let mut draw = FixedDraw { index: 2, jitter: 0.0 };
        let plan = wheel.begin_spin(8, true, &mut draw).unwrap();
        let snapshot = wheel.clone();

        let mut other = FixedDraw { index: 5, jitter: 0.5 };
        assert!(wheel.begin_spin(8, true, &mut other).is_none());
        assert_eq!(wheel, snapshot);

        assert_eq!(wheel.finish_spin(plan.ticket), Some(2));
        assert_eq!(wheel.finish_spin(plan.ticket), None);
    }

    #[test]
    fn test_disabled_spin_is_ignored() {
        let mut wheel = WheelState::new();
        let mut draw = FixedDraw { index: 1, jitter: 0.0 };
        assert!(wheel.begin_spin(8, false, &mut draw).is_none());
        assert_eq!(wheel, WheelState::new());
        assert!(wheel.begin_spin(0, true, &mut draw).is_none());
    }

    #[test]
    fn test_cancel_invalidates_ticket() {
        let mut wheel = WheelState::new();
        let mut draw = FixedDraw { index: 4, jitter: 0.0 };
        let plan = wheel.begin_spin(8, true, &mut draw).unwrap();
        assert!(wheel.cancel());
        assert!(!wheel.is_spinning());
        assert_eq!(wheel.finish_spin(plan.ticket), None);
    }

    #[test]
    fn test_rotation_accumulates_forward() {
        let mut wheel = WheelState::new();
        let mut draw = FixedDraw { index: 6, jitter: 0.3 };
        let first = wheel.begin_spin(8, true, &mut draw).unwrap();
        wheel.finish_spin(first.ticket);

        let mut draw = FixedDraw { index: 1, jitter: -0.3 };
        let second = wheel.begin_spin(8, true, &mut draw).unwrap();
        assert!(second.target_rotation > first.target_rotation);
        assert_eq!(second.ticket, first.ticket + 1);
        assert_eq!(segment_under_pointer(second.target_rotation, 8), 1);
    }

    #[test]
    fn test_single_segment_wheel() {
        let mut wheel = WheelState::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let plan = wheel.begin_spin(1, true, &mut rng).unwrap();
        assert_eq!(plan.index, 0);
        assert_eq!(segment_under_pointer(plan.target_rotation, 1), 0);
    }

    #[test]
    fn test_rotation_style() {
        assert_eq!(
            rotation_style(90.0, true),
            "transform: rotate(90.000deg); transition: transform 4000ms cubic-bezier(0.17, 0.67, 0.12, 0.99);"
        );
        assert!(rotation_style(0.0, false).ends_with("transition: none;"));
    }
}
