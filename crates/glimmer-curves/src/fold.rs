//! Boundary handling for inputs outside the curve domain.

use serde::{Deserialize, Serialize};

/// Strategy mapping any real input into the `[0,1]` curve domain.
///
/// Every curve carries exactly one fold mode, applied before segment
/// lookup:
/// - `Clamp` suits one-shot animations (fade in, fade out)
/// - `Repeat` suits looping animations (breathing glow)
/// - `Mirror` suits ping-pong loops (pendulum sway)
///
/// # Example
///
/// ```
/// use glimmer_curves::FoldMode;
///
/// assert_eq!(FoldMode::Clamp.apply(1.7), 1.0);
/// assert!((FoldMode::Repeat.apply(1.3) - 0.3).abs() < 1e-6);
/// assert!((FoldMode::Mirror.apply(1.3) - 0.7).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FoldMode {
    /// Out-of-range inputs take the boundary value.
    #[default]
    Clamp,
    /// Inputs wrap around: `1.3` behaves like `0.3`.
    Repeat,
    /// Inputs reflect at each boundary: `1.3` behaves like `0.7`.
    Mirror,
}

impl FoldMode {
    /// Fold `t` into `[0,1]`. Pure and total over all finite inputs.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Clamp => t.clamp(0.0, 1.0),
            Self::Repeat => Self::wrap(t),
            Self::Mirror => {
                let wrapped = Self::wrap(t);
                let cycle = t.floor() as i64;
                // Even cycles run forward, odd cycles run backward.
                if cycle % 2 == 0 { wrapped } else { 1.0 - wrapped }
            }
        }
    }

    // Sign-aware fractional part: negative inputs fold back from the
    // upper bound, so wrap(-0.3) == 0.7.
    fn wrap(t: f32) -> f32 {
        if t >= 0.0 {
            t - t.floor()
        } else {
            1.0 - (t.abs() - t.abs().floor())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_passes_in_range_values() {
        assert_eq!(FoldMode::Clamp.apply(0.0), 0.0);
        assert_eq!(FoldMode::Clamp.apply(0.42), 0.42);
        assert_eq!(FoldMode::Clamp.apply(1.0), 1.0);
    }

    #[test]
    fn test_clamp_pins_out_of_range_values() {
        assert_eq!(FoldMode::Clamp.apply(-3.5), 0.0);
        assert_eq!(FoldMode::Clamp.apply(7.2), 1.0);
    }

    #[test]
    fn test_repeat_wraps_positive_values() {
        assert!((FoldMode::Repeat.apply(1.3) - 0.3).abs() < 1e-6);
        assert!((FoldMode::Repeat.apply(2.75) - 0.75).abs() < 1e-6);
        assert_eq!(FoldMode::Repeat.apply(0.5), 0.5);
    }

    #[test]
    fn test_repeat_wraps_negative_values() {
        assert!((FoldMode::Repeat.apply(-0.3) - 0.7).abs() < 1e-6);
        assert!((FoldMode::Repeat.apply(-1.25) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_mirror_reflects_odd_cycles() {
        // cycle = floor(1.3) = 1 (odd), wrapped = 0.3, so 1 - 0.3.
        let folded = FoldMode::Mirror.apply(1.3);
        assert_eq!(folded, 1.0 - (1.3f32 - 1.0));
        assert!((folded - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_mirror_passes_even_cycles() {
        assert!((FoldMode::Mirror.apply(2.3) - 0.3).abs() < 1e-6);
        assert_eq!(FoldMode::Mirror.apply(0.4), 0.4);
    }

    #[test]
    fn test_all_modes_stay_in_unit_range() {
        let inputs = [-100.0f32, -2.5, -1.0, -0.001, 0.0, 0.5, 1.0, 1.001, 3.7, 250.0];
        for mode in [FoldMode::Clamp, FoldMode::Repeat, FoldMode::Mirror] {
            for &t in &inputs {
                let folded = mode.apply(t);
                assert!(
                    (0.0..=1.0).contains(&folded),
                    "{mode:?}.apply({t}) = {folded} escaped [0,1]"
                );
            }
        }
    }

    #[test]
    fn test_fold_mode_defaults_to_clamp() {
        assert_eq!(FoldMode::default(), FoldMode::Clamp);
    }
}
