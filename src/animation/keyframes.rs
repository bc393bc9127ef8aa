//! Keyframe tracks sampled per frame

/// Quadratic ease-out: fast start, slow finish. Input is clamped to [0, 1].
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// A piecewise-linear keyframe track over normalized time.
///
/// Keys are (time fraction, value) pairs with non-decreasing times.
/// Sampling before the first key holds the first value, after the last key
/// holds the last value.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeTrack {
    keys: Vec<(f32, f32)>,
}

impl KeyframeTrack {
    /// Build a track from matching time and value slices.
    pub fn new(times: &[f32], values: &[f32]) -> Self {
        debug_assert_eq!(times.len(), values.len());
        debug_assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
        Self {
            keys: times.iter().copied().zip(values.iter().copied()).collect(),
        }
    }

    pub fn keys(&self) -> &[(f32, f32)] {
        &self.keys
    }

    /// Sample the track at a normalized progress, clamped to [0, 1].
    pub fn sample(&self, progress: f32) -> f32 {
        let Some(&(first_time, first_value)) = self.keys.first() else {
            return 0.0;
        };
        let t = progress.clamp(0.0, 1.0);
        if t <= first_time {
            return first_value;
        }
        for pair in self.keys.windows(2) {
            let (time_a, value_a) = pair[0];
            let (time_b, value_b) = pair[1];
            // Strict comparison so coincident key times act as a jump to
            // the later value.
            if t < time_b {
                let local = (t - time_a) / (time_b - time_a);
                return value_a + (value_b - value_a) * local;
            }
        }
        self.keys[self.keys.len() - 1].1
    }
}
