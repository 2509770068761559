//! Peak-preserving decimation.
//!
//! Reduces a sample sequence to an exact target length by splitting it into
//! contiguous windows and keeping the extremes of each window, so transients
//! stay visible after the reduction. Windows are laid out on a fractional
//! stride: window `i` starts at `floor(i * stride)` and ends at
//! `ceil((i + 1) * stride)`, the last window always running to the end of the
//! source. Adjacent windows may therefore share one boundary sample.

/// How each window is collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimationPolicy {
    /// Two points per window: its maximum, then its minimum.
    DualExtremum,
    /// One point per window: the value with the largest magnitude.
    PeakMagnitude,
}

/// Reduces `samples` to exactly `target` points using `policy`.
///
/// Sources that are already `target` samples long or shorter are returned
/// unchanged; no interpolation is performed, so callers asking for more
/// points than exist receive the shorter source.
pub fn decimate(samples: &[f32], target: usize, policy: DecimationPolicy) -> Vec<f32> {
    if samples.len() <= target {
        return samples.to_vec();
    }

    match policy {
        DecimationPolicy::DualExtremum => dual_extremum(samples, target),
        DecimationPolicy::PeakMagnitude => peak_magnitude(samples, target),
    }
}

/// Start and end indices of each of `windows` windows over `len` samples.
pub fn window_bounds(len: usize, windows: usize) -> impl Iterator<Item = (usize, usize)> {
    let stride = if windows == 0 {
        0.0
    } else {
        len as f64 / windows as f64
    };

    (0..windows).map(move |i| {
        let start = ((i as f64 * stride).floor() as usize).min(len);
        let end = if i + 1 == windows {
            len
        } else {
            (((i + 1) as f64 * stride).ceil() as usize).min(len)
        };
        (start, end.max(start))
    })
}

fn dual_extremum(samples: &[f32], target: usize) -> Vec<f32> {
    let windows = target / 2;
    let mut reduced = Vec::with_capacity(target);

    for (start, end) in window_bounds(samples.len(), windows) {
        let window = &samples[start..end];
        if window.is_empty() {
            reduced.extend([0.0, 0.0]);
            continue;
        }
        let max = window.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let min = window.iter().copied().fold(f32::INFINITY, f32::min);
        reduced.extend([max, min]);
    }

    // Odd targets get one extra point: the last emitted value, or the one
    // before it when the last is zero.
    if target % 2 != 0 {
        let pad = match reduced.as_slice() {
            [.., before, last] => {
                if *last == 0.0 {
                    *before
                } else {
                    *last
                }
            }
            _ => 0.0,
        };
        reduced.push(pad);
    }

    reduced.truncate(target);
    reduced
}

fn peak_magnitude(samples: &[f32], target: usize) -> Vec<f32> {
    window_bounds(samples.len(), target)
        .map(|(start, end)| {
            let mut peak = match samples[start..end].first() {
                Some(&first) => first,
                None => return 0.0,
            };
            for &v in &samples[start + 1..end] {
                if v.abs() > peak.abs() {
                    peak = v;
                }
            }
            peak
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_with_spikes(len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| {
                let base = ((i * 37) % 101) as f32 / 100.0 - 0.5;
                if i % 13 == 0 {
                    -0.99
                } else {
                    base
                }
            })
            .collect()
    }

    #[test]
    fn test_identity_when_target_not_shorter() {
        let source = ramp_with_spikes(50);
        for target in [50, 51, 1000] {
            assert_eq!(decimate(&source, target, DecimationPolicy::PeakMagnitude), source);
            assert_eq!(decimate(&source, target, DecimationPolicy::DualExtremum), source);
        }
        assert!(decimate(&[], 0, DecimationPolicy::DualExtremum).is_empty());
    }

    #[test]
    fn test_exact_length_for_shorter_targets() {
        let source = ramp_with_spikes(997);
        for target in [0, 1, 2, 3, 10, 99, 100, 333, 996] {
            let magnitude = decimate(&source, target, DecimationPolicy::PeakMagnitude);
            let extremum = decimate(&source, target, DecimationPolicy::DualExtremum);
            assert_eq!(magnitude.len(), target, "magnitude target {target}");
            assert_eq!(extremum.len(), target, "extremum target {target}");
        }
    }

    #[test]
    fn test_peak_magnitude_picks_largest_excursion() {
        // 100 frames, ten windows of ten; each window has one marked peak.
        let mut source = vec![0.1_f32; 100];
        let peaks = [0.9, -0.8, 0.7, -0.95, 0.5, -0.4, 0.3, -0.2, 0.6, -1.0];
        for (w, &p) in peaks.iter().enumerate() {
            source[w * 10 + (w % 10)] = p;
        }

        let reduced = decimate(&source, 10, DecimationPolicy::PeakMagnitude);
        assert_eq!(reduced.len(), 10);
        for (w, chunk) in source.chunks(10).enumerate() {
            let expected = chunk
                .iter()
                .copied()
                .fold(0.0_f32, |acc, v| if v.abs() > acc.abs() { v } else { acc });
            assert_eq!(reduced[w], expected);
        }
        assert_eq!(reduced, peaks.to_vec());
    }

    #[test]
    fn test_peak_magnitude_first_occurrence_wins() {
        let source = [0.5, -0.5, 0.2, 0.1];
        assert_eq!(decimate(&source, 2, DecimationPolicy::PeakMagnitude), vec![0.5, 0.2]);

        let source = [-0.5, 0.5, 0.1, 0.1];
        assert_eq!(decimate(&source, 2, DecimationPolicy::PeakMagnitude), vec![-0.5, 0.1]);
    }

    #[test]
    fn test_dual_extremum_max_then_min_per_window() {
        let source: Vec<f32> = (0..100).map(|i| ((i as f32) * 0.7).sin()).collect();
        let reduced = decimate(&source, 10, DecimationPolicy::DualExtremum);

        assert_eq!(reduced.len(), 10);
        for (w, chunk) in source.chunks(20).enumerate() {
            let max = chunk.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            let min = chunk.iter().copied().fold(f32::INFINITY, f32::min);
            assert_eq!(reduced[2 * w], max);
            assert_eq!(reduced[2 * w + 1], min);
        }
    }

    #[test]
    fn test_dual_extremum_odd_target_pads_with_last_value() {
        let source = [0.2, -0.3, 0.4, -0.1, 0.6, -0.7, 0.0, 0.1];
        let reduced = decimate(&source, 5, DecimationPolicy::DualExtremum);
        // Two windows of four samples plus one pad point.
        assert_eq!(reduced, vec![0.4, -0.3, 0.6, -0.7, -0.7]);
    }

    #[test]
    fn test_dual_extremum_pad_skips_trailing_zero() {
        let source = [0.0, 0.0, 0.5, 0.0, 0.0, 0.0];
        let reduced = decimate(&source, 3, DecimationPolicy::DualExtremum);
        // Single window over everything: max 0.5, min 0.0, pad falls back to 0.5.
        assert_eq!(reduced, vec![0.5, 0.0, 0.5]);
    }

    #[test]
    fn test_dual_extremum_single_point_target() {
        let reduced = decimate(&[0.3, 0.4], 1, DecimationPolicy::DualExtremum);
        assert_eq!(reduced, vec![0.0]);
    }

    #[test]
    fn test_window_bounds_cover_source() {
        let bounds: Vec<_> = window_bounds(10, 3).collect();
        assert_eq!(bounds, vec![(0, 4), (3, 7), (6, 10)]);

        let exact: Vec<_> = window_bounds(100, 10).collect();
        assert_eq!(exact.first(), Some(&(0, 10)));
        assert_eq!(exact.last(), Some(&(90, 100)));
        assert!(exact.windows(2).all(|w| w[0].1 == w[1].0));

        assert_eq!(window_bounds(10, 0).count(), 0);
    }

    #[test]
    fn test_deterministic() {
        let source = ramp_with_spikes(4096);
        let a = decimate(&source, 301, DecimationPolicy::DualExtremum);
        let b = decimate(&source, 301, DecimationPolicy::DualExtremum);
        assert_eq!(a, b);
        let c = decimate(&source, 301, DecimationPolicy::PeakMagnitude);
        let d = decimate(&source, 301, DecimationPolicy::PeakMagnitude);
        assert_eq!(c, d);
    }
}
