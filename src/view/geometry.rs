//! Mapping of view samples and ruler ticks to terminal cells.

use crate::ruler::MajorTick;

/// Vertical extent of one waveform column, in rows from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub top: u16,
    pub bottom: u16,
}

/// Maps each sample to the rows it covers on a canvas `height` rows tall.
///
/// The column runs from the center line to the sample's excursion; positive
/// samples rise above the center, negative ones fall below it. Samples
/// outside [-1.0, 1.0] are clamped to the canvas.
pub fn column_spans(samples: &[f32], height: u16) -> Vec<ColumnSpan> {
    if height == 0 {
        return Vec::new();
    }

    let center = (height / 2) as f32;
    let half = height as f32 / 2.0;
    let last_row = (height - 1) as f32;

    samples
        .iter()
        .map(|&s| {
            let y = center - s * half;
            ColumnSpan {
                top: y.clamp(0.0, center).round() as u16,
                bottom: y.clamp(center, last_row).round() as u16,
            }
        })
        .collect()
}

/// Sample index drawn in `column` of a display `width` columns wide.
///
/// Views shorter than the display are stretched across it.
pub fn sample_for_column(column: u16, width: u16, len: usize) -> Option<usize> {
    if len == 0 || column >= width {
        return None;
    }
    if len >= width as usize {
        return Some(column as usize);
    }
    Some(column as usize * len / width as usize)
}

/// Column of a tick at pixel offset `x`, or None when it falls off screen.
pub fn tick_column(x: f64, width: u16) -> Option<u16> {
    let column = x.round();
    if column < 0.0 || column >= width as f64 {
        return None;
    }
    Some(column as u16)
}

/// Columns at which major tick labels start.
///
/// Labels that would run past the right edge are dropped. Unless `dense` is
/// set, a label that would touch the previous one is dropped as well.
pub fn label_slots(ticks: &[MajorTick], width: u16, dense: bool) -> Vec<(u16, &str)> {
    let mut slots = Vec::new();
    let mut next_free = 0u16;

    for tick in ticks {
        let Some(column) = tick_column(tick.x, width) else {
            continue;
        };
        let len = tick.label.chars().count() as u16;
        if column.saturating_add(len) > width {
            continue;
        }
        if !dense && column < next_free {
            continue;
        }
        slots.push((column, tick.label.as_str()));
        next_free = column.saturating_add(len).saturating_add(1);
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_sits_on_center() {
        let spans = column_spans(&[0.0, 0.0], 20);
        assert!(spans.iter().all(|s| s.top == 10 && s.bottom == 10));
    }

    #[test]
    fn test_positive_and_negative_excursions() {
        let spans = column_spans(&[1.0, -0.5], 20);
        assert_eq!(spans[0], ColumnSpan { top: 0, bottom: 10 });
        assert_eq!(spans[1], ColumnSpan { top: 10, bottom: 15 });
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let spans = column_spans(&[-32768.0 / 32767.0, 1.5], 20);
        assert_eq!(spans[0].bottom, 19);
        assert_eq!(spans[1].top, 0);
    }

    fn tick(x: f64, label: &str) -> MajorTick {
        MajorTick {
            offset_secs: 0.0,
            x,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_sample_for_column() {
        assert_eq!(sample_for_column(5, 10, 10), Some(5));
        assert_eq!(sample_for_column(9, 10, 5), Some(4));
        assert_eq!(sample_for_column(1, 10, 5), Some(0));
        assert_eq!(sample_for_column(10, 10, 10), None);
        assert_eq!(sample_for_column(0, 10, 0), None);
    }

    #[test]
    fn test_tick_column() {
        assert_eq!(tick_column(0.0, 80), Some(0));
        assert_eq!(tick_column(79.4, 80), Some(79));
        assert_eq!(tick_column(80.0, 80), None);
    }

    #[test]
    fn test_label_slots_skip_crowded_and_clipped() {
        let ticks = [tick(0.0, "0s"), tick(2.0, "1s"), tick(6.0, "2s"), tick(9.0, "3s")];
        assert_eq!(label_slots(&ticks, 10, false), vec![(0, "0s"), (6, "2s")]);
        assert_eq!(
            label_slots(&ticks, 10, true),
            vec![(0, "0s"), (2, "1s"), (6, "2s")]
        );
    }

    #[test]
    fn test_label_slots_at_widest_terminal() {
        let ticks = [tick(65533.0, "9s")];
        assert_eq!(label_slots(&ticks, u16::MAX, false), vec![(65533, "9s")]);
    }

    #[test]
    fn test_zero_height() {
        assert!(column_spans(&[0.3], 0).is_empty());
    }
}
