// ABOUTME: Area-averaging (box filter) downsampler from source to target resolution
// ABOUTME: Each output pixel is the per-channel mean of a non-overlapping source rectangle

use crate::color::Rgb;
use crate::error::{RenderError, Result};
use crate::fit::TargetDimensions;
use crate::grid::ColorGrid;
use std::ops::Range;

/// Partition `0..source_len` into `target_len` contiguous, non-empty spans.
///
/// Boundary `i` sits at `round(i * source_len / target_len)`, so adjacent
/// spans may differ in size by one. Boundaries are kept strictly increasing
/// so no span is ever empty. Requires `1 <= target_len <= source_len`;
/// anything else yields no spans.
pub fn spans(source_len: usize, target_len: usize) -> Vec<Range<usize>> {
    if target_len == 0 || target_len > source_len {
        return Vec::new();
    }

    let scale = source_len as f64 / target_len as f64;
    let mut bounds = Vec::with_capacity(target_len + 1);
    bounds.push(0);

    let mut prev = 0;
    for i in 1..target_len {
        let rounded = (scale * i as f64).round() as usize;
        // Leave room for one sample in every remaining span
        let bound = rounded.clamp(prev + 1, source_len - (target_len - i));
        bounds.push(bound);
        prev = bound;
    }
    bounds.push(source_len);

    bounds.windows(2).map(|w| w[0]..w[1]).collect()
}

/// Downsample `source` to `target` by averaging each covered rectangle
pub fn box_resample(source: &ColorGrid, target: TargetDimensions) -> Result<ColorGrid> {
    if target.width == 0 || target.height == 0 {
        return Err(RenderError::InvalidGeometry(format!(
            "target is {}x{}",
            target.width, target.height
        )));
    }
    if target.width > source.width() || target.height > source.height() {
        return Err(RenderError::Upsample {
            source_width: source.width(),
            source_height: source.height(),
            target_width: target.width,
            target_height: target.height,
        });
    }

    let columns = spans(source.width() as usize, target.width as usize);
    let rows = spans(source.height() as usize, target.height as usize);
    let stride = source.width() as usize;
    let src = source.pixels();

    let mut pixels = Vec::with_capacity(columns.len() * rows.len());
    for row_span in &rows {
        for col_span in &columns {
            let mut sums = [0u64; 3];
            for y in row_span.clone() {
                let line = &src[y * stride..(y + 1) * stride];
                for px in &line[col_span.clone()] {
                    sums[0] += px.r as u64;
                    sums[1] += px.g as u64;
                    sums[2] += px.b as u64;
                }
            }

            let count = (row_span.len() * col_span.len()) as f64;
            let [r, g, b] = sums.map(|sum| (sum as f64 / count).round() as u8);
            pixels.push(Rgb::new(r, g, b));
        }
    }

    log::debug!(
        "Resampled {}x{} to {}x{}",
        source.width(),
        source.height(),
        target.width,
        target.height
    );

    ColorGrid::from_pixels(target.width, target.height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_partition(source_len: usize, target_len: usize) {
        let spans = spans(source_len, target_len);
        assert_eq!(spans.len(), target_len);
        assert_eq!(spans.first().map(|s| s.start), Some(0));
        assert_eq!(spans.last().map(|s| s.end), Some(source_len));
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "gap or overlap at {:?}", pair);
        }
        assert!(spans.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_spans_partition_every_target() {
        for source_len in 1..=64 {
            for target_len in 1..=source_len {
                assert_partition(source_len, target_len);
            }
        }
    }

    #[test]
    fn test_spans_follow_rounded_boundaries() {
        // scale = 2.5: boundaries at round(2.5) = 3, round(5.0) = 5, round(7.5) = 8
        assert_eq!(spans(10, 4), vec![0..3, 3..5, 5..8, 8..10]);
        assert_eq!(spans(4, 2), vec![0..2, 2..4]);
    }

    #[test]
    fn test_spans_reject_out_of_contract_lengths() {
        assert!(spans(4, 0).is_empty());
        assert!(spans(4, 5).is_empty());
    }

    #[test]
    fn test_uniform_field_has_no_drift() {
        let color = Rgb::new(37, 201, 99);
        for (sw, sh) in [(7, 5), (13, 13), (100, 3)] {
            let source = ColorGrid::new(sw, sh, color);
            for tw in 1..=sw.min(12) {
                for th in 1..=sh.min(5) {
                    let out = box_resample(&source, TargetDimensions::new(tw, th)).unwrap();
                    assert!(out.pixels().iter().all(|p| *p == color));
                }
            }
        }
    }

    #[test]
    fn test_same_size_is_identity() {
        let pixels: Vec<Rgb> = (0..12u8).map(|i| Rgb::new(i, i * 2, i * 3)).collect();
        let source = ColorGrid::from_pixels(4, 3, pixels).unwrap();
        let out = box_resample(&source, TargetDimensions::new(4, 3)).unwrap();
        assert_eq!(out, source);
    }

    #[test]
    fn test_average_rounds_half_up() {
        let source = ColorGrid::from_pixels(
            2,
            2,
            vec![Rgb::BLACK, Rgb::WHITE, Rgb::BLACK, Rgb::WHITE],
        )
        .unwrap();
        let out = box_resample(&source, TargetDimensions::new(1, 1)).unwrap();
        assert_eq!(out.get(0, 0), Some(Rgb::new(128, 128, 128)));
    }

    #[test]
    fn test_channels_average_independently() {
        let source = ColorGrid::from_pixels(
            2,
            1,
            vec![Rgb::new(255, 0, 10), Rgb::new(0, 255, 20)],
        )
        .unwrap();
        let out = box_resample(&source, TargetDimensions::new(1, 1)).unwrap();
        assert_eq!(out.get(0, 0), Some(Rgb::new(128, 128, 15)));
    }

    #[test]
    fn test_quadrants_average_separately() {
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        let mut source = ColorGrid::new(4, 4, red);
        for y in 0..2 {
            for x in 2..4 {
                source.set(x, y, blue);
            }
        }

        let out = box_resample(&source, TargetDimensions::new(2, 2)).unwrap();
        assert_eq!(out.get(0, 0), Some(red));
        assert_eq!(out.get(1, 0), Some(blue));
        assert_eq!(out.get(0, 1), Some(red));
        assert_eq!(out.get(1, 1), Some(red));
    }

    #[test]
    fn test_upsampling_is_rejected() {
        let source = ColorGrid::new(2, 2, Rgb::WHITE);
        assert!(matches!(
            box_resample(&source, TargetDimensions::new(3, 2)),
            Err(RenderError::Upsample { .. })
        ));
        assert!(matches!(
            box_resample(&source, TargetDimensions::new(0, 1)),
            Err(RenderError::InvalidGeometry(_))
        ));
    }
}
