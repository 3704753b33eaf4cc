//! Diagonal rank sorting of a flat sequence into a 2D grid.
//!
//! The sorter arranges records so that the primary key grows from the upper
//! left to the lower right of the grid while the secondary key sweeps each
//! anti-diagonal from its lower-left end to its upper-right end. The
//! reassembly index formula was derived empirically and is kept as a
//! closed-form mapping; any "equivalent" rederivation changes the visual
//! output without violating the permutation invariant, so it must not be
//! touched.

use crate::shape::Shape2d;

/// Length of 0-based anti-diagonal `diag` of a `w x h` grid.
///
/// Lengths ramp from 1 up to `min(w, h)`, plateau for `|w - h|` diagonals,
/// then ramp back down to 1; they sum to exactly `w * h`.
fn diagonal_len(diag: usize, shape: Shape2d) -> usize {
    let Shape2d { w, h } = shape;
    (diag + 1).min(w.min(h)).min(w + h - 1 - diag)
}

/// Flat row-major index of element `j` of anti-diagonal `diag` in a grid of
/// width `w`.
///
/// `diag` is 0-based and `j` counts along the diagonal after the secondary
/// sort; `w` must be at least 1. Over all `(diag, j)` pairs of valid
/// diagonal lengths, every slot in `[0, w * h)` is produced exactly once.
///
/// # Example
///
/// ```
/// use pixel_remap::sort::slot_index;
///
/// // 3x3 grid: diagonal 1 holds slots (1,0) and (0,1)
/// assert_eq!(slot_index(1, 0, 3), 1);
/// assert_eq!(slot_index(1, 1, 3), 3);
/// ```
#[inline]
pub fn slot_index(diag: usize, j: usize, w: usize) -> usize {
    let mut loc = diag + j * (w - 1);
    if diag >= w {
        loc += (w - 1) * (diag - w + 1);
    }
    loc
}

/// Sort `items` into diagonal-traversal order for a `w x h` grid.
///
/// The whole sequence is stable-sorted ascending by `primary`, partitioned
/// into `w + h - 1` consecutive anti-diagonal groups, each group
/// stable-sorted ascending by `secondary`, and the groups reassembled along
/// the grid's anti-diagonals. The result is the same multiset of records,
/// addressable as a row-major `w x h` grid.
///
/// For grid-of-pixel use the conventional keys are the sum and difference of
/// two channels, which makes the primary key grow toward the lower right.
///
/// # Panics
///
/// Panics if `items.len() != shape.len()`.
///
/// # Example
///
/// ```
/// use pixel_remap::shape::Shape2d;
/// use pixel_remap::sort::sort_diagonal;
///
/// // grid coordinates sorted by (x + y, y - x) come back in grid order
/// let coords = vec![(1, 1), (0, 1), (1, 0), (0, 0)];
/// let shape = Shape2d { w: 2, h: 2 };
/// let out = sort_diagonal(
///     coords,
///     shape,
///     |&(x, y): &(i32, i32)| (x + y) as f64,
///     |&(x, y): &(i32, i32)| (y - x) as f64,
/// );
/// assert_eq!(out, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
/// ```
pub fn sort_diagonal<T>(
    mut items: Vec<T>,
    shape: Shape2d,
    primary: impl Fn(&T) -> f64,
    secondary: impl Fn(&T) -> f64,
) -> Vec<T> {
    assert_eq!(
        items.len(),
        shape.len(),
        "item count ({}) must fill the {}x{} grid exactly",
        items.len(),
        shape.w,
        shape.h,
    );
    if items.is_empty() {
        return items;
    }

    items.sort_by(|a, b| primary(a).total_cmp(&primary(b)));

    let n = items.len();
    let mut out: Vec<Option<T>> = (0..n).map(|_| None).collect();
    let mut rest = items.into_iter();
    for diag in 0..(shape.w + shape.h - 1) {
        let len = diagonal_len(diag, shape);
        let mut group: Vec<T> = rest.by_ref().take(len).collect();
        group.sort_by(|a, b| secondary(a).total_cmp(&secondary(b)));
        for (j, item) in group.into_iter().enumerate() {
            let slot = slot_index(diag, j, shape.w);
            debug_assert!(out[slot].is_none(), "slot {slot} written twice");
            out[slot] = Some(item);
        }
    }

    out.into_iter()
        .map(|slot| slot.expect("every diagonal slot is filled exactly once"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPES: &[(usize, usize)] = &[
        (1, 1),
        (1, 5),
        (5, 1),
        (2, 2),
        (2, 3),
        (3, 3),
        (3, 7),
        (4, 4),
        (4, 6),
        (7, 11),
    ];

    #[test]
    fn diagonal_lengths_sum_to_grid_size() {
        for &(w, h) in SHAPES {
            let shape = Shape2d { w, h };
            let total: usize = (0..w + h - 1).map(|d| diagonal_len(d, shape)).sum();
            assert_eq!(total, w * h, "lengths must sum to n for {w}x{h}");
        }
    }

    #[test]
    fn diagonal_lengths_triangular_wave() {
        let shape = Shape2d { w: 3, h: 5 };
        let lens: Vec<usize> = (0..7).map(|d| diagonal_len(d, shape)).collect();
        assert_eq!(lens, vec![1, 2, 3, 3, 3, 2, 1]);
    }

    #[test]
    fn slot_index_covers_every_slot_once() {
        for &(w, h) in SHAPES {
            let shape = Shape2d { w, h };
            let mut seen = vec![false; w * h];
            for diag in 0..w + h - 1 {
                for j in 0..diagonal_len(diag, shape) {
                    let slot = slot_index(diag, j, w);
                    assert!(slot < w * h, "slot {slot} out of range for {w}x{h}");
                    assert!(!seen[slot], "slot {slot} written twice for {w}x{h}");
                    seen[slot] = true;
                }
            }
            assert!(seen.iter().all(|&s| s), "unfilled slot for {w}x{h}");
        }
    }

    #[test]
    fn slot_index_known_table_3x3() {
        // (diag, j) -> flat slot of a 3x3 zig-zag traversal
        let expected = [
            ((0, 0), 0),
            ((1, 0), 1),
            ((1, 1), 3),
            ((2, 0), 2),
            ((2, 1), 4),
            ((2, 2), 6),
            ((3, 0), 5),
            ((3, 1), 7),
            ((4, 0), 8),
        ];
        for ((diag, j), slot) in expected {
            assert_eq!(slot_index(diag, j, 3), slot, "diag={diag} j={j}");
        }
    }

    #[test]
    fn grid_coordinates_sort_to_identity() {
        // Sorting the coordinates of a grid by (x + y, y - x) must lay them
        // back out at their own positions. This pins the loc formula to the
        // traversal it encodes.
        for &(w, h) in SHAPES {
            let mut coords: Vec<(usize, usize)> = (0..h)
                .flat_map(|y| (0..w).map(move |x| (x, y)))
                .collect();
            // feed them in scrambled order
            coords.reverse();
            let out = sort_diagonal(
                coords,
                Shape2d { w, h },
                |&(x, y)| (x + y) as f64,
                |&(x, y)| y as f64 - x as f64,
            );
            for (i, &(x, y)) in out.iter().enumerate() {
                assert_eq!(i, y * w + x, "coordinate ({x},{y}) misplaced in {w}x{h}");
            }
        }
    }

    #[test]
    fn output_is_permutation_of_input() {
        let shape = Shape2d { w: 4, h: 6 };
        let items: Vec<(f64, usize)> = (0..24)
            .map(|i| ((i as f64 * 7.3) % 5.0, i))
            .collect();
        let out = sort_diagonal(items.clone(), shape, |r| r.0, |r| -r.0);
        assert_eq!(out.len(), items.len());
        let mut before: Vec<usize> = items.iter().map(|r| r.1).collect();
        let mut after: Vec<usize> = out.iter().map(|r| r.1).collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn single_item_grid() {
        let out = sort_diagonal(vec![42], Shape2d { w: 1, h: 1 }, |_| 0.0, |_| 0.0);
        assert_eq!(out, vec![42]);
    }

    #[test]
    #[should_panic(expected = "must fill")]
    fn wrong_length_panics() {
        sort_diagonal(vec![1, 2, 3], Shape2d { w: 2, h: 2 }, |_| 0.0, |_| 0.0);
    }
}
