//! Reading-order sort: top to bottom, left to right within a row band.

use std::cmp::Ordering;

use crate::model::ClassifiedBlock;

use super::options::LayoutOptions;

/// Compare two positions in reading order.
///
/// Positions whose `y` differ by at most `tolerance` share a visual row and
/// are ordered by `x`; otherwise they are ordered by `y`. NaN coordinates
/// compare as equal.
pub fn compare_reading_order(a: (f64, f64), b: (f64, f64), tolerance: f64) -> Ordering {
    let (ax, ay) = a;
    let (bx, by) = b;

    if (ay - by).abs() > tolerance {
        ay.partial_cmp(&by).unwrap_or(Ordering::Equal)
    } else {
        ax.partial_cmp(&bx).unwrap_or(Ordering::Equal)
    }
}

/// Sort blocks into reading order with the default row tolerance.
pub fn order_blocks(blocks: Vec<ClassifiedBlock>) -> Vec<ClassifiedBlock> {
    order_blocks_with(blocks, &LayoutOptions::default())
}

/// Sort blocks into reading order.
///
/// The row band makes the comparison non-transitive, so this uses a stable
/// linear insertion sort: each block moves left only past blocks that
/// compare strictly greater. Every adjacent pair in the output is therefore
/// either more than one band apart vertically or ordered by `x` within the
/// band, and blocks with equal keys keep their input order.
pub fn order_blocks_with(
    mut blocks: Vec<ClassifiedBlock>,
    options: &LayoutOptions,
) -> Vec<ClassifiedBlock> {
    let tolerance = options.row_tolerance;

    for i in 1..blocks.len() {
        let mut j = i;
        while j > 0
            && compare_reading_order(
                (blocks[j - 1].run.x, blocks[j - 1].run.y),
                (blocks[j].run.x, blocks[j].run.y),
                tolerance,
            ) == Ordering::Greater
        {
            blocks.swap(j - 1, j);
            j -= 1;
        }
    }

    blocks
}
