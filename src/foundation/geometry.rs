//! Bounds helpers shared by every filter input.

use crate::foundation::core::{Affine, Point, Rect};

/// `true` when `transform` has finite coefficients and a non-zero determinant.
pub fn is_invertible(transform: Affine) -> bool {
    let det = transform.determinant();
    transform.is_finite() && det.is_finite() && det != 0.0
}

/// Axis-aligned bounds of `rect` after mapping its corners through `transform`.
///
/// Returns `None` for a zero-area or non-finite source rect and for a degenerate transform.
pub fn transform_bounds(rect: Rect, transform: Affine) -> Option<Rect> {
    if !rect.is_finite() || rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    if !is_invertible(transform) {
        return None;
    }
    let bounds = transform.transform_rect_bbox(rect);
    bounds.is_finite().then_some(bounds)
}

/// Union of all present coverages; `None` when nothing is covered.
pub fn union_coverage(coverages: impl IntoIterator<Item = Option<Rect>>) -> Option<Rect> {
    coverages
        .into_iter()
        .flatten()
        .reduce(|acc, rect| acc.union(rect))
}

/// Corners ordered top-left, top-right, bottom-left, bottom-right.
pub fn rect_corners(rect: Rect) -> [Point; 4] {
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x0, rect.y1),
        Point::new(rect.x1, rect.y1),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
