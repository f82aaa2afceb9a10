/// Three-way clamp applied to pointer coordinates before any transform.
#[must_use]
pub fn clamp(min: f64, value: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// One path-construction command in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    /// Quadratic curve through control point `(cx, cy)` to `(x, y)`.
    QuadTo { cx: f64, cy: f64, x: f64, y: f64 },
}

/// Builds the rounded-rectangle silhouette of the selection band.
///
/// The ops trace the outline clockwise from the top-left corner, rounding
/// each corner with a quadratic curve.
#[must_use]
pub fn rounded_rect_path(x: f64, y: f64, w: f64, h: f64, radius: f64) -> Vec<PathOp> {
    let right = x + w;
    let bottom = y + h;

    vec![
        PathOp::MoveTo { x: x + radius, y },
        PathOp::LineTo {
            x: right - radius,
            y,
        },
        PathOp::QuadTo {
            cx: right,
            cy: y,
            x: right,
            y: y + radius,
        },
        PathOp::LineTo {
            x: right,
            y: bottom - radius,
        },
        PathOp::QuadTo {
            cx: right,
            cy: bottom,
            x: right - radius,
            y: bottom,
        },
        PathOp::LineTo {
            x: x + radius,
            y: bottom,
        },
        PathOp::QuadTo {
            cx: x,
            cy: bottom,
            x,
            y: bottom - radius,
        },
        PathOp::LineTo { x, y: y + radius },
        PathOp::QuadTo {
            cx: x,
            cy: y,
            x: x + radius,
            y,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{PathOp, clamp, rounded_rect_path};

    #[test]
    fn clamp_behaves_at_boundaries() {
        assert_eq!(clamp(0.0, -5.0, 10.0), 0.0);
        assert_eq!(clamp(0.0, 15.0, 10.0), 10.0);
        assert_eq!(clamp(0.0, 5.0, 10.0), 5.0);
        assert_eq!(clamp(0.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(0.0, 10.0, 10.0), 10.0);
    }

    #[test]
    fn rounded_rect_path_starts_at_top_left_and_closes() {
        let ops = rounded_rect_path(10.0, 0.0, 100.0, 50.0, 3.0);
        assert_eq!(ops.len(), 9);
        assert_eq!(ops[0], PathOp::MoveTo { x: 13.0, y: 0.0 });
        // The final curve returns to the starting point of the path.
        assert_eq!(
            ops[8],
            PathOp::QuadTo {
                cx: 10.0,
                cy: 0.0,
                x: 13.0,
                y: 0.0
            }
        );
    }
}
