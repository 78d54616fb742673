//! Reticle layout.
//!
//! Shapes are laid out as a list of primitive draw operations, pure data
//! that the overlay's paint handler strokes onto the DC and that tests
//! can inspect directly. All coordinates are integer pixels around the
//! given center point; inputs are assumed already clamped by the editing
//! layer.

use crate::model::{ReticleConfig, Shape};

/// One draw operation, in overlay client coordinates.
///
/// Ellipse boxes follow the GDI convention of an exclusive right/bottom
/// edge. Strokes use the configuration's thickness and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Straight stroke between two points.
    Line { x0: i32, y0: i32, x1: i32, y1: i32 },
    /// Unfilled ellipse outline.
    Outline {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },
    /// Solid filled ellipse.
    Fill {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },
}

/// Lay out `config` centered on `(cx, cy)`.
pub fn primitives(config: &ReticleConfig, cx: i32, cy: i32) -> Vec<Primitive> {
    let size = config.size;
    let mut ops = Vec::with_capacity(3);

    match config.shape {
        Shape::Cross => {
            ops.push(Primitive::Line {
                x0: cx - size,
                y0: cy,
                x1: cx + size,
                y1: cy,
            });
            ops.push(Primitive::Line {
                x0: cx,
                y0: cy - size,
                x1: cx,
                y1: cy + size,
            });
        }
        Shape::Circle => {
            ops.push(Primitive::Outline {
                left: cx - size,
                top: cy - size,
                right: cx + size,
                bottom: cy + size,
            });
        }
        Shape::Dot => {
            ops.push(Primitive::Fill {
                left: cx - size,
                top: cy - size,
                right: cx + size,
                bottom: cy + size,
            });
        }
    }

    // The dot shape already is a filled disc; the flag adds nothing there.
    if config.center_dot && config.shape != Shape::Dot {
        let t = config.thickness;
        ops.push(Primitive::Fill {
            left: cx - t,
            top: cy - t,
            right: cx + t + 1,
            bottom: cy + t + 1,
        });
    }

    ops
}
