// PView -- Interactive image viewport and gesture engine written in Rust
//
// Copyright (c) 2024-2025 Martin van der Werff <github (at) newinnovations.nl>
//
// This file is part of PView.
//
// PView is free software: you can redistribute it and/or modify it under the terms of
// the GNU Affero General Public License as published by the Free Software Foundation, either
// version 3 of the License, or (at your option) any later version.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR
// IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND
// FITNESS FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
// LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR
// BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
// STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use crate::rect::{PointD, RectD, SizeD, VectorD};

/// Net pointer travel along one axis during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Travel {
    /// Toward the axis start: leftward for X, upward for Y
    Negative,
    /// Toward the axis end: rightward for X, downward for Y
    Positive,
}

/// Direction hint derived from a finished drag, used as the tie-break for
/// which viewport edge the clamp honors when the image spans the viewport
/// in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragHint {
    pub horizontal: Travel,
    pub vertical: Travel,
}

impl DragHint {
    /// Derives the hint from the pointer positions at drag start and drag
    /// end. The sign of `down - up` per axis decides the direction.
    pub fn from_travel(down: PointD, up: PointD) -> Self {
        Self {
            horizontal: if down.x() - up.x() > 0.0 {
                Travel::Negative
            } else {
                Travel::Positive
            },
            vertical: if down.y() - up.y() > 0.0 {
                Travel::Negative
            } else {
                Travel::Positive
            },
        }
    }
}

/// Derives the corrected pan offset that keeps the image reachable within
/// the viewport.
///
/// Pure function of the bounding box at the candidate offset, the viewport
/// size, the candidate offset itself and an optional travel hint from the
/// triggering drag (absent for zoom-triggered calls). The box-vs-viewport
/// relationship is evaluated freshly each call: rotation and scale change
/// the box shape independent of any offset history.
///
/// Per axis:
/// 1. box not larger than the viewport: center (offset 0);
/// 2. gap at the leading edge: snap the edge onto the viewport edge;
/// 3. gap at the trailing edge: symmetric snap;
/// 4. box spans the viewport on both sides: one-sided clamp toward the
///    drag direction, or a symmetric clamp when no hint is present.
pub fn clamp_offset(
    bbox: &RectD,
    viewport: SizeD,
    candidate: VectorD,
    hint: Option<DragHint>,
) -> VectorD {
    VectorD::new(
        clamp_axis(
            bbox.x0,
            bbox.x1,
            viewport.width(),
            candidate.x(),
            hint.map(|h| h.horizontal),
        ),
        clamp_axis(
            bbox.y0,
            bbox.y1,
            viewport.height(),
            candidate.y(),
            hint.map(|h| h.vertical),
        ),
    )
}

fn clamp_axis(low: f64, high: f64, view: f64, candidate: f64, travel: Option<Travel>) -> f64 {
    if !low.is_finite() || !high.is_finite() || !view.is_finite() {
        // Bad geometry cannot be clamped; hand back NaN so the commit
        // guard rejects the result instead of panicking mid-clamp
        return f64::NAN;
    }
    let length = high - low;
    if length <= view {
        // Image fits: centered, no panning needed
        return 0.0;
    }
    let half_overflow = (length - view) / 2.0;
    if low > 0.0 {
        // Gap at the leading edge: snap the box back against it
        half_overflow
    } else if high < view {
        -half_overflow
    } else {
        // Box fully spans the viewport: honor the edge the drag moved away
        // from, so the trailing edge never crosses the center line
        match travel {
            Some(Travel::Positive) => half_overflow.min(candidate),
            Some(Travel::Negative) => (-half_overflow).max(candidate),
            None => candidate.clamp(-half_overflow, half_overflow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Box of the given width at the given left edge, on a quiet Y axis
    fn hbox(left: f64, width: f64) -> RectD {
        RectD::new(left, 0.0, left + width, 100.0)
    }

    fn viewport(width: f64) -> SizeD {
        SizeD::new(width, 100.0)
    }

    const RIGHTWARD: DragHint = DragHint {
        horizontal: Travel::Positive,
        vertical: Travel::Positive,
    };

    const LEFTWARD: DragHint = DragHint {
        horizontal: Travel::Negative,
        vertical: Travel::Negative,
    };

    #[test]
    fn test_centers_when_smaller() {
        // Any box narrower than the viewport centers, regardless of the
        // prior offset or direction hint
        for candidate in [-500.0, -1.0, 0.0, 250.0] {
            for hint in [None, Some(RIGHTWARD), Some(LEFTWARD)] {
                let corrected = clamp_offset(
                    &hbox(120.0, 600.0),
                    viewport(1000.0),
                    VectorD::new(candidate, 0.0),
                    hint,
                );
                assert_eq!(corrected.x(), 0.0);
            }
        }
    }

    #[test]
    fn test_gap_closure_left() {
        // Box wider than the viewport but drifted right, leaving a gap at
        // the left edge: snaps to (box - viewport) / 2 exactly
        for hint in [None, Some(RIGHTWARD), Some(LEFTWARD)] {
            let corrected = clamp_offset(
                &hbox(10.0, 1200.0),
                viewport(1000.0),
                VectorD::new(110.0, 0.0),
                hint,
            );
            assert_eq!(corrected.x(), 100.0);
        }
    }

    #[test]
    fn test_gap_closure_right() {
        // Symmetric gap at the right edge
        let corrected = clamp_offset(
            &hbox(-300.0, 1200.0),
            viewport(1000.0),
            VectorD::new(-200.0, 0.0),
            None,
        );
        assert_eq!(corrected.x(), -100.0);
    }

    #[test]
    fn test_spanning_box_honors_drag_direction() {
        // box width 1200, viewport 1000, left -150 (right edge at 1050):
        // no gap on either side, candidate offset -150 after a rightward
        // drag from start offset -100 with delta 50
        let corrected = clamp_offset(
            &hbox(-150.0, 1200.0),
            viewport(1000.0),
            VectorD::new(-150.0, 0.0),
            Some(RIGHTWARD),
        );
        assert_eq!(corrected.x(), -150.0); // min(100, -150)

        // A leftward drag instead bounds from below
        let corrected = clamp_offset(
            &hbox(-150.0, 1200.0),
            viewport(1000.0),
            VectorD::new(-150.0, 0.0),
            Some(LEFTWARD),
        );
        assert_eq!(corrected.x(), -100.0); // max(-100, -150)
    }

    #[test]
    fn test_spanning_box_without_hint_clamps_symmetrically() {
        // Zoom-triggered calls carry no hint
        let corrected = clamp_offset(
            &hbox(-150.0, 1200.0),
            viewport(1000.0),
            VectorD::new(-150.0, 0.0),
            None,
        );
        assert_eq!(corrected.x(), -100.0);

        let corrected = clamp_offset(
            &hbox(-50.0, 1200.0),
            viewport(1000.0),
            VectorD::new(50.0, 0.0),
            None,
        );
        assert_eq!(corrected.x(), 50.0); // already within bounds
    }

    #[test]
    fn test_idempotence() {
        // Re-measuring the box at the corrected offset and clamping again
        // returns the same offset (fixed point)
        let view = viewport(1000.0);
        let width = 1200.0;
        for (left, candidate, hint) in [
            (10.0, 110.0, None),
            (-130.0, -30.0, Some(RIGHTWARD)),
            (-300.0, -200.0, Some(LEFTWARD)),
            (120.0, -500.0, None),
        ] {
            let first = clamp_offset(&hbox(left, width), view, VectorD::new(candidate, 0.0), hint);
            // Box recentered at the corrected offset: left = (view-width)/2 + offset
            let remeasured = hbox((1000.0 - width) / 2.0 + first.x(), width);
            let second = clamp_offset(&remeasured, view, first, hint);
            assert_eq!(second.x(), first.x());
        }
    }

    #[test]
    fn test_vertical_axis_is_symmetric() {
        // Tall box with a gap above
        let bbox = RectD::new(0.0, 20.0, 1000.0, 1420.0);
        let view = SizeD::new(1000.0, 1000.0);
        let corrected = clamp_offset(&bbox, view, VectorD::new(0.0, 220.0), None);
        assert_eq!(corrected.y(), 200.0);

        // Spanning tall box after a downward drag
        let bbox = RectD::new(0.0, -250.0, 1000.0, 1150.0);
        let corrected = clamp_offset(
            &bbox,
            view,
            VectorD::new(0.0, -50.0),
            Some(DragHint {
                horizontal: Travel::Positive,
                vertical: Travel::Positive,
            }),
        );
        assert_eq!(corrected.y(), -50.0); // min(200, -50)
    }

    #[test]
    fn test_non_finite_box_yields_non_finite_offset() {
        // A NaN bounding box must surface as a NaN offset for the caller's
        // commit guard, never abort inside the clamp
        let bbox = RectD::new(f64::NAN, 0.0, f64::NAN, 100.0);
        let corrected = clamp_offset(&bbox, viewport(1000.0), VectorD::new(10.0, 0.0), None);
        assert!(corrected.x().is_nan());
        assert_eq!(corrected.y(), 0.0); // the finite axis clamps normally

        let corrected = clamp_offset(
            &RectD::new(f64::NEG_INFINITY, 0.0, f64::INFINITY, 100.0),
            viewport(1000.0),
            VectorD::new(10.0, 0.0),
            Some(RIGHTWARD),
        );
        assert!(corrected.x().is_nan());
    }

    #[test]
    fn test_hint_from_travel() {
        let down = PointD::new(100.0, 100.0);

        // Pointer released to the right and below the press position
        let hint = DragHint::from_travel(down, PointD::new(150.0, 130.0));
        assert_eq!(hint.horizontal, Travel::Positive);
        assert_eq!(hint.vertical, Travel::Positive);

        // Released up and to the left
        let hint = DragHint::from_travel(down, PointD::new(40.0, 90.0));
        assert_eq!(hint.horizontal, Travel::Negative);
        assert_eq!(hint.vertical, Travel::Negative);
    }
}
