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

use crate::rect::{PointD, VectorD};

use super::clamp::DragHint;

/// An active pan gesture, created at pointer-down and consumed at
/// pointer-up.
///
/// The anchor is chosen so that pointer positions map directly onto new
/// offsets: `offset = pointer - anchor` tracks the pointer delta 1:1 while
/// the drag lasts. The pointer-down position is kept so the release can
/// judge the drag's net travel direction for the boundary clamp.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    /// Screen position of the pointer when the drag began
    pointer_down: PointD,
    /// `pointer_down - offset_at_start`
    anchor: VectorD,
}

impl DragSession {
    /// Opens a session for a pointer press at `pointer` with the current
    /// pan offset.
    pub fn begin(pointer: PointD, offset: VectorD) -> Self {
        Self {
            pointer_down: pointer,
            anchor: pointer - offset,
        }
    }

    /// The (unclamped) offset the image should take for the given pointer
    /// position.
    pub fn offset_for(&self, pointer: PointD) -> VectorD {
        pointer - self.anchor
    }

    /// Net travel direction of the drag, judged from the release position.
    pub fn hint(&self, pointer_up: PointD) -> DragHint {
        DragHint::from_travel(self.pointer_down, pointer_up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::clamp::Travel;

    #[test]
    fn test_offset_tracks_pointer_one_to_one() {
        let session = DragSession::begin(PointD::new(200.0, 150.0), VectorD::new(50.0, 30.0));

        // No movement yet: offset unchanged
        assert_eq!(
            session.offset_for(PointD::new(200.0, 150.0)),
            VectorD::new(50.0, 30.0)
        );

        // Pointer moved by (-20, -20): offset follows exactly
        assert_eq!(
            session.offset_for(PointD::new(180.0, 130.0)),
            VectorD::new(30.0, 10.0)
        );
    }

    #[test]
    fn test_hint_matches_net_travel() {
        let session = DragSession::begin(PointD::new(100.0, 100.0), VectorD::default());

        let hint = session.hint(PointD::new(160.0, 70.0));
        assert_eq!(hint.horizontal, Travel::Positive);
        assert_eq!(hint.vertical, Travel::Negative);

        // The press position is judged against release, not the last move
        let hint = session.hint(PointD::new(100.0, 100.0));
        assert_eq!(hint.horizontal, Travel::Positive);
        assert_eq!(hint.vertical, Travel::Positive);
    }
}
