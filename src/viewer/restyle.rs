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

use super::transform::ScaleState;

/// Pointer cursor the render layer should show for the current state
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Idle, image can be grabbed
    #[default]
    Grab,
    /// A drag session is active
    Grabbing,
}

impl From<Cursor> for &str {
    fn from(value: Cursor) -> Self {
        match value {
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// The transform descriptor handed to the render layer after every
/// state-changing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub offset_x: f64,
    pub offset_y: f64,
    /// Accumulated rotation in degrees (multiple of 90, not reduced)
    pub rotation_degrees: i32,
    pub scale: f64,
    /// Scale relative to the intrinsic size, for zoom indicators
    pub scale_state: ScaleState,
    pub cursor: Cursor,
    /// Whether the render layer may animate toward this style
    pub transition_enabled: bool,
}

/// Why a style was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleReason {
    Opened,
    ImageChanged,
    DragStarted,
    InteractiveDrag,
    DragEnded,
    ZoomChanged,
    RotationChanged,
    NativeToggled,
    ResetToOriginal,
}

impl StyleReason {
    /// Interactive drag moves are coalesced to at most one emission per
    /// frame; everything else is delivered immediately.
    pub fn coalesced(&self) -> bool {
        matches!(self, Self::InteractiveDrag)
    }

    /// Whether the render layer may animate toward the new style. Styles
    /// derived while a drag is active must apply instantly.
    pub fn animated(&self) -> bool {
        !matches!(self, Self::DragStarted | Self::InteractiveDrag)
    }
}

/// Single-slot deferred restyle.
///
/// At most one style is pending at any time; scheduling a new one before
/// the frame fires replaces the previous, it is never queued behind it.
#[derive(Debug, Default)]
pub struct FrameSlot {
    pending: Option<Style>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a style for the next frame, superseding any pending one
    pub fn schedule(&mut self, style: Style) {
        self.pending = Some(style);
    }

    /// Takes the pending style, leaving the slot empty
    pub fn take(&mut self) -> Option<Style> {
        self.pending.take()
    }

    /// Drops the pending style without delivering it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_with_scale(scale: f64) -> Style {
        Style {
            offset_x: 0.0,
            offset_y: 0.0,
            rotation_degrees: 0,
            scale,
            scale_state: ScaleState::Intrinsic,
            cursor: Cursor::Grab,
            transition_enabled: true,
        }
    }

    #[test]
    fn test_cursor_names() {
        assert_eq!(<&str>::from(Cursor::Grab), "grab");
        assert_eq!(<&str>::from(Cursor::Grabbing), "grabbing");
    }

    #[test]
    fn test_reason_predicates() {
        assert!(StyleReason::InteractiveDrag.coalesced());
        assert!(!StyleReason::DragEnded.coalesced());
        assert!(!StyleReason::ZoomChanged.coalesced());

        assert!(!StyleReason::InteractiveDrag.animated());
        assert!(!StyleReason::DragStarted.animated());
        assert!(StyleReason::DragEnded.animated());
        assert!(StyleReason::ZoomChanged.animated());
    }

    #[test]
    fn test_slot_supersedes_pending() {
        let mut slot = FrameSlot::new();
        assert!(!slot.is_pending());

        slot.schedule(style_with_scale(1.0));
        slot.schedule(style_with_scale(2.0));
        assert!(slot.is_pending());

        // Only the latest style survives; the slot empties on take
        assert_eq!(slot.take(), Some(style_with_scale(2.0)));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_slot_cancel() {
        let mut slot = FrameSlot::new();
        slot.schedule(style_with_scale(1.5));
        slot.cancel();
        assert!(!slot.is_pending());
        assert_eq!(slot.take(), None);
    }
}
