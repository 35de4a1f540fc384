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

pub mod clamp;
pub mod drag;
pub mod host;
pub mod keyboard;
pub mod restyle;
pub mod transform;

use log::{debug, warn};

use crate::{
    config::{config, Config},
    rect::{PointD, RectD, VectorD},
};

use self::{
    clamp::clamp_offset,
    drag::DragSession,
    restyle::{Cursor, FrameSlot, Style},
    transform::{ScaleState, Transform},
};

pub use host::ViewerHost;
pub use keyboard::Key;
pub use restyle::StyleReason;

/// Pointer button reported with a press event. Only the primary button
/// starts a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

/// The viewport transform controller.
///
/// Owns the transform state for one preview session and mutates it in
/// response to gesture input. Every offset-affecting operation runs the
/// boundary clamp so the image stays reachable; every state change ends in
/// a style emission toward the host's render layer.
///
/// All methods are driven from a single event-processing thread; drag moves
/// are coalesced to at most one emission per display frame through a
/// single-slot cell drained by [`ImageViewer::on_frame`].
pub struct ImageViewer<H: ViewerHost> {
    host: H,
    options: Config,
    transform: Transform,
    drag: Option<DragSession>,
    pending: FrameSlot,
    thumbnail: Option<RectD>,
    shown: bool,
    keyboard_grabbed: bool,
}

impl<H: ViewerHost> ImageViewer<H> {
    pub fn new(host: H) -> Self {
        Self::with_options(host, config().clone())
    }

    pub fn with_options(host: H, options: Config) -> Self {
        Self {
            host,
            options,
            transform: Transform::new(),
            drag: None,
            pending: FrameSlot::new(),
            thumbnail: None,
            shown: false,
            keyboard_grabbed: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.shown
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    // Lifecycle

    /// Opens the viewport. Keyboard capture is acquired for the duration of
    /// the session. The transform is deliberately not reset here; that
    /// happens when the image selection changes.
    pub fn open(&mut self) {
        if self.shown {
            return;
        }
        self.shown = true;
        if !self.keyboard_grabbed {
            self.host.grab_keyboard();
            self.keyboard_grabbed = true;
        }
        self.emit(StyleReason::Opened);
    }

    /// Closes the viewport. No-op when already closed. A drag in progress
    /// is abandoned and its pending coalesced restyle dropped, so no
    /// callback can fire against a torn-down viewport.
    pub fn close(&mut self) {
        if !self.shown {
            return;
        }
        self.shown = false;
        if self.drag.take().is_some() {
            self.transform.set_dragging(false);
        }
        self.pending.cancel();
        if self.keyboard_grabbed {
            self.host.release_keyboard();
            self.keyboard_grabbed = false;
        }
        self.host.closed();
    }

    /// Reported by the host once the exit animation finished and the image
    /// is no longer visible. Scale and rotation reset for the next session;
    /// the stale offset is irrelevant while hidden.
    pub fn on_hidden(&mut self) {
        if self.shown {
            return;
        }
        self.transform.reset_scale_rotation();
    }

    pub fn switch_prev(&mut self) {
        self.transform.reset();
        self.host.select_prev();
        self.emit(StyleReason::ImageChanged);
    }

    pub fn switch_next(&mut self) {
        self.transform.reset();
        self.host.select_next();
        self.emit(StyleReason::ImageChanged);
    }

    // Zoom

    /// Steps up the scale ladder, bounded relative to the image resolution
    /// and the viewport size. The offset is unchanged.
    pub fn zoom_in(&mut self) {
        if self
            .transform
            .zoom_in(self.host.natural_size(), self.host.viewport_size())
        {
            self.emit(StyleReason::ZoomChanged);
        }
    }

    /// Steps down the scale ladder. The corrected offset is derived from
    /// the bounding box at the candidate scale and committed together with
    /// the scale, so the shrink and the re-clamp appear as one animated
    /// step.
    pub fn zoom_out(&mut self) {
        let Some(candidate) = self.transform.zoom_out_step() else {
            return;
        };
        let viewport = self.host.viewport_size();
        let bbox = self.transform.bounding_box_at(
            candidate,
            self.transform.offset(),
            self.host.natural_size(),
            viewport,
        );
        let corrected = clamp_offset(&bbox, viewport, self.transform.offset(), None);
        self.transform.set_scale(candidate);
        self.commit_offset(corrected);
        self.emit(StyleReason::ZoomChanged);
    }

    /// Wheel zoom: scrolling up zooms in, down zooms out, optionally
    /// inverted through the configuration.
    pub fn on_scroll(&mut self, dy: f64) {
        if !self.shown {
            return;
        }
        let dy = if self.options.invert_wheel { -dy } else { dy };
        if dy < -0.01 {
            self.zoom_in();
        } else if dy > 0.01 {
            self.zoom_out();
        }
    }

    /// Double-click toggle between native pixel size and intrinsic size
    pub fn on_double_click(&mut self) {
        self.toggle_native_size();
    }

    pub fn toggle_native_size(&mut self) {
        self.transform
            .toggle_native(self.host.natural_size(), self.host.viewport_size());
        self.emit(StyleReason::NativeToggled);
    }

    /// Explicit reset to the native pixel size: also resynchronizes the
    /// ladder index and recenters the image.
    pub fn resize_to_original_size(&mut self) {
        self.transform
            .resize_to_original(self.host.natural_size(), self.host.viewport_size());
        self.emit(StyleReason::ResetToOriginal);
    }

    // Rotation

    pub fn rotate_clockwise(&mut self) {
        self.transform.add_rotation(90);
        self.emit(StyleReason::RotationChanged);
    }

    pub fn rotate_counterclockwise(&mut self) {
        self.transform.add_rotation(-90);
        self.emit(StyleReason::RotationChanged);
    }

    // Drag state machine

    /// Pointer press: opens a drag session for the primary button. Presses
    /// with another button, while a drag is already active or while the
    /// viewport is closed are ignored.
    pub fn on_pointer_down(&mut self, button: PointerButton, position: PointD) {
        if !self.shown || button != PointerButton::Primary || self.drag.is_some() {
            return;
        }
        self.drag = Some(DragSession::begin(position, self.transform.offset()));
        self.transform.set_dragging(true);
        self.emit(StyleReason::DragStarted);
    }

    /// Pointer move: tracks the pointer 1:1 without clamping. The restyle
    /// is coalesced; a move arriving before the frame fires supersedes the
    /// previous one. Moves without an active drag are no-ops.
    pub fn on_pointer_move(&mut self, position: PointD) {
        let Some(session) = self.drag else {
            return;
        };
        self.transform.set_offset(session.offset_for(position));
        self.emit(StyleReason::InteractiveDrag);
    }

    /// Pointer release: ends the drag, derives the net travel direction as
    /// the clamp tie-break and commits the corrected offset. Releases
    /// without an active drag are no-ops.
    pub fn on_pointer_up(&mut self, position: PointD) {
        let Some(session) = self.drag.take() else {
            return;
        };
        self.transform.set_dragging(false);
        let unclamped = session.offset_for(position);
        let viewport = self.host.viewport_size();
        let bbox = self.transform.bounding_box_at(
            self.transform.scale(),
            unclamped,
            self.host.natural_size(),
            viewport,
        );
        let corrected = clamp_offset(&bbox, viewport, unclamped, Some(session.hint(position)));
        self.commit_offset(corrected);
        self.emit(StyleReason::DragEnded);
    }

    /// Frame tick from the host: delivers the pending coalesced restyle,
    /// if any
    pub fn on_frame(&mut self) {
        if let Some(style) = self.pending.take() {
            self.host.apply_style(&style, StyleReason::InteractiveDrag);
        }
    }

    // Keyboard

    /// Handles a key while the viewport is open. Returns true when the key
    /// was consumed and must not propagate to the host page.
    pub fn on_key_press(&mut self, key: Key) -> bool {
        if !self.shown {
            return false;
        }
        match key {
            Key::Left => {
                self.switch_prev();
                true
            }
            Key::Right => {
                self.switch_next();
                true
            }
            Key::Up => {
                self.zoom_in();
                true
            }
            Key::Down => {
                self.zoom_out();
                true
            }
            Key::Escape => {
                self.close();
                true
            }
            // Consumed without effect, prevents page scroll
            Key::Space => true,
            Key::Other => false,
        }
    }

    // Collaborator surface

    /// Registers the originating thumbnail so entrance/exit animations can
    /// anchor their transform origin at its screen position
    pub fn set_thumbnail_anchor(&mut self, anchor: Option<RectD>) {
        self.thumbnail = anchor;
    }

    /// Transform origin for entrance/exit animation, if a thumbnail was
    /// registered
    pub fn transform_origin(&self) -> Option<PointD> {
        self.thumbnail.map(|rect| rect.center())
    }

    /// Delegates the download of the current image to the host
    pub fn download(&self) {
        if let Some(url) = self.host.image_url() {
            self.host.download(&url);
        }
    }

    // Internal

    fn commit_offset(&mut self, offset: VectorD) {
        // A non-finite offset signals bad geometry upstream; the last
        // committed offset stays in effect
        if !offset.is_finite() {
            warn!("discarding non-finite offset {offset:?}");
            return;
        }
        self.transform.set_offset(offset);
    }

    fn style(&self, reason: StyleReason) -> Style {
        Style {
            offset_x: self.transform.offset().x(),
            offset_y: self.transform.offset().y(),
            rotation_degrees: self.transform.rotation_degrees(),
            scale: self.transform.scale(),
            scale_state: self.transform.state(),
            cursor: if self.transform.is_dragging() {
                Cursor::Grabbing
            } else {
                Cursor::Grab
            },
            transition_enabled: reason.animated() && self.options.animation,
        }
    }

    fn emit(&mut self, reason: StyleReason) {
        let style = self.style(reason);
        debug!(
            "-- style  reason={reason:?} scale={} offset=({}, {})",
            style.scale, style.offset_x, style.offset_y
        );
        if reason.coalesced() {
            self.pending.schedule(style);
        } else {
            // An immediate emission supersedes any pending coalesced one
            self.pending.cancel();
            self.host.apply_style(&style, reason);
        }
    }
}

impl<H: ViewerHost> Drop for ImageViewer<H> {
    /// Keyboard capture is scoped to the engine: abrupt teardown must not
    /// leak the grab
    fn drop(&mut self) {
        if self.keyboard_grabbed {
            self.host.release_keyboard();
        }
    }
}
