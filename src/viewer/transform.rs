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

use crate::rect::{RectD, SizeD, VectorD};

/// Base of the discrete scale ladder: stepped zoom reaches `SCALE_RADIX ^ exponent`
pub const SCALE_RADIX: f64 = 1.5;
/// Margin in viewport pixels kept clear at maximum zoom so the image never
/// exactly touches the viewport edges
pub const BLEEDING: f64 = 32.0;
/// Lower bound of the scale ladder
pub const MIN_SCALE: f64 = 0.5;
/// Floor for the maximum zoom factor, used when the image is small relative
/// to the viewport
pub const MAX_SCALE_FLOOR: f64 = 3.0;

/// Floating point comparison epsilon for scale state detection
const SCALE_EPSILON: f64 = 1.0e-6;

/// Represents the current scale of the image relative to its intrinsic size.
///
/// This is determined by comparing the current scale factor to 1.0 with
/// floating-point tolerance for comparison.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy)]
pub enum ScaleState {
    /// Image is displayed at its intrinsic size (scale = 1.0)
    Intrinsic,
    /// Image is enlarged (scale > 1.0)
    ZoomedIn,
    /// Image is reduced (scale < 1.0)
    ZoomedOut,
}

/// Ratios between the natural image dimensions and the viewport dimensions,
/// with the bleeding margin subtracted from the viewport.
fn bleed_ratios(natural: SizeD, viewport: SizeD) -> (f64, f64) {
    // Guard against zero or negative padded dimensions before dividing
    let padded_width = (viewport.width() - BLEEDING).max(1.0);
    let padded_height = (viewport.height() - BLEEDING).max(1.0);
    (
        natural.width() / padded_width,
        natural.height() / padded_height,
    )
}

/// Maximum scale reachable via the zoom-in ladder for the given image and
/// viewport: twice the scale at which the image fills the padded viewport in
/// its larger dimension, but never less than [`MAX_SCALE_FLOOR`].
pub fn max_scale(natural: SizeD, viewport: SizeD) -> f64 {
    let (width_ratio, height_ratio) = bleed_ratios(natural, viewport);
    MAX_SCALE_FLOOR.max(2.0 * height_ratio).max(2.0 * width_ratio)
}

/// Scale at which the image shows at its native pixel size relative to the
/// padded viewport.
///
/// When the image is smaller than the padded viewport in both dimensions the
/// native scale is 1.0: the image is never shrunk below its intrinsic size
/// just to "fit" a larger viewport.
pub fn native_scale(natural: SizeD, viewport: SizeD) -> f64 {
    let (width_ratio, height_ratio) = bleed_ratios(natural, viewport);
    if width_ratio < 1.0 && height_ratio < 1.0 {
        1.0
    } else {
        width_ratio.max(height_ratio)
    }
}

/// The affine transform applied to the image within the viewport.
///
/// Holds the current scale, the quantization index of the scale ladder, the
/// accumulated rotation and the pan offset. Scale 1.0 corresponds to the
/// image's intrinsic size. The offset is expressed in viewport pixels and is
/// applied after scale and rotation, relative to the centered position of
/// the image.
///
/// The `scale_exponent` is only authoritative for the discrete zoom ladder;
/// continuous scale targets (native-size toggle) leave it untouched until an
/// explicit resize resynchronizes it.
#[derive(Debug, Clone)]
pub struct Transform {
    /// Current scale factor (1.0 = intrinsic size)
    scale: f64,
    /// Quantization index such that `SCALE_RADIX ^ scale_exponent` is the
    /// canonical stepped scale
    scale_exponent: i32,
    /// Accumulated rotation in degrees, always a multiple of 90, unbounded
    /// (wraps visually every 360)
    rotation: i32,
    /// Pan offset in viewport pixels
    offset: VectorD,
    /// Whether a drag session is currently active
    dragging: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            scale_exponent: 0,
            rotation: 0,
            offset: VectorD::default(),
            dragging: false,
        }
    }
}

impl Transform {
    /// Creates a new Transform with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets scale, ladder index, rotation and offset to their defaults
    pub fn reset(&mut self) {
        let dragging = self.dragging;
        *self = Self::default();
        self.dragging = dragging;
    }

    /// Resets scale, ladder index and rotation, leaving the offset alone.
    /// Used once the viewport has been hidden, where the stale offset is
    /// irrelevant until the next image is shown.
    pub fn reset_scale_rotation(&mut self) {
        self.scale = 1.0;
        self.scale_exponent = 0;
        self.rotation = 0;
    }

    /// Determines the current scale state by comparing the factor to 1.0
    ///
    /// Uses floating-point epsilon comparison to handle precision issues.
    pub fn state(&self) -> ScaleState {
        if self.scale > 1.0 + SCALE_EPSILON {
            ScaleState::ZoomedIn
        } else if self.scale < 1.0 - SCALE_EPSILON {
            ScaleState::ZoomedOut
        } else {
            ScaleState::Intrinsic
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn scale_exponent(&self) -> i32 {
        self.scale_exponent
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Returns the accumulated rotation in degrees (not reduced modulo 360)
    pub fn rotation_degrees(&self) -> i32 {
        self.rotation
    }

    /// Adds to the accumulated rotation. The counter grows without bound;
    /// the visual rotation wraps naturally every 360 degrees.
    ///
    /// # Arguments
    /// * `delta` - Rotation angle to add in degrees (a multiple of 90)
    pub fn add_rotation(&mut self, delta: i32) {
        self.rotation += delta;
    }

    /// Checks if the image is currently on a quarter turn (90 or 270),
    /// which swaps the effective width and height
    pub fn quarter_turned(&self) -> bool {
        matches!(self.rotation.rem_euclid(360), 90 | 270)
    }

    pub fn offset(&self) -> VectorD {
        self.offset
    }

    pub fn set_offset(&mut self, offset: VectorD) {
        self.offset = offset;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Returns the effective image dimensions after accounting for rotation
    ///
    /// # Arguments
    /// * `natural` - Natural image dimensions (width, height)
    pub fn effective_size(&self, natural: SizeD) -> SizeD {
        if self.quarter_turned() {
            natural.transpose()
        } else {
            natural
        }
    }

    /// Steps one position up the scale ladder, bounded by [`max_scale`].
    ///
    /// The ladder index is incremented and the scale snaps to
    /// `SCALE_RADIX ^ exponent`, capped at the maximum. The offset is left
    /// unchanged: zooming pivots around the transform origin, not the
    /// viewport center.
    ///
    /// Returns true when the scale changed.
    pub fn zoom_in(&mut self, natural: SizeD, viewport: SizeD) -> bool {
        let max = max_scale(natural, viewport);
        if self.scale < max {
            self.scale_exponent += 1;
            self.scale = max.min(SCALE_RADIX.powi(self.scale_exponent));
            true
        } else {
            false
        }
    }

    /// Steps one position down the scale ladder, bounded by [`MIN_SCALE`].
    ///
    /// Only the ladder index is mutated here; the candidate scale is
    /// returned so the caller can derive the clamped offset at the new size
    /// and commit scale and offset as one atomic change.
    pub fn zoom_out_step(&mut self) -> Option<f64> {
        if self.scale > MIN_SCALE {
            self.scale_exponent -= 1;
            Some(MIN_SCALE.max(SCALE_RADIX.powi(self.scale_exponent)))
        } else {
            None
        }
    }

    /// Toggles between the native pixel size and the intrinsic size.
    ///
    /// The ladder index is deliberately not resynchronized: the ladder is
    /// only approximately continuous after a toggle, until the next explicit
    /// resize.
    pub fn toggle_native(&mut self, natural: SizeD, viewport: SizeD) {
        let native = native_scale(natural, viewport);
        if (self.scale - native).abs() < SCALE_EPSILON {
            self.scale = 1.0;
        } else {
            self.scale = native;
        }
    }

    /// Sets the scale to the native pixel size, resynchronizes the ladder
    /// index and recenters the image.
    pub fn resize_to_original(&mut self, natural: SizeD, viewport: SizeD) {
        self.scale = native_scale(natural, viewport);
        self.scale_exponent = (self.scale.ln() / SCALE_RADIX.ln()).ceil() as i32;
        self.offset = VectorD::default();
    }

    /// Computes the axis-aligned bounding box of the transformed image for
    /// an arbitrary scale and offset.
    ///
    /// The box is derived in closed form from the effective (rotation
    /// corrected) image size: the scaled image centered within the viewport
    /// and shifted by the offset. No live layout needs to be measured.
    pub fn bounding_box_at(
        &self,
        scale: f64,
        offset: VectorD,
        natural: SizeD,
        viewport: SizeD,
    ) -> RectD {
        RectD::centered_in(self.effective_size(natural).scale(scale), viewport, offset)
    }

    /// Computes the bounding box at the current scale and offset
    pub fn bounding_box(&self, natural: SizeD, viewport: SizeD) -> RectD {
        self.bounding_box_at(self.scale, self.offset, natural, viewport)
    }
}
