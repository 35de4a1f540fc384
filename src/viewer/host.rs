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

use crate::rect::SizeD;

use super::restyle::{Style, StyleReason};

/// The collaborators surrounding the engine: the render layer, the gallery
/// and the input source.
///
/// The engine never renders, navigates or downloads by itself; it derives
/// transforms and calls back into the host. Geometry is queried on demand
/// per operation, never cached across calls.
pub trait ViewerHost {
    /// Current viewport (visible window) size in pixels
    fn viewport_size(&self) -> SizeD;

    /// Natural (intrinsic) size of the image currently shown
    fn natural_size(&self) -> SizeD;

    /// Receive a freshly derived style descriptor
    fn apply_style(&self, style: &Style, reason: StyleReason);

    /// Gallery selection hooks
    fn select_prev(&self);
    fn select_next(&self);

    /// Source URL of the current image, if any, for the download action
    fn image_url(&self) -> Option<String>;

    /// Perform the download side effect for the given URL
    fn download(&self, url: &str);

    /// Start capturing keyboard input for the viewport
    fn grab_keyboard(&self);

    /// Stop capturing keyboard input. Paired with every grab; the engine
    /// guarantees release on every exit path including teardown.
    fn release_keyboard(&self);

    /// The viewport was asked to close; the host owns the exit animation
    /// and reports back through `ImageViewer::on_hidden`
    fn closed(&self);
}
