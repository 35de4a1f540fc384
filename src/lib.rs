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

//! Interactive image viewport and gesture engine.
//!
//! Maintains a 2D affine transform (translate, rotate, scale) for an image
//! shown in a viewport and mutates it in response to user gestures:
//! drag-to-pan, wheel and keyboard zoom along a quantized scale ladder,
//! double-click toggle to native size, 90-degree rotation steps and reset.
//! A boundary clamp keeps the image reachable after every pan or zoom.
//!
//! Rendering, UI chrome and gallery selection live outside the engine; they
//! are reached through the [`viewer::ViewerHost`] trait.

pub mod config;
pub mod rect;
pub mod viewer;

pub use viewer::{
    clamp::{clamp_offset, DragHint, Travel},
    restyle::{Cursor, Style},
    transform::{ScaleState, Transform},
    ImageViewer, Key, PointerButton, StyleReason, ViewerHost,
};
