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

#![allow(dead_code)]

use std::fmt::Debug;

/// A rectangle defined by two corner points (x0, y0) and (x1, y1).
/// The rectangle is valid when x0 <= x1 and y0 <= y1.
/// Empty rectangles have x0 >= x1 or y0 >= y1.
///
/// Generic over numeric types T that support basic arithmetic and comparison operations.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Rect<T> {
    pub x0: T,
    pub y0: T,
    pub x1: T,
    pub y1: T,
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Size<T> {
    width: T,
    height: T,
}

impl<T> Size<T>
where
    T: Copy,
{
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> T {
        self.width
    }

    pub fn height(&self) -> T {
        self.height
    }

    /// Returns the size with width and height swapped (a quarter turn).
    pub fn transpose(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl<T> Size<T>
where
    T: Copy + std::ops::Mul<Output = T>,
{
    /// Returns a new size scaled by the given factor.
    pub fn scale(&self, scale: T) -> Self {
        Self {
            width: self.width * scale,
            height: self.height * scale,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct VectorPoint<T> {
    x: T,
    y: T,
}

impl<T> VectorPoint<T>
where
    T: Default
        + Copy
        + std::ops::Add<Output = T>
        + std::ops::Sub<Output = T>
        + std::ops::Mul<Output = T>
        + std::ops::Div<Output = T>,
{
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    /// Returns a new vector translated by the given offsets.
    pub fn translate(&self, offset: VectorPoint<T>) -> Self {
        Self::new(self.x + offset.x(), self.y + offset.y())
    }

    /// Returns a new vector scaled by the given scale.
    pub fn scale(&self, scale: T) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }

    /// Returns the vector rotated by 180 degrees
    pub fn neg(&self) -> Self {
        Self::new(T::default() - self.x, T::default() - self.y)
    }
}

impl<T> std::ops::Add for VectorPoint<T>
where
    T: Copy + std::ops::Add<Output = T>,
{
    type Output = VectorPoint<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Output {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T> std::ops::AddAssign for VectorPoint<T>
where
    T: Copy + std::ops::Add<Output = T>,
{
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<T> std::ops::Sub for VectorPoint<T>
where
    T: Copy + std::ops::Sub<Output = T>,
{
    type Output = VectorPoint<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl VectorPoint<f64> {
    /// Returns true when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T> Rect<T>
where
    T: Copy
        + PartialOrd
        + std::ops::Add<Output = T>
        + std::ops::Sub<Output = T>
        + std::ops::Mul<Output = T>
        + std::ops::Div<Output = T>
        + Debug
        + Default,
{
    /// Creates a new rectangle with the given coordinates.
    /// No validation is performed - the rectangle may be invalid or empty.
    pub const fn new(x0: T, y0: T, x1: T, y1: T) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn new_from_size(size: Size<T>) -> Self {
        Self::new(T::default(), T::default(), size.width, size.height)
    }

    /// Returns true if the rectangle is empty (has zero or negative area).
    /// An empty rectangle has x0 >= x1 or y0 >= y1.
    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Returns true if the rectangle is valid (x0 <= x1 and y0 <= y1).
    /// A valid rectangle may still be empty if x0 == x1 or y0 == y1.
    pub fn is_valid(&self) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1
    }

    /// Returns true if the point (x, y) is contained within the rectangle.
    /// Uses half-open intervals: [x0, x1) and [y0, y1).
    /// Returns false for empty rectangles.
    pub fn contains(&self, p: VectorPoint<T>) -> bool {
        if self.is_empty() {
            false
        } else {
            p.x >= self.x0 && p.x < self.x1 && p.y >= self.y0 && p.y < self.y1
        }
    }

    /// Returns the width of the rectangle.
    /// Returns zero for empty rectangles.
    pub fn width(&self) -> T {
        if self.is_empty() {
            T::default()
        } else {
            self.x1 - self.x0
        }
    }

    /// Returns the height of the rectangle.
    /// Returns zero for empty rectangles.
    pub fn height(&self) -> T {
        if self.is_empty() {
            T::default()
        } else {
            self.y1 - self.y0
        }
    }

    /// Returns the size of the rectangle.
    /// Returns zero for empty rectangles.
    pub fn size(&self) -> Size<T> {
        if self.is_empty() {
            Size::default()
        } else {
            Size {
                width: self.x1 - self.x0,
                height: self.y1 - self.y0,
            }
        }
    }

    /// Returns a new rectangle translated by the given offsets.
    /// Both corner points are moved by the offset vector.
    pub fn translate(&self, offset: VectorPoint<T>) -> Self {
        Self::new(
            self.x0 + offset.x(),
            self.y0 + offset.y(),
            self.x1 + offset.x(),
            self.y1 + offset.y(),
        )
    }

    pub fn point0(&self) -> VectorPoint<T> {
        VectorPoint {
            x: self.x0,
            y: self.y0,
        }
    }

    pub fn point1(&self) -> VectorPoint<T> {
        VectorPoint {
            x: self.x1,
            y: self.y1,
        }
    }
}

impl Rect<f64> {
    /// Creates a rectangle of the given size centered within a container,
    /// then shifted by the given offset.
    pub fn centered_in(size: SizeD, container: SizeD, offset: VectorD) -> Self {
        let x0 = (container.width() - size.width()) / 2.0 + offset.x();
        let y0 = (container.height() - size.height()) / 2.0 + offset.y();
        Self::new(x0, y0, x0 + size.width(), y0 + size.height())
    }

    pub fn center(self) -> VectorPoint<f64> {
        VectorPoint::new((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }
}

// Type aliases for convenience
pub type RectD = Rect<f64>;
pub type SizeD = Size<f64>;
pub type PointD = VectorPoint<f64>;
pub type VectorD = VectorPoint<f64>;
