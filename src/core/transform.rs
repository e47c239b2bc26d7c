// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Affine transforms
//!
//! [`Matrix2d`] is a 2x3 affine matrix (the implicit third row is `0 0 1`).
//! [`MatrixStack`] holds the current composed matrix plus a save/restore
//! stack. The rasterizer only reads the stack's current matrix and composes
//! local copies for stepping through rotations; it never mutates the stack.

/// A 2x3 affine transform matrix
///
/// Maps a point `(x, y)` to:
///
/// ```text
/// x' = a * x + b * y + tx
/// y' = c * x + d * y + ty
/// ```
///
/// # Examples
///
/// ```
/// use softraster::core::transform::Matrix2d;
///
/// let m = Matrix2d::translate(10.0, 5.0);
/// assert_eq!(m.transform_point(1.0, 2.0), (11.0, 7.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2d {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Matrix2d {
    /// The identity transform
    pub const IDENTITY: Matrix2d = Matrix2d {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Rotation by `angle` radians
    pub fn rotate(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: cos,
            b: -sin,
            c: sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Translation by `(dx, dy)`
    pub fn translate(dx: f64, dy: f64) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx: dx,
            ty: dy,
        }
    }

    /// Non-uniform scale by `(sx, sy)`
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Compose two transforms
    ///
    /// The right-hand transform applies first:
    /// `a.multiply(&b).transform_point(p) == a.transform_point(b.transform_point(p))`.
    pub fn multiply(&self, rhs: &Matrix2d) -> Matrix2d {
        Matrix2d {
            a: self.a * rhs.a + self.b * rhs.c,
            b: self.a * rhs.b + self.b * rhs.d,
            c: self.c * rhs.a + self.d * rhs.c,
            d: self.c * rhs.b + self.d * rhs.d,
            tx: self.a * rhs.tx + self.b * rhs.ty + self.tx,
            ty: self.c * rhs.tx + self.d * rhs.ty + self.ty,
        }
    }

    /// Apply the transform to a point
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.b * y + self.tx,
            self.c * x + self.d * y + self.ty,
        )
    }
}

impl Default for Matrix2d {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A transform stack with a current composed matrix
///
/// `push` saves a copy of the current matrix; `pop` restores the most
/// recently saved one. Popping an empty stack leaves the current matrix
/// untouched.
///
/// # Examples
///
/// ```
/// use softraster::core::transform::MatrixStack;
///
/// let mut stack = MatrixStack::new();
/// stack.push();
/// stack.translate(100.0, 0.0);
/// assert_eq!(stack.current().transform_point(0.0, 0.0), (100.0, 0.0));
/// stack.pop();
/// assert_eq!(stack.current().transform_point(0.0, 0.0), (0.0, 0.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatrixStack {
    /// The current composed matrix
    current: Matrix2d,

    /// Saved matrices, most recent last
    saved: Vec<Matrix2d>,
}

impl MatrixStack {
    /// Create a stack whose current matrix is the identity
    pub fn new() -> Self {
        Self::default()
    }

    /// The current composed matrix
    pub fn current(&self) -> Matrix2d {
        self.current
    }

    /// Number of saved matrices
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Save a copy of the current matrix
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the most recently saved matrix
    ///
    /// Returns `false` (and leaves the current matrix untouched) when there
    /// is nothing saved.
    pub fn pop(&mut self) -> bool {
        match self.saved.pop() {
            Some(matrix) => {
                self.current = matrix;
                true
            }
            None => false,
        }
    }

    /// Compose a transform onto the current matrix (applied innermost)
    pub fn apply(&mut self, matrix: &Matrix2d) {
        self.current = self.current.multiply(matrix);
    }

    /// Compose a rotation onto the current matrix
    pub fn rotate(&mut self, angle: f64) {
        self.apply(&Matrix2d::rotate(angle));
    }

    /// Compose a translation onto the current matrix
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.apply(&Matrix2d::translate(dx, dy));
    }

    /// Compose a scale onto the current matrix
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.apply(&Matrix2d::scale(sx, sy));
    }

    /// Reset to an empty stack with an identity current matrix
    pub fn reset(&mut self) {
        self.current = Matrix2d::IDENTITY;
        self.saved.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < EPSILON && (actual.1 - expected.1).abs() < EPSILON,
            "expected ({}, {}), got ({}, {})",
            expected.0,
            expected.1,
            actual.0,
            actual.1
        );
    }

    #[test]
    fn test_identity() {
        assert_eq!(
            Matrix2d::IDENTITY.transform_point(3.0, -4.5),
            (3.0, -4.5)
        );
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let m = Matrix2d::rotate(std::f64::consts::FRAC_PI_2);
        assert_close(m.transform_point(1.0, 0.0), (0.0, 1.0));
        assert_close(m.transform_point(0.0, 1.0), (-1.0, 0.0));
    }

    #[test]
    fn test_translate() {
        let m = Matrix2d::translate(5.0, -2.0);
        assert_eq!(m.transform_point(1.0, 1.0), (6.0, -1.0));
    }

    #[test]
    fn test_scale() {
        let m = Matrix2d::scale(2.0, 3.0);
        assert_eq!(m.transform_point(4.0, -1.0), (8.0, -3.0));
    }

    #[test]
    fn test_multiply_applies_rhs_first() {
        let translate = Matrix2d::translate(1.0, 0.0);
        let rotate = Matrix2d::rotate(std::f64::consts::FRAC_PI_2);

        // Rotate first, then translate
        let m = translate.multiply(&rotate);
        assert_close(m.transform_point(1.0, 0.0), (1.0, 1.0));

        // Translate first, then rotate
        let m = rotate.multiply(&translate);
        assert_close(m.transform_point(1.0, 0.0), (0.0, 2.0));
    }

    #[test]
    fn test_stack_push_pop() {
        let mut stack = MatrixStack::new();
        stack.translate(10.0, 0.0);
        stack.push();
        stack.rotate(1.0);
        stack.scale(2.0, 2.0);
        assert_eq!(stack.depth(), 1);

        assert!(stack.pop());
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current(), Matrix2d::translate(10.0, 0.0));
    }

    #[test]
    fn test_pop_empty_stack_is_noop() {
        let mut stack = MatrixStack::new();
        stack.translate(3.0, 4.0);
        let before = stack.current();

        assert!(!stack.pop());
        assert_eq!(stack.current(), before);
    }

    #[test]
    fn test_reset() {
        let mut stack = MatrixStack::new();
        stack.push();
        stack.rotate(0.5);
        stack.reset();
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current(), Matrix2d::IDENTITY);
    }

    #[test]
    fn test_apply_composes_innermost() {
        let mut stack = MatrixStack::new();
        stack.translate(1.0, 0.0);
        stack.rotate(std::f64::consts::FRAC_PI_2);

        // The rotation applies before the translation
        assert_close(stack.current().transform_point(1.0, 0.0), (1.0, 1.0));
    }
}
