/// Flat 4x4 matrix primitives
use std::ops::{Index, IndexMut, Mul};

use nalgebra::Point3;

use crate::error::{MatrixError, MatrixResult};

/// 4x4 transform matrix stored as 16 column-major values
///
/// Layout matches the CSS/OpenGL convention the compositor expects:
/// indices 0-3 are column 0, 4-7 column 1, 8-11 column 2 and 12-15 column 3,
/// so `data[col * 4 + row] = M[row][col]` and the translation lives at 12, 13, 14.
///
/// The `set_*` primitives overwrite a fixed set of indices and leave every
/// other entry untouched. They are meant to be applied to a matrix in a known
/// state (usually identity); see [`crate::TransformBuilder`] for a checked way
/// to combine them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4(pub [f64; 16]);

impl Matrix4 {
    pub const IDENTITY: Matrix4 = Matrix4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Build a matrix from 16 column-major values
    pub fn from_column_slice(values: &[f64]) -> MatrixResult<Self> {
        let data: [f64; 16] = values
            .try_into()
            .map_err(|_| MatrixError::InvalidLength(values.len()))?;
        Ok(Self(data))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    /// Overwrite the x/y translation (indices 12, 13)
    pub fn set_translation_2d(&mut self, x: f64, y: f64) {
        self.0[12] = x;
        self.0[13] = y;
    }

    /// Overwrite the translation column (indices 12, 13, 14)
    pub fn set_translation(&mut self, x: f64, y: f64, z: f64) {
        self.set_translation_2d(x, y);
        self.0[14] = z;
    }

    /// Overwrite the rotation-about-X block (indices 5, 6, 9, 10)
    pub fn set_rotation_x(&mut self, radians: f64) {
        let (sin, cos) = radians.sin_cos();
        self.0[5] = cos;
        self.0[6] = sin;
        self.0[9] = -sin;
        self.0[10] = cos;
    }

    /// Overwrite the rotation-about-Y block (indices 0, 2, 8, 10)
    pub fn set_rotation_y(&mut self, radians: f64) {
        let (sin, cos) = radians.sin_cos();
        self.0[0] = cos;
        self.0[2] = -sin;
        self.0[8] = sin;
        self.0[10] = cos;
    }

    /// Overwrite the rotation-about-Z block (indices 0, 1, 4, 5)
    pub fn set_rotation_z(&mut self, radians: f64) {
        let (sin, cos) = radians.sin_cos();
        self.0[0] = cos;
        self.0[1] = sin;
        self.0[4] = -sin;
        self.0[5] = cos;
    }

    /// Overwrite the diagonal scale terms (indices 0, 5, 10)
    pub fn set_scale(&mut self, sx: f64, sy: f64, sz: f64) {
        self.0[0] = sx;
        self.0[5] = sy;
        self.0[10] = sz;
    }

    /// Overwrite the perspective term (index 11) with `-1 / depth`
    ///
    /// A zero depth yields `-inf`; the value is not validated.
    pub fn set_perspective(&mut self, depth: f64) {
        self.0[11] = -1.0 / depth;
    }

    /// Write `a · b` into `out`
    ///
    /// Column vectors are transformed by `b` first, then by `a`.
    /// `out[4c + r] = sum_k a[4k + r] * b[4c + k]`
    pub fn multiply_into(out: &mut Matrix4, a: &Matrix4, b: &Matrix4) {
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += a.0[k * 4 + row] * b.0[col * 4 + k];
                }
                out.0[col * 4 + row] = sum;
            }
        }
    }

    pub fn multiply(a: &Matrix4, b: &Matrix4) -> Matrix4 {
        let mut out = Matrix4([0.0; 16]);
        Self::multiply_into(&mut out, a, b);
        out
    }

    /// `self = lhs · self`
    pub fn pre_multiply(&mut self, lhs: &Matrix4) {
        *self = Self::multiply(lhs, self);
    }

    /// `self = self · rhs`
    pub fn post_multiply(&mut self, rhs: &Matrix4) {
        *self = Self::multiply(self, rhs);
    }

    /// Apply the matrix to `(x, y, z, 1)` and divide by the resulting `w`
    pub fn transform_point(&self, p: &Point3<f64>) -> Point3<f64> {
        let m = &self.0;
        let x = m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12];
        let y = m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13];
        let z = m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14];
        let w = m[3] * p.x + m[7] * p.y + m[11] * p.z + m[15];
        Point3::new(x / w, y / w, z / w)
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Matrix4 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Matrix4 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        Matrix4::multiply(&self, &rhs)
    }
}

impl From<Matrix4> for nalgebra::Matrix4<f64> {
    fn from(m: Matrix4) -> Self {
        nalgebra::Matrix4::from_column_slice(&m.0)
    }
}

impl From<nalgebra::Matrix4<f64>> for Matrix4 {
    fn from(m: nalgebra::Matrix4<f64>) -> Self {
        let mut data = [0.0; 16];
        data.copy_from_slice(m.as_slice());
        Matrix4(data)
    }
}
