/// Orthographic projection
use crate::matrix::Matrix4;

/// Box mapped onto the normalized device cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicBounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub near: f64,
    pub far: f64,
}

impl OrthographicBounds {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }

    /// Bounds centered on the origin, `width` by `height` wide
    pub fn centered(width: f64, height: f64, near: f64, far: f64) -> Self {
        Self::new(
            -width / 2.0,
            width / 2.0,
            -height / 2.0,
            height / 2.0,
            near,
            far,
        )
    }

    /// True when any axis has zero extent and the matrix would be non-finite
    pub fn is_degenerate(&self) -> bool {
        self.right == self.left || self.top == self.bottom || self.far == self.near
    }

    pub fn matrix(&self) -> Matrix4 {
        project_orthographic(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}

/// Standard orthographic projection matrix
///
/// Bounds are not validated: equal left/right, bottom/top or near/far
/// produce infinite or NaN entries.
pub fn project_orthographic(
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    far: f64,
) -> Matrix4 {
    let a = 2.0 / (right - left);
    let b = 2.0 / (top - bottom);
    let c = -2.0 / (far - near);

    let tx = -(right + left) / (right - left);
    let ty = -(top + bottom) / (top - bottom);
    let tz = -(far + near) / (far - near);

    Matrix4([
        a, 0.0, 0.0, 0.0, //
        0.0, b, 0.0, 0.0, //
        0.0, 0.0, c, 0.0, //
        tx, ty, tz, 1.0,
    ])
}
