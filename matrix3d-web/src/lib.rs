/// Matrix3D Web - WASM bindings for a JavaScript view compositor
///
/// Every matrix crosses the boundary as a 16-element column-major
/// `Float64Array`, ready to hand to a `transform: [{matrix}]` style or a
/// CSS `matrix3d()`.
use matrix3d_core::{Matrix4, MatrixError, Point3, RotationState};
use wasm_bindgen::prelude::*;

fn to_js(e: MatrixError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub fn identity() -> Vec<f64> {
    Matrix4::identity().to_vec()
}

#[wasm_bindgen(js_name = rotateXYZ)]
pub fn rotate_xyz(ax: f64, ay: f64, az: f64) -> Vec<f64> {
    matrix3d_core::rotate_xyz(ax, ay, az).to_vec()
}

#[wasm_bindgen(js_name = projectOrthographic)]
pub fn project_orthographic(
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    far: f64,
) -> Vec<f64> {
    matrix3d_core::project_orthographic(left, right, bottom, top, near, far).to_vec()
}

/// `a · b`; `b` is applied to points first
#[wasm_bindgen]
pub fn multiply(a: &[f64], b: &[f64]) -> Result<Vec<f64>, JsValue> {
    let a = Matrix4::from_column_slice(a).map_err(to_js)?;
    let b = Matrix4::from_column_slice(b).map_err(to_js)?;
    Ok(Matrix4::multiply(&a, &b).to_vec())
}

#[wasm_bindgen(js_name = transformAroundOrigin)]
pub fn transform_around_origin(matrix: &[f64], x: f64, y: f64, z: f64) -> Result<Vec<f64>, JsValue> {
    let mut m = Matrix4::from_column_slice(matrix).map_err(to_js)?;
    matrix3d_core::transform_around_origin(&mut m, &Point3::new(x, y, z));
    Ok(m.to_vec())
}

#[wasm_bindgen(js_name = toMatrix3d)]
pub fn to_matrix3d(matrix: &[f64]) -> Result<String, JsValue> {
    Ok(Matrix4::from_column_slice(matrix).map_err(to_js)?.to_string())
}

/// Per-view transform state reused across animation frames
#[wasm_bindgen]
pub struct FrameTransform {
    rotation: RotationState,
    pivot: Point3<f64>,
    perspective: Option<f64>,
    buffer: Matrix4,
}

#[wasm_bindgen]
impl FrameTransform {
    #[wasm_bindgen(constructor)]
    pub fn new(pivot_x: f64, pivot_y: f64) -> FrameTransform {
        FrameTransform {
            rotation: RotationState::zero(),
            pivot: Point3::new(pivot_x, pivot_y, 0.0),
            perspective: None,
            buffer: Matrix4::identity(),
        }
    }

    #[wasm_bindgen(js_name = setPerspective)]
    pub fn set_perspective(&mut self, depth: f64) {
        self.perspective = Some(depth);
    }

    #[wasm_bindgen(js_name = setRotation)]
    pub fn set_rotation(&mut self, x: f64, y: f64, z: f64) {
        self.rotation = RotationState::new(x, y, z);
    }

    /// Update rotation state
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.rotation.rotate(dx, dy, dz);
    }

    /// Matrix for the current frame, rotated about the pivot
    pub fn matrix(&mut self) -> Vec<f64> {
        self.buffer = self.rotation.matrix();
        if let Some(depth) = self.perspective {
            let mut perspective = Matrix4::identity();
            perspective.set_perspective(depth);
            self.buffer.pre_multiply(&perspective);
        }
        matrix3d_core::transform_around_origin(&mut self.buffer, &self.pivot);
        self.buffer.to_vec()
    }
}
