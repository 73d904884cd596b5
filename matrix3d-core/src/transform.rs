/// Composite transforms: multi-axis rotation, pivoted transforms and a checked builder
use nalgebra::Point3;

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix4;

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    pub fn matrix(&self) -> Matrix4 {
        rotate_xyz(self.x, self.y, self.z)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotation about all three axes, X applied first, then Y, then Z
pub fn rotate_xyz(ax: f64, ay: f64, az: f64) -> Matrix4 {
    let mut rx = Matrix4::identity();
    rx.set_rotation_x(ax);
    let mut ry = Matrix4::identity();
    ry.set_rotation_y(ay);
    let mut rz = Matrix4::identity();
    rz.set_rotation_z(az);

    let yx = Matrix4::multiply(&ry, &rx);
    Matrix4::multiply(&rz, &yx)
}

/// Rewrite `matrix` so it acts around `pivot` instead of the coordinate origin
///
/// Points are moved so the pivot sits at the origin, transformed, then moved back.
pub fn transform_around_origin(matrix: &mut Matrix4, pivot: &Point3<f64>) {
    let mut translate = Matrix4::identity();
    translate.set_translation(pivot.x, pivot.y, pivot.z);
    matrix.pre_multiply(&translate);

    let mut untranslate = Matrix4::identity();
    untranslate.set_translation(-pivot.x, -pivot.y, -pivot.z);
    matrix.post_multiply(&untranslate);
}

/// Index sub-block written by one overwrite primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Translation,
    RotationX,
    RotationY,
    RotationZ,
    Scale,
    Perspective,
}

impl Block {
    pub fn indices(self) -> &'static [usize] {
        match self {
            Block::Translation => &[12, 13, 14],
            Block::RotationX => &[5, 6, 9, 10],
            Block::RotationY => &[0, 2, 8, 10],
            Block::RotationZ => &[0, 1, 4, 5],
            Block::Scale => &[0, 5, 10],
            Block::Perspective => &[11],
        }
    }

    fn mask(self) -> u16 {
        self.indices().iter().fold(0, |mask, i| mask | (1 << i))
    }
}

/// Fluent builder over the overwrite primitives
///
/// Each call writes its sub-block into an identity matrix in call order, so
/// translation set before a rotation survives it. Writing a block whose
/// indices overlap a different block that was already written would silently
/// corrupt the earlier one; the builder records that and [`build`](Self::build)
/// reports it.
#[derive(Debug, Clone)]
pub struct TransformBuilder {
    matrix: Matrix4,
    written: Vec<Block>,
    conflict: Option<(Block, Block)>,
}

impl TransformBuilder {
    pub fn new() -> Self {
        Self {
            matrix: Matrix4::identity(),
            written: Vec::new(),
            conflict: None,
        }
    }

    pub fn translate_2d(mut self, x: f64, y: f64) -> Self {
        self.mark(Block::Translation);
        self.matrix.set_translation_2d(x, y);
        self
    }

    pub fn translate(mut self, x: f64, y: f64, z: f64) -> Self {
        self.mark(Block::Translation);
        self.matrix.set_translation(x, y, z);
        self
    }

    pub fn rotate_x(mut self, radians: f64) -> Self {
        self.mark(Block::RotationX);
        self.matrix.set_rotation_x(radians);
        self
    }

    pub fn rotate_y(mut self, radians: f64) -> Self {
        self.mark(Block::RotationY);
        self.matrix.set_rotation_y(radians);
        self
    }

    pub fn rotate_z(mut self, radians: f64) -> Self {
        self.mark(Block::RotationZ);
        self.matrix.set_rotation_z(radians);
        self
    }

    pub fn scale(mut self, sx: f64, sy: f64, sz: f64) -> Self {
        self.mark(Block::Scale);
        self.matrix.set_scale(sx, sy, sz);
        self
    }

    pub fn perspective(mut self, depth: f64) -> Self {
        self.mark(Block::Perspective);
        self.matrix.set_perspective(depth);
        self
    }

    /// Blocks written so far, in call order
    pub fn written(&self) -> &[Block] {
        &self.written
    }

    pub fn build(self) -> MatrixResult<Matrix4> {
        match self.conflict {
            Some((first, second)) => Err(MatrixError::BlockConflict { first, second }),
            None => Ok(self.matrix),
        }
    }

    /// The matrix as written, overlapping blocks included
    pub fn build_unchecked(self) -> Matrix4 {
        self.matrix
    }

    fn mark(&mut self, block: Block) {
        log::trace!("writing {:?} at {:?}", block, block.indices());
        if self.conflict.is_none() {
            if let Some(&first) = self
                .written
                .iter()
                .find(|&&prev| prev != block && prev.mask() & block.mask() != 0)
            {
                log::debug!("{:?} overlaps previously written {:?}", block, first);
                self.conflict = Some((first, block));
            }
        }
        if !self.written.contains(&block) {
            self.written.push(block);
        }
    }
}

impl Default for TransformBuilder {
    fn default() -> Self {
        Self::new()
    }
}
