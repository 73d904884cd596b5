/// Rotating cube built from six flat square faces
use std::f64::consts::{FRAC_PI_2, PI};

use matrix3d_core::{transform_around_origin, Matrix4, MatrixResult, RotationState, TransformBuilder};
use nalgebra::Point3;

/// One square face placed on the cube
#[derive(Debug, Clone)]
pub struct Face {
    pub name: &'static str,
    /// Moves the face-local square (z = 0, centered at the origin) onto the cube
    pub placement: Matrix4,
}

/// A face after the frame's rotation and perspective
#[derive(Debug, Clone)]
pub struct ProjectedFace {
    pub name: &'static str,
    pub corners: [Point3<f64>; 4],
    /// z component of the rotated unit normal, positive towards the viewer
    pub facing: f64,
    /// z of the rotated face center, before perspective
    pub depth: f64,
}

#[derive(Debug, Clone)]
pub struct Cube {
    pub size: f64,
    pub center: Point3<f64>,
    pub faces: Vec<Face>,
}

impl Cube {
    pub fn new(size: f64, center: Point3<f64>) -> MatrixResult<Self> {
        let h = size / 2.0;
        let (cx, cy, cz) = (center.x, center.y, center.z);

        let faces = vec![
            Face {
                name: "front",
                placement: TransformBuilder::new().translate(cx, cy, cz + h).build()?,
            },
            Face {
                name: "back",
                placement: TransformBuilder::new()
                    .translate(cx, cy, cz - h)
                    .rotate_y(PI)
                    .build()?,
            },
            Face {
                name: "right",
                placement: TransformBuilder::new()
                    .translate(cx + h, cy, cz)
                    .rotate_y(FRAC_PI_2)
                    .build()?,
            },
            Face {
                name: "left",
                placement: TransformBuilder::new()
                    .translate(cx - h, cy, cz)
                    .rotate_y(-FRAC_PI_2)
                    .build()?,
            },
            // screen y grows downwards
            Face {
                name: "top",
                placement: TransformBuilder::new()
                    .translate(cx, cy - h, cz)
                    .rotate_x(FRAC_PI_2)
                    .build()?,
            },
            Face {
                name: "bottom",
                placement: TransformBuilder::new()
                    .translate(cx, cy + h, cz)
                    .rotate_x(-FRAC_PI_2)
                    .build()?,
            },
        ];

        Ok(Self { size, center, faces })
    }

    /// Rotate the cube about its center and project every face
    ///
    /// Faces with a corner at or behind the viewer are left out.
    pub fn frame(&self, rotation: &RotationState, perspective: f64) -> Vec<ProjectedFace> {
        let mut model = rotation.matrix();
        transform_around_origin(&mut model, &self.center);

        let mut view = Matrix4::identity();
        view.set_perspective(perspective);
        transform_around_origin(&mut view, &self.center);

        let h = self.size / 2.0;
        let local = [
            Point3::new(-h, -h, 0.0),
            Point3::new(h, -h, 0.0),
            Point3::new(h, h, 0.0),
            Point3::new(-h, h, 0.0),
        ];

        let mut projected: Vec<ProjectedFace> = self
            .faces
            .iter()
            .filter_map(|face| {
                let world = Matrix4::multiply(&model, &face.placement);
                if local
                    .iter()
                    .any(|c| world.transform_point(c).z - self.center.z >= perspective)
                {
                    log::trace!("{} face is behind the viewer, skipped", face.name);
                    return None;
                }
                let screen = Matrix4::multiply(&view, &world);

                let origin = world.transform_point(&Point3::origin());
                let normal = world.transform_point(&Point3::new(0.0, 0.0, 1.0)) - origin;

                Some(ProjectedFace {
                    name: face.name,
                    corners: local.map(|c| screen.transform_point(&c)),
                    facing: normal.z,
                    depth: origin.z,
                })
            })
            .collect();

        // back to front
        projected.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        projected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cube() -> Cube {
        Cube::new(10.0, Point3::new(40.0, 20.0, 0.0)).unwrap()
    }

    #[test]
    fn test_faces_sit_on_the_cube() {
        let cube = cube();
        assert_eq!(cube.faces.len(), 6);
        for face in &cube.faces {
            let c = face.placement.transform_point(&Point3::origin());
            assert_relative_eq!((c - cube.center).norm(), 5.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_only_front_faces_viewer_at_rest() {
        let faces = cube().frame(&RotationState::zero(), 60.0);
        let front = faces.iter().find(|f| f.name == "front").unwrap();
        assert_relative_eq!(front.facing, 1.0, epsilon = 1e-12);
        for face in faces.iter().filter(|f| f.name != "front") {
            assert!(face.facing < 1e-9, "{} faces the viewer", face.name);
        }
        // nearest face is drawn last
        assert_eq!(faces.last().unwrap().name, "front");
    }

    #[test]
    fn test_front_face_is_magnified_by_perspective() {
        let faces = cube().frame(&RotationState::zero(), 60.0);
        let front = faces.iter().find(|f| f.name == "front").unwrap();
        // w = 1 - 5 / 60
        let scale = 1.0 / (1.0 - 5.0 / 60.0);
        assert_relative_eq!(front.corners[0].x, 40.0 - 5.0 * scale, epsilon = 1e-9);
        assert_relative_eq!(front.corners[0].y, 20.0 - 5.0 * scale, epsilon = 1e-9);
    }

    #[test]
    fn test_half_turn_shows_back_face() {
        let faces = cube().frame(&RotationState::new(0.0, PI, 0.0), 60.0);
        let back = faces.iter().find(|f| f.name == "back").unwrap();
        assert_relative_eq!(back.facing, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_faces_behind_viewer_are_skipped() {
        // perspective 4 puts the viewer inside the cube's front half
        let faces = cube().frame(&RotationState::zero(), 4.0);
        let names: Vec<_> = faces.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["back"]);
        for corner in faces.iter().flat_map(|f| f.corners.iter()) {
            assert!(corner.x.is_finite() && corner.y.is_finite());
        }
    }
}
