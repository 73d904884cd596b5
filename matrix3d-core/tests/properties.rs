use approx::assert_relative_eq;
use matrix3d_core::{
    multiply_2d, project_orthographic, rotate_xyz, transform_around_origin, Matrix4, MatrixError,
    Point3,
};

fn samples() -> Vec<Matrix4> {
    let mut translated = rotate_xyz(0.4, -1.3, 2.2);
    translated.set_translation(35.0, -12.0, 4.5);

    let mut perspective = rotate_xyz(1.0, 0.5, 0.25);
    perspective.set_perspective(850.0);

    vec![
        Matrix4::identity(),
        translated,
        perspective,
        project_orthographic(-200.0, 200.0, -150.0, 150.0, 0.5, 50.0),
        Matrix4([
            2.0, -1.0, 0.5, 0.0, 3.0, 0.25, -4.0, 0.0, 1.5, 6.0, -0.75, 0.0, 9.0, 8.0, 7.0, 1.0,
        ]),
    ]
}

fn assert_close(a: &Matrix4, b: &Matrix4) {
    let a: nalgebra::Matrix4<f64> = (*a).into();
    let b: nalgebra::Matrix4<f64> = (*b).into();
    assert_relative_eq!(a, b, epsilon = 1e-9, max_relative = 1e-9);
}

#[test]
fn identity_is_neutral() {
    let identity = Matrix4::identity();
    for m in samples() {
        let mut out = Matrix4([0.0; 16]);
        Matrix4::multiply_into(&mut out, &identity, &m);
        assert_close(&out, &m);
        Matrix4::multiply_into(&mut out, &m, &identity);
        assert_close(&out, &m);
    }
}

#[test]
fn multiply_is_associative() {
    let ms = samples();
    for a in &ms {
        for b in &ms {
            for c in &ms {
                let left = Matrix4::multiply(&Matrix4::multiply(a, b), c);
                let right = Matrix4::multiply(a, &Matrix4::multiply(b, c));
                assert_close(&left, &right);
            }
        }
    }
}

#[test]
fn zero_rotation_is_identity() {
    assert_eq!(rotate_xyz(0.0, 0.0, 0.0), Matrix4::identity());
}

#[test]
fn single_axis_rotation_matches_primitive() {
    for angle in [-3.0, -0.5, 0.0, 0.1, 1.0, std::f64::consts::PI, 7.5] {
        let mut expected = Matrix4::identity();
        expected.set_rotation_x(angle);
        assert_eq!(rotate_xyz(angle, 0.0, 0.0), expected);
    }
}

#[test]
fn pivot_at_origin_is_noop() {
    for m in samples() {
        let mut pivoted = m;
        transform_around_origin(&mut pivoted, &Point3::origin());
        assert_eq!(pivoted, m);
    }
}

#[test]
fn in_place_multiply_matches_fresh_buffer() {
    let ms = samples();
    for a in &ms {
        for b in &ms {
            let fresh = Matrix4::multiply(a, b);

            let mut lhs_reused = *a;
            lhs_reused.post_multiply(b);
            assert_eq!(lhs_reused, fresh);

            let mut rhs_reused = *b;
            rhs_reused.pre_multiply(a);
            assert_eq!(rhs_reused, fresh);
        }
    }
}

#[test]
fn rotation_about_face_center() {
    let center = Point3::new(187.5, 406.0, -50.0);
    let mut m = rotate_xyz(0.9, 0.2, -0.4);
    transform_around_origin(&mut m, &center);

    assert_relative_eq!(m.transform_point(&center), center, epsilon = 1e-9);

    // distances from the pivot are preserved by a rotation
    let corner = Point3::new(237.5, 456.0, -50.0);
    let moved = m.transform_point(&corner);
    assert_relative_eq!(
        (moved - center).norm(),
        (corner - center).norm(),
        epsilon = 1e-9
    );
}

#[test]
fn two_by_two_product() {
    let product = multiply_2d(
        &[vec![1.0, 2.0], vec![3.0, 4.0]],
        &[vec![5.0, 6.0], vec![7.0, 8.0]],
    );
    assert_eq!(product, Ok(vec![vec![19.0, 22.0], vec![43.0, 50.0]]));
}

#[test]
fn dot_product_shape() {
    let product = multiply_2d(&[vec![1.0, 2.0, 3.0]], &[vec![1.0], vec![2.0], vec![3.0]]);
    assert_eq!(product, Ok(vec![vec![14.0]]));
}

#[test]
fn mismatched_inner_dimensions() {
    let a = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    let b = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    assert!(matches!(
        multiply_2d(&a, &b),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn empty_operand() {
    let b = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    assert!(matches!(
        multiply_2d(&[], &b),
        Err(MatrixError::InvalidShape { .. })
    ));
}

#[test]
fn orthographic_unit_box() {
    let m = project_orthographic(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
    assert_eq!(m[0], 1.0);
    assert_eq!(m[5], 1.0);
    assert_relative_eq!(m[10], -0.2222, epsilon = 1e-4);
    assert_eq!(m[12], 0.0);
    assert_eq!(m[13], 0.0);
    assert_relative_eq!(m[14], -11.0 / 9.0, epsilon = 1e-12);
}
