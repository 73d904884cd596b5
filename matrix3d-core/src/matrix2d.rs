/// Nested-array matrix multiply and the 3x3 point helpers built on it
use crate::error::{MatrixError, MatrixResult, Operand};

/// Row-major matrix of arbitrary shape
pub type Matrix2D = Vec<Vec<f64>>;

/// Multiply an X x Z matrix by a Z x Y matrix
///
/// Both operands must be non-empty and rectangular. Each output cell is the
/// plain `f64` dot product of a row of `a` and a column of `b`.
pub fn multiply_2d(a: &[Vec<f64>], b: &[Vec<f64>]) -> MatrixResult<Matrix2D> {
    let z = check_shape(a, Operand::Left)?;
    let y = check_shape(b, Operand::Right)?;
    let x = a.len();

    if b.len() != z {
        log::debug!("2D multiply rejected: {}x{} by {}x{}", x, z, b.len(), y);
        return Err(MatrixError::DimensionMismatch {
            columns: z,
            rows: b.len(),
        });
    }

    let mut product = vec![vec![0.0; y]; x];
    for i in 0..x {
        for j in 0..y {
            for k in 0..z {
                product[i][j] += a[i][k] * b[k][j];
            }
        }
    }

    Ok(product)
}

/// Returns the column count of a non-empty rectangular matrix
fn check_shape(m: &[Vec<f64>], operand: Operand) -> MatrixResult<usize> {
    let invalid = |reason: String| {
        log::debug!("2D multiply rejected {} operand: {}", operand, reason);
        MatrixError::InvalidShape { operand, reason }
    };

    let columns = match m.first() {
        None => return Err(invalid("no rows".to_string())),
        Some(row) if row.is_empty() => return Err(invalid("first row is empty".to_string())),
        Some(row) => row.len(),
    };

    if let Some((i, row)) = m.iter().enumerate().find(|(_, row)| row.len() != columns) {
        return Err(invalid(format!(
            "row {} has {} columns, expected {}",
            i,
            row.len(),
            columns
        )));
    }

    Ok(columns)
}

pub fn rotation_x_3x3(theta: f64) -> Matrix2D {
    let (sin, cos) = theta.sin_cos();
    vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, cos, -sin],
        vec![0.0, sin, cos],
    ]
}

pub fn rotation_y_3x3(theta: f64) -> Matrix2D {
    let (sin, cos) = theta.sin_cos();
    vec![
        vec![cos, 0.0, sin],
        vec![0.0, 1.0, 0.0],
        vec![-sin, 0.0, cos],
    ]
}

pub fn rotation_z_3x3(theta: f64) -> Matrix2D {
    let (sin, cos) = theta.sin_cos();
    vec![
        vec![cos, -sin, 0.0],
        vec![sin, cos, 0.0],
        vec![0.0, 0.0, 1.0],
    ]
}

/// Drops the depth coordinate
pub fn orthographic_3x3() -> Matrix2D {
    vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 0.0],
    ]
}

/// Shifts a homogeneous 2D point `(x, y, 1)` by `(dx, dy)`
///
/// The bottom row is zero, so the result is only meaningful as the last
/// step of a chain.
pub fn translation_3x3(dx: f64, dy: f64) -> Matrix2D {
    vec![
        vec![1.0, 0.0, dx],
        vec![0.0, 1.0, dy],
        vec![0.0, 0.0, 0.0],
    ]
}

/// Run a point through a chain of 3x3 matrices, first matrix applied first
pub fn project_point(point: [f64; 3], transforms: &[Matrix2D]) -> MatrixResult<[f64; 3]> {
    let mut column: Matrix2D = point.iter().map(|&v| vec![v]).collect();
    for (i, m) in transforms.iter().enumerate() {
        if m.len() != 3 {
            let reason = format!("transform {} has {} rows, expected 3", i, m.len());
            log::debug!("point projection rejected: {}", reason);
            return Err(MatrixError::InvalidShape {
                operand: Operand::Left,
                reason,
            });
        }
        column = multiply_2d(m, &column)?;
    }
    Ok([column[0][0], column[1][0], column[2][0]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_square_product() {
        let product = multiply_2d(
            &[vec![1.0, 2.0], vec![3.0, 4.0]],
            &[vec![5.0, 6.0], vec![7.0, 8.0]],
        )
        .unwrap();
        assert_eq!(product, vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
    }

    #[test]
    fn test_row_by_column() {
        let product = multiply_2d(&[vec![1.0, 2.0, 3.0]], &[vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        assert_eq!(product, vec![vec![14.0]]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let b = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(
            multiply_2d(&a, &b),
            Err(MatrixError::DimensionMismatch {
                columns: 3,
                rows: 2
            })
        );
    }

    #[test]
    fn test_empty_operands() {
        let a = vec![vec![1.0]];
        assert!(matches!(
            multiply_2d(&[], &a),
            Err(MatrixError::InvalidShape {
                operand: Operand::Left,
                ..
            })
        ));
        assert!(matches!(
            multiply_2d(&a, &[]),
            Err(MatrixError::InvalidShape {
                operand: Operand::Right,
                ..
            })
        ));
        assert!(matches!(
            multiply_2d(&[vec![]], &a),
            Err(MatrixError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_ragged_operand() {
        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        let b = vec![vec![1.0], vec![1.0]];
        assert!(matches!(
            multiply_2d(&ragged, &b),
            Err(MatrixError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_project_point_around_center() {
        let center = (100.0, 200.0);
        let chain = [
            translation_3x3(-center.0, -center.1),
            rotation_z_3x3(FRAC_PI_2),
            orthographic_3x3(),
        ];
        // (110, 200) is 10 right of center; a quarter turn puts it 10 below
        let [x, y, depth] = project_point([110.0, 200.0, 1.0], &chain).unwrap();
        assert_relative_eq!(x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(y, 10.0, epsilon = 1e-9);
        assert_eq!(depth, 0.0);
    }

    #[test]
    fn test_project_point_rejects_short_transform() {
        let drop_depth = vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]];
        assert!(matches!(
            project_point([1.0, 2.0, 1.0], &[drop_depth]),
            Err(MatrixError::InvalidShape {
                operand: Operand::Left,
                ..
            })
        ));

        let wide = vec![vec![1.0, 0.0, 0.0, 0.0]; 3];
        assert!(matches!(
            project_point([1.0, 2.0, 1.0], &[wide]),
            Err(MatrixError::DimensionMismatch { columns: 4, rows: 3 })
        ));
    }

    #[test]
    fn test_project_point_without_transforms() {
        assert_eq!(project_point([1.0, 2.0, 3.0], &[]), Ok([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_rotations_are_orthonormal() {
        for m in [rotation_x_3x3(0.7), rotation_y_3x3(0.7), rotation_z_3x3(0.7)] {
            let transposed: Matrix2D = (0..3).map(|j| (0..3).map(|i| m[i][j]).collect()).collect();
            let product = multiply_2d(&m, &transposed).unwrap();
            for (i, row) in product.iter().enumerate() {
                for (j, &v) in row.iter().enumerate() {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_relative_eq!(v, expected, epsilon = 1e-12);
                }
            }
        }
    }
}
