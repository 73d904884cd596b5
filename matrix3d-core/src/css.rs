/// `matrix3d(...)` text form handed to the compositor
use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, map_res},
    multi::separated_list1,
    number::complete::double,
    sequence::{preceded, terminated},
    IResult,
};

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix4;

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matrix3d(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

/// Parse `matrix3d(m0, m1, ..., m15)` in column-major order
pub fn parse_matrix3d(input: &str) -> MatrixResult<Matrix4> {
    match all_consuming(terminated(matrix3d, multispace0))(input) {
        Ok((_, matrix)) => Ok(matrix),
        Err(e) => Err(MatrixError::Parse(format!("{:?}", e))),
    }
}

fn matrix3d(input: &str) -> IResult<&str, Matrix4> {
    let (input, _) = preceded(multispace0, tag("matrix3d"))(input)?;
    let (input, _) = preceded(multispace0, char('('))(input)?;
    let (input, matrix) = map_res(
        separated_list1(preceded(multispace0, char(',')), preceded(multispace0, entry)),
        |values: Vec<f64>| Matrix4::from_column_slice(&values),
    )(input)?;
    let (input, _) = preceded(multispace0, char(')'))(input)?;
    Ok((input, matrix))
}

/// A number as `Display` writes it, including `-inf`
fn entry(input: &str) -> IResult<&str, f64> {
    alt((
        map(preceded(char('-'), tag_no_case("inf")), |_| f64::NEG_INFINITY),
        double,
    ))(input)
}

impl std::str::FromStr for Matrix4 {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_matrix3d(s)
    }
}
