//! Transform list parser
//!
//! Accepts the SVG `transform` attribute grammar:
//!
//! ```text
//! matrix(a b c d e f)
//! translate(tx [ty])
//! scale(sx [sy])
//! rotate(angle [cx cy])
//! skewX(angle)
//! skewY(angle)
//! ```
//!
//! Angles are in degrees. Items are separated by whitespace and optional
//! commas; each item applies to points before the items to its left.

use fixpaint_core::{Fixed, Matrix};

use crate::error::Result;
use crate::scanner::Scanner;

/// Parse a transform list into a single matrix
///
/// Empty input yields the identity.
pub fn parse_transform_list(text: &str) -> Result<Matrix> {
    let mut scanner = Scanner::new(text);
    let mut transform = Matrix::IDENTITY;
    scanner.skip_spaces();

    while let Some(c) = scanner.current() {
        let item = match c {
            'm' => parse_matrix(&mut scanner)?,
            'r' => parse_rotate(&mut scanner)?,
            't' => parse_translate(&mut scanner)?,
            's' => {
                scanner.read();
                match scanner.current() {
                    Some('c') => parse_scale(&mut scanner)?,
                    Some('k') => parse_skew(&mut scanner)?,
                    _ => return Err(scanner.unexpected("scale or skew")),
                }
            }
            _ => return Err(scanner.unexpected("transform")),
        };
        transform.concatenate(&item);
        scanner.skip_comma_spaces();
    }

    tracing::trace!(%transform, "transform list parsed");
    Ok(transform)
}

/// Consume `(` after a keyword
fn open(scanner: &mut Scanner<'_>) -> Result<()> {
    scanner.skip_spaces();
    scanner.expect('(', "'('")?;
    scanner.skip_spaces();
    Ok(())
}

/// Consume `)` after the arguments
fn close(scanner: &mut Scanner<'_>) -> Result<()> {
    scanner.skip_spaces();
    scanner.expect(')', "')'")
}

/// Parse the next argument, or `None` when the list closes instead
fn optional_arg(scanner: &mut Scanner<'_>) -> Result<Option<Fixed>> {
    scanner.skip_spaces();
    if scanner.current() == Some(')') {
        return Ok(None);
    }
    scanner.skip_comma_spaces();
    scanner.parse_number().map(Some)
}

fn parse_matrix(scanner: &mut Scanner<'_>) -> Result<Matrix> {
    scanner.expect_word("matrix")?;
    open(scanner)?;
    let mut v = [Fixed::ZERO; 6];
    for (i, slot) in v.iter_mut().enumerate() {
        if i > 0 {
            scanner.skip_comma_spaces();
        }
        *slot = scanner.parse_number()?;
    }
    close(scanner)?;
    let [a, b, c, d, e, f] = v;
    Ok(Matrix::new(a, d, b, c, e, f))
}

fn parse_rotate(scanner: &mut Scanner<'_>) -> Result<Matrix> {
    scanner.expect_word("rotate")?;
    open(scanner)?;
    let angle = scanner.parse_number()?.to_radians();

    let Some(cx) = optional_arg(scanner)? else {
        close(scanner)?;
        return Ok(Matrix::rotation(angle));
    };
    scanner.skip_comma_spaces();
    let cy = scanner.parse_number()?;
    close(scanner)?;

    let mut m = Matrix::translation(-cx, -cy);
    m.rotate(angle).translate(cx, cy);
    Ok(m)
}

fn parse_translate(scanner: &mut Scanner<'_>) -> Result<Matrix> {
    scanner.expect_word("translate")?;
    open(scanner)?;
    let tx = scanner.parse_number()?;
    let ty = optional_arg(scanner)?.unwrap_or(Fixed::ZERO);
    close(scanner)?;
    Ok(Matrix::translation(tx, ty))
}

fn parse_scale(scanner: &mut Scanner<'_>) -> Result<Matrix> {
    // the leading 's' is already consumed
    scanner.expect_word("cale")?;
    open(scanner)?;
    let sx = scanner.parse_number()?;
    let sy = optional_arg(scanner)?.unwrap_or(sx);
    close(scanner)?;
    Ok(Matrix::scaling(sx, sy))
}

fn parse_skew(scanner: &mut Scanner<'_>) -> Result<Matrix> {
    scanner.expect_word("kew")?;
    let horizontal = match scanner.current() {
        Some('X') => true,
        Some('Y') => false,
        _ => return Err(scanner.unexpected("'X' or 'Y'")),
    };
    scanner.read();
    open(scanner)?;
    let factor = scanner.parse_number()?.to_radians().tan();
    close(scanner)?;

    let mut m = Matrix::IDENTITY;
    if horizontal {
        m.shear(factor, Fixed::ZERO);
    } else {
        m.shear(Fixed::ZERO, factor);
    }
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use fixpaint_core::Point;

    fn map(m: &Matrix, x: i32, y: i32) -> (f32, f32) {
        let p = m.transform_point(Point::from_int(x, y));
        (p.x.to_f32(), p.y.to_f32())
    }

    fn assert_near(actual: (f32, f32), expected: (f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < 0.01 && (actual.1 - expected.1).abs() < 0.01,
            "got {:?}, expected {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_empty_is_identity() {
        assert_eq!(parse_transform_list(""), Ok(Matrix::IDENTITY));
        assert_eq!(parse_transform_list("  "), Ok(Matrix::IDENTITY));
    }

    #[test]
    fn test_matrix_item() {
        let m = parse_transform_list("matrix(1 0 0 1 5 6)").unwrap();
        assert_near(map(&m, 1, 1), (6.0, 7.0));

        let m = parse_transform_list("matrix(0,1,-1,0,0,0)").unwrap();
        assert_near(map(&m, 1, 0), (0.0, 1.0));
    }

    #[test]
    fn test_rightmost_item_applies_first() {
        let m = parse_transform_list("translate(10,20) scale(2)").unwrap();
        assert_near(map(&m, 1, 1), (12.0, 22.0));

        let m = parse_transform_list("scale(2), translate(10 20)").unwrap();
        assert_near(map(&m, 1, 1), (22.0, 42.0));
    }

    #[test]
    fn test_optional_arguments() {
        assert_near(map(&parse_transform_list("translate(5)").unwrap(), 0, 0), (5.0, 0.0));
        assert_near(map(&parse_transform_list("scale(2 3)").unwrap(), 1, 1), (2.0, 3.0));
    }

    #[test]
    fn test_rotate_in_degrees() {
        let m = parse_transform_list("rotate(90)").unwrap();
        assert_near(map(&m, 1, 0), (0.0, 1.0));

        let m = parse_transform_list("rotate(180, 10, 10)").unwrap();
        assert_near(map(&m, 10, 10), (10.0, 10.0));
        assert_near(map(&m, 12, 10), (8.0, 10.0));
    }

    #[test]
    fn test_skew() {
        let m = parse_transform_list("skewX(45)").unwrap();
        assert_near(map(&m, 0, 1), (1.0, 1.0));
        let m = parse_transform_list("skewY(45)").unwrap();
        assert_near(map(&m, 1, 0), (1.0, 1.0));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            parse_transform_list("rotat(1)"),
            Err(ParseError::UnexpectedChar { found: '(', position: 5, .. })
        ));
        assert!(matches!(
            parse_transform_list("scale(1"),
            Err(ParseError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            parse_transform_list("spin(1)"),
            Err(ParseError::UnexpectedChar { found: 'p', position: 1, .. })
        ));
        assert!(matches!(
            parse_transform_list("skewZ(1)"),
            Err(ParseError::UnexpectedChar { found: 'Z', .. })
        ));
        assert!(matches!(
            parse_transform_list("translate(1) x"),
            Err(ParseError::UnexpectedChar { found: 'x', position: 13, .. })
        ));
    }
}
