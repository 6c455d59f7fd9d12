//! Number list parser

use fixpaint_core::Fixed;

use crate::error::Result;
use crate::scanner::Scanner;

/// Parse numbers separated by whitespace and an optional `sep`
///
/// `"1, 2 3,4"` yields four numbers. A separator must be followed by another
/// number, so a trailing `sep` is an error. Empty input yields an empty list.
pub fn parse_number_list(text: &str, sep: char) -> Result<Vec<Fixed>> {
    let mut scanner = Scanner::new(text);
    scanner.skip_spaces();

    let mut numbers = Vec::new();
    let mut require_more = false;
    loop {
        if scanner.is_at_end() {
            if require_more {
                return Err(scanner.unexpected("number after separator"));
            }
            break;
        }
        numbers.push(scanner.parse_number()?);
        scanner.skip_spaces();
        require_more = scanner.current() == Some(sep);
        scanner.skip_sep_spaces(sep);
    }
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    fn ints(values: &[i32]) -> Vec<Fixed> {
        values.iter().map(|&v| Fixed::from_int(v)).collect()
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(parse_number_list(" 1, 2 3,4 ", ','), Ok(ints(&[1, 2, 3, 4])));
        assert_eq!(parse_number_list("5;-6 ; 7", ';'), Ok(ints(&[5, -6, 7])));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_number_list("", ','), Ok(Vec::new()));
        assert_eq!(parse_number_list("   ", ','), Ok(Vec::new()));
    }

    #[test]
    fn test_trailing_separator_rejected() {
        assert!(matches!(
            parse_number_list("1, 2,", ','),
            Err(ParseError::UnexpectedEnd { position: 5, .. })
        ));
        assert!(matches!(
            parse_number_list("1,,2", ','),
            Err(ParseError::UnexpectedChar { found: ',', position: 2, .. })
        ));
    }

    #[test]
    fn test_fractions_and_exponents() {
        assert_eq!(
            parse_number_list("0.5 1e1 -.25", ','),
            Ok(vec![Fixed::HALF, Fixed::from_int(10), Fixed::from_f32(-0.25)])
        );
    }
}
