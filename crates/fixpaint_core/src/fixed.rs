//! 16.16 Fixed-Point Scalar
//!
//! Every coordinate, angle and ratio in the rasterizer is a [`Fixed`]: a
//! 32-bit signed integer carrying 16 fractional bits (`value = raw / 65536`).
//!
//! - Products and quotients go through 64-bit intermediates before being
//!   truncated back to 32 bits.
//! - Three raw values are reserved as sentinels: `NAN`, `POSITIVE_INFINITY`
//!   and `NEGATIVE_INFINITY`. Arithmetic does not propagate them; they only
//!   mark "no value" in places like [`Point::EMPTY`](crate::Point::EMPTY).
//! - Division by zero never panics; it saturates to an infinity sentinel.
//!
//! # Example
//!
//! ```ignore
//! use fixpaint_core::Fixed;
//!
//! let half = Fixed::from_f32(0.5);
//! let three = Fixed::from_int(3);
//! assert_eq!(three * half, Fixed::from_f32(1.5));
//! assert_eq!("1.5".parse::<Fixed>().unwrap(), Fixed::from_f32(1.5));
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use thiserror::Error;

/// Number of fractional bits
pub const DECIMAL_BITS: u32 = 16;

const FRACTION_MASK: i32 = (1 << DECIMAL_BITS) - 1;

/// A 16.16 fixed-point number
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(pub i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(1 << DECIMAL_BITS);
    pub const HALF: Fixed = Fixed(1 << (DECIMAL_BITS - 1));

    /// π rounded to 16.16
    pub const PI: Fixed = Fixed(205_887);
    pub const TWO_PI: Fixed = Fixed(205_887 * 2);
    pub const PI_OVER_2: Fixed = Fixed(205_887 / 2);
    /// Euler's number rounded to 16.16
    pub const E: Fixed = Fixed(178_145);

    pub const POSITIVE_INFINITY: Fixed = Fixed(i32::MAX);
    pub const NEGATIVE_INFINITY: Fixed = Fixed(i32::MIN);
    pub const NAN: Fixed = Fixed(i32::MIN + 1);
    /// Largest finite value
    pub const MAX: Fixed = Fixed(i32::MAX - 1);
    /// Smallest finite value
    pub const MIN: Fixed = Fixed(i32::MIN + 2);

    /// Wrap a raw 16.16 integer
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Fixed(raw)
    }

    /// The raw 16.16 integer
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn from_int(n: i32) -> Self {
        Fixed(n << DECIMAL_BITS)
    }

    /// Integer part, rounded towards negative infinity
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> DECIMAL_BITS
    }

    /// Convert from `f32`, rounding to the nearest representable value
    #[inline]
    pub fn from_f32(f: f32) -> Self {
        Self::from_f64(f as f64)
    }

    #[inline]
    pub fn from_f64(f: f64) -> Self {
        Fixed((f * Self::ONE.0 as f64).round() as i32)
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::ONE.0 as f32
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::ONE.0 as f64
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        self.0 == Self::NAN.0
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.0 == Self::POSITIVE_INFINITY.0 || self.0 == Self::NEGATIVE_INFINITY.0
    }

    #[inline]
    pub const fn is_positive_infinity(self) -> bool {
        self.0 == Self::POSITIVE_INFINITY.0
    }

    #[inline]
    pub const fn is_negative_infinity(self) -> bool {
        self.0 == Self::NEGATIVE_INFINITY.0
    }

    /// Fixed-point product through a 64-bit intermediate
    #[inline]
    pub const fn mul(self, other: Fixed) -> Fixed {
        Fixed(((self.0 as i64 * other.0 as i64) >> DECIMAL_BITS) as i32)
    }

    /// Fixed-point quotient through a 64-bit intermediate
    ///
    /// Dividing by zero yields an infinity sentinel with the sign of the
    /// dividend, or `NAN` for `0 / 0`.
    #[inline]
    pub const fn div(self, other: Fixed) -> Fixed {
        if other.0 == 0 {
            return if self.0 > 0 {
                Self::POSITIVE_INFINITY
            } else if self.0 < 0 {
                Self::NEGATIVE_INFINITY
            } else {
                Self::NAN
            };
        }
        Fixed((((self.0 as i64) << DECIMAL_BITS) / other.0 as i64) as i32)
    }

    #[inline]
    pub const fn abs(self) -> Fixed {
        Fixed(self.0.wrapping_abs())
    }

    /// Largest integral value not greater than `self`
    #[inline]
    pub const fn floor(self) -> Fixed {
        Fixed(self.0 & !FRACTION_MASK)
    }

    /// Smallest integral value not less than `self`
    #[inline]
    pub const fn ceil(self) -> Fixed {
        Fixed(self.0.wrapping_add(FRACTION_MASK) & !FRACTION_MASK)
    }

    /// Round half away from zero
    #[inline]
    pub const fn round(self) -> Fixed {
        if self.0 < 0 {
            let up = self.0.wrapping_neg().wrapping_add(Self::HALF.0);
            Fixed(((up >> DECIMAL_BITS) << DECIMAL_BITS).wrapping_neg())
        } else {
            Fixed((self.0.wrapping_add(Self::HALF.0) >> DECIMAL_BITS) << DECIMAL_BITS)
        }
    }

    /// Fractional bits only, always non-negative
    #[inline]
    pub const fn fract(self) -> Fixed {
        Fixed(self.0 & FRACTION_MASK)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────────────

impl Add for Fixed {
    type Output = Fixed;
    #[inline]
    fn add(self, other: Fixed) -> Fixed {
        Fixed(self.0.wrapping_add(other.0))
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, other: Fixed) {
        self.0 = self.0.wrapping_add(other.0);
    }
}

impl Sub for Fixed {
    type Output = Fixed;
    #[inline]
    fn sub(self, other: Fixed) -> Fixed {
        Fixed(self.0.wrapping_sub(other.0))
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, other: Fixed) {
        self.0 = self.0.wrapping_sub(other.0);
    }
}

impl Neg for Fixed {
    type Output = Fixed;
    #[inline]
    fn neg(self) -> Fixed {
        Fixed(self.0.wrapping_neg())
    }
}

impl Mul for Fixed {
    type Output = Fixed;
    #[inline]
    fn mul(self, other: Fixed) -> Fixed {
        Fixed::mul(self, other)
    }
}

impl Div for Fixed {
    type Output = Fixed;
    #[inline]
    fn div(self, other: Fixed) -> Fixed {
        Fixed::div(self, other)
    }
}

/// Scale by a plain integer
impl Mul<i32> for Fixed {
    type Output = Fixed;
    #[inline]
    fn mul(self, n: i32) -> Fixed {
        Fixed(self.0.wrapping_mul(n))
    }
}

/// Divide by a plain integer, truncating towards zero
impl Div<i32> for Fixed {
    type Output = Fixed;
    #[inline]
    fn div(self, n: i32) -> Fixed {
        Fixed(self.0 / n)
    }
}

impl From<i32> for Fixed {
    fn from(n: i32) -> Self {
        Fixed::from_int(n)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text conversion
// ─────────────────────────────────────────────────────────────────────────────

impl fmt::Display for Fixed {
    /// Integer part, then four truncated decimal digits when the fraction is
    /// non-zero
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }
        if self.is_positive_infinity() {
            return f.write_str("Infinity");
        }
        if self.is_negative_infinity() {
            return f.write_str("-Infinity");
        }

        let mut v = self.0 as i64;
        if v < 0 {
            f.write_str("-")?;
            v = -v;
        }
        write!(f, "{}", v >> DECIMAL_BITS)?;

        let mut frac = v & FRACTION_MASK as i64;
        if frac != 0 {
            f.write_str(".")?;
            for _ in 0..4 {
                frac *= 10;
                write!(f, "{}", frac >> DECIMAL_BITS)?;
                frac &= FRACTION_MASK as i64;
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`Fixed`] from text fails
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFixedError {
    #[error("empty fixed-point literal")]
    Empty,

    #[error("invalid fixed-point literal: {0:?}")]
    Invalid(String),
}

impl FromStr for Fixed {
    type Err = ParseFixedError;

    /// Parse `[+-]digits[.digits][(e|E)[+-]digits]`
    ///
    /// Only the first four fractional digits are significant. The result
    /// saturates to [`Fixed::MIN`]/[`Fixed::MAX`].
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseFixedError::Empty);
        }
        let invalid = || ParseFixedError::Invalid(text.to_string());

        let (mantissa, exponent) = match text.find(['e', 'E']) {
            Some(pos) => {
                let exp: i32 = text[pos + 1..].parse().map_err(|_| invalid())?;
                (&text[..pos], exp)
            }
            None => (text, 0),
        };

        let (negative, unsigned) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };

        let (int_digits, frac_digits) = match unsigned.find('.') {
            Some(dot) => (&unsigned[..dot], &unsigned[dot + 1..]),
            None => (unsigned, ""),
        };
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(invalid());
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_digits) || !all_digits(frac_digits) {
            return Err(invalid());
        }

        let mut value: i64 = 0;
        for b in int_digits.bytes() {
            value = (value * 10 + (b - b'0') as i64).min(i64::MAX / 1_000_000);
        }
        value <<= DECIMAL_BITS;

        let mut frac: i64 = 0;
        for i in 0..4 {
            let digit = frac_digits.as_bytes().get(i).map_or(0, |b| (b - b'0') as i64);
            frac = frac * 10 + digit;
        }
        value += (frac << DECIMAL_BITS) / 10_000;

        let limit = Fixed::MAX.0 as i64;
        for _ in 0..exponent.unsigned_abs() {
            if exponent < 0 {
                value /= 10;
            } else {
                value = (value * 10).min(limit + 1);
            }
        }

        if negative {
            value = -value;
        }
        Ok(Fixed(value.clamp(Fixed::MIN.0 as i64, limit) as i32))
    }
}
