//! Transcendental approximations on [`Fixed`]
//!
//! Polynomial approximations tuned for speed over accuracy. Trigonometric
//! results are within about 1e-4 of the exact value.

use crate::fixed::{Fixed, DECIMAL_BITS};

impl Fixed {
    /// Square root by seeded Newton-Raphson (three iterations)
    ///
    /// Non-positive inputs return zero.
    pub fn sqrt(self) -> Fixed {
        let n = self.0;
        if n <= 0 {
            return Fixed::ZERO;
        }

        let mut s = if n < (100 << DECIMAL_BITS) {
            // Small magnitudes: seed from the bit length, within √2 of the root
            let bits = 32 - n.leading_zeros() as i32;
            1i32 << ((bits + DECIMAL_BITS as i32) / 2)
        } else if n < (1000 << DECIMAL_BITS) {
            n / 20
        } else if n < (2500 << DECIMAL_BITS) {
            n / 40
        } else if n < (5000 << DECIMAL_BITS) {
            n / 60
        } else if n < (10000 << DECIMAL_BITS) {
            n / 86
        } else if n < (25000 << DECIMAL_BITS) {
            n / 132
        } else {
            n / 168
        };

        for _ in 0..3 {
            s = (s + Fixed(n).div(Fixed(s)).0) >> 1;
        }
        Fixed(s)
    }

    /// `self - floor(self / m) * m`
    pub fn ieee_remainder(self, m: Fixed) -> Fixed {
        self - (self / m).floor() * m
    }

    /// Sine of an angle in radians
    pub fn sin(self) -> Fixed {
        let pi = Fixed::PI.0;
        let mut f = self;
        if f.0 < 0 || f.0 >= Fixed::TWO_PI.0 {
            f = f.ieee_remainder(Fixed::TWO_PI);
        }

        let mut negative = false;
        let mut x = f.0;
        if x > pi / 2 && x <= pi {
            x = pi - x;
        } else if x > pi && x <= pi + pi / 2 {
            x -= pi;
            negative = true;
        } else if x > pi + pi / 2 {
            x = (pi << 1) - x;
            negative = true;
        }

        let x = Fixed(x);
        let sqr = x * x;
        let mut result = Fixed(498);
        result = result * sqr;
        result -= Fixed(10882);
        result = result * sqr;
        result += Fixed::ONE;
        result = result * x;

        if negative {
            -result
        } else {
            result
        }
    }

    /// Cosine of an angle in radians
    pub fn cos(self) -> Fixed {
        (Fixed::PI_OVER_2 - self).sin()
    }

    pub fn tan(self) -> Fixed {
        self.sin() / self.cos()
    }

    /// Arc tangent in radians, in `[-π/2, π/2]`
    pub fn atan(self) -> Fixed {
        let one = Fixed::ONE;
        let v = if self > one {
            one / self
        } else if self < -one {
            one / -self
        } else {
            self
        };

        let sqr = v * v;
        let mut result = Fixed(1365);
        result = result * sqr;
        result -= Fixed(5579);
        result = result * sqr;
        result += Fixed(11805);
        result = result * sqr;
        result -= Fixed(21646);
        result = result * sqr;
        result += Fixed(65527);
        result = result * v;

        if self > one {
            Fixed::PI_OVER_2 - result
        } else if self < -one {
            -(Fixed::PI_OVER_2 - result)
        } else {
            result
        }
    }

    /// Angle of the vector `(x, y)` in radians, in `[-π, π]`
    pub fn atan2(y: Fixed, x: Fixed) -> Fixed {
        if x.0 == 0 && y.0 == 0 {
            return Fixed::ZERO;
        }
        if x.abs() >= y.abs() {
            let a = (y / x).atan();
            if x.0 > 0 {
                a
            } else if y.0 >= 0 {
                a + Fixed::PI
            } else {
                a - Fixed::PI
            }
        } else {
            let a = (x / y).atan();
            if y.0 > 0 {
                Fixed::PI_OVER_2 - a
            } else {
                -Fixed::PI_OVER_2 - a
            }
        }
    }

    /// Arc cosine in radians, input clamped into `[-1, 1]`
    pub fn acos(self) -> Fixed {
        let f = self.clamp(-Fixed::ONE, Fixed::ONE);
        if f.0 < 0 {
            return Fixed::PI - (-f).acos();
        }

        let root = (Fixed::ONE - f).sqrt();
        let mut result = Fixed(-1228);
        result = result * f;
        result += Fixed(4866);
        result = result * f;
        result -= Fixed(13901);
        result = result * f;
        result += Fixed(102939);
        root * result
    }

    /// Arc sine in radians, input clamped into `[-1, 1]`
    pub fn asin(self) -> Fixed {
        Fixed::PI_OVER_2 - self.acos()
    }

    pub fn to_degrees(self) -> Fixed {
        Fixed(((self.0 as i64 * 180) << DECIMAL_BITS).div_euclid(Fixed::PI.0 as i64) as i32)
    }

    pub fn to_radians(self) -> Fixed {
        Fixed(((self.0 as i64 * Fixed::PI.0 as i64) >> DECIMAL_BITS) as i32 / 180)
    }
}
