//! Arbitrary-magnitude decimal number used for every resource amount.
//!
//! Values within `10^±300` are held as a plain `f64`, so everyday arithmetic
//! is exactly `f64` arithmetic. Anything larger or smaller is held as an
//! `f64` mantissa normalized into `[1, 10)` and an `i64` power-of-ten
//! exponent, reaching `10^±EXP_LIMIT`, far beyond `f64::MAX`.
//!
//! Non-finite inputs never get in: NaN becomes zero and infinities saturate
//! at [`Decimal::MAX`] / [`Decimal::MIN`].

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Largest representable exponent magnitude.
pub const EXP_LIMIT: i64 = 9_000_000_000_000_000;

/// Exponent gap beyond which the smaller addend no longer reaches the mantissa.
const MAX_SIGNIFICANT_DIGITS: i64 = 17;

/// Largest exponent still convertible to a finite `f64`.
const F64_EXP_MAX: i64 = 308;

/// Smallest exponent still convertible to a non-zero `f64`.
const F64_EXP_MIN: i64 = -324;

/// Decimal exponents held as a plain `f64`.
const SMALL_EXP: i64 = 300;
const SMALL_MIN: f64 = 1e-300;
const SMALL_MAX: f64 = 1e301;

#[derive(Clone, Copy)]
enum Repr {
    /// Zero, or a magnitude in `[1e-300, 1e301)`.
    Small(f64),
    /// Everything else: `mantissa × 10^exponent`, `1 ≤ |mantissa| < 10`.
    Big { mantissa: f64, exponent: i64 },
}

#[derive(Clone, Copy)]
pub struct Decimal(Repr);

#[derive(Debug, Error, PartialEq)]
#[error("invalid decimal literal: {0:?}")]
pub struct ParseDecimalError(String);

fn fits_small(x: f64) -> bool {
    x == 0.0 || (SMALL_MIN..SMALL_MAX).contains(&x.abs())
}

/// Split a finite non-zero `f64` into its shortest round-trip decimal digits
/// and power of ten. Exact for every input, subnormals included.
fn scientific_parts(value: f64) -> Option<(f64, i64)> {
    let text = format!("{:e}", value);
    let (digits, exponent) = text.split_once('e')?;
    Some((digits.parse().ok()?, exponent.parse().ok()?))
}

impl Decimal {
    pub const ZERO: Decimal = Decimal(Repr::Small(0.0));
    pub const ONE: Decimal = Decimal(Repr::Small(1.0));
    pub const MAX: Decimal = Decimal(Repr::Big {
        mantissa: 9.999_999_999_999_998,
        exponent: EXP_LIMIT,
    });
    pub const MIN: Decimal = Decimal(Repr::Big {
        mantissa: -9.999_999_999_999_998,
        exponent: EXP_LIMIT,
    });

    /// Build `mantissa × 10^exponent`, normalizing and saturating.
    pub fn from_parts(mantissa: f64, exponent: i64) -> Self {
        if mantissa.is_nan() || mantissa == 0.0 {
            return Self::ZERO;
        }
        if mantissa.is_infinite() {
            return if mantissa > 0.0 { Self::MAX } else { Self::MIN };
        }

        let (mut m, mut e) = if (1.0..10.0).contains(&mantissa.abs()) {
            (mantissa, exponent)
        } else {
            match scientific_parts(mantissa) {
                Some((m, shift)) => (m, exponent.saturating_add(shift)),
                None => return Self::ZERO,
            }
        };
        // Seventeen nines can parse back as 10.
        if m.abs() >= 10.0 {
            m /= 10.0;
            e = e.saturating_add(1);
        }
        if !m.is_finite() {
            return Self::ZERO;
        }

        if e > EXP_LIMIT {
            return if m > 0.0 { Self::MAX } else { Self::MIN };
        }
        if e < -EXP_LIMIT {
            return Self::ZERO;
        }
        if e.abs() <= SMALL_EXP {
            // Correctly rounded from the digits.
            if let Ok(x) = format!("{}e{}", m, e).parse::<f64>() {
                return Self::from_f64(x);
            }
        }
        Self(Repr::Big { mantissa: m, exponent: e })
    }

    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() || value == 0.0 {
            return Self::ZERO;
        }
        if value.is_infinite() {
            return if value > 0.0 { Self::MAX } else { Self::MIN };
        }
        if fits_small(value) {
            return Self(Repr::Small(value));
        }
        match scientific_parts(value) {
            Some((mantissa, exponent)) => Self(Repr::Big { mantissa, exponent }),
            None => Self::ZERO,
        }
    }

    /// `10^log` for an arbitrary (possibly enormous) real exponent.
    pub fn from_log10(log: f64) -> Self {
        if log.is_nan() || log < -(EXP_LIMIT as f64) {
            return Self::ZERO;
        }
        if log > EXP_LIMIT as f64 {
            return Self::MAX;
        }
        let whole = log.floor();
        Self::from_parts(10f64.powf(log - whole), whole as i64)
    }

    /// Normalized `(mantissa, exponent)`; `(0, 0)` for zero.
    fn parts(&self) -> (f64, i64) {
        match self.0 {
            Repr::Small(x) if x == 0.0 => (0.0, 0),
            Repr::Small(x) => scientific_parts(x).unwrap_or((0.0, 0)),
            Repr::Big { mantissa, exponent } => (mantissa, exponent),
        }
    }

    pub fn mantissa(&self) -> f64 {
        self.parts().0
    }

    pub fn exponent(&self) -> i64 {
        self.parts().1
    }

    fn signum(&self) -> f64 {
        match self.0 {
            Repr::Small(x) if x == 0.0 => 0.0,
            Repr::Small(x) => x.signum(),
            Repr::Big { mantissa, .. } => mantissa.signum(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.signum() == 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.signum() < 0.0
    }

    pub fn is_positive(&self) -> bool {
        self.signum() > 0.0
    }

    /// Nearest `f64`. Saturates to ±∞ past `f64` range.
    pub fn to_f64(&self) -> f64 {
        match self.0 {
            Repr::Small(x) => x,
            Repr::Big { mantissa, exponent } if exponent > F64_EXP_MAX => {
                mantissa.signum() * f64::INFINITY
            }
            Repr::Big { exponent, .. } if exponent < F64_EXP_MIN => 0.0,
            Repr::Big { mantissa, exponent } => format!("{}e{}", mantissa, exponent)
                .parse::<f64>()
                .unwrap_or(0.0),
        }
    }

    pub fn abs(self) -> Self {
        match self.0 {
            Repr::Small(x) => Self(Repr::Small(x.abs())),
            Repr::Big { mantissa, exponent } => Self(Repr::Big {
                mantissa: mantissa.abs(),
                exponent,
            }),
        }
    }

    pub fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    fn map_integral(self, f: fn(f64) -> f64) -> Self {
        match self.0 {
            Repr::Small(x) if x.abs() < 1e17 => Self::from_f64(f(x)),
            // Tiny magnitudes behave like the smallest float of their sign.
            Repr::Big { mantissa, exponent } if exponent < 0 => {
                Self::from_f64(f(mantissa.signum() * f64::MIN_POSITIVE))
            }
            // Seventeen digits or more leave no fractional part.
            _ => self,
        }
    }

    pub fn floor(self) -> Self {
        self.map_integral(f64::floor)
    }

    pub fn ceil(self) -> Self {
        self.map_integral(f64::ceil)
    }

    pub fn round(self) -> Self {
        self.map_integral(f64::round)
    }

    /// Base-10 logarithm as an `f64`; `-∞` for zero and NaN for negatives,
    /// so callers decide how to clamp.
    pub fn log10(&self) -> f64 {
        match self.0 {
            Repr::Small(x) => {
                if x == 0.0 {
                    f64::NEG_INFINITY
                } else {
                    x.log10()
                }
            }
            Repr::Big { mantissa, .. } if mantissa < 0.0 => f64::NAN,
            Repr::Big { mantissa, exponent } => exponent as f64 + mantissa.log10(),
        }
    }

    pub fn log(&self, base: f64) -> f64 {
        self.log10() / base.log10()
    }

    pub fn ln(&self) -> f64 {
        self.log10() * std::f64::consts::LN_10
    }

    pub fn pow(self, power: f64) -> Self {
        if power.is_nan() {
            return Self::ZERO;
        }
        if power == 0.0 {
            return Self::ONE;
        }
        if self.is_zero() {
            return if power > 0.0 { Self::ZERO } else { Self::MAX };
        }
        if self.is_negative() {
            // Only integer powers of negatives are real.
            if power.fract() != 0.0 {
                return Self::ZERO;
            }
            let magnitude = self.abs().pow(power);
            return if power % 2.0 == 0.0 { magnitude } else { -magnitude };
        }

        if let Repr::Small(x) = self.0 {
            let direct = x.powf(power);
            if direct.is_normal() {
                return Self::from_f64(direct);
            }
        }
        Self::from_log10(self.log10() * power)
    }

    pub fn sqrt(self) -> Self {
        if self.is_negative() {
            return Self::ZERO;
        }
        match self.0 {
            // Correctly rounded, so perfect squares stay exact.
            Repr::Small(x) => Self::from_f64(x.sqrt()),
            Repr::Big { .. } => self.pow(0.5),
        }
    }

    /// Canonical text form: shortest round-trip digits plus exponent.
    pub fn to_canonical(&self) -> String {
        match self.0 {
            Repr::Small(x) if x == 0.0 => "0".to_string(),
            Repr::Small(x) => format!("{:e}", x),
            Repr::Big { mantissa, exponent } => format!("{}e{}", mantissa, exponent),
        }
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.to_canonical())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let (mantissa, exponent) = self.parts();
        if (-7..21).contains(&exponent) {
            write!(f, "{}", self.to_f64())
        } else {
            let m = (mantissa * 1000.0).round() / 1000.0;
            write!(f, "{}e{}", m, exponent)
        }
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let err = || ParseDecimalError(s.to_string());
        // Within plain-float range the float parser is correctly rounded.
        if let Ok(value) = text.parse::<f64>() {
            if value.is_finite() && value != 0.0 && fits_small(value) {
                return Ok(Self::from_f64(value));
            }
        }
        match text.rfind(|c: char| c == 'e' || c == 'E') {
            Some(idx) => {
                let mantissa: f64 = text[..idx].parse().map_err(|_| err())?;
                let exponent: i64 = text[idx + 1..].parse().map_err(|_| err())?;
                if !mantissa.is_finite() {
                    return Err(err());
                }
                Ok(Self::from_parts(mantissa, exponent))
            }
            None => {
                let value: f64 = text.parse().map_err(|_| err())?;
                if !value.is_finite() {
                    return Err(err());
                }
                Ok(Self::from_f64(value))
            }
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if let (Repr::Small(a), Repr::Small(b)) = (self.0, other.0) {
            return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        }
        let sign = self.signum().partial_cmp(&other.signum()).unwrap_or(Ordering::Equal);
        if sign != Ordering::Equal || self.is_zero() {
            return sign;
        }
        let (ma, ea) = self.parts();
        let (mb, eb) = other.parts();
        let magnitude = ea
            .cmp(&eb)
            .then_with(|| ma.abs().partial_cmp(&mb.abs()).unwrap_or(Ordering::Equal));
        if self.is_negative() {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        if self.is_zero() {
            return rhs;
        }
        if rhs.is_zero() {
            return self;
        }
        if let (Repr::Small(a), Repr::Small(b)) = (self.0, rhs.0) {
            // Both below 1e301, so the sum stays finite.
            return Decimal::from_f64(a + b);
        }
        let (big, small) = if self.exponent() >= rhs.exponent() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let (big_m, big_e) = big.parts();
        let (small_m, small_e) = small.parts();
        let gap = big_e - small_e;
        if gap > MAX_SIGNIFICANT_DIGITS {
            return big;
        }
        Decimal::from_parts(big_m + small_m * 10f64.powi(-(gap as i32)), big_e)
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        match self.0 {
            Repr::Small(x) if x == 0.0 => self,
            Repr::Small(x) => Decimal(Repr::Small(-x)),
            Repr::Big { mantissa, exponent } => Decimal(Repr::Big {
                mantissa: -mantissa,
                exponent,
            }),
        }
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        self + (-rhs)
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        if self.is_zero() || rhs.is_zero() {
            return Decimal::ZERO;
        }
        if let (Repr::Small(a), Repr::Small(b)) = (self.0, rhs.0) {
            // Not normal means it overflowed or lost bits to underflow.
            let product = a * b;
            if product.is_normal() {
                return Decimal::from_f64(product);
            }
        }
        let (ma, ea) = self.parts();
        let (mb, eb) = rhs.parts();
        Decimal::from_parts(ma * mb, ea.saturating_add(eb))
    }
}

impl Div for Decimal {
    type Output = Decimal;

    fn div(self, rhs: Decimal) -> Decimal {
        if rhs.is_zero() {
            return match self.signum().partial_cmp(&0.0) {
                Some(Ordering::Greater) => Decimal::MAX,
                Some(Ordering::Less) => Decimal::MIN,
                _ => Decimal::ZERO,
            };
        }
        if self.is_zero() {
            return Decimal::ZERO;
        }
        if let (Repr::Small(a), Repr::Small(b)) = (self.0, rhs.0) {
            let quotient = a / b;
            if quotient.is_normal() {
                return Decimal::from_f64(quotient);
            }
        }
        let (ma, ea) = self.parts();
        let (mb, eb) = rhs.parts();
        Decimal::from_parts(ma / mb, ea.saturating_sub(eb))
    }
}

impl AddAssign for Decimal {
    fn add_assign(&mut self, rhs: Decimal) {
        *self = *self + rhs;
    }
}

impl SubAssign for Decimal {
    fn sub_assign(&mut self, rhs: Decimal) {
        *self = *self - rhs;
    }
}

impl MulAssign for Decimal {
    fn mul_assign(&mut self, rhs: Decimal) {
        *self = *self * rhs;
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Decimal {
        iter.fold(Decimal::ZERO, |acc, d| acc + d)
    }
}

impl From<f64> for Decimal {
    fn from(value: f64) -> Self {
        Decimal::from_f64(value)
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Decimal::from_f64(value as f64)
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Decimal::from_f64(value as f64)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Decimal::from_f64(value as f64)
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical())
    }
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a decimal string such as \"1.5e300\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        Ok(Decimal::from_f64(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal::from_f64(v as f64))
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: f64) -> Decimal {
        Decimal::from_f64(v)
    }

    #[test]
    fn normalizes_mantissa() {
        let x = d(1234.5);
        assert_eq!(x.exponent(), 3);
        assert!((x.mantissa() - 1.2345).abs() < 1e-12);
    }

    #[test]
    fn zero_and_nan_collapse() {
        assert!(d(0.0).is_zero());
        assert!(d(-0.0).is_zero());
        assert!(d(f64::NAN).is_zero());
    }

    #[test]
    fn infinity_saturates() {
        assert_eq!(d(f64::INFINITY), Decimal::MAX);
        assert_eq!(d(f64::NEG_INFINITY), Decimal::MIN);
    }

    #[test]
    fn goes_past_f64_range() {
        let big = d(1e300) * d(1e300);
        assert_eq!(big.exponent(), 600);
        assert!(big > d(f64::MAX));
        assert_eq!(big.to_f64(), f64::INFINITY);
    }

    #[test]
    fn crosses_between_float_and_exponent_forms() {
        let x = d(1e200);
        let huge = x * x;
        assert_eq!(huge.exponent(), 400);
        assert_eq!(huge / x, x);
        let tiny = Decimal::ONE / huge;
        assert_eq!(tiny.exponent(), -400);
        assert_eq!(tiny * huge, Decimal::ONE);
        assert!(Decimal::ZERO < tiny && tiny < d(f64::MIN_POSITIVE));
    }

    #[test]
    fn large_floats_match_their_text_form() {
        let parsed: Decimal = "1e300".parse().unwrap();
        assert_eq!(d(1e300), parsed);
        assert_eq!(d(1e300).mantissa(), 1.0);
        assert_eq!(d(1e300).exponent(), 300);
        assert_eq!(d(3e300), "3e300".parse::<Decimal>().unwrap());
        assert_eq!(d(1e23).to_f64(), 1e23);
    }

    #[test]
    fn subnormal_floats_stay_finite() {
        let tiny = d(1e-310);
        assert!(tiny.mantissa().is_finite());
        assert_eq!(tiny.mantissa(), 1.0);
        assert_eq!(tiny.exponent(), -310);
        assert_eq!(tiny.to_f64(), 1e-310);

        let smallest = d(f64::from_bits(1));
        assert!(smallest.is_positive());
        assert_eq!(smallest.exponent(), -324);
        assert_eq!(smallest.to_f64(), f64::from_bits(1));
    }

    #[test]
    fn fractional_accrual_survives_large_values() {
        let mut acc = d(1e15);
        let mut plain = 1e15f64;
        for _ in 0..10 {
            acc += d(0.4);
            plain += 0.4;
        }
        assert_eq!(acc.to_f64(), plain);
    }

    #[test]
    fn powers_of_two_are_exact_integers() {
        for n in 0..48 {
            let v = d(2.0).pow(n as f64).floor();
            assert_eq!(v.to_f64(), 2f64.powi(n), "2^{}", n);
        }
    }

    #[test]
    fn subtraction_to_zero() {
        assert!((d(1000.0) - d(1000.0)).is_zero());
        assert!((d(75.0) - d(75.0)).is_zero());
    }

    #[test]
    fn integer_arithmetic_is_exact() {
        assert_eq!(d(1000.0) - d(100.0), d(900.0));
        assert_eq!(d(0.1) + d(0.2), d(0.1 + 0.2));
        assert_eq!(d(1234567.0) * d(3.0), d(3703701.0));
        assert_eq!(d(1e6) / d(4.0), d(250000.0));
    }

    #[test]
    fn mantissa_path_beyond_f64() {
        let a = Decimal::from_parts(3.0, 400);
        let b = Decimal::from_parts(5.0, 399);
        let sum = a + b;
        assert_eq!(sum.exponent(), 400);
        assert!((sum.mantissa() - 3.5).abs() < 1e-12);
        let q = a / Decimal::from_parts(1.5, 200);
        assert_eq!(q.exponent(), 200);
        assert!((q.mantissa() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn tiny_addend_is_absorbed() {
        assert_eq!(d(1e30) + d(1.0), d(1e30));
    }

    #[test]
    fn ordering_handles_signs() {
        assert!(d(-5.0) < d(-1.0));
        assert!(d(-1.0) < Decimal::ZERO);
        assert!(Decimal::ZERO < d(1e-300));
        assert!(d(74.999) < d(75.0));
    }

    #[test]
    fn divide_by_zero_saturates() {
        assert_eq!(d(3.0) / Decimal::ZERO, Decimal::MAX);
        assert_eq!(d(-3.0) / Decimal::ZERO, Decimal::MIN);
        assert!((Decimal::ZERO / Decimal::ZERO).is_zero());
    }

    #[test]
    fn huge_powers_use_logs() {
        let x = Decimal::from_parts(1.0, 1000).pow(2.0);
        assert_eq!(x.exponent(), 2000);
        assert!((x.mantissa() - 1.0).abs() < 1e-9);
        assert_eq!(Decimal::MAX.pow(10.0), Decimal::MAX);
    }

    #[test]
    fn sqrt_of_negative_is_zero() {
        assert!(d(-4.0).sqrt().is_zero());
        assert_eq!(d(16.0).sqrt(), d(4.0));
    }

    #[test]
    fn log_of_zero_is_negative_infinity() {
        assert_eq!(Decimal::ZERO.log10(), f64::NEG_INFINITY);
        assert!((d(2500.0).log(50.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn floor_and_round() {
        assert_eq!(d(2.7).floor(), d(2.0));
        assert_eq!(d(2.5).round(), d(3.0));
        assert_eq!(d(-0.5).floor(), d(-1.0));
        let huge = Decimal::from_parts(1.23456, 40);
        assert_eq!(huge.floor(), huge);
    }

    #[test]
    fn parse_accepts_both_forms() {
        assert_eq!("1000".parse::<Decimal>().unwrap(), d(1000.0));
        assert_eq!("7.5e5".parse::<Decimal>().unwrap(), d(750000.0));
        let far: Decimal = "1.5e400".parse().unwrap();
        assert_eq!(far.exponent(), 400);
        assert!("abc".parse::<Decimal>().is_err());
        assert!("inf".parse::<Decimal>().is_err());
    }

    #[test]
    fn json_accepts_numbers_and_strings() {
        let a: Decimal = serde_json::from_str("160000").unwrap();
        let b: Decimal = serde_json::from_str("\"1.6e5\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&d(0.0)).unwrap(), "\"0\"");
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(d(1024.0).to_string(), "1024");
        assert_eq!(Decimal::from_parts(1.5, 300).to_string(), "1.5e300");
    }
}
