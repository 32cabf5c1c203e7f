use std::{
    cmp,
    fmt,
    fmt::Display,
    ops::{
        Div,
        Mul,
    },
    str::FromStr,
};

use anyhow::Error;
use num::Integer;
use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::{
        Unexpected,
        Visitor,
    },
};

/// A fraction, usable in calculations.
///
/// A fraction is serializable as:
/// - A fraction string (`"1/2"`).
/// - An integer (`20`), which represents an integer (denominator == 1).
/// - A floating point number (`1.5`), which is converted to a fraction out of 4096.
/// - A percentage string (`"60%"`).
/// - A two-length array (`[2,5]`).
#[derive(Debug, Clone)]
pub struct Fraction {
    num: u32,
    den: u32,
}

impl Fraction {
    /// Creates a new fraction.
    pub fn new(n: u32, d: u32) -> Fraction {
        Fraction { num: n, den: d }
    }

    /// Creates a new percentage as a fraction.
    pub fn percentage(n: u32) -> Fraction {
        Fraction { num: n, den: 100 }.simplify()
    }

    /// The numerator of the fraction.
    pub fn numerator(&self) -> u32 {
        self.num
    }

    /// The denominator of the fraction.
    pub fn denominator(&self) -> u32 {
        self.den
    }

    /// Is the fraction whole (i.e., an integer)?
    pub fn is_whole(&self) -> bool {
        self.den == 1
    }

    /// Simplifies the fraction.
    pub fn simplify(&self) -> Fraction {
        let n = self.numerator();
        let d = self.denominator();
        let gcd = n.gcd(&d);
        Fraction::new(n.div(gcd), d.div(gcd))
    }

    /// Returns the integer representation of the fraction.
    ///
    /// The integer will be truncated, as if performing integer division.
    pub fn integer(&self) -> u32 {
        self.numerator().div(self.denominator())
    }

    fn normalize(a: &Fraction, b: &Fraction) -> (Fraction, Fraction) {
        let a1 = a.numerator();
        let a2 = a.denominator();
        let b1 = b.numerator();
        let b2 = b.denominator();
        let lcm = a2.lcm(&b2);
        let a_mul = lcm.div(a2);
        let b_mul = lcm.div(b2);
        (
            Fraction::new(a1.mul(a_mul), lcm),
            Fraction::new(b1.mul(b_mul), lcm),
        )
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl From<u32> for Fraction {
    fn from(value: u32) -> Self {
        Self::new(value, 1)
    }
}

impl From<f64> for Fraction {
    fn from(value: f64) -> Self {
        Self::new((value * 4096f64).trunc() as u32, 4096).simplify()
    }
}

impl FromStr for Fraction {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((n, d)) = s.split_once('/') {
            let n = n
                .parse()
                .map_err(|_| Error::msg(format!("invalid numerator: {n}")))?;
            let d = d
                .parse()
                .map_err(|_| Error::msg(format!("invalid denominator: {d}")))?;
            Ok(Self::new(n, d))
        } else {
            let s = match s.strip_suffix('%') {
                Some(s) => s,
                None => s,
            };
            Ok(Self::percentage(s.parse().map_err(|_| {
                Error::msg(format!("invalid percentage: {s}"))
            })?))
        }
    }
}

impl From<Fraction> for u32 {
    fn from(value: Fraction) -> Self {
        value.integer()
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = Self::normalize(self, other);
        a.numerator().eq(&b.numerator())
    }
}

impl Eq for Fraction {}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        let (a, b) = Self::normalize(self, other);
        a.numerator().cmp(&b.numerator())
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Mul<u32> for &Fraction {
    type Output = Fraction;
    fn mul(self, rhs: u32) -> Self::Output {
        Self::Output::new(self.numerator().mul(rhs), self.denominator()).simplify()
    }
}

impl Mul<u32> for Fraction {
    type Output = Self;
    fn mul(self, rhs: u32) -> Self::Output {
        Mul::mul(&self, rhs)
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;
    fn mul(self, rhs: &Fraction) -> Self::Output {
        Self::Output::new(
            self.numerator().mul(rhs.numerator()),
            self.denominator().mul(rhs.denominator()),
        )
        .simplify()
    }
}

impl Mul<Fraction> for &Fraction {
    type Output = Fraction;
    fn mul(self, rhs: Fraction) -> Self::Output {
        Mul::mul(self, &rhs)
    }
}

impl Mul<&Fraction> for Fraction {
    type Output = Self;
    fn mul(self, rhs: &Fraction) -> Self::Output {
        Mul::mul(&self, rhs)
    }
}

impl Mul<Fraction> for Fraction {
    type Output = Self;
    fn mul(self, rhs: Fraction) -> Self::Output {
        Mul::mul(&self, &rhs)
    }
}

impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_whole() {
            serializer.serialize_u32(self.integer())
        } else {
            serializer.serialize_str(&format!("{self}"))
        }
    }
}

struct FractionVisitor;

impl<'de> Visitor<'de> for FractionVisitor {
    type Value = Fraction;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "an integer, a fraction string, a percentage string, or an array of 2 integers"
        )
    }

    fn visit_u32<E>(self, v: u32) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as u32))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::from_str(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let num = match seq.next_element()? {
            Some(v) => v,
            None => return Err(serde::de::Error::invalid_length(0, &self)),
        };
        let den = match seq.next_element()? {
            Some(v) => v,
            None => return Err(serde::de::Error::invalid_length(1, &self)),
        };
        if seq.next_element::<u8>()?.is_some() {
            return Err(serde::de::Error::invalid_length(3, &self));
        }
        Ok(Self::Value::new(num, den))
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(FractionVisitor)
    }
}
