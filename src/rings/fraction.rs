use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

use crate::error::MatrixError;

/// Exact rational number, always stored reduced with a positive denominator
/// so that the derived equality is value equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    /// # Panics
    ///
    /// Panics when `den` is zero, like integer division does.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = num.gcd(&den);
        let (num, den) = (num / &g, den / &g);

        if den.is_negative() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Fraction {
        Fraction {
            num: value,
            den: BigInt::one(),
        }
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Fraction {
        Fraction::from(BigInt::from(value))
    }
}

impl FromStr for Fraction {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Fraction, MatrixError> {
        let invalid = || MatrixError::parse(format!("invalid fraction {:?}", s));
        let (num, den) = s.split_once('/').unwrap_or((s, "1"));

        let num = num.trim().parse::<BigInt>().map_err(|_| invalid())?;
        let den = den.trim().parse::<BigInt>().map_err(|_| invalid())?;
        if den.is_zero() {
            return Err(invalid());
        }
        Ok(Fraction::new(num, den))
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            self.den * rhs.den,
        )
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + -rhs
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl ops::Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from(BigInt::one())
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.is_integer() && self.num == BigInt::from(*rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        // denominators are positive, cross multiplication keeps the order
        (&self.num * &rhs.den).cmp(&(&rhs.num * &self.den))
    }
}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fr(s: &str) -> Fraction {
        s.parse().unwrap()
    }

    #[test]
    fn test_reduce() {
        let f = Fraction::new(BigInt::from(6), BigInt::from(-4));
        assert_eq!(f.numer(), &BigInt::from(-3));
        assert_eq!(f.denom(), &BigInt::from(2));
        assert_eq!(f, fr("-3/2"));
        assert_eq!(fr("4/2"), 2i64);
        assert!(fr("4/2").is_integer());
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(fr("1/2") + fr("1/3"), fr("5/6"));
        assert_eq!(fr("1/2") - fr("1/3"), fr("1/6"));
        assert_eq!(fr("2/3") * fr("3/4"), fr("1/2"));
        assert_eq!(fr("2/3") / fr("-4/9"), fr("-3/2"));
        assert_eq!(-fr("2/3"), fr("-2/3"));
        assert_eq!(
            vec![fr("1/4"), fr("1/4"), fr("1/2")].into_iter().sum::<Fraction>(),
            1i64
        );
        assert!(fr("-1/2") < Fraction::zero());
        assert!(fr("2/3") > fr("3/5"));
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(fr("-6/4").to_string(), "-3/2");
        assert_eq!(fr("9").to_string(), "9");
        assert!(matches!("1/0".parse::<Fraction>(), Err(MatrixError::Parse(_))));
        assert!(matches!("a/2".parse::<Fraction>(), Err(MatrixError::Parse(_))));
    }
}
