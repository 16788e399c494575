//! Pure number-classification predicates.
//!
//! Every function here is deterministic and side-effect-free; none of them
//! can fail for any `i64` input. Negative inputs follow one convention
//! throughout: `is_prime` and `is_perfect` are false for anything below 2,
//! while `is_armstrong` and `digit_sum` operate on the absolute value.

use serde::{Deserialize, Serialize};

/// A tag describing a property of a classified number.
///
/// Serialized in lowercase to match the API's `properties` array
/// (`"armstrong"`, `"odd"`, `"even"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Armstrong,
    Odd,
    Even,
}

impl Property {
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Armstrong => "armstrong",
            Property::Odd => "odd",
            Property::Even => "even",
        }
    }
}

/// Derived mathematical properties of a single integer.
///
/// Computed fresh per request and discarded after the response; there is no
/// persistent state behind any of these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    /// Ordered tags: `Armstrong` (when applicable) followed by exactly one
    /// of `Odd`/`Even`.
    pub properties: Vec<Property>,
    pub digit_sum: u32,
}

/// Check whether `n` is prime.
///
/// False for `n < 2`; otherwise trial division by 2, 3, and candidates of
/// the form `6k±1` up to `sqrt(n)`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i: u64 = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Check whether `n` is a perfect number (equal to the sum of its proper
/// divisors).
///
/// False for `n < 2`. Divisors are enumerated in `(d, n/d)` pairs up to
/// `sqrt(n)`, which visits the same set as a linear scan.
pub fn is_perfect(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    // 1 is a proper divisor of every n >= 2.
    let mut sum: u64 = 1;
    let mut d: u64 = 2;
    while d * d <= n {
        if n % d == 0 {
            sum += d;
            let pair = n / d;
            if pair != d {
                sum += pair;
            }
        }
        d += 1;
    }
    sum == n
}

/// Check whether `|n|` is an Armstrong number: equal to the sum of its own
/// decimal digits each raised to the power of the digit count.
pub fn is_armstrong(n: i64) -> bool {
    let m = n.unsigned_abs();
    let digits = decimal_digits(m);
    let k = digits.len() as u32;
    // 9^19 sums can exceed u64 for the widest i64 inputs; accumulate wider.
    let sum: u128 = digits.iter().map(|&d| (d as u128).pow(k)).sum();
    sum == m as u128
}

/// Sum of the decimal digits of `|n|`.
pub fn digit_sum(n: i64) -> u32 {
    decimal_digits(n.unsigned_abs())
        .iter()
        .map(|&d| d as u32)
        .sum()
}

/// Classify `n`, combining all predicates into a single record.
pub fn classify(n: i64) -> Classification {
    let mut properties = Vec::with_capacity(2);
    if is_armstrong(n) {
        properties.push(Property::Armstrong);
    }
    properties.push(if n % 2 == 0 {
        Property::Even
    } else {
        Property::Odd
    });

    Classification {
        number: n,
        is_prime: is_prime(n),
        is_perfect: is_perfect(n),
        properties,
        digit_sum: digit_sum(n),
    }
}

/// Decimal digits of `m`, most significant first. `0` yields `[0]`.
fn decimal_digits(mut m: u64) -> Vec<u8> {
    if m == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while m > 0 {
        digits.push((m % 10) as u8);
        m /= 10;
    }
    digits.reverse();
    digits
}
