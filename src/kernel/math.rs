use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Largest Fibonacci index whose value is exactly representable as an f64.
///
/// F(78) = 8944394323791464 < 2^53 < F(79).
pub const FIBONACCI_HARD_MAX: i32 = 78;

/// nth Fibonacci number, F(0) = 0, F(1) = 1.
///
/// `limit` is clamped to [`FIBONACCI_HARD_MAX`] so the result always survives
/// the trip back to the host's double.
pub fn fibonacci(n: i32, limit: i32) -> CoreResult<u64> {
    if n < 0 {
        return Err(CoreError::domain(
            "fibonacci",
            format!("requires n >= 0, got {}", n),
        ));
    }

    let limit = limit.min(FIBONACCI_HARD_MAX);
    if n > limit {
        return Err(CoreError::too_large("fibonacci", n as i64, limit as i64));
    }

    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        let next = a + b;
        a = b;
        b = next;
    }
    Ok(a)
}

/// Primality by 6k +/- 1 trial division. Anything below 2 is not prime.
pub fn is_prime(n: i32) -> bool {
    let n = n as i64;
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5i64;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Prime factors of `n` in ascending order, with multiplicity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    pub n: i32,
    pub factors: Vec<i32>,
}

impl Factorization {
    pub fn product(&self) -> i64 {
        self.factors.iter().map(|&f| f as i64).product()
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Factors of {}: ", self.n)?;
        for (i, factor) in self.factors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", factor)?;
        }
        Ok(())
    }
}

impl FromStr for Factorization {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoreError::domain("factorize", format!("malformed factor list '{}'", s));

        let rest = s.strip_prefix("Factors of ").ok_or_else(malformed)?;
        let (n, list) = rest.split_once(": ").ok_or_else(malformed)?;
        let n = n.parse::<i32>().map_err(|_| malformed())?;

        let factors = list
            .split(", ")
            .map(|f| f.parse::<i32>().map_err(|_| malformed()))
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Factorization { n, factors })
    }
}

/// Trial division bounded by `i * i <= n`, at most ~46k steps for a 32-bit n.
///
/// `n < 2` has no prime factorization and is rejected.
pub fn factorize(n: i32, limit: i32) -> CoreResult<Factorization> {
    if n < 2 {
        return Err(CoreError::domain(
            "factorize",
            format!("requires n >= 2, got {}", n),
        ));
    }
    if n > limit {
        return Err(CoreError::too_large("factorize", n as i64, limit as i64));
    }

    let mut factors = Vec::new();
    let mut rest = n as i64;
    let mut i = 2i64;
    while i * i <= rest {
        while rest % i == 0 {
            factors.push(i as i32);
            rest /= i;
        }
        i += 1;
    }
    if rest > 1 {
        factors.push(rest as i32);
    }

    Ok(Factorization { n, factors })
}
