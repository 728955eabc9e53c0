// SPDX-License-Identifier: MIT OR Apache-2.0
//! Prime search used to size bucket arrays and the compression modulus.

/// Trial-division primality test.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut div = 2u64;
    while div * div <= n {
        if n % div == 0 {
            return false;
        }
        div += 1;
    }
    true
}

/// Find a prime close to `x`.
///
/// Returns `x` if it is prime; otherwise probes `x+1, x-1, x+2, x-2, ...` out
/// to a distance of `x / 10`. If nothing in that window is prime the result is
/// `x * 101 / 100`, which is not necessarily prime.
#[must_use]
pub fn find_prime(x: u64) -> u64 {
    if is_prime(x) {
        return x;
    }
    let range = x / 10;
    for i in 1..=range {
        if is_prime(x + i) {
            return x + i;
        }
        if is_prime(x - i) {
            return x - i;
        }
    }
    x * 101 / 100
}
