// src/integer_math/prime_sieve.rs

use bitvec::prelude::*;
use log::debug;
use num::{BigInt, ToPrimitive};

pub struct PrimeSieve;

impl PrimeSieve {
    /// Sieve of Eratosthenes: all primes strictly below `limit`, ascending.
    /// Empty for `limit <= 2`.
    pub fn primes_under(limit: &BigInt) -> Vec<BigInt> {
        if limit <= &BigInt::from(2) {
            return Vec::new();
        }
        let bound = limit
            .to_usize()
            .expect("sieve limit exceeds addressable memory");

        debug!("Culling composites over [0, {})", bound);
        let mut composite = bitvec![0; bound];
        let mut p = 2usize;
        while p * p < bound {
            if !composite[p] {
                let mut multiple = p * p;
                while multiple < bound {
                    composite.set(multiple, true);
                    multiple += p;
                }
            }
            p += 1;
        }

        let primes: Vec<BigInt> = (2..bound)
            .filter(|&i| !composite[i])
            .map(BigInt::from)
            .collect();
        debug!("Sieve produced {} primes below {}", primes.len(), limit);
        primes
    }
}
