// src/integer_math/mod.rs

pub mod chinese_remainder;
pub mod gcd;
pub mod primality;
pub mod prime_sieve;
