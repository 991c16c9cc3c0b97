//! Utilities for generating passwords.

use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

pub static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub static DIGITS: &str = "0123456789";
/// The fixed set of 31 punctuation characters offered when symbols are enabled.
pub static SYMBOLS: &str = "!#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Shortest length offered by the front-ends.
pub const MIN_LENGTH: usize = 6;
/// Longest length offered by the front-ends.
pub const MAX_LENGTH: usize = 100;
pub const DEFAULT_LENGTH: usize = 8;

/// The options a password is generated from.
///
/// Letters are always part of the alphabet; digits and symbols are opt-in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> GenerationOptions {
        GenerationOptions {
            length: DEFAULT_LENGTH,
            include_digits: false,
            include_symbols: false,
        }
    }
}

impl GenerationOptions {
    pub fn alphabet(&self) -> Alphabet {
        Alphabet::from_options(self)
    }
}

/// The ordered set of characters a password is sampled from. Never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn from_options(options: &GenerationOptions) -> Alphabet {
        let mut abc = Vec::with_capacity(UPPERCASE.len() + LOWERCASE.len());
        abc.extend(UPPERCASE.chars());
        abc.extend(LOWERCASE.chars());
        if options.include_digits {
            abc.extend(DIGITS.chars());
        }
        if options.include_symbols {
            abc.extend(SYMBOLS.chars());
        }
        Alphabet(abc)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

/// Generate a simple, impossible-to-guess password by just randomly sampling the given alphabet.
///
/// These are ugly, hard to remember passwords, but perfect if you're just copying them somewhere.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it can't
/// generate a value that is within the given range (or really, a multiple of the range), it
/// re-samples.
pub fn generate_random_password<R>(rng: &mut R, alphabet: &Alphabet, len: usize) -> crate::Secret
where
    R: Rng + CryptoRng,
{
    let mut secret = crate::Secret(String::with_capacity(len));
    if alphabet.is_empty() {
        return secret;
    }
    for _ in 0..len {
        let idx = rng.gen_range(0..alphabet.len());
        secret.0.push(alphabet.0[idx]);
    }
    secret
}

/// Generate a password of `options.length` characters from the alphabet `options` implies.
pub fn generate<R>(rng: &mut R, options: &GenerationOptions) -> crate::Secret
where
    R: Rng + CryptoRng,
{
    let alphabet = options.alphabet();
    log::debug!(
        "generating a {}-character password from a {}-character alphabet",
        options.length,
        alphabet.len()
    );
    generate_random_password(rng, &alphabet, options.length)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn options(length: usize, include_digits: bool, include_symbols: bool) -> GenerationOptions {
        GenerationOptions {
            length,
            include_digits,
            include_symbols,
        }
    }

    #[test]
    fn symbol_set_is_the_fixed_31_characters() {
        assert_eq!(SYMBOLS.chars().count(), 31);
        assert!(SYMBOLS.chars().all(|c| c.is_ascii_punctuation()));
        // `"` is deliberately absent.
        assert!(!SYMBOLS.contains('"'));
    }

    #[test]
    fn alphabet_sizes() {
        assert_eq!(options(8, false, false).alphabet().len(), 52);
        assert_eq!(options(8, true, false).alphabet().len(), 62);
        assert_eq!(options(8, false, true).alphabet().len(), 83);
        assert_eq!(options(8, true, true).alphabet().len(), 93);
    }

    #[test]
    fn alphabet_order_and_no_duplicates() {
        let alphabet = options(8, true, true).alphabet();
        let expected = format!("{}{}{}{}", UPPERCASE, LOWERCASE, DIGITS, SYMBOLS);
        assert_eq!(alphabet.as_slice().iter().collect::<String>(), expected);

        let mut sorted = alphabet.as_slice().to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), alphabet.len());
    }

    #[test]
    fn generated_length_matches_request() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0, 1, 6, 8, 57, 100, 1000] {
            for (digits, symbols) in [(false, false), (true, false), (false, true), (true, true)] {
                let pw = generate(&mut rng, &options(len, digits, symbols));
                assert_eq!(pw.as_str().chars().count(), len);
            }
        }
    }

    #[test]
    fn zero_length_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate(&mut rng, &options(0, true, true)).as_str(), "");
    }

    #[test]
    fn letters_only_by_default() {
        let mut rng = StdRng::seed_from_u64(42);
        let pw = generate(&mut rng, &options(100, false, false));
        assert!(pw.as_str().chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn characters_come_from_the_alphabet() {
        let mut rng = StdRng::seed_from_u64(3);
        for (digits, symbols) in [(true, false), (false, true), (true, true)] {
            let opts = options(100, digits, symbols);
            let alphabet = opts.alphabet();
            for _ in 0..20 {
                let pw = generate(&mut rng, &opts);
                assert!(pw.as_str().chars().all(|c| alphabet.contains(c)));
            }
        }
    }

    #[test]
    fn digits_never_appear_when_disabled() {
        let mut rng = StdRng::seed_from_u64(11);
        let pw = generate(&mut rng, &options(1000, false, true));
        assert!(!pw.as_str().chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn same_seed_same_password() {
        let opts = options(32, true, true);
        let a = generate(&mut StdRng::seed_from_u64(99), &opts);
        let b = generate(&mut StdRng::seed_from_u64(99), &opts);
        assert_eq!(a, b);
    }

    #[test]
    fn sampling_is_roughly_uniform() {
        const PER_CHAR: usize = 2000;
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let alphabet = options(0, true, true).alphabet();
        let pw = generate_random_password(&mut rng, &alphabet, alphabet.len() * PER_CHAR);

        let mut counts = HashMap::new();
        for ch in pw.as_str().chars() {
            *counts.entry(ch).or_insert(0usize) += 1;
        }
        assert_eq!(counts.len(), alphabet.len());
        for ch in alphabet.as_slice() {
            let count = counts[ch];
            assert!(
                count > PER_CHAR * 85 / 100 && count < PER_CHAR * 115 / 100,
                "{:?} drawn {} times, expected about {}",
                ch,
                count,
                PER_CHAR
            );
        }
    }
}
