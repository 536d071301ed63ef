//! Knapsack public-key codec over [`MpInt`] arithmetic.
//!
//! The private key is a super-increasing weight sequence; the public key is
//! that sequence masked by modular multiplication with a prime. Encoding
//! packs message bits, most significant first, against the public weights;
//! decoding unmasks each block with the modular inverse and walks the
//! super-increasing sequence greedily from the top.
//!
//! Keys and ciphertexts serialize with serde, the values themselves as
//! decimal strings.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::mpint::MpInt;

/// Random bits drawn for each fresh private-weight increment.
const WEIGHT_BITS: usize = 100;

/// Random bits drawn for the modulus on top of the weight total.
const MODULUS_BITS: usize = 350;

/// Decode-side failures. Key generation retries internally and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An unmasked block value does not decompose over the private weights.
    #[error("block value does not decompose over the private weights")]
    MalformedBlock,

    /// The recorded padding does not match the decoded bit count.
    #[error("padding of {padding} bits does not fit the {decoded} decoded bits")]
    BadPadding { padding: usize, decoded: usize },
}

/// Private half of a key pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateKey {
    weights: Vec<MpInt>,
    modulus: MpInt,
    multiplier: MpInt,
    inverse: MpInt,
}

/// Public half of a key pair: the masked weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicKey {
    weights: Vec<MpInt>,
}

/// An encoded message: one value per block of message bits, plus the number
/// of zero bits appended to fill the final block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ciphertext {
    pub blocks: Vec<MpInt>,
    pub padding: usize,
}

impl PrivateKey {
    /// Message bits per block.
    pub fn block_bits(&self) -> usize {
        self.weights.len()
    }
}

impl PublicKey {
    /// Message bits per block.
    pub fn block_bits(&self) -> usize {
        self.weights.len()
    }
}

/// Generates a key pair spanning `block_bits` message bits per block.
///
/// Weights are drawn so each one exceeds the sum of all before it, the
/// modulus exceeds the sum of all of them, and the multiplier is a prime
/// redrawn until it is invertible mod the modulus.
pub fn generate_keypair(rng: &mut impl Rng, block_bits: usize) -> (PublicKey, PrivateKey) {
    assert!(block_bits > 0, "block_bits must be positive");
    let one = MpInt::one();
    let mut weights = Vec::with_capacity(block_bits);
    let mut total = MpInt::zero();
    for _ in 0..block_bits {
        let next = &(&random_bits_value(rng, WEIGHT_BITS) + &total) + &one;
        total += &next;
        weights.push(next);
    }

    let modulus = &(&random_bits_value(rng, MODULUS_BITS) + &total) + &one;
    let (multiplier, inverse) = loop {
        let candidate = MpInt::from(random_prime(rng));
        if let Some(inverse) = mod_inverse(&candidate, &modulus) {
            break (candidate, inverse);
        }
    };

    let masked = weights
        .iter()
        .map(|w| &(w * &multiplier) % &modulus)
        .collect();

    (
        PublicKey { weights: masked },
        PrivateKey {
            weights,
            modulus,
            multiplier,
            inverse,
        },
    )
}

/// Encodes a byte payload against the public weights.
///
/// Bytes expand to bits most significant first; the bit stream is padded
/// with zeros to a whole number of blocks and each block contributes the
/// sum of the public weights at its set bits.
pub fn encode(payload: &[u8], key: &PublicKey) -> Ciphertext {
    let block_bits = key.block_bits();
    let mut bits = Vec::with_capacity(payload.len() * 8 + block_bits);
    for byte in payload {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1 == 1);
        }
    }
    let mut padding = 0;
    while bits.len() % block_bits != 0 {
        bits.push(false);
        padding += 1;
    }

    let blocks = bits
        .chunks(block_bits)
        .map(|block| {
            let mut sum = MpInt::zero();
            for (bit, weight) in block.iter().zip(&key.weights) {
                if *bit {
                    sum += weight;
                }
            }
            sum
        })
        .collect();

    Ciphertext { blocks, padding }
}

/// Decodes a ciphertext with the private key, returning the byte payload.
pub fn decode(ciphertext: &Ciphertext, key: &PrivateKey) -> Result<Vec<u8>, Error> {
    let block_bits = key.block_bits();
    let mut bits = Vec::with_capacity(ciphertext.blocks.len() * block_bits);
    for block in &ciphertext.blocks {
        let mut residue = &(block * &key.inverse) % &key.modulus;
        let mut decoded = vec![false; block_bits];
        for (i, weight) in key.weights.iter().enumerate().rev() {
            if residue >= *weight {
                decoded[i] = true;
                residue -= weight;
            }
        }
        if !residue.is_zero() {
            return Err(Error::MalformedBlock);
        }
        bits.extend_from_slice(&decoded);
    }

    if ciphertext.padding > bits.len() || (bits.len() - ciphertext.padding) % 8 != 0 {
        return Err(Error::BadPadding {
            padding: ciphertext.padding,
            decoded: bits.len(),
        });
    }
    bits.truncate(bits.len() - ciphertext.padding);

    let payload = bits
        .chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | u8::from(bit)))
        .collect();
    Ok(payload)
}

/// Multiplicative inverse of `value` modulo `modulus`, in `[0, modulus)`.
///
/// Iterative extended Euclid tracking a single coefficient column; `None`
/// when the two are not coprime.
pub fn mod_inverse(value: &MpInt, modulus: &MpInt) -> Option<MpInt> {
    let zero = MpInt::zero();
    let mut remainder = value % modulus;
    let mut prior = modulus.clone();
    let mut coeff = MpInt::one();
    let mut coeff_prior = MpInt::zero();
    while remainder != zero {
        let quotient = &prior / &remainder;
        let next = &prior - &(&quotient * &remainder);
        prior = core::mem::replace(&mut remainder, next);
        let next_coeff = &coeff_prior - &(&quotient * &coeff);
        coeff_prior = core::mem::replace(&mut coeff, next_coeff);
    }
    if prior != MpInt::one() {
        return None;
    }
    if coeff_prior.is_negative() {
        coeff_prior += modulus;
    }
    Some(coeff_prior)
}

/// Big-endian bit vector to integer.
pub fn bits_to_int(bits: &[bool]) -> MpInt {
    let two = MpInt::from(2u32);
    let one = MpInt::one();
    let mut acc = MpInt::zero();
    for &bit in bits {
        acc = &acc * &two;
        if bit {
            acc = &acc + &one;
        }
    }
    acc
}

/// Integer to big-endian bits; zero yields no bits and negatives convert by
/// magnitude.
pub fn int_to_bits(value: &MpInt) -> Vec<bool> {
    let two = MpInt::from(2u32);
    let one = MpInt::one();
    let zero = MpInt::zero();
    let mut rest = value.clone();
    if rest.is_negative() {
        rest = -rest;
    }
    let mut bits = Vec::new();
    while rest > zero {
        bits.push(&rest % &two == one);
        rest = &rest / &two;
    }
    bits.reverse();
    bits
}

fn random_bits_value(rng: &mut impl Rng, bits: usize) -> MpInt {
    let raw: Vec<bool> = (0..bits).map(|_| rng.gen()).collect();
    bits_to_int(&raw)
}

/// A uniform prime above 4; trial division is plenty at machine-word size.
fn random_prime(rng: &mut impl Rng) -> u32 {
    loop {
        let candidate = rng.gen_range(5..=i32::MAX as u32);
        if is_prime(candidate) {
            return candidate;
        }
    }
}

fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5u32;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
