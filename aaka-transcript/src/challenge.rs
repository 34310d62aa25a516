//! The Fiat-Shamir transcript: folds an ordered list of group elements,
//! scalars and byte strings into a single scalar challenge.
//!
//! Encoding is bijective and deterministic: the element count is prepended,
//! each element is rendered as the lowercase-hex form of its canonical
//! compressed bytes, prefixed by its own printable length, and elements are
//! joined with `|`. The UTF-8 bytes of that string are hashed with SHA-256
//! and the digest is reduced modulo the scalar field's order. Both sides of
//! every proof in this workspace call through this one function, so
//! agreement only requires that they built the same ordered element list —
//! not byte compatibility with any other implementation.

use crate::group::canonical_bytes;
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ff::PrimeField;
use sha2::{Digest, Sha256};

/// One item folded into a transcript.
pub enum Elem<'a, E: Pairing> {
    G1(E::G1Affine),
    G2(E::G2Affine),
    Gt(PairingOutput<E>),
    Scalar(E::ScalarField),
    Bytes(&'a [u8]),
}

impl<'a, E: Pairing> Elem<'a, E> {
    fn bytes(&self) -> Vec<u8> {
        match self {
            Elem::G1(p) => canonical_bytes(p),
            Elem::G2(p) => canonical_bytes(p),
            Elem::Gt(p) => canonical_bytes(p),
            Elem::Scalar(s) => canonical_bytes(s),
            Elem::Bytes(b) => b.to_vec(),
        }
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

fn encode<E: Pairing>(elements: &[Elem<E>]) -> String {
    let mut out = elements.len().to_string();
    for el in elements {
        let hex = hex_encode(&el.bytes());
        out.push('|');
        out.push_str(&hex.len().to_string());
        out.push_str("||");
        out.push_str(&hex);
    }
    out
}

/// Folds `elements` into a single scalar challenge.
pub fn challenge<E: Pairing>(elements: &[Elem<E>]) -> E::ScalarField {
    let encoded = encode(elements);
    let digest = Sha256::digest(encoded.as_bytes());
    E::ScalarField::from_be_bytes_mod_order(&digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Bls12_381, Fr, G1Affine};
    use ark_ec::CurveGroup;
    use ark_ff::UniformRand;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn challenge_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(0);
        let g = G1Affine::rand(&mut rng);
        let s = Fr::rand(&mut rng);
        let a = challenge::<Bls12_381>(&[Elem::G1(g), Elem::Scalar(s)]);
        let b = challenge::<Bls12_381>(&[Elem::G1(g), Elem::Scalar(s)]);
        assert_eq!(a, b);
    }

    #[test]
    fn challenge_is_sensitive_to_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = G1Affine::rand(&mut rng);
        let h = (g.into_group() * Fr::from(2u64)).into_affine();
        let a = challenge::<Bls12_381>(&[Elem::G1(g), Elem::G1(h)]);
        let b = challenge::<Bls12_381>(&[Elem::G1(h), Elem::G1(g)]);
        assert_ne!(a, b);
    }

    #[test]
    fn challenge_is_sensitive_to_every_element() {
        let mut rng = StdRng::seed_from_u64(2);
        let g = G1Affine::rand(&mut rng);
        let h = G1Affine::rand(&mut rng);
        let a = challenge::<Bls12_381>(&[Elem::G1(g)]);
        let b = challenge::<Bls12_381>(&[Elem::G1(h)]);
        assert_ne!(a, b);
    }
}
