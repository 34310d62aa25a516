//! Try-and-increment hashing to field elements and curve points: the
//! standard (non-constant-time) construction used throughout this workspace
//! to derive public parameters and hash-to-curve points deterministically
//! from a domain-separation label, rather than hard-coding arbitrary points.

use ark_ec::AffineRepr;
use ark_ff::{PrimeField, Zero};
use ark_std::vec::Vec;
use digest::Digest;

/// Hashes `bytes` to a field element by repeatedly re-hashing with an
/// incrementing counter appended until the digest, interpreted as a
/// big-endian integer reduced modulo the field's modulus, is accepted.
/// Every input is accepted on the first or second try with overwhelming
/// probability since the reduction already covers almost the whole digest
/// space; the loop exists only to stay honest about non-uniformity at the
/// top of the range.
pub fn field_elem_from_try_and_incr<F: PrimeField, D: Digest>(bytes: &[u8]) -> F {
    let mut hash_input = Vec::with_capacity(bytes.len() + 1);
    hash_input.extend_from_slice(bytes);
    hash_input.push(0);
    loop {
        let digest = D::digest(&hash_input);
        let candidate = F::from_be_bytes_mod_order(&digest);
        if !candidate.is_zero() {
            return candidate;
        }
        *hash_input.last_mut().unwrap() += 1;
    }
}

/// Hashes `bytes` to an affine curve point by re-hashing with an
/// incrementing counter until the digest decodes as a valid group element
/// via `AffineRepr::from_random_bytes`, then clears the point's cofactor.
pub fn affine_group_elem_from_try_and_incr<G: AffineRepr, D: Digest>(bytes: &[u8]) -> G {
    let mut hash_input = Vec::with_capacity(bytes.len() + 1);
    hash_input.extend_from_slice(bytes);
    hash_input.push(0);
    loop {
        let digest = D::digest(&hash_input);
        if let Some(point) = G::from_random_bytes(&digest) {
            return point.clear_cofactor();
        }
        *hash_input.last_mut().unwrap() += 1;
    }
}

/// As [`affine_group_elem_from_try_and_incr`] but returns the point in its
/// projective/group representation, for call sites that immediately feed it
/// into further group arithmetic.
pub fn projective_group_elem_from_try_and_incr<G: AffineRepr, D: Digest>(bytes: &[u8]) -> G::Group {
    affine_group_elem_from_try_and_incr::<G, D>(bytes).into_group()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Fr, G1Affine};
    use blake2::Blake2b512;

    #[test]
    fn field_elem_hashing_is_deterministic() {
        let a = field_elem_from_try_and_incr::<Fr, Blake2b512>(b"label");
        let b = field_elem_from_try_and_incr::<Fr, Blake2b512>(b"label");
        assert_eq!(a, b);
        let c = field_elem_from_try_and_incr::<Fr, Blake2b512>(b"other");
        assert_ne!(a, c);
    }

    #[test]
    fn group_elem_hashing_is_deterministic_and_on_curve() {
        let a = affine_group_elem_from_try_and_incr::<G1Affine, Blake2b512>(b"label : g1");
        let b = affine_group_elem_from_try_and_incr::<G1Affine, Blake2b512>(b"label : g1");
        assert_eq!(a, b);
        assert!(a.is_on_curve());
        assert!(a.is_in_correct_subgroup_assuming_on_curve());
    }
}
