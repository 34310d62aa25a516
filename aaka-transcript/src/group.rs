//! Thin byte-level glue over `ark_ec::pairing::Pairing`'s opaque `Scalar`,
//! `G1`, `G2`, `GT` types — the canonical serialization the Fiat-Shamir
//! transcript hashes, and the convenience aliases used throughout the two
//! credential schemes.

use ark_ec::pairing::{Pairing, PairingOutput};
use ark_serialize::CanonicalSerialize;

pub type Scalar<E> = <E as Pairing>::ScalarField;
pub type G1<E> = <E as Pairing>::G1;
pub type G1Affine<E> = <E as Pairing>::G1Affine;
pub type G2<E> = <E as Pairing>::G2;
pub type G2Affine<E> = <E as Pairing>::G2Affine;
pub type Gt<E> = PairingOutput<E>;

/// Canonical compressed byte serialization, used both as the building block
/// for the Fiat-Shamir transcript and to serialize the authenticated key
/// exchange's shared point before it is hashed into `tau`/`k_s`.
pub fn canonical_bytes<T: CanonicalSerialize>(value: &T) -> Vec<u8> {
    let mut buf = Vec::with_capacity(value.compressed_size());
    value
        .serialize_compressed(&mut buf)
        .expect("serialization into a Vec cannot fail");
    buf
}
