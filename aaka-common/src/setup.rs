use ark_ec::pairing::Pairing;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use digest::Digest;
use dock_crypto_utils::{concat_slices, hashing_utils::affine_group_elem_from_try_and_incr};

/// Type-3 bilinear group parameters `(G, o, g1, g2, e)`: `o` is implicit as
/// `E::ScalarField`'s modulus and `e` as `E::pairing`, leaving only the two
/// fixed generators to carry.
///
/// Generators are derived deterministically from a domain-separation label
/// via hash-to-curve-by-increment, the same idiom the rest of this
/// workspace uses to produce its public parameters, rather than hard-coding
/// arbitrary points.
#[derive(Clone, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct SetupParams<E: Pairing> {
    pub g1: E::G1Affine,
    pub g2: E::G2Affine,
}

impl<E: Pairing> SetupParams<E> {
    pub fn new<D: Digest>(label: &[u8]) -> Self {
        let g1 = affine_group_elem_from_try_and_incr::<E::G1Affine, D>(&concat_slices![
            label,
            b" : g1"
        ]);
        let g2 = affine_group_elem_from_try_and_incr::<E::G2Affine, D>(&concat_slices![
            label,
            b" : g2"
        ]);
        Self { g1, g2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Bls12_381;
    use blake2::Blake2b512;

    #[test]
    fn setup_is_deterministic_per_label() {
        let a = SetupParams::<Bls12_381>::new::<Blake2b512>(b"aaka-test");
        let b = SetupParams::<Bls12_381>::new::<Blake2b512>(b"aaka-test");
        assert_eq!(a.g1, b.g1);
        assert_eq!(a.g2, b.g2);
        let c = SetupParams::<Bls12_381>::new::<Blake2b512>(b"other-label");
        assert_ne!(a.g1, c.g1);
    }
}
