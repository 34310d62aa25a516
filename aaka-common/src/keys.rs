use crate::setup::SetupParams;
use ark_ec::pairing::Pairing;
use ark_ec::CurveGroup;
use ark_ff::UniformRand;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Issuer secret key `isk = (x_0, ..., x_{q-1})`.
#[derive(Clone, Zeroize, ZeroizeOnDrop, CanonicalSerialize, CanonicalDeserialize)]
pub struct IssuerSecretKey<E: Pairing>(pub Vec<E::ScalarField>);

/// Issuer public key `ipk = (x_0*g2, ..., x_{q-1}*g2)`.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct IssuerPublicKey<E: Pairing>(pub Vec<E::G2Affine>);

/// `IKeyGen(q)`: sample `q` scalars as `isk`, `ipk[i] := isk[i]*g2`.
///
/// This workspace fixes `q = 3` everywhere it is actually used (one message
/// attribute `m` and one pseudonymous identifier `pm`, alongside the
/// constant term), but key generation itself stays general in `q`.
pub fn ikey_gen<E: Pairing, R: RngCore + CryptoRng>(
    params: &SetupParams<E>,
    q: usize,
    rng: &mut R,
) -> (IssuerSecretKey<E>, IssuerPublicKey<E>) {
    let isk: Vec<E::ScalarField> = (0..q).map(|_| E::ScalarField::rand(rng)).collect();
    let ipk: Vec<E::G2Affine> = isk
        .iter()
        .map(|x| (params.g2 * x).into_affine())
        .collect();
    (IssuerSecretKey(isk), IssuerPublicKey(ipk))
}

/// LEA (tracing authority) secret key `tsk`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct LeaSecretKey<E: Pairing>(pub E::ScalarField);

/// LEA public key `tpk = tsk*g2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct LeaPublicKey<E: Pairing>(pub E::G2Affine);

/// `LEAKeyGen`: standard scalar + base-point multiplication in `G2`.
pub fn lea_key_gen<E: Pairing, R: RngCore + CryptoRng>(
    params: &SetupParams<E>,
    rng: &mut R,
) -> (LeaSecretKey<E>, LeaPublicKey<E>) {
    let tsk = E::ScalarField::rand(rng);
    let tpk = (params.g2 * tsk).into_affine();
    (LeaSecretKey(tsk), LeaPublicKey(tpk))
}

/// Long-term asymmetric key used by the network side of the authenticated
/// key exchange: secret scalar `y`, public point `Y = y*g1`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AsymSecretKey<E: Pairing>(pub E::ScalarField);

#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct AsymPublicKey<E: Pairing>(pub E::G1Affine);

/// `AsymKeyGen`: standard scalar + base-point multiplication in `G1`.
pub fn asym_key_gen<E: Pairing, R: RngCore + CryptoRng>(
    params: &SetupParams<E>,
    rng: &mut R,
) -> (AsymSecretKey<E>, AsymPublicKey<E>) {
    let sk = E::ScalarField::rand(rng);
    let pk = (params.g1 * sk).into_affine();
    (AsymSecretKey(sk), AsymPublicKey(pk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Bls12_381;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use blake2::Blake2b512;

    #[test]
    fn ikey_gen_produces_matching_length_keys() {
        let params = SetupParams::<Bls12_381>::new::<Blake2b512>(b"aaka-test");
        let mut rng = StdRng::seed_from_u64(0);
        let (isk, ipk) = ikey_gen(&params, 3, &mut rng);
        assert_eq!(isk.0.len(), 3);
        assert_eq!(ipk.0.len(), 3);
        for (x, xg2) in isk.0.iter().zip(ipk.0.iter()) {
            assert_eq!((params.g2 * x).into_affine(), *xg2);
        }
    }
}
