//! `CredIssue`, `CredVer` and the `ZK{isk : sigma_2 = (isk[0] + m*isk[1] +
//! pm*isk[2])*sigma_1 ^ ipk[i] = isk[i]*g2}` proof of well-formedness
//! (relation 3) that binds the credential to the issuer's key.

use crate::credential::Credential;
use aaka_common::{IssuerPublicKey, IssuerSecretKey, SetupParams};
use aaka_transcript::{challenge, Elem};
use ark_ec::pairing::Pairing;
use ark_ec::CurveGroup;
use ark_ff::UniformRand;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::{CryptoRng, RngCore};

/// `pi_2`: proof that `sigma_2`'s exponent is formed from the same `isk`
/// that underlies `ipk`.
#[derive(Clone, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct IssuanceProof<E: Pairing> {
    pub cmt: E::G1Affine,
    pub cmt_hat: Vec<E::G2Affine>,
    pub responses: Vec<E::ScalarField>,
}

fn prove_relation3<E: Pairing, R: RngCore + CryptoRng>(
    params: &SetupParams<E>,
    sigma1: E::G1Affine,
    isk: &IssuerSecretKey<E>,
    m: E::ScalarField,
    pm: E::ScalarField,
    rng: &mut R,
) -> IssuanceProof<E> {
    let rho: Vec<E::ScalarField> = isk.0.iter().map(|_| E::ScalarField::rand(rng)).collect();
    let cmt_hat: Vec<E::G2Affine> = rho.iter().map(|r| (params.g2 * r).into_affine()).collect();
    let combined_rho = rho[0] + m * rho[1] + pm * rho[2];
    let cmt = (sigma1 * combined_rho).into_affine();

    let mut elems = Vec::with_capacity(1 + cmt_hat.len());
    elems.push(Elem::G1(cmt));
    elems.extend(cmt_hat.iter().map(|c| Elem::G2(*c)));
    let ch = challenge::<E>(&elems);

    let responses: Vec<E::ScalarField> = rho
        .iter()
        .zip(isk.0.iter())
        .map(|(r, x)| *r + *x * ch)
        .collect();
    IssuanceProof {
        cmt,
        cmt_hat,
        responses,
    }
}

/// `ZK_Verify_Relation_3`: every `s_i*g2 == cmt_hat_i + ch*ipk_i` must hold,
/// together with the combined check binding `sigma_1`/`sigma_2` to `m, pm`.
pub fn verify_relation3<E: Pairing>(
    params: &SetupParams<E>,
    ipk: &IssuerPublicKey<E>,
    cred: &Credential<E>,
    proof: &IssuanceProof<E>,
    m: E::ScalarField,
    pm: E::ScalarField,
) -> bool {
    if proof.cmt_hat.len() != proof.responses.len() || proof.cmt_hat.len() != ipk.0.len() {
        return false;
    }
    let mut elems = Vec::with_capacity(1 + proof.cmt_hat.len());
    elems.push(Elem::G1(proof.cmt));
    elems.extend(proof.cmt_hat.iter().map(|c| Elem::G2(*c)));
    let ch = challenge::<E>(&elems);

    for i in 0..proof.responses.len() {
        let lhs = (params.g2 * proof.responses[i]).into_affine();
        let rhs = (proof.cmt_hat[i].into_group() + ipk.0[i] * ch).into_affine();
        if lhs != rhs {
            return false;
        }
    }

    let combined_s = proof.responses[0] + m * proof.responses[1] + pm * proof.responses[2];
    let lhs = (cred.sigma1 * combined_s).into_affine();
    let rhs = (proof.cmt.into_group() + cred.sigma2 * ch).into_affine();
    lhs == rhs
}

/// `CredIssue(isk, ipk, m, pm)`. Unlike the BB scheme, issuance here has no
/// failure mode: `sigma_1` is a fresh random generator, never a denominator.
pub fn cred_issue<E: Pairing, R: RngCore + CryptoRng>(
    params: &SetupParams<E>,
    isk: &IssuerSecretKey<E>,
    m: E::ScalarField,
    pm: E::ScalarField,
    rng: &mut R,
) -> (Credential<E>, IssuanceProof<E>) {
    let sigma1_scalar = E::ScalarField::rand(rng);
    let sigma1 = (params.g1 * sigma1_scalar).into_affine();
    let exponent = isk.0[0] + m * isk.0[1] + pm * isk.0[2];
    let sigma2 = (sigma1 * exponent).into_affine();
    let proof = prove_relation3(params, sigma1, isk, m, pm, rng);
    (Credential { sigma1, sigma2 }, proof)
}

/// `CredVer(ipk, m, pm, cred, pi_2)`.
pub fn cred_ver<E: Pairing>(
    params: &SetupParams<E>,
    ipk: &IssuerPublicKey<E>,
    m: E::ScalarField,
    pm: E::ScalarField,
    cred: &Credential<E>,
    proof: &IssuanceProof<E>,
) -> bool {
    verify_relation3(params, ipk, cred, proof, m, pm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aaka_common::ikey_gen;
    use ark_bls12_381::{Bls12_381, Fr};
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use blake2::Blake2b512;

    #[test]
    fn honestly_issued_credential_verifies() {
        let params = SetupParams::<Bls12_381>::new::<Blake2b512>(b"aaka-ps-test");
        let mut rng = StdRng::seed_from_u64(0);
        let (isk, ipk) = ikey_gen(&params, 3, &mut rng);
        let m = Fr::rand(&mut rng);
        let pm = Fr::rand(&mut rng);
        let (cred, proof) = cred_issue(&params, &isk, m, pm, &mut rng);
        assert!(cred_ver(&params, &ipk, m, pm, &cred, &proof));
    }

    #[test]
    fn tampered_response_is_rejected() {
        let params = SetupParams::<Bls12_381>::new::<Blake2b512>(b"aaka-ps-test");
        let mut rng = StdRng::seed_from_u64(1);
        let (isk, ipk) = ikey_gen(&params, 3, &mut rng);
        let m = Fr::rand(&mut rng);
        let pm = Fr::rand(&mut rng);
        let (cred, mut proof) = cred_issue(&params, &isk, m, pm, &mut rng);
        proof.responses[0] += Fr::from(1u64);
        assert!(!cred_ver(&params, &ipk, m, pm, &cred, &proof));
    }
}
