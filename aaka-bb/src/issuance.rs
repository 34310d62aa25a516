//! `CredIssue`, `CredVer` and the `ZK{isk : sigma_i = isk[i]*sigma ^ ipk[i] =
//! isk[i]*g2}` proof of well-formedness (relation 1) that binds the
//! credential to the issuer's key.

use crate::credential::Credential;
use aaka_common::{AakaError, IssuerPublicKey, IssuerSecretKey, SetupParams};
use aaka_transcript::{challenge, Elem};
use ark_ec::pairing::Pairing;
use ark_ec::CurveGroup;
use ark_ff::{Field, UniformRand};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::{CryptoRng, RngCore};

/// `pi_0`: proof that `cred`'s `sigma_i` components and the issuer's `ipk`
/// share the same underlying `isk`.
#[derive(Clone, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct IssuanceProof<E: Pairing> {
    pub cmt: Vec<E::G1Affine>,
    pub cmt_hat: Vec<E::G2Affine>,
    pub responses: Vec<E::ScalarField>,
}

fn transcript_elements<E: Pairing>(
    cmt: &[E::G1Affine],
    cmt_hat: &[E::G2Affine],
) -> Vec<Elem<'static, E>> {
    let mut elems = Vec::with_capacity(cmt.len() + cmt_hat.len());
    elems.extend(cmt.iter().map(|c| Elem::G1(*c)));
    elems.extend(cmt_hat.iter().map(|c| Elem::G2(*c)));
    elems
}

fn prove_relation1<E: Pairing, R: RngCore + CryptoRng>(
    params: &SetupParams<E>,
    sigma: E::G1Affine,
    isk: &IssuerSecretKey<E>,
    rng: &mut R,
) -> IssuanceProof<E> {
    let rho: Vec<E::ScalarField> = isk.0.iter().map(|_| E::ScalarField::rand(rng)).collect();
    let cmt: Vec<E::G1Affine> = rho.iter().map(|r| (sigma * r).into_affine()).collect();
    let cmt_hat: Vec<E::G2Affine> = rho.iter().map(|r| (params.g2 * r).into_affine()).collect();
    let ch = challenge::<E>(&transcript_elements::<E>(&cmt, &cmt_hat));
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

/// `ZK_Verify_Relation_1`: both `s_i*sigma == cmt_i + ch*sigma_{i+1}` and
/// `s_i*g2 == cmt_hat_i + ch*ipk_i` must hold for every attribute index.
pub fn verify_relation1<E: Pairing>(
    params: &SetupParams<E>,
    sigma: E::G1Affine,
    ipk: &IssuerPublicKey<E>,
    cred: &Credential<E>,
    proof: &IssuanceProof<E>,
) -> bool {
    if proof.cmt.len() != proof.cmt_hat.len() || proof.cmt.len() != proof.responses.len() {
        return false;
    }
    let ch = challenge::<E>(&transcript_elements::<E>(&proof.cmt, &proof.cmt_hat));
    let sigma_i = [cred.sigma0, cred.sigma1, cred.sigma2];
    for i in 0..proof.responses.len().min(sigma_i.len()) {
        let lhs1 = (sigma * proof.responses[i]).into_affine();
        let rhs1 = (proof.cmt[i].into_group() + sigma_i[i] * ch).into_affine();
        let lhs2 = (params.g2 * proof.responses[i]).into_affine();
        let rhs2 = (proof.cmt_hat[i].into_group() + ipk.0[i] * ch).into_affine();
        if lhs1 != rhs1 || lhs2 != rhs2 {
            return false;
        }
    }
    true
}

/// `CredIssue(isk, ipk, m, pm)`.
pub fn cred_issue<E: Pairing, R: RngCore + CryptoRng>(
    params: &SetupParams<E>,
    isk: &IssuerSecretKey<E>,
    m: E::ScalarField,
    pm: E::ScalarField,
    rng: &mut R,
) -> Result<(Credential<E>, IssuanceProof<E>), AakaError> {
    let denom = isk.0[0] + m * isk.0[1] + pm * isk.0[2];
    let inv = denom.inverse().ok_or(AakaError::DegenerateIssue)?;
    let sigma = (params.g1 * inv).into_affine();
    let sigma0 = (sigma * isk.0[0]).into_affine();
    let sigma1 = (sigma * isk.0[1]).into_affine();
    let sigma2 = (sigma * isk.0[2]).into_affine();
    let proof = prove_relation1(params, sigma, isk, rng);
    Ok((
        Credential {
            sigma,
            sigma0,
            sigma1,
            sigma2,
        },
        proof,
    ))
}

/// `CredVer(ipk, m, pm, cred, pi_0)`.
pub fn cred_ver<E: Pairing>(
    params: &SetupParams<E>,
    ipk: &IssuerPublicKey<E>,
    m: E::ScalarField,
    pm: E::ScalarField,
    cred: &Credential<E>,
    proof: &IssuanceProof<E>,
) -> bool {
    let lhs = (cred.sigma0.into_group() + cred.sigma1 * m + cred.sigma2 * pm).into_affine();
    lhs == params.g1 && verify_relation1(params, cred.sigma, ipk, cred, proof)
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
        let params = SetupParams::<Bls12_381>::new::<Blake2b512>(b"aaka-bb-test");
        let mut rng = StdRng::seed_from_u64(0);
        let (isk, ipk) = ikey_gen(&params, 3, &mut rng);
        let m = Fr::rand(&mut rng);
        let pm = Fr::rand(&mut rng);
        let (cred, proof) = cred_issue(&params, &isk, m, pm, &mut rng).unwrap();
        assert!(cred_ver(&params, &ipk, m, pm, &cred, &proof));
    }

    #[test]
    fn tampered_response_is_rejected() {
        let params = SetupParams::<Bls12_381>::new::<Blake2b512>(b"aaka-bb-test");
        let mut rng = StdRng::seed_from_u64(1);
        let (isk, ipk) = ikey_gen(&params, 3, &mut rng);
        let m = Fr::rand(&mut rng);
        let pm = Fr::rand(&mut rng);
        let (cred, mut proof) = cred_issue(&params, &isk, m, pm, &mut rng).unwrap();
        proof.responses[0] += Fr::from(1u64);
        assert!(!cred_ver(&params, &ipk, m, pm, &cred, &proof));
    }
}
