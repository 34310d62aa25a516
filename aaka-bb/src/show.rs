//! `CredShow`, `AcredVer` and the relation-2 proof of knowledge of `(pm, t,
//! r, u)` binding the anonymized credential to a fresh AKE transcript.

use crate::credential::{AnonCredential, Credential};
use aaka_ake::AkeTranscript;
use aaka_common::{IssuerPublicKey, LeaPublicKey, SetupParams};
use aaka_transcript::{challenge, Elem};
use ark_ec::pairing::Pairing;
use ark_ec::CurveGroup;
use ark_ff::UniformRand;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// `pi_1`: proof of knowledge of `(pm, t, r, u)` satisfying the five linear
/// relations that bind `Acred` to the issuer's key, the LEA's key, and the
/// AKE transcript `(A, B, tau)`.
#[derive(Clone, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct ShowProof<E: Pairing> {
    pub cmt1: E::G2Affine,
    pub cmt2: E::G1Affine,
    pub cmt3: E::G2Affine,
    pub cmt4: E::G2Affine,
    pub cmt5: E::G1Affine,
    pub responses: [E::ScalarField; 4],
}

pub(crate) fn hashed_generator<E: Pairing>(
    params: &SetupParams<E>,
    sigma_hat: E::G1Affine,
    c1: E::G2Affine,
    c2: E::G1Affine,
    c3: E::G2Affine,
    c4: E::G2Affine,
    m: E::ScalarField,
) -> E::G1Affine {
    let ch = challenge::<E>(&[
        Elem::G1(sigma_hat),
        Elem::G2(c1),
        Elem::G1(c2),
        Elem::G2(c3),
        Elem::G2(c4),
        Elem::Scalar(m),
    ]);
    (params.g1 * ch).into_affine()
}

/// `CredShow(ipk, tpk, m, pm, cred, keyEx)`.
pub fn cred_show<E: Pairing, R: RngCore + CryptoRng>(
    params: &SetupParams<E>,
    ipk: &IssuerPublicKey<E>,
    tpk: &LeaPublicKey<E>,
    m: E::ScalarField,
    pm: E::ScalarField,
    cred: &Credential<E>,
    key_ex: &AkeTranscript<E>,
    rng: &mut R,
) -> (AnonCredential<E>, ShowProof<E>) {
    let mut r = E::ScalarField::rand(rng);
    let mut t = E::ScalarField::rand(rng);
    let mut u = E::ScalarField::rand(rng);

    let sigma_hat = (cred.sigma * r).into_affine();
    let c1 = (ipk.0[0].into_group() + ipk.0[1] * m + ipk.0[2] * pm + params.g2 * t).into_affine();
    let c2 = (params.g1 * r + sigma_hat * t).into_affine();
    let c3 = (params.g2 * u).into_affine();
    let c4 = (tpk.0 * u + params.g2 * pm).into_affine();
    let h = hashed_generator(params, sigma_hat, c1, c2, c3, c4, m);
    let c5 = (h * pm).into_affine();

    let acred = AnonCredential {
        sigma_hat,
        c1,
        c2,
        c3,
        c4,
        c5,
        m,
    };

    let mut rho0 = E::ScalarField::rand(rng);
    let mut rho1 = E::ScalarField::rand(rng);
    let mut rho2 = E::ScalarField::rand(rng);
    let mut rho3 = E::ScalarField::rand(rng);
    let cmt1 = (ipk.0[2] * rho0 + params.g2 * rho1).into_affine();
    let cmt2 = (params.g1 * rho2 + sigma_hat * rho1).into_affine();
    let cmt3 = (params.g2 * rho3).into_affine();
    let cmt4 = (params.g2 * rho0 + tpk.0 * rho3).into_affine();
    let cmt5 = (h * rho0).into_affine();
    let ch = challenge::<E>(&[
        Elem::G2(cmt1),
        Elem::G1(cmt2),
        Elem::G2(cmt3),
        Elem::G2(cmt4),
        Elem::G1(cmt5),
        Elem::G1(key_ex.a),
        Elem::G1(key_ex.b),
        Elem::Bytes(&key_ex.tau),
    ]);
    let responses = [
        rho0 + pm * ch,
        rho1 + t * ch,
        rho2 + r * ch,
        rho3 + u * ch,
    ];
    r.zeroize();
    t.zeroize();
    u.zeroize();
    rho0.zeroize();
    rho1.zeroize();
    rho2.zeroize();
    rho3.zeroize();
    let proof = ShowProof {
        cmt1,
        cmt2,
        cmt3,
        cmt4,
        cmt5,
        responses,
    };
    (acred, proof)
}

/// `ZK_Verify_Relation_2`.
pub fn verify_relation2<E: Pairing>(
    params: &SetupParams<E>,
    ipk: &IssuerPublicKey<E>,
    tpk: &LeaPublicKey<E>,
    acred: &AnonCredential<E>,
    proof: &ShowProof<E>,
    key_ex: &AkeTranscript<E>,
) -> bool {
    let h = hashed_generator(
        params,
        acred.sigma_hat,
        acred.c1,
        acred.c2,
        acred.c3,
        acred.c4,
        acred.m,
    );
    let ch = challenge::<E>(&[
        Elem::G2(proof.cmt1),
        Elem::G1(proof.cmt2),
        Elem::G2(proof.cmt3),
        Elem::G2(proof.cmt4),
        Elem::G1(proof.cmt5),
        Elem::G1(key_ex.a),
        Elem::G1(key_ex.b),
        Elem::Bytes(&key_ex.tau),
    ]);
    let [s0, s1, s2, s3] = proof.responses;

    let eq1 = (ipk.0[2] * s0 + params.g2 * s1).into_affine()
        == (proof.cmt1.into_group()
            + (acred.c1.into_group() - (ipk.0[0].into_group() + ipk.0[1] * acred.m)) * ch)
            .into_affine();
    let eq2 = (params.g1 * s2 + acred.sigma_hat * s1).into_affine()
        == (proof.cmt2.into_group() + acred.c2 * ch).into_affine();
    let eq3 = (params.g2 * s3).into_affine()
        == (proof.cmt3.into_group() + acred.c3 * ch).into_affine();
    let eq4 = (tpk.0 * s3 + params.g2 * s0).into_affine()
        == (proof.cmt4.into_group() + acred.c4 * ch).into_affine();
    let eq5 = (h * s0).into_affine() == (proof.cmt5.into_group() + acred.c5 * ch).into_affine();

    eq1 && eq2 && eq3 && eq4 && eq5
}

/// `AcredVer(ipk, tpk, m, Acred, pi_1, keyEx)`.
pub fn acred_ver<E: Pairing>(
    params: &SetupParams<E>,
    ipk: &IssuerPublicKey<E>,
    tpk: &LeaPublicKey<E>,
    acred: &AnonCredential<E>,
    proof: &ShowProof<E>,
    key_ex: &AkeTranscript<E>,
) -> bool {
    E::pairing(acred.sigma_hat, acred.c1) == E::pairing(acred.c2, params.g2)
        && verify_relation2(params, ipk, tpk, acred, proof, key_ex)
}
