use ark_ec::pairing::Pairing;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// PS credential `(sigma_1, sigma_2) in G1^2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Credential<E: Pairing> {
    pub sigma1: E::G1Affine,
    pub sigma2: E::G1Affine,
}

/// The anonymized, showable form of a [`Credential`]:
/// `Acred = (sigma1_hat, sigma2_hat, C1, C2, C3, C4, m)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct AnonCredential<E: Pairing> {
    pub sigma1_hat: E::G1Affine,
    pub sigma2_hat: E::G1Affine,
    pub c1: E::G2Affine,
    pub c2: E::G2Affine,
    pub c3: E::G2Affine,
    pub c4: E::G1Affine,
    pub m: E::ScalarField,
}
