//! Authenticated key exchange bound into the credential show: the UE draws
//! an ephemeral `(a, A)`, the network side responds with `(B, tau)` proving
//! possession of its long-term key `y`, and the UE verifies `tau` before
//! trusting the derived session key `k_s`. Identical construction is used by
//! both the BB and PS credential schemes.

use aaka_common::{AsymPublicKey, AsymSecretKey, SetupParams};
use aaka_transcript::{canonical_bytes, challenge, Elem};
use ark_ec::pairing::Pairing;
use ark_ec::CurveGroup;
use ark_ff::UniformRand;
use ark_std::rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A session key agreed by both sides, opaque and zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SessionKey(pub [u8; 32]);

/// The public `(A, B, tau)` transcript a completed exchange leaves behind,
/// bound into the credential show's zero-knowledge proof so a show cannot be
/// replayed against a different key-exchange session.
#[derive(Clone, Copy, Debug)]
pub struct AkeTranscript<E: Pairing> {
    pub a: E::G1Affine,
    pub b: E::G1Affine,
    pub tau: [u8; 32],
}

/// The UE's ephemeral half of the exchange: `a` must be held across the
/// round trip to verify the network's response, so it is returned alongside
/// the public `A`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct UeEphemeral<E: Pairing> {
    #[zeroize(skip)]
    pub a_public: E::G1Affine,
    pub a: E::ScalarField,
}

/// `(a, A) := (rand_scalar, a*g1)` at the UE side.
pub fn ue_init<E: Pairing, R: RngCore + CryptoRng>(
    params: &SetupParams<E>,
    rng: &mut R,
) -> UeEphemeral<E> {
    let a = E::ScalarField::rand(rng);
    let a_public = (params.g1 * a).into_affine();
    UeEphemeral { a_public, a }
}

fn session_key_bytes<E: Pairing>(k: E::G1Affine) -> ([u8; 32], [u8; 32]) {
    let serialized = canonical_bytes(&k);
    let mut tau_input = serialized.clone();
    tau_input.push(0x00);
    let tau: [u8; 32] = Sha256::digest(&tau_input).into();
    let mut ks_input = serialized;
    ks_input.push(0x01);
    let k_s: [u8; 32] = Sha256::digest(&ks_input).into();
    (tau, k_s)
}

/// Network-side response. `delta := challenge([Y, A, B])`, `K := (b +
/// delta*y)*A`, `tau := SHA-256(serialize(K) || 0x00)`, session key `k_s :=
/// SHA-256(serialize(K) || 0x01)`.
pub fn xn_respond<E: Pairing, R: RngCore + CryptoRng>(
    params: &SetupParams<E>,
    y_pub: &AsymPublicKey<E>,
    y_sec: &AsymSecretKey<E>,
    a_public: E::G1Affine,
    rng: &mut R,
) -> (E::G1Affine, [u8; 32], SessionKey) {
    let mut b = E::ScalarField::rand(rng);
    let b_public = (params.g1 * b).into_affine();
    let delta = challenge::<E>(&[
        Elem::G1(y_pub.0),
        Elem::G1(a_public),
        Elem::G1(b_public),
    ]);
    let k = (a_public * (b + delta * y_sec.0)).into_affine();
    b.zeroize();
    let (tau, k_s) = session_key_bytes::<E>(k);
    (b_public, tau, SessionKey(k_s))
}

/// UE verification: `delta := challenge([Y, A, B])`, `K' := a*(B +
/// delta*Y)`; accept iff `tau == SHA-256(serialize(K') || 0x00)`.
pub fn ue_verify<E: Pairing>(
    params: &SetupParams<E>,
    y_pub: &AsymPublicKey<E>,
    ue: &UeEphemeral<E>,
    b_public: E::G1Affine,
    tau: [u8; 32],
) -> Option<SessionKey> {
    let _ = params;
    let delta = challenge::<E>(&[
        Elem::G1(y_pub.0),
        Elem::G1(ue.a_public),
        Elem::G1(b_public),
    ]);
    let k_prime = ((b_public.into_group() + y_pub.0 * delta) * ue.a).into_affine();
    let (expected_tau, k_s) = session_key_bytes::<E>(k_prime);
    if expected_tau == tau {
        Some(SessionKey(k_s))
    } else {
        None
    }
}
