//! `Trace` and `judge`: LEA de-anonymization and revocation-list checking.

use crate::credential::AnonCredential;
use aaka_common::{LeaSecretKey, RevocationList, SetupParams};
use ark_ec::pairing::Pairing;
use ark_ec::CurveGroup;

/// `Trace(tsk, Acred) = C4 - tsk*C3`, which equals `pm*g2`.
pub fn trace<E: Pairing>(tsk: &LeaSecretKey<E>, acred: &AnonCredential<E>) -> E::G2Affine {
    (acred.c4.into_group() - acred.c3 * tsk.0).into_affine()
}

/// `judge(Acred, RL)`: recompute `H` and accept iff some entry of `RL`
/// satisfies `e(H, rl) == e(C5, g2)`.
pub fn judge<E: Pairing>(
    params: &SetupParams<E>,
    acred: &AnonCredential<E>,
    rl: &RevocationList<E>,
) -> bool {
    let h = crate::show::hashed_generator(
        params,
        acred.sigma_hat,
        acred.c1,
        acred.c2,
        acred.c3,
        acred.c4,
        acred.m,
    );
    rl.iter()
        .any(|tag| E::pairing(h, *tag) == E::pairing(acred.c5, params.g2))
}
