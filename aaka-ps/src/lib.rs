//! The Pointcheval-Sanders-style (PS) anonymous credential scheme: issuance
//! with a ZK proof of well-formedness, randomized selective showing bound to
//! an authenticated key exchange, verifier-side ZK verification, LEA tracing
//! and revocation-list judging.

pub mod credential;
pub mod issuance;
pub mod show;
pub mod trace;

pub use credential::{AnonCredential, Credential};
pub use issuance::{cred_issue, cred_ver, verify_relation3, IssuanceProof};
pub use show::{acred_ver, cred_show, verify_relation4, ShowProof};
pub use trace::{judge, trace};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use aaka_ake::AkeTranscript;
    use aaka_common::{ikey_gen, lea_key_gen, SetupParams};
    use ark_bls12_381::{Bls12_381, Fr};
    use ark_ec::CurveGroup;
    use ark_ff::UniformRand;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use blake2::Blake2b512;

    fn test_key_ex(rng: &mut StdRng) -> AkeTranscript<Bls12_381> {
        let params = SetupParams::<Bls12_381>::new::<Blake2b512>(b"aaka-ps-keyex");
        let a = Fr::rand(rng);
        let b = Fr::rand(rng);
        AkeTranscript {
            a: (params.g1 * a).into_affine(),
            b: (params.g1 * b).into_affine(),
            tau: [9u8; 32],
        }
    }

    #[test]
    fn show_verify_trace_and_judge_round_trip() {
        let params = SetupParams::<Bls12_381>::new::<Blake2b512>(b"aaka-ps-test");
        let mut rng = StdRng::seed_from_u64(0);
        let (isk, ipk) = ikey_gen(&params, 3, &mut rng);
        let (tsk, tpk) = lea_key_gen(&params, &mut rng);
        let m = Fr::rand(&mut rng);
        let pm = Fr::rand(&mut rng);

        let (cred, issuance_proof) = cred_issue(&params, &isk, m, pm, &mut rng);
        assert!(cred_ver(&params, &ipk, m, pm, &cred, &issuance_proof));

        let key_ex = test_key_ex(&mut rng);
        let (acred, show_proof) = cred_show(&params, &ipk, &tpk, m, pm, &cred, &key_ex, &mut rng);
        assert!(acred_ver(&params, &ipk, &tpk, &acred, &show_proof, &key_ex));

        let traced = trace(&tsk, &acred);
        assert_eq!(traced, (params.g2 * pm).into_affine());

        let mut rl = aaka_common::RevocationList::new();
        assert!(!judge(&params, &acred, &rl));
        rl.push(traced);
        assert!(judge(&params, &acred, &rl));
    }

    #[test]
    fn tampered_show_proof_response_is_rejected() {
        let params = SetupParams::<Bls12_381>::new::<Blake2b512>(b"aaka-ps-test");
        let mut rng = StdRng::seed_from_u64(1);
        let (isk, ipk) = ikey_gen(&params, 3, &mut rng);
        let (_, tpk) = lea_key_gen(&params, &mut rng);
        let m = Fr::rand(&mut rng);
        let pm = Fr::rand(&mut rng);
        let (cred, _) = cred_issue(&params, &isk, m, pm, &mut rng);

        let key_ex = test_key_ex(&mut rng);
        let (acred, mut show_proof) =
            cred_show(&params, &ipk, &tpk, m, pm, &cred, &key_ex, &mut rng);
        show_proof.responses[0] += Fr::from(1u64);
        assert!(!acred_ver(&params, &ipk, &tpk, &acred, &show_proof, &key_ex));
    }

    #[test]
    fn two_shows_of_the_same_credential_differ_in_every_component() {
        let params = SetupParams::<Bls12_381>::new::<Blake2b512>(b"aaka-ps-test");
        let mut rng = StdRng::seed_from_u64(2);
        let (isk, ipk) = ikey_gen(&params, 3, &mut rng);
        let (_, tpk) = lea_key_gen(&params, &mut rng);
        let m = Fr::rand(&mut rng);
        let pm = Fr::rand(&mut rng);
        let (cred, _) = cred_issue(&params, &isk, m, pm, &mut rng);

        let key_ex_1 = test_key_ex(&mut rng);
        let key_ex_2 = test_key_ex(&mut rng);
        let (acred1, _) = cred_show(&params, &ipk, &tpk, m, pm, &cred, &key_ex_1, &mut rng);
        let (acred2, _) = cred_show(&params, &ipk, &tpk, m, pm, &cred, &key_ex_2, &mut rng);

        assert_ne!(acred1.sigma1_hat, acred2.sigma1_hat);
        assert_ne!(acred1.sigma2_hat, acred2.sigma2_hat);
        assert_ne!(acred1.c1, acred2.c1);
        assert_ne!(acred1.c2, acred2.c2);
        assert_ne!(acred1.c3, acred2.c3);
        assert_ne!(acred1.c4, acred2.c4);
    }
}
