//! The home network (HN) role: `AwaitSUCI -> ChallengeIssued -> Decided ->
//! Closed`. Sessions are concurrent; `SQN_HN` and the subscriber store are
//! guarded by a mutex held across read-compute-increment, per subscriber.

use crate::error::{ProtocolError, Result};
use crate::frame::{Autn, Auts, Frame};
use crate::subscriber_store::SubscriberStore;
use crate::transport::Transport;
use aka_crypto::primitives::{
    challenge, f1, f5, f5_star, key_seed, rand_bytes, sha256_pair, sqn_to_le_bytes, xor,
};
use aka_crypto::{sqn_from_truncated_le_bytes, SuciCipher, DIGEST_WIDTH, SQN_WIDTH};
use rand::{CryptoRng, RngCore};
use std::collections::HashMap;
use std::sync::Mutex;

struct PendingChallenge {
    supi: String,
    xres_star: [u8; DIGEST_WIDTH],
}

/// Home-network state: the asymmetric decryption key for SUCI, the
/// subscriber store, and the per-SUCI cache of issued challenges awaiting a
/// response.
pub struct HomeNetwork<S: SubscriberStore, C: SuciCipher> {
    sk_hn: Vec<u8>,
    cipher: C,
    store: Mutex<S>,
    pending: Mutex<HashMap<Vec<u8>, PendingChallenge>>,
}

impl<S: SubscriberStore, C: SuciCipher> HomeNetwork<S, C> {
    pub fn new(sk_hn: Vec<u8>, cipher: C, store: S) -> Self {
        Self {
            sk_hn,
            cipher,
            store: Mutex::new(store),
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Steps 3-4: decrypt `SUCI`, look up the subscriber, draw `R`, build
    /// `AUTN`, cache `XRES*`, and unconditionally advance `SQN_HN`.
    #[tracing::instrument(skip(self, rng))]
    pub fn handle_suci_and_sname<R: RngCore + CryptoRng>(
        &self,
        suci: &[u8],
        sname: &str,
        rng: &mut R,
    ) -> Result<Frame> {
        let supi = self
            .cipher
            .decrypt(&self.sk_hn, suci)
            .map_err(|_| ProtocolError::IdentityReject)?;

        let mut store = self.store.lock().expect("subscriber store lock poisoned");
        let record = store
            .lookup(&supi)
            .ok_or(ProtocolError::IdentityReject)?;

        let r = rand_bytes(rng, SQN_WIDTH);
        let sqn_hn = record.sqn_hn;
        let mac = f1(record.k.as_bytes(), sqn_hn, &r);
        let ak = f5(record.k.as_bytes(), &r);
        let conc = xor(&sqn_to_le_bytes(sqn_hn), &ak);
        let xres_star = challenge(record.k.as_bytes(), &r, sname);
        let hxres_star = sha256_pair(&r, &xres_star);
        let k_seaf = key_seed(record.k.as_bytes(), &r, sqn_hn, sname);

        store.set_sqn_hn(&supi, sqn_hn + 1);
        drop(store);

        self.pending.lock().expect("pending cache lock poisoned").insert(
            suci.to_vec(),
            PendingChallenge {
                supi,
                xres_star,
            },
        );

        Ok(Frame::Challenge {
            r,
            autn: Autn { conc, mac },
            hxres_star,
            k_seaf,
        })
    }

    /// Step 7 (HN side): compare the forwarded `RES*` against the cached
    /// `XRES*` and, on match, release `SUPI`.
    #[tracing::instrument(skip(self, res_star, suci))]
    pub fn handle_res_with_suci(&self, res_star: &[u8], suci: &[u8]) -> Result<Frame> {
        let pending = self
            .pending
            .lock()
            .expect("pending cache lock poisoned")
            .remove(suci)
            .ok_or(ProtocolError::ProtocolViolation {
                context: "RES* for an unknown or already-resolved SUCI",
            })?;
        if res_star != pending.xres_star.as_slice() {
            return Err(ProtocolError::ResMismatch);
        }
        Ok(Frame::Supi(pending.supi))
    }

    /// Step 8 (HN side): verify `AUTS`; on success, resynchronize `SQN_HN`
    /// to `xSQN_UE + 1` and end the session without releasing `SUPI`.
    #[tracing::instrument(skip(self, auts, r, suci))]
    pub fn handle_sync_failure(&self, auts: &Auts, r: &[u8], suci: &[u8]) -> Result<()> {
        let supi = {
            let mut pending = self.pending.lock().expect("pending cache lock poisoned");
            pending
                .remove(suci)
                .map(|p| p.supi)
                .ok_or(ProtocolError::ProtocolViolation {
                    context: "Sync_Failure for an unknown or already-resolved SUCI",
                })?
        };

        let mut store = self.store.lock().expect("subscriber store lock poisoned");
        let record = store.lookup(&supi).ok_or(ProtocolError::IdentityReject)?;

        let ak_star = f5_star(record.k.as_bytes(), r);
        let xsqn_ue_bytes = xor(&auts.conc_star, &ak_star);
        let xsqn_ue = sqn_from_truncated_le_bytes(&xsqn_ue_bytes)?;
        let xmacs = f1(record.k.as_bytes(), xsqn_ue, r);

        if xmacs.as_slice() != auts.macs.as_slice() {
            return Err(ProtocolError::ResyncReject);
        }
        store.set_sqn_hn(&supi, xsqn_ue + 1);
        Ok(())
    }

    /// Runs one full session over `transport`: handle the incoming
    /// `(SUCI, sname)`, send the challenge, then handle whichever of
    /// `RES*`/`Sync_Failure` SN forwards next. Returns `Some(supi)` on a
    /// successful authentication, `None` after a handled resync.
    pub fn run_session<T: Transport, R: RngCore + CryptoRng>(
        &self,
        transport: &mut T,
        rng: &mut R,
    ) -> Result<Option<String>> {
        let (suci, sname) = match transport.recv()? {
            Frame::SuciAndSname { suci, sname } => (suci, sname),
            _ => {
                return Err(ProtocolError::ProtocolViolation {
                    context: "expected SuciAndSname",
                })
            }
        };
        let challenge_frame = self.handle_suci_and_sname(&suci, &sname, rng)?;
        transport.send(challenge_frame)?;

        match transport.recv()? {
            Frame::ResWithSuci { res_star, suci } => {
                let supi_frame = self.handle_res_with_suci(&res_star, &suci)?;
                transport.send(supi_frame.clone())?;
                match supi_frame {
                    Frame::Supi(supi) => Ok(Some(supi)),
                    _ => unreachable!("handle_res_with_suci always returns Frame::Supi"),
                }
            }
            Frame::SyncFailureWithContext { auts, r, suci } => {
                self.handle_sync_failure(&auts, &r, &suci)?;
                Ok(None)
            }
            _ => Err(ProtocolError::ProtocolViolation {
                context: "expected ResWithSuci or SyncFailureWithContext",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscriber_store::{InMemorySubscriberStore, SubscriberRecord};
    use aka_crypto::primitives::f1_star;
    use aka_crypto::{EciesSuciCipher, Key};
    use rand::{rngs::StdRng, SeedableRng};

    /// Spec §8 scenario 2: a verified `AUTS` must resynchronize `SQN_HN` to
    /// `xSQN_UE + 1`, observable through the `SQN_HN` baked into the next
    /// challenge this home network issues for the same subscriber.
    #[test]
    fn sync_failure_resynchronizes_sqn_hn_to_xsqn_ue_plus_one() {
        let mut rng = StdRng::seed_from_u64(3);
        let (sk_hn, pk_hn) = ecies::utils::generate_keypair();
        let cipher = EciesSuciCipher;
        let k = Key::fixed_test_vector();

        let mut store = InMemorySubscriberStore::new();
        store.insert(SubscriberRecord {
            supi: "supi".to_string(),
            k: k.clone(),
            sqn_hn: 100,
        });
        let hn = HomeNetwork::new(sk_hn.serialize().to_vec(), cipher, store);

        let suci = cipher.encrypt(&pk_hn.serialize(), "supi").unwrap();
        let (r, _autn) = match hn.handle_suci_and_sname(&suci, "sname_x", &mut rng).unwrap() {
            Frame::Challenge { r, autn, .. } => (r, autn),
            other => panic!("expected Challenge, got {other:?}"),
        };

        // The UE replays this exact (R, AUTN) with SQN_UE already at xSQN_HN
        // (100), so it reports Sync_Failure with AUTS built for SQN_UE = 100.
        let xsqn_ue = 100u64;
        let ak_star = f5_star(k.as_bytes(), &r);
        let conc_star = xor(&sqn_to_le_bytes(xsqn_ue), &ak_star);
        let macs = f1_star(k.as_bytes(), xsqn_ue, &r);
        let auts = Auts { conc_star, macs };

        hn.handle_sync_failure(&auts, &r, &suci).unwrap();

        // SQN_HN := xSQN_UE + 1. Confirm it by decoding the CONC of the next
        // issued challenge for the same subscriber.
        let suci2 = cipher.encrypt(&pk_hn.serialize(), "supi").unwrap();
        let next_sqn_hn = match hn.handle_suci_and_sname(&suci2, "sname_y", &mut rng).unwrap() {
            Frame::Challenge { r, autn, .. } => {
                let ak = f5(k.as_bytes(), &r);
                let xsqn_bytes = xor(&autn.conc, &ak);
                sqn_from_truncated_le_bytes(&xsqn_bytes).unwrap()
            }
            other => panic!("expected Challenge, got {other:?}"),
        };
        assert_eq!(next_sqn_hn, xsqn_ue + 1);
    }

    /// A `Sync_Failure` is rejected, not acted on, when `AUTS` was built with
    /// the wrong key (the MAC check inside `handle_sync_failure` fails, even
    /// though `CONC*` still decodes to a well-formed `SQN`).
    #[test]
    fn sync_failure_with_bad_macs_is_rejected() {
        let mut rng = StdRng::seed_from_u64(4);
        let (sk_hn, pk_hn) = ecies::utils::generate_keypair();
        let cipher = EciesSuciCipher;
        let k = Key::fixed_test_vector();
        let wrong_k = Key::from_bytes(vec![0xabu8; k.as_bytes().len()]);

        let mut store = InMemorySubscriberStore::new();
        store.insert(SubscriberRecord {
            supi: "supi".to_string(),
            k: k.clone(),
            sqn_hn: 100,
        });
        let hn = HomeNetwork::new(sk_hn.serialize().to_vec(), cipher, store);

        let suci = cipher.encrypt(&pk_hn.serialize(), "supi").unwrap();
        let r = match hn.handle_suci_and_sname(&suci, "sname_x", &mut rng).unwrap() {
            Frame::Challenge { r, .. } => r,
            other => panic!("expected Challenge, got {other:?}"),
        };

        let xsqn_ue = 100u64;
        let ak_star = f5_star(k.as_bytes(), &r);
        let conc_star = xor(&sqn_to_le_bytes(xsqn_ue), &ak_star);
        let macs = f1_star(wrong_k.as_bytes(), xsqn_ue, &r);
        let auts = Auts { conc_star, macs };

        let result = hn.handle_sync_failure(&auts, &r, &suci);
        assert!(matches!(result, Err(ProtocolError::ResyncReject)));
    }
}
