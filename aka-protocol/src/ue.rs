//! The subscriber (UE) role: `Idle -> AwaitChallenge -> Responded -> Closed`.

use crate::error::{ProtocolError, Result};
use crate::frame::{Autn, Auts, Frame};
use crate::transport::Transport;
use aka_crypto::primitives::{challenge, f1, f1_star, f5, f5_star, sqn_to_le_bytes, xor};
use aka_crypto::{sqn_from_truncated_le_bytes, Key, SuciCipher};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The outcome of one challenge/response round, mirroring step 6 of the
/// protocol exactly: a successful response, a MAC failure, or a sequence
/// desync requiring resync.
#[derive(Debug, PartialEq, Eq)]
pub enum UeOutcome {
    Responded { res_star: Vec<u8> },
    MacFailure,
    SyncFailure,
}

/// Subscriber-side ephemeral and long-term AKA state.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct UeAgent<C: SuciCipher> {
    #[zeroize(skip)]
    pub supi: String,
    pub k: Key,
    pub sqn_ue: u64,
    #[zeroize(skip)]
    pub pk_hn: Vec<u8>,
    #[zeroize(skip)]
    pub cipher: C,
}

impl<C: SuciCipher> UeAgent<C> {
    pub fn new(supi: String, k: Key, sqn_ue: u64, pk_hn: Vec<u8>, cipher: C) -> Self {
        Self {
            supi,
            k,
            sqn_ue,
            pk_hn,
            cipher,
        }
    }

    /// Step 1: `SUCI := ECIES.Encrypt(pk_HN, SUPI)`.
    #[tracing::instrument(skip(self))]
    pub fn encrypt_suci(&self) -> Result<Frame> {
        let suci = self.cipher.encrypt(&self.pk_hn, &self.supi)?;
        Ok(Frame::Suci(suci))
    }

    /// Step 6: verifies `AUTN`, advances `SQN_UE` on success, and reports
    /// the outcome as a protocol message rather than an error.
    #[tracing::instrument(skip(self, r, autn))]
    pub fn verify_challenge(&mut self, r: &[u8], autn: &Autn, sname: &str) -> UeOutcome {
        let ak_prime = f5(self.k.as_bytes(), r);
        let xsqn_bytes = xor(&autn.conc, &ak_prime);
        let xsqn_hn = match sqn_from_truncated_le_bytes(&xsqn_bytes) {
            Ok(sqn) => sqn,
            Err(_) => return UeOutcome::MacFailure,
        };
        let mac_prime = f1(self.k.as_bytes(), xsqn_hn, r);

        if mac_prime.as_slice() != autn.mac.as_slice() {
            return UeOutcome::MacFailure;
        }
        if self.sqn_ue < xsqn_hn {
            self.sqn_ue = xsqn_hn;
            let res_star = challenge(self.k.as_bytes(), r, sname).to_vec();
            UeOutcome::Responded { res_star }
        } else {
            UeOutcome::SyncFailure
        }
    }

    /// Builds the `AUTS` resync token for the current `SQN_UE`.
    pub fn build_auts(&self, r: &[u8]) -> Auts {
        let ak_star = f5_star(self.k.as_bytes(), r);
        let conc_star = xor(&sqn_to_le_bytes(self.sqn_ue), &ak_star);
        let macs = f1_star(self.k.as_bytes(), self.sqn_ue, r);
        Auts { conc_star, macs }
    }

    /// Runs one full session over `transport`: send `SUCI`, await the
    /// forwarded challenge, and answer with `RES*`, `Sync_Failure`, or
    /// `Mac_Failure`.
    pub fn run_session<T: Transport>(&mut self, transport: &mut T, sname: &str) -> Result<UeOutcome> {
        transport.send(self.encrypt_suci()?)?;
        let (r, autn) = match transport.recv()? {
            Frame::ChallengeForward { r, autn } => (r, autn),
            _ => {
                return Err(ProtocolError::ProtocolViolation {
                    context: "expected ChallengeForward",
                })
            }
        };
        let outcome = self.verify_challenge(&r, &autn, sname);
        let response = match &outcome {
            UeOutcome::Responded { res_star } => Frame::Res(res_star.clone()),
            UeOutcome::MacFailure => Frame::MacFailure,
            UeOutcome::SyncFailure => Frame::SyncFailure(self.build_auts(&r)),
        };
        transport.send(response)?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aka_crypto::EciesSuciCipher;

    fn agent(sqn_ue: u64) -> UeAgent<EciesSuciCipher> {
        UeAgent::new(
            "supi".to_string(),
            Key::fixed_test_vector(),
            sqn_ue,
            Vec::new(),
            EciesSuciCipher,
        )
    }

    fn honest_autn(k: &Key, sqn_hn: u64, r: &[u8]) -> Autn {
        let ak = f5(k.as_bytes(), r);
        let conc = xor(&sqn_to_le_bytes(sqn_hn), &ak);
        let mac = f1(k.as_bytes(), sqn_hn, r);
        Autn { conc, mac }
    }

    /// Spec §8 scenario 3: a one-bit corrupted MAC must be rejected without
    /// touching `SQN_UE`, regardless of how the `CONC` field decodes.
    #[test]
    fn tampered_mac_is_reported_as_mac_failure() {
        let mut ue = agent(99);
        let r = vec![7u8; 16];
        let mut autn = honest_autn(&ue.k.clone(), 100, &r);
        autn.mac[0] ^= 0x01;

        let outcome = ue.verify_challenge(&r, &autn, "sname_100");

        assert_eq!(outcome, UeOutcome::MacFailure);
        assert_eq!(ue.sqn_ue, 99);
    }

    /// Spec §8 scenario 2: replaying a challenge whose `xSQN_HN` is not
    /// strictly greater than `SQN_UE` must report `Sync_Failure` and leave
    /// `SQN_UE` untouched.
    #[test]
    fn replayed_challenge_triggers_sync_failure() {
        let mut ue = agent(100);
        let r = vec![9u8; 16];
        let autn = honest_autn(&ue.k.clone(), 100, &r);

        let outcome = ue.verify_challenge(&r, &autn, "sname_100");

        assert_eq!(outcome, UeOutcome::SyncFailure);
        assert_eq!(ue.sqn_ue, 100);
    }
}
