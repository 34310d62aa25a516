//! The serving network (SN) role: `AwaitSUCI -> ForwardingChallenge ->
//! AwaitResponse -> Closed`. SN never sees `K` or `SUPI` in clear; it only
//! relays frames and checks `HXRES*`.

use crate::error::{ProtocolError, Result};
use crate::frame::Frame;
use crate::transport::Transport;
use aka_crypto::primitives::sha256_pair;
use aka_crypto::DIGEST_WIDTH;

/// The outcome of one relayed session, from the serving network's point of
/// view.
#[derive(Debug, PartialEq, Eq)]
pub enum SnOutcome {
    Authenticated { supi: String, k_seaf: [u8; DIGEST_WIDTH] },
    MacFailure,
    Resynchronized,
}

pub struct ServingNetwork {
    pub sname: String,
}

impl ServingNetwork {
    pub fn new(sname: impl Into<String>) -> Self {
        Self { sname: sname.into() }
    }

    /// Relays a full session between a UE-side and an HN-side transport,
    /// implementing steps 2, 5, 7 and 8 of the protocol.
    #[tracing::instrument(skip(self, ue, hn))]
    pub fn run_session<U: Transport, H: Transport>(
        &self,
        ue: &mut U,
        hn: &mut H,
    ) -> Result<SnOutcome> {
        let suci = match ue.recv()? {
            Frame::Suci(suci) => suci,
            _ => {
                return Err(ProtocolError::ProtocolViolation {
                    context: "expected Suci from UE",
                })
            }
        };

        hn.send(Frame::SuciAndSname {
            suci: suci.clone(),
            sname: self.sname.clone(),
        })?;

        let (r, autn, hxres_star, k_seaf) = match hn.recv()? {
            Frame::Challenge {
                r,
                autn,
                hxres_star,
                k_seaf,
            } => (r, autn, hxres_star, k_seaf),
            _ => {
                return Err(ProtocolError::ProtocolViolation {
                    context: "expected Challenge from HN",
                })
            }
        };

        ue.send(Frame::ChallengeForward {
            r: r.clone(),
            autn,
        })?;

        match ue.recv()? {
            Frame::Res(res_star) => {
                if sha256_pair(&r, &res_star) != hxres_star {
                    return Err(ProtocolError::ResMismatch);
                }
                hn.send(Frame::ResWithSuci { res_star, suci })?;
                match hn.recv()? {
                    Frame::Supi(supi) => Ok(SnOutcome::Authenticated { supi, k_seaf }),
                    _ => Err(ProtocolError::ProtocolViolation {
                        context: "expected Supi from HN",
                    }),
                }
            }
            Frame::SyncFailure(auts) => {
                hn.send(Frame::SyncFailureWithContext { auts, r, suci })?;
                Ok(SnOutcome::Resynchronized)
            }
            Frame::MacFailure => {
                tracing::warn!("UE reported a MAC failure; ending session");
                Ok(SnOutcome::MacFailure)
            }
            _ => Err(ProtocolError::ProtocolViolation {
                context: "unexpected UE response",
            }),
        }
    }
}
