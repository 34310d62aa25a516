//! The Boneh-Boyen-style (BB) anonymous credential scheme: issuance with a
//! ZK proof of well-formedness, randomized selective showing bound to an
//! authenticated key exchange, verifier-side ZK verification, LEA tracing
//! and revocation-list judging.

pub mod credential;
pub mod issuance;
pub mod show;
pub mod trace;

pub use credential::{AnonCredential, Credential};
pub use issuance::{cred_issue, cred_ver, verify_relation1, IssuanceProof};
pub use show::{acred_ver, cred_show, verify_relation2, ShowProof};
pub use trace::{judge, trace};
