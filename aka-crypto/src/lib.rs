//! Primitive cryptographic functions for the 5G-style AKA challenge/response
//! protocol: the MAC and anonymity-key constructions, the X9.63 KDF used to
//! derive `RES*`/`XRES*`/`K_SEAF`, and the SUCI concealment boundary.

pub mod error;
mod key;
pub mod primitives;
pub mod suci;

pub use error::{CryptoError, Result};
pub use key::Key;
pub use primitives::{sqn_from_truncated_le_bytes, sqn_to_le_bytes, DIGEST_WIDTH, SQN_WIDTH};
pub use suci::{EciesSuciCipher, SuciCipher};
