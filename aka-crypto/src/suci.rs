//! SUCI concealment: `SUCI := ECIES.Encrypt(pk_HN, SUPI)`.
//!
//! This is an external collaborator from the point of view of the AKA
//! protocol core — the state machine only ever calls through [`SuciCipher`].
//! [`EciesSuciCipher`] is one concrete binding (secp256k1 ECIES with an
//! authenticated symmetric layer, matching the reference's use of the
//! Python `ecies` package) provided so the protocol is exercisable end to
//! end without a real subscriber-management deployment behind it.

use crate::error::{CryptoError, Result};

/// Narrow interface the AKA core uses to conceal and recover the subscriber's
/// permanent identifier. A conforming deployment may swap in any
/// implementation that satisfies this contract.
pub trait SuciCipher {
    fn encrypt(&self, pk: &[u8], supi: &str) -> Result<Vec<u8>>;
    fn decrypt(&self, sk: &[u8], suci: &[u8]) -> Result<String>;
}

/// secp256k1 ECIES binding of [`SuciCipher`].
#[derive(Debug, Default, Clone, Copy)]
pub struct EciesSuciCipher;

impl SuciCipher for EciesSuciCipher {
    fn encrypt(&self, pk: &[u8], supi: &str) -> Result<Vec<u8>> {
        ecies::encrypt(pk, supi.as_bytes())
            .map_err(|e| CryptoError::SuciCipher(e.to_string()))
    }

    fn decrypt(&self, sk: &[u8], suci: &[u8]) -> Result<String> {
        let pt = ecies::decrypt(sk, suci).map_err(|e| CryptoError::SuciCipher(e.to_string()))?;
        String::from_utf8(pt).map_err(|e| CryptoError::SuciCipher(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecies::utils::generate_keypair;

    #[test]
    fn round_trips_supi_through_ecies() {
        let (sk, pk) = generate_keypair();
        let cipher = EciesSuciCipher;
        let suci = cipher
            .encrypt(&pk.serialize(), "imsi-001010000000001")
            .unwrap();
        let recovered = cipher.decrypt(&sk.serialize(), &suci).unwrap();
        assert_eq!(recovered, "imsi-001010000000001");
    }
}
