//! Primitive cryptographic functions for the classical AKA challenge/response
//! exchange: MAC (`f1`/`f1*`), anonymity key (`f5`/`f5*`), the ANSI X9.63
//! concatenation KDF, and the small helpers built on top of it.

use crate::error::{CryptoError, Result};
use rand::{CryptoRng, RngCore};
use sha2::{Digest as Sha2Digest, Sha256};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest as Sha3Digest, Sha3_256, Shake256};

/// Width, in bytes, of `SQN_HN`/`SQN_UE` and (by construction) of `K` in the
/// reference test vector. Implementations that do not need byte-for-byte
/// interop with that reference may use a narrower width; this one keeps it.
pub const SQN_WIDTH: usize = 256;

/// Output width of `f1`/`f1*`, `f5`/`f5*`, `RES*`/`XRES*`, `HXRES*` and `K_SEAF`.
pub const DIGEST_WIDTH: usize = 32;

/// Draws `n` cryptographically random bytes from an OS-seeded RNG.
pub fn rand_bytes<R: RngCore + CryptoRng>(rng: &mut R, n: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n];
    rng.fill_bytes(&mut buf);
    buf
}

/// Serializes a sequence number as a 256-byte little-endian wire value.
pub fn sqn_to_le_bytes(sqn: u64) -> [u8; SQN_WIDTH] {
    let mut out = [0u8; SQN_WIDTH];
    out[..8].copy_from_slice(&sqn.to_le_bytes());
    out
}

/// `f1(K, SQN, R) = SHA3-256(K || SQN_LE256 || R)`, the AKA MAC function.
///
/// `f1*` is the identical construction under a distinct name, used only for
/// the resync token so call sites read with the right symbolic role.
pub fn f1(k: &[u8], sqn: u64, r: &[u8]) -> [u8; DIGEST_WIDTH] {
    let mut hasher = Sha3_256::new();
    hasher.update(k);
    hasher.update(sqn_to_le_bytes(sqn));
    hasher.update(r);
    hasher.finalize().into()
}

/// `f1*` — see [`f1`].
pub fn f1_star(k: &[u8], sqn: u64, r: &[u8]) -> [u8; DIGEST_WIDTH] {
    f1(k, sqn, r)
}

/// `f5(K, R) = SHAKE-256(K || R)` squeezed to 32 bytes, the AKA anonymity key.
///
/// `f5*` is the identical construction, named separately for the resync path.
pub fn f5(k: &[u8], r: &[u8]) -> [u8; DIGEST_WIDTH] {
    let mut hasher = Shake256::default();
    hasher.update(k);
    hasher.update(r);
    let mut reader = hasher.finalize_xof();
    let mut out = [0u8; DIGEST_WIDTH];
    reader.read(&mut out);
    out
}

/// `f5*` — see [`f5`].
pub fn f5_star(k: &[u8], r: &[u8]) -> [u8; DIGEST_WIDTH] {
    f5(k, r)
}

/// Bytewise XOR, truncating to the shorter operand (matches the reference's
/// `zip`-based combination of `K` and `R` before the KDF, and of the 256-byte
/// SQN against the 32-byte anonymity key in `CONC`/`CONC*`).
pub fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

/// ANSI X9.63 concatenation KDF over SHA-256 (NIST SP 800-56A §5.8.1's
/// single-hash form): derives `length` bytes from `z` and `shared_info` by
/// hashing `z || be32(counter) || shared_info` once per needed block and
/// concatenating, then truncating to `length`.
///
/// Every call site in this system asks for exactly one 32-byte block, so a
/// single counter iteration (`counter = 1`) always suffices.
fn x963_kdf(z: &[u8], shared_info: &[u8], length: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(length);
    let mut counter: u32 = 1;
    while out.len() < length {
        let mut hasher = Sha256::new();
        hasher.update(z);
        hasher.update(counter.to_be_bytes());
        hasher.update(shared_info);
        out.extend_from_slice(&hasher.finalize());
        counter += 1;
    }
    out.truncate(length);
    out
}

/// `KDF(K, R, info) = X9.63-KDF(SHA-256, length = 32, shared_info = K XOR R,
/// input = info)`.
pub fn kdf(k: &[u8], r: &[u8], info: &[u8]) -> [u8; DIGEST_WIDTH] {
    let shared_info = xor(k, r);
    let derived = x963_kdf(info, &shared_info, DIGEST_WIDTH);
    let mut out = [0u8; DIGEST_WIDTH];
    out.copy_from_slice(&derived);
    out
}

/// `challenge(K, R, sname) = KDF(K, R, sname)`, producing `RES*`/`XRES*`.
pub fn challenge(k: &[u8], r: &[u8], sname: &str) -> [u8; DIGEST_WIDTH] {
    kdf(k, r, sname.as_bytes())
}

/// `KeySeed(K, R, SQN, sname)`: as [`kdf`] but with the salt augmented by the
/// sequence number, `shared_info = SQN_LE256 XOR K XOR R`.
pub fn key_seed(k: &[u8], r: &[u8], sqn: u64, sname: &str) -> [u8; DIGEST_WIDTH] {
    let sqn_bytes = sqn_to_le_bytes(sqn);
    let salt = xor(&sqn_bytes, &xor(k, r));
    let derived = x963_kdf(sname.as_bytes(), &salt, DIGEST_WIDTH);
    let mut out = [0u8; DIGEST_WIDTH];
    out.copy_from_slice(&derived);
    out
}

/// `sha256_pair(R, RES*) = SHA-256(R || RES*)`, producing `HXRES*`.
pub fn sha256_pair(r: &[u8], res_star: &[u8]) -> [u8; DIGEST_WIDTH] {
    let mut hasher = Sha256::new();
    hasher.update(r);
    hasher.update(res_star);
    hasher.finalize().into()
}

/// Recovers a little-endian SQN from its 256-byte wire representation. Only
/// the low 8 bytes carry a value this system's counters can reach; a value
/// overflowing `u64` surfaces as `CryptoShape`, since the wire format (§4.2 of
/// the spec this core implements) never produces one.
pub fn sqn_from_le_bytes(bytes: &[u8]) -> Result<u64> {
    if bytes.len() != SQN_WIDTH {
        return Err(CryptoError::CryptoShape {
            context: "sqn_from_le_bytes: expected 256-byte little-endian SQN",
        });
    }
    if bytes[8..].iter().any(|&b| b != 0) {
        return Err(CryptoError::CryptoShape {
            context: "sqn_from_le_bytes: SQN exceeds 64-bit range",
        });
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    Ok(u64::from_le_bytes(buf))
}

/// Recovers a little-endian SQN from a CONC-width (32-byte) XOR result, as
/// opposed to [`sqn_from_le_bytes`]'s full 256-byte wire width. `CONC`/
/// `CONC*` are produced by XORing the 256-byte SQN against a 32-byte
/// anonymity key; truncating to 32 bytes loses nothing, since every
/// supported SQN value fits in the low 8 bytes and the anonymity key never
/// extends past byte 32.
pub fn sqn_from_truncated_le_bytes(bytes: &[u8]) -> Result<u64> {
    if bytes.len() < 8 {
        return Err(CryptoError::CryptoShape {
            context: "sqn_from_truncated_le_bytes: fewer than 8 bytes",
        });
    }
    if bytes[8..].iter().any(|&b| b != 0) {
        return Err(CryptoError::CryptoShape {
            context: "sqn_from_truncated_le_bytes: SQN exceeds 64-bit range",
        });
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    Ok(u64::from_le_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn fixed_test_key() -> Vec<u8> {
        crate::Key::fixed_test_vector().into_bytes()
    }

    #[test]
    fn f1_is_deterministic_and_sensitive_to_input() {
        let k = fixed_test_key();
        let r = vec![7u8; DIGEST_WIDTH];
        let a = f1(&k, 100, &r);
        let b = f1(&k, 100, &r);
        assert_eq!(a, b);
        let c = f1(&k, 101, &r);
        assert_ne!(a, c);
    }

    #[test]
    fn f5_output_is_32_bytes_and_deterministic() {
        let k = fixed_test_key();
        let mut rng = StdRng::seed_from_u64(0);
        let r = rand_bytes(&mut rng, SQN_WIDTH);
        let a = f5(&k, &r);
        let b = f5(&k, &r);
        assert_eq!(a.len(), DIGEST_WIDTH);
        assert_eq!(a, b);
    }

    #[test]
    fn xor_truncates_to_shorter_operand() {
        let a = [0xffu8; 4];
        let b = [0x0fu8; 2];
        assert_eq!(xor(&a, &b), vec![0xf0, 0xf0]);
    }

    #[test]
    fn sqn_roundtrips_through_le_bytes() {
        let mut bytes = [0u8; SQN_WIDTH];
        bytes[..8].copy_from_slice(&12345u64.to_le_bytes());
        assert_eq!(sqn_from_le_bytes(&bytes).unwrap(), 12345);
    }

    #[test]
    fn sqn_rejects_overflowing_wire_value() {
        let mut bytes = [0u8; SQN_WIDTH];
        bytes[250] = 1;
        assert!(sqn_from_le_bytes(&bytes).is_err());
    }

    #[test]
    fn sqn_roundtrips_through_conc_width_xor() {
        let k = fixed_test_key();
        let r = vec![3u8; SQN_WIDTH];
        let sqn_hn = 100u64;
        let ak = f5(&k, &r);
        let conc = xor(&sqn_to_le_bytes(sqn_hn), &ak);
        let recovered = xor(&conc, &ak);
        assert_eq!(sqn_from_truncated_le_bytes(&recovered).unwrap(), sqn_hn);
    }
}
