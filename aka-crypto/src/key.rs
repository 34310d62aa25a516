use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The long-term symmetric secret shared between a subscriber and its home
/// network. An opaque byte string, at least 32 bytes; this core's reference
/// test vector is 256 bytes wide, matching the SQN fields it is XORed
/// against during KDF salt construction.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key(Vec<u8>);

impl Key {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R, len: usize) -> Self {
        Self(crate::primitives::rand_bytes(rng, len))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0.clone()
    }

    /// The fixed 256-byte key used by the reference's test fixtures (its
    /// `getKey()` with `macFailure=False`). Kept bit-for-bit so the end-to-end
    /// scenarios in this workspace's tests reproduce the reference's.
    pub fn fixed_test_vector() -> Self {
        #[rustfmt::skip]
        const K: [u8; 256] = [
            0xff, 0xdd, 0xb4, 0xc0, 0x09, 0x7a, 0x46, 0x73, 0x34, 0x83, 0xc5, 0x83,
            0x86, 0xb9, 0x64, 0xe9, 0x5d, 0x86, 0xd4, 0x32, 0xba, 0x69, 0xf2, 0x5a,
            0x32, 0xde, 0xd5, 0xf6, 0x82, 0x17, 0xed, 0xc2, 0x06, 0x44, 0x15, 0xf1,
            0x01, 0x75, 0xf2, 0x03, 0x7a, 0xa9, 0xbe, 0xf3, 0x0c, 0x41, 0x94, 0x3b,
            0x2e, 0xdb, 0x1e, 0x2f, 0x02, 0x2e, 0x9c, 0x7b, 0xc3, 0x9f, 0x26, 0x30,
            0x1d, 0x8d, 0xeb, 0x0f, 0x28, 0xbd, 0x53, 0x0f, 0x7d, 0x0d, 0x43, 0x93,
            0x72, 0xfd, 0x94, 0xa8, 0x42, 0x51, 0x23, 0x87, 0xff, 0xaa, 0xa3, 0xe7,
            0x50, 0xa9, 0xfb, 0xa6, 0x27, 0x93, 0xbc, 0xdb, 0x98, 0x2e, 0xec, 0x0b,
            0xce, 0x16, 0x56, 0xf1, 0x82, 0xc6, 0x77, 0xe2, 0xc0, 0xb5, 0xa7, 0xef,
            0x68, 0x86, 0xbc, 0x4f, 0xf7, 0x89, 0xaa, 0x54, 0xac, 0x1e, 0xfa, 0x8c,
            0x60, 0x55, 0xa9, 0x82, 0x79, 0x8f, 0xa6, 0xed, 0x7b, 0xf8, 0x16, 0x8f,
            0xb2, 0x9d, 0xde, 0x3c, 0xdb, 0x91, 0x91, 0xd0, 0x80, 0x51, 0xd1, 0x64,
            0x58, 0x40, 0xdd, 0xe2, 0xfc, 0x76, 0x23, 0xea, 0x35, 0xae, 0x6f, 0x64,
            0xba, 0xde, 0x69, 0xac, 0x3a, 0x11, 0x79, 0x6b, 0xeb, 0xe0, 0x3d, 0x56,
            0xe2, 0x40, 0x33, 0x02, 0x2f, 0x3d, 0x2d, 0x6c, 0xa3, 0xfa, 0xd2, 0xe2,
            0x7f, 0x05, 0x18, 0xd0, 0xe8, 0xa6, 0xfc, 0x1f, 0xc7, 0xbc, 0x74, 0x19,
            0x0f, 0xc3, 0xb7, 0x5f, 0x0b, 0xef, 0xa2, 0x2e, 0x95, 0x06, 0x6f, 0x04,
            0x2f, 0xd9, 0x9b, 0xd1, 0x89, 0x31, 0x5c, 0x9c, 0xbd, 0x3a, 0x1c, 0x4a,
            0x2b, 0x09, 0x6f, 0xc8, 0x19, 0x9d, 0x19, 0x88, 0x6d, 0x86, 0xbc, 0xd4,
            0x36, 0x03, 0xc1, 0x83, 0xae, 0x13, 0x61, 0x98, 0x3b, 0x13, 0x37, 0x76,
            0x11, 0xcf, 0x59, 0xe8, 0xa5, 0xfd, 0x74, 0x22, 0xe8, 0x4f, 0x46, 0x3b,
            0x05, 0x76, 0x3c, 0x40,
        ];
        Self(K.to_vec())
    }
}
