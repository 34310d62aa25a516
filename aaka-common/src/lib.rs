//! Shared setup parameters, key generation and revocation-list plumbing used
//! by both the BB and PS anonymous credential schemes.

pub mod error;
pub mod keys;
pub mod revocation;
pub mod setup;

pub use error::AakaError;
pub use keys::{
    asym_key_gen, ikey_gen, lea_key_gen, AsymPublicKey, AsymSecretKey, IssuerPublicKey,
    IssuerSecretKey, LeaPublicKey, LeaSecretKey,
};
pub use revocation::RevocationList;
pub use setup::SetupParams;
