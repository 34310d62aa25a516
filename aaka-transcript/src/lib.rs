//! Fiat-Shamir transcript and pairing-group byte glue shared by the BB and
//! PS anonymous credential schemes and the authenticated key exchange.

pub mod challenge;
pub mod group;

pub use challenge::{challenge, Elem};
pub use group::{canonical_bytes, G1Affine, G2Affine, Gt, Scalar, G1, G2};
