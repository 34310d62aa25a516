//! Common code shared across this workspace's crypto crates: try-and-increment
//! hashing to field elements and curve points.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod hashing_utils;

/// Concatenates any number of byte-slice-convertible arguments into a single
/// owned `Vec<u8>`, used to build domain-separated hash-to-curve inputs
/// without an intermediate `format!`/`String` allocation per call site.
#[macro_export]
macro_rules! concat_slices {
    ($($slice:expr),+ $(,)?) => {{
        let mut out = ark_std::vec::Vec::new();
        $(out.extend_from_slice(AsRef::<[u8]>::as_ref(&$slice));)+
        out
    }};
}
