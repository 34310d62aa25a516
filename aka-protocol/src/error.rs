use core::fmt;

/// Errors that terminate an AKA session. `MacFailure` and `SyncFailure` are
/// in-protocol signals carried as [`crate::frame::Frame`] variants, not
/// raised through this type; everything else aborts the run.
#[derive(Debug)]
pub enum ProtocolError {
    IdentityReject,
    ResMismatch,
    ResyncReject,
    ProtocolViolation { context: &'static str },
    TransportClosed,
    Crypto(aka_crypto::CryptoError),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::IdentityReject => {
                write!(f, "SUCI decryption failed or SUPI is not recognized")
            }
            ProtocolError::ResMismatch => write!(f, "RES* did not match the expected response"),
            ProtocolError::ResyncReject => write!(f, "AUTS failed verification during resync"),
            ProtocolError::ProtocolViolation { context } => {
                write!(f, "protocol violation: {context}")
            }
            ProtocolError::TransportClosed => write!(f, "peer disconnected mid-session"),
            ProtocolError::Crypto(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<aka_crypto::CryptoError> for ProtocolError {
    fn from(e: aka_crypto::CryptoError) -> Self {
        ProtocolError::Crypto(e)
    }
}

pub type Result<T> = core::result::Result<T, ProtocolError>;
