use core::fmt;

/// Errors raised by the primitive cryptographic functions.
///
/// `CryptoShape` is the only failure mode a primitive can hit on its own;
/// everything else here belongs to the SUCI concealment boundary.
#[derive(Debug)]
pub enum CryptoError {
    /// Inputs whose lengths violate a primitive's contract (programmer error).
    CryptoShape { context: &'static str },
    /// The external ECIES collaborator rejected encryption or decryption.
    SuciCipher(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::CryptoShape { context } => {
                write!(f, "crypto shape violation in {context}")
            }
            CryptoError::SuciCipher(msg) => write!(f, "SUCI cipher failure: {msg}"),
        }
    }
}

impl std::error::Error for CryptoError {}

pub type Result<T> = core::result::Result<T, CryptoError>;
