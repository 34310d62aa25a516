use core::fmt;

/// Errors shared by both anonymous credential schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AakaError {
    /// `CredIssue` hit a non-invertible scalar (`isk[0] + m*isk[1] + pm*isk[2]
    /// == 0`); practically unreachable for random `m`, `pm` but must be
    /// checked rather than assumed away.
    DegenerateIssue,
    /// A zero-knowledge proof or pairing-equation check failed to verify.
    InvalidProof,
}

impl fmt::Display for AakaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AakaError::DegenerateIssue => write!(f, "credential issuance: non-invertible scalar"),
            AakaError::InvalidProof => write!(f, "zero-knowledge proof failed to verify"),
        }
    }
}

impl std::error::Error for AakaError {}

pub type Result<T> = core::result::Result<T, AakaError>;
