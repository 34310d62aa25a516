//! The wire payloads carried across the AKA link, standing in for the
//! socket/marshaling layer this core treats as an external collaborator.

/// `AUTN = (CONC, MAC)`, the home network's authentication token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Autn {
    pub conc: Vec<u8>,
    pub mac: [u8; aka_crypto::DIGEST_WIDTH],
}

/// `AUTS = (CONC*, MACS)`, the subscriber's resynchronization token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Auts {
    pub conc_star: Vec<u8>,
    pub macs: [u8; aka_crypto::DIGEST_WIDTH],
}

/// A single frame on the AKA link. Variant names track the wire-tuple table:
/// one variant per payload shape a role ever sends or receives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    /// UE → SN.
    Suci(Vec<u8>),
    /// SN → HN.
    SuciAndSname { suci: Vec<u8>, sname: String },
    /// HN → SN.
    Challenge {
        r: Vec<u8>,
        autn: Autn,
        hxres_star: [u8; aka_crypto::DIGEST_WIDTH],
        k_seaf: [u8; aka_crypto::DIGEST_WIDTH],
    },
    /// SN → UE.
    ChallengeForward { r: Vec<u8>, autn: Autn },
    /// UE → SN, success path.
    Res(Vec<u8>),
    /// UE → SN, sequence-number desync path.
    SyncFailure(Auts),
    /// UE → SN, MAC-verification failure path.
    MacFailure,
    /// SN → HN, forwarding a successful `RES*`.
    ResWithSuci { res_star: Vec<u8>, suci: Vec<u8> },
    /// SN → HN, forwarding a `Sync_Failure` signal.
    SyncFailureWithContext {
        auts: Auts,
        r: Vec<u8>,
        suci: Vec<u8>,
    },
    /// HN → SN, the release of the subscriber's permanent identifier.
    Supi(String),
}
