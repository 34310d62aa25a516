use ark_ec::pairing::Pairing;

/// Ordered sequence of traced tags. Append-only in normal operation;
/// read-mostly at judging time. Callers that need concurrent read/append
/// access should wrap this in `std::sync::RwLock` — the list itself carries
/// no locking, matching how plainly this workspace's data structures are
/// kept (locking is the caller's concern, not baked into the collection).
#[derive(Clone, Debug, Default)]
pub struct RevocationList<E: Pairing>(pub Vec<E::G2Affine>);

impl<E: Pairing> RevocationList<E> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, tag: E::G2Affine) {
        self.0.push(tag);
    }

    pub fn iter(&self) -> impl Iterator<Item = &E::G2Affine> {
        self.0.iter()
    }

    pub fn contains(&self, tag: &E::G2Affine) -> bool {
        self.0.iter().any(|t| t == tag)
    }
}
