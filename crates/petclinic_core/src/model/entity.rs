//! Identifier capability shared by every stored record.

/// Numeric identifier assigned by a keyed store on first save.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = u64;

/// Capability contract for records held in a keyed store.
///
/// A store only needs to read and assign the identifier; everything else
/// about the record is opaque to it.
pub trait Entity: Clone + Send + 'static {
    /// Stable record kind used in log events and error messages.
    const KIND: &'static str;

    /// Returns the assigned identifier, or `None` before the first save.
    fn id(&self) -> Option<EntityId>;

    /// Assigns the identifier. Called by the store only.
    fn set_id(&mut self, id: EntityId);

    /// Returns whether this record has been saved at least once.
    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}
