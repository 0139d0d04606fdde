//! Capability trait for discretized observables.
//!
//! An attribute is one observable state variable, discretized into a small
//! fixed number of subdivisions. The engine never inspects what an attribute
//! measures; it only needs the subdivision count, the current state, and
//! diagnostic names. Concrete attributes live outside this crate and are
//! shared by reference (`Arc<dyn Attribute>`) — injected explicitly, never
//! looked up ambiently.

/// A discretized observable with a finite, ordered set of states.
///
/// States are numbered `0..subdivision_count()`. The subdivision count and
/// name are immutable for the lifetime of one tree build; the current state
/// may change between builds as the underlying value moves.
pub trait Attribute: Send + Sync {
    /// Number of discrete states, always ≥ 1 for a usable attribute.
    ///
    /// The builder rejects attributes reporting 0 here.
    fn subdivision_count(&self) -> usize;

    /// The current discretized state, in `[0, subdivision_count())`.
    fn current_state(&self) -> usize;

    /// Identity for diagnostics and table files.
    fn name(&self) -> &str;

    /// Diagnostic label for a state value.
    ///
    /// There is no coverage contract: an unrecognized state may yield an
    /// empty or placeholder label.
    fn state_name(&self, state: usize) -> String;

    /// Reads and clears this attribute's dirty flag.
    ///
    /// Concrete attributes may set a flag on mutation for cheap external
    /// change notification. The default implementation reports no tracking.
    /// [`SituationTracker`](crate::SituationTracker) does not rely on this;
    /// its change detection is by full snapshot comparison.
    fn take_changed(&self) -> bool {
        false
    }
}
