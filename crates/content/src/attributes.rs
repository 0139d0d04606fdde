//! Concrete discretized attributes.
//!
//! Two shapes cover the observables the situation table is built from: a
//! bounded integer bucketed into bands (health, ammunition) and a boolean
//! flag (in cover or not). Both use interior mutability so the simulation
//! can mutate values through a shared `Arc<dyn Attribute>` while trackers
//! and builders read it, and both keep a dirty flag with clear-on-read
//! semantics for cheap external change notification.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use decision_tree::Attribute;

/// Ternary band labels for range attributes with three subdivisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// The label for a state value, if it is one of the three bands.
    pub fn from_state(state: usize) -> Option<Self> {
        match state {
            0 => Some(Self::Low),
            1 => Some(Self::Medium),
            2 => Some(Self::High),
            _ => None,
        }
    }
}

/// A bounded integer observable bucketed into `subdivisions` equal bands.
///
/// The raw value lives in `[0, max_value]` and starts full. State `s` covers
/// raw values `[s·max/k, (s+1)·max/k)`, except that the full value belongs
/// to the top state rather than opening a band of its own.
pub struct RangeAttribute {
    name: String,
    max_value: u32,
    subdivisions: usize,
    value: AtomicU32,
    dirty: AtomicBool,
}

impl RangeAttribute {
    /// Creates a range attribute at its maximum value.
    ///
    /// # Panics
    ///
    /// Panics if `max_value` or `subdivisions` is zero; such an attribute
    /// could never be observed or tested.
    pub fn new(name: impl Into<String>, max_value: u32, subdivisions: usize) -> Self {
        assert!(max_value > 0, "range attribute needs a positive maximum");
        assert!(subdivisions > 0, "range attribute needs at least one band");
        Self {
            name: name.into(),
            max_value,
            subdivisions,
            value: AtomicU32::new(max_value),
            dirty: AtomicBool::new(false),
        }
    }

    /// The current raw value.
    pub fn value(&self) -> u32 {
        self.value.load(Ordering::Relaxed)
    }

    /// The maximum raw value.
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Sets the raw value, clamped to `[0, max_value]`, and marks the
    /// attribute dirty.
    pub fn set(&self, value: u32) {
        self.value
            .store(value.min(self.max_value), Ordering::Relaxed);
        self.dirty.store(true, Ordering::Relaxed);
    }

    /// Shifts the raw value by `delta`, clamped to `[0, max_value]`, and
    /// marks the attribute dirty.
    pub fn change_by(&self, delta: i64) {
        let shifted = (self.value() as i64 + delta).clamp(0, self.max_value as i64);
        self.value.store(shifted as u32, Ordering::Relaxed);
        self.dirty.store(true, Ordering::Relaxed);
    }
}

impl Attribute for RangeAttribute {
    fn subdivision_count(&self) -> usize {
        self.subdivisions
    }

    fn current_state(&self) -> usize {
        let value = self.value();
        // The full value belongs to the top band.
        if value == self.max_value {
            return self.subdivisions - 1;
        }
        let band_width = self.max_value as f64 / self.subdivisions as f64;
        ((value as f64 / band_width) as usize).min(self.subdivisions - 1)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn state_name(&self, state: usize) -> String {
        if self.subdivisions == 3 {
            return Level::from_state(state)
                .map(|level| level.to_string())
                .unwrap_or_default();
        }
        if state < self.subdivisions {
            format!("{}/{}", state + 1, self.subdivisions)
        } else {
            String::new()
        }
    }

    fn take_changed(&self) -> bool {
        self.dirty.swap(false, Ordering::Relaxed)
    }
}

/// A boolean observable with two states: `0` = false, `1` = true.
pub struct FlagAttribute {
    name: String,
    flag: AtomicBool,
    dirty: AtomicBool,
}

impl FlagAttribute {
    /// Creates a flag attribute, initially false.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flag: AtomicBool::new(false),
            dirty: AtomicBool::new(false),
        }
    }

    /// The current flag value.
    pub fn get(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Sets the flag; marks the attribute dirty only on an actual
    /// transition.
    pub fn set(&self, flag: bool) {
        let previous = self.flag.swap(flag, Ordering::Relaxed);
        if previous != flag {
            self.dirty.store(true, Ordering::Relaxed);
        }
    }
}

impl Attribute for FlagAttribute {
    fn subdivision_count(&self) -> usize {
        2
    }

    fn current_state(&self) -> usize {
        self.get() as usize
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn state_name(&self, state: usize) -> String {
        match state {
            0 => "False".to_string(),
            1 => "True".to_string(),
            _ => String::new(),
        }
    }

    fn take_changed(&self) -> bool {
        self.dirty.swap(false, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_attribute_buckets_evenly() {
        let health = RangeAttribute::new("EnemyHealth", 100, 3);

        // Starts full: top band.
        assert_eq!(health.current_state(), 2);

        health.set(0);
        assert_eq!(health.current_state(), 0);
        health.set(33);
        assert_eq!(health.current_state(), 0);
        health.set(34);
        assert_eq!(health.current_state(), 1);
        health.set(66);
        assert_eq!(health.current_state(), 1);
        health.set(67);
        assert_eq!(health.current_state(), 2);
        health.set(100);
        assert_eq!(health.current_state(), 2);
    }

    #[test]
    fn change_by_clamps_to_bounds() {
        let ammo = RangeAttribute::new("PlayerAmmo", 80, 3);
        ammo.change_by(-200);
        assert_eq!(ammo.value(), 0);
        ammo.change_by(30);
        assert_eq!(ammo.value(), 30);
        ammo.change_by(1000);
        assert_eq!(ammo.value(), 80);
    }

    #[test]
    fn dirty_flag_clears_on_read() {
        let health = RangeAttribute::new("EnemyHealth", 100, 3);
        assert!(!health.take_changed());
        health.change_by(-10);
        assert!(health.take_changed());
        assert!(!health.take_changed());
    }

    #[test]
    fn ternary_range_uses_level_labels() {
        let health = RangeAttribute::new("EnemyHealth", 100, 3);
        assert_eq!(health.state_name(0), "Low");
        assert_eq!(health.state_name(1), "Medium");
        assert_eq!(health.state_name(2), "High");
        assert_eq!(health.state_name(9), "");
    }

    #[test]
    fn flag_attribute_tracks_transitions_only() {
        let cover = FlagAttribute::new("PlayerCover");
        assert_eq!(cover.current_state(), 0);

        cover.set(false);
        assert!(!cover.take_changed());

        cover.set(true);
        assert_eq!(cover.current_state(), 1);
        assert!(cover.take_changed());

        assert_eq!(cover.state_name(0), "False");
        assert_eq!(cover.state_name(1), "True");
        assert_eq!(cover.state_name(2), "");
    }
}
