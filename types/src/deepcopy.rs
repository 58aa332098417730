//! Structural deep copy.
//!
//! Every record, spec, status and list in this crate implements [`DeepCopy`]
//! explicitly, field by field, out of the small set of helpers below. A copy
//! never shares heap storage with its source, and absence is preserved at
//! every depth: `None` stays `None`, `Some(vec![])` stays `Some(vec![])`.
//!
//! Records implement `Clone` by delegating to [`DeepCopy::deep_copy`], so
//! there is exactly one copy routine per record type.

use std::collections::BTreeMap;

/// Copy contract for values handed across a snapshot boundary.
pub trait DeepCopy: Default {
    /// Overwrite `out` with an independent copy of `self`.
    ///
    /// Every field of `out` is replaced; nothing from its previous contents
    /// survives.
    fn deep_copy_into(&self, out: &mut Self);

    /// Allocate a new independent copy of `self`.
    #[must_use]
    fn deep_copy(&self) -> Self {
        let mut out = Self::default();
        self.deep_copy_into(&mut out);
        out
    }
}

/// Implements [`DeepCopy`] for types whose `Clone` already copies by value.
macro_rules! deep_copy_by_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::deepcopy::DeepCopy for $ty {
                fn deep_copy_into(&self, out: &mut Self) {
                    *out = self.clone();
                }
            }
        )+
    };
}

deep_copy_by_value!(bool, i32, i64, u32, u64, String);

// ── Generic helpers ──────────────────────────────────────────

/// Copy an optional value: absent stays absent, present is copied into a
/// fresh allocation.
#[must_use]
pub fn copy_optional<T: DeepCopy>(src: Option<&T>) -> Option<T> {
    src.map(DeepCopy::deep_copy)
}

/// Copy a sequence element-wise in source order into a new allocation of the
/// same length.
#[must_use]
pub fn copy_sequence<T: DeepCopy>(src: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(src.len());
    out.extend(src.iter().map(DeepCopy::deep_copy));
    out
}

/// Copy a mapping pair by pair into a new map. Values are deep-copied.
#[must_use]
pub fn copy_mapping<K, V>(src: &BTreeMap<K, V>) -> BTreeMap<K, V>
where
    K: Ord + Clone,
    V: DeepCopy,
{
    src.iter()
        .map(|(key, value)| (key.clone(), value.deep_copy()))
        .collect()
}

impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy_into(&self, out: &mut Self) {
        *out = copy_optional(self.as_ref());
    }
}

impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy_into(&self, out: &mut Self) {
        *out = copy_sequence(self);
    }
}

impl<K, V> DeepCopy for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: DeepCopy,
{
    fn deep_copy_into(&self, out: &mut Self) {
        *out = copy_mapping(self);
    }
}
