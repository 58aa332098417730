//! List container returned by bulk reads.

use std::slice;

use serde::{Deserialize, Serialize};

use crate::bindable::Object;
use crate::deepcopy::{DeepCopy, copy_sequence};
use crate::meta::{ListMeta, TypeMeta};

/// List-level metadata plus an ordered collection of records.
///
/// `items` is always serialized; an empty result is `[]`, never absent.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct List<T> {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            type_meta: TypeMeta::default(),
            metadata: ListMeta::default(),
            items: Vec::new(),
        }
    }
}

impl<T: Object> List<T> {
    /// A list of `items` with type metadata filled in for `T`.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            type_meta: TypeMeta::new(T::API_VERSION, &format!("{}List", T::KIND)),
            metadata: ListMeta::default(),
            items,
        }
    }
}

impl<T> List<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: DeepCopy> DeepCopy for List<T> {
    fn deep_copy_into(&self, out: &mut Self) {
        out.type_meta = self.type_meta.clone();
        out.metadata = self.metadata.clone();
        out.items = copy_sequence(&self.items);
    }
}

impl<T: DeepCopy> Clone for List<T> {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}
