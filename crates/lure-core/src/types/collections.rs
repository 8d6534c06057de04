//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec optimized for child node lists (usually <8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
