//! Insertion-ordered string dictionary with namespaced storage keys and a
//! functional traversal API (`map`, `filter`, `reduce`, ...).
//!
//! ```
//! use dict::Dict;
//!
//! let d = Dict::from_entries([("a", 1), ("b", 2)]).unwrap();
//! let big = d.filter(|v, _, _| *v > 1);
//! assert_eq!(big.keys(), vec!["b"]);
//! ```

pub mod errors;
pub mod key;
pub mod namespace;
mod dict;
mod serde_impl;

pub use dict::{Dict, Iter};
pub use errors::DictError;
pub use key::DictKey;
