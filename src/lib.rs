#![deny(rustdoc::broken_intra_doc_links)] // error if there are broken intra-doc links
#![deny(rustdoc::invalid_html_tags)] // no broken html in docs
#![deny(rustdoc::invalid_rust_codeblocks)] // code blocks should not be broken

//! A growable list of `i32` values with a deterministic resize policy.
//!
//! [`IntList`] grows aggressively while small and conservatively once it holds
//! [`GROWTH_THRESHOLD`] elements or more, and gives memory back when removals leave it at most
//! half full. On top of that it offers the usual search and functional helpers.
//!
//! ```
//! use int_list::IntList;
//!
//! let mut list = IntList::new();
//! list.add(176)?;
//! list.add_all(&[22, 34435])?;
//! list.add_list(&IntList::from(vec![7]))?;
//!
//! assert_eq!("[176, 22, 34435, 7]", list.to_string());
//! assert_eq!(34640, list.reduce(|acc, x, _| acc + x, 0));
//! # Ok::<(), int_list::ListError>(())
//! ```

pub mod error;
pub mod int_list;

pub use error::ListError;
pub use int_list::{IntList, IntoIter, Iter, DEFAULT_CAPACITY, GROWTH_THRESHOLD};
