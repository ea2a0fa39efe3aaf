//! Domain types for the portfolio content API.
//!
//! Holds the validated schemas stored in the document store, the error
//! taxonomy shared by the other crates, and the fixed demo / placeholder
//! content. Nothing in here touches I/O.

pub mod content;
pub mod error;
pub mod schema;
pub mod types;
