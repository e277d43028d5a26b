//! Folds a flat, already-joined result set into nested parent rows.
//!
//! A join across a parent and a child table yields one row per child. The
//! query layer loads the parents separately, then hands both sets to
//! [`Populate`], which attaches each parent's children under an alias:
//!
//! ```
//! use rowfold::{Populate, ValueRecord};
//!
//! let parents = vec![ValueRecord::from([("id", 1)])];
//! let children = vec![
//!     ValueRecord::from([("pid", 1)]),
//!     ValueRecord::from([("pid", 2)]),
//! ];
//!
//! let rows = Populate::new("items", "id", "pid", "cid").fold(parents, &children);
//!
//! let items = rows[0]["items"].expect_list();
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].expect_record()["cid"], 1i64);
//! ```

mod populate;
pub use populate::{fold, Populate};

pub use rowfold_core::stmt::{self, Value, ValueRecord};
pub use rowfold_core::{Error, Result};
