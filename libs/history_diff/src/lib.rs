//! Turns the versions of an element into change rows: one row per
//! attribute, tag or member, one classified cell per version.
//!
//! Every cell compares the value of a version to the value of the version
//! before it. The first version is compared against nothing.
//!
//! | previous | current           | class        |
//! |----------|-------------------|--------------|
//! | absent   | absent            | `notpresent` |
//! | absent   | present           | `new`        |
//! | present  | absent            | `removed`    |
//! | present  | present, differs  | `changed`    |
//! | present  | present, equal    | `unchanged`  |

pub mod class;
pub mod link;
pub mod row;
pub mod table;

#[doc(hidden)]
#[cfg(test)]
mod test;

#[doc(inline)]
pub use class::ChangeClass;
#[doc(inline)]
pub use link::{Link, Links};
#[doc(inline)]
pub use row::{Cell, ChangeRow, change_row};
#[doc(inline)]
pub use table::{HistoryTable, VersionHeader};
