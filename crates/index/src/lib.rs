//! combo-index: record resolution against the combo index sheet.
//!
//! Given a parsed query (a combo ordinal, or a tower pair, optionally
//! qualified by a map) this crate locates the matching row(s) in the
//! sheet and produces a display-ready record:
//!
//! - [`offset::find_header_row`] — discover the primary table's header
//!   row at runtime (its position shifts when rows are inserted above).
//! - [`primary`] — resolve ordinal or tower-pair queries to a row and
//!   extract it.
//! - [`overrides`] — resolve (number, map) against the sparse override
//!   table with its inherited-number runs.
//! - [`merge`] — combine primary and override records and prune fields
//!   the reply title already carries.
//!
//! Everything here runs per invocation with injected capabilities
//! (`&dyn SheetSource`); there is no shared state. Errors split into
//! user errors (rendered as replies) and structural errors (propagated),
//! see [`LookupError`].

pub mod error;
pub mod merge;
pub mod offset;
pub mod overrides;
pub mod primary;
pub mod record;
pub mod text;

pub use error::LookupError;
pub use merge::{merge, prune_for_display, QueryShape, STANDARD_MAP_FOOTER};
pub use record::{Field, Record};
