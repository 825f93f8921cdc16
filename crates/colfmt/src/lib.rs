//! # colfmt — aligned columnar text formatting
//!
//! `colfmt` formats two-dimensional textual data into visually aligned
//! columns, optionally with a heading line and a dash separator. It is the
//! library behind the `colfmt` command-line tool, and can be used directly
//! to pretty-print tabular data.
//!
//! ## Core Concepts
//!
//! - [`Model`]: the full table — an ordered collection of columns with a
//!   uniform row count, built from rows, columns, or a delimited stream
//! - [`Alignment`]: the justification rule (left/right/center) applied when
//!   a cell is padded to its column width
//! - [`AlignSpec`]: how alignments are assigned at construction time —
//!   broadcast one value, auto-detect per column, or pin each column
//! - [`Screen`]: renders the data rows as an aligned block
//! - [`Table`]: adds a heading line and an optional separator above the rows
//!
//! ## Quick Start
//!
//! ```rust
//! use colfmt::{AlignSpec, Model, Table};
//!
//! let rows = vec![
//!     vec!["Name", "Age"],
//!     vec!["Alice", "25"],
//!     vec!["Bob", "30"],
//! ];
//!
//! let model = Model::from_rows(rows, true, AlignSpec::Auto).unwrap();
//! let table = Table::new(&model);
//!
//! assert_eq!(
//!     table.to_string(),
//!     "Name   Age\n\
//!      -----  ---\n\
//!      Alice   25\n\
//!      Bob     30"
//! );
//! ```
//!
//! Models are immutable once built: [`Model::with_aligns`] returns a new
//! model with replaced alignments instead of mutating in place, and the
//! renderers only borrow the model, so a single model can be rendered any
//! number of times with different options.

mod align;
mod error;
mod model;
mod render;
mod util;

pub use align::{AlignSpec, Alignment};
pub use error::ModelError;
pub use model::{Column, Model};
pub use render::{Screen, Table, DEFAULT_SPACER};
pub use util::{display_width, pad, pad_center, pad_left, pad_right};
