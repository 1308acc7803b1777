//! Plain-text numeric tables.
//!
//! ```text
//!   time value error        # comment
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ format   │  RowFormat: delimiter, field count, kept columns
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐            ┌──────────┐
//!   │ reader   │  → columns │ writer   │  header + "{:7.4}\t{:7.4}" rows
//!   └──────────┘            └──────────┘
//! ```

pub mod format;
pub mod reader;
pub mod writer;

pub use format::{Delimiter, RowFormat};
pub use reader::{read_file_names, read_table2, read_table2_file, read_table3, read_table3_file};
pub use writer::{print_hist, print_table, write_hist, write_table};
