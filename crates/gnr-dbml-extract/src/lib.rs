//! # gnr-dbml-extract
//!
//! Extraction-and-generation pipeline for Genropy-style model files.
//!
//! This crate provides:
//! - A call-site scanner over the fixed declaration markers
//!   (`pkg.table(`, `.sysFields(`, the four column forms, `).relation(`)
//! - Balanced-parenthesis argument extraction
//! - Lenient key=value argument parsing
//! - An assembler that turns one file's text into a `TableDef`
//! - A renderer that serializes `TableDef` records into DBML markup
//!
//! # Example
//!
//! ```
//! let source = r#"
//! class Table(object):
//!     def config_db(self, pkg):
//!         tbl = pkg.table('orders', name_long='Orders')
//!         self.sysFields(tbl)
//!         tbl.column('total', dtype='N', validate_notnull='True')
//! "#;
//!
//! let table = gnr_dbml_extract::assemble(source).expect("assemble failed");
//! assert_eq!(table.name, "orders");
//!
//! let dbml = gnr_dbml_extract::render(&table);
//! assert!(dbml.contains("Table orders{"));
//! ```

pub mod args;
pub mod assembler;
pub mod brackets;
pub mod error;
pub mod renderer;
mod scan;

pub use assembler::{assemble, strip_comment_lines};
pub use error::{Construct, ExtractError};
pub use renderer::{render, render_all};
