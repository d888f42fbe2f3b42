//! # gnr-dbml-core
//!
//! Data model for the Genropy-model-to-DBML converter.
//!
//! This crate defines the structured records produced by extraction
//! (`TableDef`, `ColumnDef`, `RelationDef`), the system-field
//! configuration with its documented defaults (`SysFields`), and the
//! fixed data-type code translation table (`dtype`).
//!
//! It contains no I/O and no parsing; see `gnr-dbml-extract` for the
//! pipeline that builds these values from model-file text.

pub mod dtype;
pub mod types;
