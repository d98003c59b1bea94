//! # MetaModels Filter Engine
//!
//! MetaModels are user-defined content types: a named collection of records
//! whose fields are typed *attributes*. This crate implements the part of the
//! system that answers questions about those records: filter rules that turn
//! predicates into lists of matching item ids, and the bridge that fills a
//! form property's selectable options from its attribute.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Options Bridge (options.rs)                                │
//! │  - Handler in the host's options-request chain              │
//! │  - Turns attribute faults into a visible placeholder        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Filter Rules (filter/)                                     │
//! │  - Immutable predicates bound to one attribute              │
//! │  - Composites (and/or) over other rules                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Attribute Capabilities (attribute/)                        │
//! │  - Attribute / TranslatedAttribute traits                   │
//! │  - In-memory simple and translated implementations          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules never compare values themselves. The comparison semantics of each
//! field type live once, in its attribute implementation, and every rule
//! simply forwards its operands. Adding a field type means implementing
//! [`attribute::Attribute`], nothing in the rule layer changes.
//!
//! ## Errors
//!
//! Attribute faults travel unchanged through rules and conditions as
//! [`error::MetaModelsError`]. The options bridge is the only place that
//! catches them.
//!
//! ## Execution Model
//!
//! Everything is synchronous and single-threaded: a rule is built for one
//! request, evaluated, and dropped. Collections are shared with `Rc`, and
//! test doubles use `Cell`/`RefCell` for interior mutability.
//!
//! ## Module Overview
//!
//! - [`attribute`]: Capability traits and bundled attribute implementations
//! - [`filter`]: Filter rules and conditions
//! - [`options`]: Property options bridge and handler chain
//! - [`model`]: Core data types (`ItemId`, `FilterValue`, `MetaModel`, `Item`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod attribute;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod options;
