//! # tally-core
//!
//! Core types and the counter collection manager for the mineral tally.
//!
//! This crate defines the foundational types used across the other tally crates:
//! - [`Counter`]: one tally record, and [`CounterPatch`] for partial updates
//! - Descriptor types ([`Descriptor`], [`GrainSize`], [`Descriptors`])
//! - [`CounterManager`]: the ordered collection with persistence
//! - [`Store`]: the persistence contract, with [`MemoryStore`]
//! - Export/import ([`ExportSnapshot`], [`exchange::parse_import`])
//! - Configuration ([`TallyConfig`]) and the color [`palette`]
//! - Error hierarchy ([`TallyError`], [`ImportError`])

pub mod config;
pub mod counter;
pub mod descriptor;
pub mod error;
pub mod exchange;
pub mod manager;
pub mod palette;
pub mod store;

pub use config::TallyConfig;
pub use counter::{Counter, CounterId, CounterPatch};
pub use descriptor::{Descriptor, Descriptors, GrainSize, GrainSizeCategory};
pub use error::{ImportError, Result, TallyError};
pub use exchange::ExportSnapshot;
pub use manager::CounterManager;
pub use store::{MemoryStore, Store, STORAGE_KEY};
