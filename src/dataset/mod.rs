//! The traditions dataset: schema, file storage and consistency checks.
//!
//! ```text
//! data/traditions.json
//!   ↓  DatasetStore::load()
//! TraditionsDocument { traditions, dimensions, scale }
//!   ↓  validate()            (advisory)
//!   ↓  Analyzer / expand / sync
//! ```

pub mod dimensions;
pub mod error;
pub mod store;
pub mod tradition;
pub mod validate;

pub use dimensions::{ComplexityDimension, OutcomeDimension};
pub use error::DatasetError;
pub use store::{DatasetStore, DEFAULT_DATA_PATH};
pub use tradition::{
    standard_scale, ComplexityProfile, DimensionGroups, Effectiveness, Tradition,
    TraditionsDocument,
};
pub use validate::{validate, ValidationReport};
