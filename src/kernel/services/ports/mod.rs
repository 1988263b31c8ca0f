//! Service ports: data contracts and the on-disk record codec.

pub mod questions;
pub mod settings;

pub use questions::{
    format_record, parse_record, Result as StoreResult, StoreError, FIELD_SEPARATOR,
};
pub use settings::Settings;
