// crates/infra/src/persistence.rs
pub mod input_source;

pub use input_source::InputSource;
