// Shared support modules

pub mod tracing;

pub use self::tracing::TracingLevel;
