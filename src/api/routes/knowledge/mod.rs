mod router;
pub use router::router;
pub mod public;
