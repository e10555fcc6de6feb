//! Miscellaneous components used in the library.

mod cancellation;
pub use cancellation::CancellationToken;

mod label;
pub use label::LabelType;
