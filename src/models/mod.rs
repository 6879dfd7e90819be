pub mod plan;
pub mod progress;
pub mod quiz;

pub use plan::*;
pub use progress::*;
pub use quiz::*;
