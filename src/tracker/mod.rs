pub mod content;
pub mod dashboard;
pub mod grader;
pub mod progress;
pub mod registry;
pub mod route;

pub use progress::{compute_progress_percent, Practice, ProgressTracker};
pub use registry::PlanRegistry;
pub use route::{parse_location, Location, Route};
