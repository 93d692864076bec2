pub mod config;
pub mod order;
pub mod submission;

pub use config::AppConfig;
pub use order::{DeliveryType, OrderSubmission};
pub use submission::SubmissionResult;
