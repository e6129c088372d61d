pub mod error;
pub mod models;
pub mod retention_policy;
pub mod service;
pub mod store;

pub use error::{CoreError, Result};
pub use models::user_profile::UserProfile;
pub use retention_policy::RetentionPolicy;
pub use service::NotificationService;
pub use store::memory_profile_store::MemoryProfileStore;
pub use store::profile_store::{ProfileStore, SharedProfile};
