pub mod extractors;
pub mod messages;
pub mod notify;
pub mod subscription;
