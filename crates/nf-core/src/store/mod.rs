pub mod memory_profile_store;
pub mod profile_store;
