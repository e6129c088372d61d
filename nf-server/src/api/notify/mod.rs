pub mod deliver_response;
pub mod notify;
