pub mod message_list_response;
pub mod messages;
