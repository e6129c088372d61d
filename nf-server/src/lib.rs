pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    extractors::identity::Identity,
    messages::{
        message_list_response::MessageListResponse,
        messages::list_messages,
    },
    notify::{
        deliver_response::DeliverResponse,
        notify::deliver_notification,
    },
    subscription::{
        subscription::{get_subscription, subscribe, unsubscribe},
        subscription_response::SubscriptionResponse,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
