// File: crates/mynotes_push/src/doc.rs

#![cfg(feature = "openapi")]
use mynotes_common::models::{
    MessageResponse, PublicKeyResponse, PushSubscription, SendResponse, SubscriptionKeys,
    UnsubscribeRequest, UnsubscribeResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::subscribe_handler,
        crate::handlers::unsubscribe_handler,
        crate::handlers::send_handler,
        crate::handlers::vapid_key_handler,
    ),
    components(schemas(
        PushSubscription,
        SubscriptionKeys,
        MessageResponse,
        UnsubscribeRequest,
        UnsubscribeResponse,
        SendResponse,
        PublicKeyResponse
    )),
    tags(
        (name = "Push", description = "Web Push subscriptions and reminders")
    )
)]
pub struct PushApiDoc;
