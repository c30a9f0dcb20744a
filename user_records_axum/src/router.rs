//! Router for the user record endpoints

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use user_records::UserStore;

/// Create the router for the user record endpoints
///
/// Mount it under [`USERS_ROUTE_PREFIX`](crate::USERS_ROUTE_PREFIX) to get:
/// - `GET    {prefix}` - list every user
/// - `GET    {prefix}/{user_id}` - fetch one user
/// - `POST   {prefix}/add` - insert a user
/// - `PUT    {prefix}/update` - overwrite a user
/// - `DELETE {prefix}/delete/{user_id}` - delete a user
pub fn user_records_router(store: UserStore) -> Router {
    user_records_router_no_trace(store).layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(true),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as [`user_records_router`] without the HTTP tracing middleware
///
/// Use this if you want to add your own tracing middleware.
pub fn user_records_router_no_trace(store: UserStore) -> Router {
    super::user::router(store)
}
