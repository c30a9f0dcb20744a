mod error;
mod router;
mod user;

pub use error::{ErrorResponse, IntoResponseError};
pub use router::{user_records_router, user_records_router_no_trace};

// Re-export what applications need to open the store and mount the router
pub use user_records::{
    DataStoreConfig, DataStoreType, StatusMessage, USERS_ROUTE_PREFIX, User, UserRequest,
    UserStore, init, validate_route_prefix,
};
