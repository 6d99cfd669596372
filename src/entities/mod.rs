mod event;
mod ride;
mod unicorn;

pub use event::{
    Authorizer, ProxyRequest, ProxyResponse, RequestContext, CORS_ALLOW_ORIGIN,
    INTERNAL_ERROR_MESSAGE,
};
pub use ride::Ride;
pub use unicorn::Unicorn;
