use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use http::header::{CONTENT_TYPE, LOCATION};
use maud::Markup;
use tracing::error;

pub fn html_response_with_status(status: u16, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header(CONTENT_TYPE, mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .map_err(|e| {
            error!(error = %e, "could not build html response");
            ServerError::InternalError
        })
}

/// 302 to `location`. Every form post ends in one of these.
pub fn redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(302)
        .header(LOCATION, location)
        .body(Body::empty())
        .map_err(|e| {
            error!(error = %e, location, "could not build redirect");
            ServerError::InternalError
        })
}

pub fn no_content() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .body(Body::empty())
        .map_err(|e| {
            error!(error = %e, "could not build empty response");
            ServerError::InternalError
        })
}
