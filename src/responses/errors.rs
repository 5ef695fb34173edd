use crate::errors::ServerError;
use astra::{Body, Response};
use http::header::{HeaderValue, CONTENT_TYPE, SET_COOKIE};
use http::StatusCode;

pub type ResultResp = Result<Response, ServerError>;

/// Last-resort page for errors that escaped the router, e.g. an unreachable
/// database. Built without the layout so it cannot fail itself.
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) | ServerError::Unauthorized(msg) => msg.clone(),
        ServerError::DbError(_) | ServerError::Storage(_) | ServerError::InternalError => {
            "Something went wrong on our side. Please try again.".to_string()
        }
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Error {status} | LUXE</title></head>
<body style="font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem;">
  <h1>Error {status}</h1>
  <p>{message}</p>
  <p><a href="/">Back to home</a></p>
</body>
</html>"#,
        message = maud::html! { (message) }.into_string(),
    );

    let mut resp = Response::new(Body::from(html));
    *resp.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    resp.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    resp
}

pub fn append_cookie(resp: &mut Response, cookie: &str) -> Result<(), ServerError> {
    let value = HeaderValue::from_str(cookie)
        .map_err(|e| ServerError::BadRequest(format!("invalid cookie header: {e}")))?;
    resp.headers_mut().append(SET_COOKIE, value);
    Ok(())
}
