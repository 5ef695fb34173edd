pub mod errors;
pub mod html;

pub use errors::{append_cookie, error_to_response, ResultResp};
pub use html::{html_response_with_status, no_content, redirect};
