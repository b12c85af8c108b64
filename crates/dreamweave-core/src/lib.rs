mod error;
mod http_client;

pub use error::{ErrorBody, HttpError};
pub use http_client::http_client;
