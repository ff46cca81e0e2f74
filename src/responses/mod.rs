pub mod html;

pub use crate::errors::ResultResp;

pub use html::{asset_response, html_response, redirect_response};
