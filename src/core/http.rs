//! HTTP client construction for the stats service

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

const USER_AGENT: &str = concat!("mlb-stats/", env!("CARGO_PKG_VERSION"));

/// Build the client shared by every upstream call in a request.
///
/// No client-wide timeout is set; only the people search applies one.
pub fn build_http_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;
    Ok(client)
}
