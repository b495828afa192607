/// Remote post source
///
/// One fetch is issued when the application starts; its completion comes
/// back through the message loop. A failed fetch simply leaves the post
/// list empty, so the error type only needs to be loggable and cheap to
/// clone into a message.

use thiserror::Error;

use crate::state::posts::Post;

/// Default endpoint serving the post list.
pub const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Why a fetch produced no posts.
///
/// `reqwest::Error` is not `Clone`, so the cause is flattened to a string
/// to let the error ride inside an application message.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

/// Fetch the full post list from the remote source.
pub async fn fetch_posts(url: String) -> Result<Vec<Post>, FetchError> {
    let response = reqwest::get(&url).await?;
    let posts = response.error_for_status()?.json::<Vec<Post>>().await?;
    Ok(posts)
}
