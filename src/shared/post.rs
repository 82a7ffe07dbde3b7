/**
 * Post Endpoint Types
 *
 * Request bodies for the `/post` endpoints and the plain message body used
 * when a post lookup finds nothing.
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::validate_title;

/// Create post request
///
/// `POST /post/` - the author is always the caller, never part of the body.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_title(&self.title)
    }
}

/// A body holding only a human-readable message
///
/// `GET /post/{id}` answers 200 with this body when the post does not exist.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
