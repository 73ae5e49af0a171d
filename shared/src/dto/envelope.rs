use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Envelope wrapping every backend response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Human-readable outcome; the backend sends `null` on some success paths.
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Message text, empty when the backend omitted it.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    /// Unwrap the payload of a successful response.
    pub fn into_data(self) -> Result<T, ClientError> {
        self.data
            .ok_or_else(|| ClientError::Decode("response carried no data".to_string()))
    }

    /// Same envelope with the payload dropped, for calls whose data is unused.
    pub fn without_data(self) -> ApiResponse<()> {
        ApiResponse {
            success: self.success,
            message: self.message,
            data: None,
        }
    }
}

/// One page of a paged listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageData<T> {
    pub total: u64,
    pub page: u32,
    pub size: u32,
    pub total_pages: u32,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

impl<T> PageData<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}
