//! src/routes/waiting_list/response.rs

use crate::error::Error;

pub const SUCCESS_MESSAGE: &str = "Successfully added to waiting list!";

/// Machine readable failure reason carried in the `error` member.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingEmail,
    InvalidEmail,
    DuplicateEmail,
    DatabaseError,
    InsertionError,
    StatsError,
    InternalError,
    /// Any code this build does not know about. Never sent by the server.
    #[serde(other)]
    Unknown,
}

/// Response envelope of the waiting list API.
///
/// `{success, message?, data?, error?}`; members that are `None` are left out.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
}

impl<T> ApiResponse<T> {
    /// Answer to a successful insertion.
    pub fn created(data: T) -> Self {
        Self {
            success: true,
            message: Some(SUCCESS_MESSAGE.to_string()),
            data: Some(data),
            error: None,
        }
    }

    /// Plain data answer, without a message.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: &Error) -> Self {
        Self {
            success: false,
            message: Some(error.to_string()),
            data: None,
            error: Some(error.code()),
        }
    }
}

pub type WaitingListResponse = ApiResponse<crate::domain::WaitingListEntry>;
