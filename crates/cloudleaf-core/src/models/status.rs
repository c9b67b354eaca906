//! Status enumerations for books and loan requests.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of book statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum BookStatus {
    /// Book can be borrowed
    #[default]
    Available,

    /// Book is with a borrower until its loan end date
    #[serde(rename = "On Loan")]
    OnLoan,

    /// Reserved for an owner-approval flow; never assigned
    Requested,
}

impl FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(BookStatus::Available),
            "on loan" | "onloan" | "on_loan" => Ok(BookStatus::OnLoan),
            "requested" => Ok(BookStatus::Requested),
            _ => Err(format!("Invalid book status: {s}")),
        }
    }
}

impl BookStatus {
    /// Human-readable label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::OnLoan => "On Loan",
            BookStatus::Requested => "Requested",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cloudleaf_core::models::BookStatus;
    ///
    /// assert_eq!(BookStatus::Available.with_icon(), "○ Available");
    /// assert_eq!(BookStatus::OnLoan.with_icon(), "➤ On Loan");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            BookStatus::Available => "○ Available",
            BookStatus::OnLoan => "➤ On Loan",
            BookStatus::Requested => "… Requested",
        }
    }
}

/// Lifecycle of a loan request.
///
/// Requests are approved at the moment they are made, so only `Approved`
/// is ever observed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Waiting for the owner
    Pending,

    /// Owner agreed; the book is on loan
    Approved,

    /// Owner refused
    Denied,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Denied => "denied",
        }
    }
}
