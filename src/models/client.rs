//! Agency clients and their booking records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Completed,
    Confirmed,
    Pending,
    Cancelled,
}

/// A client on the agency's books
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub total_bookings: u32,
    /// Lifetime spend in the agency's base currency
    pub total_spent: f64,
    pub last_booking: NaiveDate,
    pub preferences: Vec<String>,
    pub notes: String,
    /// Agent-assigned rating, 1-5
    pub rating: u8,
}

/// One historical booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub client_name: String,
    pub email: String,
    pub destination: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    /// Total amount in the agency's base currency
    pub total_amount: f64,
    pub status: BookingStatus,
    pub booking_date: NaiveDate,
    pub preferences: Vec<String>,
    pub notes: String,
    pub repeat_client: bool,
}
