//! Rental chat-room list state for the popup view.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::RentedRoom;

/// Rooms in which the inspected user has an active rental.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub rooms: Vec<RentedRoom>,
    pub loading: bool,
    pub error: Option<String>,
}
