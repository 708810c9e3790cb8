//! In-memory back-office data: supplier contracts and the client book
//!
//! Both stores are seeded at startup and read-only afterwards; the only
//! durable state in the service is the exchange-rate snapshot.

pub mod seed;

use serde::{Deserialize, Serialize};

use crate::models::{BookingRecord, BookingStatus, Client, ContractTerm, HotelContract, RoomType};
use chrono::NaiveDate;

/// A term hit from a cross-contract search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermMatch {
    pub hotel_name: String,
    pub term: ContractTerm,
}

/// The agency's supplier contracts
#[derive(Debug, Clone, Default)]
pub struct ContractDirectory {
    contracts: Vec<HotelContract>,
}

impl ContractDirectory {
    #[must_use]
    pub fn with_contracts(contracts: Vec<HotelContract>) -> Self {
        Self { contracts }
    }

    /// The directory seeded with the agency's contracted lodges.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_contracts(seed::contracts())
    }

    pub fn contracts(&self) -> &[HotelContract] {
        &self.contracts
    }

    /// Look a contract up by hotel name, case-insensitively.
    #[must_use]
    pub fn find(&self, hotel_name: &str) -> Option<&HotelContract> {
        self.contracts
            .iter()
            .find(|c| c.hotel_name.eq_ignore_ascii_case(hotel_name))
    }

    /// The contracted rate for a hotel on a date, picked from the seasonal
    /// rate card.
    #[must_use]
    pub fn current_rate(&self, hotel_name: &str, date: NaiveDate, room_type: RoomType) -> Option<f64> {
        self.find(hotel_name)?.rate_on(date, room_type)
    }

    /// Search terms across every contract. `query` matches the term text
    /// case-insensitively; `category` narrows to one category. No filters
    /// returns every term.
    #[must_use]
    pub fn search_terms(&self, query: Option<&str>, category: Option<&str>) -> Vec<TermMatch> {
        let query = query.map(str::to_lowercase);
        self.contracts
            .iter()
            .flat_map(|contract| {
                contract
                    .terms
                    .iter()
                    .filter(|term| {
                        category.is_none_or(|c| term.category.eq_ignore_ascii_case(c))
                    })
                    .filter(|term| {
                        query
                            .as_deref()
                            .is_none_or(|q| term.text.to_lowercase().contains(q))
                    })
                    .map(|term| TermMatch {
                        hotel_name: contract.hotel_name.clone(),
                        term: term.clone(),
                    })
            })
            .collect()
    }
}

/// One page of a filtered booking list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingPage {
    pub bookings: Vec<BookingRecord>,
    /// 1-based page number the caller asked for
    pub page: usize,
    pub total_pages: usize,
    pub total_bookings: usize,
}

/// Clients and their booking history
#[derive(Debug, Clone, Default)]
pub struct ClientBook {
    clients: Vec<Client>,
    bookings: Vec<BookingRecord>,
}

impl ClientBook {
    #[must_use]
    pub fn new(clients: Vec<Client>, bookings: Vec<BookingRecord>) -> Self {
        Self { clients, bookings }
    }

    /// The book seeded with the agency's client base.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::clients(), seed::bookings())
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    #[must_use]
    pub fn find_client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Clients whose name or email contains the search term,
    /// case-insensitively. An empty term matches everyone.
    #[must_use]
    pub fn search_clients(&self, term: &str) -> Vec<&Client> {
        let term = term.to_lowercase();
        self.clients
            .iter()
            .filter(|client| {
                client.name.to_lowercase().contains(&term)
                    || client.email.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// A client's bookings, newest check-in first.
    #[must_use]
    pub fn client_bookings(&self, client: &Client) -> Vec<&BookingRecord> {
        let mut bookings: Vec<&BookingRecord> = self
            .bookings
            .iter()
            .filter(|b| b.email.eq_ignore_ascii_case(&client.email))
            .collect();
        bookings.sort_by(|a, b| b.check_in.cmp(&a.check_in));
        bookings
    }

    /// Filter bookings by client name or destination substring and an
    /// optional status, then page the result.
    #[must_use]
    pub fn booking_page(
        &self,
        term: &str,
        status: Option<BookingStatus>,
        page: usize,
        per_page: usize,
    ) -> BookingPage {
        let term = term.to_lowercase();
        let filtered: Vec<&BookingRecord> = self
            .bookings
            .iter()
            .filter(|booking| {
                booking.client_name.to_lowercase().contains(&term)
                    || booking.destination.to_lowercase().contains(&term)
            })
            .filter(|booking| status.is_none_or(|s| booking.status == s))
            .collect();

        let total_bookings = filtered.len();
        let total_pages = total_bookings.div_ceil(per_page).max(1);
        let page = page.max(1);
        let start = (page - 1) * per_page;
        let bookings = filtered
            .into_iter()
            .skip(start)
            .take(per_page)
            .cloned()
            .collect();

        BookingPage {
            bookings,
            page,
            total_pages,
            total_bookings,
        }
    }
}
