//! Seed data for the back-office stores
//!
//! The contracted lodges, the client base and their booking history. Rates
//! are per person per night in USD; booking amounts are in ZAR.

use chrono::NaiveDate;

use crate::models::{
    BookingRecord, BookingStatus, Client, ContractTerm, HotelContract, RoomRates, Season,
    SpecialOffer, TermKind,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("static seed date")
}

fn rates(single: f64, double: f64, child: f64) -> RoomRates {
    RoomRates {
        single,
        double,
        child,
    }
}

fn term(id: u32, category: &str, text: &str, relevant: bool, kind: TermKind) -> ContractTerm {
    ContractTerm {
        id,
        category: category.to_string(),
        text: text.to_string(),
        relevant,
        kind,
    }
}

fn offer(title: &str, description: &str, valid_period: &str, conditions: &str) -> SpecialOffer {
    SpecialOffer {
        title: title.to_string(),
        description: description.to_string(),
        valid_period: valid_period.to_string(),
        conditions: conditions.to_string(),
    }
}

/// The agency's contracted safari lodges.
pub fn contracts() -> Vec<HotelContract> {
    vec![
        HotelContract {
            hotel_name: "Sabi Sands Safari Lodge".to_string(),
            contract_number: "SS-2025-001".to_string(),
            valid_from: date(2025, 1, 1),
            valid_to: date(2025, 12, 31),
            rate_card: vec![
                (Season::JanMar, rates(480.0, 520.0, 260.0)),
                (Season::AprJun, rates(420.0, 460.0, 230.0)),
                (Season::JulSep, rates(580.0, 620.0, 310.0)),
                (Season::OctDec, rates(520.0, 560.0, 280.0)),
            ],
            terms: vec![
                term(
                    1,
                    "rates",
                    "All rates are per person per night sharing, includes meals and game drives",
                    true,
                    TermKind::Standard,
                ),
                term(
                    2,
                    "discounts",
                    "3+ consecutive nights: 15% discount applies automatically",
                    true,
                    TermKind::Opportunity,
                ),
                term(
                    3,
                    "supplements",
                    "Single supplement: 75% of double rate",
                    false,
                    TermKind::Standard,
                ),
                term(
                    4,
                    "cancellation",
                    "45 days prior: 10% penalty | 30 days: 50% penalty | 14 days: 100% penalty",
                    true,
                    TermKind::Warning,
                ),
                term(
                    5,
                    "payment",
                    "50% deposit required within 7 days of confirmation",
                    true,
                    TermKind::Standard,
                ),
                term(
                    6,
                    "dodgy",
                    "Rate increases of up to 15% may apply with 30 days notice during peak season",
                    true,
                    TermKind::Warning,
                ),
                term(
                    7,
                    "seasonal",
                    "December 20-31: Additional 25% peak season supplement applies",
                    true,
                    TermKind::Warning,
                ),
                term(
                    8,
                    "inclusions",
                    "Includes: All meals, game drives, conservation fees, transfers from local airstrip",
                    true,
                    TermKind::Standard,
                ),
                term(
                    9,
                    "exclusions",
                    "Excludes: Beverages, premium wines, spa treatments, private game drives",
                    true,
                    TermKind::Standard,
                ),
                term(
                    10,
                    "dodgy",
                    "Force majeure clause: No refunds for government restrictions or natural disasters",
                    false,
                    TermKind::Warning,
                ),
            ],
            special_offers: vec![offer(
                "Early Bird Special",
                "Book 60 days in advance for 10% additional discount",
                "Valid for stays Apr-Jun 2025",
                "Cannot be combined with other offers",
            )],
        },
        HotelContract {
            hotel_name: "Thornybush Game Lodge".to_string(),
            contract_number: "TG-2025-003".to_string(),
            valid_from: date(2025, 1, 1),
            valid_to: date(2025, 12, 31),
            rate_card: vec![
                (Season::JanMar, rates(380.0, 420.0, 210.0)),
                (Season::AprJun, rates(340.0, 380.0, 190.0)),
                (Season::JulSep, rates(460.0, 500.0, 250.0)),
                (Season::OctDec, rates(340.0, 380.0, 190.0)),
            ],
            terms: vec![
                term(
                    1,
                    "rates",
                    "All rates per person per night, full board + 2 game drives daily",
                    true,
                    TermKind::Standard,
                ),
                term(
                    2,
                    "promo",
                    "DECEMBER SPECIAL: 20% off all bookings for Dec 2025 stays (expires Dec 31)",
                    true,
                    TermKind::Opportunity,
                ),
                term(
                    3,
                    "cancellation",
                    "30 days prior: 25% penalty | 14 days: 75% penalty | 7 days: 100% penalty",
                    true,
                    TermKind::Warning,
                ),
                term(
                    4,
                    "dodgy",
                    "Weather cancellations: Lodge credits only, no cash refunds",
                    false,
                    TermKind::Warning,
                ),
                term(
                    5,
                    "payment",
                    "Full payment required 30 days before arrival",
                    true,
                    TermKind::Standard,
                ),
            ],
            special_offers: vec![offer(
                "December Promotion",
                "20% discount on all December 2025 bookings",
                "Valid until Dec 31, 2025",
                "Subject to availability, advance booking required",
            )],
        },
        HotelContract {
            hotel_name: "Kruger Bush Camp Premium".to_string(),
            contract_number: "KBC-2025-002".to_string(),
            valid_from: date(2025, 1, 1),
            valid_to: date(2025, 12, 31),
            rate_card: vec![
                (Season::JanMar, rates(260.0, 290.0, 145.0)),
                (Season::AprJun, rates(240.0, 270.0, 135.0)),
                (Season::JulSep, rates(300.0, 330.0, 165.0)),
                (Season::OctDec, rates(280.0, 310.0, 155.0)),
            ],
            terms: vec![
                term(
                    1,
                    "rates",
                    "All rates per person per night, includes meals and shared game drives",
                    true,
                    TermKind::Standard,
                ),
                term(
                    2,
                    "partnership",
                    "NEW PARTNERSHIP: 30% discount on all bookings through Q2 Travel",
                    true,
                    TermKind::Opportunity,
                ),
                term(
                    3,
                    "family",
                    "Children under 12: 50% discount, under 6: Free (sharing with parents)",
                    false,
                    TermKind::Standard,
                ),
                term(
                    4,
                    "cancellation",
                    "21 days prior: No charge | 14 days: 50% penalty | 7 days: 100% penalty",
                    true,
                    TermKind::Standard,
                ),
            ],
            special_offers: vec![offer(
                "Partnership Launch Special",
                "30% off all Q2 Travel bookings for first 6 months",
                "Valid until June 30, 2025",
                "Exclusive to Q2 Travel clients",
            )],
        },
        HotelContract {
            hotel_name: "Madikwe Safari Lodge".to_string(),
            contract_number: "MSL-2025-007".to_string(),
            valid_from: date(2025, 1, 1),
            valid_to: date(2025, 12, 31),
            rate_card: vec![
                (Season::JanMar, rates(400.0, 425.0, 213.0)),
                (Season::AprJun, rates(370.0, 395.0, 198.0)),
                (Season::JulSep, rates(450.0, 475.0, 238.0)),
                (Season::OctDec, rates(400.0, 425.0, 213.0)),
            ],
            terms: vec![
                term(
                    1,
                    "rates",
                    "All rates per person per night, full board + conservation activities",
                    true,
                    TermKind::Standard,
                ),
                term(
                    2,
                    "health",
                    "MALARIA-FREE zone - no prophylaxis required",
                    true,
                    TermKind::Opportunity,
                ),
                term(
                    3,
                    "family",
                    "Family-friendly lodge with specialized children's programs",
                    false,
                    TermKind::Standard,
                ),
                term(
                    4,
                    "cancellation",
                    "45 days prior: 15% penalty | 21 days: 50% penalty | 7 days: 100% penalty",
                    true,
                    TermKind::Warning,
                ),
            ],
            special_offers: vec![offer(
                "Malaria-Free Advantage",
                "Perfect for families and health-conscious travelers",
                "Year-round benefit",
                "No additional cost",
            )],
        },
    ]
}

fn client(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    total_bookings: u32,
    total_spent: f64,
    last_booking: NaiveDate,
    preferences: &[&str],
    notes: &str,
    rating: u8,
) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        total_bookings,
        total_spent,
        last_booking,
        preferences: preferences.iter().map(|p| p.to_string()).collect(),
        notes: notes.to_string(),
        rating,
    }
}

/// The agency's client base.
pub fn clients() -> Vec<Client> {
    vec![
        client(
            "1",
            "Sarah Johnson",
            "sarah.johnson@email.com",
            "+27 82 123 4567",
            4,
            220_000.0,
            date(2024, 12, 15),
            &["Luxury Lodges", "Big 5 Safari", "Photography Tours"],
            "Prefers early morning game drives. Allergic to nuts.",
            5,
        ),
        client(
            "2",
            "Michael Chen",
            "michael.chen@email.com",
            "+1 555 987 6543",
            2,
            89_000.0,
            date(2024, 10, 10),
            &["Bush Walks", "Cultural Experiences", "Mid-range Accommodation"],
            "Interested in conservation efforts. Vegetarian meals.",
            4,
        ),
        client(
            "3",
            "Emma Thompson",
            "emma.thompson@email.com",
            "+44 20 7946 0958",
            6,
            280_000.0,
            date(2024, 2, 28),
            &["Exclusive Camps", "Wine Tasting", "Spa Treatments"],
            "VIP client. Prefers private vehicles and guides.",
            5,
        ),
        client(
            "4",
            "David Wilson",
            "david.wilson@email.com",
            "+1 212 555 0123",
            3,
            156_000.0,
            date(2024, 6, 10),
            &["Adventure Activities", "Camping", "Group Tours"],
            "Loves hiking and outdoor adventures. Travels with extended family.",
            4,
        ),
        client(
            "5",
            "Lisa Martinez",
            "lisa.martinez@email.com",
            "+34 91 123 4567",
            2,
            78_000.0,
            date(2024, 4, 22),
            &["Boutique Hotels", "Cultural Tours", "Local Cuisine"],
            "First-time safari visitor. Interested in local culture.",
            5,
        ),
        client(
            "6",
            "Robert Taylor",
            "robert.taylor@email.com",
            "+44 161 496 0011",
            5,
            340_000.0,
            date(2024, 7, 5),
            &["Luxury Safari", "Private Guides", "Helicopter Tours"],
            "High-end client. Prefers helicopter transfers and exclusive experiences.",
            5,
        ),
        client(
            "7",
            "Jennifer Lee",
            "jennifer.lee@email.com",
            "+1 415 555 0199",
            1,
            45_000.0,
            date(2024, 5, 15),
            &["Wildlife Photography", "Early Game Drives", "Quiet Lodges"],
            "Professional photographer. Needs early morning access.",
            4,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: &str,
    client_name: &str,
    email: &str,
    destination: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    total_amount: f64,
    status: BookingStatus,
    booking_date: NaiveDate,
    preferences: &[&str],
    notes: &str,
    repeat_client: bool,
) -> BookingRecord {
    BookingRecord {
        id: id.to_string(),
        client_name: client_name.to_string(),
        email: email.to_string(),
        destination: destination.to_string(),
        check_in,
        check_out,
        guests,
        total_amount,
        status,
        booking_date,
        preferences: preferences.iter().map(|p| p.to_string()).collect(),
        notes: notes.to_string(),
        repeat_client,
    }
}

/// Historical and upcoming bookings for the seeded clients.
pub fn bookings() -> Vec<BookingRecord> {
    use BookingStatus::{Cancelled, Completed, Confirmed, Pending};

    vec![
        booking(
            "1",
            "Sarah Johnson",
            "sarah.johnson@email.com",
            "Sabi Sands Game Reserve",
            date(2024, 3, 15),
            date(2024, 3, 18),
            2,
            45_000.0,
            Completed,
            date(2024, 2, 10),
            &["Luxury Lodges", "Big 5 Safari"],
            "Special anniversary trip",
            true,
        ),
        booking(
            "2",
            "Sarah Johnson",
            "sarah.johnson@email.com",
            "Kruger National Park",
            date(2024, 8, 12),
            date(2024, 8, 17),
            2,
            38_000.0,
            Completed,
            date(2024, 7, 1),
            &["Luxury Lodges", "Photography Tours"],
            "Follow-up safari experience",
            true,
        ),
        booking(
            "3",
            "Sarah Johnson",
            "sarah.johnson@email.com",
            "Madikwe Game Reserve",
            date(2023, 11, 5),
            date(2023, 11, 8),
            2,
            42_000.0,
            Completed,
            date(2023, 9, 20),
            &["Luxury Lodges", "Big 5 Safari"],
            "First safari experience - loved it!",
            false,
        ),
        booking(
            "4",
            "Sarah Johnson",
            "sarah.johnson@email.com",
            "Timbavati Private Reserve",
            date(2025, 12, 15),
            date(2025, 12, 20),
            4,
            95_000.0,
            Confirmed,
            date(2025, 7, 5),
            &["Luxury Lodges", "Photography Tours"],
            "Christmas holiday with family",
            true,
        ),
        booking(
            "5",
            "Michael Chen",
            "michael.chen@email.com",
            "Kruger National Park",
            date(2024, 1, 20),
            date(2024, 1, 25),
            4,
            32_000.0,
            Completed,
            date(2023, 12, 15),
            &["Bush Walks", "Cultural Experiences"],
            "First trip with the whole family",
            false,
        ),
        booking(
            "6",
            "Michael Chen",
            "michael.chen@email.com",
            "Hluhluwe-iMfolozi Park",
            date(2025, 10, 10),
            date(2025, 10, 14),
            4,
            57_000.0,
            Confirmed,
            date(2025, 6, 15),
            &["Bush Walks", "Conservation"],
            "Wants to visit the rhino conservation project",
            true,
        ),
        booking(
            "7",
            "Emma Thompson",
            "emma.thompson@email.com",
            "Thornybush Game Reserve",
            date(2024, 2, 28),
            date(2024, 3, 5),
            2,
            78_000.0,
            Completed,
            date(2024, 1, 10),
            &["Exclusive Camps", "Spa Treatments"],
            "Private vehicle and guide arranged",
            true,
        ),
        booking(
            "8",
            "Emma Thompson",
            "emma.thompson@email.com",
            "Sabi Sands Game Reserve",
            date(2023, 9, 14),
            date(2023, 9, 18),
            2,
            85_000.0,
            Completed,
            date(2023, 7, 5),
            &["Exclusive Camps", "Wine Tasting"],
            "Wine pairing dinners every evening",
            true,
        ),
        booking(
            "9",
            "Emma Thompson",
            "emma.thompson@email.com",
            "Kapama Private Game Reserve",
            date(2025, 10, 5),
            date(2025, 10, 10),
            6,
            117_000.0,
            Confirmed,
            date(2025, 7, 8),
            &["Exclusive Camps", "Spa Treatments"],
            "Travelling with two other couples",
            true,
        ),
        booking(
            "10",
            "Emma Thompson",
            "emma.thompson@email.com",
            "Madikwe Game Reserve",
            date(2023, 5, 20),
            date(2023, 5, 25),
            2,
            72_000.0,
            Completed,
            date(2023, 3, 10),
            &["Exclusive Camps", "Wine Tasting"],
            "Requested the same guide as last time",
            true,
        ),
        booking(
            "11",
            "Emma Thompson",
            "emma.thompson@email.com",
            "Timbavati Private Reserve",
            date(2023, 1, 15),
            date(2023, 1, 20),
            2,
            68_000.0,
            Completed,
            date(2022, 11, 20),
            &["Exclusive Camps", "Spa Treatments"],
            "New year getaway",
            true,
        ),
        booking(
            "12",
            "Emma Thompson",
            "emma.thompson@email.com",
            "Phinda Private Game Reserve",
            date(2025, 11, 20),
            date(2025, 11, 25),
            2,
            92_000.0,
            Pending,
            date(2025, 7, 9),
            &["Exclusive Camps", "Spa Treatments"],
            "Awaiting confirmation of the private villa",
            true,
        ),
        booking(
            "13",
            "David Wilson",
            "david.wilson@email.com",
            "Kruger National Park",
            date(2024, 6, 10),
            date(2024, 6, 16),
            8,
            64_000.0,
            Completed,
            date(2024, 4, 15),
            &["Adventure Activities", "Group Tours"],
            "Extended family reunion trip",
            true,
        ),
        booking(
            "14",
            "David Wilson",
            "david.wilson@email.com",
            "Hluhluwe-iMfolozi Park",
            date(2023, 12, 20),
            date(2023, 12, 27),
            6,
            42_000.0,
            Completed,
            date(2023, 10, 5),
            &["Adventure Activities", "Camping"],
            "Christmas camping trip",
            false,
        ),
        booking(
            "15",
            "David Wilson",
            "david.wilson@email.com",
            "Addo Elephant National Park",
            date(2025, 9, 22),
            date(2025, 9, 28),
            10,
            50_000.0,
            Confirmed,
            date(2025, 7, 2),
            &["Adventure Activities", "Group Tours"],
            "Hiking group, needs two vehicles",
            true,
        ),
        booking(
            "16",
            "Lisa Martinez",
            "lisa.martinez@email.com",
            "Thornybush Game Reserve",
            date(2024, 4, 22),
            date(2024, 4, 26),
            2,
            48_000.0,
            Completed,
            date(2024, 2, 14),
            &["Boutique Hotels", "Local Cuisine"],
            "First safari, wants cultural excursions",
            false,
        ),
        booking(
            "17",
            "Lisa Martinez",
            "lisa.martinez@email.com",
            "Kapama Private Game Reserve",
            date(2025, 11, 8),
            date(2025, 11, 12),
            2,
            30_000.0,
            Pending,
            date(2025, 7, 8),
            &["Boutique Hotels", "Local Cuisine"],
            "Return trip - wants to try different region",
            true,
        ),
        booking(
            "18",
            "Robert Taylor",
            "robert.taylor@email.com",
            "Sabi Sands Game Reserve",
            date(2024, 7, 5),
            date(2024, 7, 10),
            2,
            125_000.0,
            Completed,
            date(2024, 5, 10),
            &["Luxury Safari", "Private Guides"],
            "Helicopter transfers arranged",
            true,
        ),
        booking(
            "19",
            "Jennifer Lee",
            "jennifer.lee@email.com",
            "Thornybush Game Reserve",
            date(2024, 1, 15),
            date(2024, 1, 20),
            1,
            52_000.0,
            Cancelled,
            date(2023, 11, 20),
            &["Wildlife Photography", "Quiet Lodges"],
            "Cancelled due to equipment issues",
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_contract_carries_all_four_seasons() {
        for contract in contracts() {
            assert_eq!(contract.rate_card.len(), 4, "{}", contract.hotel_name);
            for season in Season::all() {
                assert!(
                    contract.rate_card.iter().any(|(s, _)| *s == season),
                    "{} missing {}",
                    contract.hotel_name,
                    season.label()
                );
            }
        }
    }

    #[test]
    fn test_every_booking_belongs_to_a_seeded_client() {
        let clients = clients();
        for booking in bookings() {
            assert!(
                clients.iter().any(|c| c.email == booking.email),
                "booking {} has no client",
                booking.id
            );
        }
    }

    #[test]
    fn test_booking_spans_are_positive() {
        for booking in bookings() {
            assert!(booking.check_out > booking.check_in, "booking {}", booking.id);
        }
    }
}
