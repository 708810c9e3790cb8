//! HTTP API for the back-office dashboard
//!
//! Thin handlers over the domain modules: itinerary board, quote sheet,
//! rate service, contract directory and client book. Mutable boards live
//! behind `RwLock`s in the shared state; everything else is read-only.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::itinerary::{Conflict, ItineraryBoard, TripSummary};
use crate::models::{
    BookingStatus, Client, Currency, HotelContract, ItineraryItem, RoomType, supported_currencies,
};
use crate::pricing::{PricingTier, QuoteSheet, QuoteTotals};
use crate::rates::{Conversion, RateService, RateStatus};
use crate::store::{BookingPage, ClientBook, ContractDirectory, TermMatch};

/// Shared application state behind every handler
pub struct AppState {
    pub itinerary: RwLock<ItineraryBoard>,
    pub quote: RwLock<QuoteSheet>,
    pub rates: Arc<RateService>,
    pub contracts: ContractDirectory,
    pub clients: ClientBook,
    pub bookings_per_page: usize,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/currencies", get(get_currencies))
        .route("/contracts", get(get_contracts))
        .route("/contracts/{name}", get(get_contract))
        .route("/contracts/{name}/rate", get(get_contract_rate))
        .route("/terms", get(search_terms))
        .route("/itinerary", get(get_itinerary))
        .route("/itinerary", post(add_stay))
        .route("/itinerary/reorder", put(reorder_stays))
        .route("/itinerary/{id}", delete(remove_stay))
        .route("/itinerary/{id}/dates", put(update_stay_dates))
        .route("/quote", get(get_quote))
        .route("/quote/tiers", post(add_tier))
        .route("/quote/tiers/{id}", put(update_tier))
        .route("/quote/tiers/{id}", delete(remove_tier))
        .route("/quote/settings", put(update_quote_settings))
        .route("/rates", get(get_rates))
        .route("/rates/refresh", post(refresh_rates))
        .route("/rates/base", put(set_base_currency))
        .route("/rates/convert", get(convert_amount))
        .route("/clients", get(get_clients))
        .route("/clients/{id}/bookings", get(get_client_bookings))
        .route("/bookings", get(get_bookings))
        .with_state(state)
}

async fn get_currencies() -> Json<Vec<Currency>> {
    Json(supported_currencies().to_vec())
}

async fn get_contracts(State(state): State<Arc<AppState>>) -> Json<Vec<HotelContract>> {
    Json(state.contracts.contracts().to_vec())
}

async fn get_contract(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<HotelContract>, StatusCode> {
    state
        .contracts
        .find(&name)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[derive(Deserialize)]
struct RateQuery {
    date: NaiveDate,
    #[serde(default = "default_room_type")]
    room_type: RoomType,
}

fn default_room_type() -> RoomType {
    RoomType::Double
}

#[derive(Serialize)]
struct ContractRate {
    hotel_name: String,
    date: NaiveDate,
    room_type: RoomType,
    rate: f64,
}

async fn get_contract_rate(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<RateQuery>,
) -> Result<Json<ContractRate>, StatusCode> {
    let rate = state
        .contracts
        .current_rate(&name, query.date, query.room_type)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(ContractRate {
        hotel_name: name,
        date: query.date,
        room_type: query.room_type,
        rate,
    }))
}

#[derive(Deserialize)]
struct TermQuery {
    query: Option<String>,
    category: Option<String>,
}

async fn search_terms(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TermQuery>,
) -> Json<Vec<TermMatch>> {
    Json(
        state
            .contracts
            .search_terms(params.query.as_deref(), params.category.as_deref()),
    )
}

#[derive(Serialize)]
struct ItineraryView {
    items: Vec<ItineraryItem>,
    conflicts: Vec<Conflict>,
    summary: TripSummary,
}

async fn get_itinerary(State(state): State<Arc<AppState>>) -> Json<ItineraryView> {
    let board = state.itinerary.read().await;
    Json(ItineraryView {
        items: board.items().to_vec(),
        conflicts: board.conflicts().to_vec(),
        summary: board.summary(),
    })
}

#[derive(Deserialize)]
struct NewStay {
    id: String,
    hotel_name: String,
    location: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    rate: f64,
}

async fn add_stay(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewStay>,
) -> Result<StatusCode, StatusCode> {
    let item = ItineraryItem::new(
        &payload.id,
        &payload.hotel_name,
        &payload.location,
        payload.check_in,
        payload.check_out,
        payload.guests,
        payload.rate,
    )
    .map_err(|_| StatusCode::BAD_REQUEST)?;

    let mut board = state.itinerary.write().await;
    board.add(item).map_err(|_| StatusCode::CONFLICT)?;
    Ok(StatusCode::CREATED)
}

async fn remove_stay(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> StatusCode {
    let mut board = state.itinerary.write().await;
    board.remove(&id);
    StatusCode::NO_CONTENT
}

#[derive(Deserialize)]
struct DateSpan {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

async fn update_stay_dates(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(span): Json<DateSpan>,
) -> Result<StatusCode, StatusCode> {
    let mut board = state.itinerary.write().await;
    board
        .update_dates(&id, span.check_in, span.check_out)
        .map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(StatusCode::OK)
}

#[derive(Deserialize)]
struct ReorderRequest {
    dragged_id: String,
    target_id: String,
}

async fn reorder_stays(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReorderRequest>,
) -> Result<StatusCode, StatusCode> {
    let mut board = state.itinerary.write().await;
    board
        .reorder(&request.dragged_id, &request.target_id)
        .map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(StatusCode::OK)
}

#[derive(Serialize)]
struct QuoteView {
    tiers: Vec<PricingTier>,
    totals: QuoteTotals,
    commission_rate: f64,
    auto_calculate: bool,
}

async fn get_quote(State(state): State<Arc<AppState>>) -> Json<QuoteView> {
    let sheet = state.quote.read().await;
    Json(QuoteView {
        tiers: sheet.tiers().to_vec(),
        totals: sheet.totals(),
        commission_rate: sheet.commission_rate(),
        auto_calculate: sheet.auto_calculate(),
    })
}

#[derive(Deserialize)]
struct NewTier {
    name: String,
}

#[derive(Serialize)]
struct CreatedTier {
    id: String,
}

async fn add_tier(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewTier>,
) -> Json<CreatedTier> {
    let mut sheet = state.quote.write().await;
    let id = sheet.add_tier(payload.name);
    Json(CreatedTier { id })
}

#[derive(Deserialize)]
struct TierUpdate {
    name: Option<String>,
    net_rate: Option<f64>,
    markup: Option<f64>,
    occupancy: Option<Occupancy>,
}

#[derive(Deserialize)]
struct Occupancy {
    nights: u32,
    guests: u32,
    rooms: u32,
}

async fn update_tier(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<TierUpdate>,
) -> Result<StatusCode, StatusCode> {
    let mut sheet = state.quote.write().await;
    let apply = || -> Result<(), crate::LodgeDeskError> {
        if let Some(name) = update.name {
            sheet.rename_tier(&id, name)?;
        }
        if let Some(net_rate) = update.net_rate {
            sheet.set_net_rate(&id, net_rate)?;
        }
        if let Some(markup) = update.markup {
            sheet.set_markup(&id, markup)?;
        }
        if let Some(occupancy) = update.occupancy {
            sheet.set_occupancy(&id, occupancy.nights, occupancy.guests, occupancy.rooms)?;
        }
        Ok(())
    };
    apply().map_err(|_| StatusCode::NOT_FOUND)?;
    Ok(StatusCode::OK)
}

async fn remove_tier(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> StatusCode {
    let mut sheet = state.quote.write().await;
    sheet.remove_tier(&id);
    StatusCode::NO_CONTENT
}

#[derive(Deserialize)]
struct QuoteSettings {
    commission_rate: Option<f64>,
    default_markup: Option<f64>,
    auto_calculate: Option<bool>,
}

async fn update_quote_settings(
    State(state): State<Arc<AppState>>,
    Json(settings): Json<QuoteSettings>,
) -> StatusCode {
    let mut sheet = state.quote.write().await;
    if let Some(rate) = settings.commission_rate {
        sheet.set_commission_rate(rate);
    }
    if let Some(markup) = settings.default_markup {
        sheet.set_default_markup(markup);
    }
    if let Some(auto) = settings.auto_calculate {
        sheet.set_auto_calculate(auto);
    }
    StatusCode::OK
}

async fn get_rates(State(state): State<Arc<AppState>>) -> Json<RateStatus> {
    Json(state.rates.status())
}

async fn refresh_rates(State(state): State<Arc<AppState>>) -> Json<RateStatus> {
    state.rates.refresh().await;
    Json(state.rates.status())
}

#[derive(Deserialize)]
struct BaseCurrencyRequest {
    base_currency: String,
}

async fn set_base_currency(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BaseCurrencyRequest>,
) -> Result<Json<RateStatus>, StatusCode> {
    if !supported_currencies()
        .iter()
        .any(|c| c.code == request.base_currency)
    {
        return Err(StatusCode::BAD_REQUEST);
    }
    state.rates.set_base_currency(request.base_currency).await;
    Ok(Json(state.rates.status()))
}

#[derive(Deserialize)]
struct ConvertQuery {
    amount: f64,
    from: String,
    to: String,
}

async fn convert_amount(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConvertQuery>,
) -> Json<Conversion> {
    Json(state.rates.convert(query.amount, &query.from, &query.to))
}

#[derive(Deserialize)]
struct ClientQuery {
    #[serde(default)]
    search: String,
}

async fn get_clients(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClientQuery>,
) -> Json<Vec<Client>> {
    Json(
        state
            .clients
            .search_clients(&query.search)
            .into_iter()
            .cloned()
            .collect(),
    )
}

async fn get_client_bookings(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<crate::models::BookingRecord>>, StatusCode> {
    let client = state.clients.find_client(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(
        state
            .clients
            .client_bookings(client)
            .into_iter()
            .cloned()
            .collect(),
    ))
}

#[derive(Deserialize)]
struct BookingQuery {
    #[serde(default)]
    search: String,
    status: Option<BookingStatus>,
    #[serde(default = "default_page")]
    page: usize,
}

fn default_page() -> usize {
    1
}

async fn get_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingQuery>,
) -> Json<BookingPage> {
    Json(state.clients.booking_page(
        &query.search,
        query.status,
        query.page,
        state.bookings_per_page,
    ))
}
