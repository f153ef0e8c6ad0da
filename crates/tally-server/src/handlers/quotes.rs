use axum::Json;

use tally_core::quotes::{quote_for_date, Quote};

/// GET /api/quotes/today - Quote of the day
pub async fn quote_today() -> Json<Quote> {
    Json(*quote_for_date(chrono::Local::now().date_naive()))
}
