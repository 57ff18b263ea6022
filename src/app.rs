use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/register", post(handlers::register))
        .route("/api/login", post(handlers::login))
        .route("/api/password/reset", post(handlers::reset_password))
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/weight", get(handlers::get_weight))
        .route("/api/tips", get(handlers::get_weekly_tips))
        .route("/api/tips/search", get(handlers::search_tips))
        .route("/api/tips/daily", get(handlers::get_daily_tip))
        .route("/api/tips/category/:name", get(handlers::get_category_tips))
        .route("/api/development", get(handlers::get_development))
        .route("/api/clinics", get(handlers::get_clinics))
        .route("/api/users/:email/dashboard", get(handlers::get_dashboard))
        .route("/api/users/:email/profile", put(handlers::update_profile))
        .route(
            "/api/users/:email/appointments",
            get(handlers::get_appointments).post(handlers::add_appointment),
        )
        .route(
            "/api/users/:email/notes",
            get(handlers::get_notes).post(handlers::add_note),
        )
        .route("/api/users/:email/tips", get(handlers::get_personalized_tips))
        .route("/api/users/:email/tips/read", post(handlers::mark_tip_read))
        .route("/api/users/:email/tips/save", post(handlers::save_tip))
        .route("/api/users/:email/tips/stats", get(handlers::get_tip_stats))
        .with_state(state)
}
