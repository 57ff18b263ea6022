use crate::clinics::ClinicFinder;
use crate::errors::AppError;
use crate::models::{
    Appointment, AppointmentRequest, BabyDevelopment, Clinic, ClinicQuery, DashboardResponse,
    GestationalProgress, LoginRequest, MessageResponse, Note, NoteRequest, PersonalTipsQuery,
    ProgressQuery, RegisterRequest, ResetPasswordRequest, SearchQuery, TipEntry, TipReadRequest,
    TipSaveRequest, TipStats, UpdateProfileRequest, UserResponse, WeekQuery, WeightQuery,
    WeightRecommendation,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use crate::users::{self, NewAppointment, NewUser, ProfileUpdate, UserError};
use crate::{progress, tips, weight};
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, AppError> {
    if payload.due_date.trim().is_empty() {
        return Err(UserError::MissingFields.into());
    }
    let due_date = parse_date(&payload.due_date)?;

    let mut data = state.data.lock().await;
    let user = users::register(
        &mut data,
        NewUser {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            due_date,
        },
        today(),
    )?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(UserResponse::from(&user)))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let data = state.data.lock().await;
    let user = users::authenticate(&data, payload.email.trim(), &payload.password)?;
    Ok(Json(UserResponse::from(&user)))
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut data = state.data.lock().await;
    users::reset_password(
        &mut data,
        payload.email.trim(),
        &payload.new_password,
        &payload.confirm_password,
    )?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(MessageResponse {
        message: "Password has been reset successfully!".to_string(),
    }))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<DashboardResponse>, AppError> {
    let data = state.data.lock().await;
    let user = users::find_user(&data, &email)?;
    let today = today();

    let progress = progress::compute_progress(user.due_date, today);
    let development = tips::development_for_week(progress.weeks);
    let upcoming_appointments = users::upcoming_appointments(user, today).len();
    let available_tips = tips::weekly_tips(progress.weeks).len();

    Ok(Json(DashboardResponse {
        user: UserResponse::from(user),
        development,
        upcoming_appointments,
        available_tips,
        progress,
    }))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, AppError> {
    if payload.due_date.trim().is_empty() {
        return Err(UserError::MissingFields.into());
    }
    let due_date = parse_date(&payload.due_date)?;

    let mut data = state.data.lock().await;
    let user = users::update_profile(
        &mut data,
        &email,
        ProfileUpdate {
            name: payload.name,
            email: payload.email,
            due_date,
            provider: payload.provider,
            emergency: payload.emergency,
            preferred_categories: payload.preferred_categories,
        },
    )?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(UserResponse::from(&user)))
}

pub async fn get_appointments(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let data = state.data.lock().await;
    let user = users::find_user(&data, &email)?;
    Ok(Json(users::appointments_sorted(user)))
}

pub async fn add_appointment(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<AppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    if payload.date.trim().is_empty() {
        return Err(UserError::MissingFields.into());
    }
    let date = parse_date(&payload.date)?;

    let mut data = state.data.lock().await;
    let appointment = users::add_appointment(
        &mut data,
        &email,
        NewAppointment {
            date,
            time: payload.time,
            description: payload.description,
            provider: payload.provider,
        },
    )?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(appointment))
}

pub async fn get_notes(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Note>>, AppError> {
    let data = state.data.lock().await;
    let user = users::find_user(&data, &email)?;
    Ok(Json(users::notes_sorted(user)))
}

pub async fn add_note(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<NoteRequest>,
) -> Result<Json<Note>, AppError> {
    let mut data = state.data.lock().await;
    let note = users::add_note(&mut data, &email, &payload.title, &payload.content)?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(note))
}

pub async fn get_personalized_tips(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Query(query): Query<PersonalTipsQuery>,
) -> Result<Json<Vec<TipEntry>>, AppError> {
    let data = state.data.lock().await;
    let user = users::find_user(&data, &email)?;

    let week = match query.week {
        Some(week) => week,
        None => progress::compute_progress(user.due_date, today()).weeks,
    };
    let categories = match query.categories {
        Some(raw) => raw
            .split(',')
            .map(|category| category.trim().to_string())
            .filter(|category| !category.is_empty())
            .collect(),
        None => user.preferred_categories.clone(),
    };

    Ok(Json(tips::personalized_tips(week, &categories)))
}

pub async fn mark_tip_read(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<TipReadRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut data = state.data.lock().await;
    users::mark_tip_read(&mut data, &email, &payload.tip)?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(MessageResponse {
        message: "Tip marked as read".to_string(),
    }))
}

pub async fn save_tip(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<TipSaveRequest>,
) -> Result<Json<Note>, AppError> {
    let mut data = state.data.lock().await;
    let note = users::save_tip_to_notes(&mut data, &email, &payload.tip, &payload.category)?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(note))
}

pub async fn get_tip_stats(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<TipStats>, AppError> {
    let data = state.data.lock().await;
    let user = users::find_user(&data, &email)?;
    Ok(Json(users::tip_stats(user)))
}

pub async fn get_progress(
    Query(query): Query<ProgressQuery>,
) -> Result<Json<GestationalProgress>, AppError> {
    let due_date = parse_date(&query.due_date)?;
    Ok(Json(progress::compute_progress(due_date, today())))
}

pub async fn get_weight(
    Query(query): Query<WeightQuery>,
) -> Result<Json<WeightRecommendation>, AppError> {
    if query.weight_kg <= 0.0 || query.height_cm <= 0.0 {
        return Err(AppError::bad_request("weight and height must be positive"));
    }

    Ok(Json(weight::recommend_weight_gain(
        query.weight_kg,
        query.height_cm,
        query.week,
    )))
}

pub async fn get_weekly_tips(Query(query): Query<WeekQuery>) -> Json<Vec<TipEntry>> {
    Json(tips::weekly_tips(query.week))
}

pub async fn search_tips(Query(query): Query<SearchQuery>) -> Json<Vec<TipEntry>> {
    Json(tips::search_tips(query.q.trim()))
}

pub async fn get_daily_tip() -> Json<TipEntry> {
    Json(tips::tip_of_the_day(today()))
}

pub async fn get_category_tips(Path(name): Path<String>) -> Json<Vec<String>> {
    Json(tips::category_tips(&name.to_lowercase()))
}

pub async fn get_development(Query(query): Query<WeekQuery>) -> Json<BabyDevelopment> {
    Json(tips::development_for_week(query.week))
}

pub async fn get_clinics(
    Query(query): Query<ClinicQuery>,
) -> Result<Json<Vec<Clinic>>, AppError> {
    let location = query.location.trim();
    if location.is_empty() {
        return Err(AppError::bad_request(
            "Please enter a location to search for clinics",
        ));
    }

    let finder = ClinicFinder::from_env()?;
    let clinics = finder.search(location).await?;
    Ok(Json(clinics))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("Please enter a valid date in YYYY-MM-DD format"))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
