use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub emergency: String,
    pub avatar: String,
    #[serde(default)]
    pub preferred_categories: Vec<String>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub read_tips: Vec<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub date: NaiveDate,
    pub time: String,
    pub description: String,
    pub provider: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub date: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trimester {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
}

/// Derived view over (due date, today). Recomputed on every query, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct GestationalProgress {
    pub weeks: u32,
    pub days: u32,
    pub trimester: Trimester,
    pub days_remaining: i64,
    pub percentage: f64,
    pub due_date: NaiveDate,
    pub start_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipEntry {
    pub category: String,
    pub tip: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BabyDevelopment {
    pub size: String,
    pub length: String,
    pub development: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GainRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightRecommendation {
    pub bmi: f64,
    pub total_recommended: GainRange,
    pub expected_by_now: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Clinic {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub distance_km: Option<f64>,
    pub services: Vec<String>,
    pub hours: String,
    pub website: String,
}

#[derive(Debug, Serialize)]
pub struct TipStats {
    pub read: usize,
    pub saved: usize,
    pub total: usize,
    pub read_percentage: u32,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub due_date: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    pub due_date: String,
    pub provider: Option<String>,
    pub emergency: Option<String>,
    pub preferred_categories: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct AppointmentRequest {
    pub date: String,
    pub time: String,
    pub description: String,
    pub provider: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NoteRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct TipReadRequest {
    pub tip: String,
}

#[derive(Debug, Deserialize)]
pub struct TipSaveRequest {
    pub tip: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    pub due_date: String,
}

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    pub week: u32,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct WeightQuery {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub week: u32,
}

#[derive(Debug, Deserialize)]
pub struct ClinicQuery {
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct PersonalTipsQuery {
    pub week: Option<u32>,
    /// Comma-separated override for the stored preferences.
    pub categories: Option<String>,
}

/// Account shape returned to the page: everything except the password.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub due_date: NaiveDate,
    pub provider: String,
    pub emergency: String,
    pub avatar: String,
    pub preferred_categories: Vec<String>,
    pub created_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            due_date: user.due_date,
            provider: user.provider.clone(),
            emergency: user.emergency.clone(),
            avatar: user.avatar.clone(),
            preferred_categories: user.preferred_categories.clone(),
            created_at: user.created_at.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: UserResponse,
    pub progress: GestationalProgress,
    pub development: BabyDevelopment,
    pub upcoming_appointments: usize,
    pub available_tips: usize,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
