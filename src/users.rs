use crate::models::{AppData, Appointment, Note, TipStats, User};
use crate::tips;
use chrono::{NaiveDate, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Due date should be in the future")]
    DueDateNotFuture,
    #[error("User with this email already exists")]
    DuplicateEmail,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("No account found with this email address")]
    UnknownEmail,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub due_date: NaiveDate,
}

pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub due_date: NaiveDate,
    pub provider: Option<String>,
    pub emergency: Option<String>,
    pub preferred_categories: Option<Vec<String>>,
}

pub struct NewAppointment {
    pub date: NaiveDate,
    pub time: String,
    pub description: String,
    pub provider: Option<String>,
}

const DEFAULT_PROVIDER: &str = "Healthcare Provider";
const MIN_PASSWORD_LEN: usize = 6;

pub fn register(data: &mut AppData, new_user: NewUser, today: NaiveDate) -> Result<User, UserError> {
    let name = new_user.name.trim().to_string();
    let email = new_user.email.trim().to_string();
    if name.is_empty() || email.is_empty() || new_user.password.is_empty() {
        return Err(UserError::MissingFields);
    }
    if !is_valid_email(&email) {
        return Err(UserError::InvalidEmail);
    }
    if new_user.due_date <= today {
        return Err(UserError::DueDateNotFuture);
    }
    if data.users.iter().any(|user| user.email == email) {
        return Err(UserError::DuplicateEmail);
    }

    let user = User {
        id: next_id(),
        avatar: avatar_for(&name),
        name,
        email,
        password: new_user.password,
        due_date: new_user.due_date,
        provider: String::new(),
        emergency: String::new(),
        preferred_categories: Vec::new(),
        appointments: Vec::new(),
        notes: Vec::new(),
        read_tips: Vec::new(),
        created_at: Utc::now().to_rfc3339(),
    };
    data.users.push(user.clone());
    Ok(user)
}

pub fn authenticate(data: &AppData, email: &str, password: &str) -> Result<User, UserError> {
    // Plaintext comparison, exactly like the local-storage original.
    data.users
        .iter()
        .find(|user| user.email == email && user.password == password)
        .cloned()
        .ok_or(UserError::InvalidCredentials)
}

pub fn find_user<'a>(data: &'a AppData, email: &str) -> Result<&'a User, UserError> {
    data.users
        .iter()
        .find(|user| user.email == email)
        .ok_or(UserError::UnknownEmail)
}

pub fn reset_password(
    data: &mut AppData,
    email: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), UserError> {
    if !data.users.iter().any(|user| user.email == email) {
        return Err(UserError::UnknownEmail);
    }
    if new_password.is_empty() || confirm_password.is_empty() {
        return Err(UserError::MissingFields);
    }
    if new_password.len() < MIN_PASSWORD_LEN {
        return Err(UserError::PasswordTooShort);
    }
    if new_password != confirm_password {
        return Err(UserError::PasswordMismatch);
    }

    let user = find_user_mut(data, email)?;
    user.password = new_password.to_string();
    Ok(())
}

pub fn update_profile(
    data: &mut AppData,
    email: &str,
    update: ProfileUpdate,
) -> Result<User, UserError> {
    let name = update.name.trim().to_string();
    let new_email = update.email.trim().to_string();
    if name.is_empty() || new_email.is_empty() {
        return Err(UserError::MissingFields);
    }
    if !is_valid_email(&new_email) {
        return Err(UserError::InvalidEmail);
    }

    let user = find_user_mut(data, email)?;
    user.avatar = avatar_for(&name);
    user.name = name;
    user.email = new_email;
    user.due_date = update.due_date;
    if let Some(provider) = update.provider {
        user.provider = provider.trim().to_string();
    }
    if let Some(emergency) = update.emergency {
        user.emergency = emergency.trim().to_string();
    }
    if let Some(categories) = update.preferred_categories {
        user.preferred_categories = categories
            .iter()
            .map(|category| category.trim().to_lowercase())
            .filter(|category| !category.is_empty())
            .collect();
    }
    Ok(user.clone())
}

pub fn add_appointment(
    data: &mut AppData,
    email: &str,
    appointment: NewAppointment,
) -> Result<Appointment, UserError> {
    if appointment.time.trim().is_empty() || appointment.description.trim().is_empty() {
        return Err(UserError::MissingFields);
    }

    let provider = appointment
        .provider
        .map(|provider| provider.trim().to_string())
        .filter(|provider| !provider.is_empty())
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());
    let record = Appointment {
        id: next_id(),
        date: appointment.date,
        time: appointment.time.trim().to_string(),
        description: appointment.description.trim().to_string(),
        provider,
    };

    let user = find_user_mut(data, email)?;
    user.appointments.push(record.clone());
    Ok(record)
}

/// All appointments sorted ascending by date.
pub fn appointments_sorted(user: &User) -> Vec<Appointment> {
    let mut appointments = user.appointments.clone();
    appointments.sort_by_key(|appointment| appointment.date);
    appointments
}

/// Appointments on or after today, soonest first.
pub fn upcoming_appointments(user: &User, today: NaiveDate) -> Vec<Appointment> {
    let mut upcoming: Vec<Appointment> = user
        .appointments
        .iter()
        .filter(|appointment| appointment.date >= today)
        .cloned()
        .collect();
    upcoming.sort_by_key(|appointment| appointment.date);
    upcoming
}

pub fn add_note(
    data: &mut AppData,
    email: &str,
    title: &str,
    content: &str,
) -> Result<Note, UserError> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(UserError::MissingFields);
    }
    push_note(data, email, title.trim(), content.trim(), "manual")
}

/// Notes newest-first.
pub fn notes_sorted(user: &User) -> Vec<Note> {
    let mut notes = user.notes.clone();
    notes.sort_by(|a, b| b.id.cmp(&a.id));
    notes
}

pub fn mark_tip_read(data: &mut AppData, email: &str, tip: &str) -> Result<(), UserError> {
    let user = find_user_mut(data, email)?;
    if !user.read_tips.iter().any(|read| read == tip) {
        user.read_tips.push(tip.to_string());
    }
    Ok(())
}

pub fn save_tip_to_notes(
    data: &mut AppData,
    email: &str,
    tip: &str,
    category: &str,
) -> Result<Note, UserError> {
    push_note(data, email, &format!("Tip: {category}"), tip, "tip")
}

pub fn tip_stats(user: &User) -> TipStats {
    let read = user.read_tips.len();
    let saved = user.notes.iter().filter(|note| note.source == "tip").count();
    let total = tips::weekly_tip_count();
    let read_percentage = (read as f64 / total as f64 * 100.0).round() as u32;
    TipStats {
        read,
        saved,
        total,
        read_percentage,
    }
}

fn push_note(
    data: &mut AppData,
    email: &str,
    title: &str,
    content: &str,
    source: &str,
) -> Result<Note, UserError> {
    let now = Utc::now();
    let note = Note {
        id: next_id(),
        date: now.date_naive().to_string(),
        title: title.to_string(),
        content: content.to_string(),
        created_at: now.to_rfc3339(),
        source: source.to_string(),
    };

    let user = find_user_mut(data, email)?;
    user.notes.push(note.clone());
    Ok(note)
}

fn find_user_mut<'a>(data: &'a mut AppData, email: &str) -> Result<&'a mut User, UserError> {
    data.users
        .iter_mut()
        .find(|user| user.email == email)
        .ok_or(UserError::UnknownEmail)
}

fn next_id() -> u64 {
    Utc::now().timestamp_millis() as u64
}

fn avatar_for(name: &str) -> String {
    name.chars()
        .next()
        .map(|first| first.to_uppercase().to_string())
        .unwrap_or_default()
}

// Same shape the original accepted: something@something.something, no
// whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
