use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-editable patient fields. Serves both create and full-replace
/// update; server-owned fields arriving in the body are ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub specialty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinic_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-editable doctor fields, same create/update dual role as
/// `PatientInput`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub specialty: String,
    #[serde(default)]
    pub rpps: Option<String>,
    #[serde(default)]
    pub clinic_address: Option<String>,
}

type Store<T> = Arc<RwLock<HashMap<String, T>>>;

#[derive(Clone, Default)]
pub struct AppState {
    patients: Store<Patient>,
    doctors: Store<Doctor>,
}

pub fn app() -> Router {
    Router::new()
        .route("/api/patients", get(list_patients).post(create_patient))
        .route(
            "/api/patients/{id}",
            get(get_patient).put(update_patient).delete(delete_patient),
        )
        .route("/api/doctors", get(list_doctors).post(create_doctor))
        .route(
            "/api/doctors/{id}",
            get(get_doctor).put(update_doctor).delete(delete_doctor),
        )
        .with_state(AppState::default())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_patients(State(state): State<AppState>) -> Json<Vec<Patient>> {
    let patients = state.patients.read().await;
    Json(patients.values().cloned().collect())
}

async fn create_patient(
    State(state): State<AppState>,
    Json(input): Json<PatientInput>,
) -> (StatusCode, Json<Patient>) {
    let now = Utc::now();
    let patient = Patient {
        id: Uuid::new_v4().to_string(),
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        phone: input.phone,
        dob: input.dob,
        gender: input.gender,
        created_at: now,
        updated_at: now,
    };
    state
        .patients
        .write()
        .await
        .insert(patient.id.clone(), patient.clone());
    (StatusCode::CREATED, Json(patient))
}

async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Patient>, StatusCode> {
    let patients = state.patients.read().await;
    patients.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<PatientInput>,
) -> Result<Json<Patient>, StatusCode> {
    let mut patients = state.patients.write().await;
    let patient = patients.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    patient.first_name = input.first_name;
    patient.last_name = input.last_name;
    patient.email = input.email;
    patient.phone = input.phone;
    patient.dob = input.dob;
    patient.gender = input.gender;
    patient.updated_at = Utc::now();
    Ok(Json(patient.clone()))
}

async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut patients = state.patients.write().await;
    patients
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_doctors(State(state): State<AppState>) -> Json<Vec<Doctor>> {
    let doctors = state.doctors.read().await;
    Json(doctors.values().cloned().collect())
}

async fn create_doctor(
    State(state): State<AppState>,
    Json(input): Json<DoctorInput>,
) -> (StatusCode, Json<Doctor>) {
    let now = Utc::now();
    let doctor = Doctor {
        id: Uuid::new_v4().to_string(),
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        phone: input.phone,
        specialty: input.specialty,
        rpps: input.rpps,
        clinic_address: input.clinic_address,
        created_at: now,
        updated_at: now,
    };
    state
        .doctors
        .write()
        .await
        .insert(doctor.id.clone(), doctor.clone());
    (StatusCode::CREATED, Json(doctor))
}

async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Doctor>, StatusCode> {
    let doctors = state.doctors.read().await;
    doctors.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<DoctorInput>,
) -> Result<Json<Doctor>, StatusCode> {
    let mut doctors = state.doctors.write().await;
    let doctor = doctors.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    doctor.first_name = input.first_name;
    doctor.last_name = input.last_name;
    doctor.email = input.email;
    doctor.phone = input.phone;
    doctor.specialty = input.specialty;
    doctor.rpps = input.rpps;
    doctor.clinic_address = input.clinic_address;
    doctor.updated_at = Utc::now();
    Ok(Json(doctor.clone()))
}

async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut doctors = state.doctors.write().await;
    doctors
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
