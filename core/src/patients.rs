//! Patient resource client.
//!
//! Thin CRUD facade over [`ApiClient`]; every operation maps to one
//! request against `/api/patients` and propagates transport errors as-is.
//! Refreshing lists after a successful mutation is the caller's concern.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{CreatePatient, Patient};

const PATIENTS_PATH: &str = "/api/patients";

/// CRUD client for the patients resource.
#[derive(Debug, Clone)]
pub struct PatientApi {
    client: ApiClient,
}

impl PatientApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All patients, in server-defined order.
    pub fn get_all(&self) -> Result<Vec<Patient>, ApiError> {
        self.client.get(PATIENTS_PATH)
    }

    pub fn get_one(&self, id: &str) -> Result<Patient, ApiError> {
        self.client.get(&format!("{PATIENTS_PATH}/{id}"))
    }

    pub fn create(&self, input: &CreatePatient) -> Result<Patient, ApiError> {
        self.client.post(PATIENTS_PATH, input)
    }

    /// Full replace of the stored patient.
    pub fn update(&self, id: &str, patient: &Patient) -> Result<Patient, ApiError> {
        self.client.put(&format!("{PATIENTS_PATH}/{id}"), patient)
    }

    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{PATIENTS_PATH}/{id}"))
    }
}
