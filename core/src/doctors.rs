//! Doctor resource client. Same shape as the patient client, different
//! path segment and entity types.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{CreateDoctor, Doctor};

const DOCTORS_PATH: &str = "/api/doctors";

/// CRUD client for the doctors resource.
#[derive(Debug, Clone)]
pub struct DoctorApi {
    client: ApiClient,
}

impl DoctorApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All doctors, in server-defined order.
    pub fn get_all(&self) -> Result<Vec<Doctor>, ApiError> {
        self.client.get(DOCTORS_PATH)
    }

    pub fn get_one(&self, id: &str) -> Result<Doctor, ApiError> {
        self.client.get(&format!("{DOCTORS_PATH}/{id}"))
    }

    pub fn create(&self, input: &CreateDoctor) -> Result<Doctor, ApiError> {
        self.client.post(DOCTORS_PATH, input)
    }

    /// Full replace of the stored doctor.
    pub fn update(&self, id: &str, doctor: &Doctor) -> Result<Doctor, ApiError> {
        self.client.put(&format!("{DOCTORS_PATH}/{id}"), doctor)
    }

    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{DOCTORS_PATH}/{id}"))
    }
}
