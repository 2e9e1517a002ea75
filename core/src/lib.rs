//! REST client core for a medical-office administration backend.
//!
//! # Overview
//! Typed CRUD access to the patients and doctors resources of a
//! conventional REST backend (`/api/patients`, `/api/doctors`). A single
//! request helper (`ApiClient`) performs the HTTP round-trip and decodes
//! JSON; `PatientApi` and `DoctorApi` are thin facades over it.
//!
//! # Design
//! - `ApiClient` holds only the resolved base URL and a reusable agent;
//!   calls share no mutable state and may run concurrently.
//! - Requests are built as plain-data `HttpRequest` values and responses
//!   normalized to `HttpResponse` before interpretation, so everything up
//!   to the wire is unit-testable without a network.
//! - Response bodies decode through serde at the boundary instead of being
//!   trusted as-is.
//! - Errors propagate unconditionally; retries, caching, and presentation
//!   belong to callers.

pub mod client;
pub mod doctors;
pub mod error;
pub mod http;
pub mod patients;
mod transport;
pub mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use doctors::DoctorApi;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use patients::PatientApi;
pub use types::{CreateDoctor, CreatePatient, Doctor, Gender, Patient};
