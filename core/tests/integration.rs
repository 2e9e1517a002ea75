//! Full CRUD lifecycle tests against the live mock server.
//!
//! # Design
//! Each test starts the mock server on a random port, then drives the
//! resource clients over real HTTP. This exercises request building, the
//! camelCase wire format, and response decoding end-to-end.

use clinic_core::{ApiClient, ApiError, CreateDoctor, CreatePatient, DoctorApi, Gender, PatientApi};

/// Start the mock server on a random port and return its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn patient_crud_lifecycle() {
    let patients = PatientApi::new(ApiClient::new(&start_server()));

    // Step 1: list — should be empty.
    let all = patients.get_all().unwrap();
    assert!(all.is_empty(), "expected empty list");

    // Step 2: create a patient.
    let input = CreatePatient {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone: None,
        dob: Some("1990-04-12".parse().unwrap()),
        gender: Some(Gender::Female),
    };
    let created = patients.create(&input).unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.first_name, "Jane");
    assert_eq!(created.last_name, "Doe");
    assert_eq!(created.email, "jane@x.com");
    assert_eq!(created.gender, Some(Gender::Female));
    assert!(created.created_at.is_some());
    assert!(created.updated_at.is_some());
    let id = created.id.clone();

    // Step 3: get the created patient.
    let fetched = patients.get_one(&id).unwrap();
    assert_eq!(fetched, created);

    // Step 4: update — full replace.
    let mut edited = created.clone();
    edited.last_name = "Doe-Martin".to_string();
    edited.phone = Some("+33 1 23 45 67 89".to_string());
    let updated = patients.update(&id, &edited).unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.last_name, "Doe-Martin");
    assert_eq!(updated.phone.as_deref(), Some("+33 1 23 45 67 89"));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    // Step 5: list — should have one entry.
    let all = patients.get_all().unwrap();
    assert_eq!(all.len(), 1);

    // Step 6: delete — empty 204 body resolves cleanly.
    patients.delete(&id).unwrap();

    // Step 7: get after delete — HTTP 404.
    let err = patients.get_one(&id).unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 404, .. }));

    // Step 8: delete again — HTTP 404 as well.
    let err = patients.delete(&id).unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 404, .. }));

    // Step 9: list — empty again.
    let all = patients.get_all().unwrap();
    assert!(all.is_empty(), "expected empty list after delete");
}

#[test]
fn doctor_crud_lifecycle() {
    let doctors = DoctorApi::new(ApiClient::new(&start_server()));

    let input = CreateDoctor {
        first_name: "Paul".to_string(),
        last_name: "Martin".to_string(),
        email: "p.martin@clinic.fr".to_string(),
        phone: None,
        specialty: "Cardiology".to_string(),
        rpps: Some("10003456789".to_string()),
        clinic_address: None,
    };
    let created = doctors.create(&input).unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.specialty, "Cardiology");
    assert_eq!(created.rpps.as_deref(), Some("10003456789"));
    let id = created.id.clone();

    let mut edited = created.clone();
    edited.specialty = "Dermatology".to_string();
    edited.clinic_address = Some("12 rue de la Paix, Paris".to_string());
    let updated = doctors.update(&id, &edited).unwrap();
    assert_eq!(updated.specialty, "Dermatology");
    assert_eq!(updated.clinic_address.as_deref(), Some("12 rue de la Paix, Paris"));

    let all = doctors.get_all().unwrap();
    assert_eq!(all.len(), 1);

    doctors.delete(&id).unwrap();
    let err = doctors.get_one(&id).unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 404, .. }));
}

#[test]
fn unknown_id_surfaces_status_in_message() {
    let patients = PatientApi::new(ApiClient::new(&start_server()));

    // The mock answers 404 with an empty body, so the message carries the
    // numeric status.
    let err = patients.get_one("no-such-id").unwrap_err();
    assert_eq!(err.to_string(), "HTTP 404");
}

#[test]
fn concurrent_get_all_calls_resolve_independently() {
    let patients = PatientApi::new(ApiClient::new(&start_server()));

    let input = CreatePatient {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@x.com".to_string(),
        ..Default::default()
    };
    patients.create(&input).unwrap();

    std::thread::scope(|scope| {
        let a = scope.spawn(|| patients.get_all().unwrap());
        let b = scope.spawn(|| patients.get_all().unwrap());
        assert_eq!(a.join().unwrap().len(), 1);
        assert_eq!(b.join().unwrap().len(), 1);
    });
}

#[test]
fn create_rejected_by_server_propagates_as_http_error() {
    let base_url = start_server();
    let client = ApiClient::new(&base_url);

    // Bypass the typed payload to send a body the server rejects.
    let err = client
        .post::<serde_json::Value, serde_json::Value>(
            "/api/patients",
            &serde_json::json!({"firstName": "Jane"}),
        )
        .unwrap_err();
    match err {
        ApiError::Http { status, .. } => assert_eq!(status, 422),
        other => panic!("expected Http error, got: {other}"),
    }
}
