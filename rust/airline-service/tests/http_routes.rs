use airline_core::db::DbOpenConfig;
use airline_core::{seeds, Database};
use airline_service::{build_router, AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

fn app(seeded: bool) -> Router {
    let mut db = Database::open_in_memory().expect("open store");
    if seeded {
        seeds::apply_all(&mut db).expect("apply seeds");
    }
    build_router(AppState::new(db))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let v: Value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, v)
}

#[tokio::test]
async fn info_is_live_with_and_without_data() {
    for seeded in [false, true] {
        let app = app(seeded);
        let (status, v) = send(&app, "GET", "/api/v1/info", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v, json!({"success": true, "message": "API is live", "data": {}, "error": {}}));
    }
}

#[tokio::test]
async fn prefixes_dispatch_to_their_own_sub_router() {
    let app = app(true);

    let (status, v) = send(&app, "GET", "/api/v1/cities/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["name"], "New Delhi");
    assert!(v["data"].get("modelNumber").is_none());

    let (status, v) = send(&app, "GET", "/api/v1/airplanes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["modelNumber"], "airbus388");
    assert_eq!(v["data"]["capacity"], 900);
    assert!(v["data"].get("name").is_none());

    // Seeds write no airports or flights.
    let (status, v) = send(&app, "GET", "/api/v1/airports/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(v["success"], false);
    let (status, _) = send(&app, "GET", "/api/v1/flights/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, v) = send(&app, "GET", "/api/v1/cities", None).await;
    let names: Vec<&str> = v["data"].as_array().unwrap().iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["New Delhi", "London", "Tokyo"]);
    let (_, v) = send(&app, "GET", "/api/v1/airplanes", None).await;
    assert_eq!(v["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_paths_get_enveloped_404() {
    let app = app(false);
    for uri in ["/api/v1/boats", "/api/v2/info", "/info", "/"] {
        let (status, v) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(v["error"]["code"], "not_found");
    }
}

#[tokio::test]
async fn city_crud_over_http() {
    let app = app(true);

    let (status, v) = send(&app, "POST", "/api/v1/cities", Some(json!({"name": "Paris"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = v["data"]["id"].as_i64().unwrap();
    assert_eq!(v["data"]["name"], "Paris");

    let (status, v) = send(&app, "POST", "/api/v1/cities", Some(json!({"name": "London"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(v["error"]["code"], "conflict");

    let (status, v) = send(&app, "PATCH", &format!("/api/v1/cities/{id}"), Some(json!({"name": "Lyon"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["name"], "Lyon");

    let (status, v) = send(&app, "DELETE", &format!("/api/v1/cities/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["deleted"], 1);

    let (status, _) = send(&app, "GET", &format!("/api/v1/cities/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", &format!("/api/v1/cities/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_input_is_bad_request() {
    let app = app(true);

    let (status, v) = send(&app, "POST", "/api/v1/airplanes", Some(json!({"capacity": 10}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["success"], false);

    let (status, _) = send(&app, "GET", "/api/v1/airplanes/not-a-number", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/api/v1/airplanes", Some(json!({"modelNumber": "x1", "capacity": 0}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn rejected_queries_and_verbs_keep_the_envelope() {
    let app = app(true);

    let (status, v) = send(&app, "GET", "/api/v1/flights?trips=DEL-BOM&trips=BOM-DEL", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["success"], false);
    assert_eq!(v["error"]["code"], "bad_request");
    assert!(v["error"]["explanation"].as_str().unwrap().contains("trips"), "{v}");

    for (method, uri) in [("DELETE", "/api/v1/flights/1"), ("PUT", "/api/v1/cities/1"), ("POST", "/api/v1/info")] {
        let (status, v) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_eq!(v["success"], false);
        assert_eq!(v["error"]["code"], "method_not_allowed");
        assert!(v["error"]["explanation"].as_str().unwrap().contains(uri), "{v}");
    }

    // Rejected verbs leave the row alone.
    let (status, _) = send(&app, "GET", "/api/v1/cities/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn airport_address_can_be_cleared_with_null() {
    let app = app(true);
    let body = json!({"name": "Heathrow", "code": "LHR", "address": "Hounslow", "cityId": 2});
    let (status, v) = send(&app, "POST", "/api/v1/airports", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = v["data"]["id"].as_i64().unwrap();

    let (_, v) = send(&app, "PATCH", &format!("/api/v1/airports/{id}"), Some(json!({"code": "LHX"}))).await;
    assert_eq!(v["data"]["address"], "Hounslow");

    let (status, v) = send(&app, "PATCH", &format!("/api/v1/airports/{id}"), Some(json!({"address": null}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["address"], Value::Null);
    assert_eq!(v["data"]["code"], "LHX");
}

#[tokio::test]
async fn airplane_patch_keeps_unset_fields() {
    let app = app(true);
    let (status, v) = send(&app, "PATCH", "/api/v1/airplanes/2", Some(json!({"capacity": 550}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["modelNumber"], "airbus389");
    assert_eq!(v["data"]["capacity"], 550);

    let (status, _) = send(&app, "PATCH", "/api/v1/airplanes/99", Some(json!({"capacity": 1}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn flights_search_and_seat_booking() {
    let app = app(true);

    // New Delhi (1) and London (2) come from the city seed.
    for (name, code, city) in [("Indira Gandhi", "DEL", 1), ("Heathrow", "LHR", 2)] {
        let (status, _) = send(&app, "POST", "/api/v1/airports", Some(json!({"name": name, "code": code, "cityId": city}))).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, _) = send(&app, "POST", "/api/v1/airports", Some(json!({"name": "Ghost", "code": "GHO", "cityId": 42}))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let flights = [
        ("AI111", "DEL", "LHR", "2025-07-01T02:00:00Z", "2025-07-01T11:00:00Z", 52000, 4),
        ("AI112", "DEL", "LHR", "2025-07-02T02:00:00Z", "2025-07-02T11:00:00Z", 48000, 200),
        ("AI161", "LHR", "DEL", "2025-07-01T20:00:00Z", "2025-07-02T09:00:00Z", 50000, 150),
    ];
    for (number, dep, arr, dep_t, arr_t, price, seats) in flights {
        let body = json!({
            "flightNumber": number,
            "airplaneId": 1,
            "departureAirportId": dep,
            "arrivalAirportId": arr,
            "departureTime": dep_t,
            "arrivalTime": arr_t,
            "price": price,
            "boardingGate": "G7",
            "totalSeats": seats
        });
        let (status, v) = send(&app, "POST", "/api/v1/flights", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "{v}");
    }

    let (status, v) = send(&app, "GET", "/api/v1/flights?trips=DEL-LHR&sort=price_ASC", None).await;
    assert_eq!(status, StatusCode::OK);
    let numbers: Vec<&str> = v["data"].as_array().unwrap().iter().map(|f| f["flightNumber"].as_str().unwrap()).collect();
    assert_eq!(numbers, vec!["AI112", "AI111"]);

    let (_, v) = send(&app, "GET", "/api/v1/flights?tripDate=2025-07-01&travellers=10", None).await;
    let numbers: Vec<&str> = v["data"].as_array().unwrap().iter().map(|f| f["flightNumber"].as_str().unwrap()).collect();
    assert_eq!(numbers, vec!["AI161"]);

    let (status, v) = send(&app, "GET", "/api/v1/flights?trips=DEL-DEL", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"]["code"], "bad_request");

    let (status, v) = send(&app, "PATCH", "/api/v1/flights/1/seats", Some(json!({"seats": 3}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["totalSeats"], 1);

    let (status, _) = send(&app, "PATCH", "/api/v1/flights/1/seats", Some(json!({"seats": 2}))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, v) = send(&app, "PATCH", "/api/v1/flights/1/seats", Some(json!({"seats": 2, "dec": false}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["totalSeats"], 3);

    let (status, _) = send(&app, "PATCH", "/api/v1/flights/9/seats", Some(json!({"seats": 1}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn file_backed_store_serves_seeded_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("airline.db");
    {
        let mut db = Database::open(&path, &DbOpenConfig::default()).unwrap();
        seeds::apply_all(&mut db).unwrap();
    }
    let db = Database::open(&path, &DbOpenConfig::default()).unwrap();
    let app = build_router(AppState::new(db));
    let (status, v) = send(&app, "GET", "/api/v1/cities/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["name"], "Tokyo");
}
