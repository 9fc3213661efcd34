use serde_json::json;
use uuid::Uuid;

mod unit;

const BASE_URL: &str = "http://127.0.0.1:8000/api";
const TEST_JWT_SECRET: &str = "test-secret-key"; // Should match your JWT_SECRET

/// Helper function to create test JWT tokens
fn create_test_jwt(user_id: Uuid, email: &str) -> String {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

    #[derive(serde::Serialize)]
    struct TestClaims {
        sub: Uuid,
        email: String,
        exp: u64,
        iat: u64,
        jti: String,
    }

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = TestClaims {
        sub: user_id,
        email: email.to_string(),
        exp: now + 3600, // 1 hour from now
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_ref()),
    )
    .unwrap()
}

async fn login(client: &reqwest::Client, email: &str, password: &str) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to call login");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    body["data"]["access_token"]
        .as_str()
        .expect("Login response carries an access token")
        .to_string()
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_requests_without_token_are_rejected() {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/dashboard/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_token_for_unknown_user_is_rejected() {
    let client = reqwest::Client::new();
    let token = create_test_jwt(Uuid::new_v4(), "ghost@studio.test");

    let response = client
        .get(format!("{}/team-members", BASE_URL))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires running server and seeded admin user"]
async fn test_room_creation_seeds_five_pending_stages() {
    let client = reqwest::Client::new();
    let token = login(&client, "admin@studio.test", "password123").await;

    let response = client
        .post(format!("{}/projects", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "name": format!("Test Project {}", Uuid::new_v4()) }))
        .send()
        .await
        .expect("Failed to create project");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let project: serde_json::Value = response.json().await.unwrap();
    let project_id = project["data"]["id"].as_str().unwrap().to_string();

    let response = client
        .post(format!("{}/projects/{}/rooms", BASE_URL, project_id))
        .bearer_auth(&token)
        .json(&json!({ "name": "Living Room" }))
        .send()
        .await
        .expect("Failed to create room");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let room: serde_json::Value = response.json().await.unwrap();
    let stages = room["data"]["stages"].as_array().unwrap();
    assert_eq!(stages.len(), 5);
    for stage in stages {
        assert_eq!(stage["status"], "pending");
        assert!(stage.get("assignee_id").is_some());
        assert!(stage["assignee_id"].is_null());
    }
    // Stages come back in display order.
    assert_eq!(stages[0]["phase_type"], "design_concept");
    assert_eq!(stages[4]["phase_type"], "ffe");
}

#[tokio::test]
#[ignore = "requires running server and seeded admin user"]
async fn test_stage_lifecycle_and_cascade() {
    let client = reqwest::Client::new();
    let token = login(&client, "admin@studio.test", "password123").await;

    // Fresh room to work against.
    let response = client
        .post(format!("{}/projects", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "name": format!("Lifecycle {}", Uuid::new_v4()) }))
        .send()
        .await
        .unwrap();
    let project: serde_json::Value = response.json().await.unwrap();
    let project_id = project["data"]["id"].as_str().unwrap().to_string();

    let response = client
        .post(format!("{}/projects/{}/rooms", BASE_URL, project_id))
        .bearer_auth(&token)
        .json(&json!({ "name": "Kitchen" }))
        .send()
        .await
        .unwrap();
    let room: serde_json::Value = response.json().await.unwrap();
    let stages = room["data"]["stages"].as_array().unwrap().clone();
    let first_stage_id = stages[0]["id"].as_str().unwrap().to_string();

    // start: pending -> in_progress
    let response = client
        .patch(format!("{}/stages/{}", BASE_URL, first_stage_id))
        .bearer_auth(&token)
        .json(&json!({ "action": "start" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["stage"]["status"], "in_progress");
    assert!(!body["stage"]["started_at"].is_null());

    // complete: in_progress -> complete, next phase auto-starts and is
    // reported in `affected`.
    let response = client
        .patch(format!("{}/stages/{}", BASE_URL, first_stage_id))
        .bearer_auth(&token)
        .json(&json!({ "action": "complete" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["stage"]["status"], "complete");
    assert!(!body["stage"]["completed_at"].is_null());

    let affected = body["affected"].as_array().unwrap();
    assert_eq!(affected.len(), 1);
    assert_eq!(affected[0]["phase_type"], "three_d");
    assert_eq!(affected[0]["status"], "in_progress");

    // Completing an already complete stage is a conflict and leaves state
    // untouched.
    let response = client
        .patch(format!("{}/stages/{}", BASE_URL, first_stage_id))
        .bearer_auth(&token)
        .json(&json!({ "action": "complete" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CONFLICT);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("complete"));
}

#[tokio::test]
#[ignore = "requires running server and seeded admin user"]
async fn test_bulk_assign_reports_per_item_outcomes() {
    let client = reqwest::Client::new();
    let token = login(&client, "admin@studio.test", "password123").await;

    let response = client
        .post(format!("{}/projects", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "name": format!("Bulk {}", Uuid::new_v4()) }))
        .send()
        .await
        .unwrap();
    let project: serde_json::Value = response.json().await.unwrap();
    let project_id = project["data"]["id"].as_str().unwrap().to_string();

    let response = client
        .post(format!("{}/projects/{}/rooms", BASE_URL, project_id))
        .bearer_auth(&token)
        .json(&json!({ "name": "Bedroom" }))
        .send()
        .await
        .unwrap();
    let room: serde_json::Value = response.json().await.unwrap();
    let room_id = room["data"]["id"].as_str().unwrap().to_string();

    // One valid unassignment, one assignment to a member that does not exist.
    // The batch must still come back 200 with the failure itemized.
    let response = client
        .patch(format!("{}/rooms/{}/assignments", BASE_URL, room_id))
        .bearer_auth(&token)
        .json(&json!({
            "assignments": {
                "design_concept": null,
                "drawings": Uuid::new_v4(),
            }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    let succeeded = body["succeeded"].as_array().unwrap();
    let failed = body["failed"].as_array().unwrap();
    assert_eq!(succeeded.len(), 1);
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0]["phase_type"], "drawings");
    assert!(failed[0]["error"].is_string());
}

#[tokio::test]
#[ignore = "requires running server and seeded admin user"]
async fn test_eligible_members_endpoint_filters_by_phase_role() {
    let client = reqwest::Client::new();
    let token = login(&client, "admin@studio.test", "password123").await;

    let response = client
        .post(format!("{}/projects", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "name": format!("Eligibility {}", Uuid::new_v4()) }))
        .send()
        .await
        .unwrap();
    let project: serde_json::Value = response.json().await.unwrap();
    let project_id = project["data"]["id"].as_str().unwrap().to_string();

    let response = client
        .post(format!("{}/projects/{}/rooms", BASE_URL, project_id))
        .bearer_auth(&token)
        .json(&json!({ "name": "Study" }))
        .send()
        .await
        .unwrap();
    let room: serde_json::Value = response.json().await.unwrap();
    let stages = room["data"]["stages"].as_array().unwrap();
    let design_stage_id = stages[0]["id"].as_str().unwrap();

    let response = client
        .get(format!(
            "{}/stages/{}/eligible-members",
            BASE_URL, design_stage_id
        ))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.unwrap();
    for member in body["data"].as_array().unwrap() {
        assert_eq!(member["role"], "designer");
    }
}

#[tokio::test]
#[ignore = "requires running server and seeded admin user"]
async fn test_dashboard_stats_shape() {
    let client = reqwest::Client::new();
    let token = login(&client, "admin@studio.test", "password123").await;

    let response = client
        .get(format!("{}/dashboard/stats", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.unwrap();
    let stats = &body["data"];
    for field in [
        "pending",
        "in_progress",
        "complete",
        "not_applicable",
        "overdue",
        "total",
    ] {
        assert!(stats.get(field).is_some(), "missing stats field {}", field);
    }
}

#[tokio::test]
#[ignore = "requires running server and seeded admin user"]
async fn test_due_date_change_refreshes_dashboard_overdue_count() {
    let client = reqwest::Client::new();
    let token = login(&client, "admin@studio.test", "password123").await;

    let response = client
        .post(format!("{}/projects", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "name": format!("Overdue {}", Uuid::new_v4()) }))
        .send()
        .await
        .unwrap();
    let project: serde_json::Value = response.json().await.unwrap();
    let project_id = project["data"]["id"].as_str().unwrap().to_string();

    let response = client
        .post(format!("{}/projects/{}/rooms", BASE_URL, project_id))
        .bearer_auth(&token)
        .json(&json!({ "name": "Hallway" }))
        .send()
        .await
        .unwrap();
    let room: serde_json::Value = response.json().await.unwrap();
    let stage_id = room["data"]["stages"][0]["id"].as_str().unwrap().to_string();

    // Warm the cache.
    let response = client
        .get(format!("{}/dashboard/stats", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let before: serde_json::Value = response.json().await.unwrap();
    let overdue_before = before["data"]["overdue"].as_i64().unwrap();

    // Push the stage past due. The cached stats must be dropped so the next
    // poll sees the change immediately, not after the TTL lapses.
    let response = client
        .patch(format!("{}/stages/{}/due-date", BASE_URL, stage_id))
        .bearer_auth(&token)
        .json(&json!({ "due_date": "2020-01-01" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/dashboard/stats", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let after: serde_json::Value = response.json().await.unwrap();
    assert_eq!(after["data"]["overdue"].as_i64().unwrap(), overdue_before + 1);
}
