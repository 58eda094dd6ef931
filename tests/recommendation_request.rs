mod common;

use axum::http::StatusCode;
use common::{delete, get, post, put, state, ADMIN_TOKEN, USER_TOKEN};
use ucsb_api::entities::RecommendationRequest;

fn request(requester: &str, professor: &str, explanation: &str, requested: &str, needed: &str, done: bool) -> RecommendationRequest {
    RecommendationRequest {
        id: 0,
        requester_email: requester.into(),
        professor_email: professor.into(),
        explanation: explanation.into(),
        date_requested: requested.parse().unwrap(),
        date_needed: needed.parse().unwrap(),
        done,
    }
}

#[tokio::test]
async fn logged_out_users_cannot_get_all() {
    let s = state();
    assert_eq!(
        get(&s, "/api/recommendationrequests/all", None).await.status,
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn logged_in_users_can_get_all() {
    let s = state();
    assert_eq!(
        get(&s, "/api/recommendationrequests/all", Some(USER_TOKEN)).await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn logged_out_users_cannot_post() {
    let s = state();
    assert_eq!(
        post(&s, "/api/recommendationrequests/post", None).await.status,
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn logged_in_regular_users_cannot_post() {
    let s = state();
    assert_eq!(
        post(&s, "/api/recommendationrequests/post", Some(USER_TOKEN)).await.status,
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn logged_in_user_can_get_all_recommendationrequests() {
    let s = state();
    let rr1 = s
        .recommendation_requests
        .create(request(
            "student1@ucsb.edu",
            "prof1@ucsb.edu",
            "Applying for research program",
            "2022-04-20T09:30:00",
            "2022-05-01T23:59:00",
            false,
        ))
        .await
        .unwrap();
    let rr2 = s
        .recommendation_requests
        .create(request(
            "student2@ucsb.edu",
            "prof2@ucsb.edu",
            "Graduate school application",
            "2023-01-01T00:00:00",
            "2023-02-01T00:00:00",
            true,
        ))
        .await
        .unwrap();

    let r = get(&s, "/api/recommendationrequests/all", Some(USER_TOKEN)).await;

    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body, serde_json::to_string(&vec![rr1, rr2]).unwrap());
}

#[tokio::test]
async fn an_admin_user_can_post_a_new_recommendationrequest() {
    let s = state();

    let r = post(
        &s,
        "/api/recommendationrequests/post?requesterEmail=student@ucsb.edu&professorEmail=advisor@ucsb.edu\
         &explanation=Recommendation%20for%20scholarship&dateRequested=2022-04-20T09:30:00\
         &dateNeeded=2022-05-01T23:59:00&done=true",
        Some(ADMIN_TOKEN),
    )
    .await;

    assert_eq!(r.status, StatusCode::OK);
    let expected = RecommendationRequest {
        id: 1,
        ..request(
            "student@ucsb.edu",
            "advisor@ucsb.edu",
            "Recommendation for scholarship",
            "2022-04-20T09:30:00",
            "2022-05-01T23:59:00",
            true,
        )
    };
    assert_eq!(r.body, serde_json::to_string(&expected).unwrap());
    assert_eq!(s.recommendation_requests.list().await.unwrap(), vec![expected]);
}

#[tokio::test]
async fn get_by_id_found_and_missing() {
    let s = state();
    let rr = s
        .recommendation_requests
        .create(request("s@ucsb.edu", "p@ucsb.edu", "PhD", "2022-04-20T09:30:00", "2022-05-01T23:59:00", false))
        .await
        .unwrap();

    let found = get(&s, &format!("/api/recommendationrequests?id={}", rr.id), Some(USER_TOKEN)).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body, serde_json::to_string(&rr).unwrap());

    let missing = get(&s, "/api/recommendationrequests?id=7", Some(USER_TOKEN)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.json()["type"], "EntityNotFoundException");
    assert_eq!(missing.json()["message"], "RecommendationRequest with id 7 not found");
}

#[tokio::test]
async fn admin_can_mark_request_done() {
    let s = state();
    let rr = s
        .recommendation_requests
        .create(request("s@ucsb.edu", "p@ucsb.edu", "PhD", "2022-04-20T09:30:00", "2022-05-01T23:59:00", false))
        .await
        .unwrap();
    let edited = RecommendationRequest {
        done: true,
        explanation: "PhD programs".into(),
        ..rr.clone()
    };
    let body = serde_json::to_string(&edited).unwrap();

    let r = put(&s, &format!("/api/recommendationrequests?id={}", rr.id), Some(ADMIN_TOKEN), body.clone()).await;

    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body, body);
    assert_eq!(s.recommendation_requests.list().await.unwrap(), vec![edited]);
}

#[tokio::test]
async fn edit_missing_request_is_404() {
    let s = state();
    let body = serde_json::to_string(&request(
        "s@ucsb.edu",
        "p@ucsb.edu",
        "PhD",
        "2022-04-20T09:30:00",
        "2022-05-01T23:59:00",
        true,
    ))
    .unwrap();

    let r = put(&s, "/api/recommendationrequests?id=67", Some(ADMIN_TOKEN), body).await;

    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert_eq!(r.json()["message"], "RecommendationRequest with id 67 not found");
    assert!(s.recommendation_requests.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn admin_can_delete_and_second_delete_is_404() {
    let s = state();
    let rr = s
        .recommendation_requests
        .create(request("s@ucsb.edu", "p@ucsb.edu", "PhD", "2022-04-20T09:30:00", "2022-05-01T23:59:00", false))
        .await
        .unwrap();
    let uri = format!("/api/recommendationrequests?id={}", rr.id);

    let first = delete(&s, &uri, Some(ADMIN_TOKEN)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.json()["message"], format!("RecommendationRequest with id {} deleted", rr.id));

    let second = delete(&s, &uri, Some(ADMIN_TOKEN)).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
}
