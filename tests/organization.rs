mod common;

use axum::http::StatusCode;
use common::{delete, get, post, put, state, ADMIN_TOKEN, USER_TOKEN};
use ucsb_api::entities::UcsbOrganization;

fn badminton() -> UcsbOrganization {
    UcsbOrganization {
        org_code: "UCSBbadminton".into(),
        org_translation_short: "Single".into(),
        org_translation: "Mix".into(),
        inactive: true,
    }
}

#[tokio::test]
async fn logged_out_users_cannot_get_all() {
    let s = state();
    assert_eq!(get(&s, "/api/UCSBOrganization/all", None).await.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn logged_in_users_can_get_all() {
    let s = state();
    assert_eq!(
        get(&s, "/api/UCSBOrganization/all", Some(USER_TOKEN)).await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn logged_out_users_cannot_post() {
    let s = state();
    assert_eq!(post(&s, "/api/UCSBOrganization/post", None).await.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn logged_in_regular_users_cannot_post() {
    let s = state();
    assert_eq!(
        post(&s, "/api/UCSBOrganization/post", Some(USER_TOKEN)).await.status,
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn logged_in_user_can_get_all_ucsborganization() {
    let s = state();
    s.organizations.create(badminton()).await.unwrap();

    let r = get(&s, "/api/UCSBOrganization/all", Some(USER_TOKEN)).await;

    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body, serde_json::to_string(&vec![badminton()]).unwrap());
}

#[tokio::test]
async fn an_admin_user_can_post_a_new_organization() {
    let s = state();

    let r = post(
        &s,
        "/api/UCSBOrganization/post?orgCode=UCSBbadminton&orgTranslationShort=Single&orgTranslation=Mix&inactive=true",
        Some(ADMIN_TOKEN),
    )
    .await;

    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(
        r.body,
        r#"{"orgCode":"UCSBbadminton","orgTranslationShort":"Single","orgTranslation":"Mix","inactive":true}"#
    );
    assert_eq!(s.organizations.list().await.unwrap(), vec![badminton()]);
}

#[tokio::test]
async fn get_by_org_code() {
    let s = state();
    s.organizations.create(badminton()).await.unwrap();

    let found = get(&s, "/api/UCSBOrganization?id=UCSBbadminton", Some(USER_TOKEN)).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body, serde_json::to_string(&badminton()).unwrap());

    let missing = get(&s, "/api/UCSBOrganization?id=KRC", Some(USER_TOKEN)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.json()["message"], "UCSBOrganization with id KRC not found");
}

#[tokio::test]
async fn admin_can_edit_organization_but_not_its_code() {
    let s = state();
    s.organizations.create(badminton()).await.unwrap();
    let body = r#"{"orgCode":"OTHER","orgTranslationShort":"Doubles","orgTranslation":"Badminton Club","inactive":false}"#;

    let r = put(&s, "/api/UCSBOrganization?id=UCSBbadminton", Some(ADMIN_TOKEN), body.to_string()).await;

    assert_eq!(r.status, StatusCode::OK);
    let expected = UcsbOrganization {
        org_code: "UCSBbadminton".into(),
        org_translation_short: "Doubles".into(),
        org_translation: "Badminton Club".into(),
        inactive: false,
    };
    assert_eq!(r.body, serde_json::to_string(&expected).unwrap());
    assert_eq!(s.organizations.list().await.unwrap(), vec![expected]);
}

#[tokio::test]
async fn edit_missing_organization_is_404() {
    let s = state();
    let body = serde_json::to_string(&badminton()).unwrap();

    let r = put(&s, "/api/UCSBOrganization?id=UCSBbadminton", Some(ADMIN_TOKEN), body).await;

    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert!(s.organizations.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn admin_can_delete_organization() {
    let s = state();
    s.organizations.create(badminton()).await.unwrap();

    let r = delete(&s, "/api/UCSBOrganization?id=UCSBbadminton", Some(ADMIN_TOKEN)).await;

    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.json()["message"], "UCSBOrganization with id UCSBbadminton deleted");
    assert!(s.organizations.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn posting_an_existing_org_code_replaces_it() {
    let s = state();
    let first = post(
        &s,
        "/api/UCSBOrganization/post?orgCode=UCSBbadminton&orgTranslationShort=Single&orgTranslation=Mix&inactive=true",
        Some(ADMIN_TOKEN),
    )
    .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = post(
        &s,
        "/api/UCSBOrganization/post?orgCode=UCSBbadminton&orgTranslationShort=Doubles&orgTranslation=Badminton%20Club&inactive=false",
        Some(ADMIN_TOKEN),
    )
    .await;
    assert_eq!(second.status, StatusCode::OK);

    let r = get(&s, "/api/UCSBOrganization/all", Some(USER_TOKEN)).await;
    assert_eq!(
        r.json(),
        serde_json::json!([{
            "orgCode": "UCSBbadminton",
            "orgTranslationShort": "Doubles",
            "orgTranslation": "Badminton Club",
            "inactive": false
        }])
    );
}
