use std::time::{SystemTime, UNIX_EPOCH};

use xplore_client::{XploreClient, XploreClientError};

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

#[tokio::test]
#[ignore = "requires a running discovery service"]
async fn full_user_flow() {
    let base_url =
        std::env::var("XPLORE_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000/api".to_string());
    let mut client = XploreClient::new(base_url);

    let suffix = unique_suffix();
    let email = format!("smoke_{suffix}@example.com");
    let password = "password123";
    let preferences = vec!["model".to_string(), "dataset".to_string()];

    client
        .register("Smoke Test", &email, password, &preferences)
        .await
        .expect("register must succeed");

    let auth = client
        .login(&email, password)
        .await
        .expect("login must succeed");
    assert!(!auth.token.is_empty());
    assert_eq!(auth.user.email, email);
    assert!(client.get_token().is_some());

    let profile = client.get_user().await.expect("get_user must succeed");
    assert_eq!(profile.email, email);
    assert_eq!(profile.preferences, preferences);

    let results = client
        .search("machine learning", &["model".to_string()])
        .await
        .expect("search must succeed");

    if let Some(first) = results.first() {
        client
            .add_history(&first.url)
            .await
            .expect("add_history must succeed");

        let history = client.history().await.expect("history must succeed");
        assert!(history.iter().any(|item| item.url == first.url));
    }

    let recommendations = client
        .recommendations()
        .await
        .expect("recommendations must succeed");
    assert!(recommendations.len() <= 20);

    let stats = client.admin_stats().await.expect("stats must succeed");
    assert!(stats.total_users >= 1);

    let page = client
        .admin_resources(1, 20)
        .await
        .expect("admin_resources must succeed");
    assert!(page.total_pages >= 1);
    assert!(page.resources.len() <= 20);
}

#[tokio::test]
#[ignore = "requires a running discovery service"]
async fn protected_calls_require_a_token() {
    let base_url =
        std::env::var("XPLORE_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000/api".to_string());
    let client = XploreClient::new(base_url);

    let err = client
        .recommendations()
        .await
        .expect_err("call without token must fail");
    assert!(matches!(err, XploreClientError::Unauthorized));
}
