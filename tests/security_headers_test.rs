use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use tower::ServiceExt;
use web_essentials::security::{
    ContentTypeOption, EmbedderPolicy, FrameOption, OpenerPolicy, ReferrerPolicy, ResourcePolicy,
    SecurityHeadersRouterExt,
};
use web_essentials::{SecurityHeadersConfig, apply_config, ConfigBuilder};

fn app() -> Router {
    Router::new().route("/", get(|| async { "Hello" }))
}

async fn get_root(app: Router) -> axum::response::Response {
    app.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_frame_options_deny() {
    let response = get_root(app().add_frame_options(FrameOption::Deny)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-frame-options"], "deny");
}

#[tokio::test]
async fn test_referrer_policy_strict_origin_when_cross_origin() {
    let response =
        get_root(app().add_referrer_policy(ReferrerPolicy::StrictOriginWhenCrossOrigin)).await;

    assert_eq!(
        response.headers()["referrer-policy"],
        "strict-origin-when-cross-origin"
    );
}

#[tokio::test]
async fn test_all_security_headers_on_one_response() {
    let app = app()
        .add_content_type_options(ContentTypeOption::NoSniff)
        .add_frame_options(FrameOption::SameOrigin)
        .add_opener_policy(OpenerPolicy::SameOriginAllowPopups)
        .add_embedder_policy(EmbedderPolicy::RequireCorp)
        .add_resource_policy(ResourcePolicy::CrossOrigin)
        .add_referrer_policy(ReferrerPolicy::NoReferrerWhenDowngrade);

    let response = get_root(app).await;
    let headers = response.headers();

    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "sameorigin");
    assert_eq!(headers["cross-origin-opener-policy"], "same-origin-allow-popups");
    assert_eq!(headers["cross-origin-embedder-policy"], "require-corp");
    assert_eq!(headers["cross-origin-resource-policy"], "cross-origin");
    assert_eq!(headers["referrer-policy"], "no-referrer-when-downgrade");
}

#[tokio::test]
async fn test_every_referrer_policy_value_through_middleware() {
    for &policy in ReferrerPolicy::ALL {
        let response = get_root(app().add_referrer_policy(policy)).await;
        let values: Vec<_> = response.headers().get_all("referrer-policy").iter().collect();
        assert_eq!(values, vec![policy.as_str()]);
    }
}

#[tokio::test]
async fn test_same_header_twice_appends() {
    let app = app()
        .add_opener_policy(OpenerPolicy::SameOrigin)
        .add_opener_policy(OpenerPolicy::UnsafeNone);

    let response = get_root(app).await;
    let values: Vec<_> = response
        .headers()
        .get_all("cross-origin-opener-policy")
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();

    assert_eq!(values.len(), 2);
    assert!(values.contains(&"same-origin".to_string()));
    assert!(values.contains(&"unsafe-none".to_string()));
}

#[tokio::test]
async fn test_headers_added_to_not_found_responses() {
    let app = app().add_frame_options(FrameOption::Deny);

    let response = app
        .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["x-frame-options"], "deny");
}

#[tokio::test]
async fn test_headers_from_config() {
    let config = ConfigBuilder::new()
        .with_security(
            SecurityHeadersConfig::builder()
                .cross_origin_isolated()
                .resource_policy(ResourcePolicy::SameSite)
                .build(),
        )
        .with_static_files_enabled(false)
        .build()
        .unwrap();

    let response = get_root(apply_config(app(), &config).unwrap()).await;
    let headers = response.headers();

    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "deny");
    assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");
    assert_eq!(headers["cross-origin-opener-policy"], "same-origin");
    assert_eq!(headers["cross-origin-embedder-policy"], "require-corp");
    assert_eq!(headers["cross-origin-resource-policy"], "same-site");
}
