//! API Integration Tests
//!
//! Each test spawns the API on an ephemeral port with an in-memory brand
//! store and a temporary upload directory.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, TestServer, BRANDS_PATH, VERIFIED_BRANDS_PATH,
};
use futures_util::future::join_all;
use reqwest::StatusCode;
use shop_core::BrandRepository;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready_reports_store_outage() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.repo.set_unavailable(true);

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body["checks"]["database"], "unhealthy");
}

// ============================================================================
// Brand Creation Tests
// ============================================================================

#[tokio::test]
async fn test_create_brand() {
    let server = TestServer::start().await.unwrap();
    let token = server.token(7001).unwrap();
    let form = BrandForm::unique();
    let slug = form.slug.clone();

    let response = server
        .post_multipart(BRANDS_PATH, Some(&token), form.into_form().unwrap())
        .await
        .unwrap();
    let created: CreatedBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.message, "Brand uploaded successfully");
    assert_eq!(created.brand.slug, slug);
    assert_eq!(created.brand.creator_id, "7001");
    assert_eq!(created.brand.created_by, "seller");
    assert_eq!(created.brand.status, "pending");
    assert!(created.brand.is_active);
    assert!(created.brand.official);
    assert!(created.brand.logo.starts_with("/uploads/sellerBrand/"));
    assert!(created.brand.logo.ends_with("_logo.png"));
    assert_eq!(created.brand.seo_tags.keywords, vec!["shoes", "sport"]);
    assert_eq!(server.stored_files(), 1);
    assert_eq!(server.repo.len(), 1);
}

#[tokio::test]
async fn test_create_brand_accepts_supported_image_types() {
    let server = TestServer::start().await.unwrap();
    let token = server.token(7002).unwrap();

    for logo in [LogoFile::jpeg(), LogoFile::png(), LogoFile::webp()] {
        let form = BrandForm::unique().with_logo(Some(logo)).into_form().unwrap();
        let response = server
            .post_multipart(BRANDS_PATH, Some(&token), form)
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    assert_eq!(server.stored_files(), 3);
}

#[tokio::test]
async fn test_create_brand_rejects_unsupported_type() {
    let server = TestServer::start().await.unwrap();
    let token = server.token(7003).unwrap();

    for logo in [
        LogoFile::new("anim.gif", "image/gif", b"GIF89a"),
        LogoFile::new("notes.txt", "text/plain", b"hello"),
        LogoFile::new("doc.pdf", "application/pdf", b"%PDF-1.7"),
    ] {
        let form = BrandForm::unique().with_logo(Some(logo)).into_form().unwrap();
        let response = server
            .post_multipart(BRANDS_PATH, Some(&token), form)
            .await
            .unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.message, "Error uploading file");
        assert_eq!(
            body.error.as_deref(),
            Some("Only .jpeg, .png, and .webp files are supported")
        );
    }

    assert_eq!(server.stored_files(), 0);
    assert!(server.repo.is_empty());
}

#[tokio::test]
async fn test_create_brand_without_logo() {
    let server = TestServer::start().await.unwrap();
    let token = server.token(7004).unwrap();
    let form = BrandForm::unique().with_logo(None).into_form().unwrap();

    let response = server
        .post_multipart(BRANDS_PATH, Some(&token), form)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.message, "No file uploaded.");
    assert!(server.repo.is_empty());
}

#[tokio::test]
async fn test_create_brand_duplicate_slug() {
    let server = TestServer::start().await.unwrap();
    let token = server.token(7005).unwrap();
    let slug = format!("dup-{}", unique_suffix());

    let first = BrandForm::unique().with_slug(&slug).into_form().unwrap();
    let response = server
        .post_multipart(BRANDS_PATH, Some(&token), first)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let second = BrandForm::unique().with_slug(&slug).into_form().unwrap();
    let response = server
        .post_multipart(BRANDS_PATH, Some(&token), second)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.message, "Brand with this slug already exists.");
    assert_eq!(server.repo.len(), 1);
    // The rejected request's logo is removed
    assert_eq!(server.stored_files(), 1);
}

#[tokio::test]
async fn test_concurrent_duplicate_slugs_store_one_brand() {
    let server = TestServer::start().await.unwrap();
    let token = server.token(7006).unwrap();
    let slug = format!("race-{}", unique_suffix());

    let attempts = (0..8).map(|_| {
        let form = BrandForm::unique().with_slug(&slug).into_form().unwrap();
        server.post_multipart(BRANDS_PATH, Some(&token), form)
    });
    let responses = join_all(attempts).await;

    let created = responses
        .iter()
        .filter(|r| r.as_ref().is_ok_and(|r| r.status() == StatusCode::CREATED))
        .count();
    assert_eq!(created, 1);
    assert_eq!(server.repo.len(), 1);
    assert_eq!(server.stored_files(), 1);
}

#[tokio::test]
async fn test_create_brand_keywords_split_on_commas() {
    let server = TestServer::start().await.unwrap();
    let token = server.token(7007).unwrap();

    let cases: [(&str, Vec<&str>); 4] = [
        ("a,b,c", vec!["a", "b", "c"]),
        ("a", vec!["a"]),
        ("", vec![""]),
        ("a, b,,", vec!["a", " b", "", ""]),
    ];

    for (input, expected) in cases {
        let form = BrandForm::unique().with_keywords(input).into_form().unwrap();
        let response = server
            .post_multipart(BRANDS_PATH, Some(&token), form)
            .await
            .unwrap();
        let created: CreatedBody = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(created.brand.seo_tags.keywords, expected, "input {input:?}");
    }
}

#[tokio::test]
async fn test_create_brand_accepts_long_fields() {
    let server = TestServer::start().await.unwrap();
    let token = server.token(7008).unwrap();
    let mut form = BrandForm::unique();
    form.name = "N".repeat(300);
    form.description = "D".repeat(6000);
    form.seo_title = "T".repeat(201);
    form.seo_description = "S".repeat(1500);

    let response = server
        .post_multipart(BRANDS_PATH, Some(&token), form.into_form().unwrap())
        .await
        .unwrap();
    let created: CreatedBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.brand.name.len(), 300);
    assert_eq!(created.brand.description.len(), 6000);
    assert_eq!(created.brand.seo_tags.title.len(), 201);
    assert_eq!(created.brand.seo_tags.description.len(), 1500);
    assert_eq!(server.stored_files(), 1);
}

#[tokio::test]
async fn test_create_brand_requires_auth() {
    let server = TestServer::start().await.unwrap();
    let form = BrandForm::unique().into_form().unwrap();

    let response = server.post_multipart(BRANDS_PATH, None, form).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(server.stored_files(), 0);
}

#[tokio::test]
async fn test_create_brand_rejects_oversized_logo() {
    let server = TestServer::start_with_limit(1).await.unwrap();
    let token = server.token(7008).unwrap();
    let big = LogoFile::new("big.png", "image/png", &vec![0u8; 1024 * 1024 + 1]);
    let form = BrandForm::unique().with_logo(Some(big)).into_form().unwrap();

    let response = server
        .post_multipart(BRANDS_PATH, Some(&token), form)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.message, "Error uploading file");
    assert_eq!(server.stored_files(), 0);
}

#[tokio::test]
async fn test_create_brand_store_failure_is_generic() {
    let server = TestServer::start().await.unwrap();
    let token = server.token(7009).unwrap();
    server.repo.set_unavailable(true);

    let form = BrandForm::unique().into_form().unwrap();
    let response = server
        .post_multipart(BRANDS_PATH, Some(&token), form)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    assert_eq!(body.message, "Server error, please try again later.");
    assert!(body.error.is_none());
    assert_eq!(server.stored_files(), 0);
}

#[tokio::test]
async fn test_uploaded_logo_is_served() {
    let server = TestServer::start().await.unwrap();
    let token = server.token(7010).unwrap();
    let logo = LogoFile::png();
    let form = BrandForm::unique()
        .with_logo(Some(logo.clone()))
        .into_form()
        .unwrap();

    let response = server
        .post_multipart(BRANDS_PATH, Some(&token), form)
        .await
        .unwrap();
    let created: CreatedBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&created.brand.logo).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.bytes().await.unwrap().as_ref(), logo.bytes.as_slice());
}

// ============================================================================
// Brand Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_brands_empty() {
    let server = TestServer::start().await.unwrap();
    let token = server.token(8001).unwrap();

    let response = server.get_auth(BRANDS_PATH, &token).await.unwrap();
    let list: ListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.message, "No brands found created by this seller.");
    assert!(list.brands.is_empty());

    let response = server.get_auth(VERIFIED_BRANDS_PATH, &token).await.unwrap();
    let list: ListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.message, "No verified brands found created by this seller.");
    assert!(list.brands.is_empty());
}

#[tokio::test]
async fn test_list_brands_only_own_newest_first() {
    let server = TestServer::start().await.unwrap();
    let owner = server.token(8002).unwrap();
    let other = server.token(8003).unwrap();

    let mut slugs = Vec::new();
    for token in [&owner, &other, &owner] {
        let form = BrandForm::unique();
        if token == &owner {
            slugs.push(form.slug.clone());
        }
        let response = server
            .post_multipart(BRANDS_PATH, Some(token), form.into_form().unwrap())
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get_auth(BRANDS_PATH, &owner).await.unwrap();
    let list: ListBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(list.message, "Seller brands retrieved successfully");
    let listed: Vec<_> = list.brands.iter().map(|b| b.slug.clone()).collect();
    slugs.reverse();
    assert_eq!(listed, slugs);
    assert!(list.brands.iter().all(|b| b.creator_id == "8002"));
}

#[tokio::test]
async fn test_list_verified_brands() {
    let server = TestServer::start().await.unwrap();
    let token = server.token(8004).unwrap();

    let form = BrandForm::unique().into_form().unwrap();
    let response = server
        .post_multipart(BRANDS_PATH, Some(&token), form)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    server
        .repo
        .insert_if_absent(&verified_brand(1, 8004, "verified-own"))
        .await
        .unwrap();
    server
        .repo
        .insert_if_absent(&verified_brand(2, 8005, "verified-other"))
        .await
        .unwrap();

    let response = server.get_auth(VERIFIED_BRANDS_PATH, &token).await.unwrap();
    let list: ListBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(list.message, "Verified seller brands retrieved successfully");
    assert_eq!(list.brands.len(), 1);
    assert_eq!(list.brands[0].slug, "verified-own");
    assert_eq!(list.brands[0].status, "verified");

    let response = server.get_auth(BRANDS_PATH, &token).await.unwrap();
    let list: ListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.brands.len(), 2);
}

#[tokio::test]
async fn test_list_brands_requires_auth() {
    let server = TestServer::start().await.unwrap();

    let response = server.get(BRANDS_PATH).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth(VERIFIED_BRANDS_PATH, "not-a-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_list_brands_store_failure_is_generic() {
    let server = TestServer::start().await.unwrap();
    let token = server.token(8006).unwrap();
    server.repo.set_unavailable(true);

    let response = server.get_auth(BRANDS_PATH, &token).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.message, "Server error, please try again later.");
}
