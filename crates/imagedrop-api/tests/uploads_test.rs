//! Upload endpoint integration tests.
//!
//! Run with: `cargo test -p imagedrop-api --test uploads_test`
//! Requires Docker for testcontainers (Postgres).

mod helpers;

use helpers::fixtures::{file_upload_body, multipart_body, png_bytes};
use helpers::setup_test_app;
use serde_json::Value;

#[tokio::test]
async fn test_upload_png_returns_stored_record() {
    let app = setup_test_app().await;
    let client = app.client();

    let (content_type, body) = file_upload_body("photo.png", "image/png", &png_bytes(10240));
    let response = client
        .post("/upload")
        .content_type(&content_type)
        .bytes(body.into())
        .await;

    assert_eq!(response.status_code(), 200);

    let json: Value = response.json();
    assert_eq!(json["message"], "File uploaded successfully");

    let file = &json["file"];
    assert!(file["id"].as_str().is_some());
    assert_eq!(file["size"], 10240);
    assert_eq!(file["mimetype"], "image/png");

    let filename = file["filename"].as_str().unwrap();
    assert!(filename.starts_with("file_"));
    assert!(filename.ends_with(".png"));
    // The server never reuses the client-declared name.
    assert_ne!(filename, "photo.png");

    let url = file["url"].as_str().unwrap();
    assert!(url.ends_with(&format!("/public/images/{}", filename)));

    // The blob is durable under the derived name.
    let blob_path = app.storage_dir.join("images").join(filename);
    let on_disk = std::fs::read(&blob_path).expect("blob missing from sink");
    assert_eq!(on_disk.len(), 10240);

    // Exactly one metadata record, and its size matches the bytes written.
    let (count, size): (i64, i64) =
        sqlx::query_as("SELECT COUNT(*), COALESCE(MAX(size), 0) FROM files")
            .fetch_one(&app.pool)
            .await
            .expect("metadata query failed");
    assert_eq!(count, 1);
    assert_eq!(size, 10240);
}

#[tokio::test]
async fn test_uploaded_blob_is_retrievable() {
    let app = setup_test_app().await;
    let client = app.client();

    let payload = png_bytes(2048);
    let (content_type, body) = file_upload_body("pic.gif", "image/gif", &payload);
    let response = client
        .post("/upload")
        .content_type(&content_type)
        .bytes(body.into())
        .await;
    assert_eq!(response.status_code(), 200);

    let json: Value = response.json();
    let filename = json["file"]["filename"].as_str().unwrap().to_string();

    let fetched = client
        .get(&format!("/public/images/{}", filename))
        .await;
    assert_eq!(fetched.status_code(), 200);
    assert_eq!(fetched.as_bytes().as_ref(), payload.as_slice());
}

#[tokio::test]
async fn test_upload_rejects_non_image() {
    let app = setup_test_app().await;
    let client = app.client();

    let (content_type, body) = file_upload_body("notes.pdf", "application/pdf", &png_bytes(10240));
    let response = client
        .post("/upload")
        .content_type(&content_type)
        .bytes(body.into())
        .await;

    assert_eq!(response.status_code(), 400);
    let json: Value = response.json();
    assert!(json["message"].as_str().unwrap().contains("Images only"));

    // No record, no blob.
    let listing = client.get("/files").await;
    assert_eq!(listing.json::<Vec<Value>>().len(), 0);
    assert!(!app.storage_dir.join("images").exists());
}

#[tokio::test]
async fn test_upload_rejects_mismatched_declared_type() {
    let app = setup_test_app().await;
    let client = app.client();

    // Image extension with non-image declared type
    let (content_type, body) = file_upload_body("photo.png", "application/pdf", &png_bytes(512));
    let response = client
        .post("/upload")
        .content_type(&content_type)
        .bytes(body.into())
        .await;
    assert_eq!(response.status_code(), 400);

    // Image declared type with non-image extension
    let (content_type, body) = file_upload_body("notes.pdf", "image/png", &png_bytes(512));
    let response = client
        .post("/upload")
        .content_type(&content_type)
        .bytes(body.into())
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_upload_rejects_oversize_file() {
    let app = setup_test_app().await;
    let client = app.client();

    let (content_type, body) =
        file_upload_body("big.jpg", "image/jpeg", &png_bytes(6 * 1024 * 1024));
    let response = client
        .post("/upload")
        .content_type(&content_type)
        .bytes(body.into())
        .await;

    assert_eq!(response.status_code(), 400);
    let json: Value = response.json();
    assert!(json["message"].as_str().unwrap().contains("File too large"));

    let listing = client.get("/files").await;
    assert_eq!(listing.json::<Vec<Value>>().len(), 0);
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let app = setup_test_app().await;
    let client = app.client();

    let (content_type, body) = multipart_body("attachment", "photo.png", "image/png", b"data");
    let response = client
        .post("/upload")
        .content_type(&content_type)
        .bytes(body.into())
        .await;

    assert_eq!(response.status_code(), 400);
    let json: Value = response.json();
    assert_eq!(json["message"], "No file uploaded");

    // The sink was never touched.
    assert!(!app.storage_dir.join("images").exists());
}

#[tokio::test]
async fn test_liveness_greeting() {
    let app = setup_test_app().await;
    let response = app.client().get("/").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "hello world!");
}

#[tokio::test]
async fn test_metadata_insert_failure_returns_500_and_removes_blob() {
    let app = setup_test_app().await;
    let client = app.client();

    // Break the metadata store so the insert after the blob write fails.
    sqlx::query("DROP TABLE files")
        .execute(&app.pool)
        .await
        .expect("failed to drop files table");

    let (content_type, body) = file_upload_body("photo.png", "image/png", &png_bytes(2048));
    let response = client
        .post("/upload")
        .content_type(&content_type)
        .bytes(body.into())
        .await;

    assert_eq!(response.status_code(), 500);
    let json: Value = response.json();
    assert_eq!(json["message"], "Server error during upload");

    // The blob delete runs on a background task; poll until it lands.
    let images_dir = app.storage_dir.join("images");
    for _ in 0..50 {
        let leftover = std::fs::read_dir(&images_dir)
            .map(|entries| entries.count())
            .unwrap_or(0);
        if leftover == 0 {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }
    panic!("orphaned blob left in sink after failed metadata insert");
}
