//! Integration tests for the generic operations.
//!
//! Tests list projection, parameter placement, envelope error handling,
//! transport failures, multi-phase publishing, version negotiation,
//! multipart upload with progress and the text exports.

mod common;

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use common::{
    api_path, create_test_client, create_test_client_with, create_unreachable_client,
    error_body, list_body, SCRIPT,
};
use mt_api::{Params, ALL_PLUGINS};
use mt_core::MtError;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---- fetch_list ----

#[tokio::test]
async fn list_projects_items_and_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/sites/1/entries")))
        .and(query_param("limit", "3"))
        .and(query_param("status", "Publish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(3, 42)))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let options = Params::new().with("limit", 3).with("status", "Publish");
    let page = api.list_entries("1", Some(&options)).await.unwrap();

    assert_eq!(page.len(), 3);
    assert_eq!(page.total, 42);
    assert_eq!(page.items[0]["title"], "Item 1");
}

#[tokio::test]
async fn list_defaults_when_fields_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/users")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let page = api.list_users(None).await.unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn search_adds_query_to_options() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/search")))
        .and(query_param("search", "movable type"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(1, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let options = Params::new().with("limit", 5);
    let page = api.search("movable type", Some(&options)).await.unwrap();
    assert_eq!(page.total, 1);
}

// ---- errors ----

#[tokio::test]
async fn error_envelope_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/sites/99")))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_body(404, "Site not found")))
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let err = api.get_site("99", None).await.unwrap_err();
    assert!(matches!(err, MtError::Api { .. }));
    assert_eq!(err.code(), Some("404"));
    assert_eq!(err.message(), Some("Site not found"));
}

#[tokio::test]
async fn error_envelope_with_success_status_is_still_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(error_body(403, "Permission denied")))
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let err = api.list_sites(None).await.unwrap_err();
    assert_eq!(err.code(), Some("403"));
}

#[tokio::test]
async fn non_json_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let err = api.list_sites(None).await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.message(), Some("The operation couldn't be completed."));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let api = create_unreachable_client();
    let err = api.list_sites(None).await.unwrap_err();
    assert_eq!(err.code(), Some("-1"));
}

// ---- actions ----

#[tokio::test]
async fn create_sends_object_as_json_form_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/sites/1/entries")))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("entry=%7B%22title%22%3A%22Hello%22%7D"))
        .and(body_string_contains("publish=1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 7, "title": "Hello" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let options = Params::new().with("publish", 1);
    let entry = api
        .create_entry("1", &json!({ "title": "Hello" }), Some(&options))
        .await
        .unwrap();
    assert_eq!(entry["id"], 7);
}

#[tokio::test]
async fn create_site_uses_website_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/sites")))
        .and(body_string_contains("website="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 2 })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    api.create_site(&json!({ "name": "Docs" }), None).await.unwrap();
}

#[tokio::test]
async fn update_uses_put_with_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api_path("/sites/1/templates/4/templatemaps/8")))
        .and(body_string_contains("templatemap="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 8 })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    api.update_template_map("1", "4", "8", &json!({ "archiveType": "Monthly" }), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_sends_options_in_query() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/sites/1/entries/5")))
        .and(query_param("fields", "id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5 })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let options = Params::new().with("fields", "id");
    api.delete_entry("1", "5", Some(&options)).await.unwrap();
}

#[tokio::test]
async fn unsupported_verb_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let err = api
        .create_resource(&mt_api::resources::TAG, &["1"], &json!({ "name": "rust" }), None)
        .await
        .unwrap_err();
    assert!(matches!(err, MtError::UnsupportedOperation(_)));

    let err = api
        .create_resource(&mt_api::resources::COMMENT, &["1"], &json!({}), None)
        .await
        .unwrap_err();
    assert!(matches!(err, MtError::UnsupportedOperation(_)));
}

#[tokio::test]
async fn permutate_sends_json_array() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/sites/1/categories/permutate")))
        .and(body_string_contains(
            "categories=%5B%7B%22id%22%3A3%7D%2C%7B%22id%22%3A1%7D%5D",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let order = vec![json!({ "id": 3 }), json!({ "id": 1 })];
    api.permutate_categories("1", Some(order.as_slice()), None).await.unwrap();
}

#[tokio::test]
async fn grant_permission_sends_ids() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/users/3/permissions/grant")))
        .and(body_string_contains("site_id=1"))
        .and(body_string_contains("role_id=2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    api.grant_permission_to_user("3", "1", "2").await.unwrap();
}

#[tokio::test]
async fn enable_all_plugins_targets_collection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/plugins/enable")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(2)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    api.enable_all_plugins(None).await.unwrap();
    api.enable_plugin(ALL_PLUGINS, None).await.unwrap();
}

#[tokio::test]
async fn stats_send_date_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/sites/1/stats/date/visits")))
        .and(query_param("startDate", "2024-03-01"))
        .and(query_param("endDate", "2024-03-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(2, 2)))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    let page = api.visits_for_date("1", start, end, None).await.unwrap();
    assert_eq!(page.len(), 2);
}

// ---- repeat_action ----

#[tokio::test]
async fn publish_follows_next_phase_until_complete() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/publish/entries")))
        .and(query_param("phase", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "Complete" })))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/publish/entries")))
        .and(query_param("ids", "1,2,3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "Publishing", "restIds": "2,3" }))
                .insert_header("X-MT-Next-Phase-URL", "/publish/entries?phase=2"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let result = api.publish_entries(&["1", "2", "3"], None).await.unwrap();
    assert_eq!(result["status"], "Complete");
}

#[tokio::test]
async fn publish_completes_on_empty_rest_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/publish/entries")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "Publishing", "restIds": "" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let result = api.publish_entries(&["9"], None).await.unwrap();
    assert_eq!(result["restIds"], "");
}

#[tokio::test]
async fn publish_without_next_phase_header_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "Publishing", "restIds": "4" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let err = api.publish_entries(&["4"], None).await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn publish_error_envelope_stops_job() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(error_body(500, "Publish failed"))
                .insert_header("X-MT-Next-Phase-URL", "/publish/entries?phase=2"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let err = api.publish_entries(&["4"], None).await.unwrap_err();
    assert_eq!(err.message(), Some("Publish failed"));
}

#[tokio::test]
async fn publish_stops_at_phase_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "Publishing", "restIds": "1" }))
                .insert_header("X-MT-Next-Phase-URL", "publish/entries?again=1"),
        )
        .expect(3)
        .mount(&server)
        .await;

    let api = create_test_client_with(&server, |c| c.max_publish_phases = 3);
    let err = api.publish_entries(&["1"], None).await.unwrap_err();
    assert!(matches!(err, MtError::PhaseLimitExceeded(3)));
}

// ---- version ----

#[tokio::test]
async fn version_hits_bare_base_url_and_updates_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{SCRIPT}/version")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "endpointVersion": "v3", "apiVersion": 3.1 })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{SCRIPT}/v3/sites")))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(1, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let info = api.version().await.unwrap();
    assert_eq!(info.endpoint_version, "v3");

    let endpoint = api.endpoint().await;
    assert_eq!(endpoint.endpoint_version, "v3");
    assert_eq!(endpoint.api_version, "3.1");
    api.list_sites(None).await.unwrap();
}

#[tokio::test]
async fn failed_version_leaves_endpoint_alone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_body(404, "Not found")))
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    assert!(api.version().await.is_err());
    let endpoint = api.endpoint().await;
    assert_eq!(endpoint.endpoint_version, "v2");
    assert!(endpoint.api_version.is_empty());
}

// ---- upload ----

#[tokio::test]
async fn upload_sends_multipart_and_reports_progress() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/sites/1/assets/upload")))
        .and(body_string_contains("name=\"file\"; filename=\"photo.jpg\""))
        .and(body_string_contains("application/octet-stream"))
        .and(body_string_contains("name=\"normalizeOrientation\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 31, "mimeType": "image/jpeg" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let data = vec![b'x'; 40 * 1024];
    let options = Params::new().with("normalizeOrientation", 1);

    let asset = api
        .upload_asset_with_progress(Some("1"), data, "photo.jpg", Some(&options), move |p| {
            sink.lock().unwrap().push(p);
        })
        .await
        .unwrap();
    assert_eq!(asset["id"], 31);

    let fractions = seen.lock().unwrap().clone();
    assert!(!fractions.is_empty());
    assert!(fractions.windows(2).all(|w| w[0] <= w[1]), "progress went backwards");
    assert_eq!(*fractions.last().unwrap(), 1.0);
}

#[tokio::test]
async fn upload_error_envelope_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/assets/upload")))
        .respond_with(ResponseTemplate::new(413).set_body_json(error_body(413, "File too large")))
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let err = api
        .upload_asset(vec![0u8; 16], "big.bin", None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some("413"));
}

#[tokio::test]
async fn import_with_data_uploads_import_dat() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/sites/2/entries/import")))
        .and(body_string_contains("filename=\"import.dat\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "importLog": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let data = b"AUTHOR: melody\nTITLE: Hello\n--------\n".to_vec();
    api.import_entries("2", Some(data), None).await.unwrap();
}

#[tokio::test]
async fn import_without_data_is_plain_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/sites/2/entries/import")))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("import_type=import_mt_format"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "importLog": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let options = Params::new().with("import_type", "import_mt_format");
    api.import_entries("2", None, Some(&options)).await.unwrap();
}

// ---- exports ----

#[tokio::test]
async fn export_entries_returns_text() {
    let server = MockServer::start().await;
    let body = "AUTHOR: melody\nTITLE: こんにちは\n--------\n";
    Mock::given(method("GET"))
        .and(path(api_path("/sites/1/entries/export")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    assert_eq!(api.export_entries("1", None).await.unwrap(), body);
}

#[tokio::test]
async fn export_logs_decodes_shift_jis() {
    let server = MockServer::start().await;
    let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode("日時,メッセージ\n");
    Mock::given(method("GET"))
        .and(path(api_path("/sites/1/logs/export")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(encoded.into_owned()))
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    assert_eq!(api.export_logs("1", None).await.unwrap(), "日時,メッセージ\n");
}

#[tokio::test]
async fn export_logs_encoding_is_configurable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("日時\n"))
        .mount(&server)
        .await;

    let api = create_test_client_with(&server, |c| c.export_logs_encoding = "utf-8".into());
    assert_eq!(api.export_logs("1", None).await.unwrap(), "日時\n");
}

#[tokio::test]
async fn export_error_body_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string(r#"{"error":{"code":403,"message":"Permission denied."}}"#),
        )
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let err = api.export_entries("1", None).await.unwrap_err();
    assert_eq!(err.code(), Some("403"));
    assert_eq!(err.message(), Some("Permission denied."));
}

#[tokio::test]
async fn export_error_page_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/sites/1/entries/export")))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>502 Bad Gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let err = api.export_entries("1", None).await.unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(err, MtError::Api { .. }));
}
