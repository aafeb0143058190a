//! End-to-end tests for query execution
//!
//! These tests run the full pipeline against a mock data API:
//! - Request URL, headers and exact RQL body
//! - Default limit injection
//! - Option validation before any request is sent
//! - HTTP, transport and decode failures
//! - The per-core resource surface and process-wide settings

use bvbrc_client::rql::{and, eq, gt, lt};
use bvbrc_client::{
    run, run_as, settings, BvbrcClient, ClientConfig, ClientError, Core, ExecutionContext,
    QueryOptions,
};
use serde::Deserialize;
use serde_json::json;
use serial_test::serial;
use std::sync::Arc;
use wiremock::{
    matchers::{body_string, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const RQL_CONTENT_TYPE: &str = "application/rqlquery+x-www-form-urlencoded";

/// Helper to create a mock genome response
fn mock_genome_response() -> serde_json::Value {
    json!([
        {
            "genome_id": "208964.12",
            "genome_name": "Pseudomonas aeruginosa PAO1",
            "taxon_id": 208964
        }
    ])
}

/// Helper to build a context pointing at the mock server
fn mock_context(server: &MockServer) -> ExecutionContext {
    ExecutionContext::new(format!("{}/api", server.uri())).unwrap()
}

// ============================================================================
// Runner Tests
// ============================================================================

#[tokio::test]
async fn test_run_genome_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/genome/"))
        .and(header("accept", "application/json"))
        .and(header("content-type", RQL_CONTENT_TYPE))
        .and(body_string("eq(genome_id,208964.12)&limit(1000)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_genome_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = mock_context(&mock_server);
    let result = run("genome", eq("genome_id", "208964.12"), &QueryOptions::new(), &ctx)
        .await
        .unwrap();

    assert_eq!(result, mock_genome_response());
}

#[tokio::test]
async fn test_run_compound_filter_with_modifiers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/genome_feature/"))
        .and(body_string(
            "and(gt(start,100),lt(end,5000))&select(feature_id,gene)&sort(feature_id)&limit(50)",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = mock_context(&mock_server);
    let options = QueryOptions::new()
        .select(["feature_id", "gene"])
        .sort("feature_id")
        .limit(50);

    let result = run(
        "genome_feature",
        and([gt("start", 100), lt("end", 5000)]),
        &options,
        &ctx,
    )
    .await
    .unwrap();

    assert_eq!(result, json!([]));
}

#[tokio::test]
async fn test_run_explicit_limit_replaces_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/taxonomy/"))
        .and(body_string("eq(taxon_rank,species)&limit(7)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = mock_context(&mock_server);
    run("taxonomy", eq("taxon_rank", "species"), &QueryOptions::new().limit(7), &ctx)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_run_http_download_with_sort() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/genome_amr/"))
        .and(body_string(
            "eq(antibiotic,isoniazid)&sort(+genome_id)&limit(1000)&http_download=true",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = mock_context(&mock_server);
    let options = QueryOptions::new().sort("+genome_id").http_download(true);
    run("genome_amr", eq("antibiotic", "isoniazid"), &options, &ctx)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_run_http_download_without_sort_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let ctx = mock_context(&mock_server);
    let err = run(
        "genome",
        eq("genome_id", "208964.12"),
        &QueryOptions::new().http_download(true),
        &ctx,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ClientError::InvalidOptions(_)));
    let received = mock_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_run_not_found_is_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/genome/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = mock_context(&mock_server);
    let err = run("genome", eq("genome_id", "1.1"), &QueryOptions::new(), &ctx)
        .await
        .unwrap_err();

    assert!(err.is_http());
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_run_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = mock_context(&mock_server);
    let err = run("no_such_core", "", &QueryOptions::new(), &ctx)
        .await
        .unwrap_err();

    match err {
        ClientError::Http {
            status,
            status_text,
            url,
        } => {
            assert_eq!(status, 500);
            assert_eq!(status_text, "Internal Server Error");
            assert!(url.ends_with("/api/no_such_core/"));
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_run_invalid_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let ctx = mock_context(&mock_server);
    let err = run("genome", "", &QueryOptions::new(), &ctx).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_run_connection_refused_is_transport_error() {
    // Nothing listens on port 1.
    let ctx = ExecutionContext::new("http://127.0.0.1:1/api").unwrap();

    let err = run("genome", "", &QueryOptions::new(), &ctx).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_run_as_typed() {
    #[derive(Debug, Deserialize)]
    struct Genome {
        genome_id: String,
        taxon_id: u64,
    }

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/genome/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_genome_response()))
        .mount(&mock_server)
        .await;

    let ctx = mock_context(&mock_server);
    let genomes: Vec<Genome> = run_as("genome", eq("genome_id", "208964.12"), &QueryOptions::new(), &ctx)
        .await
        .unwrap();

    assert_eq!(genomes.len(), 1);
    assert_eq!(genomes[0].genome_id, "208964.12");
    assert_eq!(genomes[0].taxon_id, 208964);
}

#[tokio::test]
async fn test_caller_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("authorization", "un=someone|tokenid=abc"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Trailing slash on the base URL must not produce a double slash.
    let ctx = ExecutionContext::builder()
        .base_url(format!("{}/api/", mock_server.uri()))
        .token("un=someone|tokenid=abc")
        .build()
        .unwrap();

    run("genome", "", &QueryOptions::new(), &ctx).await.unwrap();

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received[0].url.path(), "/api/genome/");
}

#[tokio::test]
async fn test_concurrent_queries_share_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/genome/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "core": "genome" }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/taxonomy/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "core": "taxonomy" }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BvbrcClient::new(mock_context(&mock_server));
    let options = QueryOptions::new();

    let (genomes, taxa) = tokio::join!(
        client.query("genome", "", &options),
        client.query("taxonomy", "", &options),
    );

    assert_eq!(genomes.unwrap(), json!([{ "core": "genome" }]));
    assert_eq!(taxa.unwrap(), json!([{ "core": "taxonomy" }]));
}

// ============================================================================
// Resource Tests
// ============================================================================

#[tokio::test]
async fn test_resource_get_by_primary_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/genome/"))
        .and(body_string("eq(genome_id,208964.12)&select(genome_name)&limit(1000)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_genome_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BvbrcClient::new(mock_context(&mock_server));
    client
        .resource(Core::Genome)
        .get("208964.12", &QueryOptions::new().select(["genome_name"]))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_resource_get_by_alias() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/genome_feature/"))
        .and(body_string("eq(refseq_locus_tag,Rv1908c)&limit(1000)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BvbrcClient::new(mock_context(&mock_server));
    client
        .resource(Core::GenomeFeature)
        .get_by("locus_tag", "Rv1908c", &QueryOptions::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_resource_unknown_alias_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = BvbrcClient::new(mock_context(&mock_server));
    let err = client
        .resource(Core::Antibiotics)
        .get_by("locus_tag", "Rv1908c", &QueryOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::UnknownLookup { .. }));
}

#[tokio::test]
async fn test_resource_where_eq_preserves_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/genome_amr/"))
        .and(body_string(
            "and(eq(genome_id,83332.12),eq(resistant_phenotype,Resistant))&limit(10)",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BvbrcClient::new(mock_context(&mock_server));
    client
        .resource(Core::GenomeAmr)
        .where_eq(
            [("genome_id", "83332.12"), ("resistant_phenotype", "Resistant")],
            &QueryOptions::new().limit(10),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_resource_in_range_and_any() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/genome_feature/"))
        .and(body_string("and(gt(start,100),lt(end,5000))&limit(1000)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/genome_feature/"))
        .and(body_string("in(gene,katG,rpoB)&limit(1000)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BvbrcClient::new(mock_context(&mock_server));
    let features = client.resource(Core::GenomeFeature);
    let options = QueryOptions::new();

    features
        .in_range("start", "end", 100, 5000, &options)
        .await
        .unwrap();
    features
        .get_by_any("gene", ["katG", "rpoB"], &options)
        .await
        .unwrap();
}

// ============================================================================
// Process-wide Settings Tests
// ============================================================================

#[tokio::test]
#[serial]
async fn test_global_query_uses_settings() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/taxonomy/"))
        .and(header("authorization", "global-token"))
        .and(body_string("eq(taxon_id,1763)&limit(1000)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "taxon_id": 1763 }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    settings::set(
        ClientConfig::new()
            .with_base_url(format!("{}/api", mock_server.uri()))
            .with_token("global-token"),
    );

    let result = bvbrc_client::query("taxonomy", eq("taxon_id", 1763), &QueryOptions::new())
        .await
        .unwrap();
    settings::reset();

    assert_eq!(result, json!([{ "taxon_id": 1763 }]));
}

#[tokio::test]
#[serial]
async fn test_global_queries_reuse_context_until_settings_change() {
    let first_server = MockServer::start().await;
    let second_server = MockServer::start().await;

    for server in [&first_server, &second_server] {
        Mock::given(method("POST"))
            .and(path("/api/genome/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(server)
            .await;
    }

    settings::set(ClientConfig::new().with_base_url(format!("{}/api", first_server.uri())));
    let options = QueryOptions::new();

    bvbrc_client::query("genome", "", &options).await.unwrap();
    let shared = settings::context().unwrap();
    bvbrc_client::query("genome", "", &options).await.unwrap();
    assert!(Arc::ptr_eq(&shared, &settings::context().unwrap()));

    settings::set(ClientConfig::new().with_base_url(format!("{}/api", second_server.uri())));
    bvbrc_client::query("genome", "", &options).await.unwrap();
    let rebuilt = settings::context().unwrap();
    settings::reset();

    assert!(!Arc::ptr_eq(&shared, &rebuilt));
    assert_eq!(first_server.received_requests().await.unwrap().len(), 2);
    assert_eq!(second_server.received_requests().await.unwrap().len(), 1);
}
