//! Integration tests for navigation and advanced search.
//!
//! Both endpoints are POSTs with a JSON body and fixed headers. Their
//! responses are returned unchanged unless the status is 4xx or 5xx.

use newegg_api::{BaseUrl, HttpError, NeweggClient, NeweggConfig, NeweggError, SearchRequest};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NeweggClient {
    let config = NeweggConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build();
    NeweggClient::with_config(&config)
}

/// Search request from the "Computer Cases" category.
fn computer_cases_search() -> SearchRequest {
    SearchRequest::new(1, 1, 7, 7583).page_number(1)
}

#[tokio::test]
async fn test_navigation_posts_ids_with_json_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Navigation.egg/Retrieve/"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .and(header("Api-Version", "2.2"))
        .and(body_json(json!({"StoreID": 1, "CategoryID": 2, "NodeId": 6642})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"NavigationItemList": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let response = client.navigation(1, 2, 6642).await.unwrap();

    assert_eq!(response.code, 200);
    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body, json!({"NavigationItemList": []}));
}

#[tokio::test]
async fn test_search_posts_advanced_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Search.egg/Advanced/"))
        .and(header("Api-Version", "2.2"))
        .and(body_json(json!({
            "IsUPCCodeSearch": false,
            "IsSubCategorySearch": true,
            "isGuideAdvanceSearch": false,
            "StoreDepaId": 1,
            "CategoryId": 1,
            "SubCategoryId": 7,
            "NodeId": 7583,
            "BrandId": -1,
            "NValue": "",
            "Keyword": "",
            "Sort": "FEATURED",
            "PageNumber": 1,
            "SearchProperties": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ProductListItems": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let response = client.search(&computer_cases_search()).await.unwrap();

    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_search_not_found_is_a_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Search.egg/Advanced/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client.search(&computer_cases_search()).await.unwrap_err();

    assert!(matches!(err, NeweggError::Http(HttpError::Client(ref e)) if e.code == 404));
}

#[tokio::test]
async fn test_search_server_failure_is_a_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Search.egg/Advanced/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server"))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client.search(&computer_cases_search()).await.unwrap_err();

    assert!(matches!(err, NeweggError::Http(HttpError::Server(ref e)) if e.code == 500));
}

#[tokio::test]
async fn test_non_success_codes_outside_error_ranges_pass_through() {
    for code in [201, 204, 301, 304] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(code))
            .mount(&server)
            .await;

        let mut client = client_for(&server);
        let response = client.navigation(1, 2, 6642).await.unwrap();

        assert_eq!(response.code, code);
    }
}

#[tokio::test]
async fn test_custom_api_version_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("Api-Version", "3.0"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = NeweggConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .api_version(newegg_api::ApiVersion::new("3.0").unwrap())
        .build();
    let mut client = NeweggClient::with_config(&config);

    assert!(client.search(&computer_cases_search()).await.is_ok());
}
