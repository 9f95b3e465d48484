use httpmock::prelude::*;
use resource_specs::config::toml_config::ClientFileConfig;
use resource_specs::{
    show_resources, ClientError, ClientSettings, HttpFacade, OutputFormat, Revision, SpecClient,
};

fn settings_for(server: &MockServer) -> ClientSettings {
    let file = ClientFileConfig::from_toml_str(&format!(
        r#"
[controller]
endpoint = "{}"
timeout_seconds = 5
"#,
        server.url("/rpc")
    ))
    .unwrap();
    ClientSettings::from_file_config(&file).unwrap()
}

#[tokio::test]
async fn test_end_to_end_list_specs_over_http() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/rpc").json_body(serde_json::json!({
            "request-id": 1,
            "type": "Resources",
            "request": "ListSpecifications",
            "params": {"entities": [
                {"tag": "service-a-service"},
                {"tag": "service-other-service"}
            ]}
        }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "request-id": 1,
                "response": {"results": [
                    {"items": [{
                        "name": "website", "type": "file", "path": "website.tgz",
                        "comment": ".tgz of your website", "origin": "store", "revision": "3"
                    }]},
                    {"error": {"message": "service \"other-service\" not found", "code": "not found"}}
                ]}
            }));
    });

    let facade = HttpFacade::new(&settings_for(&server)).unwrap();
    let client = SpecClient::new(facade);

    let results = client
        .list_specs(&["a-service", "other-service"])
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].service, "a-service");
    assert!(results[0].error.is_none());
    assert_eq!(results[0].specs[0].revision, Some(Revision::Number(3)));
    assert_eq!(results[1].service, "other-service");
    assert!(results[1].specs.is_empty());
    assert!(results[1].error.as_ref().unwrap().is_not_found());
}

#[tokio::test]
async fn test_end_to_end_show_tabular() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/rpc");
        then.status(200).json_body(serde_json::json!({
            "request-id": 1,
            "response": {"results": [{"items": [
                {"name": "website", "type": "file", "path": "website.tgz",
                 "comment": ".tgz of your website", "origin": "upload", "revision": ""},
                {"name": "music", "type": "file", "path": "music.mp3",
                 "comment": "mp3 of your backing vocals", "origin": "upload", "revision": ""}
            ]}]}
        }));
    });

    let client = SpecClient::new(HttpFacade::new(&settings_for(&server)).unwrap());

    let out = show_resources(&client, "a-service", OutputFormat::Tabular)
        .await
        .unwrap();

    assert_eq!(
        out,
        concat!(
            "RESOURCE FROM   REV COMMENT                    \n",
            "website  upload -   .tgz of your website       \n",
            "music    upload -   mp3 of your backing vocals \n",
            "\n",
        )
    );
}

#[tokio::test]
async fn test_end_to_end_server_failure_returns_no_results() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/rpc");
        then.status(500);
    });

    let client = SpecClient::new(HttpFacade::new(&settings_for(&server)).unwrap());

    let err = client.list_specs(&["a-service"]).await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, ClientError::Transport { .. }));
}

#[tokio::test]
async fn test_end_to_end_bad_service_makes_no_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/rpc");
        then.status(200)
            .json_body(serde_json::json!({"request-id": 1, "response": {"results": []}}));
    });

    let client = SpecClient::new(HttpFacade::new(&settings_for(&server)).unwrap());

    let err = client.list_specs(&["???"]).await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidService { .. }));
    api_mock.assert_hits(0);
}
