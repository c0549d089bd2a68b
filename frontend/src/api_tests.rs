#[cfg(test)]
mod api_tests {
    use crate::api::bots::{bot_url, decode_error, error_from_body, transport_error};
    use crate::api::{api_url, join_url, AdminResource};
    use crate::config::API_BASE_URL;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;
    use shared::{ErrorResponse, NluConfigurationDto, SharedError};
    use test_case::test_case;

    #[test_case("/admin/", "bots", "/admin/bots" ; "relative base")]
    #[test_case("/admin/", "/bots", "/admin/bots" ; "leading slash dropped")]
    #[test_case("/admin/", "///bots/", "/admin/bots/" ; "many leading slashes")]
    #[test_case("https://api.example.com/admin/", "intents", "https://api.example.com/admin/intents" ; "absolute base")]
    #[test_case("/admin/", "", "/admin/" ; "empty path")]
    fn test_join_url(base: &str, path: &str, expected: &str) {
        assert_eq!(join_url(base, path), expected);
    }

    #[test]
    fn test_api_url_uses_resolved_base() {
        assert_eq!(api_url("bots"), format!("{}bots", *API_BASE_URL));
        assert_eq!(api_url("/bots"), api_url("bots"));
        assert!(!api_url("bots").contains("/admin/admin/"));
    }

    #[rstest]
    #[case(AdminResource::Bots, "bots")]
    #[case(AdminResource::Intents, "intents")]
    #[case(AdminResource::Entities, "entities")]
    #[case(AdminResource::Train, "train")]
    #[case(AdminResource::Test, "test")]
    #[case(AdminResource::Integrations, "integrations")]
    #[case(AdminResource::ChatLogs, "chatlogs")]
    fn test_resource_paths(#[case] resource: AdminResource, #[case] path: &str) {
        assert_eq!(resource.path(), path);
        assert_eq!(resource.to_string(), path);
        assert_eq!(resource.url(), format!("{}{}", *API_BASE_URL, path));
    }

    #[test]
    fn test_all_resources_are_distinct() {
        let mut paths: Vec<&str> = AdminResource::ALL.iter().map(|r| r.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), AdminResource::ALL.len());
    }

    #[test]
    fn test_item_url_encodes_id() {
        assert_eq!(
            AdminResource::Intents.item_url("greet user"),
            format!("{}intents/greet%20user", *API_BASE_URL)
        );
    }

    #[test]
    fn test_bot_urls() {
        let base = API_BASE_URL.as_str();
        assert_eq!(bot_url("default", "config"), format!("{}bots/default/config", base));
        assert_eq!(bot_url("default", "export"), format!("{}bots/default/export", base));
        assert_eq!(bot_url("my/bot", "import"), format!("{}bots/my%2Fbot/import", base));
    }

    #[test]
    fn test_error_body_detail_is_used() {
        let body = ErrorResponse { detail: json!("Bot not found") };
        assert_eq!(
            error_from_body(404, Some(body)),
            SharedError::NotFound("Bot not found".to_string())
        );
    }

    #[test]
    fn test_undecodable_error_body_falls_back_to_status() {
        assert_eq!(error_from_body(404, None), SharedError::NotFound("HTTP 404".to_string()));
        assert_eq!(error_from_body(502, None), SharedError::Internal("HTTP 502".to_string()));
    }

    #[test]
    fn test_validation_error_body_keeps_messages() {
        let body = ErrorResponse {
            detail: json!([{ "loc": ["body"], "msg": "field required", "type": "value_error.missing" }]),
        };
        assert_eq!(
            error_from_body(422, Some(body)),
            SharedError::BadRequest("field required".to_string())
        );
    }

    #[test]
    fn test_transport_failure_is_network_error() {
        let err = transport_error("Failed to export bot", "connection refused");
        assert_eq!(
            err,
            SharedError::Network("Failed to export bot: connection refused".to_string())
        );
    }

    #[test]
    fn test_decode_failure_is_conversion_error() {
        let parse_err = serde_json::from_str::<NluConfigurationDto>("<html>").unwrap_err();
        let err = decode_error("Failed to parse NLU config response", parse_err);
        match err {
            SharedError::Conversion(msg) => {
                assert!(msg.starts_with("Failed to parse NLU config response: "))
            }
            other => panic!("expected conversion error, got {:?}", other),
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::api::bots::get_nlu_config;
    use crate::config::API_BASE_URL;
    use crate::get_api_base_url;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_exported_base_url() {
        assert_eq!(get_api_base_url(), *API_BASE_URL);
        assert!(get_api_base_url().ends_with("/admin/"));
    }

    // The test runner serves no admin API, so the call must surface an error
    // (a status error same-origin, a network error for an absolute base).
    #[wasm_bindgen_test]
    async fn test_client_call_without_backend_fails() {
        let result = get_nlu_config("default").await;
        assert!(result.is_err(), "unexpected success: {:?}", result);
    }
}
