//! Integration tests for the NGWAF resources.
//!
//! These tests verify that scope selects the request path, that account
//! scope travels in the body and that conditions decode by their tag.

use fastly_api::rest::resources::ngwaf::{
    Condition, CreateRuleInput, CreateWorkspaceInput, DeleteRuleInput, GroupCondition,
    GroupMember, ListParams, ListRulesInput, Rule, RuleAction, RuleType, SingleCondition,
    Workspace, WorkspaceAttributes, WorkspaceMode,
};
use fastly_api::{
    ApiError, ApiToken, Endpoint, FastlyConfig, RestClient, Scope, ScopeError, ValidationError,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_test_client(server: &MockServer) -> RestClient {
    let config = FastlyConfig::builder()
        .api_token(ApiToken::new("test-token").unwrap())
        .endpoint(Endpoint::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

fn block_rule_input(scope: Scope) -> CreateRuleInput {
    CreateRuleInput {
        rule_type: Some(RuleType::Request),
        description: Some("block admin".to_string()),
        group_operator: Some("all".to_string()),
        conditions: vec![SingleCondition::new("path", "equals", "/admin").into()],
        actions: vec![RuleAction {
            action_type: "block".to_string(),
            ..Default::default()
        }],
        scope: Some(scope),
        ..Default::default()
    }
}

// ============================================================================
// Rule Tests
// ============================================================================

#[tokio::test]
async fn test_create_rule_in_workspace_scope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ngwaf/v1/workspaces/ws1/rules"))
        .and(body_json(json!({
            "type": "request",
            "description": "block admin",
            "group_operator": "all",
            "conditions": [
                {"type": "single", "fields": {"field": "path", "operator": "equals", "value": "/admin"}}
            ],
            "actions": [{"type": "block"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "rule1",
            "type": "request",
            "description": "block admin",
            "conditions": [
                {"type": "single", "fields": {"field": "path", "operator": "equals", "value": "/admin"}}
            ],
            "actions": [{"type": "block"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let rule = Rule::create(&client, &block_rule_input(Scope::workspace("ws1")))
        .await
        .unwrap();

    assert_eq!(rule.id.as_deref(), Some("rule1"));
    assert_eq!(rule.rule_type, Some(RuleType::Request));
    assert_eq!(rule.conditions[0].condition_type(), "single");
}

#[tokio::test]
async fn test_create_rule_in_account_scope_sends_scope_in_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ngwaf/v1/rules"))
        .and(body_json(json!({
            "type": "request",
            "description": "block admin",
            "group_operator": "all",
            "conditions": [
                {"type": "single", "fields": {"field": "path", "operator": "equals", "value": "/admin"}}
            ],
            "actions": [{"type": "block"}],
            "scope": {"type": "account", "applies_to": ["*"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "rule2",
            "scope": {"type": "account", "applies_to": ["*"]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let rule = Rule::create(&client, &block_rule_input(Scope::account(["*"])))
        .await
        .unwrap();

    assert_eq!(rule.scope, Some(Scope::account(["*"])));
}

#[tokio::test]
async fn test_list_rules_decodes_nested_conditions() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ngwaf/v1/workspaces/ws1/rules"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "rule1",
                "conditions": [
                    {"type": "group", "fields": {
                        "group_operator": "any",
                        "conditions": [
                            {"type": "single", "fields": {"field": "ip", "operator": "equals", "value": "10.0.0.1"}},
                            {"type": "multival", "fields": {
                                "field": "request_header",
                                "operator": "exists",
                                "group_operator": "all",
                                "conditions": [
                                    {"type": "single", "fields": {"field": "name", "operator": "equals", "value": "x-debug"}}
                                ]
                            }}
                        ]
                    }}
                ]
            }],
            "meta": {"limit": 10, "total": 1}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let page = Rule::list(
        &client,
        &ListRulesInput {
            scope: Some(Scope::workspace("ws1")),
            params: ListParams {
                limit: Some(10),
                page: None,
            },
        },
    )
    .await
    .unwrap();

    assert_eq!(page.meta.total, Some(1));
    let Condition::Group(GroupCondition { conditions, .. }) = &page.data[0].conditions[0] else {
        panic!("expected a group condition");
    };
    assert_eq!(conditions.len(), 2);
    assert!(matches!(&conditions[0], GroupMember::Single(single) if single.value == "10.0.0.1"));
    assert!(matches!(&conditions[1], GroupMember::Multival(multival) if multival.conditions.len() == 1));
}

#[tokio::test]
async fn test_list_rules_with_unknown_condition_type_fails_to_decode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ngwaf/v1/rules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "rule1", "conditions": [{"type": "regex", "fields": {}}]}],
            "meta": {"limit": 100, "total": 1}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = Rule::list(
        &client,
        &ListRulesInput {
            scope: Some(Scope::account(["*"])),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(error, ApiError::Decode { .. }));
    assert!(error.to_string().contains("unknown condition type: regex"));
}

#[tokio::test]
async fn test_delete_rule_requires_rule_id_then_scope() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let error = Rule::delete(&client, &DeleteRuleInput::default())
        .await
        .unwrap_err();
    assert_eq!(error.validation(), Some(ValidationError::MissingRuleId));

    let error = Rule::delete(
        &client,
        &DeleteRuleInput {
            rule_id: "rule1".to_string(),
            scope: None,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(error.validation(), Some(ValidationError::MissingScope));
}

#[tokio::test]
async fn test_workspace_scope_with_two_ids_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let scope = Scope::new(fastly_api::ScopeType::Workspace, ["ws1", "ws2"]);
    let error = Rule::delete(
        &client,
        &DeleteRuleInput {
            rule_id: "rule1".to_string(),
            scope: Some(scope),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(
        error,
        ApiError::Scope(ScopeError::WorkspaceCount { count: 2 })
    ));
}

#[tokio::test]
async fn test_delete_rule_in_workspace_scope() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/ngwaf/v1/workspaces/ws1/rules/rule1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    Rule::delete(
        &client,
        &DeleteRuleInput {
            rule_id: "rule1".to_string(),
            scope: Some(Scope::workspace("ws1")),
        },
    )
    .await
    .unwrap();
}

// ============================================================================
// Workspace Tests
// ============================================================================

#[tokio::test]
async fn test_create_workspace() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ngwaf/v1/workspaces"))
        .and(body_json(json!({"name": "production", "mode": "block"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ws1",
            "name": "production",
            "mode": "block"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let workspace = Workspace::create(
        &client,
        &CreateWorkspaceInput {
            name: Some("production".to_string()),
            mode: Some(WorkspaceMode::Block),
            attributes: WorkspaceAttributes::default(),
        },
    )
    .await
    .unwrap();

    assert_eq!(workspace.id.as_deref(), Some("ws1"));
    assert_eq!(workspace.mode, Some(WorkspaceMode::Block));
}
