//! Resources of the Next-Gen WAF API (`/ngwaf/v1`).
//!
//! Rules, lists and signals are *scoped*: they live either in one workspace
//! or at account level, and [`build_scoped_path`] picks the path from the
//! [`Scope`] on the input. Thresholds and redactions always belong to a
//! workspace.
//!
//! Collection endpoints answer with a `{"data": [...], "meta": {...}}`
//! envelope, decoded as [`Page`].

use serde::{Deserialize, Serialize};

use crate::rest::errors::{require, require_some};
use crate::rest::{
    build_scoped_path, join_path, ApiError, Scope, ScopeType, ValidationError, NGWAF_PREFIX,
};

pub mod condition;
pub mod list;
pub mod redaction;
pub mod rule;
pub mod signal;
pub mod threshold;
pub mod workspace;

pub use condition::{Condition, GroupCondition, GroupMember, MultivalCondition, SingleCondition};
pub use list::{
    CreateListInput, DeleteListInput, GetListInput, List, ListListsInput, ListType,
    UpdateListInput,
};
pub use redaction::{
    CreateRedactionInput, DeleteRedactionInput, GetRedactionInput, ListRedactionsInput,
    Redaction, RedactionType, UpdateRedactionInput,
};
pub use rule::{
    ClientIdentifier, CreateRuleInput, DeleteRuleInput, GetRuleInput, ListRulesInput, Rule,
    RuleAction, RuleRateLimit, RuleType, UpdateRuleInput,
};
pub use signal::{
    CreateSignalInput, DeleteSignalInput, GetSignalInput, ListSignalsInput, Signal,
    UpdateSignalInput,
};
pub use threshold::{
    CreateThresholdInput, DeleteThresholdInput, GetThresholdInput, ListThresholdsInput,
    Threshold, ThresholdAction, UpdateThresholdInput,
};
pub use workspace::{
    AttackSignalThresholds, CreateWorkspaceInput, DeleteWorkspaceInput, GetWorkspaceInput,
    ListWorkspacesInput, UpdateWorkspaceInput, Workspace, WorkspaceAttributes, WorkspaceMode,
};

/// One page of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PageMeta,
}

/// Pagination metadata, passed through as sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Paging query shared by the NGWAF list operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Path of a scoped collection or resource, after checking a scope was
/// given.
pub(crate) fn scoped_path(
    scope: Option<&Scope>,
    collection: &str,
    resource_id: &str,
) -> Result<String, ApiError> {
    require_some(scope, ValidationError::MissingScope)?;
    Ok(build_scoped_path(scope, collection, resource_id)?)
}

/// Workspace scopes are carried by the path alone; account scopes also go in
/// the body so the API knows which workspaces they apply to.
pub(crate) fn scope_in_path(scope: &Option<Scope>) -> bool {
    scope
        .as_ref()
        .map_or(true, |s| s.scope_type() == ScopeType::Workspace)
}

/// Path under one workspace, after checking the workspace id.
pub(crate) fn workspace_path(
    workspace_id: &str,
    collection: &str,
    resource_id: Option<&str>,
) -> Result<String, ValidationError> {
    require(workspace_id, ValidationError::MissingWorkspaceId)?;
    let mut segments: Vec<&str> = NGWAF_PREFIX.to_vec();
    segments.extend(["workspaces", workspace_id, collection]);
    segments.extend(resource_id);
    Ok(join_path(&segments))
}
