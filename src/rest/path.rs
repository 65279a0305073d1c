//! URL path construction for API resources.
//!
//! Two pure builders live here:
//!
//! - [`join_path`] joins raw segments into an absolute path, percent-escaping
//!   each segment on its own so an identifier containing `/` or `?` can never
//!   change the shape of the path.
//! - [`build_scoped_path`] places an NGWAF collection under either a single
//!   workspace or the account, depending on the [`Scope`].
//!
//! # Example
//!
//! ```rust
//! use fastly_api::rest::{build_scoped_path, join_path, Scope};
//!
//! assert_eq!(join_path(&["service", "SVC123", "acl", "my acl"]), "/service/SVC123/acl/my%20acl");
//!
//! let scope = Scope::workspace("ws1");
//! let path = build_scoped_path(Some(&scope), "signals", "").unwrap();
//! assert_eq!(path, "/ngwaf/v1/workspaces/ws1/signals");
//!
//! let scope = Scope::account(["*"]);
//! let path = build_scoped_path(Some(&scope), "rules", "r1").unwrap();
//! assert_eq!(path, "/ngwaf/v1/rules/r1");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::rest::ScopeError;

/// Leading segments shared by every NGWAF path.
pub const NGWAF_PREFIX: [&str; 2] = ["ngwaf", "v1"];

/// Joins segments into an absolute path, escaping each one.
///
/// An empty slice yields `"/"`.
#[must_use]
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment.as_ref()));
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}

/// Whether an NGWAF scope addresses one workspace or the whole account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeType {
    Workspace,
    Account,
}

impl ScopeType {
    /// Returns the wire name of the scope type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Workspace => "workspace",
            Self::Account => "account",
        }
    }
}

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScopeType {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workspace" => Ok(Self::Workspace),
            "account" => Ok(Self::Account),
            other => Err(ScopeError::UnsupportedType {
                value: other.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for ScopeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Where an NGWAF rule, list or signal applies.
///
/// A workspace scope carries exactly one workspace id in `applies_to`. An
/// account scope carries any number of workspace ids, or `"*"` for all of
/// them. The fields are private so a scope cannot change after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    #[serde(rename = "type")]
    scope_type: ScopeType,
    #[serde(default)]
    applies_to: Vec<String>,
}

impl Scope {
    /// Creates a scope of the given type.
    #[must_use]
    pub fn new<I, S>(scope_type: ScopeType, applies_to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scope_type,
            applies_to: applies_to.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a scope for a single workspace.
    #[must_use]
    pub fn workspace(workspace_id: impl Into<String>) -> Self {
        Self::new(ScopeType::Workspace, [workspace_id.into()])
    }

    /// Creates an account-level scope over the given workspaces.
    #[must_use]
    pub fn account<I, S>(applies_to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ScopeType::Account, applies_to)
    }

    /// Returns the scope type.
    #[must_use]
    pub const fn scope_type(&self) -> ScopeType {
        self.scope_type
    }

    /// Returns the workspace ids the scope applies to.
    #[must_use]
    pub fn applies_to(&self) -> &[String] {
        &self.applies_to
    }
}

/// Builds the path of an NGWAF collection, or of one resource in it.
///
/// An empty `resource_id` addresses the collection itself.
///
/// # Errors
///
/// - [`ScopeError::Required`] when `scope` is `None`
/// - [`ScopeError::WorkspaceCount`] when a workspace scope does not carry
///   exactly one id
/// - [`ScopeError::EmptyWorkspaceId`] when that id is empty
pub fn build_scoped_path(
    scope: Option<&Scope>,
    collection: &str,
    resource_id: &str,
) -> Result<String, ScopeError> {
    let scope = scope.ok_or(ScopeError::Required)?;

    let mut segments: Vec<&str> = NGWAF_PREFIX.to_vec();
    if scope.scope_type == ScopeType::Workspace {
        let [workspace_id] = scope.applies_to.as_slice() else {
            return Err(ScopeError::WorkspaceCount {
                count: scope.applies_to.len(),
            });
        };
        if workspace_id.is_empty() {
            return Err(ScopeError::EmptyWorkspaceId);
        }
        segments.extend(["workspaces", workspace_id.as_str()]);
    }

    segments.push(collection);
    if !resource_id.is_empty() {
        segments.push(resource_id);
    }

    Ok(join_path(&segments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path_escapes_each_segment() {
        assert_eq!(
            join_path(&["service", "a/b", "version", "1"]),
            "/service/a%2Fb/version/1"
        );
        assert_eq!(join_path(&["dictionary", "x?y"]), "/dictionary/x%3Fy");
    }

    #[test]
    fn test_join_path_empty_is_root() {
        let segments: [&str; 0] = [];
        assert_eq!(join_path(&segments), "/");
    }

    #[test]
    fn test_workspace_scope_collection_path() {
        let scope = Scope::workspace("ws1");
        let path = build_scoped_path(Some(&scope), "rules", "").unwrap();
        assert_eq!(path, "/ngwaf/v1/workspaces/ws1/rules");
    }

    #[test]
    fn test_workspace_scope_resource_path() {
        let scope = Scope::workspace("ws1");
        let path = build_scoped_path(Some(&scope), "rules", "r1").unwrap();
        assert_eq!(path, "/ngwaf/v1/workspaces/ws1/rules/r1");
    }

    #[test]
    fn test_account_scope_ignores_applies_to() {
        let wildcard = Scope::account(["*"]);
        let listed = Scope::account(["ws1", "ws2"]);
        let empty = Scope::account(Vec::<String>::new());

        for scope in [&wildcard, &listed, &empty] {
            assert_eq!(
                build_scoped_path(Some(scope), "lists", "").unwrap(),
                "/ngwaf/v1/lists"
            );
        }
        assert_eq!(
            build_scoped_path(Some(&listed), "lists", "l1").unwrap(),
            "/ngwaf/v1/lists/l1"
        );
    }

    #[test]
    fn test_missing_scope_is_rejected() {
        assert_eq!(
            build_scoped_path(None, "rules", ""),
            Err(ScopeError::Required)
        );
    }

    #[test]
    fn test_workspace_scope_requires_exactly_one_id() {
        let none = Scope::new(ScopeType::Workspace, Vec::<String>::new());
        assert_eq!(
            build_scoped_path(Some(&none), "rules", ""),
            Err(ScopeError::WorkspaceCount { count: 0 })
        );

        let two = Scope::new(ScopeType::Workspace, ["a", "b"]);
        assert_eq!(
            build_scoped_path(Some(&two), "rules", ""),
            Err(ScopeError::WorkspaceCount { count: 2 })
        );
    }

    #[test]
    fn test_workspace_scope_rejects_empty_id() {
        let scope = Scope::workspace("");
        assert_eq!(
            build_scoped_path(Some(&scope), "rules", ""),
            Err(ScopeError::EmptyWorkspaceId)
        );
    }

    #[test]
    fn test_scoped_path_escapes_segments() {
        let scope = Scope::workspace("ws/1");
        let path = build_scoped_path(Some(&scope), "signals", "a b").unwrap();
        assert_eq!(path, "/ngwaf/v1/workspaces/ws%2F1/signals/a%20b");
    }

    #[test]
    fn test_scope_type_parse() {
        assert_eq!("workspace".parse::<ScopeType>(), Ok(ScopeType::Workspace));
        assert_eq!("account".parse::<ScopeType>(), Ok(ScopeType::Account));
        assert_eq!(
            "Account".parse::<ScopeType>(),
            Err(ScopeError::UnsupportedType {
                value: "Account".to_string()
            })
        );
    }

    #[test]
    fn test_scope_serde_shape() {
        let scope = Scope::workspace("ws1");
        let json = serde_json::to_value(&scope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "workspace", "applies_to": ["ws1"]})
        );

        let decoded: Scope =
            serde_json::from_str(r#"{"type":"account","applies_to":["*"]}"#).unwrap();
        assert_eq!(decoded.scope_type(), ScopeType::Account);
        assert_eq!(decoded.applies_to(), ["*"]);
    }

    #[test]
    fn test_scope_deserialize_rejects_unknown_type() {
        let error =
            serde_json::from_str::<Scope>(r#"{"type":"org","applies_to":[]}"#).unwrap_err();
        assert!(error.to_string().contains("unsupported scope type"));
    }
}
