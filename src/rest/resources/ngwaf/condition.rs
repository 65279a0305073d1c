//! Rule conditions and their tagged JSON encoding.
//!
//! A rule's `conditions` array holds elements of three shapes, told apart by
//! a `type` tag with the payload under `fields`:
//!
//! ```json
//! {"type": "single",   "fields": {"field": "ip", "operator": "equals", "value": "127.0.0.1"}}
//! {"type": "group",    "fields": {"group_operator": "any", "conditions": [ ... ]}}
//! {"type": "multival", "fields": {"field": "request_header", "operator": "exists",
//!                                 "group_operator": "all", "conditions": [ ... ]}}
//! ```
//!
//! A group holds singles and multivals but never another group. A multival
//! holds singles only. Nested elements use the same tagged shape.
//!
//! Decoding reads the tag first and parses `fields` once into the matching
//! struct, so an unknown tag is reported as `unknown condition type: <tag>`
//! without attempting any of the shapes. Any decode failure fails the whole
//! document.
//!
//! Decoding keeps `fields` as a borrowed raw JSON slice, so these types must
//! be read with `serde_json::from_str`/`from_slice` rather than `from_value`.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

const SINGLE: &str = "single";
const GROUP: &str = "group";
const MULTIVAL: &str = "multival";

/// Compares one request field against a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleCondition {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl SingleCondition {
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// Combines conditions with `all` or `any`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCondition {
    pub group_operator: String,
    pub conditions: Vec<GroupMember>,
}

/// Matches a multi-valued field (e.g. a header set) against single conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultivalCondition {
    pub field: String,
    pub operator: String,
    pub group_operator: String,
    #[serde(with = "single_members")]
    pub conditions: Vec<SingleCondition>,
}

/// A top-level rule condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "fields", rename_all = "lowercase")]
pub enum Condition {
    Single(SingleCondition),
    Group(GroupCondition),
    Multival(MultivalCondition),
}

impl Condition {
    /// Returns the wire tag of the condition.
    #[must_use]
    pub const fn condition_type(&self) -> &'static str {
        match self {
            Self::Single(_) => SINGLE,
            Self::Group(_) => GROUP,
            Self::Multival(_) => MULTIVAL,
        }
    }
}

impl From<SingleCondition> for Condition {
    fn from(condition: SingleCondition) -> Self {
        Self::Single(condition)
    }
}

impl From<GroupCondition> for Condition {
    fn from(condition: GroupCondition) -> Self {
        Self::Group(condition)
    }
}

impl From<MultivalCondition> for Condition {
    fn from(condition: MultivalCondition) -> Self {
        Self::Multival(condition)
    }
}

/// A condition nested inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "fields", rename_all = "lowercase")]
pub enum GroupMember {
    Single(SingleCondition),
    Multival(MultivalCondition),
}

impl GroupMember {
    /// Returns the wire tag of the member.
    #[must_use]
    pub const fn condition_type(&self) -> &'static str {
        match self {
            Self::Single(_) => SINGLE,
            Self::Multival(_) => MULTIVAL,
        }
    }
}

/// Tag plus undecoded payload of one element.
#[derive(Deserialize)]
struct RawCondition {
    #[serde(rename = "type")]
    kind: String,
    fields: Box<RawValue>,
}

impl RawCondition {
    fn fields<T, E>(&self) -> Result<T, E>
    where
        T: DeserializeOwned,
        E: de::Error,
    {
        serde_json::from_str(self.fields.get()).map_err(|e| {
            E::custom(format_args!("invalid {} condition: {e}", self.kind))
        })
    }

    fn misplaced<E: de::Error>(&self, parent: &str) -> E {
        if matches!(self.kind.as_str(), SINGLE | GROUP | MULTIVAL) {
            E::custom(format_args!(
                "{} condition is not allowed inside a {parent} condition",
                self.kind
            ))
        } else {
            unknown(&self.kind)
        }
    }
}

fn unknown<E: de::Error>(kind: &str) -> E {
    E::custom(format_args!("unknown condition type: {kind}"))
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawCondition::deserialize(deserializer)?;
        match raw.kind.as_str() {
            SINGLE => raw.fields().map(Self::Single),
            GROUP => raw.fields().map(Self::Group),
            MULTIVAL => raw.fields().map(Self::Multival),
            other => Err(unknown(other)),
        }
    }
}

impl<'de> Deserialize<'de> for GroupMember {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawCondition::deserialize(deserializer)?;
        match raw.kind.as_str() {
            SINGLE => raw.fields().map(Self::Single),
            MULTIVAL => raw.fields().map(Self::Multival),
            _ => Err(raw.misplaced(GROUP)),
        }
    }
}

/// Encodes the singles of a multival in the tagged element shape.
mod single_members {
    use super::{Deserialize, Deserializer, RawCondition, Serialize, Serializer, SingleCondition};

    #[derive(Serialize)]
    #[serde(tag = "type", content = "fields", rename_all = "lowercase")]
    enum Element<'a> {
        Single(&'a SingleCondition),
    }

    pub fn serialize<S: Serializer>(
        conditions: &[SingleCondition],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(conditions.iter().map(Element::Single))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<SingleCondition>, D::Error> {
        Vec::<RawCondition>::deserialize(deserializer)?
            .iter()
            .map(|raw| {
                if raw.kind == super::SINGLE {
                    raw.fields::<SingleCondition, D::Error>()
                } else {
                    Err(raw.misplaced::<D::Error>(super::MULTIVAL))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(json: &str) -> Result<Vec<Condition>, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_decodes_each_shape_in_order() {
        let conditions = decode(
            r#"[
                {"type":"single","fields":{"field":"ip","operator":"equals","value":"127.0.0.1"}},
                {"type":"group","fields":{"group_operator":"any","conditions":[
                    {"type":"single","fields":{"field":"path","operator":"equals","value":"/login"}},
                    {"type":"multival","fields":{"field":"request_header","operator":"exists","group_operator":"all","conditions":[
                        {"type":"single","fields":{"field":"name","operator":"equals","value":"x-bot"}}
                    ]}}
                ]}},
                {"type":"multival","fields":{"field":"query_parameter","operator":"exists","group_operator":"any","conditions":[]}}
            ]"#,
        )
        .unwrap();

        let types: Vec<_> = conditions.iter().map(Condition::condition_type).collect();
        assert_eq!(types, ["single", "group", "multival"]);

        let Condition::Single(single) = &conditions[0] else {
            panic!("expected single condition");
        };
        assert_eq!(single, &SingleCondition::new("ip", "equals", "127.0.0.1"));

        let Condition::Group(group) = &conditions[1] else {
            panic!("expected group condition");
        };
        assert_eq!(group.group_operator, "any");
        assert_eq!(group.conditions.len(), 2);
        assert_eq!(group.conditions[1].condition_type(), "multival");
        let GroupMember::Multival(multival) = &group.conditions[1] else {
            panic!("expected multival member");
        };
        assert_eq!(multival.conditions[0].value, "x-bot");
    }

    #[test]
    fn test_unknown_type_fails_whole_document() {
        let error = decode(
            r#"[
                {"type":"single","fields":{"field":"ip","operator":"equals","value":"1"}},
                {"type":"bogus","fields":{}}
            ]"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("unknown condition type: bogus"));
    }

    #[test]
    fn test_group_inside_group_is_rejected() {
        let error = decode(
            r#"[{"type":"group","fields":{"group_operator":"all","conditions":[
                {"type":"group","fields":{"group_operator":"any","conditions":[]}}
            ]}}]"#,
        )
        .unwrap_err();
        assert!(error
            .to_string()
            .contains("group condition is not allowed inside a group condition"));
    }

    #[test]
    fn test_multival_accepts_singles_only() {
        let error = decode(
            r#"[{"type":"multival","fields":{"field":"f","operator":"o","group_operator":"all","conditions":[
                {"type":"multival","fields":{"field":"f","operator":"o","group_operator":"all","conditions":[]}}
            ]}}]"#,
        )
        .unwrap_err();
        assert!(error
            .to_string()
            .contains("multival condition is not allowed inside a multival condition"));
    }

    #[test]
    fn test_unknown_type_nested_in_multival() {
        let error = decode(
            r#"[{"type":"multival","fields":{"field":"f","operator":"o","group_operator":"all","conditions":[
                {"type":"other","fields":{}}
            ]}}]"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("unknown condition type: other"));
    }

    #[test]
    fn test_malformed_fields_are_reported() {
        let error = decode(r#"[{"type":"single","fields":{"field":1}}]"#).unwrap_err();
        assert!(error.to_string().contains("invalid single condition"));
    }

    #[test]
    fn test_serializes_tagged_shape() {
        let condition = Condition::Multival(MultivalCondition {
            field: "request_header".to_string(),
            operator: "exists".to_string(),
            group_operator: "all".to_string(),
            conditions: vec![SingleCondition::new("name", "equals", "x")],
        });

        assert_eq!(
            serde_json::to_value(&condition).unwrap(),
            json!({
                "type": "multival",
                "fields": {
                    "field": "request_header",
                    "operator": "exists",
                    "group_operator": "all",
                    "conditions": [
                        {"type": "single", "fields": {"field": "name", "operator": "equals", "value": "x"}}
                    ]
                }
            })
        );
    }

    #[test]
    fn test_round_trip_preserves_value() {
        let original = vec![
            Condition::from(SingleCondition::new("ip", "equals", "10.0.0.1")),
            Condition::from(GroupCondition {
                group_operator: "all".to_string(),
                conditions: vec![
                    GroupMember::Single(SingleCondition::new("method", "equals", "POST")),
                    GroupMember::Multival(MultivalCondition {
                        field: "request_cookie".to_string(),
                        operator: "exists".to_string(),
                        group_operator: "any".to_string(),
                        conditions: vec![SingleCondition::new("name", "equals", "sid")],
                    }),
                ],
            }),
        ];

        let text = serde_json::to_string(&original).unwrap();
        let decoded: Vec<Condition> = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, original);
    }
}
