use super::value::FieldValue;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Outcome of one functional check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Pass,
    Fail,
    /// Free text, such as "jaws slightly worn, within tolerance"
    Narrative(FieldValue),
}

impl Default for CheckOutcome {
    fn default() -> Self {
        CheckOutcome::Narrative(FieldValue::none())
    }
}

impl CheckOutcome {
    /// Recognise the usual pass/fail spellings, English and Turkish; anything else is kept as
    /// a narrative.
    pub fn from_text(text: &str) -> CheckOutcome {
        match text.trim().to_lowercase().as_str() {
            "pass" | "passed" | "ok" | "yes" | "uygun" | "geçti" | "gecti" => CheckOutcome::Pass,
            "fail" | "failed" | "nok" | "no" | "uygun değil" | "uygun degil" | "kaldı"
            | "kaldi" => CheckOutcome::Fail,
            _ => CheckOutcome::Narrative(FieldValue::new(text)),
        }
    }

    pub(crate) fn from_value(value: Value) -> CheckOutcome {
        match value {
            Value::Null => CheckOutcome::default(),
            Value::Bool(true) => CheckOutcome::Pass,
            Value::Bool(false) => CheckOutcome::Fail,
            Value::String(text) => CheckOutcome::from_text(&text),
            other => CheckOutcome::Narrative(FieldValue::new(other.to_string())),
        }
    }
}

impl Serialize for CheckOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CheckOutcome::Pass => serializer.serialize_str("pass"),
            CheckOutcome::Fail => serializer.serialize_str("fail"),
            CheckOutcome::Narrative(text) => text.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for CheckOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(CheckOutcome::from_value(Value::deserialize(deserializer)?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionalCheck {
    #[serde(alias = "check", alias = "parameter")]
    pub name: FieldValue,
    #[serde(alias = "outcome", alias = "status", alias = "value")]
    pub result: CheckOutcome,
}

impl FunctionalCheck {
    pub fn new<N: Into<FieldValue>>(name: N, result: CheckOutcome) -> FunctionalCheck {
        FunctionalCheck {
            name: name.into(),
            result,
        }
    }
}

/// Named functional checks in the order they are printed. Deserializes from
/// `{"checks": [...]}`, a bare list of checks, or an object mapping check names to results
/// (printed in the order the keys were given).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FunctionalCheckRepr")]
pub struct FunctionalCheckResult {
    pub checks: Vec<FunctionalCheck>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FunctionalCheckRepr {
    Wrapped { checks: Vec<FunctionalCheck> },
    List(Vec<FunctionalCheck>),
    Map(Map<String, Value>),
}

impl From<FunctionalCheckRepr> for FunctionalCheckResult {
    fn from(repr: FunctionalCheckRepr) -> Self {
        let checks = match repr {
            FunctionalCheckRepr::Wrapped { checks } | FunctionalCheckRepr::List(checks) => checks,
            FunctionalCheckRepr::Map(map) => map
                .into_iter()
                .map(|(name, result)| FunctionalCheck::new(name, CheckOutcome::from_value(result)))
                .collect(),
        };
        FunctionalCheckResult { checks }
    }
}

impl FromIterator<FunctionalCheck> for FunctionalCheckResult {
    fn from_iter<T: IntoIterator<Item = FunctionalCheck>>(iter: T) -> Self {
        FunctionalCheckResult {
            checks: iter.into_iter().collect(),
        }
    }
}
