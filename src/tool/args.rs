// ABOUTME: Typed argument model - parameter specs and the loosely-typed bag
// ABOUTME: of values a caller sends, with explicit defaulting and coercion.

use std::collections::HashMap;

use serde_json::{Number, Value};

use crate::error::ToolError;

/// The kind of value a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
}

impl ParamKind {
    /// JSON Schema type name.
    pub fn json_type(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
        }
    }
}

/// A single argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Text(String),
    Number(Number),
}

impl ArgValue {
    /// Render as one argument-vector token.
    pub fn to_arg(&self) -> String {
        match self {
            ArgValue::Text(s) => s.clone(),
            ArgValue::Number(n) => render_number(n),
        }
    }

    /// The JSON form, used for schema defaults.
    pub fn to_json(&self) -> Value {
        match self {
            ArgValue::Text(s) => Value::String(s.clone()),
            ArgValue::Number(n) => Value::Number(n.clone()),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::Text(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::Text(s)
    }
}

impl From<i64> for ArgValue {
    fn from(n: i64) -> Self {
        ArgValue::Number(n.into())
    }
}

impl From<u64> for ArgValue {
    fn from(n: u64) -> Self {
        ArgValue::Number(n.into())
    }
}

/// Plain decimal text: no grouping, and integral floats lose their `.0`.
fn render_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    // f64's Display is plain positional decimal, never exponent form.
    match n.as_f64() {
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Declared parameter of a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    pub required: bool,
    pub default: Option<ArgValue>,
}

impl ParameterSpec {
    /// A required parameter. Required parameters never carry a default.
    pub fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: true,
            default: None,
        }
    }

    /// An optional parameter.
    pub fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind, description)
        }
    }

    /// Attach a default. Ignored for required parameters.
    pub fn with_default(mut self, value: impl Into<ArgValue>) -> Self {
        if !self.required {
            self.default = Some(value.into());
        }
        self
    }

    /// JSON Schema for this property.
    pub fn to_schema(&self) -> Value {
        let mut schema = serde_json::json!({
            "type": self.kind.json_type(),
            "description": self.description,
        });
        if let (false, Some(default)) = (self.required, &self.default) {
            schema["default"] = default.to_json();
        }
        schema
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Value(ArgValue),
    /// A JSON value of a kind no parameter accepts; holds the kind's name.
    Unsupported(&'static str),
}

/// The argument bag of one tool call, unvalidated until a tool reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments {
    entries: HashMap<String, Entry>,
}

impl ToolArguments {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `arguments` member of a call.
    ///
    /// `None` and `null` yield an empty bag. `null` entries count as absent.
    pub fn from_json(value: Option<Value>) -> Result<Self, ToolError> {
        let map = match value {
            None | Some(Value::Null) => return Ok(Self::new()),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(ToolError::InvalidArgument {
                    name: "arguments".into(),
                    reason: format!("expected an object, got {}", json_kind(&other)),
                });
            }
        };

        let entries = map
            .into_iter()
            .filter_map(|(name, value)| {
                let entry = match value {
                    Value::Null => return None,
                    Value::String(s) => Entry::Value(ArgValue::Text(s)),
                    Value::Number(n) => Entry::Value(ArgValue::Number(n)),
                    other => Entry::Unsupported(json_kind(&other)),
                };
                Some((name, entry))
            })
            .collect();

        Ok(Self { entries })
    }

    /// Add a value, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.entries.insert(name.into(), Entry::Value(value.into()));
        self
    }

    /// Get a supplied value by name.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        match self.entries.get(name) {
            Some(Entry::Value(v)) => Some(v),
            _ => None,
        }
    }

    /// Number of supplied entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve one parameter to its argument-vector text.
    ///
    /// Supplied values are coerced to text whatever the declared kind.
    /// Absent values fall back to the default; absent required values fail.
    pub fn resolve(&self, tool: &str, spec: &ParameterSpec) -> Result<Option<String>, ToolError> {
        match self.entries.get(spec.name) {
            Some(Entry::Value(v)) => Ok(Some(v.to_arg())),
            Some(Entry::Unsupported(kind)) => Err(ToolError::InvalidArgument {
                name: spec.name.to_string(),
                reason: format!("expected a {}, got {}", spec.kind.json_type(), kind),
            }),
            None if spec.required => Err(ToolError::MissingArgument {
                tool: tool.to_string(),
                name: spec.name.to_string(),
            }),
            None => Ok(spec.default.as_ref().map(ArgValue::to_arg)),
        }
    }

    /// Check every declared parameter, in declaration order.
    pub fn validate(&self, tool: &str, params: &[ParameterSpec]) -> Result<(), ToolError> {
        for spec in params {
            self.resolve(tool, spec)?;
        }
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
