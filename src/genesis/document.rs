use crate::error::IngestError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A parsed genesis document.
///
/// Construction validates the top-level shape: a JSON object carrying a
/// string `chain_id` and an object `app_state`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenesisDocument {
    root: Value,
}

impl GenesisDocument {
    pub fn from_value(root: Value) -> Result<Self, IngestError> {
        let object = root
            .as_object()
            .ok_or_else(|| IngestError::parse("document root is not an object"))?;

        match object.get("chain_id") {
            Some(Value::String(_)) => {}
            Some(_) => return Err(IngestError::parse("chain_id is not a string")),
            None => return Err(IngestError::parse("missing chain_id")),
        }
        match object.get("app_state") {
            Some(Value::Object(_)) => {}
            Some(_) => return Err(IngestError::parse("app_state is not an object")),
            None => return Err(IngestError::parse("missing app_state")),
        }

        Ok(Self { root })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, IngestError> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    pub fn chain_id(&self) -> &str {
        self.root["chain_id"].as_str().unwrap_or_default()
    }

    pub fn app_state(&self) -> &Value {
        &self.root["app_state"]
    }

    /// Module names present in `app_state`, e.g. `bank`, `wasm`.
    pub fn modules(&self) -> Vec<&str> {
        self.app_state()
            .as_object()
            .map(|state| state.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Lazily walk the document in pre-order. See [`Flatten`].
    pub fn flatten(&self) -> Flatten<'_> {
        flatten(&self.root)
    }

    /// Deserialize every flattened item located exactly at `path`.
    ///
    /// Resolves `path` directly instead of walking the whole document, with
    /// the same result as filtering [`GenesisDocument::flatten`]: an array
    /// yields its elements, a scalar yields itself, and an object or a path
    /// absent from the document yields nothing.
    pub fn records<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, IngestError> {
        let target = json_pointer(path).and_then(|pointer| self.root.pointer(&pointer));
        let items: Vec<&Value> = match target {
            None | Some(Value::Object(_)) => Vec::new(),
            Some(Value::Array(items)) => items.iter().collect(),
            Some(scalar) => vec![scalar],
        };

        items
            .into_iter()
            .map(|value| {
                T::deserialize(value)
                    .map_err(|e| IngestError::parse(format!("record at {}: {}", path, e)))
            })
            .collect()
    }
}

/// `.app_state.bank` -> `/app_state/bank`, escaped per RFC 6901. Flattened
/// paths always start with `.`, so anything else names no location.
fn json_pointer(path: &str) -> Option<String> {
    if path.is_empty() {
        return Some(String::new());
    }
    let keys = path.strip_prefix('.')?;
    Some(
        keys.split('.')
            .map(|key| format!("/{}", key.replace('~', "~0").replace('/', "~1")))
            .collect(),
    )
}

enum Step<'a> {
    /// Descend into the value.
    Visit(String, &'a Value),
    /// Yield the value as is.
    Emit(String, &'a Value),
}

/// Pre-order traversal of a JSON tree yielding `(path, value)` pairs.
///
/// Object keys extend the path as `.key`; objects themselves are not
/// yielded. Array elements are yielded with the array's path and are not
/// descended into. Scalars are yielded with their own path.
pub struct Flatten<'a> {
    stack: Vec<Step<'a>>,
}

pub fn flatten(value: &Value) -> Flatten<'_> {
    Flatten {
        stack: vec![Step::Visit(String::new(), value)],
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = (String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Emit(path, value) => return Some((path, value)),
                Step::Visit(path, Value::Object(map)) => {
                    for (key, child) in map.iter().rev() {
                        self.stack.push(Step::Visit(format!("{}.{}", path, key), child));
                    }
                }
                Step::Visit(path, Value::Array(items)) => {
                    for item in items.iter().rev() {
                        self.stack.push(Step::Emit(path.clone(), item));
                    }
                }
                Step::Visit(path, scalar) => return Some((path, scalar)),
            }
        }
        None
    }
}
