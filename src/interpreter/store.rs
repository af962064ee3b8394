use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The global variable store of one program run.
///
/// There is exactly one store per run. Every nested block reads and writes
/// this same instance; there are no block scopes, no shadowing and no way to
/// delete a variable.
#[derive(Debug, Default, Clone)]
pub struct Store {
    variables: HashMap<String, Value>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Returns the value bound to `name`, or `UndefinedVariable`.
    ///
    /// # Example
    /// ```
    /// use ks::interpreter::{store::Store, value::core::Value};
    ///
    /// let mut store = Store::new();
    /// store.set("x", Value::Number(5.0));
    ///
    /// assert_eq!(store.lookup("x", 1).unwrap(), &Value::Number(5.0));
    /// assert!(store.lookup("y", 1).is_err());
    /// ```
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.variables.get(name).ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                                                  line })
    }

    /// Binds `name` to `value`, replacing any previous value of any type.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Returns `true` if `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns all bindings ordered by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &Value)> {
        let mut entries: Vec<(&str, &Value)> =
            self.variables.iter().map(|(name, value)| (name.as_str(), value)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
