use std::collections::HashMap;

use crate::interpreter::value::Value;

/// A mutable mapping from variable names to values, optionally chained to a
/// parent scope.
///
/// Lookup walks up the parent chain; binding and removal act on the local
/// table only, so an inner scope can never rebind a name in an ancestor by
/// accident. The interpreter currently only ever builds one global scope, but
/// the chain supports nesting.
///
/// # Example
/// ```
/// use numera::interpreter::{symbol_table::SymbolTable, value::Value};
///
/// let mut symbols = SymbolTable::new();
/// symbols.set("x", Value::Integer(5));
///
/// assert_eq!(symbols.get("x"), Some(Value::Integer(5)));
/// assert_eq!(symbols.get("y"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    symbols: HashMap<String, Value>,
    parent:  Option<Box<SymbolTable>>,
}

impl SymbolTable {
    /// Creates an empty table with no parent scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table whose lookups fall back to `parent`.
    #[must_use]
    pub fn with_parent(parent: Self) -> Self {
        Self { symbols: HashMap::new(),
               parent:  Some(Box::new(parent)), }
    }

    /// Looks up `name`, searching the parent chain if it is unbound locally.
    ///
    /// Returns a copy of the binding (value semantics: the caller can never
    /// mutate the stored binding through the result), or `None` if the name
    /// is absent everywhere in the chain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.symbols.get(name) {
            Some(value) => Some(*value),
            None => self.parent.as_ref().and_then(|parent| parent.get(name)),
        }
    }

    /// Binds or rebinds `name` in the local table only.
    ///
    /// Never creates or updates a binding in an ancestor scope.
    pub fn set(&mut self, name: &str, value: Value) {
        self.symbols.insert(name.to_string(), value);
    }

    /// Deletes the local binding for `name`, returning the removed value.
    ///
    /// Removing an unbound name is a no-op yielding `None`; it is never a
    /// crash.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.symbols.remove(name)
    }
}
