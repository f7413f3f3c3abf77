use std::collections::HashMap;

/// The session-lifetime store mapping variable names to their last assigned
/// value.
///
/// Names are case-sensitive and keys are unique; assigning to an existing
/// name replaces its value. There is no deletion and no iteration: one flat
/// mapping lives for as long as the session does.
pub struct SymbolTable {
    variables: HashMap<String, i64>,
}

#[allow(clippy::new_without_default)]
impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(), }
    }

    /// Stores `value` under `name`, replacing any previous value.
    pub fn set(&mut self, name: String, value: i64) {
        self.variables.insert(name, value);
    }

    /// Returns the value last assigned to `name`, if any.
    ///
    /// A variable that was never assigned has no value; the caller decides
    /// how to report the miss. It is never defaulted.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    /// Reports whether `name` has been assigned in this session.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }
}
