use std::collections::HashMap;

/// A variable name is one or more ASCII letters, case-sensitive.
pub fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

#[derive(Debug, Default)]
pub struct Variables {
    values: HashMap<String, i64>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    pub fn assign(&mut self, name: &str, value: i64) {
        log::trace!("{name} <- {value}");
        self.values.insert(name.to_string(), value);
    }
}
