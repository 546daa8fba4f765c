/// Ordered set of ingredient names chosen for the next generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `name` if selected, append it otherwise.
    /// Returns whether `name` is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i == name) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(name.to_string());
            true
        }
    }

    /// Append a user-typed ingredient.
    /// Input is trimmed; empty or already-selected entries are ignored.
    /// Returns true if the entry was added.
    pub fn add_custom(&mut self, text: &str) -> bool {
        let name = text.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.items.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i == name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
