//! Input-field collaborators consumed by the interaction controller.
//!
//! Three independent text fields, each readable at any time and reset
//! together by `clear`. The original screen's edit boxes; here an
//! in-memory set filled from CLI arguments or the interactive prompt.

pub trait Fields {
    fn name(&self) -> String;
    fn email(&self) -> String;
    fn phone(&self) -> String;

    /// Reset all three fields to the empty string.
    fn clear(&mut self);
}

#[derive(Debug, Default, Clone)]
pub struct FieldSet {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl FieldSet {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}

impl Fields for FieldSet {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn email(&self) -> String {
        self.email.clone()
    }

    fn phone(&self) -> String {
        self.phone.clone()
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_all_three_fields() {
        let mut f = FieldSet::new("Ana", "ana@x.com", "111");
        assert!(!f.is_empty());
        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.name(), "");
        assert_eq!(f.email(), "");
        assert_eq!(f.phone(), "");
    }
}
