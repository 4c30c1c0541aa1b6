//! The allow-list of model identifiers clients may select.

/// Models enabled when the configuration does not name any.
pub const DEFAULT_MODELS: &[&str] = &["gemini-1.5-flash-001", "gemini-1.5-pro-preview-0514"];

/// Ordered, immutable set of model identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableModels {
    models: Vec<String>,
}

impl AvailableModels {
    pub fn new<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for model in models {
            let model = model.into();
            if !unique.contains(&model) {
                unique.push(model);
            }
        }
        Self { models: unique }
    }

    pub fn contains(&self, model: &str) -> bool {
        self.models.iter().any(|m| m == model)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Model names joined with `", "`, as shown to clients.
    pub fn joined(&self) -> String {
        self.models.join(", ")
    }
}

impl Default for AvailableModels {
    fn default() -> Self {
        Self::new(DEFAULT_MODELS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_models() {
        let models = AvailableModels::default();
        assert_eq!(models.len(), 2);
        assert!(models.contains("gemini-1.5-flash-001"));
        assert!(models.contains("gemini-1.5-pro-preview-0514"));
    }

    #[test]
    fn test_contains_is_exact() {
        let models = AvailableModels::new(["gemini-1.5-flash-001"]);
        assert!(!models.contains("GEMINI-1.5-FLASH-001"));
        assert!(!models.contains("gemini-1.5-flash"));
        assert!(!models.contains(""));
    }

    #[test]
    fn test_joined_keeps_order() {
        let models = AvailableModels::new(["b", "a", "c"]);
        assert_eq!(models.joined(), "b, a, c");
    }

    #[test]
    fn test_duplicates_collapse() {
        let models = AvailableModels::new(["a", "b", "a"]);
        assert_eq!(models.as_slice(), &["a".to_string(), "b".to_string()]);
    }
}
