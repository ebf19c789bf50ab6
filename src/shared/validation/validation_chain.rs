use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::sync::Arc;

/// Per-field validation messages, kept in the order the fields were checked.
///
/// Only the first failing message of a field is stored, mirroring how the
/// site's forms show one hint under each input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field` unless that field already failed.
    pub fn insert(&mut self, field: &str, message: &str) -> bool {
        if self.contains(field) {
            return false;
        }
        self.entries.push((field.to_string(), message.to_string()));
        true
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn first_message(&self) -> Option<&str> {
        self.entries.first().map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn extend(&mut self, other: FieldErrors) {
        for (field, message) in other.entries {
            self.insert(&field, &message);
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .entries
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

/// Result of a validation rule check
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: FieldErrors,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn invalid(field: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field, message);
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Merge two validation results
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.errors.extend(other.errors);
        self
    }

    /// Turn the result into `Err(FieldErrors)` when anything failed.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Trait for validation rules in the chain of responsibility pattern
pub trait ValidationRule<C>: Send + Sync {
    /// Field the rule reports against
    fn field(&self) -> &'static str;

    /// Execute this validation rule
    fn validate(&self, context: &C) -> ValidationResult;

    /// Get the name of this validation rule for logging
    fn rule_name(&self) -> &'static str;

    /// Check if this rule should be skipped based on context
    fn should_skip(&self, _context: &C) -> bool {
        false
    }
}

/// Chain of validation rules implementing Chain of Responsibility pattern
///
/// Rules for a field that already failed are not evaluated, so each field
/// reports its first broken rule only.
pub struct ValidationChain<C> {
    rules: Vec<Arc<dyn ValidationRule<C>>>,
    stop_on_first_error: bool,
}

impl<C> Clone for ValidationChain<C> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            stop_on_first_error: self.stop_on_first_error,
        }
    }
}

impl<C> ValidationChain<C> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            stop_on_first_error: false,
        }
    }

    /// Add a validation rule to the chain
    pub fn add_rule(mut self, rule: Arc<dyn ValidationRule<C>>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set whether to stop validation on first error
    pub fn stop_on_first_error(mut self, stop: bool) -> Self {
        self.stop_on_first_error = stop;
        self
    }

    /// Execute all validation rules in the chain
    pub fn validate(&self, context: &C) -> ValidationResult {
        let mut combined_result = ValidationResult::valid();

        for rule in &self.rules {
            if combined_result.errors.contains(rule.field()) || rule.should_skip(context) {
                continue;
            }

            let rule_result = rule.validate(context);

            if !rule_result.is_valid() {
                log::debug!(
                    "Validation rule '{}' failed for field '{}'",
                    rule.rule_name(),
                    rule.field()
                );
            }

            combined_result = combined_result.merge(rule_result);

            if self.stop_on_first_error && !combined_result.is_valid() {
                break;
            }
        }

        combined_result
    }

    /// Get the number of rules in the chain
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl<C> Default for ValidationChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NonEmpty(&'static str);

    impl ValidationRule<String> for NonEmpty {
        fn field(&self) -> &'static str {
            self.0
        }

        fn validate(&self, context: &String) -> ValidationResult {
            if context.is_empty() {
                ValidationResult::invalid(self.0, "empty")
            } else {
                ValidationResult::valid()
            }
        }

        fn rule_name(&self) -> &'static str {
            "NonEmpty"
        }
    }

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        assert!(errors.insert("email", "first"));
        assert!(!errors.insert("email", "second"));
        assert_eq!(errors.get("email"), Some("first"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_field_errors_serialize_in_insertion_order() {
        let mut errors = FieldErrors::new();
        errors.insert("username", "a");
        errors.insert("email", "b");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"username":"a","email":"b"}"#);
    }

    #[test]
    fn test_chain_reports_each_field_once() {
        let chain = ValidationChain::new()
            .add_rule(Arc::new(NonEmpty("name")))
            .add_rule(Arc::new(NonEmpty("name")))
            .add_rule(Arc::new(NonEmpty("other")));

        let result = chain.validate(&String::new());
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 2);
        assert_eq!(chain.rule_count(), 3);
    }

    #[test]
    fn test_chain_stops_on_first_error() {
        let chain = ValidationChain::new()
            .add_rule(Arc::new(NonEmpty("a")))
            .add_rule(Arc::new(NonEmpty("b")))
            .stop_on_first_error(true);

        let result = chain.validate(&String::new());
        assert_eq!(result.errors.fields().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_valid_context_passes() {
        let chain = ValidationChain::new().add_rule(Arc::new(NonEmpty("name")));
        assert!(chain.validate(&"x".to_string()).into_result().is_ok());
    }
}
