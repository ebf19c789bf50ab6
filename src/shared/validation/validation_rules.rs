use super::validation_chain::{ValidationResult, ValidationRule};
use crate::shared::errors::{AppError, AppResult};
use regex::Regex;

/// Borrows a text input out of a form
pub type TextField<C> = fn(&C) -> &str;

/// Borrows a checkbox out of a form
pub type FlagField<C> = fn(&C) -> bool;

/// Fails when the input is empty
pub struct RequiredRule<C> {
    field: &'static str,
    message: &'static str,
    value: TextField<C>,
}

impl<C> RequiredRule<C> {
    pub fn new(field: &'static str, message: &'static str, value: TextField<C>) -> Self {
        Self {
            field,
            message,
            value,
        }
    }
}

impl<C> ValidationRule<C> for RequiredRule<C> {
    fn field(&self) -> &'static str {
        self.field
    }

    fn validate(&self, context: &C) -> ValidationResult {
        if (self.value)(context).is_empty() {
            ValidationResult::invalid(self.field, self.message)
        } else {
            ValidationResult::valid()
        }
    }

    fn rule_name(&self) -> &'static str {
        "Required"
    }
}

/// Fails when the input has fewer than `min` characters
pub struct MinLengthRule<C> {
    field: &'static str,
    message: &'static str,
    min: usize,
    value: TextField<C>,
}

impl<C> MinLengthRule<C> {
    pub fn new(
        field: &'static str,
        message: &'static str,
        min: usize,
        value: TextField<C>,
    ) -> Self {
        Self {
            field,
            message,
            min,
            value,
        }
    }
}

impl<C> ValidationRule<C> for MinLengthRule<C> {
    fn field(&self) -> &'static str {
        self.field
    }

    fn validate(&self, context: &C) -> ValidationResult {
        // Counted in characters: Arabic usernames are multi-byte.
        if (self.value)(context).chars().count() < self.min {
            ValidationResult::invalid(self.field, self.message)
        } else {
            ValidationResult::valid()
        }
    }

    fn rule_name(&self) -> &'static str {
        "MinLength"
    }
}

/// Fails unless every pattern matches the input
pub struct PatternRule<C> {
    field: &'static str,
    message: &'static str,
    patterns: Vec<Regex>,
    value: TextField<C>,
}

impl<C> PatternRule<C> {
    pub fn new(
        field: &'static str,
        message: &'static str,
        pattern: &str,
        value: TextField<C>,
    ) -> AppResult<Self> {
        Self::all_of(field, message, &[pattern], value)
    }

    /// Every pattern must match somewhere in the input. Used where a single
    /// expression would need look-ahead.
    pub fn all_of(
        field: &'static str,
        message: &'static str,
        patterns: &[&str],
        value: TextField<C>,
    ) -> AppResult<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| {
                    AppError::InternalError(format!("Invalid pattern for {}: {}", field, e))
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            field,
            message,
            patterns,
            value,
        })
    }
}

impl<C> ValidationRule<C> for PatternRule<C> {
    fn field(&self) -> &'static str {
        self.field
    }

    fn validate(&self, context: &C) -> ValidationResult {
        let input = (self.value)(context);
        if self.patterns.iter().all(|pattern| pattern.is_match(input)) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(self.field, self.message)
        }
    }

    fn rule_name(&self) -> &'static str {
        "Pattern"
    }
}

/// Fails when two inputs differ (password confirmation)
pub struct MatchesRule<C> {
    field: &'static str,
    message: &'static str,
    value: TextField<C>,
    expected: TextField<C>,
}

impl<C> MatchesRule<C> {
    pub fn new(
        field: &'static str,
        message: &'static str,
        value: TextField<C>,
        expected: TextField<C>,
    ) -> Self {
        Self {
            field,
            message,
            value,
            expected,
        }
    }
}

impl<C> ValidationRule<C> for MatchesRule<C> {
    fn field(&self) -> &'static str {
        self.field
    }

    fn validate(&self, context: &C) -> ValidationResult {
        if (self.value)(context) == (self.expected)(context) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(self.field, self.message)
        }
    }

    fn rule_name(&self) -> &'static str {
        "Matches"
    }
}

/// Fails when a checkbox is not ticked
pub struct AcceptedRule<C> {
    field: &'static str,
    message: &'static str,
    value: FlagField<C>,
}

impl<C> AcceptedRule<C> {
    pub fn new(field: &'static str, message: &'static str, value: FlagField<C>) -> Self {
        Self {
            field,
            message,
            value,
        }
    }
}

impl<C> ValidationRule<C> for AcceptedRule<C> {
    fn field(&self) -> &'static str {
        self.field
    }

    fn validate(&self, context: &C) -> ValidationResult {
        if (self.value)(context) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(self.field, self.message)
        }
    }

    fn rule_name(&self) -> &'static str {
        "Accepted"
    }
}
