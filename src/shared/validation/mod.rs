pub mod validation_chain;
pub mod validation_rules;

pub use validation_chain::{FieldErrors, ValidationChain, ValidationResult, ValidationRule};
pub use validation_rules::{
    AcceptedRule, MatchesRule, MinLengthRule, PatternRule, RequiredRule,
};
