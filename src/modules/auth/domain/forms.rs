use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::shared::errors::AppResult;
use crate::shared::validation::{
    AcceptedRule, MatchesRule, MinLengthRule, PatternRule, RequiredRule, ValidationChain,
};

pub const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";
pub const USERNAME_PATTERN: &str = r"^[a-zA-Z0-9_\x{0600}-\x{06FF}]+$";

pub const LOGIN_PASSWORD_MIN: usize = 6;
pub const REGISTER_PASSWORD_MIN: usize = 8;
pub const USERNAME_MIN: usize = 3;

pub mod messages {
    pub const EMAIL_REQUIRED: &str = "البريد الإلكتروني مطلوب";
    pub const EMAIL_INVALID: &str = "البريد الإلكتروني غير صحيح";
    pub const PASSWORD_REQUIRED: &str = "كلمة المرور مطلوبة";
    pub const LOGIN_PASSWORD_SHORT: &str = "كلمة المرور يجب أن تكون 6 أحرف على الأقل";
    pub const REGISTER_PASSWORD_SHORT: &str = "كلمة المرور يجب أن تكون 8 أحرف على الأقل";
    pub const PASSWORD_WEAK: &str = "كلمة المرور يجب أن تحتوي على حرف كبير وحرف صغير ورقم";
    pub const USERNAME_REQUIRED: &str = "اسم المستخدم مطلوب";
    pub const USERNAME_SHORT: &str = "اسم المستخدم يجب أن يكون 3 أحرف على الأقل";
    pub const USERNAME_INVALID: &str = "اسم المستخدم يجب أن يحتوي على أحرف وأرقام فقط";
    pub const CONFIRM_REQUIRED: &str = "تأكيد كلمة المرور مطلوب";
    pub const CONFIRM_MISMATCH: &str = "كلمة المرور غير متطابقة";
    pub const TERMS_REQUIRED: &str = "يجب الموافقة على الشروط والأحكام";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn password(&self) -> &str {
        &self.password
    }

    /// Rules of the sign-in form, in display order
    pub fn validation_chain() -> AppResult<ValidationChain<LoginForm>> {
        use messages::*;

        Ok(ValidationChain::new()
            .add_rule(Arc::new(RequiredRule::new("email", EMAIL_REQUIRED, Self::email)))
            .add_rule(Arc::new(PatternRule::new(
                "email",
                EMAIL_INVALID,
                EMAIL_PATTERN,
                Self::email,
            )?))
            .add_rule(Arc::new(RequiredRule::new(
                "password",
                PASSWORD_REQUIRED,
                Self::password,
            )))
            .add_rule(Arc::new(MinLengthRule::new(
                "password",
                LOGIN_PASSWORD_SHORT,
                LOGIN_PASSWORD_MIN,
                Self::password,
            ))))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl RegistrationForm {
    fn username(&self) -> &str {
        &self.username
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn password(&self) -> &str {
        &self.password
    }

    fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    fn accept_terms(&self) -> bool {
        self.accept_terms
    }

    /// Rules of the sign-up form, in display order
    pub fn validation_chain() -> AppResult<ValidationChain<RegistrationForm>> {
        use messages::*;

        Ok(ValidationChain::new()
            .add_rule(Arc::new(RequiredRule::new(
                "username",
                USERNAME_REQUIRED,
                Self::username,
            )))
            .add_rule(Arc::new(MinLengthRule::new(
                "username",
                USERNAME_SHORT,
                USERNAME_MIN,
                Self::username,
            )))
            .add_rule(Arc::new(PatternRule::new(
                "username",
                USERNAME_INVALID,
                USERNAME_PATTERN,
                Self::username,
            )?))
            .add_rule(Arc::new(RequiredRule::new("email", EMAIL_REQUIRED, Self::email)))
            .add_rule(Arc::new(PatternRule::new(
                "email",
                EMAIL_INVALID,
                EMAIL_PATTERN,
                Self::email,
            )?))
            .add_rule(Arc::new(RequiredRule::new(
                "password",
                PASSWORD_REQUIRED,
                Self::password,
            )))
            .add_rule(Arc::new(MinLengthRule::new(
                "password",
                REGISTER_PASSWORD_SHORT,
                REGISTER_PASSWORD_MIN,
                Self::password,
            )))
            .add_rule(Arc::new(PatternRule::all_of(
                "password",
                PASSWORD_WEAK,
                &[r"[a-z]", r"[A-Z]", r"[0-9]"],
                Self::password,
            )?))
            .add_rule(Arc::new(RequiredRule::new(
                "confirmPassword",
                CONFIRM_REQUIRED,
                Self::confirm_password,
            )))
            .add_rule(Arc::new(MatchesRule::new(
                "confirmPassword",
                CONFIRM_MISMATCH,
                Self::confirm_password,
                Self::password,
            )))
            .add_rule(Arc::new(AcceptedRule::new(
                "terms",
                TERMS_REQUIRED,
                Self::accept_terms,
            ))))
    }
}

#[cfg(test)]
mod tests {
    use super::messages::*;
    use super::*;

    fn valid_registration() -> RegistrationForm {
        RegistrationForm {
            username: "سارة_أوتاكو".to_string(),
            email: "sara@example.com".to_string(),
            password: "Secret123".to_string(),
            confirm_password: "Secret123".to_string(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_empty_login_reports_required_fields() {
        let chain = LoginForm::validation_chain().unwrap();
        let result = chain.validate(&LoginForm::default());

        assert_eq!(result.errors.get("email"), Some(EMAIL_REQUIRED));
        assert_eq!(result.errors.get("password"), Some(PASSWORD_REQUIRED));
    }

    #[test]
    fn test_login_email_and_password_shape() {
        let chain = LoginForm::validation_chain().unwrap();
        let result = chain.validate(&LoginForm::new("ahmed@example", "12345"));

        assert_eq!(result.errors.get("email"), Some(EMAIL_INVALID));
        assert_eq!(result.errors.get("password"), Some(LOGIN_PASSWORD_SHORT));

        let ok = chain.validate(&LoginForm::new("ahmed@example.com", "password"));
        assert!(ok.is_valid());
    }

    #[test]
    fn test_valid_registration_passes() {
        let chain = RegistrationForm::validation_chain().unwrap();
        assert!(chain.validate(&valid_registration()).is_valid());
    }

    #[test]
    fn test_username_rules() {
        let chain = RegistrationForm::validation_chain().unwrap();

        let short = RegistrationForm {
            username: "ab".to_string(),
            ..valid_registration()
        };
        assert_eq!(
            chain.validate(&short).errors.get("username"),
            Some(USERNAME_SHORT)
        );

        let spaced = RegistrationForm {
            username: "manga fan".to_string(),
            ..valid_registration()
        };
        assert_eq!(
            chain.validate(&spaced).errors.get("username"),
            Some(USERNAME_INVALID)
        );
    }

    #[test]
    fn test_password_digit_must_be_ascii() {
        let chain = RegistrationForm::validation_chain().unwrap();

        let arabic_digit = RegistrationForm {
            password: "Abcdefg٣".to_string(),
            confirm_password: "Abcdefg٣".to_string(),
            ..valid_registration()
        };
        assert_eq!(
            chain.validate(&arabic_digit).errors.get("password"),
            Some(PASSWORD_WEAK)
        );

        let ascii_digit = RegistrationForm {
            password: "Abcdefg3".to_string(),
            confirm_password: "Abcdefg3".to_string(),
            ..valid_registration()
        };
        assert!(chain.validate(&ascii_digit).errors.get("password").is_none());
    }

    #[test]
    fn test_password_strength_and_confirmation() {
        let chain = RegistrationForm::validation_chain().unwrap();

        let weak = RegistrationForm {
            password: "alllowercase1".to_string(),
            confirm_password: "alllowercase1".to_string(),
            ..valid_registration()
        };
        assert_eq!(chain.validate(&weak).errors.get("password"), Some(PASSWORD_WEAK));

        let mismatch = RegistrationForm {
            confirm_password: "Secret124".to_string(),
            ..valid_registration()
        };
        let errors = chain.validate(&mismatch).errors;
        assert_eq!(errors.get("confirmPassword"), Some(CONFIRM_MISMATCH));
        assert!(!errors.contains("password"));
    }

    #[test]
    fn test_terms_must_be_accepted() {
        let chain = RegistrationForm::validation_chain().unwrap();
        let form = RegistrationForm {
            accept_terms: false,
            ..valid_registration()
        };
        let errors = chain.validate(&form).errors;
        assert_eq!(errors.get("terms"), Some(TERMS_REQUIRED));
        assert_eq!(errors.len(), 1);
    }
}
