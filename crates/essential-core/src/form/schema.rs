//! Validation rules per field name.

use std::collections::BTreeMap;

use super::value::FieldValue;

/// A single validation rule.
///
/// Only [`Rule::Required`] rejects blank values; every other rule passes
/// when the field is blank so optional fields can stay empty.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Rule {
    Required { message: Option<String> },
    Email,
    MinLength(usize),
    MaxLength(usize),
    MinItems(usize),
    Numeric,
}

impl Rule {
    /// Required with the default message.
    pub fn required() -> Self {
        Rule::Required { message: None }
    }

    /// Required with a custom message.
    pub fn required_with(message: impl Into<String>) -> Self {
        Rule::Required {
            message: Some(message.into()),
        }
    }

    /// Check a value, returning the failure message.
    pub fn check(&self, value: &FieldValue) -> Option<String> {
        if let Rule::Required { message } = self {
            return value.is_blank().then(|| {
                message
                    .clone()
                    .unwrap_or_else(|| "This field is required".to_string())
            });
        }
        if value.is_blank() {
            return None;
        }

        match self {
            Rule::Required { .. } => None,
            Rule::Email => {
                (!looks_like_email(value.as_text())).then(|| "Enter a valid email address".to_string())
            }
            Rule::MinLength(min) => (value.as_text().chars().count() < *min)
                .then(|| format!("Must be at least {min} characters")),
            Rule::MaxLength(max) => (value.as_text().chars().count() > *max)
                .then(|| format!("Must be at most {max} characters")),
            Rule::MinItems(min) => {
                (value.as_list().len() < *min).then(|| format!("Select at least {min} options"))
            }
            Rule::Numeric => value
                .as_text()
                .trim()
                .parse::<f64>()
                .is_err()
                .then(|| "Must be a number".to_string()),
        }
    }
}

fn looks_like_email(text: &str) -> bool {
    let text = text.trim();
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !text.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Ordered rules keyed by field name.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FormSchema {
    rules: BTreeMap<String, Vec<Rule>>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rules for a field (builder style).
    pub fn field(mut self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.entry(name.into()).or_default().extend(rules);
        self
    }

    /// Names of every field with rules.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// First failing rule's message for `name`, if any.
    pub fn validate(&self, name: &str, value: &FieldValue) -> Option<String> {
        self.rules
            .get(name)?
            .iter()
            .find_map(|rule| rule.check(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        let rule = Rule::required();
        assert_eq!(
            rule.check(&FieldValue::Empty).as_deref(),
            Some("This field is required")
        );
        assert_eq!(rule.check(&FieldValue::text("x")), None);

        let custom = Rule::required_with("Pick a plan");
        assert_eq!(
            custom.check(&FieldValue::Empty).as_deref(),
            Some("Pick a plan")
        );
    }

    #[test]
    fn optional_rules_pass_blank() {
        for rule in [Rule::Email, Rule::MinLength(3), Rule::MinItems(1), Rule::Numeric] {
            assert_eq!(rule.check(&FieldValue::Empty), None, "{rule:?}");
        }
    }

    #[test]
    fn email_rule() {
        let rule = Rule::Email;
        assert_eq!(rule.check(&FieldValue::text("ada@example.com")), None);
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a b@example.com", "a@b@c.io"] {
            assert_eq!(
                rule.check(&FieldValue::text(bad)).as_deref(),
                Some("Enter a valid email address"),
                "{bad}"
            );
        }
    }

    #[test]
    fn length_and_count_rules() {
        assert_eq!(
            Rule::MinLength(3).check(&FieldValue::text("ab")).as_deref(),
            Some("Must be at least 3 characters")
        );
        assert_eq!(
            Rule::MaxLength(2).check(&FieldValue::text("abc")).as_deref(),
            Some("Must be at most 2 characters")
        );
        assert_eq!(
            Rule::MinItems(2)
                .check(&FieldValue::list(["react"]))
                .as_deref(),
            Some("Select at least 2 options")
        );
    }

    #[test]
    fn numeric_rule() {
        assert_eq!(Rule::Numeric.check(&FieldValue::text("42.5")), None);
        assert_eq!(
            Rule::Numeric.check(&FieldValue::text("forty")).as_deref(),
            Some("Must be a number")
        );
    }

    #[test]
    fn first_failing_rule_wins() {
        let schema = FormSchema::new().field("email", [Rule::required(), Rule::Email]);
        assert_eq!(
            schema.validate("email", &FieldValue::Empty).as_deref(),
            Some("This field is required")
        );
        assert_eq!(
            schema.validate("email", &FieldValue::text("nope")).as_deref(),
            Some("Enter a valid email address")
        );
        assert_eq!(schema.validate("other", &FieldValue::Empty), None);
    }
}
