// Form validation state

use serde_json::Value;
use tokio::sync::watch;

use crate::{FormError, FormField, FormFields, ValidationError, ValidationErrors, predicates};

/// Name of the field `passwordMatch` rules compare against.
pub const PASSWORD_FIELD: &str = "password";

/// Evaluate one field's rules, in order, without short-circuiting.
///
/// Each failing rule contributes one error carrying the rule's message.
/// `fields` supplies the `password` value for `passwordMatch` rules.
pub fn validate_field(name: &str, field: &FormField, fields: &FormFields) -> Vec<ValidationError> {
    let password = fields.get(PASSWORD_FIELD).map(|f| &f.value);

    field
        .rules
        .iter()
        .filter(|rule| !predicates::check(&rule.kind, &field.value, password))
        .map(|rule| ValidationError::new(name, rule.message.clone()))
        .collect()
}

/// Validation state for a set of form fields.
///
/// The error collection and the dirty flag live in watch channels, so other
/// tasks can observe them through [`subscribe_errors`](Self::subscribe_errors)
/// and [`subscribe_dirty`](Self::subscribe_dirty). Validity is derived from the
/// error collection on every read.
///
/// ```
/// use formkit_validation::{FormField, FormFields, FormValidation, ValidationRule};
///
/// let fields = FormFields::new()
///     .field("email", FormField::new("jane@example.com")
///         .rule(ValidationRule::required("Email is required"))
///         .rule(ValidationRule::email("Enter a valid email")));
///
/// let mut form = FormValidation::new(fields);
/// assert!(!form.is_dirty());
/// assert!(form.validate_form());
/// assert!(form.is_dirty());
///
/// form.set_value("email", "jane").unwrap();
/// assert!(form.is_valid()); // stale until the next pass
/// assert!(!form.validate_form());
/// assert_eq!(form.errors().messages("email"), vec!["Enter a valid email"]);
/// ```
#[derive(Debug)]
pub struct FormValidation {
    fields: FormFields,
    errors: watch::Sender<ValidationErrors>,
    dirty: watch::Sender<bool>,
}

impl FormValidation {
    pub fn new(fields: FormFields) -> Self {
        let (errors, _) = watch::channel(ValidationErrors::default());
        let (dirty, _) = watch::channel(false);

        Self {
            fields,
            errors,
            dirty,
        }
    }

    /// Validate every field and publish the new error collection.
    ///
    /// Marks the form dirty, replaces the previous errors with the errors of
    /// this pass (fields in definition order) and returns whether the form is
    /// valid. Subscribers see the whole new collection at once.
    pub fn validate_form(&mut self) -> bool {
        self.dirty.send_if_modified(|dirty| !std::mem::replace(dirty, true));

        let errors: Vec<ValidationError> = self
            .fields
            .iter()
            .flat_map(|(name, field)| self.validate_field(name, field))
            .collect();

        formkit_log::debug!(
            target: "formkit::validation",
            "validated {} fields, {} errors",
            self.fields.len(),
            errors.len()
        );

        self.errors.send_replace(errors.into());
        self.is_valid()
    }

    /// Evaluate one field against this form's rules context. No side effects.
    pub fn validate_field(&self, name: &str, field: &FormField) -> Vec<ValidationError> {
        validate_field(name, field, &self.fields)
    }

    /// Snapshot of the errors from the latest pass.
    pub fn errors(&self) -> ValidationErrors {
        self.errors.borrow().clone()
    }

    /// Messages for one field from the latest pass.
    pub fn field_errors(&self, name: &str) -> Vec<ValidationError> {
        self.errors.borrow().for_field(name).cloned().collect()
    }

    /// `true` iff the latest pass produced no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    /// `true` once the form has been validated.
    pub fn is_dirty(&self) -> bool {
        *self.dirty.borrow()
    }

    pub fn subscribe_errors(&self) -> watch::Receiver<ValidationErrors> {
        self.errors.subscribe()
    }

    pub fn subscribe_dirty(&self) -> watch::Receiver<bool> {
        self.dirty.subscribe()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).map(|field| &field.value)
    }

    /// Update a field's value. Errors are left untouched until the next
    /// [`validate_form`](Self::validate_form).
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> Result<(), FormError> {
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.value = value.into();
        Ok(())
    }
}

/// Derived validity of an observed error collection.
pub fn is_valid(errors: &watch::Receiver<ValidationErrors>) -> bool {
    errors.borrow().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationRule;
    use serde_json::json;

    fn signup() -> FormFields {
        FormFields::new()
            .field(
                "name",
                FormField::new("")
                    .rule(ValidationRule::required("Name is required"))
                    .rule(ValidationRule::name_format("Letters only")),
            )
            .field(
                "password",
                FormField::new("short").rule(ValidationRule::password("Weak password")),
            )
            .field(
                "confirm",
                FormField::new("short").rule(ValidationRule::password_match("No match")),
            )
    }

    #[test]
    fn test_errors_follow_field_then_rule_order() {
        let mut form = FormValidation::new(signup());
        assert!(!form.validate_form());

        let errors = form.errors();
        let pairs: Vec<(&str, &str)> = errors
            .iter()
            .map(|e| (e.field.as_str(), e.message.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("name", "Name is required"),
                ("name", "Letters only"),
                ("password", "Weak password"),
            ]
        );
    }

    #[test]
    fn test_password_match_reads_live_value() {
        let mut form = FormValidation::new(signup());
        form.set_value("password", "Sup3rSecret").unwrap();
        form.set_value("confirm", "Sup3rSecret").unwrap();
        form.set_value("name", "Ada").unwrap();
        assert!(form.validate_form());

        form.set_value("password", "Sup3rSecret!").unwrap();
        assert!(!form.validate_form());
        assert_eq!(form.field_errors("confirm").len(), 1);
    }

    #[test]
    fn test_errors_are_stale_until_revalidated() {
        let mut form = FormValidation::new(signup());
        form.validate_form();
        let before = form.errors();

        form.set_value("name", "Ada").unwrap();
        assert_eq!(form.errors(), before);

        form.validate_form();
        assert!(form.field_errors("name").is_empty());
    }

    #[test]
    fn test_dirty_is_monotonic() {
        let mut form = FormValidation::new(FormFields::new());
        assert!(!form.is_dirty());

        assert!(form.validate_form());
        assert!(form.is_dirty());
        form.validate_form();
        assert!(form.is_dirty());
    }

    #[test]
    fn test_set_value_unknown_field() {
        let mut form = FormValidation::new(signup());
        assert_eq!(
            form.set_value("age", 3),
            Err(FormError::UnknownField("age".to_string()))
        );
    }

    #[test]
    fn test_validate_field_has_no_side_effects() {
        let form = FormValidation::new(signup());
        let field = form.fields().get("name").unwrap().clone();

        let errors = form.validate_field("name", &field);
        assert_eq!(errors.len(), 2);
        assert!(form.errors().is_empty());
        assert!(!form.is_dirty());
        assert_eq!(form.value("name"), Some(&json!("")));
    }
}
