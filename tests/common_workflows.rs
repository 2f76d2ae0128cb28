//! Integration tests for common formkit workflows.
//!
//! These tests drive the crates together the way an application does.

use formkit::prelude::*;
use serde_json::json;

// =============================================================================
// Form Validation Workflows
// =============================================================================

fn signup_definition() -> serde_json::Value {
    json!({
        "name": {
            "value": "",
            "rules": [
                { "type": "required", "message": "Name is required" },
                { "type": "nameFormat", "message": "Letters, spaces and hyphens only" }
            ]
        },
        "email": {
            "value": "",
            "rules": [
                { "type": "required", "message": "Email is required" },
                { "type": "email", "message": "Enter a valid email" }
            ]
        },
        "password": {
            "value": "",
            "rules": [
                { "type": "required", "message": "Password is required" },
                { "type": "minLength", "value": 8, "message": "At least 8 characters" },
                { "type": "password", "message": "Needs a capital letter and a digit" }
            ]
        },
        "confirm": {
            "value": "",
            "rules": [
                { "type": "passwordMatch", "message": "Passwords do not match" }
            ]
        }
    })
}

#[test]
fn test_signup_form_from_json() {
    let fields: FormFields = serde_json::from_value(signup_definition()).unwrap();
    let mut form = FormValidation::new(fields);

    assert!(!form.is_dirty());
    assert!(form.is_valid());

    // Empty submission: every field reports its failing rules
    assert!(!form.validate_form());
    assert_eq!(form.errors().messages("name"), vec!["Name is required", "Letters, spaces and hyphens only"]);
    assert_eq!(form.errors().messages("email"), vec!["Email is required", "Enter a valid email"]);
    assert_eq!(form.errors().messages("password").len(), 3);
    // "" === "" so the confirmation matches
    assert!(form.field_errors("confirm").is_empty());

    form.set_value("name", "Ada Lovelace").unwrap();
    form.set_value("email", "ada@example.com").unwrap();
    form.set_value("password", "Analytical1").unwrap();
    form.set_value("confirm", "Analytical2").unwrap();
    assert!(!form.validate_form());
    assert_eq!(form.errors().messages("confirm"), vec!["Passwords do not match"]);

    form.set_value("confirm", "Analytical1").unwrap();
    assert!(form.validate_form());
    assert!(form.is_dirty());
}

#[test]
fn test_errors_serialize_for_display() {
    let fields: FormFields = serde_json::from_value(signup_definition()).unwrap();
    let mut form = FormValidation::new(fields);
    form.set_value("name", "Ada").unwrap();
    form.set_value("email", "ada@example").unwrap();
    form.set_value("password", "Analytical1").unwrap();
    form.set_value("confirm", "Analytical1").unwrap();
    form.validate_form();

    assert_eq!(
        serde_json::to_value(form.errors()).unwrap(),
        json!([{ "field": "email", "message": "Enter a valid email" }])
    );
}

// =============================================================================
// Routing Workflows
// =============================================================================

#[cfg(feature = "router")]
#[test]
fn test_app_navigation() {
    let router = app_routes("/");

    assert_eq!(router.navigate("/").unwrap().view().component, "HomeView");
    assert_eq!(router.navigate("/form").unwrap().view().component, "TestForm");
    assert_eq!(router.navigate("/posts").unwrap().view().component, "PostsPage");
    assert!(router.navigate("/unknown").is_err());
}
