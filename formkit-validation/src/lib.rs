//! Form validation for formkit
//!
//! Fields carry a value and an ordered list of rules. A [`FormValidation`]
//! evaluates every rule of every field, collects one error per failing rule,
//! and exposes the result as observable state: the error collection, a
//! derived validity flag and a monotonic dirty flag.
//!
//! # Examples
//!
//! ## Validating a form
//!
//! ```
//! use formkit_validation::{FormField, FormFields, FormValidation, ValidationRule};
//!
//! let fields = FormFields::new()
//!     .field("name", FormField::new("Ada Lovelace")
//!         .rule(ValidationRule::required("Name is required"))
//!         .rule(ValidationRule::name_format("Letters, spaces and hyphens only")))
//!     .field("password", FormField::new("Analytical1")
//!         .rule(ValidationRule::password("Use 8+ characters with a capital and a digit")))
//!     .field("confirm", FormField::new("Analytical1")
//!         .rule(ValidationRule::password_match("Passwords do not match")));
//!
//! let mut form = FormValidation::new(fields);
//! assert!(form.validate_form());
//! assert!(form.is_valid());
//! ```
//!
//! ## Form definitions as JSON
//!
//! ```
//! use formkit_validation::{FormFields, FormValidation};
//!
//! let fields: FormFields = serde_json::from_str(r#"{
//!     "email": {
//!         "value": "not-an-email",
//!         "rules": [
//!             { "type": "required", "message": "Email is required" },
//!             { "type": "email", "message": "Enter a valid email" }
//!         ]
//!     }
//! }"#).unwrap();
//!
//! let mut form = FormValidation::new(fields);
//! assert!(!form.validate_form());
//! assert_eq!(form.errors().len(), 1);
//! ```
//!
//! ## Single predicates
//!
//! ```
//! use formkit_validation::predicates;
//! use serde_json::json;
//!
//! assert!(predicates::email(&json!("a@b.co")));
//! assert!(!predicates::password_strength(&json!("abcdefg1")));
//! ```

mod errors;
mod field;
mod form;
pub mod predicates;
mod rules;

pub use errors::*;
pub use field::*;
pub use form::*;
pub use rules::*;
