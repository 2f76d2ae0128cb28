// Form fields

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::ValidationRule;

/// A named input: its current value and the rules it must satisfy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Current value. `null` stands for an absent value.
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub rules: Vec<ValidationRule>,
}

impl FormField {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            rules: Vec::new(),
        }
    }

    /// A field with no value yet.
    pub fn empty() -> Self {
        Self::new(Value::Null)
    }

    /// Append a rule. Rules are evaluated in the order they are added.
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// Field name to field, in definition order.
///
/// Field names are unique; inserting an existing name replaces the field in
/// place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    entries: Vec<(String, FormField)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn field(mut self, name: impl Into<String>, field: FormField) -> Self {
        self.insert(name, field);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, field: FormField) -> Option<FormField> {
        let name = name.into();
        match self.entries.iter().position(|(key, _)| *key == name) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, field)),
            None => {
                self.entries.push((name, field));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FormField> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, field)| field)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, field)| field)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormField)> {
        self.entries.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, FormField)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, FormField)>>(iter: I) -> Self {
        let mut fields = FormFields::new();
        for (name, field) in iter {
            fields.insert(name, field);
        }
        fields
    }
}

impl Serialize for FormFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, field) in &self.entries {
            map.serialize_entry(name, field)?;
        }
        map.end()
    }
}

// Deserialized by hand so that object key order becomes field order.
impl<'de> Deserialize<'de> for FormFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = FormFields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to form fields")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FormFields, A::Error> {
                let mut fields = FormFields::new();
                while let Some((name, field)) = access.next_entry::<String, FormField>()? {
                    fields.insert(name, field);
                }
                Ok(fields)
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut fields = FormFields::new()
            .field("name", FormField::new("a"))
            .field("email", FormField::new("b"));

        let previous = fields.insert("name", FormField::new("c"));
        assert_eq!(previous.map(|f| f.value), Some(json!("a")));
        assert_eq!(fields.names().collect::<Vec<_>>(), vec!["name", "email"]);
        assert_eq!(fields.get("name").unwrap().value, json!("c"));
    }

    #[test]
    fn test_deserialize_keeps_key_order() {
        let fields: FormFields = serde_json::from_str(
            r#"{
                "zeta": { "value": "1", "rules": [] },
                "alpha": { "value": null },
                "mid": { "rules": [{ "type": "required", "message": "Required" }] }
            }"#,
        )
        .unwrap();

        assert_eq!(fields.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(fields.get("mid").unwrap().value, Value::Null);
        assert_eq!(fields.get("mid").unwrap().rules.len(), 1);
    }

    #[test]
    fn test_serialize_round_trip_order() {
        let fields = FormFields::new()
            .field("b", FormField::new(1))
            .field("a", FormField::new(2));
        let text = serde_json::to_string(&fields).unwrap();
        assert!(text.find("\"b\"").unwrap() < text.find("\"a\"").unwrap());
    }
}
