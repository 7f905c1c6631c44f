use crate::ast;
use crate::schema::SchemaDocument;
use std::collections::HashMap;

/// `(type name, field name) -> description` for every output field of every
/// Object and Interface type in a schema.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldDescriptionIndex {
    descriptions: HashMap<(String, String), Option<String>>,
}
impl FieldDescriptionIndex {
    pub fn build(schema: &SchemaDocument) -> Self {
        let mut descriptions = HashMap::new();
        for type_def in schema.type_definitions() {
            let (type_name, fields) = match type_def {
                ast::schema::TypeDefinition::Object(obj) => (&obj.name, &obj.fields),
                ast::schema::TypeDefinition::Interface(iface) => (&iface.name, &iface.fields),
                _ => continue,
            };
            for field in fields {
                descriptions.insert(
                    (type_name.to_owned(), field.name.to_owned()),
                    field.description.to_owned(),
                );
            }
        }
        Self { descriptions }
    }

    /// Whether `type_name` declares an output field named `field_name`.
    pub fn contains(&self, type_name: &str, field_name: &str) -> bool {
        self.descriptions.contains_key(&(type_name.to_string(), field_name.to_string()))
    }

    pub fn description(&self, type_name: &str, field_name: &str) -> Option<&str> {
        self.descriptions
            .get(&(type_name.to_string(), field_name.to_string()))?
            .as_deref()
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}
