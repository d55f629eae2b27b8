//! Catalog schema loading
//!
//! A catalog's schema can be written out and read back as a single JSON
//! file. Malformed JSON, unreadable files, and structurally invalid schemas
//! are rejected; nothing is partially loaded.

use std::fs;
use std::path::Path;

use super::errors::{SchemaError, SchemaResult};
use super::types::CatalogSchema;

impl CatalogSchema {
    /// Loads and validates a schema from a JSON file.
    pub fn from_json_file(path: &Path) -> SchemaResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SchemaError::malformed_schema(
                path.display().to_string(),
                format!("failed to read file: {}", e),
            )
        })?;

        let schema: CatalogSchema = serde_json::from_str(&content).map_err(|e| {
            SchemaError::malformed_schema(path.display().to_string(), format!("invalid JSON: {}", e))
        })?;

        schema.validate_structure()?;

        Ok(schema)
    }

    /// Writes the schema to a JSON file.
    pub fn to_json_file(&self, path: &Path) -> SchemaResult<()> {
        self.validate_structure()?;

        let content = serde_json::to_string_pretty(self).map_err(|e| {
            SchemaError::malformed_schema(
                path.display().to_string(),
                format!("failed to serialize schema: {}", e),
            )
        })?;

        fs::write(path, content).map_err(|e| {
            SchemaError::malformed_schema(
                path.display().to_string(),
                format!("failed to write file: {}", e),
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::{Attribute, AttributeSpec};
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog_schema.json");

        let schema = CatalogSchema::standard();
        schema.to_json_file(&path).unwrap();

        let loaded = CatalogSchema::from_json_file(&path).unwrap();
        assert_eq!(loaded, schema);
    }

    #[test]
    fn test_missing_file_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does_not_exist.json");

        let result = CatalogSchema::from_json_file(&path);
        assert!(matches!(result, Err(SchemaError::MalformedSchema { .. })));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let result = CatalogSchema::from_json_file(&path);
        assert!(matches!(result, Err(SchemaError::MalformedSchema { .. })));
    }

    #[test]
    fn test_structurally_invalid_schema_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.json");
        fs::write(&path, r#"{"attributes":[]}"#).unwrap();

        let result = CatalogSchema::from_json_file(&path);
        assert_eq!(result, Err(SchemaError::EmptySchema));
    }

    #[test]
    fn test_save_rejects_invalid_schema() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dup.json");

        let schema = CatalogSchema {
            attributes: vec![
                AttributeSpec::standard(Attribute::Supplier),
                AttributeSpec::standard(Attribute::Supplier),
            ],
        };

        let result = schema.to_json_file(&path);
        assert_eq!(
            result,
            Err(SchemaError::DuplicateAttribute(Attribute::Supplier))
        );
        assert!(!path.exists());
    }
}
