use std::path::{Path, PathBuf};

use pyql_ir::Schema;

use crate::{Error, Result, parse_schema};

/// Represents a GraphQL SDL file with both raw content and the lowered schema.
#[derive(Debug)]
pub struct SchemaFile {
    path: PathBuf,
    content: String,
    schema: Schema,
}

impl SchemaFile {
    /// Open and parse an SDL file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let schema = parse_schema(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            schema,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the lowered schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}
