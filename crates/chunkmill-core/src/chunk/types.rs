//! Chunk types shared across the extraction strategies

use super::language::Language;
use crate::provenance::Provenance;
use std::collections::BTreeMap;

/// Category of a chunk, derived from the AST node kind that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Class,
    Function,
    Interface,
    Method,
    /// Structural node with no more specific category (exports, type
    /// aliases, constructors, structs, enums)
    Block,
    /// Paragraph-chunked prose
    Text,
}

impl ChunkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Function => "function",
            Self::Interface => "interface",
            Self::Method => "method",
            Self::Block => "block",
            Self::Text => "text",
        }
    }
}

/// A single retrievable unit of a source file
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// Verbatim slice of the source (trimmed for text chunks)
    pub content: String,
    /// Set for structurally extracted chunks, `None` for text chunks
    pub language: Option<Language>,
    pub file_path: String,
    pub kind: ChunkKind,
    /// Declared identifier, or `<anonymous>` for nameless function-like
    /// nodes. `None` when the node kind carries no name at all.
    pub name: Option<String>,
    /// 1-based, inclusive
    pub start_line: usize,
    /// 1-based, inclusive
    pub end_line: usize,
    pub provenance: Option<Provenance>,
}

impl Chunk {
    /// Flatten the chunk into the string-to-string metadata map persisted
    /// alongside its content.
    ///
    /// `language` and `name` appear only on structural chunks; `name` is
    /// the empty string when the node had none. Provenance keys appear
    /// only when provenance was derived.
    pub fn content_metadata(&self) -> BTreeMap<String, String> {
        let mut metadata = BTreeMap::new();
        metadata.insert("filePath".to_string(), self.file_path.clone());
        metadata.insert("type".to_string(), self.kind.as_str().to_string());
        metadata.insert("startLine".to_string(), self.start_line.to_string());
        metadata.insert("endLine".to_string(), self.end_line.to_string());

        if let Some(language) = self.language {
            metadata.insert("language".to_string(), language.as_str().to_string());
            metadata.insert("name".to_string(), self.name.clone().unwrap_or_default());
        }

        if let Some(ref provenance) = self.provenance {
            metadata.insert("gitProvider".to_string(), provenance.provider.clone());
            metadata.insert(
                "gitOrganization".to_string(),
                provenance.organization.clone(),
            );
            metadata.insert("gitRepository".to_string(), provenance.repository.clone());
        }

        metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_chunk() -> Chunk {
        Chunk {
            content: "class Foo {}".to_string(),
            language: Some(Language::Java),
            file_path: "github/acme/widgets/src/Foo.java".to_string(),
            kind: ChunkKind::Class,
            name: Some("Foo".to_string()),
            start_line: 1,
            end_line: 1,
            provenance: None,
        }
    }

    #[test]
    fn test_code_chunk_metadata() {
        let metadata = code_chunk().content_metadata();
        assert_eq!(metadata["language"], "java");
        assert_eq!(metadata["filePath"], "github/acme/widgets/src/Foo.java");
        assert_eq!(metadata["type"], "class");
        assert_eq!(metadata["name"], "Foo");
        assert_eq!(metadata["startLine"], "1");
        assert_eq!(metadata["endLine"], "1");
        assert!(!metadata.contains_key("gitProvider"));
    }

    #[test]
    fn test_nameless_code_chunk_serializes_empty_name() {
        let mut chunk = code_chunk();
        chunk.name = None;
        chunk.kind = ChunkKind::Block;
        let metadata = chunk.content_metadata();
        assert_eq!(metadata["name"], "");
        assert_eq!(metadata["type"], "block");
    }

    #[test]
    fn test_anonymous_name_survives() {
        let mut chunk = code_chunk();
        chunk.name = Some("<anonymous>".to_string());
        let metadata = chunk.content_metadata();
        assert_eq!(metadata["name"], "<anonymous>");
    }

    #[test]
    fn test_text_chunk_metadata_has_no_language_keys() {
        let chunk = Chunk {
            content: "Some prose.".to_string(),
            language: None,
            file_path: "docs/readme.md".to_string(),
            kind: ChunkKind::Text,
            name: None,
            start_line: 1,
            end_line: 1,
            provenance: None,
        };
        let metadata = chunk.content_metadata();
        assert!(!metadata.contains_key("language"));
        assert!(!metadata.contains_key("name"));
        assert_eq!(metadata["type"], "text");
    }

    #[test]
    fn test_provenance_keys() {
        let mut chunk = code_chunk();
        chunk.provenance = Some(Provenance {
            provider: "github".to_string(),
            organization: "acme".to_string(),
            repository: "widgets".to_string(),
        });
        let metadata = chunk.content_metadata();
        assert_eq!(metadata["gitProvider"], "github");
        assert_eq!(metadata["gitOrganization"], "acme");
        assert_eq!(metadata["gitRepository"], "widgets");
    }
}
