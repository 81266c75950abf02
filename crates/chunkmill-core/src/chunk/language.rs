//! Language detection from file paths

/// Languages with a tree-sitter grammar wired in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    /// TypeScript with JSX syntax. Parsed with the TSX grammar but tagged
    /// `typescript` on the wire.
    Tsx,
    JavaScript,
    Java,
    CSharp,
}

/// Extension registry for structural extraction
pub const CODE_EXTENSIONS: &[(&str, Language)] = &[
    ("ts", Language::TypeScript),
    ("tsx", Language::Tsx),
    ("js", Language::JavaScript),
    ("jsx", Language::JavaScript),
    ("java", Language::Java),
    ("cs", Language::CSharp),
];

/// Extensions chunked by paragraph instead of AST
pub const TEXT_EXTENSIONS: &[&str] = &["md", "txt", "json", "yaml", "yml", "xml", "html", "css"];

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeScript | Self::Tsx => "typescript",
            Self::JavaScript => "javascript",
            Self::Java => "java",
            Self::CSharp => "csharp",
        }
    }
}

/// Classification of a file path for chunking purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detected {
    /// Structurally chunked with a tree-sitter grammar
    Code(Language),
    /// Chunked by paragraph
    Text,
    /// Skipped entirely; the file still gets an (empty) output batch
    Unsupported,
}

impl Detected {
    /// Detect handling from the file path's extension.
    ///
    /// Paths here are object keys, not OS paths, so the extension is
    /// whatever follows the last dot anywhere in the key.
    pub fn from_path(path: &str) -> Self {
        let ext = path.rsplit('.').next().unwrap_or_default();
        Self::from_extension(ext)
    }

    /// Detect handling from an extension string (case-insensitive)
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_lowercase();
        if let Some((_, language)) = CODE_EXTENSIONS.iter().find(|(e, _)| *e == ext) {
            return Self::Code(*language);
        }
        if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            return Self::Text;
        }
        Self::Unsupported
    }

    /// The language, when this is a code classification
    pub fn language(&self) -> Option<Language> {
        match self {
            Self::Code(language) => Some(*language),
            _ => None,
        }
    }
}
