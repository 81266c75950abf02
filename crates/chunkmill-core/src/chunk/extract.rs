//! Structural chunk extraction from source ASTs
//!
//! Walks the full parse tree in pre-order and emits one chunk per node
//! whose kind is registered as a semantic boundary for the language. The
//! walk never prunes below a match, so a class chunk and the chunks of
//! its methods overlap intentionally: retrieval can surface either the
//! whole class or a single member.

use super::language::Language;
use super::parser;
use super::types::{Chunk, ChunkKind};
use crate::error::Result;
use tree_sitter::{Node, TreeCursor};

const JS_SEMANTIC_NODES: &[&str] = &[
    "class_declaration",
    "function_declaration",
    "method_definition",
    "interface_declaration",
    "type_alias_declaration",
    "arrow_function",
    "export_statement",
];

const JAVA_SEMANTIC_NODES: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "method_declaration",
    "constructor_declaration",
    "enum_declaration",
];

const CSHARP_SEMANTIC_NODES: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "method_declaration",
    "constructor_declaration",
    "enum_declaration",
    "struct_declaration",
];

/// Node kinds that mark semantic boundaries for a language
pub fn semantic_nodes(language: Language) -> &'static [&'static str] {
    match language {
        Language::TypeScript | Language::Tsx | Language::JavaScript => JS_SEMANTIC_NODES,
        Language::Java => JAVA_SEMANTIC_NODES,
        Language::CSharp => CSHARP_SEMANTIC_NODES,
    }
}

/// Parse `source` and extract structural chunks.
///
/// An empty result is not an error: sources with no registered node
/// kinds (scripts of bare statements, heavily broken files) simply yield
/// nothing, and the caller decides whether to fall back.
pub fn extract(source: &str, file_path: &str, language: Language) -> Result<Vec<Chunk>> {
    let tree = parser::parse(source, language)?;
    let nodes = semantic_nodes(language);

    let mut chunks = Vec::new();
    let mut cursor = tree.root_node().walk();
    collect_chunks(source, file_path, language, nodes, &mut cursor, &mut chunks);
    Ok(chunks)
}

fn collect_chunks(
    source: &str,
    file_path: &str,
    language: Language,
    nodes: &[&str],
    cursor: &mut TreeCursor,
    chunks: &mut Vec<Chunk>,
) {
    loop {
        let node = cursor.node();
        if nodes.contains(&node.kind()) {
            chunks.push(chunk_for_node(source, file_path, language, node));
        }

        if cursor.goto_first_child() {
            collect_chunks(source, file_path, language, nodes, cursor, chunks);
            cursor.goto_parent();
        }

        if !cursor.goto_next_sibling() {
            break;
        }
    }
}

fn chunk_for_node(source: &str, file_path: &str, language: Language, node: Node) -> Chunk {
    Chunk {
        content: source[node.start_byte()..node.end_byte()].to_string(),
        language: Some(language),
        file_path: file_path.to_string(),
        kind: chunk_kind_for(node.kind()),
        name: node_name(source, node),
        start_line: node.start_position().row + 1,
        end_line: node.end_position().row + 1,
        provenance: None,
    }
}

/// Map an AST node kind to a chunk category by substring, so grammar
/// variants (`method_definition` vs `method_declaration`) land together
fn chunk_kind_for(node_kind: &str) -> ChunkKind {
    if node_kind.contains("class") {
        ChunkKind::Class
    } else if node_kind.contains("function") {
        ChunkKind::Function
    } else if node_kind.contains("method") {
        ChunkKind::Method
    } else if node_kind.contains("interface") {
        ChunkKind::Interface
    } else {
        ChunkKind::Block
    }
}

fn node_name(source: &str, node: Node) -> Option<String> {
    if let Some(name_node) = node.child_by_field_name("name") {
        return Some(source[name_node.start_byte()..name_node.end_byte()].to_string());
    }

    let kind = node.kind();
    if kind.contains("function") || kind.contains("arrow") {
        return Some("<anonymous>".to_string());
    }

    None
}
