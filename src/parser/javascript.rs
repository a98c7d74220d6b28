use crate::discovery::{FileType, SourceFile};
use crate::parser::common::node_text;
use miette::Result;
use std::path::{Path, PathBuf};
use tree_sitter::{Language, Node, Parser as TsParser, Tree};

/// A parsed source file: path, original text, and its syntax tree.
///
/// Owned by a single pass run; the planned edits reference byte ranges of
/// `source`, so the text is kept alongside the tree.
pub struct SourceTree {
    path: PathBuf,
    file_type: FileType,
    source: String,
    tree: Tree,
}

impl SourceTree {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text of a node
    pub fn text<'a>(&'a self, node: Node<'a>) -> &'a str {
        node_text(node, &self.source)
    }
}

/// JavaScript/TypeScript source parser using tree-sitter
pub struct JsParser {
    parser: TsParser,
    current: Option<FileType>,
}

impl JsParser {
    pub fn new() -> Self {
        Self {
            parser: TsParser::new(),
            current: None,
        }
    }

    fn language_for(file_type: FileType) -> Language {
        match file_type {
            // The javascript grammar accepts JSX, so .js and .jsx share it
            FileType::Javascript | FileType::Jsx => tree_sitter_javascript::LANGUAGE.into(),
            FileType::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            FileType::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Parse a discovered file, reading its contents from disk
    pub fn parse_file(&mut self, file: &SourceFile) -> Result<SourceTree> {
        let contents = file.read_contents()?;
        self.parse(&file.path, file.file_type, contents)
    }

    /// Parse source text into an editable tree
    pub fn parse(
        &mut self,
        path: &Path,
        file_type: FileType,
        contents: String,
    ) -> Result<SourceTree> {
        if self.current != Some(file_type) {
            self.parser
                .set_language(&Self::language_for(file_type))
                .expect("Failed to load grammar");
            self.current = Some(file_type);
        }

        let tree = self
            .parser
            .parse(&contents, None)
            .ok_or_else(|| miette::miette!("Failed to parse {}", path.display()))?;

        // A tree with ERROR nodes is not safe to rewrite; treat it as a
        // parse failure so the driver skips the file.
        if tree.root_node().has_error() {
            return Err(miette::miette!(
                "Syntax errors in {}, skipping",
                path.display()
            ));
        }

        Ok(SourceTree {
            path: path.to_path_buf(),
            file_type,
            source: contents,
            tree,
        })
    }
}

impl Default for JsParser {
    fn default() -> Self {
        Self::new()
    }
}
