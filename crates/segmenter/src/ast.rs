use crate::error::{Result, SegmenterError};
use crate::language::Language;
use crate::provider::{MemberDecl, StructureProvider, TypeDecl};
use tree_sitter::{Node, Parser};

/// Tree-sitter backed structure source, one instance per language.
pub struct AstStructure {
    parser: Parser,
    language: Language,
}

impl AstStructure {
    /// Create a structure source for a language
    pub fn new(language: Language) -> Result<Self> {
        if !language.supports_ast() {
            return Err(SegmenterError::unsupported_language(language.as_str()));
        }

        let ts_language = language.tree_sitter_language()?;
        let mut parser = Parser::new();
        parser
            .set_language(&ts_language)
            .map_err(|e| SegmenterError::tree_sitter(format!("Failed to set language: {e}")))?;

        Ok(Self { parser, language })
    }

    /// Node kinds that declare an enclosing type
    fn is_container(&self, kind: &str) -> bool {
        match self.language {
            Language::Java => matches!(
                kind,
                "class_declaration"
                    | "interface_declaration"
                    | "enum_declaration"
                    | "record_declaration"
            ),
            Language::Rust => matches!(kind, "impl_item" | "trait_item" | "mod_item"),
            Language::Python => kind == "class_definition",
            Language::JavaScript | Language::TypeScript => kind == "class_declaration",
            _ => false,
        }
    }

    /// Node kinds that hold a container's member declarations
    fn is_body(&self, kind: &str) -> bool {
        match self.language {
            Language::Java => matches!(kind, "class_body" | "interface_body" | "enum_body"),
            Language::Rust => kind == "declaration_list",
            Language::Python => kind == "block",
            Language::JavaScript | Language::TypeScript => kind == "class_body",
            _ => false,
        }
    }

    /// Node kinds that segment as units: methods, constructors, nested types
    fn is_member(&self, kind: &str) -> bool {
        match self.language {
            Language::Java => matches!(
                kind,
                "method_declaration"
                    | "constructor_declaration"
                    | "class_declaration"
                    | "interface_declaration"
                    | "enum_declaration"
                    | "record_declaration"
            ),
            Language::Rust => matches!(
                kind,
                "function_item"
                    | "function_signature_item"
                    | "struct_item"
                    | "enum_item"
                    | "impl_item"
                    | "trait_item"
                    | "mod_item"
            ),
            Language::Python => matches!(
                kind,
                "function_definition" | "class_definition" | "decorated_definition"
            ),
            Language::JavaScript | Language::TypeScript => kind == "method_definition",
            _ => false,
        }
    }

    fn type_decl(&self, node: Node, lines: &[&str]) -> TypeDecl {
        let mut members = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if self.is_body(child.kind()) {
                self.collect_members(child, lines, &mut members);
            }
        }

        TypeDecl {
            start_line: node.start_position().row + 1,
            members,
        }
    }

    fn collect_members(&self, body: Node, lines: &[&str], out: &mut Vec<MemberDecl>) {
        let mut cursor = body.walk();
        for child in body.children(&mut cursor) {
            // Java enums keep their members behind an extra wrapper node
            if child.kind() == "enum_body_declarations" {
                self.collect_members(child, lines, out);
                continue;
            }
            if !self.is_member(child.kind()) {
                continue;
            }

            let start_line = child.start_position().row + 1;
            out.push(MemberDecl {
                start_line,
                end_line: child.end_position().row + 1,
                doc_start_line: doc_comment_start(
                    lines,
                    start_line,
                    self.language.comment_prefixes(),
                ),
            });
        }
    }
}

impl StructureProvider for AstStructure {
    fn top_level_types(&mut self, content: &str) -> Result<Vec<TypeDecl>> {
        let tree = self
            .parser
            .parse(content, None)
            .ok_or_else(|| SegmenterError::parse("failed to parse source code"))?;
        let root = tree.root_node();
        let lines: Vec<&str> = content.lines().collect();

        let mut types = Vec::new();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if self.is_container(child.kind()) {
                types.push(self.type_decl(child, &lines));
            }
        }

        log::debug!(
            "{} top-level types, {} members",
            types.len(),
            types.iter().map(|t| t.members.len()).sum::<usize>()
        );
        Ok(types)
    }
}

/// First line of the contiguous comment block directly above `decl_line`.
///
/// Text-based rather than tree-based: comment nodes are extras in tree-sitter
/// grammars and their attachment to declarations is not modeled, so the
/// reliable signal is the run of comment-prefixed lines ending right above
/// the declaration. A blank line terminates the block.
fn doc_comment_start(lines: &[&str], decl_line: usize, prefixes: &[&str]) -> Option<usize> {
    if prefixes.is_empty() {
        return None;
    }

    let mut line_no = decl_line;
    while line_no > 1 {
        let above = lines.get(line_no - 2).map_or("", |l| l.trim());
        if above.is_empty() || !prefixes.iter().any(|p| above.starts_with(p)) {
            break;
        }
        line_no -= 1;
    }

    (line_no < decl_line).then_some(line_no)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const JAVA_CODE: &str = "\
class Calculator {
    /**
     * Adds two numbers.
     */
    int add(int a, int b) {
        return a + b;
    }

    int sub(int a, int b) {
        return a - b;
    }
}
";

    #[test]
    fn java_members_with_doc_pull_back() {
        let mut source = AstStructure::new(Language::Java).unwrap();
        let types = source.top_level_types(JAVA_CODE).unwrap();

        assert_eq!(types.len(), 1);
        assert_eq!(types[0].start_line, 1);

        let members = &types[0].members;
        assert_eq!(members.len(), 2);

        assert_eq!(members[0].start_line, 5);
        assert_eq!(members[0].end_line, 7);
        assert_eq!(members[0].doc_start_line, Some(2));
        assert_eq!(members[0].unit_start(), 2);

        assert_eq!(members[1].start_line, 9);
        assert_eq!(members[1].end_line, 11);
        assert_eq!(members[1].doc_start_line, None);
        assert_eq!(members[1].unit_start(), 9);
    }

    #[test]
    fn java_constructor_and_nested_class_are_members() {
        let code = "\
class Outer {
    Outer() {
    }

    class Inner {
    }
}
";
        let mut source = AstStructure::new(Language::Java).unwrap();
        let types = source.top_level_types(code).unwrap();

        assert_eq!(types.len(), 1);
        let members = &types[0].members;
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].start_line, 2);
        assert_eq!(members[1].start_line, 5);
    }

    #[test]
    fn rust_impl_functions_are_members() {
        let code = "\
impl Point {
    /// Create the origin.
    fn new() -> Self {
        Point
    }

    fn norm(&self) -> f64 {
        0.0
    }
}
";
        let mut source = AstStructure::new(Language::Rust).unwrap();
        let types = source.top_level_types(code).unwrap();

        assert_eq!(types.len(), 1);
        let members = &types[0].members;
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].unit_start(), 2);
        assert_eq!(members[0].end_line, 5);
        assert_eq!(members[1].unit_start(), 7);
        assert_eq!(members[1].end_line, 9);
    }

    #[test]
    fn python_class_methods_are_members() {
        let code = "\
class Greeter:
    def hello(self):
        return \"hi\"

    def bye(self):
        return \"bye\"
";
        let mut source = AstStructure::new(Language::Python).unwrap();
        let types = source.top_level_types(code).unwrap();

        assert_eq!(types.len(), 1);
        assert_eq!(types[0].members.len(), 2);
    }

    #[test]
    fn top_level_functions_outside_types_are_not_segmented() {
        let code = "fn free() {}\n";
        let mut source = AstStructure::new(Language::Rust).unwrap();
        let types = source.top_level_types(code).unwrap();
        assert!(types.is_empty());
    }

    #[test]
    fn unsupported_language_is_rejected() {
        assert!(AstStructure::new(Language::Markdown).is_err());
        assert!(AstStructure::new(Language::Unknown).is_err());
    }

    #[test]
    fn doc_comment_block_stops_at_blank_line() {
        let lines: Vec<&str> = vec!["// stray", "", "// attached", "fn f() {}"];
        assert_eq!(doc_comment_start(&lines, 4, &["//"]), Some(3));
    }

    #[test]
    fn doc_comment_absent() {
        let lines: Vec<&str> = vec!["let x = 1;", "fn f() {}"];
        assert_eq!(doc_comment_start(&lines, 2, &["//"]), None);
        assert_eq!(doc_comment_start(&lines, 1, &["//"]), None);
    }
}
