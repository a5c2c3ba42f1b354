//! Template expansion
//!
//! The template is processed as a fold over its lines carrying the current
//! mode (outside any block, or inside one open [`MacroBlock`]) and the
//! output assembled so far. Scaffold lines are dropped before any marker
//! handling. Outside a block lines pass through untouched; inside a block
//! they are tokenized, rewritten and continued.

mod block;
mod join;
mod scaffold;

pub use block::{signature, BlockKind, BlockSummary, MacroBlock, Marker, MACRO_PARAMETERS};
pub use join::{join_line, transform};
pub use scaffold::is_scaffold;

use crate::error::StructureError;
use crate::parser::source::{self, SourceLine};
use crate::profile::Profile;
use crate::renderer::{render_header, HeaderLine};

/// Result of expanding a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    /// Output lines in order
    pub lines: Vec<HeaderLine>,
    /// One entry per sealed block
    pub blocks: Vec<BlockSummary>,
    /// Number of scaffold lines dropped
    pub scaffold_dropped: usize,
}

impl Generated {
    /// Render the output lines into file contents
    pub fn header(&self) -> String {
        render_header(&self.lines)
    }
}

#[derive(Debug, Default)]
enum Mode {
    #[default]
    Outside,
    InBlock(MacroBlock),
}

#[derive(Debug, Default)]
struct Assembly {
    mode: Mode,
    generated: Generated,
}

impl Assembly {
    fn step(mut self, line: SourceLine<'_>, profile: &Profile) -> Result<Self, StructureError> {
        if is_scaffold(&line, &profile.scaffold) {
            self.generated.scaffold_dropped += 1;
            return Ok(self);
        }

        let marker = Marker::classify(&line, &profile.markers);
        self.mode = match (self.mode, marker) {
            (Mode::Outside, None) => {
                self.generated
                    .lines
                    .push(HeaderLine::verbatim(line.content(), line.ending()));
                Mode::Outside
            }
            (Mode::InBlock(mut block), None) => {
                block.push(join_line(&line));
                Mode::InBlock(block)
            }
            (Mode::Outside, Some(Marker::Start(kind))) => {
                Mode::InBlock(MacroBlock::open(kind, kind.macro_name(&profile.macros), &line))
            }
            (Mode::InBlock(block), Some(Marker::Start(found))) => {
                return Err(StructureError::NestedStart {
                    open: block.kind,
                    opened_at: block.opened_at,
                    found,
                    line: line.number,
                    span: line.span(),
                });
            }
            (Mode::Outside, Some(Marker::Stop(kind))) => {
                return Err(StructureError::UnexpectedStop {
                    kind,
                    line: line.number,
                    span: line.span(),
                });
            }
            (Mode::InBlock(block), Some(Marker::Stop(found))) if block.kind == found => {
                let (lines, summary) = block.seal(line.number);
                self.generated.lines.extend(lines);
                self.generated.blocks.push(summary);
                Mode::Outside
            }
            (Mode::InBlock(block), Some(Marker::Stop(found))) => {
                return Err(StructureError::MismatchedStop {
                    open: block.kind,
                    opened_at: block.opened_at,
                    found,
                    line: line.number,
                    span: line.span(),
                });
            }
        };

        Ok(self)
    }

    fn finish(self) -> Result<Generated, StructureError> {
        match self.mode {
            Mode::Outside => Ok(self.generated),
            Mode::InBlock(block) => Err(StructureError::Unterminated {
                kind: block.kind,
                opened_at: block.opened_at,
                span: block.span,
            }),
        }
    }
}

/// Expand a template into header lines
pub fn expand(template: &str, profile: &Profile) -> Result<Generated, StructureError> {
    source::lines(template)
        .into_iter()
        .try_fold(Assembly::default(), |assembly, line| {
            assembly.step(line, profile)
        })?
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(source: &str) -> Result<String, StructureError> {
        let generated = expand(source, &Profile::default())?;
        Ok(render_header(&generated.lines))
    }

    #[test]
    fn test_pass_through_identity() {
        let src = "#ifndef HASHMAP_H\r\n#define HASHMAP_H\n\n/* hashmap notes */\nint x;";
        assert_eq!(run(src).unwrap(), src);
    }

    #[test]
    fn test_declare_block() {
        let src = "\
/* Declarations start here */
struct Hashmap;
void hashmap_init(Hashmap *map);
/* Declarations stop here */
";
        let expected = "\
#define HASHMAP_DECLARE(Struct_Name_, Functions_Prefix_, Custom_Key_Type_, Custom_Value_Type_, Custom_Hash_Func_, Custom_Comparison_Func_)\\
struct Struct_Name_;\\
void Functions_Prefix_##_init(Struct_Name_ *map);
";
        assert_eq!(run(src).unwrap(), expected);
    }

    #[test]
    fn test_define_block_with_panic() {
        let src = "\
/* Definitions start here */
HASHMAP_DEFINE_PANIC(hashmap)
/* Definitions stop here */
";
        let out = run(src).unwrap();
        assert!(out.starts_with("#define HASHMAP_DEFINE(Struct_Name_,"));
        assert!(out.ends_with("\\\nHASHMAP_DEFINE_PANIC(Functions_Prefix_)\n"));
    }

    #[test]
    fn test_empty_block() {
        let src = "/* Declarations start here */\n/* Declarations stop here */\nint y;\n";
        let out = run(src).unwrap();
        assert_eq!(
            out,
            format!("{}\nint y;\n", signature("HASHMAP_DECLARE"))
        );
    }

    #[test]
    fn test_scaffold_dropped_everywhere() {
        let src = "\
#ifndef HASH_CALLBACK
#define HASH_CALLBACK NULL
#endif /* HASH_CALLBACK */
typedef int CustomValue;
/* Declarations start here */
typedef const char *CustomKey;
int a;
/* Declarations stop here */
";
        let generated = expand(src, &Profile::default()).unwrap();
        let out = render_header(&generated.lines);
        assert_eq!(generated.scaffold_dropped, 5);
        assert!(!out.contains("HASH_CALLBACK"));
        assert!(!out.contains("typedef"));
        assert!(out.ends_with(")\\\nint a;\n"));
    }

    #[test]
    fn test_block_summaries() {
        let src = "\
/* Declarations start here */
int a;
int b;
/* Declarations stop here */
/* Definitions start here */
int c;
/* Definitions stop here */
";
        let generated = expand(src, &Profile::default()).unwrap();
        assert_eq!(
            generated.blocks,
            vec![
                BlockSummary {
                    kind: BlockKind::Declare,
                    macro_name: "HASHMAP_DECLARE".to_string(),
                    opened_at: 1,
                    closed_at: 4,
                    body_lines: 2,
                },
                BlockSummary {
                    kind: BlockKind::Define,
                    macro_name: "HASHMAP_DEFINE".to_string(),
                    opened_at: 5,
                    closed_at: 7,
                    body_lines: 1,
                },
            ]
        );
    }

    #[test]
    fn test_stop_outside_block() {
        let err = run("int a;\n/* Declarations stop here */\n").unwrap_err();
        assert_eq!(
            err,
            StructureError::UnexpectedStop {
                kind: BlockKind::Declare,
                line: 2,
                span: 7..35,
            }
        );
    }

    #[test]
    fn test_nested_start() {
        let src = "/* Declarations start here */\n/* Definitions start here */\n";
        assert!(matches!(
            run(src),
            Err(StructureError::NestedStart {
                open: BlockKind::Declare,
                opened_at: 1,
                found: BlockKind::Define,
                line: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_mismatched_stop() {
        let src = "/* Declarations start here */\nint a;\n/* Definitions stop here */\n";
        assert!(matches!(
            run(src),
            Err(StructureError::MismatchedStop {
                open: BlockKind::Declare,
                found: BlockKind::Define,
                line: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_unterminated_block() {
        let src = "int a;\n/* Definitions start here */\nint b;\n";
        assert_eq!(
            run(src).unwrap_err(),
            StructureError::Unterminated {
                kind: BlockKind::Define,
                opened_at: 2,
                span: 7..35,
            }
        );
    }

    #[test]
    fn test_custom_profile_markers_and_names() {
        let profile = Profile::from_str(
            r#"
[markers]
declarations_start = "@decl-begin"
declarations_stop = "@decl-end"
definitions_start = "@def-begin"
definitions_stop = "@def-end"

[macros]
declare = "MAP_DECLARE"
define = "MAP_DEFINE"
"#,
        )
        .unwrap();
        let src = "// @decl-begin\nCustomKey k;\n// @decl-end\n";
        let generated = expand(src, &profile).unwrap();
        let out = render_header(&generated.lines);
        assert!(out.starts_with("#define MAP_DECLARE(Struct_Name_,"));
        assert!(out.ends_with("\\\nCustom_Key_Type_ k;\n"));
    }
}
