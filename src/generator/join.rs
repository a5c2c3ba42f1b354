//! Turning an in-block template line into a continued macro body line

use crate::parser::lexer::tokenize;
use crate::parser::placeholder::substitute;
use crate::parser::source::SourceLine;
use crate::renderer::HeaderLine;

/// Panic helper instantiation as written in the template
const DEFAULT_PANIC: &str = "HASHMAP_DEFINE_PANIC(hashmap)";
/// The same instantiation driven by the macro's function prefix
const PREFIXED_PANIC: &str = "HASHMAP_DEFINE_PANIC(Functions_Prefix_)";

/// Transform the text of one in-block line
pub fn transform(content: &str) -> String {
    // Whole-line fix: the argument is not a placeholder in token position
    let content = content.replace(DEFAULT_PANIC, PREFIXED_PANIC);
    tokenize(&content).map(substitute).collect()
}

/// Transform a line and mark it as continued
pub fn join_line(line: &SourceLine<'_>) -> HeaderLine {
    HeaderLine::continued(transform(line.content()), line.ending())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::source::lines;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_panic_instantiation() {
        assert_eq!(
            transform("HASHMAP_DEFINE_PANIC(hashmap)"),
            "HASHMAP_DEFINE_PANIC(Functions_Prefix_)"
        );
    }

    #[test]
    fn test_mixed_literal_and_code() {
        assert_eq!(
            transform(r#"		hashmap_panic("Null passed to hashmap_get but non-null argument expected.");"#),
            r##"		Functions_Prefix_##_panic("Null passed to "#Functions_Prefix_"_get but non-null argument expected.");"##
        );
    }

    #[test]
    fn test_same_word_both_contexts() {
        assert_eq!(
            transform(r#"log("hashmap: %s\n", hashmap_name);"#),
            r##"log(""#Functions_Prefix_": %s\n", Functions_Prefix_##_name);"##
        );
    }

    #[test]
    fn test_join_line_appends_continuation() {
        let src = "struct HashmapListNode *next;\r\n";
        let line = lines(src)[0];
        let joined = join_line(&line);
        assert_eq!(joined.to_string(), "struct Struct_Name_##ListNode *next;\\\r\n");
    }

    #[test]
    fn test_blank_line_still_continued() {
        let line = lines("\n")[0];
        assert_eq!(join_line(&line).to_string(), "\\\n");
    }
}
