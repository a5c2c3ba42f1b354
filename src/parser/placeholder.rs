//! Placeholder recognition and rewriting using logos
//!
//! Two lexers, one per token context, so that literal text and code text
//! never share a rewrite table. Placeholders are only honoured where an
//! identifier starts; the rest of the identifier is copied through, which
//! is what lets `hashmap_insert` become `Functions_Prefix_##_insert`.

use logos::Logos;

use super::lexer::Token;

/// Placeholder words recognised inside code tokens
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeWord {
    // Longer form first in the table; logos picks the longest match anyway
    #[token("HashmapList")]
    StructList,
    #[token("Hashmap")]
    StructName,
    #[token("hashmap")]
    FunctionPrefix,
    #[token("CustomKey")]
    KeyType,
    #[token("CustomValue")]
    ValueType,
    #[token("HASH_CALLBACK")]
    HashCallback,
    #[token("COMPARISON_CALLBACK")]
    ComparisonCallback,

    #[regex(r"[A-Za-z0-9_]")]
    IdentChar,

    #[regex(r"[^A-Za-z0-9_]+")]
    Other,
}

/// Placeholder words recognised inside string literals
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralWord {
    #[token("Hashmap")]
    StructName,
    #[token("hashmap")]
    FunctionPrefix,
    #[token("CustomKey")]
    KeyType,
    #[token("CustomValue")]
    ValueType,

    #[regex(r"[A-Za-z0-9_]")]
    IdentChar,

    #[regex(r"[^A-Za-z0-9_]+")]
    Other,
}

/// A word produced by one of the placeholder lexers
pub trait Word {
    /// Replacement text when the word is a placeholder
    fn replacement(&self) -> Option<&'static str>;

    /// Whether the word's text consists of identifier characters
    fn is_identifier(&self) -> bool;
}

impl Word for CodeWord {
    fn replacement(&self) -> Option<&'static str> {
        match self {
            Self::StructList => Some("Struct_Name_##List"),
            Self::StructName => Some("Struct_Name_"),
            Self::FunctionPrefix => Some("Functions_Prefix_##"),
            Self::KeyType => Some("Custom_Key_Type_"),
            Self::ValueType => Some("Custom_Value_Type_"),
            Self::HashCallback => Some("Custom_Hash_Func_"),
            Self::ComparisonCallback => Some("Custom_Comparison_Func_"),
            Self::IdentChar | Self::Other => None,
        }
    }

    fn is_identifier(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl Word for LiteralWord {
    fn replacement(&self) -> Option<&'static str> {
        // Closing and reopening the literal around a stringized parameter;
        // the compiler concatenates the adjacent literals.
        match self {
            Self::StructName => Some("\"#Struct_Name_\""),
            Self::FunctionPrefix => Some("\"#Functions_Prefix_\""),
            Self::KeyType => Some("\"#Custom_Key_Type_\""),
            Self::ValueType => Some("\"#Custom_Value_Type_\""),
            Self::IdentChar | Self::Other => None,
        }
    }

    fn is_identifier(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Rewrite every placeholder of `W` that starts an identifier in `text`
pub fn rewrite<'s, W>(text: &'s str) -> String
where
    W: Logos<'s, Source = str> + Word,
    W::Extras: Default,
{
    let mut out = String::with_capacity(text.len());
    let mut in_identifier = false;

    for (word, span) in W::lexer(text).spanned() {
        let slice = &text[span];
        match word {
            Ok(word) => {
                match word.replacement() {
                    Some(replacement) if !in_identifier => out.push_str(replacement),
                    _ => out.push_str(slice),
                }
                in_identifier = word.is_identifier();
            }
            Err(_) => {
                out.push_str(slice);
                in_identifier = false;
            }
        }
    }

    out
}

/// Rewrite one token according to its context
pub fn substitute(token: Token<'_>) -> String {
    if !token.is_literal() {
        return rewrite::<CodeWord>(token.text);
    }

    // Only the content between the delimiters is rewritten
    let text = token.text;
    let Some(body) = text.strip_prefix('"') else {
        return text.to_string();
    };
    let (content, closing) = match body.strip_suffix('"') {
        Some(content) if trailing_backslashes(content) % 2 == 0 => (content, "\""),
        _ => (body, ""),
    };

    let mut out = String::with_capacity(text.len());
    out.push('"');
    out.push_str(&rewrite::<LiteralWord>(content));
    out.push_str(closing);
    out
}

fn trailing_backslashes(text: &str) -> usize {
    text.chars().rev().take_while(|&c| c == '\\').count()
}
