//! Splits a unit symbol into words and separators.
//!
//! The lexer never fails: anything that is not a separator belongs to a word,
//! and it is the parser's job to decide whether the sequence makes sense.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of non-separator characters, e.g. "kPa" or "s2".
    Word,
    /// '.' multiplication.
    Dot,
    /// '/' division.
    Slash,
    /// ' ' outside the leading multiplier.
    Space,
    LParen,
    RParen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub text: &'s str,
    /// Byte offset of the token in the original symbol.
    pub offset: usize,
}

fn separator(c: char) -> Option<TokenKind> {
    match c {
        '.' => Some(TokenKind::Dot),
        '/' => Some(TokenKind::Slash),
        ' ' => Some(TokenKind::Space),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        _ => None,
    }
}

/// Tokenizes `input`, reporting offsets shifted by `base` so that errors
/// point into the full symbol when only a tail is lexed.
pub fn tokenize(input: &str, base: usize) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        match separator(c) {
            Some(kind) => {
                if let Some(start) = word_start.take() {
                    tokens.push(Token { kind: TokenKind::Word, text: &input[start..i], offset: base + start });
                }
                tokens.push(Token { kind, text: &input[i..i + c.len_utf8()], offset: base + i });
            }
            None => {
                if word_start.is_none() {
                    word_start = Some(i);
                }
            }
        }
    }
    if let Some(start) = word_start {
        tokens.push(Token { kind: TokenKind::Word, text: &input[start..], offset: base + start });
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        tokenize(s, 0).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_compound_symbol() {
        use TokenKind::*;
        assert_eq!(kinds("kg.m2/s3"), vec![Word, Dot, Word, Slash, Word]);
        assert_eq!(kinds("(m.s)/(K)"), vec![LParen, Word, Dot, Word, RParen, Slash, LParen, Word, RParen]);
    }

    #[test]
    fn test_offsets_and_text() {
        let tokens = tokenize("N.m", 5);
        assert_eq!(tokens[0].text, "N");
        assert_eq!(tokens[2].text, "m");
        assert_eq!(tokens[2].offset, 7);
    }

    #[test]
    fn test_multibyte_word() {
        let tokens = tokenize("µm/s", 0);
        assert_eq!(tokens[0].text, "µm");
        assert_eq!(tokens[1].offset, "µm".len());
    }
}
