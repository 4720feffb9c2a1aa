//! Recursive-descent parser for compound unit symbols.
//!
//! Grammar:
//! ```text
//! symbol  := [number ' '] group ['/' group]
//! group   := product | '(' product ')'
//! product := word ('.' word)*
//! ```
//! A word is an optional prefix, an atom and an optional exponent digit
//! (2-9). A lone "1" numerator ("1/s") contributes nothing.
use super::error::SymbolError;
use super::lexer::{tokenize, Token, TokenKind};
use super::tables;
use super::SymbolLookup;
use crate::model::UnitCategory;
use smallvec::SmallVec;

/// One signed-exponent factor of a symbol, e.g. `s2` in the denominator of
/// "m/s2" is `{ atom: "s", exponent: -2, from_denominator: true }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub prefix: Option<String>,
    pub atom: String,
    pub exponent: i32,
    pub from_denominator: bool,
}

impl Component {
    /// The atom with its prefix glued back on, e.g. "kPa".
    pub fn token(&self) -> String {
        match &self.prefix {
            Some(p) => format!("{}{}", p, self.atom),
            None => self.atom.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedSymbol {
    /// Leading numeric literal, as in "1000 m3".
    pub multiplier: Option<f64>,
    pub components: SmallVec<[Component; 4]>,
}

impl ParsedSymbol {
    pub fn numerator(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| !c.from_denominator)
    }

    pub fn denominator(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.from_denominator)
    }
}

pub struct SymbolParser<'l> {
    lookup: &'l dyn SymbolLookup,
}

impl<'l> SymbolParser<'l> {
    pub fn new(lookup: &'l dyn SymbolLookup) -> Self {
        Self { lookup }
    }

    pub fn parse(&self, symbol: &str) -> Result<ParsedSymbol, SymbolError> {
        if symbol.trim().is_empty() {
            return Err(SymbolError::Empty);
        }

        // 1. Leading multiplier literal, terminated by the first space.
        let (multiplier, body, base) = match symbol.split_once(' ') {
            Some((literal, rest)) => {
                let value = literal
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && *v > 0.0)
                    .ok_or_else(|| {
                        SymbolError::malformed(
                            symbol,
                            0,
                            format!("'{}' before a space is not a finite positive multiplier", literal),
                        )
                    })?;
                (Some(value), rest, literal.len() + 1)
            }
            None => (None, symbol, 0),
        };

        // 2. Token stream for the rest.
        let tokens = tokenize(body, base);
        let mut cursor = Cursor { symbol, tokens, pos: 0 };

        let mut components = SmallVec::new();
        self.group(&mut cursor, false, &mut components)?;
        if cursor.eat(TokenKind::Slash) {
            self.group(&mut cursor, true, &mut components)?;
        }

        if let Some(tok) = cursor.peek() {
            let reason = match tok.kind {
                TokenKind::Slash => "only one division sign is allowed".to_string(),
                TokenKind::Space => "space is only allowed after a leading multiplier".to_string(),
                _ => format!("unexpected '{}'", tok.text),
            };
            return Err(SymbolError::malformed(symbol, tok.offset, reason));
        }

        Ok(ParsedSymbol { multiplier, components })
    }

    fn group(
        &self,
        cursor: &mut Cursor<'_>,
        denominator: bool,
        out: &mut SmallVec<[Component; 4]>,
    ) -> Result<(), SymbolError> {
        let wrapped = cursor.eat(TokenKind::LParen);

        // "1/s": the unit numerator adds no component.
        if !denominator && !wrapped {
            if let (Some(word), Some(next)) = (cursor.peek(), cursor.peek_at(1)) {
                if word.kind == TokenKind::Word && word.text == "1" && next.kind == TokenKind::Slash {
                    cursor.pos += 1;
                    return Ok(());
                }
            }
        }

        loop {
            let word = cursor.expect_word(wrapped)?;
            out.push(self.component(cursor.symbol, word, denominator)?);
            if !cursor.eat(TokenKind::Dot) {
                break;
            }
        }

        if wrapped && !cursor.eat(TokenKind::RParen) {
            let offset = cursor.peek().map_or(cursor.symbol.len(), |t| t.offset);
            return Err(SymbolError::malformed(cursor.symbol, offset, "missing closing parenthesis"));
        }
        Ok(())
    }

    fn component(&self, symbol: &str, word: Token<'_>, denominator: bool) -> Result<Component, SymbolError> {
        let (body, exponent) = split_exponent(word.text);

        if body.is_empty() {
            return Err(SymbolError::malformed(symbol, word.offset, "exponent without an atom"));
        }
        if !tables::keeps_digits(body) {
            if let Some(i) = body.find(|c: char| c.is_ascii_digit()) {
                let reason = if i == 0 {
                    format!("atom '{}' must not start with a digit", body)
                } else {
                    format!("atom '{}' has a digit that is not a single trailing exponent", word.text)
                };
                return Err(SymbolError::malformed(symbol, word.offset + i, reason));
            }
        }

        let (prefix, atom) = match self.split_prefix(body) {
            Some((p, a)) => (Some(p.to_string()), a.to_string()),
            None => (None, body.to_string()),
        };

        Ok(Component {
            prefix,
            atom,
            exponent: if denominator { -exponent } else { exponent },
            from_denominator: denominator,
        })
    }

    /// Splits a word into a registered prefix and atom when the word is not
    /// itself an indivisible registered unit.
    fn split_prefix<'w>(&self, body: &'w str) -> Option<(&'w str, &'w str)> {
        if tables::never_split(body) {
            return None;
        }
        match self.lookup.unit_category(body) {
            Some(UnitCategory::Prefixed) if !self.lookup.is_terminal_unit(body) => {}
            Some(_) => return None,
            None => {}
        }
        self.decompose_prefixed(body)
    }

    /// Longest registered prefix whose remainder is a registered atom.
    /// Ignores whether `body` is itself registered, so it can decompose
    /// indivisible prefixed units such as "kg".
    pub fn decompose_prefixed<'w>(&self, body: &'w str) -> Option<(&'w str, &'w str)> {
        let mut splits: Vec<usize> = body.char_indices().map(|(i, _)| i).filter(|&i| i > 0).collect();
        splits.reverse();
        splits.into_iter().map(|i| body.split_at(i)).find(|(prefix, atom)| {
            self.lookup.is_prefix(prefix) && self.lookup.unit_category(atom) == Some(UnitCategory::Atom)
        })
    }
}

/// Strips a single trailing exponent digit (2-9).
fn split_exponent(word: &str) -> (&str, i32) {
    if tables::keeps_digits(word) {
        return (word, 1);
    }
    match word.chars().last() {
        Some(d @ '2'..='9') => (&word[..word.len() - 1], d as i32 - '0' as i32),
        _ => (word, 1),
    }
}

/// Whether a symbol is anything other than a bare token: it has separators,
/// spaces, parentheses or an exponent suffix.
pub fn has_compound_shape(symbol: &str) -> bool {
    if symbol.contains(&['.', '/', ' ', '(', ')'][..]) {
        return true;
    }
    split_exponent(symbol).1 != 1
}

struct Cursor<'s> {
    symbol: &'s str,
    tokens: Vec<Token<'s>>,
    pos: usize,
}

impl<'s> Cursor<'s> {
    fn peek(&self) -> Option<Token<'s>> {
        self.tokens.get(self.pos).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<Token<'s>> {
        self.tokens.get(self.pos + ahead).copied()
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek().is_some_and(|t| t.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_word(&mut self, inside_parens: bool) -> Result<Token<'s>, SymbolError> {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::Word => {
                self.pos += 1;
                Ok(tok)
            }
            Some(tok) if tok.kind == TokenKind::LParen && inside_parens => {
                Err(SymbolError::malformed(self.symbol, tok.offset, "nested parentheses are not supported"))
            }
            Some(tok) => Err(SymbolError::malformed(
                self.symbol,
                tok.offset,
                format!("expected an atom but found '{}'", tok.text),
            )),
            None => Err(SymbolError::malformed(self.symbol, self.symbol.len(), "expected an atom at end of symbol")),
        }
    }
}
