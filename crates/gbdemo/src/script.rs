//! Joypad input scripts
//!
//! One step per line: an optional repeat count followed by the buttons held
//! for that many ticks.
//!
//! ```text
//! # open the door, then wait
//! start
//! 30 none
//! 4 a+right
//! ```
//!
//! Button names are `up down left right a b select start`, in any case.

use gb::input::{Button, Buttons};
use logos::Logos;

use crate::error::{HostError, HostResult, Span};

/// Script token kinds
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
#[logos(skip r"#[^\n]*")]
pub enum TokenKind {
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    #[regex(r"[A-Za-z]+", |lex| lex.slice().to_string())]
    Word(String),

    #[token("+")]
    Plus,

    #[token("\n")]
    Newline,
}

/// Token with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Buttons held for `count` consecutive ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub count: u32,
    pub buttons: Buttons,
}

/// A parsed input script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    /// Number of ticks the script covers
    pub fn len_ticks(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.count)).sum()
    }

    /// One joypad sample per tick
    pub fn samples(&self) -> impl Iterator<Item = Buttons> + '_ {
        self.steps
            .iter()
            .flat_map(|s| std::iter::repeat_n(s.buttons, s.count as usize))
    }
}

/// Split `source` into tokens
pub fn tokenize(source: &str) -> HostResult<Vec<Token>> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();
    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        match kind {
            Ok(kind) => tokens.push(Token { kind, span }),
            Err(()) => {
                return Err(HostError::script(
                    format!("unexpected character '{}'", lexer.slice()),
                    span,
                ));
            }
        }
    }
    Ok(tokens)
}

/// Parse a whole script
pub fn parse(source: &str) -> HostResult<Script> {
    let tokens = tokenize(source)?;
    let mut steps = Vec::new();
    for line in tokens.split(|t| t.kind == TokenKind::Newline) {
        if let Some(step) = parse_line(line)? {
            steps.push(step);
        }
    }
    Ok(Script { steps })
}

fn parse_count(text: &str, span: &Span) -> HostResult<u32> {
    match text.parse::<u32>() {
        Ok(0) => Err(HostError::script("count must be at least 1", span.clone())),
        Ok(count) => Ok(count),
        Err(_) => Err(HostError::script("count is too large", span.clone())),
    }
}

fn parse_button(name: &str, span: &Span) -> HostResult<Button> {
    Button::from_name(name)
        .ok_or_else(|| HostError::script(format!("unknown button '{name}'"), span.clone()))
}

/// Parse `[COUNT] BUTTONS`; blank lines give `None`
fn parse_line(line: &[Token]) -> HostResult<Option<Step>> {
    let Some(first) = line.first() else {
        return Ok(None);
    };

    let (count, rest) = match &first.kind {
        TokenKind::Number(text) => (parse_count(text, &first.span)?, &line[1..]),
        _ => (1, line),
    };

    let Some(head) = rest.first() else {
        return Err(HostError::script("expected buttons after the count", first.span.clone()));
    };

    if let TokenKind::Word(word) = &head.kind {
        if word.eq_ignore_ascii_case("none") {
            if let Some(extra) = rest.get(1) {
                return Err(HostError::script(
                    "'none' cannot be combined with buttons",
                    extra.span.clone(),
                ));
            }
            return Ok(Some(Step { count, buttons: Buttons::NONE }));
        }
    }

    let mut buttons = Buttons::NONE;
    let mut expect_name = true;
    for token in rest {
        match (&token.kind, expect_name) {
            (TokenKind::Word(name), true) => {
                if name.eq_ignore_ascii_case("none") {
                    return Err(HostError::script(
                        "'none' cannot be combined with buttons",
                        token.span.clone(),
                    ));
                }
                buttons |= parse_button(name, &token.span)?;
                expect_name = false;
            }
            (TokenKind::Plus, false) => expect_name = true,
            (TokenKind::Word(_), false) => {
                return Err(HostError::script("expected '+' between buttons", token.span.clone()));
            }
            (TokenKind::Number(_), _) => {
                return Err(HostError::script("the count must come first", token.span.clone()));
            }
            _ => {
                return Err(HostError::script("expected a button name", token.span.clone()));
            }
        }
    }
    if expect_name {
        let end = rest.last().map_or(first.span.clone(), |t| t.span.clone());
        return Err(HostError::script("expected a button name after '+'", end));
    }
    Ok(Some(Step { count, buttons }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn step(count: u32, buttons: Buttons) -> Step {
        Step { count, buttons }
    }

    fn error_at(source: &str) -> (String, Span) {
        match parse(source) {
            Err(HostError::Script { message, span }) => (message, span),
            other => panic!("expected a script error, got {other:?}"),
        }
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("3 a+Up # go\n").unwrap();
        let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number("3".into()),
                TokenKind::Word("a".into()),
                TokenKind::Plus,
                TokenKind::Word("Up".into()),
                TokenKind::Newline,
            ]
        );
    }

    #[test]
    fn test_parse_steps() {
        let script = parse("# intro\nstart\n\n30 none\n4 A + right\nselect").unwrap();
        assert_eq!(
            script.steps,
            vec![
                step(1, Buttons::from(Button::START)),
                step(30, Buttons::NONE),
                step(4, Button::A | Button::RIGHT),
                step(1, Buttons::from(Button::SELECT)),
            ]
        );
        assert_eq!(script.len_ticks(), 36);
    }

    #[test]
    fn test_counts_expand_to_samples() {
        let script = parse("3 b\n2 none\n1 up+left").unwrap();
        let samples: Vec<_> = script.samples().collect();
        assert_eq!(
            samples,
            vec![
                Buttons::from(Button::B),
                Buttons::from(Button::B),
                Buttons::from(Button::B),
                Buttons::NONE,
                Buttons::NONE,
                Button::UP | Button::LEFT,
            ]
        );
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(parse("").unwrap(), Script::default());
        assert_eq!(parse("\n# nothing\n\n").unwrap().len_ticks(), 0);
    }

    #[test]
    fn test_zero_count() {
        assert_eq!(error_at("0 a"), ("count must be at least 1".into(), 0..1));
    }

    #[test]
    fn test_huge_count() {
        let (message, span) = error_at("99999999999 a");
        assert_eq!(message, "count is too large");
        assert_eq!(span, 0..11);
    }

    #[test]
    fn test_unknown_button() {
        assert_eq!(error_at("up\n2 jump"), ("unknown button 'jump'".into(), 5..9));
    }

    #[test]
    fn test_bad_character() {
        let (message, span) = error_at("a,b");
        assert_eq!(message, "unexpected character ','");
        assert_eq!(span, 1..2);
    }

    #[test]
    fn test_missing_plus() {
        assert_eq!(error_at("a b").0, "expected '+' between buttons");
    }

    #[test]
    fn test_trailing_plus() {
        assert_eq!(error_at("a+").0, "expected a button name after '+'");
    }

    #[test]
    fn test_count_without_buttons() {
        assert_eq!(error_at("5\n").0, "expected buttons after the count");
    }

    #[test]
    fn test_none_is_exclusive() {
        assert_eq!(error_at("none+a").0, "'none' cannot be combined with buttons");
        assert_eq!(error_at("a+none").0, "'none' cannot be combined with buttons");
    }

    #[test]
    fn test_count_in_wrong_place() {
        assert_eq!(error_at("a 3").0, "the count must come first");
    }
}
