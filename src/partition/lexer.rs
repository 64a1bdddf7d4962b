#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Names and integers; surrounding whitespace is stripped.
    Word(&'a str),
    Colon,
    Comma,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Bang,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub offset: usize,
}

impl Token<'_> {
    pub fn text(&self) -> &str {
        match self.kind {
            TokenKind::Word(word) => word,
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Bang => "!",
        }
    }
}

fn punctuation(c: char) -> Option<TokenKind<'static>> {
    match c {
        ':' => Some(TokenKind::Colon),
        ',' => Some(TokenKind::Comma),
        '{' => Some(TokenKind::LBrace),
        '}' => Some(TokenKind::RBrace),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        '!' => Some(TokenKind::Bang),
        _ => None,
    }
}

fn ends_word(c: char) -> bool {
    punctuation(c).is_some() || c == '\n'
}

pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            let rest = &self.input[self.offset..];
            let c = rest.chars().next()?;

            if let Some(kind) = punctuation(c) {
                let token = Token {
                    kind,
                    offset: self.offset,
                };
                self.offset += c.len_utf8();
                return Some(token);
            }

            let run_len = rest.find(ends_word).unwrap_or(rest.len());
            let run = &rest[..run_len];
            let start = self.offset;
            self.offset += run_len.max(c.len_utf8());

            let word = run.trim();
            if !word.is_empty() {
                let leading = run.len() - run.trim_start().len();
                return Some(Token {
                    kind: TokenKind::Word(word),
                    offset: start + leading,
                });
            }
        }
    }
}
