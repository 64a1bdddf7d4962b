use super::lexer::{Lexer, Token, TokenKind};
use super::model::{ModelId, Partition, PartitionList, Subset};
use crate::utils::{MotifError, Result};

const EMPTY_PARTITION: &str = "-";

/// Parses one partition, e.g. `baseline-default:6:{(0,3), (0,41)!}, bg:1:{}`.
/// A lone `-` is the empty partition.
pub fn parse_partition(text: &str) -> Result<Partition> {
    let trimmed = text.trim();
    if trimmed == EMPTY_PARTITION || trimmed.is_empty() {
        return Ok(Partition::empty());
    }
    PartitionParser::new(text).partition()
}

/// Parses one partition per line. Blank lines are skipped; a `-` line is kept
/// as an empty partition.
pub fn parse_partition_list(text: &str) -> Result<PartitionList> {
    let mut partitions = PartitionList::new();
    for (line_number, line) in text.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let partition = parse_partition(line).map_err(|e| e.at_line(line_number + 1))?;
        partitions.push(partition);
    }
    Ok(partitions)
}

struct PartitionParser<'a> {
    input: &'a str,
    tokens: Vec<Token<'a>>,
    cursor: usize,
}

impl<'a> PartitionParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: Lexer::new(input).collect(),
            cursor: 0,
        }
    }

    fn peek(&self, ahead: usize) -> Option<Token<'a>> {
        self.tokens.get(self.cursor + ahead).copied()
    }

    fn advance(&mut self) -> Option<Token<'a>> {
        let token = self.peek(0);
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn error_at(&self, token: Option<Token<'a>>, message: impl Into<String>) -> MotifError {
        match token {
            Some(token) => MotifError::malformed(token.offset, message, token.text()),
            None => MotifError::malformed(
                self.input.len(),
                format!("{} (unexpected end of input)", message.into()),
                self.input.trim(),
            ),
        }
    }

    fn expect(&mut self, kind: TokenKind<'static>, message: &str) -> Result<Token<'a>> {
        match self.advance() {
            Some(token) if token.kind == kind => Ok(token),
            other => Err(self.error_at(other, message)),
        }
    }

    fn integer(&mut self, what: &str) -> Result<usize> {
        match self.advance() {
            Some(token @ Token {
                kind: TokenKind::Word(word),
                ..
            }) => word.parse::<usize>().map_err(|_| {
                self.error_at(Some(token), format!("{} must be a non-negative integer", what))
            }),
            other => Err(self.error_at(other, format!("expected {}", what))),
        }
    }

    fn partition(&mut self) -> Result<Partition> {
        let mut partition = Partition::empty();
        loop {
            partition.push(self.subset()?);
            match self.advance() {
                None => return Ok(partition),
                Some(Token {
                    kind: TokenKind::Comma,
                    ..
                }) => continue,
                Some(token @ Token {
                    kind: TokenKind::RBrace,
                    ..
                }) => return Err(self.error_at(Some(token), "unbalanced '}'")),
                other => return Err(self.error_at(other, "expected ',' between subsets")),
            }
        }
    }

    fn subset(&mut self) -> Result<Subset> {
        let model_id = self.header()?;
        let mut subset = Subset::new(model_id);

        if let Some(Token {
            kind: TokenKind::RBrace,
            ..
        }) = self.peek(0)
        {
            self.advance();
            return Ok(subset);
        }

        loop {
            let (sequence_index, position, reverse) = self.element()?;
            subset.push_site(sequence_index, position, reverse);
            match self.advance() {
                Some(Token {
                    kind: TokenKind::Comma,
                    ..
                }) => continue,
                Some(Token {
                    kind: TokenKind::RBrace,
                    ..
                }) => return Ok(subset),
                None => return Err(self.error_at(None, "unbalanced '{': missing '}'")),
                other => return Err(self.error_at(other, "expected ',' or '}' after site")),
            }
        }
    }

    /// `name ":" length ":" "{"`
    fn header(&mut self) -> Result<ModelId> {
        let name = match (self.peek(0), self.peek(1)) {
            (
                Some(Token {
                    kind: TokenKind::Word(name),
                    ..
                }),
                Some(Token {
                    kind: TokenKind::Colon,
                    ..
                }),
            ) => name,
            (
                Some(name @ Token {
                    kind: TokenKind::Word(_),
                    ..
                }),
                Some(Token {
                    kind: TokenKind::LBrace,
                    ..
                }),
            ) => return Err(self.error_at(Some(name), "missing ':length:' before '{'")),
            (
                Some(Token {
                    kind: TokenKind::Word(_),
                    ..
                }),
                other,
            ) => return Err(self.error_at(other, "expected ':' after subset name")),
            (
                Some(
                    token @ Token {
                        kind: TokenKind::LBrace | TokenKind::Colon,
                        ..
                    },
                ),
                _,
            ) => return Err(self.error_at(Some(token), "missing subset name before ':length:'")),
            (other, _) => return Err(self.error_at(other, "expected subset name")),
        };
        self.cursor += 2;

        let length_token = self.peek(0);
        let length = match (length_token, self.peek(1)) {
            (
                Some(Token {
                    kind: TokenKind::Word(_),
                    ..
                }),
                Some(Token {
                    kind: TokenKind::Colon,
                    ..
                }),
            ) => {
                let length = self.integer("subset length")?;
                self.cursor += 1;
                length
            }
            (
                Some(
                    token @ Token {
                        kind: TokenKind::LBrace,
                        ..
                    },
                ),
                _,
            )
            | (
                Some(Token {
                    kind: TokenKind::Word(_),
                    ..
                }),
                Some(
                    token @ Token {
                        kind: TokenKind::LBrace,
                        ..
                    },
                ),
            ) => return Err(self.error_at(Some(token), "missing ':length:' before '{'")),
            (other, _) => return Err(self.error_at(other, "expected subset length")),
        };
        if length == 0 {
            return Err(self.error_at(length_token, "subset length must be positive"));
        }

        self.expect(TokenKind::LBrace, "expected '{' after ':length:'")?;
        Ok(ModelId::new(name, length))
    }

    /// `"(" seqIndex "," position ")" ["!"]`
    fn element(&mut self) -> Result<(usize, usize, bool)> {
        self.expect(TokenKind::LParen, "expected '(' to open site")?;
        let sequence_index = self.integer("sequence index")?;
        self.expect(TokenKind::Comma, "expected ',' between sequence index and position")?;
        let position = self.integer("position")?;
        let close = match self.advance() {
            Some(
                token @ Token {
                    kind: TokenKind::RParen,
                    ..
                },
            ) => token,
            None => return Err(self.error_at(None, "unbalanced '(': missing ')'")),
            other => return Err(self.error_at(other, "expected ')' to close site")),
        };
        let reverse = match self.peek(0) {
            Some(
                token @ Token {
                    kind: TokenKind::Bang,
                    ..
                },
            ) => {
                if token.offset != close.offset + 1 {
                    return Err(self.error_at(Some(token), "'!' must directly follow ')'"));
                }
                self.advance();
                true
            }
            _ => false,
        };
        Ok((sequence_index, position, reverse))
    }
}
