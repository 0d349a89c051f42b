use std::collections::BTreeSet;

use log::debug;

use crate::core::error::{Error, ErrorKind, Result};
use crate::index::inverted::Term;
use crate::query::program::{Instruction, QueryProgram};

/// Token of the infix query syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryToken {
    LeftParen,
    RightParen,
    Not,
    And,
    Or,
    Term(Term),
}

/// Recursive-descent parser for infix boolean keyword queries.
///
/// Grammar, loosest to tightest binding:
///
/// ```text
/// or_expr   := and_expr ( '|' and_expr )*
/// and_expr  := unit_expr ( '&' unit_expr )*
/// unit_expr := '!'* ( term | '(' or_expr ')' )
/// ```
///
/// Each nonterminal consumes a token span and returns the index just past
/// it. Output is the postfix program the evaluator runs per candidate:
/// operands first, then the operator, with a unit's negations emitted in
/// source order after its operand (`!!x` becomes `x Not Not`).
#[derive(Debug, Default)]
pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        QueryParser
    }

    pub fn parse(&self, input: &str) -> Result<QueryProgram> {
        let tokens = self.tokenize(input)?;
        if tokens.is_empty() {
            return Err(Error::new(
                ErrorKind::EmptyExpression,
                "query contains no tokens",
            ));
        }

        let mut terms = BTreeSet::new();
        for token in &tokens {
            if let QueryToken::Term(term) = token {
                terms.insert(term.clone());
            }
        }

        let mut instructions = Vec::new();
        let end = self.parse_or(&tokens, 0, &mut instructions)?;
        if end != tokens.len() {
            return Err(match tokens[end] {
                QueryToken::RightParen => Error::new(
                    ErrorKind::UnmatchedParenthesis,
                    format!("')' at token {} closes nothing", end),
                ),
                ref token => Error::new(
                    ErrorKind::UnexpectedToken,
                    format!("trailing {:?} at token {}", token, end),
                ),
            });
        }

        debug!(
            "parsed query into {} instructions over {} terms",
            instructions.len(),
            terms.len()
        );

        Ok(QueryProgram { instructions, terms })
    }

    fn tokenize(&self, input: &str) -> Result<Vec<QueryToken>> {
        let mut tokens = Vec::new();
        let mut chars = input.char_indices().peekable();

        while let Some(&(pos, c)) = chars.peek() {
            if c.is_whitespace() {
                chars.next();
                continue;
            }
            match c {
                '(' => {
                    tokens.push(QueryToken::LeftParen);
                    chars.next();
                }
                ')' => {
                    tokens.push(QueryToken::RightParen);
                    chars.next();
                }
                '!' => {
                    tokens.push(QueryToken::Not);
                    chars.next();
                }
                '&' => {
                    tokens.push(QueryToken::And);
                    chars.next();
                }
                '|' => {
                    tokens.push(QueryToken::Or);
                    chars.next();
                }
                c if Term::is_word_char(c) => {
                    let mut word = String::new();
                    while let Some(&(_, c)) = chars.peek() {
                        if !Term::is_word_char(c) {
                            break;
                        }
                        word.push(c);
                        chars.next();
                    }
                    tokens.push(QueryToken::Term(Term::new(&word)));
                }
                _ => {
                    return Err(Error::new(
                        ErrorKind::UnexpectedToken,
                        format!("character {:?} at byte {}", c, pos),
                    ));
                }
            }
        }

        Ok(tokens)
    }

    /// `or_expr := and_expr ( '|' and_expr )*`
    fn parse_or(
        &self,
        tokens: &[QueryToken],
        mut idx: usize,
        out: &mut Vec<Instruction>,
    ) -> Result<usize> {
        idx = self.parse_and(tokens, idx, out)?;
        while tokens.get(idx) == Some(&QueryToken::Or) {
            idx = self.parse_and(tokens, idx + 1, out)?;
            out.push(Instruction::Or);
        }
        Ok(idx)
    }

    /// `and_expr := unit_expr ( '&' unit_expr )*`
    fn parse_and(
        &self,
        tokens: &[QueryToken],
        mut idx: usize,
        out: &mut Vec<Instruction>,
    ) -> Result<usize> {
        idx = self.parse_unit(tokens, idx, out)?;
        while tokens.get(idx) == Some(&QueryToken::And) {
            idx = self.parse_unit(tokens, idx + 1, out)?;
            out.push(Instruction::And);
        }
        Ok(idx)
    }

    /// `unit_expr := '!'* ( term | '(' or_expr ')' )`
    fn parse_unit(
        &self,
        tokens: &[QueryToken],
        mut idx: usize,
        out: &mut Vec<Instruction>,
    ) -> Result<usize> {
        let mut negations = 0;
        while tokens.get(idx) == Some(&QueryToken::Not) {
            negations += 1;
            idx += 1;
        }

        match tokens.get(idx) {
            Some(QueryToken::Term(term)) => {
                out.push(Instruction::Push(term.clone()));
                idx += 1;
            }
            Some(QueryToken::LeftParen) => {
                idx = self.parse_or(tokens, idx + 1, out)?;
                match tokens.get(idx) {
                    Some(QueryToken::RightParen) => idx += 1,
                    _ => {
                        return Err(Error::new(
                            ErrorKind::UnmatchedParenthesis,
                            "'(' is never closed",
                        ));
                    }
                }
            }
            Some(token) => {
                return Err(Error::new(
                    ErrorKind::UnexpectedToken,
                    format!("{:?} where a term or '(' was expected", token),
                ));
            }
            None => {
                return Err(Error::new(
                    ErrorKind::UnexpectedToken,
                    "query ends where a term or '(' was expected",
                ));
            }
        }

        for _ in 0..negations {
            out.push(Instruction::Not);
        }

        Ok(idx)
    }
}
