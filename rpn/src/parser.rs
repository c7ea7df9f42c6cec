use std::ops::Deref;

use lexers::WordTokenizer;

use crate::rpneval::EvalErr;
use crate::token::Token;

/// A classified postfix expression, ready for reduction.
#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr(pub Vec<Token>);

/// Cheap structural check done before reduction. Only the errors that can be
/// spotted without simulating the stack are reported here, operator arity is
/// left for the reducer so it can say which operator came up short.
pub fn validate(tokens: &[String]) -> Result<(), EvalErr> {
    let first = tokens.first().ok_or(EvalErr::EmptyExpression)?;
    if let Token::Op(op) = Token::classify(first) {
        return Err(EvalErr::LeadingOperator(op));
    }
    Ok(())
}

impl RPNExpr {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, EvalErr> {
        Self::parse(WordTokenizer::new(expr.chars()))
    }

    pub fn parse(lex: impl Iterator<Item = String>) -> Result<RPNExpr, EvalErr> {
        let lexemes: Vec<String> = lex.collect();
        validate(&lexemes)?;
        // Invalid tokens are kept, the reducer reports them when reached
        Ok(RPNExpr(lexemes.iter().map(|lexeme| Token::classify(lexeme)).collect()))
    }
}

impl Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] {
        &self.0
    }
}
