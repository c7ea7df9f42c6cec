use log::{debug, trace};
use thiserror::Error;

use crate::parser::RPNExpr;
use crate::token::{Operator, Token};

#[derive(Clone, PartialEq, Debug, Error)]
pub enum EvalErr {
    #[error("empty expression")]
    EmptyExpression,
    #[error("expression can't start with operator '{0}'")]
    LeadingOperator(Operator),
    #[error("operator '{op}' requires two operands, found {available} at token {position}")]
    InsufficientOperands {
        op: Operator,
        available: usize,
        position: usize,
    },
    #[error("invalid token '{0}'")]
    InvalidToken(String),
    #[error("invalid operator '{0}'")]
    InvalidOperator(char),
    #[error("division by zero")]
    DivisionByZero,
    #[error("incomplete expression, {0} values left on the stack")]
    MalformedExpression(usize),
}

impl Operator {
    pub fn apply(self, left: f64, right: f64) -> Result<f64, EvalErr> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            // exact comparison, -0.0 counts as zero too
            Operator::Div if right == 0.0 => Err(EvalErr::DivisionByZero),
            Operator::Div => Ok(left / right),
        }
    }
}

/// Apply a binary operator given by its symbol.
pub fn apply(left: f64, right: f64, op: char) -> Result<f64, EvalErr> {
    Operator::try_from(op)?.apply(left, right)
}

/// Run the token stream through the operand stack. The most recently pushed
/// value is the right hand side of each operator.
pub fn reduce(tokens: &[Token]) -> Result<f64, EvalErr> {
    let mut operands = Vec::new();

    for (position, token) in tokens.iter().enumerate() {
        match *token {
            Token::Number(num) => operands.push(num),
            Token::Op(op) => {
                if operands.len() < 2 {
                    return Err(EvalErr::InsufficientOperands {
                        op,
                        available: operands.len(),
                        position,
                    });
                }
                let args = operands.split_off(operands.len() - 2);
                let result = op.apply(args[0], args[1])?;
                trace!("{} {} {} = {}", args[0], op, args[1], result);
                operands.push(result);
            }
            Token::Invalid(ref lexeme) => return Err(EvalErr::InvalidToken(lexeme.clone())),
        }
    }
    match operands[..] {
        [result] => Ok(result),
        _ => Err(EvalErr::MalformedExpression(operands.len())),
    }
}

impl RPNExpr {
    pub fn eval(&self) -> Result<f64, EvalErr> {
        reduce(&self.0)
    }
}

pub fn evaluate(expr: &str) -> Result<f64, EvalErr> {
    RPNExpr::parse_str(expr)
        .and_then(|rpn| rpn.eval())
        .map_err(|err| {
            debug!("failed to evaluate {:?}: {}", expr, err);
            err
        })
}
