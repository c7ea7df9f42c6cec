use crate::parser::RPNExpr;
use crate::rpneval::EvalErr;
use crate::token::{Operator, Token};
use std::fmt;

// every operator is left associative, leaves bind tightest
fn precedence(op: Operator) -> usize {
    match op {
        Operator::Add | Operator::Sub => 2,
        Operator::Mul | Operator::Div => 3,
    }
}

const LEAF_PRECEDENCE: usize = 99;

fn parenthesize(subexpr: String) -> String {
    format!("({})", subexpr)
}

impl RPNExpr {
    /// Render as infix, adding only the parentheses the tree shape needs.
    pub fn to_infix(&self) -> Result<String, EvalErr> {
        // rendered subexpressions along with their binding power
        let mut printed: Vec<(String, usize)> = Vec::new();
        for (position, token) in self.0.iter().enumerate() {
            match *token {
                Token::Number(num) => printed.push((format!("{}", num), LEAF_PRECEDENCE)),
                Token::Op(op) => {
                    if printed.len() < 2 {
                        return Err(EvalErr::InsufficientOperands {
                            op,
                            available: printed.len(),
                            position,
                        });
                    }
                    let mut args = printed.split_off(printed.len() - 2);
                    let (rhs, rprec) = args.pop().unwrap_or_default();
                    let (lhs, lprec) = args.pop().unwrap_or_default();
                    let prec = precedence(op);
                    let mut infix = if prec > lprec { parenthesize(lhs) } else { lhs };
                    infix.push(' ');
                    infix.push(op.symbol());
                    infix.push(' ');
                    // NOTE: '1 + (2 + 3)' keeps its parens, the grouping came
                    // from the postfix order and float math isn't associative
                    if prec >= rprec {
                        infix.push_str(&parenthesize(rhs));
                    } else {
                        infix.push_str(&rhs);
                    }
                    printed.push((infix, prec));
                }
                Token::Invalid(ref lexeme) => return Err(EvalErr::InvalidToken(lexeme.clone())),
            }
        }
        match printed.pop() {
            Some((infix, _)) if printed.is_empty() => Ok(infix),
            Some(_) => Err(EvalErr::MalformedExpression(printed.len() + 1)),
            None => Err(EvalErr::MalformedExpression(0)),
        }
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_infix() {
            Ok(infix) => write!(f, "{}", infix),
            Err(_) => {
                let tokens = self.0.iter()
                    .map(|token| token.to_string())
                    .collect::<Vec<String>>()
                    .join(" ");
                write!(f, "{}", tokens)
            }
        }
    }
}
