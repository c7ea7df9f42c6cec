use std::fmt;
use std::str::FromStr;

use crate::rpneval::EvalErr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EvalErr;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            other => Err(EvalErr::InvalidOperator(other)),
        }
    }
}

/// Only the bare single-char symbol is an operator, "++" or " +" are not.
impl FromStr for Operator {
    type Err = EvalErr;

    fn from_str(lexeme: &str) -> Result<Self, Self::Err> {
        let mut chars = lexeme.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Operator::try_from(symbol)
                .map_err(|_| EvalErr::InvalidToken(lexeme.to_string())),
            _ => Err(EvalErr::InvalidToken(lexeme.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Number(f64),
    Op(Operator),
    Invalid(String),
}

impl Token {
    /// Numbers are tried before operators, anything else is Invalid.
    pub fn classify(lexeme: &str) -> Token {
        if let Some(num) = parse_number(lexeme) {
            Token::Number(num)
        } else if let Ok(op) = lexeme.parse::<Operator>() {
            Token::Op(op)
        } else {
            Token::Invalid(lexeme.to_string())
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(num) => write!(f, "{}", num),
            Token::Op(op) => write!(f, "{}", op),
            Token::Invalid(lexeme) => write!(f, "{}", lexeme),
        }
    }
}

// inf, NaN and out of range literals like 1e400 are not numbers
fn parse_number(lexeme: &str) -> Option<f64> {
    lexeme.parse::<f64>().ok().filter(|num| num.is_finite())
}

pub fn is_number(token: &str) -> bool {
    parse_number(token).is_some()
}

pub fn is_operator(token: &str) -> bool {
    token.parse::<Operator>().is_ok()
}
