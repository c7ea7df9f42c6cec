pub use parser::{validate, RPNExpr};
pub use rpneval::{apply, evaluate, reduce, EvalErr};
pub use token::{is_number, is_operator, Operator, Token};

mod token;

mod parser;
#[cfg(test)]
mod parser_test;

mod rpneval;

mod rpnprint;
