use crate::parser::{validate, RPNExpr};
use crate::rpneval::EvalErr;
use crate::token::{Operator, Token};

fn lexemes(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_parse1() {
    let rpn = RPNExpr::parse_str("5 1 2 + 4 * + 3 -").unwrap();
    let expect = [
        Token::Number(5.0),
        Token::Number(1.0),
        Token::Number(2.0),
        Token::Op(Operator::Add),
        Token::Number(4.0),
        Token::Op(Operator::Mul),
        Token::Op(Operator::Add),
        Token::Number(3.0),
        Token::Op(Operator::Sub),
    ];
    assert_eq!(rpn.len(), expect.len());
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn[i], *token);
    }
}

#[test]
fn test_parse2() {
    let rpn = RPNExpr::parse_str("\t3.4e-2  -7\n/ abc ").unwrap();
    let expect = RPNExpr(vec![
        Token::Number(3.4e-2),
        Token::Number(-7.0),
        Token::Op(Operator::Div),
        Token::Invalid(format!("abc")),
    ]);
    assert_eq!(rpn, expect);
}

#[test]
fn empty_expressions() {
    assert_eq!(RPNExpr::parse_str(""), Err(EvalErr::EmptyExpression));
    assert_eq!(RPNExpr::parse_str("   "), Err(EvalErr::EmptyExpression));
    assert_eq!(RPNExpr::parse_str("\n\t"), Err(EvalErr::EmptyExpression));
    assert_eq!(validate(&[]), Err(EvalErr::EmptyExpression));
}

#[test]
fn leading_operator() {
    assert_eq!(RPNExpr::parse_str("+ 1 2"), Err(EvalErr::LeadingOperator(Operator::Add)));
    assert_eq!(RPNExpr::parse_str("  / "), Err(EvalErr::LeadingOperator(Operator::Div)));
    assert_eq!(validate(&lexemes(&["-", "abc"])), Err(EvalErr::LeadingOperator(Operator::Sub)));
    // a signed number isn't an operator
    assert_eq!(validate(&lexemes(&["-1", "+"])), Ok(()));
}

#[test]
fn only_first_token_is_checked() {
    // arity and bad tokens are the reducer's business
    assert!(validate(&lexemes(&["1", "+", "+"])).is_ok());
    assert!(validate(&lexemes(&["abc"])).is_ok());
    assert!(validate(&lexemes(&["1", "2", "3"])).is_ok());
    assert!(RPNExpr::parse_str("1 + + abc").is_ok());
}

#[test]
fn parse_from_words() {
    let words = lexemes(&["10", "3", "-"]).into_iter();
    let rpn = RPNExpr::parse(words).unwrap();
    assert_eq!(rpn, RPNExpr::parse_str("10 3 -").unwrap());
}
