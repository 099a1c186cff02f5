use evil::{
    Error, SyntaxError, tokenize,
    preset::maths::{self, Number},
};
use proptest::prelude::*;

const INFIX: [&str; 12] = ["^", "*", "/", "+", "-", "==", "<>", ">", "<", ">=", "<=", ","];

/// Joins operands and `+`/`*` operators into `a op b op c ...`.
fn join(operands: &[i64], operators: &[bool]) -> String {
    let mut expression = operands[0].to_string();
    for (operand, &is_product) in operands[1..].iter().zip(operators) {
        expression.push_str(if is_product { " * " } else { " + " });
        expression.push_str(&operand.to_string());
    }
    expression
}

/// Evaluates `a op b op c ...` with products binding tighter than sums.
fn sum_of_products(operands: &[i64], operators: &[bool]) -> i64 {
    let mut total = 0;
    let mut product = operands[0];
    for (&operand, &is_product) in operands[1..].iter().zip(operators) {
        if is_product {
            product *= operand;
        } else {
            total += product;
            product = operand;
        }
    }
    total + product
}

fn arithmetic_expression() -> impl Strategy<Value = (Vec<i64>, Vec<bool>)> {
    prop::collection::vec(0i64..100, 1..8).prop_flat_map(|operands| {
                                              let n = operands.len() - 1;
                                              (Just(operands), prop::collection::vec(any::<bool>(), n))
                                          })
}

fn syntax_error(expression: &str) -> Option<SyntaxError> {
    match maths::evaluate(expression) {
        Err(Error::Syntax(e)) => Some(e),
        _ => None,
    }
}

proptest! {
    #[test]
    fn earlier_operators_bind_tighter((operands, operators) in arithmetic_expression()) {
        let expression = join(&operands, &operators);
        prop_assert_eq!(maths::evaluate(&expression).unwrap(),
                        Number::Integer(sum_of_products(&operands, &operators)));
    }

    #[test]
    fn parentheses_do_not_change_the_value((operands, operators) in arithmetic_expression()) {
        let expression = join(&operands, &operators);
        let plain = maths::evaluate(&expression).map_err(|e| e.to_string());
        prop_assert_eq!(maths::evaluate(&format!("({expression})")).map_err(|e| e.to_string()),
                        plain.clone());
        prop_assert_eq!(maths::evaluate(&format!("(({expression}))")).map_err(|e| e.to_string()),
                        plain);
    }

    #[test]
    fn equal_infix_operators_associate_left(operands in prop::collection::vec(0i64..1000, 1..8)) {
        let expression = operands.iter().map(i64::to_string).collect::<Vec<_>>().join(" - ");
        let expected = operands[1..].iter().fold(operands[0], |acc, n| acc - n);
        prop_assert_eq!(maths::evaluate(&expression).unwrap(), Number::Integer(expected));
    }

    #[test]
    fn infix_operators_need_both_operands(operator in prop::sample::select(INFIX.to_vec()),
                                          n in 0i64..100) {
        prop_assert_eq!(syntax_error(&format!("{operator} {n}")),
                        Some(SyntaxError::LeadingOperator { operator: operator.to_string() }));
        prop_assert_eq!(syntax_error(&format!("{n} {operator}")),
                        Some(SyntaxError::TrailingOperator { operator: operator.to_string() }));
        prop_assert_eq!(syntax_error(&format!("({n} {operator}) {n}")),
                        Some(SyntaxError::TrailingOperator { operator: operator.to_string() }));
    }

    #[test]
    fn adjacent_infix_operators_face_each_other(left in prop::sample::select(INFIX.to_vec()),
                                                right in prop::sample::select(INFIX.to_vec())) {
        prop_assert_eq!(syntax_error(&format!("1 {left} {right} 2")),
                        Some(SyntaxError::FacingOperators { left:  left.to_string(),
                                                            right: right.to_string(), }));
    }

    #[test]
    fn tokens_cover_the_input_without_whitespace(expression in "[ab+<=() \t]{0,40}") {
        let operators = ["(", ")", "+", "<", "<="];
        let joined: String = tokenize(&expression, &operators).collect();
        let expected: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn longest_operator_wins(expression in "[ab<=]{0,40}") {
        let operators = ["<", "<="];
        let tokens: Vec<&str> = tokenize(&expression, &operators).collect();
        for pair in tokens.windows(2) {
            prop_assert!(!(pair[0] == "<" && pair[1].starts_with('=')),
                         "'<=' split in {:?}", tokens);
        }
    }
}
