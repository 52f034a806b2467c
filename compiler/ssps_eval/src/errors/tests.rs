use super::*;
use pretty_assertions::assert_eq;

#[test]
fn headline_names_operation_and_failure() {
    let err = division_by_zero(Value::Int(1), Value::Int(0));
    assert_eq!(err.to_string(), "Error in div: dividing by zero.");
    assert_eq!(err.operands, vec![Value::Int(1), Value::Int(0)]);
}

#[test]
fn mismatch_messages() {
    let err = type_mismatch(
        "add",
        Mismatch::NonInt,
        vec![Value::Int(1), Value::Bool(true)],
    );
    assert_eq!(err.to_string(), "Error in add: non-int operand encountered.");
    assert_eq!(
        float_operand("2.5").to_string(),
        "Error in op_push: float argument encountered (2.5)."
    );
}

#[test]
fn undefined_name_mentions_scoping() {
    let err = undefined_name("f", Scoping::Static);
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedName {
            name: "f".into(),
            scoping: Scoping::Static,
        }
    );
    assert_eq!(
        err.to_string(),
        "Error in lookup: name 'f' is undefined in current static scope."
    );
}

#[test]
fn lex_errors_convert() {
    let err = EvalError::from(LexError::UnmatchedClose { offset: 4 });
    assert_eq!(err.operation, "lex");
    assert_eq!(err.to_string(), "Error in lex: unmatched '}' at byte 4.");
}

#[test]
fn first_dump_is_kept() {
    let first = StackDump {
        operands: vec![Value::Int(1)],
        ..StackDump::default()
    };
    let err = operand_underflow()
        .with_dump(|| first.clone())
        .with_dump(StackDump::default);
    assert_eq!(err.dump, Some(first));
}
