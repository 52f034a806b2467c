use std::sync::Arc;

use super::*;
use crate::errors::{EvalErrorKind, Mismatch};
use crate::print_handler::buffer_handler;
use crate::scope::Scoping;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ssps_lexer::LexError;

const BOTH: [Scoping; 2] = [Scoping::Dynamic, Scoping::Static];

fn run_in(scoping: Scoping, source: &str) -> (EvalResult, String) {
    run_config(EvalConfig::default().with_scoping(scoping), source)
}

fn run_config(config: EvalConfig, source: &str) -> (EvalResult, String) {
    let handler = buffer_handler();
    let mut interp = Interpreter::with_print_handler(config, Arc::clone(&handler));
    let result = interp.run(source);
    (result, handler.get_output())
}

fn output(source: &str) -> String {
    let (result, out) = run_in(Scoping::Dynamic, source);
    assert!(result.is_ok(), "{source:?} failed: {result:?}");
    out
}

fn error_kind(source: &str) -> Option<EvalErrorKind> {
    run_in(Scoping::Dynamic, source).0.err().map(|e| e.kind)
}

fn stack_after(source: &str) -> Vec<Value> {
    let mut interp = Interpreter::with_print_handler(EvalConfig::default(), buffer_handler());
    let result = interp.run(source);
    assert!(result.is_ok(), "{source:?} failed: {result:?}");
    let mut values: Vec<Value> = interp.operands.iter_top_down().cloned().collect();
    values.reverse();
    values
}

// Arithmetic and printing

#[test]
fn add_and_print_in_both_modes() {
    for scoping in BOTH {
        let (result, out) = run_in(scoping, "3 4 add =");
        assert!(result.is_ok());
        assert_eq!(out, "7\n");
    }
}

#[test]
fn bound_value_is_pushed_not_called() {
    for scoping in BOTH {
        let (result, out) = run_in(scoping, "/x 5 def x x mul =");
        assert!(result.is_ok());
        assert_eq!(out, "25\n");
    }
}

#[test]
fn boolean_and() {
    assert_eq!(output("true false and ="), "false\n");
    assert_eq!(output("true false or ="), "true\n");
    assert_eq!(output("false not ="), "true\n");
}

#[test]
fn operand_order_for_binary_operators() {
    assert_eq!(output("10 3 sub ="), "7\n");
    assert_eq!(output("1 2 lt ="), "true\n");
    assert_eq!(output("1 2 gt ="), "false\n");
}

#[test]
fn div_floors_toward_negative_infinity() {
    assert_eq!(output("7 2 div ="), "3\n");
    assert_eq!(output("-7 2 div ="), "-4\n");
    assert_eq!(output("7 -2 div ="), "-4\n");
    assert_eq!(output("-7 -2 div ="), "3\n");
    assert_eq!(output("-8 2 div ="), "-4\n");
}

#[test]
fn divide_by_zero_prints_nothing() {
    let (result, out) = run_in(Scoping::Dynamic, "1 0 div");
    let err = result.err();
    assert_eq!(err.as_ref().map(|e| e.kind.clone()), Some(EvalErrorKind::DivideByZero));
    assert_eq!(
        err.map(|e| e.operands),
        Some(vec![Value::Int(1), Value::Int(0)])
    );
    assert_eq!(out, "");
}

#[test]
fn overflow_is_an_error() {
    assert_eq!(
        error_kind("9223372036854775807 1 add"),
        Some(EvalErrorKind::IntegerOverflow)
    );
    assert_eq!(
        error_kind("-9223372036854775808 -1 div"),
        Some(EvalErrorKind::IntegerOverflow)
    );
}

#[test]
fn eq_accepts_matching_pairs_only() {
    assert_eq!(output("2 2 eq ="), "true\n");
    assert_eq!(output("true false eq ="), "false\n");
    assert_eq!(
        error_kind("1 true eq"),
        Some(EvalErrorKind::TypeMismatch(Mismatch::NonMatching))
    );
}

#[test]
fn type_mismatch_reports_both_operands() {
    let (result, _) = run_in(Scoping::Dynamic, "1 true add");
    let err = result.err();
    assert_eq!(
        err.as_ref().map(|e| (e.operation, e.kind.clone())),
        Some(("add", EvalErrorKind::TypeMismatch(Mismatch::NonInt)))
    );
    assert_eq!(
        err.map(|e| e.operands),
        Some(vec![Value::Int(1), Value::Bool(true)])
    );
}

#[test]
fn logic_on_ints_is_mismatch() {
    assert_eq!(
        error_kind("1 2 and"),
        Some(EvalErrorKind::TypeMismatch(Mismatch::NonBool))
    );
    assert_eq!(
        error_kind("1 not"),
        Some(EvalErrorKind::TypeMismatch(Mismatch::NonBool))
    );
}

#[test]
fn float_is_rejected_on_push() {
    let (result, _) = run_in(Scoping::Dynamic, "1 2.5 add");
    let err = result.err();
    assert_eq!(
        err.map(|e| (e.operation, e.kind)),
        Some((
            "op_push",
            EvalErrorKind::TypeMismatch(Mismatch::Float("2.5".into()))
        ))
    );
}

#[test]
fn underflow_on_empty_stack() {
    assert_eq!(
        error_kind("="),
        Some(EvalErrorKind::StackUnderflow { stack: "operand" })
    );
    assert_eq!(
        error_kind("1 exch"),
        Some(EvalErrorKind::StackUnderflow { stack: "operand" })
    );
}

// Stack manipulation

#[test]
fn dup_exch_pop() {
    assert_eq!(stack_after("1 dup"), vec![Value::Int(1), Value::Int(1)]);
    assert_eq!(stack_after("1 2 exch"), vec![Value::Int(2), Value::Int(1)]);
    assert_eq!(stack_after("1 2 pop"), vec![Value::Int(1)]);
}

#[test]
fn literals_print_in_source_form() {
    assert_eq!(output("/x ="), "/x\n");
    assert_eq!(output("{1 2 add} ="), "{1 2 add}\n");
    assert_eq!(output("{ 1 { 2 } } ="), "{1 { 2 }}\n");
}

#[test]
fn comments_are_ignored() {
    assert_eq!(output("3 % not code 9 9\n4 add ="), "7\n");
}

#[test]
fn stack_operator_dump_dynamic() {
    assert_eq!(
        output("1 2 /x 3 def stack"),
        "==============\n\
         2\n\
         1\n\
         ==============\n\
         ---- 0 ----\n\
         x [3]\n\
         ==============\n"
    );
}

#[test]
fn stack_operator_dump_static_shows_links() {
    let (result, out) = run_in(Scoping::Static, "/f { /y 1 def stack } def f");
    assert!(result.is_ok());
    assert_eq!(
        out,
        "==============\n\
         ==============\n\
         ---- 1 ---- 0 ----\n\
         y [1]\n\
         ---- 0 ---- none ----\n\
         f [{/y 1 def stack}]\n\
         ==============\n"
    );
}

#[test]
fn stack_operator_mutates_nothing() {
    assert_eq!(stack_after("1 2 stack"), vec![Value::Int(1), Value::Int(2)]);
}

// Definitions and calls

#[test]
fn def_requires_name_key() {
    let (result, _) = run_in(Scoping::Dynamic, "5 6 def");
    assert_eq!(
        result.err().map(|e| (e.kind, e.operands)),
        Some((EvalErrorKind::MalformedName, vec![Value::Int(5)]))
    );
}

#[test]
fn undefined_name_reports_mode() {
    for scoping in BOTH {
        let (result, _) = run_in(scoping, "nothing");
        assert_eq!(
            result.err().map(|e| e.kind),
            Some(EvalErrorKind::UndefinedName {
                name: "nothing".into(),
                scoping
            })
        );
    }
}

#[test]
fn unknown_symbol_is_an_undefined_call() {
    assert!(matches!(
        error_kind("1 2 +"),
        Some(EvalErrorKind::UndefinedName { name, .. }) if name == "+"
    ));
}

#[test]
fn procedure_call_runs_body() {
    assert_eq!(output("/sq { dup mul } def 6 sq ="), "36\n");
}

#[test]
fn recursive_procedure() {
    for scoping in BOTH {
        let (result, out) = run_in(
            scoping,
            "/fact { dup 1 gt { dup 1 sub fact mul } if } def 5 fact =",
        );
        assert!(result.is_ok(), "{scoping}: {result:?}");
        assert_eq!(out, "120\n");
    }
}

#[test]
fn call_frames_are_local() {
    assert_eq!(
        error_kind("/f { /local 1 def } def f local"),
        Some(EvalErrorKind::UndefinedName {
            name: "local".into(),
            scoping: Scoping::Dynamic
        })
    );
}

#[test]
fn static_scoping_follows_call_site_link() {
    let program = "/x 4 def /g { x = } def /f { /x 7 def g } def f";
    let (dynamic, out) = run_in(Scoping::Dynamic, program);
    assert!(dynamic.is_ok());
    assert_eq!(out, "7\n");

    let (stat, out) = run_in(Scoping::Static, program);
    assert!(stat.is_ok());
    assert_eq!(out, "4\n");
}

#[test]
fn static_procedure_found_in_caller_frame_links_there() {
    // h is bound in f's frame, so h's frame links to f's frame and sees y.
    let program = "/f { /y 2 def /h { y = } def h } def f";
    for scoping in BOTH {
        let (result, out) = run_in(scoping, program);
        assert!(result.is_ok(), "{scoping}: {result:?}");
        assert_eq!(out, "2\n");
    }
}

#[test]
fn static_link_comes_from_topmost_binding() {
    // The static chain finds f in frame 0, but g's frame also binds f, so the
    // new frame links to g's frame and x resolves to g's 10.
    let program =
        "/x 1 def /f { x = } def /h { f } def /g { /x 10 def /f { 99 = } def h } def g";
    let (result, out) = run_in(Scoping::Static, program);
    assert!(result.is_ok(), "{result:?}");
    assert_eq!(out, "10\n");

    let (result, out) = run_in(Scoping::Dynamic, program);
    assert!(result.is_ok(), "{result:?}");
    assert_eq!(out, "99\n");
}

#[test]
fn frames_are_popped_after_calls() {
    let mut interp = Interpreter::with_print_handler(EvalConfig::default(), buffer_handler());
    assert!(interp.run("/f { /a 1 def } def f f").is_ok());
    assert_eq!(interp.dicts.depth(), 1);
    assert_eq!(interp.call_stack.depth(), 0);
}

#[test]
fn error_dump_is_taken_inside_the_failing_frame() {
    let mut interp = Interpreter::with_print_handler(EvalConfig::default(), buffer_handler());
    let err = interp.run("/f { /n 1 def 1 0 div } def f").err();
    let dump = err.and_then(|e| e.dump);
    assert_eq!(dump.as_ref().map(|d| d.frames.len()), Some(2));
    assert_eq!(dump.map(|d| d.calls), Some(vec!["f".to_string()]));
    // The guard still unwound the frame.
    assert_eq!(interp.dicts.depth(), 1);
    assert_eq!(interp.call_stack.depth(), 0);
}

#[test]
fn report_fatal_writes_to_handler() {
    let handler = buffer_handler();
    let mut interp = Interpreter::with_print_handler(EvalConfig::default(), Arc::clone(&handler));
    if let Err(err) = interp.run("1 0 div") {
        interp.report_fatal(&err);
    }
    let out = handler.get_output();
    assert!(out.starts_with("Error in div: dividing by zero.\nProblem Arguments: 1, 0\n"));
    assert!(out.ends_with("Exiting program.\n"));
}

// Conditionals

#[test]
fn if_runs_body_only_when_true() {
    assert_eq!(output("true { 1 = } if false { 2 = } if"), "1\n");
}

#[test]
fn ifelse_picks_branch() {
    assert_eq!(output("1 2 lt { /lt } { /ge } ifelse ="), "/lt\n");
    assert_eq!(output("3 2 lt { /lt } { /ge } ifelse ="), "/ge\n");
}

#[test]
fn conditional_body_runs_in_current_frame() {
    assert_eq!(output("true { /z 9 def } if z ="), "9\n");
}

#[test]
fn if_requires_bool_condition() {
    assert_eq!(
        error_kind("1 { 2 } if"),
        Some(EvalErrorKind::TypeMismatch(Mismatch::NonBool))
    );
}

#[test]
fn if_requires_procedure_body() {
    assert_eq!(
        error_kind("true 5 if"),
        Some(EvalErrorKind::TypeMismatch(Mismatch::NonProcedure))
    );
}

// Lexing

#[test]
fn unbalanced_braces_are_lex_errors() {
    assert_eq!(
        error_kind("{ 1 2"),
        Some(EvalErrorKind::Lex(LexError::UnclosedProcedure { offset: 0 }))
    );
    assert_eq!(
        error_kind("1 }"),
        Some(EvalErrorKind::Lex(LexError::UnmatchedClose { offset: 2 }))
    );
}

#[test]
fn body_lex_errors_surface_when_called() {
    let mut interp = Interpreter::with_print_handler(EvalConfig::default(), buffer_handler());
    assert!(interp.run("/f { 99999999999999999999 } def").is_ok());
    let err = interp.interpret("f").err();
    assert!(matches!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::Lex(LexError::IntegerOutOfRange { .. }))
    ));
}

// Depth and tracing

#[test]
fn max_depth_stops_runaway_recursion() {
    let config = EvalConfig::default().with_max_depth(Some(3));
    let (result, _) = run_config(config, "/loop { loop } def loop");
    assert_eq!(
        result.err().map(|e| e.kind),
        Some(EvalErrorKind::RecursionLimit { max: 3 })
    );
}

#[test]
fn deep_recursion_without_limit() {
    assert_eq!(
        output("/down { dup 0 gt { 1 sub down } if } def 5000 down ="),
        "0\n"
    );
}

#[test]
fn trace_brackets_each_operator() {
    let config = EvalConfig::default().with_trace(true);
    let (result, out) = run_config(config, "3 4 add =");
    assert!(result.is_ok());
    assert!(out.contains("Code: \"3 4 add =\"\n"));
    assert!(out.contains(
        "***add performed***\nOperand Stack (Before): 3, 4\nOperand Stack (After): 7\n"
    ));
    assert!(out.contains("***= performed***\nOperand Stack (Before): 7\n7\nOperand Stack (After): \n"));
}

#[test]
fn trace_reports_static_links() {
    let config = EvalConfig::default()
        .with_scoping(Scoping::Static)
        .with_trace(true);
    let (result, out) = run_config(config, "/f { 1 } def f");
    assert!(result.is_ok());
    assert!(out.contains(
        "Name being looked up: \"f\"\n\
         Dictionary stack: ({f: {1}}, none)\n\
         Code found: \"1\"\n\
         Link made: index 0\n"
    ));
}

#[test]
fn trace_header_shows_dictionaries() {
    let config = EvalConfig::default()
        .with_scoping(Scoping::Static)
        .with_trace(true);
    let (result, out) = run_config(config, "/f { 2 } def f");
    assert!(result.is_ok());
    assert!(out.contains(
        "Code: \"2\"\n\
         Operand stack: \n\
         Dictionary stack: ({f: {2}}, none), ({}, 0)\n\
         Top dictionary: ({}, 0)\n\n"
    ));
}

#[test]
fn trace_brackets_def_with_top_dictionary() {
    let config = EvalConfig::default().with_trace(true);
    let (result, out) = run_config(config, "/x 5 def");
    assert!(result.is_ok());
    assert!(out.contains(
        "***def performed***\n\
         Operand Stack (Before): /x, 5\n\
         Top Dictionary and Link (Before): ({}, none)\n\
         Operand Stack (After): \n\
         Top Dictionary and Link (After): ({x: 5}, none)\n\n"
    ));
    assert!(!out.contains("Top Dictionary and Link (Before): ({x: 5}"));
}

#[test]
fn floor_div_helper() {
    assert_eq!(operators::floor_div(i64::MIN, -1), None);
    assert_eq!(operators::floor_div(-1, 3), Some(-1));
    assert_eq!(operators::floor_div(0, -3), Some(0));
}

proptest! {
    #[test]
    fn div_is_floor_division(
        a in -1_000_000_000_000i64..1_000_000_000_000,
        b in prop_oneof![-1_000_000i64..0, 1i64..1_000_000],
    ) {
        let stack = stack_after(&format!("{a} {b} div"));
        prop_assert_eq!(stack.len(), 1);
        let q = i128::from(stack[0].as_int().unwrap_or_default());
        let r = i128::from(a) - q * i128::from(b);
        prop_assert!(r == 0 || (r.signum() == i128::from(b).signum() && r.abs() < i128::from(b).abs()));
    }

    #[test]
    fn dup_pop_is_identity(values in prop::collection::vec(any::<i64>(), 1..8)) {
        let pushes: Vec<String> = values.iter().map(ToString::to_string).collect();
        let program = pushes.join(" ");
        prop_assert_eq!(stack_after(&format!("{program} dup pop")), stack_after(&program));
    }

    #[test]
    fn exch_exch_is_identity(values in prop::collection::vec(any::<i64>(), 2..8)) {
        let pushes: Vec<String> = values.iter().map(ToString::to_string).collect();
        let program = pushes.join(" ");
        prop_assert_eq!(stack_after(&format!("{program} exch exch")), stack_after(&program));
    }
}
