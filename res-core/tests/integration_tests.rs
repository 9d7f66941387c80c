// Integration tests for complete Res programs
// Each test runs a program through the public API, the way a host embeds
// the engine, and checks the stacks, output and complaints it leaves behind.

use std::rc::Rc;

use res_core::{
    BufferLogger, Interpreter, Item, Namespace, Operator, RunOutcome, default_namespace,
};

fn run_program(text: &str) -> (Interpreter, BufferLogger, RunOutcome) {
    let log = BufferLogger::new();
    let mut interp = Interpreter::with_defaults(text, Box::new(log.clone()));
    let outcome = interp.run(Some(1_000_000));
    (interp, log, outcome)
}

fn stack_of(text: &str) -> String {
    let (interp, log, outcome) = run_program(text);
    assert_eq!(
        outcome,
        RunOutcome::Finished,
        "program {:?} did not finish: {:?}",
        text,
        log.errors()
    );
    interp.display_stack()
}

#[test]
fn test_arithmetic_and_swap() {
    assert_eq!(stack_of("3 4 +"), "[7]");
    assert_eq!(stack_of("1 2 \\"), "[2 1]");
    assert_eq!(stack_of("#d100 #xff+"), "[355]");
}

#[test]
fn test_block_introspection() {
    assert_eq!(
        stack_of("{1 2 +}!"),
        "[['1' ' ' '2' ' ' '+'] ['{' '1' ' ' '2' ' ' '+' '}' '!']]"
    );
}

#[test]
fn test_store_and_read_back() {
    assert_eq!(stack_of("5\"AB\"S AB"), "[5]");
    // A stored code block is data, not an operator
    assert_eq!(stack_of("{1}'VS V"), "[['1']]");
}

#[test]
fn test_undefined_reference_halts() {
    let (interp, log, outcome) = run_program("1 2Q3");
    assert_eq!(outcome, RunOutcome::Errored);
    assert_eq!(log.errors(), vec!["[WHOOPS] (4): undefined reference Q".to_string()]);
    assert_eq!(interp.display_stack(), "[1 2]");
    assert!(interp.has_errored());
}

#[test]
fn test_grab_then_splat() {
    assert_eq!(stack_of("1 2 3 3$G"), "[[1 2 3]]");
    assert_eq!(stack_of("1 2 3 3$G$S"), "[1 2 3]");
}

#[test]
fn test_recursive_factorial() {
    // Y ( n -- n! ) for n >= 1, defined in Res itself
    let program = r#"":1={}{:1-Y*}?E"'Y&O 5Y"#;
    assert_eq!(stack_of(program), "[120]");
}

#[test]
fn test_labeled_loop_counts_to_ten() {
    assert_eq!(stack_of("0{1+:a={'LR}z?E!'LF}'LF"), "[10]");
}

#[test]
fn test_tail_recursion_runs_flat() {
    // Z ( n -- 0 ) counts down by calling itself as its last act
    let log = BufferLogger::new();
    let mut interp =
        Interpreter::with_defaults(r#"":{1-Z}z?E"'Z&O #d1000 Z"#, Box::new(log.clone()));

    let mut deepest = 0;
    while !interp.step() {
        deepest = deepest.max(interp.blocks.len());
    }

    assert_eq!(interp.outcome(), RunOutcome::Finished);
    assert_eq!(interp.display_stack(), "[0]");
    assert!(deepest <= 3, "block stack grew to {}", deepest);
}

#[test]
fn test_store_delete_loop_reuses_namespace_tables() {
    // Each pass stores to a fresh name and deletes it again
    let log = BufferLogger::new();
    let mut interp = Interpreter::with_defaults(
        "0{1+5'qS'q&x:#d1000={'LR}z?E!'LF}'LF",
        Box::new(log.clone()),
    );
    let before = interp.namespace.table_count();

    assert_eq!(interp.run(None), RunOutcome::Finished);
    assert_eq!(interp.display_stack(), "[1000]");
    assert_eq!(interp.namespace.table_count(), before);
}

#[test]
fn test_derived_read_mode() {
    let program = concat!(
        "\":'.={x&C}{o}?E\"",
        "\"[\"",
        "\"]\"",
        "'U&R",
        "UAB. 1",
    );
    assert_eq!(stack_of(program), "[[65 66] 1]");
}

#[test]
fn test_scoped_stack() {
    assert_eq!(stack_of("[3 1 2](\\)"), "[[3 2 1]]");
    let (_, log, outcome) = run_program("1)");
    assert_eq!(outcome, RunOutcome::Errored);
    assert_eq!(log.errors().len(), 1);
}

#[test]
fn test_suspend_and_resume_matches_uninterrupted_run() {
    let program = r#"":1={}{:1-Y*}?E"'Y&O 6Y"#;
    let mut interp = Interpreter::with_defaults(program, Box::new(BufferLogger::new()));

    let mut slices = 0;
    while interp.run(Some(5)) == RunOutcome::Suspended {
        slices += 1;
    }

    assert!(slices > 1);
    assert_eq!(interp.outcome(), RunOutcome::Finished);
    assert_eq!(interp.display_stack(), stack_of(program));
}

#[test]
fn test_continue_keeps_stack_and_names() {
    let log = BufferLogger::new();
    let mut interp = Interpreter::with_defaults("5'VS 1", Box::new(log.clone()));
    assert_eq!(interp.run(None), RunOutcome::Finished);

    interp.continue_with("V+");
    assert_eq!(interp.run(None), RunOutcome::Finished);
    assert_eq!(interp.display_stack(), "[6]");
}

#[test]
fn test_continue_after_error() {
    let log = BufferLogger::new();
    let mut interp = Interpreter::with_defaults("1Q", Box::new(log.clone()));
    assert_eq!(interp.run(None), RunOutcome::Errored);

    interp.continue_with("2+");
    assert_eq!(interp.run(None), RunOutcome::Finished);
    assert_eq!(interp.display_stack(), "[3]");
}

#[test]
fn test_reset_restores_namespace() {
    let log = BufferLogger::new();
    let mut interp = Interpreter::with_defaults("5'VS", Box::new(log.clone()));
    assert_eq!(interp.run(None), RunOutcome::Finished);

    // The stored name belonged to the run that was thrown away
    interp.reset(Some("V"), None);
    assert_eq!(interp.run(None), RunOutcome::Errored);
    assert_eq!(log.errors(), vec!["[WHOOPS] (1): undefined reference V".to_string()]);

    interp.reset(Some("7"), None);
    assert_eq!(interp.run(None), RunOutcome::Finished);
    assert_eq!(interp.display_stack(), "[7]");
}

#[test]
fn test_reset_with_new_template() {
    let mut template = Namespace::new();
    let root = template.root();
    template.insert(root, 'x', Item::Number(42.0));
    template.insert(root, 'd', Operator::derived(res_core::value::code_from_str("xx")));

    let mut interp = Interpreter::with_defaults("1", Box::new(BufferLogger::new()));
    interp.reset(Some("d"), Some(Rc::new(template)));
    assert_eq!(interp.run(None), RunOutcome::Finished);
    assert_eq!(interp.display_stack(), "[42 42]");
}

#[test]
fn test_template_is_never_modified() {
    let template = Rc::new(default_namespace());
    let mut first = Interpreter::new("7'1S", template.clone(), Box::new(BufferLogger::new()));
    assert_eq!(first.run(None), RunOutcome::Finished);

    let mut second = Interpreter::new("1", template, Box::new(BufferLogger::new()));
    assert_eq!(second.run(None), RunOutcome::Finished);
    assert_eq!(second.display_stack(), "[1]");
}

#[test]
fn test_output_goes_to_logger() {
    let (_, log, outcome) = run_program("\"Hello, you\"P nP 7 p");
    assert_eq!(outcome, RunOutcome::Finished);
    assert_eq!(log.output().concat(), "Hello, you\n7");
}

#[test]
fn test_host_can_halt() {
    let log = BufferLogger::new();
    let mut interp = Interpreter::with_defaults("1 2 3", Box::new(log.clone()));
    interp.run(Some(1));
    interp.halt();
    assert!(interp.is_halted());
    assert_eq!(interp.run(None), RunOutcome::Errored);
    assert_eq!(interp.display_stack(), "[1]");
}
