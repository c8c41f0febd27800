use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use faux_fn::{Behavior, Failure, MockFn};

#[derive(Debug, Clone, PartialEq)]
enum Answer {
    Flag(bool),
    Text(&'static str),
}

#[test]
fn implementation_receives_arguments() {
    let mut mock = MockFn::<(i32, i32), i32>::new();
    mock.set_implementation(|(a, b)| Ok(a - b));

    assert_eq!(mock.invoke((90, 30)), Ok(60));
    assert_eq!(mock.invoke((3, 1)), Ok(2));
}

#[test]
fn implementation_replaces_return_value() {
    let mut add42 = MockFn::<(i32,), i32>::new().named("add42");
    add42.set_return_value(0);
    add42.set_implementation(|(x,)| Ok(x + 42));

    assert_eq!(add42.invoke((1,)), Ok(43));
    assert_eq!(add42.name(), "add42");
}

#[test]
fn once_implementations_then_default() {
    let mut mock = MockFn::<(), Answer>::returning(Answer::Text("default"));
    mock.set_implementation(|()| Ok(Answer::Text("default")))
        .queue_implementation_once(|()| Ok(Answer::Flag(true)))
        .queue_implementation_once(|()| Ok(Answer::Flag(false)));

    assert_eq!(mock.invoke(()), Ok(Answer::Flag(true)));
    assert_eq!(mock.invoke(()), Ok(Answer::Flag(false)));
    assert_eq!(mock.invoke(()), Ok(Answer::Text("default")));
    assert_eq!(mock.invoke(()), Ok(Answer::Text("default")));
    assert_eq!(mock.invoke(()), Ok(Answer::Text("default")));
}

#[test]
fn once_implementation_may_consume_captures() {
    let mut mock = MockFn::<(), Vec<i8>>::new();
    let vec = vec![25];
    mock.queue_implementation_once(move |()| Ok(vec));

    assert_eq!(mock.invoke(()), Ok(vec![25]));
}

#[test]
fn once_implementations_own_non_cloneable_state() {
    struct Receipt(Vec<String>);

    let mut total = MockFn::<(u32,), u32>::returning(1).named("total");
    let receipt = Receipt(vec!["milk".to_string(), "eggs".to_string()]);
    total
        .queue_implementation_with_receiver_once(move |_, (extra,)| {
            let Receipt(items) = receipt;
            Ok(items.len() as u32 + extra)
        })
        .queue_implementation_once(|(extra,)| Ok(extra * 10));

    assert_eq!(total.invoke((1,)), Ok(3));
    assert_eq!(total.invoke((2,)), Ok(20));
    assert!(!total.has_pending_once());
    assert_eq!(total.invoke((3,)), Ok(1));
}

#[test]
fn hand_built_behaviors() {
    let mut double = MockFn::<(i32,), i32>::wrap(|(x,)| Ok(x + x)).named("double");
    double
        .set_behavior(Behavior::implementation(|_, (x,): (i32,)| Ok(-x)))
        .queue_behavior_once(Behavior::PassThrough)
        .queue_behavior_once(Behavior::ReturnValue(0));

    assert_eq!(double.invoke((4,)), Ok(8));
    assert_eq!(double.invoke((4,)), Ok(0));
    assert_eq!(double.invoke((4,)), Ok(-4));

    double.set_behavior(Behavior::PassThrough);
    assert_eq!(double.invoke((5,)), Ok(10));
}

#[test]
fn io_errors_behind_arc() {
    let mut read = MockFn::<(&str,), String, Arc<std::io::Error>>::new().named("read");
    read.set_failure(Arc::new(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "denied",
    )));

    let failure = read.invoke(("/etc/shadow",)).unwrap_err();
    assert_eq!(
        failure.raised().map(|error| error.kind()),
        Some(std::io::ErrorKind::PermissionDenied)
    );
    assert_eq!(failure.to_string(), "denied");
    assert!(read.calls().all(|call| call.failed()));
}

#[test]
fn implementation_keeps_state_between_calls() {
    let counter = Arc::new(AtomicUsize::new(0));
    let seen = counter.clone();

    let mut mock = MockFn::<(), usize>::new();
    mock.set_implementation(move |()| Ok(seen.fetch_add(1, Ordering::SeqCst) + 1));

    assert_eq!(mock.invoke(()), Ok(1));
    assert_eq!(mock.invoke(()), Ok(2));
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[test]
fn failing_implementation_is_raised_and_recorded() {
    let mut compile = MockFn::<(&str,), (), String>::new().named("compile");
    compile
        .queue_return_value_once(())
        .set_implementation(|(jdk,)| Err(format!("you are using the wrong JDK: {}", jdk)));

    assert_eq!(compile.invoke(("11",)), Ok(()));
    let failure = compile.invoke(("8",)).unwrap_err();
    assert_eq!(
        failure,
        Failure::Raised("you are using the wrong JDK: 8".to_string())
    );

    let results: Vec<_> = compile.results().collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], &Ok(()));
    assert_eq!(results[1], &Err(failure));
    assert!(compile.call(1).unwrap().failed());
}

#[test]
fn failure_helpers() {
    let mut mock = MockFn::<(), u8, &str>::returning(1);
    mock.queue_failure_once("once").set_failure("always");

    assert_eq!(mock.invoke(()), Err(Failure::Raised("once")));
    assert_eq!(mock.invoke(()), Err(Failure::Raised("always")));
    assert_eq!(mock.invoke(()), Err(Failure::Raised("always")));
    assert!(mock.calls().all(|call| call.failed()));
}

#[test]
fn callback_argument() {
    // the mock calls back into code under test
    let mut mock = MockFn::<(fn(Option<&str>, bool) -> bool,), bool>::new();
    mock.set_implementation(|(cb,)| Ok(cb(None, true)));

    fn check(error: Option<&str>, value: bool) -> bool {
        error.is_none() && value
    }

    assert_eq!(mock.invoke((check,)), Ok(true));
}
