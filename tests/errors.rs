use ironstream::combiners::{Count, ToVec};
use ironstream::testing::*;
use ironstream::*;
use std::sync::{Arc, Mutex};

#[test]
fn source_failure_aborts_the_terminal() {
    let p = TestPipeline::new();
    let s = FailingSource::after(vec![1, 2, 3], "disk unplugged").stream(&p);

    let err = s.map(|x: &i32| x * 2).collect_seq().unwrap_err();
    assert!(matches!(err, Error::Source(_)));
    assert!(err.to_string().contains("disk unplugged"));
    assert!(!err.is_caller_error());
}

#[test]
fn source_failure_reaches_every_kind_of_terminal() {
    let p = TestPipeline::new();
    let s = FailingSource::after(vec![4, 5], "gone").stream(&p);

    assert!(s.count().is_err());
    assert!(s.reduce(|a, b| a + b).is_err());
    assert!(s.fold(0, |a, b| a + b).is_err());
    assert!(s.group_by(|x: &i32| x % 2).is_err());
    assert!(s.average(|x: &i32| f64::from(*x)).is_err());
    assert!(s.summary_statistics(|x: &i32| f64::from(*x)).is_err());
    assert!(s.join(",", |x: &i32| x.to_string()).is_err());
    assert!(s.sorted().find_first().is_err());
}

#[test]
fn failure_on_open_is_reported_the_same_way() {
    let p = TestPipeline::new();
    let s: Stream<String> = FailingSource::on_open("permission denied").stream(&p);
    assert!(matches!(s.find_first(), Err(Error::Source(_))));
}

#[test]
fn errors_pass_through_filters_and_skips() {
    let p = TestPipeline::new();
    let s = FailingSource::after(vec![1, 2], "late failure").stream(&p);

    // The predicate never sees the failure, and skip does not count it as skipped.
    assert!(s.filter(|_: &i32| false).collect_seq().is_err());
    assert!(s.skip(5).collect_seq().is_err());
    assert!(s.drop_while(|_: &i32| true).collect_seq().is_err());
    assert!(s.flat_map(|x: &i32| vec![*x, *x]).collect_seq().is_err());
}

#[test]
fn short_circuit_before_the_failure_succeeds() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let s = FailingSource::after(vec![1, 2, 3], "never reached").stream(&p);

    assert_eq!(s.limit(3).collect_seq()?, vec![1, 2, 3]);
    assert_eq!(s.take_while(|x: &i32| *x < 2).collect_seq()?, vec![1]);
    assert_eq!(s.find_first()?, Some(1));
    Ok(())
}

#[test]
fn for_each_sees_elements_before_the_failure() {
    let p = TestPipeline::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let result = FailingSource::after(vec![7, 8], "boom")
        .stream(&p)
        .for_each(|x| sink.lock().unwrap().push(x));

    assert!(result.is_err());
    assert_eq!(*seen.lock().unwrap(), vec![7, 8]);
}

#[test]
fn supplier_errors_keep_their_context() {
    let p = TestPipeline::new();
    let s = from_supplier(&p, "flaky", || {
        Ok(vec![Ok(1), Err(anyhow::anyhow!("read timed out")).map_err(|e| e.context("page 2"))].into_iter())
    });

    let msg = s.collect_seq().unwrap_err().to_string();
    assert!(msg.contains("page 2"), "{msg}");
    assert!(msg.contains("read timed out"), "{msg}");
}

#[test]
fn materialization_cap_is_enforced() -> anyhow::Result<()> {
    let p = TestPipeline::with_cap(3)?;
    let s = from_vec(&p, vec![5, 4, 3, 2, 1]);

    assert!(matches!(
        s.collect_seq(),
        Err(Error::CapacityExceeded { cap: 3, .. })
    ));
    assert!(matches!(
        s.sorted().limit(1).collect_seq(),
        Err(Error::CapacityExceeded { .. })
    ));
    assert!(matches!(
        s.group_by(|x: &i32| *x),
        Err(Error::CapacityExceeded { .. })
    ));
    Ok(())
}

#[test]
fn buffering_combiners_respect_the_cap() -> anyhow::Result<()> {
    let p = TestPipeline::with_cap(3)?;
    let s = from_vec(&p, vec![5, 4, 3, 2, 1]);

    assert!(matches!(
        s.combine(ToVec),
        Err(Error::CapacityExceeded { cap: 3, .. })
    ));
    assert!(matches!(
        s.combine_by(|_: &i32| 0, ToVec),
        Err(Error::CapacityExceeded { cap: 3, .. })
    ));
    assert!(matches!(
        s.join(",", |x: &i32| x.to_string()),
        Err(Error::CapacityExceeded { .. })
    ));

    // Constant-size accumulators stream past the cap.
    assert_eq!(s.combine(Count)?, 5);
    assert_eq!(s.combine_by(|x: &i32| x % 2, Count)?[&1], 3);
    assert_eq!(s.average(|x: &i32| f64::from(*x))?, 3.0);
    assert_eq!(s.limit(3).combine(ToVec)?, vec![5, 4, 3]);
    Ok(())
}

#[test]
fn cap_does_not_affect_streaming_terminals() -> anyhow::Result<()> {
    let p = TestPipeline::with_cap(2)?;
    let s = from_vec(&p, vec![1, 2, 3, 4, 5]);

    assert_eq!(s.count()?, 5);
    assert_eq!(s.reduce(|a, b| a + b)?, Some(15));
    assert_eq!(s.limit(2).collect_seq()?, vec![1, 2]);
    Ok(())
}

#[test]
fn invalid_arguments_are_caller_errors() {
    let p = TestPipeline::new();
    let err = from_vec(&p, vec![1]).try_limit(-1).err().unwrap();
    assert!(err.is_caller_error());
    assert!(err.to_string().contains("limit"));
}
