use ironstream::*;

#[test]
fn defaults() {
    let opts = PipelineOptions::default();
    assert_eq!(opts.name, "pipeline");
    assert_eq!(opts.inspect_limit, 10);
    assert_eq!(opts.max_materialized, None);
    assert!(opts.validate().is_ok());
    assert_eq!(Pipeline::default().options(), &opts);
}

#[test]
fn json_fills_in_missing_fields() -> anyhow::Result<()> {
    let opts = PipelineOptions::from_json(r#"{ "max_materialized": 50 }"#)?;
    assert_eq!(opts.name, "pipeline");
    assert_eq!(opts.max_materialized, Some(50));
    Ok(())
}

#[test]
fn json_round_trip() -> anyhow::Result<()> {
    let opts = PipelineOptions::default().with_name("nightly").with_max_materialized(1_000);
    let back = PipelineOptions::from_json(&serde_json::to_string(&opts)?)?;
    assert_eq!(back, opts);
    Ok(())
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = PipelineOptions::from_json("{ name: ").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.is_caller_error());
}

#[test]
fn invalid_values_are_rejected() {
    assert!(matches!(
        PipelineOptions::from_json(r#"{ "name": "  " }"#),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        Pipeline::with_options(PipelineOptions::default().with_max_materialized(0)),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn streams_share_their_pipeline_options() -> anyhow::Result<()> {
    let p = Pipeline::with_options(PipelineOptions::default().with_name("friends"))?;
    let s = from_vec(&p, vec![1, 2, 3]).limit(1);
    assert_eq!(s.pipeline().options().name, "friends");
    Ok(())
}
