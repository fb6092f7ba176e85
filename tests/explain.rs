use ironstream::testing::*;
use ironstream::*;

#[test]
fn plan_walks_back_to_the_source() {
    let p = TestPipeline::new();
    let s = from_vec(&p, friends())
        .filter(|n: &String| n.len() == 4)
        .map(|n: &String| n.to_lowercase())
        .limit(2);

    let plan = s.plan();
    let kinds: Vec<_> = plan.chain.iter().map(|(_, node)| node.kind.name()).collect();
    assert_eq!(kinds, ["Source", "Filter", "Map", "Limit"]);
    assert_eq!(plan.chain.last().map(|(id, _)| *id), Some(s.node_id()));
}

#[test]
fn build_plan_finds_live_nodes_by_id() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let s = from_vec(&p, vec![1, 2, 3]).skip(1).map(|x: &i32| x * 2);

    let plan = build_plan(&p, s.node_id())?;
    assert_eq!(plan.len(), 3);
    assert_eq!(plan.chain[0].1.kind, NodeKind::Source { bounded: true });
    Ok(())
}

#[test]
fn branches_only_see_their_own_ancestry() {
    let p = TestPipeline::new();
    let base = from_vec(&p, vec![1, 2, 3]);
    let left = base.filter(|x: &i32| *x > 1);
    let right = base.map(|x: &i32| x + 1).sorted();

    assert_eq!(left.plan().len(), 2);
    assert_eq!(right.plan().len(), 3);
    assert_eq!(p.node_count(), 4);
}

#[test]
fn explain_counts_barriers_and_short_circuits() {
    let p = TestPipeline::new();
    let s = from_vec(&p, people())
        .sort_by(OrderingKey::by(|person: &Person| person.age))
        .take_while(|person: &Person| person.age < 30)
        .limit(2);

    let ex = s.explain();
    assert_eq!(ex.steps.len(), 4);
    assert_eq!(ex.barriers, 1);
    assert_eq!(ex.short_circuits, 2);
    assert!(ex.warnings.is_empty());
    assert!(ex.steps[1].is_barrier);

    let text = ex.to_string();
    assert!(text.contains("[BARRIER]"));
    assert!(text.contains("keep at most 2 elements"));
}

#[test]
fn sorting_an_unbounded_source_is_flagged() {
    let p = TestPipeline::new();
    let s = iterate(&p, 0u32, |x| x + 1).sorted().limit(3);

    let ex = s.explain();
    assert_eq!(ex.warnings.len(), 1);
    assert!(ex.warnings[0].contains("unbounded"));
}

#[test]
fn limiting_an_unbounded_source_first_is_fine() {
    let p = TestPipeline::new();
    let s = iterate(&p, 0u32, |x| x + 1).limit(3).sorted();
    assert!(s.explain().warnings.is_empty());
}

#[test]
fn unknown_node_is_an_invalid_argument() {
    let p = TestPipeline::new();
    let foreign = from_vec(&Pipeline::default(), vec![1]).map(|x: &i32| *x).map(|x: &i32| *x);
    assert!(matches!(
        build_plan(&p, foreign.node_id()),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn dropped_streams_cannot_be_planned() {
    let p = TestPipeline::new();
    let id = from_vec(&p, vec![1]).filter(|x: &i32| *x > 0).node_id();
    assert!(matches!(build_plan(&p, id), Err(Error::InvalidArgument { .. })));
}
