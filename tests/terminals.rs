use ironstream::testing::*;
use ironstream::*;

#[test]
fn reduce_without_seed() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let total = from_vec(&p, vec![1, 2, 3, 4]).reduce(|a, b| a + b)?;
    let nothing = from_vec(&p, Vec::<i32>::new()).reduce(|a, b| a + b)?;

    assert_eq!(total, Some(10));
    assert_eq!(nothing, None);
    Ok(())
}

#[test]
fn fold_returns_the_seed_for_empty_input() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    assert_eq!(from_vec(&p, vec![1, 2, 3]).fold(100, |a, b| a + b)?, 106);
    assert_eq!(from_vec(&p, Vec::<i32>::new()).fold(100, |a, b| a + b)?, 100);
    Ok(())
}

#[test]
fn fold_is_a_left_fold() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let out = from_vec(&p, vec![1, 2, 3]).fold(0, |acc, x| acc * 10 + x)?;
    assert_eq!(out, 123);
    Ok(())
}

#[test]
fn total_of_discounted_prices() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let total = from_vec(&p, vec![10, 30, 17, 20, 18, 45, 12])
        .filter(|price: &i32| *price > 20)
        .sum_by(|price: &i32| f64::from(*price) * 0.9)?;
    assert!((total - 67.5).abs() < 1e-9);
    Ok(())
}

#[test]
fn average_of_two_four_six() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    assert_eq!(from_vec(&p, vec![2, 4, 6]).average(|v: &i32| f64::from(*v))?, 4.0);
    assert_eq!(from_vec(&p, Vec::<i32>::new()).average(|v: &i32| f64::from(*v))?, 0.0);
    Ok(())
}

#[test]
fn summary_statistics_of_two_four_six() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let stats = from_vec(&p, vec![2, 4, 6]).summary_statistics(|v: &i32| f64::from(*v))?;

    assert_eq!(stats.count, 3);
    assert_eq!(stats.sum, 12.0);
    assert_eq!(stats.average, 4.0);
    assert_eq!(stats.min, Some(2.0));
    assert_eq!(stats.max, Some(6.0));
    Ok(())
}

#[test]
fn summary_statistics_of_nothing() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let stats = from_vec(&p, Vec::<i32>::new()).summary_statistics(|v: &i32| f64::from(*v))?;
    assert_eq!(stats, SummaryStatistics::default());
    assert_eq!(stats.min, None);
    assert_eq!(stats.max, None);
    Ok(())
}

#[test]
fn summary_statistics_serialize() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let stats = from_vec(&p, people()).summary_statistics(|person: &Person| f64::from(person.age))?;
    let json = serde_json::to_value(stats)?;
    assert_eq!(json["count"], 4);
    assert_eq!(json["max"], 35.0);
    Ok(())
}

#[test]
fn join_places_separators_between_elements_only() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let letters = from_vec(&p, vec!["A", "B", "C"]);
    assert_eq!(letters.join(", ", |s: &&str| (*s).to_string())?, "A, B, C");
    assert_eq!(from_vec(&p, Vec::<&str>::new()).join(", ", |s: &&str| (*s).to_string())?, "");
    assert_eq!(from_vec(&p, vec!["solo"]).join(", ", |s: &&str| (*s).to_string())?, "solo");
    Ok(())
}

#[test]
fn join_upper_cased_friends() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let out = from_vec(&p, friends()).join(", ", |name: &String| name.to_uppercase())?;
    assert_eq!(out, "BRIAN, NATE, NEAL, RAJU, SARA, SCOTT");
    Ok(())
}

#[test]
fn people_display_joined() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let out = from_vec(&p, people())
        .filter(|person: &Person| person.age > 21)
        .join("; ", Person::to_string)?;
    assert_eq!(out, "Sara - 22; Jane - 22; Greg - 35");
    Ok(())
}

#[test]
fn total_asset_values_by_selector() -> anyhow::Result<()> {
    assert_eq!(total_asset_values(assets(), |_| true)?, 10_000);
    assert_eq!(total_asset_values(assets(), |a| a.kind == AssetType::Bond)?, 3_000);
    assert_eq!(total_asset_values(assets(), |a| a.kind == AssetType::Stock)?, 7_000);
    Ok(())
}
