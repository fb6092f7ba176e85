#![cfg(all(feature = "io-fs", feature = "io-glob"))]

use ironstream::io::fs::{read_dir, read_lines};
use ironstream::io::glob::glob_paths;
use ironstream::testing::*;
use ironstream::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    let mut names: Vec<String> = paths
        .iter()
        .filter_map(|path| path.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn sample_dir() -> anyhow::Result<TempDir> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("a.txt"), "alpha\nbeta\n")?;
    fs::write(dir.path().join("b.rs"), "fn main() {}\n")?;
    fs::write(dir.path().join("c.txt"), "")?;
    fs::create_dir(dir.path().join("nested"))?;
    fs::write(dir.path().join("nested").join("d.txt"), "delta")?;
    Ok(dir)
}

#[test]
fn read_dir_lists_entries() -> anyhow::Result<()> {
    let dir = sample_dir()?;
    let p = TestPipeline::new();

    let names = file_names(&read_dir(&p, dir.path()).collect_seq()?);
    assert_eq!(names, ["a.txt", "b.rs", "c.txt", "nested"]);
    Ok(())
}

#[test]
fn read_dir_feeds_a_pipeline() -> anyhow::Result<()> {
    let dir = sample_dir()?;
    let p = TestPipeline::new();

    let txt = read_dir(&p, dir.path())
        .filter(|path: &PathBuf| path.extension().is_some_and(|ext| ext == "txt"))
        .count()?;
    assert_eq!(txt, 2);
    Ok(())
}

#[test]
fn listing_is_lazy_and_repeatable() -> anyhow::Result<()> {
    let dir = sample_dir()?;
    let p = TestPipeline::new();
    let listing = read_dir(&p, dir.path());

    assert_eq!(listing.count()?, 4);
    fs::write(dir.path().join("e.txt"), "late")?;
    assert_eq!(listing.count()?, 5);
    Ok(())
}

#[test]
fn missing_directory_is_a_source_error() {
    let p = TestPipeline::new();
    let err = read_dir(&p, "/definitely/not/here").count().unwrap_err();
    assert!(matches!(err, Error::Source(_)));
    assert!(err.to_string().contains("listing directory"));
}

#[test]
fn read_lines_strips_terminators() -> anyhow::Result<()> {
    let dir = sample_dir()?;
    let p = TestPipeline::new();

    let lines = read_lines(&p, dir.path().join("a.txt")).collect_seq()?;
    assert_eq!(lines, ["alpha", "beta"]);
    assert!(read_lines(&p, dir.path().join("c.txt")).collect_seq()?.is_empty());
    Ok(())
}

#[test]
fn missing_file_is_a_source_error() {
    let p = TestPipeline::new();
    assert!(matches!(
        read_lines(&p, "/no/such/file.txt").find_first(),
        Err(Error::Source(_))
    ));
}

#[test]
fn glob_matches_files_only() -> anyhow::Result<()> {
    let dir = sample_dir()?;
    let p = TestPipeline::new();
    let root = dir.path().display().to_string();

    let txt = glob_paths(&p, &format!("{root}/**/*.txt"))?.collect_seq()?;
    assert_eq!(file_names(&txt), ["a.txt", "c.txt", "d.txt"]);

    let everything = glob_paths(&p, &format!("{root}/*"))?.collect_seq()?;
    assert_eq!(file_names(&everything), ["a.txt", "b.rs", "c.txt"]);
    Ok(())
}

#[test]
fn glob_with_no_matches_is_empty() -> anyhow::Result<()> {
    let dir = sample_dir()?;
    let p = TestPipeline::new();
    let none = glob_paths(&p, &format!("{}/*.csv", dir.path().display()))?;
    assert_eq!(none.count()?, 0);
    Ok(())
}

#[test]
fn invalid_glob_pattern_is_rejected_immediately() {
    let p = TestPipeline::new();
    let before = p.node_count();
    assert!(matches!(
        glob_paths(&p, "logs/[unclosed"),
        Err(Error::InvalidArgument { op: "glob_paths", .. })
    ));
    assert_eq!(p.node_count(), before);
}
