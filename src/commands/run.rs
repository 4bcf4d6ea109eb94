use crate::*;
use anyhow::Context;
use std::io::Write;

pub fn handle_run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let range = SampleRange::new(cli.min, cli.max)?;

    let count = cli.replay.as_ref().map_or(cli.count, Vec::len);
    let mut source: Box<dyn SampleSource> = match (&cli.replay, cli.seed) {
        (Some(values), _) => Box::new(ScriptedSource::new(values.clone())),
        (None, Some(seed)) => Box::new(RngSource::seeded(seed)),
        (None, None) => Box::new(RngSource::thread()),
    };
    tracing::debug!(source = source.kind(), "selected sample source");

    run_report(source.as_mut(), count, &range, cli.json, out)
}

pub fn run_report<S: SampleSource + ?Sized, W: Write>(
    source: &mut S,
    count: usize,
    range: &SampleRange,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let samples = generate(source, count, range);
    let stats = summarize(&samples)?;
    print_report(out, json, Report { samples, stats }).context("failed to write report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::{DEFAULT_RANGE_MAX, DEFAULT_RANGE_MIN};
    use crate::domain::error::StatsError;
    use clap::Parser;

    fn fixture_source() -> ScriptedSource {
        ScriptedSource::new(vec![5, 3, 9, 1, 7, 2, 8, 4, 6, 0])
    }

    fn reference_range() -> SampleRange {
        SampleRange::new(DEFAULT_RANGE_MIN, DEFAULT_RANGE_MAX).expect("valid range")
    }

    #[test]
    fn scripted_run_prints_expected_report() {
        let mut buf = Vec::new();
        run_report(&mut fixture_source(), 10, &reference_range(), false, &mut buf)
            .expect("report");
        assert_eq!(
            String::from_utf8(buf).expect("utf8"),
            "Random Array: [5, 3, 9, 1, 7, 2, 8, 4, 6, 0]\nSum: 45\nMax: 9\nMin: 0\n"
        );
    }

    #[test]
    fn empty_run_fails_without_output() {
        let mut buf = Vec::new();
        let err = run_report(&mut fixture_source(), 0, &reference_range(), false, &mut buf)
            .expect_err("empty sequence");
        assert!(matches!(
            err.downcast_ref::<StatsError>(),
            Some(StatsError::EmptySequence { .. })
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn handle_run_uses_replay_values() {
        let cli = Cli::try_parse_from(["samplestat", "--json", "--replay", "4,-2,10"])
            .expect("parse");
        let mut buf = Vec::new();
        handle_run(&cli, &mut buf).expect("run");
        let v: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(v["data"]["samples"], serde_json::json!([4, -2, 10]));
        assert_eq!(v["data"]["sum"], 12);
        assert_eq!(v["data"]["max"], 10);
        assert_eq!(v["data"]["min"], -2);
    }

    #[test]
    fn handle_run_rejects_inverted_range() {
        let cli = Cli::try_parse_from(["samplestat", "--min", "50", "--max", "10"]).expect("parse");
        let mut buf = Vec::new();
        let err = handle_run(&cli, &mut buf).expect_err("inverted range");
        assert_eq!(
            err.downcast_ref::<StatsError>(),
            Some(&StatsError::InvalidRange { min: 50, max: 10 })
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn handle_run_default_draws_ten_in_bounds() {
        let cli = Cli::try_parse_from(["samplestat", "--json"]).expect("parse");
        let mut buf = Vec::new();
        handle_run(&cli, &mut buf).expect("run");
        let v: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        let samples = v["data"]["samples"].as_array().expect("samples array");
        assert_eq!(samples.len(), 10);
        assert!(samples
            .iter()
            .map(|s| s.as_i64().expect("integer sample"))
            .all(|s| (1..=100).contains(&s)));
    }
}
