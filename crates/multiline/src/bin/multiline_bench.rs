// File: crates/multiline/src/bin/multiline_bench.rs
// Summary: Renders the default multiline benchmark (3 lines x 100000 points) to PNG.
// Usage: multiline-bench [num_lines] [num_points] [output.png]

use anyhow::{Context, Result};
use log::info;
use multiline::{plot_with, GeneratorConfig, PlotConfig, DEFAULT_LINES, DEFAULT_POINTS};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let num_lines = parse_count(args.next(), "num_lines", DEFAULT_LINES)?;
    let num_points = parse_count(args.next(), "num_points", DEFAULT_POINTS)?;

    let mut config = PlotConfig::default();
    if let Some(out) = args.next() {
        config.output = out.into();
    }

    let generator = GeneratorConfig::new(num_lines, num_points);
    let report = plot_with(&generator, &config)
        .with_context(|| format!("failed to plot {num_lines} lines x {num_points} points"))?;

    info!(
        "total {:.2?} (generate {:.2?}, render {:.2?})",
        report.generate_time + report.render_time,
        report.generate_time,
        report.render_time
    );
    println!("Wrote {}", report.output.display());
    Ok(())
}

fn parse_count(raw: Option<String>, name: &str, default: usize) -> Result<usize> {
    match raw {
        None => Ok(default),
        Some(s) => s
            .trim()
            .parse::<usize>()
            .with_context(|| format!("{name} must be a non-negative integer, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_count_uses_default() {
        assert_eq!(parse_count(None, "num_lines", DEFAULT_LINES).unwrap(), 3);
        assert_eq!(parse_count(Some(" 42 ".into()), "num_points", DEFAULT_POINTS).unwrap(), 42);
    }

    #[test]
    fn bad_count_is_rejected() {
        let err = parse_count(Some("-1".into()), "num_points", DEFAULT_POINTS).unwrap_err();
        assert!(err.to_string().contains("num_points must be a non-negative integer, got '-1'"));
        assert!(parse_count(Some("many".into()), "num_lines", DEFAULT_LINES).is_err());
    }
}
