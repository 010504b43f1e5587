//! Match Scoring CLI Library
//!
//! Line-oriented front end for ts_core: one recorded match per input
//! line, one score line per output line. All stream and file failures
//! are reported here; the scoring engine itself never fails.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use ts_core::MatchScorer;

/// Output format for score lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain score line ("6-4 0-0 15-0")
    #[default]
    Plain,
    /// One JSON response per match (score line plus raw state)
    Json,
}

/// Counters reported back to the caller after a run
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreStats {
    pub matches: u64,
    pub points: u64,
}

/// Score every line of `reader` into one line of `writer`.
///
/// Each input line is one recorded match, scored by a fresh scorer so
/// matches stay fully independent. A trailing `\r` from CRLF input is
/// stripped; every remaining character counts as a point symbol.
pub fn process_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    format: OutputFormat,
) -> Result<ScoreStats> {
    let mut stats = ScoreStats::default();

    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        let points = line.strip_suffix('\r').unwrap_or(&line);

        let rendered = match format {
            OutputFormat::Plain => MatchScorer::score(points),
            OutputFormat::Json => {
                let request = serde_json::json!({ "schema_version": 1, "points": points });
                ts_core::score_match_json(&request.to_string()).map_err(anyhow::Error::msg)?
            }
        };
        writeln!(writer, "{}", rendered).context("Failed to write output line")?;

        stats.matches += 1;
        stats.points += points.chars().count() as u64;
    }

    Ok(stats)
}

/// Score `input` into `output`, one line per recorded match
pub fn process_file(input: &Path, output: &Path, format: OutputFormat) -> Result<ScoreStats> {
    let reader = BufReader::new(
        File::open(input)
            .with_context(|| format!("Failed to open input file: {}", input.display()))?,
    );

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    let mut writer = BufWriter::new(
        File::create(output)
            .with_context(|| format!("Failed to create output file: {}", output.display()))?,
    );

    let stats = process_lines(reader, &mut writer, format)?;
    writer.flush().context("Failed to flush output file")?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_process_lines_one_score_per_match() {
        let input = "AAAA\n\nBBBAAA\n";
        let mut output = Vec::new();
        let stats =
            process_lines(Cursor::new(input), &mut output, OutputFormat::Plain).unwrap();

        assert_eq!(stats.matches, 3);
        assert_eq!(stats.points, 10);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "0-1\n0-0\n0-0 40-40\n"
        );
    }

    #[test]
    fn test_process_lines_strips_carriage_returns() {
        let mut output = Vec::new();
        process_lines(Cursor::new("AAA\r\nBA\r\n"), &mut output, OutputFormat::Plain).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "0-0 40-0\n0-0 15-15\n"
        );
    }

    #[test]
    fn test_process_lines_json_format() {
        let mut output = Vec::new();
        process_lines(Cursor::new("AAAB\n"), &mut output, OutputFormat::Json).unwrap();

        let rendered = String::from_utf8(output).unwrap();
        let value: serde_json::Value = serde_json::from_str(rendered.trim_end()).unwrap();
        assert_eq!(value["score_line"], "0-0 40-15");
        assert_eq!(value["server"], "first");
    }

    #[test]
    fn test_process_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("matches.txt");
        let output = dir.path().join("scores.txt");
        fs::write(
            &input,
            "AAAABBBBAAAABBBBAAAABBBBAAAAAAAAAAAABBBBAAAABBBBAAAABBBBAAAABBBBAAAABBBBBBBBA\nA\n",
        )
        .unwrap();

        let stats = process_file(&input, &output, OutputFormat::Plain).unwrap();
        assert_eq!(stats.matches, 2);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "3-6 6-4 0-0 0-15\n0-0 15-0\n"
        );
    }

    #[test]
    fn test_process_file_creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("matches.txt");
        let output = dir.path().join("nested/out/scores.txt");
        fs::write(&input, "AAAA\n").unwrap();

        process_file(&input, &output, OutputFormat::Plain).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "0-1\n");
    }

    #[test]
    fn test_missing_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = process_file(
            &dir.path().join("absent.txt"),
            &dir.path().join("scores.txt"),
            OutputFormat::Plain,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to open input file"));
    }
}
