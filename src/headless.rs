//! Line-oriented playback: one line per step, no terminal control.

use std::fmt::Display;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::sort::{Algorithm, Step, StepProducer};

#[derive(Serialize)]
struct JsonLine<'a, T> {
    step: usize,
    #[serde(flatten)]
    inner: &'a Step<T>,
}

/// Summary of a finished headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: usize,
    pub sorted: bool,
}

/// Runs `algorithm` over `data` to exhaustion, writing every state to `out`.
///
/// Text output starts with the unsorted input as `step 0` and ends with a
/// summary line; JSON output is one object per emitted step.
pub fn run<T, W>(
    algorithm: Algorithm,
    data: Vec<T>,
    seed: u64,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<RunSummary>
where
    T: Ord + Clone + Display + Serialize,
    W: Write,
{
    if format == OutputFormat::Text {
        writeln!(out, "step 0: {}", render(&data))?;
    }

    let mut steps = algorithm.steps(data);
    while let Some(step) = steps.next() {
        let index = steps.emitted();
        match format {
            OutputFormat::Text => writeln!(out, "step {}: {}", index, render(&step.state))?,
            OutputFormat::Json => {
                let line = JsonLine {
                    step: index,
                    inner: &step,
                };
                serde_json::to_writer(&mut *out, &line)?;
                writeln!(out)?;
            }
        }
        tracing::trace!(step = index, event = ?step.event, "step emitted");
    }

    let emitted = steps.emitted();
    let sorted = steps
        .producer()
        .array()
        .windows(2)
        .all(|pair| pair[0] <= pair[1]);
    if format == OutputFormat::Text {
        writeln!(out, "{}: {} steps, seed {}", algorithm.title(), emitted, seed)?;
    }
    out.flush()?;

    Ok(RunSummary {
        steps: emitted,
        sorted,
    })
}

fn render<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(algorithm: Algorithm, data: Vec<u32>, format: OutputFormat) -> String {
        let mut out = Vec::new();
        run(algorithm, data, 7, format, &mut out).expect("write to vec");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn text_lists_every_state_and_summary() {
        let text = run_to_string(Algorithm::Selection, vec![3, 1, 2], OutputFormat::Text);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "step 0: [3, 1, 2]",
                "step 1: [1, 3, 2]",
                "step 2: [1, 2, 3]",
                "Selection Sort: 2 steps, seed 7",
            ]
        );
    }

    #[test]
    fn json_emits_one_object_per_step() {
        let text = run_to_string(Algorithm::Quick, vec![3, 1, 2], OutputFormat::Json);
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["step"], 1);
        assert_eq!(lines[0]["event"]["kind"], "pivot_placed");
        assert_eq!(lines[0]["event"]["index"], 0);
        assert_eq!(lines[1]["state"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn summary_reports_sorted_result() {
        let mut out = Vec::new();
        let summary = run(
            Algorithm::Bubble,
            vec![4, 3, 2, 1],
            0,
            OutputFormat::Text,
            &mut out,
        )
        .expect("write to vec");
        assert_eq!(
            summary,
            RunSummary {
                steps: 6,
                sorted: true
            }
        );
    }
}
