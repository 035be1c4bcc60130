//! crates/cli/src/report.rs
//!
//! Comparison report assembly and rendering.

use std::io::{self, Write};

use distance::Opcode;
use policy::EditKind;
use serde::Serialize;

/// Everything a single comparison produced, ready for rendering.
#[derive(Debug, Serialize)]
pub(crate) struct Report {
    pub from: String,
    pub to: String,
    pub tokens: String,
    pub policy: String,
    pub a_len: usize,
    pub b_len: usize,
    pub distance: usize,
    pub matches: usize,
    pub ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opcodes: Option<Vec<Opcode>>,
}

/// Renders the human-readable report.
pub(crate) fn render_text<W: Write>(
    report: &Report,
    a: &[&str],
    b: &[&str],
    out: &mut W,
) -> io::Result<()> {
    writeln!(
        out,
        "{} vs {} ({} tokens, {} policy)",
        report.from, report.to, report.tokens, report.policy
    )?;
    writeln!(out, "distance: {}", report.distance)?;
    writeln!(out, "matches:  {}", report.matches)?;
    writeln!(out, "ratio:    {:.4}", report.ratio)?;
    if let Some(opcodes) = &report.opcodes {
        writeln!(out, "opcodes:")?;
        for opcode in opcodes {
            writeln!(out, "  {}", describe(opcode, a, b))?;
        }
    }
    Ok(())
}

/// Renders the machine-readable report.
pub(crate) fn render_json<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

/// One opcode line with the tokens it touches.
fn describe(opcode: &Opcode, a: &[&str], b: &[&str]) -> String {
    let a_text = a[opcode.a_range()].join(" ");
    let b_text = b[opcode.b_range()].join(" ");
    match opcode.kind {
        EditKind::Equal | EditKind::Delete => format!("{opcode} {a_text}"),
        EditKind::Insert => format!("{opcode} {b_text}"),
        EditKind::Replace => format!("{opcode} {a_text} -> {b_text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{Report, describe, render_json, render_text};
    use distance::Opcode;
    use policy::EditKind;

    fn report(opcodes: Option<Vec<Opcode>>) -> Report {
        Report {
            from: "left.txt".into(),
            to: "right.txt".into(),
            tokens: "words".into(),
            policy: "lowest-cost".into(),
            a_len: 2,
            b_len: 3,
            distance: 1,
            matches: 2,
            ratio: 0.8,
            opcodes,
        }
    }

    #[test]
    fn text_report_lists_the_summary() {
        let mut out = Vec::new();
        render_text(&report(None), &["a", "b"], &["d", "a", "b"], &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("distance: 1"));
        assert!(rendered.contains("matches:  2"));
        assert!(rendered.contains("ratio:    0.8000"));
        assert!(!rendered.contains("opcodes:"));
    }

    #[test]
    fn json_report_omits_absent_opcodes() {
        let mut out = Vec::new();
        render_json(&report(None), &mut out).expect("render");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        assert_eq!(value["distance"], 1);
        assert!(value.get("opcodes").is_none());
    }

    #[test]
    fn describe_shows_the_touched_tokens() {
        let a = ["hi", "my"];
        let b = ["hi", "i'm"];
        let equal = Opcode {
            kind: EditKind::Equal,
            a_start: 0,
            a_end: 1,
            b_start: 0,
            b_end: 1,
        };
        let replace = Opcode {
            kind: EditKind::Replace,
            a_start: 1,
            a_end: 2,
            b_start: 1,
            b_end: 2,
        };
        assert_eq!(describe(&equal, &a, &b), "equal a[0..1] b[0..1] hi");
        assert_eq!(describe(&replace, &a, &b), "replace a[1..2] b[1..2] my -> i'm");
    }
}
