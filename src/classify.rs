use log::trace;
use serde::{Deserialize, Serialize};

/// One executable source line, reduced to its mnemonic and raw operands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// 1-based position of the line in the original source.
    pub line: usize,
    /// Lowercased mnemonic.
    pub op: String,
    /// Operands as written, joined by single spaces.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub args: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Reduces `source` to the instructions it contains, in source order.
///
/// Blank lines, full-line comments, directives, bare labels and lines left
/// empty once annotations are removed produce nothing.
pub fn classify(source: &str) -> Vec<Instruction> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, text)| classify_line(i + 1, text))
        .collect()
}

fn classify_line(line: usize, text: &str) -> Option<Instruction> {
    let text = text.trim();

    if text.is_empty() {
        return None;
    }
    if text.starts_with(';') {
        trace!("line {line}: comment");
        return None;
    }
    if text.starts_with('.') {
        trace!("line {line}: directive");
        return None;
    }

    // order matters: a comment may contain ':', "side" or '['
    let (code, comment) = split_comment(text);
    let Some(code) = strip_label(code) else {
        trace!("line {line}: label");
        return None;
    };
    let code = strip_side_set(code);
    let code = strip_delay(code);

    let mut fields = code.split_whitespace();
    let Some(op) = fields.next() else {
        trace!("line {line}: nothing left after annotations");
        return None;
    };

    let ins = Instruction {
        line,
        op: op.to_lowercase(),
        args: fields.collect::<Vec<_>>().join(" "),
        comment: comment.to_owned(),
    };
    trace!("line {line}: {} {:?}", ins.op, ins.args);

    Some(ins)
}

/// Splits at the first `;` into code and comment, both trimmed.
fn split_comment(text: &str) -> (&str, &str) {
    match text.split_once(';') {
        Some((code, comment)) => (code.trim(), comment.trim()),
        None => (text, ""),
    }
}

/// Drops everything up to and including the first `:`.
/// Returns `None` when the line was only a label.
fn strip_label(text: &str) -> Option<&str> {
    match text.split_once(':') {
        Some((_, rest)) => {
            let rest = rest.trim();
            (!rest.is_empty()).then_some(rest)
        }
        None => Some(text),
    }
}

/// Truncates at the literal substring `side`, wherever it occurs.
fn strip_side_set(text: &str) -> &str {
    truncate_at(text, "side")
}

/// Truncates at the first `[`.
fn strip_delay(text: &str) -> &str {
    truncate_at(text, "[")
}

fn truncate_at<'a>(text: &'a str, pat: &str) -> &'a str {
    match text.find(pat) {
        Some(idx) => text[..idx].trim(),
        None => text,
    }
}
