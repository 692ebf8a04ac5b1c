//! Snippet marker tokenizer
//!
//! Recognized tokens, for dialect tags `ts` and `js`:
//!
//! - inline: `/* ts-begin */`, `/* ts-end */` (one optional space inside each delimiter)
//! - line: a line ending in `// ts-begin`, `// ts-end` or `// ts-only`
//!
//! Begin and end tokens are paired per form and tag with a stack, so an end
//! always closes the innermost open begin of the same kind.

use crate::config::Dialect;
use std::collections::HashMap;
use std::ops::Range;

const DIALECTS: [Dialect; 2] = [Dialect::Typed, Dialect::Untyped];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerForm {
    /// Block comment, may sit anywhere inside a line
    Inline,
    /// Trailing line comment, the unit of removal is the whole line
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Begin,
    End,
    Only,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub dialect: Dialect,
    pub kind: MarkerKind,
    pub form: MarkerForm,
    /// The comment itself for inline markers, the whole line (terminator
    /// included) for line markers
    pub span: Range<usize>,
    /// The comment text plus the spaces in front of it
    pub comment: Range<usize>,
}

/// A begin/end pair, as indices into the marker list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub begin: usize,
    pub end: usize,
}

/// Markers grouped by role
#[derive(Debug, Default)]
pub struct Pairing {
    pub blocks: Vec<Block>,
    /// Begin markers never closed and end markers with nothing to close
    pub orphans: Vec<usize>,
    /// Line-suffix markers
    pub singles: Vec<usize>,
}

/// Find every marker in `contents`, ordered by position
pub fn scan(contents: &str) -> Vec<Marker> {
    let mut markers = scan_inline(contents);
    markers.extend(scan_lines(contents));
    markers.sort_by_key(|m| (m.span.start, m.comment.start));
    markers
}

/// Pair begin/end markers of the same form and dialect
pub fn pair(markers: &[Marker]) -> Pairing {
    let mut open: HashMap<(MarkerForm, Dialect), Vec<usize>> = HashMap::new();
    let mut pairing = Pairing::default();

    for (idx, marker) in markers.iter().enumerate() {
        let key = (marker.form, marker.dialect);
        match marker.kind {
            MarkerKind::Begin => open.entry(key).or_default().push(idx),
            MarkerKind::End => match open.get_mut(&key).and_then(Vec::pop) {
                Some(begin) => pairing.blocks.push(Block { begin, end: idx }),
                None => pairing.orphans.push(idx),
            },
            MarkerKind::Only => pairing.singles.push(idx),
        }
    }

    pairing.orphans.extend(open.into_values().flatten());
    pairing.orphans.sort_unstable();
    pairing
}

fn scan_inline(contents: &str) -> Vec<Marker> {
    contents
        .match_indices("/*")
        .filter_map(|(start, _)| {
            let (dialect, kind, len) = inline_marker(&contents[start..])?;
            let span = start..start + len;
            Some(Marker {
                dialect,
                kind,
                form: MarkerForm::Inline,
                comment: span.clone(),
                span,
            })
        })
        .collect()
}

/// Parse `/* ts-begin */` at the start of `text`; returns its byte length
fn inline_marker(text: &str) -> Option<(Dialect, MarkerKind, usize)> {
    let rest = text.strip_prefix("/*")?;
    let rest = strip_one_blank(rest);
    let (dialect, rest) = DIALECTS
        .iter()
        .find_map(|d| rest.strip_prefix(d.tag()).map(|r| (*d, r)))?;
    let (kind, rest) = if let Some(r) = rest.strip_prefix("-begin") {
        (MarkerKind::Begin, r)
    } else {
        (MarkerKind::End, rest.strip_prefix("-end")?)
    };
    let rest = strip_one_blank(rest);
    let rest = rest.strip_prefix("*/")?;
    Some((dialect, kind, text.len() - rest.len()))
}

fn scan_lines(contents: &str) -> Vec<Marker> {
    let mut markers = Vec::new();
    let mut offset = 0;

    for line in contents.split_inclusive('\n') {
        let start = offset;
        offset += line.len();

        let body = line.strip_suffix('\n').unwrap_or(line);
        let body = body.strip_suffix('\r').unwrap_or(body);

        if let Some((dialect, kind, comment_start)) = line_marker(body) {
            markers.push(Marker {
                dialect,
                kind,
                form: MarkerForm::Line,
                span: start..offset,
                comment: start + comment_start..start + body.len(),
            });
        }
    }

    markers
}

/// Parse a trailing `// ts-only` style comment; returns where the comment
/// (with its leading spaces) starts within `body`
fn line_marker(body: &str) -> Option<(Dialect, MarkerKind, usize)> {
    let trimmed = body.trim_end_matches([' ', '\t']);
    let (kind, rest) = [
        ("-begin", MarkerKind::Begin),
        ("-end", MarkerKind::End),
        ("-only", MarkerKind::Only),
    ]
    .iter()
    .find_map(|(suffix, kind)| trimmed.strip_suffix(suffix).map(|r| (*kind, r)))?;
    let (dialect, rest) = DIALECTS
        .iter()
        .find_map(|d| rest.strip_suffix(d.tag()).map(|r| (*d, r)))?;
    let rest = rest.strip_suffix([' ', '\t']).unwrap_or(rest);
    let rest = rest.strip_suffix("//")?;
    Some((dialect, kind, rest.trim_end_matches(' ').len()))
}

fn strip_one_blank(text: &str) -> &str {
    text.strip_prefix([' ', '\t']).unwrap_or(text)
}
