use reedline::{Completer, Suggestion};

/// A completion candidate and the label shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub value: String,
    pub description: String,
}

/// Fuzzy word completion over schema identifiers and shell directives.
pub struct SchemaCompleter {
    candidates: Vec<Candidate>,
}

impl SchemaCompleter {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FuzzyMatch {
    pub start: usize,
    pub len: usize,
    pub indices: Vec<usize>,
}

/// Matches `pattern` as a case-insensitive subsequence of `candidate`,
/// picking the shortest window. Positions are char offsets.
pub(crate) fn fuzzy_match(pattern: &str, candidate: &str) -> Option<FuzzyMatch> {
    let pattern: Vec<char> = pattern.chars().collect();
    let chars: Vec<char> = candidate.chars().collect();

    let Some(first) = pattern.first() else {
        return Some(FuzzyMatch {
            start: 0,
            len: 0,
            indices: Vec::new(),
        });
    };

    let mut best: Option<FuzzyMatch> = None;
    for start in 0..chars.len() {
        if !chars[start].eq_ignore_ascii_case(first) {
            continue;
        }

        let mut indices = vec![start];
        let mut pos = start + 1;
        for p in &pattern[1..] {
            match chars[pos..].iter().position(|c| c.eq_ignore_ascii_case(p)) {
                Some(offset) => {
                    indices.push(pos + offset);
                    pos += offset + 1;
                }
                None => break,
            }
        }

        // Later starts see a suffix of this one, so they cannot match either
        if indices.len() < pattern.len() {
            break;
        }

        let len = pos - start;
        if best.as_ref().is_none_or(|b| len < b.len) {
            best = Some(FuzzyMatch {
                start,
                len,
                indices,
            });
        }
    }
    best
}

impl Completer for SchemaCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let typed = line[..pos].trim_start();
        let span_start = pos - typed.len();

        let mut matches: Vec<(FuzzyMatch, &Candidate)> = self
            .candidates
            .iter()
            .filter_map(|c| fuzzy_match(typed, &c.value).map(|m| (m, c)))
            .collect();

        matches.sort_by(|(ma, ca), (mb, cb)| {
            ma.start
                .cmp(&mb.start)
                .then(ma.len.cmp(&mb.len))
                .then_with(|| ca.value.cmp(&cb.value))
        });

        matches
            .into_iter()
            .map(|(m, c)| Suggestion {
                value: c.value.clone(),
                description: Some(c.description.clone()),
                span: reedline::Span {
                    start: span_start,
                    end: pos,
                },
                append_whitespace: false,
                match_indices: Some(m.indices),
                ..Default::default()
            })
            .collect()
    }
}
