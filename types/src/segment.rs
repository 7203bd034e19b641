use crate::Token;

/// One unit of input while a substitution chain runs.
///
/// Input starts out as one `Pending` segment per character. Steps turn
/// pending segments into `Resolved` ones and never touch a resolved segment
/// again, so the text of an earlier token can't be rewritten by a later step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Pending(char),
    Resolved(Token),
}

impl Segment {
    /// Split `input` into pending segments, one per `char`.
    #[must_use]
    pub fn split(input: &str) -> Vec<Segment> {
        input.chars().map(Segment::Pending).collect()
    }

    /// Concatenate segments: tokens as-is, pending characters verbatim.
    #[must_use]
    pub fn render(segments: &[Segment]) -> String {
        let capacity = segments
            .iter()
            .map(|segment| match segment {
                Segment::Pending(c) => c.len_utf8(),
                Segment::Resolved(token) => token.len(),
            })
            .sum();
        let mut out = String::with_capacity(capacity);
        for segment in segments {
            match segment {
                Segment::Pending(c) => out.push(*c),
                Segment::Resolved(token) => out.push_str(token),
            }
        }
        out
    }

    #[must_use]
    pub fn pending(&self) -> Option<char> {
        match self {
            Segment::Pending(c) => Some(*c),
            Segment::Resolved(_) => None,
        }
    }

    /// Resolve this segment if it is still pending. Returns whether it changed.
    pub fn resolve(&mut self, token: Token) -> bool {
        if self.pending().is_none() {
            return false;
        }
        *self = Segment::Resolved(token);
        true
    }
}
