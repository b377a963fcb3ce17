//! Extended query syntax.
//!
//! | Token      | Meaning                          |
//! |------------|----------------------------------|
//! | `react`    | fuzzy match                      |
//! | `=react`   | a field equals `react`           |
//! | `'react`   | a field contains `react`         |
//! | `^react`   | a field starts with `react`      |
//! | `.js$`     | a field ends with `.js`          |
//! | `!react`   | no field contains `react`        |
//! | `!^react`  | no field starts with `react`     |
//! | `!.js$`    | no field ends with `.js`         |
//!
//! Whitespace-separated tokens are ANDed; a lone `|` token starts an OR
//! group. Double quotes keep whitespace inside a token (`="radix ui"`).
//! Matching is case-insensitive.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Fuzzy,
    Exact,
    Include,
    Prefix,
    Suffix,
    InverseInclude,
    InversePrefix,
    InverseSuffix,
}

impl TermKind {
    pub fn is_inverse(&self) -> bool {
        matches!(
            self,
            TermKind::InverseInclude
                | TermKind::InversePrefix
                | TermKind::InverseSuffix
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub kind: TermKind,
    /// Term text as typed, operators stripped.
    pub text: String,
    pub lower: String,
}

impl Term {
    fn new(kind: TermKind, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            text: text.to_string(),
            lower: text.to_lowercase(),
        })
    }

    /// Whether `field_lower` satisfies this term's literal operator.
    ///
    /// Fuzzy terms are scored elsewhere and always return `false` here.
    pub fn matches_literal(&self, field_lower: &str) -> bool {
        match self.kind {
            TermKind::Fuzzy => false,
            TermKind::Exact => field_lower == self.lower,
            TermKind::Include | TermKind::InverseInclude => {
                field_lower.contains(&self.lower)
            }
            TermKind::Prefix | TermKind::InversePrefix => {
                field_lower.starts_with(&self.lower)
            }
            TermKind::Suffix | TermKind::InverseSuffix => {
                field_lower.ends_with(&self.lower)
            }
        }
    }
}

/// A query in disjunctive form: any group may match, and every term of a
/// group must.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub groups: Vec<Vec<Term>>,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.is_empty())
    }
}

pub fn parse(query: &str) -> ParsedQuery {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for token in tokenize(query) {
        if token.raw == "|" && !token.quoted {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let Some(term) = classify(&token.raw) {
            current.push(term);
        }
    }

    if !current.is_empty() {
        groups.push(current);
    }

    ParsedQuery { groups }
}

struct Token {
    raw: String,
    quoted: bool,
}

fn tokenize(query: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut raw = String::new();
    let mut quoted = false;
    let mut in_quotes = false;

    for ch in query.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !raw.is_empty() {
                    tokens.push(Token {
                        raw: std::mem::take(&mut raw),
                        quoted,
                    });
                }
                quoted = false;
            }
            c => raw.push(c),
        }
    }

    if !raw.is_empty() {
        tokens.push(Token { raw, quoted });
    }

    tokens
}

fn classify(raw: &str) -> Option<Term> {
    if let Some(rest) = raw.strip_prefix("!^") {
        return Term::new(TermKind::InversePrefix, rest);
    }
    if let Some(rest) = raw.strip_prefix('!') {
        return match rest.strip_suffix('$') {
            Some(inner) => Term::new(TermKind::InverseSuffix, inner),
            None => Term::new(TermKind::InverseInclude, rest),
        };
    }
    if let Some(rest) = raw.strip_prefix('=') {
        return Term::new(TermKind::Exact, rest);
    }
    if let Some(rest) = raw.strip_prefix('\'') {
        return Term::new(TermKind::Include, rest);
    }
    if let Some(rest) = raw.strip_prefix('^') {
        return Term::new(TermKind::Prefix, rest);
    }
    if raw.len() > 1
        && let Some(rest) = raw.strip_suffix('$')
    {
        return Term::new(TermKind::Suffix, rest);
    }
    Term::new(TermKind::Fuzzy, raw)
}
