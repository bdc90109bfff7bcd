//! Plain-text graph formats.
//!
//! Three formats, all line oriented:
//!
//! - **dense**: line `i` holds the to-list of node `i`, as destination
//!   numbers for unlabeled graphs or `to label` pairs for labeled ones. A
//!   blank line is a node with an empty to-list; the final newline is
//!   optional.
//! - **sparse**: `from<fr_delim>to1<to_delim>to2...`. A line holding just
//!   `from<fr_delim>` defines the node with an empty to-list. Blank lines
//!   and lines starting with the comment prefix are skipped. With
//!   [`map_names`](Text::map_names), tokens are arbitrary non-empty
//!   strings and the reader also produces the name table.
//! - **arcs**: one arc per line, `from<fr_delim>to`, whitespace-delimited
//!   by default.
//!
//! Numbers are read and written in a configurable base, 2 through 36.
//! For the dense format the field separator is implied: any run of
//! characters invalid in the chosen base, except `+` and `-`, separates
//! fields.

use std::io::{self, BufRead, Write};

use indexmap::IndexMap;

use crate::adj::AdjacencyList;
use crate::{Directed, EdgeType, Half, LI, NI};

/// Which arcs of an undirected graph the writers emit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WriteArcs {
    /// Both arcs of every reciprocal pair.
    #[default]
    All,
    /// Only arcs with `to >= from`.
    Upper,
    /// Only arcs with `to <= from`.
    Lower,
}

/// Text format configuration, shared by the readers and writers.
#[derive(Clone, Debug)]
pub struct Text {
    /// Numeric base for node numbers and labels, 2..=36.
    pub base: u32,
    /// Delimiter after the from-field in the sparse and arcs formats.
    pub fr_delim: String,
    /// Delimiter between to-fields in the sparse format.
    pub to_delim: String,
    /// Lines starting with this prefix are skipped; empty disables.
    pub comment: String,
    /// Read from/to fields as arbitrary names instead of numbers.
    pub map_names: bool,
    /// Arc selection for undirected output.
    pub write_arcs: WriteArcs,
}

impl Default for Text {
    fn default() -> Self {
        Text {
            base: 10,
            fr_delim: ": ".to_string(),
            to_delim: " ".to_string(),
            comment: "//".to_string(),
            map_names: false,
            write_arcs: WriteArcs::All,
        }
    }
}

/// A read error with the 1-based line it occurred on; line 0 means the
/// error precedes reading (a bad configuration).
#[derive(Debug)]
pub struct TextError {
    pub line: usize,
    pub kind: TextErrorKind,
}

#[derive(Debug)]
pub enum TextErrorKind {
    /// Base outside 2..=36.
    Base(u32),
    /// Labeled input with an odd number of fields on a line.
    OddLabels,
    /// Named input with an empty from-name.
    BlankName,
    /// The from-delimiter is missing from a line.
    MissingDelim,
    /// A field did not parse as a number in the configured base.
    Number(String),
    /// A destination was negative.
    NegativeNode(NI),
    Io(io::Error),
}

impl core::fmt::Display for TextError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.line > 0 {
            write!(f, "line {}: ", self.line)?;
        }
        match &self.kind {
            TextErrorKind::Base(b) => write!(f, "base {} out of range 2..=36", b),
            TextErrorKind::OddLabels => f.write_str("odd number of fields for to/label pairs"),
            TextErrorKind::BlankName => f.write_str("blank from-name"),
            TextErrorKind::MissingDelim => f.write_str("missing from-delimiter"),
            TextErrorKind::Number(t) => write!(f, "invalid number {:?}", t),
            TextErrorKind::NegativeNode(n) => write!(f, "negative node number {}", n),
            TextErrorKind::Io(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for TextError {}

impl From<io::Error> for TextError {
    fn from(e: io::Error) -> Self {
        TextError {
            line: 0,
            kind: TextErrorKind::Io(e),
        }
    }
}

/// The result of reading a named graph: the graph, the name of each
/// node, and the name → node map (insertion order is node order).
#[derive(Debug, Default)]
pub struct NamedGraph {
    pub graph: AdjacencyList<NI, Directed>,
    pub names: Vec<String>,
    pub indexes: IndexMap<String, NI>,
}

impl NamedGraph {
    fn intern(&mut self, name: &str) -> NI {
        if let Some(&n) = self.indexes.get(name) {
            return n;
        }
        let n = self.names.len() as NI;
        self.names.push(name.to_string());
        self.indexes.insert(name.to_string(), n);
        self.graph.grow(n as usize + 1);
        n
    }
}

impl Text {
    pub fn new() -> Text {
        Text::default()
    }

    /// A configuration for the given base, other settings default.
    pub fn with_base(base: u32) -> Text {
        Text {
            base,
            ..Text::default()
        }
    }

    fn check_base(&self) -> Result<(), TextError> {
        if (2..=36).contains(&self.base) {
            Ok(())
        } else {
            Err(TextError {
                line: 0,
                kind: TextErrorKind::Base(self.base),
            })
        }
    }

    fn is_field_char(&self, c: char) -> bool {
        c == '+' || c == '-' || c.is_digit(self.base)
    }

    fn parse_ni(&self, tok: &str, line: usize) -> Result<NI, TextError> {
        NI::from_str_radix(tok, self.base).map_err(|_| TextError {
            line,
            kind: TextErrorKind::Number(tok.to_string()),
        })
    }

    fn parse_node(&self, tok: &str, line: usize) -> Result<NI, TextError> {
        let n = self.parse_ni(tok, line)?;
        if n < 0 {
            return Err(TextError {
                line,
                kind: TextErrorKind::NegativeNode(n),
            });
        }
        Ok(n)
    }

    fn format_ni(&self, n: NI) -> String {
        if self.base == 10 {
            return n.to_string();
        }
        let neg = n < 0;
        let mut m = (n as i64).unsigned_abs();
        let mut digits = Vec::new();
        loop {
            let d = (m % u64::from(self.base)) as u32;
            digits.push(char::from_digit(d, self.base).unwrap());
            m /= u64::from(self.base);
            if m == 0 {
                break;
            }
        }
        if neg {
            digits.push('-');
        }
        digits.iter().rev().collect()
    }

    fn is_comment(&self, line: &str) -> bool {
        !self.comment.is_empty() && line.starts_with(&self.comment)
    }

    // ------------------------------------------------------------------
    // dense

    /// Read the dense format: line `i` is the to-list of node `i`.
    pub fn read_adjacency_list<R: BufRead>(
        &self,
        r: R,
    ) -> Result<AdjacencyList<NI, Directed>, TextError> {
        self.check_base()?;
        let mut lists = Vec::new();
        for (lx, line) in r.lines().enumerate() {
            let line = line.map_err(|e| TextError {
                line: lx + 1,
                kind: TextErrorKind::Io(e),
            })?;
            let mut tos = Vec::new();
            for tok in line.split(|c| !self.is_field_char(c)).filter(|t| !t.is_empty()) {
                tos.push(self.parse_node(tok, lx + 1)?);
            }
            lists.push(tos);
        }
        Ok(AdjacencyList::from(lists))
    }

    /// Read the dense labeled format: `to label` pairs per line.
    pub fn read_labeled_adjacency_list<R: BufRead>(
        &self,
        r: R,
    ) -> Result<AdjacencyList<Half, Directed>, TextError> {
        self.check_base()?;
        let mut lists = Vec::new();
        for (lx, line) in r.lines().enumerate() {
            let line = line.map_err(|e| TextError {
                line: lx + 1,
                kind: TextErrorKind::Io(e),
            })?;
            let toks: Vec<&str> = line
                .split(|c| !self.is_field_char(c))
                .filter(|t| !t.is_empty())
                .collect();
            if toks.len() % 2 != 0 {
                return Err(TextError {
                    line: lx + 1,
                    kind: TextErrorKind::OddLabels,
                });
            }
            let mut tos = Vec::new();
            for pair in toks.chunks(2) {
                let to = self.parse_node(pair[0], lx + 1)?;
                let label: LI = self.parse_ni(pair[1], lx + 1)?;
                tos.push(Half { to, label });
            }
            lists.push(tos);
        }
        Ok(AdjacencyList::from(lists))
    }

    fn keep(&self, fr: NI, to: NI) -> bool {
        match self.write_arcs {
            WriteArcs::All => true,
            WriteArcs::Upper => to >= fr,
            WriteArcs::Lower => to <= fr,
        }
    }

    /// Write the dense format. Honors [`write_arcs`](Text::write_arcs).
    /// Returns the number of bytes written.
    pub fn write_adjacency_list<Ty: EdgeType, W: Write>(
        &self,
        g: &AdjacencyList<NI, Ty>,
        w: &mut W,
    ) -> Result<usize, TextError> {
        self.check_base()?;
        let mut bytes = 0;
        for (fr, list) in g.iter() {
            let line = list
                .iter()
                .filter(|&&to| self.keep(fr, to))
                .map(|&to| self.format_ni(to))
                .collect::<Vec<_>>()
                .join(" ");
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            bytes += line.len() + 1;
        }
        Ok(bytes)
    }

    /// Write the dense labeled format as `to label` pairs.
    pub fn write_labeled_adjacency_list<Ty: EdgeType, W: Write>(
        &self,
        g: &AdjacencyList<Half, Ty>,
        w: &mut W,
    ) -> Result<usize, TextError> {
        self.check_base()?;
        let mut bytes = 0;
        for (fr, list) in g.iter() {
            let line = list
                .iter()
                .filter(|h| self.keep(fr, h.to))
                .map(|h| format!("{} {}", self.format_ni(h.to), self.format_ni(h.label)))
                .collect::<Vec<_>>()
                .join(" ");
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            bytes += line.len() + 1;
        }
        Ok(bytes)
    }

    // ------------------------------------------------------------------
    // sparse

    /// Read the sparse format. With [`map_names`](Text::map_names) set,
    /// fields are arbitrary names; otherwise numbers in the configured
    /// base. Repeated from-lines append to the node's to-list.
    pub fn read_sparse<R: BufRead>(&self, r: R) -> Result<NamedGraph, TextError> {
        self.check_base()?;
        let mut out = NamedGraph::default();
        for (lx, line) in r.lines().enumerate() {
            let lno = lx + 1;
            let line = line.map_err(|e| TextError {
                line: lno,
                kind: TextErrorKind::Io(e),
            })?;
            if line.trim().is_empty() || self.is_comment(&line) {
                continue;
            }
            let (fr_tok, rest) = match line.split_once(&self.fr_delim) {
                Some(p) => p,
                // A line may end in the trimmed delimiter, defining an
                // empty to-list.
                None => match line.strip_suffix(self.fr_delim.trim_end()) {
                    Some(fr_tok) => (fr_tok, ""),
                    None => {
                        return Err(TextError {
                            line: lno,
                            kind: TextErrorKind::MissingDelim,
                        })
                    }
                },
            };
            if fr_tok.is_empty() {
                return Err(TextError {
                    line: lno,
                    kind: TextErrorKind::BlankName,
                });
            }
            let fr = if self.map_names {
                out.intern(fr_tok)
            } else {
                let n = self.parse_node(fr_tok, lno)?;
                out.graph.grow(n as usize + 1);
                n
            };
            for tok in rest.split(&self.to_delim).filter(|t| !t.is_empty()) {
                let to = if self.map_names {
                    out.intern(tok)
                } else {
                    let n = self.parse_node(tok, lno)?;
                    out.graph.grow(n as usize + 1);
                    n
                };
                out.graph.lists_mut()[fr as usize].push(to);
            }
        }
        Ok(out)
    }

    /// Write the sparse format with numeric fields. Every node gets a
    /// line, so isolated nodes survive a round-trip.
    pub fn write_sparse<Ty: EdgeType, W: Write>(
        &self,
        g: &AdjacencyList<NI, Ty>,
        w: &mut W,
    ) -> Result<usize, TextError> {
        self.check_base()?;
        let mut bytes = 0;
        for (fr, list) in g.iter() {
            let tos = list
                .iter()
                .filter(|&&to| self.keep(fr, to))
                .map(|&to| self.format_ni(to))
                .collect::<Vec<_>>()
                .join(&self.to_delim);
            let line = if tos.is_empty() {
                format!("{}{}", self.format_ni(fr), self.fr_delim.trim_end())
            } else {
                format!("{}{}{}", self.format_ni(fr), self.fr_delim, tos)
            };
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            bytes += line.len() + 1;
        }
        Ok(bytes)
    }

    /// Write the sparse format with names from `names`, indexed by node.
    pub fn write_sparse_named<Ty: EdgeType, W: Write>(
        &self,
        g: &AdjacencyList<NI, Ty>,
        names: &[String],
        w: &mut W,
    ) -> Result<usize, TextError> {
        let mut bytes = 0;
        for (fr, list) in g.iter() {
            let tos = list
                .iter()
                .filter(|&&to| self.keep(fr, to))
                .map(|&to| names[to as usize].as_str())
                .collect::<Vec<_>>()
                .join(&self.to_delim);
            let line = if tos.is_empty() {
                format!("{}{}", names[fr as usize], self.fr_delim.trim_end())
            } else {
                format!("{}{}{}", names[fr as usize], self.fr_delim, tos)
            };
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            bytes += line.len() + 1;
        }
        Ok(bytes)
    }

    // ------------------------------------------------------------------
    // arcs

    /// Read the arcs format: one `from to` pair per line.
    ///
    /// With a whitespace [`fr_delim`](Text::fr_delim) (the default here is
    /// treated as whitespace when the trimmed delimiter is empty), fields
    /// split on any whitespace run. A non-whitespace delimiter splits the
    /// line once, so with [`map_names`](Text::map_names) names may contain
    /// internal whitespace.
    pub fn read_arc_list<R: BufRead>(&self, r: R) -> Result<NamedGraph, TextError> {
        self.check_base()?;
        let mut out = NamedGraph::default();
        let delim = self.fr_delim.trim();
        for (lx, line) in r.lines().enumerate() {
            let lno = lx + 1;
            let line = line.map_err(|e| TextError {
                line: lno,
                kind: TextErrorKind::Io(e),
            })?;
            if line.trim().is_empty() || self.is_comment(&line) {
                continue;
            }
            let (fr_tok, to_tok) = if delim.is_empty() {
                let mut it = line.split_whitespace();
                match (it.next(), it.next()) {
                    (Some(a), Some(b)) => (a, b),
                    _ => {
                        return Err(TextError {
                            line: lno,
                            kind: TextErrorKind::MissingDelim,
                        })
                    }
                }
            } else {
                match line.split_once(delim) {
                    Some((a, b)) => (a.trim(), b.trim()),
                    None => {
                        return Err(TextError {
                            line: lno,
                            kind: TextErrorKind::MissingDelim,
                        })
                    }
                }
            };
            if fr_tok.is_empty() || to_tok.is_empty() {
                return Err(TextError {
                    line: lno,
                    kind: TextErrorKind::BlankName,
                });
            }
            let (fr, to) = if self.map_names {
                (out.intern(fr_tok), out.intern(to_tok))
            } else {
                let fr = self.parse_node(fr_tok, lno)?;
                let to = self.parse_node(to_tok, lno)?;
                out.graph.grow(fr.max(to) as usize + 1);
                (fr, to)
            };
            out.graph.lists_mut()[fr as usize].push(to);
        }
        Ok(out)
    }

    /// Write the arcs format, one `from to` line per arc.
    pub fn write_arc_list<Ty: EdgeType, W: Write>(
        &self,
        g: &AdjacencyList<NI, Ty>,
        w: &mut W,
    ) -> Result<usize, TextError> {
        self.check_base()?;
        let delim = if self.fr_delim.trim().is_empty() {
            " "
        } else {
            &self.fr_delim
        };
        let mut bytes = 0;
        for (fr, list) in g.iter() {
            for &to in list.iter().filter(|&&to| self.keep(fr, to)) {
                let line = format!("{}{}{}", self.format_ni(fr), delim, self.format_ni(to));
                w.write_all(line.as_bytes())?;
                w.write_all(b"\n")?;
                bytes += line.len() + 1;
            }
        }
        Ok(bytes)
    }
}
