//! Graphviz dot output.
//!
//! One writer covers all adjacency-list variants. The graph keyword and
//! edge operator follow the graph type: undirected graphs render as
//! `graph` with `--` edges, collapsing each reciprocal arc pair into one
//! edge and failing with [`DotError::DirectedGraph`] if an unpaired arc
//! remains. The [`undirect_arcs`](Dot::undirect_arcs) option instead
//! renders a *directed* graph's every arc as an undirected edge, with no
//! pairing requirement.
//!
//! Formatting is simple and intended for graph debugging; exact output
//! may change.

use core::fmt;
use std::io::{self, Write};

use crate::adj::{AdjacencyList, ArcEnd};
use crate::{EdgeType, LI, NI};

static TYPE: [&str; 2] = ["graph", "digraph"];
static EDGE: [&str; 2] = ["--", "->"];

#[derive(Debug)]
pub enum DotError {
    /// An undirected variant held an arc with no reciprocal.
    DirectedGraph(NI, NI),
    Io(io::Error),
}

impl fmt::Display for DotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DotError::DirectedGraph(fr, to) => {
                write!(f, "directed graph: arc {} -> {} has no reciprocal", fr, to)
            }
            DotError::Io(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for DotError {}

impl From<io::Error> for DotError {
    fn from(e: io::Error) -> Self {
        DotError::Io(e)
    }
}

/// Dot output configuration; build with the setter methods, then call
/// [`write`](Dot::write).
pub struct Dot<'a> {
    indent: &'a str,
    graph_attrs: Vec<(String, String)>,
    node_id: Option<&'a dyn Fn(NI) -> String>,
    node_label: Option<&'a dyn Fn(NI) -> String>,
    node_pos: Option<&'a dyn Fn(NI) -> (f64, f64)>,
    edge_label: Option<&'a dyn Fn(LI) -> String>,
    edge_attr: Option<&'a dyn Fn(LI) -> String>,
    isolated: bool,
    undirect_arcs: bool,
}

impl Default for Dot<'_> {
    fn default() -> Self {
        Dot {
            indent: "    ",
            graph_attrs: Vec::new(),
            node_id: None,
            node_label: None,
            node_pos: None,
            edge_label: None,
            edge_attr: None,
            isolated: false,
            undirect_arcs: false,
        }
    }
}

impl<'a> Dot<'a> {
    pub fn new() -> Dot<'a> {
        Dot::default()
    }

    /// Statement indentation; default four spaces.
    pub fn indent(mut self, s: &'a str) -> Self {
        self.indent = s;
        self
    }

    /// A `key = value` attribute on the graph itself.
    pub fn graph_attr(mut self, key: &str, value: &str) -> Self {
        self.graph_attrs.push((key.to_string(), value.to_string()));
        self
    }

    /// Node identifier text; default is the node number.
    pub fn node_id(mut self, f: &'a dyn Fn(NI) -> String) -> Self {
        self.node_id = Some(f);
        self
    }

    /// Emit a `label` attribute statement per node.
    pub fn node_label(mut self, f: &'a dyn Fn(NI) -> String) -> Self {
        self.node_label = Some(f);
        self
    }

    /// Emit `pos="x,y!"` per node and a `node [shape=point]` header.
    pub fn node_pos(mut self, f: &'a dyn Fn(NI) -> (f64, f64)) -> Self {
        self.node_pos = Some(f);
        self
    }

    /// Emit a `label` attribute per edge from its arc label.
    pub fn edge_label(mut self, f: &'a dyn Fn(LI) -> String) -> Self {
        self.edge_label = Some(f);
        self
    }

    /// Emit a raw attribute string per edge from its arc label.
    pub fn edge_attr(mut self, f: &'a dyn Fn(LI) -> String) -> Self {
        self.edge_attr = Some(f);
        self
    }

    /// Also write statements for nodes no arc touches.
    pub fn isolated(mut self) -> Self {
        self.isolated = true;
        self
    }

    /// Render a directed graph's arcs as undirected edges.
    pub fn undirect_arcs(mut self) -> Self {
        self.undirect_arcs = true;
        self
    }

    fn id(&self, n: NI) -> String {
        match self.node_id {
            Some(f) => f(n),
            None => n.to_string(),
        }
    }

    fn edge_attrs(&self, label: Option<LI>) -> String {
        let mut attrs = Vec::new();
        if let (Some(f), Some(l)) = (self.edge_label, label) {
            attrs.push(format!("label = \"{}\"", f(l)));
        }
        if let (Some(f), Some(l)) = (self.edge_attr, label) {
            attrs.push(f(l));
        }
        if attrs.is_empty() {
            String::new()
        } else {
            format!(" [{}]", attrs.join(", "))
        }
    }

    /// Write `g` in dot format.
    pub fn write<T, Ty, W>(&self, g: &AdjacencyList<T, Ty>, w: &mut W) -> Result<(), DotError>
    where
        T: ArcEnd,
        Ty: EdgeType,
        W: Write,
    {
        let undirected = !Ty::is_directed() || self.undirect_arcs;
        // An undirected *variant* must hold reciprocal pairs, which then
        // collapse; undirect_arcs on a directed variant takes arcs as
        // they come.
        let collapse = !Ty::is_directed();
        if collapse {
            if let Some((fr, to)) = g.unpaired_arc() {
                return Err(DotError::DirectedGraph(fr, to));
            }
        }

        writeln!(w, "{} {{", TYPE[usize::from(!undirected)])?;
        for (k, v) in &self.graph_attrs {
            writeln!(w, "{}{} = {}", self.indent, k, v)?;
        }
        if self.node_pos.is_some() {
            writeln!(w, "{}node [shape=point]", self.indent)?;
        }
        let mut node_stmts = false;
        if self.node_label.is_some() || self.node_pos.is_some() {
            node_stmts = true;
            for n in 0..g.order() as NI {
                let mut attrs = Vec::new();
                if let Some(f) = self.node_label {
                    attrs.push(format!("label = \"{}\"", f(n)));
                }
                if let Some(f) = self.node_pos {
                    let (x, y) = f(n);
                    attrs.push(format!("pos = \"{},{}!\"", x, y));
                }
                writeln!(w, "{}{} [{}]", self.indent, self.id(n), attrs.join(", "))?;
            }
        }
        if self.isolated && !node_stmts {
            let ind = g.in_degrees();
            for n in 0..g.order() as NI {
                if g.out_degree(n) == 0 && ind[n as usize] == 0 {
                    writeln!(w, "{}{}", self.indent, self.id(n))?;
                }
            }
        }

        let op = EDGE[usize::from(!undirected)];
        let plain = self.edge_label.is_none() && self.edge_attr.is_none();
        for (fr, list) in g.iter() {
            // With collapsing, each reciprocal pair appears once, from
            // its smaller end; loops are stored once anyway.
            let arcs: Vec<&T> = list
                .iter()
                .filter(|a| !collapse || a.to() >= fr)
                .collect();
            if arcs.is_empty() {
                continue;
            }
            if plain {
                // Unique targets share a subgraph right-hand side;
                // parallel arcs get their own lines.
                let mut firsts: Vec<NI> = Vec::new();
                let mut dups: Vec<NI> = Vec::new();
                for a in &arcs {
                    if firsts.contains(&a.to()) {
                        dups.push(a.to());
                    } else {
                        firsts.push(a.to());
                    }
                }
                if firsts.len() == 1 {
                    writeln!(w, "{}{} {} {}", self.indent, self.id(fr), op, self.id(firsts[0]))?;
                } else {
                    let rhs: Vec<String> = firsts.iter().map(|&t| self.id(t)).collect();
                    writeln!(
                        w,
                        "{}{} {} {{{}}}",
                        self.indent,
                        self.id(fr),
                        op,
                        rhs.join(" ")
                    )?;
                }
                for t in dups {
                    writeln!(w, "{}{} {} {}", self.indent, self.id(fr), op, self.id(t))?;
                }
            } else {
                for a in &arcs {
                    writeln!(
                        w,
                        "{}{} {} {}{}",
                        self.indent,
                        self.id(fr),
                        op,
                        self.id(a.to()),
                        self.edge_attrs(a.label())
                    )?;
                }
            }
        }
        writeln!(w, "}}")?;
        Ok(())
    }
}
