//! # Dump
//!
//! The Dump-Format lists every vertex in stored order on its own line: `[v]` followed by one
//! `->[d]` per outgoing edge (`->[d,w]` if the graph is weighted), or `->[none,none]` if the
//! vertex has no outgoing edge. For example, a directed weighted graph with edges `(0,1;5)` and
//! `(0,2;7)` on vertices `0..3` is dumped as
//! ```text
//! [0]->[1,5]->[2,7]
//! [1]->[none,none]
//! [2]->[none,none]
//! ```
use std::io::Write;

use super::*;

/// A writer for the Dump-Format
#[derive(Debug, Clone, Default)]
pub struct DumpWriter {
    /// Never print weights, even for weighted graphs
    hide_weights: bool,
}

impl DumpWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, weighted graphs are dumped like unweighted ones
    pub fn hide_weights(mut self, hide_weights: bool) -> Self {
        self.hide_weights = hide_weights;
        self
    }

    /// Writes the line of a single vertex
    pub fn write_vertex<W, I, E>(&self, writer: &mut W, v: Node, edges: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = E>,
        E: EdgeModel,
    {
        write!(writer, "[{v}]")?;

        let mut empty = true;
        for edge in edges {
            empty = false;
            if E::WEIGHTED && !self.hide_weights {
                write!(writer, "->[{},{}]", edge.destination(), edge.weight())?;
            } else {
                write!(writer, "->[{}]", edge.destination())?;
            }
        }

        if empty {
            write!(writer, "->[none,none]")?;
        }
        writeln!(writer)
    }
}

impl<G> GraphWriter<G> for DumpWriter
where
    G: VertexEdgeStore,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        for v in graph.vertices() {
            self.write_vertex(&mut writer, v, graph.out_edges(v))?;
        }
        Ok(())
    }
}

/// Trait for dumping a graph with default settings.
pub trait DumpWrite {
    /// Tries to write the dump to a writer
    fn try_write_dump<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the dump to a file
    fn try_write_dump_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dump(writer)
    }

    /// Returns the dump as a string
    fn dump(&self) -> String {
        let mut buffer = Vec::new();
        match self.try_write_dump(&mut buffer) {
            Ok(()) => String::from_utf8_lossy(&buffer).into_owned(),
            Err(_) => String::new(),
        }
    }
}

impl<G> DumpWrite for G
where
    G: VertexEdgeStore,
{
    fn try_write_dump<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DumpWriter::default().try_write_graph(self, writer)
    }
}
