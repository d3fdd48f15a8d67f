mod finalize;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::options::Duplicates;
use crate::{Error, Result, Value};

/// Child keys in arrival order, pointing at node ids.
pub type Children = IndexMap<SmolStr, usize>;

pub const ROOT: usize = 0;

/// A node of the tree under construction. Every container is a `Branch`
/// until [`Arena::into_map`] decides between mapping and sequence.
#[derive(Debug)]
pub enum Node {
    Branch(Children),
    Leaf(Value),
}

impl Node {
    pub fn is_branch(&self) -> bool {
        matches!(self, Node::Branch(_))
    }
}

#[derive(Debug)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::Branch(Children::new())],
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Stores `leaf` at the position named by `segments`, creating branches
    /// for every segment but the last.
    pub fn insert<S: AsRef<str>>(
        &mut self,
        segments: &[S],
        leaf: Value,
        duplicates: Duplicates,
    ) -> Result<()> {
        let Some((last, parents)) = segments.split_last() else {
            return Err(Error::malformed_key("empty key path"));
        };
        let mut current = ROOT;
        for (depth, segment) in parents.iter().enumerate() {
            current = match self.child(current, segment.as_ref()) {
                Some(id) if self.nodes[id].is_branch() => id,
                Some(_) => {
                    return Err(Error::conflict(format!(
                        "`{}` already holds a value and cannot contain `{}`",
                        render_path(&segments[..=depth]),
                        render_path(segments)
                    )));
                }
                None => self.push_child(current, segment.as_ref(), Node::Branch(Children::new())),
            };
        }

        match self.child(current, last.as_ref()) {
            None => {
                self.push_child(current, last.as_ref(), Node::Leaf(leaf));
                Ok(())
            }
            Some(id) if self.nodes[id].is_branch() => Err(Error::conflict(format!(
                "`{}` already holds nested keys and cannot be a value",
                render_path(segments)
            ))),
            Some(id) => match duplicates {
                Duplicates::Last => {
                    self.nodes[id] = Node::Leaf(leaf);
                    Ok(())
                }
                Duplicates::Reject => Err(Error::conflict(format!(
                    "`{}` is assigned more than once",
                    render_path(segments)
                ))),
            },
        }
    }

    fn child(&self, parent: usize, key: &str) -> Option<usize> {
        match &self.nodes[parent] {
            Node::Branch(children) => children.get(key).copied(),
            Node::Leaf(_) => None,
        }
    }

    fn push_child(&mut self, parent: usize, key: &str, node: Node) -> usize {
        let id = self.nodes.len();
        self.nodes.push(node);
        if let Node::Branch(children) = &mut self.nodes[parent] {
            children.insert(SmolStr::new(key), id);
        }
        id
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders segments back into bracket notation for error messages.
fn render_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for (idx, segment) in segments.iter().enumerate() {
        if idx == 0 {
            out.push_str(segment.as_ref());
        } else {
            out.push('[');
            out.push_str(segment.as_ref());
            out.push(']');
        }
    }
    out
}
