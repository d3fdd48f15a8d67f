use std::mem;

use super::{Arena, Children, Node, ROOT};
use crate::{Map, Value};

impl Arena {
    /// Converts the finished tree bottom-up. A branch becomes a sequence
    /// iff its keys are exactly `"0", "1", ..., "n-1"` in arrival order;
    /// the root always stays a mapping.
    pub fn into_map(mut self) -> Map {
        match self.take(ROOT) {
            Node::Branch(children) => self.build_map(children),
            Node::Leaf(_) => Map::new(),
        }
    }

    fn take(&mut self, id: usize) -> Node {
        mem::replace(&mut self.nodes[id], Node::Leaf(Value::Null))
    }

    fn build_value(&mut self, id: usize) -> Value {
        match self.take(id) {
            Node::Leaf(value) => value,
            Node::Branch(children) if is_index_sequence(&children) => Value::Sequence(
                children
                    .values()
                    .map(|&child| self.build_value(child))
                    .collect(),
            ),
            Node::Branch(children) => Value::Mapping(self.build_map(children)),
        }
    }

    fn build_map(&mut self, children: Children) -> Map {
        let mut map = Map::with_capacity(children.len());
        for (key, child) in children {
            let value = self.build_value(child);
            map.insert(key.to_string(), value);
        }
        map
    }
}

fn is_index_sequence(children: &Children) -> bool {
    if children.is_empty() {
        return false;
    }
    let mut buffer = itoa::Buffer::new();
    children
        .keys()
        .enumerate()
        .all(|(idx, key)| buffer.format(idx) == key.as_str())
}
