// Fixture builder: serializes a word list into the dictionary layout.
//
// Lists are written breadth-first with children sorted by code unit, so every
// child address points forward and the root list sits at offset 0.

use std::collections::{BTreeMap, VecDeque};

use keytrie_core::Codepage;
use keytrie_core::codepage::{ESCAPE_BYTE, ISO_8859_7};

use crate::format::{
    ADDRESS_MASK, ADDRESS_SIZE, COUNT_SIZE, ESCAPED_CHAR_SIZE, FLAG_ADDRESS_MASK,
    FLAG_TERMINAL_MASK, FREQUENCY_SIZE, NULL_ADDRESS_SIZE,
};

#[derive(Default)]
struct Node {
    children: BTreeMap<u16, Child>,
}

#[derive(Default)]
struct Child {
    frequency: Option<u8>,
    node: Option<Box<Node>>,
}

/// Builds dictionary buffers for tests and benchmarks.
pub struct TrieWriter<'a> {
    codepage: &'a Codepage,
    root: Node,
}

impl Default for TrieWriter<'static> {
    fn default() -> Self {
        Self::new(&ISO_8859_7)
    }
}

impl<'a> TrieWriter<'a> {
    pub fn new(codepage: &'a Codepage) -> Self {
        Self {
            codepage,
            root: Node::default(),
        }
    }

    /// Add `word` with `frequency`. Re-inserting a word overwrites its frequency.
    pub fn insert(&mut self, word: &[u16], frequency: u8) -> &mut Self {
        let Some((&last, prefix)) = word.split_last() else {
            return self;
        };
        let mut node: &mut Node = &mut self.root;
        for &c in prefix {
            node = &mut **node
                .children
                .entry(c)
                .or_default()
                .node
                .get_or_insert_with(Box::default);
        }
        node.children.entry(last).or_default().frequency = Some(frequency);
        self
    }

    pub fn insert_str(&mut self, word: &str, frequency: u8) -> &mut Self {
        let units: Vec<u16> = word.encode_utf16().collect();
        self.insert(&units, frequency)
    }

    /// Serialize the trie.
    ///
    /// Panics if a sibling list has more than 255 entries or the output
    /// exceeds the address space; fixtures never get close.
    pub fn to_bytes(&self) -> Vec<u8> {
        let order = self.breadth_first();

        let mut addresses = Vec::with_capacity(order.len());
        let mut next = 0usize;
        for node in &order {
            addresses.push(next);
            next += self.list_size(node);
        }
        assert!(next <= ADDRESS_MASK + 1, "dictionary exceeds address space");

        let mut out = Vec::with_capacity(next);
        // Child lists appear in `order` in exactly the sequence they are
        // referenced below, starting right after the root.
        let mut child_index = 1;
        for node in &order {
            assert!(node.children.len() <= u8::MAX as usize, "sibling list too long");
            out.push(node.children.len() as u8);
            for (&c, child) in &node.children {
                self.write_char(&mut out, c);
                let terminal = if child.frequency.is_some() { FLAG_TERMINAL_MASK } else { 0 };
                match &child.node {
                    Some(_) => {
                        let address = addresses[child_index];
                        child_index += 1;
                        out.push(terminal | FLAG_ADDRESS_MASK | (address >> 16) as u8);
                        out.push((address >> 8) as u8);
                        out.push(address as u8);
                    }
                    None => out.push(terminal),
                }
                if let Some(freq) = child.frequency {
                    out.push(freq);
                }
            }
        }
        debug_assert_eq!(out.len(), next);
        out
    }

    fn breadth_first(&self) -> Vec<&Node> {
        let mut order = Vec::new();
        let mut queue = VecDeque::from([&self.root]);
        while let Some(node) = queue.pop_front() {
            order.push(node);
            for child in node.children.values() {
                if let Some(sub) = &child.node {
                    queue.push_back(sub);
                }
            }
        }
        order
    }

    fn list_size(&self, node: &Node) -> usize {
        let mut size = COUNT_SIZE;
        for (&c, child) in &node.children {
            size += if self.codepage.encode(c).is_some() { 1 } else { ESCAPED_CHAR_SIZE };
            size += if child.node.is_some() { ADDRESS_SIZE } else { NULL_ADDRESS_SIZE };
            if child.frequency.is_some() {
                size += FREQUENCY_SIZE;
            }
        }
        size
    }

    fn write_char(&self, out: &mut Vec<u8>, c: u16) {
        match self.codepage.encode(c) {
            Some(b) => out.push(b),
            None => {
                out.push(ESCAPE_BYTE);
                out.extend_from_slice(&c.to_be_bytes());
            }
        }
    }
}
