use super::code::{self, CodeTable};
use super::coding_error::CodingError;
use super::{Symbol, SymbolFrequency};
use std::fmt;

#[derive(Clone, Debug)]
pub(super) enum NodeKind<S> {
    Leaf { symbol: S },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Debug)]
pub(super) struct Node<S> {
    pub(super) weight: usize,
    pub(super) kind: NodeKind<S>,
}

impl<S: Symbol> From<&SymbolFrequency<S>> for Node<S> {
    fn from(value: &SymbolFrequency<S>) -> Self {
        Self {
            weight: value.frequency,
            kind: NodeKind::Leaf {
                symbol: value.symbol.clone(),
            },
        }
    }
}

/// Binary tree built by a single greedy pass over symbols sorted by
/// ascending frequency.
///
/// All nodes live in one vector. The leaves occupy the first `leaf_count`
/// slots in merge order, inner nodes are appended behind them as they are
/// created.
pub struct HuffmanTree<S> {
    nodes: Vec<Node<S>>,
    root_index: usize,
    leaf_count: usize,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Builds the tree from frequencies sorted in ascending order.
    ///
    /// The two least frequent symbols seed the running root. Every further
    /// step attaches new material as the right child of a fresh root, the
    /// old root becoming its left child. If the running root already
    /// outweighs the symbol after the next one, the next two symbols are
    /// paired up first and attached together.
    ///
    /// Symbols with a frequency of zero are left out of the tree.
    pub fn new(
        sorted_frequencies: &[SymbolFrequency<S>],
    ) -> Result<HuffmanTree<S>, CodingError> {
        assert!(
            sorted_frequencies.is_sorted_by_key(|s| s.frequency),
            "Frequencies must be sorted in ascending order"
        );
        let nodes: Vec<Node<S>> = sorted_frequencies
            .iter()
            .filter(|s| s.frequency > 0)
            .map(Node::from)
            .collect();
        let leaf_count = nodes.len();
        let dropped = sorted_frequencies.len() - leaf_count;
        if dropped > 0 {
            log::debug!("left {} symbols with zero frequency out of the tree", dropped);
        }
        if leaf_count < 2 {
            return Err(CodingError::InsufficientSymbols(leaf_count));
        }

        let mut tree = HuffmanTree {
            nodes,
            root_index: 0,
            leaf_count,
        };
        tree.root_index = tree.merge(0, 1);
        let mut leaf_index = 2;
        while leaf_index < leaf_count {
            let right_index = if tree.is_pairing_required(leaf_index) {
                let pair_index = tree.merge(leaf_index, leaf_index + 1);
                leaf_index += 2;
                pair_index
            } else {
                leaf_index += 1;
                leaf_index - 1
            };
            let old_root_index = tree.root_index;
            tree.root_index = tree.merge(old_root_index, right_index);
        }
        log::debug!(
            "built tree with {} leaves and root weight {}",
            tree.leaf_count,
            tree.root_weight()
        );
        Ok(tree)
    }

    fn is_pairing_required(&self, leaf_index: usize) -> bool {
        let following_index = leaf_index + 1;
        following_index < self.leaf_count
            && self.root_weight() > self.nodes[following_index].weight
    }

    fn merge(&mut self, left: usize, right: usize) -> usize {
        let node = Node {
            weight: self.nodes[left].weight + self.nodes[right].weight,
            kind: NodeKind::Inner { left, right },
        };
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Code words of all symbols in the tree.
    pub fn codes(&self) -> CodeTable<S> {
        code::extract_codes(self)
    }
}

impl<S> HuffmanTree<S> {
    pub fn root_weight(&self) -> usize {
        self.root().weight
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub(super) fn root(&self) -> &Node<S> {
        &self.nodes[self.root_index]
    }

    pub(super) fn node(&self, index: usize) -> &Node<S> {
        &self.nodes[index]
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

// Node & Tree visualization
impl<S: fmt::Debug> Node<S> {
    fn get_string(&self, tree: &HuffmanTree<S>) -> Vec<String> {
        match &self.kind {
            NodeKind::Leaf { symbol } => vec![format!("(s:{:?},w:{})", symbol, self.weight)],
            NodeKind::Inner { left, right } => {
                let left_box: Vec<String> = tree.node(*left).get_string(tree);
                let right_box: Vec<String> = tree.node(*right).get_string(tree);
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = Self::center_of(&left_box[0]);
                let right_pos = Self::center_of(&right_box[0]);
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                let left_depth = left_box.len();
                let right_depth = right_box.len();
                for i in 0..std::cmp::max(left_depth, right_depth) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }

    fn center_of(line: &str) -> usize {
        let indent = line.chars().position(|c| c != ' ').unwrap_or(0);
        (indent * 2 + line.trim().chars().count()) / 2
    }
}

impl<S: fmt::Debug> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.root().get_string(self).iter() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
