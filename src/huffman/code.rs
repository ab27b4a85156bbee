use std::collections::HashMap;

use super::tree::{HuffmanTree, Node, NodeKind};
use super::Symbol;

/// Maps every symbol to its code word, written as a string of '0' and '1'.
pub type CodeTable<S> = HashMap<S, String>;

/// Walks the tree depth first, left before right. Descending left appends a
/// '0', descending right a '1'. A root without children yields the empty
/// code word for its symbol.
pub fn extract_codes<S: Symbol>(tree: &HuffmanTree<S>) -> CodeTable<S> {
    let mut table = CodeTable::with_capacity(tree.leaf_count());
    let mut current_code = String::new();
    fill_table(&mut table, tree.root(), tree, &mut current_code);
    table
}

fn fill_table<S: Symbol>(
    table: &mut CodeTable<S>,
    node: &Node<S>,
    tree: &HuffmanTree<S>,
    current_code: &mut String,
) {
    match &node.kind {
        NodeKind::Leaf { symbol } => {
            table.insert(symbol.clone(), current_code.clone());
        }
        NodeKind::Inner { left, right } => {
            current_code.push('0');
            fill_table(table, tree.node(*left), tree, current_code);
            current_code.pop();
            current_code.push('1');
            fill_table(table, tree.node(*right), tree, current_code);
            current_code.pop();
        }
    }
}
