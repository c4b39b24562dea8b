//! ASCII drawing of a suffix tree
//!
//! ```text
//! .__
//!    |
//!    |__a__
//!          |
//!          |__na
//! ```
//!
//! The root is drawn as `.`, every edge as `__label`, and the children of a
//! node hang below it on a `|` guide.

use super::{NodeId, SuffixTree};
use std::fmt::Write;

/// Symbols that can be printed as part of an edge label
pub trait LabelSymbols: Sized {
    fn write_label(label: &[Self], out: &mut String);
}

impl LabelSymbols for u8 {
    fn write_label(label: &[u8], out: &mut String) {
        for chunk in label.utf8_chunks() {
            out.push_str(chunk.valid());
            for &b in chunk.invalid() {
                let _ = write!(out, "\\x{:02x}", b);
            }
        }
    }
}

impl LabelSymbols for char {
    fn write_label(label: &[char], out: &mut String) {
        out.extend(label.iter());
    }
}

impl<T: LabelSymbols> SuffixTree<'_, T> {
    /// Draw the tree, one edge per line group
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_node(NodeId::ROOT, 0, &mut out);
        out
    }

    fn render_node(&self, id: NodeId, offset: usize, out: &mut String) {
        let edge = if self.node(id).is_root() {
            ".".to_string()
        } else {
            let mut edge = String::from("__");
            T::write_label(self.label(id), &mut edge);
            edge
        };
        out.push_str(&edge);

        let children = self.children(id);
        if children.is_empty() {
            out.push('\n');
            return;
        }

        out.push_str("__\n");
        let indent = offset + edge.chars().count() + 2;
        for &child in children {
            let _ = writeln!(out, "{:indent$}|", "", indent = indent);
            let _ = write!(out, "{:indent$}|", "", indent = indent);
            self.render_node(child, indent + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::index::build_suffix_array;

    #[test]
    fn test_render_aab() {
        let sa = build_suffix_array(b"aab");
        let drawing = sa.suffix_tree().render();
        let expected = "\
.__
   |
   |__a__
         |
         |__ab
         |
         |__b
   |
   |__b
";
        assert_eq!(drawing, expected);
    }

    #[test]
    fn test_render_empty() {
        let sa = build_suffix_array::<u8>(&[]);
        assert_eq!(sa.suffix_tree().render(), ".\n");
    }

    #[test]
    fn test_render_chars_and_invalid_bytes() {
        let text: Vec<char> = "żż".chars().collect();
        let sa = build_suffix_array(&text);
        assert!(sa.suffix_tree().render().contains("__ż"));

        let sa = build_suffix_array(&[0xffu8, b'a']);
        assert!(sa.suffix_tree().render().contains("\\xff"));
    }
}
