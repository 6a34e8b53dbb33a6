//! Parsed document handed from the markdown parser to the serializers.

/// Result of parsing a markdown source.
///
/// `blocks` holds finished HTML fragments in output order. A list or fenced code
/// block spans several fragments (its opening tag, one fragment per item or line,
/// its closing tag), so the sequence maps one-to-one onto body lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<String>,
    /// Plain text of the first level-1 heading, with inline tags stripped.
    pub title: Option<String>,
}

impl Document {
    pub fn new(blocks: Vec<String>, title: Option<String>) -> Self {
        Self { blocks, title }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The body as text, one fragment per line, each terminated by `\n`.
    pub fn body(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            out.push_str(block);
            out.push('\n');
        }
        out
    }
}
