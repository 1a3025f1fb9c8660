//! Block extraction from indentation-structured configuration.
//!
//! SR classic CLI has no braces. A block starts at a header line and ends
//! either at an `exit` on the header's own indent width, or right before the
//! first line indented less than the header. Blank and comment lines never
//! affect the boundary.
//!
//! ```text
//!     vprn 100 customer 1 create        <- header, indent 4
//!         interface "to-peer" create    <- nested header, indent 8
//!             address 10.1.1.1/30
//!         exit                          <- closes the interface
//!     exit                              <- closes the vprn
//! ```
//!
//! Blocks are plain index ranges into a [`ConfigDocument`]; no text is copied
//! until [`Block::text`] is asked for.

use log::debug;

use crate::{
    document::{ConfigDocument, IndentedLine},
    statement,
};

/// How a block's range was terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEnd {
    /// An `exit` at the header's indent width; the `exit` is the last line.
    Exit,
    /// The next line was indented less than the header and was not consumed.
    Dedent,
    /// The document ended before any terminator.
    EndOfDocument,
}

/// A contiguous, inclusive range of lines headed by a keyword statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    start: usize,
    end: usize,
    indent: usize,
    closed_by: BlockEnd,
}

impl Block {
    /// Returns the index of the header line.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the index of the last line in the block (inclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the header's indent width.
    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn closed_by(&self) -> BlockEnd {
        self.closed_by
    }

    /// Returns every line of the block, header included.
    pub fn lines<'d, 'src>(&self, doc: &'d ConfigDocument<'src>) -> &'d [IndentedLine<'src>] {
        &doc.lines()[self.start..=self.end]
    }

    /// Returns the block's lines after the header.
    pub fn body<'d, 'src>(&self, doc: &'d ConfigDocument<'src>) -> &'d [IndentedLine<'src>] {
        &doc.lines()[self.start + 1..=self.end]
    }

    /// Returns the line indices of the body paired with their lines.
    pub fn indexed_body<'d, 'src>(
        &self,
        doc: &'d ConfigDocument<'src>,
    ) -> impl Iterator<Item = (usize, &'d IndentedLine<'src>)> + 'd {
        let start = self.start + 1;
        self.body(doc)
            .iter()
            .enumerate()
            .map(move |(offset, line)| (start + offset, line))
    }

    /// Joins the raw lines of the block with `\n`.
    pub fn text(&self, doc: &ConfigDocument<'_>) -> String {
        self.lines(doc)
            .iter()
            .map(|line| line.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns `true` if any body line is an `address` statement.
    pub fn has_address(&self, doc: &ConfigDocument<'_>) -> bool {
        self.body(doc)
            .iter()
            .any(|line| statement::is_address(line.trimmed()))
    }
}

/// Builds the block headed by the line at `start`.
///
/// Returns `None` if `start` is past the end of the document.
pub fn block_at(doc: &ConfigDocument<'_>, start: usize) -> Option<Block> {
    let indent = doc.line(start)?.indent();
    let mut end = start;
    let mut closed_by = BlockEnd::EndOfDocument;

    for (index, line) in doc.lines().iter().enumerate().skip(start + 1) {
        if line.is_transparent() {
            end = index;
            continue;
        }

        if line.is_exit() && line.indent() == indent {
            end = index;
            closed_by = BlockEnd::Exit;
            break;
        }

        if line.indent() < indent && !line.is_exit() {
            closed_by = BlockEnd::Dedent;
            break;
        }

        end = index;
    }

    Some(Block {
        start,
        end,
        indent,
        closed_by,
    })
}

/// Collects every block whose header satisfies `is_header`, in document order.
///
/// Scanning resumes on the line after each header, so a matching header nested
/// inside another match is reported as well.
pub fn extract_blocks<'src, F>(doc: &ConfigDocument<'src>, mut is_header: F) -> Vec<Block>
where
    F: FnMut(&IndentedLine<'src>) -> bool,
{
    doc.lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_transparent() && is_header(*line))
        .filter_map(|(index, _)| block_at(doc, index))
        .collect()
}

/// Picks one block among same-named candidates.
///
/// A configuration may declare an interface shell early and redefine it
/// later with real attributes. The first candidate carrying an `address`
/// statement wins; otherwise the last candidate is used.
pub fn select_candidate(doc: &ConfigDocument<'_>, candidates: &[Block]) -> Option<Block> {
    if candidates.len() > 1 {
        debug!(candidates = candidates.len(); "Multiple candidate blocks for header");
    }

    candidates
        .iter()
        .find(|block| block.has_address(doc))
        .or_else(|| candidates.last())
        .copied()
}

/// Extracts the preferred block whose header satisfies `is_header`.
///
/// See [`select_candidate`] for how duplicates are resolved.
pub fn extract_block<'src, F>(doc: &ConfigDocument<'src>, is_header: F) -> Option<Block>
where
    F: FnMut(&IndentedLine<'src>) -> bool,
{
    let candidates = extract_blocks(doc, is_header);
    select_candidate(doc, &candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(keyword: &'static str) -> impl FnMut(&IndentedLine<'_>) -> bool {
        move |line: &IndentedLine<'_>| line.trimmed().starts_with(keyword)
    }

    #[test]
    fn test_block_closed_by_exit() {
        let source = [
            "    vprn 100 customer 1 create",
            "        description \"Customer A\"",
            "    exit",
            "    vprn 200 customer 1 create",
            "    exit",
        ]
        .join("\n");
        let doc = ConfigDocument::new(&source);
        let block = extract_block(&doc, header("vprn 100")).unwrap();

        assert_eq!(block.start(), 0);
        assert_eq!(block.end(), 2);
        assert_eq!(block.indent(), 4);
        assert_eq!(block.closed_by(), BlockEnd::Exit);
    }

    #[test]
    fn test_nested_exit_does_not_close_outer_block() {
        let source = [
            "    interface \"to-peer\" create",
            "        sap 1/1/1 create",
            "            ingress",
            "                qos 10",
            "            exit",
            "        exit",
            "    exit",
            "    interface \"other\" create",
            "    exit",
        ]
        .join("\n");
        let doc = ConfigDocument::new(&source);
        let block = extract_block(&doc, header("interface \"to-peer\"")).unwrap();

        assert_eq!(block.end(), 6);
        assert_eq!(block.closed_by(), BlockEnd::Exit);
    }

    #[test]
    fn test_block_closed_by_dedent() {
        let source = [
            "        port 1/1/1",
            "            description \"uplink\"",
            "    router",
            "        static-route 0.0.0.0/0 next-hop 10.0.0.1",
        ]
        .join("\n");
        let doc = ConfigDocument::new(&source);
        let block = extract_block(&doc, header("port 1/1/1")).unwrap();

        assert_eq!(block.end(), 1);
        assert_eq!(block.closed_by(), BlockEnd::Dedent);
        assert!(!block.text(&doc).contains("router"));
    }

    #[test]
    fn test_transparent_lines_are_kept() {
        let source = [
            "    system",
            "        # hostname below",
            "",
            "        name \"R1\"",
            "    exit",
        ]
        .join("\n");
        let doc = ConfigDocument::new(&source);
        let block = extract_block(&doc, header("system")).unwrap();

        assert_eq!(block.end(), 4);
        assert_eq!(block.body(&doc).len(), 4);
    }

    #[test]
    fn test_comment_at_lower_indent_does_not_close() {
        let source = [
            "        interface \"a\" create",
            "# vendor banner",
            "            address 10.0.0.1/30",
            "        exit",
        ]
        .join("\n");
        let doc = ConfigDocument::new(&source);
        let block = extract_block(&doc, header("interface")).unwrap();

        assert_eq!(block.end(), 3);
        assert!(block.has_address(&doc));
    }

    #[test]
    fn test_block_runs_to_end_of_document() {
        let doc = ConfigDocument::new("ies 5 create\n    shutdown");
        let block = block_at(&doc, 0).unwrap();

        assert_eq!(block.end(), 1);
        assert_eq!(block.closed_by(), BlockEnd::EndOfDocument);
    }

    #[test]
    fn test_block_at_out_of_range() {
        let doc = ConfigDocument::new("exit");
        assert!(block_at(&doc, 3).is_none());
    }

    #[test]
    fn test_indexed_body() {
        let doc = ConfigDocument::new("ies 5 create\n    shutdown\nexit");
        let block = block_at(&doc, 0).unwrap();
        let indices: Vec<usize> = block.indexed_body(&doc).map(|(index, _)| index).collect();

        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_address_bearing_candidate_wins_when_declared_first() {
        let source = [
            "    interface \"dup\" create",
            "        address 10.0.0.1/30",
            "    exit",
            "    interface \"dup\" create",
            "        shutdown",
            "    exit",
        ]
        .join("\n");
        let doc = ConfigDocument::new(&source);
        let block = extract_block(&doc, header("interface \"dup\"")).unwrap();

        assert_eq!(block.start(), 0);
    }

    #[test]
    fn test_address_bearing_candidate_wins_when_declared_last() {
        let source = [
            "    interface \"dup\" create",
            "    exit",
            "    interface \"dup\" create",
            "        address 10.0.0.1/30",
            "    exit",
        ]
        .join("\n");
        let doc = ConfigDocument::new(&source);
        let block = extract_block(&doc, header("interface \"dup\"")).unwrap();

        assert_eq!(block.start(), 2);
    }

    #[test]
    fn test_last_candidate_without_address() {
        let source = [
            "    interface \"dup\" create",
            "    exit",
            "    interface \"dup\" create",
            "        description \"second\"",
            "    exit",
        ]
        .join("\n");
        let doc = ConfigDocument::new(&source);
        let block = extract_block(&doc, header("interface \"dup\"")).unwrap();

        assert_eq!(block.start(), 2);
    }

    #[test]
    fn test_no_matching_header() {
        let doc = ConfigDocument::new("    vprn 100 create\n    exit");
        assert!(extract_block(&doc, header("interface")).is_none());
        assert!(extract_blocks(&doc, header("interface")).is_empty());
    }
}
