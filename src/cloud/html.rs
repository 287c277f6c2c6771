//! HTML document serialization.
//!
//! Writes the fixed-structure tag cloud document: a titled header with a
//! stylesheet reference, then one `<span>` per selected word carrying its
//! size class and its raw count as a tooltip, in selector order. The
//! output is deterministic — identical entries produce byte-identical
//! documents.

use std::io::Write;

use super::scale::FontScale;
use crate::error::TagCloudError;
use crate::types::{CloudConfig, RankedEntry};

/// Stylesheet the generated document links to.
pub const STYLESHEET_HREF: &str = "http://web.cse.ohio-state.edu/software/2231/web-sw2/\
                                   assignments/projects/tag-cloud-generator/data/tagcloud.css";

/// Serializes a selection into the tag cloud document.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    min_size: u32,
    max_size: u32,
}

impl HtmlRenderer {
    /// Create a renderer using the font bounds of `config`.
    pub fn new(config: &CloudConfig) -> Self {
        Self {
            min_size: config.min_font_size,
            max_size: config.max_font_size,
        }
    }

    /// Write the complete document for `entries` to `sink`.
    ///
    /// `source_name` appears in the title; the entry order is preserved.
    /// An empty selection produces header and footer with no tag spans
    /// and no size computation. Any write failure aborts with
    /// [`TagCloudError::Write`] — the partial document must not be
    /// treated as valid.
    pub fn render<W: Write>(
        &self,
        mut sink: W,
        source_name: &str,
        entries: &[RankedEntry],
    ) -> Result<(), TagCloudError> {
        self.write_document(&mut sink, source_name, entries)
            .map_err(|source| TagCloudError::Write { source })
    }

    fn write_document<W: Write>(
        &self,
        sink: &mut W,
        source_name: &str,
        entries: &[RankedEntry],
    ) -> std::io::Result<()> {
        let title = format!("Top {} words in {}", entries.len(), source_name);

        writeln!(sink, "<html>")?;
        writeln!(sink, " <head>")?;
        writeln!(sink, "  <title>{title}</title>")?;
        writeln!(
            sink,
            "  <link href=\"{STYLESHEET_HREF}\"rel=\"stylesheet\" type=\"text/css\">"
        )?;
        writeln!(sink, " </head>")?;
        writeln!(sink, " <body>")?;
        writeln!(sink, "  <h2>{title}</h2>")?;
        writeln!(sink, "  <hr>")?;
        writeln!(sink, "   <div class=\"cdiv\">")?;
        writeln!(sink, "    <p class=\"cbox\">")?;

        if !entries.is_empty() {
            let scale = FontScale::fit(entries, self.min_size, self.max_size);
            for entry in entries {
                let size = scale.size_class(entry.count);
                writeln!(
                    sink,
                    "     <span style=\"cursor:default\" class=\"f{size}\" \
                     title=\"count: {}\">{}</span>",
                    entry.count, entry.word
                )?;
            }
        }

        writeln!(sink, "    </p>")?;
        writeln!(sink, "   </div>")?;
        writeln!(sink, " </body>")?;
        writeln!(sink, "</html>")?;
        sink.flush()
    }
}
