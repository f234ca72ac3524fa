//! Preview composition
//!
//! Builds the document shown in the preview frame from the editor buffer and,
//! for markup/style files, the companion file on the other side of the pair.

use std::cell::Cell;
use std::rc::Rc;

use dioxus_logger::tracing::debug;
use shared_types::{FileName, LanguageMode, WorkspaceId};

use crate::backend::Backend;
use crate::collaborators::{Editor, PreviewSurface};
use crate::error::Applied;
use crate::session::{SelectionTicket, SessionHandle};

pub const NOTHING_SELECTED_DOCUMENT: &str = r#"<div style="padding: 20px; font-family: Arial, sans-serif;"><h3>No project selected</h3><p>Select a project to see the preview.</p></div>"#;

/// Fallback companion names when no same-stem sibling is listed
const DEFAULT_STYLESHEET: &str = "styles.css";
const DEFAULT_PAGE: &str = "index.html";

/// Companion content delivered inline (by a rewrite response), bypassing a fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionContent {
    pub file: FileName,
    pub content: String,
}

/// The file paired with `file` at preview time.
///
/// `page.html` pairs with `page.css` when that is listed, else `styles.css`;
/// `page.css` pairs with `page.html` when listed, else `index.html`.
pub fn companion_for(file: &FileName, listed: &[FileName]) -> Option<FileName> {
    let (extension, fallback) = match file.mode() {
        LanguageMode::Markup => ("css", DEFAULT_STYLESHEET),
        LanguageMode::Style => ("html", DEFAULT_PAGE),
        LanguageMode::Script | LanguageMode::PlainText => return None,
    };
    let sibling = FileName::new(format!("{}.{}", file.stem(), extension));
    if listed.contains(&sibling) {
        return Some(sibling);
    }
    Some(FileName::from(fallback))
}

/// Splice `css` into the head of `markup` as an embedded stylesheet.
///
/// Blank stylesheets leave the markup untouched.
pub fn inject_style(markup: &str, css: &str) -> String {
    if css.trim().is_empty() {
        return markup.to_string();
    }

    let block = format!("<style>{css}</style>");
    // ASCII lowering keeps byte offsets aligned with `markup`
    let lower = markup.to_ascii_lowercase();

    let (at, insert) = if let Some(idx) = lower.find("</head>") {
        (idx, block)
    } else if let Some(idx) = open_tag_end(&lower, "<head") {
        (idx, block)
    } else if let Some(idx) = open_tag_end(&lower, "<html") {
        (idx, format!("<head>{block}</head>"))
    } else {
        (0, block)
    };

    let mut out = String::with_capacity(markup.len() + insert.len());
    out.push_str(&markup[..at]);
    out.push_str(&insert);
    out.push_str(&markup[at..]);
    out
}

/// Byte index just past the `>` of the first `<tag ...>` (not `<tagfoo>`)
fn open_tag_end(lower: &str, tag: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(rel) = lower[from..].find(tag) {
        let start = from + rel;
        let after = start + tag.len();
        match lower[after..].chars().next() {
            Some(c) if c == '>' || c.is_ascii_whitespace() => {
                return lower[after..].find('>').map(|gt| after + gt + 1);
            }
            _ => from = after,
        }
    }
    None
}

/// Stand-alone document that makes a bare stylesheet visually inspectable
pub fn style_sample_document(css: &str) -> String {
    format!(
        r##"<html>
<head>
    <title>CSS Preview</title>
    <style>{css}</style>
</head>
<body>
    <div style="padding: 20px; font-family: Arial, sans-serif;">
        <h3>CSS Preview</h3>
        <p>This is a preview of the CSS file. Open an HTML file to see the full preview.</p>
        <div class="sample-elements">
            <h1>Sample Heading 1</h1>
            <h2>Sample Heading 2</h2>
            <p>Sample paragraph text</p>
            <a href="#">Sample link</a>
            <ul><li>First item</li><li>Second item</li></ul>
            <button>Sample Button</button>
            <div class="box">Sample Box</div>
        </div>
    </div>
</body>
</html>"##
    )
}

/// Token for one debounced edit; only the latest one flushes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTicket(u64);

/// Coalesces rapid edit notifications into a single recompose
#[derive(Debug, Default)]
pub struct EditDebounce {
    latest: Cell<u64>,
}

impl EditDebounce {
    pub fn touch(&self) -> EditTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        EditTicket(next)
    }

    pub fn is_latest(&self, ticket: EditTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

/// Produces the preview document for the current selection.
///
/// Every compose captures the selection when issued and gets a sequence
/// number. A finished compose renders only if the selection is unchanged and
/// no later compose has rendered already.
pub struct PreviewComposer {
    backend: Rc<dyn Backend>,
    session: SessionHandle,
    editor: Rc<dyn Editor>,
    surface: Rc<dyn PreviewSurface>,
    issued: Cell<u64>,
    rendered: Cell<u64>,
}

impl PreviewComposer {
    pub fn new(
        backend: Rc<dyn Backend>,
        session: SessionHandle,
        editor: Rc<dyn Editor>,
        surface: Rc<dyn PreviewSurface>,
    ) -> Self {
        Self {
            backend,
            session,
            editor,
            surface,
            issued: Cell::new(0),
            rendered: Cell::new(0),
        }
    }

    /// Compose and render the preview.
    ///
    /// `handoff` is consumed by this call only: a companion delivered by a
    /// rewrite response replaces the fetch once and is never reused.
    pub async fn compose(&self, handoff: Option<CompanionContent>) -> Applied<String> {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);
        let ticket = self.session.ticket();

        let Some(workspace) = ticket.workspace.clone() else {
            return self.finish(seq, &ticket, NOTHING_SELECTED_DOCUMENT.to_string());
        };
        let Some(file) = ticket.file.clone() else {
            return self.finish(seq, &ticket, String::new());
        };
        let mode = file.mode();
        if !mode.is_previewable() || !self.session.buffer().is_ready_for(&file) {
            return self.finish(seq, &ticket, String::new());
        }

        let listed = self.session.files();
        let companion = match companion_for(&file, &listed) {
            Some(name) => match handoff {
                Some(inline) if inline.file == name => Some(inline.content),
                _ => self.fetch_companion(&workspace, &name).await,
            },
            None => None,
        }
        .filter(|content| !content.trim().is_empty());

        if !self.session.is_current(&ticket) {
            debug!("Dropping preview for {} (selection changed)", file);
            return Applied::Stale;
        }

        let current = self.editor.content();
        let document = match (mode, companion) {
            (LanguageMode::Markup, Some(css)) => inject_style(&current, &css),
            (LanguageMode::Markup, None) => current,
            (LanguageMode::Style, Some(page)) => inject_style(&page, &current),
            (LanguageMode::Style, None) => style_sample_document(&current),
            _ => String::new(),
        };
        self.finish(seq, &ticket, document)
    }

    async fn fetch_companion(&self, workspace: &WorkspaceId, file: &FileName) -> Option<String> {
        match self.backend.read_file(workspace, file).await {
            Ok(content) => Some(content),
            Err(e) => {
                debug!("Companion {} unavailable, previewing alone: {}", file, e);
                None
            }
        }
    }

    fn finish(&self, seq: u64, ticket: &SelectionTicket, document: String) -> Applied<String> {
        if !self.session.is_current(ticket) || seq < self.rendered.get() {
            debug!("Dropping superseded preview #{}", seq);
            return Applied::Stale;
        }
        self.surface.render(&document);
        self.rendered.set(seq);
        Applied::Current(document)
    }
}
