use std::io::Write;

use results_core::{render, CardList, RenderedItem, ResultsViewModel, Section};
use results_logging::{results_error, results_info};
use url::Url;

use crate::controller::PageHost;
use crate::html::{render_page, PageContext};
use crate::persist::PageWriter;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Writes each view as an HTML page and prints a plain-text listing to `out`.
pub struct FileHost<W: Write> {
    writer: PageWriter,
    out: W,
    clear_on_scroll: bool,
    pending_scroll: bool,
}

impl<W: Write> FileHost<W> {
    pub fn new(writer: PageWriter, out: W, clear_on_scroll: bool) -> Self {
        Self {
            writer,
            out,
            clear_on_scroll,
            pending_scroll: false,
        }
    }

    /// The listing written so far.
    pub fn output(&self) -> &W {
        &self.out
    }

    fn print_listing(&mut self, view: &ResultsViewModel) -> std::io::Result<()> {
        if std::mem::take(&mut self.pending_scroll) && self.clear_on_scroll {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }

        if view.loading_visible {
            writeln!(self.out, "Loading results for {:?}...", view.query)?;
            return self.out.flush();
        }
        if let Some(message) = &view.error_message {
            writeln!(self.out, "{message}")?;
            return self.out.flush();
        }
        if let Some(stats) = &view.stats_text {
            writeln!(self.out, "{stats}")?;
        }
        if !view.failed_engines.is_empty() {
            writeln!(self.out, "No answer from: {}", view.failed_engines.join(", "))?;
        }
        if let Some(summary) = &view.ai_summary {
            writeln!(self.out, "\nSummary: {summary}")?;
        }
        if view.no_results_visible {
            writeln!(self.out, "No results found for your search.")?;
            return self.out.flush();
        }

        for section in [Section::Web, Section::News] {
            let mut list = CardList::new();
            render(&mut list, view.section(section));
            writeln!(self.out, "\n== {} ==", section.label())?;
            for (index, item) in list.items.iter().enumerate() {
                match item {
                    RenderedItem::Card(card) => {
                        writeln!(self.out, "{:>2}. {} [{}]", index + 1, card.title, card.source)?;
                        writeln!(self.out, "    {}", card.display_url)?;
                        if !card.snippet.is_empty() {
                            writeln!(self.out, "    {}", card.snippet)?;
                        }
                    }
                    RenderedItem::Placeholder(message) => writeln!(self.out, "   {message}")?,
                }
            }
        }

        if let Some(pagination) = view.pagination {
            let prev = if pagination.prev_enabled { "[p]rev" } else { "     " };
            writeln!(
                self.out,
                "\n{prev}  page {}  [n]ext",
                pagination.current_page
            )?;
        }
        self.out.flush()
    }
}

impl<W: Write> PageHost for FileHost<W> {
    fn show(&mut self, view: &ResultsViewModel, location: Option<&Url>) -> anyhow::Result<()> {
        let ctx = PageContext {
            location,
            rendered_at: chrono::Local::now().to_rfc3339(),
        };
        self.print_listing(view)?;
        let page = render_page(view, &ctx);
        self.writer.write(&page)?;
        Ok(())
    }

    fn push_location(&mut self, url: &Url) {
        results_info!("Page address is now {}", url);
        if let Err(err) = writeln!(self.out, "Address: {url}").and_then(|()| self.out.flush()) {
            results_error!("Failed to print page address: {}", err);
        }
    }

    fn scroll_to_top(&mut self) {
        self.pending_scroll = true;
    }
}
