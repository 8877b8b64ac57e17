use super::types::PageSpec;

/// Rendering collaborator: turns a page descriptor into something the host can show
pub trait PageRenderer {
    type Handle;

    fn render_page(&mut self, page: &PageSpec, index: usize) -> Self::Handle;
}

/// Plain text page card used by the command line host
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    width: usize,
}

impl TextRenderer {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(10),
        }
    }
}

impl PageRenderer for TextRenderer {
    type Handle = String;

    fn render_page(&mut self, page: &PageSpec, index: usize) -> String {
        let width = if self.width == 0 { 40 } else { self.width };
        let rule = "-".repeat(width);
        let mut card = format!("{}\n[{}] {}\n", rule, index, page.id);
        if let Some(title) = &page.title {
            card.push_str(&format!("{}\n", title));
        }
        if let Some(body) = &page.body {
            card.push_str(&format!("\n{}\n", body));
        }
        card.push_str(&rule);
        card
    }
}
