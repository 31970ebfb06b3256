//! Markdown rendering with fixed options: GFM extensions plus significant
//! single line breaks.

use comrak::Options;

/// Renders Markdown to an HTML fragment.
///
/// Total function: malformed input degrades to whatever HTML comrak can
/// produce, it never fails. Feeding already-rendered HTML back in is safe
/// because raw HTML passes through.
pub fn render_markdown(markdown: &str) -> String {
    comrak::markdown_to_html(markdown, &render_options())
}

fn render_options() -> Options<'static> {
    let mut options = Options::default();

    let ext = &mut options.extension;
    ext.strikethrough = true;
    ext.table = true;
    ext.autolink = true;
    ext.tasklist = true;

    let render = &mut options.render;
    // Single newlines inside the generated resume are real line breaks.
    render.hardbreaks = true;
    // Raw inline HTML passes through untouched.
    render.r#unsafe = true;

    options
}
