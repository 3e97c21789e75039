// HTML markup for the project list.

use std::fmt::Write;

use super::page::{ListEntry, ProjectList};

/// Render the list container as markup. Hidden items lose the `active` class.
pub fn render_html(list: &ProjectList) -> String {
    let mut html = String::from("<ul class=\"project-list\">\n");

    for entry in list.entries() {
        match entry {
            ListEntry::Placeholder(message) => {
                let _ = writeln!(
                    html,
                    "  <li class=\"project-item error\"><p>{}</p></li>",
                    escape(message)
                );
            }
            ListEntry::Project(node) => {
                let class = if node.visible {
                    "project-item active"
                } else {
                    "project-item"
                };
                let _ = writeln!(
                    html,
                    "  <li class=\"{}\" data-filter-item data-category=\"{}\">",
                    class,
                    escape(&node.category.to_lowercase())
                );
                let _ = writeln!(
                    html,
                    "    <a href=\"{}\" target=\"_blank\">",
                    escape(&node.url)
                );
                let _ = writeln!(
                    html,
                    "      <figure class=\"project-img\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></figure>",
                    escape(&node.image),
                    escape(&node.alt)
                );
                let _ = writeln!(
                    html,
                    "      <h3 class=\"project-title\">{}</h3>",
                    escape(&node.title)
                );
                let _ = writeln!(
                    html,
                    "      <p class=\"project-category\">{}</p>",
                    escape(&node.category_desc)
                );
                html.push_str("      <div class=\"project-tags\">");
                for tag in &node.tags {
                    let _ = write!(html, "<span class=\"project-tag\">{}</span>", escape(tag));
                }
                html.push_str("</div>\n");
                if let Some(caption) = &node.caption {
                    let _ = writeln!(
                        html,
                        "      <p class=\"project-updated\">Updated {}</p>",
                        escape(caption)
                    );
                }
                html.push_str("    </a>\n  </li>\n");
            }
        }
    }

    html.push_str("</ul>\n");
    html
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
