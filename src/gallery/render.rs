//! HTML rendering for the gallery page.

use maud::{html, Markup, DOCTYPE};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{GalleryItem, NAV_VIEWS, SCRIPT_NAME};

const PAGE_TITLE: &str = "GraphDefang";
const GRAPHDEFANG_URL: &str = "http://www.bl.org/~jpk/graphdefang";
const CGI_URL: &str = "./graphdefang.cgi";

/// Characters left alone when a name is placed in a URL path or query value
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const UNAVAILABLE_MESSAGE: &str = "The graph directory cannot be read right now.";

/// Link to `page` showing `view`.
pub fn view_href(page: &str, view: &str) -> String {
    format!("{}?view={}", page, utf8_percent_encode(view, URL_COMPONENT))
}

/// Relative image source for a file in the output directory.
pub fn image_src(filename: &str) -> String {
    format!("./{}", utf8_percent_encode(filename, URL_COMPONENT))
}

/// Full gallery page: navigation, one linked image per item, footer.
///
/// Every view link targets `page`, normally [`SCRIPT_NAME`].
pub fn render_page(page: &str, items: &[GalleryItem]) -> Markup {
    layout(page, html! {
        @for item in items {
            a href=(view_href(page, &item.suffix)) {
                img src=(image_src(&item.filename)) border="0" alt=(item.filename);
            }
            p;
        }
    })
}

/// Page shown when the output directory cannot be read.
pub fn render_error_page() -> Markup {
    layout(SCRIPT_NAME, html! {
        h2 { "Graphs unavailable" }
        p { (UNAVAILABLE_MESSAGE) }
    })
}

fn layout(page: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta http-equiv="Content-Type" content="text/html; charset=utf-8";
                title { (PAGE_TITLE) }
            }
            body {
                center {
                    (nav_bar(page))
                    p;
                    (content)
                }
                (footer())
            }
        }
    }
}

fn nav_bar(page: &str) -> Markup {
    html! {
        table border="0" width="50%" {
            tr align="center" {
                @for (view, label) in NAV_VIEWS {
                    td {
                        a href=(view_href(page, view)) { (label) }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        "Graphs created with "
        a href=(GRAPHDEFANG_URL) { "GraphDefang" }
        "."
        br;
        br;
        "Interactive CGI Version at: "
        a href=(CGI_URL) { "GraphDefang CGI" }
        "."
    }
}
