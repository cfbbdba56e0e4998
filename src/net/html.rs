//! HTML parsing helpers over `scraper`'s CSS selector engine.
//!
//! The extraction pathways treat a page as a queryable document: select
//! fragments by structural role, read their text or a specific attribute,
//! and occasionally look at an inline style. These helpers wrap the few
//! query shapes the pathways need, and [`parse_rows`] fans row parsing out
//! over rayon the way listing pages with many rows benefit from.
//!
//! # Examples
//!
//! ```rust
//! use bestiary::net::html;
//!
//! let document = html::parse(r#"<h1 class="title">Dire Wolf</h1>"#);
//! let title = html::select_text(document.root_element(), ".title");
//! assert_eq!(title, Some("Dire Wolf".to_string()));
//! ```

use rayon::prelude::*;
use scraper::{ElementRef, Html, Selector};

use crate::patterns::parse_background_image_url;

/// Parses an HTML document from a string.
pub fn parse(html: &str) -> Html {
    Html::parse_document(html)
}

/// Returns the first element matching a CSS selector within a scope.
pub fn select_first<'a>(scope: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(selector).ok()?;
    scope.select(&sel).next()
}

/// Extracts trimmed text content from the first element matching a CSS
/// selector, or `None` when nothing matches.
pub fn select_text(scope: ElementRef<'_>, selector: &str) -> Option<String> {
    select_first(scope, selector).map(|el| el.text().collect::<String>().trim().to_string())
}

/// Extracts an attribute value from the first element matching a CSS
/// selector.
pub fn select_attr(scope: ElementRef<'_>, selector: &str, attr: &str) -> Option<String> {
    select_first(scope, selector).and_then(|el| el.value().attr(attr).map(String::from))
}

/// Extracts trimmed text content from all elements matching a CSS selector.
pub fn select_all_text(scope: ElementRef<'_>, selector: &str) -> Vec<String> {
    Selector::parse(selector)
        .ok()
        .map(|sel| {
            scope
                .select(&sel)
                .map(|el| el.text().collect::<String>().trim().to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Finds a value element adjacent to a text label.
///
/// Stat-block attributes are laid out as label/value sibling pairs under a
/// shared parent. This scans every element matching `label_selector` for one
/// whose text contains `label`, then reads the text of `value_selector`
/// within that element's parent.
pub fn labeled_text(
    scope: ElementRef<'_>,
    label_selector: &str,
    label: &str,
    value_selector: &str,
) -> Option<String> {
    let label_sel = Selector::parse(label_selector).ok()?;
    let value_sel = Selector::parse(value_selector).ok()?;

    for element in scope.select(&label_sel) {
        let text = element.text().collect::<String>();
        if !text.contains(label) {
            continue;
        }
        let Some(parent) = element.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        if let Some(value) = parent.select(&value_sel).next() {
            return Some(value.text().collect::<String>().trim().to_string());
        }
    }
    None
}

/// Reads the background-image URL out of an element's inline style.
///
/// Listing rows carry their avatar icon as
/// `style="background-image: url(...)"` rather than an `img` tag.
pub fn background_image_url(element: ElementRef<'_>) -> Option<String> {
    let style = element.value().attr("style")?;
    style.split(';').find_map(|declaration| {
        let (property, value) = declaration.split_once(':')?;
        if property.trim() != "background-image" {
            return None;
        }
        parse_background_image_url(value.trim())
    })
}

/// Parses listing rows in parallel using rayon.
///
/// Finds all elements matching `selector`, converts them to HTML fragments
/// (ElementRef cannot cross thread boundaries), and runs `parser` over them
/// concurrently. Rows the parser rejects are filtered out.
pub fn parse_rows<T, F>(document: &Html, selector: &str, parser: F) -> Vec<T>
where
    T: Send,
    F: Fn(ElementRef<'_>) -> Option<T> + Sync,
{
    Selector::parse(selector)
        .ok()
        .map(|sel| {
            let fragments: Vec<String> = document.select(&sel).map(|el| el.html()).collect();

            fragments
                .into_par_iter()
                .filter_map(|fragment| {
                    let doc = Html::parse_fragment(&fragment);
                    parser(doc.root_element())
                })
                .collect()
        })
        .unwrap_or_default()
}
