use hcswap_core::tool::validate_version;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::io;

/// Promotional link the index carries next to the version anchors
pub const PROMO_HREF: &str = "https://fastly.com/?utm_source=hashicorp";

/// Extracts up to `limit` version tokens from a listing page
///
/// Anchors are visited in document order. The parent link and the
/// promotional link are skipped, as are hrefs that do not reduce to a
/// plain path segment. Skipped hrefs do not count against `limit`.
pub fn parse_listing(html: &str, tool: &str, limit: usize) -> io::Result<Vec<String>> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;

    let mut versions = Vec::new();
    if limit > 0 {
        collect_versions(&dom.document, tool, limit, &mut versions);
    }
    Ok(versions)
}

fn collect_versions(handle: &Handle, tool: &str, limit: usize, out: &mut Vec<String>) {
    if let NodeData::Element { name, attrs, .. } = &handle.data
        && name.local.as_ref() == "a"
    {
        for attr in attrs.borrow().iter() {
            if attr.name.local.as_ref() != "href" {
                continue;
            }
            if let Some(version) = normalize_href(&attr.value, tool) {
                out.push(version);
                if out.len() >= limit {
                    return;
                }
            }
        }
    }

    for child in handle.children.borrow().iter() {
        collect_versions(child, tool, limit, out);
        if out.len() >= limit {
            return;
        }
    }
}

/// Reduces an href such as `/terraform/1.6.0/` to `1.6.0`
///
/// Returns `None` for links that do not name a version.
pub fn normalize_href(href: &str, tool: &str) -> Option<String> {
    if href == "../" || href == PROMO_HREF {
        return None;
    }

    let prefix = format!("/{tool}/");
    let token = href
        .strip_prefix(prefix.as_str())
        .unwrap_or(href)
        .trim_matches('/');

    if token.is_empty() {
        return None;
    }

    if let Err(e) = validate_version(token) {
        log::debug!("skipping catalog link {href}: {e}");
        return None;
    }

    Some(token.to_string())
}
