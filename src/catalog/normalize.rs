//! Raw-row normalization.
//!
//! Converts one loosely typed feed row into a canonical [`Book`]. All the
//! defaulting, trimming and derived-field extraction happens here, once per
//! load, so every downstream comparison sees consistent data.

use regex::Regex;
use sha2::{Digest, Sha256};

use super::types::{Book, RawBookRecord};

/// Cover shown when a row carries none.
const PLACEHOLDER_COVER: &str = "img/book.jpg";

/// Normalize one raw row. Returns `None` when the row is not keepable
/// (missing title or author after trimming); such rows are dropped from
/// the batch without an error.
pub fn normalize_record(row: &RawBookRecord) -> Option<Book> {
    let title = row.title.trim();
    let author = row.author.trim();
    if title.is_empty() || author.is_empty() {
        return None;
    }

    let category = normalize_category(&row.category);
    let tags = parse_tags(&row.tags);
    let size_mb = extract_size_mb(&tags);
    let page_count = extract_page_count(&tags);

    Some(Book {
        id: book_id(title, author),
        title: title.to_string(),
        author: author.to_string(),
        category,
        description: row.description.trim().to_string(),
        details: row.details.trim().to_string(),
        cover_path: resolve_cover(&row.cover),
        document_url: resolve_document_url(row),
        tags,
        size_mb,
        page_count,
    })
}

/// Stable synthetic identifier: truncated SHA-256 over the casefolded
/// title and author. Deterministic across loads so persisted bookmarks
/// keep resolving, and distinct for same-titled books by different authors.
pub fn book_id(title: &str, author: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.to_ascii_lowercase().as_bytes());
    hasher.update([0x1f]);
    hasher.update(author.to_ascii_lowercase().as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..8])
}

/// Empty categories default to "Other"; the rest are title-cased per token
/// once here so display never has to re-case them.
fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "Other".to_string();
    }
    title_case(trimmed)
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Comma-separated tag field, trimmed, empties dropped, order preserved.
fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// First tag token shaped `<number> MB` (case-insensitive) decides the
/// size. A field already set is never overwritten; a number that fails to
/// parse leaves it `None`.
fn extract_size_mb(tags: &[String]) -> Option<f64> {
    let re = Regex::new(r"(?i)^([0-9]+(?:\.[0-9]+)?)\s*mb$").unwrap();
    for tag in tags {
        if let Some(caps) = re.captures(tag.trim()) {
            return caps[1].parse().ok();
        }
    }
    None
}

/// First tag token shaped `<number> page(s)` decides the page count.
fn extract_page_count(tags: &[String]) -> Option<u32> {
    let re = Regex::new(r"(?i)^([0-9]+)\s*pages?$").unwrap();
    for tag in tags {
        if let Some(caps) = re.captures(tag.trim()) {
            return caps[1].parse().ok();
        }
    }
    None
}

/// Full URLs pass through; bare strings are kept as relative paths exactly
/// as written; empty falls back to the placeholder asset.
fn resolve_cover(raw: &str) -> String {
    let cover = raw.trim();
    if cover.is_empty() {
        return PLACEHOLDER_COVER.to_string();
    }
    cover.to_string()
}

/// The retrievable document link, read from an explicit precedence list:
/// `pdfurl`, then `pdf`, then `fileid` (a bare Drive file id, expanded to
/// its viewer URL). Generic fields like `url` or `link` are never
/// consulted; when nothing matches the link is the empty string, never
/// synthesized from something else.
fn resolve_document_url(row: &RawBookRecord) -> String {
    let pdfurl = row.pdfurl.trim();
    if !pdfurl.is_empty() {
        return pdfurl.to_string();
    }
    let pdf = row.pdf.trim();
    if !pdf.is_empty() {
        return pdf.to_string();
    }
    let fileid = row.fileid.trim();
    if !fileid.is_empty() {
        return format!("https://drive.google.com/file/d/{}/view", fileid);
    }
    String::new()
}
