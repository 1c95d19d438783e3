//! Splitting a rendered report into size-bounded output blocks.
//!
//! A report is an ordered list of pieces (header, then one piece per tier
//! or relic level) joined by [`SEPARATOR`]. Blocks only break between
//! pieces, so a tier is never split, unless a single piece alone exceeds
//! the message limit; such a piece is split at line boundaries, and a line
//! still too long is cut between characters but never inside an HTML tag
//! or entity. Each block records its [`BlockJoin`] so [`reassemble`] can
//! rebuild the exact text.
//!
//! Lengths are counted in characters, markup included.

use crate::render::Report;
use holocron_core::markup::MarkupMode;
use holocron_core::message::{BlockJoin, BlockKind, OutputBlock};

/// Joins pieces inside a block and blocks inside a reassembled report.
pub const SEPARATOR: &str = "\n\n";

/// Chunk a report for a transport with the given caption and message limits.
pub fn chunk_report(report: &Report, caption_limit: usize, message_limit: usize) -> Vec<OutputBlock> {
    let pieces: Vec<&str> = report.pieces().collect();
    let full = pieces.join(SEPARATOR);
    let markup = report.markup;
    let html = markup == MarkupMode::Html;
    let text_blocks = |parts: Vec<(String, BlockJoin)>| {
        parts
            .into_iter()
            .map(move |(text, join)| OutputBlock::text(text, markup).with_join(join))
    };

    match report.image.as_deref() {
        Some(image) if char_len(&full) <= caption_limit => {
            vec![OutputBlock::caption(full, image, markup)]
        }
        Some(image) => {
            // Image + header as the caption, body as standalone messages.
            let (caption, body) = if char_len(&report.header) <= caption_limit {
                (report.header.as_str(), &pieces[1..])
            } else {
                ("", &pieces[..])
            };
            let mut blocks = vec![OutputBlock::caption(caption, image, markup)];
            blocks.extend(text_blocks(pack(body, message_limit, html)));
            blocks
        }
        None if char_len(&full) <= message_limit => vec![OutputBlock::text(full, markup)],
        None => text_blocks(pack(&pieces, message_limit, html)).collect(),
    }
}

/// Rebuild the full report text from blocks, skipping empty captions.
pub fn reassemble(blocks: &[OutputBlock]) -> String {
    let mut out = String::new();
    let mut started = false;
    for block in blocks {
        if block.kind == BlockKind::Caption && block.content.is_empty() {
            continue;
        }
        if started {
            out.push_str(match block.join {
                BlockJoin::Piece => SEPARATOR,
                BlockJoin::Line => "\n",
                BlockJoin::Inline => "",
            });
        }
        out.push_str(&block.content);
        started = true;
    }
    out
}

/// Greedily pack whole pieces into blocks of at most `limit` characters.
fn pack(pieces: &[&str], limit: usize, html: bool) -> Vec<(String, BlockJoin)> {
    let sep_len = char_len(SEPARATOR);
    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for piece in pieces {
        let piece_len = char_len(piece);
        if piece_len > limit {
            if !current.is_empty() {
                blocks.push((std::mem::take(&mut current), BlockJoin::Piece));
                current_len = 0;
            }
            blocks.extend(split_oversized(piece, limit, html));
            continue;
        }
        if current.is_empty() {
            current.push_str(piece);
            current_len = piece_len;
        } else if current_len + sep_len + piece_len <= limit {
            current.push_str(SEPARATOR);
            current.push_str(piece);
            current_len += sep_len + piece_len;
        } else {
            let done = std::mem::replace(&mut current, piece.to_string());
            blocks.push((done, BlockJoin::Piece));
            current_len = piece_len;
        }
    }
    if !current.is_empty() {
        blocks.push((current, BlockJoin::Piece));
    }
    blocks
}

/// Split one oversized piece at newlines; hard-split lines that are still too long.
fn split_oversized(piece: &str, limit: usize, html: bool) -> Vec<(String, BlockJoin)> {
    let mut parts = Vec::new();
    let mut current: Option<String> = None;
    let mut current_len = 0;
    // How the next emitted part attaches to the one before it.
    let mut join = BlockJoin::Piece;

    for line in piece.split('\n') {
        let line_len = char_len(line);
        if line_len > limit {
            if let Some(done) = current.take() {
                parts.push((done, join));
                join = BlockJoin::Line;
            }
            for (i, segment) in hard_split(line, limit, html).into_iter().enumerate() {
                parts.push((segment, if i == 0 { join } else { BlockJoin::Inline }));
            }
            join = BlockJoin::Line;
            continue;
        }
        match current.as_mut() {
            Some(buf) if current_len + 1 + line_len <= limit => {
                buf.push('\n');
                buf.push_str(line);
                current_len += 1 + line_len;
            }
            _ => {
                if let Some(done) = current.replace(line.to_string()) {
                    parts.push((done, join));
                    join = BlockJoin::Line;
                }
                current_len = line_len;
            }
        }
    }
    if let Some(done) = current {
        parts.push((done, join));
    }
    parts
}

/// Cut one line into segments of at most `limit` characters.
fn hard_split(line: &str, limit: usize, html: bool) -> Vec<String> {
    let limit = limit.max(1);
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for atom in atoms(line, html) {
        let atom_len = char_len(atom);
        if current_len + atom_len > limit && !current.is_empty() {
            segments.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if atom_len > limit {
            let chars: Vec<char> = atom.chars().collect();
            segments.extend(chars.chunks(limit).map(|c| c.iter().collect::<String>()));
            continue;
        }
        current.push_str(atom);
        current_len += atom_len;
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Indivisible runs of `line`: one char each, or a whole tag/entity in HTML.
fn atoms(line: &str, html: bool) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = line;
    while let Some(c) = rest.chars().next() {
        let len = html
            .then(|| markup_atom_len(rest))
            .flatten()
            .unwrap_or(c.len_utf8());
        let (atom, tail) = rest.split_at(len);
        out.push(atom);
        rest = tail;
    }
    out
}

/// Byte length of the tag or entity starting `text`, if there is one.
fn markup_atom_len(text: &str) -> Option<usize> {
    match text.as_bytes().first()? {
        b'<' => text.find('>').map(|i| i + 1),
        b'&' => {
            let end = text.find(';')?;
            let name = &text[1..end];
            let valid = !name.is_empty()
                && name.len() <= 10
                && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '#');
            valid.then_some(end + 1)
        }
        _ => None,
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
