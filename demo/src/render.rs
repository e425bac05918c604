//! Text rendering of route segments.

use std::collections::HashSet;

use hexroute_core::{Coord, local_bounds, to_chunk_local};
use hexroute_gen::Segment;
use hexroute_paths::HexLayout;

/// What a rendered tile shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Ground,
    Path,
    Entry,
    Exit,
}

impl Glyph {
    pub fn as_char(self) -> char {
        match self {
            Self::Ground => '.',
            Self::Path => '*',
            Self::Entry => 'E',
            Self::Exit => 'X',
        }
    }
}

/// One rendered row: leading indent plus one glyph per tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub indent: bool,
    pub glyphs: Vec<Glyph>,
}

/// Lay out the chunk of `segment` as rows of glyphs, Y growing downwards.
///
/// Rows that the layout shoves right are flagged for indentation, so the
/// printed grid reads as a hex grid. Shoving follows the global row, which
/// differs from the local one in odd chunk rows of odd-sized chunks. Column
/// layouts are not staggered.
pub fn chunk_rows(segment: &Segment, dim: i32, layout: HexLayout) -> Vec<Row> {
    let path: HashSet<Coord> = segment
        .tiles
        .iter()
        .map(|&t| to_chunk_local(t, dim))
        .collect();
    let entry = segment.tiles.first().map(|&t| to_chunk_local(t, dim));
    let exit = segment.tiles.last().map(|&t| to_chunk_local(t, dim));

    let bounds = local_bounds(dim);
    let first_row = segment.chunk.y * dim;
    let mut rows: Vec<Row> = (0..dim)
        .map(|y| Row {
            indent: is_shoved_row(layout, first_row + y),
            glyphs: Vec::with_capacity(dim as usize),
        })
        .collect();
    for p in bounds {
        let glyph = if Some(p) == entry {
            Glyph::Entry
        } else if Some(p) == exit {
            Glyph::Exit
        } else if path.contains(&p) {
            Glyph::Path
        } else {
            Glyph::Ground
        };
        rows[p.y as usize].glyphs.push(glyph);
    }
    rows
}

fn is_shoved_row(layout: HexLayout, y: i32) -> bool {
    match layout {
        HexLayout::OddR => y.rem_euclid(2) == 1,
        HexLayout::EvenR => y.rem_euclid(2) == 0,
        HexLayout::OddQ | HexLayout::EvenQ => false,
    }
}

/// Plain-text form of `rows`.
pub fn to_text(rows: &[Row]) -> String {
    let mut out = String::new();
    for row in rows {
        if row.indent {
            out.push(' ');
        }
        for g in &row.glyphs {
            out.push(g.as_char());
            out.push(' ');
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }
    out
}
