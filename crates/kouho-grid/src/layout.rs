use unicode_width::UnicodeWidthStr;

/// Grid geometry in terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    /// Fixed row count; items past the last row are dropped.
    pub rows: usize,
    /// Padding cells on each side of a chip's text.
    pub chip_margin: u16,
    /// Separator cells between chips in the same row.
    pub divider: u16,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: 4,
            chip_margin: 1,
            divider: 1,
        }
    }
}

/// One placed chip: display width (margins included) and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub width: u16,
    pub text: String,
}

/// Display width of a chip. Full-width characters count two cells.
pub fn chip_width(text: &str, spec: &GridSpec) -> u16 {
    let text_width = u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX);
    text_width.saturating_add(spec.chip_margin * 2)
}

/// Single-pass greedy packing of `items` into at most `spec.rows` rows of
/// `available` cells. An item that would overflow the current row starts
/// the next one; an item wider than a whole row still occupies one, alone.
/// Once the last row overflows, the remaining items are dropped.
pub fn assign_rows<S: AsRef<str>>(items: &[S], available: u16, spec: &GridSpec) -> Vec<Vec<Slot>> {
    let mut rows: Vec<Vec<Slot>> = vec![Vec::new(); spec.rows];
    let mut line = 0usize;
    let mut used: u16 = 0;

    for item in items {
        if line >= rows.len() {
            break;
        }
        let text = item.as_ref();
        let width = chip_width(text, spec);
        let occupied = !rows[line].is_empty();
        if occupied && used.saturating_add(spec.divider).saturating_add(width) > available {
            line += 1;
            if line >= rows.len() {
                break;
            }
            used = 0;
        }
        if !rows[line].is_empty() {
            used = used.saturating_add(spec.divider);
        }
        used = used.saturating_add(width);
        rows[line].push(Slot {
            width,
            text: text.to_string(),
        });
    }

    rows
}

/// Rows actually holding chips. Greedy packing fills rows front to back,
/// so the occupied rows are always a prefix.
pub fn occupied_rows(assignment: &[Vec<Slot>]) -> usize {
    assignment.iter().take_while(|row| !row.is_empty()).count()
}
