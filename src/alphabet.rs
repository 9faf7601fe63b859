use crate::Symbol;

/// Maps the distinct symbols of a text to dense codes.
///
/// Codes follow ascending symbol order, so code `i` is the `i`-th smallest
/// symbol. This makes them usable directly as row offsets into the sorted
/// first column of a Burrows-Wheeler matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    /// symbol (as u32) → code + 1. 0 means the symbol does not occur.
    table: Vec<u32>,
    /// code → symbol (as u32), ascending.
    symbols: Vec<u32>,
}

impl Alphabet {
    /// Collects the distinct symbols of `text`.
    pub fn build<S: Symbol>(text: &[S]) -> Self {
        let mut max_symbol: u32 = 0;
        for &s in text {
            let v: u32 = s.into();
            if v > max_symbol {
                max_symbol = v;
            }
        }

        if text.is_empty() {
            return Self {
                table: vec![],
                symbols: vec![],
            };
        }

        // Direct presence table, sized by the largest symbol value.
        let mut present = vec![false; max_symbol as usize + 1];
        for &s in text {
            present[<S as Into<u32>>::into(s) as usize] = true;
        }

        let symbols: Vec<u32> = present
            .iter()
            .enumerate()
            .filter(|(_, &p)| p)
            .map(|(i, _)| i as u32)
            .collect();

        let mut table = vec![0u32; present.len()];
        for (code, &symbol) in symbols.iter().enumerate() {
            table[symbol as usize] = code as u32 + 1;
        }

        log::debug!("alphabet built: {} distinct symbols", symbols.len());
        Self { table, symbols }
    }

    /// Code of `symbol`, or `None` if it does not occur.
    #[inline]
    pub fn code<S: Symbol>(&self, symbol: S) -> Option<u32> {
        let v: u32 = symbol.into();
        match self.table.get(v as usize) {
            Some(&c) if c != 0 => Some(c - 1),
            _ => None,
        }
    }

    /// Symbol (as u32) for `code`.
    ///
    /// # Panics
    ///
    /// If `code` is not below [`len`](Self::len).
    #[inline]
    pub fn symbol(&self, code: u32) -> u32 {
        self.symbols[code as usize]
    }

    /// Number of alphabet symbols strictly smaller than `symbol`.
    ///
    /// Equals the code of `symbol` when it occurs; otherwise it is the code
    /// it would get if inserted.
    pub fn codes_below<S: Symbol>(&self, symbol: S) -> u32 {
        let v: u32 = symbol.into();
        self.symbols.partition_point(|&s| s < v) as u32
    }

    /// Number of distinct symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether no symbol occurs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
