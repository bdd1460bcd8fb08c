//! Accent palette and cycler.
//!
//! The cycler keeps an explicit current index instead of re-deriving the
//! position from rendered style state, so the next step is deterministic
//! without reading anything back from the page.

#[cfg(test)]
#[path = "accent_test.rs"]
mod accent_test;

/// One palette entry. Saturation and lightness carry their `%` suffix so
/// they drop straight into `hsl()` and custom-property values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accent {
    pub hue: u16,
    pub saturation: &'static str,
    pub lightness: &'static str,
    pub label: &'static str,
}

impl Accent {
    /// CSS color for preview swatches.
    #[must_use]
    pub fn css(&self) -> String {
        format!("hsl({} {} {})", self.hue, self.saturation, self.lightness)
    }
}

/// The fixed accent palette, in cycle order.
pub const PALETTE: [Accent; 5] = [
    Accent { hue: 230, saturation: "85%", lightness: "56%", label: "Indigo" },
    Accent { hue: 190, saturation: "90%", lightness: "50%", label: "Cyan" },
    Accent { hue: 280, saturation: "70%", lightness: "50%", label: "Purple" },
    Accent { hue: 150, saturation: "65%", lightness: "44%", label: "Green" },
    Accent { hue: 12, saturation: "85%", lightness: "54%", label: "Orange" },
];

/// Cycles through [`PALETTE`], wrapping after the last entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccentCycler {
    index: Option<usize>,
}

impl AccentCycler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current entry, if the cycler has been advanced at least once.
    #[must_use]
    pub fn current(&self) -> Option<Accent> {
        self.index.map(|i| PALETTE[i])
    }

    /// Advance to the next palette entry and return it.
    ///
    /// A fresh cycler starts at the first entry.
    pub fn cycle_next(&mut self) -> Accent {
        let next = match self.index {
            Some(i) => (i + 1) % PALETTE.len(),
            None => 0,
        };
        self.index = Some(next);
        PALETTE[next]
    }
}
