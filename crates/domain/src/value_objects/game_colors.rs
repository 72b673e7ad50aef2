//! Category colour assignment for the puzzle board

use std::collections::HashMap;

/// Colour pair used to paint a category or the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameColor {
    pub background: &'static str,
    pub text: &'static str,
}

/// Palette the board draws from
pub const GAME_COLORS: [GameColor; 8] = [
    GameColor { background: "#ff1d58", text: "#fff" }, // Red
    GameColor { background: "#fff685", text: "#000" }, // Yellow
    GameColor { background: "#00ddff", text: "#000" }, // Cyan
    GameColor { background: "#0049b7", text: "#fff" }, // Blue
    GameColor { background: "#8458B3", text: "#fff" }, // Purple
    GameColor { background: "#494d5f", text: "#fff" }, // Dark Gray
    GameColor { background: "#ff6f00", text: "#000" }, // Orange
    GameColor { background: "#4caf50", text: "#fff" }, // Green
];

/// Colours chosen for one game: one per category plus the selection highlight
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPalette {
    categories: HashMap<String, GameColor>,
    selected_word: GameColor,
}

impl CategoryPalette {
    /// Give every category a distinct random colour, then pick the selection
    /// colour from what is left.
    ///
    /// `random` must yield values in `[0, 1)`. Once the palette is used up,
    /// colours repeat in palette order.
    pub fn assign<'a>(
        descriptions: impl IntoIterator<Item = &'a str>,
        random: &mut impl FnMut() -> f64,
    ) -> Self {
        let mut available: Vec<GameColor> = GAME_COLORS.to_vec();
        let mut reuse = GAME_COLORS.iter().copied().cycle();
        let mut draw = |available: &mut Vec<GameColor>| -> GameColor {
            if available.is_empty() {
                return reuse.next().unwrap_or(GAME_COLORS[0]);
            }
            let index = random_index(random(), available.len());
            available.remove(index)
        };

        let categories = descriptions
            .into_iter()
            .map(|description| (description.to_string(), draw(&mut available)))
            .collect();
        let selected_word = draw(&mut available);

        Self {
            categories,
            selected_word,
        }
    }

    /// Colour for a category; categories unknown to the palette get the first entry
    pub fn category(&self, description: &str) -> GameColor {
        self.categories
            .get(description)
            .copied()
            .unwrap_or(GAME_COLORS[0])
    }

    pub fn selected_word(&self) -> GameColor {
        self.selected_word
    }
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self {
            categories: HashMap::new(),
            selected_word: GAME_COLORS[0],
        }
    }
}

/// Map a `[0, 1)` sample onto `0..len`
pub(crate) fn random_index(sample: f64, len: usize) -> usize {
    let scaled = (sample.clamp(0.0, 1.0) * len as f64).floor() as usize;
    scaled.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn zero_sample_takes_palette_in_order() {
        let mut random = || 0.0;
        let palette = CategoryPalette::assign(["a", "b", "c", "d"], &mut random);

        assert_eq!(palette.category("a"), GAME_COLORS[0]);
        assert_eq!(palette.category("b"), GAME_COLORS[1]);
        assert_eq!(palette.category("c"), GAME_COLORS[2]);
        assert_eq!(palette.category("d"), GAME_COLORS[3]);
        assert_eq!(palette.selected_word(), GAME_COLORS[4]);
    }

    #[test]
    fn categories_and_selection_never_share_a_colour() {
        let samples = [0.99, 0.5, 0.25, 0.75, 0.1];
        let mut i = 0;
        let mut random = || {
            let s = samples[i % samples.len()];
            i += 1;
            s
        };
        let palette = CategoryPalette::assign(["a", "b", "c", "d"], &mut random);

        let mut seen = HashSet::new();
        for d in ["a", "b", "c", "d"] {
            assert!(seen.insert(palette.category(d)));
        }
        assert!(seen.insert(palette.selected_word()));
    }

    #[test]
    fn exhausted_palette_reuses_colours() {
        let mut random = || 0.0;
        let names: Vec<String> = (0..9).map(|i| format!("c{i}")).collect();
        let palette = CategoryPalette::assign(names.iter().map(String::as_str), &mut random);

        assert_eq!(palette.category("c7"), GAME_COLORS[7]);
        assert_eq!(palette.category("c8"), GAME_COLORS[0]);
        assert_eq!(palette.selected_word(), GAME_COLORS[1]);
    }

    #[test]
    fn random_index_stays_in_bounds() {
        assert_eq!(random_index(0.0, 4), 0);
        assert_eq!(random_index(0.999_999, 4), 3);
        assert_eq!(random_index(1.0, 4), 3);
        assert_eq!(random_index(-1.0, 4), 0);
    }
}
