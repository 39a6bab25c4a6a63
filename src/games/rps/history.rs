//! Running log of every game played in a session.

use tracing::instrument;

const RULE_WIDTH: usize = 45;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Section {
    Banner(String),
    Game { number: usize, lines: Vec<String> },
}

/// Session history: match banners and numbered per-game entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    header: Option<String>,
    sections: Vec<Section>,
    games: usize,
}

impl History {
    /// Creates a history with an optional title line.
    pub fn new(header: Option<String>) -> Self {
        Self {
            header,
            sections: Vec::new(),
            games: 0,
        }
    }

    /// Adds a centered banner, e.g. at the start of a match.
    #[instrument(skip(self))]
    pub fn add_banner(&mut self, banner: &str) {
        self.sections.push(Section::Banner(banner.to_string()));
    }

    /// Starts a new numbered game entry.
    pub fn new_game(&mut self) {
        self.games += 1;
        self.sections.push(Section::Game {
            number: self.games,
            lines: Vec::new(),
        });
    }

    /// Appends lines to the current game entry, starting one if needed.
    pub fn add_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !matches!(self.sections.last(), Some(Section::Game { .. })) {
            self.new_game();
        }
        if let Some(Section::Game { lines, .. }) = self.sections.last_mut() {
            lines.extend(items.into_iter().map(Into::into));
        }
    }

    /// Returns the number of games recorded.
    pub fn games(&self) -> usize {
        self.games
    }

    /// Renders the log as printable lines.
    pub fn render(&self) -> Vec<String> {
        let rule = "-".repeat(RULE_WIDTH);
        let mut out = Vec::new();
        if let Some(header) = &self.header {
            out.push(header.clone());
        }

        for section in &self.sections {
            match section {
                Section::Banner(text) => {
                    out.push(rule.clone());
                    out.push(format!("{text:^RULE_WIDTH$}"));
                }
                Section::Game { lines, .. } if lines.is_empty() => {}
                Section::Game { number, lines } => {
                    out.push(rule.clone());
                    out.push(format!("Game {number}"));
                    out.extend(
                        lines
                            .iter()
                            .enumerate()
                            .map(|(row, line)| format!("{number}-{}. {line}", row + 1)),
                    );
                }
            }
        }

        out.push(rule);
        out
    }
}
