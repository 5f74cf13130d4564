//! Named starting patterns

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in seed patterns, laid out for a 20x20 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Boat,
    Blinker,
    Glider,
    Pulsar,
    Random,
}

const BOAT: &[(isize, isize)] = &[(3, 3), (4, 3), (3, 4), (5, 4), (4, 5)];

const BLINKER: &[(isize, isize)] = &[(5, 4), (5, 5), (5, 6)];

const GLIDER: &[(isize, isize)] = &[(4, 4), (6, 4), (5, 5), (6, 5), (5, 6)];

#[rustfmt::skip]
const PULSAR: &[(isize, isize)] = &[
    (3, 1), (4, 1), (5, 1), (9, 1), (10, 1), (11, 1),
    (1, 3), (6, 3), (8, 3), (13, 3),
    (1, 4), (6, 4), (8, 4), (13, 4),
    (1, 5), (6, 5), (8, 5), (13, 5),
    (3, 6), (4, 6), (5, 6), (9, 6), (10, 6), (11, 6),
    (3, 8), (4, 8), (5, 8), (9, 8), (10, 8), (11, 8),
    (1, 9), (6, 9), (8, 9), (13, 9),
    (1, 10), (6, 10), (8, 10), (13, 10),
    (1, 11), (6, 11), (8, 11), (13, 11),
    (3, 13), (4, 13), (5, 13), (9, 13), (10, 13), (11, 13),
];

#[rustfmt::skip]
const RANDOM: &[(isize, isize)] = &[
    (4, 1), (6, 1), (9, 1), (3, 3), (3, 9), (2, 6), (9, 2),
    (3, 5), (9, 3), (10, 11), (9, 11), (10, 9), (5, 2), (3, 2),
    (3, 7), (10, 5), (10, 10), (8, 7), (19, 2), (19, 3), (18, 2),
];

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Boat,
        Pattern::Blinker,
        Pattern::Glider,
        Pattern::Pulsar,
        Pattern::Random,
    ];

    /// Live-cell coordinates of the pattern
    pub fn coordinates(self) -> &'static [(isize, isize)] {
        match self {
            Pattern::Boat => BOAT,
            Pattern::Blinker => BLINKER,
            Pattern::Glider => GLIDER,
            Pattern::Pulsar => PULSAR,
            Pattern::Random => RANDOM,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Boat => "boat",
            Pattern::Blinker => "blinker",
            Pattern::Glider => "glider",
            Pattern::Pulsar => "pulsar",
            Pattern::Random => "random",
        }
    }

    /// Smallest square grid that holds every cell of the pattern
    pub fn min_grid_size(self) -> usize {
        self.coordinates()
            .iter()
            .map(|&(x, y)| x.max(y) as usize + 1)
            .max()
            .unwrap_or(1)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.name() == wanted)
            .ok_or_else(|| anyhow::anyhow!("Unknown pattern '{}'", s))
    }
}
