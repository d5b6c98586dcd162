//! The fixed set of doodle subjects.

use std::path::{Path, PathBuf};

/// Shared style text prepended to every subject's prompt.
pub const STYLE_PREFIX: &str = "Hand-drawn sketch doodle, black ink on white background, imperfect wobbly lines,
notebook margin art style, simple and charming, minimal detail, quick sketch aesthetic,
like someone doodled it during a meeting. Single subject centered, no text, no labels.";

/// One doodle to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    /// Short unique slug, used to name the output file.
    pub id: &'static str,
    /// Human-readable label for console output.
    pub name: &'static str,
    /// Subject-specific part of the prompt.
    pub description: &'static str,
}

impl Subject {
    /// Full prompt: the style prefix followed by this subject's description.
    pub fn prompt(&self) -> String {
        format!("{STYLE_PREFIX} {}", self.description)
    }

    /// Where this subject's doodle is written inside `dir`.
    pub fn output_path(&self, dir: &Path) -> PathBuf {
        output_path(dir, self.id)
    }
}

/// The city doodles, in generation order.
pub const SUBJECTS: &[Subject] = &[
    Subject {
        id: "new-york",
        name: "New York Taxi",
        description: "A yellow NYC taxi cab, side view, simple cartoon style, classic checker cab shape, two wheels visible, cute and minimal.",
    },
    Subject {
        id: "chicago",
        name: "Chicago Wind",
        description: "Wind swirls with 2-3 falling autumn leaves, dynamic motion lines showing movement, leaves tumbling in the breeze, playful and energetic.",
    },
    Subject {
        id: "boulder",
        name: "Boulder Flatirons",
        description: "The Flatirons mountain peaks of Boulder Colorado, iconic triangular rock formations, simple silhouette style, 3-4 angled peaks, sketch of famous landmark.",
    },
    Subject {
        id: "forest-city",
        name: "Network Nodes",
        description: "A simple network diagram with 4 circular nodes connected by lines, techy but hand-drawn feel, like a quick whiteboard sketch of connected dots, abstract but friendly.",
    },
];

/// Returns `<dir>/<id>-doodle.png`.
pub fn output_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{id}-doodle.png"))
}
