//! Code snippets describing a palette.

use std::fmt::Write;
use std::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::options::ExportOptions;
use crate::palette::Palette;

/// Output language of [`export`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Snippet {
    /// CSS custom properties in a `:root` block.
    Css,
    /// SCSS variables.
    Scss,
    /// JSON array of hex strings.
    Json,
    /// Tailwind `theme.extend.colors` fragment.
    Tailwind,
}

impl Snippet {
    pub const ALL: [Snippet; 4] =
        [Snippet::Css, Snippet::Scss, Snippet::Json, Snippet::Tailwind];

    pub fn name(&self) -> &'static str {
        match self {
            Snippet::Css => "css",
            Snippet::Scss => "scss",
            Snippet::Json => "json",
            Snippet::Tailwind => "tailwind",
        }
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown snippet kind {0:?}")]
pub struct ParseSnippetError(pub String);

impl FromStr for Snippet {
    type Err = ParseSnippetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Snippet::ALL.into_iter().find(|k| k.name() == s)
            .ok_or(ParseSnippetError(s))
    }
}

/// Render `palette` as a code snippet.  Entries are labelled with
/// their 1-based position: `{prefix}-1`, `{prefix}-2`,…
///
/// ```
/// use color_harmony::{export, ExportOptions, Palette, Snippet};
/// let p = Palette::from_hex(["#e94560", "#0f3460"]);
/// assert_eq!(export(&p, Snippet::Scss, &ExportOptions::default()),
///            "$color-1: #e94560;\n$color-2: #0f3460;\n");
/// ```
pub fn export(palette: &Palette, kind: Snippet, opts: &ExportOptions)
              -> String {
    let prefix = &opts.prefix;
    let hex = palette.hex();
    // Writing to a `String` cannot fail.
    let mut out = String::new();
    match kind {
        Snippet::Css => {
            out.push_str(":root {\n");
            for (i, c) in hex.iter().enumerate() {
                let _ = writeln!(out, "  --{prefix}-{}: {c};", i + 1);
            }
            out.push_str("}\n");
        }
        Snippet::Scss => {
            for (i, c) in hex.iter().enumerate() {
                let _ = writeln!(out, "${prefix}-{}: {c};", i + 1);
            }
        }
        Snippet::Json => {
            let _ = writeln!(out, "{:#}", serde_json::Value::from(hex));
        }
        Snippet::Tailwind => {
            out.push_str("module.exports = {\n  theme: {\n    extend: {\n      \
                          colors: {\n");
            for (i, c) in hex.iter().enumerate() {
                let _ = writeln!(out, "        '{prefix}-{}': '{c}',", i + 1);
            }
            out.push_str("      },\n    },\n  },\n};\n");
        }
    }
    out
}
