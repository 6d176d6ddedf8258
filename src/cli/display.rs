// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the palscan CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Respects `NO_COLOR` and
//! falls back to plain text when stdout isn't a TTY, so piped output stays clean.
//!
//! # Theme detection order
//!
//! 1. `PALSCAN_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::ops::Range;
use std::sync::OnceLock;

use palscan::Span;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if let Some(theme) = explicit {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Some(bg) = colorfgbg.and_then(|v| v.split(';').next_back()) {
        if let Ok(bg_num) = bg.parse::<u8>() {
            if bg_num >= 7 && bg_num != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

fn detect_theme() -> Theme {
    let explicit = std::env::var("PALSCAN_THEME").ok();
    let colorfgbg = std::env::var("COLORFGBG").ok();
    parse_theme(explicit.as_deref(), colorfgbg.as_deref())
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const MAGENTA: (u8, u8, u8) = (224, 145, 237);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const MAGENTA: (u8, u8, u8) = (146, 38, 144);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(MAGENTA);

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Same check for stderr, where errors are printed
pub fn use_colors_stderr() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

fn paint(enabled: bool, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Apply theme color with optional modifiers (stdout)
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    paint(use_colors(), color_fn, modifiers, text)
}

/// Error label for stderr
pub fn error_label() -> String {
    paint(use_colors_stderr(), RED, &[BOLD], "error:")
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// The input with the palindrome's byte range emphasized.
///
/// Without colors the palindrome is wrapped in `[` `]` instead.
pub fn highlight(text: &str, bytes: Range<usize>) -> String {
    highlight_with(use_colors(), text, bytes)
}

fn highlight_with(colors: bool, text: &str, bytes: Range<usize>) -> String {
    let (before, rest) = text.split_at(bytes.start.min(text.len()));
    let (found, after) = rest.split_at(bytes.len().min(rest.len()));
    if colors {
        format!(
            "{}{}{}{}{}{}",
            GRAY(),
            before,
            paint(true, GREEN, &[BOLD, UNDERLINE], found),
            GRAY(),
            after,
            RESET
        )
    } else {
        format!("{}[{}]{}", before, found, after)
    }
}

/// "len 7 at [10, 16]" style summary of a span
pub fn span_label(span: &Span) -> String {
    if span.is_empty() {
        return themed(GRAY, &[], "empty");
    }
    format!(
        "{} at {}",
        themed(CYAN, &[BOLD], &format!("len {}", span.len())),
        themed(MAGENTA, &[], &span.to_string())
    )
}
