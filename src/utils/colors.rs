/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Terminal palette cycled over attendees
const TERMINAL_CYCLE: [&str; 6] = [BLUE, RED, GREEN, MAGENTA, CYAN, YELLOW];

/// Plotly's default qualitative palette, used by the svg/pdf renderers
const CHART_CYCLE: [(u8, u8, u8); 10] = [
    (0x63, 0x6E, 0xFA),
    (0xEF, 0x55, 0x3B),
    (0x00, 0xCC, 0x96),
    (0xAB, 0x63, 0xFA),
    (0xFF, 0xA1, 0x5A),
    (0x19, 0xD3, 0xF3),
    (0xFF, 0x66, 0x92),
    (0xB6, 0xE8, 0x80),
    (0xFF, 0x97, 0xFF),
    (0xFE, 0xCB, 0x52),
];

pub fn terminal_color(index: usize) -> &'static str {
    TERMINAL_CYCLE[index % TERMINAL_CYCLE.len()]
}

pub fn chart_rgb(index: usize) -> (u8, u8, u8) {
    CHART_CYCLE[index % CHART_CYCLE.len()]
}

/// `#rrggbb` form of [`chart_rgb`]
pub fn chart_hex(index: usize) -> String {
    let (r, g, b) = chart_rgb(index);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Wrap text in a color when `enabled`
pub fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}
