//! Page shell state: one-shot entrance flag and pointer parallax.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

/// Per-dot multiplier from pointer pixels to viewport percent.
pub const DOT_FACTORS: [f64; 3] = [0.01, 0.02, 0.005];

const DOT_CLASSES: [&str; 3] = [
    "float-dot float-dot--md",
    "float-dot float-dot--sm",
    "float-dot float-dot--lg",
];

const DOT_DELAYS: [&str; 3] = ["0s", "1s", "2s"];

/// Pointer position in client pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// Resolved placement of one decorative dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingDot {
    pub left_pct: f64,
    pub top_pct: f64,
    pub class: &'static str,
    pub delay: &'static str,
}

impl FloatingDot {
    #[must_use]
    pub fn style(&self) -> String {
        format!("left: {}%; top: {}%; animation-delay: {};", self.left_pct, self.top_pct, self.delay)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShellState {
    /// Set once after mount; gates entrance animations.
    pub visible: bool,
    pub pointer: Pointer,
}

impl ShellState {
    /// Latch the visibility flag. Later calls are no-ops.
    pub fn mark_visible(&mut self) {
        self.visible = true;
    }

    pub fn track_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Pointer { x, y };
    }

    #[must_use]
    pub fn dots(&self) -> [FloatingDot; 3] {
        std::array::from_fn(|i| FloatingDot {
            left_pct: self.pointer.x * DOT_FACTORS[i],
            top_pct: self.pointer.y * DOT_FACTORS[i],
            class: DOT_CLASSES[i],
            delay: DOT_DELAYS[i],
        })
    }

    /// Entrance class for a section: `animated` once visible, hidden before.
    #[must_use]
    pub fn entrance(&self, animated: &'static str) -> &'static str {
        if self.visible { animated } else { "is-hidden" }
    }
}
