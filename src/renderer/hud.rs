//! On-screen text overlay

use super::snapshot::{RenderSnapshot, Viewport};
use super::vertex::colors;
use crate::sim::Color;

pub const CONTROLS_HINT: &str = "Controls: ARROW KEYS";
pub const WIN_BANNER: &str = "VICTORY! You reached the target mass!";
pub const LOSS_BANNER: &str = "GAME OVER! You were eaten!";

/// Where a line of HUD text is anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Top-left corner at this pixel
    TopLeft(f32, f32),
    /// Centered on this pixel
    Center(f32, f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub anchor: Anchor,
    pub color: Color,
}

impl HudLine {
    fn at(x: f32, y: f32, text: String) -> Self {
        Self {
            text,
            anchor: Anchor::TopLeft(x, y),
            color: colors::HUD_TEXT,
        }
    }
}

/// Stat lines plus any terminal banners for this frame
pub fn hud_lines(snapshot: &RenderSnapshot, viewport: Viewport) -> Vec<HudLine> {
    let mut lines = vec![
        HudLine::at(
            10.0,
            10.0,
            format!(
                "Mass: {} / {}",
                snapshot.player_mass as i64, snapshot.win_mass as i64
            ),
        ),
        HudLine::at(10.0, 50.0, CONTROLS_HINT.to_string()),
        HudLine::at(10.0, 90.0, format!("View: {:.1}x", snapshot.camera.zoom)),
        HudLine {
            color: colors::HUD_TEXT_DIM,
            ..HudLine::at(
                viewport.width as f32 - 200.0,
                10.0,
                format!("Window: {}x{}", viewport.width, viewport.height),
            )
        },
    ];

    let center = viewport.center();
    for banner in banners(snapshot) {
        lines.push(HudLine {
            text: banner.to_string(),
            anchor: Anchor::Center(center.x, center.y),
            color: colors::HUD_TEXT,
        });
    }
    lines
}

/// Terminal banners; both can show at once
pub fn banners(snapshot: &RenderSnapshot) -> Vec<&'static str> {
    let mut out = Vec::new();
    if snapshot.player_mass >= snapshot.win_mass {
        out.push(WIN_BANNER);
    }
    if snapshot.lost {
        out.push(LOSS_BANNER);
    }
    out
}
