//! Per-frame render snapshot and visibility culling

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vertex::{CircleInstance, rgba};
use crate::sim::{Camera, Color, GameState};

/// Current window size, owned by the platform and passed in each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel at the middle of the viewport (integer halves)
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSprite {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSprite {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
    pub is_player: bool,
}

/// Everything the renderer needs for one frame, copied out of the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    /// Food in world order
    pub foods: Vec<FoodSprite>,
    /// Player first, then bots in world order
    pub cells: Vec<CellSprite>,
    pub camera: Camera,
    pub won: bool,
    pub lost: bool,
    pub player_mass: f32,
    pub win_mass: f32,
    pub tick: u64,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let foods = state
            .foods
            .iter()
            .map(|f| FoodSprite {
                pos: f.pos(),
                radius: f.radius(),
                color: f.color(),
            })
            .collect();

        let cells = state
            .cells()
            .enumerate()
            .map(|(i, d)| CellSprite {
                pos: d.pos,
                radius: d.radius(),
                color: d.color(),
                is_player: i == 0,
            })
            .collect();

        Self {
            foods,
            cells,
            camera: Camera {
                center: state.camera,
                ..Camera::follow(state)
            },
            won: state.is_won(),
            lost: state.is_lost(),
            player_mass: state.player.disk.mass(),
            win_mass: state.settings.win_mass,
            tick: state.time_ticks,
        }
    }

    /// World position to viewport pixels
    pub fn world_to_screen(&self, pos: Vec2, viewport: Viewport) -> Vec2 {
        (pos - self.camera.center) * self.camera.zoom + viewport.center()
    }

    /// Whether a world disk shows up anywhere inside the viewport
    pub fn is_visible(&self, pos: Vec2, radius: f32, viewport: Viewport) -> bool {
        let screen = self.world_to_screen(pos, viewport);
        let r = radius * self.camera.zoom;
        -r < screen.x
            && screen.x < viewport.width as f32 + r
            && -r < screen.y
            && screen.y < viewport.height as f32 + r
    }

    pub fn visible_foods(&self, viewport: Viewport) -> impl Iterator<Item = &FoodSprite> {
        self.foods
            .iter()
            .filter(move |f| self.is_visible(f.pos, f.radius, viewport))
    }

    pub fn visible_cells(&self, viewport: Viewport) -> impl Iterator<Item = &CellSprite> {
        self.cells
            .iter()
            .filter(move |c| self.is_visible(c.pos, c.radius, viewport))
    }

    /// Screen-space instances for every visible disk, food below cells
    pub fn instances(&self, viewport: Viewport) -> Vec<CircleInstance> {
        let zoom = self.camera.zoom;
        let to_instance = |pos: Vec2, radius: f32, color: Color| {
            let screen = self.world_to_screen(pos, viewport);
            CircleInstance::new(screen.x, screen.y, radius * zoom, rgba(color))
        };

        self.visible_foods(viewport)
            .map(|f| to_instance(f.pos, f.radius, f.color))
            .chain(
                self.visible_cells(viewport)
                    .map(|c| to_instance(c.pos, c.radius, c.color)),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Bot, Disk, Food};

    fn state() -> GameState {
        let mut state = GameState::new(Settings {
            seed: 1,
            food_count: 2,
            bot_count: 2,
            ..Default::default()
        })
        .unwrap();
        state.foods = vec![
            Food::new(Vec2::new(100.0, 0.0), 5.0, [60, 60, 60]),
            Food::new(Vec2::new(5000.0, 0.0), 5.0, [60, 60, 60]),
        ];
        state.bots = vec![
            Bot::new(Disk::new(Vec2::new(-200.0, 100.0), 20.0, [9, 9, 9], 3.0)),
            Bot::new(Disk::new(Vec2::new(0.0, -3000.0), 20.0, [9, 9, 9], 3.0)),
        ];
        state
    }

    #[test]
    fn test_capture_orders_player_first() {
        let snapshot = RenderSnapshot::capture(&state());
        assert_eq!(snapshot.foods.len(), 2);
        assert_eq!(snapshot.cells.len(), 3);
        assert!(snapshot.cells[0].is_player);
        assert!(snapshot.cells[1..].iter().all(|c| !c.is_player));
        assert_eq!(snapshot.player_mass, 400.0);
        assert_eq!(snapshot.win_mass, 5000.0);
        assert_eq!(snapshot.camera.zoom, 1.0);
        assert!(!snapshot.won && !snapshot.lost);
    }

    #[test]
    fn test_world_to_screen_centers_camera() {
        let snapshot = RenderSnapshot::capture(&state());
        let viewport = Viewport::new(1301, 900);
        assert_eq!(
            snapshot.world_to_screen(Vec2::ZERO, viewport),
            Vec2::new(650.0, 450.0)
        );
        assert_eq!(
            snapshot.world_to_screen(Vec2::new(100.0, -50.0), viewport),
            Vec2::new(750.0, 400.0)
        );
    }

    #[test]
    fn test_culling_drops_offscreen_disks() {
        let snapshot = RenderSnapshot::capture(&state());
        let viewport = Viewport::new(1300, 900);
        assert_eq!(snapshot.visible_foods(viewport).count(), 1);
        assert_eq!(snapshot.visible_cells(viewport).count(), 2);
        assert_eq!(snapshot.instances(viewport).len(), 3);

        // A smaller window culls more
        let tiny = Viewport::new(100, 100);
        assert_eq!(snapshot.visible_foods(tiny).count(), 0);
        assert_eq!(snapshot.visible_cells(tiny).count(), 1);
    }

    #[test]
    fn test_edge_overlap_counts_as_visible() {
        let snapshot = RenderSnapshot::capture(&state());
        let viewport = Viewport::new(200, 200);
        // Screen x = 100 + 104 = 204, radius 5: still overlapping the right edge
        assert!(snapshot.is_visible(Vec2::new(104.0, 0.0), 5.0, viewport));
        // Screen x = 205 touches but does not overlap
        assert!(!snapshot.is_visible(Vec2::new(105.0, 0.0), 5.0, viewport));
    }

    #[test]
    fn test_instances_scale_with_zoom() {
        let mut s = state();
        s.player.disk = Disk::new(Vec2::ZERO, 73.484_69, [1, 1, 1], 3.0);
        s.camera = Vec2::ZERO;
        let snapshot = RenderSnapshot::capture(&s);
        assert!((snapshot.camera.zoom - 0.5).abs() < 1e-3);
        let viewport = Viewport::new(1000, 1000);
        let instances = snapshot.instances(viewport);
        assert_eq!(instances.len(), 3);
        assert!((instances[0].center[0] - 550.0).abs() < 0.1);
        assert!((instances[0].radius - 2.5).abs() < 1e-3);
    }
}
