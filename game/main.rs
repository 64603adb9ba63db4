use std::time::Duration;

use bevy::prelude::*;
use logicsketch::{
    geometry::{Point, Rect as CanvasRect},
    scene::{Fill, WireShape},
    session::Gesture,
    Sketch, SketchConfig,
};

// Not shipped with the repository; without it captions are simply not drawn.
const FONT: &str = "fonts/FiraMono-Medium.ttf";

const BACKGROUND: Color = Color::rgb(0.94, 0.94, 0.94);
const INPUT_HIGH: Color = Color::rgb(0.0, 0.5, 0.0);
const INPUT_LOW: Color = Color::rgb(1.0, 0.0, 0.0);
const GATE: Color = Color::rgb(0.78, 0.78, 0.78);
const CONNECTOR: Color = Color::rgb(0.2, 0.59, 0.2);
const PENDING_WIRE: Color = Color::rgb(0.0, 0.59, 0.0);

const CONNECTOR_SIZE: f32 = 10.0;

/// Marks everything redrawn from the scene each frame.
#[derive(Component)]
struct Drawn;

struct Game {
    sketch: Sketch,
    font: Handle<Font>,
    started: Duration,
    last_cursor: Point,
}

/// Maps canvas coordinates (top-left origin, y down) onto the 2D camera's
/// world (centered origin, y up).
#[derive(Clone, Copy)]
struct Canvas {
    width: f32,
    height: f32,
}

impl Canvas {
    fn from_window(window: &Window) -> Self {
        Canvas {
            width: window.width(),
            height: window.height(),
        }
    }

    fn cursor(&self, window: &Window) -> Option<Point> {
        window
            .cursor_position()
            .map(|pos| Point::new(pos.x, self.height - pos.y))
    }

    fn world(&self, p: Point) -> Vec2 {
        Vec2::new(p.x - self.width / 2.0, self.height / 2.0 - p.y)
    }
}

impl Game {
    fn setup(mut commands: Commands, asset_server: Res<AssetServer>, time: Res<Time>) {
        let seed = rand::random::<u64>();
        info!("Layout seed {seed}");
        let config = SketchConfig {
            seed: Some(seed),
            ..SketchConfig::default()
        };

        let sketch = Sketch::new(config).expect("default sketch config is valid");

        commands.spawn_bundle(Camera2dBundle::default());
        commands.insert_resource(Game {
            sketch,
            font: asset_server.load(FONT),
            started: time.time_since_startup(),
            last_cursor: Point::default(),
        });
    }

    /// One frame: forward pointer gestures, evaluate, redraw.
    fn frame(
        mut commands: Commands,
        mut game: ResMut<Game>,
        mut windows: ResMut<Windows>,
        mouse: Res<Input<MouseButton>>,
        time: Res<Time>,
        drawn: Query<Entity, With<Drawn>>,
    ) {
        let Some(window) = windows.get_primary_mut() else {
            return;
        };
        let canvas = Canvas::from_window(window);
        let game = &mut *game;
        let cursor = canvas.cursor(window).unwrap_or(game.last_cursor);
        game.last_cursor = cursor;
        let now = time.time_since_startup().saturating_sub(game.started);

        let mut gestures = Vec::new();
        if mouse.just_pressed(MouseButton::Left) {
            gestures.push(game.sketch.press(cursor, now));
        }
        if mouse.pressed(MouseButton::Left) {
            game.sketch.drag_to(cursor);
        }
        if mouse.just_released(MouseButton::Left) {
            gestures.push(game.sketch.release(cursor));
        }
        for gesture in gestures {
            if !matches!(gesture, Gesture::Ignored | Gesture::MoveEnded { .. }) {
                info!("{gesture:?}");
            }
        }

        game.sketch.frame(now);
        let scene = game.sketch.scene(cursor);
        if window.title() != scene.banner {
            window.set_title(scene.banner.clone());
        }

        for entity in drawn.iter() {
            commands.entity(entity).despawn();
        }
        for wire in &scene.wires {
            spawn_wire(&mut commands, canvas, wire, 1.0, Color::BLACK, 0.0);
        }
        for node in &scene.nodes {
            let fill = match node.fill {
                Fill::InputHigh => INPUT_HIGH,
                Fill::InputLow => INPUT_LOW,
                Fill::Gate => GATE,
            };
            spawn_box(&mut commands, canvas, &node.bounds, fill, 1.0);
            let connector = CanvasRect::new(
                Point::new(
                    node.connector.x - CONNECTOR_SIZE / 2.0,
                    node.connector.y - CONNECTOR_SIZE / 2.0,
                ),
                logicsketch::geometry::Size {
                    w: CONNECTOR_SIZE,
                    h: CONNECTOR_SIZE,
                },
            );
            spawn_box(&mut commands, canvas, &connector, CONNECTOR, 2.0);
            let caption_at = node.bounds.origin + Point::new(5.0, 5.0);
            spawn_text(&mut commands, canvas, &game.font, &node.caption, caption_at, 12.0);
        }
        if let Some(pending) = &scene.pending {
            spawn_wire(&mut commands, canvas, pending, 3.0, PENDING_WIRE, 4.0);
        }
        spawn_text(
            &mut commands,
            canvas,
            &game.font,
            &scene.banner,
            Point::new(20.0, 20.0),
            16.0,
        );
    }
}

fn spawn_box(commands: &mut Commands, canvas: Canvas, bounds: &CanvasRect, color: Color, z: f32) {
    commands
        .spawn_bundle(SpriteBundle {
            sprite: Sprite {
                color,
                custom_size: Some(Vec2::new(bounds.size.w, bounds.size.h)),
                ..default()
            },
            transform: Transform::from_translation(canvas.world(bounds.center()).extend(z)),
            ..default()
        })
        .insert(Drawn);
}

// Sprites have no line primitive, so a wire is a thin box rotated onto it.
fn spawn_wire(
    commands: &mut Commands,
    canvas: Canvas,
    wire: &WireShape,
    width: f32,
    color: Color,
    z: f32,
) {
    let from = canvas.world(wire.from);
    let to = canvas.world(wire.to);
    let delta = to - from;
    let length = delta.length();
    if length <= f32::EPSILON {
        return;
    }
    commands
        .spawn_bundle(SpriteBundle {
            sprite: Sprite {
                color,
                custom_size: Some(Vec2::new(length, width)),
                ..default()
            },
            transform: Transform::from_translation(((from + to) / 2.0).extend(z))
                .with_rotation(Quat::from_rotation_z(delta.y.atan2(delta.x))),
            ..default()
        })
        .insert(Drawn);
}

fn spawn_text(
    commands: &mut Commands,
    canvas: Canvas,
    font: &Handle<Font>,
    value: &str,
    top_left: Point,
    font_size: f32,
) {
    commands
        .spawn_bundle(Text2dBundle {
            text: Text::from_section(
                value,
                TextStyle {
                    font: font.clone(),
                    font_size,
                    color: Color::BLACK,
                },
            )
            .with_alignment(TextAlignment {
                vertical: VerticalAlign::Top,
                horizontal: HorizontalAlign::Left,
            }),
            transform: Transform::from_translation(canvas.world(top_left).extend(3.0)),
            ..default()
        })
        .insert(Drawn);
}

pub struct Sketchpad;

impl Plugin for Sketchpad {
    fn build(&self, app: &mut App) {
        app.add_startup_system(Game::setup).add_system(Game::frame);
    }
}

fn main() {
    let config = SketchConfig::default();
    App::new()
        .insert_resource(WindowDescriptor {
            title: "logicsketch".to_string(),
            width: config.canvas_width,
            height: config.canvas_height,
            ..default()
        })
        .insert_resource(ClearColor(BACKGROUND))
        .add_plugins(DefaultPlugins)
        .add_plugin(Sketchpad)
        .run();
}
