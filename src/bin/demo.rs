//! Interactive tour of the crate: an animated, spinning, screen-wrapping
//! entity, two buttons routed through a `ScreenController`, a label table,
//! and click-to-fire projectiles.
//!
//! Runs with procedurally generated placeholder art. Pass a PNG path as the
//! first argument to use it as the 1x4 spinner sheet instead.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, info};
use sdl2::image::LoadTexture;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect as SdlRect;
use sdl2::render::{Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::WindowContext;

use spritelet::animation::PlayMode;
use spritelet::entity::{Bounded, Entity};
use spritelet::geometry::Vec2;
use spritelet::gui::{BasicLabel, ElementAction, GuiElement, ScreenController, Table, TableItem};
use spritelet::input::{InputEvent, PointerEvent, poll_input};
use spritelet::motion::{Motion, RotationDirection, wrap_to_screen};
use spritelet::projectile::Projectile;
use spritelet::render::{RenderBatch, SdlBatch};
use spritelet::screen::ScreenConfig;
use spritelet::sprite::TextureRegion;
use spritelet::text::{BitmapFont, TextStyle};
use spritelet::timer::Timer;

const GAME_WIDTH: u32 = 640;
const GAME_HEIGHT: u32 = 360;
const SHOT_SIZE: u32 = 8;

/// Counts button releases; releasing off the button does not count.
struct ScoreAction {
    score: Rc<Cell<u32>>,
}

impl ElementAction for ScoreAction {
    fn touch_up(&mut self) {
        self.score.set(self.score.get() + 1);
    }
}

/// Toggles the bounds overlay as soon as the button goes down.
struct BoundsAction {
    show: Rc<Cell<bool>>,
}

impl ElementAction for BoundsAction {
    fn touch_down(&mut self) {
        self.show.set(!self.show.get());
    }
}

/// Loads a texture from the given path with consistent error handling
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Result<Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

/// Builds a texture of equal-width vertical stripes, one per color. Stands
/// in for sheet art so the demo runs without asset files.
fn striped_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    width: u32,
    height: u32,
    cells: &[Color],
) -> Result<Texture<'a>, String> {
    let mut surface = Surface::new(width, height, PixelFormatEnum::RGBA8888)?;
    let cell_width = width / cells.len() as u32;
    for (index, color) in cells.iter().enumerate() {
        surface.fill_rect(
            SdlRect::new((index as u32 * cell_width) as i32, 0, cell_width, height),
            *color,
        )?;
    }
    texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Spritelet Demo", GAME_WIDTH * 2, GAME_HEIGHT * 2)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size keeps world units stable whatever the window size is.
    canvas
        .set_logical_size(GAME_WIDTH, GAME_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let screen = ScreenConfig::detect(
        GAME_WIDTH as f32,
        GAME_HEIGHT as f32,
        (640.0, 360.0),
        (320.0, 180.0),
    );

    let mut textures: HashMap<String, Texture> = HashMap::new();
    textures.insert(
        String::from("button"),
        striped_texture(
            &texture_creator,
            64,
            32,
            &[Color::RGB(70, 90, 160), Color::RGB(120, 150, 220)],
        )?,
    );
    textures.insert(
        String::from("shot"),
        striped_texture(&texture_creator, SHOT_SIZE, SHOT_SIZE, &[Color::RGB(250, 220, 90)])?,
    );

    // The spinner sheet is 1x4; a PNG argument replaces the generated one.
    let spinner_sheet = match std::env::args().nth(1) {
        Some(path) => {
            let texture = load_texture(&texture_creator, &path)?;
            let query = texture.query();
            info!("spinner sheet from {} ({}x{})", path, query.width, query.height);
            textures.insert(String::from("spinner"), texture);
            TextureRegion::full("spinner", query.width, query.height)
        }
        None => {
            textures.insert(
                String::from("spinner"),
                striped_texture(
                    &texture_creator,
                    128,
                    32,
                    &[
                        Color::RGB(70, 160, 90),
                        Color::RGB(90, 190, 110),
                        Color::RGB(120, 220, 140),
                        Color::RGB(90, 190, 110),
                    ],
                )?,
            );
            TextureRegion::full("spinner", 128, 32)
        }
    };

    let mut spinner = Entity::animated(
        &spinner_sheet,
        1,
        4,
        Vec2::new(200.0, 150.0),
        0.0,
        2.0,
        2.0,
        0.15,
        PlayMode::Loop,
    )
    .map_err(|e| e.to_string())?;
    let mut drift = Motion::new(40.0, Vec2::new(1.0, 0.6)).with_rotation(90.0);
    let mut turn_timer = Timer::new(3.0);

    let score = Rc::new(Cell::new(0u32));
    let show_bounds = Rc::new(Cell::new(false));

    let button_sheet = TextureRegion::full("button", 64, 32);
    let mut controller = ScreenController::new();

    let mut score_button =
        GuiElement::from_grid(&button_sheet, 1, 2, Vec2::new(24.0, 24.0), 1.0, 1.0)
            .map_err(|e| e.to_string())?;
    score_button.set_action(Box::new(ScoreAction {
        score: Rc::clone(&score),
    }));
    controller.add(score_button);

    let mut bounds_button =
        GuiElement::from_grid(&button_sheet, 1, 2, Vec2::new(72.0, 24.0), 1.0, 1.0)
            .map_err(|e| e.to_string())?;
    bounds_button.set_action(Box::new(BoundsAction {
        show: Rc::clone(&show_bounds),
    }));
    controller.add(bounds_button);

    let mut table = Table::full_screen(&screen);
    table.add_row(TableItem::Label(
        BasicLabel::new("SPRITELET DEMO", &BitmapFont).with_style(
            TextStyle {
                color: Color::RGB(235, 235, 235),
                scale: 2,
            },
            &BitmapFont,
        ),
    ));
    let score_row = 1;
    table.add_row(TableItem::Label(BasicLabel::new("SCORE: ", &BitmapFont)));

    let mut projectiles: Vec<Projectile> = Vec::new();
    let mut last_score = score.get();
    let center = Vec2::new(screen.mid_x(), screen.mid_y());

    info!("click the left button to score, the right one to toggle bounds");
    info!("click empty space to fire a projectile from the center");

    'running: loop {
        for event in poll_input(&mut event_pump, &screen) {
            match event {
                InputEvent::Quit => break 'running,
                InputEvent::Pointer(PointerEvent::Down { at, pointer }) => {
                    if !controller.touch_down(at, pointer) {
                        let aim = at - center;
                        let rotation = aim.y.atan2(aim.x).to_degrees();
                        debug!("firing at {:?} (rotation {:.1})", at, rotation);

                        let shot = Entity::new(
                            TextureRegion::full("shot", SHOT_SIZE, SHOT_SIZE),
                            center - Vec2::new(SHOT_SIZE as f32 / 2.0, SHOT_SIZE as f32 / 2.0),
                            rotation,
                        );
                        projectiles.push(Projectile::new(shot, 180.0, 2.5));
                    }
                }
                InputEvent::Pointer(PointerEvent::Up { at, pointer }) => {
                    controller.touch_up(at, pointer);
                }
                InputEvent::Pointer(PointerEvent::Moved { .. }) => {}
            }
        }

        let delta = 1.0 / 60.0;

        turn_timer.update(delta);
        if turn_timer.has_elapsed() {
            drift.rotation_direction = match drift.rotation_direction {
                RotationDirection::Left => RotationDirection::Right,
                RotationDirection::Right => RotationDirection::Left,
            };
            turn_timer.reset();
        }

        spinner.update(delta).map_err(|e| e.to_string())?;
        drift.advance(&mut spinner, delta);
        drift.spin(&mut spinner, delta);
        wrap_to_screen(&mut spinner, &screen);

        for projectile in &mut projectiles {
            projectile.update(delta).map_err(|e| e.to_string())?;
        }
        projectiles.retain(|projectile| !projectile.is_finished());

        controller.update(delta).map_err(|e| e.to_string())?;

        if score.get() != last_score {
            last_score = score.get();
            if let Some(TableItem::Label(label)) = table.item_mut(score_row) {
                label.set_value(i64::from(last_score), &BitmapFont);
            }
        }

        canvas.set_draw_color(Color::RGB(12, 12, 16));
        canvas.clear();
        {
            let mut batch = SdlBatch::new(&mut canvas, &textures, GAME_HEIGHT as f32);

            spinner.draw(&mut batch)?;
            for projectile in &projectiles {
                projectile.draw(&mut batch)?;
            }
            controller.draw(&mut batch)?;
            table.draw(&mut batch)?;

            if show_bounds.get() {
                let red = Color::RGB(255, 64, 64);
                batch.draw_outline(spinner.bounds(), red)?;
                for projectile in &projectiles {
                    batch.draw_outline(projectile.bounds(), red)?;
                }
            }
        }
        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
