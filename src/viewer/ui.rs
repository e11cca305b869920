use sdl2::{
    pixels,
    rect::Rect,
    event::Event,
    keyboard::Keycode,
    render::Canvas,
    video::Window,
};
use crate::{
    cga::{image::CgaImage, palette::{self, Rgb}},
    viewer::geometry::Geometry,
};

use anyhow::{anyhow, Result};

pub const WINDOW_TITLE: &str = "Computer Graphics Array Viewer";

/// Owns every SDL2 handle; dropping it tears the window down.
pub struct Viewer {
    _sdl_context: sdl2::Sdl,
    event_pump: sdl2::EventPump,
    canvas: Canvas<Window>,
}

impl Viewer {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Viewer> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!("cannot init sdl2: {}", e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!("cannot init sdl2 video: {}", e))?;
        let window = video_subsystem.window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| anyhow!("cannot create sdl2 window: {}", e))?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| anyhow!("cannot create sdl2 canvas: {}", e))?;

        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!("cannot get sdl2 event pump: {}", e))?;
        Ok(Self{ _sdl_context: sdl_context, event_pump, canvas })
    }

    pub fn present(&mut self, image: &CgaImage, geometry: &Geometry) -> Result<()> {
        self.canvas.set_draw_color(to_sdl_color(palette::BACKGROUND));
        self.canvas.clear();

        let canvas = &mut self.canvas;
        let mut result = Ok(());
        geometry.for_each_cell(image, &mut |rect, colour| {
            if result.is_err() { return; }
            canvas.set_draw_color(to_sdl_color(colour));
            result = canvas.fill_rect(Rect::new(rect.x, rect.y, rect.size, rect.size));
        });
        result.map_err(|e| anyhow!("cannot fill rectangle: {}", e))?;

        self.canvas.present();
        Ok(())
    }

    /// Blocks until the user closes the window or presses escape.
    pub fn wait_for_quit(&mut self) {
        loop {
            match self.event_pump.wait_event() {
                Event::Quit {..} => {
                    log::debug!("quit requested");
                    return;
                },
                Event::KeyDown{ keycode: Some(Keycode::Escape), .. } => {
                    log::debug!("escape pressed");
                    return;
                },
                _ => {}
            }
        }
    }
}

fn to_sdl_color(colour: Rgb) -> pixels::Color {
    pixels::Color::RGB(colour.r, colour.g, colour.b)
}
