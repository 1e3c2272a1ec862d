mod config;

use std::error::Error;
use std::path::{Path, PathBuf};

use sdlpp::{
    Colour, Flip, PixelFormatEnum, Rect, Renderer, RendererFlags, Surface, Texture, VideoSubsystem, Window, WindowFlags,
};

use config::DemoConfig;

/// A small checkerboard sprite built on the CPU
fn make_sprite() -> sdlpp::Result<Surface<'static>> {
    let mut sprite = Surface::new(32, 32, PixelFormatEnum::ARGB8888)?;
    sprite.fill(Colour::WHITE)?;
    let dark = sprite.map_colour(Colour::rgb(0x30, 0x60, 0xD0));
    for row in 0..4 {
        for col in 0..4 {
            if (row + col) % 2 == 0 {
                sprite.fill_rect(Rect::new(col * 8, row * 8, 8, 8), dark)?;
            }
        }
    }
    Ok(sprite)
}

fn draw_frame(renderer: &Renderer<'_>, sprite: &Texture<'_>, config: &DemoConfig, frame: u32) -> sdlpp::Result<()> {
    renderer.set_draw_colour(config.background)?;
    renderer.clear()?;

    for shape in &config.shapes {
        renderer.set_draw_colour(shape.colour)?;
        if shape.outline {
            renderer.draw_rect(Some(shape.rect))?;
        } else {
            renderer.fill_rect(Some(shape.rect))?;
        }
    }

    let out = renderer.output_size()?;
    let dst = Rect::new(out.width as i32 / 2 - 32, out.height as i32 / 2 - 32, 64, 64);
    let angle = (config.spin * frame as f64) % 360.0;
    sprite.copy_ex(None, Some(dst), angle, None, Flip::NONE)
}

fn save_screenshot(renderer: &Renderer<'_>, path: &Path) -> sdlpp::Result<()> {
    let size = renderer.output_size()?;
    let mut shot = Surface::new(size.width, size.height, PixelFormatEnum::ARGB8888)?;
    let pitch = shot.pitch();
    shot.with_lock(|pixels| renderer.read_pixels(None, PixelFormatEnum::ARGB8888, pixels, pitch))??;
    shot.save_bmp(path)?;
    log::info!("Saved screenshot to {}", path.display());
    Ok(())
}

fn run(config: &DemoConfig) -> Result<(), Box<dyn Error>> {
    if let Some(driver) = &config.driver {
        sdlpp::set_hint("SDL_VIDEODRIVER", driver)?;
    }
    let video = VideoSubsystem::init(config.driver.as_deref())?;
    log::info!("Video driver: {}", video.driver());

    let window = Window::new_centered(&config.title, config.size, WindowFlags::SHOWN | WindowFlags::RESIZABLE)?;
    let mut flags = RendererFlags::NONE;
    if config.vsync {
        flags |= RendererFlags::PRESENTVSYNC;
    }
    let renderer = Renderer::new(&window, None, flags)?;
    let info = renderer.info()?;
    log::info!("Renderer: {} ({} texture formats)", info.name, info.texture_formats.len());

    let sprite = Texture::from_surface(&renderer, &make_sprite()?)?;

    let mut frame = 0u32;
    loop {
        if sdlpp::quit_requested() {
            log::info!("Quit requested after {} frames", frame);
            break;
        }
        draw_frame(&renderer, &sprite, config, frame)?;
        renderer.present();
        frame += 1;
        if config.frames.is_some_and(|limit| frame >= limit) {
            break;
        }
    }

    if let Some(path) = &config.screenshot {
        // the back buffer is undefined after present
        draw_frame(&renderer, &sprite, config, frame)?;
        save_screenshot(&renderer, path)?;
        renderer.present();
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let explicit = std::env::args().nth(1).map(PathBuf::from);
    let config = match config::load(explicit.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}
