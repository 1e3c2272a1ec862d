//! Safe RAII wrapper for the SDL2 video API
//!
//! Windows, surfaces, renderers, textures and OpenGL contexts are wrapped
//! in types that release their native handle on drop. Handles returned by
//! lookups (a window by id, a window's renderer, the current render target)
//! are non-owning and are never released by the wrapper. Lookups that
//! cannot tie the handle's lifetime to its owner are `unsafe fn`.
//!
//! # Example
//!
//! ```no_run
//! use sdlpp::{Colour, Rect, Renderer, RendererFlags, Size, VideoSubsystem, Window, WindowFlags};
//!
//! let _video = VideoSubsystem::init(None)?;
//! let window = Window::new_centered("demo", Size::new(640, 480), WindowFlags::SHOWN)?;
//! let renderer = Renderer::new(&window, None, RendererFlags::ACCELERATED)?;
//!
//! while !sdlpp::quit_requested() {
//!     renderer.set_draw_colour(Colour::BLACK)?;
//!     renderer.clear()?;
//!     renderer.set_draw_colour(Colour::WHITE)?;
//!     renderer.fill_rect(Some(Rect::new(10, 10, 100, 50)))?;
//!     renderer.present();
//! }
//! # Ok::<(), sdlpp::Error>(())
//! ```

mod error;
pub mod gl;
mod pixels;
mod rect;
mod render;
mod surface;
mod video;

pub use error::{check, clear_error, get_error, set_error, Error, Result};
pub use pixels::{convert_pixels, yuv, BlendMode, Colour, Palette, PixelFormat, PixelFormatEnum, PixelMasks};
pub use rect::{FPoint, FRect, Point, Rect, Size};
pub use render::{create_window_and_renderer, num_render_drivers, render_driver_info};
pub use render::{Flip, Renderer, RendererFlags, RendererInfo, ScaleMode, Texture, TextureAccess};
pub use render::{TextureLock, TextureQuery, TextureSurfaceLock};
pub use surface::Surface;
pub use video::{current_video_driver, num_video_drivers, video_driver, video_drivers, video_init, video_quit};
pub use video::{disable_screen_saver, enable_screen_saver, is_screen_saver_enabled};
pub use video::{hint, pump_events, quit_requested, set_hint};
pub use video::{BordersSize, Display, DisplayMode, Dpi, FullscreenMode, GammaRamp, Orientation};
pub use video::{HitTestResult, VideoSubsystem, Window, WindowFlags, WindowPos};

/// Re-export sdlpp-sys for advanced usage
pub use sdlpp_sys as ffi;
