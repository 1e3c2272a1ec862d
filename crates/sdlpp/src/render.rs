//! 2D accelerated rendering: renderers and textures
//!
//! A [`Renderer`] borrows the window or surface it draws into, and a
//! [`Texture`] borrows the renderer that created it, so neither can outlive
//! what it depends on. Renderer methods take `&self` so textures can be
//! drawn while they hold their borrow.

use std::ffi::c_void;
use std::marker::PhantomData;
use std::ops::{BitOr, BitOrAssign, Deref};
use std::os::raw::c_int;

use sdlpp_sys::{SDL_BlendMode, SDL_RendererInfo, SDL_ScaleMode};

use crate::error::{check, clear_error, create, from_cstr, to_count, Error, Result};
use crate::pixels::{pixel_buffer_len, plane_len, BlendMode, Colour, PixelFormatEnum};
use crate::rect::{opt_frect, opt_rect, FPoint, FRect, Point, Rect, Size};
use crate::surface::Surface;
use crate::video::{Window, WindowFlags};

// =============================================================================
// Flags and enums
// =============================================================================

/// Flags used when creating a rendering context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RendererFlags(pub u32);

impl RendererFlags {
    /// No requirements; any driver qualifies
    pub const NONE: Self = Self(0);
    /// The renderer is a software fallback
    pub const SOFTWARE: Self = Self(sdlpp_sys::SDL_RENDERER_SOFTWARE);
    /// The renderer uses hardware acceleration
    pub const ACCELERATED: Self = Self(sdlpp_sys::SDL_RENDERER_ACCELERATED);
    /// Present is synchronized with the refresh rate
    pub const PRESENTVSYNC: Self = Self(sdlpp_sys::SDL_RENDERER_PRESENTVSYNC);
    /// The renderer supports rendering to texture
    pub const TARGETTEXTURE: Self = Self(sdlpp_sys::SDL_RENDERER_TARGETTEXTURE);

    /// True if every flag of `other` is set
    pub fn contains(self, other: RendererFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for RendererFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RendererFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Flip applied by `Texture::copy_ex`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flip(c_int);

impl Flip {
    pub const NONE: Self = Self(sdlpp_sys::SDL_FLIP_NONE);
    /// Mirror left to right
    pub const HORIZONTAL: Self = Self(sdlpp_sys::SDL_FLIP_HORIZONTAL);
    /// Mirror top to bottom
    pub const VERTICAL: Self = Self(sdlpp_sys::SDL_FLIP_VERTICAL);
}

impl BitOr for Flip {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// How a texture's pixels may be changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureAccess {
    /// Changes rarely, not lockable
    Static,
    /// Changes frequently, lockable
    Streaming,
    /// Can be used as a render target
    Target,
}

impl From<TextureAccess> for c_int {
    fn from(access: TextureAccess) -> Self {
        match access {
            TextureAccess::Static => sdlpp_sys::SDL_TEXTUREACCESS_STATIC,
            TextureAccess::Streaming => sdlpp_sys::SDL_TEXTUREACCESS_STREAMING,
            TextureAccess::Target => sdlpp_sys::SDL_TEXTUREACCESS_TARGET,
        }
    }
}

impl TryFrom<c_int> for TextureAccess {
    type Error = Error;

    fn try_from(raw: c_int) -> Result<Self> {
        match raw {
            sdlpp_sys::SDL_TEXTUREACCESS_STATIC => Ok(TextureAccess::Static),
            sdlpp_sys::SDL_TEXTUREACCESS_STREAMING => Ok(TextureAccess::Streaming),
            sdlpp_sys::SDL_TEXTUREACCESS_TARGET => Ok(TextureAccess::Target),
            other => Err(Error::UnknownValue { kind: "texture access", value: other as i64 }),
        }
    }
}

/// Filtering used when a texture is scaled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    #[default]
    Nearest,
    Linear,
    /// Anisotropic filtering
    Best,
}

impl From<ScaleMode> for SDL_ScaleMode {
    fn from(mode: ScaleMode) -> Self {
        match mode {
            ScaleMode::Nearest => sdlpp_sys::SDL_ScaleModeNearest,
            ScaleMode::Linear => sdlpp_sys::SDL_ScaleModeLinear,
            ScaleMode::Best => sdlpp_sys::SDL_ScaleModeBest,
        }
    }
}

impl TryFrom<SDL_ScaleMode> for ScaleMode {
    type Error = Error;

    fn try_from(raw: SDL_ScaleMode) -> Result<Self> {
        match raw {
            sdlpp_sys::SDL_ScaleModeNearest => Ok(ScaleMode::Nearest),
            sdlpp_sys::SDL_ScaleModeLinear => Ok(ScaleMode::Linear),
            sdlpp_sys::SDL_ScaleModeBest => Ok(ScaleMode::Best),
            other => Err(Error::UnknownValue { kind: "scale mode", value: other as i64 }),
        }
    }
}

// =============================================================================
// Driver info
// =============================================================================

/// Information about a rendering driver or context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererInfo {
    pub name: String,
    pub flags: RendererFlags,
    pub texture_formats: Vec<PixelFormatEnum>,
    /// Largest texture size, zero when unlimited
    pub max_texture_size: Size,
}

impl From<&SDL_RendererInfo> for RendererInfo {
    fn from(info: &SDL_RendererInfo) -> Self {
        let count = (info.num_texture_formats as usize).min(info.texture_formats.len());
        Self {
            name: from_cstr(info.name).unwrap_or_default(),
            flags: RendererFlags(info.flags),
            texture_formats: info.texture_formats[..count].iter().copied().map(PixelFormatEnum).collect(),
            max_texture_size: Size::from_c(info.max_texture_width, info.max_texture_height),
        }
    }
}

/// Get the number of 2D rendering drivers available
pub fn num_render_drivers() -> Result<usize> {
    let count = unsafe { sdlpp_sys::SDL_GetNumRenderDrivers() };
    check(count)?;
    Ok(count as usize)
}

/// Get information about a specific 2D rendering driver
pub fn render_driver_info(index: usize) -> Result<RendererInfo> {
    let mut info = SDL_RendererInfo::default();
    check(unsafe { sdlpp_sys::SDL_GetRenderDriverInfo(to_count(index)?, &mut info) })?;
    Ok((&info).into())
}

/// Create a window with a default renderer attached
///
/// The renderer is destroyed together with the returned window; draw with
/// it through [`Window::renderer`].
pub fn create_window_and_renderer(size: Size, flags: WindowFlags) -> Result<Window> {
    let (w, h) = size.to_c();
    let mut window = std::ptr::null_mut();
    let mut renderer = std::ptr::null_mut();
    clear_error();
    check(unsafe { sdlpp_sys::SDL_CreateWindowAndRenderer(w, h, flags.0, &mut window, &mut renderer) })?;
    if window.is_null() || renderer.is_null() {
        return Err(Error::null("window and renderer"));
    }
    log::debug!("created window {:p} with renderer {:p}", window, renderer);
    Ok(Window::with_renderer(window))
}

// =============================================================================
// Renderer
// =============================================================================

/// A 2D rendering context (`SDL_Renderer`)
pub struct Renderer<'a> {
    ptr: *mut sdlpp_sys::SDL_Renderer,
    owned: bool,
    _marker: PhantomData<&'a ()>,
}

impl<'a> Renderer<'a> {
    /// Create a rendering context for a window
    ///
    /// `index` selects a driver; `None` picks the first one supporting
    /// `flags`.
    pub fn new(window: &'a Window, index: Option<usize>, flags: RendererFlags) -> Result<Self> {
        let index = index.map(to_count).transpose()?.unwrap_or(-1);
        Self::create_owned(|| unsafe { sdlpp_sys::SDL_CreateRenderer(window.as_raw(), index, flags.0) })
    }

    /// Create a software renderer drawing into a surface
    pub fn software(surface: &'a mut Surface<'_>) -> Result<Self> {
        Self::create_owned(|| unsafe { sdlpp_sys::SDL_CreateSoftwareRenderer(surface.as_raw()) })
    }

    fn create_owned(f: impl FnOnce() -> *mut sdlpp_sys::SDL_Renderer) -> Result<Self> {
        let ptr = create("renderer", f)?;
        log::debug!("created renderer {:p}", ptr);
        Ok(Self { ptr, owned: true, _marker: PhantomData })
    }

    /// Wrap a raw renderer pointer
    ///
    /// # Safety
    ///
    /// `ptr` must be a valid renderer that stays alive for `'a`. If `owned`
    /// is true it is destroyed on drop.
    pub unsafe fn from_raw(ptr: *mut sdlpp_sys::SDL_Renderer, owned: bool) -> Option<Self> {
        if ptr.is_null() {
            None
        } else {
            Some(Self { ptr, owned, _marker: PhantomData })
        }
    }

    /// True if the renderer is destroyed on drop
    pub fn is_owned(&self) -> bool {
        self.owned
    }

    /// Get information about this rendering context
    pub fn info(&self) -> Result<RendererInfo> {
        let mut info = SDL_RendererInfo::default();
        check(unsafe { sdlpp_sys::SDL_GetRendererInfo(self.ptr, &mut info) })?;
        Ok((&info).into())
    }

    /// The output size in pixels
    pub fn output_size(&self) -> Result<Size> {
        let (mut w, mut h) = (0, 0);
        check(unsafe { sdlpp_sys::SDL_GetRendererOutputSize(self.ptr, &mut w, &mut h) })?;
        Ok(Size::from_c(w, h))
    }

    // -------------------------------------------------------------------------
    // Targets
    // -------------------------------------------------------------------------

    /// True if the renderer can draw into target textures
    pub fn target_supported(&self) -> bool {
        unsafe { sdlpp_sys::SDL_RenderTargetSupported(self.ptr) == sdlpp_sys::SDL_TRUE }
    }

    /// Draw into a texture, or back to the default target with `None`
    ///
    /// The texture must have been created with `TextureAccess::Target`.
    pub fn set_target(&self, texture: Option<&Texture<'_>>) -> Result<()> {
        let raw = texture.map_or(std::ptr::null_mut(), Texture::as_raw);
        check(unsafe { sdlpp_sys::SDL_SetRenderTarget(self.ptr, raw) })
    }

    /// True while drawing goes to a texture instead of the default target
    pub fn has_target(&self) -> bool {
        !unsafe { sdlpp_sys::SDL_GetRenderTarget(self.ptr) }.is_null()
    }

    /// True if `texture` is the current render target
    pub fn is_target(&self, texture: &Texture<'_>) -> bool {
        (unsafe { sdlpp_sys::SDL_GetRenderTarget(self.ptr) }) == texture.ptr
    }

    /// The current render target as a non-owning handle, `None` for the
    /// default target
    ///
    /// # Safety
    ///
    /// The handle aliases the texture passed to [`Renderer::set_target`]
    /// and must not be used after that texture is dropped.
    pub unsafe fn target(&self) -> Option<Texture<'_>> {
        let ptr = sdlpp_sys::SDL_GetRenderTarget(self.ptr);
        if ptr.is_null() {
            None
        } else {
            Some(Texture { ptr, renderer: self.ptr, owned: false, _marker: PhantomData })
        }
    }

    // -------------------------------------------------------------------------
    // Coordinate system
    // -------------------------------------------------------------------------

    /// Set a device independent resolution for rendering
    ///
    /// A zero size disables logical scaling.
    pub fn set_logical_size(&self, size: Size) -> Result<()> {
        let (w, h) = size.to_c();
        check(unsafe { sdlpp_sys::SDL_RenderSetLogicalSize(self.ptr, w, h) })
    }

    /// The device independent resolution, zero when logical scaling is off
    pub fn logical_size(&self) -> Size {
        let (mut w, mut h) = (0, 0);
        unsafe { sdlpp_sys::SDL_RenderGetLogicalSize(self.ptr, &mut w, &mut h) };
        Size::from_c(w, h)
    }

    /// Force integer scales for resolution-independent rendering
    pub fn set_integer_scale(&self, enable: bool) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderSetIntegerScale(self.ptr, enable as sdlpp_sys::SDL_bool) })
    }

    /// True if integer scales are forced
    pub fn integer_scale(&self) -> bool {
        unsafe { sdlpp_sys::SDL_RenderGetIntegerScale(self.ptr) == sdlpp_sys::SDL_TRUE }
    }

    /// Set the drawing area; `None` uses the entire target
    pub fn set_viewport(&self, rect: Option<Rect>) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderSetViewport(self.ptr, opt_rect(rect.as_ref())) })
    }

    /// The drawing area of the current target
    pub fn viewport(&self) -> Rect {
        let mut rect = Rect::default();
        unsafe { sdlpp_sys::SDL_RenderGetViewport(self.ptr, rect.as_raw_mut()) };
        rect
    }

    /// Set the clip rectangle; `None` disables clipping
    pub fn set_clip_rect(&self, rect: Option<Rect>) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderSetClipRect(self.ptr, opt_rect(rect.as_ref())) })
    }

    /// The clip rectangle, `None` when clipping is disabled
    pub fn clip_rect(&self) -> Option<Rect> {
        let mut rect = Rect::default();
        unsafe { sdlpp_sys::SDL_RenderGetClipRect(self.ptr, rect.as_raw_mut()) };
        if self.is_clip_enabled() {
            Some(rect)
        } else {
            None
        }
    }

    /// True if a clip rectangle is set
    pub fn is_clip_enabled(&self) -> bool {
        unsafe { sdlpp_sys::SDL_RenderIsClipEnabled(self.ptr) == sdlpp_sys::SDL_TRUE }
    }

    /// Set the drawing scale
    ///
    /// Coordinates are scaled before the renderer's logical size is applied.
    pub fn set_scale(&self, x: f32, y: f32) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderSetScale(self.ptr, x, y) })
    }

    /// The horizontal and vertical drawing scale
    pub fn scale(&self) -> (f32, f32) {
        let (mut x, mut y) = (0.0, 0.0);
        unsafe { sdlpp_sys::SDL_RenderGetScale(self.ptr, &mut x, &mut y) };
        (x, y)
    }

    // -------------------------------------------------------------------------
    // Draw state
    // -------------------------------------------------------------------------

    /// Set the colour used for drawing operations (rect, line and clear)
    pub fn set_draw_colour(&self, colour: Colour) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetRenderDrawColor(self.ptr, colour.r, colour.g, colour.b, colour.a) })
    }

    /// The colour used for drawing operations
    pub fn draw_colour(&self) -> Result<Colour> {
        let mut c = Colour::default();
        check(unsafe { sdlpp_sys::SDL_GetRenderDrawColor(self.ptr, &mut c.r, &mut c.g, &mut c.b, &mut c.a) })?;
        Ok(c)
    }

    /// Set the blend mode used by draw operations
    pub fn set_draw_blend_mode(&self, mode: BlendMode) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetRenderDrawBlendMode(self.ptr, mode.into()) })
    }

    /// The blend mode used by draw operations
    pub fn draw_blend_mode(&self) -> Result<BlendMode> {
        let mut raw: SDL_BlendMode = 0;
        check(unsafe { sdlpp_sys::SDL_GetRenderDrawBlendMode(self.ptr, &mut raw) })?;
        BlendMode::try_from(raw)
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    /// Clear the current target with the drawing colour
    ///
    /// Ignores the viewport and clip rectangle.
    pub fn clear(&self) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderClear(self.ptr) })
    }

    /// Force queued rendering commands to execute
    pub fn flush(&self) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderFlush(self.ptr) })
    }

    /// Update the screen with any rendering since the last call
    pub fn present(&self) {
        unsafe { sdlpp_sys::SDL_RenderPresent(self.ptr) }
    }

    /// Draw a point with the drawing colour
    pub fn draw_point(&self, point: Point) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderDrawPoint(self.ptr, point.x, point.y) })
    }

    /// Draw a point at subpixel precision
    pub fn draw_point_f(&self, point: FPoint) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderDrawPointF(self.ptr, point.x, point.y) })
    }

    /// Draw several points
    pub fn draw_points(&self, points: &[Point]) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderDrawPoints(self.ptr, points.as_ptr().cast(), to_count(points.len())?) })
    }

    /// Draw several points at subpixel precision
    pub fn draw_points_f(&self, points: &[FPoint]) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderDrawPointsF(self.ptr, points.as_ptr().cast(), to_count(points.len())?) })
    }

    /// Draw a line between two points, both included
    pub fn draw_line(&self, from: Point, to: Point) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderDrawLine(self.ptr, from.x, from.y, to.x, to.y) })
    }

    /// Draw a line at subpixel precision
    pub fn draw_line_f(&self, from: FPoint, to: FPoint) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderDrawLineF(self.ptr, from.x, from.y, to.x, to.y) })
    }

    /// Draw a connected series of lines
    pub fn draw_lines(&self, points: &[Point]) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderDrawLines(self.ptr, points.as_ptr().cast(), to_count(points.len())?) })
    }

    /// Draw a connected series of lines at subpixel precision
    pub fn draw_lines_f(&self, points: &[FPoint]) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderDrawLinesF(self.ptr, points.as_ptr().cast(), to_count(points.len())?) })
    }

    /// Outline a rectangle; `None` outlines the entire target
    pub fn draw_rect(&self, rect: Option<Rect>) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderDrawRect(self.ptr, opt_rect(rect.as_ref())) })
    }

    /// Outline a rectangle at subpixel precision
    pub fn draw_rect_f(&self, rect: Option<FRect>) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderDrawRectF(self.ptr, opt_frect(rect.as_ref())) })
    }

    /// Outline several rectangles
    pub fn draw_rects(&self, rects: &[Rect]) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderDrawRects(self.ptr, rects.as_ptr().cast(), to_count(rects.len())?) })
    }

    /// Outline several rectangles at subpixel precision
    pub fn draw_rects_f(&self, rects: &[FRect]) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderDrawRectsF(self.ptr, rects.as_ptr().cast(), to_count(rects.len())?) })
    }

    /// Fill a rectangle; `None` fills the entire target
    pub fn fill_rect(&self, rect: Option<Rect>) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderFillRect(self.ptr, opt_rect(rect.as_ref())) })
    }

    /// Fill a rectangle at subpixel precision
    pub fn fill_rect_f(&self, rect: Option<FRect>) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderFillRectF(self.ptr, opt_frect(rect.as_ref())) })
    }

    /// Fill several rectangles
    pub fn fill_rects(&self, rects: &[Rect]) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderFillRects(self.ptr, rects.as_ptr().cast(), to_count(rects.len())?) })
    }

    /// Fill several rectangles at subpixel precision
    pub fn fill_rects_f(&self, rects: &[FRect]) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_RenderFillRectsF(self.ptr, rects.as_ptr().cast(), to_count(rects.len())?) })
    }

    /// Read pixels from the current target
    ///
    /// `None` reads the whole output in pixels. Only the part of the area
    /// inside the viewport is written, at its place within the area.
    /// `pixels` must hold the area's rows of `format` at `pitch`, and
    /// `format` must be a concrete packed format. This is a slow operation.
    pub fn read_pixels(&self, rect: Option<Rect>, format: PixelFormatEnum, pixels: &mut [u8], pitch: usize) -> Result<()> {
        let area = match rect {
            Some(rect) => rect,
            None => Rect::from_size(self.output_size()?),
        };
        let needed = pixel_buffer_len(format, area.size(), pitch)?;
        if pixels.len() < needed {
            return Err(Error::InvalidArgument(format!(
                "pixel buffer of {} bytes is smaller than the {} bytes {:?} needs at pitch {}",
                pixels.len(),
                needed,
                area,
                pitch
            )));
        }
        check(unsafe {
            sdlpp_sys::SDL_RenderReadPixels(self.ptr, area.as_raw(), format.0, pixels.as_mut_ptr().cast(), to_count(pitch)?)
        })
    }

    /// The `CAMetalLayer` of a Metal renderer
    pub fn metal_layer(&self) -> Option<*mut c_void> {
        let layer = unsafe { sdlpp_sys::SDL_RenderGetMetalLayer(self.ptr) };
        (!layer.is_null()).then_some(layer)
    }

    /// The Metal command encoder for the current frame
    pub fn metal_command_encoder(&self) -> Option<*mut c_void> {
        let encoder = unsafe { sdlpp_sys::SDL_RenderGetMetalCommandEncoder(self.ptr) };
        (!encoder.is_null()).then_some(encoder)
    }

    /// Get the raw renderer pointer (for advanced usage)
    pub fn as_raw(&self) -> *mut sdlpp_sys::SDL_Renderer {
        self.ptr
    }
}

impl Drop for Renderer<'_> {
    fn drop(&mut self) {
        if self.owned {
            log::debug!("destroying renderer {:p}", self.ptr);
            unsafe { sdlpp_sys::SDL_DestroyRenderer(self.ptr) };
        }
    }
}

impl std::fmt::Debug for Renderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").field("ptr", &self.ptr).field("owned", &self.owned).finish()
    }
}

// =============================================================================
// Texture
// =============================================================================

/// Format, access and size of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureQuery {
    pub format: PixelFormatEnum,
    pub access: TextureAccess,
    pub size: Size,
}

/// A texture owned by a renderer (`SDL_Texture`)
pub struct Texture<'r> {
    ptr: *mut sdlpp_sys::SDL_Texture,
    renderer: *mut sdlpp_sys::SDL_Renderer,
    owned: bool,
    _marker: PhantomData<&'r ()>,
}

impl<'r> Texture<'r> {
    /// Create a texture for a rendering context
    pub fn new(renderer: &'r Renderer<'_>, format: PixelFormatEnum, access: TextureAccess, size: Size) -> Result<Self> {
        let (w, h) = size.to_c();
        let access: c_int = access.into();
        Self::create_owned(renderer, || unsafe { sdlpp_sys::SDL_CreateTexture(renderer.ptr, format.0, access, w, h) })
    }

    /// Create a static texture from a surface
    ///
    /// The surface is left unchanged and may be dropped afterwards.
    pub fn from_surface(renderer: &'r Renderer<'_>, surface: &Surface<'_>) -> Result<Self> {
        Self::create_owned(renderer, || unsafe {
            sdlpp_sys::SDL_CreateTextureFromSurface(renderer.ptr, surface.as_raw())
        })
    }

    fn create_owned(renderer: &'r Renderer<'_>, f: impl FnOnce() -> *mut sdlpp_sys::SDL_Texture) -> Result<Self> {
        let ptr = create("texture", f)?;
        log::debug!("created texture {:p} on renderer {:p}", ptr, renderer.ptr);
        Ok(Self { ptr, renderer: renderer.ptr, owned: true, _marker: PhantomData })
    }

    /// Wrap a raw texture pointer belonging to `renderer`
    ///
    /// # Safety
    ///
    /// `ptr` must be a valid texture created by `renderer`. If `owned` is
    /// true it is destroyed on drop.
    pub unsafe fn from_raw(ptr: *mut sdlpp_sys::SDL_Texture, renderer: &'r Renderer<'_>, owned: bool) -> Option<Self> {
        if ptr.is_null() {
            None
        } else {
            Some(Self { ptr, renderer: renderer.ptr, owned, _marker: PhantomData })
        }
    }

    /// True if the texture is destroyed on drop
    pub fn is_owned(&self) -> bool {
        self.owned
    }

    /// Query the attributes of the texture
    pub fn query(&self) -> Result<TextureQuery> {
        let mut format = 0;
        let mut access = 0;
        let (mut w, mut h) = (0, 0);
        check(unsafe { sdlpp_sys::SDL_QueryTexture(self.ptr, &mut format, &mut access, &mut w, &mut h) })?;
        Ok(TextureQuery {
            format: PixelFormatEnum(format),
            access: TextureAccess::try_from(access)?,
            size: Size::from_c(w, h),
        })
    }

    /// The texture size in pixels
    pub fn size(&self) -> Result<Size> {
        Ok(self.query()?.size)
    }

    // -------------------------------------------------------------------------
    // Modulation
    // -------------------------------------------------------------------------

    /// Set a colour multiplied into copy operations
    pub fn set_colour_mod(&mut self, r: u8, g: u8, b: u8) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetTextureColorMod(self.ptr, r, g, b) })
    }

    /// The colour multiplied into copy operations
    pub fn colour_mod(&self) -> Result<(u8, u8, u8)> {
        let (mut r, mut g, mut b) = (0, 0, 0);
        check(unsafe { sdlpp_sys::SDL_GetTextureColorMod(self.ptr, &mut r, &mut g, &mut b) })?;
        Ok((r, g, b))
    }

    /// Set an alpha value multiplied into copy operations
    pub fn set_alpha_mod(&mut self, alpha: u8) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetTextureAlphaMod(self.ptr, alpha) })
    }

    /// The alpha value multiplied into copy operations
    pub fn alpha_mod(&self) -> Result<u8> {
        let mut alpha = 0;
        check(unsafe { sdlpp_sys::SDL_GetTextureAlphaMod(self.ptr, &mut alpha) })?;
        Ok(alpha)
    }

    /// Set colour and alpha modulation together
    pub fn set_mod(&mut self, colour: Colour) -> Result<()> {
        self.set_colour_mod(colour.r, colour.g, colour.b)?;
        self.set_alpha_mod(colour.a)
    }

    /// Colour and alpha modulation together
    pub fn get_mod(&self) -> Result<Colour> {
        let (r, g, b) = self.colour_mod()?;
        Ok(Colour::rgba(r, g, b, self.alpha_mod()?))
    }

    /// Set the blend mode used when copying the texture
    pub fn set_blend_mode(&mut self, mode: BlendMode) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetTextureBlendMode(self.ptr, mode.into()) })
    }

    /// The blend mode used when copying the texture
    pub fn blend_mode(&self) -> Result<BlendMode> {
        let mut raw: SDL_BlendMode = 0;
        check(unsafe { sdlpp_sys::SDL_GetTextureBlendMode(self.ptr, &mut raw) })?;
        BlendMode::try_from(raw)
    }

    /// Set the filter used when the texture is scaled
    pub fn set_scale_mode(&mut self, mode: ScaleMode) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetTextureScaleMode(self.ptr, mode.into()) })
    }

    /// The filter used when the texture is scaled
    pub fn scale_mode(&self) -> Result<ScaleMode> {
        let mut raw: SDL_ScaleMode = 0;
        check(unsafe { sdlpp_sys::SDL_GetTextureScaleMode(self.ptr, &mut raw) })?;
        ScaleMode::try_from(raw)
    }

    // -------------------------------------------------------------------------
    // Pixel access
    // -------------------------------------------------------------------------

    /// The area `rect` selects, which must lie inside the texture
    fn area(&self, rect: Option<Rect>) -> Result<(TextureQuery, Rect)> {
        let query = self.query()?;
        let full = Rect::from_size(query.size);
        let area = rect.unwrap_or(full);
        if !full.contains_rect(&area) {
            return Err(Error::InvalidArgument(format!(
                "{:?} is not inside the {}x{} texture",
                area, query.size.width, query.size.height
            )));
        }
        Ok((query, area))
    }

    /// Update part of a static texture with new pixel data
    ///
    /// `rect` must lie inside the texture and `pixels` must hold its rows
    /// in the texture's format at `pitch`. Planar YUV data carries its
    /// chroma planes after the luma plane. Slow; use a streaming texture
    /// and `lock` for frequently changing contents.
    pub fn update(&mut self, rect: Option<Rect>, pixels: &[u8], pitch: usize) -> Result<()> {
        let (query, area) = self.area(rect)?;
        let needed = pixel_buffer_len(query.format, area.size(), pitch)?;
        if pixels.len() < needed {
            return Err(Error::InvalidArgument(format!(
                "pixel buffer of {} bytes is smaller than the {} bytes {:?} needs at pitch {}",
                pixels.len(),
                needed,
                area,
                pitch
            )));
        }
        check(unsafe { sdlpp_sys::SDL_UpdateTexture(self.ptr, area.as_raw(), pixels.as_ptr().cast(), to_count(pitch)?) })
    }

    /// Update part of a planar YV12 or IYUV texture
    ///
    /// The chroma planes cover half the area in each direction, rounded up.
    #[allow(clippy::too_many_arguments)]
    pub fn update_yuv(
        &mut self,
        rect: Option<Rect>,
        y_plane: &[u8],
        y_pitch: usize,
        u_plane: &[u8],
        u_pitch: usize,
        v_plane: &[u8],
        v_pitch: usize,
    ) -> Result<()> {
        let (_, area) = self.area(rect)?;
        let size = area.size();
        let (w, h) = (size.width as usize, size.height as usize);
        let planes = [
            ("Y", y_plane.len(), plane_len(w, h, y_pitch)?),
            ("U", u_plane.len(), plane_len(w.div_ceil(2), h.div_ceil(2), u_pitch)?),
            ("V", v_plane.len(), plane_len(w.div_ceil(2), h.div_ceil(2), v_pitch)?),
        ];
        if let Some((name, len, needed)) = planes.iter().find(|(_, len, needed)| len < needed) {
            return Err(Error::InvalidArgument(format!(
                "{} plane of {} bytes is smaller than the {} bytes {:?} needs",
                name, len, needed, area
            )));
        }
        check(unsafe {
            sdlpp_sys::SDL_UpdateYUVTexture(
                self.ptr,
                area.as_raw(),
                y_plane.as_ptr(),
                to_count(y_pitch)?,
                u_plane.as_ptr(),
                to_count(u_pitch)?,
                v_plane.as_ptr(),
                to_count(v_pitch)?,
            )
        })
    }

    /// Lock part of a streaming texture for write-only pixel access
    ///
    /// `rect` must lie inside the texture. Planar YUV textures lock whole,
    /// and packed YUV areas start on an even column. The texture is
    /// unlocked when the returned guard is dropped. The locked pixels may
    /// not hold the old texture contents.
    pub fn lock(&mut self, rect: Option<Rect>) -> Result<TextureLock<'_, 'r>> {
        let (query, area) = self.area(rect)?;
        if query.format.is_planar_yuv() && area != Rect::from_size(query.size) {
            return Err(Error::InvalidArgument(format!("planar {} textures only lock whole", query.format.name())));
        }
        if query.format.is_packed_yuv() && area.x % 2 != 0 {
            return Err(Error::InvalidArgument(format!("{:?} splits a {} macropixel", area, query.format.name())));
        }
        let mut pixels = std::ptr::null_mut();
        let mut pitch = 0;
        check(unsafe { sdlpp_sys::SDL_LockTexture(self.ptr, area.as_raw(), &mut pixels, &mut pitch) })?;
        let pitch = pitch.max(0) as usize;
        let len = match pixel_buffer_len(query.format, area.size(), pitch) {
            Ok(len) => len,
            Err(e) => {
                log::warn!("unlocking texture {:p} after a bad lock pitch: {}", self.ptr, e);
                unsafe { sdlpp_sys::SDL_UnlockTexture(self.ptr) };
                return Err(e);
            }
        };
        Ok(TextureLock { texture: self, pixels: pixels.cast(), len, pitch })
    }

    /// Lock part of a streaming texture as a surface
    ///
    /// `rect` must lie inside the texture. The surface belongs to the
    /// texture and goes away on unlock.
    pub fn lock_to_surface(&mut self, rect: Option<Rect>) -> Result<TextureSurfaceLock<'_, 'r>> {
        let (_, area) = self.area(rect)?;
        let mut raw = std::ptr::null_mut();
        check(unsafe { sdlpp_sys::SDL_LockTextureToSurface(self.ptr, area.as_raw(), &mut raw) })?;
        match unsafe { Surface::from_raw(raw, false) } {
            Ok(surface) => Ok(TextureSurfaceLock { texture: self, surface }),
            Err(e) => {
                log::warn!("texture {:p} locked without a surface", self.ptr);
                unsafe { sdlpp_sys::SDL_UnlockTexture(self.ptr) };
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Copying to the render target
    // -------------------------------------------------------------------------

    /// Copy a portion of the texture to the current render target
    ///
    /// `None` for `src` uses the entire texture, `None` for `dst` the
    /// entire target.
    pub fn copy(&self, src: Option<Rect>, dst: Option<Rect>) -> Result<()> {
        check(unsafe {
            sdlpp_sys::SDL_RenderCopy(self.renderer, self.ptr, opt_rect(src.as_ref()), opt_rect(dst.as_ref()))
        })
    }

    /// Copy to a destination at subpixel precision
    pub fn copy_f(&self, src: Option<Rect>, dst: Option<FRect>) -> Result<()> {
        check(unsafe {
            sdlpp_sys::SDL_RenderCopyF(self.renderer, self.ptr, opt_rect(src.as_ref()), opt_frect(dst.as_ref()))
        })
    }

    /// Copy with rotation and flipping
    ///
    /// `angle` is in degrees, clockwise. Rotation is around `center`, or
    /// around the middle of `dst` when `None`.
    pub fn copy_ex(&self, src: Option<Rect>, dst: Option<Rect>, angle: f64, center: Option<Point>, flip: Flip) -> Result<()> {
        let center_ptr = center.as_ref().map_or(std::ptr::null(), |c| (c as *const Point).cast());
        check(unsafe {
            sdlpp_sys::SDL_RenderCopyEx(
                self.renderer,
                self.ptr,
                opt_rect(src.as_ref()),
                opt_rect(dst.as_ref()),
                angle,
                center_ptr,
                flip.0,
            )
        })
    }

    /// Copy with rotation and flipping at subpixel precision
    pub fn copy_ex_f(
        &self,
        src: Option<Rect>,
        dst: Option<FRect>,
        angle: f64,
        center: Option<FPoint>,
        flip: Flip,
    ) -> Result<()> {
        let center_ptr = center.as_ref().map_or(std::ptr::null(), |c| (c as *const FPoint).cast());
        check(unsafe {
            sdlpp_sys::SDL_RenderCopyExF(
                self.renderer,
                self.ptr,
                opt_rect(src.as_ref()),
                opt_frect(dst.as_ref()),
                angle,
                center_ptr,
                flip.0,
            )
        })
    }

    /// Get the raw texture pointer (for advanced usage)
    pub fn as_raw(&self) -> *mut sdlpp_sys::SDL_Texture {
        self.ptr
    }
}

impl Drop for Texture<'_> {
    fn drop(&mut self) {
        if self.owned {
            log::debug!("destroying texture {:p}", self.ptr);
            unsafe { sdlpp_sys::SDL_DestroyTexture(self.ptr) };
        }
    }
}

impl std::fmt::Debug for Texture<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture").field("ptr", &self.ptr).field("owned", &self.owned).finish()
    }
}

/// Write access to a locked streaming texture
pub struct TextureLock<'t, 'r> {
    texture: &'t mut Texture<'r>,
    pixels: *mut u8,
    len: usize,
    pitch: usize,
}

impl TextureLock<'_, '_> {
    /// Bytes per row of the locked area
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// The locked area's bytes, from its first pixel to the end of its
    /// last row
    pub fn pixels(&mut self) -> &mut [u8] {
        unsafe { std::slice::from_raw_parts_mut(self.pixels, self.len) }
    }
}

impl Drop for TextureLock<'_, '_> {
    fn drop(&mut self) {
        unsafe { sdlpp_sys::SDL_UnlockTexture(self.texture.ptr) };
    }
}

/// A locked streaming texture seen as a surface
///
/// Reading goes through `Deref`; drawing into the surface goes through
/// [`TextureSurfaceLock::with_surface`], which keeps the borrowed surface
/// from being moved out of the lock.
pub struct TextureSurfaceLock<'t, 'r> {
    texture: &'t mut Texture<'r>,
    surface: Surface<'t>,
}

impl TextureSurfaceLock<'_, '_> {
    /// Run `f` with write access to the locked surface
    pub fn with_surface<R, F>(&mut self, f: F) -> R
    where
        F: for<'s> FnOnce(&mut Surface<'s>) -> R,
    {
        f(&mut self.surface)
    }
}

impl<'t> Deref for TextureSurfaceLock<'t, '_> {
    type Target = Surface<'t>;

    fn deref(&self) -> &Surface<'t> {
        &self.surface
    }
}

impl Drop for TextureSurfaceLock<'_, '_> {
    fn drop(&mut self) {
        unsafe { sdlpp_sys::SDL_UnlockTexture(self.texture.ptr) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour::rgb(0xFF, 0, 0);
    const GREEN: Colour = Colour::rgb(0, 0xFF, 0);
    const BLUE: Colour = Colour::rgb(0, 0, 0xFF);

    fn argb(colour: Colour) -> u32 {
        u32::from_be_bytes([colour.a, colour.r, colour.g, colour.b])
    }

    fn read_pixel(renderer: &Renderer<'_>, x: i32, y: i32) -> u32 {
        let mut buf = [0u8; 4];
        renderer
            .read_pixels(Some(Rect::new(x, y, 1, 1)), PixelFormatEnum::ARGB8888, &mut buf, 4)
            .unwrap();
        u32::from_ne_bytes(buf)
    }

    fn canvas() -> Surface<'static> {
        Surface::new(16, 16, PixelFormatEnum::ARGB8888).unwrap()
    }

    #[test]
    fn test_flags_combine() {
        let flags = RendererFlags::ACCELERATED | RendererFlags::PRESENTVSYNC;
        assert!(flags.contains(RendererFlags::ACCELERATED));
        assert!(!flags.contains(RendererFlags::SOFTWARE));
        assert_eq!((Flip::HORIZONTAL | Flip::VERTICAL).0, 3);
    }

    #[test]
    fn test_enum_round_trips_reject_unknown() {
        assert_eq!(TextureAccess::try_from(c_int::from(TextureAccess::Target)), Ok(TextureAccess::Target));
        assert!(matches!(TextureAccess::try_from(9), Err(Error::UnknownValue { .. })));
        assert!(matches!(ScaleMode::try_from(7), Err(Error::UnknownValue { .. })));
    }

    #[test]
    fn test_software_driver_listed() {
        let count = num_render_drivers().unwrap();
        let infos: Vec<_> = (0..count).map(|i| render_driver_info(i).unwrap()).collect();
        assert!(infos.iter().any(|info| info.name == "software"));
        assert!(render_driver_info(count + 10).is_err());
    }

    #[test]
    fn test_software_renderer_info() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        let info = renderer.info().unwrap();
        assert_eq!(info.name, "software");
        assert!(info.flags.contains(RendererFlags::SOFTWARE));
        assert!(renderer.target_supported());
        assert_eq!(renderer.output_size().unwrap(), Size::new(16, 16));
    }

    #[test]
    fn test_clear_and_fill() {
        let mut surface = canvas();
        {
            let renderer = Renderer::software(&mut surface).unwrap();
            renderer.set_draw_colour(BLUE).unwrap();
            assert_eq!(renderer.draw_colour().unwrap(), BLUE);
            renderer.clear().unwrap();

            renderer.set_draw_colour(RED).unwrap();
            renderer.fill_rect(Some(Rect::new(4, 4, 4, 4))).unwrap();
            renderer.flush().unwrap();

            assert_eq!(read_pixel(&renderer, 0, 0), argb(BLUE));
            assert_eq!(read_pixel(&renderer, 5, 5), argb(RED));
            assert_eq!(read_pixel(&renderer, 8, 8), argb(BLUE));
        }
        // the software renderer drew straight into the surface
        let pixel = surface
            .with_lock(|pixels| u32::from_ne_bytes([pixels[0], pixels[1], pixels[2], pixels[3]]))
            .unwrap();
        assert_eq!(pixel, argb(BLUE));
    }

    #[test]
    fn test_lines_points_and_outline() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        renderer.set_draw_colour(Colour::BLACK).unwrap();
        renderer.clear().unwrap();

        renderer.set_draw_colour(GREEN).unwrap();
        renderer.draw_line(Point::new(0, 15), Point::new(15, 15)).unwrap();
        renderer.draw_points(&[Point::new(3, 3), Point::new(7, 2)]).unwrap();
        renderer.draw_rect(None).unwrap();
        renderer.flush().unwrap();

        assert_eq!(read_pixel(&renderer, 10, 15), argb(GREEN));
        assert_eq!(read_pixel(&renderer, 3, 3), argb(GREEN));
        assert_eq!(read_pixel(&renderer, 7, 2), argb(GREEN));
        assert_eq!(read_pixel(&renderer, 0, 8), argb(GREEN));
        assert_eq!(read_pixel(&renderer, 8, 8), argb(Colour::BLACK));
    }

    #[test]
    fn test_clip_and_viewport() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        assert!(!renderer.is_clip_enabled());
        assert_eq!(renderer.clip_rect(), None);

        renderer.set_clip_rect(Some(Rect::new(0, 0, 4, 4))).unwrap();
        assert!(renderer.is_clip_enabled());
        assert_eq!(renderer.clip_rect(), Some(Rect::new(0, 0, 4, 4)));

        renderer.set_draw_colour(Colour::BLACK).unwrap();
        renderer.clear().unwrap();
        renderer.set_draw_colour(RED).unwrap();
        renderer.fill_rect(None).unwrap();
        renderer.set_clip_rect(None).unwrap();
        renderer.flush().unwrap();
        assert_eq!(read_pixel(&renderer, 1, 1), argb(RED));
        assert_eq!(read_pixel(&renderer, 10, 10), argb(Colour::BLACK));

        renderer.set_viewport(Some(Rect::new(8, 8, 8, 8))).unwrap();
        assert_eq!(renderer.viewport(), Rect::new(8, 8, 8, 8));
        renderer.set_viewport(None).unwrap();
        assert_eq!(renderer.viewport(), Rect::new(0, 0, 16, 16));
    }

    #[test]
    fn test_scale_and_logical_size() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        renderer.set_scale(2.0, 0.5).unwrap();
        assert_eq!(renderer.scale(), (2.0, 0.5));

        renderer.set_logical_size(Size::new(8, 8)).unwrap();
        assert_eq!(renderer.logical_size(), Size::new(8, 8));
        renderer.set_integer_scale(true).unwrap();
        assert!(renderer.integer_scale());
    }

    #[test]
    fn test_blend_mode_round_trip() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        renderer.set_draw_blend_mode(BlendMode::Add).unwrap();
        assert_eq!(renderer.draw_blend_mode().unwrap(), BlendMode::Add);
    }

    #[test]
    fn test_read_pixels_rejects_short_buffer() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        let mut buf = [0u8; 8];
        let err = renderer.read_pixels(None, PixelFormatEnum::ARGB8888, &mut buf, 64).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        // a 16 pixel row does not fit a 4 byte pitch
        let mut row = [0u8; 4];
        let err = renderer
            .read_pixels(Some(Rect::new(0, 0, 16, 1)), PixelFormatEnum::ARGB8888, &mut row, 4)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_read_pixels_covers_output_when_scaled() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        renderer.set_draw_colour(RED).unwrap();
        renderer.clear().unwrap();
        renderer.set_scale(2.0, 2.0).unwrap();
        renderer.flush().unwrap();

        // the logical viewport is 8x8 but all 16 output rows are read
        let mut half = vec![0u8; 512];
        let err = renderer.read_pixels(None, PixelFormatEnum::ARGB8888, &mut half, 64).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let mut full = vec![0u8; 1024];
        renderer.read_pixels(None, PixelFormatEnum::ARGB8888, &mut full, 64).unwrap();
        assert_eq!(&full[1020..], &argb(RED).to_ne_bytes());
    }

    #[test]
    fn test_read_pixels_tight_last_row() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        renderer.set_draw_colour(GREEN).unwrap();
        renderer.clear().unwrap();
        renderer.flush().unwrap();

        // two rows at pitch 64 with only the 8 used bytes of the second row
        let mut buf = vec![0u8; 64 + 8];
        renderer.read_pixels(Some(Rect::new(0, 0, 2, 2)), PixelFormatEnum::ARGB8888, &mut buf, 64).unwrap();
        assert_eq!(&buf[64..68], &argb(GREEN).to_ne_bytes());
        assert_eq!(&buf[8..12], &[0; 4]);
    }

    #[test]
    fn test_texture_from_surface_and_copy() {
        let mut image = Surface::new(4, 4, PixelFormatEnum::ARGB8888).unwrap();
        image.fill(GREEN).unwrap();

        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        let texture = Texture::from_surface(&renderer, &image).unwrap();
        drop(image);

        let query = texture.query().unwrap();
        assert_eq!(query.size, Size::new(4, 4));
        assert_eq!(query.access, TextureAccess::Static);

        renderer.set_draw_colour(Colour::BLACK).unwrap();
        renderer.clear().unwrap();
        texture.copy(None, Some(Rect::new(2, 2, 4, 4))).unwrap();
        texture.copy_f(None, Some(FRect::new(10.0, 10.0, 2.0, 2.0))).unwrap();
        renderer.flush().unwrap();

        assert_eq!(read_pixel(&renderer, 3, 3), argb(GREEN));
        assert_eq!(read_pixel(&renderer, 11, 11), argb(GREEN));
        assert_eq!(read_pixel(&renderer, 0, 0), argb(Colour::BLACK));
        assert_eq!(read_pixel(&renderer, 7, 7), argb(Colour::BLACK));
    }

    #[test]
    fn test_copy_ex_flip() {
        let mut image = Surface::new(2, 1, PixelFormatEnum::ARGB8888).unwrap();
        image.fill_rect_colour(Rect::new(0, 0, 1, 1), RED).unwrap();
        image.fill_rect_colour(Rect::new(1, 0, 1, 1), BLUE).unwrap();

        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        let texture = Texture::from_surface(&renderer, &image).unwrap();
        texture.copy_ex(None, Some(Rect::new(0, 0, 2, 1)), 0.0, None, Flip::HORIZONTAL).unwrap();
        renderer.flush().unwrap();

        assert_eq!(read_pixel(&renderer, 0, 0), argb(BLUE));
        assert_eq!(read_pixel(&renderer, 1, 0), argb(RED));
    }

    #[test]
    fn test_render_target_texture() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        let target = Texture::new(&renderer, PixelFormatEnum::ARGB8888, TextureAccess::Target, Size::new(4, 4)).unwrap();

        assert!(!renderer.has_target());
        assert!(unsafe { renderer.target() }.is_none());
        renderer.set_target(Some(&target)).unwrap();
        assert!(renderer.has_target());
        assert!(renderer.is_target(&target));
        {
            let current = unsafe { renderer.target() }.unwrap();
            assert!(!current.is_owned());
            assert_eq!(current.as_raw(), target.as_raw());
        }
        renderer.set_draw_colour(RED).unwrap();
        renderer.clear().unwrap();

        renderer.set_target(None).unwrap();
        renderer.set_draw_colour(Colour::BLACK).unwrap();
        renderer.clear().unwrap();
        target.copy(None, Some(Rect::new(0, 0, 4, 4))).unwrap();
        renderer.flush().unwrap();

        assert_eq!(read_pixel(&renderer, 1, 1), argb(RED));
        assert_eq!(read_pixel(&renderer, 6, 6), argb(Colour::BLACK));
        // the non-owning target handle left the texture alive
        assert_eq!(target.size().unwrap(), Size::new(4, 4));
    }

    #[test]
    fn test_streaming_lock() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        let mut texture =
            Texture::new(&renderer, PixelFormatEnum::ARGB8888, TextureAccess::Streaming, Size::new(2, 2)).unwrap();
        {
            let mut lock = texture.lock(None).unwrap();
            assert!(lock.pitch() >= 8);
            let pitch = lock.pitch();
            let pixels = lock.pixels();
            assert!(pixels.len() >= pitch * 2);
            for row in pixels.chunks_mut(pitch).take(2) {
                for px in row[..8].chunks_mut(4) {
                    px.copy_from_slice(&argb(BLUE).to_ne_bytes());
                }
            }
        }
        texture.copy(None, Some(Rect::new(0, 0, 2, 2))).unwrap();
        renderer.flush().unwrap();
        assert_eq!(read_pixel(&renderer, 1, 1), argb(BLUE));
    }

    #[test]
    fn test_lock_sub_rect() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        renderer.set_draw_colour(Colour::BLACK).unwrap();
        renderer.clear().unwrap();
        let mut texture =
            Texture::new(&renderer, PixelFormatEnum::ARGB8888, TextureAccess::Streaming, Size::new(4, 4)).unwrap();
        {
            let mut lock = texture.lock(Some(Rect::new(1, 1, 2, 2))).unwrap();
            let pitch = lock.pitch();
            let pixels = lock.pixels();
            // ends with the two pixels of the last row, not a whole pitch
            assert_eq!(pixels.len(), pitch + 8);
            for row in 0..2 {
                for px in pixels[row * pitch..row * pitch + 8].chunks_mut(4) {
                    px.copy_from_slice(&argb(BLUE).to_ne_bytes());
                }
            }
        }
        texture.copy(None, Some(Rect::new(0, 0, 4, 4))).unwrap();
        renderer.flush().unwrap();
        assert_eq!(read_pixel(&renderer, 1, 1), argb(BLUE));
        assert_eq!(read_pixel(&renderer, 2, 2), argb(BLUE));
        assert_eq!(read_pixel(&renderer, 3, 3), argb(Colour::BLACK));
    }

    #[test]
    fn test_lock_rejects_area_outside_texture() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        let mut texture =
            Texture::new(&renderer, PixelFormatEnum::ARGB8888, TextureAccess::Streaming, Size::new(2, 2)).unwrap();

        for rect in [Rect::new(0, 0, 2, 1000), Rect::new(1, 0, 2, 2), Rect::new(-1, 0, 1, 1), Rect::new(0, 0, 0, 1)] {
            assert!(matches!(texture.lock(Some(rect)), Err(Error::InvalidArgument(_))), "{:?}", rect);
            assert!(matches!(texture.lock_to_surface(Some(rect)), Err(Error::InvalidArgument(_))), "{:?}", rect);
        }
        // the rejected locks left the texture unlocked
        texture.lock(None).unwrap();
    }

    #[test]
    fn test_lock_yuv_layouts() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();

        let mut planar =
            Texture::new(&renderer, PixelFormatEnum::IYUV, TextureAccess::Streaming, Size::new(4, 2)).unwrap();
        assert!(matches!(planar.lock(Some(Rect::new(0, 0, 2, 2))), Err(Error::InvalidArgument(_))));
        {
            let mut lock = planar.lock(None).unwrap();
            let pitch = lock.pitch();
            // luma rows then two chroma planes at half the pitch
            assert_eq!(lock.pixels().len(), pitch * 2 + 2 * pitch.div_ceil(2));
        }

        let mut packed =
            Texture::new(&renderer, PixelFormatEnum::YUY2, TextureAccess::Streaming, Size::new(4, 2)).unwrap();
        assert!(matches!(packed.lock(Some(Rect::new(1, 0, 2, 1))), Err(Error::InvalidArgument(_))));
        let mut lock = packed.lock(Some(Rect::new(2, 0, 2, 2))).unwrap();
        let pitch = lock.pitch();
        assert_eq!(lock.pixels().len(), pitch + 4);
    }

    #[test]
    fn test_lock_to_surface() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        let mut texture =
            Texture::new(&renderer, PixelFormatEnum::ARGB8888, TextureAccess::Streaming, Size::new(3, 3)).unwrap();
        {
            let mut locked = texture.lock_to_surface(None).unwrap();
            assert!(!locked.is_owned());
            assert_eq!(locked.size(), Size::new(3, 3));
            locked.with_surface(|surface| surface.fill(RED)).unwrap();
        }
        texture.copy(None, Some(Rect::new(0, 0, 3, 3))).unwrap();
        renderer.flush().unwrap();
        assert_eq!(read_pixel(&renderer, 2, 2), argb(RED));
    }

    #[test]
    fn test_static_texture_update() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        let mut texture =
            Texture::new(&renderer, PixelFormatEnum::ARGB8888, TextureAccess::Static, Size::new(2, 2)).unwrap();

        let pixels: Vec<u8> = std::iter::repeat(argb(GREEN).to_ne_bytes()).take(4).flatten().collect();
        texture.update(None, &pixels, 8).unwrap();
        assert!(matches!(texture.update(None, &pixels[..4], 8), Err(Error::InvalidArgument(_))));
        // pitch shorter than a row, and areas leaving the texture
        assert!(matches!(texture.update(None, &pixels, 4), Err(Error::InvalidArgument(_))));
        assert!(matches!(texture.update(Some(Rect::new(1, 1, 2, 2)), &pixels, 8), Err(Error::InvalidArgument(_))));
        // one row of two pixels is enough for a 2x1 area
        texture.update(Some(Rect::new(0, 1, 2, 1)), &pixels[..8], 8).unwrap();

        texture.copy(None, Some(Rect::new(0, 0, 2, 2))).unwrap();
        renderer.flush().unwrap();
        assert_eq!(read_pixel(&renderer, 1, 1), argb(GREEN));
    }

    #[test]
    fn test_planar_updates_count_chroma() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        let mut texture = Texture::new(&renderer, PixelFormatEnum::IYUV, TextureAccess::Static, Size::new(4, 2)).unwrap();

        // 4x2 luma at pitch 4 plus two 2x1 chroma planes
        let packed = [0x80u8; 12];
        texture.update(None, &packed, 4).unwrap();
        assert!(matches!(texture.update(None, &packed[..8], 4), Err(Error::InvalidArgument(_))));

        let (y, u, v) = ([0x80u8; 8], [0x80u8; 2], [0x80u8; 2]);
        texture.update_yuv(None, &y, 4, &u, 2, &v, 2).unwrap();
        assert!(matches!(texture.update_yuv(None, &y, 4, &u[..1], 2, &v, 2), Err(Error::InvalidArgument(_))));
        assert!(matches!(texture.update_yuv(None, &y, 3, &u, 2, &v, 2), Err(Error::InvalidArgument(_))));
        assert!(matches!(texture.update_yuv(None, &y, 4, &u, 1, &v, 2), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            texture.update_yuv(Some(Rect::new(0, 0, 8, 2)), &y, 4, &u, 2, &v, 2),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_texture_modulation() {
        let mut surface = canvas();
        let renderer = Renderer::software(&mut surface).unwrap();
        let mut texture =
            Texture::new(&renderer, PixelFormatEnum::ARGB8888, TextureAccess::Static, Size::new(1, 1)).unwrap();

        texture.set_mod(Colour::rgba(10, 20, 30, 40)).unwrap();
        assert_eq!(texture.get_mod().unwrap(), Colour::rgba(10, 20, 30, 40));

        texture.set_blend_mode(BlendMode::Mod).unwrap();
        assert_eq!(texture.blend_mode().unwrap(), BlendMode::Mod);

        texture.set_scale_mode(ScaleMode::Linear).unwrap();
        assert_eq!(texture.scale_mode().unwrap(), ScaleMode::Linear);
    }

    #[test]
    fn test_window_renderer_is_borrowed() {
        crate::video::tests::with_dummy_video(|| {
            let window = create_window_and_renderer(Size::new(32, 32), WindowFlags::HIDDEN).unwrap();
            {
                let renderer = window.renderer().unwrap();
                assert!(!renderer.is_owned());
                renderer.set_draw_colour(RED).unwrap();
                renderer.clear().unwrap();
                renderer.present();
            }
            // dropping the non-owning handle left the renderer attached
            assert!(window.renderer().is_some());
            assert!(window.has_renderer());
        });
    }

    #[test]
    fn test_renderer_for_window() {
        crate::video::tests::with_dummy_video(|| {
            let window = Window::new_centered("render", Size::new(20, 10), WindowFlags::HIDDEN).unwrap();
            assert!(!window.has_renderer());
            let renderer = Renderer::new(&window, None, RendererFlags::SOFTWARE).unwrap();
            assert!(renderer.is_owned());
            assert_eq!(renderer.output_size().unwrap(), Size::new(20, 10));
            assert!(window.has_renderer());
            // only a renderer the window owns is handed out
            assert!(window.renderer().is_none());
            drop(renderer);
            assert!(!window.has_renderer());
        });
    }
}
