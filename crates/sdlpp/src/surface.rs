//! Software surfaces

use std::marker::PhantomData;
use std::os::raw::c_void;
use std::path::Path;

use crate::error::{check, create, to_count, to_cstring, Error, Result};
use crate::pixels::{
    map_rgba_raw, pixel_buffer_len, BlendMode, Colour, Palette, PixelFormat, PixelFormatEnum, PixelMasks,
};
use crate::rect::{opt_rect, Rect, Size};

/// A collection of pixels used in software blitting (`SDL_Surface`)
///
/// A surface either owns its handle and frees it on drop, or borrows one
/// owned elsewhere (a window's surface, a locked texture). The lifetime
/// ties borrowed surfaces and surfaces over caller pixel memory to their
/// source.
pub struct Surface<'a> {
    ptr: *mut sdlpp_sys::SDL_Surface,
    owned: bool,
    _marker: PhantomData<&'a mut [u8]>,
}

impl Surface<'static> {
    /// Allocate a surface with the given pixel format
    pub fn new(width: u32, height: u32, format: PixelFormatEnum) -> Result<Self> {
        let (w, h) = Size::new(width, height).to_c();
        Self::create_owned(|| unsafe {
            sdlpp_sys::SDL_CreateRGBSurfaceWithFormat(0, w, h, format.bits_per_pixel() as i32, format.0)
        })
    }

    /// Allocate a surface from a depth and channel masks
    pub fn from_masks(width: u32, height: u32, masks: PixelMasks) -> Result<Self> {
        let (w, h) = Size::new(width, height).to_c();
        Self::create_owned(|| unsafe {
            sdlpp_sys::SDL_CreateRGBSurface(0, w, h, masks.bpp, masks.r, masks.g, masks.b, masks.a)
        })
    }

    /// Load a surface from a BMP file
    pub fn load_bmp<P: AsRef<Path>>(path: P) -> Result<Self> {
        let c_path = path_to_cstring(path.as_ref())?;
        Self::create_owned(|| unsafe { sdlpp_sys::SDL_LoadBMP(c_path.as_ptr()) })
    }

    fn create_owned(f: impl FnOnce() -> *mut sdlpp_sys::SDL_Surface) -> Result<Self> {
        let ptr = create("surface", f)?;
        log::debug!("created surface {:p}", ptr);
        Ok(Self { ptr, owned: true, _marker: PhantomData })
    }
}

impl<'a> Surface<'a> {
    /// Wrap caller-provided pixel memory without copying it
    ///
    /// `pitch` must cover at least one row of `width` pixels and the
    /// buffer must hold every row up to the last. The buffer outlives the
    /// surface.
    pub fn from_pixels(
        pixels: &'a mut [u8],
        width: u32,
        height: u32,
        pitch: usize,
        format: PixelFormatEnum,
    ) -> Result<Self> {
        check_pixels(pixels, format, Size::new(width, height), pitch)?;
        let (w, h) = Size::new(width, height).to_c();
        let pitch = to_count(pitch)?;
        let data = pixels.as_mut_ptr() as *mut c_void;
        let ptr = create("surface", || unsafe {
            sdlpp_sys::SDL_CreateRGBSurfaceWithFormatFrom(data, w, h, format.bits_per_pixel() as i32, pitch, format.0)
        })?;
        Ok(Self { ptr, owned: true, _marker: PhantomData })
    }

    /// Wrap caller-provided pixel memory laid out by a depth and channel masks
    ///
    /// The masks must describe a known pixel format; the same size rules as
    /// [`Surface::from_pixels`] apply.
    pub fn from_pixels_masks(
        pixels: &'a mut [u8],
        width: u32,
        height: u32,
        pitch: usize,
        masks: PixelMasks,
    ) -> Result<Self> {
        let format = PixelFormatEnum::from_masks(&masks);
        if format == PixelFormatEnum::UNKNOWN {
            return Err(Error::InvalidArgument(format!("no pixel format matches {:?}", masks)));
        }
        check_pixels(pixels, format, Size::new(width, height), pitch)?;
        let (w, h) = Size::new(width, height).to_c();
        let pitch = to_count(pitch)?;
        let data = pixels.as_mut_ptr() as *mut c_void;
        let ptr = create("surface", || unsafe {
            sdlpp_sys::SDL_CreateRGBSurfaceFrom(data, w, h, masks.bpp, pitch, masks.r, masks.g, masks.b, masks.a)
        })?;
        Ok(Self { ptr, owned: true, _marker: PhantomData })
    }

    /// Wrap a raw surface pointer
    ///
    /// # Safety
    ///
    /// `ptr` must be a valid surface that lives at least as long as `'a`.
    /// If `owned` is true the surface is freed on drop.
    pub unsafe fn from_raw(ptr: *mut sdlpp_sys::SDL_Surface, owned: bool) -> Result<Self> {
        if ptr.is_null() {
            return Err(Error::null("surface"));
        }
        Ok(Self { ptr, owned, _marker: PhantomData })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        unsafe { (*self.ptr).w.max(0) as u32 }
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        unsafe { (*self.ptr).h.max(0) as u32 }
    }

    /// Width and height in pixels
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Length of a row of pixels in bytes
    pub fn pitch(&self) -> usize {
        unsafe { (*self.ptr).pitch.max(0) as usize }
    }

    /// The surface's pixel format
    pub fn format(&self) -> PixelFormatEnum {
        PixelFormatEnum(unsafe { (*(*self.ptr).format).format })
    }

    /// A reference to this surface's pixel format description
    pub fn pixel_format(&self) -> Result<PixelFormat> {
        PixelFormat::share(unsafe { (*self.ptr).format })
    }

    /// True if the surface owns and frees its handle
    pub fn is_owned(&self) -> bool {
        self.owned
    }

    /// Evaluates to true if the surface needs to be locked before access
    pub fn must_lock(&self) -> bool {
        unsafe { sdlpp_sys::SDL_MUSTLOCK(self.ptr) }
    }

    /// Set up the surface for directly accessing the pixels
    pub fn lock(&mut self) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_LockSurface(self.ptr) })
    }

    /// True while a lock taken with [`Surface::lock`] is outstanding
    pub fn is_locked(&self) -> bool {
        unsafe { (*self.ptr).locked > 0 }
    }

    /// Release a lock taken with [`Surface::lock`]
    pub fn unlock(&mut self) {
        unsafe { sdlpp_sys::SDL_UnlockSurface(self.ptr) }
    }

    /// Run `f` over the raw pixel bytes with the surface locked
    ///
    /// The surface is unlocked afterwards, also when `f` panics.
    pub fn with_lock<R, F: FnOnce(&mut [u8]) -> R>(&mut self, f: F) -> Result<R> {
        self.lock()?;
        let _unlock = UnlockOnDrop(self.ptr);
        let len = self.pitch() * self.height() as usize;
        let pixels = unsafe { std::slice::from_raw_parts_mut((*self.ptr).pixels as *mut u8, len) };
        Ok(f(pixels))
    }

    /// Save the surface to a BMP file
    pub fn save_bmp<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let c_path = path_to_cstring(path.as_ref())?;
        check(unsafe { sdlpp_sys::SDL_SaveBMP(self.ptr, c_path.as_ptr()) })
    }

    /// Set the palette used by an indexed surface
    pub fn set_palette(&mut self, palette: &Palette) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetSurfacePalette(self.ptr, palette.as_raw()) })
    }

    /// Toggle RLE acceleration
    ///
    /// An RLE surface must be locked before its pixels are touched directly.
    pub fn set_rle(&mut self, enabled: bool) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetSurfaceRLE(self.ptr, enabled as i32) })
    }

    /// Set or clear the transparent pixel value
    pub fn set_colour_key(&mut self, key: Option<u32>) -> Result<()> {
        let result = match key {
            Some(key) => unsafe { sdlpp_sys::SDL_SetColorKey(self.ptr, 1, key) },
            None => unsafe { sdlpp_sys::SDL_SetColorKey(self.ptr, 0, 0) },
        };
        check(result)
    }

    /// True if a transparent pixel value is set
    pub fn has_colour_key(&self) -> bool {
        unsafe { sdlpp_sys::SDL_HasColorKey(self.ptr) == sdlpp_sys::SDL_TRUE }
    }

    /// Get the transparent pixel value, `None` if colour keying is off
    pub fn colour_key(&self) -> Option<u32> {
        let mut key = 0u32;
        let result = unsafe { sdlpp_sys::SDL_GetColorKey(self.ptr, &mut key) };
        if result < 0 {
            None
        } else {
            Some(key)
        }
    }

    /// Set the colour multiplied into blit operations
    pub fn set_colour_mod(&mut self, r: u8, g: u8, b: u8) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetSurfaceColorMod(self.ptr, r, g, b) })
    }

    /// The colour multiplied into blit operations
    pub fn colour_mod(&self) -> Result<(u8, u8, u8)> {
        let (mut r, mut g, mut b) = (0, 0, 0);
        check(unsafe { sdlpp_sys::SDL_GetSurfaceColorMod(self.ptr, &mut r, &mut g, &mut b) })?;
        Ok((r, g, b))
    }

    /// Set the alpha value multiplied into blit operations
    pub fn set_alpha_mod(&mut self, alpha: u8) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetSurfaceAlphaMod(self.ptr, alpha) })
    }

    /// The alpha value multiplied into blit operations
    pub fn alpha_mod(&self) -> Result<u8> {
        let mut alpha = 0;
        check(unsafe { sdlpp_sys::SDL_GetSurfaceAlphaMod(self.ptr, &mut alpha) })?;
        Ok(alpha)
    }

    /// Set the blend mode used for blits from this surface
    pub fn set_blend_mode(&mut self, mode: BlendMode) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetSurfaceBlendMode(self.ptr, mode.into()) })
    }

    /// The blend mode used for blits from this surface
    pub fn blend_mode(&self) -> Result<BlendMode> {
        let mut raw = sdlpp_sys::SDL_BLENDMODE_INVALID;
        check(unsafe { sdlpp_sys::SDL_GetSurfaceBlendMode(self.ptr, &mut raw) })?;
        BlendMode::try_from(raw)
    }

    /// Set the clipping rectangle for blits into this surface
    ///
    /// `None` disables clipping. Returns false if the rectangle does not
    /// intersect the surface, in which case blits draw nothing.
    pub fn set_clip_rect(&mut self, rect: Option<Rect>) -> bool {
        unsafe { sdlpp_sys::SDL_SetClipRect(self.ptr, opt_rect(rect.as_ref())) == sdlpp_sys::SDL_TRUE }
    }

    /// The current clipping rectangle
    pub fn clip_rect(&self) -> Rect {
        let mut rect = Rect::default();
        unsafe { sdlpp_sys::SDL_GetClipRect(self.ptr, rect.as_raw_mut()) };
        rect
    }

    /// Create a new surface identical to this one
    pub fn duplicate(&self) -> Result<Surface<'static>> {
        Surface::create_owned(|| unsafe { sdlpp_sys::SDL_DuplicateSurface(self.ptr) })
    }

    /// Copy into a new surface of the given format description
    pub fn convert(&self, format: &PixelFormat) -> Result<Surface<'static>> {
        Surface::create_owned(|| unsafe { sdlpp_sys::SDL_ConvertSurface(self.ptr, format.as_raw(), 0) })
    }

    /// Copy into a new surface of the given format
    pub fn convert_format(&self, format: PixelFormatEnum) -> Result<Surface<'static>> {
        Surface::create_owned(|| unsafe { sdlpp_sys::SDL_ConvertSurfaceFormat(self.ptr, format.0, 0) })
    }

    /// Map a colour to a pixel value in this surface's format
    pub fn map_colour(&self, colour: Colour) -> u32 {
        map_rgba_raw(unsafe { (*self.ptr).format }, colour)
    }

    /// Fill the whole surface (respecting the clip rectangle)
    pub fn fill(&mut self, colour: Colour) -> Result<()> {
        let pixel = self.map_colour(colour);
        check(unsafe { sdlpp_sys::SDL_FillRect(self.ptr, std::ptr::null(), pixel) })
    }

    /// Fill a rectangle with a raw pixel value
    pub fn fill_rect(&mut self, rect: Rect, pixel: u32) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_FillRect(self.ptr, rect.as_raw(), pixel) })
    }

    /// Fill a rectangle with a colour mapped to this surface's format
    pub fn fill_rect_colour(&mut self, rect: Rect, colour: Colour) -> Result<()> {
        let pixel = self.map_colour(colour);
        self.fill_rect(rect, pixel)
    }

    /// Fill several rectangles with a raw pixel value
    pub fn fill_rects(&mut self, rects: &[Rect], pixel: u32) -> Result<()> {
        let result = unsafe {
            sdlpp_sys::SDL_FillRects(
                self.ptr,
                rects.as_ptr() as *const sdlpp_sys::SDL_Rect,
                to_count(rects.len())?,
                pixel,
            )
        };
        check(result)
    }

    /// Blit onto `dst` with rectangle validation and clipping
    ///
    /// `None` for `src_rect` copies the whole surface, `None` for `dst_at`
    /// places it at the origin (only the position of `dst_at` is used).
    /// Returns the destination area that was actually drawn.
    pub fn blit(&self, src_rect: Option<Rect>, dst: &mut Surface<'_>, dst_at: Option<Rect>) -> Result<Rect> {
        let mut dst_rect = dst_at.unwrap_or_default();
        check(unsafe {
            sdlpp_sys::SDL_UpperBlit(self.ptr, opt_rect(src_rect.as_ref()), dst.ptr, dst_rect.as_raw_mut())
        })?;
        Ok(dst_rect)
    }

    /// Low-level blit without validation or clipping
    ///
    /// Both rectangles must already lie within their surfaces.
    pub fn lower_blit(&self, mut src_rect: Rect, dst: &mut Surface<'_>, mut dst_rect: Rect) -> Result<()> {
        check(unsafe {
            sdlpp_sys::SDL_LowerBlit(self.ptr, src_rect.as_raw_mut(), dst.ptr, dst_rect.as_raw_mut())
        })
    }

    /// Scaled blit onto `dst` with clipping; `None` means the whole surface
    pub fn blit_scaled(&self, src_rect: Option<Rect>, dst: &mut Surface<'_>, dst_rect: Option<Rect>) -> Result<()> {
        let mut dst_rect = dst_rect;
        let dst_ptr = dst_rect.as_mut().map_or(std::ptr::null_mut(), Rect::as_raw_mut);
        check(unsafe {
            sdlpp_sys::SDL_UpperBlitScaled(self.ptr, opt_rect(src_rect.as_ref()), dst.ptr, dst_ptr)
        })
    }

    /// Low-level scaled blit without validation or clipping
    pub fn lower_blit_scaled(&self, mut src_rect: Rect, dst: &mut Surface<'_>, mut dst_rect: Rect) -> Result<()> {
        check(unsafe {
            sdlpp_sys::SDL_LowerBlitScaled(self.ptr, src_rect.as_raw_mut(), dst.ptr, dst_rect.as_raw_mut())
        })
    }

    /// Nearest-neighbour stretch between surfaces of the same format
    pub fn soft_stretch(&self, src_rect: Option<Rect>, dst: &mut Surface<'_>, dst_rect: Option<Rect>) -> Result<()> {
        check(unsafe {
            sdlpp_sys::SDL_SoftStretch(
                self.ptr,
                opt_rect(src_rect.as_ref()),
                dst.ptr,
                opt_rect(dst_rect.as_ref()),
            )
        })
    }

    /// Get the raw surface pointer (for advanced usage)
    pub fn as_raw(&self) -> *mut sdlpp_sys::SDL_Surface {
        self.ptr
    }
}

impl Drop for Surface<'_> {
    fn drop(&mut self) {
        if self.owned {
            log::debug!("freeing surface {:p}", self.ptr);
            unsafe { sdlpp_sys::SDL_FreeSurface(self.ptr) };
        }
    }
}

impl std::fmt::Debug for Surface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("ptr", &self.ptr)
            .field("owned", &self.owned)
            .field("size", &self.size())
            .field("format", &self.format())
            .finish()
    }
}

struct UnlockOnDrop(*mut sdlpp_sys::SDL_Surface);

impl Drop for UnlockOnDrop {
    fn drop(&mut self) {
        unsafe { sdlpp_sys::SDL_UnlockSurface(self.0) }
    }
}

/// Reject caller pixel memory too short for the surface laid over it
fn check_pixels(pixels: &[u8], format: PixelFormatEnum, size: Size, pitch: usize) -> Result<()> {
    let needed = pixel_buffer_len(format, size, pitch)?;
    if pixels.len() < needed {
        return Err(Error::InvalidArgument(format!(
            "pixel buffer of {} bytes is smaller than the {} bytes a {}x{} surface at pitch {} needs",
            pixels.len(),
            needed,
            size.width,
            size.height,
            pitch
        )));
    }
    Ok(())
}

pub(crate) fn path_to_cstring(path: &Path) -> Result<std::ffi::CString> {
    let path_str = path.to_string_lossy();
    to_cstring(path_str.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_pixel(surface: &mut Surface<'_>, x: usize, y: usize) -> u32 {
        let pitch = surface.pitch();
        surface
            .with_lock(|pixels| {
                let at = y * pitch + x * 4;
                u32::from_ne_bytes([pixels[at], pixels[at + 1], pixels[at + 2], pixels[at + 3]])
            })
            .unwrap()
    }

    #[test]
    fn test_new_surface_geometry() {
        let surface = Surface::new(16, 8, PixelFormatEnum::ARGB8888).unwrap();
        assert_eq!(surface.size(), Size::new(16, 8));
        assert_eq!(surface.pitch(), 64);
        assert_eq!(surface.format(), PixelFormatEnum::ARGB8888);
        assert!(surface.is_owned());
        assert!(!surface.must_lock());
        assert_eq!(surface.clip_rect(), Rect::new(0, 0, 16, 8));
    }

    #[test]
    fn test_from_masks() {
        let masks = PixelFormatEnum::RGB565.masks().unwrap();
        let surface = Surface::from_masks(4, 4, masks).unwrap();
        assert_eq!(surface.format(), PixelFormatEnum::RGB565);
    }

    #[test]
    fn test_fill_and_fill_rect() {
        let mut surface = Surface::new(4, 4, PixelFormatEnum::ARGB8888).unwrap();
        surface.fill(Colour::rgb(0, 0, 0xFF)).unwrap();
        surface.fill_rect_colour(Rect::new(1, 1, 2, 2), Colour::rgb(0xFF, 0, 0)).unwrap();

        assert_eq!(read_pixel(&mut surface, 0, 0), 0xFF00_00FF);
        assert_eq!(read_pixel(&mut surface, 1, 1), 0xFFFF_0000);
        assert_eq!(read_pixel(&mut surface, 3, 3), 0xFF00_00FF);
    }

    #[test]
    fn test_fill_rects() {
        let mut surface = Surface::new(4, 1, PixelFormatEnum::ARGB8888).unwrap();
        surface.fill_rects(&[Rect::new(0, 0, 1, 1), Rect::new(3, 0, 1, 1)], 0x1234_5678).unwrap();
        assert_eq!(read_pixel(&mut surface, 0, 0), 0x1234_5678);
        assert_eq!(read_pixel(&mut surface, 1, 0), 0);
        assert_eq!(read_pixel(&mut surface, 3, 0), 0x1234_5678);
    }

    #[test]
    fn test_clip_rect_limits_fill() {
        let mut surface = Surface::new(4, 4, PixelFormatEnum::ARGB8888).unwrap();
        assert!(surface.set_clip_rect(Some(Rect::new(0, 0, 2, 2))));
        surface.fill(Colour::WHITE).unwrap();
        assert_eq!(read_pixel(&mut surface, 1, 1), 0xFFFF_FFFF);
        assert_eq!(read_pixel(&mut surface, 2, 2), 0);

        assert!(!surface.set_clip_rect(Some(Rect::new(10, 10, 2, 2))));
        assert!(surface.set_clip_rect(None));
        assert_eq!(surface.clip_rect(), Rect::new(0, 0, 4, 4));
    }

    #[test]
    fn test_colour_key() {
        let mut surface = Surface::new(2, 2, PixelFormatEnum::ARGB8888).unwrap();
        assert!(!surface.has_colour_key());
        assert_eq!(surface.colour_key(), None);

        let magenta = surface.map_colour(Colour::rgb(0xFF, 0, 0xFF));
        surface.set_colour_key(Some(magenta)).unwrap();
        assert!(surface.has_colour_key());
        assert_eq!(surface.colour_key(), Some(magenta));

        surface.set_colour_key(None).unwrap();
        assert!(!surface.has_colour_key());
    }

    #[test]
    fn test_modulation_and_blend_mode() {
        let mut surface = Surface::new(2, 2, PixelFormatEnum::ARGB8888).unwrap();
        surface.set_colour_mod(10, 20, 30).unwrap();
        assert_eq!(surface.colour_mod().unwrap(), (10, 20, 30));

        surface.set_alpha_mod(128).unwrap();
        assert_eq!(surface.alpha_mod().unwrap(), 128);

        surface.set_blend_mode(BlendMode::Add).unwrap();
        assert_eq!(surface.blend_mode().unwrap(), BlendMode::Add);
    }

    #[test]
    fn test_blit_copies_pixels() {
        let mut src = Surface::new(2, 2, PixelFormatEnum::ARGB8888).unwrap();
        src.fill(Colour::rgb(0, 0xFF, 0)).unwrap();
        src.set_blend_mode(BlendMode::None).unwrap();

        let mut dst = Surface::new(4, 4, PixelFormatEnum::ARGB8888).unwrap();
        let drawn = src.blit(None, &mut dst, Some(Rect::new(1, 1, 0, 0))).unwrap();
        assert_eq!(drawn, Rect::new(1, 1, 2, 2));
        assert_eq!(read_pixel(&mut dst, 0, 0), 0);
        assert_eq!(read_pixel(&mut dst, 2, 2), 0xFF00_FF00);
    }

    #[test]
    fn test_blit_is_clipped_to_destination() {
        let src = Surface::new(4, 4, PixelFormatEnum::ARGB8888).unwrap();
        let mut dst = Surface::new(4, 4, PixelFormatEnum::ARGB8888).unwrap();
        let drawn = src.blit(None, &mut dst, Some(Rect::new(3, 3, 0, 0))).unwrap();
        assert_eq!(drawn, Rect::new(3, 3, 1, 1));
    }

    #[test]
    fn test_blit_scaled_fills_destination() {
        let mut src = Surface::new(1, 1, PixelFormatEnum::ARGB8888).unwrap();
        src.fill(Colour::rgb(0xFF, 0, 0)).unwrap();
        src.set_blend_mode(BlendMode::None).unwrap();

        let mut dst = Surface::new(4, 4, PixelFormatEnum::ARGB8888).unwrap();
        src.blit_scaled(None, &mut dst, None).unwrap();
        assert_eq!(read_pixel(&mut dst, 0, 0), 0xFFFF_0000);
        assert_eq!(read_pixel(&mut dst, 3, 3), 0xFFFF_0000);
    }

    #[test]
    fn test_soft_stretch() {
        let mut src = Surface::new(2, 2, PixelFormatEnum::ARGB8888).unwrap();
        src.fill(Colour::rgb(0, 0, 0xFF)).unwrap();
        let mut dst = Surface::new(4, 4, PixelFormatEnum::ARGB8888).unwrap();
        src.soft_stretch(None, &mut dst, Some(Rect::new(0, 0, 4, 2))).unwrap();
        assert_eq!(read_pixel(&mut dst, 3, 1), 0xFF00_00FF);
        assert_eq!(read_pixel(&mut dst, 3, 3), 0);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut original = Surface::new(2, 2, PixelFormatEnum::ARGB8888).unwrap();
        original.fill(Colour::WHITE).unwrap();

        let mut copy = original.duplicate().unwrap();
        copy.fill(Colour::BLACK).unwrap();

        assert_eq!(read_pixel(&mut original, 0, 0), 0xFFFF_FFFF);
        assert_eq!(read_pixel(&mut copy, 0, 0), 0xFF00_0000);
    }

    #[test]
    fn test_convert_format() {
        let mut surface = Surface::new(1, 1, PixelFormatEnum::ARGB8888).unwrap();
        surface.fill(Colour::rgb(0x11, 0x22, 0x33)).unwrap();

        let mut converted = surface.convert_format(PixelFormatEnum::ABGR8888).unwrap();
        assert_eq!(converted.format(), PixelFormatEnum::ABGR8888);
        assert_eq!(read_pixel(&mut converted, 0, 0), 0xFF33_2211);

        let format = PixelFormat::new(PixelFormatEnum::RGB565).unwrap();
        let converted = surface.convert(&format).unwrap();
        assert_eq!(converted.format(), PixelFormatEnum::RGB565);
    }

    #[test]
    fn test_from_pixels_borrows_buffer() {
        let mut buffer = vec![0u8; 2 * 2 * 4];
        {
            let mut surface = Surface::from_pixels(&mut buffer, 2, 2, 8, PixelFormatEnum::ARGB8888).unwrap();
            surface.fill(Colour::rgb(0xFF, 0, 0)).unwrap();
        }
        assert_eq!(u32::from_ne_bytes([buffer[0], buffer[1], buffer[2], buffer[3]]), 0xFFFF_0000);

        let mut short = vec![0u8; 3];
        assert!(Surface::from_pixels(&mut short, 2, 2, 8, PixelFormatEnum::ARGB8888).is_err());
    }

    #[test]
    fn test_from_pixels_rejects_bad_pitch() {
        let mut empty: Vec<u8> = Vec::new();
        let err = Surface::from_pixels(&mut empty, 1000, 1000, 0, PixelFormatEnum::ARGB8888).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        // 8 rows of 4 bytes fit the buffer, but a row of 2 pixels needs 8
        let mut buffer = vec![0u8; 32];
        let err = Surface::from_pixels(&mut buffer, 2, 8, 4, PixelFormatEnum::ARGB8888).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let err = Surface::from_pixels(&mut buffer, 1, u32::MAX, usize::MAX / 2, PixelFormatEnum::ARGB8888)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_from_pixels_last_row_may_be_short() {
        // rows are 12 bytes apart but only the first 8 of the last row are pixels
        let mut buffer = vec![0u8; 12 + 8];
        let mut surface = Surface::from_pixels(&mut buffer, 2, 2, 12, PixelFormatEnum::ARGB8888).unwrap();
        assert_eq!(surface.pitch(), 12);
        surface.fill(Colour::WHITE).unwrap();
        drop(surface);
        assert_eq!(&buffer[12..20], &[0xFF; 8]);
        assert_eq!(&buffer[8..12], &[0; 4]);
    }

    #[test]
    fn test_from_pixels_masks() {
        let masks = PixelFormatEnum::RGB565.masks().unwrap();
        let mut buffer = vec![0u8; 2 * 2 * 2];
        {
            let mut surface = Surface::from_pixels_masks(&mut buffer, 2, 2, 4, masks).unwrap();
            assert_eq!(surface.format(), PixelFormatEnum::RGB565);
            surface.fill(Colour::WHITE).unwrap();
        }
        assert_eq!(buffer, vec![0xFF; 8]);

        let mut short = vec![0u8; 6];
        assert!(Surface::from_pixels_masks(&mut short, 2, 2, 4, masks).is_err());

        let odd = PixelMasks { bpp: 32, r: 0x1, g: 0x2, b: 0x4, a: 0x8 };
        let err = Surface::from_pixels_masks(&mut buffer, 1, 1, 4, odd).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_with_lock_unlocks_after_panic() {
        let mut surface = Surface::new(4, 4, PixelFormatEnum::ARGB8888).unwrap();
        let key = surface.map_colour(Colour::BLACK);
        surface.set_colour_key(Some(key)).unwrap();
        surface.set_rle(true).unwrap();
        assert!(surface.must_lock());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            surface.with_lock(|_| panic!("callback failed")).ok();
        }));
        assert!(result.is_err());
        assert!(!surface.is_locked());

        surface.with_lock(|pixels| pixels.len()).unwrap();
        assert!(!surface.is_locked());
    }

    #[test]
    fn test_indexed_surface_palette() {
        let mut surface = Surface::new(2, 2, PixelFormatEnum::INDEX8).unwrap();
        let palette = Palette::with_colours(&[Colour::BLACK, Colour::rgb(0xFF, 0, 0)]).unwrap();
        surface.set_palette(&palette).unwrap();
        drop(palette);

        surface.fill_rect(Rect::new(0, 0, 2, 2), 1).unwrap();
        let mut rgb = surface.convert_format(PixelFormatEnum::ARGB8888).unwrap();
        assert_eq!(rgb.pixel_format().unwrap().format(), PixelFormatEnum::ARGB8888);
        assert_eq!(read_pixel(&mut rgb, 1, 1), 0xFFFF_0000);
    }

    #[test]
    fn test_bmp_round_trip() {
        let path = std::env::temp_dir().join(format!("sdlpp-surface-{}.bmp", std::process::id()));

        let mut surface = Surface::new(3, 2, PixelFormatEnum::ARGB8888).unwrap();
        surface.fill(Colour::rgb(0x10, 0x20, 0x30)).unwrap();
        surface.save_bmp(&path).unwrap();

        let loaded = Surface::load_bmp(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.size(), Size::new(3, 2));
    }

    #[test]
    fn test_load_missing_bmp_fails() {
        let err = Surface::load_bmp("/definitely/not/here.bmp").unwrap_err();
        assert!(matches!(err, Error::Sdl(_)));
    }

    #[test]
    fn test_rle_toggle() {
        let mut surface = Surface::new(4, 4, PixelFormatEnum::ARGB8888).unwrap();
        let key = surface.map_colour(Colour::BLACK);
        surface.set_colour_key(Some(key)).unwrap();
        surface.set_rle(true).unwrap();
        surface.set_rle(false).unwrap();
    }

    #[test]
    fn test_borrowed_surface_is_not_freed() {
        let owner = Surface::new(2, 2, PixelFormatEnum::ARGB8888).unwrap();
        {
            let alias = unsafe { Surface::from_raw(owner.as_raw(), false) }.unwrap();
            assert!(!alias.is_owned());
        }
        assert_eq!(owner.width(), 2);
    }
}
