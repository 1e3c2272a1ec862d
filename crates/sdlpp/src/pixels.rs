//! Colours, pixel formats, palettes and blend modes

use std::os::raw::{c_int, c_void};

use sdlpp_sys::{SDL_BlendMode, SDL_Color};

use crate::error::{check, create, from_cstr, to_count, Error, Result};
use crate::rect::Size;

/// An RGBA colour
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[cfg_attr(feature = "serde", serde(default = "opaque"))]
    pub a: u8,
}

#[cfg(feature = "serde")]
fn opaque() -> u8 {
    0xFF
}

impl Colour {
    pub const BLACK: Colour = Colour::rgb(0, 0, 0);
    pub const WHITE: Colour = Colour::rgb(0xFF, 0xFF, 0xFF);
    pub const TRANSPARENT: Colour = Colour::rgba(0, 0, 0, 0);

    /// An opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Colour> for SDL_Color {
    fn from(c: Colour) -> Self {
        SDL_Color { r: c.r, g: c.g, b: c.b, a: c.a }
    }
}

impl From<SDL_Color> for Colour {
    fn from(c: SDL_Color) -> Self {
        Colour::rgba(c.r, c.g, c.b, c.a)
    }
}

// =============================================================================
// Pixel format enum
// =============================================================================

/// A pixel format identifier (`SDL_PIXELFORMAT_*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelFormatEnum(pub u32);

impl PixelFormatEnum {
    pub const UNKNOWN: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_UNKNOWN);
    pub const INDEX8: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_INDEX8);
    pub const RGB332: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_RGB332);
    pub const ARGB4444: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_ARGB4444);
    pub const ARGB1555: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_ARGB1555);
    pub const RGB565: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_RGB565);
    pub const RGB24: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_RGB24);
    pub const BGR24: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_BGR24);
    pub const RGB888: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_RGB888);
    pub const BGR888: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_BGR888);
    pub const ARGB8888: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_ARGB8888);
    pub const RGBA8888: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_RGBA8888);
    pub const ABGR8888: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_ABGR8888);
    pub const BGRA8888: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_BGRA8888);
    pub const ARGB2101010: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_ARGB2101010);
    pub const YV12: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_YV12);
    pub const IYUV: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_IYUV);
    pub const YUY2: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_YUY2);
    pub const UYVY: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_UYVY);
    pub const YVYU: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_YVYU);
    pub const NV12: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_NV12);
    pub const NV21: Self = Self(sdlpp_sys::SDL_PIXELFORMAT_NV21);

    /// Byte-order independent RGBA
    #[cfg(target_endian = "little")]
    pub const RGBA32: Self = Self::ABGR8888;
    #[cfg(target_endian = "big")]
    pub const RGBA32: Self = Self::RGBA8888;

    /// Significant bits per pixel; 24 for RGB888 although it takes 4 bytes
    pub fn bits_per_pixel(self) -> u32 {
        sdlpp_sys::SDL_BITSPERPIXEL(self.0)
    }

    /// Bytes per pixel, 0 for formats below one byte per pixel
    pub fn bytes_per_pixel(self) -> u32 {
        sdlpp_sys::SDL_BYTESPERPIXEL(self.0)
    }

    /// True for planar/packed YUV formats identified by a FourCC code
    pub fn is_fourcc(self) -> bool {
        sdlpp_sys::SDL_ISPIXELFORMAT_FOURCC(self.0)
    }

    /// True for the YUV formats stored as separate luma and chroma planes
    pub fn is_planar_yuv(self) -> bool {
        [Self::YV12, Self::IYUV, Self::NV12, Self::NV21].contains(&self)
    }

    /// True for the YUV formats packing two pixels into one macropixel
    pub fn is_packed_yuv(self) -> bool {
        [Self::YUY2, Self::UYVY, Self::YVYU].contains(&self)
    }

    /// Bytes in one row of `width` pixels of a packed format
    fn row_bytes(self, width: usize) -> Result<usize> {
        let overflow = || Error::InvalidArgument(format!("row of {} pixels overflows", width));
        if self.is_packed_yuv() {
            // two pixels share one four byte macropixel
            return width.div_ceil(2).checked_mul(4).ok_or_else(overflow);
        }
        if self.is_fourcc() || self.bits_per_pixel() == 0 {
            return Err(Error::InvalidArgument(format!("no row layout for pixel format {}", self.name())));
        }
        let bytes = match self.bytes_per_pixel() as usize {
            0 => width.checked_mul(self.bits_per_pixel() as usize).map(|bits| bits.div_ceil(8)),
            bytes => width.checked_mul(bytes),
        };
        bytes.ok_or_else(overflow)
    }

    /// The library's name for this format, e.g. `SDL_PIXELFORMAT_ARGB8888`
    pub fn name(self) -> String {
        from_cstr(unsafe { sdlpp_sys::SDL_GetPixelFormatName(self.0) }).unwrap_or_default()
    }

    /// Convert to a bpp value and RGBA masks
    pub fn masks(self) -> Result<PixelMasks> {
        let mut masks = PixelMasks::default();
        let mut bpp: c_int = 0;
        let ok = unsafe {
            sdlpp_sys::SDL_PixelFormatEnumToMasks(
                self.0,
                &mut bpp,
                &mut masks.r,
                &mut masks.g,
                &mut masks.b,
                &mut masks.a,
            )
        };
        if ok != sdlpp_sys::SDL_TRUE {
            return Err(Error::last());
        }
        masks.bpp = bpp;
        Ok(masks)
    }

    /// Convert a bpp value and RGBA masks to a format, `UNKNOWN` if none matches
    pub fn from_masks(masks: &PixelMasks) -> Self {
        Self(unsafe { sdlpp_sys::SDL_MasksToPixelFormatEnum(masks.bpp, masks.r, masks.g, masks.b, masks.a) })
    }
}

impl From<u32> for PixelFormatEnum {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<PixelFormatEnum> for u32 {
    fn from(format: PixelFormatEnum) -> Self {
        format.0
    }
}

/// Bit depth and channel masks describing a packed pixel layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelMasks {
    pub bpp: i32,
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

// =============================================================================
// Pixel format
// =============================================================================

/// A pixel format description (`SDL_PixelFormat`)
///
/// SDL caches formats and reference counts them; dropping releases this
/// reference.
pub struct PixelFormat {
    ptr: *mut sdlpp_sys::SDL_PixelFormat,
}

impl PixelFormat {
    /// Create a format description for a pixel format enum
    pub fn new(format: PixelFormatEnum) -> Result<Self> {
        let ptr = create("pixel format", || unsafe { sdlpp_sys::SDL_AllocFormat(format.0) })?;
        Ok(Self { ptr })
    }

    /// The format enum this description was built from
    pub fn format(&self) -> PixelFormatEnum {
        PixelFormatEnum(unsafe { (*self.ptr).format })
    }

    pub fn bits_per_pixel(&self) -> u8 {
        unsafe { (*self.ptr).BitsPerPixel }
    }

    pub fn bytes_per_pixel(&self) -> u8 {
        unsafe { (*self.ptr).BytesPerPixel }
    }

    /// Attach a palette to an indexed format
    pub fn set_palette(&mut self, palette: &Palette) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetPixelFormatPalette(self.ptr, palette.ptr) })
    }

    /// Map an RGB triple to an opaque pixel value for this format
    pub fn map_rgb(&self, r: u8, g: u8, b: u8) -> u32 {
        unsafe { sdlpp_sys::SDL_MapRGB(self.ptr, r, g, b) }
    }

    /// Map a colour to a pixel value for this format
    pub fn map_rgba(&self, colour: Colour) -> u32 {
        map_rgba_raw(self.ptr, colour)
    }

    /// Get the colour components of a pixel in this format
    pub fn get_rgba(&self, pixel: u32) -> Colour {
        let mut c = SDL_Color::default();
        unsafe { sdlpp_sys::SDL_GetRGBA(pixel, self.ptr, &mut c.r, &mut c.g, &mut c.b, &mut c.a) };
        c.into()
    }

    /// Take another reference to an SDL-owned format
    ///
    /// Goes through SDL's format cache, which bumps the reference count.
    pub(crate) fn share(ptr: *const sdlpp_sys::SDL_PixelFormat) -> Result<Self> {
        Self::new(PixelFormatEnum(unsafe { (*ptr).format }))
    }

    pub fn as_raw(&self) -> *mut sdlpp_sys::SDL_PixelFormat {
        self.ptr
    }
}

impl Drop for PixelFormat {
    fn drop(&mut self) {
        unsafe { sdlpp_sys::SDL_FreeFormat(self.ptr) }
    }
}

pub(crate) fn map_rgba_raw(format: *const sdlpp_sys::SDL_PixelFormat, colour: Colour) -> u32 {
    unsafe { sdlpp_sys::SDL_MapRGBA(format, colour.r, colour.g, colour.b, colour.a) }
}

// =============================================================================
// Palette
// =============================================================================

/// A colour palette for indexed surfaces
pub struct Palette {
    ptr: *mut sdlpp_sys::SDL_Palette,
}

impl Palette {
    /// Create a palette with `len` entries, all initialised to white
    pub fn new(len: usize) -> Result<Self> {
        let len = to_count(len)?;
        let ptr = create("palette", || unsafe { sdlpp_sys::SDL_AllocPalette(len) })?;
        Ok(Self { ptr })
    }

    /// Create a palette holding exactly `colours`
    pub fn with_colours(colours: &[Colour]) -> Result<Self> {
        let mut palette = Self::new(colours.len())?;
        palette.set_colours(0, colours)?;
        Ok(palette)
    }

    /// Overwrite entries starting at `first`
    pub fn set_colours(&mut self, first: usize, colours: &[Colour]) -> Result<()> {
        let result = unsafe {
            sdlpp_sys::SDL_SetPaletteColors(
                self.ptr,
                colours.as_ptr() as *const SDL_Color,
                to_count(first)?,
                to_count(colours.len())?,
            )
        };
        check(result)
    }

    /// Number of colours
    pub fn len(&self) -> usize {
        unsafe { (*self.ptr).ncolors.max(0) as usize }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get an entry, `None` past the end
    pub fn colour(&self, index: usize) -> Option<Colour> {
        if index >= self.len() {
            return None;
        }
        Some(unsafe { *(*self.ptr).colors.add(index) }.into())
    }

    pub fn as_raw(&self) -> *mut sdlpp_sys::SDL_Palette {
        self.ptr
    }
}

impl Drop for Palette {
    fn drop(&mut self) {
        unsafe { sdlpp_sys::SDL_FreePalette(self.ptr) }
    }
}

// =============================================================================
// Blend modes
// =============================================================================

/// How colours are combined when drawing or blitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlendMode {
    /// dstRGBA = srcRGBA
    #[default]
    None,
    /// dstRGB = srcRGB * srcA + dstRGB * (1-srcA), dstA = srcA + dstA * (1-srcA)
    Blend,
    /// dstRGB = srcRGB * srcA + dstRGB
    Add,
    /// dstRGB = srcRGB * dstRGB
    Mod,
    /// dstRGB = srcRGB * dstRGB + dstRGB * (1-srcA)
    Mul,
}

impl From<BlendMode> for SDL_BlendMode {
    fn from(mode: BlendMode) -> Self {
        match mode {
            BlendMode::None => sdlpp_sys::SDL_BLENDMODE_NONE,
            BlendMode::Blend => sdlpp_sys::SDL_BLENDMODE_BLEND,
            BlendMode::Add => sdlpp_sys::SDL_BLENDMODE_ADD,
            BlendMode::Mod => sdlpp_sys::SDL_BLENDMODE_MOD,
            BlendMode::Mul => sdlpp_sys::SDL_BLENDMODE_MUL,
        }
    }
}

impl TryFrom<SDL_BlendMode> for BlendMode {
    type Error = Error;

    fn try_from(raw: SDL_BlendMode) -> Result<Self> {
        match raw {
            sdlpp_sys::SDL_BLENDMODE_NONE => Ok(BlendMode::None),
            sdlpp_sys::SDL_BLENDMODE_BLEND => Ok(BlendMode::Blend),
            sdlpp_sys::SDL_BLENDMODE_ADD => Ok(BlendMode::Add),
            sdlpp_sys::SDL_BLENDMODE_MOD => Ok(BlendMode::Mod),
            sdlpp_sys::SDL_BLENDMODE_MUL => Ok(BlendMode::Mul),
            other => Err(Error::UnknownValue { kind: "blend mode", value: other as i64 }),
        }
    }
}

// =============================================================================
// Pixel conversion
// =============================================================================

/// Bytes spanned by `rows` rows of `row` bytes laid out `pitch` apart
///
/// The last row only needs its own bytes, not a full pitch.
pub(crate) fn plane_len(row: usize, rows: usize, pitch: usize) -> Result<usize> {
    if row == 0 || rows == 0 {
        return Ok(0);
    }
    if pitch < row {
        return Err(Error::InvalidArgument(format!("pitch {} is shorter than a row of {} bytes", pitch, row)));
    }
    (rows - 1)
        .checked_mul(pitch)
        .and_then(|n| n.checked_add(row))
        .ok_or_else(|| Error::InvalidArgument(format!("{} rows at pitch {} overflow", rows, pitch)))
}

/// Smallest buffer holding a `size` block of `format` pixels at `pitch`
///
/// Planar YUV buffers carry their chroma planes after the luma plane at
/// half the pitch, as SDL lays them out.
pub(crate) fn pixel_buffer_len(format: PixelFormatEnum, size: Size, pitch: usize) -> Result<usize> {
    let (w, h) = (size.width as usize, size.height as usize);
    if w == 0 || h == 0 {
        return Ok(0);
    }
    let overflow = || Error::InvalidArgument(format!("{}x{} pixels at pitch {} overflow", w, h, pitch));
    if format.is_planar_yuv() {
        if pitch < w {
            return Err(Error::InvalidArgument(format!("pitch {} is shorter than a row of {} bytes", pitch, w)));
        }
        let luma = pitch.checked_mul(h);
        let chroma = pitch.div_ceil(2).checked_mul(h.div_ceil(2)).and_then(|n| n.checked_mul(2));
        return luma.zip(chroma).and_then(|(l, c)| l.checked_add(c)).ok_or_else(overflow);
    }
    let row = format.row_bytes(w)?;
    plane_len(row, h, pitch)
}

/// Copy a block of pixels of one format to another format
///
/// Each buffer must hold `size` pixels of its format at its pitch, and a
/// pitch may not be shorter than one row.
pub fn convert_pixels(
    size: Size,
    src_format: PixelFormatEnum,
    src: &[u8],
    src_pitch: usize,
    dst_format: PixelFormatEnum,
    dst: &mut [u8],
    dst_pitch: usize,
) -> Result<()> {
    let src_len = pixel_buffer_len(src_format, size, src_pitch)?;
    let dst_len = pixel_buffer_len(dst_format, size, dst_pitch)?;
    if src.len() < src_len || dst.len() < dst_len {
        return Err(Error::InvalidArgument(format!(
            "pixel buffers of {} and {} bytes, need {} and {}",
            src.len(),
            dst.len(),
            src_len,
            dst_len
        )));
    }
    let (w, h) = size.to_c();
    let result = unsafe {
        sdlpp_sys::SDL_ConvertPixels(
            w,
            h,
            src_format.0,
            src.as_ptr() as *const c_void,
            to_count(src_pitch)?,
            dst_format.0,
            dst.as_mut_ptr() as *mut c_void,
            to_count(dst_pitch)?,
        )
    };
    check(result)
}

/// YUV to RGB conversion settings
pub mod yuv {
    use crate::error::{Error, Result};
    use crate::rect::Size;

    /// The formula used for converting between YUV and RGB
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ConversionMode {
        /// Full range JPEG
        Jpeg,
        /// BT.601 (the default)
        Bt601,
        /// BT.709
        Bt709,
        /// BT.601 for SD content, BT.709 for HD content
        Automatic,
    }

    impl From<ConversionMode> for sdlpp_sys::SDL_YUV_CONVERSION_MODE {
        fn from(mode: ConversionMode) -> Self {
            match mode {
                ConversionMode::Jpeg => sdlpp_sys::SDL_YUV_CONVERSION_JPEG,
                ConversionMode::Bt601 => sdlpp_sys::SDL_YUV_CONVERSION_BT601,
                ConversionMode::Bt709 => sdlpp_sys::SDL_YUV_CONVERSION_BT709,
                ConversionMode::Automatic => sdlpp_sys::SDL_YUV_CONVERSION_AUTOMATIC,
            }
        }
    }

    impl TryFrom<sdlpp_sys::SDL_YUV_CONVERSION_MODE> for ConversionMode {
        type Error = Error;

        fn try_from(raw: sdlpp_sys::SDL_YUV_CONVERSION_MODE) -> Result<Self> {
            match raw {
                sdlpp_sys::SDL_YUV_CONVERSION_JPEG => Ok(ConversionMode::Jpeg),
                sdlpp_sys::SDL_YUV_CONVERSION_BT601 => Ok(ConversionMode::Bt601),
                sdlpp_sys::SDL_YUV_CONVERSION_BT709 => Ok(ConversionMode::Bt709),
                sdlpp_sys::SDL_YUV_CONVERSION_AUTOMATIC => Ok(ConversionMode::Automatic),
                other => Err(Error::UnknownValue { kind: "YUV conversion mode", value: other as i64 }),
            }
        }
    }

    /// Set the YUV conversion mode
    pub fn set_conversion_mode(mode: ConversionMode) {
        unsafe { sdlpp_sys::SDL_SetYUVConversionMode(mode.into()) }
    }

    /// Get the YUV conversion mode
    pub fn conversion_mode() -> Result<ConversionMode> {
        ConversionMode::try_from(unsafe { sdlpp_sys::SDL_GetYUVConversionMode() })
    }

    /// Get the conversion mode SDL would use for a given resolution
    ///
    /// Resolves `Automatic` to the concrete formula for that size.
    pub fn conversion_mode_for_resolution(size: Size) -> Result<ConversionMode> {
        let (w, h) = size.to_c();
        ConversionMode::try_from(unsafe { sdlpp_sys::SDL_GetYUVConversionModeForResolution(w, h) })
    }
}
