//! Raw FFI bindings to the SDL2 C API
//!
//! This crate declares the subset of SDL2 (>= 2.0.12) used by `sdlpp`:
//! error reporting, rectangles, pixel formats, surfaces, video/windows,
//! the 2D render API and the OpenGL glue functions.
//! For a safe Rust API, use the `sdlpp` crate instead.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

use std::os::raw::{c_char, c_double, c_float, c_int, c_void};

// =============================================================================
// Opaque Handle Types
// =============================================================================

/// Opaque window handle
#[repr(C)]
pub struct SDL_Window {
    _private: [u8; 0],
}

/// Opaque renderer handle
#[repr(C)]
pub struct SDL_Renderer {
    _private: [u8; 0],
}

/// Opaque texture handle
#[repr(C)]
pub struct SDL_Texture {
    _private: [u8; 0],
}

/// Opaque read/write stream handle
#[repr(C)]
pub struct SDL_RWops {
    _private: [u8; 0],
}

/// Opaque blit map (private to SDL)
#[repr(C)]
pub struct SDL_BlitMap {
    _private: [u8; 0],
}

/// Opaque event union; only ever passed as NULL from Rust
#[repr(C)]
pub struct SDL_Event {
    _private: [u8; 0],
}

/// Opaque OpenGL context handle
pub type SDL_GLContext = *mut c_void;

// =============================================================================
// Enumerations (C enums are int-sized)
// =============================================================================

pub type SDL_bool = c_int;
pub const SDL_FALSE: SDL_bool = 0;
pub const SDL_TRUE: SDL_bool = 1;

pub type SDL_BlendMode = c_int;
pub const SDL_BLENDMODE_NONE: SDL_BlendMode = 0x0000_0000;
pub const SDL_BLENDMODE_BLEND: SDL_BlendMode = 0x0000_0001;
pub const SDL_BLENDMODE_ADD: SDL_BlendMode = 0x0000_0002;
pub const SDL_BLENDMODE_MOD: SDL_BlendMode = 0x0000_0004;
pub const SDL_BLENDMODE_MUL: SDL_BlendMode = 0x0000_0008;
pub const SDL_BLENDMODE_INVALID: SDL_BlendMode = 0x7FFF_FFFF;

pub type SDL_RendererFlip = c_int;
pub const SDL_FLIP_NONE: SDL_RendererFlip = 0x0;
pub const SDL_FLIP_HORIZONTAL: SDL_RendererFlip = 0x1;
pub const SDL_FLIP_VERTICAL: SDL_RendererFlip = 0x2;

pub type SDL_ScaleMode = c_int;
pub const SDL_ScaleModeNearest: SDL_ScaleMode = 0;
pub const SDL_ScaleModeLinear: SDL_ScaleMode = 1;
pub const SDL_ScaleModeBest: SDL_ScaleMode = 2;

pub type SDL_TextureAccess = c_int;
pub const SDL_TEXTUREACCESS_STATIC: SDL_TextureAccess = 0;
pub const SDL_TEXTUREACCESS_STREAMING: SDL_TextureAccess = 1;
pub const SDL_TEXTUREACCESS_TARGET: SDL_TextureAccess = 2;

pub type SDL_DisplayOrientation = c_int;
pub const SDL_ORIENTATION_UNKNOWN: SDL_DisplayOrientation = 0;
pub const SDL_ORIENTATION_LANDSCAPE: SDL_DisplayOrientation = 1;
pub const SDL_ORIENTATION_LANDSCAPE_FLIPPED: SDL_DisplayOrientation = 2;
pub const SDL_ORIENTATION_PORTRAIT: SDL_DisplayOrientation = 3;
pub const SDL_ORIENTATION_PORTRAIT_FLIPPED: SDL_DisplayOrientation = 4;

pub type SDL_HitTestResult = c_int;
pub const SDL_HITTEST_NORMAL: SDL_HitTestResult = 0;
pub const SDL_HITTEST_DRAGGABLE: SDL_HitTestResult = 1;
pub const SDL_HITTEST_RESIZE_TOPLEFT: SDL_HitTestResult = 2;
pub const SDL_HITTEST_RESIZE_TOP: SDL_HitTestResult = 3;
pub const SDL_HITTEST_RESIZE_TOPRIGHT: SDL_HitTestResult = 4;
pub const SDL_HITTEST_RESIZE_RIGHT: SDL_HitTestResult = 5;
pub const SDL_HITTEST_RESIZE_BOTTOMRIGHT: SDL_HitTestResult = 6;
pub const SDL_HITTEST_RESIZE_BOTTOM: SDL_HitTestResult = 7;
pub const SDL_HITTEST_RESIZE_BOTTOMLEFT: SDL_HitTestResult = 8;
pub const SDL_HITTEST_RESIZE_LEFT: SDL_HitTestResult = 9;

/// Callback deciding whether a point in a window is draggable or a resize edge
pub type SDL_HitTest =
    Option<unsafe extern "C" fn(win: *mut SDL_Window, area: *const SDL_Point, data: *mut c_void) -> SDL_HitTestResult>;

pub type SDL_YUV_CONVERSION_MODE = c_int;
pub const SDL_YUV_CONVERSION_JPEG: SDL_YUV_CONVERSION_MODE = 0;
pub const SDL_YUV_CONVERSION_BT601: SDL_YUV_CONVERSION_MODE = 1;
pub const SDL_YUV_CONVERSION_BT709: SDL_YUV_CONVERSION_MODE = 2;
pub const SDL_YUV_CONVERSION_AUTOMATIC: SDL_YUV_CONVERSION_MODE = 3;

pub type SDL_GLattr = c_int;
pub const SDL_GL_RED_SIZE: SDL_GLattr = 0;
pub const SDL_GL_GREEN_SIZE: SDL_GLattr = 1;
pub const SDL_GL_BLUE_SIZE: SDL_GLattr = 2;
pub const SDL_GL_ALPHA_SIZE: SDL_GLattr = 3;
pub const SDL_GL_BUFFER_SIZE: SDL_GLattr = 4;
pub const SDL_GL_DOUBLEBUFFER: SDL_GLattr = 5;
pub const SDL_GL_DEPTH_SIZE: SDL_GLattr = 6;
pub const SDL_GL_STENCIL_SIZE: SDL_GLattr = 7;
pub const SDL_GL_ACCUM_RED_SIZE: SDL_GLattr = 8;
pub const SDL_GL_ACCUM_GREEN_SIZE: SDL_GLattr = 9;
pub const SDL_GL_ACCUM_BLUE_SIZE: SDL_GLattr = 10;
pub const SDL_GL_ACCUM_ALPHA_SIZE: SDL_GLattr = 11;
pub const SDL_GL_STEREO: SDL_GLattr = 12;
pub const SDL_GL_MULTISAMPLEBUFFERS: SDL_GLattr = 13;
pub const SDL_GL_MULTISAMPLESAMPLES: SDL_GLattr = 14;
pub const SDL_GL_ACCELERATED_VISUAL: SDL_GLattr = 15;
pub const SDL_GL_RETAINED_BACKING: SDL_GLattr = 16;
pub const SDL_GL_CONTEXT_MAJOR_VERSION: SDL_GLattr = 17;
pub const SDL_GL_CONTEXT_MINOR_VERSION: SDL_GLattr = 18;
pub const SDL_GL_CONTEXT_EGL: SDL_GLattr = 19;
pub const SDL_GL_CONTEXT_FLAGS: SDL_GLattr = 20;
pub const SDL_GL_CONTEXT_PROFILE_MASK: SDL_GLattr = 21;
pub const SDL_GL_SHARE_WITH_CURRENT_CONTEXT: SDL_GLattr = 22;
pub const SDL_GL_FRAMEBUFFER_SRGB_CAPABLE: SDL_GLattr = 23;
pub const SDL_GL_CONTEXT_RELEASE_BEHAVIOR: SDL_GLattr = 24;
pub const SDL_GL_CONTEXT_RESET_NOTIFICATION: SDL_GLattr = 25;
pub const SDL_GL_CONTEXT_NO_ERROR: SDL_GLattr = 26;

pub const SDL_GL_CONTEXT_PROFILE_CORE: c_int = 0x0001;
pub const SDL_GL_CONTEXT_PROFILE_COMPATIBILITY: c_int = 0x0002;
pub const SDL_GL_CONTEXT_PROFILE_ES: c_int = 0x0004;

pub const SDL_GL_CONTEXT_DEBUG_FLAG: c_int = 0x0001;
pub const SDL_GL_CONTEXT_FORWARD_COMPATIBLE_FLAG: c_int = 0x0002;
pub const SDL_GL_CONTEXT_ROBUST_ACCESS_FLAG: c_int = 0x0004;
pub const SDL_GL_CONTEXT_RESET_ISOLATION_FLAG: c_int = 0x0008;

pub type SDL_eventaction = c_int;
pub const SDL_ADDEVENT: SDL_eventaction = 0;
pub const SDL_PEEKEVENT: SDL_eventaction = 1;
pub const SDL_GETEVENT: SDL_eventaction = 2;

pub const SDL_QUIT: u32 = 0x100;

// =============================================================================
// Flags
// =============================================================================

pub const SDL_WINDOW_FULLSCREEN: u32 = 0x0000_0001;
pub const SDL_WINDOW_OPENGL: u32 = 0x0000_0002;
pub const SDL_WINDOW_SHOWN: u32 = 0x0000_0004;
pub const SDL_WINDOW_HIDDEN: u32 = 0x0000_0008;
pub const SDL_WINDOW_BORDERLESS: u32 = 0x0000_0010;
pub const SDL_WINDOW_RESIZABLE: u32 = 0x0000_0020;
pub const SDL_WINDOW_MINIMIZED: u32 = 0x0000_0040;
pub const SDL_WINDOW_MAXIMIZED: u32 = 0x0000_0080;
pub const SDL_WINDOW_INPUT_GRABBED: u32 = 0x0000_0100;
pub const SDL_WINDOW_INPUT_FOCUS: u32 = 0x0000_0200;
pub const SDL_WINDOW_MOUSE_FOCUS: u32 = 0x0000_0400;
pub const SDL_WINDOW_FULLSCREEN_DESKTOP: u32 = SDL_WINDOW_FULLSCREEN | 0x0000_1000;
pub const SDL_WINDOW_FOREIGN: u32 = 0x0000_0800;
pub const SDL_WINDOW_ALLOW_HIGHDPI: u32 = 0x0000_2000;
pub const SDL_WINDOW_MOUSE_CAPTURE: u32 = 0x0000_4000;
pub const SDL_WINDOW_ALWAYS_ON_TOP: u32 = 0x0000_8000;
pub const SDL_WINDOW_SKIP_TASKBAR: u32 = 0x0001_0000;
pub const SDL_WINDOW_UTILITY: u32 = 0x0002_0000;
pub const SDL_WINDOW_TOOLTIP: u32 = 0x0004_0000;
pub const SDL_WINDOW_POPUP_MENU: u32 = 0x0008_0000;
pub const SDL_WINDOW_VULKAN: u32 = 0x1000_0000;
pub const SDL_WINDOW_METAL: u32 = 0x2000_0000;

pub const SDL_WINDOWPOS_UNDEFINED_MASK: u32 = 0x1FFF_0000;
pub const SDL_WINDOWPOS_CENTERED_MASK: u32 = 0x2FFF_0000;
pub const SDL_WINDOWPOS_UNDEFINED: c_int = SDL_WINDOWPOS_UNDEFINED_MASK as c_int;
pub const SDL_WINDOWPOS_CENTERED: c_int = SDL_WINDOWPOS_CENTERED_MASK as c_int;

pub const SDL_RENDERER_SOFTWARE: u32 = 0x0000_0001;
pub const SDL_RENDERER_ACCELERATED: u32 = 0x0000_0002;
pub const SDL_RENDERER_PRESENTVSYNC: u32 = 0x0000_0004;
pub const SDL_RENDERER_TARGETTEXTURE: u32 = 0x0000_0008;

pub const SDL_SWSURFACE: u32 = 0;
pub const SDL_PREALLOC: u32 = 0x0000_0001;
pub const SDL_RLEACCEL: u32 = 0x0000_0002;
pub const SDL_DONTFREE: u32 = 0x0000_0004;

pub const SDL_HINT_VIDEODRIVER: &[u8] = b"SDL_VIDEODRIVER\0";

// =============================================================================
// Structures
// =============================================================================

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_Point {
    pub x: c_int,
    pub y: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SDL_FPoint {
    pub x: c_float,
    pub y: c_float,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_Rect {
    pub x: c_int,
    pub y: c_int,
    pub w: c_int,
    pub h: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SDL_FRect {
    pub x: c_float,
    pub y: c_float,
    pub w: c_float,
    pub h: c_float,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[repr(C)]
#[derive(Debug)]
pub struct SDL_Palette {
    pub ncolors: c_int,
    pub colors: *mut SDL_Color,
    pub version: u32,
    pub refcount: c_int,
}

#[repr(C)]
#[derive(Debug)]
pub struct SDL_PixelFormat {
    pub format: u32,
    pub palette: *mut SDL_Palette,
    pub BitsPerPixel: u8,
    pub BytesPerPixel: u8,
    pub padding: [u8; 2],
    pub Rmask: u32,
    pub Gmask: u32,
    pub Bmask: u32,
    pub Amask: u32,
    pub Rloss: u8,
    pub Gloss: u8,
    pub Bloss: u8,
    pub Aloss: u8,
    pub Rshift: u8,
    pub Gshift: u8,
    pub Bshift: u8,
    pub Ashift: u8,
    pub refcount: c_int,
    pub next: *mut SDL_PixelFormat,
}

#[repr(C)]
#[derive(Debug)]
pub struct SDL_Surface {
    pub flags: u32,
    pub format: *mut SDL_PixelFormat,
    pub w: c_int,
    pub h: c_int,
    pub pitch: c_int,
    pub pixels: *mut c_void,
    pub userdata: *mut c_void,
    pub locked: c_int,
    pub list_blitmap: *mut c_void,
    pub clip_rect: SDL_Rect,
    pub map: *mut SDL_BlitMap,
    pub refcount: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_DisplayMode {
    pub format: u32,
    pub w: c_int,
    pub h: c_int,
    pub refresh_rate: c_int,
    pub driverdata: *mut c_void,
}

impl Default for SDL_DisplayMode {
    fn default() -> Self {
        Self {
            format: SDL_PIXELFORMAT_UNKNOWN,
            w: 0,
            h: 0,
            refresh_rate: 0,
            driverdata: std::ptr::null_mut(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_RendererInfo {
    pub name: *const c_char,
    pub flags: u32,
    pub num_texture_formats: u32,
    pub texture_formats: [u32; 16],
    pub max_texture_width: c_int,
    pub max_texture_height: c_int,
}

impl Default for SDL_RendererInfo {
    fn default() -> Self {
        Self {
            name: std::ptr::null(),
            flags: 0,
            num_texture_formats: 0,
            texture_formats: [0; 16],
            max_texture_width: 0,
            max_texture_height: 0,
        }
    }
}

// =============================================================================
// Pixel Format Enum Values
// =============================================================================

pub const SDL_PIXELTYPE_UNKNOWN: u32 = 0;
pub const SDL_PIXELTYPE_INDEX1: u32 = 1;
pub const SDL_PIXELTYPE_INDEX4: u32 = 2;
pub const SDL_PIXELTYPE_INDEX8: u32 = 3;
pub const SDL_PIXELTYPE_PACKED8: u32 = 4;
pub const SDL_PIXELTYPE_PACKED16: u32 = 5;
pub const SDL_PIXELTYPE_PACKED32: u32 = 6;
pub const SDL_PIXELTYPE_ARRAYU8: u32 = 7;

pub const SDL_PACKEDORDER_NONE: u32 = 0;
pub const SDL_PACKEDORDER_XRGB: u32 = 1;
pub const SDL_PACKEDORDER_RGBX: u32 = 2;
pub const SDL_PACKEDORDER_ARGB: u32 = 3;
pub const SDL_PACKEDORDER_RGBA: u32 = 4;
pub const SDL_PACKEDORDER_XBGR: u32 = 5;
pub const SDL_PACKEDORDER_BGRX: u32 = 6;
pub const SDL_PACKEDORDER_ABGR: u32 = 7;
pub const SDL_PACKEDORDER_BGRA: u32 = 8;

pub const SDL_ARRAYORDER_NONE: u32 = 0;
pub const SDL_ARRAYORDER_RGB: u32 = 1;
pub const SDL_ARRAYORDER_BGR: u32 = 4;

pub const SDL_PACKEDLAYOUT_NONE: u32 = 0;
pub const SDL_PACKEDLAYOUT_332: u32 = 1;
pub const SDL_PACKEDLAYOUT_4444: u32 = 2;
pub const SDL_PACKEDLAYOUT_1555: u32 = 3;
pub const SDL_PACKEDLAYOUT_565: u32 = 5;
pub const SDL_PACKEDLAYOUT_8888: u32 = 6;
pub const SDL_PACKEDLAYOUT_2101010: u32 = 7;

/// `SDL_DEFINE_PIXELFORMAT`
pub const fn SDL_DEFINE_PIXELFORMAT(ty: u32, order: u32, layout: u32, bits: u32, bytes: u32) -> u32 {
    (1 << 28) | (ty << 24) | (order << 20) | (layout << 16) | (bits << 8) | bytes
}

/// `SDL_DEFINE_PIXELFOURCC`
pub const fn SDL_DEFINE_PIXELFOURCC(a: u8, b: u8, c: u8, d: u8) -> u32 {
    (a as u32) | ((b as u32) << 8) | ((c as u32) << 16) | ((d as u32) << 24)
}

pub const SDL_PIXELFORMAT_UNKNOWN: u32 = 0;
pub const SDL_PIXELFORMAT_INDEX8: u32 =
    SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_INDEX8, 0, 0, 8, 1);
pub const SDL_PIXELFORMAT_RGB332: u32 =
    SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED8, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_332, 8, 1);
pub const SDL_PIXELFORMAT_ARGB4444: u32 =
    SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_ARGB, SDL_PACKEDLAYOUT_4444, 16, 2);
pub const SDL_PIXELFORMAT_ARGB1555: u32 =
    SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_ARGB, SDL_PACKEDLAYOUT_1555, 16, 2);
pub const SDL_PIXELFORMAT_RGB565: u32 =
    SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_565, 16, 2);
pub const SDL_PIXELFORMAT_RGB24: u32 =
    SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_ARRAYU8, SDL_ARRAYORDER_RGB, 0, 24, 3);
pub const SDL_PIXELFORMAT_BGR24: u32 =
    SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_ARRAYU8, SDL_ARRAYORDER_BGR, 0, 24, 3);
pub const SDL_PIXELFORMAT_RGB888: u32 =
    SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_8888, 24, 4);
pub const SDL_PIXELFORMAT_BGR888: u32 =
    SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_XBGR, SDL_PACKEDLAYOUT_8888, 24, 4);
pub const SDL_PIXELFORMAT_ARGB8888: u32 =
    SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_ARGB, SDL_PACKEDLAYOUT_8888, 32, 4);
pub const SDL_PIXELFORMAT_RGBA8888: u32 =
    SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_RGBA, SDL_PACKEDLAYOUT_8888, 32, 4);
pub const SDL_PIXELFORMAT_ABGR8888: u32 =
    SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_ABGR, SDL_PACKEDLAYOUT_8888, 32, 4);
pub const SDL_PIXELFORMAT_BGRA8888: u32 =
    SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_BGRA, SDL_PACKEDLAYOUT_8888, 32, 4);
pub const SDL_PIXELFORMAT_ARGB2101010: u32 =
    SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_ARGB, SDL_PACKEDLAYOUT_2101010, 32, 4);

pub const SDL_PIXELFORMAT_YV12: u32 = SDL_DEFINE_PIXELFOURCC(b'Y', b'V', b'1', b'2');
pub const SDL_PIXELFORMAT_IYUV: u32 = SDL_DEFINE_PIXELFOURCC(b'I', b'Y', b'U', b'V');
pub const SDL_PIXELFORMAT_YUY2: u32 = SDL_DEFINE_PIXELFOURCC(b'Y', b'U', b'Y', b'2');
pub const SDL_PIXELFORMAT_UYVY: u32 = SDL_DEFINE_PIXELFOURCC(b'U', b'Y', b'V', b'Y');
pub const SDL_PIXELFORMAT_YVYU: u32 = SDL_DEFINE_PIXELFOURCC(b'Y', b'V', b'Y', b'U');
pub const SDL_PIXELFORMAT_NV12: u32 = SDL_DEFINE_PIXELFOURCC(b'N', b'V', b'1', b'2');
pub const SDL_PIXELFORMAT_NV21: u32 = SDL_DEFINE_PIXELFOURCC(b'N', b'V', b'2', b'1');

// =============================================================================
// Header Macros
// =============================================================================

/// `SDL_ISPIXELFORMAT_FOURCC`
pub const fn SDL_ISPIXELFORMAT_FOURCC(format: u32) -> bool {
    format != 0 && ((format >> 28) & 0x0F) != 1
}

/// `SDL_BITSPERPIXEL`
pub const fn SDL_BITSPERPIXEL(format: u32) -> u32 {
    (format >> 8) & 0xFF
}

/// `SDL_BYTESPERPIXEL`
pub const fn SDL_BYTESPERPIXEL(format: u32) -> u32 {
    if SDL_ISPIXELFORMAT_FOURCC(format) {
        if format == SDL_PIXELFORMAT_YUY2
            || format == SDL_PIXELFORMAT_UYVY
            || format == SDL_PIXELFORMAT_YVYU
        {
            2
        } else {
            1
        }
    } else {
        format & 0xFF
    }
}

/// `SDL_MUSTLOCK`
///
/// # Safety
///
/// `surface` must point to a valid surface.
pub unsafe fn SDL_MUSTLOCK(surface: *const SDL_Surface) -> bool {
    ((*surface).flags & SDL_RLEACCEL) != 0
}

// =============================================================================
// External Functions
// =============================================================================

#[link(name = "SDL2")]
extern "C" {
    // =========================================================================
    // Error Handling
    // =========================================================================

    pub fn SDL_GetError() -> *const c_char;
    pub fn SDL_SetError(fmt: *const c_char, ...) -> c_int;
    pub fn SDL_ClearError();

    // =========================================================================
    // Hints and Events
    // =========================================================================

    pub fn SDL_SetHint(name: *const c_char, value: *const c_char) -> SDL_bool;
    pub fn SDL_GetHint(name: *const c_char) -> *const c_char;
    pub fn SDL_PumpEvents();
    pub fn SDL_PeepEvents(
        events: *mut SDL_Event,
        numevents: c_int,
        action: SDL_eventaction,
        minType: u32,
        maxType: u32,
    ) -> c_int;

    // =========================================================================
    // Rectangles
    // =========================================================================

    pub fn SDL_HasIntersection(a: *const SDL_Rect, b: *const SDL_Rect) -> SDL_bool;
    pub fn SDL_IntersectRect(a: *const SDL_Rect, b: *const SDL_Rect, result: *mut SDL_Rect) -> SDL_bool;
    pub fn SDL_UnionRect(a: *const SDL_Rect, b: *const SDL_Rect, result: *mut SDL_Rect);
    pub fn SDL_EnclosePoints(
        points: *const SDL_Point,
        count: c_int,
        clip: *const SDL_Rect,
        result: *mut SDL_Rect,
    ) -> SDL_bool;

    // =========================================================================
    // Pixel Formats and Palettes
    // =========================================================================

    pub fn SDL_GetPixelFormatName(format: u32) -> *const c_char;
    pub fn SDL_PixelFormatEnumToMasks(
        format: u32,
        bpp: *mut c_int,
        Rmask: *mut u32,
        Gmask: *mut u32,
        Bmask: *mut u32,
        Amask: *mut u32,
    ) -> SDL_bool;
    pub fn SDL_MasksToPixelFormatEnum(bpp: c_int, Rmask: u32, Gmask: u32, Bmask: u32, Amask: u32) -> u32;
    pub fn SDL_AllocFormat(pixel_format: u32) -> *mut SDL_PixelFormat;
    pub fn SDL_FreeFormat(format: *mut SDL_PixelFormat);
    pub fn SDL_AllocPalette(ncolors: c_int) -> *mut SDL_Palette;
    pub fn SDL_SetPixelFormatPalette(format: *mut SDL_PixelFormat, palette: *mut SDL_Palette) -> c_int;
    pub fn SDL_SetPaletteColors(
        palette: *mut SDL_Palette,
        colors: *const SDL_Color,
        firstcolor: c_int,
        ncolors: c_int,
    ) -> c_int;
    pub fn SDL_FreePalette(palette: *mut SDL_Palette);
    pub fn SDL_MapRGB(format: *const SDL_PixelFormat, r: u8, g: u8, b: u8) -> u32;
    pub fn SDL_MapRGBA(format: *const SDL_PixelFormat, r: u8, g: u8, b: u8, a: u8) -> u32;
    pub fn SDL_GetRGB(pixel: u32, format: *const SDL_PixelFormat, r: *mut u8, g: *mut u8, b: *mut u8);
    pub fn SDL_GetRGBA(
        pixel: u32,
        format: *const SDL_PixelFormat,
        r: *mut u8,
        g: *mut u8,
        b: *mut u8,
        a: *mut u8,
    );

    // =========================================================================
    // Streams
    // =========================================================================

    pub fn SDL_RWFromFile(file: *const c_char, mode: *const c_char) -> *mut SDL_RWops;

    // =========================================================================
    // Surfaces
    // =========================================================================

    pub fn SDL_CreateRGBSurface(
        flags: u32,
        width: c_int,
        height: c_int,
        depth: c_int,
        Rmask: u32,
        Gmask: u32,
        Bmask: u32,
        Amask: u32,
    ) -> *mut SDL_Surface;
    pub fn SDL_CreateRGBSurfaceWithFormat(
        flags: u32,
        width: c_int,
        height: c_int,
        depth: c_int,
        format: u32,
    ) -> *mut SDL_Surface;
    pub fn SDL_CreateRGBSurfaceFrom(
        pixels: *mut c_void,
        width: c_int,
        height: c_int,
        depth: c_int,
        pitch: c_int,
        Rmask: u32,
        Gmask: u32,
        Bmask: u32,
        Amask: u32,
    ) -> *mut SDL_Surface;
    pub fn SDL_CreateRGBSurfaceWithFormatFrom(
        pixels: *mut c_void,
        width: c_int,
        height: c_int,
        depth: c_int,
        pitch: c_int,
        format: u32,
    ) -> *mut SDL_Surface;
    pub fn SDL_FreeSurface(surface: *mut SDL_Surface);
    pub fn SDL_SetSurfacePalette(surface: *mut SDL_Surface, palette: *mut SDL_Palette) -> c_int;
    pub fn SDL_LockSurface(surface: *mut SDL_Surface) -> c_int;
    pub fn SDL_UnlockSurface(surface: *mut SDL_Surface);
    pub fn SDL_LoadBMP_RW(src: *mut SDL_RWops, freesrc: c_int) -> *mut SDL_Surface;
    pub fn SDL_SaveBMP_RW(surface: *mut SDL_Surface, dst: *mut SDL_RWops, freedst: c_int) -> c_int;
    pub fn SDL_SetSurfaceRLE(surface: *mut SDL_Surface, flag: c_int) -> c_int;
    pub fn SDL_SetColorKey(surface: *mut SDL_Surface, flag: c_int, key: u32) -> c_int;
    pub fn SDL_HasColorKey(surface: *mut SDL_Surface) -> SDL_bool;
    pub fn SDL_GetColorKey(surface: *mut SDL_Surface, key: *mut u32) -> c_int;
    pub fn SDL_SetSurfaceColorMod(surface: *mut SDL_Surface, r: u8, g: u8, b: u8) -> c_int;
    pub fn SDL_GetSurfaceColorMod(surface: *mut SDL_Surface, r: *mut u8, g: *mut u8, b: *mut u8) -> c_int;
    pub fn SDL_SetSurfaceAlphaMod(surface: *mut SDL_Surface, alpha: u8) -> c_int;
    pub fn SDL_GetSurfaceAlphaMod(surface: *mut SDL_Surface, alpha: *mut u8) -> c_int;
    pub fn SDL_SetSurfaceBlendMode(surface: *mut SDL_Surface, blendMode: SDL_BlendMode) -> c_int;
    pub fn SDL_GetSurfaceBlendMode(surface: *mut SDL_Surface, blendMode: *mut SDL_BlendMode) -> c_int;
    pub fn SDL_SetClipRect(surface: *mut SDL_Surface, rect: *const SDL_Rect) -> SDL_bool;
    pub fn SDL_GetClipRect(surface: *mut SDL_Surface, rect: *mut SDL_Rect);
    pub fn SDL_DuplicateSurface(surface: *mut SDL_Surface) -> *mut SDL_Surface;
    pub fn SDL_ConvertSurface(
        src: *mut SDL_Surface,
        fmt: *const SDL_PixelFormat,
        flags: u32,
    ) -> *mut SDL_Surface;
    pub fn SDL_ConvertSurfaceFormat(src: *mut SDL_Surface, pixel_format: u32, flags: u32) -> *mut SDL_Surface;
    pub fn SDL_ConvertPixels(
        width: c_int,
        height: c_int,
        src_format: u32,
        src: *const c_void,
        src_pitch: c_int,
        dst_format: u32,
        dst: *mut c_void,
        dst_pitch: c_int,
    ) -> c_int;
    pub fn SDL_FillRect(dst: *mut SDL_Surface, rect: *const SDL_Rect, color: u32) -> c_int;
    pub fn SDL_FillRects(dst: *mut SDL_Surface, rects: *const SDL_Rect, count: c_int, color: u32) -> c_int;
    pub fn SDL_UpperBlit(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *mut SDL_Rect,
    ) -> c_int;
    pub fn SDL_LowerBlit(
        src: *mut SDL_Surface,
        srcrect: *mut SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *mut SDL_Rect,
    ) -> c_int;
    pub fn SDL_SoftStretch(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
    ) -> c_int;
    pub fn SDL_UpperBlitScaled(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *mut SDL_Rect,
    ) -> c_int;
    pub fn SDL_LowerBlitScaled(
        src: *mut SDL_Surface,
        srcrect: *mut SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *mut SDL_Rect,
    ) -> c_int;
    pub fn SDL_SetYUVConversionMode(mode: SDL_YUV_CONVERSION_MODE);
    pub fn SDL_GetYUVConversionMode() -> SDL_YUV_CONVERSION_MODE;
    pub fn SDL_GetYUVConversionModeForResolution(width: c_int, height: c_int) -> SDL_YUV_CONVERSION_MODE;

    // =========================================================================
    // Video Drivers and Displays
    // =========================================================================

    pub fn SDL_GetNumVideoDrivers() -> c_int;
    pub fn SDL_GetVideoDriver(index: c_int) -> *const c_char;
    pub fn SDL_VideoInit(driver_name: *const c_char) -> c_int;
    pub fn SDL_VideoQuit();
    pub fn SDL_GetCurrentVideoDriver() -> *const c_char;
    pub fn SDL_GetNumVideoDisplays() -> c_int;
    pub fn SDL_GetDisplayName(displayIndex: c_int) -> *const c_char;
    pub fn SDL_GetDisplayBounds(displayIndex: c_int, rect: *mut SDL_Rect) -> c_int;
    pub fn SDL_GetDisplayUsableBounds(displayIndex: c_int, rect: *mut SDL_Rect) -> c_int;
    pub fn SDL_GetDisplayDPI(
        displayIndex: c_int,
        ddpi: *mut c_float,
        hdpi: *mut c_float,
        vdpi: *mut c_float,
    ) -> c_int;
    pub fn SDL_GetDisplayOrientation(displayIndex: c_int) -> SDL_DisplayOrientation;
    pub fn SDL_GetNumDisplayModes(displayIndex: c_int) -> c_int;
    pub fn SDL_GetDisplayMode(displayIndex: c_int, modeIndex: c_int, mode: *mut SDL_DisplayMode) -> c_int;
    pub fn SDL_GetDesktopDisplayMode(displayIndex: c_int, mode: *mut SDL_DisplayMode) -> c_int;
    pub fn SDL_GetCurrentDisplayMode(displayIndex: c_int, mode: *mut SDL_DisplayMode) -> c_int;
    pub fn SDL_GetClosestDisplayMode(
        displayIndex: c_int,
        mode: *const SDL_DisplayMode,
        closest: *mut SDL_DisplayMode,
    ) -> *mut SDL_DisplayMode;

    // =========================================================================
    // Windows
    // =========================================================================

    pub fn SDL_CreateWindow(
        title: *const c_char,
        x: c_int,
        y: c_int,
        w: c_int,
        h: c_int,
        flags: u32,
    ) -> *mut SDL_Window;
    pub fn SDL_CreateWindowFrom(data: *const c_void) -> *mut SDL_Window;
    pub fn SDL_DestroyWindow(window: *mut SDL_Window);
    pub fn SDL_GetWindowDisplayIndex(window: *mut SDL_Window) -> c_int;
    pub fn SDL_SetWindowDisplayMode(window: *mut SDL_Window, mode: *const SDL_DisplayMode) -> c_int;
    pub fn SDL_GetWindowDisplayMode(window: *mut SDL_Window, mode: *mut SDL_DisplayMode) -> c_int;
    pub fn SDL_GetWindowPixelFormat(window: *mut SDL_Window) -> u32;
    pub fn SDL_GetWindowID(window: *mut SDL_Window) -> u32;
    pub fn SDL_GetWindowFromID(id: u32) -> *mut SDL_Window;
    pub fn SDL_GetWindowFlags(window: *mut SDL_Window) -> u32;
    pub fn SDL_SetWindowData(window: *mut SDL_Window, name: *const c_char, userdata: *mut c_void) -> *mut c_void;
    pub fn SDL_GetWindowData(window: *mut SDL_Window, name: *const c_char) -> *mut c_void;
    pub fn SDL_SetWindowTitle(window: *mut SDL_Window, title: *const c_char);
    pub fn SDL_GetWindowTitle(window: *mut SDL_Window) -> *const c_char;
    pub fn SDL_SetWindowIcon(window: *mut SDL_Window, icon: *mut SDL_Surface);
    pub fn SDL_SetWindowPosition(window: *mut SDL_Window, x: c_int, y: c_int);
    pub fn SDL_GetWindowPosition(window: *mut SDL_Window, x: *mut c_int, y: *mut c_int);
    pub fn SDL_SetWindowSize(window: *mut SDL_Window, w: c_int, h: c_int);
    pub fn SDL_GetWindowSize(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int);
    pub fn SDL_GetWindowBordersSize(
        window: *mut SDL_Window,
        top: *mut c_int,
        left: *mut c_int,
        bottom: *mut c_int,
        right: *mut c_int,
    ) -> c_int;
    pub fn SDL_SetWindowMinimumSize(window: *mut SDL_Window, min_w: c_int, min_h: c_int);
    pub fn SDL_GetWindowMinimumSize(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int);
    pub fn SDL_SetWindowMaximumSize(window: *mut SDL_Window, max_w: c_int, max_h: c_int);
    pub fn SDL_GetWindowMaximumSize(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int);
    pub fn SDL_SetWindowBordered(window: *mut SDL_Window, bordered: SDL_bool);
    pub fn SDL_SetWindowResizable(window: *mut SDL_Window, resizable: SDL_bool);
    pub fn SDL_ShowWindow(window: *mut SDL_Window);
    pub fn SDL_HideWindow(window: *mut SDL_Window);
    pub fn SDL_RaiseWindow(window: *mut SDL_Window);
    pub fn SDL_MaximizeWindow(window: *mut SDL_Window);
    pub fn SDL_MinimizeWindow(window: *mut SDL_Window);
    pub fn SDL_RestoreWindow(window: *mut SDL_Window);
    pub fn SDL_SetWindowFullscreen(window: *mut SDL_Window, flags: u32) -> c_int;
    pub fn SDL_GetWindowSurface(window: *mut SDL_Window) -> *mut SDL_Surface;
    pub fn SDL_UpdateWindowSurface(window: *mut SDL_Window) -> c_int;
    pub fn SDL_UpdateWindowSurfaceRects(window: *mut SDL_Window, rects: *const SDL_Rect, numrects: c_int) -> c_int;
    pub fn SDL_SetWindowGrab(window: *mut SDL_Window, grabbed: SDL_bool);
    pub fn SDL_GetWindowGrab(window: *mut SDL_Window) -> SDL_bool;
    pub fn SDL_GetGrabbedWindow() -> *mut SDL_Window;
    pub fn SDL_SetWindowBrightness(window: *mut SDL_Window, brightness: c_float) -> c_int;
    pub fn SDL_GetWindowBrightness(window: *mut SDL_Window) -> c_float;
    pub fn SDL_SetWindowOpacity(window: *mut SDL_Window, opacity: c_float) -> c_int;
    pub fn SDL_GetWindowOpacity(window: *mut SDL_Window, out_opacity: *mut c_float) -> c_int;
    pub fn SDL_SetWindowModalFor(modal_window: *mut SDL_Window, parent_window: *mut SDL_Window) -> c_int;
    pub fn SDL_SetWindowInputFocus(window: *mut SDL_Window) -> c_int;
    pub fn SDL_SetWindowHitTest(window: *mut SDL_Window, callback: SDL_HitTest, callback_data: *mut c_void) -> c_int;
    pub fn SDL_SetWindowGammaRamp(
        window: *mut SDL_Window,
        red: *const u16,
        green: *const u16,
        blue: *const u16,
    ) -> c_int;
    pub fn SDL_GetWindowGammaRamp(
        window: *mut SDL_Window,
        red: *mut u16,
        green: *mut u16,
        blue: *mut u16,
    ) -> c_int;
    pub fn SDL_IsScreenSaverEnabled() -> SDL_bool;
    pub fn SDL_EnableScreenSaver();
    pub fn SDL_DisableScreenSaver();

    // =========================================================================
    // OpenGL
    // =========================================================================

    pub fn SDL_GL_LoadLibrary(path: *const c_char) -> c_int;
    pub fn SDL_GL_GetProcAddress(proc_: *const c_char) -> *mut c_void;
    pub fn SDL_GL_UnloadLibrary();
    pub fn SDL_GL_ExtensionSupported(extension: *const c_char) -> SDL_bool;
    pub fn SDL_GL_ResetAttributes();
    pub fn SDL_GL_SetAttribute(attr: SDL_GLattr, value: c_int) -> c_int;
    pub fn SDL_GL_GetAttribute(attr: SDL_GLattr, value: *mut c_int) -> c_int;
    pub fn SDL_GL_CreateContext(window: *mut SDL_Window) -> SDL_GLContext;
    pub fn SDL_GL_MakeCurrent(window: *mut SDL_Window, context: SDL_GLContext) -> c_int;
    pub fn SDL_GL_GetCurrentWindow() -> *mut SDL_Window;
    pub fn SDL_GL_GetCurrentContext() -> SDL_GLContext;
    pub fn SDL_GL_GetDrawableSize(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int);
    pub fn SDL_GL_SetSwapInterval(interval: c_int) -> c_int;
    pub fn SDL_GL_GetSwapInterval() -> c_int;
    pub fn SDL_GL_SwapWindow(window: *mut SDL_Window);
    pub fn SDL_GL_DeleteContext(context: SDL_GLContext);
    pub fn SDL_GL_BindTexture(texture: *mut SDL_Texture, texw: *mut c_float, texh: *mut c_float) -> c_int;
    pub fn SDL_GL_UnbindTexture(texture: *mut SDL_Texture) -> c_int;

    // =========================================================================
    // Renderer Lifecycle
    // =========================================================================

    pub fn SDL_GetNumRenderDrivers() -> c_int;
    pub fn SDL_GetRenderDriverInfo(index: c_int, info: *mut SDL_RendererInfo) -> c_int;
    pub fn SDL_CreateWindowAndRenderer(
        width: c_int,
        height: c_int,
        window_flags: u32,
        window: *mut *mut SDL_Window,
        renderer: *mut *mut SDL_Renderer,
    ) -> c_int;
    pub fn SDL_CreateRenderer(window: *mut SDL_Window, index: c_int, flags: u32) -> *mut SDL_Renderer;
    pub fn SDL_CreateSoftwareRenderer(surface: *mut SDL_Surface) -> *mut SDL_Renderer;
    pub fn SDL_GetRenderer(window: *mut SDL_Window) -> *mut SDL_Renderer;
    pub fn SDL_GetRendererInfo(renderer: *mut SDL_Renderer, info: *mut SDL_RendererInfo) -> c_int;
    pub fn SDL_GetRendererOutputSize(renderer: *mut SDL_Renderer, w: *mut c_int, h: *mut c_int) -> c_int;
    pub fn SDL_DestroyRenderer(renderer: *mut SDL_Renderer);

    // =========================================================================
    // Renderer State
    // =========================================================================

    pub fn SDL_RenderTargetSupported(renderer: *mut SDL_Renderer) -> SDL_bool;
    pub fn SDL_SetRenderTarget(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture) -> c_int;
    pub fn SDL_GetRenderTarget(renderer: *mut SDL_Renderer) -> *mut SDL_Texture;
    pub fn SDL_RenderSetLogicalSize(renderer: *mut SDL_Renderer, w: c_int, h: c_int) -> c_int;
    pub fn SDL_RenderGetLogicalSize(renderer: *mut SDL_Renderer, w: *mut c_int, h: *mut c_int);
    pub fn SDL_RenderSetIntegerScale(renderer: *mut SDL_Renderer, enable: SDL_bool) -> c_int;
    pub fn SDL_RenderGetIntegerScale(renderer: *mut SDL_Renderer) -> SDL_bool;
    pub fn SDL_RenderSetViewport(renderer: *mut SDL_Renderer, rect: *const SDL_Rect) -> c_int;
    pub fn SDL_RenderGetViewport(renderer: *mut SDL_Renderer, rect: *mut SDL_Rect);
    pub fn SDL_RenderSetClipRect(renderer: *mut SDL_Renderer, rect: *const SDL_Rect) -> c_int;
    pub fn SDL_RenderGetClipRect(renderer: *mut SDL_Renderer, rect: *mut SDL_Rect);
    pub fn SDL_RenderIsClipEnabled(renderer: *mut SDL_Renderer) -> SDL_bool;
    pub fn SDL_RenderSetScale(renderer: *mut SDL_Renderer, scaleX: c_float, scaleY: c_float) -> c_int;
    pub fn SDL_RenderGetScale(renderer: *mut SDL_Renderer, scaleX: *mut c_float, scaleY: *mut c_float);
    pub fn SDL_SetRenderDrawColor(renderer: *mut SDL_Renderer, r: u8, g: u8, b: u8, a: u8) -> c_int;
    pub fn SDL_GetRenderDrawColor(
        renderer: *mut SDL_Renderer,
        r: *mut u8,
        g: *mut u8,
        b: *mut u8,
        a: *mut u8,
    ) -> c_int;
    pub fn SDL_SetRenderDrawBlendMode(renderer: *mut SDL_Renderer, blendMode: SDL_BlendMode) -> c_int;
    pub fn SDL_GetRenderDrawBlendMode(renderer: *mut SDL_Renderer, blendMode: *mut SDL_BlendMode) -> c_int;

    // =========================================================================
    // Drawing
    // =========================================================================

    pub fn SDL_RenderClear(renderer: *mut SDL_Renderer) -> c_int;
    pub fn SDL_RenderDrawPoint(renderer: *mut SDL_Renderer, x: c_int, y: c_int) -> c_int;
    pub fn SDL_RenderDrawPoints(renderer: *mut SDL_Renderer, points: *const SDL_Point, count: c_int) -> c_int;
    pub fn SDL_RenderDrawLine(renderer: *mut SDL_Renderer, x1: c_int, y1: c_int, x2: c_int, y2: c_int) -> c_int;
    pub fn SDL_RenderDrawLines(renderer: *mut SDL_Renderer, points: *const SDL_Point, count: c_int) -> c_int;
    pub fn SDL_RenderDrawRect(renderer: *mut SDL_Renderer, rect: *const SDL_Rect) -> c_int;
    pub fn SDL_RenderDrawRects(renderer: *mut SDL_Renderer, rects: *const SDL_Rect, count: c_int) -> c_int;
    pub fn SDL_RenderFillRect(renderer: *mut SDL_Renderer, rect: *const SDL_Rect) -> c_int;
    pub fn SDL_RenderFillRects(renderer: *mut SDL_Renderer, rects: *const SDL_Rect, count: c_int) -> c_int;
    pub fn SDL_RenderDrawPointF(renderer: *mut SDL_Renderer, x: c_float, y: c_float) -> c_int;
    pub fn SDL_RenderDrawPointsF(renderer: *mut SDL_Renderer, points: *const SDL_FPoint, count: c_int) -> c_int;
    pub fn SDL_RenderDrawLineF(
        renderer: *mut SDL_Renderer,
        x1: c_float,
        y1: c_float,
        x2: c_float,
        y2: c_float,
    ) -> c_int;
    pub fn SDL_RenderDrawLinesF(renderer: *mut SDL_Renderer, points: *const SDL_FPoint, count: c_int) -> c_int;
    pub fn SDL_RenderDrawRectF(renderer: *mut SDL_Renderer, rect: *const SDL_FRect) -> c_int;
    pub fn SDL_RenderDrawRectsF(renderer: *mut SDL_Renderer, rects: *const SDL_FRect, count: c_int) -> c_int;
    pub fn SDL_RenderFillRectF(renderer: *mut SDL_Renderer, rect: *const SDL_FRect) -> c_int;
    pub fn SDL_RenderFillRectsF(renderer: *mut SDL_Renderer, rects: *const SDL_FRect, count: c_int) -> c_int;
    pub fn SDL_RenderCopy(
        renderer: *mut SDL_Renderer,
        texture: *mut SDL_Texture,
        srcrect: *const SDL_Rect,
        dstrect: *const SDL_Rect,
    ) -> c_int;
    pub fn SDL_RenderCopyEx(
        renderer: *mut SDL_Renderer,
        texture: *mut SDL_Texture,
        srcrect: *const SDL_Rect,
        dstrect: *const SDL_Rect,
        angle: c_double,
        center: *const SDL_Point,
        flip: SDL_RendererFlip,
    ) -> c_int;
    pub fn SDL_RenderCopyF(
        renderer: *mut SDL_Renderer,
        texture: *mut SDL_Texture,
        srcrect: *const SDL_Rect,
        dstrect: *const SDL_FRect,
    ) -> c_int;
    pub fn SDL_RenderCopyExF(
        renderer: *mut SDL_Renderer,
        texture: *mut SDL_Texture,
        srcrect: *const SDL_Rect,
        dstrect: *const SDL_FRect,
        angle: c_double,
        center: *const SDL_FPoint,
        flip: SDL_RendererFlip,
    ) -> c_int;
    pub fn SDL_RenderReadPixels(
        renderer: *mut SDL_Renderer,
        rect: *const SDL_Rect,
        format: u32,
        pixels: *mut c_void,
        pitch: c_int,
    ) -> c_int;
    pub fn SDL_RenderPresent(renderer: *mut SDL_Renderer);
    pub fn SDL_RenderFlush(renderer: *mut SDL_Renderer) -> c_int;
    pub fn SDL_RenderGetMetalLayer(renderer: *mut SDL_Renderer) -> *mut c_void;
    pub fn SDL_RenderGetMetalCommandEncoder(renderer: *mut SDL_Renderer) -> *mut c_void;

    // =========================================================================
    // Textures
    // =========================================================================

    pub fn SDL_CreateTexture(
        renderer: *mut SDL_Renderer,
        format: u32,
        access: SDL_TextureAccess,
        w: c_int,
        h: c_int,
    ) -> *mut SDL_Texture;
    pub fn SDL_CreateTextureFromSurface(renderer: *mut SDL_Renderer, surface: *mut SDL_Surface) -> *mut SDL_Texture;
    pub fn SDL_QueryTexture(
        texture: *mut SDL_Texture,
        format: *mut u32,
        access: *mut c_int,
        w: *mut c_int,
        h: *mut c_int,
    ) -> c_int;
    pub fn SDL_SetTextureColorMod(texture: *mut SDL_Texture, r: u8, g: u8, b: u8) -> c_int;
    pub fn SDL_GetTextureColorMod(texture: *mut SDL_Texture, r: *mut u8, g: *mut u8, b: *mut u8) -> c_int;
    pub fn SDL_SetTextureAlphaMod(texture: *mut SDL_Texture, alpha: u8) -> c_int;
    pub fn SDL_GetTextureAlphaMod(texture: *mut SDL_Texture, alpha: *mut u8) -> c_int;
    pub fn SDL_SetTextureBlendMode(texture: *mut SDL_Texture, blendMode: SDL_BlendMode) -> c_int;
    pub fn SDL_GetTextureBlendMode(texture: *mut SDL_Texture, blendMode: *mut SDL_BlendMode) -> c_int;
    pub fn SDL_SetTextureScaleMode(texture: *mut SDL_Texture, scaleMode: SDL_ScaleMode) -> c_int;
    pub fn SDL_GetTextureScaleMode(texture: *mut SDL_Texture, scaleMode: *mut SDL_ScaleMode) -> c_int;
    pub fn SDL_UpdateTexture(
        texture: *mut SDL_Texture,
        rect: *const SDL_Rect,
        pixels: *const c_void,
        pitch: c_int,
    ) -> c_int;
    pub fn SDL_UpdateYUVTexture(
        texture: *mut SDL_Texture,
        rect: *const SDL_Rect,
        Yplane: *const u8,
        Ypitch: c_int,
        Uplane: *const u8,
        Upitch: c_int,
        Vplane: *const u8,
        Vpitch: c_int,
    ) -> c_int;
    pub fn SDL_LockTexture(
        texture: *mut SDL_Texture,
        rect: *const SDL_Rect,
        pixels: *mut *mut c_void,
        pitch: *mut c_int,
    ) -> c_int;
    pub fn SDL_LockTextureToSurface(
        texture: *mut SDL_Texture,
        rect: *const SDL_Rect,
        surface: *mut *mut SDL_Surface,
    ) -> c_int;
    pub fn SDL_UnlockTexture(texture: *mut SDL_Texture);
    pub fn SDL_DestroyTexture(texture: *mut SDL_Texture);
}

// =============================================================================
// Helper Functions
// =============================================================================

/// `SDL_LoadBMP`
///
/// # Safety
///
/// `file` must be a valid NUL-terminated path.
pub unsafe fn SDL_LoadBMP(file: *const c_char) -> *mut SDL_Surface {
    SDL_LoadBMP_RW(SDL_RWFromFile(file, b"rb\0".as_ptr() as *const c_char), 1)
}

/// `SDL_SaveBMP`
///
/// # Safety
///
/// `surface` must be valid and `file` a NUL-terminated path.
pub unsafe fn SDL_SaveBMP(surface: *mut SDL_Surface, file: *const c_char) -> c_int {
    SDL_SaveBMP_RW(surface, SDL_RWFromFile(file, b"wb\0".as_ptr() as *const c_char), 1)
}

/// `SDL_QuitRequested`
///
/// # Safety
///
/// The events subsystem must be initialised.
pub unsafe fn SDL_QuitRequested() -> bool {
    SDL_PumpEvents();
    SDL_PeepEvents(std::ptr::null_mut(), 0, SDL_PEEKEVENT, SDL_QUIT, SDL_QUIT) > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_sizes() {
        // Ensure structs have expected sizes for FFI compatibility
        assert_eq!(std::mem::size_of::<SDL_Rect>(), 16);
        assert_eq!(std::mem::size_of::<SDL_FRect>(), 16);
        assert_eq!(std::mem::size_of::<SDL_Point>(), 8);
        assert_eq!(std::mem::size_of::<SDL_Color>(), 4);
        assert_eq!(std::mem::size_of::<SDL_RendererInfo>(), 88 + std::mem::size_of::<usize>() - 8);
    }

    #[test]
    fn test_pixel_format_values() {
        assert_eq!(SDL_PIXELFORMAT_ARGB8888, 0x1636_2004);
        assert_eq!(SDL_PIXELFORMAT_RGBA8888, 0x1646_2004);
        assert_eq!(SDL_PIXELFORMAT_RGB888, 0x1616_1804);
        assert_eq!(SDL_PIXELFORMAT_RGB565, 0x1515_1002);
        assert_eq!(SDL_PIXELFORMAT_RGB24, 0x1710_1803);
        assert_eq!(SDL_PIXELFORMAT_INDEX8, 0x1300_0801);
        assert_eq!(SDL_PIXELFORMAT_YV12, 0x3231_5659);
        assert_eq!(SDL_PIXELFORMAT_IYUV, 0x5655_5949);
    }

    #[test]
    fn test_format_macros() {
        assert_eq!(SDL_BITSPERPIXEL(SDL_PIXELFORMAT_ARGB8888), 32);
        assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_RGB24), 3);
        assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_YUY2), 2);
        assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_YV12), 1);
        assert!(SDL_ISPIXELFORMAT_FOURCC(SDL_PIXELFORMAT_NV12));
        assert!(!SDL_ISPIXELFORMAT_FOURCC(SDL_PIXELFORMAT_RGB565));
        assert!(!SDL_ISPIXELFORMAT_FOURCC(SDL_PIXELFORMAT_UNKNOWN));
    }
}
