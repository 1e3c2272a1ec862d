//! OpenGL support: library loading, context attributes and contexts

use std::ffi::c_void;
use std::ops::BitOr;
use std::os::raw::c_int;
use std::path::Path;

use crate::error::{check, create, to_cstring, Error, Result};
use crate::rect::Size;
use crate::render::Texture;
use crate::surface::path_to_cstring;
use crate::video::Window;

/// Attributes to request before creating a window or context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlAttr {
    RedSize,
    GreenSize,
    BlueSize,
    AlphaSize,
    BufferSize,
    DoubleBuffer,
    DepthSize,
    StencilSize,
    AccumRedSize,
    AccumGreenSize,
    AccumBlueSize,
    AccumAlphaSize,
    Stereo,
    MultisampleBuffers,
    MultisampleSamples,
    AcceleratedVisual,
    RetainedBacking,
    ContextMajorVersion,
    ContextMinorVersion,
    ContextEgl,
    ContextFlags,
    ContextProfileMask,
    ShareWithCurrentContext,
    FramebufferSrgbCapable,
    ContextReleaseBehavior,
    ContextResetNotification,
    ContextNoError,
}

impl From<GlAttr> for sdlpp_sys::SDL_GLattr {
    fn from(attr: GlAttr) -> Self {
        use sdlpp_sys::*;
        match attr {
            GlAttr::RedSize => SDL_GL_RED_SIZE,
            GlAttr::GreenSize => SDL_GL_GREEN_SIZE,
            GlAttr::BlueSize => SDL_GL_BLUE_SIZE,
            GlAttr::AlphaSize => SDL_GL_ALPHA_SIZE,
            GlAttr::BufferSize => SDL_GL_BUFFER_SIZE,
            GlAttr::DoubleBuffer => SDL_GL_DOUBLEBUFFER,
            GlAttr::DepthSize => SDL_GL_DEPTH_SIZE,
            GlAttr::StencilSize => SDL_GL_STENCIL_SIZE,
            GlAttr::AccumRedSize => SDL_GL_ACCUM_RED_SIZE,
            GlAttr::AccumGreenSize => SDL_GL_ACCUM_GREEN_SIZE,
            GlAttr::AccumBlueSize => SDL_GL_ACCUM_BLUE_SIZE,
            GlAttr::AccumAlphaSize => SDL_GL_ACCUM_ALPHA_SIZE,
            GlAttr::Stereo => SDL_GL_STEREO,
            GlAttr::MultisampleBuffers => SDL_GL_MULTISAMPLEBUFFERS,
            GlAttr::MultisampleSamples => SDL_GL_MULTISAMPLESAMPLES,
            GlAttr::AcceleratedVisual => SDL_GL_ACCELERATED_VISUAL,
            GlAttr::RetainedBacking => SDL_GL_RETAINED_BACKING,
            GlAttr::ContextMajorVersion => SDL_GL_CONTEXT_MAJOR_VERSION,
            GlAttr::ContextMinorVersion => SDL_GL_CONTEXT_MINOR_VERSION,
            GlAttr::ContextEgl => SDL_GL_CONTEXT_EGL,
            GlAttr::ContextFlags => SDL_GL_CONTEXT_FLAGS,
            GlAttr::ContextProfileMask => SDL_GL_CONTEXT_PROFILE_MASK,
            GlAttr::ShareWithCurrentContext => SDL_GL_SHARE_WITH_CURRENT_CONTEXT,
            GlAttr::FramebufferSrgbCapable => SDL_GL_FRAMEBUFFER_SRGB_CAPABLE,
            GlAttr::ContextReleaseBehavior => SDL_GL_CONTEXT_RELEASE_BEHAVIOR,
            GlAttr::ContextResetNotification => SDL_GL_CONTEXT_RESET_NOTIFICATION,
            GlAttr::ContextNoError => SDL_GL_CONTEXT_NO_ERROR,
        }
    }
}

/// Value of `GlAttr::ContextProfileMask`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlProfile {
    Core,
    Compatibility,
    Es,
}

impl From<GlProfile> for c_int {
    fn from(profile: GlProfile) -> Self {
        match profile {
            GlProfile::Core => sdlpp_sys::SDL_GL_CONTEXT_PROFILE_CORE,
            GlProfile::Compatibility => sdlpp_sys::SDL_GL_CONTEXT_PROFILE_COMPATIBILITY,
            GlProfile::Es => sdlpp_sys::SDL_GL_CONTEXT_PROFILE_ES,
        }
    }
}

/// Value of `GlAttr::ContextFlags`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GlContextFlags(pub c_int);

impl GlContextFlags {
    pub const NONE: Self = Self(0);
    pub const DEBUG: Self = Self(sdlpp_sys::SDL_GL_CONTEXT_DEBUG_FLAG);
    pub const FORWARD_COMPATIBLE: Self = Self(sdlpp_sys::SDL_GL_CONTEXT_FORWARD_COMPATIBLE_FLAG);
    pub const ROBUST_ACCESS: Self = Self(sdlpp_sys::SDL_GL_CONTEXT_ROBUST_ACCESS_FLAG);
    pub const RESET_ISOLATION: Self = Self(sdlpp_sys::SDL_GL_CONTEXT_RESET_ISOLATION_FLAG);
}

impl BitOr for GlContextFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Buffer swap synchronisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapInterval {
    Immediate,
    VSync,
    /// Late swaps happen immediately instead of waiting for the next retrace
    Adaptive,
}

impl From<SwapInterval> for c_int {
    fn from(interval: SwapInterval) -> Self {
        match interval {
            SwapInterval::Immediate => 0,
            SwapInterval::VSync => 1,
            SwapInterval::Adaptive => -1,
        }
    }
}

impl TryFrom<c_int> for SwapInterval {
    type Error = Error;

    fn try_from(raw: c_int) -> Result<Self> {
        match raw {
            0 => Ok(SwapInterval::Immediate),
            1 => Ok(SwapInterval::VSync),
            -1 => Ok(SwapInterval::Adaptive),
            other => Err(Error::UnknownValue { kind: "swap interval", value: other as i64 }),
        }
    }
}

// =============================================================================
// Library and attributes
// =============================================================================

/// Dynamically load an OpenGL library, `None` for the default
///
/// Must be called after video is initialised and before any OpenGL
/// window is created.
pub fn load_library(path: Option<&Path>) -> Result<()> {
    let c_path = path.map(path_to_cstring).transpose()?;
    let ptr = c_path.as_ref().map_or(std::ptr::null(), |p| p.as_ptr());
    check(unsafe { sdlpp_sys::SDL_GL_LoadLibrary(ptr) })
}

/// Unload the library loaded by `load_library`
pub fn unload_library() {
    unsafe { sdlpp_sys::SDL_GL_UnloadLibrary() }
}

/// Get the address of an OpenGL function
///
/// The address may be valid even for functions the current context does
/// not support; check versions and extensions first.
pub fn proc_address(name: &str) -> Option<*const c_void> {
    let c_name = to_cstring(name).ok()?;
    let ptr = unsafe { sdlpp_sys::SDL_GL_GetProcAddress(c_name.as_ptr()) };
    (!ptr.is_null()).then_some(ptr as *const c_void)
}

/// Check whether an extension is supported by the current context
pub fn extension_supported(extension: &str) -> bool {
    match to_cstring(extension) {
        Ok(c_ext) => unsafe { sdlpp_sys::SDL_GL_ExtensionSupported(c_ext.as_ptr()) == sdlpp_sys::SDL_TRUE },
        Err(_) => false,
    }
}

/// Reset all attributes to their defaults
pub fn reset_attributes() {
    unsafe { sdlpp_sys::SDL_GL_ResetAttributes() }
}

/// Set an attribute for the next context
pub fn set_attribute(attr: GlAttr, value: i32) -> Result<()> {
    check(unsafe { sdlpp_sys::SDL_GL_SetAttribute(attr.into(), value) })
}

/// Get the actual value of an attribute for the current context
pub fn attribute(attr: GlAttr) -> Result<i32> {
    let mut value = 0;
    check(unsafe { sdlpp_sys::SDL_GL_GetAttribute(attr.into(), &mut value) })?;
    Ok(value)
}

/// Request a context version and profile
pub fn set_context_version(major: i32, minor: i32, profile: GlProfile) -> Result<()> {
    set_attribute(GlAttr::ContextMajorVersion, major)?;
    set_attribute(GlAttr::ContextMinorVersion, minor)?;
    set_attribute(GlAttr::ContextProfileMask, profile.into())
}

/// Set the flags requested for contexts created afterwards
pub fn set_context_flags(flags: GlContextFlags) -> Result<()> {
    set_attribute(GlAttr::ContextFlags, flags.0)
}

// =============================================================================
// Contexts
// =============================================================================

/// An OpenGL context (`SDL_GLContext`), deleted on drop
pub struct GlContext {
    raw: sdlpp_sys::SDL_GLContext,
}

impl GlContext {
    /// Create a context for an OpenGL window and make it current
    pub fn new(window: &Window) -> Result<Self> {
        let raw = create("GL context", || unsafe { sdlpp_sys::SDL_GL_CreateContext(window.as_raw()) })?;
        log::debug!("created GL context {:p} for window {}", raw, window.id());
        Ok(Self { raw })
    }

    /// True if this is the calling thread's current context
    pub fn is_current(&self) -> bool {
        current_context_raw() == self.raw
    }

    pub fn as_raw(&self) -> sdlpp_sys::SDL_GLContext {
        self.raw
    }
}

impl Drop for GlContext {
    fn drop(&mut self) {
        log::debug!("deleting GL context {:p}", self.raw);
        unsafe { sdlpp_sys::SDL_GL_DeleteContext(self.raw) };
    }
}

impl std::fmt::Debug for GlContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlContext").field("raw", &self.raw).finish()
    }
}

/// Bind a context to a window, or release the current one with `None`
pub fn make_current(window: &Window, context: Option<&GlContext>) -> Result<()> {
    let raw = context.map_or(std::ptr::null_mut(), GlContext::as_raw);
    check(unsafe { sdlpp_sys::SDL_GL_MakeCurrent(window.as_raw(), raw) })
}

/// The ID of the window the current context is bound to
pub fn current_window_id() -> Option<u32> {
    let window = unsafe { sdlpp_sys::SDL_GL_GetCurrentWindow() };
    (!window.is_null()).then(|| unsafe { sdlpp_sys::SDL_GetWindowID(window) })
}

/// The window the current context is bound to (non-owning)
///
/// # Safety
///
/// The handle aliases a window owned elsewhere and must not be used after
/// that window is destroyed.
pub unsafe fn current_window() -> Option<Window> {
    Window::from_raw(sdlpp_sys::SDL_GL_GetCurrentWindow(), false)
}

/// The calling thread's current context, NULL if none
pub fn current_context_raw() -> sdlpp_sys::SDL_GLContext {
    unsafe { sdlpp_sys::SDL_GL_GetCurrentContext() }
}

/// Size of the window's underlying drawable in pixels
///
/// May differ from `Window::size` on high-DPI displays.
pub fn drawable_size(window: &Window) -> Size {
    let (mut w, mut h) = (0, 0);
    unsafe { sdlpp_sys::SDL_GL_GetDrawableSize(window.as_raw(), &mut w, &mut h) };
    Size::from_c(w, h)
}

/// Set the swap interval for the current context
pub fn set_swap_interval(interval: SwapInterval) -> Result<()> {
    check(unsafe { sdlpp_sys::SDL_GL_SetSwapInterval(interval.into()) })
}

/// The swap interval of the current context
pub fn swap_interval() -> Result<SwapInterval> {
    SwapInterval::try_from(unsafe { sdlpp_sys::SDL_GL_GetSwapInterval() })
}

/// Swap the buffers of an OpenGL window
pub fn swap_window(window: &Window) {
    unsafe { sdlpp_sys::SDL_GL_SwapWindow(window.as_raw()) }
}

/// Bind a texture to the current context
///
/// Returns the texture coordinates of the bottom right corner, which are
/// not always 1.0.
pub fn bind_texture(texture: &Texture<'_>) -> Result<(f32, f32)> {
    let (mut w, mut h) = (0.0, 0.0);
    check(unsafe { sdlpp_sys::SDL_GL_BindTexture(texture.as_raw(), &mut w, &mut h) })?;
    Ok((w, h))
}

/// Release a texture bound with `bind_texture`
pub fn unbind_texture(texture: &Texture<'_>) -> Result<()> {
    check(unsafe { sdlpp_sys::SDL_GL_UnbindTexture(texture.as_raw()) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::PixelFormatEnum;
    use crate::render::{Renderer, TextureAccess};
    use crate::surface::Surface;
    use crate::video::tests::with_dummy_video;
    use crate::video::WindowFlags;

    #[test]
    fn test_swap_interval_values() {
        assert_eq!(c_int::from(SwapInterval::Adaptive), -1);
        assert_eq!(SwapInterval::try_from(1), Ok(SwapInterval::VSync));
        assert!(SwapInterval::try_from(5).is_err());
    }

    #[test]
    fn test_context_flags_combine() {
        let flags = GlContextFlags::DEBUG | GlContextFlags::FORWARD_COMPATIBLE;
        assert_eq!(flags.0, 0x3);
        assert_eq!(c_int::from(GlProfile::Es), 0x4);
    }

    #[test]
    fn test_attributes_round_trip() {
        with_dummy_video(|| {
            set_context_version(3, 2, GlProfile::Core).unwrap();
            set_context_flags(GlContextFlags::FORWARD_COMPATIBLE).unwrap();
            assert_eq!(attribute(GlAttr::ContextMajorVersion).unwrap(), 3);
            assert_eq!(attribute(GlAttr::ContextMinorVersion).unwrap(), 2);
            assert_eq!(attribute(GlAttr::ContextProfileMask).unwrap(), 0x1);
            assert_eq!(attribute(GlAttr::ContextFlags).unwrap(), 0x2);

            reset_attributes();
            assert_eq!(attribute(GlAttr::ContextFlags).unwrap(), 0);
        });
    }

    #[test]
    fn test_context_requires_opengl_window() {
        with_dummy_video(|| {
            let window = Window::new_centered("no gl", Size::new(8, 8), WindowFlags::HIDDEN).unwrap();
            assert!(GlContext::new(&window).is_err());
            assert!(unsafe { current_window() }.is_none());
            assert_eq!(current_window_id(), None);
            assert!(current_context_raw().is_null());
        });
    }

    #[test]
    fn test_bind_texture_fails_off_gl_renderer() {
        let mut surface = Surface::new(4, 4, PixelFormatEnum::ARGB8888).unwrap();
        let renderer = Renderer::software(&mut surface).unwrap();
        let texture =
            crate::render::Texture::new(&renderer, PixelFormatEnum::ARGB8888, TextureAccess::Static, Size::new(2, 2))
                .unwrap();
        assert!(bind_texture(&texture).is_err());
        assert!(unbind_texture(&texture).is_err());
    }

    #[test]
    fn test_extension_name_with_nul() {
        assert!(!extension_supported("GL_ARB\0bad"));
        assert!(proc_address("gl\0Clear").is_none());
    }
}
