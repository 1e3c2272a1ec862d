//! Video drivers, displays and windows

use std::ffi::c_void;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::os::raw::c_int;
use std::panic::AssertUnwindSafe;

use sdlpp_sys::SDL_DisplayMode;

use crate::error::{check, create, from_cstr, to_count, to_cstring, Error, Result};
use crate::pixels::PixelFormatEnum;
use crate::rect::{Point, Rect, Size};
use crate::render::Renderer;
use crate::surface::Surface;

// =============================================================================
// Drivers
// =============================================================================

/// Get the number of video drivers compiled into SDL
pub fn num_video_drivers() -> usize {
    unsafe { sdlpp_sys::SDL_GetNumVideoDrivers() }.max(0) as usize
}

/// Get the name of a built in video driver
///
/// Drivers are listed in the order they are normally tried during
/// initialisation.
pub fn video_driver(index: usize) -> Option<String> {
    let index = c_int::try_from(index).ok()?;
    from_cstr(unsafe { sdlpp_sys::SDL_GetVideoDriver(index) })
}

/// Get the names of all built in video drivers
pub fn video_drivers() -> Vec<String> {
    (0..num_video_drivers()).filter_map(video_driver).collect()
}

/// Initialise the video subsystem, optionally with a specific driver
///
/// This connects to the window manager and determines the available
/// display modes, but does not create a window.
pub fn video_init(driver: Option<&str>) -> Result<()> {
    let c_driver = driver.map(to_cstring).transpose()?;
    let driver_ptr = c_driver.as_ref().map_or(std::ptr::null(), |d| d.as_ptr());
    check(unsafe { sdlpp_sys::SDL_VideoInit(driver_ptr) })?;
    log::debug!("video initialised with driver {:?}", current_video_driver());
    Ok(())
}

/// Shut down the video subsystem, closing all windows
pub fn video_quit() {
    unsafe { sdlpp_sys::SDL_VideoQuit() }
}

/// The name of the currently initialised video driver
pub fn current_video_driver() -> Option<String> {
    from_cstr(unsafe { sdlpp_sys::SDL_GetCurrentVideoDriver() })
}

/// The video subsystem, initialised for as long as this guard lives
#[derive(Debug)]
pub struct VideoSubsystem {
    driver: String,
}

impl VideoSubsystem {
    /// Initialise video, optionally forcing a driver by name
    pub fn init(driver: Option<&str>) -> Result<Self> {
        video_init(driver)?;
        Ok(Self {
            driver: current_video_driver().unwrap_or_default(),
        })
    }

    /// Name of the driver that was brought up
    pub fn driver(&self) -> &str {
        &self.driver
    }
}

impl Drop for VideoSubsystem {
    fn drop(&mut self) {
        log::debug!("shutting down video driver {}", self.driver);
        video_quit();
    }
}

/// Set a configuration hint, returns false if it was overridden elsewhere
pub fn set_hint(name: &str, value: &str) -> Result<bool> {
    let c_name = to_cstring(name)?;
    let c_value = to_cstring(value)?;
    Ok(unsafe { sdlpp_sys::SDL_SetHint(c_name.as_ptr(), c_value.as_ptr()) } == sdlpp_sys::SDL_TRUE)
}

/// Get the value of a configuration hint
pub fn hint(name: &str) -> Option<String> {
    let c_name = to_cstring(name).ok()?;
    from_cstr(unsafe { sdlpp_sys::SDL_GetHint(c_name.as_ptr()) })
}

/// Gather pending input from devices into the event queue
pub fn pump_events() {
    unsafe { sdlpp_sys::SDL_PumpEvents() }
}

/// Pump events and report whether a quit has been requested
pub fn quit_requested() -> bool {
    unsafe { sdlpp_sys::SDL_QuitRequested() }
}

// =============================================================================
// Screen saver
// =============================================================================

/// Returns whether the screensaver is currently enabled (default off)
pub fn is_screen_saver_enabled() -> bool {
    unsafe { sdlpp_sys::SDL_IsScreenSaverEnabled() == sdlpp_sys::SDL_TRUE }
}

/// Allow the screen to be blanked by a screensaver
pub fn enable_screen_saver() {
    unsafe { sdlpp_sys::SDL_EnableScreenSaver() }
}

/// Prevent the screen from being blanked by a screensaver
pub fn disable_screen_saver() {
    unsafe { sdlpp_sys::SDL_DisableScreenSaver() }
}

// =============================================================================
// Displays
// =============================================================================

/// A display mode description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    pub format: PixelFormatEnum,
    pub w: i32,
    pub h: i32,
    /// Refresh rate in Hz, 0 if unspecified
    pub refresh_rate: i32,
}

impl DisplayMode {
    pub fn new(format: PixelFormatEnum, w: i32, h: i32, refresh_rate: i32) -> Self {
        Self { format, w, h, refresh_rate }
    }

    fn to_raw(self) -> SDL_DisplayMode {
        SDL_DisplayMode {
            format: self.format.0,
            w: self.w,
            h: self.h,
            refresh_rate: self.refresh_rate,
            driverdata: std::ptr::null_mut(),
        }
    }
}

impl From<SDL_DisplayMode> for DisplayMode {
    fn from(mode: SDL_DisplayMode) -> Self {
        Self::new(PixelFormatEnum(mode.format), mode.w, mode.h, mode.refresh_rate)
    }
}

/// Physical orientation of a display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Unknown,
    Landscape,
    LandscapeFlipped,
    Portrait,
    PortraitFlipped,
}

impl From<sdlpp_sys::SDL_DisplayOrientation> for Orientation {
    fn from(raw: sdlpp_sys::SDL_DisplayOrientation) -> Self {
        match raw {
            sdlpp_sys::SDL_ORIENTATION_LANDSCAPE => Orientation::Landscape,
            sdlpp_sys::SDL_ORIENTATION_LANDSCAPE_FLIPPED => Orientation::LandscapeFlipped,
            sdlpp_sys::SDL_ORIENTATION_PORTRAIT => Orientation::Portrait,
            sdlpp_sys::SDL_ORIENTATION_PORTRAIT_FLIPPED => Orientation::PortraitFlipped,
            _ => Orientation::Unknown,
        }
    }
}

/// Dots per inch of a display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dpi {
    pub diagonal: f32,
    pub horizontal: f32,
    pub vertical: f32,
}

/// A video display, identified by index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Display {
    pub index: i32,
}

impl Display {
    pub fn new(index: i32) -> Self {
        Self { index }
    }

    /// Returns the number of available video displays
    pub fn count() -> Result<usize> {
        let count = unsafe { sdlpp_sys::SDL_GetNumVideoDisplays() };
        check(count)?;
        Ok(count as usize)
    }

    /// All available displays
    pub fn all() -> Result<Vec<Display>> {
        Ok((0..Self::count()? as i32).map(Display::new).collect())
    }

    /// Get the name of the display, `None` for an invalid index
    pub fn name(&self) -> Option<String> {
        from_cstr(unsafe { sdlpp_sys::SDL_GetDisplayName(self.index) })
    }

    /// The desktop area of the display, with the primary display at 0,0
    pub fn bounds(&self) -> Result<Rect> {
        let mut rect = Rect::default();
        check(unsafe { sdlpp_sys::SDL_GetDisplayBounds(self.index, rect.as_raw_mut()) })?;
        Ok(rect)
    }

    /// The desktop area minus portions reserved by the system (menu bars, docks)
    pub fn usable_bounds(&self) -> Result<Rect> {
        let mut rect = Rect::default();
        check(unsafe { sdlpp_sys::SDL_GetDisplayUsableBounds(self.index, rect.as_raw_mut()) })?;
        Ok(rect)
    }

    /// Get the dots/pixels-per-inch of the display
    pub fn dpi(&self) -> Result<Dpi> {
        let mut dpi = Dpi { diagonal: 0.0, horizontal: 0.0, vertical: 0.0 };
        check(unsafe {
            sdlpp_sys::SDL_GetDisplayDPI(self.index, &mut dpi.diagonal, &mut dpi.horizontal, &mut dpi.vertical)
        })?;
        Ok(dpi)
    }

    /// How the display is rotated
    pub fn orientation(&self) -> Orientation {
        unsafe { sdlpp_sys::SDL_GetDisplayOrientation(self.index) }.into()
    }

    /// Returns the number of available display modes
    pub fn num_modes(&self) -> Result<usize> {
        let count = unsafe { sdlpp_sys::SDL_GetNumDisplayModes(self.index) };
        check(count)?;
        Ok(count as usize)
    }

    /// Get a display mode by index
    ///
    /// Modes are sorted by bits per pixel, then width, height and refresh
    /// rate, largest first.
    pub fn mode(&self, mode_index: usize) -> Result<DisplayMode> {
        let mut mode = SDL_DisplayMode::default();
        check(unsafe { sdlpp_sys::SDL_GetDisplayMode(self.index, to_count(mode_index)?, &mut mode) })?;
        Ok(mode.into())
    }

    /// All display modes, in SDL's order
    pub fn modes(&self) -> Result<Vec<DisplayMode>> {
        (0..self.num_modes()?).map(|i| self.mode(i)).collect()
    }

    /// The mode of the desktop, regardless of any fullscreen window
    pub fn desktop_mode(&self) -> Result<DisplayMode> {
        let mut mode = SDL_DisplayMode::default();
        check(unsafe { sdlpp_sys::SDL_GetDesktopDisplayMode(self.index, &mut mode) })?;
        Ok(mode.into())
    }

    /// The mode the display is in now
    pub fn current_mode(&self) -> Result<DisplayMode> {
        let mut mode = SDL_DisplayMode::default();
        check(unsafe { sdlpp_sys::SDL_GetCurrentDisplayMode(self.index, &mut mode) })?;
        Ok(mode.into())
    }

    /// Get the available mode closest to `wanted`
    ///
    /// A zero format or refresh rate defaults to the desktop mode's. Returns
    /// `None` if every mode is too small.
    pub fn closest_mode(&self, wanted: &DisplayMode) -> Option<DisplayMode> {
        let raw = wanted.to_raw();
        let mut closest = SDL_DisplayMode::default();
        let found = unsafe { sdlpp_sys::SDL_GetClosestDisplayMode(self.index, &raw, &mut closest) };
        if found.is_null() {
            None
        } else {
            Some(closest.into())
        }
    }
}

// =============================================================================
// Window flags and positions
// =============================================================================

/// The flags on a window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowFlags(pub u32);

impl WindowFlags {
    pub const NONE: Self = Self(0);
    pub const FULLSCREEN: Self = Self(sdlpp_sys::SDL_WINDOW_FULLSCREEN);
    pub const FULLSCREEN_DESKTOP: Self = Self(sdlpp_sys::SDL_WINDOW_FULLSCREEN_DESKTOP);
    pub const OPENGL: Self = Self(sdlpp_sys::SDL_WINDOW_OPENGL);
    pub const VULKAN: Self = Self(sdlpp_sys::SDL_WINDOW_VULKAN);
    pub const METAL: Self = Self(sdlpp_sys::SDL_WINDOW_METAL);
    pub const SHOWN: Self = Self(sdlpp_sys::SDL_WINDOW_SHOWN);
    pub const HIDDEN: Self = Self(sdlpp_sys::SDL_WINDOW_HIDDEN);
    pub const BORDERLESS: Self = Self(sdlpp_sys::SDL_WINDOW_BORDERLESS);
    pub const RESIZABLE: Self = Self(sdlpp_sys::SDL_WINDOW_RESIZABLE);
    pub const MINIMIZED: Self = Self(sdlpp_sys::SDL_WINDOW_MINIMIZED);
    pub const MAXIMIZED: Self = Self(sdlpp_sys::SDL_WINDOW_MAXIMIZED);
    pub const INPUT_GRABBED: Self = Self(sdlpp_sys::SDL_WINDOW_INPUT_GRABBED);
    pub const INPUT_FOCUS: Self = Self(sdlpp_sys::SDL_WINDOW_INPUT_FOCUS);
    pub const MOUSE_FOCUS: Self = Self(sdlpp_sys::SDL_WINDOW_MOUSE_FOCUS);
    pub const FOREIGN: Self = Self(sdlpp_sys::SDL_WINDOW_FOREIGN);
    pub const ALLOW_HIGHDPI: Self = Self(sdlpp_sys::SDL_WINDOW_ALLOW_HIGHDPI);
    pub const MOUSE_CAPTURE: Self = Self(sdlpp_sys::SDL_WINDOW_MOUSE_CAPTURE);
    pub const ALWAYS_ON_TOP: Self = Self(sdlpp_sys::SDL_WINDOW_ALWAYS_ON_TOP);
    pub const SKIP_TASKBAR: Self = Self(sdlpp_sys::SDL_WINDOW_SKIP_TASKBAR);
    pub const UTILITY: Self = Self(sdlpp_sys::SDL_WINDOW_UTILITY);
    pub const TOOLTIP: Self = Self(sdlpp_sys::SDL_WINDOW_TOOLTIP);
    pub const POPUP_MENU: Self = Self(sdlpp_sys::SDL_WINDOW_POPUP_MENU);

    /// True if every bit of `other` is set
    pub fn contains(self, other: WindowFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for WindowFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for WindowFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for WindowFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// A window coordinate on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPos {
    /// Let the window manager decide
    Undefined,
    /// Centre on the primary display
    Centered,
    At(i32),
}

impl WindowPos {
    pub(crate) fn to_raw(self) -> c_int {
        match self {
            WindowPos::Undefined => sdlpp_sys::SDL_WINDOWPOS_UNDEFINED,
            WindowPos::Centered => sdlpp_sys::SDL_WINDOWPOS_CENTERED,
            WindowPos::At(v) => v,
        }
    }
}

impl From<i32> for WindowPos {
    fn from(v: i32) -> Self {
        WindowPos::At(v)
    }
}

/// Fullscreen state for `Window::set_fullscreen`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenMode {
    Windowed,
    /// Real fullscreen with a video mode change
    Fullscreen,
    /// Fullscreen at the desktop resolution
    Desktop,
}

impl FullscreenMode {
    fn to_raw(self) -> u32 {
        match self {
            FullscreenMode::Windowed => 0,
            FullscreenMode::Fullscreen => sdlpp_sys::SDL_WINDOW_FULLSCREEN,
            FullscreenMode::Desktop => sdlpp_sys::SDL_WINDOW_FULLSCREEN_DESKTOP,
        }
    }
}

/// Size of the window decorations around the client area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BordersSize {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

/// Per-channel gamma translation tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GammaRamp {
    pub red: [u16; 256],
    pub green: [u16; 256],
    pub blue: [u16; 256],
}

// =============================================================================
// Hit testing
// =============================================================================

/// Where a point of a borderless window acts like window decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTestResult {
    /// No special behaviour
    Normal,
    /// Dragging moves the window
    Draggable,
    ResizeTopLeft,
    ResizeTop,
    ResizeTopRight,
    ResizeRight,
    ResizeBottomRight,
    ResizeBottom,
    ResizeBottomLeft,
    ResizeLeft,
}

impl From<HitTestResult> for sdlpp_sys::SDL_HitTestResult {
    fn from(result: HitTestResult) -> Self {
        match result {
            HitTestResult::Normal => sdlpp_sys::SDL_HITTEST_NORMAL,
            HitTestResult::Draggable => sdlpp_sys::SDL_HITTEST_DRAGGABLE,
            HitTestResult::ResizeTopLeft => sdlpp_sys::SDL_HITTEST_RESIZE_TOPLEFT,
            HitTestResult::ResizeTop => sdlpp_sys::SDL_HITTEST_RESIZE_TOP,
            HitTestResult::ResizeTopRight => sdlpp_sys::SDL_HITTEST_RESIZE_TOPRIGHT,
            HitTestResult::ResizeRight => sdlpp_sys::SDL_HITTEST_RESIZE_RIGHT,
            HitTestResult::ResizeBottomRight => sdlpp_sys::SDL_HITTEST_RESIZE_BOTTOMRIGHT,
            HitTestResult::ResizeBottom => sdlpp_sys::SDL_HITTEST_RESIZE_BOTTOM,
            HitTestResult::ResizeBottomLeft => sdlpp_sys::SDL_HITTEST_RESIZE_BOTTOMLEFT,
            HitTestResult::ResizeLeft => sdlpp_sys::SDL_HITTEST_RESIZE_LEFT,
        }
    }
}

type HitTestCallback = Box<dyn FnMut(Point) -> HitTestResult>;

/// Calls the callback `data` points at
///
/// `data` must point to a live `HitTestCallback` and `area` to a point.
unsafe extern "C" fn hit_test_trampoline(
    _window: *mut sdlpp_sys::SDL_Window,
    area: *const sdlpp_sys::SDL_Point,
    data: *mut c_void,
) -> sdlpp_sys::SDL_HitTestResult {
    let callback = &mut *(data as *mut HitTestCallback);
    let point = Point::new((*area).x, (*area).y);
    // unwinding into C is undefined
    match std::panic::catch_unwind(AssertUnwindSafe(|| callback(point))) {
        Ok(result) => result.into(),
        Err(_) => {
            log::error!("hit test callback panicked at {:?}", point);
            sdlpp_sys::SDL_HITTEST_NORMAL
        }
    }
}

// =============================================================================
// Window
// =============================================================================

/// A window (`SDL_Window`)
///
/// Windows created through this type own their handle and destroy it on
/// drop. The unsafe lookups (`from_id`, `grabbed`, the current GL window)
/// return non-owning handles to windows owned elsewhere.
pub struct Window {
    ptr: *mut sdlpp_sys::SDL_Window,
    owned: bool,
    // set when the window came with a renderer from `create_window_and_renderer`
    owns_renderer: bool,
    // registered with SDL until replaced or the window is destroyed
    hit_test: Option<Box<HitTestCallback>>,
}

impl Window {
    /// Create a window with the specified position, dimensions and flags
    ///
    /// With `ALLOW_HIGHDPI` the size in pixels may differ from the size in
    /// screen coordinates; query the drawable size from the renderer or GL.
    pub fn new(title: &str, x: WindowPos, y: WindowPos, size: Size, flags: WindowFlags) -> Result<Self> {
        let c_title = to_cstring(title)?;
        let (w, h) = size.to_c();
        let ptr = create("window", || unsafe {
            sdlpp_sys::SDL_CreateWindow(c_title.as_ptr(), x.to_raw(), y.to_raw(), w, h, flags.0)
        })?;
        log::debug!("created window {:p} {:?} {}x{}", ptr, title, w, h);
        Ok(Self { ptr, owned: true, owns_renderer: false, hit_test: None })
    }

    /// Create a window covering `shape`
    pub fn with_rect(title: &str, shape: Rect, flags: WindowFlags) -> Result<Self> {
        Self::new(title, WindowPos::At(shape.x), WindowPos::At(shape.y), shape.size(), flags)
    }

    /// Create a window centred on the primary display
    pub fn new_centered(title: &str, size: Size, flags: WindowFlags) -> Result<Self> {
        Self::new(title, WindowPos::Centered, WindowPos::Centered, size, flags)
    }

    /// Create an owning window from an existing native window
    ///
    /// # Safety
    ///
    /// `data` must be a valid driver-dependent native window handle.
    pub unsafe fn from_native(data: *const std::ffi::c_void) -> Result<Self> {
        let ptr = create("window", || sdlpp_sys::SDL_CreateWindowFrom(data))?;
        Ok(Self { ptr, owned: true, owns_renderer: false, hit_test: None })
    }

    /// Wrap a raw window pointer
    ///
    /// # Safety
    ///
    /// `ptr` must be a valid window. If `owned` is true it is destroyed on
    /// drop; otherwise it must outlive the returned handle.
    pub unsafe fn from_raw(ptr: *mut sdlpp_sys::SDL_Window, owned: bool) -> Option<Self> {
        if ptr.is_null() {
            None
        } else {
            Some(Self { ptr, owned, owns_renderer: false, hit_test: None })
        }
    }

    /// Take ownership of a window together with its attached renderer
    pub(crate) fn with_renderer(ptr: *mut sdlpp_sys::SDL_Window) -> Self {
        Self { ptr, owned: true, owns_renderer: true, hit_test: None }
    }

    /// Look up a window by its numeric ID (non-owning)
    ///
    /// # Safety
    ///
    /// The handle aliases a window owned elsewhere and must not be used
    /// after that window is destroyed.
    pub unsafe fn from_id(id: u32) -> Option<Self> {
        Self::from_raw(sdlpp_sys::SDL_GetWindowFromID(id), false)
    }

    /// The window that currently has an input grab enabled (non-owning)
    ///
    /// # Safety
    ///
    /// As for [`Window::from_id`], the handle must not outlive the window.
    pub unsafe fn grabbed() -> Option<Self> {
        Self::from_raw(sdlpp_sys::SDL_GetGrabbedWindow(), false)
    }

    /// True if this handle destroys the window when dropped
    pub fn is_owned(&self) -> bool {
        self.owned
    }

    /// The display containing the centre of the window
    pub fn display(&self) -> Result<Display> {
        let index = unsafe { sdlpp_sys::SDL_GetWindowDisplayIndex(self.ptr) };
        check(index)?;
        Ok(Display::new(index))
    }

    /// Set the mode used when the window is fullscreen and visible
    ///
    /// `None` restores the default (window size, desktop format and rate).
    pub fn set_display_mode(&mut self, mode: Option<DisplayMode>) -> Result<()> {
        let raw = mode.map(DisplayMode::to_raw);
        let ptr = raw.as_ref().map_or(std::ptr::null(), |m| m as *const SDL_DisplayMode);
        check(unsafe { sdlpp_sys::SDL_SetWindowDisplayMode(self.ptr, ptr) })
    }

    /// The mode used when the window is fullscreen and visible
    pub fn display_mode(&self) -> Result<DisplayMode> {
        let mut mode = SDL_DisplayMode::default();
        check(unsafe { sdlpp_sys::SDL_GetWindowDisplayMode(self.ptr, &mut mode) })?;
        Ok(mode.into())
    }

    /// The pixel format of the window's framebuffer
    pub fn pixel_format(&self) -> PixelFormatEnum {
        PixelFormatEnum(unsafe { sdlpp_sys::SDL_GetWindowPixelFormat(self.ptr) })
    }

    /// The numeric ID of the window
    pub fn id(&self) -> u32 {
        unsafe { sdlpp_sys::SDL_GetWindowID(self.ptr) }
    }

    /// The window's current state flags
    pub fn flags(&self) -> WindowFlags {
        WindowFlags(unsafe { sdlpp_sys::SDL_GetWindowFlags(self.ptr) })
    }

    /// Set the title; fails for titles containing NUL
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        let c_title = to_cstring(title)?;
        unsafe { sdlpp_sys::SDL_SetWindowTitle(self.ptr, c_title.as_ptr()) };
        Ok(())
    }

    /// The title, empty if none was set
    pub fn title(&self) -> String {
        from_cstr(unsafe { sdlpp_sys::SDL_GetWindowTitle(self.ptr) }).unwrap_or_default()
    }

    /// Set the icon; SDL keeps its own copy of the surface
    pub fn set_icon(&mut self, icon: &Surface<'_>) {
        unsafe { sdlpp_sys::SDL_SetWindowIcon(self.ptr, icon.as_raw()) }
    }

    /// Move the window
    pub fn set_position(&mut self, x: WindowPos, y: WindowPos) {
        unsafe { sdlpp_sys::SDL_SetWindowPosition(self.ptr, x.to_raw(), y.to_raw()) }
    }

    /// The position of the client area in screen coordinates
    pub fn position(&self) -> Point {
        let mut point = Point::default();
        unsafe { sdlpp_sys::SDL_GetWindowPosition(self.ptr, &mut point.x, &mut point.y) };
        point
    }

    /// Set the size of the client area
    pub fn set_size(&mut self, size: Size) {
        let (w, h) = size.to_c();
        unsafe { sdlpp_sys::SDL_SetWindowSize(self.ptr, w, h) }
    }

    /// The size of the client area in screen coordinates
    pub fn size(&self) -> Size {
        let (mut w, mut h) = (0, 0);
        unsafe { sdlpp_sys::SDL_GetWindowSize(self.ptr, &mut w, &mut h) };
        Size::from_c(w, h)
    }

    /// Size of the window decorations
    ///
    /// Fails on platforms that cannot report it; the result is then all zeros.
    pub fn borders_size(&self) -> Result<BordersSize> {
        let mut b = BordersSize::default();
        check(unsafe {
            sdlpp_sys::SDL_GetWindowBordersSize(self.ptr, &mut b.top, &mut b.left, &mut b.bottom, &mut b.right)
        })?;
        Ok(b)
    }

    /// Set the smallest size the client area may be resized to
    pub fn set_minimum_size(&mut self, size: Size) {
        let (w, h) = size.to_c();
        unsafe { sdlpp_sys::SDL_SetWindowMinimumSize(self.ptr, w, h) }
    }

    /// The smallest size of the client area
    pub fn minimum_size(&self) -> Size {
        let (mut w, mut h) = (0, 0);
        unsafe { sdlpp_sys::SDL_GetWindowMinimumSize(self.ptr, &mut w, &mut h) };
        Size::from_c(w, h)
    }

    /// Set the largest size the client area may be resized to
    pub fn set_maximum_size(&mut self, size: Size) {
        let (w, h) = size.to_c();
        unsafe { sdlpp_sys::SDL_SetWindowMaximumSize(self.ptr, w, h) }
    }

    /// The largest size of the client area
    pub fn maximum_size(&self) -> Size {
        let (mut w, mut h) = (0, 0);
        unsafe { sdlpp_sys::SDL_GetWindowMaximumSize(self.ptr, &mut w, &mut h) };
        Size::from_c(w, h)
    }

    /// Add or remove the border; no effect on fullscreen windows
    pub fn set_bordered(&mut self, bordered: bool) {
        unsafe { sdlpp_sys::SDL_SetWindowBordered(self.ptr, bordered as sdlpp_sys::SDL_bool) }
    }

    /// Allow or forbid resizing by the user
    pub fn set_resizable(&mut self, resizable: bool) {
        unsafe { sdlpp_sys::SDL_SetWindowResizable(self.ptr, resizable as sdlpp_sys::SDL_bool) }
    }

    /// Show the window
    pub fn show(&mut self) {
        unsafe { sdlpp_sys::SDL_ShowWindow(self.ptr) }
    }

    /// Hide the window
    pub fn hide(&mut self) {
        unsafe { sdlpp_sys::SDL_HideWindow(self.ptr) }
    }

    /// Raise the window above other windows and set the input focus
    pub fn raise(&mut self) {
        unsafe { sdlpp_sys::SDL_RaiseWindow(self.ptr) }
    }

    /// Make the window as large as possible
    pub fn maximize(&mut self) {
        unsafe { sdlpp_sys::SDL_MaximizeWindow(self.ptr) }
    }

    /// Minimise the window to an iconic representation
    pub fn minimize(&mut self) {
        unsafe { sdlpp_sys::SDL_MinimizeWindow(self.ptr) }
    }

    /// Restore the size and position of a minimised or maximised window
    pub fn restore(&mut self) {
        unsafe { sdlpp_sys::SDL_RestoreWindow(self.ptr) }
    }

    /// Switch between windowed, fullscreen and desktop fullscreen
    pub fn set_fullscreen(&mut self, mode: FullscreenMode) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetWindowFullscreen(self.ptr, mode.to_raw()) })
    }

    /// The window's framebuffer surface, created on first use
    ///
    /// The surface belongs to the window and is invalidated when the
    /// window is resized. Cannot be combined with the render API.
    pub fn surface(&mut self) -> Result<Surface<'_>> {
        let ptr = unsafe { sdlpp_sys::SDL_GetWindowSurface(self.ptr) };
        unsafe { Surface::from_raw(ptr, false) }
    }

    /// Copy the window surface to the screen
    pub fn update_surface(&self) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_UpdateWindowSurface(self.ptr) })
    }

    /// Copy areas of the window surface to the screen
    pub fn update_surface_rects(&self, rects: &[Rect]) -> Result<()> {
        check(unsafe {
            sdlpp_sys::SDL_UpdateWindowSurfaceRects(
                self.ptr,
                rects.as_ptr() as *const sdlpp_sys::SDL_Rect,
                to_count(rects.len())?,
            )
        })
    }

    /// Set the input grab mode
    ///
    /// Grabbing one window releases any grab held by another.
    pub fn set_grab(&mut self, grabbed: bool) {
        unsafe { sdlpp_sys::SDL_SetWindowGrab(self.ptr, grabbed as sdlpp_sys::SDL_bool) }
    }

    /// True if the window holds the input grab
    pub fn grab(&self) -> bool {
        unsafe { sdlpp_sys::SDL_GetWindowGrab(self.ptr) == sdlpp_sys::SDL_TRUE }
    }

    /// Set the brightness (gamma multiplier) for the window's display
    pub fn set_brightness(&mut self, brightness: f32) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetWindowBrightness(self.ptr, brightness) })
    }

    /// The brightness of the window's display, 1.0 when unchanged
    pub fn brightness(&self) -> f32 {
        unsafe { sdlpp_sys::SDL_GetWindowBrightness(self.ptr) }
    }

    /// Set the opacity, clamped to 0.0 (transparent) ..= 1.0 (opaque)
    pub fn set_opacity(&mut self, opacity: f32) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetWindowOpacity(self.ptr, opacity) })
    }

    /// The opacity, 1.0 where opacity is unsupported
    pub fn opacity(&self) -> Result<f32> {
        let mut opacity = 1.0;
        check(unsafe { sdlpp_sys::SDL_GetWindowOpacity(self.ptr, &mut opacity) })?;
        Ok(opacity)
    }

    /// Explicitly give the window input focus
    pub fn set_input_focus(&mut self) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetWindowInputFocus(self.ptr) })
    }

    /// Make this window modal for `parent` (X11 only)
    pub fn set_modal_for(&mut self, parent: &Window) -> Result<()> {
        check(unsafe { sdlpp_sys::SDL_SetWindowModalFor(self.ptr, parent.ptr) })
    }

    /// Set the gamma translation table of the window's display
    pub fn set_gamma_ramp(&mut self, ramp: &GammaRamp) -> Result<()> {
        check(unsafe {
            sdlpp_sys::SDL_SetWindowGammaRamp(
                self.ptr,
                ramp.red.as_ptr(),
                ramp.green.as_ptr(),
                ramp.blue.as_ptr(),
            )
        })
    }

    /// The gamma translation table of the window's display
    pub fn gamma_ramp(&self) -> Result<GammaRamp> {
        let mut ramp = GammaRamp { red: [0; 256], green: [0; 256], blue: [0; 256] };
        check(unsafe {
            sdlpp_sys::SDL_GetWindowGammaRamp(
                self.ptr,
                ramp.red.as_mut_ptr(),
                ramp.green.as_mut_ptr(),
                ramp.blue.as_mut_ptr(),
            )
        })?;
        Ok(ramp)
    }

    /// The renderer this window owns (non-owning handle)
    ///
    /// Only windows from `create_window_and_renderer` own their renderer; a
    /// renderer made with `Renderer::new` is reached through its own value
    /// and this returns `None` for it.
    pub fn renderer(&self) -> Option<Renderer<'_>> {
        if !self.owns_renderer {
            return None;
        }
        let ptr = unsafe { sdlpp_sys::SDL_GetRenderer(self.ptr) };
        unsafe { Renderer::from_raw(ptr, false) }
    }

    /// True if any renderer is attached to the window
    pub fn has_renderer(&self) -> bool {
        !unsafe { sdlpp_sys::SDL_GetRenderer(self.ptr) }.is_null()
    }

    /// Let points of the window act as title bar or resize borders
    ///
    /// `callback` gets points in window coordinates and is kept until it
    /// is replaced, cleared or the window is destroyed. Needs an owning
    /// handle. Fails on drivers without hit testing.
    pub fn set_hit_test<F>(&mut self, callback: F) -> Result<()>
    where
        F: FnMut(Point) -> HitTestResult + 'static,
    {
        if !self.owned {
            return Err(Error::InvalidArgument("hit tests need an owning window handle".into()));
        }
        let mut callback: Box<HitTestCallback> = Box::new(Box::new(callback));
        let data = &mut *callback as *mut HitTestCallback as *mut c_void;
        check(unsafe { sdlpp_sys::SDL_SetWindowHitTest(self.ptr, Some(hit_test_trampoline), data) })?;
        self.hit_test = Some(callback);
        Ok(())
    }

    /// Remove the hit test callback
    pub fn clear_hit_test(&mut self) -> Result<()> {
        if self.hit_test.is_none() {
            return Ok(());
        }
        check(unsafe { sdlpp_sys::SDL_SetWindowHitTest(self.ptr, None, std::ptr::null_mut()) })?;
        self.hit_test = None;
        Ok(())
    }

    /// True while a hit test callback is registered through this handle
    pub fn has_hit_test(&self) -> bool {
        self.hit_test.is_some()
    }

    /// Attach a pointer to the window under `name`, returning the previous
    /// one (NULL if there was none)
    ///
    /// SDL stores the pointer without owning it. Null `data` removes the
    /// entry. Names starting with `_SDL_` are reserved for SDL itself.
    pub fn set_data(&mut self, name: &str, data: *mut c_void) -> Result<*mut c_void> {
        let c_name = data_name(name)?;
        Ok(unsafe { sdlpp_sys::SDL_SetWindowData(self.ptr, c_name.as_ptr(), data) })
    }

    /// The pointer attached under `name`, NULL if there is none
    pub fn data(&self, name: &str) -> Result<*mut c_void> {
        let c_name = data_name(name)?;
        Ok(unsafe { sdlpp_sys::SDL_GetWindowData(self.ptr, c_name.as_ptr()) })
    }

    /// Get the raw window pointer (for advanced usage)
    pub fn as_raw(&self) -> *mut sdlpp_sys::SDL_Window {
        self.ptr
    }
}

fn data_name(name: &str) -> Result<std::ffi::CString> {
    if name.is_empty() || name.starts_with("_SDL_") {
        return Err(Error::InvalidArgument(format!("{:?} is not a usable window data name", name)));
    }
    to_cstring(name)
}

impl Drop for Window {
    fn drop(&mut self) {
        if !self.owned {
            return;
        }
        if self.owns_renderer {
            let renderer = unsafe { sdlpp_sys::SDL_GetRenderer(self.ptr) };
            if !renderer.is_null() {
                log::debug!("destroying renderer {:p} of window {:p}", renderer, self.ptr);
                unsafe { sdlpp_sys::SDL_DestroyRenderer(renderer) };
            }
        }
        log::debug!("destroying window {:p}", self.ptr);
        unsafe { sdlpp_sys::SDL_DestroyWindow(self.ptr) };
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("ptr", &self.ptr)
            .field("owned", &self.owned)
            .field("id", &self.id())
            .field("hit_test", &self.hit_test.is_some())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use parking_lot::Mutex;

    static VIDEO: Mutex<()> = Mutex::new(());

    /// Run `f` with the dummy video driver up, one test at a time
    ///
    /// Skips silently when the dummy driver is not compiled in.
    pub(crate) fn with_dummy_video<F: FnOnce()>(f: F) {
        let _guard = VIDEO.lock();
        set_hint("SDL_VIDEODRIVER", "dummy").unwrap();
        let video = match VideoSubsystem::init(Some("dummy")) {
            Ok(video) => video,
            Err(e) => {
                eprintln!("skipping: dummy video driver unavailable: {}", e);
                return;
            }
        };
        assert_eq!(video.driver(), "dummy");
        f();
        drop(video);
    }

    #[test]
    fn test_window_flags_ops() {
        let flags = WindowFlags::HIDDEN | WindowFlags::RESIZABLE;
        assert!(flags.contains(WindowFlags::HIDDEN));
        assert!(!flags.contains(WindowFlags::OPENGL));
        assert_eq!((flags & WindowFlags::RESIZABLE), WindowFlags::RESIZABLE);
        assert!(WindowFlags::FULLSCREEN_DESKTOP.contains(WindowFlags::FULLSCREEN));
    }

    #[test]
    fn test_window_pos_raw_values() {
        assert_eq!(WindowPos::Undefined.to_raw(), 0x1FFF_0000);
        assert_eq!(WindowPos::Centered.to_raw(), 0x2FFF_0000);
        assert_eq!(WindowPos::from(42).to_raw(), 42);
    }

    #[test]
    fn test_driver_list() {
        assert_eq!(video_drivers().len(), num_video_drivers());
        assert_eq!(video_driver(10_000), None);
    }

    #[test]
    fn test_dummy_display() {
        with_dummy_video(|| {
            assert_eq!(Display::count().unwrap(), 1);
            let display = Display::new(0);
            let mode = display.desktop_mode().unwrap();
            assert!(mode.w > 0 && mode.h > 0);
            assert_eq!(display.bounds().unwrap(), Rect::new(0, 0, mode.w, mode.h));
            assert!(!display.modes().unwrap().is_empty());
            assert!(Display::new(5).bounds().is_err());
        });
    }

    #[test]
    fn test_window_lifecycle() {
        with_dummy_video(|| {
            let mut window =
                Window::new("first", WindowPos::At(10), WindowPos::At(20), Size::new(320, 240), WindowFlags::HIDDEN)
                    .unwrap();
            assert!(window.is_owned());
            assert!(window.flags().contains(WindowFlags::HIDDEN));
            assert_eq!(window.title(), "first");
            assert_eq!(window.size(), Size::new(320, 240));

            window.set_title("renamed").unwrap();
            assert_eq!(window.title(), "renamed");

            window.set_size(Size::new(200, 100));
            assert_eq!(window.size(), Size::new(200, 100));

            window.set_minimum_size(Size::new(50, 40));
            assert_eq!(window.minimum_size(), Size::new(50, 40));
            window.set_maximum_size(Size::new(800, 600));
            assert_eq!(window.maximum_size(), Size::new(800, 600));

            let id = window.id();
            {
                let alias = unsafe { Window::from_id(id) }.unwrap();
                assert!(!alias.is_owned());
                assert_eq!(alias.title(), "renamed");
            }
            // the alias must not have destroyed the window
            assert_eq!(window.title(), "renamed");
            assert!(unsafe { Window::grabbed() }.is_none());

            drop(window);
            assert!(unsafe { Window::from_id(id) }.is_none());
        });
    }

    #[test]
    fn test_window_title_rejects_nul() {
        with_dummy_video(|| {
            let mut window = Window::new_centered("ok", Size::new(16, 16), WindowFlags::HIDDEN).unwrap();
            assert!(window.set_title("bad\0title").is_err());
            assert_eq!(window.title(), "ok");
        });
    }

    #[test]
    fn test_window_surface_is_borrowed() {
        with_dummy_video(|| {
            let mut window = Window::new_centered("surface", Size::new(32, 16), WindowFlags::HIDDEN).unwrap();
            {
                let mut surface = window.surface().unwrap();
                assert!(!surface.is_owned());
                assert_eq!(surface.size(), Size::new(32, 16));
                surface.fill(crate::Colour::WHITE).unwrap();
            }
            window.update_surface().unwrap();
            window.update_surface_rects(&[Rect::new(0, 0, 8, 8)]).unwrap();
        });
    }

    #[test]
    fn test_hit_test_trampoline() {
        let mut callback: HitTestCallback = Box::new(|point: Point| {
            if point.y < 10 {
                HitTestResult::Draggable
            } else {
                HitTestResult::Normal
            }
        });
        let data = &mut callback as *mut HitTestCallback as *mut c_void;
        let call = |x, y| {
            let area = sdlpp_sys::SDL_Point { x, y };
            unsafe { hit_test_trampoline(std::ptr::null_mut(), &area, data) }
        };
        assert_eq!(call(5, 2), sdlpp_sys::SDL_HITTEST_DRAGGABLE);
        assert_eq!(call(5, 20), sdlpp_sys::SDL_HITTEST_NORMAL);

        let mut panicking: HitTestCallback = Box::new(|_| panic!("hit test failed"));
        let data = &mut panicking as *mut HitTestCallback as *mut c_void;
        let area = sdlpp_sys::SDL_Point { x: 0, y: 0 };
        assert_eq!(unsafe { hit_test_trampoline(std::ptr::null_mut(), &area, data) }, sdlpp_sys::SDL_HITTEST_NORMAL);
    }

    #[test]
    fn test_hit_test_result_values() {
        assert_eq!(sdlpp_sys::SDL_HitTestResult::from(HitTestResult::Normal), 0);
        assert_eq!(sdlpp_sys::SDL_HitTestResult::from(HitTestResult::ResizeTopLeft), 2);
        assert_eq!(sdlpp_sys::SDL_HitTestResult::from(HitTestResult::ResizeLeft), 9);
    }

    #[test]
    fn test_hit_test_registration() {
        with_dummy_video(|| {
            let mut window = Window::new_centered("hit", Size::new(32, 32), WindowFlags::BORDERLESS).unwrap();
            // the dummy driver has no hit testing, so nothing stays registered
            assert!(window.set_hit_test(|_| HitTestResult::Draggable).is_err());
            assert!(!window.has_hit_test());
            window.clear_hit_test().unwrap();

            let mut alias = unsafe { Window::from_raw(window.as_raw(), false) }.unwrap();
            let err = alias.set_hit_test(|_| HitTestResult::Normal).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
        });
    }

    #[test]
    fn test_window_data() {
        with_dummy_video(|| {
            let mut window = Window::new_centered("data", Size::new(8, 8), WindowFlags::HIDDEN).unwrap();
            let mut value = 7u32;
            let ptr = &mut value as *mut u32 as *mut c_void;

            assert!(window.data("app").unwrap().is_null());
            assert!(window.set_data("app", ptr).unwrap().is_null());
            assert_eq!(window.data("app").unwrap(), ptr);
            assert_eq!(window.set_data("app", std::ptr::null_mut()).unwrap(), ptr);
            assert!(window.data("app").unwrap().is_null());

            assert!(matches!(window.set_data("", ptr), Err(Error::InvalidArgument(_))));
            assert!(matches!(window.data("_SDL_WindowRenderData"), Err(Error::InvalidArgument(_))));
        });
    }
}
