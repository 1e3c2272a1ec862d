//! Points, sizes and rectangles
//!
//! `Point`, `FPoint`, `Rect` and `FRect` share the memory layout of their
//! native counterparts, so slices of them are handed to SDL without copying.

use sdlpp_sys::{SDL_FPoint, SDL_FRect, SDL_Point, SDL_Rect};

use crate::error::{to_count, Result};

/// An integer point
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A floating point point
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FPoint {
    pub x: f32,
    pub y: f32,
}

impl FPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a window, texture or render output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build a size from the signed pair SDL reports, clamping negatives to zero
    pub(crate) fn from_c(w: i32, h: i32) -> Self {
        Self::new(w.max(0) as u32, h.max(0) as u32)
    }

    /// The signed pair SDL expects, saturating at `i32::MAX`
    pub(crate) fn to_c(self) -> (i32, i32) {
        (
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }
}

/// An integer rectangle with the origin at the upper left
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle of the given size at the origin
    pub fn from_size(size: Size) -> Self {
        let (w, h) = size.to_c();
        Self::new(0, 0, w, h)
    }

    /// The top left corner
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The size, with negative extents read as zero
    pub fn size(&self) -> Size {
        Size::from_c(self.w, self.h)
    }

    /// True if the rectangle has no area
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// True if the point lies inside the rectangle
    pub fn contains_point(&self, point: Point) -> bool {
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        let (left, top) = (i64::from(self.x), i64::from(self.y));
        x >= left && x < left + i64::from(self.w) && y >= top && y < top + i64::from(self.h)
    }

    /// True if `other` has area and lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        let right = |r: &Rect| i64::from(r.x) + i64::from(r.w);
        let bottom = |r: &Rect| i64::from(r.y) + i64::from(r.h);
        !other.is_empty()
            && other.x >= self.x
            && other.y >= self.y
            && right(other) <= right(self)
            && bottom(other) <= bottom(self)
    }

    /// Determine whether two rectangles intersect
    pub fn has_intersection(&self, other: &Rect) -> bool {
        unsafe { sdlpp_sys::SDL_HasIntersection(self.as_raw(), other.as_raw()) == sdlpp_sys::SDL_TRUE }
    }

    /// Calculate the intersection of two rectangles
    ///
    /// Returns `None` if they do not intersect.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let mut result = SDL_Rect::default();
        let hit = unsafe { sdlpp_sys::SDL_IntersectRect(self.as_raw(), other.as_raw(), &mut result) };
        if hit == sdlpp_sys::SDL_TRUE {
            Some(result.into())
        } else {
            None
        }
    }

    /// Calculate the union of two rectangles
    pub fn union(&self, other: &Rect) -> Rect {
        let mut result = SDL_Rect::default();
        unsafe { sdlpp_sys::SDL_UnionRect(self.as_raw(), other.as_raw(), &mut result) };
        result.into()
    }

    /// Calculate the minimal rectangle enclosing a set of points
    ///
    /// Points outside `clip` are ignored. Returns `None` if no point is left.
    pub fn enclose_points(points: &[Point], clip: Option<&Rect>) -> Result<Option<Rect>> {
        let count = to_count(points.len())?;
        let mut result = SDL_Rect::default();
        let any = unsafe {
            sdlpp_sys::SDL_EnclosePoints(
                points.as_ptr() as *const SDL_Point,
                count,
                opt_rect(clip),
                &mut result,
            )
        };
        Ok(if any == sdlpp_sys::SDL_TRUE {
            Some(result.into())
        } else {
            None
        })
    }

    pub(crate) fn as_raw(&self) -> *const SDL_Rect {
        self as *const Rect as *const SDL_Rect
    }

    pub(crate) fn as_raw_mut(&mut self) -> *mut SDL_Rect {
        self as *mut Rect as *mut SDL_Rect
    }
}

/// A floating point rectangle with the origin at the upper left
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl FRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub(crate) fn as_raw(&self) -> *const SDL_FRect {
        self as *const FRect as *const SDL_FRect
    }
}

impl From<Rect> for FRect {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32)
    }
}

// =============================================================================
// Native conversions
// =============================================================================

impl From<SDL_Rect> for Rect {
    fn from(rect: SDL_Rect) -> Self {
        Self::new(rect.x, rect.y, rect.w, rect.h)
    }
}

impl From<Rect> for SDL_Rect {
    fn from(rect: Rect) -> Self {
        SDL_Rect { x: rect.x, y: rect.y, w: rect.w, h: rect.h }
    }
}

impl From<SDL_FRect> for FRect {
    fn from(rect: SDL_FRect) -> Self {
        Self::new(rect.x, rect.y, rect.w, rect.h)
    }
}

impl From<FRect> for SDL_FRect {
    fn from(rect: FRect) -> Self {
        SDL_FRect { x: rect.x, y: rect.y, w: rect.w, h: rect.h }
    }
}

impl From<SDL_Point> for Point {
    fn from(point: SDL_Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<Point> for SDL_Point {
    fn from(point: Point) -> Self {
        SDL_Point { x: point.x, y: point.y }
    }
}

impl From<SDL_FPoint> for FPoint {
    fn from(point: SDL_FPoint) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<FPoint> for SDL_FPoint {
    fn from(point: FPoint) -> Self {
        SDL_FPoint { x: point.x, y: point.y }
    }
}

/// NULL for `None`, the rectangle otherwise
pub(crate) fn opt_rect(rect: Option<&Rect>) -> *const SDL_Rect {
    rect.map_or(std::ptr::null(), Rect::as_raw)
}

pub(crate) fn opt_frect(rect: Option<&FRect>) -> *const SDL_FRect {
    rect.map_or(std::ptr::null(), FRect::as_raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_native() {
        assert_eq!(std::mem::size_of::<Rect>(), std::mem::size_of::<SDL_Rect>());
        assert_eq!(std::mem::size_of::<FRect>(), std::mem::size_of::<SDL_FRect>());
        assert_eq!(std::mem::size_of::<Point>(), std::mem::size_of::<SDL_Point>());
        assert_eq!(std::mem::size_of::<FPoint>(), std::mem::size_of::<SDL_FPoint>());
    }

    #[test]
    fn test_contains_point_is_half_open() {
        let rect = Rect::new(10, 10, 5, 5);
        assert!(rect.contains_point(Point::new(10, 10)));
        assert!(rect.contains_point(Point::new(14, 14)));
        assert!(!rect.contains_point(Point::new(15, 10)));
        assert!(!rect.contains_point(Point::new(9, 12)));

        // the far edge lies past i32::MAX
        let edge = Rect::new(i32::MAX - 1, i32::MAX - 1, 10, 10);
        assert!(edge.contains_point(Point::new(i32::MAX, i32::MAX)));
        assert!(!edge.contains_point(Point::new(i32::MIN, 0)));
        assert!(!Rect::new(i32::MIN, 0, 1, 1).contains_point(Point::new(i32::MAX, 0)));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(0, 0, 4, 4);
        assert!(outer.contains_rect(&outer));
        assert!(outer.contains_rect(&Rect::new(1, 1, 3, 3)));
        assert!(!outer.contains_rect(&Rect::new(0, 0, 2, 1000)));
        assert!(!outer.contains_rect(&Rect::new(-1, 0, 2, 2)));
        assert!(!outer.contains_rect(&Rect::new(1, 1, 0, 2)));
        assert!(!outer.contains_rect(&Rect::new(2, 0, i32::MAX, 1)));
    }

    #[test]
    fn test_empty() {
        assert!(Rect::new(0, 0, 0, 10).is_empty());
        assert!(Rect::new(0, 0, 10, -1).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.has_intersection(&b));
        assert_eq!(a.intersection(&b), Some(Rect::new(5, 5, 5, 5)));

        let far = Rect::new(50, 50, 2, 2);
        assert!(!a.has_intersection(&far));
        assert_eq!(a.intersection(&far), None);
    }

    #[test]
    fn test_union() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(6, 2, 4, 4);
        assert_eq!(a.union(&b), Rect::new(0, 0, 10, 6));
    }

    #[test]
    fn test_enclose_points() {
        let points = [Point::new(1, 2), Point::new(5, 3), Point::new(3, 9)];
        assert_eq!(
            Rect::enclose_points(&points, None).unwrap(),
            Some(Rect::new(1, 2, 5, 8))
        );

        let clip = Rect::new(100, 100, 5, 5);
        assert_eq!(Rect::enclose_points(&points, Some(&clip)).unwrap(), None);
    }

    #[test]
    fn test_size_conversion_clamps() {
        assert_eq!(Size::from_c(-3, 7), Size::new(0, 7));
        assert_eq!(Size::new(u32::MAX, 2).to_c(), (i32::MAX, 2));
        assert_eq!(Rect::from_size(Size::new(3, 4)), Rect::new(0, 0, 3, 4));
    }
}
