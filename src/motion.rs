//! Scroll and viewport driven animation math.
//!
//! Everything here is plain data so it can be rendered on the server and
//! tested without a browser. The reactive hooks that feed it live in
//! `app::hooks`.

pub const DEFAULT_DURATION: f64 = 0.8;
pub const STAGGER_STEP: f64 = 0.2;
pub const PARALLAX_MAX_PERCENT: f64 = 50.0;

/// Normalized vertical scroll position of the document.
///
/// `extent` is the scrollable distance (`scrollHeight - clientHeight`). A
/// document that cannot scroll is always at progress 0.
pub fn scroll_progress(offset: f64, extent: f64) -> f64 {
    if extent.is_nan() || extent <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / extent).clamp(0.0, 1.0)
}

/// Scrollable distance of a document `scroll_height` tall seen through a
/// `viewport_height` window. Never negative.
pub fn scroll_extent(scroll_height: f64, viewport_height: f64) -> f64 {
    (scroll_height - viewport_height).max(0.0)
}

/// Linear map of scroll progress onto the hero background translation, in
/// percent of the layer height.
pub fn parallax_offset(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0) * PARALLAX_MAX_PERCENT
}

pub fn parallax_transform(progress: f64) -> String {
    format!("transform: translate3d(0, {:.3}%, 0);", parallax_offset(progress))
}

/// Viewport visibility of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    once: bool,
    visible: bool,
}

impl RevealLatch {
    pub fn new(once: bool) -> Self {
        Self {
            once,
            visible: false,
        }
    }

    /// Feed one intersection observation. Returns whether `visible` changed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        let next = if self.once {
            self.visible || intersecting
        } else {
            intersecting
        };
        let changed = next != self.visible;
        self.visible = next;
        changed
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// A settled latch can never change again, so its observer can be dropped.
    pub fn is_settled(&self) -> bool {
        self.once && self.visible
    }
}

/// Where an element rests before it is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    Fade,
    /// Vertical offset in px, positive is below the resting position.
    Y(f64),
    /// Horizontal offset in px, negative is left of the resting position.
    X(f64),
    Scale(f64),
}

impl Offset {
    fn hidden_transform(self) -> String {
        match self {
            Offset::Fade => "none".to_string(),
            Offset::Y(px) => format!("translate3d(0, {px}px, 0)"),
            Offset::X(px) => format!("translate3d({px}px, 0, 0)"),
            Offset::Scale(s) => format!("scale({s})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub offset: Offset,
    pub duration: f64,
    pub delay: f64,
}

impl Entrance {
    pub const fn new(offset: Offset) -> Self {
        Self {
            offset,
            duration: DEFAULT_DURATION,
            delay: 0.0,
        }
    }

    pub const fn with_delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    /// Delay the entrance by its position in a list.
    pub fn staggered(self, index: usize) -> Self {
        self.with_delay(index as f64 * STAGGER_STEP)
    }

    pub fn style(&self, shown: bool) -> String {
        let (opacity, transform) = if shown {
            (1, "none".to_string())
        } else {
            (0, self.offset.hidden_transform())
        };
        let timing = format!("{:.2}s ease-out {:.2}s", self.duration, self.delay);
        format!(
            "opacity: {opacity}; transform: {transform}; transition: opacity {timing}, transform {timing};"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_is_monotonic_and_ends_at_half() {
        let extent = 4000.0;
        let mut last = f64::MIN;
        for step in 0..=400 {
            let offset = extent * step as f64 / 400.0;
            let y = parallax_offset(scroll_progress(offset, extent));
            assert!(y >= last, "parallax went backwards at {offset}");
            last = y;
        }
        assert_eq!(parallax_offset(scroll_progress(extent, extent)), 50.0);
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(0.5), 25.0);
    }

    #[test]
    fn test_full_scroll_after_page_grows() {
        let viewport = 800.0;
        let before = scroll_extent(2000.0, viewport);
        // a late stylesheet makes the page taller without a window resize
        let after = scroll_extent(3000.0, viewport);
        let bottom = after;

        assert_eq!(parallax_offset(scroll_progress(bottom, after)), 50.0);
        // measuring against the stale height clamps early and hides the tail
        assert_eq!(parallax_offset(scroll_progress(before, before)), 50.0);
        assert!(parallax_offset(scroll_progress(before, after)) < 50.0);

        assert_eq!(scroll_extent(600.0, viewport), 0.0);
        assert_eq!(scroll_progress(0.0, scroll_extent(600.0, viewport)), 0.0);
    }

    #[test]
    fn test_scroll_progress_edges() {
        assert_eq!(scroll_progress(100.0, 0.0), 0.0);
        assert_eq!(scroll_progress(100.0, -5.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 100.0), 0.0);
        // overscroll bounce on touch devices
        assert_eq!(scroll_progress(-20.0, 100.0), 0.0);
        assert_eq!(scroll_progress(150.0, 100.0), 1.0);
        assert_eq!(parallax_offset(f64::NAN), 0.0);
        assert_eq!(parallax_transform(1.0), "transform: translate3d(0, 50.000%, 0);");
    }

    #[test]
    fn test_once_latch_never_reverts() {
        let mut latch = RevealLatch::new(true);
        assert!(!latch.visible());
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.is_settled());
        for intersecting in [false, true, false, false] {
            assert!(!latch.observe(intersecting));
            assert!(latch.visible());
        }
    }

    #[test]
    fn test_tracking_latch_follows_viewport() {
        let mut latch = RevealLatch::new(false);
        assert!(latch.observe(true));
        assert!(!latch.is_settled());
        assert!(latch.observe(false));
        assert!(!latch.visible());
        assert!(!latch.observe(false));
    }

    #[test]
    fn test_entrance_style() {
        let card = Entrance::new(Offset::X(-100.0));
        assert_eq!(
            card.style(false),
            "opacity: 0; transform: translate3d(-100px, 0, 0); transition: opacity 0.80s ease-out 0.00s, transform 0.80s ease-out 0.00s;"
        );
        assert!(card.style(true).starts_with("opacity: 1; transform: none;"));

        let tile = Entrance::new(Offset::Y(50.0)).staggered(2);
        assert!(tile.style(false).contains("ease-out 0.40s"));
        assert!(Entrance::new(Offset::Scale(0.9))
            .style(false)
            .contains("scale(0.9)"));
    }
}
