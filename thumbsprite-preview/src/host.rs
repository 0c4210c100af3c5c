//! Host player capabilities used by the preview controller

use thumbsprite_core::{StyleMap, TooltipLayout};

/// Host UI parts the preview needs before it can activate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Container listening for pointer movement over the track
    ProgressControl,
    /// The seek track itself
    SeekBar,
    /// Element following the pointer along the track
    MouseTimeDisplay,
    /// Tooltip receiving the preview style
    TimeTooltip,
}

impl Surface {
    /// Every surface the preview requires
    pub const REQUIRED: [Surface; 4] = [
        Surface::ProgressControl,
        Surface::SeekBar,
        Surface::MouseTimeDisplay,
        Surface::TimeTooltip,
    ];
}

/// Pointer notifications the preview subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    MouseMove,
    TouchMove,
}

impl PointerEventKind {
    /// Every kind the preview listens for
    pub const ALL: [PointerEventKind; 2] =
        [PointerEventKind::MouseMove, PointerEventKind::TouchMove];
}

/// Pointer position over the seek track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMove {
    /// Horizontal pixel offset from the track's left edge
    pub offset: f64,
    /// Current track width in pixels
    pub track_width: f64,
}

impl PointerMove {
    /// Creates a new pointer move
    pub fn new(offset: f64, track_width: f64) -> Self {
        Self {
            offset,
            track_width,
        }
    }
}

/// Capabilities a host player exposes to the preview.
///
/// Queries are made at event time, so implementations report live values.
pub trait HostUi {
    /// Whether the given UI surface exists
    fn has_surface(&self, surface: Surface) -> bool;

    /// Current media duration in seconds
    fn duration(&self) -> f64;

    /// Current player width in pixels
    fn viewport_width(&self) -> f64;

    /// Current vertical position of the control bar and seek bar
    fn tooltip_layout(&self) -> TooltipLayout;

    /// Starts delivering pointer events of this kind to the preview
    fn listen(&mut self, kind: PointerEventKind);

    /// Stops delivering pointer events of this kind
    fn unlisten(&mut self, kind: PointerEventKind);

    /// Adds a class marker to the player
    fn add_class(&mut self, class: &str);

    /// Replaces the tooltip's visual style
    fn set_tooltip_style(&mut self, style: &StyleMap);
}
