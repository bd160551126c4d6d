#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

/// One of the eight resize handles around a selected block.
///
/// Handles are named by compass point; the DOM carries the token returned by
/// [`Handle::token`] in a `data-handle` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl Handle {
    /// Every handle, clockwise from north.
    pub const ALL: [Handle; 8] = [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
            Self::Nw => "nw",
        }
    }

    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::ALL.into_iter().find(|h| h.token().eq_ignore_ascii_case(token))
    }

    /// Dragging moves the right edge.
    #[must_use]
    pub fn east(self) -> bool {
        matches!(self, Self::Ne | Self::E | Self::Se)
    }

    /// Dragging moves the left edge.
    #[must_use]
    pub fn west(self) -> bool {
        matches!(self, Self::Nw | Self::W | Self::Sw)
    }

    /// Dragging moves the top edge.
    #[must_use]
    pub fn north(self) -> bool {
        matches!(self, Self::Nw | Self::N | Self::Ne)
    }

    /// Dragging moves the bottom edge.
    #[must_use]
    pub fn south(self) -> bool {
        matches!(self, Self::Sw | Self::S | Self::Se)
    }

    #[must_use]
    pub fn is_corner(self) -> bool {
        matches!(self, Self::Ne | Self::Se | Self::Sw | Self::Nw)
    }

    /// CSS cursor shown while hovering the handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::Ne | Self::Sw => "nesw-resize",
            Self::Nw | Self::Se => "nwse-resize",
        }
    }
}
