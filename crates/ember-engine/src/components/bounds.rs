/// Whether a bounding box accepts size mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePolicy {
    /// `scale` and `set_size` are honored.
    #[default]
    Resizable,
    /// `scale` and `set_size` are silently ignored. Position mutation is
    /// always honored. Used by components that only mark a position.
    PositionOnly,
}

/// Axis-aligned bounding box of a component.
///
/// Width and height may be zero but are never negative as long as callers
/// pass non-negative sizes and scale factors; there is no clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    policy: SizePolicy,
}

impl Bounds {
    /// A resizable box.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            policy: SizePolicy::Resizable,
        }
    }

    /// A zero-size box that silently ignores size mutation.
    pub fn position_only(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: 0.0,
            height: 0.0,
            policy: SizePolicy::PositionOnly,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn policy(&self) -> SizePolicy {
        self.policy
    }

    /// Moves the box by the given amounts.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Multiplies the size by the given factors.
    /// Ignored for `PositionOnly` boxes.
    pub fn scale(&mut self, fx: f32, fy: f32) {
        if self.policy == SizePolicy::Resizable {
            self.width *= fx;
            self.height *= fy;
        }
    }

    /// Ignored for `PositionOnly` boxes.
    pub fn set_size(&mut self, width: f32, height: f32) {
        if self.policy == SizePolicy::Resizable {
            self.width = width;
            self.height = height;
        }
    }

    /// Whether the point lies inside the box. The left and top edges are
    /// inclusive, the right and bottom edges exclusive.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Whether any of `other`'s four corners lies inside this box.
    ///
    /// Note: a thin box fully straddling this one, with all four corners
    /// outside, is not detected as intersecting.
    pub fn intersects(&self, other: &Bounds) -> bool {
        let x1 = other.x;
        let x2 = x1 + other.width;
        let y1 = other.y;
        let y2 = y1 + other.height;

        self.contains(x1, y1) || self.contains(x2, y1) || self.contains(x1, y2) || self.contains(x2, y2)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}
