/// Axis-aligned pixel rectangle, half-open on the right and bottom edges:
/// it covers `x..x+w` horizontally and `y..y+h` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn encloses(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// All regions of the cash-register motif, derived from the canvas size
/// alone. Every bound comes out of integer division, so the same size
/// always yields the same layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLayout {
    pub size: u32,
    pub margin: u32,
    pub outline_px: u32,
    pub drawer: Rect,
    pub handle: Rect,
    pub display: Rect,
}

impl IconLayout {
    pub fn new(size: u32) -> Self {
        let margin = size / 8;
        let outline_px = (size / 32).max(1);

        // Cash drawer body: full width minus the margins, anchored near
        // the bottom with `margin` clearance.
        let drawer_w = size - 2 * margin;
        let drawer_h = size / 3;
        let drawer = Rect::new(margin, size - drawer_h - margin, drawer_w, drawer_h);

        // Handle: a thin bar centered in the drawer both ways.
        let handle_w = drawer_w / 3;
        let handle_h = (size / 16).max(2);
        let handle = Rect::new(
            drawer.x + drawer_w / 2 - handle_w / 2,
            drawer.y + drawer_h / 2 - handle_h / 2,
            handle_w,
            handle_h,
        );

        // Display panel: half the drawer width, centered over the drawer's
        // horizontal span, sitting at the top margin.
        let display_w = drawer_w / 2;
        let display_h = size / 6;
        let display = Rect::new(drawer.x + drawer_w / 4, margin, display_w, display_h);

        IconLayout {
            size,
            margin,
            outline_px,
            drawer,
            handle,
            display,
        }
    }

    /// The canvas itself as a rectangle.
    pub fn canvas(&self) -> Rect {
        Rect::new(0, 0, self.size, self.size)
    }
}
