// src/utils.rs
use image::{Pixel, Rgba, RgbaImage};
use ndarray::{Array1, Array2, Axis, Zip};

/// Fully transparent pixel, the initial state of every canvas
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Rectangle an ellipse is inscribed in.
/// Both corners are inclusive pixel coordinates, so `[5, 5, 95, 95]` covers 91 columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BoundingBox {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        BoundingBox { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    pub fn contains(&self, other: &BoundingBox) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    pub fn as_array(&self) -> [u32; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline {
    pub color: Rgba<u8>,
    pub width: u32,
}

/// A single shape instruction: a filled ellipse with an optional stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub bbox: BoundingBox,
    pub fill: Rgba<u8>,
    pub outline: Option<Outline>,
}

/// Pixel rectangle of `bbox` that lands on a `width` x `height` canvas
pub fn clip_window(bbox: &BoundingBox, width: u32, height: u32) -> Option<BoundingBox> {
    if width == 0 || height == 0 || bbox.x0 >= width || bbox.y0 >= height {
        return None;
    }
    if bbox.x1 < bbox.x0 || bbox.y1 < bbox.y0 {
        return None;
    }

    Some(BoundingBox::new(
        bbox.x0,
        bbox.y0,
        bbox.x1.min(width - 1),
        bbox.y1.min(height - 1),
    ))
}

/// Centers of the pixels `lo..=hi` along one axis
pub fn axis_centers(lo: u32, hi: u32) -> Array1<f64> {
    (lo..=hi).map(|i| i as f64 + 0.5).collect()
}

/// Normalized squared distance ((x-cx)/rx)^2 + ((y-cy)/ry)^2 from a point to
/// the ellipse inscribed in `bbox`, shrunk by `inset` pixels on every side.
/// Values <= 1 lie inside. A collapsed ellipse is +inf everywhere.
pub fn ellipse_distance(bbox: &BoundingBox, inset: f64, px: f64, py: f64) -> f64 {
    let cx = (bbox.x0 as f64 + bbox.x1 as f64 + 1.0) / 2.0;
    let cy = (bbox.y0 as f64 + bbox.y1 as f64 + 1.0) / 2.0;
    let rx = (bbox.x1 as f64 - bbox.x0 as f64 + 1.0) / 2.0 - inset;
    let ry = (bbox.y1 as f64 - bbox.y0 as f64 + 1.0) / 2.0 - inset;

    if rx <= 0.0 || ry <= 0.0 {
        return f64::INFINITY;
    }

    let dx = (px - cx) / rx;
    let dy = (py - cy) / ry;
    dx * dx + dy * dy
}

/// Inside test for every (x, y) pair of pixel centers, indexed `[[row, col]]`
pub fn ellipse_mask(
    xs: &Array1<f64>,
    ys: &Array1<f64>,
    bbox: &BoundingBox,
    inset: f64,
) -> Array2<bool> {
    let column = ys.view().insert_axis(Axis(1));
    let mut mask = Array2::from_elem((ys.len(), xs.len()), false);

    Zip::from(&mut mask)
        .and_broadcast(xs)
        .and_broadcast(&column)
        .for_each(|inside, &px, &py| {
            *inside = ellipse_distance(bbox, inset, px, py) <= 1.0;
        });

    mask
}

/// Composite `color` over the pixels of `window` selected by `mask`
fn paint_mask(img: &mut RgbaImage, window: &BoundingBox, mask: &Array2<bool>, color: Rgba<u8>) {
    for ((row, col), &inside) in mask.indexed_iter() {
        if !inside {
            continue;
        }
        let pixel = img.get_pixel_mut(window.x0 + col as u32, window.y0 + row as u32);
        if color[3] == u8::MAX {
            // opaque colors land exactly, no float round trip
            *pixel = color;
        } else {
            pixel.blend(&color);
        }
    }
}

/// Raster surface the face is drawn on
pub trait Surface {
    fn transparent(width: u32, height: u32) -> Self;

    fn dimensions(&self) -> (u32, u32);

    fn draw_ellipse(&mut self, shape: &Ellipse);
}

impl Surface for RgbaImage {
    fn transparent(width: u32, height: u32) -> Self {
        RgbaImage::from_pixel(width, height, TRANSPARENT)
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn draw_ellipse(&mut self, shape: &Ellipse) {
        let window = match clip_window(&shape.bbox, self.width(), self.height()) {
            Some(window) => window,
            None => return,
        };
        let xs = axis_centers(window.x0, window.x1);
        let ys = axis_centers(window.y0, window.y1);

        let inset = shape.outline.map_or(0.0, |outline| outline.width as f64);
        let fill = ellipse_mask(&xs, &ys, &shape.bbox, inset);
        paint_mask(self, &window, &fill, shape.fill);

        if let Some(outline) = shape.outline {
            let outer = ellipse_mask(&xs, &ys, &shape.bbox, 0.0);
            let ring = Zip::from(&outer).and(&fill).map_collect(|&o, &i| o && !i);
            paint_mask(self, &window, &ring, outline.color);
        }
    }
}
