// src/face.rs
use crate::error::FaceError;
use crate::utils::{BoundingBox, Ellipse, Outline, Surface};
use image::{Rgba, RgbaImage};

/// Smallest size for which every feature keeps a non-empty span
pub const MIN_FACE_SIZE: u32 = 16;

pub const HEAD_MARGIN: u32 = 5;
pub const HEAD_OUTLINE_WIDTH: u32 = 2;

pub const HEAD_FILL: Rgba<u8> = Rgba([100, 255, 100, 255]);
pub const HEAD_OUTLINE: Rgba<u8> = Rgba([50, 200, 50, 255]);
pub const EYE_FILL: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const MOUTH_FILL: Rgba<u8> = Rgba([50, 50, 50, 255]);

/// Shape instructions for one face, relative to a square canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceLayout {
    pub size: u32,
    pub head: Ellipse,
    pub left_eye: Ellipse,
    pub right_eye: Ellipse,
    pub mouth: Ellipse,
}

impl FaceLayout {
    /// Shapes in draw order; later ones land on top
    pub fn shapes(&self) -> [Ellipse; 4] {
        [self.head, self.left_eye, self.right_eye, self.mouth]
    }
}

/// `2 * size / 3`, multiplied before dividing. Widened so it holds for every u32.
fn two_thirds(size: u32) -> u32 {
    (2 * u64::from(size) / 3) as u32
}

/// Compute the face layout for a `size` x `size` canvas.
///
/// Every division is floor division applied exactly where written:
/// `2 * size / 3` multiplies before dividing, and `size / 3 - eye_size / 2`
/// floors both quotients before subtracting.
pub fn face_layout(size: u32) -> Result<FaceLayout, FaceError> {
    if size < MIN_FACE_SIZE {
        return Err(FaceError::SizeTooSmall(size));
    }

    let head = Ellipse {
        bbox: BoundingBox::new(
            HEAD_MARGIN,
            HEAD_MARGIN,
            size - HEAD_MARGIN,
            size - HEAD_MARGIN,
        ),
        fill: HEAD_FILL,
        outline: Some(Outline {
            color: HEAD_OUTLINE,
            width: HEAD_OUTLINE_WIDTH,
        }),
    };

    // Eyes
    let eye_size = size / 6;
    let left_eye_x = size / 3 - eye_size / 2;
    let right_eye_x = two_thirds(size) - eye_size / 2;
    let eye_y = size / 3;

    let eye = |x: u32| Ellipse {
        bbox: BoundingBox::new(x, eye_y, x + eye_size, eye_y + eye_size),
        fill: EYE_FILL,
        outline: None,
    };

    // Mouth
    let mouth_width = size / 8;
    let mouth_height = size / 16;
    let mouth_x = size / 2 - mouth_width / 2;
    let mouth_y = two_thirds(size);

    let mouth = Ellipse {
        bbox: BoundingBox::new(
            mouth_x,
            mouth_y,
            mouth_x + mouth_width,
            mouth_y + mouth_height,
        ),
        fill: MOUTH_FILL,
        outline: None,
    };

    let layout = FaceLayout {
        size,
        head,
        left_eye: eye(left_eye_x),
        right_eye: eye(right_eye_x),
        mouth,
    };
    log::trace!(
        "face layout for size {}: eyes {}px, mouth {}x{}px: {:?}",
        size,
        layout.left_eye.bbox.width(),
        layout.mouth.bbox.width(),
        layout.mouth.bbox.height(),
        layout
    );

    Ok(layout)
}

/// Draw every shape of `layout` onto `surface` in draw order
pub fn paint_face<S: Surface>(surface: &mut S, layout: &FaceLayout) {
    let (width, height) = surface.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    if (width, height) != (layout.size, layout.size) {
        log::warn!(
            "painting a {0}x{0} face on a {1}x{2} surface",
            layout.size,
            width,
            height
        );
    }

    let bounds = BoundingBox::new(0, 0, width - 1, height - 1);
    let names = ["head", "left eye", "right eye", "mouth"];
    for (name, shape) in names.iter().zip(layout.shapes().iter()) {
        log::debug!("drawing {} at {:?}", name, shape.bbox.as_array());
        if !bounds.contains(&shape.bbox) {
            log::warn!("{} extends past the surface and will be clipped", name);
        }
        surface.draw_ellipse(shape);
    }
}

/// Render the alien face onto a fresh transparent `size` x `size` canvas
pub fn generate_face(size: u32) -> Result<RgbaImage, FaceError> {
    let layout = face_layout(size)?;
    let mut img = <RgbaImage as Surface>::transparent(size, size);
    paint_face(&mut img, &layout);
    Ok(img)
}
