//! Contains the Viewport struct, which describes the relationship
//! between the window's integral pixel grid and the rectangular slice
//! of the complex plane it displays: a center point, the slice's width
//! and height in real units, and the window's width and height in
//! pixels.

use num::Complex;

/// Invalid viewport geometry, caught at construction time.
#[derive(Copy, Clone, Debug, Fail, PartialEq)]
pub enum ViewportError {
    /// A zero-pixel window has nothing to map onto the plane.
    #[fail(display = "Window dimensions must be greater than 0.")]
    EmptyWindow,
    /// A zero or negative plane slice leaves nothing to render.
    #[fail(display = "Plane dimensions must be greater than 0.")]
    EmptyPlane,
}

/// The rectangular slice of the complex plane under view and the pixel
/// resolution it maps to.  Pixel (0, 0) is the upper left corner of
/// the window, which corresponds to the *maximum* imaginary value:
/// screen rows grow downward while the imaginary axis grows upward, so
/// the vertical mapping is inverted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// The point on the complex plane at the center of the window.
    pub center: Complex<f64>,
    /// Width of the visible slice, in real units.
    pub plane_width: f64,
    /// Height of the visible slice, in real units.
    pub plane_height: f64,
    /// Width of the window, in pixels.
    pub window_width: usize,
    /// Height of the window, in pixels.
    pub window_height: usize,
}

impl Viewport {
    /// Constructor.  Rejects empty windows and empty plane slices, so
    /// the mapping functions never divide by zero.
    pub fn new(
        center: Complex<f64>,
        plane_width: f64,
        plane_height: f64,
        window_width: usize,
        window_height: usize,
    ) -> Result<Viewport, ViewportError> {
        if window_width == 0 || window_height == 0 {
            return Err(ViewportError::EmptyWindow);
        }
        if plane_width <= 0.0 || plane_height <= 0.0 {
            return Err(ViewportError::EmptyPlane);
        }

        Ok(Viewport {
            center,
            plane_width,
            plane_height,
            window_width,
            window_height,
        })
    }

    /// Given the column and row of a pixel in the window, return the
    /// complex number at the equivalent location on the plane.
    ///
    /// The pixel index is normalized to [0, 1) across the window,
    /// recentered around the midpoint, and scaled by the plane extent:
    /// `re(x) = planeWidth · (x / windowWidth − 0.5) + center.re`, and
    /// vertically with the two terms swapped to flip the axis,
    /// `im(y) = planeHeight · (0.5 − y / windowHeight) + center.im`.
    pub fn pixel_to_point(&self, x: usize, y: usize) -> Complex<f64> {
        Complex::new(
            self.plane_width * ((x as f64) / (self.window_width as f64) - 0.5) + self.center.re,
            self.plane_height * (0.5 - (y as f64) / (self.window_height as f64)) + self.center.im,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_fails_on_empty_window() {
        let vp = Viewport::new(Complex::new(0.0, 0.0), 4.0, 3.0, 0, 600);
        assert_eq!(vp.unwrap_err(), ViewportError::EmptyWindow);
        let vp = Viewport::new(Complex::new(0.0, 0.0), 4.0, 3.0, 800, 0);
        assert_eq!(vp.unwrap_err(), ViewportError::EmptyWindow);
    }

    #[test]
    fn viewport_fails_on_empty_plane() {
        let vp = Viewport::new(Complex::new(0.0, 0.0), 0.0, 3.0, 800, 600);
        assert_eq!(vp.unwrap_err(), ViewportError::EmptyPlane);
        let vp = Viewport::new(Complex::new(0.0, 0.0), 4.0, -3.0, 800, 600);
        assert_eq!(vp.unwrap_err(), ViewportError::EmptyPlane);
    }

    #[test]
    fn upper_left_pixel_maps_to_upper_left_corner() {
        let vp = Viewport::new(Complex::new(1.0, -2.0), 4.0, 3.0, 800, 600).unwrap();
        let point = vp.pixel_to_point(0, 0);
        assert_eq!(point, Complex::new(1.0 - 2.0, -2.0 + 1.5));
    }

    #[test]
    fn center_pixel_maps_to_center_point() {
        let vp = Viewport::new(Complex::new(0.25, -0.75), 4.0, 3.0, 800, 600).unwrap();
        let point = vp.pixel_to_point(400, 300);
        assert!((point.re - 0.25).abs() < 1e-12);
        assert!((point.im - -0.75).abs() < 1e-12);
    }

    #[test]
    fn vertical_axis_is_inverted() {
        let vp = Viewport::new(Complex::new(0.0, 0.0), 4.0, 3.0, 800, 600).unwrap();
        let top = vp.pixel_to_point(0, 0);
        let bottom = vp.pixel_to_point(0, 599);
        assert!(top.im > bottom.im);
        assert_eq!(top.im, 1.5);
    }
}
