use serde::{Deserialize, Serialize};

use crate::constants::ASPECT_RATIO;
use crate::types::SurfaceSize;

/// Canvas geometry after a resize.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Layout size, before pixel-ratio scaling.
    pub css_width: f64,
    pub css_height: f64,
    /// Scale applied to the drawing context.
    pub pixel_ratio: f64,
}

impl Viewport {
    /// Backing-store size: the layout size times the pixel ratio. This is
    /// what the floor is measured against.
    pub fn surface(&self) -> SurfaceSize {
        SurfaceSize {
            width: self.css_width * self.pixel_ratio,
            height: self.css_height * self.pixel_ratio,
        }
    }
}

/// Largest 16:9 box inside the available space. Width-bound unless that
/// would overflow the height.
pub fn fit_viewport(available_width: f64, available_height: f64, pixel_ratio: f64) -> Viewport {
    let mut css_width = available_width;
    let mut css_height = available_width / ASPECT_RATIO;

    if css_height > available_height {
        css_height = available_height;
        css_width = available_height * ASPECT_RATIO;
    }

    let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    };

    Viewport {
        css_width,
        css_height,
        pixel_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_window_is_height_bound() {
        let v = fit_viewport(2000.0, 720.0, 1.0);
        assert_eq!(v.css_height, 720.0);
        assert_eq!(v.css_width, 1280.0);
    }

    #[test]
    fn tall_window_is_width_bound() {
        let v = fit_viewport(1280.0, 1000.0, 1.0);
        assert_eq!(v.css_width, 1280.0);
        assert_eq!(v.css_height, 720.0);
    }

    #[test]
    fn pixel_ratio_scales_backing_store() {
        let v = fit_viewport(1280.0, 720.0, 2.0);
        assert_eq!(
            v.surface(),
            SurfaceSize {
                width: 2560.0,
                height: 1440.0
            }
        );
    }

    #[test]
    fn bad_pixel_ratio_falls_back_to_one() {
        assert_eq!(fit_viewport(1280.0, 720.0, 0.0).pixel_ratio, 1.0);
        assert_eq!(fit_viewport(1280.0, 720.0, f64::NAN).pixel_ratio, 1.0);
        assert_eq!(fit_viewport(1280.0, 720.0, -2.0).pixel_ratio, 1.0);
    }
}
