use crate::models::snapshot::ImageSnapshot;

/// Load phase of one page image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePhase {
    /// Not yet scrolled into view; still being watched.
    Pending,
    /// First intersection seen; fading in until the host reports the load done.
    FadingIn,
    /// Load complete, fully visible.
    Visible,
}

#[derive(Debug)]
struct ImageState {
    needs_lazy_attr: bool,
    phase: ImagePhase,
}

/// Tracks which images need a `loading="lazy"` attribute and the one-shot
/// fade-in of each image as it first intersects the viewport.
#[derive(Debug)]
pub struct ImageTracker {
    images: Vec<ImageState>,
}

impl ImageTracker {
    pub fn new(images: &[ImageSnapshot]) -> Self {
        ImageTracker {
            images: images
                .iter()
                .map(|img| ImageState {
                    needs_lazy_attr: !img.has_loading_attr,
                    phase: ImagePhase::Pending,
                })
                .collect(),
        }
    }

    /// Indices of images that should get `loading="lazy"` added: exactly
    /// those without a native loading attribute.
    pub fn lazy_candidates(&self) -> Vec<usize> {
        self.images
            .iter()
            .enumerate()
            .filter(|(_, state)| state.needs_lazy_attr)
            .map(|(i, _)| i)
            .collect()
    }

    /// Report the first intersection of image `index`. Returns true exactly
    /// once per image: the host starts the fade and stops watching it.
    /// Out-of-range indices are no-ops.
    pub fn on_intersection(&mut self, index: usize) -> bool {
        match self.images.get_mut(index) {
            Some(state) if state.phase == ImagePhase::Pending => {
                state.phase = ImagePhase::FadingIn;
                true
            }
            _ => false,
        }
    }

    /// Report that image `index` finished loading, completing its fade.
    /// A load report for an image never seen intersecting is ignored; the
    /// fade only completes once it has started.
    pub fn on_loaded(&mut self, index: usize) {
        if let Some(state) = self.images.get_mut(index) {
            if state.phase == ImagePhase::FadingIn {
                state.phase = ImagePhase::Visible;
            }
        }
    }

    pub fn phase(&self, index: usize) -> Option<ImagePhase> {
        self.images.get(index).map(|state| state.phase)
    }
}
