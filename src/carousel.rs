//! Circular window selection for carousels.
//!
//! A carousel shows a fixed number of items out of an ordered sequence,
//! starting at the current index and wrapping around the end.

use thiserror::Error;

/// Default number of items visible at the same time.
pub const DEFAULT_VISIBLE_COUNT: usize = 3;

const SIDE_SCALE: f32 = 0.6;
const SIDE_OPACITY: f32 = 0.4;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    #[error("Carousel has no items")]
    EmptyInput,
    #[error("Visible count must be at least 1")]
    ZeroVisibleCount,
}

/// Returns the `visible_count` items starting at `current_index`, wrapping
/// around the end of `items`.
///
/// # Errors
///
/// Returns [`CarouselError::EmptyInput`] if `items` is empty.
pub fn select_window<T>(
    items: &[T],
    current_index: usize,
    visible_count: usize,
) -> Result<Vec<&T>, CarouselError> {
    if items.is_empty() {
        return Err(CarouselError::EmptyInput);
    }
    Ok(window(items, current_index, visible_count))
}

/// Moves to the next index, looping back to the start.
pub fn advance(current_index: usize, len: usize) -> Result<usize, CarouselError> {
    if len == 0 {
        return Err(CarouselError::EmptyInput);
    }
    Ok(next_index(current_index, len))
}

/// Moves to the previous index, looping to the end when at the start.
pub fn retreat(current_index: usize, len: usize) -> Result<usize, CarouselError> {
    if len == 0 {
        return Err(CarouselError::EmptyInput);
    }
    Ok(previous_index(current_index, len))
}

/// Normalises a possibly negative or out-of-range offset into `0..len`.
pub fn wrap_index(index: isize, len: usize) -> Result<usize, CarouselError> {
    if len == 0 {
        return Err(CarouselError::EmptyInput);
    }
    Ok(wrap_signed(index, len))
}

// The helpers below require `len > 0` and never overflow, even for
// `len == usize::MAX`.

/// `(start + offset) % len` without the intermediate sum.
fn wrapping_offset(start: usize, offset: usize, len: usize) -> usize {
    let start = start % len;
    let offset = offset % len;
    let room = len - start;
    if offset < room {
        start + offset
    } else {
        offset - room
    }
}

fn next_index(current_index: usize, len: usize) -> usize {
    wrapping_offset(current_index, 1, len)
}

fn previous_index(current_index: usize, len: usize) -> usize {
    match current_index % len {
        0 => len - 1,
        i => i - 1,
    }
}

fn wrap_signed(index: isize, len: usize) -> usize {
    let magnitude = index.unsigned_abs() % len;
    if index >= 0 || magnitude == 0 {
        magnitude
    } else {
        len - magnitude
    }
}

fn window<T>(items: &[T], current_index: usize, visible_count: usize) -> Vec<&T> {
    let len = items.len();
    (0..visible_count)
        .map(|offset| &items[wrapping_offset(current_index, offset, len)])
        .collect()
}

/// Position of the focal (centered) item within a window.
pub fn focal_index(visible_count: usize) -> usize {
    visible_count / 2
}

/// How non-focal items are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarouselStyle {
    /// Side items are shrunk around the focal one.
    #[default]
    Round,
    /// All items keep their full size.
    Flat,
}

/// Scale and opacity for one slot of the visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemEmphasis {
    pub scale: f32,
    pub opacity: f32,
}

/// Carousel state: items, current position and display settings.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    current_index: usize,
    visible_count: usize,
    style: CarouselStyle,
}

impl<T> Carousel<T> {
    /// Creates a carousel positioned on the first item.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::EmptyInput`] if `items` is empty.
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::EmptyInput);
        }
        Ok(Self {
            items,
            current_index: 0,
            visible_count: DEFAULT_VISIBLE_COUNT,
            style: CarouselStyle::default(),
        })
    }

    pub fn with_visible_count(mut self, visible_count: usize) -> Result<Self, CarouselError> {
        if visible_count == 0 {
            return Err(CarouselError::ZeroVisibleCount);
        }
        self.visible_count = visible_count;
        Ok(self)
    }

    pub fn with_style(mut self, style: CarouselStyle) -> Self {
        self.style = style;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn style(&self) -> CarouselStyle {
        self.style
    }

    /// Advances by one item and returns the new index.
    pub fn advance(&mut self) -> usize {
        self.current_index = next_index(self.current_index, self.items.len());
        self.current_index
    }

    /// Steps back by one item and returns the new index.
    pub fn retreat(&mut self) -> usize {
        self.current_index = previous_index(self.current_index, self.items.len());
        self.current_index
    }

    /// Jumps to `index`, wrapped into range.
    pub fn go_to(&mut self, index: isize) -> usize {
        self.current_index = wrap_signed(index, self.items.len());
        self.current_index
    }

    /// Items in the visible window, in display order.
    pub fn visible_items(&self) -> Vec<&T> {
        window(&self.items, self.current_index, self.visible_count)
    }

    /// The item drawn at the center of the window.
    pub fn focal_item(&self) -> &T {
        let offset = focal_index(self.visible_count);
        &self.items[wrapping_offset(self.current_index, offset, self.items.len())]
    }

    /// One position indicator per item; `true` marks the current index.
    pub fn indicators(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.items.len()).map(move |i| i == self.current_index)
    }

    /// Display emphasis for the window slot at `slot`.
    pub fn emphasis(&self, slot: usize) -> ItemEmphasis {
        if slot == focal_index(self.visible_count) {
            return ItemEmphasis {
                scale: 1.0,
                opacity: 1.0,
            };
        }
        let scale = match self.style {
            CarouselStyle::Round => SIDE_SCALE,
            CarouselStyle::Flat => 1.0,
        };
        ItemEmphasis {
            scale,
            opacity: SIDE_OPACITY,
        }
    }
}
