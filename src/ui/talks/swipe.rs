// SPDX-License-Identifier: MPL-2.0
//! Mouse-drag swipe recognition.
//!
//! A press starts tracking, a release classifies the travel. Short or mostly
//! vertical drags are not swipes.

use super::pager::Swipe;
use iced::Point;

/// Tracks a drag from press to release.
#[derive(Debug, Clone, Default)]
pub struct SwipeGesture {
    /// Last known cursor position over the page.
    cursor: Option<Point>,

    /// Position where the drag started
    start_position: Option<Point>,
}

impl SwipeGesture {
    /// Records the cursor position.
    pub fn track(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    /// Starts a drag at the last known cursor position.
    pub fn start(&mut self) {
        self.start_position = self.cursor;
    }

    /// Forgets the drag and the cursor, e.g. when the cursor leaves the page.
    pub fn cancel(&mut self) {
        self.cursor = None;
        self.start_position = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_position.is_some()
    }

    /// Ends the drag and returns the recognised swipe, if any.
    pub fn finish(&mut self, threshold: f32) -> Option<Swipe> {
        let start = self.start_position.take()?;
        let end = self.cursor?;
        classify(start, end, threshold)
    }
}

/// Classifies the travel from `start` to `end`.
#[must_use]
pub fn classify(start: Point, end: Point, threshold: f32) -> Option<Swipe> {
    let delta_x = end.x - start.x;
    let delta_y = end.y - start.y;

    if delta_x.abs() < threshold || delta_x.abs() <= delta_y.abs() {
        return None;
    }
    Some(if delta_x < 0.0 {
        Swipe::Left
    } else {
        Swipe::Right
    })
}
