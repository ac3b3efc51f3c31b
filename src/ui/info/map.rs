// SPDX-License-Identifier: MPL-2.0
//! Static venue map drawn on a canvas.
//!
//! No tiles are fetched. The map shows a street grid scaled to the venue's
//! region span, a stylised river, and a pin on the venue.

use crate::conference::Venue;
use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{mouse, Point, Rectangle, Renderer, Theme};

/// Spacing between drawn streets, in metres.
const STREET_SPACING_M: f64 = 125.0;

/// Canvas program rendering the map around `venue`.
#[derive(Debug, Clone, Copy)]
pub struct VenueMap {
    pub venue: Venue,
}

impl VenueMap {
    #[must_use]
    pub fn new(venue: Venue) -> Self {
        Self { venue }
    }

    /// Streets per axis across the region span.
    fn street_count(&self) -> usize {
        ((self.venue.span_metres / STREET_SPACING_M).round() as usize).max(1)
    }
}

impl<Message> canvas::Program<Message> for VenueMap {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();

        frame.fill_rectangle(Point::ORIGIN, size, palette::MAP_LAND);

        let river = Path::new(|b| {
            b.move_to(Point::new(0.0, size.height * 0.78));
            b.bezier_curve_to(
                Point::new(size.width * 0.3, size.height * 0.62),
                Point::new(size.width * 0.6, size.height * 0.98),
                Point::new(size.width, size.height * 0.82),
            );
        });
        frame.stroke(
            &river,
            Stroke::default()
                .with_color(palette::MAP_WATER)
                .with_width(14.0),
        );

        let streets = self.street_count();
        let street = Stroke::default().with_color(palette::MAP_ROAD).with_width(3.0);
        for i in 1..streets {
            let t = i as f32 / streets as f32;
            frame.stroke(
                &Path::line(Point::new(size.width * t, 0.0), Point::new(size.width * t, size.height)),
                street,
            );
            frame.stroke(
                &Path::line(Point::new(0.0, size.height * t), Point::new(size.width, size.height * t)),
                street,
            );
        }

        // The region is centred on the venue.
        let centre = Point::new(size.width / 2.0, size.height / 2.0);
        frame.fill(
            &Path::circle(centre, sizing::MAP_PIN_RADIUS),
            palette::MAP_PIN,
        );
        frame.stroke(
            &Path::circle(centre, sizing::MAP_PIN_RADIUS),
            Stroke::default().with_color(palette::WHITE).with_width(2.0),
        );
        frame.fill_text(canvas::Text {
            content: self.venue.name.to_string(),
            position: Point::new(centre.x + sizing::MAP_PIN_RADIUS * 1.5, centre.y - 8.0),
            color: palette::GRAY_900,
            size: 14.0.into(),
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }
}
