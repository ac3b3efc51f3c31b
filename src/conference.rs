// SPDX-License-Identifier: MPL-2.0
//! Fixed conference content: talks, event details, venue and the
//! "More Info" blurbs.
//!
//! The content is published once per edition and is not localized.

/// A scheduled talk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Talk {
    pub title: &'static str,
    pub speaker: &'static str,
    pub time: &'static str,
    pub summary: &'static str,
}

/// Talks in programme order. Never empty.
pub const TALKS: &[Talk] = &[
    Talk {
        title: "The Art of Underwater Basket Weaving",
        speaker: "John Doe",
        time: "10:00 AM",
        summary: "A deep dive into the history and techniques of underwater basket weaving.",
    },
    Talk {
        title: "Modern Basket Weaving Materials",
        speaker: "Jane Smith",
        time: "11:00 AM",
        summary: "Exploring new and sustainable materials for basket weaving.",
    },
    Talk {
        title: "Basket Weaving for Fun and Profit",
        speaker: "Peter Jones",
        time: "1:00 PM",
        summary: "How to turn your hobby into a successful business.",
    },
];

/// A labelled line in the event details list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDetail {
    pub label: &'static str,
    pub value: &'static str,
}

pub const EVENT_DETAILS: &[EventDetail] = &[
    EventDetail {
        label: "Date",
        value: "1st - 3rd December 2025",
    },
    EventDetail {
        label: "Time",
        value: "9:00 AM - 5:00 PM",
    },
    EventDetail {
        label: "Venue",
        value: "Ngee Ann Polytechnic Convention Centre",
    },
    EventDetail {
        label: "Address",
        value: "535 Clementi Rd, Singapore 599489",
    },
];

/// Where the conference takes place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Venue {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Width and height of the area shown on the map, in metres.
    pub span_metres: f64,
}

pub const VENUE: Venue = Venue {
    name: "Ngee Ann Polytechnic",
    latitude: 1.332,
    longitude: 103.774,
    span_metres: 1000.0,
};

impl Venue {
    /// Coordinates formatted for captions, e.g. `1.3320° N, 103.7740° E`.
    #[must_use]
    pub fn coordinates_label(&self) -> String {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        format!(
            "{:.4}° {ns}, {:.4}° {ew}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }
}

/// A titled paragraph on the "More Info" screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoBlurb {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const MORE_INFO_INTRO: &str = "Welcome to BasketWeavingCon 2025";

pub const MORE_INFO_BLURBS: &[InfoBlurb] = &[
    InfoBlurb {
        title: "Hydration Strategy",
        detail: "Complimentary pandan-infused water stations will be refreshed every odd hour. Bring your own eco-friendly tumbler to unlock the secret durian-cucumber spritzer option.",
    },
    InfoBlurb {
        title: "Workshop Dress Code",
        detail: "Loose linen encouraged; synthetic fibres may eerily whistle during underwater demos. Flip-flops acceptable only if they match your loom.",
    },
    InfoBlurb {
        title: "Late Night Loom Lounge",
        detail: "From 9 PM, join fellow weavers for experimental basket jazz, glow-in-the-dark reeds, and a karaoke segment featuring nothing but weaving puns.",
    },
    InfoBlurb {
        title: "Official Snack Pairing",
        detail: "Day 1: kaya toast flight. Day 2: otah sliders. Day 3: a mystery dessert rumoured to be woven entirely from gula melaka.",
    },
    InfoBlurb {
        title: "Secret Achievement",
        detail: "Scan three QR codes hidden around campus to unlock a limited-edition badge titled 'Thread Head Supreme'.",
    },
];

pub const MORE_INFO_FOOTER: &str =
    "Need something even more specific? Tap the paper plane to holler at the organisers.";

/// `mailto:` URL for the feedback action.
pub const FEEDBACK_MAILTO: &str =
    "mailto:feedback@basketweavingcon.sg?subject=Feedback%20for%20BasketWeavingCon";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn talks_are_not_empty() {
        assert_eq!(TALKS.len(), 3);
        assert_eq!(TALKS[0].speaker, "John Doe");
    }

    #[test]
    fn feedback_mailto_has_no_raw_spaces() {
        assert!(FEEDBACK_MAILTO.starts_with("mailto:feedback@basketweavingcon.sg?"));
        assert!(!FEEDBACK_MAILTO.contains(' '));
    }

    #[test]
    fn venue_coordinates_label() {
        assert_eq!(VENUE.coordinates_label(), "1.3320° N, 103.7740° E");
    }

    #[test]
    fn event_details_cover_date_time_and_place() {
        let labels: Vec<_> = EVENT_DETAILS.iter().map(|d| d.label).collect();
        assert_eq!(labels, ["Date", "Time", "Venue", "Address"]);
    }
}
