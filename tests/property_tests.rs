//! Property-based tests for classification and layout invariants.
//!
//! Tests validate:
//! 1. Text without a markup prefix classifies as plain
//! 2. Measuring is deterministic and never negative
//! 3. Appending entries never shrinks the measured height
//! 4. Painting advances exactly the measured height at any width

use proptest::prelude::*;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellArea;
use richlist::config::ResolvedConfig;
use richlist::listing::{measure, render};
use richlist::model::{Entry, ListingStyle, Rect, VideoSpec};
use richlist::parser::{classify, EmphasisTags};
use richlist::view::{ListingPalette, TerminalHost, TerminalSurface};
use std::path::Path;

// ===== Strategies =====

fn words() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,12}", 0..12).prop_map(|w| w.join(" "))
}

fn emphasized() -> impl Strategy<Value = String> {
    (words(), words(), words()).prop_map(|(a, b, c)| format!("{a} <b>{b}</b> {c}"))
}

fn entry() -> impl Strategy<Value = Entry> {
    prop_oneof![
        words().prop_map(Entry::Title),
        (words(), words()).prop_map(|(path, caption)| Entry::Image { path, caption }),
        Just(Entry::Gap),
        words().prop_map(Entry::Subtitle),
        (1u32..40, 1u32..12, 1u32..30)
            .prop_map(|(w, h, fps)| Entry::Video(VideoSpec::new("clips/none", w, h, fps))),
        words().prop_map(Entry::Bullet),
        emphasized().prop_map(Entry::Plain),
    ]
}

fn entries() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(entry(), 0..24)
}

fn host() -> TerminalHost {
    TerminalHost::new(
        Path::new("/nonexistent/richlist"),
        EmphasisTags::default(),
        ListingPalette::default(),
    )
}

fn style(host: &TerminalHost) -> ListingStyle {
    ResolvedConfig::default().listing_style(host.metrics())
}

// ===== Property 1: Classification =====

proptest! {
    #[test]
    fn unprefixed_text_is_plain(text in "[a-zA-Z0-9 .,]{0,60}") {
        prop_assert_eq!(classify(&text).unwrap(), Entry::Plain(text.clone()));
    }

    #[test]
    fn classify_never_panics(text in ".{0,80}") {
        let _ = classify(&text);
    }
}

// ===== Property 2-4: Layout =====

proptest! {
    #[test]
    fn measure_is_deterministic_and_non_negative(entries in entries(), width in 0u16..120) {
        let host = host();
        let style = style(&host);
        let first = measure(&entries, f32::from(width), &style, &host);
        let second = measure(&entries, f32::from(width), &style, &host);

        prop_assert_eq!(first, second);
        prop_assert!(first >= 0.0);
    }

    #[test]
    fn appending_never_shrinks_height(entries in entries(), width in 1u16..120) {
        let host = host();
        let style = style(&host);
        let mut previous = 0.0_f32;

        for end in 0..=entries.len() {
            let height = measure(&entries[..end], f32::from(width), &style, &host);
            prop_assert!(height >= previous, "prefix {} shrank from {} to {}", end, previous, height);
            previous = height;
        }
    }

    #[test]
    fn render_advance_equals_measure(entries in entries(), width in 1u16..120) {
        let mut host = host();
        let style = style(&host);
        let measured = measure(&entries, f32::from(width), &style, &host);

        let mut buffer = Buffer::empty(CellArea::new(0, 0, width, 40));
        let area = buffer.area;
        let mut surface = TerminalSurface::new(&mut host, &mut buffer, area);
        let advanced = render(&entries, Rect::new(0.0, 0.0, f32::from(width), 40.0), &style, &mut surface)
            .expect("terminal painting does not fail");

        prop_assert_eq!(advanced, measured);
    }
}
