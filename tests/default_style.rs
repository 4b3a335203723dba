//! Process-wide default style switching.
//!
//! Kept in a test binary of its own since it mutates process-wide state that every `Display`
//! call reads.

#![cfg(feature = "std")]

use std::{sync, thread};

use rfc4122::format::{self, Style};
use rfc4122::{set_default_style, Uuid, NAMESPACE_URL};

/// Serializes tests in this binary as they share the default style
static LOCK: sync::Mutex<()> = sync::Mutex::new(());

fn lock() -> sync::MutexGuard<'static, ()> {
    LOCK.lock().unwrap_or_else(sync::PoisonError::into_inner)
}

/// Applies transient style to next call only
#[test]
fn applies_transient_style_to_next_call_only() {
    let _guard = lock();
    set_default_style(Style::Hyphenated, true);

    set_default_style(Style::Braced, false);
    assert_eq!(
        NAMESPACE_URL.to_string(),
        "{6ba7b811-9dad-11d1-80b4-00c04fd430c8}"
    );
    assert_eq!(
        NAMESPACE_URL.to_string(),
        "6ba7b811-9dad-11d1-80b4-00c04fd430c8"
    );

    // explicit styles leave a pending one-shot style in place
    set_default_style(Style::Simple, false);
    assert_eq!(
        format::to_string(&NAMESPACE_URL, Some(Style::Urn)),
        "urn:uuid:6ba7b811-9dad-11d1-80b4-00c04fd430c8"
    );
    assert_eq!(
        format::to_string(&NAMESPACE_URL, None),
        "6ba7b8119dad11d180b400c04fd430c8"
    );
    assert_eq!(format::default_style(), Style::Hyphenated);
}

/// Keeps permanent style until changed
#[test]
fn keeps_permanent_style_until_changed() {
    let _guard = lock();
    set_default_style(Style::GoId, true);
    assert_eq!(format::default_style(), Style::GoId);
    for _ in 0..3 {
        assert_eq!(
            NAMESPACE_URL.to_string(),
            "[6BA7B811-9DAD-11d1-80B4-00c04fd430c8]"
        );
    }

    // a permanent switch drops any pending one-shot style
    set_default_style(Style::Simple, false);
    set_default_style(Style::Parenthesized, true);
    assert_eq!(
        String::from(NAMESPACE_URL),
        "(6ba7b811-9dad-11d1-80b4-00c04fd430c8)"
    );

    // explicit encodings ignore the default
    assert_eq!(
        &NAMESPACE_URL.encode() as &str,
        "6ba7b811-9dad-11d1-80b4-00c04fd430c8"
    );
    set_default_style(Style::Hyphenated, true);
}

/// Never tears output under concurrent switching
#[test]
fn never_tears_output_under_concurrent_switching() {
    let _guard = lock();
    let uuid = Uuid::from(0x017f22e2_79b0_7cc3_98c4_dc0c0c07398f_u128);
    let valid: Vec<String> = [
        Style::Hyphenated,
        Style::Simple,
        Style::Braced,
        Style::BracedSimple,
        Style::Parenthesized,
        Style::Urn,
        Style::GoId,
    ]
    .into_iter()
    .map(|style| format::to_string(&uuid, Some(style)))
    .collect();

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..10_000 {
                let style = if i % 2 == 0 { Style::Urn } else { Style::Simple };
                set_default_style(style, i % 3 == 0);
            }
        });
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..10_000 {
                    let text = uuid.to_string();
                    assert!(valid.contains(&text), "torn output: {}", text);
                }
            });
        }
    });
    set_default_style(Style::Hyphenated, true);
}
