use leptos::{context::Provider, either::Either, html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::{Motion, Stagger};

/// Shared with [`RevealItem`] children so they enter together with their container.
#[derive(Debug, Clone, Copy)]
struct RevealGroup {
    visible: Signal<bool>,
    stagger: Stagger,
    offset_ms: u32,
}

/// Provided by a [`RevealItem`] to anything revealed inside it.
#[derive(Debug, Clone, Copy)]
struct RevealGate {
    visible: Signal<bool>,
    delay_ms: u32,
}

/// A reveal nested in an item only shows once the item itself is showing.
fn gated(own: bool, enclosing: Option<bool>) -> bool {
    own && enclosing.unwrap_or(true)
}

/// Nested reveals start counting their own delay after the enclosing item's.
fn gate_delay(gate: Option<RevealGate>) -> u32 {
    gate.map(|gate| gate.delay_ms).unwrap_or_default()
}

/// Animates its content in the first time it scrolls into view.
///
/// With `stagger` set, nested [`RevealItem`]s are sequenced off this container's visibility
/// instead of their own. `margin` shrinks or grows the viewport used for the intersection test,
/// e.g. `"-100px"` waits until the element is well inside the screen.
#[component]
pub fn Reveal(
    #[prop(optional)] motion: Option<Motion>,
    #[prop(optional)] stagger: Option<Stagger>,
    #[prop(optional)] margin: Option<&'static str>,
    #[prop(default = true)] once: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (in_view, set_in_view) = signal(false);

    let options =
        UseIntersectionObserverOptions::default().root_margin(margin.unwrap_or("0px").to_string());
    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_in_view.set(true);
            } else if !once {
                set_in_view.set(false);
            }
        },
        options,
    );

    let gate = use_context::<RevealGate>();
    let visible = Signal::derive(move || {
        gated(in_view.get(), gate.map(|gate| gate.visible.get()))
    });
    let offset_ms = gate_delay(gate);
    let motion = motion.map(|m| m.delayed_by(offset_ms));

    let style = move || {
        motion
            .map(|m| m.style(visible.get()))
            .unwrap_or_default()
    };

    let content = match stagger {
        Some(stagger) => {
            let group = RevealGroup {
                visible,
                stagger,
                offset_ms,
            };
            Either::Left(view! { <Provider value=group>{children()}</Provider> })
        }
        None => Either::Right(children()),
    };

    view! {
        <div node_ref=target class=class style=style>
            {content}
        </div>
    }
}

/// The `index`-th child of a staggered [`Reveal`].
#[component]
pub fn RevealItem(
    motion: Motion,
    index: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let group = expect_context::<RevealGroup>();
    let delay_ms = group.offset_ms + group.stagger.delay(index);
    let motion = motion.delayed_by(delay_ms);
    let style = move || motion.style(group.visible.get());

    let gate = RevealGate {
        visible: group.visible,
        delay_ms: motion.delay_ms,
    };

    view! {
        <div class=class style=style>
            <Provider value=gate>{children()}</Provider>
        </div>
    }
}

/// Animates its content in right after it is first mounted, regardless of scroll position.
#[component]
pub fn Entrance(
    motion: Motion,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    // two frames so the hidden style is painted before the transition starts
    Effect::new(move |_| {
        request_animation_frame(move || {
            request_animation_frame(move || set_visible.set(true));
        });
    });

    let style = move || motion.style(visible.get());

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_reveal_waits_for_enclosing_item() {
        // in view, but the item around it has not started yet
        assert!(!gated(true, Some(false)));
        assert!(!gated(false, Some(true)));
        assert!(gated(true, Some(true)));

        // top-level reveals only answer to their own viewport test
        assert!(gated(true, None));
        assert!(!gated(false, None));
    }

    #[test]
    fn test_nested_delay_starts_after_item() {
        assert_eq!(gate_delay(None), 0);

        let item = Motion::RISE.delayed_by(Stagger::CONTAINER.delay(2));
        let text = Motion::LIFT.with_delay(200).delayed_by(item.delay_ms);
        assert_eq!(item.delay_ms, 500);
        assert_eq!(text.delay_ms, 700);
    }
}
