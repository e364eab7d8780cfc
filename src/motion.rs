//! Entrance animations expressed as CSS transitions.
//!
//! A [`Motion`] describes where an element starts (its hidden [`Frame`]) and how long it takes to
//! settle into the identity frame. The browser does the interpolation: the component only swaps
//! the inline style from [`Motion::style`]`(false)` to [`Motion::style`]`(true)` once the element
//! has been seen.

/// A snapshot of the animatable properties of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    pub x: i32,
    pub y: i32,
    pub scale: f32,
    pub rotate: i32,
}

impl Frame {
    /// Fully visible and untransformed.
    pub const IDENTITY: Frame = Frame {
        opacity: 1.0,
        x: 0,
        y: 0,
        scale: 1.0,
        rotate: 0,
    };

    fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            self.x, self.y, self.scale, self.rotate
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    /// Overshoots slightly before settling.
    Spring,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseOut => "cubic-bezier(0.22, 1, 0.36, 1)",
            Easing::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub hidden: Frame,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Motion {
    pub const fn new(hidden: Frame, duration_ms: u32) -> Self {
        Self {
            hidden,
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    /// Plain fade in.
    pub const FADE: Motion = Motion::new(
        Frame {
            opacity: 0.0,
            ..Frame::IDENTITY
        },
        600,
    );

    /// Default item entrance: rise 30px while fading in.
    pub const RISE: Motion = Motion::new(
        Frame {
            opacity: 0.0,
            y: 30,
            ..Frame::IDENTITY
        },
        600,
    );

    /// Shorter rise used for text blocks inside an already revealed section.
    pub const LIFT: Motion = Motion::new(
        Frame {
            opacity: 0.0,
            y: 20,
            ..Frame::IDENTITY
        },
        600,
    );

    pub const HERO: Motion = Motion::new(
        Frame {
            opacity: 0.0,
            y: 50,
            ..Frame::IDENTITY
        },
        800,
    );

    pub const CARD: Motion = Motion::new(
        Frame {
            opacity: 0.0,
            y: 40,
            scale: 0.95,
            ..Frame::IDENTITY
        },
        600,
    );

    /// Badge pop: grow from nothing while spinning half a turn.
    pub const POP: Motion = Motion::new(
        Frame {
            scale: 0.0,
            rotate: -180,
            ..Frame::IDENTITY
        },
        600,
    )
    .with_easing(Easing::Spring);

    /// Appear from a point, used for small round buttons.
    pub const GROW: Motion = Motion::new(
        Frame {
            opacity: 0.0,
            scale: 0.0,
            ..Frame::IDENTITY
        },
        400,
    );

    /// Settle from a slight zoom, used for portraits.
    pub const ZOOM: Motion = Motion::new(
        Frame {
            scale: 1.2,
            ..Frame::IDENTITY
        },
        800,
    );

    /// Header drop in on first mount.
    pub const DROP: Motion = Motion::new(
        Frame {
            opacity: 0.0,
            y: -100,
            ..Frame::IDENTITY
        },
        600,
    );

    /// Slide in horizontally from `x` pixels away.
    pub const fn slide_x(x: i32, duration_ms: u32) -> Self {
        Motion::new(
            Frame {
                opacity: 0.0,
                x,
                ..Frame::IDENTITY
            },
            duration_ms,
        )
    }

    /// Slide in vertically from `y` pixels away.
    pub const fn slide_y(y: i32, duration_ms: u32) -> Self {
        Motion::new(
            Frame {
                opacity: 0.0,
                y,
                ..Frame::IDENTITY
            },
            duration_ms,
        )
    }

    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Pushes the start back by `extra_ms` on top of any existing delay.
    pub const fn delayed_by(mut self, extra_ms: u32) -> Self {
        self.delay_ms += extra_ms;
        self
    }

    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Inline style for the element in its hidden or settled state.
    pub fn style(&self, visible: bool) -> String {
        let frame = if visible {
            Frame::IDENTITY
        } else {
            self.hidden
        };
        let timing = format!(
            "{}ms {} {}ms",
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        );
        format!(
            "opacity: {}; transform: {}; transition: opacity {timing}, transform {timing};",
            frame.opacity,
            frame.transform()
        )
    }
}

/// Delays siblings so they enter one after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children_ms: u32,
    pub stagger_children_ms: u32,
}

impl Stagger {
    /// Section containers: wait 300ms, then 100ms between children.
    pub const CONTAINER: Stagger = Stagger {
        delay_children_ms: 300,
        stagger_children_ms: 100,
    };

    pub const fn new(delay_children_ms: u32, stagger_children_ms: u32) -> Self {
        Self {
            delay_children_ms,
            stagger_children_ms,
        }
    }

    pub fn delay(&self, index: usize) -> u32 {
        self.delay_children_ms + self.stagger_children_ms * index as u32
    }
}

/// Horizontal offset for zig-zag layouts: even rows come from the left, odd rows from the right.
pub fn alternate(index: usize, magnitude: i32) -> i32 {
    if index % 2 == 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Inline style for an infinitely looping CSS keyframe animation.
pub fn loop_style(duration_ms: u32, delay_ms: u32) -> String {
    format!("animation-duration: {duration_ms}ms; animation-delay: {delay_ms}ms;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delays() {
        let s = Stagger::CONTAINER;
        assert_eq!(s.delay(0), 300);
        assert_eq!(s.delay(1), 400);
        assert_eq!(s.delay(5), 800);

        let badges = Stagger::new(800, 100);
        assert_eq!(badges.delay(3), 1100);
    }

    #[test]
    fn test_hidden_style_uses_offsets() {
        let style = Motion::CARD.style(false);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translate(0px, 40px) scale(0.95) rotate(0deg)"));
    }

    #[test]
    fn test_visible_style_is_identity() {
        let style = Motion::POP.with_delay(500).style(true);
        assert!(style.starts_with("opacity: 1;"));
        assert!(style.contains("translate(0px, 0px) scale(1) rotate(0deg)"));
        assert!(style.contains(&format!("600ms {} 500ms", Easing::Spring.css())));
    }

    #[test]
    fn test_delay_does_not_change_frames() {
        let delayed = Motion::RISE.with_delay(900);
        assert_eq!(delayed.hidden, Motion::RISE.hidden);
        assert_eq!(delayed.duration_ms, Motion::RISE.duration_ms);
        assert_eq!(delayed.delay_ms, 900);
        assert_eq!(Motion::RISE.delay_ms, 0);
        assert_eq!(delayed.delayed_by(100).delay_ms, 1000);
    }

    #[test]
    fn test_alternate_sides() {
        assert_eq!(alternate(0, 100), -100);
        assert_eq!(alternate(1, 100), 100);
        assert_eq!(alternate(4, 50), -50);

        let slide = Motion::slide_x(alternate(3, 50), 800);
        assert!(slide.style(false).contains("translate(50px, 0px)"));
    }

    #[test]
    fn test_loop_style() {
        assert_eq!(
            loop_style(2000, 400),
            "animation-duration: 2000ms; animation-delay: 400ms;"
        );
    }
}
