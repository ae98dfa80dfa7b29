// SPDX-License-Identifier: MPL-2.0
//! Framework-independent input events.
//!
//! The presentation layer translates native keyboard, pointer and touch
//! events into these values before handing them to the navigation core.

/// Keys the deck reacts to. Every other key is [`Key::Other`], which still
/// counts as user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Other,
}

/// Position of a touch contact in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Stage of a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// A user input relevant to navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key was pressed.
    Key(Key),
    /// A pointer click anywhere in the window.
    Click,
    /// The "previous" control was activated.
    PreviousControl,
    /// The "next" control was activated.
    NextControl,
    /// The position indicator for a slide was activated.
    Indicator(usize),
    /// A touch contact changed.
    ///
    /// `contacts` is the number of fingers on the surface after the change;
    /// `position` is the position of the contact that changed.
    Touch {
        phase: TouchPhase,
        contacts: usize,
        position: TouchPoint,
    },
}

impl InputEvent {
    /// Whether this event counts as deliberate user interaction, which
    /// permanently stops auto-advance.
    #[must_use]
    pub fn is_user_interaction(&self) -> bool {
        match self {
            Self::Key(_)
            | Self::Click
            | Self::PreviousControl
            | Self::NextControl
            | Self::Indicator(_) => true,
            Self::Touch { phase, .. } => *phase == TouchPhase::Started,
        }
    }
}
